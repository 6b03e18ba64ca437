//! Content stream rendering for pages.

use crate::colour::Colour;
use crate::page::FilledRect;
use pdf_writer::Content;

/// Renders filled rectangles to a PDF content stream.
///
/// All rectangles share a single graphics state block, and the fill / stroke colours
/// are only re-emitted when they change between rectangles.
pub(crate) fn render_contents(rects: &[FilledRect]) -> Vec<u8> {
    if rects.is_empty() {
        return Vec::default();
    }

    let mut content = Content::new();
    content.save_state();

    let mut current_colour: Option<Colour> = None;
    for filled in rects {
        if current_colour != Some(filled.colour) {
            let Colour { r, g, b } = filled.colour;
            content.set_fill_rgb(r, g, b);
            // outline in the fill colour so adjacent squares don't show hairline gaps
            content.set_stroke_rgb(r, g, b);
            current_colour = Some(filled.colour);
        }

        let rect = filled.rect;
        content.rect(
            rect.x1.into(),
            rect.y1.into(),
            rect.width().into(),
            rect.height().into(),
        );
        content.fill_nonzero_and_stroke();
    }

    content.restore_state();
    content.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colours;
    use crate::rect::Rect;
    use crate::units::Pt;

    fn square(x: f32, colour: Colour) -> FilledRect {
        FilledRect {
            rect: Rect {
                x1: Pt(x),
                y1: Pt(0.0),
                x2: Pt(x + 10.0),
                y2: Pt(10.0),
            },
            colour,
        }
    }

    fn count(haystack: &[u8], needle: &str) -> usize {
        String::from_utf8_lossy(haystack).matches(needle).count()
    }

    #[test]
    fn empty_contents_render_nothing() {
        assert!(render_contents(&[]).is_empty());
    }

    #[test]
    fn each_rect_is_filled_and_stroked() {
        let rendered = render_contents(&[
            square(0.0, colours::RED),
            square(10.0, colours::CYAN),
            square(20.0, colours::RED),
        ]);
        assert_eq!(count(&rendered, " re\n"), 3);
        assert_eq!(count(&rendered, "\nB\n"), 3);
        assert_eq!(count(&rendered, " rg\n"), 3);
        assert_eq!(count(&rendered, " RG\n"), 3);
    }

    #[test]
    fn repeated_colours_are_not_re_emitted() {
        let rendered = render_contents(&[
            square(0.0, colours::RED),
            square(10.0, colours::RED),
        ]);
        assert_eq!(count(&rendered, " re\n"), 2);
        assert_eq!(count(&rendered, " rg\n"), 1);
    }

    #[test]
    fn drawing_is_wrapped_in_a_saved_state() {
        let rendered = render_contents(&[square(0.0, colours::RED)]);
        let text = String::from_utf8_lossy(&rendered);
        assert!(text.starts_with("q\n"));
        assert!(text.trim_end().ends_with('Q'));
    }
}

use crate::colour::Colour;
use crate::content::render_contents;
use crate::layout::Margins;
use crate::pagesize::PageSize;
use crate::rect::Rect;
use crate::refs::{ObjectReferences, RefType};
use crate::units::*;
use crate::SheetError;
use pdf_writer::{Filter, Finish, Pdf, Ref};

/// A rectangle painted in a single colour, both filled and outlined, so that
/// neighbouring rectangles meet without a visible seam
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct FilledRect {
    pub rect: Rect,
    pub colour: Colour,
}

/// A single page in a document
#[derive(Debug)]
pub struct Page {
    /// The size of the page
    pub media_box: Rect,
    /// Where content can live, i.e. within the margins. Always inside the media box;
    /// margins that overlap collapse it to zero width or height.
    pub content_box: Rect,
    /// The rectangles on the page, drawn in order
    pub contents: Vec<FilledRect>,
}

fn clamp_pt(value: Pt, lo: Pt, hi: Pt) -> Pt {
    Pt(value.0.max(lo.0).min(hi.0))
}

impl Page {
    /// Create a new, empty page. If no margins are given, the content box covers
    /// the whole page.
    pub fn new(size: PageSize, margins: Option<Margins>) -> Page {
        let (width, height) = size;
        let margins = margins.unwrap_or_else(Margins::empty);

        let x1 = clamp_pt(margins.left, Pt(0.0), width);
        let y1 = clamp_pt(margins.bottom, Pt(0.0), height);
        Page {
            media_box: Rect {
                x1: Pt(0.0),
                y1: Pt(0.0),
                x2: width,
                y2: height,
            },
            content_box: Rect {
                x1,
                y1,
                x2: clamp_pt(width - margins.right, x1, width),
                y2: clamp_pt(height - margins.top, y1, height),
            },
            contents: Vec::default(),
        }
    }

    /// The (width, height) of the page
    pub fn size(&self) -> PageSize {
        (self.media_box.width(), self.media_box.height())
    }

    /// Add a filled and outlined rectangle to the page
    pub fn add_filled_rect(&mut self, rect: Rect, colour: Colour) {
        self.contents.push(FilledRect { rect, colour });
    }

    /// All filled rectangles on the page, in drawing order
    pub fn filled_rects(&self) -> impl Iterator<Item = &FilledRect> {
        self.contents.iter()
    }

    pub(crate) fn render(&self) -> Vec<u8> {
        render_contents(&self.contents)
    }

    pub(crate) fn write(
        &self,
        refs: &mut ObjectReferences,
        page_index: usize,
        parent: Ref,
        compress: bool,
        writer: &mut Pdf,
    ) -> Result<(), SheetError> {
        let id = refs
            .get(RefType::Page(page_index))
            .ok_or(SheetError::PageMissing(page_index))?;
        let content_id = refs.gen(RefType::ContentForPage(page_index));

        let mut page = writer.page(id);
        page.media_box(self.media_box.into());
        page.art_box(self.content_box.into());
        page.parent(parent);
        page.resources().finish();
        page.contents(content_id);
        page.finish();

        let rendered = self.render();
        if compress {
            let compressed = miniz_oxide::deflate::compress_to_vec_zlib(
                &rendered,
                miniz_oxide::deflate::CompressionLevel::DefaultCompression as u8,
            );
            writer
                .stream(content_id, &compressed)
                .filter(Filter::FlateDecode);
        } else {
            writer.stream(content_id, &rendered);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagesize::A4;

    fn inside(inner: &Rect, outer: &Rect) -> bool {
        inner.x1 >= outer.x1
            && inner.y1 >= outer.y1
            && inner.x2 <= outer.x2
            && inner.y2 <= outer.y2
            && inner.x1 <= inner.x2
            && inner.y1 <= inner.y2
    }

    #[test]
    fn margins_define_the_content_box() {
        let page = Page::new((Pt(100.0), Pt(200.0)), Some(Margins::all(Pt(10.0))));
        assert_eq!(page.size(), (Pt(100.0), Pt(200.0)));
        assert_eq!(
            page.content_box,
            Rect {
                x1: Pt(10.0),
                y1: Pt(10.0),
                x2: Pt(90.0),
                y2: Pt(190.0),
            }
        );
    }

    #[test]
    fn no_margins_covers_the_page() {
        let page = Page::new(A4, None);
        assert_eq!(page.content_box, page.media_box);
    }

    #[test]
    fn overlapping_margins_collapse_the_content_box() {
        let page = Page::new((Pt(100.0), Pt(200.0)), Some(Margins::all(Pt(60.0))));
        assert_eq!(
            page.content_box,
            Rect {
                x1: Pt(60.0),
                y1: Pt(60.0),
                x2: Pt(60.0),
                y2: Pt(140.0),
            }
        );

        let page = Page::new((Pt(100.0), Pt(200.0)), Some(Margins::all(Pt(500.0))));
        assert!(inside(&page.content_box, &page.media_box));
        assert_eq!(page.content_box.width(), Pt(0.0));
        assert_eq!(page.content_box.height(), Pt(0.0));
    }

    #[test]
    fn filled_rects_keep_drawing_order() {
        let mut page = Page::new(A4, None);
        let rect = Rect {
            x1: Pt(0.0),
            y1: Pt(0.0),
            x2: Pt(1.0),
            y2: Pt(1.0),
        };
        page.add_filled_rect(rect, crate::colours::RED);
        page.add_filled_rect(rect, crate::colours::CYAN);

        let colours: Vec<Colour> = page.filled_rects().map(|r| r.colour).collect();
        assert_eq!(colours, vec![crate::colours::RED, crate::colours::CYAN]);
    }

    #[test]
    fn page_object_points_at_its_parent() {
        let mut refs = ObjectReferences::new();
        let tree = refs.gen(RefType::PageTree);
        refs.gen(RefType::Page(0));

        let mut writer = Pdf::new();
        let page = Page::new(A4, Some(Margins::all(Pt(10.0))));
        page.write(&mut refs, 0, tree, false, &mut writer)
            .expect("page ref exists");

        let bytes = writer.finish();
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("/Parent 1 0 R"));
        assert!(text.contains("/ArtBox [10 10 "));
    }

    #[test]
    fn unknown_page_index_is_reported() {
        let mut refs = ObjectReferences::new();
        let tree = refs.gen(RefType::PageTree);
        let mut writer = Pdf::new();
        let result = Page::new(A4, None).write(&mut refs, 3, tree, false, &mut writer);
        assert!(matches!(result, Err(SheetError::PageMissing(3))));
    }
}

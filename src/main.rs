use anyhow::{Context, Result};
use checker_sheet::pagesize::{PageOrientation, PaperFormat};
use checker_sheet::{CalibrationSheet, Cm, HueTable, Mm, SheetConfig};
use clap::Parser;
use std::path::PathBuf;

/// Generate a PDF checkerboard sheet for printer and display colour calibration
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Where to write the PDF
    #[arg(default_value = "checkered_calibration.pdf")]
    output: PathBuf,

    /// Side length of each square, in millimetres
    #[arg(short, long, default_value_t = 18.0)]
    box_size: f32,

    /// Margin on every edge of the page, in centimetres
    #[arg(short, long, default_value_t = 1.5)]
    margin: f32,

    /// Paper format to lay the sheet out on
    #[arg(short, long, value_enum, default_value_t = PaperFormat::A4)]
    page_size: PaperFormat,

    /// Turn the page sideways
    #[arg(short, long)]
    landscape: bool,

    /// Hues in degrees for bottom-left, bottom-right, top-left, top-right,
    /// even and odd checkerboard squares, comma separated
    #[arg(long, value_name = "BL,BR,TL,TR,EVEN,ODD")]
    hues: Option<HueTable>,

    /// Write a blank page instead of failing when no square fits inside the margins
    #[arg(long)]
    allow_empty: bool,
}

impl Cli {
    fn sheet_config(&self) -> SheetConfig {
        let page_size = if self.landscape {
            self.page_size.size().landscape()
        } else {
            self.page_size.size()
        };

        SheetConfig {
            page_size,
            box_size: Mm(self.box_size),
            margin: Cm(self.margin),
            hues: self.hues.unwrap_or_default(),
            allow_empty: self.allow_empty,
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let cli = Cli::parse();
    log::debug!("{cli:?}");

    let sheet = CalibrationSheet::new(cli.sheet_config()).context("invalid sheet settings")?;
    sheet
        .save(&cli.output)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use checker_sheet::pagesize::A4;

    #[test]
    fn defaults_match_the_library() {
        let cli = Cli::parse_from(["checker-sheet"]);
        assert_eq!(cli.output, PathBuf::from("checkered_calibration.pdf"));
        assert_eq!(cli.sheet_config(), SheetConfig::default());
    }

    #[test]
    fn flags_fill_the_config() {
        let cli = Cli::parse_from([
            "checker-sheet",
            "out.pdf",
            "--box-size",
            "25",
            "--margin",
            "1",
            "--page-size",
            "a4",
            "--landscape",
            "--hues",
            "0,90,180,270,0,180",
            "--allow-empty",
        ]);
        let config = cli.sheet_config();
        assert_eq!(config.page_size, (A4.1, A4.0));
        assert_eq!(config.box_size, Mm(25.0));
        assert_eq!(config.margin, Cm(1.0));
        assert_eq!(config.hues.top_left, 180.0);
        assert!(config.allow_empty);
    }

    #[test]
    fn bad_hues_are_rejected_at_parse_time() {
        let result = Cli::try_parse_from(["checker-sheet", "--hues", "0,90"]);
        assert!(result.is_err());
    }
}

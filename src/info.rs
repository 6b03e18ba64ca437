use crate::refs::{ObjectReferences, RefType};
use chrono::prelude::*;
use pdf_writer::{Date as PDate, Pdf, TextStr};

/// General document metadata such as title, subject, etc
#[derive(Default, Debug, Clone)]
pub struct Info {
    /// The title of the document.
    pub title: Option<String>,
    /// The subject of the document.
    pub subject: Option<String>,
    /// Keywords for the document, conventionally a comma separated list
    pub keywords: Option<String>,
}

impl Info {
    /// Create a new info block, with all metadata set to [None]
    pub fn new() -> Info {
        Info::default()
    }

    /// Set the title of the info block, modifying `self`
    pub fn title<S: ToString>(&mut self, title: S) -> &mut Self {
        self.title = Some(title.to_string());
        self
    }

    /// Set the subject of the info block, modifying `self`
    pub fn subject<S: ToString>(&mut self, subject: S) -> &mut Self {
        self.subject = Some(subject.to_string());
        self
    }

    /// Set the keywords of the info block, modifying `self`
    pub fn keywords<S: ToString>(&mut self, keywords: S) -> &mut Self {
        self.keywords = Some(keywords.to_string());
        self
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, writer: &mut Pdf) {
        let id = refs.gen(RefType::Info);
        let mut info = writer.document_info(id);

        if let Some(title) = &self.title {
            info.title(TextStr(title.as_str()));
        }
        if let Some(subject) = &self.subject {
            info.subject(TextStr(subject.as_str()));
        }
        if let Some(keywords) = &self.keywords {
            info.keywords(TextStr(keywords.as_str()));
        }
        info.creator(TextStr(concat!(
            env!("CARGO_PKG_NAME"),
            " v",
            env!("CARGO_PKG_VERSION")
        )));
        info.creation_date(pdf_date(Local::now()));
    }
}

fn pdf_date<Tz: TimeZone>(when: DateTime<Tz>) -> PDate {
    let offset_seconds = when.offset().fix().local_minus_utc();
    let offset_hours = offset_seconds / (60 * 60);
    let offset_minutes = ((offset_seconds % (60 * 60)) / 60).abs();

    PDate::new(when.year() as u16)
        .month(when.month() as u8)
        .day(when.day() as u8)
        .hour(when.hour() as u8)
        .minute(when.minute() as u8)
        .second(when.second() as u8)
        .utc_offset_hour(offset_hours as i8)
        .utc_offset_minute(offset_minutes as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_fields() {
        let mut info = Info::new();
        info.title("Colour calibration sheet").keywords("calibration");
        assert_eq!(info.title.as_deref(), Some("Colour calibration sheet"));
        assert_eq!(info.keywords.as_deref(), Some("calibration"));
        assert!(info.subject.is_none());
    }

    #[test]
    fn info_dictionary_is_written() {
        let mut refs = ObjectReferences::new();
        let mut writer = Pdf::new();
        let mut info = Info::new();
        info.title("Sheet");
        info.write(&mut refs, &mut writer);

        assert!(refs.get(RefType::Info).is_some());
        let bytes = writer.finish();
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("/Title (Sheet)"));
        assert!(text.contains("/CreationDate (D:"));
    }
}

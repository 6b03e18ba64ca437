use crate::{
    info::Info,
    page::Page,
    refs::{ObjectReferences, RefType},
    SheetError,
};
use id_arena::{Arena, Id};
use pdf_writer::{Finish, Pdf, Ref};
use std::io::Write;

/// A document is the main object that stores all the contents of the PDF
/// then renders it out with a call to [Document::write]
pub struct Document {
    pub info: Option<Info>,
    pub pages: Arena<Page>,
    pub page_order: Vec<Id<Page>>,
    /// Whether page content streams are deflated. On by default; turning it off
    /// leaves the drawing operators readable in the output.
    pub compress: bool,
}

impl Default for Document {
    fn default() -> Self {
        Document {
            info: None,
            pages: Arena::new(),
            page_order: Vec::new(),
            compress: true,
        }
    }
}

impl Document {
    /// Sets information about the document. If not provided, no information block will be
    /// written to the PDF
    pub fn set_info(&mut self, info: Info) {
        self.info = Some(info);
    }

    /// Add a page to the end of the document, returning its ID
    pub fn add_page(&mut self, page: Page) -> Id<Page> {
        let id = self.pages.alloc(page);
        self.page_order.push(id);
        id
    }

    /// Pages in document order
    pub fn iter_pages(&self) -> impl Iterator<Item = &Page> {
        self.page_order.iter().filter_map(|id| self.pages.get(*id))
    }

    /// Write the entire document to the writer. The whole document is rendered in
    /// memory first and then written in one go.
    pub fn write<W: Write>(self, mut w: W) -> Result<(), SheetError> {
        let Document {
            info,
            pages,
            page_order,
            compress,
        } = self;

        let mut refs = ObjectReferences::new();

        let catalog_id = refs.gen(RefType::Catalog);
        let page_tree_id = refs.gen(RefType::PageTree);

        let mut writer = Pdf::new();
        if let Some(info) = info {
            info.write(&mut refs, &mut writer);
        }

        let page_refs: Vec<Ref> = (0..page_order.len())
            .map(|i| refs.gen(RefType::Page(i)))
            .collect();

        writer
            .pages(page_tree_id)
            .count(page_refs.len() as i32)
            .kids(page_refs);

        for (page_index, id) in page_order.iter().enumerate() {
            let page = pages
                .get(*id)
                .ok_or(SheetError::PageMissing(page_index))?;
            page.write(&mut refs, page_index, page_tree_id, compress, &mut writer)?;
        }

        let mut catalog = writer.catalog(catalog_id);
        catalog.pages(page_tree_id);
        catalog.finish();

        w.write_all(writer.finish().as_slice())?;
        w.flush().map_err(Into::into)
    }
}

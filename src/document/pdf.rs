use std::ops::Range;
use std::path::{Path, PathBuf};

use lopdf::Document;
use tracing::{debug, info};

use super::DocumentError;

/// A loaded PDF. Pages are addressed 0-based, half-open ranges.
pub struct PdfDocument {
    path: PathBuf,
    doc: Document,
    page_numbers: Vec<u32>,
}

impl std::fmt::Debug for PdfDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PdfDocument")
            .field("path", &self.path)
            .field("pages", &self.page_numbers.len())
            .finish()
    }
}

impl PdfDocument {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, DocumentError> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            return Err(DocumentError::NotFound(path));
        }
        let doc = Document::load(&path).map_err(|source| DocumentError::Pdf {
            path: path.clone(),
            source,
        })?;
        let page_numbers: Vec<u32> = doc.get_pages().keys().copied().collect();
        info!("Loaded {} ({} pages)", path.display(), page_numbers.len());
        Ok(Self {
            path,
            doc,
            page_numbers,
        })
    }

    pub fn page_count(&self) -> usize {
        self.page_numbers.len()
    }

    /// Extracted text of pages `range.start..range.end`, concatenated in page order.
    pub fn text_for_pages(&self, range: Range<usize>) -> Result<String, DocumentError> {
        if range.start > range.end || range.end > self.page_count() {
            return Err(DocumentError::PageRange {
                start: range.start,
                end: range.end,
                pages: self.page_count(),
            });
        }
        let pages = &self.page_numbers[range.clone()];
        if pages.is_empty() {
            return Ok(String::new());
        }
        debug!("extracting text from pages {:?}", range);
        self.doc.extract_text(pages).map_err(|source| DocumentError::Pdf {
            path: self.path.clone(),
            source,
        })
    }

    /// Text of the whole document, one entry per window of `pages_per_window` pages.
    pub fn windows(&self, pages_per_window: usize) -> Result<Vec<String>, DocumentError> {
        page_windows(self.page_count(), pages_per_window)
            .map(|range| self.text_for_pages(range))
            .collect()
    }
}

/// `0..total` cut into consecutive ranges of `size` pages; the last may be shorter.
pub fn page_windows(total: usize, size: usize) -> impl Iterator<Item = Range<usize>> {
    let size = size.max(1);
    (0..total).step_by(size).map(move |start| start..(start + size).min(total))
}

#[cfg(test)]
mod tests {
    use lopdf::content::{Content, Operation};
    use lopdf::{Object, Stream, dictionary};

    use super::*;

    /// Writes a PDF with one line of Courier text per page.
    fn write_pdf(path: &Path, pages: &[&str]) {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut kids: Vec<Object> = Vec::new();
        for text in pages {
            let content = Content {
                operations: vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 24.into()]),
                    Operation::new("Td", vec![100.into(), 600.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*text)]),
                    Operation::new("ET", vec![]),
                ],
            };
            let content_id =
                doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);
        doc.save(path).unwrap();
    }

    fn three_page_pdf(dir: &Path) -> PdfDocument {
        let path = dir.join("bill.pdf");
        write_pdf(&path, &["alpha one", "beta two", "gamma three"]);
        PdfDocument::open(&path).unwrap()
    }

    #[test]
    fn windows_cover_document_without_overlap() {
        let ranges: Vec<Range<usize>> = page_windows(12, 5).collect();
        assert_eq!(ranges, vec![0..5, 5..10, 10..12]);
        assert_eq!(page_windows(0, 5).count(), 0);
    }

    #[test]
    fn zero_window_size_falls_back_to_single_pages() {
        assert_eq!(page_windows(3, 0).count(), 3);
    }

    #[test]
    fn missing_file_fails_before_parsing() {
        let err = PdfDocument::open("/definitely/not/here.pdf").unwrap_err();
        assert!(matches!(err, DocumentError::NotFound(_)));
    }

    #[test]
    fn non_pdf_file_is_a_pdf_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bill.pdf");
        std::fs::write(&path, b"not a pdf").unwrap();
        assert!(matches!(PdfDocument::open(&path), Err(DocumentError::Pdf { .. })));
    }

    #[test]
    fn windows_group_page_text_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let pdf = three_page_pdf(dir.path());

        assert_eq!(pdf.page_count(), 3);
        assert_eq!(
            pdf.windows(2).unwrap(),
            vec!["alpha one\nbeta two\n".to_string(), "gamma three\n".to_string()]
        );
        assert_eq!(pdf.text_for_pages(1..1).unwrap(), "");
    }

    #[test]
    fn page_range_past_the_end_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let pdf = three_page_pdf(dir.path());

        let err = pdf.text_for_pages(2..4).unwrap_err();
        let DocumentError::PageRange { start, end, pages } = err else {
            panic!("expected a page range error, got {err:?}");
        };
        assert_eq!((start, end, pages), (2, 4, 3));
    }
}

use std::path::PathBuf;

use thiserror::Error;

pub mod chunker;
pub mod pdf;

pub use chunker::{Chunk, WordChunks, chunk_words};
pub use pdf::PdfDocument;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("The file {} does not exist.", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read PDF {}: {source}", path.display())]
    Pdf {
        path: PathBuf,
        #[source]
        source: lopdf::Error,
    },

    #[error("page range {start}..{end} is outside a document of {pages} pages")]
    PageRange {
        start: usize,
        end: usize,
        pages: usize,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Plain-text dump of a data file (CSV, JSON, text) for inclusion in a prompt.
pub async fn data_to_text(path: impl Into<PathBuf>) -> Result<String, DocumentError> {
    let path = path.into();
    if !tokio::fs::try_exists(&path).await? {
        return Err(DocumentError::NotFound(path));
    }
    let text = tokio::fs::read_to_string(&path).await?;
    Ok(text.trim_end().to_string())
}

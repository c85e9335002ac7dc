//! Document reading — turns uploaded bytes into text, hyperlinks and metadata.
//!
//! Handlers depend on the `DocumentReader` trait only. `AppState` holds an
//! `Arc<dyn DocumentReader>`; the default is `PdfDocumentReader`.

pub mod pdf;

use std::collections::BTreeMap;

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

use crate::models::resume::RawDocument;

pub use pdf::PdfDocumentReader;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("File is not a PDF document")]
    NotPdf,

    #[error("PDF is encrypted")]
    Encrypted,

    #[error("Failed to parse PDF: {0}")]
    Malformed(String),

    #[error("Failed to extract text: {0}")]
    Text(String),

    #[error("Document reader task failed: {0}")]
    Task(String),
}

/// Everything read out of a document. Only `text` and `links` feed extraction.
#[derive(Debug, Clone, Default)]
pub struct ParsedDocument {
    pub text: String,
    pub links: Vec<String>,
    pub num_pages: usize,
    pub info: BTreeMap<String, String>,
}

impl ParsedDocument {
    pub fn into_raw(self) -> RawDocument {
        RawDocument {
            text: self.text,
            links: self.links,
        }
    }
}

#[async_trait]
pub trait DocumentReader: Send + Sync {
    async fn read(&self, bytes: Bytes) -> Result<ParsedDocument, DocumentError>;
}

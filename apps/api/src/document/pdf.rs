use std::collections::BTreeMap;

use async_trait::async_trait;
use bytes::Bytes;
use lopdf::{Dictionary, Document, Object};
use tracing::{debug, warn};

use crate::document::{DocumentError, DocumentReader, ParsedDocument};

/// Reads PDFs with `pdf-extract` for text and `lopdf` for structure
/// (page count, link annotations, info dictionary).
///
/// Parsing is CPU-bound and runs on the blocking pool.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfDocumentReader;

#[async_trait]
impl DocumentReader for PdfDocumentReader {
    async fn read(&self, bytes: Bytes) -> Result<ParsedDocument, DocumentError> {
        tokio::task::spawn_blocking(move || parse_pdf(&bytes))
            .await
            .map_err(|e| DocumentError::Task(e.to_string()))?
    }
}

pub fn parse_pdf(bytes: &[u8]) -> Result<ParsedDocument, DocumentError> {
    if !bytes.starts_with(b"%PDF") {
        return Err(DocumentError::NotPdf);
    }

    let document = Document::load_mem(bytes).map_err(|e| {
        let message = e.to_string();
        if message.contains("encrypted") || message.contains("password") {
            DocumentError::Encrypted
        } else {
            DocumentError::Malformed(message)
        }
    })?;
    if document.is_encrypted() {
        return Err(DocumentError::Encrypted);
    }

    // pdf-extract panics on some malformed font programs.
    let text = std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem(bytes))
        .map_err(|_| DocumentError::Text("text extractor panicked".to_string()))?
        .map_err(|e| DocumentError::Text(e.to_string()))?;

    let num_pages = document.get_pages().len();
    let links = extract_links(&document);
    let info = extract_info(&document);

    if text.trim().is_empty() {
        warn!(num_pages, "PDF yielded no text; it may be a scanned image");
    }
    debug!(
        num_pages,
        links = links.len(),
        text_len = text.len(),
        "PDF parsed"
    );

    Ok(ParsedDocument {
        text: text.trim().to_string(),
        links,
        num_pages,
        info,
    })
}

/// URIs of `/Link` annotations, page by page in document order.
fn extract_links(document: &Document) -> Vec<String> {
    let mut links = Vec::new();

    for page_id in document.get_pages().into_values() {
        let Some(page) = document.get_object(page_id).ok().and_then(|o| o.as_dict().ok()) else {
            continue;
        };
        let Some(annots) = page
            .get(b"Annots")
            .ok()
            .and_then(|o| resolve(document, o))
            .and_then(|o| o.as_array().ok())
        else {
            continue;
        };

        links.extend(
            annots
                .iter()
                .filter_map(|annot| resolve(document, annot).and_then(|o| o.as_dict().ok()))
                .filter_map(|annot| link_uri(document, annot)),
        );
    }

    links
}

fn link_uri(document: &Document, annot: &Dictionary) -> Option<String> {
    match annot.get(b"Subtype").ok()? {
        Object::Name(name) if name.as_slice() == b"Link" => {}
        _ => return None,
    }
    let action = resolve(document, annot.get(b"A").ok()?)?.as_dict().ok()?;
    match resolve(document, action.get(b"URI").ok()?)? {
        Object::String(bytes, _) => Some(decode_pdf_string(bytes)),
        _ => None,
    }
}

/// String-valued entries of the trailer's `/Info` dictionary.
fn extract_info(document: &Document) -> BTreeMap<String, String> {
    let Some(info) = document
        .trailer
        .get(b"Info")
        .ok()
        .and_then(|o| resolve(document, o))
        .and_then(|o| o.as_dict().ok())
    else {
        return BTreeMap::new();
    };

    info.iter()
        .filter_map(|(key, value)| {
            let value = match resolve(document, value)? {
                Object::String(bytes, _) => decode_pdf_string(bytes),
                Object::Name(name) => String::from_utf8_lossy(name).into_owned(),
                _ => return None,
            };
            Some((String::from_utf8_lossy(key).into_owned(), value))
        })
        .collect()
}

fn resolve<'a>(document: &'a Document, object: &'a Object) -> Option<&'a Object> {
    match object {
        Object::Reference(id) => document.get_object(*id).ok(),
        other => Some(other),
    }
}

/// PDF text strings are UTF-16BE when they carry a byte-order mark, otherwise
/// single-byte (PDFDocEncoding, read here as Latin-1).
fn decode_pdf_string(bytes: &[u8]) -> String {
    match bytes {
        [0xFE, 0xFF, rest @ ..] => {
            let units = rest.chunks_exact(2).map(|pair| u16::from_be_bytes([pair[0], pair[1]]));
            char::decode_utf16(units)
                .map(|c| c.unwrap_or(char::REPLACEMENT_CHARACTER))
                .collect()
        }
        _ => bytes.iter().map(|&b| b as char).collect(),
    }
}

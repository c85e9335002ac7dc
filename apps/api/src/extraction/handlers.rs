//! Axum route handlers for the résumé parsing API.

use std::collections::BTreeMap;

use axum::{
    extract::{multipart::MultipartRejection, rejection::JsonRejection, Multipart, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::extraction::skills::SKILL_TAXONOMY;
use crate::models::resume::{RawDocument, ResumeData};
use crate::state::AppState;

/// Multipart field carrying the uploaded PDF.
pub const UPLOAD_FIELD: &str = "resume";
const PDF_MIME: &str = "application/pdf";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// `{ data, message }` envelope shared by the parsing endpoints.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
    pub message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentMetadata {
    pub total_pages: usize,
    pub pdf_info: BTreeMap<String, String>,
    pub text_length: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseResumeResponse {
    pub success: bool,
    pub message: String,
    pub parse_id: Uuid,
    pub original_filename: Option<String>,
    pub file_size: usize,
    pub file_size_formatted: String,
    pub parsed_at: DateTime<Utc>,
    pub extracted_data: ResumeData,
    pub metadata: DocumentMetadata,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/parse-resume
pub async fn handle_parse_resume(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ApiResponse<ParseResumeResponse>>, AppError> {
    let mut multipart = multipart.map_err(|e| AppError::Validation(e.body_text()))?;
    let max_file_size = state.config.max_file_size;

    let mut upload = None;
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        if field.content_type() != Some(PDF_MIME) {
            return Err(AppError::UnsupportedMediaType(
                "Only PDF files are allowed".to_string(),
            ));
        }
        let filename = field.file_name().map(String::from);
        let bytes = field.bytes().await.map_err(multipart_error)?;
        upload = Some((filename, bytes));
        break;
    }

    let (original_filename, bytes) = upload.ok_or_else(|| {
        AppError::Validation(format!(
            "No PDF file uploaded; send it in the '{UPLOAD_FIELD}' field"
        ))
    })?;
    if bytes.len() > max_file_size {
        return Err(too_large(max_file_size));
    }

    let parse_id = Uuid::new_v4();
    let file_size = bytes.len();
    info!(%parse_id, file_size, filename = ?original_filename, "Parsing uploaded resume");

    let document = state.reader.read(bytes).await?;
    let metadata = DocumentMetadata {
        total_pages: document.num_pages,
        pdf_info: document.info.clone(),
        text_length: document.text.chars().count(),
    };
    let extracted_data = document.into_raw().extract();

    info!(
        %parse_id,
        pages = metadata.total_pages,
        skills = extracted_data.skills.count,
        jobs = extracted_data.experience.count,
        "Resume parsed"
    );

    let message = "Resume parsed successfully".to_string();
    Ok(Json(ApiResponse {
        data: ParseResumeResponse {
            success: true,
            message: message.clone(),
            parse_id,
            original_filename,
            file_size,
            file_size_formatted: format_file_size(file_size as u64),
            parsed_at: Utc::now(),
            extracted_data,
            metadata,
        },
        message,
    }))
}

/// POST /api/extract
/// Runs the pipeline over already-extracted text.
pub async fn handle_extract(
    payload: Result<Json<RawDocument>, JsonRejection>,
) -> Result<Json<ApiResponse<ResumeData>>, AppError> {
    let Json(document) = payload.map_err(|e| AppError::InvalidInput(e.body_text()))?;
    Ok(Json(ApiResponse {
        data: document.extract(),
        message: "Resume data extracted successfully".to_string(),
    }))
}

/// GET /
pub async fn handle_api_info(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "message": "Resume Parser API",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "Extract structured data from PDF resumes",
        "endpoints": {
            "POST /api/parse-resume": "Parse a PDF resume and extract data",
            "POST /api/extract": "Extract data from already-extracted resume text",
            "GET /api/stats": "Get parser statistics and capabilities",
            "GET /api/health": "Health check"
        },
        "features": features(),
        "limits": {
            "maxFileSize": format_file_size(state.config.max_file_size as u64),
            "allowedTypes": [PDF_MIME],
            "temporaryStorage": false
        }
    }))
}

/// GET /api/stats
pub async fn handle_stats(State(state): State<AppState>) -> Json<Value> {
    let skill_categories: BTreeMap<&str, usize> = SKILL_TAXONOMY
        .iter()
        .map(|(category, keywords)| (category.as_str(), keywords.len()))
        .collect();

    Json(json!({
        "success": true,
        "service": "Resume Parser API",
        "version": env!("CARGO_PKG_VERSION"),
        "features": features(),
        "supportedFormats": ["PDF"],
        "maxFileSize": format_file_size(state.config.max_file_size as u64),
        "skillCategories": skill_categories,
        "temporaryStorage": false
    }))
}

fn features() -> [&'static str; 6] {
    [
        "PDF text extraction",
        "Contact information parsing",
        "Skills detection",
        "Experience extraction",
        "Education parsing",
        "Summary extraction",
    ]
}

fn multipart_error(e: axum::extract::multipart::MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(e.body_text())
    } else {
        AppError::Validation(format!("Invalid upload: {}", e.body_text()))
    }
}

fn too_large(max_file_size: usize) -> AppError {
    AppError::PayloadTooLarge(format!(
        "PDF file must be smaller than {}",
        format_file_size(max_file_size as u64)
    ))
}

/// Human-readable size in base-1024 units, at most two decimals ("1.5 KB").
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    let rounded = (value * 100.0).round() / 100.0;
    format!("{rounded} {}", UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0), "0 Bytes");
        assert_eq!(format_file_size(500), "500 Bytes");
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(10 * 1024 * 1024), "10 MB");
        assert_eq!(format_file_size(3 * 1024 * 1024 * 1024), "3 GB");
        assert_eq!(format_file_size(5000 * 1024 * 1024 * 1024), "5000 GB");
    }

    #[test]
    fn test_extract_body_requires_string_text() {
        assert!(serde_json::from_str::<RawDocument>(r#"{"text": 42}"#).is_err());
        assert!(serde_json::from_str::<RawDocument>(r#"{"links": []}"#).is_err());
    }
}

//! Handlers for image uploads.
//!
//! Accepts multipart forms, validates each named image part and returns it
//! as a base64 `data:` URI. Nothing is written to disk; the caller stores
//! the URI on the entity it creates next.

use std::collections::HashMap;

use apexverse_core::upload::check_image;
use axum::extract::Multipart;
use axum::Json;
use serde::Serialize;

use crate::error::{AppError, AppResult};

const LINE_ART_FIELD: &str = "lineArt";
const FULL_ART_FIELD: &str = "fullArt";
const IMAGE_FIELD: &str = "image";

/// Content type assumed when a file part does not declare one. Not an
/// image type, so such parts fail validation.
const UNKNOWN_CONTENT_TYPE: &str = "application/octet-stream";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioUploadResponse {
    pub line_art_url: String,
    pub full_art_url: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialUploadResponse {
    pub image_url: String,
}

/// A buffered file part: declared content type and raw bytes.
struct FilePart {
    content_type: String,
    data: Vec<u8>,
}

/// Drain `multipart`, keeping the file parts whose names are in `wanted`.
///
/// Text parts (no filename) and unknown names are skipped. A repeated name
/// keeps the last part.
async fn collect_file_parts(
    mut multipart: Multipart,
    wanted: &[&str],
) -> AppResult<HashMap<String, FilePart>> {
    let mut parts = HashMap::new();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or("").to_string();
        if !wanted.contains(&name.as_str()) || field.file_name().is_none() {
            continue;
        }

        let content_type = field
            .content_type()
            .unwrap_or(UNKNOWN_CONTENT_TYPE)
            .to_string();
        let data = field.bytes().await?;

        parts.insert(
            name,
            FilePart {
                content_type,
                data: data.to_vec(),
            },
        );
    }

    Ok(parts)
}

fn encode_part(field: &str, part: &FilePart) -> AppResult<String> {
    Ok(check_image(field, &part.content_type, &part.data)?)
}

/// POST /api/upload/portfolio
///
/// Requires both `lineArt` and `fullArt`. If either is missing or invalid
/// the whole request fails and neither URI is returned.
pub async fn upload_portfolio_images(
    multipart: Multipart,
) -> AppResult<Json<PortfolioUploadResponse>> {
    let parts = collect_file_parts(multipart, &[LINE_ART_FIELD, FULL_ART_FIELD]).await?;

    let (Some(line_art), Some(full_art)) = (parts.get(LINE_ART_FIELD), parts.get(FULL_ART_FIELD))
    else {
        return Err(AppError::BadRequest(
            "Both 'lineArt' and 'fullArt' images are required".into(),
        ));
    };

    let line_art_url = encode_part(LINE_ART_FIELD, line_art)?;
    let full_art_url = encode_part(FULL_ART_FIELD, full_art)?;

    tracing::info!(
        line_art_bytes = line_art.data.len(),
        full_art_bytes = full_art.data.len(),
        "Portfolio images uploaded",
    );

    Ok(Json(PortfolioUploadResponse {
        line_art_url,
        full_art_url,
    }))
}

/// POST /api/upload/testimonial
pub async fn upload_testimonial_image(
    multipart: Multipart,
) -> AppResult<Json<TestimonialUploadResponse>> {
    let parts = collect_file_parts(multipart, &[IMAGE_FIELD]).await?;

    let image = parts
        .get(IMAGE_FIELD)
        .ok_or_else(|| AppError::BadRequest("An 'image' file is required".into()))?;

    let image_url = encode_part(IMAGE_FIELD, image)?;

    tracing::info!(image_bytes = image.data.len(), "Testimonial image uploaded");

    Ok(Json(TestimonialUploadResponse { image_url }))
}

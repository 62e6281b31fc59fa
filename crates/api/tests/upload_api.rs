//! Integration tests for `/api/upload`.

mod common;

use apexverse_core::upload::decode_data_uri;
use axum::http::StatusCode;
use common::{body_json, post_multipart, Part};

const MIB: usize = 1024 * 1024;

/// JPEG SOI marker followed by filler; content is never sniffed.
fn fake_jpeg(len: usize) -> Vec<u8> {
    let mut bytes = vec![0xAB; len];
    bytes[..3].copy_from_slice(&[0xFF, 0xD8, 0xFF]);
    bytes
}

// ---------------------------------------------------------------------------
// Testimonial image
// ---------------------------------------------------------------------------

#[tokio::test]
async fn four_mib_jpeg_is_returned_as_data_uri() {
    let app = common::build_test_app();
    let image = fake_jpeg(4 * MIB);

    let response = post_multipart(
        app,
        "/api/upload/testimonial",
        &[Part::file("image", "image/jpeg", &image)],
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let uri = json["imageUrl"].as_str().unwrap();
    assert!(uri.starts_with("data:image/jpeg;base64,"));

    let (mime, bytes) = decode_data_uri(uri).unwrap();
    assert_eq!(mime, "image/jpeg");
    assert_eq!(bytes, image);
}

#[tokio::test]
async fn six_mib_image_is_rejected() {
    let app = common::build_test_app();
    let image = fake_jpeg(6 * MIB);

    let response = post_multipart(
        app,
        "/api/upload/testimonial",
        &[Part::file("image", "image/jpeg", &image)],
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let error = body_json(response).await["error"].as_str().unwrap().to_string();
    assert!(error.contains("too large"), "{error}");
    assert!(error.contains("'image'"), "{error}");
}

#[tokio::test]
async fn non_image_type_is_rejected() {
    let app = common::build_test_app();
    let response = post_multipart(
        app,
        "/api/upload/testimonial",
        &[Part::file("image", "application/pdf", b"%PDF-1.7")],
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error = body_json(response).await["error"].as_str().unwrap().to_string();
    assert!(error.contains("Invalid file type"), "{error}");
}

#[tokio::test]
async fn text_part_does_not_count_as_image() {
    let app = common::build_test_app();
    let response = post_multipart(
        app,
        "/api/upload/testimonial",
        &[Part::text("image", "not a file")],
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["error"],
        "An 'image' file is required"
    );
}

// ---------------------------------------------------------------------------
// Portfolio pair
// ---------------------------------------------------------------------------

#[tokio::test]
async fn portfolio_pair_is_encoded() {
    let app = common::build_test_app();
    let line = fake_jpeg(1024);
    let full = b"\x89PNG\r\n\x1a\nrest".to_vec();

    let response = post_multipart(
        app,
        "/api/upload/portfolio",
        &[
            Part::text("title", "ignored"),
            Part::file("lineArt", "image/jpeg", &line),
            Part::file("fullArt", "image/png", &full),
            Part::file("extra", "image/png", &full),
        ],
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let (_, line_bytes) = decode_data_uri(json["lineArtUrl"].as_str().unwrap()).unwrap();
    let (full_mime, full_bytes) = decode_data_uri(json["fullArtUrl"].as_str().unwrap()).unwrap();
    assert_eq!(line_bytes, line);
    assert_eq!(full_mime, "image/png");
    assert_eq!(full_bytes, full);
}

#[tokio::test]
async fn portfolio_missing_part_fails_whole_request() {
    let app = common::build_test_app();
    let line = fake_jpeg(1024);

    let response = post_multipart(
        app,
        "/api/upload/portfolio",
        &[Part::file("lineArt", "image/jpeg", &line)],
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(
        json["error"],
        "Both 'lineArt' and 'fullArt' images are required"
    );
    assert!(json.get("lineArtUrl").is_none());
}

#[tokio::test]
async fn portfolio_oversized_part_fails_whole_request() {
    let app = common::build_test_app();
    let line = fake_jpeg(1024);
    let full = fake_jpeg(6 * MIB);

    let response = post_multipart(
        app,
        "/api/upload/portfolio",
        &[
            Part::file("lineArt", "image/jpeg", &line),
            Part::file("fullArt", "image/jpeg", &full),
        ],
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error = body_json(response).await["error"].as_str().unwrap().to_string();
    assert!(error.contains("'fullArt'"), "{error}");
}

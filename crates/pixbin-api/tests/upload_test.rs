mod helpers;

use axum_test::multipart::{MultipartForm, Part};
use helpers::{png_bytes, setup_test_app};

fn file_form(filename: &str, mime: &str, data: Vec<u8>) -> MultipartForm {
    MultipartForm::new().add_part(
        "file",
        Part::bytes(data).file_name(filename).mime_type(mime),
    )
}

#[tokio::test]
async fn upload_png_records_metadata() {
    let app = setup_test_app().await;

    let response = app
        .client()
        .post("/files")
        .multipart(file_form("photo.png", "image/png", png_bytes(100, 50)))
        .await;

    assert_eq!(response.status_code(), 201);

    let record: serde_json::Value = response.json();
    assert_eq!(record["fileName"], "photo.png");
    assert_eq!(record["fileType"], "png");
    assert_eq!(record["width"], 100.0);
    assert_eq!(record["height"], 50.0);
    let uri = record["fileDownloadUri"].as_str().unwrap();
    assert!(uri.ends_with("/files/photo.png"), "got {}", uri);

    // Exactly one metadata record
    let list: serde_json::Value = app.client().get("/files").await.json();
    assert_eq!(list.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn upload_writes_bytes_to_upload_root() {
    let app = setup_test_app().await;
    let data = png_bytes(4, 4);

    app.client()
        .post("/files")
        .multipart(file_form("tiny.png", "image/png", data.clone()))
        .await
        .assert_status(axum::http::StatusCode::CREATED);

    let on_disk = std::fs::read(app.upload_root().join("tiny.png")).unwrap();
    assert_eq!(on_disk, data);
}

#[tokio::test]
async fn traversal_filename_rejected_before_any_write() {
    let app = setup_test_app().await;

    let response = app
        .client()
        .post("/files")
        .multipart(file_form("../../evil.png", "image/png", png_bytes(4, 4)))
        .await;

    assert_eq!(response.status_code(), 500);
    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], "STORAGE_ERROR");

    // Nothing may have been written anywhere under the temp root.
    let entries: Vec<_> = std::fs::read_dir(app.upload_root()).unwrap().collect();
    assert!(entries.is_empty());
}

#[tokio::test]
async fn non_image_upload_rejected_with_no_side_effects() {
    let app = setup_test_app().await;

    let response = app
        .client()
        .post("/files")
        .multipart(file_form("notes.txt", "text/plain", b"hello".to_vec()))
        .await;

    assert_eq!(response.status_code(), 500);
    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], "STORAGE_ERROR");
    assert!(body["error"].as_str().unwrap().contains("not an image"));

    let entries: Vec<_> = std::fs::read_dir(app.upload_root()).unwrap().collect();
    assert!(entries.is_empty());

    let list: serde_json::Value = app.client().get("/files").await.json();
    assert!(list.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn empty_payload_rejected() {
    let app = setup_test_app().await;

    let response = app
        .client()
        .post("/files")
        .multipart(file_form("photo.png", "image/png", Vec::new()))
        .await;

    assert_eq!(response.status_code(), 500);
    let body: serde_json::Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("empty file"));
}

#[tokio::test]
async fn missing_file_field_rejected() {
    let app = setup_test_app().await;

    let response = app
        .client()
        .post("/files")
        .multipart(MultipartForm::new().add_text("comment", "no file here"))
        .await;

    assert_eq!(response.status_code(), 500);
}

#[tokio::test]
async fn duplicate_filename_overwrites_bytes_but_appends_metadata() {
    let app = setup_test_app().await;
    let first = png_bytes(10, 10);
    let second = png_bytes(20, 20);

    app.client()
        .post("/files")
        .multipart(file_form("photo.png", "image/png", first))
        .await
        .assert_status(axum::http::StatusCode::CREATED);
    app.client()
        .post("/files")
        .multipart(file_form("photo.png", "image/png", second.clone()))
        .await
        .assert_status(axum::http::StatusCode::CREATED);

    // Second file's bytes win on disk
    let on_disk = std::fs::read(app.upload_root().join("photo.png")).unwrap();
    assert_eq!(on_disk, second);

    // ...but the metadata table keeps both rows (documented inconsistency)
    let list: serde_json::Value = app.client().get("/files").await.json();
    let rows = list.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["width"], 10.0);
    assert_eq!(rows[1]["width"], 20.0);
}

#[tokio::test]
async fn cleanable_dot_segments_are_normalized() {
    let app = setup_test_app().await;

    let response = app
        .client()
        .post("/files")
        .multipart(file_form("a/../photo.png", "image/png", png_bytes(4, 4)))
        .await;

    assert_eq!(response.status_code(), 201);
    let record: serde_json::Value = response.json();
    assert_eq!(record["fileName"], "photo.png");
    assert!(app.upload_root().join("photo.png").is_file());
}

//! Shared test setup: real router over an in-memory database and a
//! temporary upload root.

use axum_test::TestServer;
use pixbin_api::setup::routes::setup_routes;
use pixbin_api::state::AppState;
use pixbin_core::Config;
use pixbin_db::FileRepository;
use pixbin_storage::LocalStore;
use sqlx::sqlite::SqlitePoolOptions;
use std::io::Cursor;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

pub struct TestApp {
    pub server: TestServer,
    pub state: Arc<AppState>,
    _temp_dir: TempDir,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }

    /// Upload root on disk, for asserting what was (not) written.
    pub fn upload_root(&self) -> PathBuf {
        self.state.storage.root().to_path_buf()
    }
}

/// Setup a test application with an isolated database and upload root.
pub async fn setup_test_app() -> TestApp {
    // One connection keeps every query on the same in-memory database.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");
    pixbin_db::MIGRATOR
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
    let upload_dir = temp_dir.path().join("uploads");

    let config = Config {
        server_port: 3000,
        upload_dir: upload_dir.to_string_lossy().into_owned(),
        public_base_url: "http://localhost:3000".to_string(),
        database_url: "sqlite::memory:".to_string(),
        max_file_size_bytes: 10 * 1024 * 1024,
        cors_origins: vec!["*".to_string()],
        db_max_connections: 1,
        db_timeout_seconds: 30,
        environment: "test".to_string(),
    };

    let storage = LocalStore::new(&config.upload_dir);
    storage.init().await.expect("Failed to init upload root");

    let state = Arc::new(AppState {
        config: config.clone(),
        storage,
        repository: FileRepository::new(pool),
    });

    let router = setup_routes(&config, state.clone()).expect("Failed to build router");
    let server = TestServer::new(router).expect("Failed to start test server");

    TestApp {
        server,
        state,
        _temp_dir: temp_dir,
    }
}

/// Synthesize a solid-color PNG of the given dimensions.
pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(width, height, image::Rgba([0, 128, 255, 255]));
    let mut buffer = Vec::new();
    img.write_to(&mut Cursor::new(&mut buffer), image::ImageFormat::Png)
        .unwrap();
    buffer
}

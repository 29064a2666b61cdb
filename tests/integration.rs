// SPDX-License-Identifier: MPL-2.0
use iced_folio::app::config::{self, Config};
use iced_folio::content::{manifest, ImageFormat, GRID_WIDTH};
use iced_folio::error::Error;
use iced_folio::gallery::DistributionStrategy;
use tempfile::tempdir;

#[test]
fn config_round_trips_through_the_settings_file() {
    let dir = tempdir().expect("failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut saved = Config::default();
    saved.general.manifest = Some("https://example.com/portfolio.json".to_string());
    saved.general.image_format = ImageFormat::Jpg;
    saved.layout.strategy = DistributionStrategy::RoundRobin;
    saved.lightbox.prefetch_neighbors = false;
    saved.cache.max_mb = 48;
    config::save_to_path(&saved, &path).expect("failed to save settings");

    let loaded = config::load_from_path(&path).expect("failed to load settings");
    assert_eq!(loaded, saved);

    dir.close().expect("failed to close temporary directory");
}

#[tokio::test]
async fn manifest_loads_from_a_local_file() {
    let dir = tempdir().expect("failed to create temporary directory");
    let path = dir.path().join("portfolio.json");
    std::fs::write(
        &path,
        r#"{ "images": [
            { "id": "dunes-03", "url": "https://cdn.example.com/dunes-03",
              "width": 3000, "height": 2000, "title": "Dunes at dusk" }
        ] }"#,
    )
    .expect("failed to write manifest");

    let client = reqwest::Client::new();
    let list = manifest::load(&client, &path.to_string_lossy())
        .await
        .expect("failed to load local manifest");

    assert_eq!(list.len(), 1);
    let record = list.get(0).expect("first record");
    assert_eq!(record.title(), Some("Dunes at dusk"));
    assert_eq!(
        record.display_url(GRID_WIDTH, ImageFormat::Webp),
        "https://cdn.example.com/dunes-03?w=800&fm=webp"
    );

    dir.close().expect("failed to close temporary directory");
}

#[tokio::test]
async fn manifest_load_reports_missing_files() {
    let client = reqwest::Client::new();
    let result = manifest::load(&client, "/nonexistent/portfolio.json").await;
    assert!(matches!(result, Err(Error::Io(_))));
}

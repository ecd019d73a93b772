//! Catalog file tests
//!
//! Load/save behaviour against realistic catalog files.

use portfolio_media::commands;
use portfolio_media_common::{next_id, CatalogStore, ProjectLayout};
use std::fs;
use tempfile::tempdir;

const SAMPLE: &str = r#"[
  {
    "id": 1,
    "title": "Downtown Loft 3D Tour",
    "category": "3d-tours",
    "description": "Matterport walkthrough.",
    "image": "/images/portfolio/interiors/11-web-or-mls-RGC08249.jpg",
    "video": "/videos/portfolio/1-video-3977.mp4",
    "tags": [
      "Matterport",
      "Walkthrough"
    ],
    "date": "2024-02-12",
    "client": "Loft Collective",
    "results": "Average view time +48%"
  },
  {
    "id": 3,
    "title": "Curb Appeal Exterior",
    "category": "exterior",
    "description": "",
    "image": "/images/portfolio/exterior/curb.jpg",
    "video": null,
    "tags": [],
    "date": "2024-01-18",
    "client": "",
    "results": "",
    "featured": true
  }
]"#;

/// load then save leaves the file as it was
#[test]
fn test_round_trip_without_adds_is_noop() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("portfolio-data.json");
    fs::write(&path, SAMPLE).unwrap();

    let store = CatalogStore::new(&path);
    let records = store.load();
    assert_eq!(records.len(), 2);
    store.save(&records).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), SAMPLE);
}

#[test]
fn test_next_id_over_sample() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("portfolio-data.json");
    fs::write(&path, SAMPLE).unwrap();
    assert_eq!(next_id(&CatalogStore::new(&path).load()).unwrap(), 4);
}

/// Corrupt JSON loads as empty; check reports it instead
#[test]
fn test_corrupt_catalog_recovers_as_empty() {
    let dir = tempdir().expect("Failed to create temp dir");
    let layout = ProjectLayout::new(dir.path());
    fs::create_dir_all(layout.data_path.parent().unwrap()).unwrap();
    fs::write(&layout.data_path, "{ not json").unwrap();

    assert!(commands::list(&layout, None).is_empty());
    assert!(commands::check(&layout).is_err());
}

#[test]
fn test_list_filters_and_orders() {
    let dir = tempdir().expect("Failed to create temp dir");
    let layout = ProjectLayout::new(dir.path());
    fs::create_dir_all(layout.data_path.parent().unwrap()).unwrap();
    fs::write(&layout.data_path, SAMPLE).unwrap();

    let all = commands::list(&layout, None);
    assert_eq!(all.iter().map(|r| r.id).collect::<Vec<_>>(), vec![3, 1]);

    let exterior = commands::list(&layout, Some("exterior".parse().unwrap()));
    assert_eq!(exterior.len(), 1);
    assert_eq!(exterior[0].title, "Curb Appeal Exterior");

    let rendered = commands::render_list(&all);
    let first_line = rendered.lines().next().unwrap();
    assert_eq!(first_line, "#3 [exterior] Curb Appeal Exterior  /images/portfolio/exterior/curb.jpg");
}

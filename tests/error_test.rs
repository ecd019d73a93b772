//! Error case tests
//!
//! Error variants and their messages as the operator sees them.

use portfolio_media::commands;
use portfolio_media::error::MediaError;
use portfolio_media::integrity::{IntegrityReport, MissingAsset};
use portfolio_media_common::{Category, Error, FormController, ProjectLayout};
use std::path::PathBuf;
use tempfile::tempdir;

/// add_item with nothing chosen
#[test]
fn test_add_item_without_selection() {
    let dir = tempdir().expect("Failed to create temp dir");
    let mut controller = FormController::new(ProjectLayout::new(dir.path())).unwrap();

    let err = controller.add_item().unwrap_err();
    assert!(matches!(err, Error::NoFileSelected));
    assert!(err.is_selection_error());
    assert_eq!(controller.status(), "Error: Please choose a file.");
}

#[test]
fn test_unknown_category_parse() {
    let err = "weddings".parse::<Category>().unwrap_err();
    assert_eq!(err.to_string(), "Unknown category: weddings");
}

#[test]
fn test_broken_references_fail_check() {
    let clean = IntegrityReport::default();
    assert!(commands::ensure_no_broken_references(&clean).is_ok());

    let broken = IntegrityReport {
        orphan_files: vec![PathBuf::from("/site/static/videos/portfolio/stray.mp4")],
        missing_files: vec![MissingAsset {
            id: 7,
            title: "Gone".into(),
            public_path: "/images/portfolio/drone/gone.jpg".into(),
        }],
    };
    let err = commands::ensure_no_broken_references(&broken).unwrap_err();
    assert!(matches!(err, MediaError::BrokenReferences(1)));

    let rendered = commands::render_report(&broken);
    assert!(rendered.contains("#7 Gone"));
    assert!(rendered.contains("stray.mp4"));
}

/// Every MediaError renders a message
#[test]
fn test_error_display() {
    let errors = vec![
        MediaError::Common(Error::NoFileSelected),
        MediaError::Common(Error::UnknownCategory("x".into())),
        MediaError::Logging("already set".into()),
        MediaError::BrokenReferences(2),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "empty message for {:?}", err);
    }
}

/// A broken config file does not stop commands that only read it
#[test]
fn test_unreadable_config_falls_back_to_defaults() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ broken").unwrap();

    let config = commands::config_or_default(portfolio_media_common::Config::load_from(&path));
    assert_eq!(config, portfolio_media_common::Config::default());

    let missing_home = Err(Error::Config("home directory not found".into()));
    assert_eq!(commands::config_or_default(missing_home), portfolio_media_common::Config::default());

    let root = dir.path().join("site");
    assert_eq!(config.resolve_root(Some(&root)), root);
}

#[test]
fn test_config_round_trip() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    let mut config = portfolio_media_common::Config::default();

    let changed = commands::update_config(
        &mut config,
        &path,
        Some(dir.path().join("site")),
        Some(Category::Drone),
    )
    .unwrap();
    assert!(changed);

    let loaded = portfolio_media_common::Config::load_from(&path).unwrap();
    assert_eq!(loaded.project_root, Some(dir.path().join("site")));
    assert_eq!(loaded.default_category.as_deref(), Some("drone"));

    let rendered = commands::render_config(&loaded, &dir.path().join("site"));
    assert!(rendered.contains("default category: drone"));

    assert!(!commands::update_config(&mut config, &path, None, None).unwrap());
}

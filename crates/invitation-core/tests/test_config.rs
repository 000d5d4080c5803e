use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use invitation_core::config::GalleryConfig;
use invitation_core::error::InvitationError;

#[test]
fn test_defaults() {
    let config = GalleryConfig::default();
    assert!(config.photos.is_empty());
    assert_eq!(config.music, None);
    assert_eq!(config.gesture.dead_zone, 10.0);
    assert_eq!(config.gesture.zoom_tolerance, 1.05);
    assert_eq!(config.carousel.transition(), Duration::from_millis(300));
    assert_eq!(config.carousel.forward_ratio, 1.1);
    assert_eq!(config.carousel.backward_ratio, 0.9);
    assert_eq!(config.viewer.swipe_threshold, 50.0);
    assert_eq!(config.all_photos.reopen_delay(), Duration::from_millis(100));
    config.validate().unwrap();
}

#[test]
fn test_empty_document_yields_defaults() {
    assert_eq!(GalleryConfig::from_toml_str("").unwrap(), GalleryConfig::default());
}

#[test]
fn test_partial_table_keeps_other_defaults() {
    let config = GalleryConfig::from_toml_str(
        r#"
        photos = ["a.jpg", "b.jpg"]

        [viewer]
        swipe_threshold = 80.0
        "#,
    )
    .unwrap();
    assert_eq!(config.photos.len(), 2);
    assert_eq!(config.viewer.swipe_threshold, 80.0);
    assert_eq!(config.viewer.indicator_pitch, 16.0);
    assert_eq!(config.image_set().len(), 2);
}

#[test]
fn test_serialized_config_reads_back() {
    let config = GalleryConfig {
        photos: vec![PathBuf::from("one.jpg"), PathBuf::from("two.jpg")],
        music: Some(PathBuf::from("song.mp3")),
        ..GalleryConfig::default()
    };
    let text = config.to_toml_string().unwrap();
    assert!(text.contains("[carousel]"));
    assert_eq!(GalleryConfig::from_toml_str(&text).unwrap(), config);
}

#[test]
fn test_invalid_values_are_rejected() {
    let cases = [
        ("[gesture]\ndead_zone = 0.0", "gesture.dead_zone"),
        ("[gesture]\nzoom_tolerance = 0.5", "gesture.zoom_tolerance"),
        ("[carousel]\nbackward_ratio = 1.0", "carousel.backward_ratio"),
        ("[carousel]\nforward_ratio = 1.0", "carousel.forward_ratio"),
        ("[carousel]\ntransition_ms = 0", "carousel.transition_ms"),
        ("[viewer]\nswipe_threshold = -5.0", "viewer.swipe_threshold"),
    ];
    for (text, expected) in cases {
        match GalleryConfig::from_toml_str(text) {
            Err(InvitationError::InvalidConfig { field, .. }) => assert_eq!(field, expected),
            other => panic!("{expected}: expected InvalidConfig, got {other:?}"),
        }
    }
}

#[test]
fn test_malformed_toml_is_parse_error() {
    assert!(matches!(
        GalleryConfig::from_toml_str("photos = [unterminated"),
        Err(InvitationError::ConfigParse(_))
    ));
}

#[test]
fn test_load_resolves_paths_against_config_dir() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("invitation.toml");
    fs::write(
        &path,
        r#"
        photos = ["photos/01.jpg", "/abs/02.jpg"]
        music = "audio/wedding.mp3"
        "#,
    )
    .unwrap();

    let config = GalleryConfig::load(&path).unwrap();
    assert_eq!(config.photos[0], dir.path().join("photos/01.jpg"));
    assert_eq!(config.photos[1], PathBuf::from("/abs/02.jpg"));
    assert_eq!(config.music, Some(dir.path().join("audio/wedding.mp3")));
}

#[test]
fn test_load_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        GalleryConfig::load(&dir.path().join("missing.toml")),
        Err(InvitationError::Io(_))
    ));
}

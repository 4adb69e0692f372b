// Unit tests for data directory detection
// Environment is injected so no test touches process-global state

use crate::config::StorefrontConfig;
use crate::error::ConfigError;
use crate::paths::{DATA_DIR_ENV, PathSource, StorefrontPaths, detect_storefront_paths_with};

use std::path::PathBuf;

/// **VALUE**: The explicit override wins over the platform directory.
///
/// **BUG THIS CATCHES**: Would catch the override being read under a different name or
/// checked after the platform lookup, which would make it impossible to point a CI run
/// at a scratch directory.
#[test]
fn given_data_dir_override_when_detected_then_override_wins() {
    // GIVEN: Both an override and a platform directory
    let lookup = |key: &str| (key == DATA_DIR_ENV).then(|| "/srv/storefront".to_string());

    // WHEN: Detecting
    let paths =
        detect_storefront_paths_with(lookup, Some(PathBuf::from("/home/ayse/.local/share")))
            .unwrap();

    // THEN: Override used as-is
    assert_eq!(paths.data_dir, PathBuf::from("/srv/storefront"));
    assert_eq!(paths.source, PathSource::Override);
}

#[test]
fn given_no_override_when_detected_then_uses_app_dir_under_platform_dir() {
    // GIVEN: Only a platform directory
    let paths =
        detect_storefront_paths_with(|_| None, Some(PathBuf::from("/home/ayse/.local/share")))
            .unwrap();

    // THEN: App directory nested under it
    assert_eq!(
        paths.data_dir,
        PathBuf::from("/home/ayse/.local/share/storefront-forms")
    );
    assert_eq!(paths.source, PathSource::PlatformDefault);
}

#[test]
fn given_blank_override_when_detected_then_falls_back_to_platform_dir() {
    let lookup = |key: &str| (key == DATA_DIR_ENV).then(|| "  ".to_string());

    let paths = detect_storefront_paths_with(lookup, Some(PathBuf::from("/data"))).unwrap();

    assert_eq!(paths.source, PathSource::PlatformDefault);
    assert_eq!(paths.data_dir, PathBuf::from("/data/storefront-forms"));
}

#[test]
fn given_neither_override_nor_platform_dir_when_detected_then_returns_directory_not_found() {
    let result = detect_storefront_paths_with(|_| None, None);

    match result {
        Err(ConfigError::DirectoryNotFound { reason, .. }) => {
            assert!(reason.contains(DATA_DIR_ENV));
        }
        other => panic!("expected DirectoryNotFound, got {other:?}"),
    }
}

#[test]
fn given_paths_when_files_requested_then_live_under_data_dir() {
    let paths = StorefrontPaths::from_dir("/srv/storefront");
    let config = StorefrontConfig::default();

    assert_eq!(
        paths.storage_file(&config),
        PathBuf::from("/srv/storefront/local_storage.json")
    );
    assert_eq!(paths.log_dir(), PathBuf::from("/srv/storefront/logs"));
}

use frame_runtime::{BuildConfig, BuildMode, WidgetError};

#[test]
fn production_requires_git_ref() {
    let err = BuildConfig::new(BuildMode::Production, None, None).expect_err("git ref required");
    assert!(matches!(err, WidgetError::MissingGitRef));

    let err = BuildConfig::new(BuildMode::Production, None, Some(String::new()))
        .expect_err("empty git ref counts as missing");
    assert!(matches!(err, WidgetError::MissingGitRef));
}

#[test]
fn production_with_git_ref_is_accepted() {
    let config = BuildConfig::new(
        BuildMode::Production,
        Some("https://api.example.net".to_string()),
        Some("3f2c1e0".to_string()),
    )
    .unwrap();

    assert_eq!(config.git_ref.as_deref(), Some("3f2c1e0"));
}

#[test]
fn development_tolerates_missing_git_ref() {
    let config = BuildConfig::new(BuildMode::Development, None, Some(String::new())).unwrap();
    assert_eq!(config.git_ref, None);
    assert_eq!(config.api_endpoint, None);
}

#[test]
fn compiled_config_matches_build_mode() {
    let config = BuildConfig::compiled().unwrap();
    assert_eq!(config.mode, BuildMode::compiled());
}

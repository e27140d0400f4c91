use std::collections::HashSet;
use std::fs;
use std::path::Path;

use facet_core::Dimensions;
use facet_resolve::{Error, Resolver, ResolverConfig, find, OsDirFs};
use tempfile::tempdir;

fn dims() -> Dimensions {
    Dimensions::new(vec![
        vec!["dev".into(), "prod".into(), "test".into()],
        vec!["android".into(), "ios".into()],
    ])
    .unwrap()
}

fn selectors(tokens: &[&str]) -> HashSet<String> {
    tokens.iter().map(|t| t.to_string()).collect()
}

fn touch(path: &Path) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, b"").unwrap();
}

fn resolver(base: &Path, tokens: &[&str], filter_dir: bool) -> Resolver {
    let config = ResolverConfig::new(dims(), selectors(tokens)).filter_dir(filter_dir);
    Resolver::new(base, config)
}

#[test]
fn test_plain_file_resolves_to_itself() {
    let dir = tempdir().unwrap();
    touch(&dir.path().join("files/config.json"));

    let found = resolver(dir.path(), &["prod", "ios"], false)
        .resolve(Path::new("files/config.json"))
        .unwrap();

    assert_eq!(found, Some(dir.path().join("files/config.json")));
}

#[test]
fn test_most_specific_variant_wins() {
    let dir = tempdir().unwrap();
    touch(&dir.path().join("files/config.json"));
    touch(&dir.path().join("files/config-prod.json"));
    touch(&dir.path().join("files/config-prod-ios.json"));

    let found = resolver(dir.path(), &["prod", "ios"], false)
        .resolve(Path::new("files/config.json"))
        .unwrap();

    assert_eq!(found, Some(dir.path().join("files/config-prod-ios.json")));
}

#[test]
fn test_no_perfect_match_falls_back_to_plain() {
    let dir = tempdir().unwrap();
    touch(&dir.path().join("files/config.json"));
    touch(&dir.path().join("files/config-prod.json"));
    touch(&dir.path().join("files/config-prod-ios.json"));

    // `prod` is not active, so neither variant matches perfectly
    let found = resolver(dir.path(), &["dev"], false)
        .resolve(Path::new("files/config.json"))
        .unwrap();

    assert_eq!(found, Some(dir.path().join("files/config.json")));
}

#[test]
fn test_partially_matching_variant_is_excluded() {
    let dir = tempdir().unwrap();
    touch(&dir.path().join("files/config.json"));
    touch(&dir.path().join("files/config-prod-ios.json"));

    // `ios` is inactive: the prod-ios candidate is excluded outright
    // even though it would outscore everything else
    let found = resolver(dir.path(), &["prod"], false)
        .resolve(Path::new("files/config.json"))
        .unwrap();

    assert_eq!(found, Some(dir.path().join("files/config.json")));
}

#[test]
fn test_earlier_dimension_outranks_later_combination() {
    let dir = tempdir().unwrap();
    touch(&dir.path().join("files/name-prod-android.txt"));
    touch(&dir.path().join("files/name-ios.txt"));

    let found = resolver(dir.path(), &["prod", "android", "ios"], false)
        .resolve(Path::new("files/name.txt"))
        .unwrap();

    assert_eq!(found, Some(dir.path().join("files/name-prod-android.txt")));
}

#[test]
fn test_unrecognized_segment_never_matches() {
    let dir = tempdir().unwrap();
    touch(&dir.path().join("files/test.js"));
    touch(&dir.path().join("files/test-android-backup.js"));

    let found = resolver(dir.path(), &["android"], false)
        .resolve(Path::new("files/test.js"))
        .unwrap();

    assert_eq!(found, Some(dir.path().join("files/test.js")));
}

#[test]
fn test_missing_file_is_none_not_error() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("files")).unwrap();

    let found = resolver(dir.path(), &["prod"], false)
        .resolve(Path::new("files/config.json"))
        .unwrap();

    assert_eq!(found, None);
}

#[test]
fn test_variant_without_plain_file_still_resolves() {
    let dir = tempdir().unwrap();
    touch(&dir.path().join("files/config-ios.json"));

    let found = resolver(dir.path(), &["ios"], false)
        .resolve(Path::new("files/config.json"))
        .unwrap();

    assert_eq!(found, Some(dir.path().join("files/config-ios.json")));
}

#[test]
fn test_unreadable_directory_is_an_error() {
    let dir = tempdir().unwrap();

    let err = resolver(dir.path(), &["prod"], false)
        .resolve(Path::new("missing/config.json"))
        .unwrap_err();

    assert!(matches!(err, Error::DirectoryRead { .. }));
}

#[test]
fn test_directory_substitution() {
    let dir = tempdir().unwrap();
    touch(&dir.path().join("assets/logo.png"));
    touch(&dir.path().join("assets-ios/logo.png"));

    let found = resolver(dir.path(), &["ios"], true)
        .resolve(Path::new("assets/logo.png"))
        .unwrap();

    assert_eq!(found, Some(dir.path().join("assets-ios/logo.png")));
}

#[test]
fn test_directory_substitution_requires_downstream_file() {
    let dir = tempdir().unwrap();
    touch(&dir.path().join("assets/logo.png"));
    touch(&dir.path().join("assets-ios/other.png"));

    // assets-ios is a perfect match but does not hold the file
    let found = resolver(dir.path(), &["ios"], true)
        .resolve(Path::new("assets/logo.png"))
        .unwrap();

    assert_eq!(found, Some(dir.path().join("assets/logo.png")));
}

#[test]
fn test_directory_substitution_deep_in_hierarchy() {
    let dir = tempdir().unwrap();
    touch(&dir.path().join("my/sub/file.txt"));
    touch(&dir.path().join("my/sub-dev-android/file.txt"));

    let found = resolver(dir.path(), &["dev", "android"], true)
        .resolve(Path::new("my/sub/file.txt"))
        .unwrap();

    assert_eq!(found, Some(dir.path().join("my/sub-dev-android/file.txt")));
}

#[test]
fn test_directory_substitution_rejects_partial_match() {
    let dir = tempdir().unwrap();
    touch(&dir.path().join("assets/logo.png"));
    touch(&dir.path().join("assets-dev-ios/logo.png"));

    // only `dev` is active; the dev-ios directory is a partial match
    let found = resolver(dir.path(), &["dev"], true)
        .resolve(Path::new("assets/logo.png"))
        .unwrap();

    assert_eq!(found, Some(dir.path().join("assets/logo.png")));
}

#[test]
fn test_file_resolution_inside_substituted_directory() {
    let dir = tempdir().unwrap();
    touch(&dir.path().join("assets/config.json"));
    touch(&dir.path().join("assets-ios/config.json"));
    touch(&dir.path().join("assets-ios/config-prod.json"));

    let found = resolver(dir.path(), &["prod", "ios"], true)
        .resolve(Path::new("assets/config.json"))
        .unwrap();

    assert_eq!(found, Some(dir.path().join("assets-ios/config-prod.json")));
}

#[test]
fn test_find_with_absent_selectors_ignores_variants() {
    let dir = tempdir().unwrap();
    touch(&dir.path().join("files/config.json"));
    touch(&dir.path().join("files/config-android.json"));

    let found = find(
        &OsDirFs,
        &dir.path().join("files"),
        dir.path(),
        "config.json",
        &dims(),
        &HashSet::new(),
        false,
    )
    .unwrap();

    assert_eq!(found, Some(dir.path().join("files/config.json")));
}

#[test]
fn test_plain_path_collapses_derivations() {
    let dir = tempdir().unwrap();
    let r = resolver(dir.path(), &["ios"], false);

    assert_eq!(
        r.plain_path(&dir.path().join("assets-ios/config-prod.json")),
        dir.path().join("assets/config.json")
    );
}

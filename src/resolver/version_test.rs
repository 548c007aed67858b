use super::*;

// ========================================
// parse_lenient tests
// ========================================

#[test]
fn test_parse_lenient_full() {
    let version = parse_lenient("1.2.3").unwrap();
    assert_eq!(version.to_string(), "1.2.3");
}

#[test]
fn test_parse_lenient_v_prefix() {
    let version = parse_lenient("v2.0.1").unwrap();
    assert_eq!(version.to_string(), "2.0.1");
}

#[test]
fn test_parse_lenient_short() {
    assert_eq!(parse_lenient("1").unwrap().to_string(), "1.0.0");
    assert_eq!(parse_lenient("1.2").unwrap().to_string(), "1.2.0");
}

#[test]
fn test_parse_lenient_prerelease() {
    let version = parse_lenient("1.0.0-beta.1").unwrap();
    assert_eq!(version.to_string(), "1.0.0-beta.1");
}

#[test]
fn test_parse_lenient_invalid() {
    assert!(parse_lenient("").is_none());
    assert!(parse_lenient("latest").is_none());
    assert!(parse_lenient("1.2.3.4").is_none());
}

// ========================================
// is_newer tests
// ========================================

#[test]
fn test_is_newer_strictly_greater() {
    assert!(is_newer("1.2.0", "1.0.0"));
    assert!(is_newer("2.0.0", "1.9.9"));
}

#[test]
fn test_is_newer_equal_is_not_newer() {
    assert!(!is_newer("1.0.0", "1.0.0"));
}

#[test]
fn test_is_newer_older_is_not_newer() {
    assert!(!is_newer("0.9.0", "1.0.0"));
}

#[test]
fn test_is_newer_short_versions() {
    assert!(is_newer("1.1", "1"));
}

#[test]
fn test_is_newer_unparseable_never_newer() {
    assert!(!is_newer("latest", "1.0.0"));
    assert!(!is_newer("2.0.0", "unknown"));
    assert!(!is_newer("", ""));
}

// ========================================
// satisfies_dependency tests
// ========================================

#[test]
fn test_satisfies_dependency_in_range() {
    assert!(satisfies_dependency(Some(">=7.0.0"), "7.5.0"));
    assert!(satisfies_dependency(Some(">=7.0.0"), "8.0.0"));
}

#[test]
fn test_satisfies_dependency_below_range() {
    assert!(!satisfies_dependency(Some(">=8.0.0"), "7.5.0"));
}

#[test]
fn test_satisfies_dependency_no_range() {
    assert!(satisfies_dependency(None, "7.5.0"));
    assert!(satisfies_dependency(Some(""), "7.5.0"));
    assert!(satisfies_dependency(Some("   "), "7.5.0"));
}

#[test]
fn test_satisfies_dependency_unparseable_range() {
    // 不正な範囲はインストールを妨げない
    assert!(satisfies_dependency(Some("newer than 7"), "7.5.0"));
}

#[test]
fn test_satisfies_dependency_short_host_version() {
    assert!(satisfies_dependency(Some(">=7.0.0"), "7.5"));
}

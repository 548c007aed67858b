use super::*;

#[test]
fn test_status_deserialize_known() {
    let status: PluginStatus = serde_json::from_str("\"active\"").unwrap();
    assert_eq!(status, PluginStatus::Active);

    let status: PluginStatus = serde_json::from_str("\"enterprise\"").unwrap();
    assert_eq!(status, PluginStatus::Enterprise);
}

#[test]
fn test_status_deserialize_unknown() {
    let status: PluginStatus = serde_json::from_str("\"deprecated\"").unwrap();
    assert_eq!(status, PluginStatus::Unknown);
}

#[test]
fn test_plugin_deserialize_camel_case() {
    let json = r#"{
        "slug": "worldmap-panel",
        "name": "Worldmap Panel",
        "orgName": "Example Org",
        "orgSlug": "example-org",
        "status": "active",
        "versionSignatureType": "grafana",
        "version": "1.2.0",
        "downloads": 1200,
        "popularity": 0.8,
        "typeCode": "panel",
        "updatedAt": "2026-01-15T10:30:00Z",
        "createdAt": "2024-06-01T00:00:00Z",
        "packages": {
            "linux_amd64": {
                "packageName": "worldmap-linux-amd64",
                "downloadUrl": "https://example.com/worldmap-linux-amd64.zip"
            }
        },
        "links": [{"rel": "download", "href": "https://example.com/worldmap.zip"}],
        "json": {
            "dependencies": {"grafanaDependency": ">=7.0.0"}
        }
    }"#;

    let plugin: Plugin = serde_json::from_str(json).unwrap();

    assert_eq!(plugin.slug, "worldmap-panel");
    assert_eq!(plugin.org_name, "Example Org");
    assert_eq!(plugin.status, PluginStatus::Active);
    assert!(plugin.is_signed());
    assert_eq!(plugin.downloads, 1200);
    assert_eq!(plugin.type_code, "panel");
    assert_eq!(plugin.packages.len(), 1);
    assert_eq!(
        plugin.packages["linux_amd64"].download_url,
        "https://example.com/worldmap-linux-amd64.zip"
    );
    assert_eq!(plugin.dependency_range(), Some(">=7.0.0"));
    assert!(plugin.updated_time().is_some());
}

#[test]
fn test_plugin_deserialize_sparse() {
    // バックエンドが省略したフィールドはデフォルトで埋まる
    let plugin: Plugin = serde_json::from_str(r#"{"slug": "bare"}"#).unwrap();

    assert_eq!(plugin.slug, "bare");
    assert_eq!(plugin.status, PluginStatus::Unknown);
    assert!(!plugin.is_signed());
    assert!(plugin.packages.is_empty());
    assert!(plugin.dependency_range().is_none());
}

#[test]
fn test_is_signed_empty_string() {
    let plugin = Plugin {
        version_signature_type: Some(String::new()),
        ..Default::default()
    };
    assert!(!plugin.is_signed());
}

#[test]
fn test_download_link() {
    let plugin = Plugin {
        links: vec![
            PluginLink {
                rel: "self".to_string(),
                href: "https://example.com/api/plugins/x".to_string(),
            },
            PluginLink {
                rel: "download".to_string(),
                href: "https://example.com/x.zip".to_string(),
            },
        ],
        ..Default::default()
    };

    assert_eq!(plugin.download_link(), Some("https://example.com/x.zip"));
}

#[test]
fn test_download_link_absent() {
    let plugin = Plugin::default();
    assert_eq!(plugin.download_link(), None);
}

#[test]
fn test_local_plugin_deserialize() {
    let json = r#"{"id": "worldmap-panel", "version": "1.0.0", "dev": true}"#;
    let local: LocalPlugin = serde_json::from_str(json).unwrap();

    assert_eq!(local.id, "worldmap-panel");
    assert_eq!(local.version, "1.0.0");
    assert!(local.dev);
}

#[test]
fn test_packages_iterate_sorted() {
    let json = r#"{
        "slug": "multi-arch",
        "packages": {
            "windows_amd64": {"downloadUrl": "https://example.com/w.zip"},
            "darwin_amd64": {"downloadUrl": "https://example.com/d.zip"},
            "linux_amd64": {"downloadUrl": "https://example.com/l.zip"}
        }
    }"#;
    let plugin: Plugin = serde_json::from_str(json).unwrap();

    let archs: Vec<&String> = plugin.packages.keys().collect();
    assert_eq!(archs, vec!["darwin_amd64", "linux_amd64", "windows_amd64"]);
}

// ========================================
// parse_time tests
// ========================================

#[test]
fn test_parse_time_rfc3339() {
    assert!(parse_time("2026-01-15T10:30:00Z").is_some());
    assert!(parse_time("2026-01-15T10:30:00+09:00").is_some());
}

#[test]
fn test_parse_time_naive() {
    assert!(parse_time("2026-01-15T10:30:00").is_some());
    assert!(parse_time("2026-01-15 10:30:00").is_some());
}

#[test]
fn test_parse_time_date_only() {
    assert!(parse_time("2026-01-15").is_some());
}

#[test]
fn test_parse_time_invalid() {
    assert!(parse_time("").is_none());
    assert!(parse_time("yesterday").is_none());
}

#[test]
fn test_parse_time_ordering() {
    let older = parse_time("2024-06-01T00:00:00Z").unwrap();
    let newer = parse_time("2026-01-15T10:30:00Z").unwrap();
    assert!(newer > older);
}

use super::*;
use crate::catalog::SortField;

fn active(name: &str, org: &str, type_code: &str) -> Plugin {
    Plugin {
        slug: name.to_lowercase().replace(' ', "-"),
        name: name.to_string(),
        org_name: org.to_string(),
        org_slug: org.to_lowercase().replace(' ', "-"),
        status: PluginStatus::Active,
        version_signature_type: Some("grafana".to_string()),
        type_code: type_code.to_string(),
        ..Default::default()
    }
}

fn fixture() -> Vec<Plugin> {
    vec![
        active("Worldmap Panel", "Example Org", "panel"),
        active("SQL Datasource", "Acme", "datasource"),
        active("Status App", "Example Org", "app"),
    ]
}

fn names(selected: &[&Plugin]) -> Vec<String> {
    selected.iter().map(|p| p.name.clone()).collect()
}

#[test]
fn test_select_all_with_default_criteria() {
    let plugins = fixture();
    let selected = select(&plugins, &SelectCriteria::default());
    assert_eq!(selected.len(), 3);
}

#[test]
fn test_select_drops_non_active() {
    let mut plugins = fixture();
    plugins[0].status = PluginStatus::Enterprise;
    plugins[1].status = PluginStatus::Unknown;

    let selected = select(&plugins, &SelectCriteria::default());
    assert_eq!(names(&selected), vec!["Status App"]);
}

#[test]
fn test_select_drops_unsigned_by_default() {
    let mut plugins = fixture();
    plugins[1].version_signature_type = None;

    let selected = select(&plugins, &SelectCriteria::default());
    assert_eq!(selected.len(), 2);
    assert!(!names(&selected).contains(&"SQL Datasource".to_string()));
}

#[test]
fn test_select_keeps_unsigned_when_allowed() {
    let mut plugins = fixture();
    plugins[1].version_signature_type = None;

    let criteria = SelectCriteria {
        show_unsigned: true,
        ..Default::default()
    };
    assert_eq!(select(&plugins, &criteria).len(), 3);
}

#[test]
fn test_select_query_matches_name() {
    let plugins = fixture();
    let criteria = SelectCriteria {
        query: Some("worldmap".to_string()),
        ..Default::default()
    };

    assert_eq!(names(&select(&plugins, &criteria)), vec!["Worldmap Panel"]);
}

#[test]
fn test_select_query_matches_org_name() {
    let plugins = fixture();
    let criteria = SelectCriteria {
        query: Some("ACME".to_string()),
        ..Default::default()
    };

    assert_eq!(names(&select(&plugins, &criteria)), vec!["SQL Datasource"]);
}

#[test]
fn test_select_empty_query_matches_everything() {
    let plugins = fixture();
    let criteria = SelectCriteria {
        query: Some(String::new()),
        ..Default::default()
    };

    assert_eq!(select(&plugins, &criteria).len(), 3);
}

#[test]
fn test_select_type_filter() {
    let plugins = fixture();
    let criteria = SelectCriteria {
        type_filter: Some("datasource".to_string()),
        ..Default::default()
    };

    assert_eq!(names(&select(&plugins, &criteria)), vec!["SQL Datasource"]);
}

#[test]
fn test_select_type_filter_all_sentinel_is_identity() {
    let plugins = fixture();
    let unset = SelectCriteria::default();
    let sentinel = SelectCriteria {
        type_filter: Some(TYPE_FILTER_ALL.to_string()),
        ..Default::default()
    };

    assert_eq!(
        names(&select(&plugins, &unset)),
        names(&select(&plugins, &sentinel))
    );
}

#[test]
fn test_select_org_filter() {
    let plugins = fixture();
    let criteria = SelectCriteria {
        org: Some("example-org".to_string()),
        ..Default::default()
    };

    let selected = select(&plugins, &criteria);
    assert_eq!(selected.len(), 2);
    assert!(selected.iter().all(|p| p.org_slug == "example-org"));
}

#[test]
fn test_select_sort_by_downloads() {
    let mut beta = active("Beta", "Org", "panel");
    beta.downloads = 10;
    let mut alpha = active("Alpha", "Org", "panel");
    alpha.downloads = 50;
    let plugins = vec![beta, alpha];

    let criteria = SelectCriteria {
        sort: SortField::Downloads,
        ..Default::default()
    };
    assert_eq!(names(&select(&plugins, &criteria)), vec!["Alpha", "Beta"]);
}

#[test]
fn test_select_sort_by_name_default() {
    let plugins = vec![
        active("Beta", "Org", "panel"),
        active("Alpha", "Org", "panel"),
    ];

    let selected = select(&plugins, &SelectCriteria::default());
    assert_eq!(names(&selected), vec!["Alpha", "Beta"]);
}

#[test]
fn test_select_name_ties_keep_input_order() {
    let mut first = active("Same Name", "Org", "panel");
    first.slug = "first".to_string();
    let mut second = active("Same Name", "Org", "panel");
    second.slug = "second".to_string();
    let plugins = vec![first, second];

    let selected = select(&plugins, &SelectCriteria::default());
    assert_eq!(selected[0].slug, "first");
    assert_eq!(selected[1].slug, "second");
}

#[test]
fn test_select_returns_references_into_input() {
    let plugins = fixture();
    let selected = select(&plugins, &SelectCriteria::default());

    for entry in selected {
        assert!(plugins
            .iter()
            .any(|p| std::ptr::eq(p as *const Plugin, entry as *const Plugin)));
    }
}

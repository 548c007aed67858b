use super::*;
use crate::catalog::PluginStatus;
use crate::config::HttpConfig;

fn plugin(slug: &str, name: &str, type_code: &str) -> Plugin {
    Plugin {
        slug: slug.to_string(),
        name: name.to_string(),
        org_name: "Example Org".to_string(),
        org_slug: "example-org".to_string(),
        status: PluginStatus::Active,
        version: "1.2.0".to_string(),
        version_signature_type: Some("grafana".to_string()),
        type_code: type_code.to_string(),
        ..Default::default()
    }
}

fn local(slug: &str, version: &str) -> LocalPlugin {
    LocalPlugin {
        id: slug.to_string(),
        version: version.to_string(),
        dev: false,
        links: vec![],
    }
}

fn app() -> App {
    let settings = Settings {
        api_base: "http://localhost:0/api".to_string(),
        plugin_dir: "/tmp/plugins".to_string(),
        show_unsigned: false,
        host_version: "7.5.0".to_string(),
    };
    let client = RestClient::new(&HttpConfig::default(), settings.api_base.clone());

    App::new(
        settings,
        client,
        vec![
            plugin("alpha-panel", "Alpha", "panel"),
            plugin("beta-ds", "Beta", "datasource"),
        ],
        vec![local("beta-ds", "1.0.0")],
    )
}

// ========================================
// タブとナビゲーション
// ========================================

#[test]
fn test_tab_cycle() {
    assert_eq!(Tab::Discover.next(), Tab::Browse);
    assert_eq!(Tab::Browse.next(), Tab::Library);
    assert_eq!(Tab::Library.next(), Tab::Discover);
    assert_eq!(Tab::Discover.prev(), Tab::Library);
}

#[test]
fn test_tab_key_roundtrip() {
    for tab in Tab::all() {
        assert_eq!(Tab::from_key(Some(tab.key())), *tab);
    }
    assert_eq!(Tab::from_key(None), Tab::Discover);
    assert_eq!(Tab::from_key(Some("unknown")), Tab::Discover);
}

#[test]
fn test_switch_tab_pushes_history() {
    let mut app = app();

    app.switch_tab(Tab::Browse);

    assert_eq!(app.current_tab, Tab::Browse);
    assert_eq!(app.router.depth(), 1);

    app.back();
    assert_eq!(app.current_tab, Tab::Discover);
}

#[test]
fn test_commit_search_replaces_and_moves_to_browse() {
    let mut app = app();

    app.commit_search("alpha".to_string());

    assert_eq!(app.current_tab, Tab::Browse);
    assert_eq!(app.search_input, "alpha");
    // replace ナビゲーションなので履歴は増えない
    assert_eq!(app.router.depth(), 0);
}

#[test]
fn test_back_on_empty_history_quits() {
    let mut app = app();
    app.back();
    assert!(app.should_quit);
}

// ========================================
// 一覧
// ========================================

#[test]
fn test_browse_rows_reflect_query() {
    let mut app = app();
    app.commit_search("alpha".to_string());

    let rows = app.browse_rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].slug, "alpha-panel");
}

#[test]
fn test_browse_rows_mark_installed() {
    let app = app();

    let rows = app.browse_rows();
    let beta = rows.iter().find(|r| r.slug == "beta-ds").unwrap();
    assert!(beta.label.contains("[installed]"));
}

#[test]
fn test_library_rows_show_update_marker() {
    let app = app();

    let rows = app.library_rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].slug, "beta-ds");
    assert!(rows[0].label.contains("update available"));
}

#[test]
fn test_cycle_type_filter_updates_query() {
    let mut app = app();
    app.switch_tab(Tab::Browse);

    app.cycle_type_filter();
    assert_eq!(app.type_filter.as_deref(), Some("panel"));
    assert_eq!(app.browse_rows().len(), 1);

    app.cycle_type_filter();
    assert_eq!(app.type_filter.as_deref(), Some("datasource"));

    app.cycle_type_filter();
    assert_eq!(app.type_filter.as_deref(), Some("app"));

    // "all" センチネルで全件に戻る
    app.cycle_type_filter();
    assert_eq!(app.type_filter.as_deref(), Some("all"));
    assert_eq!(app.browse_rows().len(), 2);
}

#[test]
fn test_cycle_sort_updates_query() {
    let mut app = app();
    app.switch_tab(Tab::Browse);

    app.cycle_sort();
    assert_eq!(app.sort, SortField::Updated);
    assert_eq!(
        app.router.current().sort_by.as_deref(),
        Some("updated")
    );
}

#[test]
fn test_select_bounds() {
    let mut app = app();
    app.switch_tab(Tab::Browse);

    app.select_prev();
    assert_eq!(app.list_state.selected(), Some(0));

    app.select_next();
    assert_eq!(app.list_state.selected(), Some(1));

    // 末尾で止まる
    app.select_next();
    assert_eq!(app.list_state.selected(), Some(1));
}

// ========================================
// 詳細画面
// ========================================

#[test]
fn test_enter_detail_opens_session_for_selected_slug() {
    let mut app = app();
    app.switch_tab(Tab::Browse);
    app.list_state.select(Some(0));

    app.enter_detail();

    assert_eq!(app.screen, Screen::Detail);
    assert_eq!(
        app.session.as_ref().map(|s| s.slug()),
        Some("alpha-panel")
    );
    assert_eq!(
        app.router.current().slug.as_deref(),
        Some("alpha-panel")
    );
}

#[test]
fn test_back_from_detail_restores_list() {
    let mut app = app();
    app.switch_tab(Tab::Browse);
    app.list_state.select(Some(0));
    app.enter_detail();

    app.back();

    assert_eq!(app.screen, Screen::List);
    assert!(app.session.is_none());
    assert!(app.router.current().slug.is_none());
}

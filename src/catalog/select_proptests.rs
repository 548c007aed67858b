use super::*;
use crate::catalog::SortField;
use proptest::prelude::*;

/// プラグイン名に使う文字列
fn name_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9 -]{0,15}"
}

/// 任意のステータス
fn status_strategy() -> impl Strategy<Value = PluginStatus> {
    prop_oneof![
        Just(PluginStatus::Active),
        Just(PluginStatus::Enterprise),
        Just(PluginStatus::Unknown),
    ]
}

/// 任意のプラグイン
fn plugin_strategy() -> impl Strategy<Value = Plugin> {
    (
        name_strategy(),
        name_strategy(),
        status_strategy(),
        proptest::option::of("[a-z]{4,12}"),
        any::<u64>(),
        prop_oneof![
            Just("panel".to_string()),
            Just("datasource".to_string()),
            Just("app".to_string()),
        ],
    )
        .prop_map(|(name, org, status, signature, downloads, type_code)| Plugin {
            slug: name.to_lowercase().replace(' ', "-"),
            name,
            org_name: org.clone(),
            org_slug: org.to_lowercase().replace(' ', "-"),
            status,
            version_signature_type: signature,
            downloads,
            type_code,
            ..Default::default()
        })
}

fn criteria_strategy() -> impl Strategy<Value = SelectCriteria> {
    (
        proptest::option::of("[a-zA-Z]{0,6}"),
        proptest::option::of(prop_oneof![
            Just("all".to_string()),
            Just("panel".to_string()),
            Just("datasource".to_string()),
        ]),
        any::<bool>(),
        prop_oneof![
            Just(SortField::Name),
            Just(SortField::Downloads),
            Just(SortField::Popularity),
        ],
    )
        .prop_map(|(query, type_filter, show_unsigned, sort)| SelectCriteria {
            query,
            type_filter,
            org: None,
            sort,
            show_unsigned,
        })
}

proptest! {
    /// select は常に入力の部分集合を返す（捏造・重複なし）
    #[test]
    fn prop_select_returns_subset(
        plugins in proptest::collection::vec(plugin_strategy(), 0..20),
        criteria in criteria_strategy()
    ) {
        let selected = select(&plugins, &criteria);

        prop_assert!(selected.len() <= plugins.len());

        let mut seen: Vec<*const Plugin> = Vec::new();
        for entry in &selected {
            let ptr = *entry as *const Plugin;
            prop_assert!(plugins.iter().any(|p| std::ptr::eq(p, ptr)));
            prop_assert!(!seen.contains(&ptr));
            seen.push(ptr);
        }
    }

    /// 種別フィルタ未指定と "all" センチネルは同値
    #[test]
    fn prop_type_filter_all_is_identity(
        plugins in proptest::collection::vec(plugin_strategy(), 0..20),
        show_unsigned in any::<bool>()
    ) {
        let unset = SelectCriteria { show_unsigned, ..Default::default() };
        let sentinel = SelectCriteria {
            type_filter: Some("all".to_string()),
            show_unsigned,
            ..Default::default()
        };

        let a: Vec<&str> = select(&plugins, &unset).iter().map(|p| p.slug.as_str()).collect();
        let b: Vec<&str> = select(&plugins, &sentinel).iter().map(|p| p.slug.as_str()).collect();
        prop_assert_eq!(a, b);
    }

    /// name ソートで同名要素は入力順を保つ（安定性）
    #[test]
    fn prop_name_sort_is_stable(
        mut plugins in proptest::collection::vec(plugin_strategy(), 2..20)
    ) {
        // 全要素を同名・active・署名済みにして順序だけを観測する
        for (i, plugin) in plugins.iter_mut().enumerate() {
            plugin.name = "same".to_string();
            plugin.slug = format!("slug-{}", i);
            plugin.status = PluginStatus::Active;
            plugin.version_signature_type = Some("grafana".to_string());
        }

        let selected = select(&plugins, &SelectCriteria::default());
        let slugs: Vec<&str> = selected.iter().map(|p| p.slug.as_str()).collect();
        let expected: Vec<String> = (0..plugins.len()).map(|i| format!("slug-{}", i)).collect();
        prop_assert_eq!(slugs, expected.iter().map(String::as_str).collect::<Vec<_>>());
    }

    /// 返る要素はすべてフィルタ条件を満たす
    #[test]
    fn prop_selected_entries_satisfy_filters(
        plugins in proptest::collection::vec(plugin_strategy(), 0..20),
        criteria in criteria_strategy()
    ) {
        for entry in select(&plugins, &criteria) {
            prop_assert_eq!(entry.status, PluginStatus::Active);
            prop_assert!(entry.is_signed() || criteria.show_unsigned);

            if let Some(filter) = criteria.type_filter.as_deref() {
                prop_assert!(filter == "all" || entry.type_code == filter);
            }

            if let Some(query) = criteria.query.as_deref().filter(|q| !q.is_empty()) {
                let q = query.to_lowercase();
                prop_assert!(
                    entry.name.to_lowercase().contains(&q)
                        || entry.org_name.to_lowercase().contains(&q)
                );
            }
        }
    }
}

use super::*;
use std::cmp::Ordering;

fn plugin(name: &str) -> Plugin {
    Plugin {
        slug: name.to_lowercase(),
        name: name.to_string(),
        ..Default::default()
    }
}

#[test]
fn test_from_key_known() {
    assert_eq!(SortField::from_key(Some("updated")), SortField::Updated);
    assert_eq!(SortField::from_key(Some("published")), SortField::Published);
    assert_eq!(SortField::from_key(Some("downloads")), SortField::Downloads);
    assert_eq!(
        SortField::from_key(Some("popularity")),
        SortField::Popularity
    );
    assert_eq!(SortField::from_key(Some("name")), SortField::Name);
}

#[test]
fn test_from_key_unknown_falls_back_to_name() {
    assert_eq!(SortField::from_key(Some("stars")), SortField::Name);
    assert_eq!(SortField::from_key(None), SortField::Name);
}

#[test]
fn test_key_roundtrip() {
    for field in SortField::all() {
        assert_eq!(SortField::from_key(Some(field.key())), *field);
    }
}

#[test]
fn test_next_cycles() {
    let mut field = SortField::Name;
    for _ in 0..SortField::all().len() {
        field = field.next();
    }
    assert_eq!(field, SortField::Name);
}

#[test]
fn test_compare_name_case_insensitive() {
    let a = plugin("alpha");
    let b = plugin("Beta");
    assert_eq!(SortField::Name.compare(&a, &b), Ordering::Less);
}

#[test]
fn test_compare_downloads_descending() {
    let mut a = plugin("A");
    a.downloads = 50;
    let mut b = plugin("B");
    b.downloads = 10;

    assert_eq!(SortField::Downloads.compare(&a, &b), Ordering::Less);
    assert_eq!(SortField::Downloads.compare(&b, &a), Ordering::Greater);
}

#[test]
fn test_compare_popularity_descending() {
    let mut a = plugin("A");
    a.popularity = 0.9;
    let mut b = plugin("B");
    b.popularity = 0.1;

    assert_eq!(SortField::Popularity.compare(&a, &b), Ordering::Less);
}

#[test]
fn test_compare_updated_descending() {
    let mut older = plugin("older");
    older.updated_at = "2024-01-01T00:00:00Z".to_string();
    let mut newer = plugin("newer");
    newer.updated_at = "2026-01-01T00:00:00Z".to_string();

    assert_eq!(SortField::Updated.compare(&newer, &older), Ordering::Less);
}

#[test]
fn test_compare_updated_unparseable_sorts_last() {
    let mut valid = plugin("valid");
    valid.updated_at = "2024-01-01T00:00:00Z".to_string();
    let mut broken = plugin("broken");
    broken.updated_at = "not-a-date".to_string();

    assert_eq!(SortField::Updated.compare(&valid, &broken), Ordering::Less);
    assert_eq!(SortField::Updated.compare(&broken, &valid), Ordering::Greater);
}

#[test]
fn test_compare_equal_is_equal() {
    let mut a = plugin("same");
    a.downloads = 7;
    let mut b = plugin("same");
    b.downloads = 7;

    assert_eq!(SortField::Downloads.compare(&a, &b), Ordering::Equal);
    assert_eq!(SortField::Name.compare(&a, &b), Ordering::Equal);
}

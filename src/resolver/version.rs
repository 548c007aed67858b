//! バージョン比較
//!
//! リモート/ローカルのバージョン比較と、ホストバージョンの
//! 依存範囲判定。マーケットプレイス上のバージョン表記は揺れがあるため
//! 寛容にパースする。

use semver::{Version, VersionReq};

/// バージョン文字列を寛容にパース
///
/// - 先頭の "v" は除去
/// - 欠けた要素は 0 で補完（"1" → "1.0.0"、"1.2" → "1.2.0"）
pub fn parse_lenient(input: &str) -> Option<Version> {
    let trimmed = input.trim().trim_start_matches('v');
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(version) = Version::parse(trimmed) {
        return Some(version);
    }

    let padded = match trimmed.split('.').count() {
        1 => format!("{trimmed}.0.0"),
        2 => format!("{trimmed}.0"),
        _ => return None,
    };
    Version::parse(&padded).ok()
}

/// remote が local より厳密に新しいか
///
/// どちらかがパース不能な場合は更新を提示しない（false）。
pub fn is_newer(remote: &str, local: &str) -> bool {
    match (parse_lenient(remote), parse_lenient(local)) {
        (Some(r), Some(l)) => r > l,
        _ => false,
    }
}

/// ホストバージョンが依存範囲を満たすか
///
/// 範囲が未指定・空・パース不能な場合はインストールを妨げない（true）。
pub fn satisfies_dependency(range: Option<&str>, host_version: &str) -> bool {
    let Some(range) = range.map(str::trim).filter(|r| !r.is_empty()) else {
        return true;
    };

    let Ok(requirement) = VersionReq::parse(range) else {
        return true;
    };

    match parse_lenient(host_version) {
        Some(host) => requirement.matches(&host),
        None => true,
    }
}

#[cfg(test)]
#[path = "version_test.rs"]
mod tests;

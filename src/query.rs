//! ナビゲーション状態
//!
//! 元のパネルがクエリ文字列で持っていたルーティング状態。
//! 部分マージ（指定されなかったパラメータは保持）と、
//! push / replace の履歴セマンティクスを保存する。

/// ナビゲーションクエリ
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavQuery {
    pub q: Option<String>,
    pub filter_by: Option<String>,
    pub sort_by: Option<String>,
    pub slug: Option<String>,
    pub org_slug: Option<String>,
    pub tab: Option<String>,
}

/// 部分更新パッチ
///
/// None のフィールドは既存値を保持する（非破壊マージ）。
#[derive(Debug, Clone, Default)]
pub struct NavPatch {
    pub q: Option<String>,
    pub filter_by: Option<String>,
    pub sort_by: Option<String>,
    pub slug: Option<String>,
    pub org_slug: Option<String>,
    pub tab: Option<String>,
}

/// ナビゲーション種別
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavMode {
    /// 履歴に積む（戻る操作で復元される）
    Push,
    /// 現在のエントリを置き換える
    Replace,
}

impl NavQuery {
    /// パッチを非破壊マージした新しいクエリを返す
    pub fn merged(&self, patch: &NavPatch) -> NavQuery {
        NavQuery {
            q: patch.q.clone().or_else(|| self.q.clone()),
            filter_by: patch.filter_by.clone().or_else(|| self.filter_by.clone()),
            sort_by: patch.sort_by.clone().or_else(|| self.sort_by.clone()),
            slug: patch.slug.clone().or_else(|| self.slug.clone()),
            org_slug: patch.org_slug.clone().or_else(|| self.org_slug.clone()),
            tab: patch.tab.clone().or_else(|| self.tab.clone()),
        }
    }
}

/// 履歴つきルーター
#[derive(Debug, Default)]
pub struct Router {
    current: NavQuery,
    history: Vec<NavQuery>,
}

impl Router {
    /// 初期クエリでルーターを作成
    pub fn new(initial: NavQuery) -> Self {
        Self {
            current: initial,
            history: Vec::new(),
        }
    }

    pub fn current(&self) -> &NavQuery {
        &self.current
    }

    /// 履歴の深さ
    pub fn depth(&self) -> usize {
        self.history.len()
    }

    /// 部分更新を適用
    pub fn update(&mut self, patch: &NavPatch, mode: NavMode) {
        let next = self.current.merged(patch);
        match mode {
            NavMode::Push => {
                let previous = std::mem::replace(&mut self.current, next);
                self.history.push(previous);
            }
            NavMode::Replace => {
                self.current = next;
            }
        }
    }

    /// ひとつ前のエントリへ戻る
    pub fn back(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                self.current = previous;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
#[path = "query_test.rs"]
mod tests;

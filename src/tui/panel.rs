//! マーケットプレイスパネル
//!
//! Discover / Browse / Library タブと、プラグイン詳細画面を持つ。
//! ナビゲーション状態は Router（クエリ相当）に保持し、画面状態は
//! sync_from_query() でそこから導出する。
//!
//! バックエンド呼び出しはイベントループから block_in_place で
//! 同期的にブリッジする。実行中は DetailSession の Busy ガードが
//! 同一プラグインへの再実行を防ぐ。

use crate::api::{BackendClient, RestClient};
use crate::catalog::{
    featured, most_popular, recently_added, select, LocalPlugin, Plugin, SelectCriteria,
    SortField,
};
use crate::config::Settings;
use crate::query::{NavMode, NavPatch, NavQuery, Router};
use crate::resolver::{download_url, is_newer, Action, DetailSession, OperationOutcome};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Tabs};
use std::future::Future;
use std::io::{self, stdout};

/// タブ種別
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Discover,
    Browse,
    Library,
}

impl Tab {
    fn all() -> &'static [Tab] {
        &[Tab::Discover, Tab::Browse, Tab::Library]
    }

    fn title(&self) -> &'static str {
        match self {
            Tab::Discover => "Discover",
            Tab::Browse => "Browse",
            Tab::Library => "Library",
        }
    }

    fn key(&self) -> &'static str {
        match self {
            Tab::Discover => "discover",
            Tab::Browse => "browse",
            Tab::Library => "library",
        }
    }

    fn from_key(key: Option<&str>) -> Self {
        match key {
            Some("browse") => Tab::Browse,
            Some("library") => Tab::Library,
            _ => Tab::Discover,
        }
    }

    fn index(&self) -> usize {
        match self {
            Tab::Discover => 0,
            Tab::Browse => 1,
            Tab::Library => 2,
        }
    }

    fn from_index(index: usize) -> Self {
        match index % 3 {
            0 => Tab::Discover,
            1 => Tab::Browse,
            _ => Tab::Library,
        }
    }

    fn next(&self) -> Self {
        Self::from_index(self.index() + 1)
    }

    fn prev(&self) -> Self {
        Self::from_index(self.index() + 2)
    }
}

/// 画面状態
#[derive(Debug, Clone, PartialEq, Eq)]
enum Screen {
    /// タブ付き一覧
    List,
    /// プラグイン詳細
    Detail,
}

/// 入力モード
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InputMode {
    Normal,
    Search,
}

/// 一覧の表示行
struct ListRow {
    slug: String,
    label: String,
}

/// アプリケーション状態
struct App {
    settings: Settings,
    client: RestClient,
    plugins: Vec<Plugin>,
    installed: Vec<LocalPlugin>,
    router: Router,
    current_tab: Tab,
    screen: Screen,
    input_mode: InputMode,
    search_input: String,
    sort: SortField,
    type_filter: Option<String>,
    list_state: ListState,
    arch_state: ListState,
    session: Option<DetailSession>,
    selected_arch: Option<String>,
    status: Option<String>,
    should_quit: bool,
}

impl App {
    fn new(
        settings: Settings,
        client: RestClient,
        plugins: Vec<Plugin>,
        installed: Vec<LocalPlugin>,
    ) -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));

        Self {
            settings,
            client,
            plugins,
            installed,
            router: Router::new(NavQuery {
                tab: Some(Tab::Discover.key().to_string()),
                ..Default::default()
            }),
            current_tab: Tab::Discover,
            screen: Screen::List,
            input_mode: InputMode::Normal,
            search_input: String::new(),
            sort: SortField::Name,
            type_filter: None,
            list_state,
            arch_state: ListState::default(),
            session: None,
            selected_arch: None,
            status: None,
            should_quit: false,
        }
    }

    /// ナビゲーション状態から画面状態を導出する
    ///
    /// Router が唯一の情報源。タブ・検索・ソート・種別・詳細スラッグは
    /// すべてここで同期される。
    fn sync_from_query(&mut self) {
        let query = self.router.current().clone();

        self.current_tab = Tab::from_key(query.tab.as_deref());
        self.search_input = query.q.clone().unwrap_or_default();
        self.sort = SortField::from_key(query.sort_by.as_deref());
        self.type_filter = query.filter_by.clone();

        match query.slug.as_deref() {
            Some(slug) => {
                let changed = self
                    .session
                    .as_ref()
                    .map(|s| s.slug() != slug)
                    .unwrap_or(true);
                if changed {
                    let mut session =
                        DetailSession::new(slug.to_string(), self.settings.plugin_dir.clone());
                    let _ = block_on_backend(session.refresh(&self.client));
                    self.session = Some(session);
                    self.selected_arch = None;
                    self.arch_state = ListState::default();
                }
                self.screen = Screen::Detail;
            }
            None => {
                self.session = None;
                self.selected_arch = None;
                self.screen = Screen::List;
            }
        }
    }

    /// 現在のタブの絞り込み条件
    fn criteria(&self) -> SelectCriteria {
        SelectCriteria {
            query: if self.search_input.is_empty() {
                None
            } else {
                Some(self.search_input.clone())
            },
            type_filter: self.type_filter.clone(),
            org: None,
            sort: self.sort,
            show_unsigned: self.settings.show_unsigned,
        }
    }

    /// Browse タブの表示行
    fn browse_rows(&self) -> Vec<ListRow> {
        let selected = select(&self.plugins, &self.criteria());
        selected
            .iter()
            .map(|plugin| {
                let installed = if self.is_installed(&plugin.slug) {
                    " [installed]"
                } else {
                    ""
                };
                ListRow {
                    slug: plugin.slug.clone(),
                    label: format!(
                        "  {}  {} · v{}{}",
                        plugin.name, plugin.org_name, plugin.version, installed
                    ),
                }
            })
            .collect()
    }

    /// Library タブの表示行
    fn library_rows(&self) -> Vec<ListRow> {
        self.plugins
            .iter()
            .filter(|p| p.is_signed() || self.settings.show_unsigned)
            .filter_map(|plugin| {
                let local = self.installed.iter().find(|l| l.id == plugin.slug)?;
                let marker = if local.dev {
                    " (dev build)"
                } else if is_newer(&plugin.version, &local.version) {
                    " (update available)"
                } else {
                    ""
                };
                Some(ListRow {
                    slug: plugin.slug.clone(),
                    label: format!("  {}  v{}{}", plugin.name, local.version, marker),
                })
            })
            .collect()
    }

    /// 現在のタブの選択可能行
    fn current_rows(&self) -> Vec<ListRow> {
        match self.current_tab {
            Tab::Discover => Vec::new(),
            Tab::Browse => self.browse_rows(),
            Tab::Library => self.library_rows(),
        }
    }

    fn is_installed(&self, slug: &str) -> bool {
        self.installed.iter().any(|l| l.id == slug)
    }

    /// 詳細画面の解決済みアクション
    fn detail_action(&self) -> Option<Action> {
        self.session
            .as_ref()
            .and_then(|s| s.resolve(&self.settings.host_version, self.selected_arch.as_deref()))
    }

    fn is_busy(&self) -> bool {
        self.session
            .as_ref()
            .map(|s| s.phase().is_busy())
            .unwrap_or(false)
    }

    // ========================================================================
    // ナビゲーション操作
    // ========================================================================

    fn switch_tab(&mut self, tab: Tab) {
        self.router.update(
            &NavPatch {
                tab: Some(tab.key().to_string()),
                ..Default::default()
            },
            NavMode::Push,
        );
        self.sync_from_query();
        self.list_state.select(Some(0));
        self.status = None;
    }

    /// 検索を確定（Browse タブへ遷移、replace ナビゲーション）
    fn commit_search(&mut self, query: String) {
        self.router.update(
            &NavPatch {
                q: Some(query),
                tab: Some(Tab::Browse.key().to_string()),
                ..Default::default()
            },
            NavMode::Replace,
        );
        self.sync_from_query();
        self.list_state.select(Some(0));
    }

    fn cycle_sort(&mut self) {
        let next = self.sort.next();
        self.router.update(
            &NavPatch {
                sort_by: Some(next.key().to_string()),
                ..Default::default()
            },
            NavMode::Replace,
        );
        self.sync_from_query();
    }

    fn cycle_type_filter(&mut self) {
        let next = match self.type_filter.as_deref() {
            None | Some("all") => "panel",
            Some("panel") => "datasource",
            Some("datasource") => "app",
            _ => "all",
        };
        self.router.update(
            &NavPatch {
                filter_by: Some(next.to_string()),
                ..Default::default()
            },
            NavMode::Replace,
        );
        self.sync_from_query();
        self.list_state.select(Some(0));
    }

    /// 選択中のプラグインの詳細を開く
    fn enter_detail(&mut self) {
        let rows = self.current_rows();
        let Some(index) = self.list_state.selected() else {
            return;
        };
        let Some(row) = rows.get(index) else {
            return;
        };

        self.router.update(
            &NavPatch {
                slug: Some(row.slug.clone()),
                ..Default::default()
            },
            NavMode::Push,
        );
        self.sync_from_query();
        self.status = None;
    }

    /// 前のナビゲーションエントリへ戻る
    fn back(&mut self) {
        if self.router.back() {
            self.sync_from_query();
            self.status = None;
        } else {
            self.should_quit = true;
        }
    }

    // ========================================================================
    // バックエンド操作
    // ========================================================================

    /// 一覧データを取り直す（失敗時は手元のデータを維持）
    fn reload_lists(&mut self) {
        if let Some(Ok(plugins)) = block_on_backend(self.client.list_plugins()) {
            self.plugins = plugins;
        }
        if let Some(Ok(installed)) =
            block_on_backend(self.client.list_installed(&self.settings.plugin_dir))
        {
            self.installed = installed;
        }
    }

    fn run_install(&mut self) {
        let Some(action) = self.detail_action() else {
            return;
        };
        let Some(url) = action.install_url().map(str::to_string) else {
            return;
        };
        let Some(session) = self.session.as_mut() else {
            return;
        };

        let outcome = block_on_backend(session.install(&self.client, &url));
        self.finish_operation(outcome, "Install", true);
    }

    fn run_update(&mut self) {
        let Some(action) = self.detail_action() else {
            return;
        };
        if !action.offers_update() {
            return;
        }
        let Some(url) = self
            .session
            .as_ref()
            .and_then(|s| s.snapshot())
            .and_then(|s| download_url(&s.remote, self.selected_arch.as_deref()))
        else {
            self.status = Some("No download available for the latest version".to_string());
            return;
        };
        let Some(session) = self.session.as_mut() else {
            return;
        };

        let outcome = block_on_backend(session.update(&self.client, &url));
        self.finish_operation(outcome, "Update", true);
    }

    fn run_uninstall(&mut self) {
        let Some(action) = self.detail_action() else {
            return;
        };
        if !action.offers_uninstall() {
            return;
        }
        let Some(session) = self.session.as_mut() else {
            return;
        };

        let outcome = block_on_backend(session.uninstall(&self.client));
        self.finish_operation(outcome, "Uninstall", false);
    }

    /// 操作後の共通処理: 一覧を取り直し、リフレッシュ済みの状態から
    /// ステータス行を組み立てる
    ///
    /// expect_installed は操作が成功した場合にローカル記述子が
    /// 存在するはずかどうか。
    fn finish_operation(
        &mut self,
        outcome: Option<OperationOutcome>,
        op: &str,
        expect_installed: bool,
    ) {
        self.reload_lists();

        match outcome {
            Some(OperationOutcome::SkippedBusy) => {
                self.status = Some("Another operation is in progress".to_string());
            }
            Some(_) => {
                // 成否はリフレッシュ後の状態で報告する
                let local_version = self
                    .session
                    .as_ref()
                    .and_then(|s| s.snapshot())
                    .and_then(|s| s.local.as_ref())
                    .map(|l| l.version.clone());

                self.status = Some(if local_version.is_some() == expect_installed {
                    match local_version {
                        Some(version) => format!("{} succeeded (now at {})", op, version),
                        None => format!("{} succeeded", op),
                    }
                } else {
                    format!("{} did not take effect", op)
                });
            }
            None => {
                self.status = Some(format!("{} could not be started", op));
            }
        }
    }

    // ========================================================================
    // キー入力
    // ========================================================================

    fn handle_key(&mut self, key: KeyCode) {
        if self.input_mode == InputMode::Search {
            self.handle_search_key(key);
            return;
        }

        match self.screen {
            Screen::List => self.handle_list_key(key),
            Screen::Detail => self.handle_detail_key(key),
        }
    }

    fn handle_search_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Enter => {
                self.input_mode = InputMode::Normal;
                self.commit_search(self.search_input.clone());
            }
            KeyCode::Esc => {
                // 確定せずに検索前の状態へ戻す
                self.input_mode = InputMode::Normal;
                self.search_input = self
                    .router
                    .current()
                    .q
                    .clone()
                    .unwrap_or_default();
            }
            KeyCode::Backspace => {
                self.search_input.pop();
            }
            KeyCode::Char(c) => {
                self.search_input.push(c);
            }
            _ => {}
        }
    }

    fn handle_list_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Esc => self.back(),
            KeyCode::Tab => self.switch_tab(self.current_tab.next()),
            KeyCode::BackTab => self.switch_tab(self.current_tab.prev()),
            KeyCode::Char('/') => {
                self.input_mode = InputMode::Search;
            }
            KeyCode::Char('s') => {
                if self.current_tab == Tab::Browse {
                    self.cycle_sort();
                }
            }
            KeyCode::Char('f') => {
                if self.current_tab == Tab::Browse {
                    self.cycle_type_filter();
                }
            }
            KeyCode::Up | KeyCode::Char('k') => self.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Enter => self.enter_detail(),
            _ => {}
        }
    }

    fn handle_detail_key(&mut self, key: KeyCode) {
        // Busy 中は操作キーを受け付けない（二重実行防止）
        if self.is_busy() {
            return;
        }

        match key {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Esc => self.back(),
            KeyCode::Char('i') => self.run_install(),
            KeyCode::Char('u') => self.run_update(),
            KeyCode::Char('x') => self.run_uninstall(),
            KeyCode::Char('r') => {
                if let Some(session) = self.session.as_mut() {
                    let _ = block_on_backend(session.refresh(&self.client));
                }
                self.reload_lists();
                self.status = None;
            }
            KeyCode::Up | KeyCode::Char('k') => self.arch_select(-1),
            KeyCode::Down | KeyCode::Char('j') => self.arch_select(1),
            KeyCode::Enter => self.arch_commit(),
            _ => {}
        }
    }

    // ========================================================================
    // 選択移動
    // ========================================================================

    fn select_prev(&mut self) {
        let len = self.current_rows().len();
        if len == 0 {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        self.list_state.select(Some(current.saturating_sub(1)));
    }

    fn select_next(&mut self) {
        let len = self.current_rows().len();
        if len == 0 {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        self.list_state.select(Some((current + 1).min(len - 1)));
    }

    /// アーキテクチャ選択肢のカーソル移動
    fn arch_select(&mut self, delta: i64) {
        let Some(Action::ArchitectureChoice { options }) = self.detail_action() else {
            return;
        };
        if options.is_empty() {
            return;
        }

        let current = self.arch_state.selected().unwrap_or(0) as i64;
        let next = (current + delta).clamp(0, options.len() as i64 - 1) as usize;
        self.arch_state.select(Some(next));
    }

    /// アーキテクチャを確定（以後 Install が提示される）
    fn arch_commit(&mut self) {
        let Some(Action::ArchitectureChoice { options }) = self.detail_action() else {
            return;
        };
        let Some(index) = self.arch_state.selected() else {
            return;
        };
        if let Some(option) = options.get(index) {
            self.selected_arch = Some(option.arch.clone());
        }
    }
}

/// 現在のランタイムでバックエンド呼び出しを同期実行する
fn block_on_backend<F, T>(future: F) -> Option<T>
where
    F: Future<Output = T>,
{
    let handle = tokio::runtime::Handle::try_current().ok()?;
    Some(tokio::task::block_in_place(|| handle.block_on(future)))
}

// ============================================================================
// レンダリング
// ============================================================================

/// UI をレンダリング
fn render(f: &mut Frame, app: &mut App) {
    f.render_widget(Clear, f.area());

    match app.screen {
        Screen::List => render_list_screen(f, app),
        Screen::Detail => render_detail_screen(f, app),
    }
}

/// タブ付き一覧画面
fn render_list_screen(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // タブバー
            Constraint::Length(1), // 検索/フィルタ行
            Constraint::Min(1),    // コンテンツ
            Constraint::Length(1), // ステータス
            Constraint::Length(1), // ヘルプ
        ])
        .split(f.area());

    // タブバー
    let tab_titles: Vec<&str> = Tab::all().iter().map(|t| t.title()).collect();
    let tabs = Tabs::new(tab_titles)
        .select(app.current_tab.index())
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .divider(" | ");
    f.render_widget(tabs, chunks[0]);

    // 検索/フィルタ行
    let filter_label = app.type_filter.as_deref().unwrap_or("all");
    let search_marker = if app.input_mode == InputMode::Search {
        "▌"
    } else {
        ""
    };
    let search_line = format!(
        " /{}{}  [show: {}] [sort: {}]",
        app.search_input,
        search_marker,
        filter_label,
        app.sort.key()
    );
    let search_style = if app.input_mode == InputMode::Search {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    f.render_widget(Paragraph::new(search_line).style(search_style), chunks[1]);

    // コンテンツ
    match app.current_tab {
        Tab::Discover => render_discover_tab(f, app, chunks[2]),
        Tab::Browse => render_selectable_tab(f, app, chunks[2], "Browse"),
        Tab::Library => render_selectable_tab(f, app, chunks[2], "Library"),
    }

    // ステータス
    let status = app.status.clone().unwrap_or_default();
    f.render_widget(
        Paragraph::new(status).style(Style::default().fg(Color::Yellow)),
        chunks[3],
    );

    // ヘルプ
    let help_text = match app.current_tab {
        Tab::Browse => {
            " Tab: switch · /: search · s: sort · f: filter · ↑/↓: move · Enter: details · q: quit"
        }
        Tab::Library => " Tab: switch · ↑/↓: move · Enter: details · q: quit",
        _ => " Tab: switch · /: search · q: quit",
    };
    f.render_widget(
        Paragraph::new(help_text).style(Style::default().fg(Color::DarkGray)),
        chunks[4],
    );
}

/// Discover タブ（サマリーセクション）
fn render_discover_tab(f: &mut Frame, app: &App, area: Rect) {
    let selected = select(&app.plugins, &app.criteria());

    let mut lines: Vec<String> = Vec::new();
    for (title, section) in [
        ("Featured", featured(&selected)),
        ("Most popular", most_popular(&selected)),
        ("Recently added", recently_added(&selected)),
    ] {
        lines.push(format!("{}:", title));
        if section.is_empty() {
            lines.push("  (none)".to_string());
        }
        for plugin in section {
            lines.push(format!(
                "  {}  {} · v{}",
                plugin.name, plugin.org_name, plugin.version
            ));
        }
        lines.push(String::new());
    }
    lines.push("Press Tab for Browse, / to search".to_string());

    let content = Paragraph::new(lines.join("\n")).block(
        Block::default()
            .title(" Discover ")
            .borders(Borders::ALL),
    );
    f.render_widget(content, area);
}

/// Browse / Library タブ（選択可能リスト)
fn render_selectable_tab(f: &mut Frame, app: &mut App, area: Rect, title: &str) {
    let rows = app.current_rows();
    let items: Vec<ListItem> = rows.iter().map(|r| ListItem::new(r.label.clone())).collect();

    let block_title = format!(" {} ({}) ", title, rows.len());
    let list = List::new(items)
        .block(Block::default().title(block_title).borders(Borders::ALL))
        .highlight_style(
            Style::default()
                .add_modifier(Modifier::BOLD)
                .fg(Color::Green),
        )
        .highlight_symbol("> ");

    f.render_stateful_widget(list, area, &mut app.list_state);
}

/// プラグイン詳細画面
fn render_detail_screen(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // コンテンツ
            Constraint::Length(1), // ステータス
            Constraint::Length(1), // ヘルプ
        ])
        .split(f.area());

    let Some(snapshot) = app.session.as_ref().and_then(|s| s.snapshot()).cloned() else {
        let content = Paragraph::new("\n  Plugin could not be loaded (press r to retry)")
            .block(Block::default().title(" Detail ").borders(Borders::ALL));
        f.render_widget(content, chunks[0]);
        render_detail_footer(f, app, &chunks, " Esc: back · r: refresh · q: quit");
        return;
    };

    let remote = &snapshot.remote;
    let action = app.detail_action().unwrap_or(Action::None);
    let busy = app.is_busy();

    let mut lines: Vec<String> = Vec::new();
    lines.push(format!("  {}", remote.org_name));
    if !remote.description.is_empty() {
        lines.push(format!("  {}", remote.description));
    }
    lines.push(String::new());
    lines.push(format!("  Version:   {}", remote.version));
    lines.push(format!("  Downloads: {}", remote.downloads));
    if let Some(local) = &snapshot.local {
        let dev = if local.dev { " (dev build)" } else { "" };
        lines.push(format!("  Installed: {}{}", local.version, dev));
    }
    lines.push(String::new());

    if busy {
        lines.push("  Working...".to_string());
    } else {
        match &action {
            Action::None => lines.push("  No install action available".to_string()),
            Action::Unsupported(reason) => lines.push(format!("  {}", reason.message())),
            Action::Install { .. } => lines.push("  [i] Install".to_string()),
            Action::UpdateAndUninstall { update_to } => {
                if let Some(version) = update_to {
                    lines.push(format!("  [u] Update to {}", version));
                }
                lines.push("  [x] Uninstall".to_string());
            }
            Action::ArchitectureChoice { .. } => {
                lines.push("  Select an architecture (Enter to choose):".to_string());
            }
        }
    }

    // アーキテクチャ選択はリストとして重ねる
    if let (false, Action::ArchitectureChoice { options }) = (busy, &action) {
        let header_height = (lines.len() as u16) + 2;
        let inner = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(header_height), Constraint::Min(1)])
            .split(chunks[0]);

        let content = Paragraph::new(lines.join("\n")).block(
            Block::default()
                .title(format!(" {} ", remote.name))
                .borders(Borders::ALL),
        );
        f.render_widget(content, inner[0]);

        let items: Vec<ListItem> = options
            .iter()
            .map(|o| ListItem::new(format!("  {}", o.arch)))
            .collect();
        let list = List::new(items)
            .block(
                Block::default()
                    .title(" Architectures ")
                    .borders(Borders::ALL),
            )
            .highlight_style(
                Style::default()
                    .add_modifier(Modifier::BOLD)
                    .fg(Color::Green),
            )
            .highlight_symbol("> ");
        if app.arch_state.selected().is_none() {
            app.arch_state.select(Some(0));
        }
        f.render_stateful_widget(list, inner[1], &mut app.arch_state);
    } else {
        let content = Paragraph::new(lines.join("\n")).block(
            Block::default()
                .title(format!(" {} ", remote.name))
                .borders(Borders::ALL),
        );
        f.render_widget(content, chunks[0]);
    }

    let help = if busy {
        " (operation in progress)"
    } else {
        match &action {
            Action::Install { .. } => " i: install · Esc: back · q: quit",
            Action::UpdateAndUninstall {
                update_to: Some(_),
            } => " u: update · x: uninstall · Esc: back · q: quit",
            Action::UpdateAndUninstall { update_to: None } => {
                " x: uninstall · Esc: back · q: quit"
            }
            Action::ArchitectureChoice { .. } => {
                " ↑/↓: move · Enter: choose · Esc: back · q: quit"
            }
            _ => " Esc: back · r: refresh · q: quit",
        }
    };
    render_detail_footer(f, app, &chunks, help);
}

fn render_detail_footer(f: &mut Frame, app: &App, chunks: &[Rect], help: &str) {
    let status = app.status.clone().unwrap_or_default();
    f.render_widget(
        Paragraph::new(status).style(Style::default().fg(Color::Yellow)),
        chunks[1],
    );
    f.render_widget(
        Paragraph::new(help.to_string()).style(Style::default().fg(Color::DarkGray)),
        chunks[2],
    );
}

/// パネルを実行
pub fn run(
    settings: Settings,
    client: RestClient,
    plugins: Vec<Plugin>,
    installed: Vec<LocalPlugin>,
) -> io::Result<()> {
    terminal::enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(settings, client, plugins, installed);

    while !app.should_quit {
        terminal.draw(|f| render(f, &mut app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                app.handle_key(key.code);
            }
        }
    }

    terminal::disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    Ok(())
}

#[cfg(test)]
#[path = "panel_test.rs"]
mod tests;

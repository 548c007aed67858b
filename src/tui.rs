//! マーケットプレイスパネル (TUI)
//!
//! ratatui/crossterm によるタブ付きパネルを提供する。

mod panel;

pub use panel::run;

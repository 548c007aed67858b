//! プラグインカタログ
//!
//! リモート/ローカルのプラグイン記述子と、一覧の絞り込み・ソート
//! パイプラインを提供する。

mod criteria;
mod plugin;
mod sections;
mod select;

pub use criteria::{SelectCriteria, SortField, TYPE_FILTER_ALL};
pub use plugin::{
    parse_time, LocalPlugin, NamedLink, Plugin, PluginLink, PluginPackage, PluginStatus,
};
pub use sections::{featured, most_popular, recently_added, SECTION_LIMIT};
pub use select::select;

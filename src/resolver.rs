//! インストールアクションレゾルバ
//!
//! Functional Core / Imperative Shell:
//! - resolve: (リモート, ローカル) からアクションを決める純粋関数
//! - DetailSession: Busy ガードとリフレッシュを持つ実行シェル

mod action;
mod resolve;
mod session;
mod version;

pub use action::{Action, ArchOption, UnsupportedReason};
pub use resolve::{download_url, resolve};
pub use session::{DetailSession, OperationOutcome, Phase, Snapshot};
pub use version::{is_newer, parse_lenient, satisfies_dependency};

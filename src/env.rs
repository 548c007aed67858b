/// 環境変数ユーティリティ
pub struct EnvVar;

impl EnvVar {
    /// 環境変数を取得（空文字列はNoneとして扱う）
    pub fn get(key: &str) -> Option<String> {
        std::env::var(key).ok().filter(|s| !s.is_empty())
    }

    /// 環境変数を真偽値として取得
    ///
    /// "1" / "true" / "yes" を true、"0" / "false" / "no" を false とみなす。
    /// それ以外・未設定は None。
    pub fn get_bool(key: &str) -> Option<bool> {
        match Self::get(key)?.to_lowercase().as_str() {
            "1" | "true" | "yes" => Some(true),
            "0" | "false" | "no" => Some(false),
            _ => None,
        }
    }
}

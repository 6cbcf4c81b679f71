// ログ初期化
// 標準出力はツール出力の転送に使うため、ログは全て標準エラーへ出す

use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// `RUST_LOG` 未設定時のフィルタ
pub const DEFAULT_FILTER: &str = "batch_convert=info";

/// tracingサブスクライバを初期化（二重初期化は無視）
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}

use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;

use batch_convert::cli::{execute_convert, validate_args, Cli, USAGE};
use batch_convert::logging;

#[tokio::main]
async fn main() -> Result<()> {
    logging::init();

    // 1. 引数解析（誤りは使い方を出して終了）
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            tracing::debug!("引数解析エラー: {e}");
            println!("{USAGE}");
            std::process::exit(1);
        }
    };

    // 2. 実行前チェック
    let request = match validate_args(&cli).await {
        Ok(request) => request,
        Err(e) => {
            println!("{e}");
            std::process::exit(1);
        }
    };

    // 3. バッチ変換
    let report = execute_convert(request).await?;

    let summary = &report.summary;
    if summary.failed_items > 0 {
        tracing::warn!("{}件の変換に失敗しました", summary.failed_items);
    }

    Ok(())
}

// バッチ実行結果のJSON出力

use crate::core::{BatchReport, ConversionError, ConversionResult};
use std::path::Path;

/// レポートを整形済みJSONとして書き出す
pub async fn write_json_report(path: &Path, report: &BatchReport) -> ConversionResult<()> {
    let json = serde_json::to_string_pretty(report)
        .map_err(|e| ConversionError::report(path, anyhow::anyhow!("JSON変換エラー: {e}")))?;

    tokio::fs::write(path, json)
        .await
        .map_err(|e| ConversionError::report(path, anyhow::anyhow!("ファイル書き込みエラー: {e}")))?;

    Ok(())
}

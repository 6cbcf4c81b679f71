// 高レベル公開API
// BatchConverterを簡単に使用できるようにするための便利な関数

use super::{BatchConverter, DefaultConversionConfig, StdoutSink};
use crate::core::{BatchReport, ConversionResult};
use crate::storage::local::LocalStorageBackend;
use crate::tool::ScriptConversionTool;
use std::path::Path;

/// 標準構成のエンジン型
pub type DefaultBatchConverter =
    BatchConverter<LocalStorageBackend, ScriptConversionTool, DefaultConversionConfig, StdoutSink>;

/// ローカルファイルシステムと標準出力を使うエンジンを作成
pub fn create_default_converter(
    tool: ScriptConversionTool,
    concurrency: usize,
) -> DefaultBatchConverter {
    BatchConverter::new(
        LocalStorageBackend::new(),
        tool,
        DefaultConversionConfig::default().with_max_concurrent(concurrency),
        StdoutSink::new(),
    )
}

/// 既定のツール（`/app` の `./sgfutils.sh`）で `source_dir` 直下を変換
///
/// `concurrency` 個までのツールを同時に実行し、全件終了後に戻る。
pub async fn convert(
    source_dir: impl AsRef<Path>,
    destination_dir: impl AsRef<Path>,
    concurrency: usize,
) -> ConversionResult<BatchReport> {
    convert_with_tool(
        ScriptConversionTool::default(),
        source_dir,
        destination_dir,
        concurrency,
    )
    .await
}

/// 任意のツールで `source_dir` 直下を変換
pub async fn convert_with_tool(
    tool: ScriptConversionTool,
    source_dir: impl AsRef<Path>,
    destination_dir: impl AsRef<Path>,
    concurrency: usize,
) -> ConversionResult<BatchReport> {
    create_default_converter(tool, concurrency)
        .convert(source_dir.as_ref(), destination_dir.as_ref())
        .await
}

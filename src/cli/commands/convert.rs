use crate::cli::Cli;
use crate::core::{BatchReport, ConversionError};
use crate::processing::{create_default_converter, write_json_report};
use crate::storage::{local::LocalStorageBackend, StorageBackend};
use crate::tool::ScriptConversionTool;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// 実行前チェックのエラー（メッセージはそのまま標準出力に出す）
#[derive(Error, Debug)]
pub enum PreflightError {
    #[error("Please check the source folder path is valid!")]
    InvalidSource,

    #[error("Please check the save folder path is valid !")]
    InvalidSave,

    #[error("Please check the thread count is a positive integer: {0}")]
    InvalidThreadCount(String),

    #[error(transparent)]
    Path(#[from] ConversionError),
}

/// 検証済みの実行パラメータ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertRequest {
    pub source_dir: PathBuf,
    pub save_dir: PathBuf,
    pub thread_count: usize,
    pub tool: PathBuf,
    pub tool_dir: PathBuf,
    pub timeout: Option<Duration>,
    pub report: Option<PathBuf>,
}

/// 引数の検証
///
/// ソース・保存先が既存のディレクトリであること、スレッド数が正の整数であることを確認し、
/// パスを絶対パスにして返す。
pub async fn validate_args(cli: &Cli) -> Result<ConvertRequest, PreflightError> {
    let storage = LocalStorageBackend::new();

    if !storage.is_directory(&cli.source_path).await {
        return Err(PreflightError::InvalidSource);
    }
    if !storage.is_directory(&cli.save_path).await {
        return Err(PreflightError::InvalidSave);
    }

    let thread_count = parse_thread_count(&cli.thread_count)?;

    Ok(ConvertRequest {
        source_dir: absolute(&cli.source_path)?,
        save_dir: absolute(&cli.save_path)?,
        thread_count,
        tool: cli.tool.clone(),
        tool_dir: absolute(&cli.tool_dir)?,
        timeout: cli.timeout_secs.map(Duration::from_secs),
        report: cli.report.clone(),
    })
}

fn parse_thread_count(raw: &str) -> Result<usize, PreflightError> {
    match raw.trim().parse::<usize>() {
        Ok(count) if count > 0 => Ok(count),
        _ => Err(PreflightError::InvalidThreadCount(raw.to_string())),
    }
}

fn absolute(path: &Path) -> Result<PathBuf, ConversionError> {
    std::path::absolute(path).map_err(|e| ConversionError::path_resolution(path, e))
}

/// バッチ変換を実行し、指定があればレポートを書き出す
pub async fn execute_convert(request: ConvertRequest) -> anyhow::Result<BatchReport> {
    let mut tool = ScriptConversionTool::new(&request.tool, &request.tool_dir);
    if let Some(timeout) = request.timeout {
        tool = tool.with_timeout(timeout);
    }

    let converter = create_default_converter(tool, request.thread_count);
    let report = converter
        .convert(&request.source_dir, &request.save_dir)
        .await?;

    if let Some(path) = &request.report {
        write_json_report(path, &report).await?;
        tracing::info!(path = %path.display(), "report written");
    }

    Ok(report)
}

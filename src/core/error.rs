// バッチ変換専用のカスタムエラー型定義

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// バッチ変換固有のエラー型
#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("ディレクトリ一覧取得エラー: {}", .path.display())]
    ListingError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("パス解決エラー: {}", .path.display())]
    PathResolutionError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("ツール起動エラー: {tool}")]
    SpawnError {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    #[error("ツール出力読み取りエラー: {tool}")]
    OutputError {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    #[error("ツールタイムアウト: {tool} ({timeout:?})")]
    TimeoutError { tool: String, timeout: Duration },

    #[error("タスクエラー: {source}")]
    TaskError {
        #[source]
        source: tokio::task::JoinError,
    },

    #[error("設定エラー: {message}")]
    ConfigurationError { message: String },

    #[error("レポート出力エラー: {}", .path.display())]
    ReportError {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },
}

/// バッチ変換のResult型エイリアス
pub type ConversionResult<T> = Result<T, ConversionError>;

impl ConversionError {
    pub fn listing(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ListingError {
            path: path.into(),
            source,
        }
    }

    pub fn path_resolution(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::PathResolutionError {
            path: path.into(),
            source,
        }
    }

    pub fn spawn(tool: impl Into<String>, source: std::io::Error) -> Self {
        Self::SpawnError {
            tool: tool.into(),
            source,
        }
    }

    pub fn output(tool: impl Into<String>, source: std::io::Error) -> Self {
        Self::OutputError {
            tool: tool.into(),
            source,
        }
    }

    pub fn timeout(tool: impl Into<String>, timeout: Duration) -> Self {
        Self::TimeoutError {
            tool: tool.into(),
            timeout,
        }
    }

    pub fn task(source: tokio::task::JoinError) -> Self {
        Self::TaskError { source }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::ConfigurationError {
            message: message.into(),
        }
    }

    pub fn report(path: impl Into<PathBuf>, source: anyhow::Error) -> Self {
        Self::ReportError {
            path: path.into(),
            source,
        }
    }
}

// 変換処理に関連するデータ型定義

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// 1回のツール呼び出しに対応する作業単位
///
/// ソースエントリと保存先ディレクトリの組。作成後は変更されず、
/// 1つのワーカーだけが消費する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    source: PathBuf,
    destination: PathBuf,
}

impl WorkItem {
    pub fn new(source: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
        }
    }

    /// 変換対象エントリの絶対パス
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// 保存先ディレクトリの絶対パス
    pub fn destination(&self) -> &Path {
        &self.destination
    }
}

/// 外部ツールの実行結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolOutput {
    /// 標準出力を行単位で読み取り、改行で連結したもの
    pub stdout: String,
    /// 終了コード（シグナル終了時はNone）
    pub exit_code: Option<i32>,
}

impl ToolOutput {
    pub fn succeeded(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// 個別アイテムの処理結果
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ItemOutcome {
    Completed {
        source: PathBuf,
        exit_code: Option<i32>,
    },
    Failed {
        source: PathBuf,
        error: String,
    },
}

impl ItemOutcome {
    pub fn source(&self) -> &Path {
        match self {
            Self::Completed { source, .. } | Self::Failed { source, .. } => source,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// バッチ全体のサマリー
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub total_items: usize,
    pub completed_items: usize,
    pub failed_items: usize,
    /// 完了したが終了コードが0以外だったアイテム数
    pub nonzero_exit_items: usize,
    pub total_processing_time_ms: u64,
}

impl BatchSummary {
    pub fn from_outcomes(outcomes: &[ItemOutcome], total_processing_time_ms: u64) -> Self {
        let failed_items = outcomes.iter().filter(|o| o.is_failed()).count();
        let nonzero_exit_items = outcomes
            .iter()
            .filter(|o| matches!(o, ItemOutcome::Completed { exit_code, .. } if *exit_code != Some(0)))
            .count();

        Self {
            total_items: outcomes.len(),
            completed_items: outcomes.len() - failed_items,
            failed_items,
            nonzero_exit_items,
            total_processing_time_ms,
        }
    }
}

/// 1回のバッチ実行の記録
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub source_dir: PathBuf,
    pub destination_dir: PathBuf,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub summary: BatchSummary,
    pub items: Vec<ItemOutcome>,
}

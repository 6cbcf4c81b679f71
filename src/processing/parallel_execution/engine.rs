// BatchConverter - 依存性注入によるバッチ変換エンジン
// 一覧取得、作業単位の構築、並列実行、集計までを管理する

use super::pipeline::{validate_config, worker_count, ConversionPipeline};
use crate::core::{
    BatchReport, BatchSummary, ConversionConfig, ConversionError, ConversionResult,
    ConversionTool, OutputSink, WorkItem,
};
use crate::storage::StorageBackend;
use chrono::Utc;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::info;

/// バッチ変換エンジン
///
/// 全ての依存関係をコンストラクタで受け取る。ツールと出力先はワーカー間で
/// 共有するため内部で `Arc` に包む。
pub struct BatchConverter<S, T, C, O> {
    storage: S,
    tool: Arc<T>,
    config: C,
    sink: Arc<O>,
}

impl<S, T, C, O> BatchConverter<S, T, C, O>
where
    S: StorageBackend,
    T: ConversionTool + 'static,
    C: ConversionConfig,
    O: OutputSink + 'static,
{
    pub fn new(storage: S, tool: T, config: C, sink: O) -> Self {
        Self {
            storage,
            tool: Arc::new(tool),
            config,
            sink: Arc::new(sink),
        }
    }

    /// `source_dir` 直下の全エントリを `destination_dir` へ変換する
    ///
    /// 全アイテムが完了または失敗するまで戻らない。個別アイテムの失敗は
    /// レポートに記録されるだけで、ここではエラーにならない。
    pub async fn convert(
        &self,
        source_dir: &Path,
        destination_dir: &Path,
    ) -> ConversionResult<BatchReport> {
        validate_config(&self.config)?;

        let source_dir = absolute_path(source_dir)?;
        let destination_dir = absolute_path(destination_dir)?;

        let items = self
            .discover_work_items(&source_dir, &destination_dir)
            .await?;
        let total_items = items.len();

        self.sink.begin(total_items);
        info!(
            source = %source_dir.display(),
            destination = %destination_dir.display(),
            total_items,
            workers = worker_count(&self.config, total_items),
            "batch conversion started"
        );

        let started_at = Utc::now();
        let timer = Instant::now();

        let pipeline = ConversionPipeline::new(Arc::clone(&self.tool), Arc::clone(&self.sink));
        let outcomes = pipeline.execute(items, &self.config).await?;

        let summary = BatchSummary::from_outcomes(&outcomes, elapsed_millis(timer.elapsed()));
        info!(
            total_items = summary.total_items,
            completed = summary.completed_items,
            failed = summary.failed_items,
            nonzero_exit = summary.nonzero_exit_items,
            elapsed_ms = summary.total_processing_time_ms,
            "batch conversion finished"
        );

        Ok(BatchReport {
            source_dir,
            destination_dir,
            started_at,
            finished_at: Utc::now(),
            summary,
            items: outcomes,
        })
    }

    /// ディレクトリ直下のエントリから作業単位を構築
    async fn discover_work_items(
        &self,
        source_dir: &Path,
        destination_dir: &Path,
    ) -> ConversionResult<Vec<WorkItem>> {
        let entries = self.storage.list_entries(source_dir).await?;

        Ok(entries
            .into_iter()
            .map(|entry| WorkItem::new(entry, destination_dir))
            .collect())
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    pub fn tool(&self) -> &T {
        &self.tool
    }

    pub fn sink(&self) -> &O {
        &self.sink
    }
}

/// 経過時間をミリ秒に変換（u64に収まらなければ飽和）
fn elapsed_millis(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}

/// カレントディレクトリ基準で絶対パス化（シンボリックリンクは解決しない）
fn absolute_path(path: &Path) -> ConversionResult<PathBuf> {
    std::path::absolute(path).map_err(|e| ConversionError::path_resolution(path, e))
}

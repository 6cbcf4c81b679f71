// Pipeline - Producer-Consumer パイプライン
// 投入からバリア待ち、ワーカー停止までをまとめて行う

use super::{consumer::spawn_consumers, producer::spawn_producer};
use crate::core::{
    ConversionConfig, ConversionError, ConversionResult, ConversionTool, ItemOutcome, OutputSink,
    WorkItem,
};
use crate::processing::latch::CompletionLatch;
use std::sync::Arc;
use tokio::sync::mpsc;

/// 設定値の検証
pub fn validate_config<C: ConversionConfig>(config: &C) -> ConversionResult<()> {
    if config.max_concurrent_tasks() == 0 {
        return Err(ConversionError::configuration(
            "並列タスク数は1以上である必要があります",
        ));
    }
    Ok(())
}

/// 実際に起動するワーカー数
///
/// 設定上の並列数とアイテム数の小さい方。アイテムが無ければワーカーも起動しない。
pub fn worker_count<C: ConversionConfig>(config: &C, total_items: usize) -> usize {
    config.max_concurrent_tasks().min(total_items)
}

/// 変換パイプライン
pub struct ConversionPipeline<T, O> {
    tool: Arc<T>,
    sink: Arc<O>,
}

impl<T, O> ConversionPipeline<T, O>
where
    T: ConversionTool + 'static,
    O: OutputSink + 'static,
{
    pub fn new(tool: Arc<T>, sink: Arc<O>) -> Self {
        Self { tool, sink }
    }

    /// 全アイテムを並列に処理し、全件が終了してから結果を返す
    ///
    /// 結果の順序は完了順で、投入順とは限らない。
    pub async fn execute<C>(
        &self,
        items: Vec<WorkItem>,
        config: &C,
    ) -> ConversionResult<Vec<ItemOutcome>>
    where
        C: ConversionConfig,
    {
        validate_config(config)?;
        let total_items = items.len();

        let (work_tx, work_rx) = mpsc::channel::<WorkItem>(config.channel_buffer_size().max(1));
        let (result_tx, mut result_rx) = mpsc::unbounded_channel();
        let latch = Arc::new(CompletionLatch::new(total_items));

        let producer_handle = spawn_producer(items, work_tx);

        let worker_handles = spawn_consumers(
            Arc::clone(&self.tool),
            Arc::clone(&self.sink),
            work_rx,
            result_tx,
            Arc::clone(&latch),
            worker_count(config, total_items),
        );

        // 完了バリア
        latch.wait().await;

        // プールの停止
        producer_handle.await.map_err(ConversionError::task)?;
        for handle in worker_handles {
            handle.await.map_err(ConversionError::task)?;
        }

        let mut outcomes = Vec::with_capacity(total_items);
        while let Some(outcome) = result_rx.recv().await {
            outcomes.push(outcome);
        }
        Ok(outcomes)
    }
}

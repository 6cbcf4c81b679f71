// Consumer - 固定数ワーカーによる並列変換

use crate::core::{ConversionError, ConversionTool, ItemOutcome, OutputSink, WorkItem};
use crate::processing::latch::CompletionLatch;
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};
use tracing::{debug, error, warn};

/// 単一アイテムの変換
///
/// ツール実行と出力は別タスクで行い、起動失敗・I/Oエラー・パニックのいずれも
/// `ItemOutcome::Failed` として回収する。
pub async fn process_work_item<T, O>(
    worker_id: usize,
    tool: Arc<T>,
    sink: Arc<O>,
    item: WorkItem,
) -> ItemOutcome
where
    T: ConversionTool + 'static,
    O: OutputSink + 'static,
{
    let source = item.source().to_path_buf();
    debug!(worker_id, source = %source.display(), "conversion started");

    let task = tokio::spawn(async move {
        let output = tool.convert(&item).await?;
        sink.emit(&item, &output.stdout);
        Ok::<_, ConversionError>(output)
    });

    let result = match task.await {
        Ok(result) => result,
        Err(join_error) => Err(ConversionError::task(join_error)),
    };

    match result {
        Ok(output) => {
            if !output.succeeded() {
                warn!(
                    worker_id,
                    source = %source.display(),
                    exit_code = ?output.exit_code,
                    "conversion tool exited with non-zero status"
                );
            }
            debug!(worker_id, source = %source.display(), "conversion finished");
            ItemOutcome::Completed {
                source,
                exit_code: output.exit_code,
            }
        }
        Err(error) => {
            let report = anyhow::Error::new(error);
            error!(
                worker_id,
                source = %source.display(),
                "conversion failed: {report:?}"
            );
            ItemOutcome::Failed {
                source,
                error: format!("{report:#}"),
            }
        }
    }
}

/// 単一Consumerワーカー
///
/// 作業キューが閉じるまでアイテムを1件ずつ処理する。処理したアイテムごとに
/// 結果を送った後、必ずラッチを1つ減らす。
pub fn spawn_single_consumer<T, O>(
    worker_id: usize,
    tool: Arc<T>,
    sink: Arc<O>,
    work_rx: Arc<Mutex<mpsc::Receiver<WorkItem>>>,
    result_tx: mpsc::UnboundedSender<ItemOutcome>,
    latch: Arc<CompletionLatch>,
) -> tokio::task::JoinHandle<()>
where
    T: ConversionTool + 'static,
    O: OutputSink + 'static,
{
    tokio::spawn(async move {
        loop {
            let item = {
                let mut rx = work_rx.lock().await;
                match rx.recv().await {
                    Some(item) => item,
                    None => break,
                }
            };

            let _done = latch.guard();
            let outcome =
                process_work_item(worker_id, Arc::clone(&tool), Arc::clone(&sink), item).await;

            // 結果の受け手がいなくても完了としては数える
            let _ = result_tx.send(outcome);
        }
        debug!(worker_id, "worker stopped");
    })
}

/// Consumers: 固定サイズのワーカープール
pub fn spawn_consumers<T, O>(
    tool: Arc<T>,
    sink: Arc<O>,
    work_rx: mpsc::Receiver<WorkItem>,
    result_tx: mpsc::UnboundedSender<ItemOutcome>,
    latch: Arc<CompletionLatch>,
    worker_count: usize,
) -> Vec<tokio::task::JoinHandle<()>>
where
    T: ConversionTool + 'static,
    O: OutputSink + 'static,
{
    let work_rx = Arc::new(Mutex::new(work_rx));

    (0..worker_count)
        .map(|worker_id| {
            spawn_single_consumer(
                worker_id,
                Arc::clone(&tool),
                Arc::clone(&sink),
                Arc::clone(&work_rx),
                result_tx.clone(),
                Arc::clone(&latch),
            )
        })
        .collect()
}

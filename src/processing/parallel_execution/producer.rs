// Producer - 作業単位の投入

use crate::core::WorkItem;
use tokio::sync::mpsc;

/// Producer: 作業単位を順に作業キューへ投入
pub fn spawn_producer(
    items: Vec<WorkItem>,
    work_tx: mpsc::Sender<WorkItem>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        for item in items {
            if work_tx.send(item).await.is_err() {
                // ワーカーが全て終了している
                break;
            }
        }
        // work_txのドロップがキュー終了の合図
    })
}

// CompletionLatch - 完了待ちのカウントダウンバリア

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;

/// 投入件数で初期化し、各アイテムの終了ごとに1つ減らすバリア
///
/// `wait` はカウンタが0になるまで戻らない。0を下回ることはない。
#[derive(Debug)]
pub struct CompletionLatch {
    remaining: AtomicUsize,
    notify: Notify,
}

impl CompletionLatch {
    pub fn new(count: usize) -> Self {
        Self {
            remaining: AtomicUsize::new(count),
            notify: Notify::new(),
        }
    }

    /// 残り件数
    pub fn count(&self) -> usize {
        self.remaining.load(Ordering::Acquire)
    }

    /// カウンタを1つ減らし、0になったら待機中のタスクを起こす
    pub fn count_down(&self) {
        let previous = self
            .remaining
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |n| n.checked_sub(1));

        if previous == Ok(1) {
            self.notify.notify_waiters();
        }
    }

    /// スコープ終了時に必ず1つ減らすガードを取得
    ///
    /// パニックによる巻き戻し中でもカウントされる。
    pub fn guard(self: &Arc<Self>) -> LatchGuard {
        LatchGuard {
            latch: Arc::clone(self),
        }
    }

    /// カウンタが0になるまで待機
    pub async fn wait(&self) {
        loop {
            let notified = self.notify.notified();
            tokio::pin!(notified);
            // 判定より先に登録しておき、通知の取りこぼしを防ぐ
            notified.as_mut().enable();

            if self.count() == 0 {
                return;
            }
            notified.await;
        }
    }
}

/// ドロップ時に `count_down` するガード
#[derive(Debug)]
pub struct LatchGuard {
    latch: Arc<CompletionLatch>,
}

impl Drop for LatchGuard {
    fn drop(&mut self) {
        self.latch.count_down();
    }
}

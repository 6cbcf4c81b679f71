// バッチ変換システムの基本実装群

use crate::core::{ConversionConfig, OutputSink, WorkItem};
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};

/// デフォルト設定実装
#[derive(Debug, Clone)]
pub struct DefaultConversionConfig {
    max_concurrent: usize,
    buffer_size: usize,
}

impl DefaultConversionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_concurrent(mut self, max_concurrent: usize) -> Self {
        self.max_concurrent = max_concurrent;
        self
    }

    pub fn with_buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = buffer_size;
        self
    }
}

impl Default for DefaultConversionConfig {
    fn default() -> Self {
        Self {
            max_concurrent: num_cpus::get().max(1) * 2,
            buffer_size: 100,
        }
    }
}

impl ConversionConfig for DefaultConversionConfig {
    fn max_concurrent_tasks(&self) -> usize {
        self.max_concurrent
    }

    fn channel_buffer_size(&self) -> usize {
        self.buffer_size
    }
}

/// 標準出力へそのまま流す出力先
///
/// 1アイテム分の出力は1回の書き込みで出すため、他アイテムの出力と行単位で混ざることはない。
#[derive(Debug, Default, Clone)]
pub struct StdoutSink;

impl StdoutSink {
    pub fn new() -> Self {
        Self
    }
}

impl OutputSink for StdoutSink {
    fn begin(&self, total_items: usize) {
        let mut stdout = std::io::stdout().lock();
        let _ = writeln!(stdout, "file count :{total_items}");
    }

    fn emit(&self, _item: &WorkItem, output: &str) {
        let mut stdout = std::io::stdout().lock();
        // 出力先が閉じられていても変換自体は続ける
        let _ = writeln!(stdout, "{output}");
    }
}

/// メモリ内に保持する出力先（テスト・組み込み用）
#[derive(Debug, Clone, Default)]
pub struct MemoryOutputSink {
    total_items: Arc<Mutex<Option<usize>>>,
    emitted: Arc<Mutex<Vec<(PathBuf, String)>>>,
}

impl MemoryOutputSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// `begin` で通知された件数
    pub fn total_items(&self) -> Option<usize> {
        *self.total_items.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// 出力された (ソースパス, 出力) の一覧
    pub fn emitted(&self) -> Vec<(PathBuf, String)> {
        self.emitted.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl OutputSink for MemoryOutputSink {
    fn begin(&self, total_items: usize) {
        *self.total_items.lock().unwrap_or_else(PoisonError::into_inner) = Some(total_items);
    }

    fn emit(&self, item: &WorkItem, output: &str) {
        self.emitted
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((item.source().to_path_buf(), output.to_string()));
    }
}

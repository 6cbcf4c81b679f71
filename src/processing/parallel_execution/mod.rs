// 並列実行機能
// Producer-Consumer パターンによる並列変換とオーケストレーション

pub mod consumer;
pub mod engine;
pub mod pipeline;
pub mod producer;

// 公開API
pub use consumer::{process_work_item, spawn_consumers, spawn_single_consumer};
pub use engine::BatchConverter;
pub use pipeline::{validate_config, worker_count, ConversionPipeline};
pub use producer::spawn_producer;

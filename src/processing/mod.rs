// バッチ変換システムのモジュール
//
// latch               - 完了待ちバリア
// implementations     - 設定・出力先の具象実装
// parallel_execution  - Producer-Consumer による並列実行とエンジン
// report              - 実行結果のJSON出力
// api                 - 高レベルの便利関数

pub mod api;
pub mod implementations;
pub mod latch;
pub mod parallel_execution;
pub mod report;

// 公開API
pub use api::{convert, convert_with_tool, create_default_converter, DefaultBatchConverter};
pub use implementations::{DefaultConversionConfig, MemoryOutputSink, StdoutSink};
pub use latch::{CompletionLatch, LatchGuard};
pub use parallel_execution::{BatchConverter, ConversionPipeline};
pub use report::write_json_report;

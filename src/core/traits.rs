// バッチ変換システムのトレイト定義
// エンジンが依存する抽象化インターフェース

use super::error::ConversionResult;
use super::types::{ToolOutput, WorkItem};
use async_trait::async_trait;
use mockall::automock;

/// バッチ変換の設定を抽象化するトレイト
#[automock]
pub trait ConversionConfig: Send + Sync {
    /// 同時に実行する外部ツールの最大数（ワーカー数）
    fn max_concurrent_tasks(&self) -> usize;

    /// 作業キューのバッファサイズ
    fn channel_buffer_size(&self) -> usize;
}

/// 1件の作業単位を変換する外部ツールの抽象化
#[automock]
#[async_trait]
pub trait ConversionTool: Send + Sync {
    /// ツールを実行し、標準出力を読み切ってから結果を返す
    async fn convert(&self, item: &WorkItem) -> ConversionResult<ToolOutput>;
}

/// ツール出力の受け渡し先
#[automock]
pub trait OutputSink: Send + Sync {
    /// 処理開始時、投入件数を通知
    fn begin(&self, total_items: usize);

    /// 1アイテム分のツール出力をまとめて出力
    fn emit(&self, item: &WorkItem, output: &str);
}

use crate::core::ConversionResult;
use async_trait::async_trait;
use mockall::automock;
use std::path::{Path, PathBuf};

pub mod local;

/// ストレージバックエンドのトレイト
#[automock]
#[async_trait]
pub trait StorageBackend: Send + Sync {
    /// ディレクトリ直下の全エントリのパスをリストする（種類や拡張子で絞り込まない）
    ///
    /// 返すパスは `directory` と連結したもの。
    async fn list_entries(&self, directory: &Path) -> ConversionResult<Vec<PathBuf>>;

    /// パスが存在し、かつディレクトリであるか
    async fn is_directory(&self, path: &Path) -> bool;
}

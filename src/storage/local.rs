use super::StorageBackend;
use crate::core::{ConversionError, ConversionResult};
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// ローカルファイルシステム用のストレージバックエンド
#[derive(Debug, Clone)]
pub struct LocalStorageBackend;

impl Default for LocalStorageBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalStorageBackend {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl StorageBackend for LocalStorageBackend {
    async fn list_entries(&self, directory: &Path) -> ConversionResult<Vec<PathBuf>> {
        let mut entries = tokio::fs::read_dir(directory)
            .await
            .map_err(|e| ConversionError::listing(directory, e))?;

        // 種類の判定はしない（壊れたシンボリックリンクもそのままエントリとして扱う）
        let mut paths = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| ConversionError::listing(directory, e))?
        {
            paths.push(entry.path());
        }

        // 一貫した順序で投入
        paths.sort();
        Ok(paths)
    }

    async fn is_directory(&self, path: &Path) -> bool {
        tokio::fs::metadata(path)
            .await
            .map(|metadata| metadata.is_dir())
            .unwrap_or(false)
    }
}

//! 外部変換ツールの呼び出し
//!
//! ツールは `<tool> <source> <destination>` の形で1アイテムにつき1回起動される。
//! 標準出力は最後まで読み取ってから行単位で連結し、標準エラーは親プロセスに
//! そのまま流す。終了コードは記録するだけで失敗扱いにはしない。

use crate::core::{ConversionError, ConversionResult, ConversionTool, ToolOutput, WorkItem};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;
use tokio::io::AsyncReadExt;
use tokio::process::{Child, Command};

/// 既定のツール実行ファイル（実行ディレクトリからの相対パス）
pub const DEFAULT_TOOL: &str = "./sgfutils.sh";

/// 既定のツール実行ディレクトリ
pub const DEFAULT_TOOL_DIR: &str = "/app";

/// 外部スクリプトをサブプロセスとして実行する変換ツール
#[derive(Debug, Clone)]
pub struct ScriptConversionTool {
    program: PathBuf,
    working_dir: PathBuf,
    timeout: Option<Duration>,
}

impl Default for ScriptConversionTool {
    fn default() -> Self {
        Self::new(DEFAULT_TOOL, DEFAULT_TOOL_DIR)
    }
}

impl ScriptConversionTool {
    pub fn new(program: impl Into<PathBuf>, working_dir: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            working_dir: working_dir.into(),
            timeout: None,
        }
    }

    /// 1アイテムあたりの実行時間上限（超過時はプロセスを終了させ失敗扱い）
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// 実行ディレクトリをカレントディレクトリ基準で絶対パス化
    ///
    /// 子プロセスは `current_dir` に移動してからプログラムを探すため、
    /// 相対のままだと実行ディレクトリが二重に連結される。
    fn absolute_working_dir(&self) -> ConversionResult<PathBuf> {
        std::path::absolute(&self.working_dir)
            .map_err(|e| ConversionError::spawn(self.display_name(), e))
    }

    /// 実行ファイルのパスを解決
    ///
    /// `./tool.sh` のようにディレクトリ成分を含む相対パスは実行ディレクトリ基準、
    /// 単独のコマンド名はPATH検索に任せる。
    fn resolved_program(&self, working_dir: &Path) -> PathBuf {
        if self.program.is_relative() && self.program.components().count() > 1 {
            working_dir.join(&self.program)
        } else {
            self.program.clone()
        }
    }

    fn display_name(&self) -> String {
        self.program.display().to_string()
    }

    fn spawn(&self, item: &WorkItem) -> ConversionResult<Child> {
        let working_dir = self.absolute_working_dir()?;

        Command::new(self.resolved_program(&working_dir))
            .arg(item.source())
            .arg(item.destination())
            .current_dir(&working_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| ConversionError::spawn(self.display_name(), e))
    }

    /// 標準出力を最後まで読み、プロセスの終了を待つ
    async fn capture(child: &mut Child, tool: &str) -> ConversionResult<ToolOutput> {
        let mut raw = Vec::new();
        if let Some(mut stdout) = child.stdout.take() {
            stdout
                .read_to_end(&mut raw)
                .await
                .map_err(|e| ConversionError::output(tool, e))?;
        }

        let status = child
            .wait()
            .await
            .map_err(|e| ConversionError::output(tool, e))?;

        Ok(ToolOutput {
            stdout: join_lines(&String::from_utf8_lossy(&raw)),
            exit_code: status.code(),
        })
    }
}

#[async_trait]
impl ConversionTool for ScriptConversionTool {
    async fn convert(&self, item: &WorkItem) -> ConversionResult<ToolOutput> {
        let tool = self.display_name();
        let mut child = self.spawn(item)?;

        let Some(limit) = self.timeout else {
            return Self::capture(&mut child, &tool).await;
        };

        let captured = tokio::time::timeout(limit, Self::capture(&mut child, &tool)).await;
        match captured {
            Ok(result) => result,
            Err(_) => {
                if let Err(e) = child.kill().await {
                    tracing::warn!(tool = %tool, error = %e, "failed to kill timed out tool");
                }
                Err(ConversionError::timeout(tool, limit))
            }
        }
    }
}

/// 行単位に分割し改行で連結し直す（末尾の改行は付けない）
fn join_lines(text: &str) -> String {
    text.lines().collect::<Vec<_>>().join("\n")
}

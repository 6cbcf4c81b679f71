use crate::tool::{DEFAULT_TOOL, DEFAULT_TOOL_DIR};
use clap::Parser;
use std::path::PathBuf;

/// 引数誤り時に標準出力へ出す使い方
pub const USAGE: &str = "usage : batch_convert ${source_path} ${save_path} ${thread_count}";

#[derive(Parser, Debug)]
#[command(name = "batch_convert")]
#[command(about = "Run an external conversion tool over every entry of a directory in parallel")]
#[command(version)]
pub struct Cli {
    /// Directory whose direct entries are converted
    pub source_path: PathBuf,

    /// Directory passed to the tool as the save location
    pub save_path: PathBuf,

    /// Maximum number of tool invocations running at once
    #[arg(allow_hyphen_values = true)]
    pub thread_count: String,

    /// Conversion tool, relative to --tool-dir when it contains a path separator
    #[arg(long, env = "BATCH_CONVERT_TOOL", default_value = DEFAULT_TOOL)]
    pub tool: PathBuf,

    /// Working directory the tool is executed in
    #[arg(long, env = "BATCH_CONVERT_TOOL_DIR", default_value = DEFAULT_TOOL_DIR)]
    pub tool_dir: PathBuf,

    /// Kill a tool invocation that runs longer than this many seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Write a JSON report of every item's outcome to this file
    #[arg(long)]
    pub report: Option<PathBuf>,
}

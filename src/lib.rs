pub mod cli;
pub mod core;
pub mod logging;
pub mod processing;
pub mod storage;
pub mod tool;

// 公開API
pub use crate::core::{
    BatchReport, BatchSummary, ConversionError, ConversionResult, ItemOutcome, ToolOutput,
    WorkItem,
};
pub use processing::{convert, convert_with_tool, BatchConverter};
pub use tool::ScriptConversionTool;

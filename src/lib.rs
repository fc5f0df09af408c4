//! ui-detect: ブループリント解析CLIのライブラリ部
//!
//! 検出コアは `ui_detect_common`。ここではファイル入出力・設定・一括処理・ログを扱う。

pub mod cli;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod report;
pub mod scanner;

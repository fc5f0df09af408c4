use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ui-detect")]
#[command(about = "ブループリントからUIパターン・コンポーネント要件・テンプレートを検出するツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// ブループリント1件を解析してJSONを出力
    Detect {
        /// ブループリントJSONファイル
        #[arg(required = true)]
        file: PathBuf,

        /// 出力JSONファイル（省略時は標準出力）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 整形せずに1行で出力
        #[arg(long)]
        compact: bool,
    },

    /// フォルダ内のブループリントを一括解析
    Batch {
        /// ブループリントフォルダのパス
        #[arg(required = true)]
        folder: PathBuf,

        /// 出力JSONファイル（デフォルト: 入力フォルダ/ui-detect-report.json）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// サブフォルダも再帰的にスキャン
        #[arg(short = 'r', long)]
        recursive: bool,
    },

    /// 設定を表示/編集
    Config {
        /// 設定を表示
        #[arg(long)]
        show: bool,

        /// ログレベルを設定 (trace/debug/info/warn/error)
        #[arg(long)]
        set_log_level: Option<String>,

        /// 出力JSONの整形を設定
        #[arg(long)]
        pretty: Option<bool>,
    },
}

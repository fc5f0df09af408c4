use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use ui_detect::{cli, config, error, pipeline, report, scanner};
use cli::{Cli, Commands};
use config::Config;

/// batch の既定出力ファイル名
const DEFAULT_BATCH_OUTPUT: &str = "ui-detect-report.json";

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    init_logging(&config, cli.verbose);

    match cli.command {
        Commands::Detect { file, output, compact } => {
            let report = pipeline::detect_file(&file)?;
            let json = report::to_json(&report, config.pretty_output && !compact)?;

            match output {
                Some(path) => {
                    std::fs::write(&path, json)
                        .with_context(|| format!("出力ファイルに書き込めません: {}", path.display()))?;
                    eprintln!("✔ 結果を保存: {}", path.display());
                }
                None => println!("{}", json),
            }
        }

        Commands::Batch { folder, output, recursive } => {
            eprintln!("🔍 ui-detect - 一括解析\n");

            let output_path = output.unwrap_or_else(|| folder.join(DEFAULT_BATCH_OUTPUT));

            // 1. スキャン（前回の出力ファイルは除外）
            eprintln!("[1/2] ブループリントをスキャン中...");
            let mut files = scanner::scan_folder(&folder, recursive || config.recursive)?;
            scanner::exclude_path(&mut files, &output_path);
            eprintln!("✔ {}件のブループリントを検出\n", files.len());

            if files.is_empty() {
                let folder = folder.display().to_string();
                return Err(error::UiDetectError::NoBlueprintsFound(folder).into());
            }

            // 2. 検出
            eprintln!("[2/2] コンポーネント検出中...");
            let batch = pipeline::detect_batch(&files, true);

            let json = report::to_json(&batch, config.pretty_output)?;
            std::fs::write(&output_path, json)
                .with_context(|| format!("出力ファイルに書き込めません: {}", output_path.display()))?;

            eprintln!(
                "\n✅ 完了: 成功 {}件 / 失敗 {}件 (平均信頼度 {}%)",
                batch.reports.len(),
                batch.failures.len(),
                batch.average_confidence()
            );
            eprintln!("✔ 結果を保存: {}", output_path.display());
        }

        Commands::Config { show, set_log_level, pretty } => {
            let mut config = config;

            if let Some(level) = set_log_level {
                config.set_log_level(level)?;
                println!("✔ ログレベルを設定しました");
            }

            if let Some(pretty) = pretty {
                config.set_pretty_output(pretty)?;
                println!("✔ 出力形式を設定しました");
            }

            if show {
                println!("設定:");
                println!("  ログレベル: {}", config.log_level);
                println!("  整形出力: {}", if config.pretty_output { "有効" } else { "無効" });
                println!("  再帰スキャン: {}", if config.recursive { "有効" } else { "無効" });
                println!("  パス: {}", Config::config_path()?.display());
            }
        }
    }

    Ok(())
}

/// ログ初期化（ログは標準エラーへ、JSONは標準出力へ）
fn init_logging(config: &Config, verbose: bool) {
    let level = if verbose { "debug".to_string() } else { config.effective_log_level() };
    let filter = EnvFilter::try_new(&level).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

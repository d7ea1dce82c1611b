use anyhow::{Context, Result};
use clap::Parser;
use photo_score::{cli, config, interactive, render, replay, scanner};
use cli::{Cli, Commands};
use config::Config;
use photo_score_common::{load_image_set, LoadStatus, ScoringController, ScoreStore};
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn setup_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("photo_score={level},photo_score_common={level}")));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .init();
}

/// フォルダを読み込んでセッションを開始する
fn start_session(
    folder: &Path,
    recursive: bool,
    config: &Config,
    name: Option<&str>,
) -> Result<ScoringController<PathBuf>> {
    let files = scanner::scan_folder(folder, recursive)?;
    let mut controller = ScoringController::new(config.csv_options());

    let status = controller.on_files_selected(files);
    println!("{}", status);

    if let Some(name) = name {
        if let Err(notice) = controller.on_identity_submit(name) {
            println!("⚠ {}", notice);
        }
    }

    Ok(controller)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);
    let config = Config::load().context("設定の読み込みに失敗しました")?;

    match cli.command {
        Commands::Score { folder, name, output, recursive } => {
            println!("📸 photo-score - 採点\n");

            let mut controller =
                start_session(&folder, recursive || config.recursive, &config, name.as_deref())?;
            if controller.session().is_empty() {
                return Ok(());
            }
            if !controller.identity().is_set() {
                interactive::prompt_identity(&mut controller)?;
            }

            let output_dir = config.resolve_output_dir(output, &folder);
            if interactive::run_interactive(&mut controller, &output_dir)?.is_some() {
                println!("\n✅ 完了");
            }
        }

        Commands::Replay { folder, script, name, output, recursive } => {
            println!("▶ photo-score - スクリプト再生\n");

            let content = std::fs::read_to_string(&script)
                .with_context(|| format!("スクリプトを読めません: {}", script.display()))?;
            let steps = replay::parse_script(&content)?;

            let mut controller =
                start_session(&folder, recursive || config.recursive, &config, name.as_deref())?;
            let output_dir = config.resolve_output_dir(output, &folder);
            let report = replay::run_replay(&mut controller, &steps, &output_dir)?;

            if report.exported.is_none() {
                anyhow::bail!("CSVは出力されませんでした（警告 {}件）", report.notices.len());
            }
            println!("\n✅ 完了");
        }

        Commands::List { folder, recursive } => {
            let files = scanner::scan_folder(&folder, recursive || config.recursive)?;
            let images = load_image_set(files);
            println!("{}", LoadStatus::from_count(images.len()));
            let entries = photo_score_common::list::list_entries(&images, &ScoreStore::new());
            render::print_list(&entries);
        }

        Commands::Config { set_output_dir, set_suffix, show } => {
            let mut config = config;

            if let Some(dir) = set_output_dir {
                config.set_output_dir(dir)?;
                println!("✔ 出力先を設定しました");
            }

            if let Some(suffix) = set_suffix {
                config.set_file_suffix(suffix)?;
                println!("✔ 接尾辞を設定しました");
            }

            if show {
                println!("設定:");
                println!(
                    "  出力先: {}",
                    config
                        .output_dir
                        .as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "(写真フォルダ)".into())
                );
                println!("  接尾辞: {}", config.file_suffix);
                println!("  再帰スキャン: {}", if config.recursive { "有効" } else { "無効" });
            }
        }
    }

    Ok(())
}

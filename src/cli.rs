use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "photo-score")]
#[command(about = "写真採点・CSV出力ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 写真フォルダを対話的に採点してCSVを出力
    Score {
        /// 写真フォルダのパス
        #[arg(required = true)]
        folder: PathBuf,

        /// 利用者名（CSVファイル名に使用）
        #[arg(short, long)]
        name: Option<String>,

        /// CSVの出力先ディレクトリ（デフォルト: 設定値または写真フォルダ）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// サブフォルダも再帰的にスキャン
        #[arg(short = 'r', long)]
        recursive: bool,
    },

    /// 操作スクリプトを再生して採点・出力
    Replay {
        /// 写真フォルダのパス
        #[arg(required = true)]
        folder: PathBuf,

        /// 操作スクリプト（1行1操作）
        #[arg(required = true)]
        script: PathBuf,

        /// 利用者名（CSVファイル名に使用）
        #[arg(short, long)]
        name: Option<String>,

        /// CSVの出力先ディレクトリ
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// サブフォルダも再帰的にスキャン
        #[arg(short = 'r', long)]
        recursive: bool,
    },

    /// 読み込まれる写真の一覧を表示
    List {
        /// 写真フォルダのパス
        #[arg(required = true)]
        folder: PathBuf,

        /// サブフォルダも再帰的にスキャン
        #[arg(short = 'r', long)]
        recursive: bool,
    },

    /// 設定を表示/編集
    Config {
        /// CSVの出力先を設定
        #[arg(long)]
        set_output_dir: Option<PathBuf>,

        /// ファイル名の接尾辞を設定
        #[arg(long)]
        set_suffix: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

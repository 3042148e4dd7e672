use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "neutro-defect")]
#[command(about = "表面欠陥画像のニュートロソフィック評価・レポート生成ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 特徴量テーブル（CSV）のパス（設定値を上書き）
    #[arg(long, global = true)]
    pub features: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// データセットから特徴量テーブルを生成
    Extract {
        /// データセットのルート（MT_Free 等を含むフォルダ）
        #[arg(short, long)]
        dataset: Option<PathBuf>,

        /// 出力CSV（デフォルト: 設定の features_csv）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 並列処理を無効化
        #[arg(long)]
        sequential: bool,
    },

    /// 件数とT/I/F平均を表示
    Dashboard {
        /// JSONで出力
        #[arg(long)]
        json: bool,
    },

    /// 画像一覧と判定を表示
    List {
        /// ラベルで絞り込み (normal/defect)
        #[arg(short, long)]
        label: Option<neutro_defect_common::Label>,
    },

    /// 1画像の評価を表示
    Inspect {
        /// 画像名（省略時は先頭行）
        name: Option<String>,

        /// 一覧から対話的に選択
        #[arg(long, conflicts_with = "name")]
        pick: bool,

        /// JSONで出力
        #[arg(long)]
        json: bool,
    },

    /// 1画像のPDFレポートを生成
    Report {
        /// 画像名
        #[arg(required = true)]
        name: String,

        /// 出力ファイル/ディレクトリ（デフォルト: 設定の report_dir）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// テーブル全体をExcelに出力
    Export {
        /// 出力ファイル/ディレクトリ
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// ブックのタイトル
        #[arg(short, long, default_value = "Neutrosophic_Features")]
        title: String,
    },

    /// 設定を表示/編集
    Config {
        /// データセットのルートを設定
        #[arg(long)]
        set_dataset: Option<PathBuf>,

        /// 特徴量テーブルのパスを設定
        #[arg(long)]
        set_features: Option<PathBuf>,

        /// 表示用元画像フォルダを設定
        #[arg(long)]
        set_image_dir: Option<PathBuf>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },

    /// 表示用画像キャッシュ管理
    Cache {
        /// キャッシュを削除
        #[arg(long)]
        clear: bool,

        /// キャッシュ情報を表示
        #[arg(long)]
        info: bool,
    },
}

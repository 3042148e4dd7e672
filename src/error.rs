use thiserror::Error;

#[derive(Error, Debug)]
pub enum NeutroError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    /// 特徴量テーブルに存在しない画像名（該当リクエストのみ失敗）
    #[error("画像がテーブルに存在しません: {0}")]
    UnknownImage(String),

    #[error("特徴量テーブルが空です: {0}")]
    EmptyTable(String),

    #[error("不正な画像名: {0}")]
    InvalidImageName(String),

    #[error("画像読み込みエラー: {0}")]
    ImageLoad(String),

    #[error("画像保存エラー: {0}")]
    ImageSave(String),

    #[error("特徴量テーブルが不正: {0}")]
    InvalidTable(String),

    #[error("CSVエラー: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF生成エラー: {0}")]
    PdfGeneration(String),

    #[error("対話入力エラー: {0}")]
    Prompt(String),

    /// common 側（Excel生成など）のエラー
    #[error(transparent)]
    Common(#[from] neutro_defect_common::Error),
}

pub type Result<T> = std::result::Result<T, NeutroError>;

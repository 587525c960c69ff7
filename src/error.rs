use thiserror::Error;

#[derive(Error, Debug)]
pub enum FridgeError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("APIキーが設定されていません。`fridge config --set-api-key YOUR_KEY` で設定してください")]
    MissingApiKey,

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("入力エラー: {0}")]
    InvalidItem(String),

    #[error("番号が範囲外です: {index}（登録数: {len}）")]
    ItemIndexOutOfRange { index: usize, len: usize },

    #[error("在庫ファイルが壊れています: {0}")]
    InventoryCorrupt(String),

    #[error("食材がありません。先に在庫を登録してください")]
    NoIngredients,

    #[error("API呼び出しエラー: {0}")]
    ApiCall(String),

    #[error("APIレスポンスのパースに失敗: {0}")]
    ApiParse(String),

    #[error("通信エラー: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("入力ダイアログエラー: {0}")]
    Dialog(#[from] dialoguer::Error),

    #[error(transparent)]
    Common(#[from] fridge_common::Error),
}

pub type Result<T> = std::result::Result<T, FridgeError>;

//! 冷蔵庫在庫・賞味期限管理
//!
//! 保存期間の照合と期限日算出は `fridge_common` に置き、
//! このクレートは在庫ファイル・外部API・CLIを扱う。

pub mod cli;
pub mod config;
pub mod error;
pub mod group;
pub mod inventory;
pub mod logging;
pub mod lookup;
pub mod recipes;
pub mod shelf_life;

//! 在庫管理モジュール
//!
//! 食品名と賞味期限日の組をフラットなJSON配列として保存する。

pub mod store;

pub use store::InventoryStore;

use crate::error::{FridgeError, Result};
use chrono::NaiveDate;
use fridge_common::DATE_FORMAT;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// 在庫アイテム
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub name: String,
    pub expires: String,
}

impl InventoryItem {
    /// 入力を検証してアイテムを作成
    ///
    /// 名前・期限日の両方が必須。期限日は `YYYY-MM-DD` の実在日付。
    pub fn new(name: &str, expires: &str) -> Result<Self> {
        let name = name.trim();
        let expires = expires.trim();

        if name.is_empty() || expires.is_empty() {
            return Err(FridgeError::InvalidItem(
                "Please enter both item name and expiration date.".into(),
            ));
        }

        if !is_valid_date(expires) {
            return Err(FridgeError::InvalidItem(format!(
                "期限日は YYYY-MM-DD 形式で入力してください: {}",
                expires
            )));
        }

        Ok(Self {
            name: name.to_string(),
            expires: expires.to_string(),
        })
    }

    /// 読み込んだアイテムの再検証
    pub fn validate(&self) -> Result<()> {
        Self::new(&self.name, &self.expires).map(|_| ())
    }
}

impl std::fmt::Display for InventoryItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - Expires: {}", self.name, self.expires)
    }
}

/// ゼロ埋め `YYYY-MM-DD` かつ実在する日付か判定
pub fn is_valid_date(value: &str) -> bool {
    lazy_static::lazy_static! {
        static ref DATE_RE: Regex = Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap();
    }

    DATE_RE.is_match(value) && NaiveDate::parse_from_str(value, DATE_FORMAT).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_item_trims_input() {
        let item = InventoryItem::new("  Milk ", " 2025-06-08 ").unwrap();
        assert_eq!(item.name, "Milk");
        assert_eq!(item.expires, "2025-06-08");
    }

    #[test]
    fn test_new_item_requires_both_fields() {
        assert!(matches!(InventoryItem::new("", "2025-06-08"), Err(FridgeError::InvalidItem(_))));
        assert!(matches!(InventoryItem::new("Milk", "   "), Err(FridgeError::InvalidItem(_))));
    }

    #[test]
    fn test_is_valid_date() {
        assert!(is_valid_date("2025-01-01"));
        assert!(is_valid_date("2024-02-29"));
        assert!(!is_valid_date("2025-02-29"));
        assert!(!is_valid_date("2025-1-1"));
        assert!(!is_valid_date("01/01/2025"));
        assert!(!is_valid_date("2025-01-01T00:00:00Z"));
    }

    #[test]
    fn test_display() {
        let item = InventoryItem::new("Eggs", "2025-07-06").unwrap();
        assert_eq!(item.to_string(), "Eggs - Expires: 2025-07-06");
    }
}

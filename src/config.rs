use crate::error::{FridgeError, Result};
use fridge_common::ShelfLifeTable;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// UPCitemdb（無料枠）の商品検索エンドポイント
pub const DEFAULT_PRODUCT_LOOKUP_URL: &str = "https://api.upcitemdb.com/prod/trial/lookup";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub spoonacular_api_key: Option<String>,
    pub inventory_path: Option<PathBuf>,
    pub shelf_life_table: Option<PathBuf>,
    pub recipe_count: u32,
    pub recipe_ranking: u8,
    pub ignore_pantry: bool,
    pub product_lookup_url: String,
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            spoonacular_api_key: None,
            inventory_path: None,
            shelf_life_table: None,
            recipe_count: 5,
            recipe_ranking: 2,  // 不足食材が少ない順
            ignore_pantry: true,
            product_lookup_url: DEFAULT_PRODUCT_LOOKUP_URL.into(),
            timeout_seconds: 30,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            tracing::debug!(path = %config_path.display(), "設定を読み込みました");
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| FridgeError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("fridge").join("config.json"))
    }

    /// 在庫ファイルのパス（未設定ならデータディレクトリ配下）
    pub fn inventory_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.inventory_path {
            return Ok(path.clone());
        }

        let data = dirs::data_dir()
            .ok_or_else(|| FridgeError::Config("データディレクトリが見つかりません".into()))?;
        Ok(data.join("fridge").join("inventory.json"))
    }

    /// 保存期間テーブル（未設定なら組み込みテーブル）
    pub fn load_shelf_life_table(&self) -> Result<ShelfLifeTable> {
        match &self.shelf_life_table {
            Some(path) => load_shelf_life_table_file(path),
            None => Ok(ShelfLifeTable::builtin()),
        }
    }

    pub fn get_api_key(&self) -> Result<String> {
        // 環境変数を優先
        if let Ok(key) = std::env::var("SPOONACULAR_API_KEY") {
            if !key.trim().is_empty() {
                return Ok(key);
            }
        }

        self.spoonacular_api_key.clone().ok_or(FridgeError::MissingApiKey)
    }

    pub fn set_api_key(&mut self, key: String) -> Result<()> {
        self.spoonacular_api_key = Some(key);
        self.save()
    }
}

/// 保存期間テーブルをファイルから読み込み（ファイルがなければ `FileNotFound`）
pub fn load_shelf_life_table_file(path: &Path) -> Result<ShelfLifeTable> {
    if !path.exists() {
        return Err(FridgeError::FileNotFound(path.display().to_string()));
    }
    Ok(ShelfLifeTable::from_file(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.recipe_count, 5);
        assert_eq!(config.recipe_ranking, 2);
        assert!(config.ignore_pantry);
        assert_eq!(config.product_lookup_url, DEFAULT_PRODUCT_LOOKUP_URL);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{"recipe_count": 10}"#).unwrap();
        assert_eq!(config.recipe_count, 10);
        assert_eq!(config.timeout_seconds, 30);
        assert!(config.spoonacular_api_key.is_none());
    }

    #[test]
    fn test_inventory_path_override() {
        let config = Config {
            inventory_path: Some(PathBuf::from("/tmp/my-fridge.json")),
            ..Default::default()
        };
        assert_eq!(config.inventory_path().unwrap(), PathBuf::from("/tmp/my-fridge.json"));
    }

    #[test]
    fn test_missing_shelf_life_table() {
        let config = Config {
            shelf_life_table: Some(PathBuf::from("/nonexistent/table-12345.json")),
            ..Default::default()
        };
        let err = config.load_shelf_life_table().unwrap_err();
        assert!(matches!(err, FridgeError::FileNotFound(_)));
    }

    #[test]
    fn test_missing_table_file_reports_file_not_found() {
        let err = load_shelf_life_table_file(Path::new("/nonexistent/table-12345.json")).unwrap_err();
        assert!(matches!(err, FridgeError::FileNotFound(ref p) if p.contains("table-12345.json")));
    }

    #[test]
    fn test_builtin_shelf_life_table() {
        let table = Config::default().load_shelf_life_table().unwrap();
        assert!(!table.is_empty());
    }
}

//! 保存期間参照テーブル
//!
//! JSON配列（`ShelfLifeEntry` 形式）から読み込むか、組み込みテーブルを使う。

use crate::error::Result;
use crate::matcher::match_shelf_life;
use crate::types::{ProductDescription, ShelfLifeEntry};
use serde::{Deserialize, Serialize};

/// 参照テーブル（並び順がそのまま照合の優先順位）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShelfLifeTable {
    entries: Vec<ShelfLifeEntry>,
}

impl ShelfLifeTable {
    pub fn new(entries: Vec<ShelfLifeEntry>) -> Self {
        Self { entries }
    }

    /// JSONファイルから読み込み
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// JSON文字列から読み込み
    pub fn from_json(json: &str) -> Result<Self> {
        let table: Self = serde_json::from_str(json)?;
        Ok(table)
    }

    /// 組み込みテーブル
    ///
    /// 具体的な品目を先に、汎用的な品目を後に並べる。
    pub fn builtin() -> Self {
        let entries = vec![
            // 冷凍品・常温品は冷蔵日数なし（後続の汎用キーワードに当てない）
            ShelfLifeEntry::new(["ice cream", "graham", "goldfish"], None),
            ShelfLifeEntry::new(["buttermilk"], Some(14)),
            ShelfLifeEntry::new(["almond milk", "oat milk", "soy milk"], Some(10)),
            ShelfLifeEntry::new(["milk"], Some(7)),
            ShelfLifeEntry::new(["yogurt", "yoghurt"], Some(14)),
            ShelfLifeEntry::new(["cream cheese"], Some(14)),
            ShelfLifeEntry::new(["cottage cheese", "ricotta"], Some(7)),
            ShelfLifeEntry::new(["cheddar", "parmesan", "gouda", "swiss"], Some(42)).with_fallback(28),
            ShelfLifeEntry::new(["cheese"], None).with_fallback(21),
            ShelfLifeEntry::new(["peanut butter", "almond butter"], Some(90)),
            ShelfLifeEntry::new(["butter"], Some(60)),
            ShelfLifeEntry::new(["sour cream", "cream"], Some(14)),
            ShelfLifeEntry::new(["eggplant"], Some(7)),
            ShelfLifeEntry::new(["egg"], Some(35)),
            ShelfLifeEntry::new(["lettuce", "spinach", "arugula", "kale"], Some(7)),
            ShelfLifeEntry::new(["carrot"], Some(21)),
            ShelfLifeEntry::new(["broccoli", "cauliflower"], Some(5)),
            ShelfLifeEntry::new(["berries", "strawberr", "blueberr", "raspberr"], Some(5)),
            ShelfLifeEntry::new(["pineapple"], Some(5)),
            ShelfLifeEntry::new(["apple"], Some(42)),
            ShelfLifeEntry::new(["ground beef", "ground turkey", "ground pork"], Some(2)),
            ShelfLifeEntry::new(["chicken", "turkey"], Some(2)),
            ShelfLifeEntry::new(["bacon"], Some(7)),
            ShelfLifeEntry::new(["hamburger bun"], Some(14)),
            ShelfLifeEntry::new(["ham", "sausage", "hot dog"], Some(7)),
            ShelfLifeEntry::new(["steak", "beef", "pork", "lamb"], Some(5)),
            ShelfLifeEntry::new(["salmon", "tuna", "cod", "fish"], Some(2)),
            ShelfLifeEntry::new(["shrimp", "scallop"], Some(2)),
            ShelfLifeEntry::new(["tofu"], Some(5)),
            ShelfLifeEntry::new(["hummus", "salsa"], Some(7)),
            ShelfLifeEntry::new(["leftover", "cooked"], Some(4)),
            ShelfLifeEntry::new(["bread", "tortilla"], Some(14)),
            ShelfLifeEntry::new(["juice"], Some(10)),
        ];
        Self { entries }
    }

    pub fn entries(&self) -> &[ShelfLifeEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 商品の保存日数を照合
    pub fn match_product(&self, product: &ProductDescription) -> Option<u32> {
        match_shelf_life(product, &self.entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_preserves_order() {
        let json = r#"[
            {"keywords": ["milk"], "refrigerateMaxDays": 7},
            {"keywords": ["chocolate milk"], "refrigerateMaxDays": 10},
            {"keywords": []}
        ]"#;
        let table = ShelfLifeTable::from_json(json).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.entries()[1].keywords, vec!["chocolate milk".to_string()]);
        assert_eq!(table.match_product(&ProductDescription::new("Chocolate Milk")), Some(7));
    }

    #[test]
    fn test_from_json_invalid() {
        assert!(ShelfLifeTable::from_json("{ not json").is_err());
        assert!(ShelfLifeTable::from_json(r#"[{"keywords": ["x"], "refrigerateMaxDays": -3}]"#).is_err());
    }

    #[test]
    fn test_builtin_specific_before_generic() {
        let table = ShelfLifeTable::builtin();
        assert!(!table.is_empty());
        assert_eq!(table.match_product(&ProductDescription::new("Cultured Buttermilk")), Some(14));
        assert_eq!(table.match_product(&ProductDescription::new("Organic Whole Milk")), Some(7));
        assert_eq!(table.match_product(&ProductDescription::new("Ground Beef 80/20")), Some(2));
        assert_eq!(table.match_product(&ProductDescription::new("Mozzarella Cheese")), Some(21));
        assert_eq!(table.match_product(&ProductDescription::new("Paper Towels")), None);
    }

    #[test]
    fn test_builtin_avoids_substring_misfires() {
        let table = ShelfLifeTable::builtin();
        let days = |title: &str| table.match_product(&ProductDescription::new(title));

        assert_eq!(days("Japanese Eggplant"), Some(7));
        assert_eq!(days("Large Brown Eggs"), Some(35));
        assert_eq!(days("Fresh Pineapple Chunks"), Some(5));
        assert_eq!(days("Honeycrisp Apples"), Some(42));
        assert_eq!(days("Creamy Peanut Butter"), Some(90));
        assert_eq!(days("Salted Butter"), Some(60));
        assert_eq!(days("Vanilla Ice Cream"), None);
        assert_eq!(days("Honey Graham Crackers"), None);
        assert_eq!(days("Goldfish Cheddar Crackers"), None);
        assert_eq!(days("Heavy Whipping Cream"), Some(14));
        assert_eq!(days("Sesame Hamburger Buns"), Some(14));
        assert_eq!(days("Honey Ham Slices"), Some(7));
    }

    #[test]
    fn test_round_trip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("table.json");

        let table = ShelfLifeTable::new(vec![ShelfLifeEntry::new(["kimchi"], Some(90))]);
        std::fs::write(&path, serde_json::to_string(&table).unwrap()).unwrap();

        let loaded = ShelfLifeTable::from_file(&path).unwrap();
        assert_eq!(loaded, table);
    }
}

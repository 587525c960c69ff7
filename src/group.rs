//! まとめて追加モジュール
//!
//! 複数アイテムを下書きに溜めてから一括で在庫に保存する。
//! カメラ・バーコード読み取りは固定アイテムを追加するだけの仮実装。

use crate::error::{FridgeError, Result};
use crate::inventory::{InventoryItem, InventoryStore};
use crate::lookup::ProductLookupClient;
use crate::shelf_life::estimate_expiry;
use chrono::{DateTime, Utc};
use dialoguer::Input;
use fridge_common::{ProductDescription, ShelfLifeTable};

const CAMERA_PLACEHOLDER: (&str, &str) = ("Example Item (Camera)", "2025-03-01");
const BARCODE_PLACEHOLDER: (&str, &str) = ("Example Item (Barcode)", "2025-02-15");

/// 保存前の下書き
#[derive(Debug, Clone, Default)]
pub struct GroupDraft {
    items: Vec<InventoryItem>,
}

impl GroupDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// 手入力で追加
    pub fn add_item(&mut self, name: &str, expires: &str) -> Result<&InventoryItem> {
        let item = InventoryItem::new(name, expires)?;
        self.items.push(item);
        Ok(&self.items[self.items.len() - 1])
    }

    /// カメラ読み取り（仮）
    pub fn add_from_camera(&mut self) -> &InventoryItem {
        self.push_placeholder(CAMERA_PLACEHOLDER)
    }

    /// バーコード読み取り（仮）
    pub fn add_from_barcode(&mut self) -> &InventoryItem {
        self.push_placeholder(BARCODE_PLACEHOLDER)
    }

    fn push_placeholder(&mut self, (name, expires): (&str, &str)) -> &InventoryItem {
        self.items.push(InventoryItem {
            name: name.to_string(),
            expires: expires.to_string(),
        });
        &self.items[self.items.len() - 1]
    }

    /// 商品情報から保存期間を照合して追加
    ///
    /// # Returns
    /// * `Ok(Some(date))` - 照合成功、算出した期限日で追加済み
    /// * `Ok(None)` - 照合できず（手入力が必要）、何も追加しない
    pub fn add_from_product(
        &mut self,
        product: &ProductDescription,
        table: &ShelfLifeTable,
        reference: DateTime<Utc>,
    ) -> Result<Option<String>> {
        let Some(estimate) = estimate_expiry(product, table, reference)? else {
            return Ok(None);
        };

        self.add_item(&product.title, &estimate.expires)?;
        Ok(Some(estimate.expires))
    }

    /// 位置指定で削除
    pub fn remove_item(&mut self, index: usize) -> Result<InventoryItem> {
        if index >= self.items.len() {
            return Err(FridgeError::ItemIndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }
        Ok(self.items.remove(index))
    }

    /// 在庫に一括保存（空なら何もしない）
    ///
    /// 保存に失敗しても下書きは残るので、そのまま再試行できる。
    pub fn commit(&self, store: &mut InventoryStore) -> Result<usize> {
        store.add_all(self.items.clone())?;
        Ok(self.items.len())
    }

    pub fn items(&self) -> &[InventoryItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// 対話アクション
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupAction {
    /// 手入力で追加
    Add,
    /// カメラ（仮）
    Camera,
    /// バーコード（仮）
    Barcode,
    /// バーコードで商品検索して追加
    Lookup(String),
    /// 番号（1始まり）で削除
    Remove(usize),
    /// 保存して終了
    Save,
    /// 保存せず終了
    Cancel,
    /// 不明な入力
    Unknown(String),
}

/// 対話コマンドを解釈
pub fn parse_group_command(input: &str) -> GroupAction {
    let trimmed = input.trim();
    let (command, arg) = match trimmed.split_once(char::is_whitespace) {
        Some((c, a)) => (c, a.trim()),
        None => (trimmed, ""),
    };

    match command {
        "a" | "add" => GroupAction::Add,
        "c" | "camera" => GroupAction::Camera,
        "b" | "barcode" if arg.is_empty() => GroupAction::Barcode,
        "b" | "barcode" | "l" | "lookup" if !arg.is_empty() => GroupAction::Lookup(arg.to_string()),
        "x" | "remove" => match arg.parse::<usize>() {
            Ok(n) if n >= 1 => GroupAction::Remove(n),
            _ => GroupAction::Unknown(trimmed.to_string()),
        },
        "s" | "save" => GroupAction::Save,
        "q" | "cancel" => GroupAction::Cancel,
        _ => GroupAction::Unknown(trimmed.to_string()),
    }
}

/// 対話式でまとめて追加
pub async fn run_interactive_group(
    store: &mut InventoryStore,
    table: &ShelfLifeTable,
    lookup: Option<&ProductLookupClient>,
) -> Result<()> {
    let mut draft = GroupDraft::new();

    println!("🧺 まとめて追加");
    println!("---");
    println!("操作: [a]手入力 [c]カメラ [b]バーコード [l コード]商品検索 [x 番号]削除 [s]保存 [q]キャンセル");
    println!("---\n");

    loop {
        print_draft(&draft);

        let input: String = Input::new()
            .with_prompt("操作")
            .allow_empty(true)
            .interact_text()?;

        match parse_group_command(&input) {
            GroupAction::Add => {
                let name = prompt_text("Item Name")?;
                let expires = prompt_text("Expiration Date (YYYY-MM-DD)")?;
                match draft.add_item(&name, &expires) {
                    Ok(item) => println!("  → {}\n", item),
                    Err(e) => println!("  ⚠ {}\n", e),
                }
            }
            GroupAction::Camera => {
                let item = draft.add_from_camera();
                println!("  → {}\n", item);
            }
            GroupAction::Barcode => {
                let item = draft.add_from_barcode();
                println!("  → {}\n", item);
            }
            GroupAction::Lookup(code) => {
                let Some(client) = lookup else {
                    println!("  ⚠ 商品検索は利用できません\n");
                    continue;
                };
                lookup_into_draft(&mut draft, client, table, &code).await?;
            }
            GroupAction::Remove(n) => match draft.remove_item(n - 1) {
                Ok(item) => println!("  → 削除: {}\n", item.name),
                Err(e) => println!("  ⚠ {}\n", e),
            },
            GroupAction::Save => match draft.commit(store) {
                Ok(count) => {
                    println!("\n✓ {}件を保存しました: {}", count, store.path().display());
                    return Ok(());
                }
                Err(e) => println!("  ⚠ 保存できませんでした（下書きは残っています）: {}\n", e),
            },
            GroupAction::Cancel => {
                println!("キャンセルしました（保存していません）");
                return Ok(());
            }
            GroupAction::Unknown(s) => {
                if !s.is_empty() {
                    println!("  ⚠ 不明な操作です: {}\n", s);
                }
            }
        }
    }
}

/// 商品検索 → 照合 → 下書きに追加（照合できなければ手入力）
async fn lookup_into_draft(
    draft: &mut GroupDraft,
    client: &ProductLookupClient,
    table: &ShelfLifeTable,
    code: &str,
) -> Result<()> {
    let product = match client.lookup(code).await {
        Ok(Some(product)) => product,
        Ok(None) => {
            println!("  ⚠ 商品が見つかりません: {}\n", code);
            return Ok(());
        }
        Err(e) => {
            println!("  ⚠ {}\n", e);
            return Ok(());
        }
    };

    match draft.add_from_product(&product, table, Utc::now()) {
        Ok(Some(_)) => {
            if let Some(item) = draft.items().last() {
                println!("  → {}\n", item);
            }
        }
        Err(e) => println!("  ⚠ {}\n", e),
        Ok(None) => {
            println!("  「{}」の保存期間が不明です。期限日を入力してください", product.title);
            let expires = prompt_text("Expiration Date (YYYY-MM-DD)")?;
            match draft.add_item(&product.title, &expires) {
                Ok(item) => println!("  → {}\n", item),
                Err(e) => println!("  ⚠ {}\n", e),
            }
        }
    }
    Ok(())
}

fn prompt_text(prompt: &str) -> Result<String> {
    let value: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;
    Ok(value)
}

fn print_draft(draft: &GroupDraft) {
    if draft.is_empty() {
        println!("No items added yet.");
        println!("Add items to track their expiration dates.\n");
        return;
    }

    for (i, item) in draft.items().iter().enumerate() {
        println!("  {}) {}", i + 1, item);
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use fridge_common::{parse_reference_date, ShelfLifeEntry};

    #[test]
    fn test_placeholders() {
        let mut draft = GroupDraft::new();
        draft.add_from_camera();
        draft.add_from_barcode();
        assert_eq!(draft.items()[0].name, "Example Item (Camera)");
        assert_eq!(draft.items()[0].expires, "2025-03-01");
        assert_eq!(draft.items()[1].name, "Example Item (Barcode)");
        assert_eq!(draft.items()[1].expires, "2025-02-15");
    }

    #[test]
    fn test_add_and_remove() {
        let mut draft = GroupDraft::new();
        draft.add_item("Milk", "2025-06-08").unwrap();
        draft.add_item("Eggs", "2025-07-06").unwrap();
        assert!(draft.add_item("Butter", "").is_err());
        assert_eq!(draft.len(), 2);

        let removed = draft.remove_item(0).unwrap();
        assert_eq!(removed.name, "Milk");
        assert_eq!(draft.items()[0].name, "Eggs");

        let err = draft.remove_item(5).unwrap_err();
        assert!(matches!(err, FridgeError::ItemIndexOutOfRange { index: 5, len: 1 }));
    }

    #[test]
    fn test_add_from_product_match() {
        let table = ShelfLifeTable::new(vec![ShelfLifeEntry::new(["milk"], Some(7))]);
        let mut draft = GroupDraft::new();
        let product = ProductDescription::new("Organic Whole Milk");
        let reference = parse_reference_date("2025-06-01").unwrap();

        let expires = draft.add_from_product(&product, &table, reference).unwrap();
        assert_eq!(expires.as_deref(), Some("2025-06-08"));
        assert_eq!(draft.items()[0].name, "Organic Whole Milk");
        assert_eq!(draft.items()[0].expires, "2025-06-08");
    }

    #[test]
    fn test_add_from_product_no_match_adds_nothing() {
        let table = ShelfLifeTable::new(vec![ShelfLifeEntry::new(["milk"], Some(7))]);
        let mut draft = GroupDraft::new();
        let product = ProductDescription::new("Dish Soap");
        let reference = parse_reference_date("2025-06-01").unwrap();

        assert_eq!(draft.add_from_product(&product, &table, reference).unwrap(), None);
        assert!(draft.is_empty());
    }

    #[test]
    fn test_parse_group_command() {
        assert_eq!(parse_group_command("a"), GroupAction::Add);
        assert_eq!(parse_group_command(" c "), GroupAction::Camera);
        assert_eq!(parse_group_command("b"), GroupAction::Barcode);
        assert_eq!(parse_group_command("b 4901234567894"), GroupAction::Lookup("4901234567894".into()));
        assert_eq!(parse_group_command("l 0001"), GroupAction::Lookup("0001".into()));
        assert_eq!(parse_group_command("x 2"), GroupAction::Remove(2));
        assert_eq!(parse_group_command("x 0"), GroupAction::Unknown("x 0".into()));
        assert_eq!(parse_group_command("s"), GroupAction::Save);
        assert_eq!(parse_group_command("q"), GroupAction::Cancel);
        assert_eq!(parse_group_command(""), GroupAction::Unknown(String::new()));
        assert_eq!(parse_group_command("l"), GroupAction::Unknown("l".into()));
    }
}

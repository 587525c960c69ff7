//! 在庫ファイルストア
//!
//! 変更のたびに一覧全体をJSONで書き戻す。

use super::InventoryItem;
use crate::error::{FridgeError, Result};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

/// 在庫ファイル
#[derive(Debug, Clone)]
pub struct InventoryStore {
    path: PathBuf,
    items: Vec<InventoryItem>,
}

impl InventoryStore {
    /// 在庫ファイルを読み込み
    ///
    /// ファイルがなければ空の在庫。壊れている場合は上書きを避けるためエラー。
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "在庫ファイルなし、空で開始");
            return Ok(Self {
                path: path.to_path_buf(),
                items: Vec::new(),
            });
        }

        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let items: Vec<InventoryItem> = serde_json::from_reader(reader)
            .map_err(|e| FridgeError::InventoryCorrupt(format!("{}: {}", path.display(), e)))?;

        tracing::debug!(path = %path.display(), count = items.len(), "在庫を読み込みました");
        Ok(Self {
            path: path.to_path_buf(),
            items,
        })
    }

    /// 在庫ファイルを保存
    pub fn save(&self) -> Result<()> {
        self.write(&self.items)
    }

    /// 一覧をファイルへ書き出す（メモリ上の在庫は変更しない）
    fn write(&self, items: &[InventoryItem]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let file = File::create(&self.path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, items)?;
        tracing::debug!(path = %self.path.display(), count = items.len(), "在庫を保存しました");
        Ok(())
    }

    /// 変更後の一覧を書き出し、成功した場合のみ反映する
    fn persist(&mut self, items: Vec<InventoryItem>) -> Result<()> {
        if let Err(e) = self.write(&items) {
            tracing::warn!(path = %self.path.display(), error = %e, "在庫の保存に失敗、変更を破棄");
            return Err(e);
        }
        self.items = items;
        Ok(())
    }

    /// アイテムを追加して保存
    pub fn add(&mut self, item: InventoryItem) -> Result<()> {
        item.validate()?;
        let mut items = self.items.clone();
        items.push(item);
        self.persist(items)
    }

    /// 複数アイテムをまとめて追加（全件検証後に一度だけ保存）
    pub fn add_all(&mut self, items: Vec<InventoryItem>) -> Result<()> {
        if items.is_empty() {
            return Ok(());
        }

        for item in &items {
            item.validate()?;
        }

        let mut updated = self.items.clone();
        updated.extend(items);
        self.persist(updated)
    }

    /// 位置指定で削除して保存
    pub fn delete(&mut self, index: usize) -> Result<InventoryItem> {
        if index >= self.items.len() {
            return Err(FridgeError::ItemIndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }

        let mut items = self.items.clone();
        let removed = items.remove(index);
        self.persist(items)?;
        tracing::info!(name = %removed.name, "在庫から削除しました");
        Ok(removed)
    }

    pub fn items(&self) -> &[InventoryItem] {
        &self.items
    }

    /// 食材名の一覧（レシピ検索用）
    pub fn names(&self) -> Vec<String> {
        self.items.iter().map(|i| i.name.clone()).collect()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

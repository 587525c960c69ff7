//! 賞味期限照合モジュール
//!
//! 商品名・説明文と参照テーブルのキーワードを照合し、冷蔵保存日数を決定する。
//!
//! ## 照合ルール
//! 1. 商品名・説明文を小文字化
//! 2. テーブルを先頭から走査し、最初にキーワードが一致したエントリを採用
//! 3. 採用エントリに保存日数がなければ「一致なし」（後続エントリは見ない）

use crate::normalize::{keyword_hits, normalize_keyword, normalize_text};
use crate::types::{ProductDescription, ShelfLifeEntry};

/// キーワードが一致した最初のエントリ（位置付き）
///
/// # Arguments
/// * `product` - 商品情報
/// * `table` - 参照テーブル（順序が優先順位）
///
/// # Returns
/// 一致したエントリの位置と参照。一致なしは `None`
pub fn find_matching_entry<'a>(
    product: &ProductDescription,
    table: &'a [ShelfLifeEntry],
) -> Option<(usize, &'a ShelfLifeEntry)> {
    let title = normalize_text(&product.title);
    let description = normalize_text(product.description_or_empty());
    let haystacks = [title.as_str(), description.as_str()];

    table.iter().enumerate().find(|(_, entry)| {
        !entry.keywords.is_empty()
            && entry
                .keywords
                .iter()
                .any(|k| keyword_hits(&normalize_keyword(k), &haystacks))
    })
}

/// 商品の冷蔵保存日数を照合
///
/// 最初に一致したエントリの `refrigerate_max_days`、なければ
/// `refrigerate_max_days_fallback` を返す。どちらもなければ `None`。
pub fn match_shelf_life(product: &ProductDescription, table: &[ShelfLifeEntry]) -> Option<u32> {
    find_matching_entry(product, table).and_then(|(_, entry)| entry.shelf_life_days())
}

//! 保存期間照合 → 期限日算出のつなぎ込み

use crate::error::Result;
use chrono::{DateTime, Utc};
use fridge_common::{compute_expiry, find_matching_entry, parse_reference_date, ProductDescription, ShelfLifeTable};

/// 照合結果と算出した期限日
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShelfLifeEstimate {
    /// 一致したテーブル行の位置
    pub entry_index: usize,
    pub days: u32,
    pub expires: String,
}

/// 基準日を決定（未指定なら現在時刻）
pub fn resolve_reference(date: Option<&str>) -> Result<DateTime<Utc>> {
    match date {
        Some(value) => Ok(parse_reference_date(value)?),
        None => Ok(Utc::now()),
    }
}

/// 商品の保存期間を照合し、期限日を算出
///
/// 照合できない（一致なし・一致行に日数なし）場合は `Ok(None)`。
pub fn estimate_expiry(
    product: &ProductDescription,
    table: &ShelfLifeTable,
    reference: DateTime<Utc>,
) -> Result<Option<ShelfLifeEstimate>> {
    let Some((entry_index, entry)) = find_matching_entry(product, table.entries()) else {
        tracing::debug!(title = %product.title, "キーワード一致なし");
        return Ok(None);
    };

    let Some(days) = entry.shelf_life_days() else {
        tracing::debug!(title = %product.title, entry_index, "一致した行に保存日数がありません");
        return Ok(None);
    };

    let expires = compute_expiry(reference, i64::from(days))?;
    tracing::debug!(title = %product.title, entry_index, days, %expires, "保存期間を照合しました");

    Ok(Some(ShelfLifeEstimate {
        entry_index,
        days,
        expires,
    }))
}

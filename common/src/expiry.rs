//! 賞味期限日の算出
//!
//! 日付境界はUTC暦日で統一する（基準時刻 + N×24時間 のUTC日付）。

use crate::error::{Error, Result};
use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};

/// 出力日付フォーマット（ゼロ埋め固定幅）
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// 4桁年の範囲
const YEAR_RANGE: std::ops::RangeInclusive<i32> = 0..=9999;

/// 基準時刻に保存日数を加算し、UTC暦日を `YYYY-MM-DD` で返す
///
/// # Arguments
/// * `reference` - 基準時刻（購入日・スキャン日時など）
/// * `shelf_life_days` - 保存日数（0以上）
///
/// # Returns
/// * `Ok(String)` - 賞味期限日
/// * `Err(Error::InvalidArgument)` - 日数が負、または日付が表現範囲外
pub fn compute_expiry(reference: DateTime<Utc>, shelf_life_days: i64) -> Result<String> {
    if shelf_life_days < 0 {
        return Err(Error::InvalidArgument(format!(
            "保存日数は0以上で指定してください: {}",
            shelf_life_days
        )));
    }

    let expiry = Duration::try_days(shelf_life_days)
        .and_then(|delta| reference.checked_add_signed(delta))
        .filter(|dt| YEAR_RANGE.contains(&dt.year()))
        .ok_or_else(|| {
            Error::InvalidArgument(format!("日付が範囲外です: {} + {}日", reference, shelf_life_days))
        })?;

    Ok(expiry.format(DATE_FORMAT).to_string())
}

/// 基準日文字列をUTC時刻に変換
///
/// `YYYY-MM-DD`（UTC 0時とみなす）またはRFC 3339形式を受け付ける。
pub fn parse_reference_date(value: &str) -> Result<DateTime<Utc>> {
    let value = value.trim();

    if let Ok(date) = NaiveDate::parse_from_str(value, DATE_FORMAT) {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(midnight.and_utc());
        }
    }

    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| Error::Parse(format!("日付を解釈できません: {} ({})", value, e)))
}

//! 賞味期限照合の共通型

use serde::{Deserialize, Serialize};

/// 食品カテゴリごとの冷蔵保存期間（参照テーブルの1行）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShelfLifeEntry {
    /// 照合キーワード（照合時にtrim・小文字化）
    #[serde(default)]
    pub keywords: Vec<String>,

    /// 冷蔵保存の最大日数（優先）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refrigerate_max_days: Option<u32>,

    /// 冷蔵保存の最大日数（優先値がない場合のみ使用）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refrigerate_max_days_fallback: Option<u32>,
}

impl ShelfLifeEntry {
    pub fn new<I, S>(keywords: I, refrigerate_max_days: Option<u32>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keywords: keywords.into_iter().map(Into::into).collect(),
            refrigerate_max_days,
            refrigerate_max_days_fallback: None,
        }
    }

    pub fn with_fallback(mut self, days: u32) -> Self {
        self.refrigerate_max_days_fallback = Some(days);
        self
    }

    /// 保存日数（優先値 → 代替値）
    ///
    /// `Some(0)` も有効な値として扱う。
    pub fn shelf_life_days(&self) -> Option<u32> {
        self.refrigerate_max_days.or(self.refrigerate_max_days_fallback)
    }
}

/// 商品検索で得た商品情報
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDescription {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub description: Option<String>,
}

impl ProductDescription {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// 説明文（未設定なら空文字）
    pub fn description_or_empty(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}

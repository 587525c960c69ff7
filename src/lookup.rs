//! バーコード商品検索モジュール
//!
//! UPCitemdb互換APIでバーコードから商品名・説明文を取得する。

use crate::config::Config;
use crate::error::{FridgeError, Result};
use fridge_common::ProductDescription;
use reqwest::StatusCode;
use serde::Deserialize;
use std::time::Duration;

/// 検索APIレスポンス
#[derive(Debug, Deserialize)]
struct LookupResponse {
    #[serde(default)]
    items: Vec<LookupItem>,
}

#[derive(Debug, Deserialize)]
struct LookupItem {
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: Option<String>,
}

/// バーコードを正規化（前後の空白・BOMを除き数字のみ残す）
pub fn normalize_barcode(raw: &str) -> Result<String> {
    let trimmed = raw.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}');
    let digits: String = trimmed.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.is_empty() {
        return Err(FridgeError::InvalidItem(format!("バーコードが不正です: {:?}", raw)));
    }
    Ok(digits)
}

/// 検索レスポンスから最初の商品を取り出す
pub fn parse_lookup_response(body: &str) -> Result<Option<ProductDescription>> {
    let response: LookupResponse = serde_json::from_str(body)
        .map_err(|e| FridgeError::ApiParse(format!("商品検索レスポンス: {}", e)))?;

    Ok(response.items.into_iter().next().map(|item| ProductDescription {
        title: item.title,
        description: item.description.filter(|d| !d.trim().is_empty()),
    }))
}

/// 商品検索クライアント
pub struct ProductLookupClient {
    http: reqwest::Client,
    base_url: String,
}

impl ProductLookupClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            config.product_lookup_url.clone(),
            Duration::from_secs(config.timeout_seconds),
        )
    }

    /// バーコードで商品を検索
    ///
    /// 該当なしは `Ok(None)`。
    pub async fn lookup(&self, barcode: &str) -> Result<Option<ProductDescription>> {
        let code = normalize_barcode(barcode)?;
        tracing::debug!(barcode = %code, url = %self.base_url, "商品検索");

        let response = self
            .http
            .get(&self.base_url)
            .query(&[("upc", code.as_str())])
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let body = response.text().await?;
        if !status.is_success() {
            return Err(FridgeError::ApiCall(format!("商品検索 {}: {}", status, body)));
        }

        let product = parse_lookup_response(&body)?;
        if product.is_none() {
            tracing::info!(barcode = %code, "商品が見つかりませんでした");
        }
        Ok(product)
    }
}

//! レシピ提案モジュール
//!
//! Spoonacular `findByIngredients` で在庫食材から作れるレシピを検索する。

use crate::config::Config;
use crate::error::{FridgeError, Result};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const FIND_BY_INGREDIENTS_URL: &str = "https://api.spoonacular.com/recipes/findByIngredients";

/// レシピ（検索結果1件）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: u64,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub image: Option<String>,

    #[serde(default)]
    pub used_ingredient_count: u32,     // 在庫から使う食材数

    #[serde(default)]
    pub missed_ingredient_count: u32,   // 不足食材数
}

/// 検索条件
#[derive(Debug, Clone)]
pub struct RecipeQuery {
    pub ingredients: Vec<String>,
    pub number: u32,
    pub ranking: u8,
    pub ignore_pantry: bool,
}

impl RecipeQuery {
    /// 在庫の食材名から検索条件を作成
    ///
    /// 空白のみの名前は除外し、食材が残らなければ `NoIngredients`。
    pub fn new<I, S>(ingredients: I, config: &Config) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let ingredients: Vec<String> = ingredients
            .into_iter()
            .map(|s| s.as_ref().trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        if ingredients.is_empty() {
            return Err(FridgeError::NoIngredients);
        }

        Ok(Self {
            ingredients,
            number: config.recipe_count,
            ranking: config.recipe_ranking,
            ignore_pantry: config.ignore_pantry,
        })
    }

    /// リクエストURLを組み立て
    pub fn to_url(&self, base_url: &str, api_key: &str) -> Result<Url> {
        let params = [
            ("ingredients", self.ingredients.join(",")),
            ("number", self.number.to_string()),
            ("ranking", self.ranking.to_string()),
            ("ignorePantry", self.ignore_pantry.to_string()),
            ("apiKey", api_key.to_string()),
        ];

        Url::parse_with_params(base_url, &params)
            .map_err(|e| FridgeError::Config(format!("レシピAPIのURLが不正です: {}", e)))
    }
}

/// レシピ検索レスポンスをパース
pub fn parse_recipes(body: &str) -> Result<Vec<Recipe>> {
    serde_json::from_str(body).map_err(|e| FridgeError::ApiParse(format!("レシピ一覧: {}", e)))
}

/// レシピAPIクライアント
pub struct RecipeClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl RecipeClient {
    pub fn new(api_key: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: FIND_BY_INGREDIENTS_URL.into(),
            api_key: api_key.into(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.get_api_key()?, Duration::from_secs(config.timeout_seconds))
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// 食材からレシピを検索
    pub async fn find_by_ingredients(&self, query: &RecipeQuery) -> Result<Vec<Recipe>> {
        let url = query.to_url(&self.base_url, &self.api_key)?;
        tracing::debug!(ingredients = query.ingredients.len(), number = query.number, "レシピ検索");

        let response = self.http.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::warn!(%status, "レシピAPIがエラーを返しました");
            return Err(FridgeError::ApiCall(format!("レシピ検索 {}: {}", status, body)));
        }

        let recipes = parse_recipes(&body)?;
        tracing::info!(count = recipes.len(), "レシピを取得しました");
        Ok(recipes)
    }
}

use clap::Parser;
use fridge_common::ProductDescription;
use fridge_inventory::{cli, config, error, group, inventory, logging, lookup, recipes, shelf_life};
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use indicatif::{ProgressBar, ProgressStyle};
use inventory::{InventoryItem, InventoryStore};
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let config = Config::load()?;
    let inventory_path = match cli.inventory.clone() {
        Some(path) => path,
        None => config.inventory_path()?,
    };

    match cli.command {
        Commands::List => {
            let store = InventoryStore::load(&inventory_path)?;
            println!("🧊 Your Fridge Inventory\n");

            if store.is_empty() {
                println!("No items added yet.");
                println!("Add items to track their expiration dates.");
            } else {
                for (i, item) in store.items().iter().enumerate() {
                    println!("  {}) {}", i + 1, item);
                }
            }
        }

        Commands::Add { name, expires, date } => {
            let mut store = InventoryStore::load(&inventory_path)?;

            let expires = match expires {
                Some(expires) => expires,
                None => {
                    // 期限日が省略されたら保存期間テーブルから算出
                    let table = config.load_shelf_life_table()?;
                    let reference = shelf_life::resolve_reference(date.as_deref())?;
                    let product = ProductDescription::new(name.clone());
                    match shelf_life::estimate_expiry(&product, &table, reference)? {
                        Some(estimate) => {
                            println!("- 保存期間 {}日 → {}", estimate.days, estimate.expires);
                            estimate.expires
                        }
                        None => {
                            return Err(error::FridgeError::InvalidItem(format!(
                                "「{}」の保存期間が不明です。--expires YYYY-MM-DD で指定してください",
                                name
                            )));
                        }
                    }
                }
            };

            let item = InventoryItem::new(&name, &expires)?;
            println!("✔ 追加: {}", item);
            store.add(item)?;
        }

        Commands::Delete { number } => {
            let mut store = InventoryStore::load(&inventory_path)?;
            let index = number.checked_sub(1).ok_or(error::FridgeError::ItemIndexOutOfRange {
                index: number,
                len: store.len(),
            })?;
            let removed = store.delete(index)?;
            println!("✔ 削除: {}", removed);
        }

        Commands::Group => {
            let mut store = InventoryStore::load(&inventory_path)?;
            let table = config.load_shelf_life_table()?;
            let client = match lookup::ProductLookupClient::from_config(&config) {
                Ok(client) => Some(client),
                Err(e) => {
                    tracing::warn!(error = %e, "商品検索クライアントを作成できません");
                    None
                }
            };

            group::run_interactive_group(&mut store, &table, client.as_ref()).await?;
        }

        Commands::Scan { barcode, date, dry_run } => {
            println!("🔎 fridge - バーコード検索\n");

            let reference = shelf_life::resolve_reference(date.as_deref())?;
            let table = config.load_shelf_life_table()?;
            let client = lookup::ProductLookupClient::from_config(&config)?;

            println!("[1/3] 商品を検索中...");
            let spinner = spinner("商品検索中...");
            let product = client.lookup(&barcode).await;
            spinner.finish_and_clear();

            let Some(product) = product? else {
                println!("商品が見つかりませんでした: {}", barcode);
                return Ok(());
            };
            println!("✔ {}\n", product.title);

            println!("[2/3] 保存期間を照合中...");
            let Some(estimate) = shelf_life::estimate_expiry(&product, &table, reference)? else {
                println!("保存期間が不明です。`fridge add \"{}\" --expires YYYY-MM-DD` で手入力してください", product.title);
                return Ok(());
            };
            println!("✔ 保存期間 {}日 → 期限 {}\n", estimate.days, estimate.expires);

            let item = InventoryItem::new(&product.title, &estimate.expires)?;
            if dry_run {
                println!("[3/3] ドライラン: {}", item);
            } else {
                println!("[3/3] 在庫に追加中...");
                let mut store = InventoryStore::load(&inventory_path)?;
                store.add(item.clone())?;
                println!("✔ 追加: {}", item);
            }
        }

        Commands::ShelfLife { title, description, date, table } => {
            let table = match table {
                Some(path) => config::load_shelf_life_table_file(&path)?,
                None => config.load_shelf_life_table()?,
            };
            let reference = shelf_life::resolve_reference(date.as_deref())?;

            let mut product = ProductDescription::new(title);
            if let Some(description) = description {
                product = product.with_description(description);
            }

            match shelf_life::estimate_expiry(&product, &table, reference)? {
                Some(estimate) => {
                    println!("{}", product.title);
                    println!("  保存期間: {}日", estimate.days);
                    println!("  賞味期限: {}", estimate.expires);
                    if cli.verbose {
                        let keywords = &table.entries()[estimate.entry_index].keywords;
                        println!("  一致行: #{} {:?}", estimate.entry_index + 1, keywords);
                    }
                }
                None => println!("no match: 「{}」の保存期間は見つかりませんでした", product.title),
            }
        }

        Commands::Recipes => {
            println!("🍳 Recipe Finder\n");

            let store = InventoryStore::load(&inventory_path)?;
            let query = recipes::RecipeQuery::new(store.names(), &config)?;
            let client = recipes::RecipeClient::from_config(&config)?;

            let spinner = spinner("レシピを検索中...");
            let found = client.find_by_ingredients(&query).await;
            spinner.finish_and_clear();
            let found = found?;

            if found.is_empty() {
                println!("レシピが見つかりませんでした");
            }
            for recipe in &found {
                println!("- {}", recipe.title);
                if cli.verbose {
                    println!(
                        "    使用 {} / 不足 {}  {}",
                        recipe.used_ingredient_count,
                        recipe.missed_ingredient_count,
                        recipe.image.as_deref().unwrap_or("")
                    );
                }
            }
        }

        Commands::Config { set_api_key, show } => {
            let mut config = config;

            if let Some(key) = set_api_key {
                config.set_api_key(key)?;
                println!("✔ APIキーを設定しました");
            }

            if show {
                println!("設定:");
                println!("  在庫ファイル: {}", inventory_path.display());
                println!(
                    "  保存期間テーブル: {}",
                    config
                        .shelf_life_table
                        .as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "組み込み".into())
                );
                println!("  レシピ件数: {}", config.recipe_count);
                println!("  商品検索URL: {}", config.product_lookup_url);
                println!(
                    "  APIキー: {}",
                    if config.get_api_key().is_ok() { "設定済み" } else { "未設定" }
                );
            }
        }
    }

    Ok(())
}

fn spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

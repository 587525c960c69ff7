use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fridge")]
#[command(about = "冷蔵庫の在庫と賞味期限を管理するツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 在庫ファイル（設定より優先）
    #[arg(long, global = true)]
    pub inventory: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 在庫一覧を表示
    List,

    /// 在庫を1件追加
    Add {
        /// 食品名
        #[arg(required = true)]
        name: String,

        /// 賞味期限日 (YYYY-MM-DD)。省略時は保存期間テーブルから算出
        #[arg(short, long)]
        expires: Option<String>,

        /// 期限算出の基準日 (YYYY-MM-DD、デフォルト: 今日)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// 在庫を削除（一覧の番号）
    Delete {
        /// 一覧の番号（1始まり）
        #[arg(required = true)]
        number: usize,
    },

    /// 対話式でまとめて追加
    Group,

    /// バーコードで商品を検索して追加
    Scan {
        /// バーコード (UPC/EAN)
        #[arg(required = true)]
        barcode: String,

        /// 期限算出の基準日 (YYYY-MM-DD、デフォルト: 今日)
        #[arg(short, long)]
        date: Option<String>,

        /// ドライラン（在庫に追加しない）
        #[arg(long)]
        dry_run: bool,
    },

    /// 商品名から保存期間と賞味期限を調べる
    ShelfLife {
        /// 商品名
        #[arg(required = true)]
        title: String,

        /// 商品説明
        #[arg(long)]
        description: Option<String>,

        /// 基準日 (YYYY-MM-DD、デフォルト: 今日)
        #[arg(short, long)]
        date: Option<String>,

        /// 保存期間テーブル（JSON、設定より優先）
        #[arg(short, long)]
        table: Option<PathBuf>,
    },

    /// 在庫食材からレシピを検索
    Recipes,

    /// 設定を表示/編集
    Config {
        /// Spoonacular APIキーを設定
        #[arg(long)]
        set_api_key: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add_with_expiry() {
        let cli = Cli::parse_from(["fridge", "add", "Milk", "--expires", "2025-06-08"]);
        match cli.command {
            Commands::Add { name, expires, date } => {
                assert_eq!(name, "Milk");
                assert_eq!(expires.as_deref(), Some("2025-06-08"));
                assert!(date.is_none());
            }
            _ => panic!("add expected"),
        }
    }

    #[test]
    fn test_parse_global_flags() {
        let cli = Cli::parse_from(["fridge", "list", "--verbose", "--inventory", "/tmp/inv.json"]);
        assert!(cli.verbose);
        assert_eq!(cli.inventory, Some(PathBuf::from("/tmp/inv.json")));
        assert!(matches!(cli.command, Commands::List));
    }

    #[test]
    fn test_parse_shelf_life() {
        let cli = Cli::parse_from([
            "fridge", "shelf-life", "Organic Whole Milk", "--description", "1 gal", "-d", "2025-06-01",
        ]);
        match cli.command {
            Commands::ShelfLife { title, description, date, table } => {
                assert_eq!(title, "Organic Whole Milk");
                assert_eq!(description.as_deref(), Some("1 gal"));
                assert_eq!(date.as_deref(), Some("2025-06-01"));
                assert!(table.is_none());
            }
            _ => panic!("shelf-life expected"),
        }
    }

    #[test]
    fn test_parse_scan_dry_run() {
        let cli = Cli::parse_from(["fridge", "scan", "012345678905", "--dry-run"]);
        assert!(matches!(cli.command, Commands::Scan { dry_run: true, .. }));
    }
}

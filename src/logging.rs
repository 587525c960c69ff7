use tracing_subscriber::EnvFilter;

/// ログ出力を初期化（stderr）
///
/// `RUST_LOG` が設定されていればそれを優先する。
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // テストなどで二重初期化された場合は無視
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

// src/main.rs
#[cfg(not(target_arch = "wasm32"))]
use site_i18n::{create_handler, Config, Result};

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load().await?;
    init_logger(&config.log_level);

    if let Some(path) = config.config_path() {
        log::debug!("Using config {}", path);
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    let input = if args.is_empty() {
        "help".to_string()
    } else {
        args.join(" ")
    };

    let handler = create_handler(config);
    let result = handler.handle_input_async(&input).await;

    if result.success {
        println!("{}", result.message);
        Ok(())
    } else {
        eprintln!("{}", result.message);
        std::process::exit(1);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn init_logger(level: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

// The browser build is driven through the exported `startI18n`.
#[cfg(target_arch = "wasm32")]
fn main() {}

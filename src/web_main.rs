//! Web 服务器主程序入口

use clap::Parser;
use tracing_subscriber::EnvFilter;

use tag_translator::config::load_config;
use tag_translator::env::{self, EnvVar};
use tag_translator::web::WebServer;

#[derive(Parser, Debug)]
#[command(name = "tag-translator", version)]
#[command(about = "Scrape data-tag-name elements from web pages and translate tag names")]
#[command(after_help = format!("ENVIRONMENT:\n{}", env::describe()))]
struct Args {
    /// Config file (YAML or TOML) [default: config.yaml]
    #[arg(short, long, value_name = "FILE")]
    config: Option<String>,

    /// Bind address, overrides web.bind_addr
    #[arg(short, long, value_name = "ADDRESS")]
    bind: Option<String>,

    /// Port number, overrides web.port
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    dotenv::dotenv().ok();
    init_logging()?;

    let config_path = match args.config {
        Some(path) => path,
        None => env::ConfigPath::get()?,
    };

    let mut config = load_config(&config_path)?;
    if let Some(bind) = args.bind {
        config.web.bind_addr = bind;
    }
    if let Some(port) = args.port {
        config.web.port = port;
    }
    config.validate()?;

    tracing::info!("使用配置文件: {}", config_path);

    let server = WebServer::new(config);
    server.start().await?;

    Ok(())
}

fn init_logging() -> Result<(), Box<dyn std::error::Error>> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(env::LogLevel::get()?)?,
    };

    tracing_subscriber::fmt().with_env_filter(filter).init();
    Ok(())
}

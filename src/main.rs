use clap::Parser;
use tracing::debug;

use newslens::cli::Cli;
use newslens::config::{StaticConfig, get_config, set_config};
use newslens::runtime::modes::{self, Mode};
use newslens::system::logging::init_logging;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    set_config(StaticConfig::load_from(&cli.config));

    match (modes::detect_mode(cli.command.as_ref()), cli.command) {
        (Mode::Server, _) => {
            let config = get_config();
            let _guard = init_logging(&config)?;
            debug!("Configuration loaded from {}", cli.config);
            modes::run_server().await
        }
        (Mode::Cli, Some(command)) => {
            // 命令输出走 stdout，未配置日志文件时只保留警告
            let mut config = (*get_config()).clone();
            if config.logging.file.is_none() {
                config.logging.level = "warn".to_string();
            }
            let _guard = init_logging(&config)?;

            if let Err(e) = modes::run_cli(command).await {
                eprintln!("{}", e.format_colored());
                std::process::exit(1);
            }
            Ok(())
        }
        _ => anyhow::bail!("No execution mode available; build with the `server` or `cli` feature"),
    }
}

// src/main.rs

use clap::Parser;
use log::LevelFilter;
use log4rs::{
    append::console::ConsoleAppender,
    append::file::FileAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
    Config,
};
use notion_blog::{
    site, AppError, CommandLineInput, ContentAdapter, ContentRepository, NotionHttpClient,
    PageRenderer, SiteConfig, SiteState,
};
use std::fs;
use std::sync::Arc;

/// Sets up logging configuration.
fn setup_logging(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let log_file_path = std::env::temp_dir().join("notion_blog.log");
    if let Some(parent) = log_file_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let pattern = if verbose {
        "{d(%Y-%m-%d %H:%M:%S)} [{l}] {t} - {m}{n}"
    } else {
        "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}"
    };

    let stdout_appender = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(pattern)))
        .build();

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} [{l}] {t} - {m}{n}",
        )))
        .build(&log_file_path)?;

    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout_appender)))
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(LevelFilter::Debug)))
                .build("file", Box::new(file_appender)),
        )
        .build(
            Root::builder()
                .appender("stdout")
                .appender("file")
                .build(log_level),
        )?;

    log4rs::init_config(config)?;
    log::info!("Logging initialized. Log file: {}", log_file_path.display());
    Ok(())
}

/// Builds the Notion client for the configured API root.
fn build_repository(config: &SiteConfig) -> Result<Arc<dyn ContentRepository>, AppError> {
    let client = match &config.api_base_url {
        Some(base_url) => {
            log::info!("Using Notion API root {}", base_url);
            NotionHttpClient::with_base_url(&config.api_key, base_url)?
        }
        None => NotionHttpClient::new(&config.api_key)?,
    };
    Ok(Arc::new(client))
}

async fn run(config: SiteConfig) -> anyhow::Result<()> {
    let repository = build_repository(&config)?;
    let adapter = ContentAdapter::new(repository, config.adapter_settings());
    let pages = PageRenderer::new(config.site_title.clone())?;

    match config.block_page_limit {
        Some(limit) => log::info!("Fetching at most {} page(s) of blocks per post", limit),
        None => log::debug!("Following every block cursor"),
    }

    site::serve(Arc::new(SiteState::new(adapter, pages)), config.addr).await
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CommandLineInput::parse();

    setup_logging(cli.verbose)?;

    let config = SiteConfig::resolve(cli)?;

    run(config).await?;

    Ok(())
}

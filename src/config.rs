// src/config.rs
use crate::content::AdapterSettings;
use crate::error::AppError;
use crate::types::{ApiKey, CollectionId, ValidatedUrl};
use clap::Parser;
use std::net::{IpAddr, SocketAddr};

/// Parsed command-line input. Credentials usually come from the environment.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineInput {
    /// Notion integration token
    #[arg(long, env = "NOTION_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Notion database holding the posts (the index stays empty without it)
    #[arg(long, env = "NOTION_DATABASE_ID")]
    pub database_id: Option<String>,

    /// Address to bind the HTTP server to
    #[arg(long, default_value = "127.0.0.1")]
    pub bind: IpAddr,

    /// Port to listen on
    #[arg(short, long, default_value_t = 3000)]
    pub port: u16,

    /// Title shown in the header and the browser tab
    #[arg(long, default_value = "Blog")]
    pub site_title: String,

    /// Maximum pages of child blocks fetched per post (default: follow every cursor)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub block_page_limit: Option<u32>,

    /// Override the Notion API root (e.g. a proxy)
    #[arg(long)]
    pub api_base_url: Option<String>,

    /// Enable verbose logging (debug level)
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

/// Resolved configuration, validated once at startup.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub api_key: ApiKey,
    pub collection: Option<CollectionId>,
    pub addr: SocketAddr,
    pub site_title: String,
    pub block_page_limit: Option<u32>,
    pub api_base_url: Option<ValidatedUrl>,
    pub verbose: bool,
}

impl SiteConfig {
    /// Validates CLI/environment input.
    ///
    /// A missing or malformed API key is fatal. A missing database id is
    /// not: it is logged and the index renders empty.
    pub fn resolve(cli: CommandLineInput) -> Result<Self, AppError> {
        let api_key_str = cli.api_key.ok_or_else(|| {
            AppError::MissingConfiguration(
                "NOTION_API_KEY environment variable not set".to_string(),
            )
        })?;
        let api_key = ApiKey::new(api_key_str)?;

        let collection = match cli.database_id.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => Some(CollectionId::parse(raw)?),
            _ => {
                log::warn!("NOTION_DATABASE_ID is not set; no posts will be listed");
                None
            }
        };

        let api_base_url = cli
            .api_base_url
            .as_deref()
            .map(ValidatedUrl::parse)
            .transpose()?;

        Ok(SiteConfig {
            api_key,
            collection,
            addr: SocketAddr::new(cli.bind, cli.port),
            site_title: cli.site_title,
            block_page_limit: cli.block_page_limit,
            api_base_url,
            verbose: cli.verbose,
        })
    }

    pub fn adapter_settings(&self) -> AdapterSettings {
        AdapterSettings {
            collection: self.collection.clone(),
            block_page_limit: self.block_page_limit,
        }
    }
}

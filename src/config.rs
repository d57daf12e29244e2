use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use url::Url;

use crate::infra::stapi::STAPI_API_BASE;

#[derive(Debug, Deserialize, Default)]
struct ConfigFile {
    base_url: Option<String>,
    page_size: Option<u32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub base_url: Url,
    pub page_size: Option<u32>,
}

/// Resolves settings from CLI overrides, then environment, then the config
/// file, then built-in defaults.
pub fn resolve(base_url: Option<String>, page_size: Option<u32>) -> Result<Settings> {
    resolve_from(base_url, page_size, &get_config_path(), |key| env::var(key).ok())
}

fn resolve_from(
    base_url: Option<String>,
    page_size: Option<u32>,
    config_path: &Path,
    env: impl Fn(&str) -> Option<String>,
) -> Result<Settings> {
    let file = load_config_file(config_path)?;

    let base_url = base_url
        .or_else(|| env("STAPI_BASE_URL"))
        .or(file.base_url)
        .unwrap_or_else(|| STAPI_API_BASE.to_string());

    let page_size = match page_size {
        Some(size) => Some(size),
        None => match env("STAPI_PAGE_SIZE") {
            Some(raw) => Some(
                raw.trim()
                    .parse()
                    .with_context(|| format!("STAPI_PAGE_SIZE is not a number: {raw:?}"))?,
            ),
            None => file.page_size,
        },
    };

    Ok(Settings {
        base_url: parse_base_url(&base_url)?,
        page_size,
    })
}

fn load_config_file(config_path: &Path) -> Result<ConfigFile> {
    if !config_path.exists() {
        return Ok(ConfigFile::default());
    }
    let config_content = fs::read_to_string(config_path)
        .with_context(|| format!("read config file {}", config_path.display()))?;
    toml::from_str(&config_content)
        .with_context(|| format!("parse config file {}", config_path.display()))
}

/// Endpoint paths are joined onto the base, so it must end in `/`.
pub fn parse_base_url(raw: &str) -> Result<Url> {
    let raw = raw.trim();
    let normalized = if raw.ends_with('/') {
        raw.to_string()
    } else {
        format!("{raw}/")
    };
    let url = Url::parse(&normalized).with_context(|| format!("invalid base url {raw:?}"))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        anyhow::bail!("base url must be http/https: {url}");
    }
    Ok(url)
}

fn get_config_dir_path() -> PathBuf {
    xdir::config()
        .map(|path| path.join("stapi-charts"))
        // If the standard path could not be found (e.g.`$HOME` is not set),
        // default to the current directory.
        .unwrap_or_default()
}

fn get_config_path() -> PathBuf {
    get_config_dir_path().join("config.toml")
}

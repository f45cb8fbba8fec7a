use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use kedia_core::{parse_timezone, today_in, KeywordTable, DEFAULT_TIMEZONE};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub parser: ParserSection,
    /// Category keyword lists; the built-in English/Hindi table when absent
    #[serde(default)]
    pub keywords: KeywordTable,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParserSection {
    /// IANA timezone used to decide what "today" is
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

impl Default for ParserSection {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
        }
    }
}

fn default_timezone() -> String {
    DEFAULT_TIMEZONE.to_string()
}

impl Config {
    /// Current date in the configured timezone.
    pub fn today(&self) -> Result<NaiveDate> {
        let tz = parse_timezone(&self.parser.timezone)
            .with_context(|| format!("invalid timezone: {}", self.parser.timezone))?;
        Ok(today_in(tz, Utc::now()))
    }
}

/// `~/.kedia`, where the config file lives.
fn config_dir() -> Result<PathBuf> {
    let home = std::env::var_os("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".kedia"))
}

pub fn config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

pub fn load_config() -> Result<Config> {
    let p = config_path()?;
    if !p.exists() {
        debug!(path = %p.display(), "no config file, using defaults");
        return Ok(Config::default());
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    let cfg: Config = toml::from_str(&s).with_context(|| format!("parse {}", p.display()))?;
    debug!(path = %p.display(), keywords = cfg.keywords.len(), "loaded config");
    Ok(cfg)
}

pub fn save_config(cfg: &Config) -> Result<PathBuf> {
    let p = config_path()?;
    if let Some(dir) = p.parent() {
        fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    }
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(&p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(p)
}

pub fn init_config() -> Result<()> {
    let p = config_path()?;
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    let p = save_config(&Config::default())?;
    println!("Wrote {}", p.display());
    Ok(())
}

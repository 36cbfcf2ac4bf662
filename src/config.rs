//! Server configuration
//!
//! # Environment variables
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | HOST | 0.0.0.0 | bind address |
//! | PORT | 8000 | HTTP port |
//! | MENU_PATH | `assets/menu_items.json` (searched in `.` then `..`) | menu file |
//! | LOG_LEVEL | info | tracing filter directive |
//! | SESSION_IDLE_TTL_SECS | unset | evict sessions idle this long; unset keeps them forever |
//! | SESSION_SWEEP_INTERVAL_SECS | 60 | how often the eviction sweep runs |

use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::{Path, PathBuf},
    str::FromStr,
    time::Duration,
};

const MENU_FILE: &str = "menu_items.json";

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub menu_path: PathBuf,
    pub log_level: String,
    /// `None` disables session eviction
    pub session_idle_ttl: Option<Duration>,
    pub session_sweep_interval: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8000,
            menu_path: PathBuf::from("assets").join(MENU_FILE),
            log_level: "info".into(),
            session_idle_ttl: None,
            session_sweep_interval: Duration::from_secs(60),
        }
    }
}

impl Config {
    /// Loads configuration from the environment, falling back to defaults
    /// for unset or unparseable values.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

        Self {
            host: env_parse("HOST").unwrap_or(defaults.host),
            port: env_parse("PORT").unwrap_or(defaults.port),
            menu_path: std::env::var("MENU_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| locate_menu_file(&current_dir)),
            log_level: std::env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
            session_idle_ttl: env_parse("SESSION_IDLE_TTL_SECS").map(Duration::from_secs),
            session_sweep_interval: env_parse("SESSION_SWEEP_INTERVAL_SECS")
                .map(Duration::from_secs)
                .unwrap_or(defaults.session_sweep_interval),
        }
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn env_parse<T: FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

/// Looks for the menu file in:
/// 1. ./assets
/// 2. ../assets (if running from a subdir)
/// 3. Fallback to the relative `assets/` path
fn locate_menu_file(current_dir: &Path) -> PathBuf {
    let candidate = current_dir.join("assets").join(MENU_FILE);
    if candidate.exists() {
        return candidate;
    }

    if let Some(parent) = current_dir.parent() {
        let candidate = parent.join("assets").join(MENU_FILE);
        if candidate.exists() {
            return candidate;
        }
    }

    PathBuf::from("assets").join(MENU_FILE)
}

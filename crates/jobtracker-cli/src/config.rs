// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow, bail};
use jobtracker_app::Route;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_VERSION: i64 = 1;
const DEFAULT_NOTIFICATION_TTL: &str = "4s";
const DEFAULT_LOG_LEVEL: &str = "info";
const LOG_FILE_NAME: &str = "jobtracker.log";

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub version: i64,
    #[serde(default)]
    pub ui: Ui,
    #[serde(default)]
    pub data: Data,
    #[serde(default)]
    pub log: Log,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            ui: Ui::default(),
            data: Data::default(),
            log: Log::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Ui {
    pub start_route: Option<String>,
    pub sidebar_collapsed: Option<bool>,
    pub notification_ttl: Option<String>,
}

impl Default for Ui {
    fn default() -> Self {
        Self {
            start_route: Some(Route::Auth.path().to_owned()),
            sidebar_collapsed: Some(false),
            notification_ttl: Some(DEFAULT_NOTIFICATION_TTL.to_owned()),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Data {
    pub seed_path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Log {
    pub level: Option<String>,
    pub file: Option<String>,
}

impl Default for Log {
    fn default() -> Self {
        Self {
            level: Some(DEFAULT_LOG_LEVEL.to_owned()),
            file: None,
        }
    }
}

impl Config {
    pub fn default_path() -> Result<PathBuf> {
        if let Some(path) = env::var_os("JOBTRACKER_CONFIG_PATH") {
            return Ok(PathBuf::from(path));
        }

        let config_root = dirs::config_dir().ok_or_else(|| {
            anyhow!(
                "cannot resolve config directory; set JOBTRACKER_CONFIG_PATH to the config file"
            )
        })?;

        let app_dir = config_root.join(jobtracker_store::APP_NAME);
        fs::create_dir_all(&app_dir)
            .with_context(|| format!("create config directory {}", app_dir.display()))?;
        Ok(app_dir.join("config.toml"))
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("read config file {}", path.display()))?;
        let value: toml::Value = toml::from_str(&raw)
            .with_context(|| format!("parse TOML config {}", path.display()))?;

        let version = value
            .get("version")
            .and_then(toml::Value::as_integer)
            .ok_or_else(|| {
                anyhow!(
                    "config file {} is not versioned. Add `version = 1` and place values under [ui], [data], and [log]",
                    path.display()
                )
            })?;

        if version != CONFIG_VERSION {
            bail!(
                "unsupported config version {} in {}; expected version = 1",
                version,
                path.display()
            );
        }

        let config: Config = value
            .try_into()
            .with_context(|| format!("decode config {}", path.display()))?;
        config.validate(path)?;
        Ok(config)
    }

    fn validate(&self, path: &Path) -> Result<()> {
        if let Some(route) = &self.ui.start_route
            && Route::parse(route).is_none()
        {
            let choices = Route::ALL
                .iter()
                .map(|route| format!("{:?}", route.path()))
                .collect::<Vec<_>>()
                .join(", ");
            bail!(
                "ui.start_route in {} must be one of {choices}, got {route:?}",
                path.display()
            );
        }

        if let Some(ttl) = &self.ui.notification_ttl {
            let parsed = parse_duration(ttl)?;
            if parsed <= Duration::ZERO {
                bail!(
                    "ui.notification_ttl in {} must be positive, got {}",
                    path.display(),
                    ttl
                );
            }
        }

        if let Some(seed_path) = &self.data.seed_path {
            jobtracker_store::validate_seed_path(seed_path)
                .with_context(|| format!("invalid data.seed_path in {}", path.display()))?;
        }

        if let Some(level) = &self.log.level
            && level.trim().is_empty()
        {
            bail!(
                "log.level in {} must not be empty; use a filter such as \"info\"",
                path.display()
            );
        }

        if let Some(file) = &self.log.file
            && file.trim().is_empty()
        {
            bail!(
                "log.file in {} must not be empty; remove it to use the default",
                path.display()
            );
        }

        Ok(())
    }

    pub fn start_route(&self) -> Route {
        self.ui
            .start_route
            .as_deref()
            .and_then(Route::parse)
            .unwrap_or(Route::Auth)
    }

    pub fn sidebar_collapsed(&self) -> bool {
        self.ui.sidebar_collapsed.unwrap_or(false)
    }

    pub fn notification_ttl(&self) -> Result<Duration> {
        parse_duration(
            self.ui
                .notification_ttl
                .as_deref()
                .unwrap_or(DEFAULT_NOTIFICATION_TTL),
        )
    }

    pub fn seed_path(&self) -> Option<PathBuf> {
        self.data.seed_path.as_deref().map(PathBuf::from)
    }

    pub fn log_level(&self) -> &str {
        self.log.level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }

    pub fn log_file(&self) -> Result<PathBuf> {
        if let Some(file) = &self.log.file {
            return Ok(PathBuf::from(file));
        }
        let data_root = dirs::data_local_dir().ok_or_else(|| {
            anyhow!("cannot resolve data directory; set [log].file to an absolute path")
        })?;
        Ok(data_root
            .join(jobtracker_store::APP_NAME)
            .join(LOG_FILE_NAME))
    }

    pub fn example_config(path: &Path) -> String {
        format!(
            "# jobtracker config\n# Place this file at: {}\n\nversion = 1\n\n[ui]\n# One of \"/\", \"/dashboard\", \"/candidatura\"\nstart_route = \"/\"\nsidebar_collapsed = false\nnotification_ttl = \"{}\"\n\n[data]\n# Optional. Without it the bundled sample applications are shown.\n# seed_path = \"/absolute/path/to/applications.toml\"\n\n[log]\n# tracing filter directive; RUST_LOG takes precedence\nlevel = \"{}\"\n# Optional. Default is platform data dir (for example ~/.local/share/jobtracker/jobtracker.log)\n# file = \"/absolute/path/to/jobtracker.log\"\n",
            path.display(),
            DEFAULT_NOTIFICATION_TTL,
            DEFAULT_LOG_LEVEL,
        )
    }
}

fn parse_duration(raw: &str) -> Result<Duration> {
    if let Some(value) = raw.strip_suffix("ms") {
        let millis: u64 = value
            .parse()
            .with_context(|| format!("invalid notification duration {raw:?}"))?;
        return Ok(Duration::from_millis(millis));
    }
    if let Some(value) = raw.strip_suffix('s') {
        let secs: u64 = value
            .parse()
            .with_context(|| format!("invalid notification duration {raw:?}"))?;
        return Ok(Duration::from_secs(secs));
    }
    if let Some(value) = raw.strip_suffix('m') {
        let mins: u64 = value
            .parse()
            .with_context(|| format!("invalid notification duration {raw:?}"))?;
        let Some(secs) = mins.checked_mul(60) else {
            bail!("{}", duration_hint(raw));
        };
        return Ok(Duration::from_secs(secs));
    }

    bail!("{}", duration_hint(raw))
}

fn duration_hint(raw: &str) -> String {
    format!("invalid duration {raw:?}; use one of: <N>ms, <N>s, <N>m (for example 500ms or 4s)")
}

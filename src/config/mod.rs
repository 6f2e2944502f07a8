use std::{
    collections::HashMap,
    env,
    fs,
    path::PathBuf,
};

use directories::BaseDirs;

use crate::printer::ColorMode;

#[derive(Debug, Clone)]
pub struct Config {
    inner: HashMap<String, String>,
    read_env: bool,
    pub config_path: PathBuf,
}

impl Config {
    pub fn load() -> Self {
        let mut map = default_map();
        let config_path = default_config_path();

        // Read .pylaunchrc if exists
        if let Ok(text) = fs::read_to_string(&config_path) {
            tracing::debug!(path = %config_path.display(), "reading rc file");
            map.extend(parse_rc(&text));
        }

        // Overlay environment variables (take precedence)
        for (k, v) in env::vars() {
            if is_config_key(&k) {
                map.insert(k, v);
            }
        }

        Self { inner: map, read_env: true, config_path }
    }

    /// Defaults overlaid with `entries`, ignoring the rc file and the environment.
    pub fn from_map<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut map = default_map();
        map.extend(entries.into_iter().map(|(k, v)| (k.into(), v.into())));
        Self { inner: map, read_env: false, config_path: default_config_path() }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        // ENV first
        if self.read_env {
            if let Ok(v) = env::var(key) {
                return Some(v);
            }
        }
        self.inner.get(key).cloned()
    }

    pub fn get_bool(&self, key: &str) -> bool {
        self.get(key)
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "true" | "1" | "yes" | "on"))
            .unwrap_or(false)
    }

    pub fn get_path(&self, key: &str) -> Option<PathBuf> {
        self.get(key).map(PathBuf::from)
    }

    pub fn profiles_path(&self) -> PathBuf {
        self.get_path("PYLAUNCH_PROFILES_PATH")
            .unwrap_or_else(|| config_dir().join("profiles.json"))
    }
}

/// Typed view over [`Config`], with CLI overrides applied on top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub interpreter: String,
    pub min_version: String,
    pub download_url: String,
    pub pause: bool,
    pub propagate_exit: bool,
    pub color: ColorMode,
    pub profiles_path: PathBuf,
}

impl Settings {
    pub fn from_config(cfg: &Config) -> Self {
        let color = cfg
            .get("PYLAUNCH_COLOR")
            .and_then(|v| v.parse::<ColorMode>().ok())
            .unwrap_or_default();
        Self {
            interpreter: cfg.get("PYLAUNCH_INTERPRETER").unwrap_or_else(|| "python".into()),
            min_version: cfg.get("PYLAUNCH_MIN_VERSION").unwrap_or_else(|| "3.8".into()),
            download_url: cfg
                .get("PYLAUNCH_DOWNLOAD_URL")
                .unwrap_or_else(|| "https://www.python.org/downloads/".into()),
            pause: cfg.get_bool("PYLAUNCH_PAUSE"),
            propagate_exit: cfg.get_bool("PYLAUNCH_PROPAGATE_EXIT"),
            color,
            profiles_path: cfg.profiles_path(),
        }
    }

    pub fn apply(mut self, overrides: &Overrides) -> Self {
        if let Some(interp) = overrides.interpreter.as_deref() {
            self.interpreter = interp.to_string();
        }
        if overrides.no_pause {
            self.pause = false;
        }
        if overrides.propagate_exit {
            self.propagate_exit = true;
        }
        if overrides.no_color {
            self.color = ColorMode::Never;
        }
        self
    }
}

/// Settings that can be forced from the command line.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub interpreter: Option<String>,
    pub no_pause: bool,
    pub propagate_exit: bool,
    pub no_color: bool,
}

/// Parse `KEY=VALUE` lines, skipping blanks and `#` comments.
pub fn parse_rc(text: &str) -> HashMap<String, String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
        .collect()
}

fn is_config_key(k: &str) -> bool {
    const KEYS: &[&str] = &[
        "PYLAUNCH_INTERPRETER",
        "PYLAUNCH_MIN_VERSION",
        "PYLAUNCH_DOWNLOAD_URL",
        "PYLAUNCH_PAUSE",
        "PYLAUNCH_PROPAGATE_EXIT",
        "PYLAUNCH_PROFILES_PATH",
        "PYLAUNCH_COLOR",
    ];

    KEYS.contains(&k) || k.starts_with("PYLAUNCH_")
}

fn config_dir() -> PathBuf {
    BaseDirs::new()
        .map(|b| b.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("~/.config"))
        .join("pylaunch")
}

fn default_config_path() -> PathBuf {
    config_dir().join(".pylaunchrc")
}

fn default_map() -> HashMap<String, String> {
    let mut m = HashMap::new();

    // Strings
    m.insert("PYLAUNCH_INTERPRETER".into(), "python".into());
    m.insert("PYLAUNCH_MIN_VERSION".into(), "3.8".into());
    m.insert(
        "PYLAUNCH_DOWNLOAD_URL".into(),
        "https://www.python.org/downloads/".into(),
    );
    m.insert("PYLAUNCH_COLOR".into(), "auto".into());

    // Paths
    m.insert(
        "PYLAUNCH_PROFILES_PATH".into(),
        config_dir().join("profiles.json").to_string_lossy().into_owned(),
    );

    // Bools as strings
    m.insert("PYLAUNCH_PAUSE".into(), "true".into());
    m.insert("PYLAUNCH_PROPAGATE_EXIT".into(), "false".into());

    m
}

#[cfg(test)]
mod tests;

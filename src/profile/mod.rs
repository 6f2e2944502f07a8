//! Launch profiles: built-in targets plus user entries from `profiles.json`.

use std::{fs, io, path::{Path, PathBuf}};

use serde::{Deserialize, Serialize};

use crate::{config::Settings, error::LaunchError};

pub const AUTO_FILING_BOT: &str = "auto-filing-bot";
pub const MASTER_CONTROL_SYSTEM: &str = "master-control-system";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    #[serde(default)]
    pub title: Option<String>,
    pub script: PathBuf,
}

impl Profile {
    pub fn new(name: &str, title: &str, script: &str) -> Self {
        Self {
            name: name.to_string(),
            title: Some(title.to_string()),
            script: PathBuf::from(script),
        }
    }

    pub fn builtin() -> Vec<Profile> {
        vec![
            Profile::new(AUTO_FILING_BOT, "Auto Filing Bot", "auto_filing_bot.py"),
            Profile::new(
                MASTER_CONTROL_SYSTEM,
                "Master Control System",
                "master_control_system.py",
            ),
        ]
    }

    /// Built-in profile by name. `profiles.json` is never consulted.
    pub fn builtin_named(name: &str) -> Option<Profile> {
        Self::builtin().into_iter().find(|p| p.name == name)
    }

    /// Ad-hoc profile for a script path given on the command line.
    pub fn for_script(path: &Path) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self { name, title: None, script: path.to_path_buf() }
    }

    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.name)
    }
}

#[derive(Debug, Clone)]
pub struct ProfileRegistry {
    profiles: Vec<Profile>,
}

impl Default for ProfileRegistry {
    fn default() -> Self {
        Self { profiles: Profile::builtin() }
    }
}

impl ProfileRegistry {
    pub fn load(settings: &Settings) -> Result<Self, LaunchError> {
        let mut registry = Self::default();
        let path = &settings.profiles_path;
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(registry),
            Err(e) => return Err(e.into()),
        };
        let extra: Vec<Profile> = serde_json::from_str(&text).map_err(|source| {
            LaunchError::Profiles { path: path.clone(), source }
        })?;
        tracing::debug!(path = %path.display(), count = extra.len(), "loaded user profiles");
        for p in extra {
            registry.insert(p);
        }
        Ok(registry)
    }

    /// Add `profile`, replacing any profile with the same name.
    pub fn insert(&mut self, profile: Profile) {
        match self.profiles.iter_mut().find(|p| p.name == profile.name) {
            Some(existing) => *existing = profile,
            None => self.profiles.push(profile),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Profile> {
        self.profiles.iter().find(|p| p.name == name)
    }

    pub fn list(&self) -> &[Profile] {
        &self.profiles
    }

    pub fn resolve(&self, target: &str) -> Result<Profile, LaunchError> {
        if let Some(p) = self.get(target) {
            return Ok(p.clone());
        }
        let path = Path::new(target);
        let is_py = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("py"))
            .unwrap_or(false);
        if is_py || path.is_file() {
            return Ok(Profile::for_script(path));
        }
        Err(LaunchError::UnknownProfile(target.to_string()))
    }
}

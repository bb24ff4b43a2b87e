use std::path::{Path, PathBuf};

use anyhow::{Context, Ok};
use serde::{Deserialize, Serialize};

pub const DEFAULT_PROFILE: &str = "default";

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
    #[serde(default)]
    pub list: ListSettings,
}

/// `[list]` table: how list screens react to filter changes
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quick_filter_resets_page: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refetch_on_reset: Option<bool>,
}

impl Profile {
    pub fn from_path(profile: &Path) -> anyhow::Result<Option<Self>> {
        if !profile.exists() {
            return Ok(None);
        }

        let contents = std::fs::read_to_string(profile).context("Failed to read profile file")?;

        let profile: Self = toml::from_str(&contents).context("Failed to deserialize profile")?;

        Ok(Some(profile))
    }

    pub fn save(&self, profile_path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = profile_path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create profile directory")?;
        }

        let content = toml::to_string(self).context("Failed to serialize profile")?;

        std::fs::write(profile_path, content).context("Failed to write profile")?;

        Ok(())
    }
}

/// Get the current active profile name
pub fn get_current_profile_name() -> anyhow::Result<String> {
    let current_file = get_current_profile_file();

    if current_file.exists() {
        let name =
            std::fs::read_to_string(&current_file).context("Failed to read current profile")?;
        Ok(name.trim().to_string())
    } else {
        Ok(DEFAULT_PROFILE.to_string())
    }
}

/// Set the current active profile name
pub fn set_current_profile_name(name: &str) -> anyhow::Result<()> {
    let current_file = get_current_profile_file();

    if let Some(parent) = current_file.parent() {
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
    }

    std::fs::write(&current_file, name).context("Failed to write current profile")?;

    Ok(())
}

/// Get the XDG config directory, respecting XDG_CONFIG_HOME
fn get_config_dir() -> PathBuf {
    if let std::result::Result::Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
        PathBuf::from(xdg_config).join("broker")
    } else {
        directories::ProjectDirs::from("com", "broker", "broker")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

/// Get path to the "current" profile marker file
fn get_current_profile_file() -> PathBuf {
    get_config_dir().join("current")
}

/// Get path to a profile's config file
pub fn get_profile_config_path(profile_name: &str) -> PathBuf {
    get_config_dir()
        .join("profiles")
        .join(format!("{}.toml", profile_name))
}

/// List all available profiles
pub fn list_profiles() -> anyhow::Result<Vec<String>> {
    let profiles_dir = get_config_dir().join("profiles");

    if !profiles_dir.exists() {
        return Ok(vec![DEFAULT_PROFILE.to_string()]);
    }

    let mut profiles = vec![];

    for entry in std::fs::read_dir(&profiles_dir).context("Failed to read profiles directory")? {
        let entry = entry?;
        let path = entry.path();

        if path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("toml") {
            if let Some(name) = path.file_stem().and_then(|s| s.to_str()) {
                profiles.push(name.to_string());
            }
        }
    }

    if !profiles.iter().any(|p| p == DEFAULT_PROFILE) {
        profiles.push(DEFAULT_PROFILE.to_string());
    }

    profiles.sort();
    Ok(profiles)
}

/// Resolves the profile name: the explicit argument wins over the marker file
pub fn resolve_profile_name(arg_profile: &Option<String>) -> String {
    match arg_profile {
        Some(name) => name.clone(),
        None => get_current_profile_name().unwrap_or_else(|_| DEFAULT_PROFILE.to_string()),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_profile_toml_layout() {
        let profile: Profile = toml::from_str(
            r#"
api_url = "https://admin.example.com/api"
page_size = 20

[list]
quick_filter_resets_page = true
"#,
        )
        .unwrap();

        assert_eq!(profile.api_url.as_deref(), Some("https://admin.example.com/api"));
        assert_eq!(profile.page_size, Some(20));
        assert_eq!(profile.api_token, None);
        assert_eq!(profile.list.quick_filter_resets_page, Some(true));
        assert_eq!(profile.list.refetch_on_reset, None);
    }

    #[test]
    fn test_profile_save_and_load() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("profiles").join("work.toml");

        let profile = Profile {
            api_url: Some("http://localhost:9000/api".to_string()),
            timeout_secs: Some(5),
            ..Profile::default()
        };
        profile.save(&path).unwrap();

        let loaded = Profile::from_path(&path).unwrap();
        assert_eq!(loaded, Some(profile));
    }

    #[test]
    fn test_missing_profile_is_none() {
        let dir = tempfile::TempDir::new().unwrap();
        let loaded = Profile::from_path(&dir.path().join("absent.toml")).unwrap();
        assert!(loaded.is_none());
    }
}

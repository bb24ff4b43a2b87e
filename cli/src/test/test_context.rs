#![allow(clippy::unwrap_used)]

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

use crate::profile::Profile;

/// Isolated config home with a uniquely named profile
pub struct TestContext {
    pub temp_dir: TempDir,
    pub profile_name: String,
}

impl TestContext {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let profile_name = format!("test_{}", uuid::Uuid::new_v4().simple());

        Self {
            temp_dir,
            profile_name,
        }
    }

    /// Context whose profile points at `api_url`
    pub fn with_api(api_url: &str) -> Self {
        let context = Self::new();

        let profile = Profile {
            api_url: Some(api_url.to_string()),
            api_token: Some("test-token".to_string()),
            timeout_secs: Some(5),
            ..Profile::default()
        };
        profile.save(&context.profile_path()).unwrap();

        context
    }

    pub fn config_home(&self) -> PathBuf {
        self.temp_dir.path().join("config")
    }

    pub fn profile_path(&self) -> PathBuf {
        self.config_home()
            .join("broker")
            .join("profiles")
            .join(format!("{}.toml", self.profile_name))
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("broker").unwrap();
        cmd.env("XDG_CONFIG_HOME", self.config_home())
            .env("BROKER_PROFILE", &self.profile_name)
            .env_remove("BROKER_API_URL")
            .env_remove("BROKER_API_TOKEN")
            .env_remove("RUST_LOG");
        cmd
    }
}

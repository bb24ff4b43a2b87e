use std::path::Path;

use broker_core::{ControllerPolicy, DEFAULT_PAGE_SIZE};
use serde::{Serialize, Serializer};

use crate::{args::ConfigArgs, profile::Profile};

pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";

/// Effective configuration: CLI flags and environment over the profile over defaults
#[derive(Debug, Clone, Serialize)]
pub struct AppConfig {
    pub profile_name: String,
    pub profile_path: String,
    pub profile_exists: bool,
    pub api_url: String,
    #[serde(serialize_with = "mask_token")]
    pub api_token: Option<String>,
    pub page_size: u32,
    pub timeout_secs: Option<u64>,
    pub quick_filter_resets_page: bool,
    pub refetch_on_reset: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        let policy = ControllerPolicy::default();

        AppConfig {
            profile_name: crate::profile::DEFAULT_PROFILE.to_string(),
            profile_path: "./".to_string(),
            profile_exists: false,
            api_url: DEFAULT_API_URL.to_string(),
            api_token: None,
            page_size: DEFAULT_PAGE_SIZE,
            timeout_secs: None,
            quick_filter_resets_page: policy.quick_filter_resets_page,
            refetch_on_reset: policy.refetch_on_reset,
        }
    }
}

impl AppConfig {
    pub fn from_args(
        args: ConfigArgs,
        profile_name: &str,
        profile_path: &Path,
        profile: Option<&Profile>,
    ) -> Self {
        let defaults = AppConfig::default();
        let stored = profile.cloned().unwrap_or_default();

        AppConfig {
            profile_name: profile_name.to_string(),
            profile_path: profile_path
                .to_str()
                .map(|p| p.to_string())
                .unwrap_or(defaults.profile_path),
            profile_exists: profile.is_some(),
            api_url: args.api_url.or(stored.api_url).unwrap_or(defaults.api_url),
            api_token: args.token.or(stored.api_token).filter(|t| !t.trim().is_empty()),
            page_size: args
                .page_size
                .or(stored.page_size)
                .filter(|size| *size > 0)
                .unwrap_or(defaults.page_size),
            timeout_secs: stored.timeout_secs,
            quick_filter_resets_page: stored
                .list
                .quick_filter_resets_page
                .unwrap_or(defaults.quick_filter_resets_page),
            refetch_on_reset: stored
                .list
                .refetch_on_reset
                .unwrap_or(defaults.refetch_on_reset),
        }
    }

    pub fn policy(&self) -> ControllerPolicy {
        ControllerPolicy {
            quick_filter_resets_page: self.quick_filter_resets_page,
            refetch_on_reset: self.refetch_on_reset,
        }
    }
}

fn mask_token<S: Serializer>(token: &Option<String>, serializer: S) -> Result<S::Ok, S::Error> {
    match token {
        Some(_) => serializer.serialize_some("********"),
        None => serializer.serialize_none(),
    }
}

use std::path::Path;

use anyhow::bail;

use crate::{
    app_config::AppConfig,
    args::InitArgs,
    profile::{ListSettings, Profile},
};

/// Writes the active profile from the flags; unspecified keys take the effective values
pub fn init_cmd(config: &AppConfig, args: InitArgs, profile_path: &Path) -> anyhow::Result<()> {
    if config.profile_exists && !args.force {
        bail!(
            "Profile '{}' already exists at {}, use --force to overwrite it",
            config.profile_name,
            profile_path.display()
        );
    }

    let profile = Profile {
        api_url: Some(args.url.unwrap_or_else(|| config.api_url.clone())),
        api_token: args.with_token.or_else(|| config.api_token.clone()),
        page_size: Some(config.page_size),
        timeout_secs: args.timeout.or(config.timeout_secs),
        list: ListSettings {
            quick_filter_resets_page: Some(config.quick_filter_resets_page),
            refetch_on_reset: Some(config.refetch_on_reset),
        },
    };

    profile.save(profile_path)?;
    println!(
        "Profile '{}' written to {}",
        config.profile_name,
        profile_path.display()
    );

    Ok(())
}

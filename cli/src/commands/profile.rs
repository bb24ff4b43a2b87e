use crate::{
    args::ProfileCommand,
    profile::{self, Profile},
};

pub fn profile_cmd(subcommand: ProfileCommand) -> Result<(), anyhow::Error> {
    match subcommand {
        ProfileCommand::Use { name } => {
            profile::set_current_profile_name(&name)?;

            let config_path = profile::get_profile_config_path(&name);
            if !config_path.exists() {
                Profile::default().save(&config_path)?;
                println!("Created new profile: {}", name);
            }

            println!("Switched to profile: {}", name);
        }
        ProfileCommand::List => {
            let profiles = profile::list_profiles()?;
            let current = profile::get_current_profile_name()
                .unwrap_or_else(|_| profile::DEFAULT_PROFILE.to_string());

            println!("Available profiles:");
            for profile_name in profiles {
                let marker = if profile_name == current { "*" } else { " " };
                println!("{} {} ({})", marker, profile_name, api_url_of(&profile_name));
            }
        }
        ProfileCommand::Current => {
            let current = profile::get_current_profile_name()?;
            println!("Current profile: {} ({})", current, api_url_of(&current));
        }
    }

    Ok(())
}

fn api_url_of(profile_name: &str) -> String {
    Profile::from_path(&profile::get_profile_config_path(profile_name))
        .ok()
        .flatten()
        .and_then(|p| p.api_url)
        .unwrap_or_else(|| "not configured".to_string())
}

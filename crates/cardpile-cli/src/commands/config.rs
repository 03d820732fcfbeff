//! `cardpile config`: settings addressed by dot path.
//!
//! `list` prints the same paths `get` and `set` accept, one `key = value`
//! per line.

use cardpile_core::{Config, ConfigError};
use clap::Subcommand;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print one setting
    Get {
        /// Dot path (e.g. "session.duration_secs", "gesture.removal_threshold")
        key: String,
    },
    /// Change one setting and save it
    Set {
        /// Dot path
        key: String,
        /// New value, parsed as the setting's type
        value: String,
    },
    /// Print every setting
    List,
    /// Overwrite the config file with defaults
    Reset,
}

fn lookup(config: &Config, key: &str) -> Result<String, ConfigError> {
    config
        .get(key)
        .filter(|_| config.entries().iter().any(|(k, _)| k == key))
        .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))
}

fn render(config: &Config) -> String {
    config
        .entries()
        .into_iter()
        .map(|(key, value)| format!("{key} = {value}\n"))
        .collect()
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Get { key } => {
            let config = Config::load()?;
            println!("{}", lookup(&config, &key)?);
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load()?;
            config.set(&key, &value)?;
            tracing::debug!(%key, %value, "config updated");
            println!("{key} = {}", lookup(&config, &key)?);
        }
        ConfigAction::List => {
            let config = Config::load()?;
            print!("{}", render(&config));
        }
        ConfigAction::Reset => {
            let config = Config::default();
            config.save()?;
            print!("{}", render(&config));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_only_resolves_leaf_keys() {
        let config = Config::default();
        assert_eq!(lookup(&config, "session.duration_secs").unwrap(), "100");
        assert!(matches!(
            lookup(&config, "session"),
            Err(ConfigError::UnknownKey(k)) if k == "session"
        ));
        assert!(lookup(&config, "nope").is_err());
    }

    #[test]
    fn render_lists_dot_paths() {
        let out = render(&Config::default());
        assert!(out.contains("session.duration_secs = 100\n"));
        assert!(out.contains("gesture.removal_threshold = 100.0\n"));
        assert!(out.contains("storage.cards_key = Cards\n"));
    }
}

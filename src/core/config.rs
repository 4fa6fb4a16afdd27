//! Launch-command configuration for locally installed applications
//!
//! The table is built once at startup and handed to the automation engine;
//! business logic never reads the environment itself.

use std::collections::HashMap;
use std::env;

/// Maps lowercase application aliases to the command that launches them.
///
/// Three well-known applications have dedicated override settings; anything
/// else is launched by its raw name, assumed to be on the OS search path.
#[derive(Debug, Clone)]
pub struct AppPaths {
    commands: HashMap<String, String>,
}

impl AppPaths {
    /// Build a table from explicit launch commands
    pub fn new(
        vscode: impl Into<String>,
        steam: impl Into<String>,
        discord: impl Into<String>,
    ) -> Self {
        let mut commands = HashMap::new();
        commands.insert("vscode".to_string(), vscode.into());
        commands.insert("steam".to_string(), steam.into());
        commands.insert("discord".to_string(), discord.into());
        Self { commands }
    }

    /// Build a table from environment overrides, falling back to bare
    /// command names
    ///
    /// Optional: VSCODE_PATH, STEAM_PATH, DISCORD_PATH
    pub fn from_env() -> Self {
        Self::new(
            env::var("VSCODE_PATH").unwrap_or_else(|_| "code".into()),
            env::var("STEAM_PATH").unwrap_or_else(|_| "steam".into()),
            env::var("DISCORD_PATH").unwrap_or_else(|_| "discord".into()),
        )
    }

    /// Look up the launch command for a lowercase alias
    pub fn resolve(&self, alias: &str) -> Option<&str> {
        self.commands.get(alias).map(String::as_str)
    }
}

impl Default for AppPaths {
    fn default() -> Self {
        Self::new("code", "steam", "discord")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_commands() {
        let paths = AppPaths::default();
        assert_eq!(paths.resolve("vscode"), Some("code"));
        assert_eq!(paths.resolve("steam"), Some("steam"));
        assert_eq!(paths.resolve("discord"), Some("discord"));
    }

    #[test]
    fn test_explicit_overrides() {
        let paths = AppPaths::new("/opt/vscode/bin/code", "steam", "discord");
        assert_eq!(paths.resolve("vscode"), Some("/opt/vscode/bin/code"));
    }

    #[test]
    fn test_unknown_alias() {
        let paths = AppPaths::default();
        assert_eq!(paths.resolve("blender"), None);
    }
}

use crate::config::{Config, ConfigKey};
use crate::display;
use crate::error::Result;
use crate::service::ConfigService;

const UNSET: &str = "(unset)";
const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

/// Set a single config value
pub fn set(service: &ConfigService, key: &str, value: &str) -> Result<()> {
    let key: ConfigKey = key.parse()?;
    service.set(key, value)?;

    println!("✓ Saved config: {} = {}", key, value);
    Ok(())
}

/// Print a single config value
pub fn get(service: &ConfigService, key: &str) -> Result<()> {
    let key: ConfigKey = key.parse()?;

    match service.get(key)? {
        Some(value) => println!("{}", value),
        None => println!("Not set: {}", key),
    }
    Ok(())
}

/// Print every config value
pub fn list(service: &ConfigService) -> Result<()> {
    let config = service.load()?;
    display::print_block(&render_list(&config));
    Ok(())
}

/// Format the `config list` block
pub fn render_list(config: &Config) -> String {
    let show = |key: ConfigKey| match key.get(config) {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => UNSET.to_string(),
    };

    let mut out = String::new();
    out.push_str("\nConfiguration:\n\n");
    out.push_str(RULE);
    out.push_str("\nUser settings:\n");
    out.push_str(&format!("  user.name:    {}\n", show(ConfigKey::UserName)));
    out.push_str(&format!("  user.email:   {}\n", show(ConfigKey::UserEmail)));
    out.push_str(&format!("  user.github:  {}\n", show(ConfigKey::UserGithub)));
    out.push_str("\nDefault settings:\n");
    out.push_str(&format!(
        "  defaults.priority: {}\n",
        show(ConfigKey::DefaultsPriority)
    ));
    out.push_str(&format!(
        "  defaults.sort:     {}\n",
        show(ConfigKey::DefaultsSort)
    ));
    out.push_str(RULE);
    out.push_str("\n\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TaskError;
    use crate::storage::Storage;
    use tempfile::TempDir;

    #[test]
    fn test_render_list_all_unset() {
        let out = render_list(&Config::default());
        assert!(out.contains("  user.name:    (unset)\n"));
        assert!(out.contains("  user.email:   (unset)\n"));
        assert!(out.contains("  user.github:  (unset)\n"));
        assert!(out.contains("  defaults.priority: (unset)\n"));
        assert!(out.contains("  defaults.sort:     (unset)\n"));
    }

    #[test]
    fn test_render_list_with_values() {
        let mut config = Config::default();
        config.user.name = Some("田中太郎".to_string());
        config.user.email = Some(String::new());
        config.defaults.priority = Some("high".to_string());

        let out = render_list(&config);
        assert!(out.contains("  user.name:    田中太郎\n"));
        assert!(out.contains("  user.email:   (unset)\n"));
        assert!(out.contains("  defaults.priority: high\n"));
        assert!(out.starts_with("\nConfiguration:\n\n"));
        assert!(out.ends_with(&format!("{}\n\n", RULE)));
    }

    #[test]
    fn test_set_rejects_unknown_key_before_io() {
        let temp = TempDir::new().unwrap();
        let storage = Storage::new(temp.path().join(".task/config.json"));
        let service = ConfigService::new(storage.clone());

        let err = set(&service, "user.phone", "123").unwrap_err();

        assert!(matches!(err, TaskError::Validation(_)));
        assert!(!storage.exists());
    }

    #[test]
    fn test_get_rejects_unknown_key() {
        let temp = TempDir::new().unwrap();
        let service = ConfigService::new(Storage::new(temp.path().join("config.json")));

        let err = get(&service, "defaults").unwrap_err();
        assert!(err.to_string().contains("Invalid config key: defaults"));
    }
}

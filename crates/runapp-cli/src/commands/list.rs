//! List command: show the registered applications.

use std::path::Path;

use anyhow::Result;
use runapp_core::template::placeholder_names;
use runapp_core::{AppConfig, AppRegistration, SCHEME_PREFIX};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct AppEntry<'a> {
    key: &'a str,
    target: &'a str,
    args: Option<&'a str>,
    placeholders: Vec<&'a str>,
    shadowed: bool,
}

fn entries(config: &AppConfig) -> Vec<AppEntry<'_>> {
    config
        .apps()
        .iter()
        .map(|app: &AppRegistration| AppEntry {
            key: &app.key,
            target: &app.target,
            args: app.args.as_deref(),
            placeholders: app.args.as_deref().map(placeholder_names).unwrap_or_default(),
            shadowed: !std::ptr::eq(config.lookup(&app.key).unwrap_or(app), app),
        })
        .collect()
}

pub fn run(config_path: &Path, json: bool) -> Result<()> {
    let config = AppConfig::load(config_path)?;
    let entries = entries(&config);

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    println!("{} ({} apps)", config_path.display(), entries.len());
    for entry in &entries {
        let mut line = format!("{SCHEME_PREFIX}{}  ->  {}", entry.key, entry.target);
        if let Some(args) = entry.args {
            line.push(' ');
            line.push_str(args);
        }
        if entry.shadowed {
            line.push_str("  (shadowed by an earlier entry)");
        }
        println!("{line}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_mark_shadowed_duplicates() {
        let config = AppConfig::parse(
            r#"
[[AppList]]
key = "edit"
target = "vim"
args = "{file} +{line} {file}"

[[AppList]]
key = "edit"
target = "nano"
"#,
        )
        .unwrap();

        let entries = entries(&config);
        assert_eq!(entries.len(), 2);
        assert!(!entries[0].shadowed);
        assert_eq!(entries[0].placeholders, vec!["file", "line"]);
        assert!(entries[1].shadowed);
        assert!(entries[1].placeholders.is_empty());
    }

    #[test]
    fn test_entries_serialize() {
        let config = AppConfig::parse("[[AppList]]\nkey = \"calc\"\ntarget = \"calc.exe\"\n").unwrap();
        let json = serde_json::to_value(entries(&config)).unwrap();
        assert_eq!(json[0]["key"], "calc");
        assert_eq!(json[0]["args"], serde_json::Value::Null);
    }
}

//! Theme folder access
//!
//! A theme is either a stylesheet file directly in the themes directory or a
//! folder holding one. `cache` is where downloaded imports end up and is not a
//! theme.

use std::path::{Component, Path};

use tokio::fs;

use crate::shared::errors::{SettingsError, SettingsResult};

const IGNORED_ENTRIES: [&str; 2] = ["cache", ".ds_store"];

/// Strip the quotes some hosts leave around theme names.
pub fn clean_theme_name(name: &str) -> String {
    name.replace('"', "")
}

/// Names of the entries in the themes directory, sorted. A missing directory has no themes.
pub async fn list_theme_names(dir: &Path) -> SettingsResult<Vec<String>> {
    let mut entries = match fs::read_dir(dir).await {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => {
            return Err(SettingsError::Host(format!("Error reading theme directory: {}", e)))
        }
    };

    let mut names = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| SettingsError::Host(format!("Error reading theme directory: {}", e)))?
    {
        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            continue;
        };
        if !IGNORED_ENTRIES.contains(&name.to_lowercase().as_str()) {
            names.push(name);
        }
    }

    names.sort();
    Ok(names)
}

/// Contents of a theme: the file itself, or the first `.css` file in a theme folder.
/// A folder without any stylesheet yields an empty theme.
pub async fn read_theme(dir: &Path, name: &str) -> SettingsResult<String> {
    let theme_path = dir.join(checked_name(name)?);

    if !fs::metadata(&theme_path).await.map(|m| m.is_dir()).unwrap_or(false) {
        return fs::read_to_string(&theme_path)
            .await
            .map_err(|e| SettingsError::Theme(format!("Error reading theme file: {}", e)));
    }

    let mut entries = fs::read_dir(&theme_path)
        .await
        .map_err(|e| SettingsError::Theme(format!("Error reading theme directory: {}", e)))?;

    let mut stylesheets = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| SettingsError::Theme(format!("Error reading theme directory: {}", e)))?
    {
        if let Some(file) = entry.file_name().to_str() {
            if file.ends_with(".css") {
                stylesheets.push(file.to_string());
            }
        }
    }
    stylesheets.sort();

    match stylesheets.first() {
        Some(css_file) => fs::read_to_string(theme_path.join(css_file))
            .await
            .map_err(|e| SettingsError::Theme(format!("Error reading CSS file: {}", e))),
        None => Ok(String::new()),
    }
}

/// File name a downloaded theme is stored under: the last path segment of the
/// link, with `.css` appended when missing. `None` when the link ends in `/`.
pub fn theme_file_name(link: &str) -> Option<String> {
    let segment = link
        .split(['?', '#'])
        .next()
        .unwrap_or_default()
        .rsplit('/')
        .next()
        .unwrap_or_default();

    if segment.is_empty() || checked_name(segment).is_err() {
        return None;
    }

    if segment.ends_with(".css") {
        Some(segment.to_string())
    } else {
        Some(format!("{}.css", segment))
    }
}

/// Download a stylesheet into the themes directory. Returns the stored file
/// name, or `None` when the link has nothing to name the theme after.
pub async fn download_theme(
    client: &reqwest::Client,
    dir: &Path,
    link: &str,
) -> SettingsResult<Option<String>> {
    let Some(file_name) = theme_file_name(link) else {
        return Ok(None);
    };

    let theme = client.get(link).send().await?.error_for_status()?.text().await?;

    fs::create_dir_all(dir).await?;
    fs::write(dir.join(&file_name), theme).await?;

    log::info!("Stored theme {} from {}", file_name, link);
    Ok(Some(file_name))
}

fn checked_name(name: &str) -> SettingsResult<&str> {
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) if !name.contains(['/', '\\']) => Ok(name),
        _ => Err(SettingsError::Theme(format!("Invalid theme name: {:?}", name))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_theme_name() {
        assert_eq!(clean_theme_name("\"Midnight\""), "Midnight");
        assert_eq!(clean_theme_name("a\"b\"c"), "abc");
        assert_eq!(clean_theme_name("plain"), "plain");
    }

    #[test]
    fn test_theme_file_name() {
        assert_eq!(theme_file_name("https://x.dev/themes/nord.css").as_deref(), Some("nord.css"));
        assert_eq!(theme_file_name("https://x.dev/themes/nord").as_deref(), Some("nord.css"));
        assert_eq!(theme_file_name("https://x.dev/nord.css?v=2").as_deref(), Some("nord.css"));
        assert_eq!(theme_file_name("https://x.dev/themes/"), None);
        assert_eq!(theme_file_name("https://x.dev/.."), None);
    }

    #[tokio::test]
    async fn test_list_skips_cache_and_ds_store() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("Midnight")).unwrap();
        std::fs::create_dir(dir.path().join("Cache")).unwrap();
        std::fs::write(dir.path().join(".DS_Store"), "").unwrap();
        std::fs::write(dir.path().join("amoled.css"), "body{}").unwrap();

        let names = list_theme_names(dir.path()).await.unwrap();
        assert_eq!(names, vec!["Midnight".to_string(), "amoled.css".to_string()]);
    }

    #[tokio::test]
    async fn test_missing_theme_dir_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let names = list_theme_names(&dir.path().join("nope")).await.unwrap();
        assert!(names.is_empty());
    }

    #[tokio::test]
    async fn test_read_theme_file_and_folder() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("flat.css"), "a{}").unwrap();
        std::fs::create_dir(dir.path().join("folder")).unwrap();
        std::fs::write(dir.path().join("folder").join("readme.md"), "#").unwrap();
        std::fs::write(dir.path().join("folder").join("main.css"), "b{}").unwrap();
        std::fs::create_dir(dir.path().join("empty")).unwrap();

        assert_eq!(read_theme(dir.path(), "flat.css").await.unwrap(), "a{}");
        assert_eq!(read_theme(dir.path(), "folder").await.unwrap(), "b{}");
        assert_eq!(read_theme(dir.path(), "empty").await.unwrap(), "");
    }

    #[tokio::test]
    async fn test_read_theme_rejects_traversal() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["../config.json", "..", "a/b.css", ""] {
            assert!(matches!(read_theme(dir.path(), name).await, Err(SettingsError::Theme(_))), "accepted {:?}", name);
        }
    }
}

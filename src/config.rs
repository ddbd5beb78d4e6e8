use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct BookshelfConfig {
    pub database: Option<String>,
    pub foreign_keys: Option<bool>,
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("bookshelf.toml")
}

pub fn default_database_path() -> PathBuf {
    PathBuf::from("database.db")
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Option<BookshelfConfig>> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let config: BookshelfConfig = toml::from_str(&contents)?;
    Ok(Some(config))
}

pub fn write_config(path: &Path, config: &BookshelfConfig, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!("config already exists at {} (use --force to overwrite)", path.display());
    }

    let contents = toml::to_string_pretty(config)?;
    std::fs::write(path, contents)?;
    Ok(())
}

/// Database path: explicit flag, then config, then the default
pub fn resolve_database_path(flag: Option<&Path>, config: Option<&BookshelfConfig>) -> PathBuf {
    flag.map(Path::to_path_buf)
        .or_else(|| config.and_then(|c| c.database.as_ref()).map(PathBuf::from))
        .unwrap_or_else(default_database_path)
}

pub fn ensure_db_dir(db_path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load_config(Some(&dir.path().join("bookshelf.toml"))).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_write_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bookshelf.toml");
        let config = BookshelfConfig {
            database: Some("data/books.db".to_string()),
            foreign_keys: Some(true),
        };

        write_config(&path, &config, false).unwrap();
        assert!(write_config(&path, &config, false).is_err());
        write_config(&path, &config, true).unwrap();

        assert_eq!(load_config(Some(&path)).unwrap(), Some(config));
    }

    #[test]
    fn test_partial_config() {
        let config: BookshelfConfig = toml::from_str("foreign_keys = false").unwrap();
        assert_eq!(config.database, None);
        assert_eq!(config.foreign_keys, Some(false));
    }

    #[test]
    fn test_database_path_precedence() {
        let config = BookshelfConfig {
            database: Some("from_config.db".to_string()),
            foreign_keys: None,
        };
        let flag = PathBuf::from("from_flag.db");

        assert_eq!(resolve_database_path(Some(&flag), Some(&config)), flag);
        assert_eq!(
            resolve_database_path(None, Some(&config)),
            PathBuf::from("from_config.db")
        );
        assert_eq!(resolve_database_path(None, None), default_database_path());
    }

    #[test]
    fn test_ensure_db_dir() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("nested").join("database.db");
        ensure_db_dir(&db).unwrap();
        assert!(db.parent().unwrap().is_dir());
    }
}

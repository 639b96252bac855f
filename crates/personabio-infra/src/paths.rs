use std::path::PathBuf;

/// Environment variable that overrides the data directory.
pub const DATA_DIR_ENV: &str = "PERSONABIO_HOME";

/// Name of the configuration file inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Resolve the data directory.
///
/// Priority:
/// 1. Explicit override (the `--data-dir` flag, which clap also fills from
///    `PERSONABIO_HOME`)
/// 2. `~/.personabio`
/// 3. `.personabio` in the current directory
pub fn resolve_data_dir(explicit: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = explicit {
        return dir;
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".personabio");
    }

    PathBuf::from(".personabio")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_dir_wins() {
        let dir = resolve_data_dir(Some(PathBuf::from("/tmp/pbio")));
        assert_eq!(dir, PathBuf::from("/tmp/pbio"));
    }

    #[test]
    fn test_default_dir_ends_with_personabio() {
        let dir = resolve_data_dir(None);
        assert!(dir.ends_with(".personabio"));
    }
}

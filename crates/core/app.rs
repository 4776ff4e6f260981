use std::path::PathBuf;

use bookfinder::{Config, ProviderKind};
use eyre::{eyre, Context};
use log::{info, trace};

/// Builds the lookup configuration from an optional file and the command line options.
///
/// Options given on the command line win over the values found in the file.
pub fn resolve_config(
    path: Option<PathBuf>,
    provider: Option<ProviderKind>,
    base_url: Option<String>,
    timeout: Option<u64>,
) -> eyre::Result<Config> {
    let mut config = if let Some(path) = path {
        trace!("'config' option used with value of '{}'", path.display());
        Config::from_path(&path)
            .wrap_err_with(|| eyre!("Invalid configuration in '{}'", path.display()))?
    } else {
        Config::default()
    };

    if let Some(provider) = provider {
        if provider != config.provider && base_url.is_none() && config.base_url.is_some() {
            info!("Provider overridden to {provider} - the base URL from the config file still applies");
        }
        config.provider = provider;
    }

    if base_url.is_some() {
        config.base_url = base_url;
    }

    if timeout.is_some() {
        config.timeout_secs = timeout;
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    use assert_fs::{fixture::FileWriteStr, NamedTempFile};

    fn config_file(content: &str) -> NamedTempFile {
        let file = NamedTempFile::new("bookfinder.toml").expect("Cannot create temp file for test");
        file.write_str(content)
            .expect("Cannot write temp config file for test");
        file
    }

    #[test]
    fn defaults_without_file_or_options() {
        let config = resolve_config(None, None, None, None).unwrap();
        assert_eq!(Config::default(), config);
        assert_eq!("https://openlibrary.org", config.base_url());
    }

    #[test]
    fn command_line_overrides_file() {
        let file = config_file(
            "provider = \"book-info\"\nbase-url = \"http://file.test\"\ntimeout-secs = 3\n",
        );

        let config = resolve_config(
            Some(file.path().to_path_buf()),
            None,
            Some("http://flag.test/".to_owned()),
            Some(10),
        )
        .unwrap();
        file.close().unwrap();

        assert_eq!(ProviderKind::BookInfo, config.provider);
        assert_eq!("http://flag.test", config.base_url());
        assert_eq!(Some(10), config.timeout_secs);
    }

    #[test]
    fn file_values_are_kept_when_no_options() {
        let file = config_file("provider = \"B\"\n");

        let config = resolve_config(Some(file.path().to_path_buf()), None, None, None).unwrap();
        file.close().unwrap();

        assert_eq!(ProviderKind::BookInfo, config.provider);
        assert_eq!("http://localhost:8000", config.base_url());
    }

    #[test]
    #[should_panic(expected = "Invalid configuration in")]
    fn invalid_file_is_reported() {
        let file = config_file("provider = 42\n");
        let path = file.path().to_path_buf();

        resolve_config(Some(path), None, None, None).unwrap();
    }
}

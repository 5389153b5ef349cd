use std::fmt;
use std::path::Path;

use serde::de::DeserializeOwned;

#[derive(Debug)]
pub enum ConfigError {
    Io { path: String, source: std::io::Error },
    Parse { path: String, message: String },
    /// Parsed, but a value is out of range.
    Invalid { field: &'static str, message: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "failed to read {path}: {source}"),
            Self::Parse { path, message } => write!(f, "failed to parse {path}: {message}"),
            Self::Invalid { field, message } => write!(f, "invalid {field}: {message}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { .. } | Self::Invalid { .. } => None,
        }
    }
}

/// Parse a TOML document. `origin` names the source in error messages.
pub fn parse_toml<T: DeserializeOwned>(contents: &str, origin: &str) -> Result<T, ConfigError> {
    toml::from_str(contents).map_err(|e| ConfigError::Parse {
        path: origin.to_string(),
        message: e.to_string(),
    })
}

/// Read and parse a TOML file.
pub fn read_toml<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, ConfigError> {
    let path = path.as_ref();
    let display = path.display().to_string();
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: display.clone(),
        source,
    })?;
    parse_toml(&contents, &display)
}

/// Load config from the file named by `env_var`, else `default_path`, falling
/// back to defaults when the file is missing or unparseable.
pub fn load_or_default<T: DeserializeOwned + Default>(env_var: &str, default_path: &str) -> T {
    let path = std::env::var(env_var).unwrap_or_else(|_| default_path.to_string());
    match read_toml(&path) {
        Ok(cfg) => cfg,
        Err(ConfigError::Io { .. }) => T::default(),
        Err(e) => {
            tracing::warn!("{e}, using defaults");
            T::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Default, Deserialize, PartialEq)]
    #[serde(default)]
    struct Sample {
        rate: u32,
        name: String,
    }

    #[test]
    fn parse_partial_document_uses_defaults() {
        let s: Sample = parse_toml("rate = 30", "inline").unwrap();
        assert_eq!(s.rate, 30);
        assert_eq!(s.name, "");
    }

    #[test]
    fn parse_error_names_origin() {
        let err = parse_toml::<Sample>("rate = \"fast\"", "inline").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().starts_with("failed to parse inline"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = read_toml::<Sample>("/nonexistent/neonarcade/sample.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn load_missing_falls_back_to_default() {
        let s: Sample = load_or_default(
            "NEONARCADE_TEST_UNSET_CONFIG_VAR",
            "/nonexistent/neonarcade/sample.toml",
        );
        assert_eq!(s, Sample::default());
    }
}

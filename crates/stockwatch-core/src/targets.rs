//! The list of pages polled for stock.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Pages polled when no targets file is configured.
const BUILTIN_TARGET_URLS: [&str; 6] = [
    "https://www.evga.com/products/product.aspx?pn=10G-P5-3881-KR",
    "https://www.evga.com/products/product.aspx?pn=10G-P5-3895-KR",
    "https://www.evga.com/products/product.aspx?pn=10G-P5-3897-KR",
    "https://www.evga.com/products/product.aspx?pn=10G-P5-3883-KR",
    "https://www.evga.com/products/product.aspx?pn=10G-P5-3885-KR",
    "https://www.newegg.com/p/pl?d=RTX+3080&N=100007709%20601357282&isdeptsrh=1",
];

/// One product or search-results page to poll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    pub url: String,
    /// Free-form note shown in startup logs; never used for dispatch.
    #[serde(default)]
    pub label: Option<String>,
}

impl Target {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            label: None,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct TargetsFile {
    pub targets: Vec<Target>,
}

/// The built-in target list.
#[must_use]
pub fn default_targets() -> Vec<Target> {
    BUILTIN_TARGET_URLS.iter().map(|u| Target::new(*u)).collect()
}

/// Load and validate a target list from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_targets(path: &Path) -> Result<Vec<Target>, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::TargetsFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let targets_file: TargetsFile =
        serde_yaml::from_str(&content).map_err(ConfigError::TargetsFileParse)?;

    validate_targets(&targets_file.targets)?;

    Ok(targets_file.targets)
}

fn validate_targets(targets: &[Target]) -> Result<(), ConfigError> {
    if targets.is_empty() {
        return Err(ConfigError::Validation(
            "at least one target is required".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for target in targets {
        let parsed = url::Url::parse(&target.url).map_err(|e| {
            ConfigError::Validation(format!("target '{}' is not a valid URL: {e}", target.url))
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::Validation(format!(
                "target '{}' must use http or https",
                target.url
            )));
        }

        if !seen.insert(target.url.as_str()) {
            return Err(ConfigError::Validation(format!(
                "duplicate target: '{}'",
                target.url
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "targets_test.rs"]
mod tests;

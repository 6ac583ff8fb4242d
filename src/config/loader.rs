//! Configuration discovery and loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{WazctlError, WazctlResult};
use crate::infrastructure::fs::wazctl_home_dir;

use super::types::WazctlConfig;

/// Default locations, searched in order. `~/` is the user's home.
pub const CONFIG_LOCATIONS: &[&str] = &[".wazctl.yaml", "~/.wazctl.yaml", "~/.config/wazctl.yaml"];

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// A config file that was found and parsed
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: WazctlConfig,
    pub path: PathBuf,
    pub warnings: Vec<ConfigWarning>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> WazctlResult<(WazctlConfig, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = serde_yaml_ng::Deserializer::from_str(&content);

    let config: WazctlConfig = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| WazctlError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((with_env_overrides(config), warnings))
}

/// Expand the default locations against a working directory and home
pub fn candidate_paths(cwd: &Path, home: Option<&Path>) -> Vec<PathBuf> {
    CONFIG_LOCATIONS
        .iter()
        .filter_map(|loc| match loc.strip_prefix("~/") {
            Some(rest) => home.map(|h| h.join(rest)),
            None => Some(cwd.join(loc)),
        })
        .collect()
}

/// First location holding a parsable config.
///
/// Files that exist but cannot be read or parsed are skipped with a warning
/// so a broken `./.wazctl.yaml` does not hide a good one in `~`.
pub fn discover(cwd: &Path, home: Option<&Path>) -> Option<LoadedConfig> {
    for path in candidate_paths(cwd, home) {
        if !path.exists() {
            continue;
        }

        match load_with_warnings(&path) {
            Ok((config, warnings)) => {
                tracing::debug!(path = %path.display(), "loaded config");
                return Some(LoadedConfig {
                    config,
                    path,
                    warnings,
                });
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "skipping unusable config file");
            }
        }
    }
    None
}

/// Load from the default locations; a config file is required.
pub fn load() -> WazctlResult<LoadedConfig> {
    load_optional()?.ok_or_else(|| WazctlError::ConfigNotFound {
        searched: CONFIG_LOCATIONS.iter().map(|s| s.to_string()).collect(),
    })
}

/// Load from the default locations if any is present.
///
/// Used where built-in defaults are a valid fallback (the local Docker
/// deployment).
pub fn load_optional() -> WazctlResult<Option<LoadedConfig>> {
    let cwd = std::env::current_dir()?;
    let home = wazctl_home_dir();
    load_optional_from(&cwd, home.as_deref())
}

/// Discover a config file and reject values that parse but are unusable.
///
/// Unlike a file that fails to parse, a discovered file with bad values is
/// an error rather than being skipped.
pub fn load_optional_from(
    cwd: &Path,
    home: Option<&Path>,
) -> WazctlResult<Option<LoadedConfig>> {
    let Some(loaded) = discover(cwd, home) else {
        return Ok(None);
    };
    loaded.config.validate(&loaded.path)?;
    Ok(Some(loaded))
}

/// Apply environment variable overrides (WAZCTL_* prefix)
pub fn with_env_overrides(config: WazctlConfig) -> WazctlConfig {
    with_env_overrides_from(config, |key| std::env::var(key).ok())
}

fn with_env_overrides_from(
    mut config: WazctlConfig,
    get_env: impl Fn(&str) -> Option<String>,
) -> WazctlConfig {
    // WAZCTL_REPO_VERSION
    if let Some(version) = get_env("WAZCTL_REPO_VERSION").filter(|v| !v.is_empty()) {
        config.local.repo_version = Some(version);
    }

    // WAZCTL_WAZUH_PASSWORD
    if let Some(password) = get_env("WAZCTL_WAZUH_PASSWORD") {
        config.wazuh.wui_password = password;
    }

    // WAZCTL_INDEXER_PASSWORD
    if let Some(password) = get_env("WAZCTL_INDEXER_PASSWORD") {
        config.indexer.indexer_password = password;
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "wazuh",
        "indexer",
        "local",
        "endpoint",
        "port",
        "protocol",
        "wuiUsername",
        "wuiPassword",
        "indexerUsername",
        "indexerPassword",
        "skipTlsVerify",
        "httpDebug",
        "repoVersion",
        "readinessTimeoutSecs",
        "pollIntervalSecs",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(&unknown.to_lowercase(), &candidate.to_lowercase());
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}

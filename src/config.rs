use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};

use crate::announce::{AnnouncerConfig, ClearPolicy, DEFAULT_CLEAR_DELAY};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigFlags {
    pub show_regions: bool,
    pub clear_delay_ms: Option<u64>,
    pub clear_policy: Option<ClearPolicy>,
    pub virtualize_threshold: Option<usize>,
    pub pull_threshold: Option<u16>,
    pub items: Option<usize>,
    pub debug_log: Option<PathBuf>,
}

impl ConfigFlags {
    pub fn union(&self, other: &Self) -> Self {
        Self {
            show_regions: self.show_regions || other.show_regions,
            clear_delay_ms: other.clear_delay_ms.or(self.clear_delay_ms),
            clear_policy: other.clear_policy.or(self.clear_policy),
            virtualize_threshold: other.virtualize_threshold.or(self.virtualize_threshold),
            pull_threshold: other.pull_threshold.or(self.pull_threshold),
            items: other.items.or(self.items),
            debug_log: other.debug_log.clone().or_else(|| self.debug_log.clone()),
        }
    }

    pub fn announcer_config(&self) -> AnnouncerConfig {
        AnnouncerConfig {
            clear_delay: self
                .clear_delay_ms
                .map_or(DEFAULT_CLEAR_DELAY, Duration::from_millis),
            policy: self.clear_policy.unwrap_or_default(),
        }
    }
}

pub fn global_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("hark").join("config");
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("hark")
                .join("config");
        }
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("hark").join("config");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join(".config").join("hark").join("config");
        }
    }

    PathBuf::from(".harkrc")
}

pub fn local_override_path() -> PathBuf {
    PathBuf::from(".harkrc")
}

pub fn load_config_flags(path: &Path) -> Result<ConfigFlags> {
    if !path.exists() {
        return Ok(ConfigFlags::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let tokens = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .flat_map(|line| line.split_whitespace().map(ToOwned::to_owned))
        .collect::<Vec<_>>();
    let flags = parse_flag_tokens(&tokens);
    tracing::debug!(path = %path.display(), ?flags, "loaded config flags");
    Ok(flags)
}

pub fn save_config_flags(path: &Path, flags: &ConfigFlags) -> Result<()> {
    let mut lines = vec!["# hark defaults (saved with --save)".to_string()];
    if flags.show_regions {
        lines.push("--show-regions".to_string());
    }
    if let Some(ms) = flags.clear_delay_ms {
        lines.push(format!("--clear-delay-ms {ms}"));
    }
    if let Some(policy) = flags.clear_policy {
        lines.push(format!("--clear-policy {}", policy_name(policy)));
    }
    if let Some(threshold) = flags.virtualize_threshold {
        lines.push(format!("--virtualize-threshold {threshold}"));
    }
    if let Some(threshold) = flags.pull_threshold {
        lines.push(format!("--pull-threshold {threshold}"));
    }
    if let Some(items) = flags.items {
        lines.push(format!("--items {items}"));
    }
    if let Some(path) = &flags.debug_log {
        lines.push(format!("--debug-log {}", path.display()));
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
    }
    fs::write(path, format!("{}\n", lines.join("\n")))
        .with_context(|| format!("Failed to write config {}", path.display()))
}

pub fn clear_config_flags(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path).with_context(|| format!("Failed to remove {}", path.display()))?;
    }
    Ok(())
}

/// Pick known flags out of `tokens`, ignoring anything else.
///
/// Options take their value either as the next token or after `=`.
/// Unparsable values leave the option unset.
pub fn parse_flag_tokens(tokens: &[String]) -> ConfigFlags {
    let mut flags = ConfigFlags::default();
    let mut i = 0;
    while i < tokens.len() {
        let token = tokens[i].as_str();
        if token == "--show-regions" {
            flags.show_regions = true;
            i += 1;
            continue;
        }
        let (name, inline) = match token.split_once('=') {
            Some((name, value)) => (name, Some(value)),
            None => (token, None),
        };
        if !is_option(name) {
            i += 1;
            continue;
        }
        let value = match inline {
            Some(value) => Some(value),
            None => {
                i += 1;
                tokens.get(i).map(String::as_str)
            }
        };
        if let Some(value) = value {
            apply_option(&mut flags, name, value);
        }
        i += 1;
    }
    flags
}

fn is_option(name: &str) -> bool {
    matches!(
        name,
        "--clear-delay-ms"
            | "--clear-policy"
            | "--virtualize-threshold"
            | "--pull-threshold"
            | "--items"
            | "--debug-log"
    )
}

fn apply_option(flags: &mut ConfigFlags, name: &str, value: &str) {
    match name {
        "--clear-delay-ms" => flags.clear_delay_ms = value.parse().ok(),
        "--clear-policy" => flags.clear_policy = parse_policy(value),
        "--virtualize-threshold" => flags.virtualize_threshold = value.parse().ok(),
        "--pull-threshold" => flags.pull_threshold = value.parse().ok(),
        "--items" => flags.items = value.parse().ok(),
        "--debug-log" => flags.debug_log = Some(PathBuf::from(value)),
        _ => {}
    }
}

fn parse_policy(s: &str) -> Option<ClearPolicy> {
    match s {
        "coupled" => Some(ClearPolicy::Coupled),
        "per-channel" => Some(ClearPolicy::PerChannel),
        _ => None,
    }
}

const fn policy_name(policy: ClearPolicy) -> &'static str {
    match policy {
        ClearPolicy::Coupled => "coupled",
        ClearPolicy::PerChannel => "per-channel",
    }
}

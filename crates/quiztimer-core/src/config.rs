//! Quiz configuration.
//!
//! Settings come from three layers, highest precedence first: command-line
//! flags, an optional `quiztimer.toml`, and built-in defaults.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Name of the config file searched for in the working directory.
pub const CONFIG_FILE_NAME: &str = "quiztimer.toml";

/// Default session length.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

/// Everything needed to start one quiz session.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizConfig {
    /// CSV file holding the questions.
    pub path: PathBuf,
    /// How long the user has to answer every question.
    pub timeout: Duration,
    /// Fixed shuffle seed; `None` gives a different order every run.
    pub seed: Option<u64>,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            path: default_quiz_path(),
            timeout: DEFAULT_TIMEOUT,
            seed: None,
        }
    }
}

impl QuizConfig {
    /// Apply command-line overrides on top of this config.
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(path) = overrides.path {
            self.path = path;
        }
        if let Some(timeout) = overrides.timeout {
            self.timeout = timeout;
        }
        if overrides.seed.is_some() {
            self.seed = overrides.seed;
        }
        self
    }
}

/// Values given explicitly on the command line.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub path: Option<PathBuf>,
    pub timeout: Option<Duration>,
    pub seed: Option<u64>,
}

/// `resources/problems.csv` under the current working directory.
pub fn default_quiz_path() -> PathBuf {
    let relative = Path::new("resources").join("problems.csv");
    match std::env::current_dir() {
        Ok(cwd) => cwd.join(relative),
        Err(_) => relative,
    }
}

/// On-disk layout of `quiztimer.toml`.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    path: Option<PathBuf>,
    #[serde(default)]
    timeout: Option<TimeoutValue>,
    #[serde(default)]
    seed: Option<u64>,
}

/// `timeout = 30` (seconds) or `timeout = "1m30s"`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TimeoutValue {
    Seconds(u64),
    Text(String),
}

/// Load config from an explicit path, or fall back to the default location.
///
/// An explicit path must exist. A relative `path` inside the file is taken
/// relative to the directory holding the config file.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from(CONFIG_FILE_NAME);
        local.exists().then_some(local)
    };

    let Some(config_path) = config_path else {
        return Ok(QuizConfig::default());
    };

    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("failed to read config: {}", config_path.display()))?;
    let file: ConfigFile = toml::from_str(&content)
        .with_context(|| format!("failed to parse config: {}", config_path.display()))?;
    tracing::debug!("loaded config from {}", config_path.display());

    let mut config = QuizConfig::default();
    if let Some(quiz_path) = file.path {
        config.path = if quiz_path.is_relative() {
            config_path
                .parent()
                .map(|dir| dir.join(&quiz_path))
                .unwrap_or(quiz_path)
        } else {
            quiz_path
        };
    }
    if let Some(timeout) = file.timeout {
        config.timeout = match timeout {
            TimeoutValue::Seconds(secs) => Duration::from_secs(secs),
            TimeoutValue::Text(text) => parse_duration(&text)
                .map_err(|e| anyhow::anyhow!("{e}"))
                .with_context(|| format!("invalid timeout in {}", config_path.display()))?,
        };
    }
    config.seed = file.seed;

    Ok(config)
}

/// Parse a duration such as `20s`, `1m30s`, `1.5s` or `250ms`.
///
/// Units are `ns`, `us` (or `µs`), `ms`, `s`, `m` and `h`. A bare integer
/// is read as seconds.
pub fn parse_duration(input: &str) -> Result<Duration, String> {
    let s = input.trim();
    if s.is_empty() {
        return Err("empty duration".to_string());
    }
    if let Ok(secs) = s.parse::<u64>() {
        return Ok(Duration::from_secs(secs));
    }

    let mut total_nanos: u128 = 0;
    let mut rest = s;
    while !rest.is_empty() {
        let number_len = rest
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(rest.len());
        if number_len == 0 {
            return Err(format!("invalid duration '{input}': expected a number"));
        }
        let (number, tail) = rest.split_at(number_len);

        let unit_len = tail
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(tail.len());
        let (unit, tail) = tail.split_at(unit_len);

        let unit_nanos: u64 = match unit {
            "ns" => 1,
            "us" | "µs" => 1_000,
            "ms" => 1_000_000,
            "s" => 1_000_000_000,
            "m" => 60 * 1_000_000_000,
            "h" => 3_600 * 1_000_000_000,
            "" => return Err(format!("invalid duration '{input}': missing unit")),
            other => return Err(format!("invalid duration '{input}': unknown unit '{other}'")),
        };

        let nanos = term_nanos(number, unit_nanos)
            .ok_or_else(|| format!("invalid duration '{input}': bad number '{number}'"))?;
        total_nanos = total_nanos
            .checked_add(nanos)
            .ok_or_else(|| format!("invalid duration '{input}': too large"))?;
        rest = tail;
    }

    let secs = u64::try_from(total_nanos / 1_000_000_000)
        .map_err(|_| format!("invalid duration '{input}': too large"))?;
    Ok(Duration::new(secs, (total_nanos % 1_000_000_000) as u32))
}

/// Nanoseconds for `<number><unit>`, where `number` may have a fraction.
fn term_nanos(number: &str, unit_nanos: u64) -> Option<u128> {
    let (whole, fraction) = match number.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (number, ""),
    };
    if whole.is_empty() && fraction.is_empty() {
        return None;
    }
    if fraction.contains('.') {
        return None;
    }

    let whole: u128 = if whole.is_empty() {
        0
    } else {
        whole.parse().ok()?
    };
    let mut nanos = whole.checked_mul(unit_nanos as u128)?;
    if !fraction.is_empty() {
        let fraction: f64 = format!("0.{fraction}").parse().ok()?;
        nanos = nanos.checked_add((fraction * unit_nanos as f64).round() as u128)?;
    }
    Some(nanos)
}

use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::Path;

use env_logger::{Builder, Target, WriteStyle};
use log::{info, warn, LevelFilter};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Errors while setting up logging
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Failed to read logging config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse logging config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Unknown logging target: {0}")]
    UnknownTarget(String),

    #[error("Failed to initialize logger: {0}")]
    Init(#[from] log::SetLoggerError),
}

/// Named groups of modules whose level can be set together
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum LoggingSubsystem {
    /// Entry points and tools
    Main,
    /// Subsonic connection and response handling
    Subsonic,
    /// Menu router and hosts
    Plugin,
    /// HTTP transport
    Http,
    /// Settings loading
    Config,
    /// Third-party crates
    #[strum(to_string = "deps", serialize = "dependencies")]
    #[serde(alias = "dependencies")]
    Deps,
}

impl LoggingSubsystem {
    /// Module prefixes covered by this subsystem
    pub fn module_prefixes(&self) -> &'static [&'static str] {
        match self {
            LoggingSubsystem::Main => &["subsonic_plugin", "subsonic_client"],
            LoggingSubsystem::Subsonic => &["subsonic_plugin::subsonic"],
            LoggingSubsystem::Plugin => &["subsonic_plugin::plugin", "subsonic_plugin::data"],
            LoggingSubsystem::Http => &["subsonic_plugin::helpers::http_client", "ureq", "rustls"],
            LoggingSubsystem::Config => &["subsonic_plugin::config"],
            LoggingSubsystem::Deps => &["ureq", "rustls", "serde"],
        }
    }
}

/// Logging configuration, loaded from JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Global log level (off, error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// "stderr" or "stdout". Listings go to stdout, so stderr is the default.
    #[serde(default = "default_target")]
    pub target: String,

    #[serde(default = "default_timestamps")]
    pub timestamps: bool,

    #[serde(default)]
    pub colors: bool,

    /// Level per subsystem name or raw module path; keys starting with '_'
    /// are comments
    #[serde(default, deserialize_with = "deserialize_subsystems")]
    pub subsystems: HashMap<String, String>,

    #[serde(default)]
    pub include_module_path: bool,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_target() -> String {
    "stderr".to_string()
}

fn default_timestamps() -> bool {
    true
}

fn deserialize_subsystems<'de, D>(deserializer: D) -> Result<HashMap<String, String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = HashMap::<String, String>::deserialize(deserializer)?;
    Ok(raw.into_iter().filter(|(key, _)| !key.starts_with('_')).collect())
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: default_log_level(),
            target: default_target(),
            timestamps: default_timestamps(),
            colors: false,
            subsystems: HashMap::new(),
            include_module_path: false,
        }
    }
}

const VERBOSITY: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => {
            eprintln!("Warning: Unknown log level '{}', defaulting to 'info'", level);
            LevelFilter::Info
        }
    }
}

fn level_name(level: &str) -> String {
    parse_log_level(level).to_string().to_lowercase()
}

fn verbosity(level: &str) -> usize {
    let level = level.to_lowercase();
    VERBOSITY.iter().position(|l| *l == level).unwrap_or(0)
}

impl LoggingConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, LoggingError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| LoggingError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> Result<Self, LoggingError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Module filters from the subsystem table, sorted so that more
    /// specific paths come last. When a module appears more than once the
    /// most verbose level wins.
    fn module_filters(&self) -> Vec<(String, String)> {
        let mut resolved: HashMap<String, String> = HashMap::new();

        for (name, level) in &self.subsystems {
            let prefixes: Vec<String> = match name.parse::<LoggingSubsystem>() {
                Ok(subsystem) => subsystem.module_prefixes().iter().map(|p| p.to_string()).collect(),
                Err(_) => vec![name.clone()],
            };

            for prefix in prefixes {
                let level = level.to_lowercase();
                match resolved.get(&prefix) {
                    Some(existing) if verbosity(existing) >= verbosity(&level) => {
                        if *existing != level {
                            warn!("Conflicting log levels for '{}', keeping '{}'", prefix, existing);
                        }
                    }
                    _ => {
                        resolved.insert(prefix, level);
                    }
                }
            }
        }

        let mut filters: Vec<_> = resolved.into_iter().collect();
        filters.sort_by(|(a, _), (b, _)| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
        filters
    }

    /// Filter in env_logger syntax, e.g. "warn,subsonic_plugin::subsonic=debug"
    pub fn build_filter_string(&self) -> String {
        let mut parts = vec![level_name(&self.level)];
        for (path, level) in self.module_filters() {
            parts.push(format!("{}={}", path, level_name(&level)));
        }
        parts.join(",")
    }

    /// The configured filter followed by the `RUST_LOG` directives, which
    /// replace configured directives for the same module
    pub fn effective_filter(&self, rust_log: Option<&str>) -> String {
        let mut spec = self.build_filter_string();
        if let Some(env) = rust_log.map(str::trim).filter(|env| !env.is_empty()) {
            spec.push(',');
            spec.push_str(env);
        }
        spec
    }

    /// Install the global logger
    pub fn initialize_logger(&self) -> Result<(), LoggingError> {
        let rust_log = std::env::var("RUST_LOG").ok();
        let filter = self.effective_filter(rust_log.as_deref());

        let mut builder = Builder::new();
        builder.parse_filters(&filter);

        builder.write_style(if self.colors { WriteStyle::Auto } else { WriteStyle::Never });

        match self.target.to_lowercase().as_str() {
            "stderr" => builder.target(Target::Stderr),
            "stdout" => builder.target(Target::Stdout),
            _ => return Err(LoggingError::UnknownTarget(self.target.clone())),
        };

        let timestamps = self.timestamps;
        let include_module_path = self.include_module_path;
        builder.format(move |buf, record| {
            if timestamps {
                write!(buf, "[{}] ", chrono::Local::now().format("%Y-%m-%d %H:%M:%S"))?;
            }
            write!(buf, "[{}] ", record.level())?;
            if include_module_path {
                if let Some(module) = record.module_path() {
                    write!(buf, "[{}] ", module)?;
                }
            }
            writeln!(buf, "{}", record.args())
        });

        builder.try_init()?;
        info!("Logging initialized with filter: {}", filter);
        Ok(())
    }
}

/// Set up logging from an optional config file; `debug` raises the global
/// level to debug
pub fn initialize_logging_with_args(config_file: Option<&Path>, debug: bool) -> Result<(), LoggingError> {
    let mut config = match config_file {
        Some(path) => LoggingConfig::from_file(path)?,
        None => LoggingConfig::default(),
    };

    if debug {
        config.level = "debug".to_string();
    }

    config.initialize_logger()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = LoggingConfig::from_json("{}").unwrap();
        assert_eq!(config.level, "warn");
        assert_eq!(config.target, "stderr");
        assert!(config.timestamps);
        assert!(!config.colors);
        assert_eq!(config.build_filter_string(), "warn");
    }

    #[test]
    fn test_subsystem_names() {
        assert_eq!("subsonic".parse::<LoggingSubsystem>().unwrap(), LoggingSubsystem::Subsonic);
        assert_eq!("HTTP".parse::<LoggingSubsystem>().unwrap(), LoggingSubsystem::Http);
        assert_eq!("dependencies".parse::<LoggingSubsystem>().unwrap(), LoggingSubsystem::Deps);
        assert!("nonsense".parse::<LoggingSubsystem>().is_err());
    }

    #[test]
    fn test_filter_string() {
        let config = LoggingConfig::from_json(
            r#"{
                "level": "info",
                "subsystems": {
                    "_comment": "ignored",
                    "subsonic": "debug",
                    "my_crate::module": "trace"
                }
            }"#,
        )
        .unwrap();

        assert!(!config.subsystems.contains_key("_comment"));
        assert_eq!(
            config.build_filter_string(),
            "info,my_crate::module=trace,subsonic_plugin::subsonic=debug"
        );
    }

    fn max_level(spec: &str) -> LevelFilter {
        env_filter::Builder::new().parse(spec).build().filter()
    }

    #[test]
    fn test_rust_log_takes_precedence() {
        let mut config = LoggingConfig::default();
        config.subsystems.insert("subsonic".to_string(), "info".to_string());

        assert_eq!(config.effective_filter(None), "warn,subsonic_plugin::subsonic=info");
        assert_eq!(config.effective_filter(Some("  ")), "warn,subsonic_plugin::subsonic=info");
        assert_eq!(max_level(&config.effective_filter(None)), LevelFilter::Info);

        let spec = config.effective_filter(Some("trace"));
        assert_eq!(spec, "warn,subsonic_plugin::subsonic=info,trace");
        assert_eq!(max_level(&spec), LevelFilter::Trace);

        let spec = config.effective_filter(Some("subsonic_plugin::subsonic=error"));
        assert_eq!(max_level(&spec), LevelFilter::Warn);
    }

    #[test]
    fn test_unknown_level_falls_back_to_info() {
        let config = LoggingConfig {
            level: "loud".to_string(),
            ..Default::default()
        };
        assert_eq!(config.build_filter_string(), "info");
    }

    #[test]
    fn test_conflicts_keep_most_verbose() {
        let mut config = LoggingConfig::default();
        config.subsystems.insert("http".to_string(), "trace".to_string());
        config.subsystems.insert("deps".to_string(), "error".to_string());

        let filters = config.module_filters();
        let ureq = filters.iter().find(|(path, _)| path == "ureq").unwrap();
        assert_eq!(ureq.1, "trace");
        let serde = filters.iter().find(|(path, _)| path == "serde").unwrap();
        assert_eq!(serde.1, "error");
    }

    #[test]
    fn test_from_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("logging.json");
        fs::write(&path, r#"{"level": "debug", "target": "stdout"}"#).unwrap();

        let config = LoggingConfig::from_file(&path).unwrap();
        assert_eq!(config.level, "debug");
        assert_eq!(config.target, "stdout");

        let missing = LoggingConfig::from_file(tmp.path().join("missing.json"));
        assert!(matches!(missing, Err(LoggingError::Io { .. })));
    }

    #[test]
    fn test_unknown_target() {
        let config = LoggingConfig {
            target: "file".to_string(),
            ..Default::default()
        };
        assert!(matches!(config.initialize_logger(), Err(LoggingError::UnknownTarget(_))));
    }
}

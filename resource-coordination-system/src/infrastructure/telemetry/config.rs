use serde::*;
use tracing::metadata::LevelFilter;
use tracing_appender::rolling::Rotation;
use tracing_subscriber::{filter::Directive, EnvFilter};

/// Logging set-up: a global filter plus one filter per output.
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct TelemetryConfig {
    #[serde(default = "default_enabled")]
    pub enable: bool,
    #[serde(flatten)]
    pub filter: FilterConfig,
    #[serde(default)]
    pub console: ConsoleConfig,
    #[serde(default)]
    pub file: FileConfig,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            enable: default_enabled(),
            filter: Default::default(),
            console: Default::default(),
            file: Default::default(),
        }
    }
}

#[derive(Default, Deserialize, Serialize, Clone, Debug)]
pub struct FilterConfig {
    #[serde(default)]
    pub max_level: LoggingLevel,
    /// Extra directives in `EnvFilter` syntax, e.g. `sqlx=warn,actix_web=info`.
    #[serde(default)]
    pub level_filter: String,
    /// Name of an environment variable holding more directives.
    #[serde(default)]
    pub level_filter_env: String,
}

impl FilterConfig {
    pub fn env_filter(&self) -> EnvFilter {
        let mut builder = EnvFilter::builder();
        if !self.level_filter_env.is_empty() {
            builder = builder.with_env_var(self.level_filter_env.as_str());
        }
        builder
            .with_default_directive(self.max_level.clone().into())
            .parse_lossy(self.level_filter.as_str())
    }
}

#[derive(Default, Deserialize, Serialize, Clone, Debug)]
#[serde(rename_all = "snake_case")]
pub enum LoggingLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
    Off,
}

impl From<LoggingLevel> for LevelFilter {
    fn from(val: LoggingLevel) -> Self {
        match val {
            LoggingLevel::Error => LevelFilter::ERROR,
            LoggingLevel::Warn => LevelFilter::WARN,
            LoggingLevel::Info => LevelFilter::INFO,
            LoggingLevel::Debug => LevelFilter::DEBUG,
            LoggingLevel::Trace => LevelFilter::TRACE,
            LoggingLevel::Off => LevelFilter::OFF,
        }
    }
}

impl From<LoggingLevel> for Directive {
    fn from(val: LoggingLevel) -> Self {
        let level: LevelFilter = val.into();
        level.into()
    }
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct ConsoleConfig {
    #[serde(default = "default_enabled")]
    pub enable: bool,
    /// Print source file, line, thread id and target with every event.
    #[serde(default)]
    pub enable_debug_logging: bool,
    #[serde(flatten)]
    pub filter: FilterConfig,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            enable: default_enabled(),
            enable_debug_logging: false,
            filter: Default::default(),
        }
    }
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct FileConfig {
    #[serde(default)]
    pub enable: bool,
    #[serde(default)]
    pub enable_debug_logging: bool,
    #[serde(flatten)]
    pub filter: FilterConfig,
    #[serde(default = "default_path")]
    pub path: String,
    /// File name, or the prefix of rolled files.
    #[serde(default = "default_prefix")]
    pub prefix: String,
    #[serde(default)]
    pub rolling_time: RotationLevel,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            enable: false,
            enable_debug_logging: false,
            filter: Default::default(),
            path: default_path(),
            prefix: default_prefix(),
            rolling_time: Default::default(),
        }
    }
}

#[derive(Default, Deserialize, Serialize, Clone, Debug)]
#[serde(rename_all = "snake_case")]
pub enum RotationLevel {
    Daily,
    Hourly,
    Minutely,
    #[default]
    Never,
}

impl From<RotationLevel> for Rotation {
    fn from(val: RotationLevel) -> Self {
        match val {
            RotationLevel::Daily => Rotation::DAILY,
            RotationLevel::Hourly => Rotation::HOURLY,
            RotationLevel::Minutely => Rotation::MINUTELY,
            RotationLevel::Never => Rotation::NEVER,
        }
    }
}

fn default_enabled() -> bool {
    true
}

fn default_path() -> String {
    "./logs".to_string()
}

fn default_prefix() -> String {
    "coordination.log".to_string()
}

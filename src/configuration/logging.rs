use std::str::FromStr;

/// Verbosity of the root logger.
///
/// Accepts `DEBUG`, `INFO`, `WARNING`, `ERROR`, `CRITICAL`, `NOTSET` and the aliases `WARN`,
/// `FATAL`, in any case. `TRACE` is accepted too.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warning,
    Error,
    Critical,
    NotSet,
}

impl LogLevel {
    /// The equivalent `tracing` filter directive.
    pub fn as_directive(&self) -> &'static str {
        match self {
            Self::Trace | Self::NotSet => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warning => "warn",
            // tracing has no level above error
            Self::Error | Self::Critical => "error",
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "TRACE" => Ok(Self::Trace),
            "DEBUG" => Ok(Self::Debug),
            "INFO" => Ok(Self::Info),
            "WARNING" | "WARN" => Ok(Self::Warning),
            "ERROR" => Ok(Self::Error),
            "CRITICAL" | "FATAL" => Ok(Self::Critical),
            "NOTSET" => Ok(Self::NotSet),
            other => Err(format!("{} is not a known log level", other)),
        }
    }
}

#[derive(Clone, Debug)]
pub struct LoggingSettings {
    pub level: LogLevel,
}

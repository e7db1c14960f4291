#[derive(thiserror::Error)]
pub enum SettingsError {
    #[error("Failed to read settings from the environment.")]
    Load(#[from] config::ConfigError),
    #[error("Failed to determine the base directory.")]
    BaseDirectory(#[source] std::io::Error),
    #[error("The {0} environment variable must be set.")]
    MissingVariable(&'static str),
    #[error("The {name} environment variable has an invalid value {value:?}: {reason}")]
    InvalidVariable {
        name: &'static str,
        value: String,
        reason: String,
    },
}

impl SettingsError {
    pub(crate) fn invalid(name: &'static str, value: &str, reason: impl ToString) -> Self {
        Self::InvalidVariable {
            name,
            value: value.to_owned(),
            reason: reason.to_string(),
        }
    }
}

impl std::fmt::Debug for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

/// Iterates over a chain of errors via the `source` method and prints the error with its cause
fn error_chain_fmt(
    error: &impl std::error::Error,
    formatter: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(formatter, "{}\n", error)?;
    let mut current = error.source();
    while let Some(cause) = current {
        writeln!(formatter, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}

use secrecy::Secret;

use super::parsing::require;
use super::SettingsError;

#[derive(Clone, Debug)]
pub enum EmailBackend {
    Console,
    Smtp(SmtpSettings),
}

#[derive(Clone, Debug)]
pub struct SmtpSettings {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: Secret<String>,
}

#[derive(Debug, Default)]
pub(crate) struct EmailVariables {
    pub email_host: Option<String>,
    pub email_port: Option<String>,
    pub email_host_user: Option<String>,
    pub email_host_password: Option<Secret<String>>,
}

impl EmailBackend {
    /// Picks the console transport in debug mode; otherwise SMTP, for which all four
    /// `EMAIL_*` variables are mandatory.
    pub(crate) fn resolve(debug: bool, variables: EmailVariables) -> Result<Self, SettingsError> {
        if debug {
            return Ok(Self::Console);
        }
        let host = require("EMAIL_HOST", variables.email_host)?;
        let port = require("EMAIL_PORT", variables.email_port)?;
        let port = port
            .trim()
            .parse::<u16>()
            .map_err(|e| SettingsError::invalid("EMAIL_PORT", &port, e))?;
        let username = require("EMAIL_HOST_USER", variables.email_host_user)?;
        let password = require("EMAIL_HOST_PASSWORD", variables.email_host_password)?;
        Ok(Self::Smtp(SmtpSettings {
            host,
            port,
            username,
            password,
        }))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Console => "console",
            Self::Smtp(_) => "smtp",
        }
    }
}

use std::path::{Path, PathBuf};

use secrecy::{ExposeSecret, Secret};
use serde_aux::field_attributes::deserialize_number_from_string;

use crate::subscriptions;

mod api;
mod auth;
mod database;
mod email;
mod error;
mod logging;
mod parsing;
mod registry;

pub use api::{ApiDocsSettings, ApiSettings, AuthenticationScheme, PaginationStyle, SchemaGenerator};
pub use auth::{AccountSettings, JwtSettings};
pub use database::DatabaseSettings;
pub use email::{EmailBackend, SmtpSettings};
pub use error::SettingsError;
pub use logging::{LogLevel, LoggingSettings};
pub use registry::{
    InstalledApp, Middleware, PasswordValidator, INSTALLED_APPS, MIDDLEWARE, PASSWORD_VALIDATORS,
};

use email::EmailVariables;
use parsing::{parse_flag, require, split_list};

#[derive(Clone, Debug)]
pub struct Settings {
    pub secret_key: Secret<String>,
    pub debug: bool,
    pub allowed_hosts: Vec<String>,
    pub application: ApplicationSettings,
    pub database: DatabaseSettings,
    pub internationalization: InternationalizationSettings,
    pub static_files: StaticFilesSettings,
    pub api: ApiSettings,
    pub api_docs: ApiDocsSettings,
    pub jwt: JwtSettings,
    pub site: SiteSettings,
    pub accounts: AccountSettings,
    pub cors: CorsSettings,
    pub stripe: StripeSettings,
    pub email: EmailBackend,
    pub logging: LoggingSettings,
    pub installed_apps: &'static [InstalledApp],
    pub middleware: &'static [Middleware],
    pub password_validators: &'static [PasswordValidator],
    pub premium_endpoints: &'static [&'static str],
}

#[derive(Clone, Debug)]
pub struct ApplicationSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Clone, Debug)]
pub struct InternationalizationSettings {
    pub language_code: &'static str,
    pub time_zone: String,
    pub use_i18n: bool,
    pub use_tz: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StaticFilesStorage {
    CompressedManifest,
}

#[derive(Clone, Debug)]
pub struct StaticFilesSettings {
    pub url: &'static str,
    pub root: PathBuf,
    pub storage: StaticFilesStorage,
}

#[derive(Clone, Debug)]
pub struct SiteSettings {
    pub domain: String,
    pub name: String,
    pub frontend_url: String,
}

#[derive(Clone, Debug)]
pub struct CorsSettings {
    pub allowed_origins: Vec<String>,
}

#[derive(Clone, Debug)]
pub struct StripeSettings {
    pub api_key: Secret<String>,
    pub webhook_secret: Secret<String>,
    pub public_key: String,
}

impl StripeSettings {
    pub fn is_configured(&self) -> bool {
        !self.api_key.expose_secret().is_empty()
    }
}

pub const RECOGNISED_VARIABLES: &[&str] = &[
    "SECRET_KEY",
    "DEBUG",
    "ALLOWED_HOSTS",
    "APP_HOST",
    "APP_PORT",
    "DB_ENGINE",
    "DB_NAME",
    "DB_USER",
    "DB_PASSWORD",
    "DB_HOST",
    "DB_PORT",
    "TIME_ZONE",
    "PAGINATION_PAGE_SIZE",
    "ACCESS_TOKEN_LIFETIME_MINUTES",
    "REFRESH_TOKEN_LIFETIME_DAYS",
    "DOMAIN",
    "SITE_NAME",
    "CORS_ALLOWED_ORIGINS",
    "STRIPE_API_KEY",
    "STRIPE_WEBHOOK_SECRET",
    "STRIPE_PUBLIC_KEY",
    "FRONTEND_URL",
    "EMAIL_HOST",
    "EMAIL_PORT",
    "EMAIL_HOST_USER",
    "EMAIL_HOST_PASSWORD",
    "LOG_LEVEL",
];

fn recognised(name: &str) -> Option<&'static str> {
    RECOGNISED_VARIABLES.iter().copied().find(|known| *known == name)
}

/// Reads the settings from the process environment, resolving paths against the current
/// directory.
pub fn get_configuration() -> Result<Settings, SettingsError> {
    let base_dir = std::env::current_dir().map_err(SettingsError::BaseDirectory)?;
    let mut variables = Vec::new();
    // `vars()` panics on the first non UTF-8 entry, even one we never read
    for (name, value) in std::env::vars_os() {
        let name = match name.to_str().and_then(recognised) {
            Some(name) => name,
            None => continue,
        };
        let value = value.into_string().map_err(|value| {
            SettingsError::invalid(name, &value.to_string_lossy(), "not valid UTF-8")
        })?;
        variables.push((name.to_owned(), value));
    }
    Settings::from_variables(variables, &base_dir)
}

impl Settings {
    pub fn from_variables<I>(variables: I, base_dir: &Path) -> Result<Self, SettingsError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        // names are case-sensitive, but `config` lowercases them: only the exact names may reach it
        let variables: config::Map<String, String> = variables
            .into_iter()
            .filter(|(name, _)| recognised(name).is_some())
            .collect();
        let raw = config::Config::builder()
            .set_default("allowed_hosts", "localhost,127.0.0.1")?
            .set_default("app_host", "127.0.0.1")?
            .set_default("app_port", 8000)?
            .set_default("db_engine", "django.db.backends.postgresql")?
            .set_default("db_name", "postgres")?
            .set_default("db_user", "postgres")?
            .set_default("db_password", "postgres")?
            .set_default("db_host", "localhost")?
            .set_default("db_port", 5432)?
            .set_default("time_zone", "UTC")?
            .set_default("pagination_page_size", 30)?
            .set_default("access_token_lifetime_minutes", 30)?
            .set_default("refresh_token_lifetime_days", 15)?
            .set_default("domain", "localhost:3000")?
            .set_default("site_name", "Example Project name")?
            .set_default("cors_allowed_origins", "http://localhost:3000,http://127.0.0.1:3000")?
            .set_default("stripe_api_key", "")?
            .set_default("stripe_webhook_secret", "")?
            .set_default("stripe_public_key", "")?
            .set_default("frontend_url", "http://localhost:3000")?
            .set_default("log_level", "INFO")?
            // `DB_PORT` becomes `db_port`
            .add_source(config::Environment::default().source(Some(variables)))
            .build()?
            .try_deserialize::<RawVariables>()?;
        raw.into_settings(base_dir)
    }
}

#[derive(serde::Deserialize)]
struct RawVariables {
    secret_key: Option<Secret<String>>,
    debug: Option<String>,
    allowed_hosts: String,
    app_host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    app_port: u16,
    db_engine: String,
    db_name: String,
    db_user: String,
    db_password: Secret<String>,
    db_host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    db_port: u16,
    time_zone: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pagination_page_size: u32,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    access_token_lifetime_minutes: u32,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    refresh_token_lifetime_days: u32,
    domain: String,
    site_name: String,
    cors_allowed_origins: String,
    stripe_api_key: Secret<String>,
    stripe_webhook_secret: Secret<String>,
    stripe_public_key: String,
    frontend_url: String,
    email_host: Option<String>,
    email_port: Option<String>,
    email_host_user: Option<String>,
    email_host_password: Option<Secret<String>>,
    log_level: String,
}

impl RawVariables {
    fn into_settings(self, base_dir: &Path) -> Result<Settings, SettingsError> {
        let secret_key = require("SECRET_KEY", self.secret_key)?;
        let debug = match self.debug {
            Some(value) => parse_flag("DEBUG", &value)?,
            None => false,
        };
        let level = self
            .log_level
            .parse::<LogLevel>()
            .map_err(|e| SettingsError::invalid("LOG_LEVEL", &self.log_level, e))?;
        let email = EmailBackend::resolve(
            debug,
            EmailVariables {
                email_host: self.email_host,
                email_port: self.email_port,
                email_host_user: self.email_host_user,
                email_host_password: self.email_host_password,
            },
        )?;

        Ok(Settings {
            secret_key,
            debug,
            allowed_hosts: split_list(&self.allowed_hosts),
            application: ApplicationSettings {
                host: self.app_host,
                port: self.app_port,
            },
            database: DatabaseSettings {
                engine: self.db_engine,
                name: self.db_name,
                username: self.db_user,
                password: self.db_password,
                host: self.db_host,
                port: self.db_port,
            },
            internationalization: InternationalizationSettings {
                language_code: "en-us",
                time_zone: self.time_zone,
                use_i18n: true,
                use_tz: true,
            },
            static_files: StaticFilesSettings {
                url: "static/",
                root: base_dir.join("staticfiles"),
                storage: StaticFilesStorage::CompressedManifest,
            },
            api: ApiSettings::new(self.pagination_page_size),
            api_docs: ApiDocsSettings::default(),
            jwt: JwtSettings::new(
                self.access_token_lifetime_minutes,
                self.refresh_token_lifetime_days,
            ),
            site: SiteSettings {
                domain: self.domain,
                name: self.site_name,
                frontend_url: self.frontend_url,
            },
            accounts: AccountSettings::default(),
            cors: CorsSettings {
                allowed_origins: split_list(&self.cors_allowed_origins),
            },
            stripe: StripeSettings {
                api_key: self.stripe_api_key,
                webhook_secret: self.stripe_webhook_secret,
                public_key: self.stripe_public_key,
            },
            email,
            logging: LoggingSettings { level },
            installed_apps: INSTALLED_APPS,
            middleware: MIDDLEWARE,
            password_validators: PASSWORD_VALIDATORS,
            premium_endpoints: subscriptions::config::PREMIUM_ENDPOINTS,
        })
    }
}

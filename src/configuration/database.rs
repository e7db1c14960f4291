use secrecy::{ExposeSecret, Secret};
use sqlx::postgres::{PgConnectOptions, PgSslMode};

#[derive(Clone, Debug)]
pub struct DatabaseSettings {
    pub engine: String,
    pub name: String,
    pub username: String,
    pub password: Secret<String>,
    pub host: String,
    pub port: u16,
}

impl DatabaseSettings {
    /// Connection options for the server itself, without selecting a database.
    pub fn without_db(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .username(&self.username)
            .password(self.password.expose_secret())
            .port(self.port)
            .ssl_mode(PgSslMode::Prefer)
    }

    pub fn with_db(&self) -> PgConnectOptions {
        self.without_db().database(&self.name)
    }
}

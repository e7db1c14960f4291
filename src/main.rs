use anyhow::Context;
use secrecy::ExposeSecret;

use signals_api::configuration::get_configuration;
use signals_api::startup::Application;
use signals_api::telemetry::{init_subscriber, subscriber_for_level};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // settings come first: the log level is one of them
    let settings = get_configuration().context("Failed to read configuration.")?;
    let subscriber = subscriber_for_level("signals-api", settings.logging.level, std::io::stdout);
    init_subscriber(subscriber);

    tracing::info!(
        debug = settings.debug,
        email_backend = settings.email.name(),
        allowed_hosts = ?settings.allowed_hosts,
        premium_endpoints = settings.premium_endpoints.len(),
        "Settings loaded"
    );
    if !settings.stripe.is_configured() {
        tracing::warn!("STRIPE_API_KEY is empty, payments are disabled");
    }
    if settings.stripe.webhook_secret.expose_secret().is_empty() {
        tracing::warn!("STRIPE_WEBHOOK_SECRET is empty, payment webhooks cannot be verified");
    }

    let application = Application::build(settings).context("Failed to start the server.")?;
    tracing::info!(port = application.port(), "Listening");
    application.run_until_stopped().await?;
    Ok(())
}

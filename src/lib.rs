pub mod account_email;
pub mod configuration;
pub mod routes;
pub mod startup;
pub mod subscriptions;
pub mod telemetry;

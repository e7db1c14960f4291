mod configuration;
mod health_check;

use claims::{assert_err, assert_matches, assert_ok};
use fake::{Fake, Faker};
use secrecy::ExposeSecret;
use signals_api::configuration::{
    EmailBackend, LogLevel, Middleware, Settings, SettingsError, INSTALLED_APPS,
};
use signals_api::subscriptions::config::PREMIUM_ENDPOINTS;

use crate::helpers::{settings_with, variables, BASE_DIR};

fn smtp_variables(debug: Option<&str>) -> Vec<(String, String)> {
    let mut pairs = vec![
        ("SECRET_KEY", "production-secret"),
        ("EMAIL_HOST", "smtp.example.com"),
        ("EMAIL_PORT", "465"),
        ("EMAIL_HOST_USER", "mailer@example.com"),
        ("EMAIL_HOST_PASSWORD", "correct horse"),
    ];
    if let Some(debug) = debug {
        pairs.push(("DEBUG", debug));
    }
    variables(&pairs)
}

fn from(pairs: Vec<(String, String)>) -> Result<Settings, SettingsError> {
    Settings::from_variables(pairs, std::path::Path::new(BASE_DIR))
}

#[test]
fn missing_secret_key_is_fatal() {
    let error = assert_err!(from(variables(&[("DEBUG", "true")])));
    assert_matches!(error, SettingsError::MissingVariable("SECRET_KEY"));
}

#[test]
fn secret_key_is_taken_verbatim() {
    let secret: String = Faker.fake();
    let settings = assert_ok!(settings_with(&[("SECRET_KEY", &secret)]));
    assert_eq!(settings.secret_key.expose_secret(), &secret);
}

#[test]
fn production_mode_uses_smtp_with_exactly_the_given_values() {
    for debug in [None, Some("false"), Some("False"), Some("0"), Some("")] {
        let settings = assert_ok!(from(smtp_variables(debug)));

        assert!(!settings.debug, "DEBUG={:?} should be off", debug);
        match settings.email {
            EmailBackend::Smtp(smtp) => {
                assert_eq!(smtp.host, "smtp.example.com");
                assert_eq!(smtp.port, 465);
                assert_eq!(smtp.username, "mailer@example.com");
                assert_eq!(smtp.password.expose_secret(), "correct horse");
            }
            EmailBackend::Console => panic!("DEBUG={:?} should select SMTP", debug),
        }
    }
}

#[test]
fn debug_mode_uses_the_console_regardless_of_email_variables() {
    for debug in ["true", "1", "yes"] {
        let settings = assert_ok!(from(smtp_variables(Some(debug))));
        assert!(settings.debug);
        assert_matches!(settings.email, EmailBackend::Console);
    }
}

#[test]
fn production_mode_without_email_port_is_fatal() {
    let pairs = smtp_variables(None)
        .into_iter()
        .filter(|(name, _)| name != "EMAIL_PORT")
        .collect();
    let error = assert_err!(from(pairs));
    assert_matches!(error, SettingsError::MissingVariable("EMAIL_PORT"));
}

#[test]
fn unrecognised_debug_value_is_fatal() {
    let error = assert_err!(settings_with(&[("DEBUG", "sometimes")]));
    assert_matches!(error, SettingsError::InvalidVariable { name: "DEBUG", .. });
}

#[test]
fn host_and_origin_lists_split_on_commas_in_order() {
    let settings = assert_ok!(settings_with(&[
        ("ALLOWED_HOSTS", "api.example.com,example.com,localhost"),
        ("CORS_ALLOWED_ORIGINS", "https://app.example.com"),
    ]));

    assert_eq!(
        settings.allowed_hosts,
        vec!["api.example.com", "example.com", "localhost"]
    );
    assert_eq!(settings.cors.allowed_origins, vec!["https://app.example.com"]);
}

#[test]
fn host_and_origin_lists_have_local_defaults() {
    let settings = assert_ok!(settings_with(&[]));

    assert_eq!(settings.allowed_hosts, vec!["localhost", "127.0.0.1"]);
    assert_eq!(
        settings.cors.allowed_origins,
        vec!["http://localhost:3000", "http://127.0.0.1:3000"]
    );
}

#[test]
fn numeric_variables_default_when_unset() {
    let settings = assert_ok!(settings_with(&[]));

    assert_eq!(settings.api.page_size, 30);
    assert_eq!(settings.jwt.access_token_lifetime, chrono::Duration::minutes(30));
    assert_eq!(settings.jwt.refresh_token_lifetime, chrono::Duration::days(15));
    assert_eq!(settings.database.port, 5432);
}

#[test]
fn numeric_variables_use_the_provided_value() {
    let settings = assert_ok!(settings_with(&[
        ("PAGINATION_PAGE_SIZE", "50"),
        ("ACCESS_TOKEN_LIFETIME_MINUTES", "5"),
        ("REFRESH_TOKEN_LIFETIME_DAYS", "1"),
        ("DB_PORT", "6543"),
    ]));

    assert_eq!(settings.api.page_size, 50);
    assert_eq!(settings.jwt.access_token_lifetime, chrono::Duration::minutes(5));
    assert_eq!(settings.jwt.refresh_token_lifetime, chrono::Duration::days(1));
    assert_eq!(settings.database.port, 6543);
}

#[test]
fn non_numeric_values_are_fatal() {
    let cases = [
        "PAGINATION_PAGE_SIZE",
        "ACCESS_TOKEN_LIFETIME_MINUTES",
        "REFRESH_TOKEN_LIFETIME_DAYS",
        "DB_PORT",
        "APP_PORT",
    ];
    for name in cases {
        let result = settings_with(&[(name, "thirty")]);
        assert_err!(&result, "{} accepted a non-numeric value", name);
        assert_matches!(result, Err(SettingsError::Load(_)));
    }
}

#[test]
fn database_settings_come_from_db_variables() {
    let settings = assert_ok!(settings_with(&[
        ("DB_ENGINE", "django.db.backends.postgresql"),
        ("DB_NAME", "signals"),
        ("DB_USER", "signals_app"),
        ("DB_PASSWORD", "s3cret"),
        ("DB_HOST", "db.internal"),
    ]));

    assert_eq!(settings.database.engine, "django.db.backends.postgresql");
    assert_eq!(settings.database.name, "signals");
    assert_eq!(settings.database.username, "signals_app");
    assert_eq!(settings.database.password.expose_secret(), "s3cret");
    assert_eq!(settings.database.host, "db.internal");
}

#[test]
fn secrets_are_redacted_in_debug_output() {
    let settings = assert_ok!(settings_with(&[
        ("SECRET_KEY", "do-not-print-me"),
        ("STRIPE_API_KEY", "sk_live_do_not_print"),
    ]));

    let output = format!("{:?}", settings);

    assert!(!output.contains("do-not-print-me"));
    assert!(!output.contains("sk_live_do_not_print"));
}

#[test]
fn stripe_credentials_default_to_empty() {
    let settings = assert_ok!(settings_with(&[]));

    assert!(!settings.stripe.is_configured());
    assert_eq!(settings.stripe.webhook_secret.expose_secret(), "");
    assert_eq!(settings.stripe.public_key, "");
    assert_eq!(settings.site.frontend_url, "http://localhost:3000");
}

#[test]
fn stripe_credentials_are_read_when_present() {
    let settings = assert_ok!(settings_with(&[
        ("STRIPE_API_KEY", "sk_test_123"),
        ("STRIPE_WEBHOOK_SECRET", "whsec_456"),
        ("STRIPE_PUBLIC_KEY", "pk_test_789"),
    ]));

    assert!(settings.stripe.is_configured());
    assert_eq!(settings.stripe.webhook_secret.expose_secret(), "whsec_456");
    assert_eq!(settings.stripe.public_key, "pk_test_789");
}

#[test]
fn log_level_defaults_to_info_and_rejects_unknown_names() {
    let settings = assert_ok!(settings_with(&[]));
    assert_eq!(settings.logging.level, LogLevel::Info);

    let settings = assert_ok!(settings_with(&[("LOG_LEVEL", "warning")]));
    assert_eq!(settings.logging.level, LogLevel::Warning);

    let error = assert_err!(settings_with(&[("LOG_LEVEL", "LOUD")]));
    assert_matches!(error, SettingsError::InvalidVariable { name: "LOG_LEVEL", .. });
}

#[test]
fn site_and_time_zone_defaults() {
    let settings = assert_ok!(settings_with(&[]));

    assert_eq!(settings.site.domain, "localhost:3000");
    assert_eq!(settings.site.name, "Example Project name");
    assert_eq!(settings.internationalization.time_zone, "UTC");
    assert_eq!(settings.internationalization.language_code, "en-us");
    assert_eq!(
        settings.static_files.root,
        std::path::Path::new(BASE_DIR).join("staticfiles")
    );
}

#[test]
fn premium_endpoints_are_passed_through_unchanged() {
    let settings = assert_ok!(settings_with(&[]));

    assert_eq!(settings.premium_endpoints, PREMIUM_ENDPOINTS);
    assert!(std::ptr::eq(settings.premium_endpoints, PREMIUM_ENDPOINTS));
}

#[test]
fn registries_are_in_startup_order() {
    let settings = assert_ok!(settings_with(&[]));

    assert_eq!(settings.installed_apps, INSTALLED_APPS);
    assert_eq!(
        &settings.middleware[settings.middleware.len() - 2..],
        &[Middleware::PremiumAccess, Middleware::StaticFiles]
    );
    assert_eq!(settings.password_validators.len(), 4);
}

#[test]
fn variable_names_are_case_sensitive() {
    // repeated because the lowercase entry used to win or lose depending on hash order
    for _ in 0..50 {
        let settings = assert_ok!(from(variables(&[
            ("SECRET_KEY", "upper-secret"),
            ("secret_key", "lower-secret"),
            ("DEBUG", "true"),
            ("debug", "nonsense"),
        ])));

        assert!(settings.debug);
        assert_eq!(settings.secret_key.expose_secret(), "upper-secret");
    }
}

#[test]
fn lowercase_secret_key_does_not_count() {
    let error = assert_err!(from(variables(&[
        ("secret_key", "lower-secret"),
        ("DEBUG", "true"),
    ])));
    assert_matches!(error, SettingsError::MissingVariable("SECRET_KEY"));
}

#[test]
fn api_docs_keep_the_template_metadata() {
    let settings = assert_ok!(settings_with(&[]));

    assert_eq!(settings.api_docs.title, "Django API Template");
    assert_eq!(settings.api_docs.description, "Django API Template");
    assert_eq!(settings.api_docs.version, "1.0.0");
    assert!(!settings.api_docs.serve_include_schema);
}

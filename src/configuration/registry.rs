// Order matters in all three lists.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InstalledApp {
    Admin,
    Auth,
    ContentTypes,
    Sessions,
    Messages,
    StaticFiles,
    Users,
    Signals,
    Pairs,
    Subscriptions,
    ChartAnalysis,
    RestFramework,
    AuthToken,
    ApiDocs,
    Accounts,
}

impl InstalledApp {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Auth => "auth",
            Self::ContentTypes => "contenttypes",
            Self::Sessions => "sessions",
            Self::Messages => "messages",
            Self::StaticFiles => "staticfiles",
            Self::Users => "users",
            Self::Signals => "signals",
            Self::Pairs => "pairs",
            Self::Subscriptions => "subscriptions",
            Self::ChartAnalysis => "chart_analysis",
            Self::RestFramework => "rest_framework",
            Self::AuthToken => "authtoken",
            Self::ApiDocs => "api_docs",
            Self::Accounts => "accounts",
        }
    }
}

pub const INSTALLED_APPS: &[InstalledApp] = &[
    InstalledApp::Admin,
    InstalledApp::Auth,
    InstalledApp::ContentTypes,
    InstalledApp::Sessions,
    InstalledApp::Messages,
    InstalledApp::StaticFiles,
    InstalledApp::Users,
    InstalledApp::Signals,
    InstalledApp::Pairs,
    InstalledApp::Subscriptions,
    InstalledApp::ChartAnalysis,
    InstalledApp::RestFramework,
    InstalledApp::AuthToken,
    InstalledApp::ApiDocs,
    InstalledApp::Accounts,
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Middleware {
    Security,
    Session,
    Common,
    Csrf,
    Authentication,
    Message,
    ClickjackingProtection,
    PremiumAccess,
    StaticFiles,
}

impl Middleware {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Security => "security",
            Self::Session => "session",
            Self::Common => "common",
            Self::Csrf => "csrf",
            Self::Authentication => "authentication",
            Self::Message => "message",
            Self::ClickjackingProtection => "clickjacking_protection",
            Self::PremiumAccess => "premium_access",
            Self::StaticFiles => "static_files",
        }
    }
}

pub const MIDDLEWARE: &[Middleware] = &[
    Middleware::Security,
    Middleware::Session,
    Middleware::Common,
    Middleware::Csrf,
    Middleware::Authentication,
    Middleware::Message,
    Middleware::ClickjackingProtection,
    Middleware::PremiumAccess,
    // static file serving is appended after the custom middleware
    Middleware::StaticFiles,
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PasswordValidator {
    UserAttributeSimilarity,
    MinimumLength,
    CommonPassword,
    Numeric,
}

pub const PASSWORD_VALIDATORS: &[PasswordValidator] = &[
    PasswordValidator::UserAttributeSimilarity,
    PasswordValidator::MinimumLength,
    PasswordValidator::CommonPassword,
    PasswordValidator::Numeric,
];

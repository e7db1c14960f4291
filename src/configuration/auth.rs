use chrono::Duration;

use super::SiteSettings;

#[derive(Clone, Debug)]
pub struct JwtSettings {
    /// Accepted prefixes of the `Authorization` header, e.g. `Authorization: JWT <token>`.
    pub auth_header_types: &'static [&'static str],
    pub access_token_lifetime: Duration,
    pub refresh_token_lifetime: Duration,
}

impl JwtSettings {
    pub(crate) fn new(access_token_lifetime_minutes: u32, refresh_token_lifetime_days: u32) -> Self {
        Self {
            auth_header_types: &["JWT"],
            access_token_lifetime: Duration::minutes(access_token_lifetime_minutes.into()),
            refresh_token_lifetime: Duration::days(refresh_token_lifetime_days.into()),
        }
    }
}

#[derive(Clone, Debug)]
pub struct AccountSettings {
    pub send_activation_email: bool,
    /// `{uid}` and `{token}` are substituted.
    pub activation_url: &'static str,
    pub password_reset_confirm_url: &'static str,
    pub password_reset_confirm_retype: bool,
    pub set_password_retype: bool,
    pub user_create_password_retype: bool,
    pub password_reset_show_email_not_found: bool,
}

impl Default for AccountSettings {
    fn default() -> Self {
        Self {
            send_activation_email: true,
            activation_url: "/validate-email/{uid}/{token}/",
            password_reset_confirm_url: "password-reset/confirm/{uid}/{token}/",
            password_reset_confirm_retype: true,
            set_password_retype: true,
            user_create_password_retype: true,
            password_reset_show_email_not_found: true,
        }
    }
}

impl AccountSettings {
    pub fn activation_link(&self, site: &SiteSettings, secure: bool, uid: &str, token: &str) -> String {
        render_link(self.activation_url, site, secure, uid, token)
    }

    pub fn password_reset_link(
        &self,
        site: &SiteSettings,
        secure: bool,
        uid: &str,
        token: &str,
    ) -> String {
        render_link(self.password_reset_confirm_url, site, secure, uid, token)
    }
}

fn render_link(template: &str, site: &SiteSettings, secure: bool, uid: &str, token: &str) -> String {
    let protocol = if secure { "https" } else { "http" };
    let path = template
        .trim_start_matches('/')
        .replace("{uid}", uid)
        .replace("{token}", token);
    format!("{}://{}/{}", protocol, site.domain, path)
}

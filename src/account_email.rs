use std::io::Write;

use crate::configuration::Settings;

#[derive(Debug)]
pub struct AccountEmail {
    pub recipient: String,
    pub subject: String,
    pub text_body: String,
}

impl AccountEmail {
    /// The email asking a new user to activate their account, or `None` when activation emails
    /// are turned off.
    pub fn activation(
        settings: &Settings,
        recipient: &str,
        uid: &str,
        token: &str,
        secure: bool,
    ) -> Option<Self> {
        if !settings.accounts.send_activation_email {
            return None;
        }
        let site_name = &settings.site.name;
        let link = settings
            .accounts
            .activation_link(&settings.site, secure, uid, token);
        Some(Self {
            recipient: recipient.to_owned(),
            subject: format!("Account activation on {}", site_name),
            text_body: format!(
                "You're receiving this email because you need to finish the activation process on {site_name}.\n\n\
                Please go to the following page to activate your account:\n{link}\n\n\
                Thanks for using our site!\n\nThe {site_name} team",
            ),
        })
    }

    pub fn password_reset(
        settings: &Settings,
        recipient: &str,
        uid: &str,
        token: &str,
        secure: bool,
    ) -> Self {
        let site_name = &settings.site.name;
        let link = settings
            .accounts
            .password_reset_link(&settings.site, secure, uid, token);
        Self {
            recipient: recipient.to_owned(),
            subject: format!("Password reset on {}", site_name),
            text_body: format!(
                "You're receiving this email because you requested a password reset for your user account at {site_name}.\n\n\
                Please go to the following page and choose a new password:\n{link}\n\n\
                Thanks for using our site!\n\nThe {site_name} team",
            ),
        }
    }

    /// Plain-text rendering: headers, a blank line, the body, then a separator.
    pub fn write_to(&self, sender: &str, writer: &mut impl Write) -> std::io::Result<()> {
        writeln!(writer, "Subject: {}", self.subject)?;
        writeln!(writer, "From: {}", sender)?;
        writeln!(writer, "To: {}", self.recipient)?;
        writeln!(writer)?;
        writeln!(writer, "{}", self.text_body)?;
        writeln!(writer, "{}", "-".repeat(79))
    }
}

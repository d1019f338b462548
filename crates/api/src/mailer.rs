//! Outbound email for password resets and email verification.
//!
//! SMTP is optional: when `SMTP_HOST` is unset the mailer runs in disabled
//! mode and logs the links it would have sent, which keeps local development
//! working without a mail relay.

use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::error::AppError;

/// SMTP and link-building configuration.
#[derive(Debug, Clone)]
pub struct MailerConfig {
    /// SMTP relay host. `None` disables sending entirely.
    pub smtp_host: Option<String>,
    /// SMTP port (default: 587, STARTTLS).
    pub smtp_port: u16,
    /// SMTP credentials, both required when the host is set.
    pub smtp_username: Option<String>,
    pub smtp_password: Option<String>,
    /// Sender display name.
    pub from_name: String,
    /// Sender address.
    pub from_email: String,
    /// Public site base URL used to build reset/verification links.
    pub public_base_url: String,
}

impl MailerConfig {
    /// Load mailer configuration from environment variables.
    ///
    /// | Env Var           | Required | Default                 |
    /// |-------------------|----------|-------------------------|
    /// | `SMTP_HOST`       | no       | -- (mailer disabled)    |
    /// | `SMTP_PORT`       | no       | `587`                   |
    /// | `SMTP_USERNAME`   | no       | --                      |
    /// | `SMTP_PASSWORD`   | no       | --                      |
    /// | `MAIL_FROM_NAME`  | no       | `Taramind`              |
    /// | `MAIL_FROM_EMAIL` | no       | `noreply@localhost`     |
    /// | `PUBLIC_BASE_URL` | no       | `http://localhost:3000` |
    pub fn from_env() -> Self {
        let smtp_port: u16 = std::env::var("SMTP_PORT")
            .unwrap_or_else(|_| "587".into())
            .parse()
            .expect("SMTP_PORT must be a valid u16");

        Self {
            smtp_host: std::env::var("SMTP_HOST").ok(),
            smtp_port,
            smtp_username: std::env::var("SMTP_USERNAME").ok(),
            smtp_password: std::env::var("SMTP_PASSWORD").ok(),
            from_name: std::env::var("MAIL_FROM_NAME").unwrap_or_else(|_| "Taramind".into()),
            from_email: std::env::var("MAIL_FROM_EMAIL")
                .unwrap_or_else(|_| "noreply@localhost".into()),
            public_base_url: std::env::var("PUBLIC_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:3000".into())
                .trim_end_matches('/')
                .to_string(),
        }
    }
}

/// Sends transactional email, or logs the links when SMTP is not configured.
pub struct Mailer {
    transport: Option<AsyncSmtpTransport<Tokio1Executor>>,
    config: MailerConfig,
}

impl Mailer {
    /// Build the mailer from its configuration.
    ///
    /// Returns a disabled mailer when no `SMTP_HOST` is configured.
    pub fn new(config: MailerConfig) -> Result<Self, AppError> {
        let transport = match &config.smtp_host {
            Some(host) => {
                let mut builder = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(host)
                    .map_err(|e| AppError::InternalError(format!("SMTP transport: {e}")))?
                    .port(config.smtp_port);
                if let (Some(user), Some(pass)) = (&config.smtp_username, &config.smtp_password) {
                    builder = builder.credentials(Credentials::new(user.clone(), pass.clone()));
                }
                Some(builder.build())
            }
            None => {
                tracing::info!("SMTP_HOST not set; mailer disabled, links will be logged");
                None
            }
        };

        Ok(Self { transport, config })
    }

    /// Email a password-reset link containing the one-time token.
    pub async fn send_password_reset(&self, to_email: &str, token: &str) -> Result<(), AppError> {
        let link = format!(
            "{}/auth/callback?type=password_reset&token={token}",
            self.config.public_base_url
        );
        let body = format!(
            "<p>A password reset was requested for your account.</p>\
             <p><a href=\"{link}\">Reset your password</a></p>\
             <p>If you did not request this, you can ignore this email.</p>"
        );
        self.send(to_email, "Reset your password", &body, &link)
            .await
    }

    /// Email an address-verification link containing the one-time token.
    pub async fn send_email_verification(
        &self,
        to_email: &str,
        token: &str,
    ) -> Result<(), AppError> {
        let link = format!(
            "{}/auth/callback?type=email_verify&token={token}",
            self.config.public_base_url
        );
        let body = format!(
            "<p>Welcome! Please confirm your email address.</p>\
             <p><a href=\"{link}\">Verify your email</a></p>"
        );
        self.send(to_email, "Verify your email", &body, &link).await
    }

    async fn send(
        &self,
        to_email: &str,
        subject: &str,
        html_body: &str,
        link: &str,
    ) -> Result<(), AppError> {
        let Some(transport) = &self.transport else {
            tracing::info!(to = %to_email, subject, link, "mailer disabled; logging link instead");
            return Ok(());
        };

        let from: Mailbox = format!("{} <{}>", self.config.from_name, self.config.from_email)
            .parse()
            .map_err(|e| AppError::InternalError(format!("parse from address: {e}")))?;
        let to: Mailbox = to_email
            .parse()
            .map_err(|e| AppError::InternalError(format!("parse to address: {e}")))?;

        let message = Message::builder()
            .from(from)
            .to(to)
            .subject(subject)
            .header(ContentType::TEXT_HTML)
            .body(html_body.to_string())
            .map_err(|e| AppError::InternalError(format!("build email: {e}")))?;

        transport
            .send(message)
            .await
            .map_err(|e| AppError::InternalError(format!("send email: {e}")))?;

        tracing::debug!(to = %to_email, subject, "email sent");
        Ok(())
    }
}

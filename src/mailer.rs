use async_trait::async_trait;

use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::config::Config;

#[derive(Debug, thiserror::Error)]
pub enum MailError {
    #[error("Invalid email address format: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("Failed to build email message: {0}")]
    MessageBuild(#[from] lettre::error::Error),

    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),

    #[error("Failed to connect to SMTP relay: {0}")]
    Relay(lettre::transport::smtp::Error),
}

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), MailError>;
}

pub struct SmtpMailer {
    sender: String,
    smtp_host: String,
    smtp_port: u16,
    smtp_pass: String,
}

impl SmtpMailer {
    pub fn new(config: &Config) -> Self {
        SmtpMailer {
            sender: config.sender.clone(),
            smtp_host: config.smtp_host.clone(),
            smtp_port: config.smtp_port,
            smtp_pass: config.smtp_pass.clone(),
        }
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), MailError> {
        let email = Message::builder()
            .from(self.sender.parse()?)
            .to(to.parse()?)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body.to_string())?;

        let creds = Credentials::new(self.sender.clone(), self.smtp_pass.clone());

        // One authenticated STARTTLS session per message, dropped after the send.
        let mailer = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.smtp_host)
            .map_err(MailError::Relay)?
            .port(self.smtp_port)
            .credentials(creds)
            .build();

        tracing::info!("Sending email to '{}' with subject '{}'", to, subject);

        mailer.send(email).await?;

        tracing::info!("Message to {} sent successfully", to);

        Ok(())
    }
}

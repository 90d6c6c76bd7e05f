//! SMTP dispatch.
//!
//! `use_ssl` selects an implicit-TLS connection; otherwise the connection is
//! opened in plaintext and upgraded with STARTTLS before authentication. In
//! dry-run or skip-send mode no connection is opened at all; the intended
//! recipient and attachment name are reported on stdout instead.

use lettre::transport::smtp::authentication::Credentials;
use lettre::{SmtpTransport, Transport};

use crate::config::SmtpSettings;

use super::{MailError, OutgoingMail};

pub struct MailDispatcher {
    settings: SmtpSettings,
}

impl MailDispatcher {
    pub fn new(settings: SmtpSettings) -> Self {
        Self { settings }
    }

    /// Whether dispatch is simulated instead of hitting the network.
    pub fn is_simulated(&self) -> bool {
        self.settings.dry_run || self.settings.skip_send
    }

    /// Send the message, or report it when dry-run / skip-send is active.
    pub fn dispatch(&self, mail: OutgoingMail) -> Result<(), MailError> {
        if self.is_simulated() {
            println!(
                "[skipped] Would send to {}: {}",
                mail.to,
                mail.attachment_name()
            );
            return Ok(());
        }

        let to = mail.to.clone();
        let attachment_name = mail.attachment_name();
        let message = mail.into_message()?;
        let transport = self.transport()?;
        transport.send(&message).map_err(MailError::Transport)?;

        println!("Sent to {to}: {attachment_name}");
        Ok(())
    }

    fn transport(&self) -> Result<SmtpTransport, MailError> {
        let builder = if self.settings.use_ssl {
            SmtpTransport::relay(&self.settings.host)
        } else {
            SmtpTransport::starttls_relay(&self.settings.host)
        }
        .map_err(MailError::Transport)?;

        let credentials = Credentials::new(
            self.settings.user.clone(),
            self.settings.password.clone(),
        );
        Ok(builder
            .credentials(credentials)
            .port(self.settings.port)
            .build())
    }
}

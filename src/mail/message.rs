//! Per-record message assembly.

use std::fs;
use std::path::PathBuf;

use lettre::message::header::ContentType;
use lettre::message::{Attachment, Body, Mailbox, MultiPart, SinglePart};
use lettre::Message;

use super::MailError;

/// A single-recipient message with one binary attachment, assembled per
/// record before dispatch. The attachment is read from disk at send time.
#[derive(Debug, Clone)]
pub struct OutgoingMail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub body: String,
    pub attachment: PathBuf,
}

impl OutgoingMail {
    pub fn attachment_name(&self) -> String {
        self.attachment
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("attachment.pdf")
            .to_string()
    }

    /// Assemble the wire message: plain-text body plus the attachment as an
    /// `application/pdf` part.
    pub fn into_message(self) -> Result<Message, MailError> {
        let from: Mailbox = self
            .from
            .parse()
            .map_err(|_| MailError::InvalidAddress(self.from.clone()))?;
        let to: Mailbox = self
            .to
            .parse()
            .map_err(|_| MailError::InvalidAddress(self.to.clone()))?;

        let data = fs::read(&self.attachment).map_err(|source| MailError::AttachmentIo {
            path: self.attachment.display().to_string(),
            source,
        })?;
        let pdf_type = ContentType::parse("application/pdf").expect("static media type");
        let attachment = Attachment::new(self.attachment_name()).body(Body::new(data), pdf_type);

        Message::builder()
            .from(from)
            .to(to)
            .subject(self.subject)
            .multipart(
                MultiPart::mixed()
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_PLAIN)
                            .body(self.body),
                    )
                    .singlepart(attachment),
            )
            .map_err(MailError::Message)
    }
}

/// Plain-text body greeting the recipient by name.
pub fn greeting_body(name: &str) -> String {
    format!("Dear {name},\n\nPlease find the attached document.\n\nBest regards.\n")
}

//! Outgoing mail: per-record message assembly and SMTP dispatch.

pub mod dispatcher;
pub mod message;

pub use dispatcher::MailDispatcher;
pub use message::{greeting_body, OutgoingMail};

use thiserror::Error;

/// Errors that can occur while building or sending a message.
#[derive(Debug, Error)]
pub enum MailError {
    #[error("record has no email address")]
    MissingRecipient,
    #[error("invalid mail address '{0}'")]
    InvalidAddress(String),
    #[error("failed to read attachment {path}: {source}")]
    AttachmentIo {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to assemble message: {0}")]
    Message(#[source] lettre::error::Error),
    #[error("SMTP transport error: {0}")]
    Transport(#[source] lettre::transport::smtp::Error),
}

//! Email composer form state.
//!
//! State is owned by a single composer view and reset whenever that view is
//! remounted. Recipients are free text and are not validated as addresses.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::mail::{DeliveryError, DeliveryReceipt, MailDelivery, MailDraft};

/// Errors from the Send action.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SendError {
    #[error(transparent)]
    Delivery(#[from] DeliveryError),
}

impl SendError {
    /// Whether the failure is the missing-backend case rather than a
    /// provider fault.
    pub fn is_not_implemented(&self) -> bool {
        matches!(self, SendError::Delivery(DeliveryError::NotImplemented))
    }
}

/// Form edits and actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComposerEvent {
    RecipientsChanged(Vec<String>),
    SubjectChanged(String),
    BodyChanged(String),
    Discard,
    /// A draft was accepted by the delivery backend.
    Sent,
}

/// Recipients, subject and body of the message being drafted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComposerState {
    pub recipients: Vec<String>,
    pub subject: String,
    pub body: String,
}

impl ComposerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the recipient list wholesale.
    pub fn on_recipients_changed(&mut self, recipients: Vec<String>) {
        debug!(count = recipients.len(), "recipients changed");
        self.recipients = recipients;
    }

    pub fn set_subject(&mut self, subject: impl Into<String>) {
        self.subject = subject.into();
    }

    pub fn set_body(&mut self, body: impl Into<String>) {
        self.body = body.into();
    }

    /// Reset to the empty form. No confirmation step.
    pub fn discard(&mut self) {
        debug!("composer discarded");
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Apply a single event.
    pub fn apply(&mut self, event: ComposerEvent) {
        match event {
            ComposerEvent::RecipientsChanged(recipients) => self.on_recipients_changed(recipients),
            ComposerEvent::SubjectChanged(subject) => self.set_subject(subject),
            ComposerEvent::BodyChanged(body) => self.set_body(body),
            ComposerEvent::Discard | ComposerEvent::Sent => self.discard(),
        }
    }

    /// The draft that Send hands to the delivery backend.
    pub fn draft(&self) -> MailDraft {
        MailDraft {
            recipients: self.recipients.clone(),
            subject: self.subject.clone(),
            message: self.body.clone(),
        }
    }

    /// Hand the current draft to `delivery`.
    ///
    /// On success the form is reset; on failure it is left untouched so the
    /// user can retry.
    pub fn send(&mut self, delivery: &dyn MailDelivery) -> Result<DeliveryReceipt, SendError> {
        match delivery.deliver(&self.draft()) {
            Ok(receipt) => {
                self.apply(ComposerEvent::Sent);
                Ok(receipt)
            }
            Err(err) => {
                warn!(provider = %delivery.provider().name, error = %err, "send failed");
                Err(err.into())
            }
        }
    }
}

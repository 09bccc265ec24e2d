//! Mail delivery hook point.
//!
//! The composer never talks to a mail provider itself. It hands a
//! [`MailDraft`] to whatever [`MailDelivery`] implementation is wired in.
//! [`Unconfigured`] is the default and reports [`DeliveryError::NotImplemented`]
//! so a missing backend is visible to the user.

use std::sync::atomic::{AtomicBool, Ordering};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors from delivery backends.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeliveryError {
    #[error("Mail delivery is not implemented: no backend configured")]
    NotImplemented,

    #[error("Provider {provider} failed: {message}")]
    Provider { provider: String, message: String },

    #[error("All {attempts} mail providers failed")]
    AllProvidersFailed { attempts: usize },

    #[error("No mail provider available")]
    NoProviderAvailable,
}

/// A message ready to be handed to a provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailDraft {
    pub recipients: Vec<String>,
    pub subject: String,
    pub message: String,
}

/// Describes a provider that accepts drafts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailProvider {
    /// Provider name (e.g. "sendgrid-http")
    pub name: String,
    /// Transport used to reach it (e.g. "HTTP")
    pub transport: String,
}

/// Confirmation that a provider accepted a draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryReceipt {
    pub provider: MailProvider,
}

/// Something that can deliver a draft.
pub trait MailDelivery {
    /// Provider information reported in receipts and logs.
    fn provider(&self) -> MailProvider;

    fn deliver(&self, draft: &MailDraft) -> Result<DeliveryReceipt, DeliveryError>;
}

/// Placeholder backend used until a real one is wired in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Unconfigured;

impl MailDelivery for Unconfigured {
    fn provider(&self) -> MailProvider {
        MailProvider {
            name: "unconfigured".to_string(),
            transport: "none".to_string(),
        }
    }

    fn deliver(&self, _draft: &MailDraft) -> Result<DeliveryReceipt, DeliveryError> {
        Err(DeliveryError::NotImplemented)
    }
}

struct ProviderSlot {
    delivery: Box<dyn MailDelivery + Send + Sync>,
    disabled: AtomicBool,
}

/// Tries providers in registration order until one accepts the draft.
///
/// A provider that fails is disabled and skipped on later sends until
/// [`FailoverDelivery::enable_all`] is called.
#[derive(Default)]
pub struct FailoverDelivery {
    providers: Vec<ProviderSlot>,
}

impl FailoverDelivery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a provider after the existing ones.
    pub fn with_provider(mut self, delivery: impl MailDelivery + Send + Sync + 'static) -> Self {
        self.providers.push(ProviderSlot {
            delivery: Box::new(delivery),
            disabled: AtomicBool::new(false),
        });
        self
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Names of providers that are currently skipped.
    pub fn disabled_providers(&self) -> Vec<String> {
        self.providers
            .iter()
            .filter(|slot| slot.disabled.load(Ordering::Acquire))
            .map(|slot| slot.delivery.provider().name)
            .collect()
    }

    /// Re-enable every provider.
    pub fn enable_all(&self) {
        for slot in &self.providers {
            slot.disabled.store(false, Ordering::Release);
        }
    }
}

impl MailDelivery for FailoverDelivery {
    fn provider(&self) -> MailProvider {
        MailProvider {
            name: "failover".to_string(),
            transport: "mixed".to_string(),
        }
    }

    fn deliver(&self, draft: &MailDraft) -> Result<DeliveryReceipt, DeliveryError> {
        let mut attempts = 0;

        for slot in &self.providers {
            if slot.disabled.load(Ordering::Acquire) {
                continue;
            }

            attempts += 1;
            match slot.delivery.deliver(draft) {
                Ok(receipt) => {
                    debug!(provider = %receipt.provider.name, "mail delivered");
                    return Ok(receipt);
                }
                Err(err) => {
                    warn!(provider = %slot.delivery.provider().name, error = %err, "failed to send mail");
                    slot.disabled.store(true, Ordering::Release);
                }
            }
        }

        if attempts == 0 {
            Err(DeliveryError::NoProviderAvailable)
        } else {
            Err(DeliveryError::AllProvidersFailed { attempts })
        }
    }
}

//! Core types for the showcases dashboard.
//!
//! This crate defines the view-model shared by the frontend and the server:
//! the project catalog, the route table, the email composer state and the
//! mail delivery hook point. Nothing here performs I/O.

pub mod catalog;
pub mod composer;
pub mod mail;
pub mod router;
pub mod session;

pub use catalog::{Action, ActionView, Catalog, CatalogError, ProjectCard, Slug};
pub use composer::{ComposerEvent, ComposerState, SendError};
pub use mail::{
    DeliveryError, DeliveryReceipt, FailoverDelivery, MailDelivery, MailDraft, MailProvider,
    Unconfigured,
};
pub use router::{Navigator, Page, Resolution, RouteState};
pub use session::{Session, User};

//! Reusable UI components.

mod notice;
mod project_card;
mod recipient_input;

pub use notice::{Notice, NoticeKind};
pub use project_card::ProjectCardView;
pub use recipient_input::RecipientInput;

//! Page components.

mod dashboard;
mod email_sender;

pub use dashboard::DashboardPage;
pub use email_sender::EmailSenderPage;

//! API and page route handlers.

mod mail;
mod projects;
mod spa;

pub use mail::*;
pub use projects::*;
pub use spa::*;

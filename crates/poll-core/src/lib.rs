pub mod error;
pub mod models;
pub mod validation;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use error::error_location::ErrorLocation;
pub use models::poll::Poll;
pub use models::poll_option::PollOption;
pub use validation::{Violation, sanitize_text, validate_poll_input, validate_record};

pub mod client;
pub mod error;

pub use client::{Client, OptionSnapshot, PollSnapshot};
pub use error::{ClientError, Result as CliClientResult};

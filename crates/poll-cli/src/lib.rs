//! poll-cli library
//!
//! Exports the HTTP client and the view-model for use in tests and the
//! `poll` binary.

pub mod cli;
pub mod client;
pub mod commands;
pub mod view;


pub use client::{CliClientResult, Client, ClientError, OptionSnapshot, PollSnapshot};
pub use view::PollBoard;

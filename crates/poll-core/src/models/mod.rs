pub mod poll;
pub mod poll_option;

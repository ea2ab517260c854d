//! Command-line surface shared with the `chatline` binary.

pub mod args;

//! Terminal display module
//!
//! Prints command output blocks with automatic TTY detection.

mod formatter;
mod terminal;

pub use formatter::print_block;

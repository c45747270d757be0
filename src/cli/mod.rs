//! CLI layer - Command-line interface

pub mod commands;
pub mod output;
pub mod prompt;

pub use commands::{Cli, Commands};
pub use output::{format_detail, format_journal, format_palette, format_today};
pub use prompt::confirm;

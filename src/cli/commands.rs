//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "moodlog")]
#[command(about = "Mood journal for the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Log store operations to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new journal
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Add a mood entry
    Add {
        /// Mood label or emoji (see `moodlog moods`)
        #[arg(short, long)]
        mood: String,

        /// Entry text (opens the editor when omitted)
        text: Option<String>,
    },

    /// Show today's entries
    Today,

    /// Show all entries, newest first
    List {
        /// Show only the newest N entries
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Show one entry in full
    Show {
        /// Entry id
        id: String,
    },

    /// Edit the text of an entry
    Edit {
        /// Entry id
        id: String,

        /// New text (opens the editor when omitted)
        #[arg(short, long)]
        text: Option<String>,
    },

    /// Delete an entry
    Delete {
        /// Entry id
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Remove all entries
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// List the mood palette
    Moods,

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}

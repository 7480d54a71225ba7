use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// List the most recent polls with their tallies
    List,
    /// Get a single poll by ID
    Get {
        /// Poll ID (UUID)
        id: String,
    },
    /// Create a new poll
    Create {
        /// Poll question
        #[arg(long)]
        title: String,
        /// Option text (repeat for each option)
        #[arg(long = "option", required = true)]
        options: Vec<String>,
    },
    /// Vote for one option of a poll
    Vote {
        /// Poll ID (UUID)
        id: String,
        /// Zero-based option index
        option_index: i64,
    },
    /// Delete a poll
    Delete {
        /// Poll ID (UUID)
        id: String,
    },
    /// Render the poll board and refresh it on a fixed interval
    Watch {
        /// Seconds between refreshes
        #[arg(long, default_value_t = 5)]
        interval: u64,
    },
}

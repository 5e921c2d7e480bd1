use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::Subcommand;

pub mod house_bill;
pub mod prompts;
pub mod workshop;

#[derive(Debug, Subcommand)]
pub enum Recipe {
    /// Summarize a PDF chunk by chunk with three review roles (Groq)
    HouseBill {
        /// PDF to analyze
        #[arg(long, default_value = "caa.pdf")]
        pdf: PathBuf,

        /// Pages read per extraction window
        #[arg(long, default_value_t = 5)]
        pages_per_window: usize,

        /// Maximum words per chunk
        #[arg(long, default_value = "500")]
        max_words: NonZeroUsize,

        /// Words allowed per throttle window before pausing
        #[arg(long, default_value_t = 30_000)]
        max_window_words: usize,

        /// Requests allowed per throttle window before pausing
        #[arg(long, default_value_t = 30)]
        max_window_requests: usize,

        /// Pause length in seconds when a window fills up
        #[arg(long, default_value_t = 60)]
        pause_secs: u64,
    },
    /// Ask the model a single question
    Model,
    /// Financial advisor agent
    Advisor,
    /// Art therapy outreach agent
    ArtTherapy,
    /// Boss -> analyzer -> summary swarm over expense data
    Expenses {
        /// CSV file with transactions; the built-in sample is used if omitted
        #[arg(long)]
        data: Option<PathBuf>,
    },
    /// One post generator fanned out to seven platform optimizers
    Gptuesday,
    /// Spreadsheet swarm of social media agents, saved to CSV
    FightNight,
    /// Send a message to the Discord channel from the environment
    Discord {
        #[arg(default_value = "Hello, this is a message from my bot!")]
        message: String,
    },
}

use clap::{Parser, Subcommand};

/// `Iqra` - AI-powered Quran study companion.
#[derive(Parser, Debug)]
#[command(name = "iqra")]
#[command(version = "0.1.0")]
#[command(about = "AI-powered Quran study companion.", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Choose your language and unlock the app
    Onboard {
        /// Run the interactive language picker (default is quick setup)
        #[arg(long)]
        interactive: bool,

        /// Locale code for quick setup (en, ur, ar)
        #[arg(long)]
        locale: Option<String>,
    },

    /// Ask a question in chat mode
    Ask {
        /// The question to ask
        #[arg(short, long)]
        message: String,

        /// Skip the simulated thinking delay
        #[arg(long)]
        instant: bool,
    },

    /// Run one voice round: listen, transcribe, answer
    Voice {
        /// Skip the simulated listening and thinking delays
        #[arg(long)]
        instant: bool,
    },

    /// Open a page (home, chat, voice, tafseer, profile, premium)
    Open {
        /// Path key of the page
        page: String,
    },

    /// Browse the surah index or a single surah
    Tafseer {
        /// Surah number to show
        #[arg(short, long)]
        surah: Option<u16>,

        /// Filter the index by name or meaning
        #[arg(long)]
        search: Option<String>,
    },

    /// Show session and conversation state
    Status {
        /// Emit machine-readable JSON
        #[arg(long)]
        json: bool,
    },
}

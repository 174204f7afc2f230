//! CLI command and subcommand definitions

use clap::{Parser, Subcommand};

/// Folio portfolio client
#[derive(Parser, Debug)]
#[command(name = "folioctl")]
#[command(version, about = "Live portfolio client", long_about = None)]
pub struct Cli {
    /// Server URL (overrides config file)
    #[arg(short, long)]
    pub server: Option<String>,

    /// Output format (overrides config file)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Enable verbose logging (overrides config file)
    #[arg(short, long)]
    pub verbose: Option<bool>,

    /// Don't load config file
    #[arg(long)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty table output
    Table,
    /// JSON output
    Json,
}

impl From<&OutputFormat> for crate::format::OutputFormat {
    fn from(format: &OutputFormat) -> Self {
        match format {
            OutputFormat::Table => crate::format::OutputFormat::Table,
            OutputFormat::Json => crate::format::OutputFormat::Json,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the public portfolio view once
    Show,

    /// Open a navigation path and start the matching interactive session
    ///
    /// Paths under /admin open the editing session; everything else opens
    /// the public portfolio session.
    Open {
        /// Navigation path, e.g. "/" or "/admin"
        #[arg(default_value = "/")]
        path: String,
    },

    /// Send a message to the portfolio inbox
    Contact {
        /// Sender name
        #[arg(long, default_value = "")]
        name: String,

        /// Sender email
        #[arg(long, default_value = "")]
        email: String,

        /// Message body
        #[arg(long, default_value = "")]
        message: String,
    },

    /// Admin operations against the stored config and inbox
    Admin {
        #[command(subcommand)]
        command: AdminCommands,
    },

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completion for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum AdminCommands {
    /// Load config and inbox, print the editable form
    Show,

    /// Round-trip edit: load, apply field overrides, save back
    Save {
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        place: Option<String>,

        #[arg(long)]
        availability: Option<String>,

        #[arg(long)]
        pfp: Option<String>,

        #[arg(long)]
        music: Option<String>,

        #[arg(long = "accent-color")]
        accent_color: Option<String>,

        /// Comma-separated skill tags
        #[arg(long)]
        skills: Option<String>,

        /// JSON array of {label, url} objects
        #[arg(long)]
        links: Option<String>,

        /// JSON array of {title, description} objects
        #[arg(long)]
        projects: Option<String>,
    },

    /// Fetch and print the message inbox
    Messages,
}

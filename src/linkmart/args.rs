use clap::{Parser, Subcommand};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GIT_HASH"),
    " ",
    env!("GIT_COMMIT_DATE"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "linkmart")]
#[command(version, long_version = LONG_VERSION)]
#[command(about = "Local-first admin console for link pages and shortened links", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new page
    #[command(alias = "n")]
    Create {
        /// Title of the page
        #[arg(required = false)]
        title: Option<String>,

        /// Page content (text or raw markup)
        #[arg(required = false)]
        content: Option<String>,

        /// Comma-separated menu entries (e.g. "Home, Books, About")
        #[arg(long)]
        menu: Option<String>,

        /// Slider image URL (repeatable)
        #[arg(long)]
        slider: Vec<String>,

        /// Center image URL
        #[arg(long)]
        center: Option<String>,

        /// Grid tile title (repeatable, max 16)
        #[arg(long)]
        grid: Vec<String>,

        /// Read the page draft from a JSON file instead
        #[arg(long, value_name = "FILE", conflicts_with_all = ["title", "content"])]
        from_json: Option<std::path::PathBuf>,
    },

    /// Register a static file from the pages manifest as a page
    Register {
        /// File name as listed in the pages manifest
        file: String,
    },

    /// Generate a shortened link for a page
    #[command(alias = "gen")]
    Link {
        /// Id of the page to link to
        page_id: String,
    },

    /// List pages
    #[command(alias = "ls")]
    Pages,

    /// List links, optionally only those of one page
    Links {
        /// Page id to filter by
        page_id: Option<String>,
    },

    /// Search pages and links
    Search { query: String },

    /// Delete a page and its links
    #[command(alias = "rm")]
    Delete {
        /// Id of the page to delete
        page_id: String,

        /// Admin password; checked when supplied
        #[arg(short, long)]
        password: Option<String>,
    },

    /// Delete a single link
    RmLink {
        /// Id of the link to delete
        link_id: String,
    },

    /// Record a visit against a link
    Visit {
        /// Id of the visited link
        link_id: String,
    },

    /// Export pages and links as CSV
    Export {
        /// Restrict the export to search matches
        #[arg(short, long)]
        query: Option<String>,
    },

    /// Show the text-file database table
    Files,

    /// Show collection totals
    #[command(alias = "st")]
    Status,

    /// Get or set configuration
    Config {
        /// Configuration key (default-link, admin-password)
        key: Option<String>,

        /// Value to set (if omitted, prints current config)
        value: Option<String>,

        /// Current admin password (required to set admin-password)
        #[arg(long)]
        current: Option<String>,
    },

    /// Log in with a username and password
    Login { username: String, password: String },

    /// Log out and clear the stored session
    Logout,

    /// Create a new account (admin only)
    CreateUser {
        username: String,
        password: String,

        /// Account role: admin or user
        #[arg(long, default_value = "user")]
        role: String,
    },

    /// Change the logged-in user's password
    Passwd {
        /// Current password
        #[arg(long)]
        current: String,

        /// New password
        #[arg(long)]
        new: String,
    },
}

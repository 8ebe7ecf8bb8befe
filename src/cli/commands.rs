// src/cli/commands.rs
use clap::Subcommand;

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Run the HTTP API
    Serve {
        /// API server port (overrides WEB_PORT)
        #[arg(long, short)]
        port: Option<u16>,
    },

    /// Generate passwords
    Generate(GenerateArgs),

    /// Score a password (reads one line from stdin when omitted)
    Score {
        password: Option<String>,
    },
}

#[derive(clap::Args, Debug, Clone, PartialEq, Eq)]
pub struct GenerateArgs {
    /// Password length (defaults to DEFAULT_PASSWORD_LENGTH)
    #[arg(long, short)]
    pub length: Option<usize>,

    /// Exclude uppercase letters
    #[arg(long)]
    pub no_upper: bool,

    /// Exclude lowercase letters
    #[arg(long)]
    pub no_lower: bool,

    /// Exclude digits
    #[arg(long)]
    pub no_digits: bool,

    /// Exclude special characters
    #[arg(long)]
    pub no_special: bool,

    /// Number of passwords to generate
    #[arg(long, short = 'n', default_value_t = 1)]
    pub count: usize,

    /// Print the strength score and band after each password
    #[arg(long, short)]
    pub strength: bool,
}

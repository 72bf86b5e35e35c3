use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::io;

use crate::types::{DEFAULT_PAGE_SIZE, TaskStatus, TierCode};

#[derive(Parser)]
#[command(name = "credo")]
#[command(about = "Carbon credit registry dashboard client")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Shared output flag.
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct OutputOptions {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Local narrowing of a task board.
#[derive(Args, Debug, Clone)]
pub struct BoardArgs {
    /// Only show tasks with this status (assigned, in_progress, under_review, completed, approved, rejected)
    #[arg(long, value_parser = parse_status)]
    pub status: Option<TaskStatus>,

    /// Case-insensitive match on project or developer name
    #[arg(long)]
    pub search: Option<String>,

    /// Print summary counters above the list
    #[arg(long)]
    pub stats: bool,

    #[command(flatten)]
    pub output: OutputOptions,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List user subscriptions (admin)
    #[command(visible_alias = "subs")]
    Subscriptions {
        /// Page number (1-based)
        #[arg(long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,

        /// Rows per page
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE, value_parser = clap::value_parser!(u32).range(1..))]
        page_size: u32,

        /// Only show users on this tier (e.g. PKG_2, 2, full)
        #[arg(long, value_parser = parse_tier)]
        tier: Option<TierCode>,

        /// Case-insensitive match on email or name
        #[arg(long)]
        search: Option<String>,

        #[command(flatten)]
        output: OutputOptions,
    },

    /// Show the subscription tier catalog (admin)
    Tiers {
        #[command(flatten)]
        output: OutputOptions,
    },

    /// Assign a subscription tier to a user (admin)
    Assign {
        /// User ID
        user_id: i64,

        /// Tier to assign (e.g. PKG_3, 3, full)
        #[arg(value_parser = parse_tier)]
        tier: TierCode,

        #[command(flatten)]
        output: OutputOptions,
    },

    /// List registry reviews
    Reviews {
        #[command(flatten)]
        board: BoardArgs,
    },

    /// List VVB validation tasks
    Validations {
        #[command(flatten)]
        board: BoardArgs,
    },

    /// List VVB verification tasks
    Verifications {
        #[command(flatten)]
        board: BoardArgs,
    },

    /// Request a password reset link
    ForgotPassword {
        /// Account email address
        email: String,

        #[command(flatten)]
        output: OutputOptions,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for [possible values: bash, zsh, fish, powershell, elvish]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show {
        #[command(flatten)]
        output: OutputOptions,
    },
    /// Set a configuration value
    Set {
        /// Configuration key (api_url, token)
        key: String,
        /// Value to set
        value: String,
        #[command(flatten)]
        output: OutputOptions,
    },
    /// Get a configuration value
    Get {
        /// Configuration key (api_url, token)
        key: String,
        #[command(flatten)]
        output: OutputOptions,
    },
}

impl Commands {
    /// Execute the command, dispatching to the appropriate handler.
    pub async fn run(self) -> crate::error::Result<()> {
        use crate::commands::{
            SubscriptionOptions, cmd_assign, cmd_config_get, cmd_config_set,
            cmd_config_show, cmd_forgot_password, cmd_reviews, cmd_subscriptions, cmd_tiers,
            cmd_validations, cmd_verifications,
        };

        match self {
            Commands::Subscriptions {
                page,
                page_size,
                tier,
                search,
                output,
            } => {
                cmd_subscriptions(
                    SubscriptionOptions {
                        page,
                        page_size,
                        tier,
                        search,
                    },
                    output,
                )
                .await
            }
            Commands::Tiers { output } => cmd_tiers(output).await,
            Commands::Assign {
                user_id,
                tier,
                output,
            } => cmd_assign(user_id, tier, output).await,

            Commands::Reviews { board } => {
                let (options, output) = board.split();
                cmd_reviews(options, output).await
            }
            Commands::Validations { board } => {
                let (options, output) = board.split();
                cmd_validations(options, output).await
            }
            Commands::Verifications { board } => {
                let (options, output) = board.split();
                cmd_verifications(options, output).await
            }

            Commands::ForgotPassword { email, output } => {
                cmd_forgot_password(&email, output).await
            }

            Commands::Config { action } => match action {
                ConfigAction::Show { output } => cmd_config_show(output),
                ConfigAction::Set { key, value, output } => cmd_config_set(&key, &value, output),
                ConfigAction::Get { key, output } => cmd_config_get(&key, output),
            },

            Commands::Completions { shell } => {
                generate_completions(shell);
                Ok(())
            }
        }
    }
}

impl BoardArgs {
    fn split(self) -> (crate::commands::TaskListOptions, OutputOptions) {
        (
            crate::commands::TaskListOptions {
                status: self.status,
                search: self.search,
                stats: self.stats,
            },
            self.output,
        )
    }
}

fn parse_status(s: &str) -> Result<TaskStatus, String> {
    s.parse().map_err(|_| {
        let valid: Vec<String> = TaskStatus::ALL
            .iter()
            .map(|status| status.as_str().to_lowercase())
            .collect();
        format!("Invalid status. Must be one of: {}", valid.join(", "))
    })
}

fn parse_tier(s: &str) -> Result<TierCode, String> {
    s.parse().map_err(|_| {
        let valid: Vec<&str> = TierCode::ALL.iter().map(|tier| tier.as_str()).collect();
        format!("Invalid tier. Must be one of: {}", valid.join(", "))
    })
}

pub fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "credo", &mut io::stdout());
}

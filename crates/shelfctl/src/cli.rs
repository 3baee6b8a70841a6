//! Clap derive structures for the `shelfctl` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// shelfctl -- inventory administration from the command line
#[derive(Debug, Parser)]
#[command(
    name = "shelfctl",
    version,
    about = "Manage products, categories, dealers, and customers",
    long_about = "A CLI admin panel for the shelf inventory REST API.\n\n\
        Every command maps onto one API operation and keeps a local\n\
        cache of the fetched collections in sync.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Base URL of the inventory API (overrides config file)
    #[arg(long, short = 'u', env = "SHELF_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// Output format (defaults to the config file's `output`, then table)
    #[arg(long, short = 'o', env = "SHELF_OUTPUT", global = true)]
    pub output: Option<OutputFormat>,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    /// Request timeout in seconds (overrides config file)
    #[arg(long, env = "SHELF_TIMEOUT", global = true)]
    pub timeout: Option<u64>,

    /// Cache sync after mutations: local-merge or refetch
    #[arg(long, env = "SHELF_SYNC_POLICY", global = true)]
    pub sync_policy: Option<String>,
}

impl GlobalOpts {
    /// Effective output format; `main` fills in the config-file default
    /// before dispatch, so handlers never see `None` in practice.
    pub fn output(&self) -> &OutputFormat {
        self.output.as_ref().unwrap_or(&OutputFormat::Table)
    }
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one id per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage products
    #[command(alias = "prod", alias = "p")]
    Product(ProductArgs),

    /// Manage categories
    #[command(alias = "cat")]
    Category(CategoryArgs),

    /// Manage dealers
    Dealer(DealerArgs),

    /// Manage customers
    #[command(alias = "cust")]
    Customer(CustomerArgs),

    /// View and edit the config file
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}

// ── Product ──────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ProductArgs {
    #[command(subcommand)]
    pub command: ProductCommand,
}

#[derive(Debug, Subcommand)]
pub enum ProductCommand {
    /// List all products
    #[command(alias = "ls")]
    List,

    /// Show one product
    Get { id: i64 },

    /// Create a product
    Create(ProductCreateArgs),

    /// Update fields on a product
    Update(ProductUpdateArgs),

    /// Delete a product
    #[command(alias = "rm")]
    Delete { id: i64 },
}

#[derive(Debug, Args)]
pub struct ProductCreateArgs {
    /// Product name
    #[arg(long)]
    pub name: String,

    /// Stock-keeping unit
    #[arg(long)]
    pub sku: String,

    /// Manufacturer / company name
    #[arg(long)]
    pub company: String,

    /// Unit price
    #[arg(long)]
    pub price: f64,

    /// Units in stock
    #[arg(long, default_value_t = 0)]
    pub stock: i64,

    /// Category id
    #[arg(long)]
    pub category: i64,

    /// Dealer id (optional)
    #[arg(long)]
    pub dealer: Option<i64>,

    /// Discount percentage (optional)
    #[arg(long)]
    pub discount: Option<f64>,
}

#[derive(Debug, Args)]
pub struct ProductUpdateArgs {
    pub id: i64,

    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub sku: Option<String>,
    #[arg(long)]
    pub company: Option<String>,
    #[arg(long)]
    pub price: Option<f64>,
    #[arg(long)]
    pub stock: Option<i64>,
    #[arg(long)]
    pub category: Option<i64>,
    #[arg(long)]
    pub dealer: Option<i64>,
    #[arg(long)]
    pub discount: Option<f64>,
}

// ── Category ─────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CategoryArgs {
    #[command(subcommand)]
    pub command: CategoryCommand,
}

#[derive(Debug, Subcommand)]
pub enum CategoryCommand {
    /// List all categories
    #[command(alias = "ls")]
    List,

    /// Show one category
    Get { id: i64 },

    /// Create a category
    Create {
        /// Category name (letters and spaces)
        #[arg(long)]
        name: String,
    },

    /// Rename a category
    Update {
        id: i64,
        #[arg(long)]
        name: String,
    },

    /// Delete a category
    #[command(alias = "rm")]
    Delete { id: i64 },
}

// ── Dealer ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct DealerArgs {
    #[command(subcommand)]
    pub command: DealerCommand,
}

#[derive(Debug, Subcommand)]
pub enum DealerCommand {
    /// List all dealers
    #[command(alias = "ls")]
    List,

    /// Show one dealer
    Get { id: i64 },

    /// Create a dealer
    Create(DealerCreateArgs),

    /// Update fields on a dealer
    Update(DealerUpdateArgs),

    /// Delete a dealer
    #[command(alias = "rm")]
    Delete { id: i64 },
}

#[derive(Debug, Args)]
pub struct DealerCreateArgs {
    /// Contact name
    #[arg(long)]
    pub name: String,

    /// Company name (optional)
    #[arg(long)]
    pub company: Option<String>,

    /// Email address (optional)
    #[arg(long)]
    pub email: Option<String>,

    /// Phone number
    #[arg(long)]
    pub phone: String,

    /// Postal address (optional)
    #[arg(long)]
    pub address: Option<String>,
}

#[derive(Debug, Args)]
pub struct DealerUpdateArgs {
    pub id: i64,

    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub company: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub address: Option<String>,
}

// ── Customer ─────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CustomerArgs {
    #[command(subcommand)]
    pub command: CustomerCommand,
}

#[derive(Debug, Subcommand)]
pub enum CustomerCommand {
    /// List all customers
    #[command(alias = "ls")]
    List,

    /// Show one customer
    Get { id: i64 },

    /// Create a customer
    Create(CustomerCreateArgs),

    /// Update fields on a customer
    Update(CustomerUpdateArgs),

    /// Delete a customer
    #[command(alias = "rm")]
    Delete { id: i64 },
}

#[derive(Debug, Args)]
pub struct CustomerCreateArgs {
    /// Customer name
    #[arg(long)]
    pub name: String,

    /// Email address (optional)
    #[arg(long)]
    pub email: Option<String>,

    /// Phone number
    #[arg(long)]
    pub phone: String,

    /// Postal address (optional)
    #[arg(long)]
    pub address: Option<String>,
}

#[derive(Debug, Args)]
pub struct CustomerUpdateArgs {
    pub id: i64,

    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub address: Option<String>,
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration
    Show,

    /// Print the config file path
    Path,

    /// Set a value in the config file
    Set {
        /// Base URL of the inventory API
        #[arg(long)]
        base_url: Option<String>,

        /// Cache sync policy: local-merge or refetch
        #[arg(long)]
        sync_policy: Option<String>,

        /// Default output format
        #[arg(long)]
        output: Option<String>,

        /// Request timeout in seconds
        #[arg(long)]
        timeout: Option<u64>,
    },
}

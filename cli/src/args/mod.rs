use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Parser, Debug)]
#[command(
    name = "broker",
    version,
    about,
    long_about = "Terminal client for the brokerage administration API"
)]
pub struct CliArgs {
    #[clap(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub config: ConfigArgs,
}

#[derive(Debug, Args, Serialize)]
pub struct ConfigArgs {
    /// Name of the profile to use
    #[arg(long, short, global = true, env = "BROKER_PROFILE")]
    pub profile: Option<String>,

    /// Base URL of the API, overrides the profile
    #[arg(long, global = true, env = "BROKER_API_URL")]
    pub api_url: Option<String>,

    /// Bearer token, overrides the profile
    #[arg(long, global = true, env = "BROKER_API_TOKEN", hide_env_values = true)]
    #[serde(skip)]
    pub token: Option<String>,

    /// Default page size of lists, overrides the profile
    #[arg(long, global = true)]
    pub page_size: Option<u32>,
}

#[derive(Debug, Subcommand, PartialEq)]
pub enum Command {
    /// Prints out current configuration
    Config,
    /// Writes the settings of the active profile
    Init(InitArgs),
    /// Profile management subcommands
    #[clap(subcommand)]
    Profile(ProfileCommand),
    /// Contracts
    #[clap(subcommand)]
    Contract(ResourceCommand),
    /// Customers
    #[clap(subcommand)]
    Customer(ResourceCommand),
    /// Properties
    #[clap(subcommand)]
    Property(ResourceCommand),
    /// Consultations
    #[clap(subcommand)]
    Consultation(ResourceCommand),
    /// Text messages and templates
    #[clap(subcommand)]
    Sms(SmsCommand),
    /// E-mail verification and agent sign-up
    #[clap(subcommand)]
    Auth(AuthCommand),
    /// Prints shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Debug, Args, PartialEq)]
pub struct InitArgs {
    /// Base URL of the API
    #[arg(long = "url", value_name = "URL")]
    pub url: Option<String>,
    /// Bearer token sent with every request
    #[arg(long = "with-token", value_name = "TOKEN")]
    pub with_token: Option<String>,
    /// Request timeout in seconds
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,
    /// Overwrite an existing profile
    #[arg(long, short = 'f')]
    pub force: bool,
}

#[derive(Debug, Subcommand, PartialEq)]
pub enum ProfileCommand {
    /// Switches to a profile, creating it when missing
    Use { name: String },
    /// Lists available profiles
    List,
    /// Shows the active profile
    Current,
}

#[derive(Debug, Clone, ValueEnum, PartialEq, Serialize, Deserialize, Default)]
pub enum OutputFormat {
    #[default]
    Pretty,
    Plain,
    Json,
}

#[derive(Debug, Args, PartialEq)]
pub struct ListArgs {
    /// Filter constraint, e.g. `--filter customerName=홍길동` (repeatable)
    #[arg(long = "filter", short = 'f', value_name = "FIELD=VALUE", value_parser = parse_key_val)]
    pub filters: Vec<(String, String)>,

    /// Page to fetch (1-indexed)
    #[arg(long, default_value_t = 1)]
    pub page: u32,

    /// Page size, defaults to the profile setting
    #[arg(long)]
    pub size: Option<u32>,

    /// Output format (pretty, plain, or json)
    #[arg(long, value_enum, default_value_t = OutputFormat::Pretty)]
    pub output: OutputFormat,
}

#[derive(Debug, Args, PartialEq)]
pub struct PayloadArgs {
    /// JSON payload file, `-` reads stdin
    #[arg(long, value_name = "FILE")]
    pub file: String,
}

#[derive(Debug, Subcommand, PartialEq)]
pub enum ResourceCommand {
    /// Fetches one page of the list
    List(ListArgs),
    /// Browses the list interactively
    Browse(ListArgs),
    /// Shows one record
    Show { id: i64 },
    /// Registers a record from a JSON payload
    Create(PayloadArgs),
    /// Replaces a record from a JSON payload
    Update {
        id: i64,
        #[command(flatten)]
        payload: PayloadArgs,
    },
    /// Deletes a record
    Delete { id: i64 },
}

#[derive(Debug, Subcommand, PartialEq)]
pub enum SmsCommand {
    /// Fetches one page of sent messages
    List(ListArgs),
    /// Browses sent messages interactively
    Browse(ListArgs),
    /// Shows one message
    Show { id: i64 },
    /// Sends (or reserves) a message
    Send(SendSmsArgs),
    /// Shows the provider's sending history
    History(SmsHistoryArgs),
    /// Message templates
    #[clap(subcommand)]
    Template(TemplateCommand),
}

#[derive(Debug, Args, PartialEq)]
pub struct SendSmsArgs {
    /// Receiver phone number
    #[arg(long)]
    pub receiver: String,
    /// Message body
    #[arg(long)]
    pub msg: String,
    /// Title (long messages only)
    #[arg(long)]
    pub title: Option<String>,
    /// SMS, LMS or MMS
    #[arg(long = "type", value_name = "TYPE")]
    pub msg_type: Option<String>,
    /// Reservation date, YYYYMMDD
    #[arg(long, requires = "rtime")]
    pub rdate: Option<String>,
    /// Reservation time, HH:mm
    #[arg(long, requires = "rdate")]
    pub rtime: Option<String>,
}

#[derive(Debug, Args, PartialEq)]
pub struct SmsHistoryArgs {
    /// First day of the history, YYYYMMDD
    #[arg(long)]
    pub start_date: Option<String>,
    /// Number of days covered
    #[arg(long)]
    pub limit_day: Option<u32>,
    #[arg(long, default_value_t = 1)]
    pub page: u32,
    #[arg(long)]
    pub size: Option<u32>,
    /// Output format (pretty, plain, or json)
    #[arg(long, value_enum, default_value_t = OutputFormat::Pretty)]
    pub output: OutputFormat,
}

#[derive(Debug, Subcommand, PartialEq)]
pub enum TemplateCommand {
    /// Lists all templates
    List {
        #[arg(long, value_enum, default_value_t = OutputFormat::Pretty)]
        output: OutputFormat,
    },
    /// Shows one template
    Show { id: i64 },
    /// Creates a template
    Create(TemplateArgs),
    /// Updates a template
    Update {
        id: i64,
        #[command(flatten)]
        template: TemplateArgs,
    },
    /// Deletes a template
    Delete { id: i64 },
}

#[derive(Debug, Args, PartialEq)]
pub struct TemplateArgs {
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub content: String,
}

#[derive(Debug, Subcommand, PartialEq)]
pub enum AuthCommand {
    /// Sends a verification code by e-mail
    SendCode {
        #[arg(long)]
        email: String,
        /// SIGNUP or PASSWORD_RESET
        #[arg(long = "type", default_value = "SIGNUP")]
        kind: String,
    },
    /// Checks a verification code
    Verify {
        #[arg(long)]
        email: String,
        #[arg(long)]
        code: String,
    },
    /// Registers an agent from a JSON payload
    Signup(PayloadArgs),
}

pub fn parse_key_val(s: &str) -> anyhow::Result<(String, String)> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| anyhow::anyhow!("expected FIELD=VALUE, got '{}'", s))?;

    if key.trim().is_empty() {
        return Err(anyhow::anyhow!("missing field name in '{}'", s));
    }

    Ok((key.trim().to_string(), value.to_string()))
}

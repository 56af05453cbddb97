use clap::{ArgAction, Parser};

/// Default model instance name on the remote service
pub const DEFAULT_INSTANCE_NAME: &str = "tutorial";

/// Default classification algorithm
pub const DEFAULT_ALGORITHM: &str = "PA";

// Auto short help is disabled so `-h` can keep its historical meaning of
// `--server_host`; help is reachable as `-?` or `--help`.
#[derive(Parser, Debug)]
#[command(name = "textsort-tutorial")]
#[command(
    author,
    version,
    about = "Train and evaluate a remote textsort classifier instance",
    disable_help_flag = true
)]
pub struct Cli {
    /// Display help information
    #[arg(short = '?', long = "help", action = ArgAction::Help)]
    help: Option<bool>,

    /// Server host
    #[arg(short = 'h', long = "server_host", default_value = "127.0.0.1")]
    pub host: String,

    /// Server port
    #[arg(short = 'p', long = "server_port", default_value_t = 9199)]
    pub port: u16,

    /// Instance name
    #[arg(short = 'n', long = "name", default_value = DEFAULT_INSTANCE_NAME)]
    pub name: String,

    /// Algorithm
    #[arg(short = 'a', long = "algo", default_value = DEFAULT_ALGORITHM)]
    pub algorithm: String,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

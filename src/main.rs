use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use apichecklist::{cli, config, warning};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Show the checklist
    List(ListOptions),

    /// Show the group filter options
    Groups,

    /// Mark an API as checked
    Check(ApiOptions),

    /// Mark an API as unchecked
    Uncheck(ApiOptions),

    /// Show, set or reset your nickname
    Nickname(NicknameOptions),

    /// Open the Swagger documentation of an API
    Open(ApiOptions),

    /// Interactive checklist session
    Shell,

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct ListOptions {
    /// Only show this group
    #[clap(long)]
    pub group: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct ApiOptions {
    /// HTTP method of the API (e.g. GET)
    #[clap(long)]
    pub method: String,

    /// Path of the API as listed by the checker (e.g. /pets/{id})
    #[clap(long)]
    pub path: String,
}

#[derive(Parser, Debug, Clone)]
#[command(args_conflicts_with_subcommands = true)]
pub struct NicknameOptions {
    #[command(subcommand)]
    pub command: Option<NicknameSubcommand>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum NicknameSubcommand {
    /// Print the stored nickname (default)
    Show,

    /// Store a new nickname
    Set { name: String },

    /// Forget the stored nickname
    Reset,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        warning!("Cannot load environment. Err: {}", e);
    }
    config::init_logging();

    let cli = Cli::parse();

    match cli.command {
        Command::List(opt) => cli::list(opt.group).await,
        Command::Groups => cli::groups().await,
        Command::Check(opt) => cli::check(opt.method, opt.path, true).await,
        Command::Uncheck(opt) => cli::check(opt.method, opt.path, false).await,
        Command::Nickname(opt) => {
            let action = match opt.command {
                Some(NicknameSubcommand::Set { name }) => cli::NicknameAction::Set(name),
                Some(NicknameSubcommand::Reset) => cli::NicknameAction::Reset,
                Some(NicknameSubcommand::Show) | None => cli::NicknameAction::Show,
            };
            cli::nickname(action).await
        }
        Command::Open(opt) => cli::open(opt.method, opt.path).await,
        Command::Shell => cli::shell().await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}

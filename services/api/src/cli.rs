use crate::demo::{run_demo, run_evaluate, run_rank, DemoArgs, EvaluateArgs, RankArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use team_synergy::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Team Synergy",
    about = "Score teams and recommend members from Hugo personality types",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score a roster read from a JSON file
    Evaluate(EvaluateArgs),
    /// Rank candidates from a JSON file against a roster
    Rank(RankArgs),
    /// Walk through the bundled sample organization
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Evaluate(args) => run_evaluate(args),
        Command::Rank(args) => run_rank(args),
        Command::Demo(args) => run_demo(args),
    }
}

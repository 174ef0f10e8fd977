// Vitrine
// STORY-008: CLI and drivers
//
// A terminal portfolio: animated particle backdrops, a typing banner, and
// an AI assistant grounded in the owner's resume corpus.

mod chat;
mod show;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[clap(
    name = "vitrine",
    version,
    about = "Terminal portfolio with animated backdrops and an AI assistant"
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run an animated backdrop full-screen until Ctrl-C or --for elapses
    Show(show::ShowArgs),
    /// Talk to the portfolio assistant
    Chat(chat::ChatArgs),
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Show(args) => show::run(args).await,
        Command::Chat(args) => chat::run(args).await,
    }
}

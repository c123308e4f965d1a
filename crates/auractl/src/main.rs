//! Aura CLI - ask the chatbot from the terminal.

mod client;

use anyhow::Result;
use aura_common::DEFAULT_BIND_ADDR;
use clap::{Parser, Subcommand};
use client::AuradClient;

#[derive(Parser)]
#[command(name = "auractl", version, about = "Talk to the Aura chatbot daemon")]
struct Cli {
    /// Daemon address
    #[arg(long, default_value = DEFAULT_BIND_ADDR, global = true)]
    addr: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask the chatbot a question
    Ask {
        /// Account username
        #[arg(short, long)]
        username: String,

        /// Account password
        #[arg(short, long)]
        password: String,

        /// The question, e.g. "what is seven plus three"
        question: Vec<String>,
    },
    /// Check daemon health
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Ask {
            username,
            password,
            question,
        } => {
            let question = question.join(" ");
            let mut client = AuradClient::new(&cli.addr)?;
            client.login(&username, &password).await?;
            let answer = client.ask(&question).await?;
            println!("{}", answer);
        }
        Commands::Status => {
            let client = AuradClient::new(&cli.addr)?;
            let health = client.health().await?;
            println!(
                "aurad {} is {} (up {}s)",
                health.version, health.status, health.uptime_secs
            );
        }
    }

    Ok(())
}

//! poll - command-line client for the poll service
//!
//! # Examples
//!
//! ```bash
//! # List recent polls with tallies
//! poll list
//!
//! # Create a poll
//! poll create --title "Favorite color?" --option Red --option Blue
//!
//! # Vote for option 1
//! poll vote <uuid> 1
//!
//! # Live board, refreshed every 5 seconds
//! poll watch
//! ```

use poll_cli::cli::Cli;
use poll_cli::commands::Commands;
use poll_cli::{CliClientResult, Client, PollBoard, view};

use std::io::Write;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use tokio::time::MissedTickBehavior;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let client = Client::new(&cli.server);

    let result = match cli.command {
        Commands::List => render_list(&client).await,
        Commands::Get { id } => client.get_poll(&id).await.map(|p| view::render_poll(&p)),
        Commands::Create { title, options } => client
            .create_poll(&title, &options)
            .await
            .map(|p| format!("Created poll {}\n\n{}", p.id, view::render_poll(&p))),
        Commands::Vote { id, option_index } => render_vote(&client, &id, option_index).await,
        Commands::Delete { id } => client.delete_poll(&id).await,
        Commands::Watch { interval } => watch(&client, interval).await,
    };

    match result {
        Ok(output) => {
            print!("{}", ensure_trailing_newline(output));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn render_list(client: &Client) -> CliClientResult<String> {
    let mut board = PollBoard::new();
    board.replace_all(client.list_polls().await?);
    Ok(board.render())
}

/// Cast a vote, then update only the affected poll on the board with the
/// server's returned state.
async fn render_vote(client: &Client, id: &str, option_index: i64) -> CliClientResult<String> {
    let mut board = PollBoard::new();
    board.replace_all(client.list_polls().await?);

    let updated = client.vote(id, option_index).await?;
    let confirmation = format!("Vote recorded for option {} of {}\n\n", option_index, id);
    board.apply_update(updated);

    Ok(format!("{}{}", confirmation, board.render()))
}

/// Redraw the board on a fixed interval. Ticks that would overlap an
/// in-flight refresh are skipped; a failed refresh keeps the previous board
/// and shows a notice that clears on the next good pass.
async fn watch(client: &Client, interval_secs: u64) -> CliClientResult<String> {
    let mut board = PollBoard::new();
    let mut notice: Option<String> = None;

    let mut ticker = tokio::time::interval(Duration::from_secs(interval_secs.max(1)));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        ticker.tick().await;

        match client.list_polls().await {
            Ok(polls) => {
                board.replace_all(polls);
                notice = None;
            }
            Err(e) => notice = Some(e.to_string()),
        }

        // Clear screen and redraw
        print!("\x1b[2J\x1b[H{}", board.render());
        if let Some(ref message) = notice {
            println!("! {}", message);
        }
        std::io::stdout().flush().ok();
    }
}

fn ensure_trailing_newline(mut output: String) -> String {
    if !output.ends_with('\n') {
        output.push('\n');
    }
    output
}

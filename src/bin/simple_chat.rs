use clap::Parser;
use echo_chat::{Conversation, EchoResponder, Message};
use std::error::Error;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};

#[derive(Parser)]
#[command(
    name = "simple_chat",
    version,
    about = "Chat with an echo that answers everything backwards"
)]
struct Cli {
    /// Simulated reply latency in milliseconds
    #[arg(long, default_value_t = 500, value_name = "MS")]
    delay_ms: u64,
}

fn print_message(message: &Message) {
    let marker = if message.is_from_current_user() { '>' } else { '<' };
    println!("{marker} {}", message.text());
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let cli = Cli::parse();
    let responder = EchoResponder::with_delay(Duration::from_millis(cli.delay_ms));
    let (mut conversation, handle) = Conversation::new(Arc::new(responder));
    conversation.subscribe(Arc::new(print_message));
    let owner = conversation.spawn();

    // each line is one press of "send"
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        handle.submit(line.trim());
    }

    // outstanding replies still get printed before exit
    drop(handle);
    let transcript = owner.await?;
    log::debug!("Exchanged {} messages", transcript.len());
    Ok(())
}

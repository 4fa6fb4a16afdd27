//! Sidekick - Entry Point
//!
//! Sets up the async runtime, probes the chat service, and runs the
//! interactive read loop: free text goes through one session turn and any
//! extracted action is executed immediately.

use sidekick::automation::{AutomationEngine, ExecutionResult};
use sidekick::core::config::AppPaths;
use sidekick::core::error::Result;
use sidekick::llm::client::OllamaClient;
use sidekick::session::Session;

use std::io::{self, Write};
use tokio::runtime::Runtime;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("sidekick=debug")
        .init();

    tracing::info!("Sidekick starting...");

    // Async runtime for the chat service calls
    let rt = Runtime::new()?;

    let client = OllamaClient::from_env();

    // Reachability check before dropping into the loop
    if !rt.block_on(client.probe()) {
        println!("⚠ Warning: can't reach the model server at {}!", client.host());
        println!("Make sure Ollama is installed and running:");
        println!("  1. Install: https://ollama.ai");
        println!("  2. Run: ollama serve");
        println!("  3. Pull a model: ollama pull {}", client.model());
        println!();
        print!("Continue anyway? (y/n): ");
        io::stdout().flush()?;

        let mut answer = String::new();
        io::stdin().read_line(&mut answer)?;
        if !answer.trim().eq_ignore_ascii_case("y") {
            return Ok(());
        }
    }

    let engine = AutomationEngine::new(AppPaths::from_env());
    let mut session = Session::new(client);

    println!();
    println!("=== SIDEKICK ===");
    println!("Your chill desktop assistant");
    println!();
    println!("Try commands like:");
    println!("  - \"Let's start a lazy day\"");
    println!("  - \"Let's work on my project\"");
    println!("  - \"Open Discord and Steam\"");
    println!();
    println!("Type 'quit' to leave, 'reset' to clear the conversation");
    println!();

    // Main read loop
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }
        let input = input.trim();

        if input.is_empty() {
            continue;
        }

        match input.to_lowercase().as_str() {
            "quit" | "exit" | "bye" | "q" => {
                println!("Sidekick: Later dude!");
                break;
            }
            "clear" | "reset" => {
                session.reset();
                println!("[Conversation reset]");
                continue;
            }
            _ => {}
        }

        let outcome = rt.block_on(session.turn(input));
        println!("Sidekick: {}", outcome.reply);

        if let Some(action) = outcome.action {
            println!("[Executing automation...]");
            report_execution(&engine.execute(Some(&action)));
        }
    }

    Ok(())
}

/// Print the outcome of one executed action
fn report_execution(result: &ExecutionResult) {
    match result {
        ExecutionResult::Success { results } => {
            println!("✓ Done!");
            for (name, ok) in results {
                if !ok {
                    println!("  (couldn't launch {})", name);
                }
            }
        }
        ExecutionResult::UnknownAction { action } => match action {
            Some(name) => println!("Action status: unknown action '{}'", name),
            None => println!("Action status: unknown action"),
        },
        ExecutionResult::NoAction => println!("Action status: nothing to do"),
    }
}

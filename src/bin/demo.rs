//! Automation showcase without the chat service
//!
//! Runs canned requests straight through the engine, so the launch and
//! browser-routing paths can be exercised with no model installed.

use sidekick::automation::{AutomationEngine, ExecutionResult};
use sidekick::core::config::AppPaths;
use sidekick::llm::parser::{ActionRequest, AppTarget};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("sidekick=info")
        .init();

    println!("============================================================");
    println!("  Sidekick Demo - Automation Showcase");
    println!("============================================================");
    println!();

    let engine = AutomationEngine::new(AppPaths::from_env());

    run_demo(
        &engine,
        "Lazy Day Mode",
        "\"Let's start a lazy day\"",
        &ActionRequest::LazyMode,
    );
    run_demo(
        &engine,
        "Work Mode",
        "\"Let's work on my project\"",
        &ActionRequest::WorkMode,
    );
    run_demo(
        &engine,
        "Open Custom Apps",
        "\"Open YouTube and Gmail\"",
        &ActionRequest::OpenApps(vec![AppTarget::new("youtube"), AppTarget::new("gmail")]),
    );

    println!("============================================================");
    println!("  Demo Complete!");
    println!("============================================================");
    println!();
    println!("To use Sidekick with full chat capabilities:");
    println!("  1. Install Ollama: https://ollama.ai");
    println!("  2. Run: ollama serve");
    println!("  3. Pull a model: ollama pull llama2");
    println!("  4. Run: sidekick");
}

fn run_demo(engine: &AutomationEngine, title: &str, simulated: &str, request: &ActionRequest) {
    println!("Demo: {}", title);
    println!("  Simulating: {}", simulated);

    match engine.execute(Some(request)) {
        ExecutionResult::Success { results } => {
            println!("  ✓ Done!");
            for (name, ok) in &results {
                println!("    {}: {}", name, if *ok { "ok" } else { "failed" });
            }
        }
        other => println!("  Status: {:?}", other),
    }
    println!();
}

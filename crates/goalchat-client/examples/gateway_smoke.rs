//! Smoke test for a running gateway.
//!
//! Opens a conversation with the built-in prompt, sends one user turn and
//! prints what the controller made of the replies. Nothing is written to
//! disk.
//!
//! Usage:
//!   GOALCHAT_GATEWAY_URL=http://localhost:3000 \
//!   cargo run -p goalchat-client --example gateway_smoke -- "I want to travel to the USA"

use goalchat_client::controller::{Controller, TurnOutcome};
use goalchat_client::gateway::HttpGateway;
use goalchat_client::render;
use goalchat_storage::store::MemoryStore;

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt().with_env_filter("info").init();

    let url = std::env::var("GOALCHAT_GATEWAY_URL")
        .unwrap_or_else(|_| "http://localhost:3000".to_string());
    let message = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "I want to travel to the USA".to_string());

    let mut controller = Controller::load(MemoryStore::new(), HttpGateway::new(&url));

    println!("gateway: {url}");
    let outcome = controller.reset();
    println!("reset: {outcome:?}");
    if let TurnOutcome::Failed(e) = outcome {
        return Err(eyre::eyre!("reset failed: {e}"));
    }

    let outcome = controller.submit(&message);
    println!("submit: {outcome:?}");
    if let TurnOutcome::Failed(e) = outcome {
        return Err(eyre::eyre!("submit failed: {e}"));
    }

    for message in controller.visible_messages() {
        if let Some(line) = render::message(message) {
            println!("{line}");
        }
    }
    println!("{}", render::goals(controller.goals()));

    Ok(())
}

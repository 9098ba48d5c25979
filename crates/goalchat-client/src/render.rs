//! Plain-text rendering for the terminal front end.

use std::io::{self, Write};

use goalchat_core::models::chat::{ChatMessage, Role};
use goalchat_core::models::goal::Goal;
use goalchat_storage::store::KeyValueStore;

use crate::controller::{Controller, PendingTurn, TurnOutcome};
use crate::gateway::Gateway;

pub const LOADING: &str = "coach is thinking...";

/// Show the loading line, then block on the gateway for `pending`.
pub fn dispatch_with_indicator<S: KeyValueStore, G: Gateway>(
    controller: &mut Controller<S, G>,
    pending: PendingTurn,
    out: &mut impl Write,
) -> io::Result<TurnOutcome> {
    writeln!(out, "{LOADING}")?;
    out.flush()?;
    Ok(controller.dispatch(pending))
}

/// One chat bubble. System turns are not rendered.
pub fn message(message: &ChatMessage) -> Option<String> {
    let speaker = match message.role() {
        Role::User => "you",
        Role::Assistant => "coach",
        Role::System => return None,
    };
    Some(format!("{speaker}> {}", message.visible_text()))
}

/// The goal cards, numbered from 1.
pub fn goals(goals: &[Goal]) -> String {
    if goals.is_empty() {
        return "No goals yet.".to_string();
    }

    let mut out = String::from("Your study goals:\n");
    for (i, goal) in goals.iter().enumerate() {
        out.push_str(&format!("  {}. {}\n     focus: {}\n", i + 1, goal.title, goal.focus));
    }
    out.pop();
    out
}

/// A one-line notice for outcomes the user should know about.
pub fn outcome_notice(outcome: &TurnOutcome) -> Option<String> {
    match outcome {
        TurnOutcome::Stored => Some(
            "(not sent: no conversation yet, type /reset to start one)".to_string(),
        ),
        TurnOutcome::Busy => Some("(still waiting for the coach's last reply)".to_string()),
        TurnOutcome::Failed(message) => Some(format!("(could not reach the coach: {message})")),
        TurnOutcome::Replied { goals_added } if *goals_added > 0 => Some(format!(
            "(saved {goals_added} goal{}, type /goals to see them)",
            if *goals_added == 1 { "" } else { "s" }
        )),
        TurnOutcome::Replied { .. } | TurnOutcome::Ignored | TurnOutcome::Discarded => None,
    }
}

pub const HELP: &str = "\
Commands:
  /reset   start a new conversation with the current prompt
  /goals   show the goals collected so far
  /help    show this help
  /quit    leave";

//! Conversation controller.
//!
//! Owns the history, the goal list and the request phase, and is the only
//! place that mutates them. Every history mutation is written to the store
//! after the in-memory update. Store failures are logged and never abort a
//! turn.
//!
//! A turn is split in two so a front end can show a loading indicator, or run
//! the gateway call elsewhere, between the halves:
//!
//! 1. [`Controller::begin_turn`] appends the user turn and moves to
//!    [`Phase::Awaiting`], handing back a [`PendingTurn`].
//! 2. [`Controller::dispatch`] performs the gateway call and applies its
//!    result through [`Controller::complete_turn`], returning to
//!    [`Phase::Idle`] whatever happens.
//!
//! [`Controller::submit`] runs both halves back to back.

use tracing::{debug, error, info, warn};

use goalchat_core::keys;
use goalchat_core::models::chat::{ChatMessage, Role};
use goalchat_core::models::goal::Goal;
use goalchat_core::prompt::DEFAULT_SYSTEM_PROMPT;
use goalchat_storage::error::StorageError;
use goalchat_storage::state::{load_state, save_state};
use goalchat_storage::store::KeyValueStore;

use crate::error::GatewayError;
use crate::gateway::Gateway;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Awaiting,
}

/// What a submit or reset did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Input was blank; nothing changed.
    Ignored,
    /// The user turn was recorded but not sent because no system turn has
    /// been established yet.
    Stored,
    /// A request is already in flight; the submission was rejected.
    Busy,
    /// The assistant replied and `goals_added` goals were extracted.
    Replied { goals_added: usize },
    /// The gateway call failed. The user turn stays in the history.
    Failed(String),
    /// The reply belonged to a conversation that has since been reset.
    Discarded,
}

/// Result of [`Controller::begin_turn`].
#[derive(Debug)]
pub enum TurnStart {
    /// The caller must dispatch this turn to the gateway.
    Send(PendingTurn),
    /// The turn finished without a gateway call.
    Finished(TurnOutcome),
}

/// A history snapshot awaiting a gateway reply.
#[derive(Debug, Clone)]
pub struct PendingTurn {
    generation: u64,
    history: Vec<ChatMessage>,
}

impl PendingTurn {
    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }
}

pub struct Controller<S, G> {
    store: S,
    gateway: G,
    system_prompt: String,
    history: Vec<ChatMessage>,
    goals: Vec<Goal>,
    phase: Phase,
    /// Bumped on every reset so replies to an abandoned conversation can be
    /// recognised and dropped.
    generation: u64,
}

impl<S: KeyValueStore, G: Gateway> Controller<S, G> {
    /// Restore the prompt and history from the store.
    ///
    /// Missing or unreadable state yields the default prompt and an empty
    /// history. Goals are rebuilt from the assistant turns in the history,
    /// in order.
    pub fn load(store: S, gateway: G) -> Self {
        let system_prompt = match store.load(keys::SYSTEM_PROMPT) {
            Ok(Some(prompt)) if !prompt.is_empty() => prompt,
            Ok(_) => DEFAULT_SYSTEM_PROMPT.to_string(),
            Err(e) => {
                warn!(error = %e, "could not read stored prompt, using default");
                DEFAULT_SYSTEM_PROMPT.to_string()
            }
        };

        let history: Vec<ChatMessage> = match load_state(&store, keys::CHAT_MESSAGES) {
            Ok(Some(history)) => history,
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(error = %e, "could not read stored history, starting empty");
                Vec::new()
            }
        };

        let goals: Vec<Goal> = history
            .iter()
            .flat_map(|message| message.goals().iter().cloned())
            .collect();

        info!(
            messages = history.len(),
            goals = goals.len(),
            "conversation loaded"
        );

        Self {
            store,
            gateway,
            system_prompt,
            history,
            goals,
            phase: Phase::Idle,
            generation: 0,
        }
    }

    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }

    /// Turns the presentation layer renders, in order.
    pub fn visible_messages(&self) -> impl Iterator<Item = &ChatMessage> {
        self.history.iter().filter(|m| m.is_displayed())
    }

    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Awaiting
    }

    /// Store a new system prompt. It takes effect on the next reset.
    pub fn set_system_prompt(&mut self, prompt: &str) -> Result<(), StorageError> {
        self.store.save(keys::SYSTEM_PROMPT, prompt)?;
        self.system_prompt = if prompt.is_empty() {
            DEFAULT_SYSTEM_PROMPT.to_string()
        } else {
            prompt.to_string()
        };
        info!(len = self.system_prompt.len(), "system prompt saved");
        Ok(())
    }

    /// Submit user input and wait for the assistant's reply.
    pub fn submit(&mut self, input: &str) -> TurnOutcome {
        match self.begin_turn(input) {
            TurnStart::Send(pending) => self.dispatch(pending),
            TurnStart::Finished(outcome) => outcome,
        }
    }

    /// Record user input and, when a conversation is established, move to
    /// [`Phase::Awaiting`].
    pub fn begin_turn(&mut self, input: &str) -> TurnStart {
        if input.trim().is_empty() {
            return TurnStart::Finished(TurnOutcome::Ignored);
        }
        if self.phase == Phase::Awaiting {
            debug!("submission rejected while awaiting a reply");
            return TurnStart::Finished(TurnOutcome::Busy);
        }

        let had_history = !self.history.is_empty();
        self.history.push(ChatMessage::user(input));
        self.persist_history();

        if !had_history {
            debug!("no system turn yet, user turn stored without sending");
            return TurnStart::Finished(TurnOutcome::Stored);
        }

        TurnStart::Send(self.start_request())
    }

    /// Perform the gateway call for `pending` and apply the result.
    pub fn dispatch(&mut self, pending: PendingTurn) -> TurnOutcome {
        let result = self.gateway.send(pending.history());
        self.complete_turn(pending, result)
    }

    /// Apply a gateway result to the conversation and return to
    /// [`Phase::Idle`].
    pub fn complete_turn(
        &mut self,
        pending: PendingTurn,
        result: Result<Vec<ChatMessage>, GatewayError>,
    ) -> TurnOutcome {
        if pending.generation != self.generation {
            debug!(
                pending = pending.generation,
                current = self.generation,
                "dropping reply for a reset conversation"
            );
            return TurnOutcome::Discarded;
        }

        self.phase = Phase::Idle;

        let reply = match result.and_then(|reply| validate_reply(&pending, reply)) {
            Ok(reply) => reply,
            Err(e) => {
                error!(error = %e, "completion request failed");
                return TurnOutcome::Failed(e.to_string());
            }
        };

        let new_goals = reply
            .last()
            .map(|message| message.goals().to_vec())
            .unwrap_or_default();
        let goals_added = new_goals.len();
        self.goals.extend(new_goals);

        self.history = reply;
        self.persist_history();

        info!(
            messages = self.history.len(),
            goals_added,
            goals = self.goals.len(),
            "assistant turn applied"
        );

        TurnOutcome::Replied { goals_added }
    }

    /// Start over with the current system prompt and let the assistant open
    /// the conversation.
    pub fn reset(&mut self) -> TurnOutcome {
        let pending = self.begin_reset();
        self.dispatch(pending)
    }

    /// Replace the history with a single system turn, clear the goals and
    /// move to [`Phase::Awaiting`]. Any reply still outstanding for the old
    /// conversation will be discarded.
    pub fn begin_reset(&mut self) -> PendingTurn {
        self.generation += 1;
        self.history = vec![ChatMessage::system(self.system_prompt.as_str())];
        self.goals.clear();
        self.persist_history();

        info!(generation = self.generation, "conversation reset");

        self.start_request()
    }

    fn start_request(&mut self) -> PendingTurn {
        self.phase = Phase::Awaiting;
        PendingTurn {
            generation: self.generation,
            history: self.history.clone(),
        }
    }

    fn persist_history(&self) {
        if let Err(e) = save_state(&self.store, keys::CHAT_MESSAGES, &self.history) {
            warn!(error = %e, "failed to persist history");
        }
    }
}

/// The gateway must hand back a history ending in an assistant turn.
fn validate_reply(
    pending: &PendingTurn,
    reply: Vec<ChatMessage>,
) -> Result<Vec<ChatMessage>, GatewayError> {
    match reply.last() {
        Some(last) if last.role() == Role::Assistant => {}
        _ => return Err(GatewayError::MissingReply),
    }

    if reply.len() != pending.history.len() + 1 {
        warn!(
            sent = pending.history.len(),
            received = reply.len(),
            "gateway reply length differs from sent history plus one"
        );
    }

    Ok(reply)
}

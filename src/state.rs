use std::rc::Rc;

use yew::functional::Reducible;

use crate::types::LogEntry;

/// Banner text shown for every failed poll, regardless of failure kind.
pub const FETCH_ERROR_MESSAGE: &str =
    "Failed to fetch logs. Make sure the Game Agent is running.";

/// The single reconciled snapshot of loading/error/data status that drives
/// rendering. The poll cycle in `app.rs` is its only writer; views only read
/// it. Entries are never cleared by a failed poll, so last-known-good data
/// survives transient agent outages even while the error banner is up.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchState {
    pub loading: bool,
    pub error: Option<String>,
    pub entries: Vec<LogEntry>,
}

impl Default for FetchState {
    fn default() -> Self {
        FetchState {
            loading: true,
            error: None,
            entries: Vec::new(),
        }
    }
}

/// One transition of the poll cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchAction {
    /// A request went out; the loading indicator takes over until it lands.
    PollStarted,
    /// The request succeeded; the payload replaces the entries wholesale.
    PollSucceeded(Vec<LogEntry>),
    /// The request failed at the transport, HTTP, or decode level.
    PollFailed,
}

/// Which of the mutually exclusive views is active for a given state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    Loading,
    Error,
    Empty,
    Table,
}

impl FetchState {
    /// Applies one poll-cycle transition and returns the next snapshot.
    pub fn apply(&self, action: FetchAction) -> FetchState {
        match action {
            FetchAction::PollStarted => FetchState {
                loading: true,
                ..self.clone()
            },
            FetchAction::PollSucceeded(entries) => FetchState {
                loading: false,
                error: None,
                entries,
            },
            FetchAction::PollFailed => FetchState {
                loading: false,
                error: Some(FETCH_ERROR_MESSAGE.to_string()),
                entries: self.entries.clone(),
            },
        }
    }

    /// Strict display precedence: Loading > Error > Empty > Table.
    ///
    /// Loading wins over everything, including stale entries during a
    /// re-poll, so the table is hidden on every tick while a request is
    /// outstanding. An error banner likewise hides (but does not discard)
    /// previously fetched entries.
    pub fn render_mode(&self) -> RenderMode {
        if self.loading {
            RenderMode::Loading
        } else if self.error.is_some() {
            RenderMode::Error
        } else if self.entries.is_empty() {
            RenderMode::Empty
        } else {
            RenderMode::Table
        }
    }
}

impl Reducible for FetchState {
    type Action = FetchAction;

    fn reduce(self: Rc<Self>, action: FetchAction) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn entry(command: &str) -> LogEntry {
        LogEntry {
            timestamp: "12:00:01".to_string(),
            command: command.to_string(),
            transcript: format!("{command} now"),
            result: "ok".to_string(),
        }
    }

    #[test]
    fn initial_state_is_loading_with_no_entries() {
        let state = FetchState::default();
        assert_eq!(state.render_mode(), RenderMode::Loading);
        assert_eq!(state.error, None);
        assert!(state.entries.is_empty());
    }

    #[test]
    fn unreachable_agent_on_first_poll_shows_error_banner() {
        let state = FetchState::default().apply(FetchAction::PollFailed);
        assert_eq!(state.render_mode(), RenderMode::Error);
        assert_eq!(
            state.error.as_deref(),
            Some("Failed to fetch logs. Make sure the Game Agent is running.")
        );
    }

    #[test]
    fn empty_payload_renders_empty_state() {
        let state = FetchState::default().apply(FetchAction::PollSucceeded(Vec::new()));
        assert_eq!(state.render_mode(), RenderMode::Empty);
        assert_eq!(state.error, None);
    }

    #[test]
    fn successful_poll_renders_table_with_payload() {
        let state = FetchState::default().apply(FetchAction::PollSucceeded(vec![entry("jump")]));
        assert_eq!(state.render_mode(), RenderMode::Table);
        assert_eq!(state.entries, vec![entry("jump")]);
    }

    #[test]
    fn failed_poll_hides_but_retains_previous_entries() {
        let state = FetchState::default()
            .apply(FetchAction::PollSucceeded(vec![entry("jump")]))
            .apply(FetchAction::PollStarted)
            .apply(FetchAction::PollFailed);
        assert_eq!(state.render_mode(), RenderMode::Error);
        assert_eq!(state.entries, vec![entry("jump")]);
    }

    #[test]
    fn success_after_failures_clears_error_without_reload() {
        let state = FetchState::default()
            .apply(FetchAction::PollFailed)
            .apply(FetchAction::PollStarted)
            .apply(FetchAction::PollFailed)
            .apply(FetchAction::PollStarted)
            .apply(FetchAction::PollSucceeded(vec![entry("pause")]));
        assert_eq!(state.error, None);
        assert_eq!(state.render_mode(), RenderMode::Table);
    }

    #[test]
    fn consecutive_payloads_replace_entries_wholesale() {
        let state = FetchState::default()
            .apply(FetchAction::PollSucceeded(vec![entry("jump"), entry("duck")]))
            .apply(FetchAction::PollStarted)
            .apply(FetchAction::PollSucceeded(vec![entry("pause")]));
        assert_eq!(state.entries, vec![entry("pause")]);
    }

    #[test]
    fn unchanged_payload_is_idempotent() {
        let first = FetchState::default().apply(FetchAction::PollSucceeded(vec![entry("jump")]));
        let second = first
            .apply(FetchAction::PollStarted)
            .apply(FetchAction::PollSucceeded(vec![entry("jump")]));
        assert_eq!(first, second);
    }

    #[test]
    fn loading_takes_precedence_over_error_and_entries() {
        let state = FetchState {
            loading: true,
            error: Some(FETCH_ERROR_MESSAGE.to_string()),
            entries: vec![entry("jump")],
        };
        assert_eq!(state.render_mode(), RenderMode::Loading);
    }

    #[test]
    fn repoll_hides_the_table_while_in_flight() {
        let state = FetchState::default()
            .apply(FetchAction::PollSucceeded(vec![entry("jump")]))
            .apply(FetchAction::PollStarted);
        assert_eq!(state.render_mode(), RenderMode::Loading);
        assert_eq!(state.entries, vec![entry("jump")]);
    }

    #[test]
    fn exactly_one_render_mode_per_state() {
        // Every reachable combination maps to a single mode.
        let reachable = [
            FetchState::default(),
            FetchState::default().apply(FetchAction::PollFailed),
            FetchState::default().apply(FetchAction::PollSucceeded(Vec::new())),
            FetchState::default().apply(FetchAction::PollSucceeded(vec![entry("jump")])),
            FetchState::default()
                .apply(FetchAction::PollSucceeded(vec![entry("jump")]))
                .apply(FetchAction::PollFailed),
            FetchState::default()
                .apply(FetchAction::PollFailed)
                .apply(FetchAction::PollStarted),
        ];
        for state in reachable {
            let modes = [
                RenderMode::Loading,
                RenderMode::Error,
                RenderMode::Empty,
                RenderMode::Table,
            ];
            let active = modes
                .iter()
                .filter(|mode| state.render_mode() == **mode)
                .count();
            assert_eq!(active, 1, "state {state:?} must map to exactly one mode");
        }
    }
}

//! Lifecycle of the page's async action buttons (run now, delete, save).

/// Text the orchestration starter returns while a previous run is still active.
pub const ALREADY_RUNNING: &str = "Already running. Please wait for the current instance to finish";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ActionStatus {
    #[default]
    Idle,
    Confirming,
    InFlight,
    Succeeded(String),
    Failed(String),
}

impl ActionStatus {
    /// Open the confirmation prompt. Allowed from any state, including
    /// `InFlight`: re-invocation is not blocked.
    pub fn begin_confirm(&mut self) {
        *self = Self::Confirming;
    }

    /// Resolve the prompt. Returns `true` when the request must be sent.
    pub fn confirm(&mut self, accepted: bool) -> bool {
        if !matches!(self, Self::Confirming) {
            return false;
        }
        *self = if accepted { Self::InFlight } else { Self::Idle };
        accepted
    }

    /// Start without a prompt (form submission).
    pub fn start(&mut self) {
        *self = Self::InFlight;
    }

    pub fn finish<E: ToString>(&mut self, result: Result<String, E>) {
        *self = match result {
            Ok(message) => Self::Succeeded(message),
            Err(e) => Self::Failed(e.to_string()),
        };
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(self, Self::InFlight)
    }

    pub fn succeeded_message(&self) -> Option<&str> {
        match self {
            Self::Succeeded(message) => Some(message),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(e) => Some(e),
            _ => None,
        }
    }
}

/// Interpretation of a successful run-now response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunNowOutcome {
    Started(String),
    /// Busy conflict: informational, not an error.
    AlreadyRunning(String),
}

impl RunNowOutcome {
    pub fn classify(results: &str) -> Self {
        if results == ALREADY_RUNNING {
            Self::AlreadyRunning(results.to_string())
        } else {
            Self::Started(results.to_string())
        }
    }

    pub fn busy_message(&self) -> Option<&str> {
        match self {
            Self::AlreadyRunning(message) => Some(message),
            Self::Started(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirmed_action_goes_in_flight() {
        let mut status = ActionStatus::default();
        status.begin_confirm();
        assert_eq!(status, ActionStatus::Confirming);
        assert!(status.confirm(true));
        assert!(status.is_in_flight());
        status.finish::<String>(Ok("Removed".into()));
        assert_eq!(status.succeeded_message(), Some("Removed"));
    }

    #[test]
    fn cancelled_prompt_returns_to_idle() {
        let mut status = ActionStatus::Failed("old".into());
        status.begin_confirm();
        assert!(!status.confirm(false));
        assert_eq!(status, ActionStatus::Idle);
    }

    #[test]
    fn confirm_without_prompt_is_ignored() {
        let mut status = ActionStatus::Idle;
        assert!(!status.confirm(true));
        assert_eq!(status, ActionStatus::Idle);
    }

    #[test]
    fn reinvocation_while_in_flight_is_allowed() {
        let mut status = ActionStatus::Idle;
        status.begin_confirm();
        status.confirm(true);
        status.begin_confirm();
        assert!(status.confirm(true));
        assert!(status.is_in_flight());
    }

    #[test]
    fn failure_keeps_message() {
        let mut status = ActionStatus::InFlight;
        status.finish(Err("HTTP error: 502"));
        assert_eq!(status.error(), Some("HTTP error: 502"));
        assert!(status.succeeded_message().is_none());
    }

    #[test]
    fn already_running_is_shown_verbatim_and_retry_stays_possible() {
        let outcome = RunNowOutcome::classify(ALREADY_RUNNING);
        assert_eq!(outcome.busy_message(), Some(ALREADY_RUNNING));

        let mut status = ActionStatus::InFlight;
        status.finish::<String>(Ok(ALREADY_RUNNING.to_string()));
        assert!(!status.is_in_flight());
        status.begin_confirm();
        assert!(status.confirm(true));
    }

    #[test]
    fn other_results_count_as_started() {
        let outcome = RunNowOutcome::classify("Started standards run");
        assert_eq!(outcome, RunNowOutcome::Started("Started standards run".into()));
        assert!(outcome.busy_message().is_none());
    }
}

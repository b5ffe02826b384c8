//! Completion gate: decides when the finalize action is offered.
//!
//! The gate is open when every traveler has a frozen answer and, if the
//! session requires it, the date range is locked. It only reads the
//! session; callers re-evaluate it after every submit, modify, lock and
//! unlock.

use chrono::Utc;
use tracing::{error, info};

use crate::error::{CoreError, CoreResult};
use crate::payload::SubmissionPayload;
use crate::session::SessionState;
use crate::sink::{PayloadSink, SaveReceipt};

/// Whether the session is ready to finalize.
pub fn is_complete(session: &SessionState) -> bool {
    let all_submitted = session
        .travelers()
        .all(|id| session.form(id).map(|f| f.is_submitted()).unwrap_or(false));
    let dates_ready = !session.config().require_date_lock || session.dates().is_locked();
    all_submitted && dates_ready
}

/// What a re-evaluation did to the finalize action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateChange {
    /// Finalize just became available
    Opened,
    /// Finalize was withdrawn
    Closed,
    Unchanged,
}

/// Tracks whether the finalize action is currently shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompletionGate {
    open: bool,
}

impl CompletionGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Recompute the predicate and report the edge, if any.
    ///
    /// Repeated evaluations in the same state report `Unchanged`, so the
    /// finalize action is created once and never duplicated.
    pub fn evaluate(&mut self, session: &SessionState) -> GateChange {
        let complete = is_complete(session);
        let change = match (self.open, complete) {
            (false, true) => GateChange::Opened,
            (true, false) => GateChange::Closed,
            _ => GateChange::Unchanged,
        };
        self.open = complete;

        match change {
            GateChange::Opened => info!(
                travelers = session.traveler_count(),
                "all travelers submitted; finalize available"
            ),
            GateChange::Closed => info!(
                pending = session.pending().len(),
                "finalize withdrawn"
            ),
            GateChange::Unchanged => {}
        }
        change
    }

    /// Assemble the payload and hand it to `sink`.
    ///
    /// Fails without touching the sink unless the gate is open and the
    /// predicate still holds for `session`. A sink failure is logged and
    /// returned; frozen answers are left as they are.
    pub async fn finalize<S: PayloadSink>(
        &self,
        session: &SessionState,
        sink: &S,
    ) -> CoreResult<SaveReceipt> {
        let complete = is_complete(session);
        if complete && !self.open {
            return Err(CoreError::Incomplete(
                "completion gate has not been evaluated since the last change".into(),
            ));
        }
        if !complete {
            let pending = session.pending();
            let reason = if pending.is_empty() {
                "date range is not locked".to_string()
            } else {
                let numbers: Vec<String> = pending.iter().map(ToString::to_string).collect();
                format!("travelers {} have not submitted", numbers.join(", "))
            };
            return Err(CoreError::Incomplete(reason));
        }

        let payload = SubmissionPayload::assemble(session, Utc::now());
        match sink.persist(&payload).await {
            Ok(receipt) => {
                info!(travelers = payload.travelers.len(), %receipt, "answers saved");
                Ok(receipt)
            }
            Err(e) => {
                error!("Failed to save answers: {}", e);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SessionConfig;
    use crate::types::TravelerId;

    fn id(n: u32) -> TravelerId {
        TravelerId::new(n).unwrap()
    }

    fn submit(session: &mut SessionState, n: u32) {
        let form = session.form_mut(id(n)).unwrap();
        form.set_destination("europe");
        form.set_starting_point("asia");
        session.submit(id(n)).unwrap();
    }

    #[test]
    fn test_opens_only_when_all_submitted() {
        let mut session = SessionState::new(3, SessionConfig::default()).unwrap();
        let mut gate = CompletionGate::new();

        submit(&mut session, 1);
        assert_eq!(gate.evaluate(&session), GateChange::Unchanged);
        submit(&mut session, 2);
        assert_eq!(gate.evaluate(&session), GateChange::Unchanged);
        assert!(!gate.is_open());

        submit(&mut session, 3);
        assert_eq!(gate.evaluate(&session), GateChange::Opened);
        assert!(gate.is_open());
    }

    #[test]
    fn test_repeated_evaluation_does_not_reopen() {
        let mut session = SessionState::new(1, SessionConfig::default()).unwrap();
        let mut gate = CompletionGate::new();
        submit(&mut session, 1);
        assert_eq!(gate.evaluate(&session), GateChange::Opened);
        assert_eq!(gate.evaluate(&session), GateChange::Unchanged);
    }

    #[test]
    fn test_modify_closes_gate() {
        let mut session = SessionState::new(2, SessionConfig::default()).unwrap();
        let mut gate = CompletionGate::new();
        submit(&mut session, 1);
        submit(&mut session, 2);
        gate.evaluate(&session);

        session.modify(id(2)).unwrap();
        assert_eq!(gate.evaluate(&session), GateChange::Closed);
        assert!(!gate.is_open());
    }

    #[test]
    fn test_date_lock_required_when_configured() {
        let config = SessionConfig {
            require_date_lock: true,
            ..Default::default()
        };
        let mut session = SessionState::new(1, config).unwrap();
        let mut gate = CompletionGate::new();
        submit(&mut session, 1);
        assert_eq!(gate.evaluate(&session), GateChange::Unchanged);

        let day = chrono::NaiveDate::from_ymd_opt(2026, 7, 1).unwrap();
        session.dates_mut().set_start(Some(day)).unwrap();
        session.dates_mut().set_end(Some(day)).unwrap();
        session.dates_mut().lock().unwrap();
        assert_eq!(gate.evaluate(&session), GateChange::Opened);

        session.dates_mut().unlock();
        assert_eq!(gate.evaluate(&session), GateChange::Closed);
    }

    #[test]
    fn test_date_lock_ignored_by_default() {
        let mut session = SessionState::new(1, SessionConfig::default()).unwrap();
        submit(&mut session, 1);
        assert!(is_complete(&session));
    }

    #[tokio::test]
    async fn test_finalize_requires_evaluated_gate() {
        let dir = tempfile::tempdir().unwrap();
        let sink = crate::sink::JsonFileSink::new(dir.path());
        let mut session = SessionState::new(1, SessionConfig::default()).unwrap();
        let mut gate = CompletionGate::new();
        submit(&mut session, 1);

        let err = gate.finalize(&session, &sink).await.unwrap_err();
        assert!(matches!(err, CoreError::Incomplete(_)));

        gate.evaluate(&session);
        assert!(gate.finalize(&session, &sink).await.is_ok());
    }

    #[tokio::test]
    async fn test_finalize_rejects_stale_open_gate() {
        let dir = tempfile::tempdir().unwrap();
        let sink = crate::sink::JsonFileSink::new(dir.path());
        let mut session = SessionState::new(1, SessionConfig::default()).unwrap();
        let mut gate = CompletionGate::new();
        submit(&mut session, 1);
        gate.evaluate(&session);

        session.modify(id(1)).unwrap();
        let err = gate.finalize(&session, &sink).await.unwrap_err();
        assert!(matches!(err, CoreError::Incomplete(ref reason) if reason.contains('1')));
    }
}

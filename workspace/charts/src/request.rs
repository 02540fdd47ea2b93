//! Request lifecycle shared by the chart and forecast controllers.
//!
//! `Idle -> Loading -> Ready | Failed`, re-entrant from either terminal
//! state. Each trigger hands out a [`Ticket`]; only the ticket of the most
//! recently issued request may change the bound payload, so a late answer to
//! an older request is dropped instead of overwriting newer data.

use common::RequestError;
use tracing::{debug, info, warn};

/// Borrowed view of a controller's state.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestState<P> {
    Idle,
    Loading,
    Ready(P),
    Failed(RequestError),
}

impl<P> RequestState<P> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// What happens to the bound payload when a new request starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerPolicy {
    /// Keep showing the previous payload until the new one arrives.
    KeepPrevious,
    /// Drop the previous payload as soon as the request starts.
    ClearPrevious,
}

/// Handle for one issued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket {
    seq: u64,
}

impl Ticket {
    pub fn seq(&self) -> u64 {
        self.seq
    }
}

/// Outcome of handing a response to a controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The response became the bound state (payload or failure).
    Applied,
    /// A newer request was issued since; the response was dropped.
    Stale,
}

#[derive(Debug, Clone, PartialEq)]
enum Status {
    Idle,
    Loading,
    Ready,
    Failed(RequestError),
}

/// State machine for one request flow with at most one request in flight.
#[derive(Debug, Clone)]
pub struct RequestController<P> {
    status: Status,
    bound: Option<P>,
    policy: TriggerPolicy,
    latest: u64,
}

impl<P> RequestController<P> {
    pub fn new(policy: TriggerPolicy) -> Self {
        Self {
            status: Status::Idle,
            bound: None,
            policy,
            latest: 0,
        }
    }

    pub fn policy(&self) -> TriggerPolicy {
        self.policy
    }

    pub fn is_loading(&self) -> bool {
        self.status == Status::Loading
    }

    /// The payload currently on display. While loading under
    /// [`TriggerPolicy::KeepPrevious`] this is the previous result.
    pub fn bound(&self) -> Option<&P> {
        self.bound.as_ref()
    }

    pub fn state(&self) -> RequestState<&P> {
        match (&self.status, &self.bound) {
            (Status::Idle, _) => RequestState::Idle,
            (Status::Loading, _) => RequestState::Loading,
            (Status::Ready, Some(payload)) => RequestState::Ready(payload),
            (Status::Ready, None) => RequestState::Idle,
            (Status::Failed(err), _) => RequestState::Failed(err.clone()),
        }
    }

    /// Sequence number of the most recently issued request, 0 if none.
    pub fn latest_seq(&self) -> u64 {
        self.latest
    }

    fn is_latest(&self, ticket: Ticket) -> bool {
        ticket.seq == self.latest && self.latest != 0
    }

    /// Starts a request. Returns `None` while another request is loading;
    /// repeated triggers are rejected, not queued.
    pub fn trigger(&mut self) -> Option<Ticket> {
        if self.is_loading() {
            debug!(in_flight = self.latest, "Trigger rejected while loading");
            return None;
        }

        self.latest += 1;
        self.status = Status::Loading;
        if self.policy == TriggerPolicy::ClearPrevious {
            self.bound = None;
        }
        debug!(seq = self.latest, "Request issued");
        Some(Ticket { seq: self.latest })
    }

    /// Applies the response for `ticket`. Success replaces the bound payload
    /// in one step; failure drops it, so a retry starts from nothing.
    pub fn resolve(&mut self, ticket: Ticket, result: Result<P, RequestError>) -> Resolution {
        if !self.is_latest(ticket) {
            debug!(seq = ticket.seq, latest = self.latest, "Discarding stale response");
            return Resolution::Stale;
        }

        match result {
            Ok(payload) => {
                info!(seq = ticket.seq, "Request completed");
                self.bound = Some(payload);
                self.status = Status::Ready;
            }
            Err(err) => {
                warn!(seq = ticket.seq, error = %err, "Request failed");
                self.status = Status::Failed(err);
                self.bound = None;
            }
        }
        Resolution::Applied
    }

    /// Marks the request for `ticket` as timed out if it is still loading.
    /// The request itself is not cancelled; if it later answers while still
    /// the latest, its answer is applied.
    pub fn expire(&mut self, ticket: Ticket, after_ms: u64) -> bool {
        if !self.is_latest(ticket) || !self.is_loading() {
            return false;
        }
        warn!(seq = ticket.seq, after_ms, "Request timed out");
        self.status = Status::Failed(RequestError::TimedOut { after_ms });
        self.bound = None;
        true
    }

    /// Back to `Idle`, clearing the payload. Ignored while loading.
    pub fn reset(&mut self) -> bool {
        if self.is_loading() {
            return false;
        }
        self.status = Status::Idle;
        self.bound = None;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failure() -> RequestError {
        RequestError::transport("connection refused")
    }

    #[test]
    fn test_trigger_moves_to_loading_and_rejects_repeats() {
        let mut controller: RequestController<u32> = RequestController::new(TriggerPolicy::KeepPrevious);
        assert_eq!(controller.state(), RequestState::Idle);

        let ticket = controller.trigger().unwrap();
        assert_eq!(ticket.seq(), 1);
        assert!(controller.state().is_loading());
        assert!(controller.trigger().is_none());
        assert_eq!(controller.latest_seq(), 1);
    }

    #[test]
    fn test_success_binds_payload() {
        let mut controller = RequestController::new(TriggerPolicy::KeepPrevious);
        let ticket = controller.trigger().unwrap();
        assert_eq!(controller.resolve(ticket, Ok(7)), Resolution::Applied);
        assert_eq!(controller.state(), RequestState::Ready(&7));
    }

    #[test]
    fn test_keep_previous_shows_old_payload_while_loading() {
        let mut controller = RequestController::new(TriggerPolicy::KeepPrevious);
        let first = controller.trigger().unwrap();
        controller.resolve(first, Ok("first"));

        controller.trigger().unwrap();
        assert!(controller.is_loading());
        assert_eq!(controller.bound(), Some(&"first"));
    }

    #[test]
    fn test_clear_previous_drops_old_payload_on_trigger() {
        let mut controller = RequestController::new(TriggerPolicy::ClearPrevious);
        let first = controller.trigger().unwrap();
        controller.resolve(first, Ok("first"));

        controller.trigger().unwrap();
        assert_eq!(controller.bound(), None);
    }

    #[test]
    fn test_failure_is_reentrant() {
        let mut controller = RequestController::new(TriggerPolicy::KeepPrevious);
        let ticket = controller.trigger().unwrap();
        controller.resolve(ticket, Err(failure()));
        assert_eq!(controller.state(), RequestState::Failed(failure()));

        let retry = controller.trigger().unwrap();
        controller.resolve(retry, Ok(1));
        assert_eq!(controller.state(), RequestState::Ready(&1));
    }

    #[test]
    fn test_retry_after_failure_does_not_bring_back_old_payload() {
        let mut controller = RequestController::new(TriggerPolicy::KeepPrevious);
        let first = controller.trigger().unwrap();
        controller.resolve(first, Ok("first"));

        let second = controller.trigger().unwrap();
        controller.resolve(second, Err(failure()));
        assert_eq!(controller.bound(), None);

        controller.trigger().unwrap();
        assert!(controller.is_loading());
        assert_eq!(controller.bound(), None);
    }

    #[test]
    fn test_timeout_drops_kept_payload() {
        let mut controller = RequestController::new(TriggerPolicy::KeepPrevious);
        let first = controller.trigger().unwrap();
        controller.resolve(first, Ok("first"));

        let second = controller.trigger().unwrap();
        assert!(controller.expire(second, 10));
        controller.trigger().unwrap();
        assert_eq!(controller.bound(), None);
    }

    #[test]
    fn test_late_response_from_older_request_is_discarded() {
        let mut controller = RequestController::new(TriggerPolicy::KeepPrevious);
        let a = controller.trigger().unwrap();
        assert!(controller.expire(a, 1000));

        let b = controller.trigger().unwrap();
        assert_eq!(controller.resolve(b, Ok("B")), Resolution::Applied);
        assert_eq!(controller.resolve(a, Ok("A")), Resolution::Stale);
        assert_eq!(controller.state(), RequestState::Ready(&"B"));
    }

    #[test]
    fn test_older_response_while_newer_is_loading_is_discarded() {
        let mut controller = RequestController::new(TriggerPolicy::KeepPrevious);
        let a = controller.trigger().unwrap();
        controller.expire(a, 1000);
        let b = controller.trigger().unwrap();

        assert_eq!(controller.resolve(a, Ok("A")), Resolution::Stale);
        assert!(controller.is_loading());
        assert_eq!(controller.bound(), None);

        controller.resolve(b, Ok("B"));
        assert_eq!(controller.bound(), Some(&"B"));
    }

    #[test]
    fn test_expire_only_affects_latest_loading_request() {
        let mut controller: RequestController<u8> = RequestController::new(TriggerPolicy::KeepPrevious);
        let a = controller.trigger().unwrap();
        controller.resolve(a, Ok(1));
        assert!(!controller.expire(a, 10));
        assert_eq!(controller.state(), RequestState::Ready(&1));

        let b = controller.trigger().unwrap();
        assert!(controller.expire(b, 10));
        assert_eq!(
            controller.state(),
            RequestState::Failed(RequestError::TimedOut { after_ms: 10 })
        );
    }

    #[test]
    fn test_late_answer_to_timed_out_latest_request_is_applied() {
        let mut controller = RequestController::new(TriggerPolicy::KeepPrevious);
        let ticket = controller.trigger().unwrap();
        controller.expire(ticket, 10);
        assert_eq!(controller.resolve(ticket, Ok(5)), Resolution::Applied);
        assert_eq!(controller.state(), RequestState::Ready(&5));
    }

    #[test]
    fn test_reset_returns_to_idle() {
        let mut controller = RequestController::new(TriggerPolicy::KeepPrevious);
        let ticket = controller.trigger().unwrap();
        assert!(!controller.reset());
        controller.resolve(ticket, Ok(3));
        assert!(controller.reset());
        assert_eq!(controller.state(), RequestState::Idle);
        assert_eq!(controller.bound(), None);
    }

    #[test]
    fn test_unknown_ticket_is_stale() {
        let mut controller: RequestController<u8> = RequestController::new(TriggerPolicy::KeepPrevious);
        assert_eq!(controller.resolve(Ticket { seq: 0 }, Ok(1)), Resolution::Stale);
        assert_eq!(controller.state(), RequestState::Idle);
    }
}

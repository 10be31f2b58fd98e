//! The three-state lifecycle cell shared by both augmentation flows.
//!
//! `Idle -> Pending -> Succeeded | Failed`, where the settled states are
//! terminal until an explicit re-trigger. [`Flow::begin`] refuses to start
//! while a run is already pending, and completions carry the [`Ticket`] of
//! the run that produced them so a late-arriving response from a superseded
//! run is discarded instead of overwriting newer state.

/// The observable state of one augmentation flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowState<T> {
  /// Never triggered (or reset).
  Idle,
  /// A run is in flight; triggering again is refused.
  Pending,
  Succeeded(T),
  Failed(String),
}

/// Identifies one run of a flow. Obtained from [`Flow::begin`] and required
/// to settle the state; stale tickets are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// State cell for a single flow.
#[derive(Debug)]
pub struct Flow<T> {
  state: FlowState<T>,
  generation: u64,
}

impl<T> Default for Flow<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T> Flow<T> {
  pub fn new() -> Self {
    Self { state: FlowState::Idle, generation: 0 }
  }

  pub fn state(&self) -> &FlowState<T> {
    &self.state
  }

  pub fn is_pending(&self) -> bool {
    matches!(self.state, FlowState::Pending)
  }

  /// Start a run. Returns `None` while a run is already pending — the
  /// caller must not issue a request in that case. Re-triggering from a
  /// settled state is allowed and resets to `Pending`.
  pub fn begin(&mut self) -> Option<Ticket> {
    if self.is_pending() {
      return None;
    }
    self.generation += 1;
    self.state = FlowState::Pending;
    Some(Ticket(self.generation))
  }

  /// Settle the run identified by `ticket` with a success. Returns whether
  /// the state changed; a stale ticket is silently discarded.
  pub fn succeed(&mut self, ticket: Ticket, value: T) -> bool {
    if !self.owns(ticket) {
      return false;
    }
    self.state = FlowState::Succeeded(value);
    true
  }

  /// Settle the run identified by `ticket` with a failure message.
  pub fn fail(&mut self, ticket: Ticket, message: impl Into<String>) -> bool {
    if !self.owns(ticket) {
      return false;
    }
    self.state = FlowState::Failed(message.into());
    true
  }

  fn owns(&self, ticket: Ticket) -> bool {
    self.is_pending() && ticket.0 == self.generation
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn begin_while_pending_is_refused() {
    let mut flow: Flow<String> = Flow::new();
    let ticket = flow.begin().unwrap();
    assert!(flow.begin().is_none());
    assert!(flow.begin().is_none());
    // The original run still settles normally.
    assert!(flow.succeed(ticket, "ok".into()));
    assert_eq!(*flow.state(), FlowState::Succeeded("ok".into()));
  }

  #[test]
  fn settled_states_can_be_retriggered() {
    let mut flow: Flow<()> = Flow::new();
    let ticket = flow.begin().unwrap();
    assert!(flow.fail(ticket, "timed out"));
    assert_eq!(*flow.state(), FlowState::Failed("timed out".into()));

    let ticket = flow.begin().unwrap();
    assert!(flow.is_pending());
    assert!(flow.succeed(ticket, ()));
  }

  #[test]
  fn stale_completion_is_discarded() {
    let mut flow: Flow<&'static str> = Flow::new();
    let first = flow.begin().unwrap();
    flow.fail(first, "network error");

    // A retry starts; only its own ticket may settle the cell now.
    let second = flow.begin().unwrap();
    assert!(!flow.succeed(first, "late reply from the first run"));
    assert!(flow.is_pending());

    assert!(flow.succeed(second, "fresh reply"));
    assert_eq!(*flow.state(), FlowState::Succeeded("fresh reply"));
  }

  #[test]
  fn completion_without_pending_run_is_ignored() {
    let mut flow: Flow<()> = Flow::new();
    let ticket = flow.begin().unwrap();
    flow.succeed(ticket, ());
    // Duplicate settle of an already-settled run.
    assert!(!flow.fail(ticket, "duplicate"));
    assert_eq!(*flow.state(), FlowState::Succeeded(()));
  }
}

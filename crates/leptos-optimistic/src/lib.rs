//! Leptos Optimistic Toggle Utilities
//!
//! Optimistic boolean mutations for Leptos: flip the displayed value
//! synchronously on user intent, reconcile with the authoritative server
//! response when it settles, roll back on failure.
//!
//! The signal bundle uses `Arc`-backed signals so state can live in a keyed
//! cache outside any single component and the logic can be tested natively.

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;

/// Per-entity optimistic toggle state
#[derive(Clone, Debug)]
pub struct ToggleSignals {
    /// Displayed value (optimistic guess while a mutation is in flight)
    pub flag: ArcRwSignal<bool>,
    /// True while a remote mutation is unsettled; disables the trigger
    pub in_flight: ArcRwSignal<bool>,
}

/// Rollback value captured by an accepted toggle intent.
/// Consumed by [`settle_toggle`], so one intent settles at most once.
#[derive(Debug)]
pub struct PendingToggle {
    rollback: bool,
}

/// Cancellation flag for deferred writes after the owning view is gone.
///
/// Cloned into every settlement continuation; revoked on component cleanup.
#[derive(Clone, Debug)]
pub struct LivenessToken(Arc<AtomicBool>);

impl LivenessToken {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    /// Mark the owning view as discarded
    pub fn revoke(&self) {
        self.0.store(false, Ordering::Relaxed);
    }

    pub fn is_live(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

impl Default for LivenessToken {
    fn default() -> Self {
        Self::new()
    }
}

/// Create a liveness token revoked when the current component unmounts
pub fn use_liveness() -> LivenessToken {
    let token = LivenessToken::new();
    let cleanup = token.clone();
    on_cleanup(move || cleanup.revoke());
    token
}

/// Create toggle signals seeded from the entity's last known server value
pub fn create_toggle_signals(initial: bool) -> ToggleSignals {
    ToggleSignals {
        flag: ArcRwSignal::new(initial),
        in_flight: ArcRwSignal::new(false),
    }
}

/// Synchronous phase of a toggle intent.
///
/// Rejects the intent (returns `None`) while a mutation is already in
/// flight. Otherwise captures the rollback value, flips the displayed flag
/// and marks the entity in flight. Runs in the input event's synchronous
/// window, before any network activity.
pub fn begin_toggle(sigs: &ToggleSignals) -> Option<PendingToggle> {
    if sigs.in_flight.get_untracked() {
        return None;
    }
    let rollback = sigs.flag.get_untracked();
    sigs.flag.set(!rollback);
    sigs.in_flight.set(true);
    Some(PendingToggle { rollback })
}

/// Reconciliation phase, run when the remote mutation settles.
///
/// Writes nothing if the owning view has been discarded. On success the
/// server value wins, even when it disagrees with the optimistic guess.
/// On failure the displayed flag snaps back to the rollback value.
pub fn settle_toggle(
    sigs: &ToggleSignals,
    live: &LivenessToken,
    pending: PendingToggle,
    result: Result<bool, String>,
) {
    if !live.is_live() {
        return;
    }
    match result {
        Ok(server_value) => sigs.flag.set(server_value),
        Err(_) => sigs.flag.set(pending.rollback),
    }
    sigs.in_flight.set(false);
}

/// Drive one full toggle intent: begin, invoke the remote operation exactly
/// once if accepted, settle on settlement.
///
/// Returns whether the intent was accepted.
pub async fn run_toggle<F, Fut>(sigs: ToggleSignals, live: LivenessToken, op: F) -> bool
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<bool, String>>,
{
    let Some(pending) = begin_toggle(&sigs) else {
        return false;
    };
    let result = op().await;
    settle_toggle(&sigs, &live, pending, result);
    true
}

/// Create a trigger closure for a click handler.
///
/// The flip runs synchronously inside the event handler; only the await on
/// the remote call and the reconciliation are deferred.
pub fn make_on_toggle<F, Fut>(
    sigs: ToggleSignals,
    live: LivenessToken,
    op: F,
) -> impl Fn() + Clone + 'static
where
    F: Fn() -> Fut + Clone + 'static,
    Fut: Future<Output = Result<bool, String>> + 'static,
{
    move || {
        let Some(pending) = begin_toggle(&sigs) else {
            return;
        };
        let sigs = sigs.clone();
        let live = live.clone();
        let fut = op();
        spawn_local(async move {
            let result = fut.await;
            settle_toggle(&sigs, &live, pending, result);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use tokio::sync::oneshot;

    #[test]
    fn begin_flips_synchronously_and_marks_in_flight() {
        let sigs = create_toggle_signals(false);

        let pending = begin_toggle(&sigs);
        assert!(pending.is_some());
        assert!(sigs.flag.get_untracked());
        assert!(sigs.in_flight.get_untracked());
    }

    #[test]
    fn begin_rejects_while_in_flight() {
        let sigs = create_toggle_signals(false);

        let first = begin_toggle(&sigs);
        assert!(first.is_some());
        assert!(begin_toggle(&sigs).is_none());
        // Displayed value still the first intent's guess
        assert!(sigs.flag.get_untracked());
    }

    #[test]
    fn settle_applies_server_value() {
        let sigs = create_toggle_signals(false);
        let live = LivenessToken::new();

        let pending = begin_toggle(&sigs).unwrap();
        settle_toggle(&sigs, &live, pending, Ok(true));
        assert!(sigs.flag.get_untracked());
        assert!(!sigs.in_flight.get_untracked());
    }

    #[test]
    fn server_value_wins_over_optimistic_guess() {
        // Server may apply its own logic and contradict the local guess
        let sigs = create_toggle_signals(false);
        let live = LivenessToken::new();

        let pending = begin_toggle(&sigs).unwrap();
        assert!(sigs.flag.get_untracked());
        settle_toggle(&sigs, &live, pending, Ok(false));
        assert!(!sigs.flag.get_untracked());
        assert!(!sigs.in_flight.get_untracked());
    }

    #[test]
    fn settle_rolls_back_on_error() {
        let sigs = create_toggle_signals(true);
        let live = LivenessToken::new();

        let pending = begin_toggle(&sigs).unwrap();
        assert!(!sigs.flag.get_untracked());
        settle_toggle(&sigs, &live, pending, Err("network".to_string()));
        assert!(sigs.flag.get_untracked());
        assert!(!sigs.in_flight.get_untracked());
    }

    #[test]
    fn settle_after_revoke_writes_nothing() {
        let sigs = create_toggle_signals(false);
        let live = LivenessToken::new();

        let pending = begin_toggle(&sigs).unwrap();
        live.revoke();
        settle_toggle(&sigs, &live, pending, Ok(false));
        // No write happened: flag keeps the value it had when the view died
        assert!(sigs.flag.get_untracked());
        assert!(sigs.in_flight.get_untracked());
    }

    #[tokio::test]
    async fn run_toggle_applies_late_server_confirmation() {
        let sigs = create_toggle_signals(false);
        let live = LivenessToken::new();
        let (tx, rx) = oneshot::channel::<Result<bool, String>>();

        let local = tokio::task::LocalSet::new();
        local
            .run_until(async {
                let handle = {
                    let sigs = sigs.clone();
                    let live = live.clone();
                    tokio::task::spawn_local(run_toggle(sigs, live, move || async move {
                        rx.await.unwrap()
                    }))
                };
                tokio::task::yield_now().await;

                // Optimistic guess visible while the server is still thinking
                assert!(sigs.flag.get_untracked());
                assert!(sigs.in_flight.get_untracked());

                tx.send(Ok(true)).unwrap();
                assert!(handle.await.unwrap());
                assert!(sigs.flag.get_untracked());
                assert!(!sigs.in_flight.get_untracked());
            })
            .await;
    }

    #[tokio::test]
    async fn run_toggle_rejects_second_intent_while_first_unsettled() {
        let sigs = create_toggle_signals(false);
        let live = LivenessToken::new();
        let (tx, rx) = oneshot::channel::<Result<bool, String>>();
        let calls = Rc::new(Cell::new(0u32));

        let local = tokio::task::LocalSet::new();
        local
            .run_until(async {
                let handle = {
                    let sigs = sigs.clone();
                    let live = live.clone();
                    let calls = calls.clone();
                    tokio::task::spawn_local(run_toggle(sigs, live, move || {
                        calls.set(calls.get() + 1);
                        async move { rx.await.unwrap() }
                    }))
                };
                tokio::task::yield_now().await;

                // Second intent on the same entity: rejected, no remote call
                let second = {
                    let calls = calls.clone();
                    run_toggle(sigs.clone(), live.clone(), move || {
                        calls.set(calls.get() + 1);
                        async move { Ok(true) }
                    })
                    .await
                };
                assert!(!second);
                assert_eq!(calls.get(), 1);

                tx.send(Ok(true)).unwrap();
                assert!(handle.await.unwrap());
                assert_eq!(calls.get(), 1);
            })
            .await;
    }

    #[tokio::test]
    async fn run_toggle_rolls_back_on_rejection() {
        let sigs = create_toggle_signals(true);
        let live = LivenessToken::new();

        let accepted = run_toggle(sigs.clone(), live, move || async move {
            Err("toggle failed".to_string())
        })
        .await;

        assert!(accepted);
        assert!(sigs.flag.get_untracked());
        assert!(!sigs.in_flight.get_untracked());
    }
}

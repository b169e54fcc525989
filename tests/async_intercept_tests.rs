#![cfg(feature = "async")]
//! Integration tests for the asynchronous interception wrappers.
//!
//! These tests verify the deferred-completion contract of the async
//! wrappers:
//!
//! - The wrapper's signal resolves only after the target's future resolves
//! - The validate-then-dispatch branch runs eagerly at call time
//! - The validator and error handler are synchronous (never awaited)
//! - Concurrent invocations are independent

use interpose::intercept::{no_middleware_async, with_middleware_creator_async};
use rstest::rstest;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

/// Observable state mutated by the mock target and the mock error handler.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct Observed {
    next_executed: bool,
    on_error_executed: bool,
    payload: String,
}

fn observed() -> Arc<Mutex<Observed>> {
    Arc::new(Mutex::new(Observed::default()))
}

fn recording_on_error(state: Arc<Mutex<Observed>>) -> impl Fn() + Clone {
    move || {
        let mut observed = state.lock().unwrap();
        observed.on_error_executed = true;
        observed.payload = "hello from onError side effect".to_string();
    }
}

fn recording_async_next(
    state: Arc<Mutex<Observed>>,
) -> impl Fn() -> std::pin::Pin<Box<dyn std::future::Future<Output = ()> + Send>> + Clone {
    move || {
        let state = Arc::clone(&state);
        Box::pin(async move {
            let mut observed = state.lock().unwrap();
            observed.next_executed = true;
            observed.payload = "hello from async next side effect".to_string();
        })
    }
}

// =============================================================================
// Conditional Dispatch
// =============================================================================

#[rstest]
#[tokio::test]
async fn test_async_creator_dispatches_to_next_when_valid() {
    let state = observed();

    let creator = with_middleware_creator_async(|| true, recording_on_error(Arc::clone(&state)));
    let wrapped = creator.wrap(recording_async_next(Arc::clone(&state)));

    assert_eq!(*state.lock().unwrap(), Observed::default());

    wrapped(()).await;

    let expected = Observed {
        next_executed: true,
        on_error_executed: false,
        payload: "hello from async next side effect".to_string(),
    };
    assert_eq!(*state.lock().unwrap(), expected);
}

#[rstest]
#[tokio::test]
async fn test_async_creator_dispatches_to_error_handler_when_invalid() {
    let state = observed();

    let creator = with_middleware_creator_async(|| false, recording_on_error(Arc::clone(&state)));
    let wrapped = creator.wrap(recording_async_next(Arc::clone(&state)));

    wrapped(()).await;

    let expected = Observed {
        next_executed: false,
        on_error_executed: true,
        payload: "hello from onError side effect".to_string(),
    };
    assert_eq!(*state.lock().unwrap(), expected);
}

#[rstest]
#[tokio::test]
async fn test_async_no_middleware_always_dispatches_to_next() {
    let state = observed();

    let wrapped = no_middleware_async(recording_async_next(Arc::clone(&state)));

    wrapped(()).await;

    let expected = Observed {
        next_executed: true,
        on_error_executed: false,
        payload: "hello from async next side effect".to_string(),
    };
    assert_eq!(*state.lock().unwrap(), expected);
}

// =============================================================================
// Completion Ordering
// =============================================================================

#[rstest]
#[tokio::test]
async fn test_completion_resolves_only_after_target_side_effect() {
    let finished = Arc::new(AtomicBool::new(false));

    let flag = Arc::clone(&finished);
    let wrapped = no_middleware_async(move || {
        let flag = Arc::clone(&flag);
        async move {
            tokio::task::yield_now().await;
            flag.store(true, Ordering::SeqCst);
        }
    });

    wrapped(()).await;
    assert!(finished.load(Ordering::SeqCst));
}

#[rstest]
#[tokio::test]
async fn test_completion_suspends_while_target_is_pending() {
    let release = Arc::new(Notify::new());
    let finished = Arc::new(AtomicBool::new(false));

    let gate = Arc::clone(&release);
    let flag = Arc::clone(&finished);
    let wrapped = no_middleware_async(move || {
        let gate = Arc::clone(&gate);
        let flag = Arc::clone(&flag);
        async move {
            gate.notified().await;
            flag.store(true, Ordering::SeqCst);
        }
    });

    let completion = tokio::spawn(wrapped(()));
    tokio::task::yield_now().await;
    assert!(!finished.load(Ordering::SeqCst));

    release.notify_one();
    completion.await.unwrap();
    assert!(finished.load(Ordering::SeqCst));
}

// =============================================================================
// Eager Branching
// =============================================================================

#[rstest]
#[tokio::test]
async fn test_error_handler_runs_during_the_call_itself() {
    let rejected = Arc::new(AtomicBool::new(false));
    let dispatched = Arc::new(AtomicUsize::new(0));

    let observed = Arc::clone(&rejected);
    let creator =
        with_middleware_creator_async(|| false, move || observed.store(true, Ordering::SeqCst));

    let runs = Arc::clone(&dispatched);
    let wrapped = creator.wrap(move || {
        let runs = Arc::clone(&runs);
        async move {
            runs.fetch_add(1, Ordering::SeqCst);
        }
    });

    let completion = wrapped(());

    // The handler already ran even though the signal has not been polled.
    assert!(rejected.load(Ordering::SeqCst));
    assert_eq!(dispatched.load(Ordering::SeqCst), 0);

    completion.await;
    assert_eq!(dispatched.load(Ordering::SeqCst), 0);
}

#[rstest]
#[tokio::test]
async fn test_validator_is_synchronous_and_reevaluated_per_call() {
    let admitted = Arc::new(AtomicBool::new(true));
    let checks = Arc::new(AtomicUsize::new(0));
    let dispatched = Arc::new(AtomicUsize::new(0));

    let gate = Arc::clone(&admitted);
    let count = Arc::clone(&checks);
    let creator = with_middleware_creator_async(
        move || {
            count.fetch_add(1, Ordering::SeqCst);
            gate.load(Ordering::SeqCst)
        },
        || {},
    );

    let runs = Arc::clone(&dispatched);
    let wrapped = creator.wrap(move || {
        let runs = Arc::clone(&runs);
        async move {
            runs.fetch_add(1, Ordering::SeqCst);
        }
    });

    wrapped(()).await;
    admitted.store(false, Ordering::SeqCst);
    wrapped(()).await;

    assert_eq!(checks.load(Ordering::SeqCst), 2);
    assert_eq!(dispatched.load(Ordering::SeqCst), 1);
}

// =============================================================================
// Argument Forwarding
// =============================================================================

#[rstest]
#[tokio::test]
async fn test_async_arguments_are_forwarded_verbatim() {
    let state = observed();

    let creator = with_middleware_creator_async(|| true, recording_on_error(Arc::clone(&state)));

    let sink = Arc::clone(&state);
    let wrapped = creator.wrap(
        move |name: String, identifies_as: String, favorite_fruit: String| {
            let sink = Arc::clone(&sink);
            async move {
                let mut observed = sink.lock().unwrap();
                observed.next_executed = true;
                observed.payload = format!(
                    "{name} snacks on {favorite_fruit}, it's {identifies_as} favorite fruit!"
                );
            }
        },
    );

    wrapped(("Jane".to_string(), "her".to_string(), "elephant".to_string())).await;

    let expected = Observed {
        next_executed: true,
        on_error_executed: false,
        payload: "Jane snacks on elephant, it's her favorite fruit!".to_string(),
    };
    assert_eq!(*state.lock().unwrap(), expected);
}

// =============================================================================
// Independence
// =============================================================================

#[rstest]
#[tokio::test]
async fn test_concurrent_invocations_are_independent() {
    let dispatched = Arc::new(AtomicUsize::new(0));

    let runs = Arc::clone(&dispatched);
    let wrapped = no_middleware_async(move || {
        let runs = Arc::clone(&runs);
        async move {
            tokio::task::yield_now().await;
            runs.fetch_add(1, Ordering::SeqCst);
        }
    });

    let first = tokio::spawn(wrapped(()));
    let second = tokio::spawn(wrapped(()));

    first.await.unwrap();
    second.await.unwrap();

    assert_eq!(dispatched.load(Ordering::SeqCst), 2);
}

#[rstest]
#[tokio::test]
async fn test_one_async_factory_wraps_multiple_targets() {
    let rejected = Arc::new(AtomicUsize::new(0));

    let failures = Arc::clone(&rejected);
    let creator = with_middleware_creator_async(|| false, move || {
        failures.fetch_add(1, Ordering::SeqCst);
    });

    let nullary = creator.wrap(|| async {});
    let unary = creator.wrap(|count: usize| async move {
        let _ = count;
    });

    nullary(()).await;
    unary((7,)).await;

    assert_eq!(rejected.load(Ordering::SeqCst), 2);
}

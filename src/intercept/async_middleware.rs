//! Asynchronous interception wrappers.
//!
//! [`no_middleware_async`] and [`with_middleware_creator_async`] mirror their
//! synchronous counterparts for targets that return a future. An intercepted
//! asynchronous function returns a [`Completion`] — the wrapper's own
//! deferred completion signal, which resolves with no value once the target's
//! future resolves (or immediately, when validation failed and the error
//! handler already ran).
//!
//! # Eager Branching
//!
//! The validate-then-dispatch branch runs during the call itself, not at
//! first poll: the validator is synchronous and never awaited, and on the
//! failing path the error handler has already run by the time the
//! [`Completion`] is returned. Only the target's own future suspends.
//!
//! # Examples
//!
//! ```rust,ignore
//! use interpose::intercept::no_middleware_async;
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicBool, Ordering};
//!
//! #[tokio::main]
//! async fn main() {
//!     let executed = Arc::new(AtomicBool::new(false));
//!     let flag = Arc::clone(&executed);
//!
//!     let wrapped = no_middleware_async(move |name: String| {
//!         let flag = Arc::clone(&flag);
//!         async move {
//!             assert_eq!(name, "world");
//!             flag.store(true, Ordering::SeqCst);
//!         }
//!     });
//!
//!     wrapped(("world".to_string(),)).await;
//!     assert!(executed.load(Ordering::SeqCst));
//! }
//! ```

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use pin_project_lite::pin_project;

use super::next::AsyncNext;

pin_project! {
    /// Deferred completion signal returned by the asynchronous wrappers.
    ///
    /// Resolves with no value. When validation passed (or no middleware is
    /// present), resolution tracks the target's own future: the signal is
    /// pending exactly as long as the target's future is, and a panic while
    /// polling the target propagates through this signal unmodified. When
    /// validation failed, the error handler has already run during the call
    /// and the signal resolves on first poll.
    pub struct Completion<Signal> {
        #[pin]
        state: CompletionState<Signal>,
    }
}

pin_project! {
    /// Internal state for `Completion`.
    ///
    /// - `Delegated`: validation passed; polling drives the target's future.
    /// - `Handled`: validation failed; the error handler already ran.
    #[project = CompletionStateProj]
    enum CompletionState<Signal> {
        Delegated {
            #[pin]
            signal: Signal,
        },
        Handled,
    }
}

impl<Signal> Completion<Signal> {
    fn delegated(signal: Signal) -> Self {
        Self {
            state: CompletionState::Delegated { signal },
        }
    }

    const fn handled() -> Self {
        Self {
            state: CompletionState::Handled,
        }
    }
}

impl<Signal> Future for Completion<Signal>
where
    Signal: Future,
{
    type Output = ();

    fn poll(self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<Self::Output> {
        match self.project().state.project() {
            CompletionStateProj::Delegated { signal } => signal.poll(context).map(|_| ()),
            CompletionStateProj::Handled => Poll::Ready(()),
        }
    }
}

/// A reusable wrapper-factory binding a validator to an error handler, for
/// asynchronous target functions.
///
/// Created by [`with_middleware_creator_async`]. The bound pair is fixed at
/// creation time and shared, by clone, across every wrapper the factory
/// produces. The validator and the error handler are both synchronous,
/// zero-argument calls — neither is ever awaited.
#[derive(Clone)]
pub struct AsyncMiddleware<Validator, OnError> {
    /// Zero-argument predicate consulted before every dispatch.
    validator: Validator,
    /// Zero-argument procedure run in place of the target on failure.
    on_error: OnError,
}

impl<Validator, OnError> AsyncMiddleware<Validator, OnError>
where
    Validator: Fn() -> bool + Clone,
    OnError: Fn() + Clone,
{
    /// Binds a validator/error-handler pair into a factory.
    ///
    /// Equivalent to [`with_middleware_creator_async`].
    pub fn new(validator: Validator, on_error: OnError) -> Self {
        Self {
            validator,
            on_error,
        }
    }

    /// Wraps an asynchronous target function with the bound pair.
    ///
    /// The returned function accepts the target's arguments as a tuple and
    /// returns a [`Completion`]. On every call it first invokes the
    /// validator; if the result is `false` the error handler runs
    /// synchronously during the call, the target is never invoked, and the
    /// returned signal is already resolved. Otherwise the target is invoked
    /// with the forwarded arguments and the signal resolves once the
    /// target's own future resolves.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use interpose::intercept::with_middleware_creator_async;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let creator = with_middleware_creator_async(|| true, || {});
    ///     let wrapped = creator.wrap(|count: usize| async move {
    ///         assert_eq!(count, 7);
    ///     });
    ///
    ///     wrapped((7,)).await;
    /// }
    /// ```
    pub fn wrap<Arguments, F>(
        &self,
        next: F,
    ) -> impl Fn(Arguments) -> Completion<F::Future> + use<Validator, OnError, Arguments, F>
    where
        F: AsyncNext<Arguments>,
    {
        let validator = self.validator.clone();
        let on_error = self.on_error.clone();
        move |arguments| {
            if !validator() {
                on_error();

                return Completion::handled();
            }
            Completion::delegated(next.invoke(arguments))
        }
    }
}

/// Wraps an asynchronous target function with plain pass-through.
///
/// The returned function accepts the target's arguments as a tuple and
/// returns a [`Completion`] that resolves only after the target's own future
/// resolves. No validation runs; a panic while polling the target's future
/// propagates through the signal unmodified.
#[inline]
pub fn no_middleware_async<Arguments, F>(next: F) -> impl Fn(Arguments) -> Completion<F::Future>
where
    F: AsyncNext<Arguments>,
{
    move |arguments| Completion::delegated(next.invoke(arguments))
}

/// Binds a validator/error-handler pair into a reusable [`AsyncMiddleware`]
/// factory for asynchronous functions.
///
/// The validator and error handler carry the same contracts as in
/// [`with_middleware_creator`](super::with_middleware_creator): both are
/// synchronous and zero-argument, and the error handler receives no
/// information about the failure.
#[inline]
pub fn with_middleware_creator_async<Validator, OnError>(
    validator: Validator,
    on_error: OnError,
) -> AsyncMiddleware<Validator, OnError>
where
    Validator: Fn() -> bool + Clone,
    OnError: Fn() + Clone,
{
    AsyncMiddleware::new(validator, on_error)
}

//! Synchronous interception wrappers.
//!
//! [`no_middleware`] wraps a target with plain pass-through, and
//! [`with_middleware_creator`] binds a validator/error-handler pair into a
//! reusable [`Middleware`] factory whose wrappers perform the
//! validate-then-dispatch branch on every call.
//!
//! # Examples
//!
//! ```rust
//! use interpose::intercept::with_middleware_creator;
//! use std::sync::{Arc, Mutex};
//!
//! let payload = Arc::new(Mutex::new(String::new()));
//!
//! let creator = with_middleware_creator(|| true, || {});
//!
//! let sink = Arc::clone(&payload);
//! let wrapped = creator.wrap(move |greeting: &str| {
//!     *sink.lock().unwrap() = greeting.to_string();
//! });
//!
//! wrapped(("hello from next side effect",));
//! assert_eq!(payload.lock().unwrap().as_str(), "hello from next side effect");
//! ```

use super::next::Next;

/// A reusable wrapper-factory binding a validator to an error handler.
///
/// Created by [`with_middleware_creator`]. The bound pair is fixed at
/// creation time: every wrapper produced by [`wrap`](Middleware::wrap)
/// shares clones of the same validator and error handler, and the pair is
/// never mutated afterwards. State shared between the clones, if any, lives
/// behind the caller's own captures (for example an `Arc`).
///
/// # Examples
///
/// ```rust
/// use interpose::intercept::Middleware;
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicUsize, Ordering};
///
/// let rejections = Arc::new(AtomicUsize::new(0));
///
/// let observed = Arc::clone(&rejections);
/// let creator = Middleware::new(|| false, move || {
///     observed.fetch_add(1, Ordering::SeqCst);
/// });
///
/// // One factory, applied to two different targets.
/// let first = creator.wrap(|| unreachable!());
/// let second = creator.wrap(|count: usize| { let _ = count; unreachable!() });
///
/// first(());
/// second((7,));
/// assert_eq!(rejections.load(Ordering::SeqCst), 2);
/// ```
#[derive(Clone)]
pub struct Middleware<Validator, OnError> {
    /// Zero-argument predicate consulted before every dispatch.
    validator: Validator,
    /// Zero-argument procedure run in place of the target on failure.
    on_error: OnError,
}

impl<Validator, OnError> Middleware<Validator, OnError>
where
    Validator: Fn() -> bool + Clone,
    OnError: Fn() + Clone,
{
    /// Binds a validator/error-handler pair into a factory.
    ///
    /// Equivalent to [`with_middleware_creator`].
    pub fn new(validator: Validator, on_error: OnError) -> Self {
        Self {
            validator,
            on_error,
        }
    }

    /// Wraps a synchronous target function with the bound pair.
    ///
    /// The returned function accepts the target's arguments as a tuple. On
    /// every call it first invokes the validator; if the result is `false`
    /// the error handler runs (with no arguments) and the target is never
    /// invoked. Otherwise the target runs with the forwarded arguments and
    /// its return value is discarded.
    ///
    /// The validator is re-evaluated on every call. A panic in the validator
    /// propagates to the caller, and neither the error handler nor the
    /// target executes that round.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use interpose::intercept::Middleware;
    /// use std::sync::Arc;
    /// use std::sync::atomic::{AtomicBool, Ordering};
    ///
    /// let admitted = Arc::new(AtomicBool::new(false));
    ///
    /// let gate = Arc::clone(&admitted);
    /// let creator = Middleware::new(move || gate.load(Ordering::SeqCst), || {});
    /// let wrapped = creator.wrap(|name: &str| assert_eq!(name, "jade"));
    ///
    /// // Rejected while the gate is closed, dispatched once it opens.
    /// wrapped(("jade",));
    /// admitted.store(true, Ordering::SeqCst);
    /// wrapped(("jade",));
    /// ```
    pub fn wrap<Arguments, F>(
        &self,
        next: F,
    ) -> impl Fn(Arguments) + use<Validator, OnError, Arguments, F>
    where
        F: Next<Arguments>,
    {
        let validator = self.validator.clone();
        let on_error = self.on_error.clone();
        move |arguments| {
            if !validator() {
                on_error();

                return;
            }
            next.invoke(arguments);
        }
    }
}

/// Wraps a synchronous target function with plain pass-through.
///
/// The returned function accepts the target's arguments as a tuple and
/// invokes the target synchronously, in the same call frame, with the
/// forwarded arguments. No validation runs and no error handling is
/// performed: a panic in the target propagates unmodified.
///
/// # Examples
///
/// ```rust
/// use interpose::intercept::no_middleware;
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicBool, Ordering};
///
/// let executed = Arc::new(AtomicBool::new(false));
///
/// let flag = Arc::clone(&executed);
/// let wrapped = no_middleware(move |name: &str| {
///     assert_eq!(name, "world");
///     flag.store(true, Ordering::SeqCst);
/// });
///
/// wrapped(("world",));
/// assert!(executed.load(Ordering::SeqCst));
/// ```
#[inline]
pub fn no_middleware<Arguments, F>(next: F) -> impl Fn(Arguments)
where
    F: Next<Arguments>,
{
    move |arguments| next.invoke(arguments)
}

/// Binds a validator/error-handler pair into a reusable [`Middleware`]
/// factory for synchronous functions.
///
/// The validator is a zero-argument predicate deciding whether the target
/// runs; the error handler is a zero-argument procedure run in its place
/// when validation fails. The error handler receives no information about
/// the failure.
///
/// # Examples
///
/// ```rust
/// use interpose::intercept::with_middleware_creator;
/// use std::sync::{Arc, Mutex};
///
/// let payload = Arc::new(Mutex::new(String::new()));
///
/// let sink = Arc::clone(&payload);
/// let creator = with_middleware_creator(
///     || false,
///     move || *sink.lock().unwrap() = "hello from onError side effect".to_string(),
/// );
/// let wrapped = creator.wrap(|| panic!("never dispatched"));
///
/// wrapped(());
/// assert_eq!(payload.lock().unwrap().as_str(), "hello from onError side effect");
/// ```
#[inline]
pub fn with_middleware_creator<Validator, OnError>(
    validator: Validator,
    on_error: OnError,
) -> Middleware<Validator, OnError>
where
    Validator: Fn() -> bool + Clone,
    OnError: Fn() + Clone,
{
    Middleware::new(validator, on_error)
}

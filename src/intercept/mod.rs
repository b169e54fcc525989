//! Function interception utilities.
//!
//! This module provides the interception wrapper: given a target function
//! ("next"), it produces a wrapped function that optionally runs a validation
//! check before invoking the target, and runs an error handler instead when
//! validation fails.
//!
//! # Overview
//!
//! Four creation entry points are provided:
//!
//! - [`no_middleware`]: pass-through wrapping of a synchronous function
//! - [`no_middleware_async`]: pass-through wrapping of an asynchronous function
//! - [`with_middleware_creator`]: binds a validator and an error handler into
//!   a reusable [`Middleware`] factory for synchronous functions
//! - [`with_middleware_creator_async`]: the same, producing an
//!   [`AsyncMiddleware`] factory for asynchronous functions
//!
//! The validator is a zero-argument predicate; the error handler is a
//! zero-argument procedure. Both are bound once at factory-creation time and
//! shared by every wrapper the factory produces.
//!
//! # Argument Forwarding
//!
//! Rust closures cannot be variadic, so an intercepted function receives its
//! arguments as a tuple and forwards them verbatim to the target. The
//! [`Next`] and [`AsyncNext`] traits are implemented for plain closures of
//! zero through eight arguments, so any such closure can be wrapped directly:
//!
//! ```rust
//! use interpose::intercept::no_middleware;
//!
//! let wrapped = no_middleware(|name: &str, count: usize| {
//!     assert_eq!(name.len(), count);
//! });
//!
//! wrapped(("four", 4));
//! ```
//!
//! # Dispatch Laws
//!
//! Per invocation of an intercepted function, with middleware present:
//!
//! - **Exclusivity**: exactly one of {target, error handler} executes —
//!   never both, never neither.
//! - **Revalidation**: the validator is re-invoked on every call; its result
//!   is never cached.
//! - **Transparency**: the wrapper performs no error recovery, wrapping, or
//!   translation — a panic in the validator, the target, or the error
//!   handler propagates unmodified to the caller.
//!
//! Without middleware, the target always executes.
//!
//! # Synchronous Example
//!
//! ```rust
//! use interpose::intercept::with_middleware_creator;
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicBool, Ordering};
//!
//! let admitted = Arc::new(AtomicBool::new(true));
//! let rejections = Arc::new(AtomicBool::new(false));
//!
//! let gate = Arc::clone(&admitted);
//! let observed = Arc::clone(&rejections);
//! let creator = with_middleware_creator(
//!     move || gate.load(Ordering::SeqCst),
//!     move || observed.store(true, Ordering::SeqCst),
//! );
//!
//! let guarded = creator.wrap(|name: &str| println!("hello, {name}"));
//!
//! guarded(("world",));
//! assert!(!rejections.load(Ordering::SeqCst));
//!
//! admitted.store(false, Ordering::SeqCst);
//! guarded(("world",));
//! assert!(rejections.load(Ordering::SeqCst));
//! ```
//!
//! # Asynchronous Example
//!
//! ```rust,ignore
//! use interpose::intercept::with_middleware_creator_async;
//!
//! #[tokio::main]
//! async fn main() {
//!     let creator = with_middleware_creator_async(|| true, || eprintln!("rejected"));
//!     let guarded = creator.wrap(|name: String| async move {
//!         println!("hello, {name}");
//!     });
//!
//!     guarded(("world".to_string(),)).await;
//! }
//! ```

mod middleware;
mod next;

#[cfg(feature = "async")]
mod async_middleware;

pub use middleware::{Middleware, no_middleware, with_middleware_creator};
pub use next::Next;

#[cfg(feature = "async")]
pub use async_middleware::{
    AsyncMiddleware, Completion, no_middleware_async, with_middleware_creator_async,
};
#[cfg(feature = "async")]
pub use next::AsyncNext;

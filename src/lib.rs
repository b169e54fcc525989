//! # interpose
//!
//! A minimal function-interception utility for Rust: wrap a target function
//! so that a validation check runs before it, and an error handler runs
//! instead of it when validation fails.
//!
//! ## Overview
//!
//! The library exposes a single component, the interception wrapper, through
//! four creation entry points:
//!
//! - [`no_middleware`](intercept::no_middleware): pass-through wrapping of a
//!   synchronous function (no validation).
//! - [`no_middleware_async`](intercept::no_middleware_async): pass-through
//!   wrapping of an asynchronous function.
//! - [`with_middleware_creator`](intercept::with_middleware_creator): binds a
//!   validator and an error handler into a reusable factory for synchronous
//!   functions.
//! - [`with_middleware_creator_async`](intercept::with_middleware_creator_async):
//!   the same, for asynchronous functions.
//!
//! A factory is created once and applied to any number of target functions;
//! each intercepted function can be invoked repeatedly with arbitrary
//! arguments, forwarded as a tuple.
//!
//! ## Feature Flags
//!
//! - `async`: Asynchronous wrappers and the [`Completion`](intercept::Completion)
//!   future (enabled by default)
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use interpose::prelude::*;
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicBool, Ordering};
//!
//! let denied = Arc::new(AtomicBool::new(false));
//!
//! let observed = Arc::clone(&denied);
//! let gate = with_middleware_creator(
//!     || false,
//!     move || observed.store(true, Ordering::SeqCst),
//! );
//!
//! let guarded = gate.wrap(|name: &str| println!("hello, {name}"));
//!
//! guarded(("world",));
//! assert!(denied.load(Ordering::SeqCst));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the creation entry points, the factory types, and the
/// target-function traits.
///
/// # Usage
///
/// ```rust
/// use interpose::prelude::*;
/// ```
pub mod prelude {
    pub use crate::intercept::*;
}

pub mod intercept;

//! Target-function abstraction over argument tuples.
//!
//! A wrapper must be polymorphic over the argument list of the function it
//! wraps, forwarding the arguments opaquely without inspecting them. Closure
//! types in Rust are not variadic, so the abstraction is a trait generic over
//! an argument tuple, blanket-implemented for plain closures of zero through
//! eight arguments.
//!
//! [`Next`] covers synchronous targets; [`AsyncNext`] covers asynchronous
//! targets, whose invocation produces a deferred completion signal. In both
//! cases the value a target returns (or resolves with) is discarded: the
//! declared contract of an intercepted function produces no meaningful value.

#[cfg(feature = "async")]
use std::future::Future;

/// A synchronous target function callable with an argument tuple.
///
/// Implemented for every `Fn` closure of zero through eight arguments, with
/// the argument list expressed as the tuple `Arguments`. The closure's return
/// value is discarded.
///
/// # Examples
///
/// ```rust
/// use interpose::intercept::Next;
///
/// let target = |augend: i32, addend: i32| augend + addend;
///
/// // The sum is computed and discarded.
/// target.invoke((2, 3));
/// ```
pub trait Next<Arguments> {
    /// Invokes the target, forwarding the argument tuple verbatim.
    fn invoke(&self, arguments: Arguments);
}

/// An asynchronous target function callable with an argument tuple.
///
/// Implemented for every `Fn` closure of zero through eight arguments whose
/// return value is a [`Future`]. Invoking the target produces its deferred
/// completion signal; the value the signal resolves with is discarded by the
/// wrappers.
#[cfg(feature = "async")]
pub trait AsyncNext<Arguments> {
    /// The deferred completion signal produced by the target.
    type Future: Future;

    /// Invokes the target, forwarding the argument tuple verbatim, and
    /// returns its completion signal.
    fn invoke(&self, arguments: Arguments) -> Self::Future;
}

macro_rules! impl_next {
    ($($parameter:ident),*) => {
        impl<Function, ReturnValue, $($parameter),*> Next<($($parameter,)*)> for Function
        where
            Function: Fn($($parameter),*) -> ReturnValue,
        {
            #[inline]
            fn invoke(&self, arguments: ($($parameter,)*)) {
                #[allow(non_snake_case)]
                let ($($parameter,)*) = arguments;
                self($($parameter),*);
            }
        }

        #[cfg(feature = "async")]
        impl<Function, Signal, $($parameter),*> AsyncNext<($($parameter,)*)> for Function
        where
            Function: Fn($($parameter),*) -> Signal,
            Signal: Future,
        {
            type Future = Signal;

            #[inline]
            fn invoke(&self, arguments: ($($parameter,)*)) -> Signal {
                #[allow(non_snake_case)]
                let ($($parameter,)*) = arguments;
                self($($parameter),*)
            }
        }
    };
}

impl_next!();
impl_next!(A1);
impl_next!(A1, A2);
impl_next!(A1, A2, A3);
impl_next!(A1, A2, A3, A4);
impl_next!(A1, A2, A3, A4, A5);
impl_next!(A1, A2, A3, A4, A5, A6);
impl_next!(A1, A2, A3, A4, A5, A6, A7);
impl_next!(A1, A2, A3, A4, A5, A6, A7, A8);

//! Closure construction strategies
//!
//! This module provides the two ways a hand-built closure can hold its
//! environment:
//!
//! - [`ValueClosure`] / [`MutValueClosure`]: an owned snapshot, cloned once
//!   at construction and never touched by the outside world again.
//! - [`RefClosure`] / [`RefMutClosure`]: a borrow of a shared mutable slot,
//!   observed fresh on every call.
//!
//! Both strategies share the same interface shape, expressed by the
//! [`Callable`] and [`CallableMut`] traits (the read-only and mutating
//! halves of a call operation, mirroring `Fn`/`FnMut`).
//!
//! # What "calling" means
//!
//! The captured state decides how it reacts to a call argument through the
//! [`Combine`] trait: `combine` produces a result from the current state
//! and the argument (for `i32`, their sum), and `absorb` replaces the state
//! with the argument (used by the mutating closures).

pub mod errors;
pub mod reference;
pub mod value;

pub use errors::CaptureError;
pub use reference::{RefClosure, RefMutClosure};
pub use value::{MutValueClosure, ValueClosure};

/// How a captured state reacts to a call argument
pub trait Combine<Arg = i32> {
    /// Result type of a call
    type Output;

    /// Produce a result from the current state and the argument
    fn combine(&self, arg: Arg) -> Self::Output;

    /// Replace the state with the argument
    fn absorb(&mut self, arg: Arg);
}

impl Combine for i32 {
    type Output = i32;

    fn combine(&self, arg: i32) -> i32 {
        *self + arg
    }

    fn absorb(&mut self, arg: i32) {
        *self = arg;
    }
}

/// A callable unit queried through `&self`
///
/// A closure with an empty environment is just a function:
///
/// ```
/// use snapcall::capture::Callable;
///
/// struct Add;
///
/// impl Callable<(i32, i32)> for Add {
///     type Output = i32;
///
///     fn invoke(&self, (a, b): (i32, i32)) -> i32 {
///         a + b
///     }
/// }
///
/// assert_eq!(3, Add.invoke((1, 2)));
/// ```
pub trait Callable<Arg> {
    /// Result type of a call
    type Output;

    /// Invoke the closure with one argument
    fn invoke(&self, arg: Arg) -> Self::Output;
}

/// A callable unit that may mutate its held state when invoked
pub trait CallableMut<Arg> {
    /// Result type of a call
    type Output;

    /// Invoke the closure with one argument, possibly mutating held state
    fn invoke_mut(&mut self, arg: Arg) -> Self::Output;
}

//! Value-capturing closures
//!
//! This module provides closures that own their environment:
//! - [`ValueClosure`]: an immutable snapshot, cloned once at construction
//! - [`MutValueClosure`]: a snapshot the closure itself may overwrite
//!
//! # Isolation
//!
//! The snapshot is taken with exactly one clone when the closure is built.
//! From that point on the closure and the source variable are unrelated
//! values: mutating the source any number of times never changes what the
//! closure computes, and (for [`MutValueClosure`]) mutations made inside
//! the closure never reach the source.

use super::{Callable, CallableMut, Combine};

/// A closure holding a frozen snapshot of its captured state
///
/// ```
/// use snapcall::capture::ValueClosure;
///
/// let mut x = 42;
/// let add_to_x = ValueClosure::capture(&x);
///
/// assert_eq!(52, add_to_x.call(10));
/// x = 100;
/// assert_eq!(52, add_to_x.call(10)); // still the snapshot
/// assert_eq!(100, x);
/// ```
#[derive(Debug, Clone)]
pub struct ValueClosure<T> {
    snapshot: T,
}

impl<T: Clone> ValueClosure<T> {
    /// Capture a snapshot of `source`. Exactly one clone occurs.
    pub fn capture(source: &T) -> Self {
        ValueClosure {
            snapshot: source.clone(),
        }
    }
}

impl<T> ValueClosure<T> {
    /// Take ownership of an already-moved value, without cloning
    pub fn from_owned(snapshot: T) -> Self {
        ValueClosure { snapshot }
    }

    /// Read access to the held snapshot
    pub fn snapshot(&self) -> &T {
        &self.snapshot
    }

    /// Combine the frozen snapshot with `arg`
    pub fn call<A>(&self, arg: A) -> T::Output
    where
        T: Combine<A>,
    {
        self.snapshot.combine(arg)
    }
}

impl<T, A> Callable<A> for ValueClosure<T>
where
    T: Combine<A>,
{
    type Output = T::Output;

    fn invoke(&self, arg: A) -> T::Output {
        self.call(arg)
    }
}

/// A value-capturing closure allowed to mutate its own copy
///
/// Calling combines the current internal copy with the argument, then
/// absorbs the argument into the copy. Both effects are local: the source
/// variable the snapshot was cloned from is never touched.
#[derive(Debug, Clone)]
pub struct MutValueClosure<T> {
    snapshot: T,
}

impl<T: Clone> MutValueClosure<T> {
    /// Capture a snapshot of `source`. Exactly one clone occurs.
    pub fn capture(source: &T) -> Self {
        MutValueClosure {
            snapshot: source.clone(),
        }
    }
}

impl<T> MutValueClosure<T> {
    /// Read access to the closure's internal copy
    pub fn snapshot(&self) -> &T {
        &self.snapshot
    }

    /// Combine the internal copy with `arg`, then absorb `arg` into it
    pub fn call<A>(&mut self, arg: A) -> T::Output
    where
        T: Combine<A>,
        A: Clone,
    {
        let result = self.snapshot.combine(arg.clone());
        self.snapshot.absorb(arg);
        result
    }
}

impl<T, A> CallableMut<A> for MutValueClosure<T>
where
    T: Combine<A>,
    A: Clone,
{
    type Output = T::Output;

    fn invoke_mut(&mut self, arg: A) -> T::Output {
        self.call(arg)
    }
}

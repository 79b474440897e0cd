//! Reference-capturing closures
//!
//! This module provides closures that borrow their environment instead of
//! owning it:
//! - [`RefClosure`]: reads the current value of a shared slot on every call
//! - [`RefMutClosure`]: writes the call argument through to the slot
//!
//! # The slot
//!
//! The captured location is a `RefCell<T>` owned by the caller. The closure
//! holds only a shared borrow of the cell, so the owner can keep mutating
//! the slot between calls and the closure always sees the latest value.
//! The borrow also ties the closure's lifetime to the slot's: there is no
//! dangling-reference hazard to document, because outliving the slot does
//! not compile.
//!
//! ```compile_fail
//! use std::cell::RefCell;
//! use snapcall::capture::RefClosure;
//!
//! let closure;
//! {
//!     let slot = RefCell::new(42);
//!     closure = RefClosure::capture(&slot);
//! } // slot dropped while still borrowed
//! let _ = closure.call(10);
//! ```
//!
//! # Borrow conflicts
//!
//! Calling while the slot is mutably borrowed elsewhere is the one runtime
//! failure mode. The plain call operations panic (the `RefCell`
//! convention); the `try_` variants report [`CaptureError::ReferentBusy`]
//! instead.

use std::cell::RefCell;

use super::errors::CaptureError;
use super::{Callable, CallableMut, Combine};

/// A closure observing the live value of a shared slot
///
/// ```
/// use std::cell::RefCell;
/// use snapcall::capture::RefClosure;
///
/// let slot = RefCell::new(42);
/// let add_to_slot = RefClosure::capture(&slot);
///
/// assert_eq!(142, add_to_slot.call(100));
/// *slot.borrow_mut() = 100;
/// assert_eq!(200, add_to_slot.call(100)); // no staleness
/// ```
#[derive(Debug)]
pub struct RefClosure<'a, T> {
    slot: &'a RefCell<T>,
}

impl<'a, T> RefClosure<'a, T> {
    /// Borrow `slot` for the lifetime of the closure. No copy occurs.
    pub fn capture(slot: &'a RefCell<T>) -> Self {
        RefClosure { slot }
    }

    /// Combine the slot's current value with `arg`
    ///
    /// # Panics
    ///
    /// Panics if the slot is mutably borrowed at call time.
    pub fn call<A>(&self, arg: A) -> T::Output
    where
        T: Combine<A>,
    {
        self.slot.borrow().combine(arg)
    }

    /// Like [`call`](Self::call), but reports a borrow conflict as an error
    pub fn try_call<A>(&self, arg: A) -> Result<T::Output, CaptureError>
    where
        T: Combine<A>,
    {
        let state = self
            .slot
            .try_borrow()
            .map_err(|_| CaptureError::ReferentBusy { operation: "call" })?;
        Ok(state.combine(arg))
    }
}

impl<'a, T, A> Callable<A> for RefClosure<'a, T>
where
    T: Combine<A>,
{
    type Output = T::Output;

    fn invoke(&self, arg: A) -> T::Output {
        self.call(arg)
    }
}

/// A closure that writes its call argument through to the shared slot
///
/// Calling combines the slot's current value with the argument, then
/// absorbs the argument into the slot. The slot's owner observes the write
/// as soon as the call returns.
#[derive(Debug)]
pub struct RefMutClosure<'a, T> {
    slot: &'a RefCell<T>,
}

impl<'a, T> RefMutClosure<'a, T> {
    /// Borrow `slot` for the lifetime of the closure. No copy occurs.
    pub fn capture(slot: &'a RefCell<T>) -> Self {
        RefMutClosure { slot }
    }

    /// Combine the slot's value with `arg`, then write `arg` into the slot
    ///
    /// # Panics
    ///
    /// Panics if the slot is borrowed at call time.
    pub fn call<A>(&mut self, arg: A) -> T::Output
    where
        T: Combine<A>,
        A: Clone,
    {
        let mut state = self.slot.borrow_mut();
        let result = state.combine(arg.clone());
        state.absorb(arg);
        result
    }

    /// Like [`call`](Self::call), but reports a borrow conflict as an error
    pub fn try_call<A>(&mut self, arg: A) -> Result<T::Output, CaptureError>
    where
        T: Combine<A>,
        A: Clone,
    {
        let mut state = self
            .slot
            .try_borrow_mut()
            .map_err(|_| CaptureError::ReferentBusy { operation: "call" })?;
        let result = state.combine(arg.clone());
        state.absorb(arg);
        Ok(result)
    }
}

impl<'a, T, A> CallableMut<A> for RefMutClosure<'a, T>
where
    T: Combine<A>,
    A: Clone,
{
    type Output = T::Output;

    fn invoke_mut(&mut self, arg: A) -> T::Output {
        self.call(arg)
    }
}

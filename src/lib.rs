//! # Introduction
//!
//! snapcall builds closures by hand.  A closure is a block of executable
//! behavior bundled with a captured environment; this crate constructs that
//! bundle explicitly as a struct holding either an owned copy or a borrow of
//! its state, with a single-purpose call operation on top.
//!
//! ## The two capture strategies
//!
//! ```text
//! source variable ──clone──▶ ValueClosure   (frozen snapshot)
//! shared slot     ──borrow─▶ RefClosure     (live view)
//! ```
//!
//! 1. [`capture::value`] — [`capture::ValueClosure`] owns a snapshot taken
//!    at construction; its results never change when the source does.
//!    [`capture::MutValueClosure`] may overwrite its own copy, invisibly to
//!    the source.
//! 2. [`capture::reference`] — [`capture::RefClosure`] borrows a
//!    `RefCell` slot and reads whatever value is there at call time.
//!    [`capture::RefMutClosure`] writes through, immediately visible to the
//!    slot's owner.
//! 3. [`instrument`] — [`instrument::Wrapper`], a value type whose `clone`
//!    and `clone_from` are recorded in a shared [`instrument::CopyLog`], so
//!    tests can count exactly when copies happen.
//!
//! ## Lifetimes instead of dangling references
//!
//! A reference-capturing closure borrows its slot for its whole lifetime,
//! so using one after the slot's owner is gone is a compile error rather
//! than undefined behavior.  Everything here is single-threaded; the shared
//! slots are `RefCell`s, so the types are `!Send` and `!Sync` and the
//! compiler rejects any attempt to mutate a captured location from another
//! thread.

pub mod capture;
pub mod instrument;

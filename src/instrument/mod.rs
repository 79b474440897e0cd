//! Copy instrumentation
//!
//! This module makes copies observable:
//! - [`Wrapper`]: a value type with one integer field whose `clone` and
//!   `clone_from` each record an event before copying
//! - [`CopyLog`]: the shared event log, counting occurrences per operation
//!
//! Counting copies is what distinguishes the two capture strategies in
//! tests: capturing a [`Wrapper`] by value records exactly one [`CLONE`]
//! event, capturing it by reference records none.

use std::cell::RefCell;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::capture::Combine;

/// Event name recorded by `Wrapper::clone`
pub const CLONE: &str = "clone";

/// Event name recorded by `Wrapper::clone_from`
pub const CLONE_FROM: &str = "clone_from";

/// Records copy events by operation name
#[derive(Debug, Default)]
pub struct CopyLog {
    events: FxHashMap<&'static str, usize>,
}

impl CopyLog {
    pub fn new() -> Self {
        CopyLog {
            events: FxHashMap::default(),
        }
    }

    /// A fresh log behind a shared handle, ready to hand to [`Wrapper`]s
    pub fn shared() -> Rc<RefCell<CopyLog>> {
        Rc::new(RefCell::new(CopyLog::new()))
    }

    /// Record one occurrence of `operation`
    pub fn record(&mut self, operation: &'static str) {
        *self.events.entry(operation).or_insert(0) += 1;
    }

    /// Number of recorded events for `operation`
    pub fn count(&self, operation: &str) -> usize {
        self.events.get(operation).copied().unwrap_or(0)
    }

    /// Total events across all operations
    pub fn total(&self) -> usize {
        self.events.values().sum()
    }
}

/// A value type with observable copy operations
///
/// Holds a single mutable integer field with a getter and setter. Every
/// copy goes through the shared [`CopyLog`], so a test can assert exactly
/// how many copies a capture strategy made.
#[derive(Debug)]
pub struct Wrapper {
    x: i32,
    log: Rc<RefCell<CopyLog>>,
}

impl Wrapper {
    pub fn new(x: i32, log: Rc<RefCell<CopyLog>>) -> Self {
        Wrapper { x, log }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn set_x(&mut self, x: i32) {
        self.x = x;
    }
}

impl Clone for Wrapper {
    fn clone(&self) -> Self {
        self.log.borrow_mut().record(CLONE);
        Wrapper {
            x: self.x,
            log: Rc::clone(&self.log),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        source.log.borrow_mut().record(CLONE_FROM);
        self.x = source.x;
        self.log = Rc::clone(&source.log);
    }
}

// Equality looks at the field only, never the log
impl PartialEq for Wrapper {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x
    }
}

impl Combine for Wrapper {
    type Output = i32;

    fn combine(&self, arg: i32) -> i32 {
        self.x + arg
    }

    fn absorb(&mut self, arg: i32) {
        self.set_x(arg);
    }
}

use std::cell::RefCell;
use std::rc::Rc;

use snapcall::capture::{
    Callable, CallableMut, CaptureError, MutValueClosure, RefClosure, RefMutClosure, ValueClosure,
};
use snapcall::instrument::{CopyLog, Wrapper, CLONE, CLONE_FROM};

#[test]
fn test_value_capture_isolation() {
    // snapshot 42, argument 10 -> 52, no matter what happens to the source
    let mut x = 42;
    let closure = ValueClosure::capture(&x);
    assert_eq!(52, closure.call(10));

    x = 100;
    assert_eq!(52, closure.call(10));
    assert_eq!(100, x);

    // arbitrarily many mutations, arbitrarily many calls
    for next in [7, -3, 0, i32::MAX, 105] {
        x = next;
        assert_eq!(52, closure.call(10));
        assert_eq!(52, closure.call(10));
    }
}

#[test]
fn test_reference_capture_liveness() {
    // reference to a slot at 42: 142, then 200 once the slot holds 100
    let slot = RefCell::new(42);
    let closure = RefClosure::capture(&slot);
    assert_eq!(142, closure.call(100));

    *slot.borrow_mut() = 100;
    assert_eq!(200, closure.call(100));

    // every later mutation shows up too
    *slot.borrow_mut() = -42;
    assert_eq!(58, closure.call(100));
}

#[test]
fn test_internal_mutation_isolation() {
    // mutable value capture over Wrapper(42): calling with 10 moves the
    // internal copy to 10, the external variable stays 42
    let log = CopyLog::shared();
    let w = Wrapper::new(42, Rc::clone(&log));
    let mut closure = MutValueClosure::capture(&w);

    assert_eq!(52, closure.call(10));
    assert_eq!(10, closure.snapshot().x());
    assert_eq!(42, w.x());

    // later calls see the absorbed copy, never the original snapshot
    assert_eq!(13, closure.call(3));
    assert_eq!(42, w.x());
}

#[test]
fn test_write_through_visibility() {
    // reference capture over Wrapper(42): calling with 10 writes through
    let slot = RefCell::new(Wrapper::new(42, CopyLog::shared()));
    let mut closure = RefMutClosure::capture(&slot);

    assert_eq!(52, closure.call(10));
    assert_eq!(10, slot.borrow().x());
}

#[test]
fn test_value_capture_clones_exactly_once() {
    let log = CopyLog::shared();
    let w = Wrapper::new(42, Rc::clone(&log));

    let closure = ValueClosure::capture(&w);
    assert_eq!(1, log.borrow().count(CLONE));

    // calls never clone again
    assert_eq!(52, closure.call(10));
    assert_eq!(142, closure.call(100));
    assert_eq!(1, log.borrow().count(CLONE));
    assert_eq!(0, log.borrow().count(CLONE_FROM));
}

#[test]
fn test_reference_capture_never_clones() {
    let log = CopyLog::shared();
    let slot = RefCell::new(Wrapper::new(42, Rc::clone(&log)));

    let closure = RefClosure::capture(&slot);
    assert_eq!(52, closure.call(10));
    assert_eq!(0, log.borrow().total());
}

#[test]
fn test_source_mutation_never_reaches_the_snapshot() {
    let log = CopyLog::shared();
    let mut w = Wrapper::new(42, Rc::clone(&log));
    let closure = ValueClosure::capture(&w);

    w.set_x(100);
    assert_eq!(52, closure.call(10));
    assert_eq!(42, closure.snapshot().x());
}

#[test]
fn test_busy_slot_reported_by_mut_closure() {
    let slot = RefCell::new(42);
    let mut closure = RefMutClosure::capture(&slot);

    let guard = slot.borrow();
    let err = closure.try_call(10).unwrap_err();
    assert_eq!(CaptureError::ReferentBusy { operation: "call" }, err);
    assert!(err.to_string().contains("mutably borrowed"));
    drop(guard);

    assert_eq!(Ok(52), closure.try_call(10));
    assert_eq!(10, *slot.borrow());
}

#[test]
fn test_both_strategies_share_the_callable_shape() {
    fn run(closure: &dyn Callable<i32, Output = i32>) -> i32 {
        closure.invoke(10)
    }

    let x = 42;
    let by_value = ValueClosure::capture(&x);

    let slot = RefCell::new(42);
    let by_reference = RefClosure::capture(&slot);

    assert_eq!(run(&by_value), run(&by_reference));

    *slot.borrow_mut() = 100;
    assert_eq!(52, run(&by_value));
    assert_eq!(110, run(&by_reference));
}

#[test]
fn test_mutating_closures_share_the_callable_mut_shape() {
    fn run(closure: &mut dyn CallableMut<i32, Output = i32>) -> i32 {
        closure.invoke_mut(10)
    }

    let x = 42;
    let mut by_value = MutValueClosure::capture(&x);

    let slot = RefCell::new(42);
    let mut by_reference = RefMutClosure::capture(&slot);

    assert_eq!(52, run(&mut by_value));
    assert_eq!(52, run(&mut by_reference));

    // same surface, opposite visibility
    assert_eq!(42, x);
    assert_eq!(10, *slot.borrow());
}

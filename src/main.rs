// snapcall: hand-built closures, demonstrated end to end

use std::cell::RefCell;
use std::rc::Rc;

use snapcall::capture::{
    Callable, MutValueClosure, RefClosure, RefMutClosure, ValueClosure,
};
use snapcall::instrument::{CopyLog, Wrapper, CLONE};

/// The empty-environment case: a closure without state is just a function
struct Add;

impl Callable<(i32, i32)> for Add {
    type Output = i32;

    fn invoke(&self, (a, b): (i32, i32)) -> i32 {
        a + b
    }
}

fn stateless_add() {
    assert_eq!(3, Add.invoke((1, 2)));
    println!("stateless:      add(1, 2) == 3");
}

fn reference_capture_is_live() {
    let slot = RefCell::new(42);
    let add_to_x = RefClosure::capture(&slot);

    assert_eq!(52, add_to_x.call(10));
    *slot.borrow_mut() = 100;
    assert_eq!(110, add_to_x.call(10));
    println!("by reference:   call(10) went 52 -> 110 after the slot changed");
}

fn value_capture_is_frozen() {
    let mut x = 42;
    let add_to_x = ValueClosure::capture(&x);

    assert_eq!(142, add_to_x.call(100));
    for next in 100..=105 {
        x = next;
        assert_eq!(142, add_to_x.call(100));
    }
    assert_eq!(105, x);
    println!("by value:       call(100) == 142 through six source mutations");
}

fn copies_are_observable() {
    let log = CopyLog::shared();
    let w = Wrapper::new(42, Rc::clone(&log));

    let by_value = ValueClosure::capture(&w);
    assert_eq!(52, by_value.call(10));
    assert_eq!(1, log.borrow().count(CLONE));

    let slot = RefCell::new(w);
    let by_reference = RefClosure::capture(&slot);
    assert_eq!(52, by_reference.call(10));
    assert_eq!(1, log.borrow().count(CLONE)); // still one: borrowing is free
    println!("copy count:     value capture cloned once, reference capture never");
}

fn internal_mutation_stays_inside() {
    let w = Wrapper::new(42, CopyLog::shared());
    let mut update = MutValueClosure::capture(&w);

    assert_eq!(52, update.call(10));
    assert_eq!(10, update.snapshot().x());
    assert_eq!(42, w.x());
    println!("mutable copy:   closure state became 10, the source stayed 42");
}

fn write_through_reaches_the_owner() {
    let slot = RefCell::new(Wrapper::new(42, CopyLog::shared()));
    let mut update = RefMutClosure::capture(&slot);

    assert_eq!(52, update.call(10));
    assert_eq!(10, slot.borrow().x());
    println!("write-through:  the owner saw the write, slot is now 10");
}

fn main() {
    stateless_add();
    reference_capture_is_live();
    value_capture_is_frozen();
    copies_are_observable();
    internal_mutation_stays_inside();
    write_through_reaches_the_owner();
    println!("all demonstrations passed");
}

#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;

use zzz::{Generator, GeneratorError};

/// Generator over `values` that counts how many elements were pulled.
pub fn counting_source<T: 'static>(values: Vec<T>) -> (Generator<'static, T>, Rc<Cell<usize>>) {
    let pulls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&pulls);
    let mut values = values.into_iter();
    let gen = Generator::from_fn(move || {
        let next = values.next();
        if next.is_some() {
            counter.set(counter.get() + 1);
        }
        next
    });
    (gen, pulls)
}

/// Yields `0..ok_count`, then fails with `message`.
pub fn failing_after(ok_count: u32, message: &'static str) -> Generator<'static, u32> {
    let mut produced = 0;
    Generator::try_from_fn(move || {
        if produced == ok_count {
            anyhow::bail!(message);
        }
        produced += 1;
        Ok(Some(produced - 1))
    })
}

/// Drain a generator, panicking on the first error.
pub fn collect_ok<T>(gen: Generator<'_, T>) -> Vec<T> {
    gen.collect::<Result<_, GeneratorError>>()
        .expect("generator should not fail")
}

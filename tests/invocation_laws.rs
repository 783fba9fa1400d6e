//! Property-based tests for the invocation combinators.
//!
//! ## Memoize Laws
//! - **Transparency**: `memoize(f)(args) == f(args)` for pure `f`
//! - **Single evaluation**: repeated identical argument lists invoke `f` once
//!
//! ## Once / After Laws
//! - `once(f)` invokes `f` exactly once over any number of calls
//! - `after(n, f)` yields `Null` for calls `1..n`, then `f()` forever
//!
//! ## Compose Laws
//! - **Identity**: `compose([])(x) == x`
//! - **Associativity**: `compose([f, compose([g, h])]) == compose([compose([f, g]), h])`

use std::cell::Cell;
use std::rc::Rc;

use overscore::invocation::{after, compose, memoize, once, Callable};
use overscore::value::Value;
use proptest::prelude::*;

fn counted(calls: &Rc<Cell<usize>>) -> Callable {
    let calls = Rc::clone(calls);
    Callable::new(move |invocation| {
        calls.set(calls.get() + 1);
        let sum = invocation
            .arguments()
            .iter()
            .filter_map(Value::as_int)
            .fold(0i64, i64::wrapping_add);
        Ok(Value::from(sum))
    })
}

fn arithmetic(operation: u8, operand: i64) -> Callable {
    Callable::unary(move |value| {
        let number = value.as_int().unwrap_or(0);
        Value::from(match operation % 3 {
            0 => number.wrapping_add(operand),
            1 => number.wrapping_mul(operand),
            _ => number.wrapping_sub(operand),
        })
    })
}

// =============================================================================
// Memoize Laws
// =============================================================================

proptest! {
    /// Transparency and single evaluation per distinct argument list
    #[test]
    fn prop_memoize_evaluates_each_argument_list_once(
        calls_list in prop::collection::vec(prop::collection::vec(-3i64..3, 0..3), 1..30)
    ) {
        let calls = Rc::new(Cell::new(0));
        let target = counted(&Rc::new(Cell::new(0)));
        let memo = memoize(counted(&calls));

        let mut distinct: Vec<Vec<i64>> = Vec::new();
        for arguments in &calls_list {
            let values: Vec<Value> = arguments.iter().copied().map(Value::from).collect();
            prop_assert_eq!(memo.invoke(&values).unwrap(), target.invoke(&values).unwrap());
            if !distinct.contains(arguments) {
                distinct.push(arguments.clone());
            }
        }
        prop_assert_eq!(calls.get(), distinct.len());
    }
}

// =============================================================================
// Once / After Laws
// =============================================================================

proptest! {
    /// once(f) runs f exactly once however often it is called
    #[test]
    fn prop_once_runs_once(invocations in 1usize..50) {
        let calls = Rc::new(Cell::new(0));
        let wrapped = once(counted(&calls));
        let first = wrapped.invoke(&[]).unwrap();
        for _ in 1..invocations {
            prop_assert_eq!(wrapped.invoke(&[]).unwrap(), first.clone());
        }
        prop_assert_eq!(calls.get(), 1);
    }

    /// after(n, f) is Null before the n-th call and f() from then on
    #[test]
    fn prop_after_fires_on_nth_call(count in 1usize..20, extra in 0usize..10) {
        let calls = Rc::new(Cell::new(0));
        let wrapped = after(count, counted(&calls)).unwrap();
        for _ in 1..count {
            prop_assert_eq!(wrapped.invoke(&[]).unwrap(), Value::Null);
        }
        prop_assert_eq!(calls.get(), 0);
        for _ in 0..=extra {
            prop_assert_eq!(wrapped.invoke(&[]).unwrap(), Value::from(0));
        }
        prop_assert_eq!(calls.get(), 1);
    }
}

// =============================================================================
// Compose Laws
// =============================================================================

proptest! {
    /// Identity Law: the empty composition returns its argument
    #[test]
    fn prop_compose_identity(x in any::<i64>()) {
        let identity = compose(Vec::new());
        prop_assert_eq!(identity.invoke(&[Value::from(x)]).unwrap(), Value::from(x));
    }

    /// Associativity Law
    #[test]
    fn prop_compose_associativity(
        x in -1000i64..1000,
        operations in prop::array::uniform3(any::<u8>()),
        operands in prop::array::uniform3(-10i64..10),
    ) {
        let [f, g, h] = [0, 1, 2].map(|index| arithmetic(operations[index], operands[index]));

        let right_nested = compose([f.clone(), compose([g.clone(), h.clone()])]);
        let left_nested = compose([compose([f, g]), h]);

        prop_assert_eq!(
            right_nested.invoke(&[Value::from(x)]).unwrap(),
            left_nested.invoke(&[Value::from(x)]).unwrap()
        );
    }
}

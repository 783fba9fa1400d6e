//! Integration tests for the invocation layer.
//!
//! Covers the three invocation forms (bind, call, apply) and the stateful
//! and stateless combinators built on them.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use overscore::error::OverscoreError;
use overscore::invocation::{
    after, apply, bind, compose, expect_callable, memoize, once, wrap, After, Callable, Memoized,
    Once,
};
use overscore::value::{Object, Value};
use overscore::{call, compose, values};
use rstest::rstest;

fn counting(calls: &Rc<Cell<usize>>, result: Value) -> Callable {
    let calls = Rc::clone(calls);
    Callable::nullary(move || {
        calls.set(calls.get() + 1);
        result.clone()
    })
}

fn join_arguments() -> Callable {
    Callable::new(|invocation| {
        let parts: Vec<String> = invocation
            .arguments()
            .iter()
            .map(ToString::to_string)
            .collect();
        Ok(Value::from(parts.join(",")))
    })
}

// =============================================================================
// bind / call / apply
// =============================================================================

#[test]
fn test_bind_resolves_receiver() {
    let fro = Callable::new(|invocation| Ok(invocation.this()?.get("fro").unwrap_or_default()));
    let context = Value::from(Object::record([("fro", "zzle")]));

    let bound = bind(&fro, Some(&context));

    assert_eq!(bound.invoke(&[]).unwrap(), Value::from("zzle"));
    assert!(!fro.is_bound());
}

#[test]
fn test_bind_is_permanent() {
    let name = Callable::method(|this, _| Ok(this.get("name").unwrap_or_default()));
    let first = Value::from(Object::record([("name", "first")]));
    let second = Value::from(Object::record([("name", "second")]));

    let bound = bind(&name, Some(&first));

    assert_eq!(apply(&bound, None, &[]).unwrap(), Value::from("first"));
    assert_eq!(apply(&bound, Some(&Value::from(3)), &[]).unwrap(), Value::from("first"));
    assert_eq!(apply(&name, Some(&second), &[]).unwrap(), Value::from("second"));
}

#[rstest]
#[case(None)]
#[case(Some(Value::Null))]
#[case(Some(Value::from(42)))]
#[case(Some(Value::from("context")))]
#[case(Some(Value::List(values![1, 2])))]
fn test_non_object_contexts_leave_callable_unbound(#[case] context: Option<Value>) {
    let callable = Callable::method(|this, _| Ok(Value::from(this.class())));
    let bound = bind(&callable, context.as_ref());
    assert!(!bound.is_bound());
    assert!(matches!(bound.invoke(&[]), Err(OverscoreError::Unbound { .. })));
}

#[test]
fn test_call_passes_arguments_positionally() {
    let greet = Callable::binary(|hello, world| Value::from(format!("{hello} {world}")));
    assert_eq!(call!(greet, None, "hello", "world").unwrap(), Value::from("hello world"));
}

#[test]
fn test_call_with_context() {
    let greet = Callable::new(|invocation| {
        let world = invocation.this()?.get("world").unwrap_or_default();
        Ok(Value::from(format!("{} {world}", invocation.argument(0))))
    });
    let context = Value::from(Object::record([("world", "world")]));
    assert_eq!(
        call!(greet, Some(&context), "hello", "ignored").unwrap(),
        Value::from("hello world")
    );
}

#[test]
fn test_apply_takes_argument_list() {
    let greet = Callable::unary(|world| Value::from(format!("hello {world}")));
    assert_eq!(
        apply(&greet, None, &values!["world"]).unwrap(),
        Value::from("hello world")
    );
}

#[test]
fn test_apply_propagates_failure_unchanged() {
    let failing = Callable::new(|_| Err(OverscoreError::raised("boom")));
    let error = apply(&failing, None, &[]).unwrap_err();
    assert!(matches!(error, OverscoreError::Raised { ref message } if message == "boom"));
}

#[test]
fn test_bound_method_mutates_shared_object() {
    let counter = Object::record([("count", 0)]);
    let increment = Callable::method(|this, _| {
        this.update("count", |count| {
            *count = Value::from(count.as_int().unwrap_or(0) + 1);
        });
        Ok(Value::Null)
    });
    let context = Value::from(counter.clone());
    for _ in 0..3 {
        call!(increment, Some(&context)).unwrap();
    }
    assert_eq!(counter.get("count"), Some(Value::from(3)));
}

// =============================================================================
// memoize
// =============================================================================

#[test]
fn test_memoize_caches_by_argument_list() {
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let inner = join_arguments();
    let joined = Callable::new(move |invocation| {
        counter.set(counter.get() + 1);
        inner.invoke(invocation.arguments())
    });
    let memo = memoize(joined);

    assert_eq!(memo.invoke(&values![1, 2]).unwrap(), Value::from("1,2"));
    assert_eq!(memo.invoke(&values![1, 2]).unwrap(), Value::from("1,2"));
    assert_eq!(memo.invoke(&values![1, 2, 3]).unwrap(), Value::from("1,2,3"));
    assert_eq!(calls.get(), 2);
}

#[test]
fn test_memoize_distinguishes_numeric_representations() {
    let calls = Rc::new(Cell::new(0));
    let memo = Memoized::new(counting(&calls, Value::Null));
    memo.call(&values![1]).unwrap();
    memo.call(&values![1.0]).unwrap();
    memo.call(&values!["1"]).unwrap();
    assert_eq!(calls.get(), 3);
    assert_eq!(memo.cache_len(), 3);
}

#[test]
fn test_memoize_keys_objects_by_structure() {
    let calls = Rc::new(Cell::new(0));
    let memo = Memoized::new(counting(&calls, Value::from("cached")));
    memo.call(&[Value::from(Object::record([("id", 1)]))]).unwrap();
    memo.call(&[Value::from(Object::record([("id", 1)]))]).unwrap();
    memo.call(&[Value::from(Object::record([("id", 2)]))]).unwrap();
    assert_eq!(calls.get(), 2);
}

#[test]
fn test_memoize_instances_do_not_share_caches() {
    let calls = Rc::new(Cell::new(0));
    let target = counting(&calls, Value::from(1));
    let first = memoize(target.clone());
    let second = memoize(target);
    first.invoke(&[]).unwrap();
    second.invoke(&[]).unwrap();
    first.invoke(&[]).unwrap();
    assert_eq!(calls.get(), 2);
}

#[test]
fn test_memoize_handles_share_one_cache() {
    let calls = Rc::new(Cell::new(0));
    let memo = Memoized::new(counting(&calls, Value::from(1)));
    let first = memo.to_callable();
    let second = memo.to_callable();
    first.invoke(&[]).unwrap();
    second.invoke(&[]).unwrap();
    assert_eq!(calls.get(), 1);
}

#[test]
fn test_memoize_is_context_free() {
    let memo = memoize(Callable::method(|this, _| Ok(Value::from(this.class()))));
    let context = Value::from(Object::new("Ignored"));
    assert!(matches!(
        apply(&memo, Some(&context), &[]),
        Err(OverscoreError::Unbound { .. })
    ));
}

#[test]
fn test_memoize_keys_fresh_callables_apart() {
    let run = memoize(Callable::new(|invocation| {
        expect_callable(&invocation.argument(0), "run")?.invoke(&[])
    }));
    for index in 0..50 {
        let produce = Callable::nullary(move || Value::from(index));
        assert_eq!(run.invoke(&[Value::from(produce)]).unwrap(), Value::from(index));
    }
}

#[test]
fn test_memoize_reuses_result_for_same_callable() {
    let calls = Rc::new(Cell::new(0));
    let run = memoize(Callable::new(|invocation| {
        expect_callable(&invocation.argument(0), "run")?.invoke(&[])
    }));
    let produce = counting(&calls, Value::from("made"));
    run.invoke(&[Value::from(produce.clone())]).unwrap();
    run.invoke(&[Value::from(produce)]).unwrap();
    assert_eq!(calls.get(), 1);
}

#[test]
fn test_memoize_self_referencing_object_argument() {
    let calls = Rc::new(Cell::new(0));
    let memo = memoize(counting(&calls, Value::from("seen")));
    let node = Object::new("Node");
    node.set("me", node.clone());

    assert_eq!(memo.invoke(&[Value::from(node.clone())]).unwrap(), Value::from("seen"));
    assert_eq!(memo.invoke(&[Value::from(node.clone())]).unwrap(), Value::from("seen"));
    assert_eq!(calls.get(), 1);

    let other = Object::new("Node");
    other.set("me", other.clone());
    memo.invoke(&[Value::from(other.clone())]).unwrap();
    assert_eq!(calls.get(), 1);

    node.set("me", Value::Null);
    other.set("me", Value::Null);
}

#[test]
fn test_memoize_reentrant_invocation() {
    let slot: Rc<RefCell<Option<Callable>>> = Rc::new(RefCell::new(None));
    let inner = Rc::clone(&slot);
    let fibonacci = memoize(Callable::new(move |invocation| {
        let number = invocation.argument(0).as_int().unwrap_or(0);
        if number < 2 {
            return Ok(Value::from(number));
        }
        let recurse = inner
            .borrow()
            .clone()
            .ok_or_else(|| OverscoreError::raised("unset"))?;
        let left = recurse.invoke(&values![number - 1])?.as_int().unwrap_or(0);
        let right = recurse.invoke(&values![number - 2])?.as_int().unwrap_or(0);
        Ok(Value::from(left + right))
    }));
    slot.replace(Some(fibonacci.clone()));
    assert_eq!(fibonacci.invoke(&values![30]).unwrap(), Value::from(832_040));
    slot.replace(None);
}

// =============================================================================
// once / after
// =============================================================================

#[test]
fn test_once_invokes_exactly_once() {
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let increment = once(Callable::nullary(move || {
        counter.set(counter.get() + 1);
        Value::from(counter.get())
    }));
    increment.invoke(&[]).unwrap();
    assert_eq!(increment.invoke(&[]).unwrap(), Value::from(1));
    assert_eq!(increment.invoke(&values![5]).unwrap(), Value::from(1));
    assert_eq!(calls.get(), 1);
}

#[test]
fn test_once_does_not_forward_arguments() {
    let first_argument = Once::new(Callable::new(|invocation| Ok(invocation.argument(0))));
    let callable = first_argument.to_callable();
    assert_eq!(callable.invoke(&values!["dropped"]).unwrap(), Value::Null);
    assert!(first_argument.is_called());
}

#[test]
fn test_after_fires_on_count() {
    let finally = after(2, Callable::nullary(|| Value::from("finally called!"))).unwrap();
    assert_eq!(finally.invoke(&[]).unwrap(), Value::Null);
    assert_eq!(finally.invoke(&[]).unwrap(), Value::from("finally called!"));
}

#[test]
fn test_after_three_sequence() {
    let calls = Rc::new(Cell::new(0));
    let after = After::new(3, counting(&calls, Value::from("done"))).unwrap();

    let results: Vec<Value> = (0..5).map(|_| after.call().unwrap()).collect();

    assert_eq!(results, values![Value::Null, Value::Null, "done", "done", "done"]);
    assert_eq!(calls.get(), 1);
    assert_eq!(after.calls(), 5);
}

#[test]
fn test_after_zero_is_invalid() {
    let error = after(0, Callable::nullary(|| Value::Null)).unwrap_err();
    assert!(matches!(error, OverscoreError::InvalidArgument { operation: "after", .. }));
}

#[test]
fn test_after_failure_is_propagated_once() {
    let after = After::new(1, Callable::new(|_| Err(OverscoreError::raised("late")))).unwrap();
    assert!(after.call().is_err());
    assert_eq!(after.call().unwrap(), Value::Null);
}

// =============================================================================
// wrap / compose
// =============================================================================

#[test]
fn test_wrap_hands_callable_to_wrapper() {
    let world = Callable::nullary(|| Value::from("world"));
    let hello = wrap(
        world,
        Callable::new(|invocation| {
            let inner = expect_callable(&invocation.argument(0), "hello")?;
            Ok(Value::from(format!("hello {}!", inner.invoke(&[])?)))
        }),
    );
    assert_eq!(hello.invoke(&[]).unwrap(), Value::from("hello world!"));
}

#[test]
fn test_wrapper_may_skip_callable() {
    let calls = Rc::new(Cell::new(0));
    let skipped = wrap(counting(&calls, Value::Null), Callable::nullary(|| Value::from("skipped")));
    assert_eq!(skipped.invoke(&[]).unwrap(), Value::from("skipped"));
    assert_eq!(calls.get(), 0);
}

#[test]
fn test_compose_threads_left_to_right() {
    let greet = Callable::unary(|who| Value::from(format!("hello {who}")));
    let smart = Callable::unary(|greeting| Value::from(format!("{greeting}, you smartass!")));
    let composed = compose([greet, smart]);
    assert_eq!(
        composed.invoke(&values!["harry"]).unwrap(),
        Value::from("hello harry, you smartass!")
    );
}

#[test]
fn test_compose_macro_matches_function() {
    let increment = Callable::unary(|value| Value::from(value.as_int().unwrap_or(0) + 1));
    let double = Callable::unary(|value| Value::from(value.as_int().unwrap_or(0) * 2));
    let by_macro = compose!(increment.clone(), double.clone());
    let by_function = compose(vec![increment, double]);
    assert_eq!(
        by_macro.invoke(&values![7]).unwrap(),
        by_function.invoke(&values![7]).unwrap()
    );
}

#[test]
fn test_empty_compose_is_identity() {
    let identity = compose!();
    assert_eq!(identity.invoke(&values!["same"]).unwrap(), Value::from("same"));
}

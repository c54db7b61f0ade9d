use runtime_curry::{curry, Function, Value};

fn add(arity: usize) -> Function {
    Function::new(arity, |args| {
        Value::Number(args.iter().filter_map(Value::as_number).sum())
    })
}

#[test]
fn one_argument_per_call() {
    let curried = curry(Value::from(add(5)), None).unwrap();
    let result = Value::from(curried)
        .call(&[1.0.into()])
        .unwrap()
        .call(&[1.0.into()])
        .unwrap()
        .call(&[1.0.into()])
        .unwrap()
        .call(&[1.0.into()])
        .unwrap()
        .call(&[2.0.into()])
        .unwrap();

    assert_eq!(result, Value::Number(6.0));
}

#[test]
fn uneven_groups_per_call() {
    let curried = curry(Value::from(add(5)), None).unwrap();
    let result = Value::from(curried)
        .call(&[1.0.into(), 1.0.into(), 1.0.into()])
        .unwrap()
        .call(&[1.0.into(), 3.0.into()])
        .unwrap();

    assert_eq!(result, Value::Number(7.0));
}

#[test]
fn explicit_length_overrides_the_declared_arity() {
    let curried = curry(Value::from(add(5)), Some(2.0.into())).unwrap();
    let result = Value::from(curried)
        .call(&[1.0.into()])
        .unwrap()
        .call(&[2.0.into()])
        .unwrap();

    assert_eq!(result, Value::Number(3.0));
}

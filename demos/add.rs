use runtime_curry::{curry, Function, Value};

fn main() {
    let add = Function::new(2, |args| {
        Value::Number(args.iter().filter_map(Value::as_number).sum())
    });

    let add = curry(Value::from(add), None).expect("add is callable");
    let three = Value::from(add)
        .call(&[1.0.into()])
        .expect("still a function after one argument")
        .call(&[2.0.into()])
        .expect("two arguments complete the chain");

    assert_eq!(three, Value::Number(3.0));

    println!("{three} = {}", 3);
}

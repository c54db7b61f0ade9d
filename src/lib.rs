//! Curries variadic callable values at runtime: a curried function can be
//! called with fewer arguments than it expects and returns a new function
//! awaiting the rest, until enough arguments have accumulated to invoke the
//! original.
//!
//! ```
//! use runtime_curry::{curry, Function, Value};
//!
//! let add = Function::new(2, |args| {
//!     Value::Number(args.iter().filter_map(Value::as_number).sum())
//! });
//!
//! let add = curry(Value::from(add), None)?;
//! let three = Value::from(add)
//!     .call(&[1.0.into()])
//!     .unwrap()
//!     .call(&[2.0.into()])
//!     .unwrap();
//! assert_eq!(three, Value::Number(3.0));
//! # Ok::<(), runtime_curry::CurryError>(())
//! ```

mod error;
mod value;

pub use error::CurryError;
pub use value::{Function, Value};

/// Returns a curried version of a callable value.
///
/// `length` is the number of arguments to collect before `predicate` is
/// invoked; it defaults to the predicate's declared arity. Each invocation
/// of the returned wrapper either completes the chain, when it supplies at
/// least the remaining count, or yields a new wrapper holding everything
/// supplied so far.
///
/// Fails when `predicate` is not a function or when an explicit `length` is
/// not a number. The wrapper itself never fails; on the completing call all
/// arguments, extras included, are handed to the predicate.
pub fn curry(predicate: Value, length: Option<Value>) -> Result<Function, CurryError> {
    let target = match predicate {
        Value::Function(target) => target,
        other => {
            return Err(CurryError::NotCallable {
                actual: other.type_name(),
            })
        }
    };

    let remaining = match length {
        Some(Value::Number(threshold)) => threshold,
        Some(other) => {
            return Err(CurryError::InvalidThreshold {
                actual: other.type_name(),
            })
        }
        None => target.arity() as f64,
    };

    Ok(curried(target, Vec::new(), remaining))
}

// The threshold stays a float so that zero, negative and fractional lengths
// behave like any other number: a call completes exactly when it supplies
// `remaining` or more arguments. In particular an empty call against a
// positive threshold subtracts nothing and yields another wrapper.
fn curried(target: Function, captured: Vec<Value>, remaining: f64) -> Function {
    let arity = if remaining > 0.0 {
        remaining.ceil() as usize
    } else {
        0
    };

    Function::new(arity, move |args| {
        let mut collected = captured.clone();
        collected.extend_from_slice(args);

        if args.len() as f64 >= remaining {
            target.invoke(&collected)
        } else {
            Value::Function(curried(
                target.clone(),
                collected,
                remaining - args.len() as f64,
            ))
        }
    })
}

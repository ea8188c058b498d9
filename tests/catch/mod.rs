use result_rail::catch::{as_result, raise, ConfigError};
use result_rail::{Outcome, Panicked, UnwrapError};
use std::panic;

#[derive(Debug, PartialEq)]
struct ValueError(i32);

#[derive(Debug, PartialEq)]
struct KeyError(&'static str);

#[derive(Debug, PartialEq)]
enum AppError {
    Value(i32),
    Key(&'static str),
}

impl From<ValueError> for AppError {
    fn from(error: ValueError) -> Self {
        Self::Value(error.0)
    }
}

impl From<KeyError> for AppError {
    fn from(error: KeyError) -> Self {
        Self::Key(error.0)
    }
}

fn checked(x: i32) -> i32 {
    if x < 0 {
        raise(ValueError(x));
    }
    x * 2
}

#[test]
fn normal_return_becomes_ok() {
    let wrapped = as_result::<ValueError>().kind::<ValueError>().wrap(checked).unwrap();
    assert_eq!(wrapped.call(4), Outcome::Ok(8));
}

#[test]
fn configured_kind_becomes_err() {
    let wrapped = as_result::<ValueError>().kind::<ValueError>().wrap(checked).unwrap();
    assert_eq!(wrapped.call(-4), Outcome::Err(ValueError(-4)));
}

#[test]
fn several_kinds_convert_into_one_error() {
    let lookup = as_result::<AppError>()
        .kind::<ValueError>()
        .kind::<KeyError>()
        .wrap(|key: &'static str| match key {
            "one" => 1,
            "bad" => raise(ValueError(-1)),
            other => raise(KeyError(other)),
        })
        .unwrap();

    assert_eq!(lookup.call("one"), Outcome::Ok(1));
    assert_eq!(lookup.call("bad"), Outcome::Err(AppError::Value(-1)));
    assert_eq!(lookup.call("two"), Outcome::Err(AppError::Key("two")));
}

#[test]
fn unconfigured_kind_propagates_unchanged() {
    let wrapped = as_result::<KeyError>().kind::<KeyError>().wrap(checked).unwrap();

    let payload = panic::catch_unwind(|| wrapped.call(-3)).unwrap_err();
    assert_eq!(payload.downcast_ref::<ValueError>(), Some(&ValueError(-3)));
}

#[test]
fn plain_panics_are_not_swallowed() {
    let wrapped = as_result::<ValueError>()
        .kind::<ValueError>()
        .wrap(|_: ()| -> i32 { panic!("unrelated") })
        .unwrap();

    let payload = panic::catch_unwind(|| wrapped.call(())).unwrap_err();
    assert_eq!(payload.downcast_ref::<&str>(), Some(&"unrelated"));
}

#[test]
fn missing_kinds_fail_at_wrap_time() {
    let wrapped = as_result::<ValueError>().wrap(checked);
    assert_eq!(wrapped.err(), Some(ConfigError::NoErrorKinds));
    assert_eq!(
        ConfigError::NoErrorKinds.to_string(),
        "as_result() requires one or more error kinds"
    );
}

#[test]
fn kind_names_are_listed_in_order() {
    let builder = as_result::<AppError>().kind::<ValueError>().kind::<KeyError>();
    let names: Vec<_> = builder.kind_names().collect();

    assert_eq!(names.len(), 2);
    assert!(names[0].ends_with("ValueError"));
    assert!(names[1].ends_with("KeyError"));
}

#[test]
fn tuple_arguments_and_fn_mut() {
    let mut calls = 0;
    let mut wrapped = as_result::<ValueError>()
        .kind::<ValueError>()
        .wrap(|(a, b): (i32, i32)| {
            calls += 1;
            checked(a + b)
        })
        .unwrap();

    assert_eq!(wrapped.call_mut((1, 2)), Outcome::Ok(6));
    assert_eq!(wrapped.call_mut((1, -2)), Outcome::Err(ValueError(-1)));
    drop(wrapped);
    assert_eq!(calls, 2);
}

#[test]
fn unwrap_or_raise_round_trips_through_the_adapter() {
    let wrapped = as_result::<KeyError>()
        .kind::<KeyError>()
        .wrap(|input: Outcome<i32, &'static str>| input.unwrap_or_raise(KeyError))
        .unwrap();

    assert_eq!(wrapped.call(Outcome::Ok(5)), Outcome::Ok(5));
    assert_eq!(wrapped.call(Outcome::Err("gone")), Outcome::Err(KeyError("gone")));
}

#[test]
fn panicked_exposes_the_payload() {
    let payload = panic::catch_unwind(|| raise(ValueError(9))).unwrap_err();
    let panicked = Panicked::new(payload);

    assert_eq!(panicked.message(), None);
    assert_eq!(panicked.downcast_ref::<ValueError>(), Some(&ValueError(9)));
    assert_eq!(panicked.to_string(), "panicked with a non-string payload");

    let panicked = Panicked::new(Box::new(String::from("text")));
    assert_eq!(panicked.message(), Some("text"));
}

type Failed = UnwrapError<i32, &'static str>;

#[test]
fn unwrap_panics_carry_a_message_not_an_unwrap_error() {
    let wrapped = as_result::<Failed>()
        .kind::<Failed>()
        .wrap(|o: Outcome<i32, &'static str>| o.unwrap())
        .unwrap();

    let payload = panic::catch_unwind(|| wrapped.call(Outcome::Err("nay"))).unwrap_err();
    assert!(payload.downcast_ref::<Failed>().is_none());
    let message = payload.downcast_ref::<String>().unwrap();
    assert!(message.contains("\"nay\""));
}

#[test]
fn raised_unwrap_errors_are_caught() {
    let wrapped = as_result::<Failed>()
        .kind::<Failed>()
        .wrap(|o: Outcome<i32, &'static str>| match o.try_unwrap() {
            Ok(value) => value,
            Err(error) => raise(error),
        })
        .unwrap();

    assert_eq!(wrapped.call(Outcome::Ok(3)), Outcome::Ok(3));
    let caught = wrapped.call(Outcome::Err("nay")).unwrap_err();
    assert_eq!(caught.into_result(), Outcome::Err("nay"));
}

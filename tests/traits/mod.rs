use result_rail::traits::{is_err, is_ok, Fallible};
use result_rail::Outcome;

fn describe<F: Fallible>(value: F) -> &'static str {
    if value.is_ok() {
        "success"
    } else {
        "failure"
    }
}

#[test]
fn free_predicates_accept_every_shape() {
    let outcome: Outcome<i32, ()> = Outcome::Ok(1);
    let result: Result<i32, ()> = Err(());
    let joined = Outcome::<i32, ()>::Ok(1).join(Outcome::Ok(2));

    assert!(is_ok(&outcome));
    assert!(is_err(&result));
    assert!(is_ok(&joined));
}

#[test]
fn into_outcome_normalises() {
    let parsed: Result<u8, std::num::ParseIntError> = "7".parse();
    assert_eq!(parsed.into_outcome(), Outcome::Ok(7));

    let joined = Outcome::<i32, &str>::Ok(1).join(Outcome::<i32, _>::Err("no"));
    assert_eq!(Fallible::into_outcome(joined), Outcome::Err("no"));
}

#[test]
fn generic_code_sees_a_single_interface() {
    assert_eq!(describe(Outcome::<(), ()>::Ok(())), "success");
    assert_eq!(describe(Err::<(), ()>(())), "failure");
}

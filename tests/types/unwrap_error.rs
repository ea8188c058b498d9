use result_rail::{Outcome, UnwrapError};

#[test]
fn carries_the_outcome_and_message() {
    let err = UnwrapError::new(Outcome::<i32, &str>::Err("boom"), "it failed");

    assert_eq!(err.result(), &Outcome::Err("boom"));
    assert_eq!(err.message(), "it failed");
    assert_eq!(err.to_string(), "it failed");
    assert_eq!(err.into_result(), Outcome::Err("boom"));
}

#[test]
fn unwrap_err_on_ok_keeps_the_value() {
    let err = Outcome::<&str, i32>::Ok("yay").try_unwrap_err().unwrap_err();

    assert_eq!(err.result(), &Outcome::Ok("yay"));
    assert_eq!(err.message(), "called `Outcome::unwrap_err()` on an `Ok` value");
}

#[test]
fn try_expect_err_prefixes_the_message() {
    let err = Outcome::<i32, &str>::Ok(5).try_expect_err("wanted an error").unwrap_err();
    assert_eq!(err.message(), "wanted an error: 5");
}

#[test]
fn comparable_and_cloneable() {
    let err = Outcome::<i32, &str>::Err("x").try_unwrap().unwrap_err();
    assert_eq!(err.clone(), err);
}

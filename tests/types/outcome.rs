use result_rail::{Outcome, ParseOutcomeError};
use std::cell::Cell;
use std::collections::HashSet;

fn sq(x: i32) -> Outcome<i32, i32> {
    Outcome::Ok(x * x)
}

fn to_err(x: i32) -> Outcome<i32, i32> {
    Outcome::Err(x)
}

#[test]
fn and_then_chains_until_first_error() {
    assert_eq!(Outcome::Ok(2).and_then(sq).and_then(sq), Outcome::Ok(16));
    assert_eq!(Outcome::Ok(2).and_then(sq).and_then(to_err), Outcome::Err(4));
    assert_eq!(Outcome::Ok(2).and_then(to_err).and_then(sq), Outcome::Err(2));
    assert_eq!(Outcome::Err(3).and_then(sq).and_then(sq), Outcome::Err(3));
}

#[test]
fn and_then_is_associative() {
    let add_one = |x: i32| Outcome::<i32, i32>::Ok(x + 1);

    for start in [Outcome::Ok(3), Outcome::Err(-1)] {
        let left = start.and_then(sq).and_then(add_one);
        let right = start.and_then(|x| sq(x).and_then(add_one));
        assert_eq!(left, right);
    }
}

#[test]
fn ok_is_identity_for_and_then() {
    assert_eq!(Outcome::<i32, i32>::Ok(5).and_then(sq), sq(5));
    assert_eq!(Outcome::<i32, i32>::Ok(5).and_then(Outcome::Ok), Outcome::Ok(5));
    assert_eq!(Outcome::<i32, i32>::Err(5).and_then(Outcome::Ok), Outcome::Err(5));
}

#[test]
fn or_else_recovers_errors_only() {
    let recover = |x: i32| Outcome::<i32, i32>::Ok(x * 10);

    assert_eq!(Outcome::Ok(2).or_else(recover), Outcome::Ok(2));
    assert_eq!(Outcome::Err(2).or_else(recover), Outcome::Ok(20));
    assert_eq!(Outcome::<i32, i32>::Err(2).or_else(to_err).or_else(to_err), Outcome::Err(2));
}

#[test]
fn callbacks_are_not_invoked_on_the_other_variant() {
    let calls = Cell::new(0);
    let count = |x: i32| {
        calls.set(calls.get() + 1);
        x
    };

    let _ = Outcome::<i32, i32>::Err(1).map(count);
    let _ = Outcome::<i32, i32>::Ok(1).map_err(count);
    let _ = Outcome::<i32, i32>::Ok(1).unwrap_or_else(count);
    let _ = Outcome::<i32, i32>::Err(1).and_then(|x| Outcome::<i32, i32>::Ok(count(x)));
    let _ = Outcome::<i32, i32>::Ok(1).or_else(|x| Outcome::<i32, i32>::Ok(count(x)));

    assert_eq!(calls.get(), 0);
}

#[test]
fn map_family_transforms_the_matching_side() {
    let ok: Outcome<i32, &str> = Outcome::Ok(2);
    let err: Outcome<i32, &str> = Outcome::Err("nope");

    assert_eq!(ok.map(|x| x + 1), Outcome::Ok(3));
    assert_eq!(err.map(|x| x + 1), Outcome::Err("nope"));
    assert_eq!(ok.map_err(str::len), Outcome::Ok(2));
    assert_eq!(err.map_err(str::len), Outcome::Err(4));
    assert_eq!(ok.map_or(0, |x| x * 3), 6);
    assert_eq!(err.map_or(0, |x| x * 3), 0);
    assert_eq!(ok.map_or_else(|| -1, |x| x * 3), 6);
    assert_eq!(err.map_or_else(|| -1, |x| x * 3), -1);
}

#[test]
fn extractors_pick_the_right_side() {
    let ok: Outcome<i32, &str> = Outcome::Ok(7);
    let err: Outcome<i32, &str> = Outcome::Err("bad");

    assert!(ok.is_ok());
    assert!(err.is_err());
    assert_eq!(ok.ok(), Some(7));
    assert_eq!(ok.err(), None);
    assert_eq!(err.ok(), None);
    assert_eq!(err.err(), Some("bad"));
    assert_eq!(ok.unwrap(), 7);
    assert_eq!(err.unwrap_err(), "bad");
    assert_eq!(ok.expect("present"), 7);
    assert_eq!(err.expect_err("absent"), "bad");
    assert_eq!(err.unwrap_or(0), 0);
    assert_eq!(err.unwrap_or_else(|e| e.len() as i32), 3);
    assert_eq!(err.unwrap_or_default(), 0);
}

#[test]
#[should_panic(expected = "called `Outcome::unwrap()` on an `Err` value")]
fn unwrap_panics_on_err() {
    Outcome::<i32, &str>::Err("bad").unwrap();
}

#[test]
#[should_panic(expected = "needed a value: \"bad\"")]
fn expect_panics_with_custom_message() {
    Outcome::<i32, &str>::Err("bad").expect("needed a value");
}

#[test]
fn try_unwrap_reports_the_original_outcome() {
    let err = Outcome::<i32, &str>::Err("bad").try_unwrap().unwrap_err();
    assert_eq!(err.result(), &Outcome::Err("bad"));
    assert_eq!(err.message(), "called `Outcome::unwrap()` on an `Err` value");

    let err = Outcome::<i32, &str>::Ok(1).try_unwrap_err().unwrap_err();
    assert_eq!(err.into_result(), Outcome::Ok(1));

    let err = Outcome::<i32, &str>::Err("bad").try_expect("custom").unwrap_err();
    assert_eq!(err.to_string(), "custom: \"bad\"");
}

#[test]
fn predicates_and_combinators() {
    let ok: Outcome<i32, i32> = Outcome::Ok(4);
    let err: Outcome<i32, i32> = Outcome::Err(4);

    assert!(ok.is_ok_and(|x| x > 3));
    assert!(!err.is_ok_and(|x| x > 3));
    assert!(err.is_err_and(|e| e == 4));
    assert_eq!(ok.and(Outcome::<&str, i32>::Ok("next")), Outcome::Ok("next"));
    assert_eq!(err.and(Outcome::<&str, i32>::Ok("next")), Outcome::Err(4));
    assert_eq!(ok.or(Outcome::<i32, ()>::Err(())), Outcome::Ok(4));
    assert_eq!(err.or(Outcome::<i32, ()>::Ok(9)), Outcome::Ok(9));
    assert_eq!(Outcome::<Outcome<i32, i32>, i32>::Ok(ok).flatten(), ok);
}

#[test]
fn inspect_sees_the_matching_side() {
    let seen = Cell::new(0);

    let value = Outcome::<i32, i32>::Ok(3)
        .inspect(|x| seen.set(*x))
        .inspect_err(|_| seen.set(-1));

    assert_eq!(value, Outcome::Ok(3));
    assert_eq!(seen.get(), 3);
}

#[test]
fn as_ref_and_as_mut_borrow_the_payload() {
    let mut value: Outcome<String, i32> = Outcome::Ok("a".to_string());
    if let Outcome::Ok(text) = value.as_mut() {
        text.push('b');
    }
    assert_eq!(value.as_ref().map(String::len), Outcome::Ok(2));
}

#[test]
fn iteration_yields_the_success_at_most_once() {
    let ok: Outcome<i32, &str> = Outcome::Ok(1);
    let err: Outcome<i32, &str> = Outcome::Err("x");

    assert_eq!(ok.iter().collect::<Vec<_>>(), vec![&1]);
    assert_eq!(err.into_iter().count(), 0);

    let collected: Outcome<Vec<i32>, &str> =
        vec![Outcome::Ok(1), Outcome::Ok(2)].into_iter().collect();
    assert_eq!(collected, Outcome::Ok(vec![1, 2]));

    let collected: Outcome<Vec<i32>, &str> =
        vec![Outcome::Ok(1), Outcome::Err("first"), Outcome::Err("second")]
            .into_iter()
            .collect();
    assert_eq!(collected, Outcome::Err("first"));
}

#[test]
fn equality_distinguishes_variants() {
    assert_eq!(Outcome::<i32, i32>::Ok(1), Outcome::Ok(1));
    assert_ne!(Outcome::<i32, i32>::Ok(1), Outcome::Ok(2));
    assert_ne!(Outcome::<i32, i32>::Ok(1), Outcome::Err(1));
}

#[test]
fn hash_is_consistent_with_equality() {
    let mut set = HashSet::new();
    set.insert(Outcome::<i32, i32>::Ok(1));
    set.insert(Outcome::Ok(1));
    set.insert(Outcome::Err(1));
    set.insert(Outcome::Ok(2));

    assert_eq!(set.len(), 3);
    assert!(set.contains(&Outcome::Ok(1)));
    assert!(set.contains(&Outcome::Err(1)));
}

#[test]
fn display_round_trips_through_from_str() {
    let values: [Outcome<i32, String>; 3] = [
        Outcome::Ok(-12),
        Outcome::Err("bad input".to_string()),
        Outcome::Err(String::new()),
    ];

    for value in values {
        let text = value.to_string();
        assert_eq!(text.parse::<Outcome<i32, String>>(), Ok(value));
    }

    assert_eq!(Outcome::<i32, i32>::Ok(123).to_string(), "Ok(123)");
    assert_eq!(format!("{:?}", Outcome::<i32, &str>::Err("x")), "Err(\"x\")");
}

#[test]
fn from_str_rejects_malformed_input() {
    assert_eq!("Maybe(1)".parse::<Outcome<i32, i32>>(), Err(ParseOutcomeError::Malformed));
    assert_eq!("Ok(1".parse::<Outcome<i32, i32>>(), Err(ParseOutcomeError::Malformed));
    assert!(matches!(
        "Ok(one)".parse::<Outcome<i32, i32>>(),
        Err(ParseOutcomeError::Value(_))
    ));
    assert!(matches!(
        "Err(one)".parse::<Outcome<i32, i32>>(),
        Err(ParseOutcomeError::Error(_))
    ));
}

#[test]
fn converts_to_and_from_result() {
    let outcome: Outcome<i32, &str> = Ok(1).into();
    assert_eq!(outcome, Outcome::Ok(1));

    let result: Result<i32, &str> = Outcome::Err("x").into();
    assert_eq!(result, Err("x"));

    assert_eq!(Outcome::from_result(Err::<i32, _>("y")).into_result(), Err("y"));
}

#[cfg(feature = "std")]
#[test]
fn pipe_catches_panics() {
    use result_rail::Panicked;

    let piped: Outcome<i32, Panicked> = Outcome::Ok(2).pipe(|x: i32| x * 10);
    assert_eq!(piped.ok(), Some(20));

    let piped: Outcome<i32, String> = Outcome::Ok(2).pipe(|x: i32| -> i32 {
        if x > 1 {
            panic!("too big");
        }
        x
    });
    assert_eq!(piped, Outcome::Err("panicked: too big".to_string()));

    let untouched: Outcome<i32, String> = Outcome::Err("early".to_string()).pipe(|x: i32| x);
    assert_eq!(untouched, Outcome::Err("early".to_string()));
}

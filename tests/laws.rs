use proptest::prelude::*;
use railway::either::{from_nullable, try_catch, Absent, Either, Left, Right};

fn either_strategy() -> impl Strategy<Value = Either<String, i64>> {
    prop_oneof![
        ".*".prop_map(Left::<String, i64>),
        any::<i64>().prop_map(Right::<String, i64>),
    ]
}

fn halve(v: i64) -> Either<String, i64> {
    if v % 2 == 0 {
        Right(v / 2)
    } else {
        Left(format!("{v} is odd"))
    }
}

fn shrink(v: i64) -> Either<String, i64> {
    if v.abs() < 1000 {
        Right(v.wrapping_sub(7))
    } else {
        Left("too large".to_string())
    }
}

proptest! {
    #[test]
    fn map_then_fold_applies_both(x in any::<i64>()) {
        let f = |v: i64| v.wrapping_mul(3);
        let g = |v: i64| v.wrapping_sub(1);

        prop_assert_eq!(Right::<String, i64>(x).map(f).fold(|_| 0, g), g(f(x)));
    }

    #[test]
    fn map_leaves_left_alone(x in ".*") {
        prop_assert_eq!(Left::<String, i64>(x.clone()).map(|v| v + 1), Left(x));
    }

    #[test]
    fn from_nullable_mirrors_option(x in proptest::option::of(any::<u32>())) {
        let lifted = from_nullable(x);

        match x {
            Some(v) => prop_assert_eq!(lifted, Right(v)),
            None => prop_assert_eq!(lifted, Left(Absent)),
        }
    }

    #[test]
    fn try_catch_mirrors_result(
        outcome in prop_oneof![
            any::<i32>().prop_map(Ok::<i32, String>),
            ".*".prop_map(Err::<i32, String>),
        ]
    ) {
        let lifted = try_catch(|| outcome.clone());

        match outcome {
            Ok(v) => prop_assert_eq!(lifted, Right(v)),
            Err(e) => prop_assert_eq!(lifted, Left(e)),
        }
    }

    #[test]
    fn left_survives_any_chain(
        x in ".*",
        steps in proptest::collection::vec(any::<bool>(), 0..32),
    ) {
        let mut value: Either<String, i64> = Left(x.clone());

        for use_chain in steps {
            value = if use_chain {
                value.chain(|v| Right(v + 1))
            } else {
                value.map(|v| v * 2)
            };
        }

        prop_assert_eq!(value, Left(x));
    }

    #[test]
    fn chain_left_identity(x in any::<i64>()) {
        prop_assert_eq!(Right(x).chain(halve), halve(x));
    }

    #[test]
    fn chain_right_identity(m in either_strategy()) {
        prop_assert_eq!(m.clone().chain(Right), m);
    }

    #[test]
    fn chain_is_associative(m in either_strategy()) {
        let nested = m.clone().chain(|v| halve(v).chain(shrink));
        prop_assert_eq!(m.chain(halve).chain(shrink), nested);
    }

    #[test]
    fn map_is_chain_of_right(m in either_strategy()) {
        let f = |v: i64| v.wrapping_add(11);
        prop_assert_eq!(m.clone().map(f), m.chain(|v| Right(f(v))));
    }
}

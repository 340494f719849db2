#![cfg(feature = "curry")]
//! Property-based tests for curry rotation.
//!
//! ## Rotation Laws
//! - **rot2**: `rot2curry!(f)(b)(a) == f(a)(b)`
//! - **rot3**: `rot3curry!(f)(c)(a)(b) == f(a)(b)(c)`
//! - **rot4**: `rot4curry!(f)(d)(a)(b)(c) == f(a)(b)(c)(d)`
//! - **Full Cycle**: rotating a 2-group function twice restores the original
//!   argument order

use funclib::{rot2curry, rot3curry, rot4curry};
use proptest::prelude::*;

fn weigh2(a: i64) -> impl Fn(i64) -> i64 {
    move |b| a.wrapping_mul(31).wrapping_add(b)
}

fn weigh3(a: i64) -> impl Fn(i64) -> Box<dyn Fn(i64) -> i64> {
    move |b: i64| -> Box<dyn Fn(i64) -> i64> {
        Box::new(move |c: i64| a.wrapping_mul(961).wrapping_add(b.wrapping_mul(31)).wrapping_add(c))
    }
}

proptest! {
    #[test]
    fn prop_rot2(a in any::<i64>(), b in any::<i64>()) {
        prop_assert_eq!(rot2curry!(weigh2)(b)(a), weigh2(a)(b));
    }

    #[test]
    fn prop_rot3(a in any::<i64>(), b in any::<i64>(), c in any::<i64>()) {
        prop_assert_eq!(rot3curry!(weigh3)(c)(a)(b), weigh3(a)(b)(c));
    }

    #[test]
    fn prop_rot4(a in any::<i8>(), b in any::<i8>(), c in any::<i8>(), d in any::<i8>()) {
        let tuple = |a: i8| move |b: i8| move |c: i8| move |d: i8| (a, b, c, d);
        prop_assert_eq!(rot4curry!(tuple)(d)(a)(b)(c), (a, b, c, d));
    }

    #[test]
    fn prop_rot2_full_cycle(a in any::<i64>(), b in any::<i64>()) {
        let rotated = rot2curry!(weigh2);
        let restored = rot2curry!(rotated);
        prop_assert_eq!(restored(a)(b), weigh2(a)(b));
    }

    #[test]
    fn prop_rot3_is_stable_across_calls(a in any::<i64>(), b in any::<i64>(), c in any::<i64>()) {
        let partially_applied = rot3curry!(weigh3)(c)(a);
        prop_assert_eq!(partially_applied(b), partially_applied(b));
    }
}

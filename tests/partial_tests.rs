//! Unit tests for the partial! macro.
//!
//! Tests for partial function application with placeholder support.
//!
//! Note: the placeholder tokens are literal tokens in the macro pattern, so
//! they work whether or not `funclib::partial::_1` etc. are imported.

#![cfg(feature = "partial")]

use rstest::rstest;

// =============================================================================
// 2-argument function tests
// =============================================================================

mod two_argument_functions {
    use funclib::partial;

    fn add(first: i32, second: i32) -> i32 {
        first + second
    }

    fn divide(numerator: f64, denominator: f64) -> f64 {
        numerator / denominator
    }

    #[test]
    fn test_partial_first_argument_fixed() {
        let add_five = partial!(add, 5, _1);
        assert_eq!(add_five(3), 8);
        assert_eq!(add_five(-5), 0);
    }

    #[test]
    fn test_partial_second_argument_fixed() {
        let half = partial!(divide, _1, 2.0);
        assert!((half(10.0) - 5.0).abs() < f64::EPSILON);
        assert!((half(7.0) - 3.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_partial_zero_placeholders_is_a_thunk() {
        let thunk = partial!(add, 1, 2);
        assert_eq!(thunk(), add(1, 2));
    }

    #[test]
    fn test_partial_all_placeholders_forward_arguments() {
        let same_as_add = partial!(add, _1, _2);
        assert_eq!(same_as_add(3, 5), add(3, 5));
    }

    #[test]
    fn test_partial_repeated_placeholder_consumes_next_argument() {
        let pair = |left: i32, right: i32| (left, right);
        let repeated = partial!(pair, _1, _1);
        assert_eq!(repeated(1, 2), (1, 2));
    }
}

// =============================================================================
// 3-argument function tests
// =============================================================================

mod three_argument_functions {
    use funclib::partial;

    fn triple(first: i32, second: i32, third: i32) -> (i32, i32, i32) {
        (first, second, third)
    }

    #[test]
    fn test_partial_mixed_binding() {
        let with_ten = partial!(triple, _1, 10, _2);
        assert_eq!(with_ten(1, 2), (1, 10, 2));
    }

    #[test]
    fn test_partial_higher_token_first_still_positional() {
        let swapped_tokens = partial!(triple, _3, _2, _1);
        assert_eq!(swapped_tokens(1, 2, 3), (1, 2, 3));
    }

    #[test]
    fn test_partial_only_middle_open() {
        let middle = partial!(triple, 0, __, 0);
        assert_eq!(middle(7), (0, 7, 0));
    }
}

// =============================================================================
// Up to 8 positions
// =============================================================================

mod eight_argument_functions {
    use funclib::partial;

    #[allow(clippy::too_many_arguments)]
    fn concat(
        a: &str,
        b: &str,
        c: &str,
        d: &str,
        e: &str,
        f: &str,
        g: &str,
        h: &str,
    ) -> String {
        [a, b, c, d, e, f, g, h].concat()
    }

    #[test]
    fn test_partial_eight_placeholders() {
        let all_open = partial!(concat, _1, _2, _3, _4, _5, _6, _7, _8);
        assert_eq!(all_open("a", "b", "c", "d", "e", "f", "g", "h"), "abcdefgh");
    }

    #[test]
    fn test_partial_alternating_bindings() {
        let alternating = partial!(concat, _1, "-", _2, "-", _3, "-", _4, "!");
        assert_eq!(alternating("w", "x", "y", "z"), "w-x-y-z!");
    }
}

// =============================================================================
// Capture semantics
// =============================================================================

mod capture_semantics {
    use funclib::partial;
    use std::cell::Cell;

    fn label(prefix: String, value: u32) -> String {
        format!("{prefix}{value}")
    }

    #[test]
    fn test_fixed_values_are_cloned_per_call() {
        let with_prefix = partial!(label, String::from("#"), _1);
        assert_eq!(with_prefix(1), "#1");
        assert_eq!(with_prefix(2), "#2");
    }

    #[test]
    fn test_fixed_expressions_are_evaluated_once_at_creation() {
        let evaluations = Cell::new(0);
        let next = || {
            evaluations.set(evaluations.get() + 1);
            evaluations.get()
        };

        let add = |first: i32, second: i32| first + second;
        let bound = partial!(add, next(), _1);

        assert_eq!(evaluations.get(), 1);
        assert_eq!(bound(10), 11);
        assert_eq!(bound(20), 21);
        assert_eq!(evaluations.get(), 1);
    }

    #[test]
    fn test_fixed_expressions_are_evaluated_left_to_right() {
        let order = std::cell::RefCell::new(Vec::new());
        let record = |value: i32| {
            order.borrow_mut().push(value);
            value
        };

        let sum3 = |a: i32, b: i32, c: i32| a + b + c;
        let bound = partial!(sum3, record(1), _1, record(3));

        assert_eq!(*order.borrow(), vec![1, 3]);
        assert_eq!(bound(2), 6);
    }

    #[test]
    fn test_wrapped_function_errors_pass_through() {
        let parse_with_radix = |text: &str, radix: u32| u32::from_str_radix(text, radix);
        let parse_hex = partial!(parse_with_radix, _1, 16);

        assert_eq!(parse_hex("ff"), Ok(255));
        assert!(parse_hex("zz").is_err());
    }
}

#[rstest]
#[case(0, 0)]
#[case(3, -3)]
#[case(-7, 7)]
fn negate_through_partial(#[case] input: i32, #[case] expected: i32) {
    let subtract = |minuend: i32, subtrahend: i32| minuend - subtrahend;
    let negate = funclib::partial!(subtract, 0, _1);
    assert_eq!(negate(input), expected);
}

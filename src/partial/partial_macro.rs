//! The `partial!` macro for partial function application.
//!
//! This module provides the [`partial!`] macro which fixes some arguments of
//! a function while leaving placeholder slots as parameters of the returned
//! closure.

/// Partially applies arguments to a function.
///
/// Every argument position is either an expression, which is fixed, or a
/// placeholder token, which becomes a parameter of the returned closure. The
/// tokens are `_1` through `_8` and the anonymous `__`; all of them are
/// matched literally, so they do not need to be imported.
///
/// Placeholders are filled positionally: the first parameter of the closure
/// goes into the leftmost placeholder slot, the second into the next one, and
/// so on. The token that marks a slot does not matter, so a repeated token
/// (`partial!(f, _1, _1)`) still creates two independent parameters.
///
/// # Syntax
///
/// For a 3-argument function `f(a, b, c)`:
/// - `partial!(f, x, _1, _2)` creates `|b, c| f(x, b, c)`
/// - `partial!(f, _1, y, _2)` creates `|a, c| f(a, y, c)`
/// - `partial!(f, x, y, z)` creates `|| f(x, y, z)` (thunk)
/// - `partial!(f, _1, _2, _3)` creates `|a, b, c| f(a, b, c)`
/// - `partial!(f)` creates `|| f()`
///
/// # Type Requirements
///
/// - Fixed values must implement [`Clone`] (the closure may be called many times)
/// - The original function must implement [`Fn`]
///
/// Fixed expressions are evaluated once, left to right, when the closure is
/// created. Calling the closure with the wrong number of arguments is a
/// compile error:
///
/// ```compile_fail,E0057
/// use funclib::partial;
///
/// fn add(first: i32, second: i32, third: i32) -> i32 { first + second + third }
///
/// let bound = partial!(add, _1, 10, _2);
/// let _ = bound(1);
/// ```
///
/// ```compile_fail,E0057
/// use funclib::partial;
///
/// fn add(first: i32, second: i32) -> i32 { first + second }
///
/// let add_five = partial!(add, 5, _1);
/// let _ = add_five(1, 2);
/// ```
///
/// # Examples
///
/// ## Fixing the first argument
///
/// ```
/// use funclib::partial;
///
/// fn add(first: i32, second: i32) -> i32 { first + second }
///
/// let add_five = partial!(add, 5, _1);
/// assert_eq!(add_five(3), 8);
/// assert_eq!(add_five(10), 15);
/// ```
///
/// ## Mixing fixed values and placeholders
///
/// ```
/// use funclib::partial;
///
/// fn clamp(low: i32, value: i32, high: i32) -> i32 { value.max(low).min(high) }
///
/// let percent = partial!(clamp, 0, _1, 100);
/// assert_eq!(percent(140), 100);
/// assert_eq!(percent(-3), 0);
/// assert_eq!(percent(42), 42);
/// ```
///
/// ## Repeated placeholders are independent slots
///
/// ```
/// use funclib::partial;
///
/// fn pair(left: i32, right: i32) -> (i32, i32) { (left, right) }
///
/// let same_token_twice = partial!(pair, _1, _1);
/// assert_eq!(same_token_twice(1, 2), (1, 2));
/// ```
///
/// ## Creating a thunk
///
/// ```
/// use funclib::partial;
///
/// fn greet(greeting: &str, name: &str) -> String { format!("{greeting}, {name}!") }
///
/// let thunk = partial!(greet, "Hello", "Bob");
/// assert_eq!(thunk(), "Hello, Bob!");
/// ```
///
/// ## Errors from the wrapped function pass through
///
/// ```
/// use funclib::partial;
///
/// fn checked_divide(numerator: i32, denominator: i32) -> Option<i32> {
///     numerator.checked_div(denominator)
/// }
///
/// let divide_ten_by = partial!(checked_divide, 10, _1);
/// assert_eq!(divide_ten_by(2), Some(5));
/// assert_eq!(divide_ten_by(0), None);
/// ```
#[macro_export]
macro_rules! partial {
    // =========================================================================
    // Terminal: every position consumed
    // =========================================================================

    (@bind $function:ident [$($fixed:tt)*] [$($parameter:ident)*] [$($argument:expr),*]) => {{
        $($fixed)*
        move |$($parameter),*| $function($($argument),*)
    }};

    // =========================================================================
    // Placeholder positions (must precede the expression arm)
    // =========================================================================

    (@bind $function:ident [$($fixed:tt)*] [$($parameter:ident)*] [$($argument:expr),*] __ $(, $($rest:tt)*)?) => {
        $crate::partial!(@bind $function [$($fixed)*] [$($parameter)* slot] [$($argument,)* slot] $($($rest)*)?)
    };
    (@bind $function:ident [$($fixed:tt)*] [$($parameter:ident)*] [$($argument:expr),*] _1 $(, $($rest:tt)*)?) => {
        $crate::partial!(@bind $function [$($fixed)*] [$($parameter)* slot] [$($argument,)* slot] $($($rest)*)?)
    };
    (@bind $function:ident [$($fixed:tt)*] [$($parameter:ident)*] [$($argument:expr),*] _2 $(, $($rest:tt)*)?) => {
        $crate::partial!(@bind $function [$($fixed)*] [$($parameter)* slot] [$($argument,)* slot] $($($rest)*)?)
    };
    (@bind $function:ident [$($fixed:tt)*] [$($parameter:ident)*] [$($argument:expr),*] _3 $(, $($rest:tt)*)?) => {
        $crate::partial!(@bind $function [$($fixed)*] [$($parameter)* slot] [$($argument,)* slot] $($($rest)*)?)
    };
    (@bind $function:ident [$($fixed:tt)*] [$($parameter:ident)*] [$($argument:expr),*] _4 $(, $($rest:tt)*)?) => {
        $crate::partial!(@bind $function [$($fixed)*] [$($parameter)* slot] [$($argument,)* slot] $($($rest)*)?)
    };
    (@bind $function:ident [$($fixed:tt)*] [$($parameter:ident)*] [$($argument:expr),*] _5 $(, $($rest:tt)*)?) => {
        $crate::partial!(@bind $function [$($fixed)*] [$($parameter)* slot] [$($argument,)* slot] $($($rest)*)?)
    };
    (@bind $function:ident [$($fixed:tt)*] [$($parameter:ident)*] [$($argument:expr),*] _6 $(, $($rest:tt)*)?) => {
        $crate::partial!(@bind $function [$($fixed)*] [$($parameter)* slot] [$($argument,)* slot] $($($rest)*)?)
    };
    (@bind $function:ident [$($fixed:tt)*] [$($parameter:ident)*] [$($argument:expr),*] _7 $(, $($rest:tt)*)?) => {
        $crate::partial!(@bind $function [$($fixed)*] [$($parameter)* slot] [$($argument,)* slot] $($($rest)*)?)
    };
    (@bind $function:ident [$($fixed:tt)*] [$($parameter:ident)*] [$($argument:expr),*] _8 $(, $($rest:tt)*)?) => {
        $crate::partial!(@bind $function [$($fixed)*] [$($parameter)* slot] [$($argument,)* slot] $($($rest)*)?)
    };

    // =========================================================================
    // Fixed positions
    // =========================================================================

    // Each expansion introduces its own hygienic `value`, so fixed values
    // never shadow each other.
    (@bind $function:ident [$($fixed:tt)*] [$($parameter:ident)*] [$($argument:expr),*] $value:expr $(, $($rest:tt)*)?) => {
        $crate::partial!(
            @bind $function
            [$($fixed)* let value = $value;]
            [$($parameter)*]
            [$($argument,)* ::core::clone::Clone::clone(&value)]
            $($($rest)*)?
        )
    };

    // =========================================================================
    // Entry points
    // =========================================================================

    ($function:expr $(,)?) => {{
        let function = $function;
        move || function()
    }};

    ($function:expr, $($arguments:tt)+) => {{
        let function = $function;
        $crate::partial!(@bind function [] [] [] $($arguments)+)
    }};
}

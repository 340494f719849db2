//! The rotation macros for curried functions.
//!
//! A curried function takes its argument groups one call at a time:
//! `f(a)(b)(c)`. The macros here return a function taking the innermost
//! group first, followed by the remaining groups in their original order:
//!
//! ```text
//! rot2curry!(f)(b)(a)       = f(a)(b)
//! rot3curry!(f)(c)(a)(b)    = f(a)(b)(c)
//! rot4curry!(f)(d)(a)(b)(c) = f(a)(b)(c)(d)
//! ```
//!
//! A group holding several arguments is passed as a tuple, so its internal
//! order is untouched.
//!
//! # Design Decisions
//!
//! Like the curry helpers they pair with, the macros share the function and
//! every captured group through `std::rc::Rc`. Each intermediate closure is
//! `Fn` and can be applied any number of times; a group is cloned out of its
//! `Rc` only when the original chain is finally invoked.

/// Rotates a 2-group curried function.
///
/// Given `f` with `f(a)(b) -> r`, returns `g` with `g(b)(a) -> r`.
///
/// # Type Requirements
///
/// - The function must implement [`Fn`]
/// - The group moved to the front must implement [`Clone`]
///
/// # Examples
///
/// ```
/// use funclib::rot2curry;
///
/// let divide = |numerator: f64| move |denominator: f64| numerator / denominator;
///
/// let divide_by = rot2curry!(divide);
/// let halve = divide_by(2.0);
///
/// assert!((halve(10.0) - 5.0).abs() < f64::EPSILON);
/// assert!((halve(3.0) - 1.5).abs() < f64::EPSILON);
/// ```
#[macro_export]
macro_rules! rot2curry {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |group2| {
            let function = ::std::rc::Rc::clone(&function);
            let group2 = ::std::rc::Rc::new(group2);
            move |group1| {
                function(group1)(::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&group2)))
            }
        }
    }};
}

/// Rotates a 3-group curried function.
///
/// Given `f` with `f(a)(b)(c) -> r`, returns `g` with `g(c)(a)(b) -> r`.
///
/// # Type Requirements
///
/// - The function must implement [`Fn`]
/// - Every group except the last one applied must implement [`Clone`]
///
/// # Examples
///
/// ```
/// use funclib::rot3curry;
///
/// fn request(method: &'static str) -> impl Fn(&'static str) -> Box<dyn Fn((u16, bool)) -> String> {
///     move |path: &'static str| -> Box<dyn Fn((u16, bool)) -> String> {
///         Box::new(move |(port, secure): (u16, bool)| {
///             let scheme = if secure { "https" } else { "http" };
///             format!("{method} {scheme}://localhost:{port}{path}")
///         })
///     }
/// }
///
/// let on_port = rot3curry!(request);
/// let local_tls = on_port((8443, true));
///
/// assert_eq!(local_tls("GET")("/health"), "GET https://localhost:8443/health");
/// assert_eq!(local_tls("POST")("/jobs"), "POST https://localhost:8443/jobs");
/// ```
#[macro_export]
macro_rules! rot3curry {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |group3| {
            let function = ::std::rc::Rc::clone(&function);
            let group3 = ::std::rc::Rc::new(group3);
            move |group1| {
                let function = ::std::rc::Rc::clone(&function);
                let group3 = ::std::rc::Rc::clone(&group3);
                let group1 = ::std::rc::Rc::new(group1);
                move |group2| {
                    function(::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&group1)))(group2)(
                        ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&group3)),
                    )
                }
            }
        }
    }};
}

/// Rotates a 4-group curried function.
///
/// Given `f` with `f(a)(b)(c)(d) -> r`, returns `g` with `g(d)(a)(b)(c) -> r`.
///
/// # Type Requirements
///
/// - The function must implement [`Fn`]
/// - Every group except the last one applied must implement [`Clone`]
///
/// # Examples
///
/// ```
/// use funclib::rot4curry;
///
/// let label = |a: char| move |b: char| move |c: char| move |d: char| [a, b, c, d].iter().collect::<String>();
///
/// let rotated = rot4curry!(label);
/// assert_eq!(rotated('d')('a')('b')('c'), "abcd");
/// ```
#[macro_export]
macro_rules! rot4curry {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |group4| {
            let function = ::std::rc::Rc::clone(&function);
            let group4 = ::std::rc::Rc::new(group4);
            move |group1| {
                let function = ::std::rc::Rc::clone(&function);
                let group4 = ::std::rc::Rc::clone(&group4);
                let group1 = ::std::rc::Rc::new(group1);
                move |group2| {
                    let function = ::std::rc::Rc::clone(&function);
                    let group4 = ::std::rc::Rc::clone(&group4);
                    let group1 = ::std::rc::Rc::clone(&group1);
                    let group2 = ::std::rc::Rc::new(group2);
                    move |group3| {
                        function(::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&group1)))(
                            ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&group2)),
                        )(group3)(
                            ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&group4)),
                        )
                    }
                }
            }
        }
    }};
}

#[cfg(test)]
mod tests {
    fn subtract(minuend: i32) -> impl Fn(i32) -> i32 {
        move |subtrahend| minuend - subtrahend
    }

    #[test]
    fn test_rot2curry_swaps_groups() {
        let rotated = rot2curry!(subtract);
        assert_eq!(rotated(1)(10), 9);
    }

    #[test]
    fn test_rot2curry_partial_is_reusable() {
        let minus_three = rot2curry!(subtract)(3);
        assert_eq!(minus_three(10), 7);
        assert_eq!(minus_three(20), 17);
    }

    #[test]
    fn test_rot3curry_keeps_tuple_groups_intact() {
        let build = |prefix: (char, char)| {
            move |middle: i32| move |suffix: &'static str| format!("{}{}{middle}{suffix}", prefix.0, prefix.1)
        };
        let rotated = rot3curry!(build);
        assert_eq!(rotated("!")(('a', 'b'))(7), "ab7!");
    }
}

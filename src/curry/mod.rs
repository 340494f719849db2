//! Argument-group rotation for curried functions.
//!
//! - [`rot2curry!`]: `f(a)(b)` becomes `g(b)(a)`
//! - [`rot3curry!`]: `f(a)(b)(c)` becomes `g(c)(a)(b)`
//! - [`rot4curry!`]: `f(a)(b)(c)(d)` becomes `g(d)(a)(b)(c)`
//!
//! Rotation is useful when the last group is the one known first, for
//! example a configuration value that every call shares:
//!
//! ```
//! use funclib::rot2curry;
//!
//! let render = |template: &'static str| move |name: &'static str| template.replace("{}", name);
//!
//! let for_alice = rot2curry!(render)("Alice");
//! assert_eq!(for_alice("Hello, {}!"), "Hello, Alice!");
//! assert_eq!(for_alice("Bye, {}."), "Bye, Alice.");
//! ```
//!
//! # Laws
//!
//! - **Rotation**: `rot2curry!(f)(b)(a) == f(a)(b)`
//! - **Full Cycle**: rotating an `n`-group function `n` times yields the
//!   original application order

mod rotate_macro;

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::rot2curry;
pub use crate::rot3curry;
pub use crate::rot4curry;

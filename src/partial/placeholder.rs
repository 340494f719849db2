//! Placeholder tokens for partial application.
//!
//! There are exactly eight tokens, `_1` through `_8`. Each one marks a slot in
//! a binding list that is filled when the partially applied function is
//! called. Tokens compare by identity: two tokens are equal only when they are
//! the same token, and a token can never be mistaken for a bound value because
//! bound values and tokens live in different variants of
//! [`Binding`](super::Binding).
//!
//! Inside the [`partial!`](crate::partial!) macro the tokens are matched
//! literally, so importing the constants is only needed for the runtime
//! engine.

use std::fmt;

/// Number of distinct placeholder tokens.
pub const PLACEHOLDER_COUNT: usize = 8;

/// One of the eight placeholder tokens.
///
/// # Examples
///
/// ```
/// use funclib::partial::{Placeholder, _1, _2};
///
/// assert_eq!(_1, Placeholder::P1);
/// assert_ne!(_1, _2);
/// assert_eq!(_2.index(), 1);
/// assert_eq!(_2.to_string(), "_2");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Placeholder {
    /// The first token, `_1`.
    P1,
    /// The second token, `_2`.
    P2,
    /// The third token, `_3`.
    P3,
    /// The fourth token, `_4`.
    P4,
    /// The fifth token, `_5`.
    P5,
    /// The sixth token, `_6`.
    P6,
    /// The seventh token, `_7`.
    P7,
    /// The eighth token, `_8`.
    P8,
}

impl Placeholder {
    /// All tokens in order.
    pub const ALL: [Self; PLACEHOLDER_COUNT] = [
        Self::P1,
        Self::P2,
        Self::P3,
        Self::P4,
        Self::P5,
        Self::P6,
        Self::P7,
        Self::P8,
    ];

    /// Zero-based position of the token in [`Placeholder::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the token at the given zero-based position.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < PLACEHOLDER_COUNT {
            Some(Self::ALL[index])
        } else {
            None
        }
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "_{}", self.index() + 1)
    }
}

macro_rules! define_placeholders {
    ($($number:literal),* $(,)?) => {
        paste::paste! {
            $(
                #[doc = "Placeholder token `_" $number "`."]
                #[allow(non_upper_case_globals)]
                pub const [<_ $number>]: Placeholder = Placeholder::[<P $number>];
            )*
        }
    };
}

define_placeholders!(1, 2, 3, 4, 5, 6, 7, 8);

static_assertions::assert_impl_all!(Placeholder: Copy, Send, Sync, Eq, std::hash::Hash);
static_assertions::const_assert_eq!(Placeholder::ALL.len(), PLACEHOLDER_COUNT);

//! Runtime partial application over homogeneous values.
//!
//! [`partial!`](crate::partial!) covers the statically typed case. When the
//! arguments are values of one dynamic type (a `serde_json::Value`, an
//! interpreter's value enum, ...) and the binding list is only known at run
//! time, [`Partial`] performs the same substitution and validates the number
//! of unbound arguments on every call.

use std::fmt;

use arrayvec::ArrayVec;

use super::error::PartialError;
use super::placeholder::{PLACEHOLDER_COUNT, Placeholder};

/// One entry of a binding list.
///
/// # Examples
///
/// ```
/// use funclib::partial::{Binding, _1};
///
/// let fixed: Binding<i32> = Binding::Fixed(10);
/// let slot: Binding<i32> = _1.into();
///
/// assert!(!fixed.is_slot());
/// assert!(slot.is_slot());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Binding<T> {
    /// A concrete value passed unchanged on every call.
    Fixed(T),
    /// A slot filled by the next unbound argument.
    Slot(Placeholder),
}

impl<T> Binding<T> {
    /// Returns `true` if this entry is a placeholder slot.
    #[must_use]
    pub const fn is_slot(&self) -> bool {
        matches!(self, Self::Slot(_))
    }

    /// Returns the fixed value, if any.
    #[must_use]
    pub const fn fixed(&self) -> Option<&T> {
        match self {
            Self::Fixed(value) => Some(value),
            Self::Slot(_) => None,
        }
    }
}

impl<T> From<Placeholder> for Binding<T> {
    fn from(placeholder: Placeholder) -> Self {
        Self::Slot(placeholder)
    }
}

/// A function together with a binding list.
///
/// The wrapped function receives the fully substituted argument list as a
/// slice. Its return value is passed through untouched, so a function
/// returning `Result` keeps its own error channel.
///
/// # Examples
///
/// ```
/// use funclib::partial::{Binding, PartialError, partial, _1, _2};
///
/// let sum = |arguments: &[i64]| arguments.iter().sum::<i64>();
/// let engine = partial(sum, [_1.into(), Binding::Fixed(10), _2.into()])?;
///
/// assert_eq!(engine.arity(), 2);
/// assert_eq!(engine.call([1, 2])?, 13);
/// assert_eq!(
///     engine.call([1]),
///     Err(PartialError::ArityMismatch { expected: 2, actual: 1 })
/// );
/// # Ok::<(), PartialError>(())
/// ```
#[derive(Clone)]
pub struct Partial<F, T> {
    function: F,
    bindings: ArrayVec<Binding<T>, PLACEHOLDER_COUNT>,
    arity: usize,
}

/// Creates a [`Partial`] from a function and a binding list.
///
/// # Errors
///
/// Returns [`PartialError::TooManyBindings`] when the binding list is longer
/// than [`PLACEHOLDER_COUNT`]. The list is read no further than the first
/// surplus binding, so an unbounded iterator is rejected too.
pub fn partial<F, T, R, I>(function: F, bindings: I) -> Result<Partial<F, T>, PartialError>
where
    F: Fn(&[T]) -> R,
    I: IntoIterator<Item = Binding<T>>,
{
    Partial::new(function, bindings)
}

impl<F, T> Partial<F, T> {
    /// Creates a new engine. See [`partial`].
    ///
    /// # Errors
    ///
    /// Returns [`PartialError::TooManyBindings`] when the binding list is
    /// longer than [`PLACEHOLDER_COUNT`].
    pub fn new<I>(function: F, bindings: I) -> Result<Self, PartialError>
    where
        I: IntoIterator<Item = Binding<T>>,
    {
        let mut stored = ArrayVec::<Binding<T>, PLACEHOLDER_COUNT>::new();

        for binding in bindings {
            if stored.try_push(binding).is_err() {
                return Err(PartialError::too_many_bindings(PLACEHOLDER_COUNT));
            }
        }

        let arity = stored.iter().filter(|binding| binding.is_slot()).count();

        Ok(Self {
            function,
            bindings: stored,
            arity,
        })
    }

    /// Number of unbound arguments a call must supply.
    #[must_use]
    pub const fn arity(&self) -> usize {
        self.arity
    }

    /// The binding list, in order.
    #[must_use]
    pub fn bindings(&self) -> &[Binding<T>] {
        &self.bindings
    }

    /// Substitutes `unbound` into the placeholder slots and calls the
    /// function.
    ///
    /// Slots are filled left to right, one unbound argument per slot, no
    /// matter which token marks the slot.
    ///
    /// # Errors
    ///
    /// Returns [`PartialError::ArityMismatch`] without calling the function
    /// when `unbound` yields fewer or more values than [`Self::arity`].
    pub fn call<R, I>(&self, unbound: I) -> Result<R, PartialError>
    where
        F: Fn(&[T]) -> R,
        T: Clone,
        I: IntoIterator<Item = T>,
    {
        let mut unbound = unbound.into_iter();
        let mut arguments = ArrayVec::<T, PLACEHOLDER_COUNT>::new();

        for binding in &self.bindings {
            let argument = match binding {
                Binding::Fixed(value) => value.clone(),
                Binding::Slot(_) => match unbound.next() {
                    Some(value) => value,
                    None => {
                        let supplied = self.bindings[..arguments.len()]
                            .iter()
                            .filter(|binding| binding.is_slot())
                            .count();
                        return Err(PartialError::arity_mismatch(self.arity, supplied));
                    }
                },
            };
            arguments.push(argument);
        }

        let surplus = unbound.count();
        if surplus > 0 {
            return Err(PartialError::arity_mismatch(self.arity, self.arity + surplus));
        }

        Ok((self.function)(&arguments))
    }

    /// Converts the engine into a plain closure taking the unbound arguments
    /// as a vector.
    pub fn into_fn<R>(self) -> impl Fn(Vec<T>) -> Result<R, PartialError>
    where
        F: Fn(&[T]) -> R,
        T: Clone,
    {
        move |unbound| self.call(unbound)
    }
}

impl<F, T: fmt::Debug> fmt::Debug for Partial<F, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Partial")
            .field("bindings", &self.bindings)
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(Partial<fn(&[String]) -> usize, String>: Send, Sync, Clone);

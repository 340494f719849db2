//! Binding one context value into a table of functions.
//!
//! [`bundle`] takes a context value and a table of named functions whose
//! first parameter is that context, and returns a [`Bundle`] whose entries
//! are called without it. It is the placeholder-free special case of partial
//! application, applied to every entry of the table at once.
//!
//! Functions with several remaining parameters take them as a tuple.
//!
//! # Examples
//!
//! ```
//! use funclib::bundle::bundle;
//!
//! struct Account {
//!     balance: i64,
//! }
//!
//! fn deposit(account: &Account, amount: i64) -> i64 { account.balance + amount }
//! fn withdraw(account: &Account, amount: i64) -> i64 { account.balance - amount }
//!
//! let operations: [(&str, fn(&Account, i64) -> i64); 2] =
//!     [("deposit", deposit), ("withdraw", withdraw)];
//! let account = bundle(Account { balance: 100 }, operations);
//!
//! assert_eq!(account.call("deposit", 5), Some(105));
//! assert_eq!(account.call("withdraw", 5), Some(95));
//! assert_eq!(account.call("transfer", 5), None);
//! ```

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::rc::Rc;

/// A context value bound into a table of functions.
///
/// Created by [`bundle`].
#[derive(Clone)]
pub struct Bundle<K, T, F> {
    context: T,
    table: HashMap<K, F>,
}

/// Binds `context` as the first argument of every function in `table`.
///
/// When a name appears more than once, the last entry wins.
#[must_use]
pub fn bundle<K, T, F, I>(context: T, table: I) -> Bundle<K, T, F>
where
    K: Eq + Hash,
    I: IntoIterator<Item = (K, F)>,
{
    Bundle {
        context,
        table: table.into_iter().collect(),
    }
}

impl<K, T, F> Bundle<K, T, F>
where
    K: Eq + Hash,
{
    /// Calls the named function with the context pre-supplied.
    ///
    /// Returns `None` when no function has that name.
    pub fn call<Q, A, R>(&self, name: &Q, arguments: A) -> Option<R>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
        F: Fn(&T, A) -> R,
    {
        self.table
            .get(name)
            .map(|function| function(&self.context, arguments))
    }

    /// Returns the named function with the context pre-supplied.
    ///
    /// # Examples
    ///
    /// ```
    /// use funclib::bundle::bundle;
    ///
    /// let greeter = bundle(
    ///     String::from("Hello"),
    ///     [("greet", |greeting: &String, name: &str| format!("{greeting}, {name}"))],
    /// );
    ///
    /// let greet = greeter.get("greet").unwrap();
    /// assert_eq!(greet("Alice"), "Hello, Alice");
    /// assert_eq!(greet("Bob"), "Hello, Bob");
    /// ```
    pub fn get<Q, A, R>(&self, name: &Q) -> Option<impl Fn(A) -> R + '_>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
        F: Fn(&T, A) -> R,
    {
        let function = self.table.get(name)?;
        let context = &self.context;
        Some(move |arguments| function(context, arguments))
    }

    /// Returns `true` if a function with that name exists.
    pub fn contains<Q>(&self, name: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.table.contains_key(name)
    }

    /// Iterates over the function names in arbitrary order.
    pub fn names(&self) -> impl Iterator<Item = &K> {
        self.table.keys()
    }

    /// Number of bound functions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns `true` if the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// The bound context value.
    #[must_use]
    pub const fn context(&self) -> &T {
        &self.context
    }

    /// Converts the bundle into a map from the same names to owned closures
    /// that share the context.
    ///
    /// # Examples
    ///
    /// ```
    /// use funclib::bundle::bundle;
    ///
    /// fn scale(factor: &i32, value: i32) -> i32 { factor * value }
    /// fn shift(offset: &i32, value: i32) -> i32 { offset + value }
    ///
    /// let operations: [(&str, fn(&i32, i32) -> i32); 2] = [("scale", scale), ("shift", shift)];
    /// let table = bundle(3, operations).into_table();
    ///
    /// assert_eq!(table["scale"](5), 15);
    /// assert_eq!(table["shift"](5), 8);
    /// ```
    #[must_use]
    pub fn into_table<A, R>(self) -> HashMap<K, Box<dyn Fn(A) -> R>>
    where
        T: 'static,
        F: Fn(&T, A) -> R + 'static,
    {
        let context = Rc::new(self.context);
        self.table
            .into_iter()
            .map(|(name, function)| {
                let context = Rc::clone(&context);
                let bound: Box<dyn Fn(A) -> R> =
                    Box::new(move |arguments| function(context.as_ref(), arguments));
                (name, bound)
            })
            .collect()
    }
}

impl<K: fmt::Debug, T: fmt::Debug, F> fmt::Debug for Bundle<K, T, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Bundle")
            .field("context", &self.context)
            .field("names", &self.table.keys().collect::<Vec<_>>())
            .finish()
    }
}

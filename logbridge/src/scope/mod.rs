//! Contextual scopes attached to log messages.
//!
//! A [`Scope`] is pushed onto a [`ScopeProvider`] for the lifetime of a
//! [`ScopeGuard`]. Loggers never store scopes themselves; they enumerate the
//! provider's active scopes every time a message is rendered.
//!
//! # Rendering
//!
//! | Scope                                | Rendered          |
//! |--------------------------------------|-------------------|
//! | `Scope::value("req-1")`              | `<req-1> `        |
//! | `Scope::from([("user", "alice")])`   | `<user=alice> `   |
//!
//! # Example
//!
//! ```
//! use logbridge::scope::{Scope, ScopeProvider, ScopeProviderExt, ThreadScopeProvider};
//!
//! let scopes = ThreadScopeProvider::new();
//! let _request = scopes.push_scope(Scope::value("req-1"));
//! let _user = scopes.push_scope(Scope::from([("user", "alice")]));
//!
//! let prefix = scopes.fold_scopes(String::new(), |scope, out| scope.render_into(out));
//! assert_eq!(prefix, "<req-1> <user=alice> ");
//! ```

mod guard;
mod local;

pub use guard::ScopeGuard;
pub use local::ThreadScopeProvider;

use std::collections::BTreeMap;
use std::fmt::Display;

/// A contextual value active while its [`ScopeGuard`] is alive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    /// A single value, rendered as `<value> `.
    Value(String),
    /// Key/value pairs, each rendered as `<key=value> `.
    Properties(Vec<(String, String)>),
}

impl Scope {
    /// Create a flat scope from anything displayable.
    pub fn value(value: impl Display) -> Self {
        Scope::Value(value.to_string())
    }

    /// Create a key/value scope. Pair order is preserved.
    pub fn properties<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Display,
    {
        Scope::Properties(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.to_string()))
                .collect(),
        )
    }

    /// Append this scope's rendered form to `out`.
    pub fn render_into(&self, out: &mut String) {
        match self {
            Scope::Value(value) => {
                out.push('<');
                out.push_str(value);
                out.push_str("> ");
            }
            Scope::Properties(pairs) => {
                for (key, value) in pairs {
                    out.push('<');
                    out.push_str(key);
                    out.push('=');
                    out.push_str(value);
                    out.push_str("> ");
                }
            }
        }
    }
}

impl From<&str> for Scope {
    fn from(value: &str) -> Self {
        Scope::Value(value.to_string())
    }
}

impl From<String> for Scope {
    fn from(value: String) -> Self {
        Scope::Value(value)
    }
}

impl<K: Into<String>, V: Display> From<Vec<(K, V)>> for Scope {
    fn from(pairs: Vec<(K, V)>) -> Self {
        Scope::properties(pairs)
    }
}

impl<K: Into<String>, V: Display, const N: usize> From<[(K, V); N]> for Scope {
    fn from(pairs: [(K, V); N]) -> Self {
        Scope::properties(pairs)
    }
}

impl<K: Into<String>, V: Display> From<BTreeMap<K, V>> for Scope {
    fn from(map: BTreeMap<K, V>) -> Self {
        Scope::properties(map)
    }
}

/// Source of the scopes active in the current execution context.
///
/// Implementations decide what "current context" means; [`ThreadScopeProvider`]
/// uses the calling thread. Scopes pushed in one context must not be visible
/// from another.
pub trait ScopeProvider: Send + Sync {
    /// Visit every active scope, oldest first.
    fn for_each_scope(&self, visitor: &mut dyn FnMut(&Scope));

    /// Make `scope` active until the returned guard is released.
    fn push_scope(&self, scope: Scope) -> ScopeGuard;
}

/// Accumulator-threading helpers for every [`ScopeProvider`].
pub trait ScopeProviderExt: ScopeProvider {
    /// Visit every active scope oldest first, threading `acc` through `visitor`.
    fn fold_scopes<A, F>(&self, mut acc: A, mut visitor: F) -> A
    where
        F: FnMut(&Scope, &mut A),
    {
        self.for_each_scope(&mut |scope| visitor(scope, &mut acc));
        acc
    }
}

impl<T: ScopeProvider + ?Sized> ScopeProviderExt for T {}

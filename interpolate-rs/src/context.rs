//! Variable lookup for interpolation.
//!
//! A [`Context`] answers one question: what is the value of `name`?  The
//! answer distinguishes *unset* (`None`) from *set but empty* (`Some("")`),
//! since the colon and bare operator forms treat those two states
//! differently.
//!
//! | Source                     | Type                         |
//! |----------------------------|------------------------------|
//! | `HashMap` / `BTreeMap`     | any `K: Borrow<str>`, `V: AsRef<str>` |
//! | Owned store                | [`Vars`]                     |
//! | Closure                    | [`FnContext`]                |
//! | Process environment        | [`Env`]                      |

use std::borrow::{Borrow, Cow};
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

/// Read-only name → value lookup used by [`interpolate`](crate::interpolate).
pub trait Context {
    /// Look up `name`.  `None` means unset; `Some("")` means set but empty.
    fn lookup(&self, name: &str) -> Option<Cow<'_, str>>;
}

impl<C: Context + ?Sized> Context for &C {
    fn lookup(&self, name: &str) -> Option<Cow<'_, str>> {
        (**self).lookup(name)
    }
}

impl<K, V, S> Context for HashMap<K, V, S>
where
    K: Borrow<str> + Hash + Eq,
    V: AsRef<str>,
    S: BuildHasher,
{
    fn lookup(&self, name: &str) -> Option<Cow<'_, str>> {
        self.get(name).map(|v| Cow::Borrowed(v.as_ref()))
    }
}

impl<K, V> Context for BTreeMap<K, V>
where
    K: Borrow<str> + Ord,
    V: AsRef<str>,
{
    fn lookup(&self, name: &str) -> Option<Cow<'_, str>> {
        self.get(name).map(|v| Cow::Borrowed(v.as_ref()))
    }
}

// ── Vars ──────────────────────────────────────────────────────────────────────

/// Owned key/value variable store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vars {
    vars: HashMap<String, String>,
}

impl Vars {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set (or overwrite) a variable.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(name.into(), value.into());
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Get the value of a variable.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// Remove a variable.  Returns `true` if it existed.
    pub fn unset(&mut self, name: &str) -> bool {
        self.vars.remove(name).is_some()
    }

    /// Returns `true` if the variable is set (possibly to `""`).
    pub fn contains(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl Context for Vars {
    fn lookup(&self, name: &str) -> Option<Cow<'_, str>> {
        self.get(name).map(Cow::Borrowed)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Vars {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut vars = Vars::new();
        vars.extend(iter);
        vars
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for Vars {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.set(k, v);
        }
    }
}

// ── Adapters ──────────────────────────────────────────────────────────────────

/// Context backed by a closure returning owned values.
pub struct FnContext<F>(pub F);

impl<F> Context for FnContext<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn lookup(&self, name: &str) -> Option<Cow<'_, str>> {
        (self.0)(name).map(Cow::Owned)
    }
}

/// Context backed by the process environment.
///
/// Variables that are set but not valid Unicode are treated as unset.
#[derive(Debug, Clone, Copy, Default)]
pub struct Env;

impl Context for Env {
    fn lookup(&self, name: &str) -> Option<Cow<'_, str>> {
        // std::env::var panics on names containing '=' or NUL.
        if name.is_empty() || name.contains(['=', '\0']) {
            return None;
        }
        std::env::var(name).ok().map(Cow::Owned)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_get() {
        let mut vars = Vars::new();
        vars.set("FOO", "bar");
        assert_eq!(vars.get("FOO"), Some("bar"));
    }

    #[test]
    fn overwrite() {
        let mut vars = Vars::new();
        vars.set("x", "old");
        vars.set("x", "new");
        assert_eq!(vars.get("x"), Some("new"));
        assert_eq!(vars.len(), 1);
    }

    #[test]
    fn unset() {
        let mut vars = Vars::new().with("gone", "bye");
        assert!(vars.unset("gone"));
        assert_eq!(vars.get("gone"), None);
        assert!(!vars.unset("gone")); // already gone
        assert!(vars.is_empty());
    }

    #[test]
    fn empty_is_distinct_from_unset() {
        let vars = Vars::new().with("EMPTY", "");
        assert_eq!(vars.lookup("EMPTY").as_deref(), Some(""));
        assert_eq!(vars.lookup("MISSING"), None);
        assert!(vars.contains("EMPTY"));
        assert!(!vars.contains("MISSING"));
    }

    #[test]
    fn collect_from_pairs() {
        let vars: Vars = [("A", "1"), ("B", "2")].into_iter().collect();
        assert_eq!(vars.len(), 2);
        let mut names: Vec<_> = vars.iter().map(|(k, _)| k).collect();
        names.sort_unstable();
        assert_eq!(names, ["A", "B"]);
    }

    #[test]
    fn maps_and_references() {
        let mut hm: HashMap<&str, &str> = HashMap::new();
        hm.insert("K", "v");
        assert_eq!(hm.lookup("K").as_deref(), Some("v"));
        assert_eq!((&hm).lookup("K").as_deref(), Some("v"));

        let mut bt: BTreeMap<String, String> = BTreeMap::new();
        bt.insert("K".into(), String::new());
        assert_eq!(bt.lookup("K").as_deref(), Some(""));
        assert_eq!(bt.lookup("k"), None);
    }

    #[test]
    fn closure_context() {
        let ctx = FnContext(|name: &str| (name == "X").then(|| "42".to_owned()));
        assert_eq!(ctx.lookup("X").as_deref(), Some("42"));
        assert_eq!(ctx.lookup("Y"), None);
    }

    #[test]
    fn env_rejects_invalid_names() {
        assert_eq!(Env.lookup(""), None);
        assert_eq!(Env.lookup("A=B"), None);
        assert_eq!(Env.lookup("A\0B"), None);
    }

    #[test]
    fn env_reads_process_environment() {
        let path = std::env::var("PATH").ok();
        assert_eq!(Env.lookup("PATH").map(Cow::into_owned), path);
    }
}

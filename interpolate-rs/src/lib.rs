//! Shell-style string interpolation modelled on Docker Compose.
//!
//! Replaces `$NAME` and `${…}` placeholders in a template with values from a
//! [`Context`], supporting defaults, required-value assertions and
//! conditional replacement:
//!
//! | Syntax                        | Meaning                                       |
//! |-------------------------------|-----------------------------------------------|
//! | `$VAR`                        | value of `VAR`; left as-is when unset (names `[A-Z_][A-Z0-9_]*` only) |
//! | `${VAR}`                      | value of `VAR`, or `""` when unset (any name) |
//! | `${VAR:-default}`             | `default` if `VAR` is unset or empty          |
//! | `${VAR-default}`              | `default` only if `VAR` is unset              |
//! | `${VAR:?err}` / `${VAR:!err}` | error `err` if `VAR` is unset or empty        |
//! | `${VAR?err}` / `${VAR!err}`   | error `err` only if `VAR` is unset            |
//! | `${VAR:+repl}`                | `repl` if `VAR` is unset or empty             |
//! | `${VAR+repl}`                 | `repl` only if `VAR` is unset                 |
//!
//! There is no escape syntax and no nesting: text that does not form a
//! placeholder is copied through untouched, and substituted values are never
//! scanned again.
//!
//! # Quick start
//!
//! ```rust
//! use std::collections::HashMap;
//! use interpolate::interpolate;
//!
//! let mut ctx = HashMap::new();
//! ctx.insert("NAME", "Alice");
//!
//! assert_eq!(interpolate("Hello, $NAME!", &ctx).unwrap(), "Hello, Alice!");
//! assert_eq!(interpolate("Hi ${GUEST:-World}", &ctx).unwrap(), "Hi World");
//!
//! let err = interpolate("${API_KEY:?API key required}", &ctx).unwrap_err();
//! assert_eq!(err.to_string(), "API key required");
//! ```

pub mod context;
pub mod error;
pub mod expand;
pub mod placeholder;
pub mod scan;

// Re-exports for convenience.
pub use context::{Context, Env, FnContext, Vars};
pub use error::{InterpolateError, Result};
pub use placeholder::{Expr, Modifier, ModifierKind, Trigger};
pub use scan::{Placeholder, Scanner, Token};

/// Interpolate `template` against `context`.
///
/// Fails only when an error operator (`?`, `!`, `:?`, `:!`) fires.
pub fn interpolate<C: Context + ?Sized>(template: &str, context: &C) -> Result<String> {
    expand::expand(template, context)
}

/// Convenience: interpolate using a lookup closure.
///
/// ```rust
/// let out = interpolate::interpolate_with("${USER:-nobody}", |_| None).unwrap();
/// assert_eq!(out, "nobody");
/// ```
pub fn interpolate_with<F>(template: &str, lookup: F) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    expand::expand(template, &FnContext(lookup))
}

/// Names referenced by the placeholders in `template`, in order of first
/// appearance and without duplicates.
///
/// ```rust
/// let names = interpolate::variables("$HOME/${APP:-demo}/$HOME");
/// assert_eq!(names, ["HOME", "APP"]);
/// ```
pub fn variables(template: &str) -> Vec<&str> {
    let mut names: Vec<&str> = Vec::new();
    for token in Scanner::new(template) {
        if let Token::Placeholder(p) = token {
            let name = p.name();
            if !names.contains(&name) {
                names.push(name);
            }
        }
    }
    names
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closure_lookup() {
        let out = interpolate_with("$A-${b}", |name| Some(name.to_lowercase())).unwrap();
        assert_eq!(out, "a-b");
    }

    #[test]
    fn variables_skips_literals_and_malformed() {
        assert_eq!(variables("no vars $lower ${} ${OPEN"), Vec::<&str>::new());
        assert_eq!(variables("${my-var} ${X:?e} $Y"), ["my", "X", "Y"]);
    }
}

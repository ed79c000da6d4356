//! Placeholder resolution.
//!
//! | Placeholder        | Unset          | Empty (`""`)    | Set            |
//! |--------------------|----------------|-----------------|----------------|
//! | `$NAME`            | `$NAME` kept   | `""`            | value          |
//! | `${name}`          | `""`           | `""`            | value          |
//! | `${name:-x}`       | `x`            | `x`             | value          |
//! | `${name-x}`        | `x`            | `""`            | value          |
//! | `${name:?x}` `${name:!x}` | error   | error           | value          |
//! | `${name?x}` `${name!x}`   | error   | `""`            | value          |
//! | `${name:+x}`       | `x`            | `x`             | value          |
//! | `${name+x}`        | `x`            | `""`            | value          |
//!
//! Substituted text is inserted verbatim and never scanned again.

use std::borrow::Cow;

use crate::context::Context;
use crate::error::{InterpolateError, Result};
use crate::placeholder::{Expr, ModifierKind};
use crate::scan::{Placeholder, Scanner, Token};

/// Expand every placeholder in `src` against `ctx`.
///
/// Stops at the first error operator that fires; no partial output is
/// returned.
pub fn expand<C: Context + ?Sized>(src: &str, ctx: &C) -> Result<String> {
    let mut out = String::with_capacity(src.len());

    for token in Scanner::new(src) {
        match token {
            Token::Literal(text) => out.push_str(text),
            Token::Placeholder(p) => out.push_str(&resolve(&p, ctx)?),
        }
    }

    Ok(out)
}

/// Resolve one placeholder to its replacement text.
fn resolve<'a, C: Context + ?Sized>(
    placeholder: &Placeholder<'a>,
    ctx: &'a C,
) -> Result<Cow<'a, str>> {
    match *placeholder {
        Placeholder::Unbraced { name, .. } => match ctx.lookup(name) {
            Some(value) => Ok(value),
            None => {
                tracing::trace!(name, "unbraced variable unset, kept verbatim");
                Ok(Cow::Borrowed(placeholder.raw()))
            }
        },
        Placeholder::Braced { expr, .. } => resolve_expr(expr, ctx),
    }
}

fn resolve_expr<'a, C: Context + ?Sized>(expr: Expr<'a>, ctx: &'a C) -> Result<Cow<'a, str>> {
    let value = ctx.lookup(expr.name);

    let Some(modifier) = expr.modifier else {
        return Ok(value.unwrap_or_default());
    };

    if !modifier.trigger.fires(value.as_deref()) {
        // Not firing implies the variable is set.
        return Ok(value.unwrap_or_default());
    }

    match modifier.kind {
        ModifierKind::Default | ModifierKind::Replace => Ok(Cow::Borrowed(modifier.operand)),
        ModifierKind::Error => {
            tracing::debug!(name = expr.name, "required variable missing");
            Err(InterpolateError::required(expr.name, modifier.operand))
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

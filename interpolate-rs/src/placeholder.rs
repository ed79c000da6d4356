//! Parsing of the text between `${` and `}`.
//!
//! | Interior          | Kind                   | Fires when        |
//! |-------------------|------------------------|-------------------|
//! | `name`            | direct substitution    | —                 |
//! | `name:-operand`   | [`ModifierKind::Default`] | unset or empty |
//! | `name-operand`    | [`ModifierKind::Default`] | unset          |
//! | `name:?operand`, `name:!operand` | [`ModifierKind::Error`] | unset or empty |
//! | `name?operand`, `name!operand`   | [`ModifierKind::Error`] | unset          |
//! | `name:+operand`   | [`ModifierKind::Replace`] | unset or empty |
//! | `name+operand`    | [`ModifierKind::Replace`] | unset          |
//!
//! The forms are tried top to bottom in the order default, error, replace
//! (colon form before bare form), falling back to direct substitution.
//!
//! A name in an operator form is one or more characters, none of which is
//! `:`, `?`, `!` or `-`.  The first such character therefore always starts
//! the operator, which is why `${my-var}` means "`my`, defaulting to `var`".
//! An operand never spans a line terminator; if it would, the form does not
//! apply.

/// What an operator does once it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModifierKind {
    /// Substitute the operand.
    Default,
    /// Fail with the operand as the message.
    Error,
    /// Substitute the operand.  Behaves exactly like [`Default`](Self::Default).
    Replace,
}

/// Condition under which an operator fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Bare form (`-`, `?`, `!`, `+`): only an absent variable.
    Unset,
    /// Colon form (`:-`, `:?`, `:!`, `:+`): absent or `""`.
    UnsetOrEmpty,
}

impl Trigger {
    /// Whether the operator fires for a looked-up `value`.
    pub fn fires(self, value: Option<&str>) -> bool {
        match (self, value) {
            (_, None) => true,
            (Trigger::UnsetOrEmpty, Some(v)) => v.is_empty(),
            (Trigger::Unset, Some(_)) => false,
        }
    }
}

/// The operator part of a braced placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Modifier<'a> {
    pub kind: ModifierKind,
    pub trigger: Trigger,
    pub operand: &'a str,
}

/// A parsed braced-placeholder interior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expr<'a> {
    pub name: &'a str,
    pub modifier: Option<Modifier<'a>>,
}

impl<'a> Expr<'a> {
    /// Parse the interior of `${…}` (without the delimiters).
    pub fn parse(interior: &'a str) -> Self {
        // Length of the leading run that may form a name.
        let head = interior.find(is_operator_start).unwrap_or(interior.len());
        if head > 0 {
            let (name, rest) = interior.split_at(head);
            if let Some(modifier) = parse_after_name(rest) {
                return Expr { name, modifier: Some(modifier) };
            }
            // Bare `+` sits inside the name run; split at the last one that
            // still leaves a name in front of it.
            if let Some(pos) = name.rfind('+').filter(|&p| p > 0) {
                let operand = &interior[pos + 1..];
                if valid_operand(operand) {
                    return Expr {
                        name: &interior[..pos],
                        modifier: Some(Modifier {
                            kind: ModifierKind::Replace,
                            trigger: Trigger::Unset,
                            operand,
                        }),
                    };
                }
            }
        }

        Expr { name: interior, modifier: None }
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn is_operator_start(c: char) -> bool {
    matches!(c, ':' | '?' | '!' | '-')
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

fn valid_operand(s: &str) -> bool {
    !s.contains(is_line_terminator)
}

/// Match the forms whose operator begins right after the name.
///
/// `rest` starts at the first `:?!-` character.
fn parse_after_name(rest: &str) -> Option<Modifier<'_>> {
    use ModifierKind::{Default, Error, Replace};
    use Trigger::{Unset, UnsetOrEmpty};

    const FORMS: [(&str, ModifierKind, Trigger); 7] = [
        (":-", Default, UnsetOrEmpty),
        ("-", Default, Unset),
        (":?", Error, UnsetOrEmpty),
        (":!", Error, UnsetOrEmpty),
        ("?", Error, Unset),
        ("!", Error, Unset),
        (":+", Replace, UnsetOrEmpty),
    ];

    FORMS.iter().find_map(|&(marker, kind, trigger)| {
        let operand = rest.strip_prefix(marker)?;
        valid_operand(operand).then_some(Modifier { kind, trigger, operand })
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────

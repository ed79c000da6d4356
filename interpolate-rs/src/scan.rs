//! Template scanner.
//!
//! Splits a template into literal runs and placeholders in a single
//! left-to-right pass.  At each `$`:
//!
//! | Next characters                 | Result                                  |
//! |---------------------------------|-----------------------------------------|
//! | `{` … `}` (at least one char)   | braced placeholder up to the first `}`  |
//! | `[A-Z_]` then `[A-Z0-9_]*`      | unbraced placeholder                    |
//! | anything else                   | literal `$`                             |
//!
//! The braced interior may contain anything except `}`, including `$`, `{`
//! and newlines, so `${${BAR}}` is the placeholder `${${BAR}` followed by a
//! literal `}`.  Nothing is ever re-scanned.

use std::ops::Range;

use crate::placeholder::Expr;

/// A placeholder found in a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder<'a> {
    /// `$NAME`
    Unbraced { name: &'a str, raw: &'a str, start: usize },
    /// `${…}`
    Braced { expr: Expr<'a>, raw: &'a str, start: usize },
}

impl<'a> Placeholder<'a> {
    /// Variable name the placeholder refers to.
    pub fn name(&self) -> &'a str {
        match self {
            Placeholder::Unbraced { name, .. } => name,
            Placeholder::Braced { expr, .. } => expr.name,
        }
    }

    /// Original text of the placeholder, delimiters included.
    pub fn raw(&self) -> &'a str {
        match self {
            Placeholder::Unbraced { raw, .. } | Placeholder::Braced { raw, .. } => raw,
        }
    }

    /// Byte range of the placeholder in the template, delimiters included.
    pub fn span(&self) -> Range<usize> {
        let start = match self {
            Placeholder::Unbraced { start, .. } | Placeholder::Braced { start, .. } => *start,
        };
        start..start + self.raw().len()
    }
}

/// One piece of a scanned template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    Literal(&'a str),
    Placeholder(Placeholder<'a>),
}

/// Iterator over the [`Token`]s of a template.
///
/// Literal runs are yielded as large as possible; two literals are never
/// adjacent.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    src: &'a str,
    pos: usize,
    pending: Option<Placeholder<'a>>,
    close: CloseHint,
}

/// Last result of searching for a `}`; scan positions only move forward.
#[derive(Debug, Clone, Copy)]
enum CloseHint {
    Unknown,
    /// First `}` at or after some earlier search start.
    At(usize),
    /// No `}` after some earlier search start.
    Never,
}

impl<'a> Scanner<'a> {
    pub fn new(src: &'a str) -> Self {
        Scanner { src, pos: 0, pending: None, close: CloseHint::Unknown }
    }

    /// Byte offset of the first `}` at or after `from`.
    fn find_close(&mut self, from: usize) -> Option<usize> {
        match self.close {
            CloseHint::Never => return None,
            CloseHint::At(close) if close >= from => return Some(close),
            _ => {}
        }
        match self.src[from..].find('}') {
            Some(off) => {
                self.close = CloseHint::At(from + off);
                Some(from + off)
            }
            None => {
                self.close = CloseHint::Never;
                None
            }
        }
    }

    /// Find the next placeholder at or after `from`.
    fn next_placeholder(&mut self, from: usize) -> Option<Placeholder<'a>> {
        let src = self.src;
        let mut at = from;
        while let Some(off) = src[at..].find('$') {
            let dollar = at + off;
            if let Some(p) = self.placeholder_at(dollar) {
                return Some(p);
            }
            at = dollar + 1;
        }
        None
    }

    /// Try to match a placeholder starting at the `$` at byte `dollar`.
    fn placeholder_at(&mut self, dollar: usize) -> Option<Placeholder<'a>> {
        let src = self.src;
        let bytes = src.as_bytes();
        let after = dollar + 1;
        match *bytes.get(after)? {
            b'{' => {
                let open = after + 1;
                let close = self.find_close(open)?;
                if close == open {
                    return None; // `${}`
                }
                Some(Placeholder::Braced {
                    expr: Expr::parse(&src[open..close]),
                    raw: &src[dollar..=close],
                    start: dollar,
                })
            }
            b if is_name_start(b) => {
                let len = bytes[after..].iter().take_while(|&&c| is_name_continue(c)).count();
                Some(Placeholder::Unbraced {
                    name: &src[after..after + len],
                    raw: &src[dollar..after + len],
                    start: dollar,
                })
            }
            _ => None,
        }
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        if let Some(p) = self.pending.take() {
            self.pos = p.span().end;
            return Some(Token::Placeholder(p));
        }
        if self.pos >= self.src.len() {
            return None;
        }
        match self.next_placeholder(self.pos) {
            Some(p) if p.span().start == self.pos => {
                self.pos = p.span().end;
                Some(Token::Placeholder(p))
            }
            Some(p) => {
                let lit = &self.src[self.pos..p.span().start];
                self.pending = Some(p);
                self.pos = p.span().start;
                Some(Token::Literal(lit))
            }
            None => {
                let lit = &self.src[self.pos..];
                self.pos = self.src.len();
                Some(Token::Literal(lit))
            }
        }
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn is_name_start(b: u8) -> bool {
    b.is_ascii_uppercase() || b == b'_'
}

fn is_name_continue(b: u8) -> bool {
    b.is_ascii_uppercase() || b.is_ascii_digit() || b == b'_'
}

// ── Tests ─────────────────────────────────────────────────────────────────────

//! Selection rules parsed from field specifications.
//!
//! A rule is resolved against the field count of each line, so the same
//! rule can select different positions on lines of different widths.

use std::fmt;

/// One side of a range rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// Unspecified: the first field on the left, the last on the right.
    Open,
    /// 1-based from the left when positive, from the right when negative.
    At(i64),
}

/// A parsed field specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// `N` - a single field. `0` selects every field.
    Index(i64),
    /// `L:R`, `L:`, `:R` or `:` - a span of fields, reversed when `L` resolves past `R`.
    Range { left: Bound, right: Bound },
}

/// Concrete 1-based inclusive bounds of a rule for one line.
///
/// `lo <= hi` always holds and both lie within `1..=n`. `reversed` records
/// that the rule named its bounds in descending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved {
    pub lo: usize,
    pub hi: usize,
    pub reversed: bool,
}

impl Bound {
    /// Map this side onto a 1-based position for a line of `n` fields.
    ///
    /// The result may fall outside `1..=n`; clamping is the caller's job.
    fn position(self, open: i64, n: i64) -> i64 {
        match self {
            Bound::Open => open,
            Bound::At(v) if v < 0 => n + v + 1,
            Bound::At(v) => v,
        }
    }
}

impl Rule {
    /// Resolve this rule against a line of `n` fields.
    ///
    /// Returns `None` when nothing is selected: the line has no fields, a
    /// single index lies outside `1..=n`, or a range lies wholly outside it.
    /// A range that only partly overlaps `1..=n` is clamped, whichever
    /// direction it runs in.
    pub fn resolve(&self, n: usize) -> Option<Resolved> {
        if n == 0 {
            return None;
        }
        let len = n as i64;

        match *self {
            Rule::Index(0) => Some(Resolved {
                lo: 1,
                hi: n,
                reversed: false,
            }),
            Rule::Index(i) => {
                let at = Bound::At(i).position(1, len);
                if (1..=len).contains(&at) {
                    let at = at as usize;
                    Some(Resolved {
                        lo: at,
                        hi: at,
                        reversed: false,
                    })
                } else {
                    None
                }
            }
            Rule::Range { left, right } => {
                let l = left.position(1, len);
                let r = right.position(len, len);
                let (lo, hi) = if l <= r { (l, r) } else { (r, l) };

                if hi < 1 || lo > len {
                    return None;
                }

                Some(Resolved {
                    lo: lo.max(1) as usize,
                    hi: hi.min(len) as usize,
                    reversed: l > r,
                })
            }
        }
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::Open => Ok(()),
            Bound::At(v) => write!(f, "{}", v),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::Index(i) => write!(f, "{}", i),
            Rule::Range { left, right } => write!(f, "{}:{}", left, right),
        }
    }
}

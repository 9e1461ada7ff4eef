use std::iter::Rev;
use std::slice;

use crate::ast::Rule;
use crate::operators::split::Fields;

/// Fields picked by one rule: a borrowed run of the line's fields, walked
/// forwards or backwards. Nothing is copied, reversed selections included.
#[derive(Debug, Clone)]
pub enum Picked<'a, T> {
    Forward(slice::Iter<'a, T>),
    Reversed(Rev<slice::Iter<'a, T>>),
}

impl<T> Picked<'_, T> {
    fn empty() -> Self {
        Picked::Forward(<&[T]>::default().iter())
    }
}

impl<'a, T> Iterator for Picked<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        match self {
            Picked::Forward(it) => it.next(),
            Picked::Reversed(it) => it.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Picked::Forward(it) => it.size_hint(),
            Picked::Reversed(it) => it.size_hint(),
        }
    }
}

impl<T> ExactSizeIterator for Picked<'_, T> {}

/// Apply one rule to a line's tokens.
///
/// An index or range that falls outside the line selects nothing; it is
/// never an error.
pub fn pick<'a, T>(rule: &Rule, tokens: &'a [T]) -> Picked<'a, T> {
    match rule.resolve(tokens.len()) {
        None => Picked::empty(),
        Some(r) => {
            let run = tokens[r.lo - 1..r.hi].iter();
            if r.reversed {
                Picked::Reversed(run.rev())
            } else {
                Picked::Forward(run)
            }
        }
    }
}

/// Apply every rule in order, concatenating what each one picks.
pub fn pick_all<'a, T>(rules: &[Rule], tokens: &'a [T]) -> impl Iterator<Item = &'a T> {
    rules.iter().flat_map(move |rule| pick(rule, tokens))
}

/// Select operator - picks fields from each line by a list of rules.
pub struct Select {
    rules: Vec<Rule>,
}

impl Select {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// The selected field bytes of one line, in output order.
    pub fn apply<'a>(&self, fields: Fields<'a>) -> impl Iterator<Item = &'a [u8]> {
        pick_all(&self.rules, fields.as_spans()).map(move |span| fields.field(span))
    }
}

use winnow::ModalResult;
use winnow::ascii::digit1;
use winnow::combinator::{cut_err, eof, fail, opt};
use winnow::error::{StrContext, StrContextValue};
use winnow::prelude::*;
use winnow::stream::Stream;

use crate::ast::{Bound, Rule};
use crate::error::{Error, Result};

/// Parse one field specification: `N`, `N:`, `:N`, `N:M` or `:`.
pub fn parse_rule(spec: &str) -> Result<Rule> {
    rule.parse(spec).map_err(|e| {
        let expected = match e.inner().context().next() {
            Some(StrContext::Label(label)) => format!("expected {}", label),
            Some(StrContext::Expected(StrContextValue::Description(desc))) => {
                format!("expected {}", desc)
            }
            _ => "unexpected character".to_string(),
        };
        Error::invalid_spec(
            format!("invalid field specification '{}': {}", spec, expected),
            e.offset(),
        )
    })
}

/// Parse every specification in command-line order, stopping at the first
/// one that is malformed.
pub fn parse_rules<S: AsRef<str>>(specs: &[S]) -> Result<Vec<Rule>> {
    let rules = specs
        .iter()
        .map(|s| parse_rule(s.as_ref()))
        .collect::<Result<Vec<_>>>()?;
    tracing::debug!(?rules, "parsed field specifications");
    Ok(rules)
}

/// Parser for a whole specification.
fn rule(input: &mut &str) -> ModalResult<Rule> {
    let left = opt(index).parse_next(input)?;
    let colon = opt(':').parse_next(input)?;

    let rule = match (left, colon) {
        (Some(i), None) => Rule::Index(i),
        (left, Some(_)) => {
            let right = opt(index).parse_next(input)?;
            Rule::Range {
                left: left.map_or(Bound::Open, Bound::At),
                right: right.map_or(Bound::Open, Bound::At),
            }
        }
        (None, None) => {
            return cut_err(fail)
                .context(StrContext::Expected(StrContextValue::Description(
                    "field index or ':'",
                )))
                .parse_next(input);
        }
    };

    cut_err(eof)
        .context(StrContext::Expected(StrContextValue::Description(
            "end of specification",
        )))
        .parse_next(input)?;
    Ok(rule)
}

/// Parser for a signed field index.
fn index(input: &mut &str) -> ModalResult<i64> {
    let start = input.checkpoint();
    let digits: &str = (opt('-'), digit1).take().parse_next(input)?;
    match digits.parse::<i64>() {
        Ok(value) => Ok(value),
        Err(_) => {
            input.reset(&start);
            cut_err(fail)
                .context(StrContext::Expected(StrContextValue::Description(
                    "index within 64-bit range",
                )))
                .parse_next(input)
        }
    }
}

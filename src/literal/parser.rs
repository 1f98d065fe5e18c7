//! Literal-array reader
//!
//! Accepts the output of [`crate::literal::writer::render`] as well as
//! hand-edited files: `#` and `//` line comments, arbitrary whitespace,
//! optional trailing commas and an optional trailing `;`.
//!
//! Keys are un-escaped here. Values are returned with their escape sequences
//! intact; callers feed the result to [`crate::ConfigurationStore::set_array`],
//! which un-escapes them.

use nom::{
    branch::alt,
    bytes::complete::{is_not, tag, tag_no_case},
    character::complete::{anychar, char, multispace1},
    combinator::{cut, map, opt, recognize, value},
    error::{context, VerboseError, VerboseErrorKind},
    multi::many0,
    sequence::{delimited, pair, preceded, terminated},
    IResult,
};
use tracing::trace;

use crate::core::error::{Result, StoreError};
use crate::core::types::{Entry, Group, Properties};
use crate::store::escape::unescape;

type Res<'a, T> = IResult<&'a str, T, VerboseError<&'a str>>;

/// Parse a literal-array document into properties with raw (still escaped) values
pub fn parse(text: &str) -> Result<Properties> {
    match document(text) {
        Ok(("", properties)) => {
            trace!(entries = properties.len(), "parsed literal document");
            Ok(properties)
        },
        Ok((rest, _)) => {
            let (line, column) = position(text, rest);
            Err(StoreError::TrailingInput { line, column })
        },
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => Err(describe(text, e)),
        Err(nom::Err::Incomplete(_)) => {
            let (line, column) = position(text, "");
            Err(StoreError::parse_failed(line, column, "unexpected end of input"))
        },
    }
}

fn document(input: &str) -> Res<'_, Properties> {
    let (input, _) = ws(input)?;
    let (input, _) = context("array(", array_open)(input)?;
    let (input, entries) = list(input, entry)?;
    let (input, _) = ws(input)?;
    let (input, _) = opt(char(';'))(input)?;
    let (input, _) = ws(input)?;

    let mut properties = Properties::new();
    for (key, entry) in entries {
        properties.insert(unescape(key), entry);
    }
    Ok((input, properties))
}

/// Items up to and including the closing parenthesis
fn list<'a, T, F>(mut input: &'a str, mut item: F) -> Res<'a, Vec<T>>
where
    F: FnMut(&'a str) -> Res<'a, T>,
{
    let mut items = Vec::new();
    loop {
        let (rest, _) = ws(input)?;
        if let Ok((rest, _)) = char::<_, VerboseError<&str>>(')')(rest) {
            return Ok((rest, items));
        }

        let (rest, parsed) = item(rest)?;
        items.push(parsed);

        let (rest, _) = ws(rest)?;
        match char::<_, VerboseError<&str>>(',')(rest) {
            Ok((rest, _)) => input = rest,
            Err(_) => {
                let (rest, _) = context("',' or ')'", cut(char(')')))(rest)?;
                return Ok((rest, items));
            },
        }
    }
}

fn entry(input: &str) -> Res<'_, (&str, Entry)> {
    let (input, key) = context("quoted key", quoted)(input)?;
    let (input, _) = arrow(input)?;
    let (input, entry) = context(
        "value",
        cut(alt((map(group, Entry::Group), map(leaf, Entry::Value)))),
    )(input)?;
    Ok((input, (key, entry)))
}

fn group(input: &str) -> Res<'_, Group> {
    let (input, _) = array_open(input)?;
    let (input, pairs) = cut(|i| list(i, group_entry))(input)?;

    let mut values = Group::new();
    for (key, value) in pairs {
        values.insert(unescape(key), value);
    }
    Ok((input, values))
}

fn group_entry(input: &str) -> Res<'_, (&str, String)> {
    let (input, key) = context("quoted key", cut(quoted))(input)?;
    let (input, _) = arrow(input)?;

    if array_open(input).is_ok() {
        return Err(nom::Err::Failure(VerboseError {
            errors: vec![(
                input,
                VerboseErrorKind::Context("arrays may only nest one level deep"),
            )],
        }));
    }

    let (input, value) = context("value", cut(leaf))(input)?;
    Ok((input, (key, value)))
}

/// A quoted string or `null`; `null` reads as the empty string
fn leaf(input: &str) -> Res<'_, String> {
    alt((
        map(quoted, String::from),
        value(String::new(), tag_no_case("null")),
    ))(input)
}

/// Single-quoted string body, escapes kept verbatim
fn quoted(input: &str) -> Res<'_, &str> {
    preceded(
        char('\''),
        cut(terminated(
            recognize(many0(alt((
                is_not("\\'"),
                recognize(pair(char('\\'), anychar)),
            )))),
            context("closing quote", char('\'')),
        )),
    )(input)
}

fn arrow(input: &str) -> Res<'_, ()> {
    value((), delimited(ws, context("'=>'", cut(tag("=>"))), ws))(input)
}

fn array_open(input: &str) -> Res<'_, ()> {
    value((), pair(tag_no_case("array"), preceded(ws, char('('))))(input)
}

fn comment(input: &str) -> Res<'_, &str> {
    // runs to the next '\n'; a stray '\r' stays part of the comment
    recognize(pair(alt((tag("#"), tag("//"))), opt(is_not("\n"))))(input)
}

fn ws(input: &str) -> Res<'_, ()> {
    value((), many0(alt((multispace1, comment))))(input)
}

/// 1-based line and column of `rest` within `text`
fn position(text: &str, rest: &str) -> (usize, usize) {
    let offset = text.len() - rest.len();
    let consumed = &text[..offset];
    let line = consumed.matches('\n').count() + 1;
    let line_start = consumed.rfind('\n').map(|i| i + 1).unwrap_or(0);
    let column = consumed[line_start..].chars().count() + 1;
    (line, column)
}

fn describe(text: &str, error: VerboseError<&str>) -> StoreError {
    let rest = error.errors.first().map(|(rest, _)| *rest).unwrap_or(text);
    let (line, column) = position(text, rest);

    let expected = error.errors.iter().find_map(|(_, kind)| match kind {
        VerboseErrorKind::Context(ctx) => Some(*ctx),
        _ => None,
    });
    let reason = match (expected, error.errors.first()) {
        (Some(ctx), _) if ctx.starts_with("arrays") => ctx.to_string(),
        (Some(ctx), _) => format!("expected {}", ctx),
        (None, Some((_, VerboseErrorKind::Char(c)))) => format!("expected '{}'", c),
        (None, Some((_, VerboseErrorKind::Nom(kind)))) => kind.description().to_string(),
        (None, _) => "invalid input".to_string(),
    };

    StoreError::parse_failed(line, column, reason)
}

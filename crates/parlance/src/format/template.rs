//! Placeholder-template parser using winnow.
//!
//! Parses locale format strings into an AST. Handles:
//! - Literal text segments
//! - Named placeholders: `{formatted_decade}`
//! - Escape sequences: `{{` and `}}`

use std::collections::HashMap;

use thiserror::Error;
use winnow::combinator::{alt, delimited, repeat};
use winnow::prelude::*;
use winnow::token::{none_of, take_while};

/// A parse failure with source position.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{line}:{column}: {message}")]
pub struct TemplateError {
    pub line: usize,
    pub column: usize,
    pub message: String,
}

/// A parsed format template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

/// One piece of a template.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Placeholder(String),
}

impl Template {
    /// Substitute named placeholders from `args`.
    ///
    /// A placeholder with no matching argument substitutes the empty
    /// string: templates routinely carry optional slots (a BC marker, say)
    /// and the renderer's whitespace collapse heals the seam.
    pub fn substitute(&self, args: &HashMap<String, String>) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder(name) => match args.get(name) {
                    Some(value) => out.push_str(value),
                    None => {
                        tracing::trace!(placeholder = %name, "no argument for placeholder");
                    }
                },
            }
        }
        out
    }

    /// Placeholder names referenced by this template, in order.
    pub fn placeholders(&self) -> Vec<&str> {
        self.segments
            .iter()
            .filter_map(|segment| match segment {
                Segment::Placeholder(name) => Some(name.as_str()),
                Segment::Literal(_) => None,
            })
            .collect()
    }
}

/// Parse a template string into an AST.
pub fn parse_template(input: &str) -> Result<Template, TemplateError> {
    let mut remaining = input;
    match template(&mut remaining) {
        Ok(parsed) if remaining.is_empty() => Ok(parsed),
        Ok(_) => {
            let (line, column) = calculate_position(input, remaining);
            Err(TemplateError {
                line,
                column,
                message: format!(
                    "unexpected character: '{}'",
                    remaining.chars().next().unwrap_or('?')
                ),
            })
        }
        Err(e) => {
            let (line, column) = calculate_position(input, remaining);
            Err(TemplateError {
                line,
                column,
                message: format!("parse error: {e}"),
            })
        }
    }
}

/// Calculate line and column from original input and remaining input.
fn calculate_position(original: &str, remaining: &str) -> (usize, usize) {
    let consumed = original.len() - remaining.len();
    let consumed_str = &original[..consumed];
    let line = consumed_str.chars().filter(|&c| c == '\n').count() + 1;
    let column = match consumed_str.rfind('\n') {
        Some(pos) => consumed - pos,
        None => consumed + 1,
    };
    (line, column)
}

/// Parse a complete template into segments, merging adjacent literals.
fn template(input: &mut &str) -> ModalResult<Template> {
    let segments: Vec<Segment> = repeat(0.., segment).parse_next(input)?;
    Ok(Template {
        segments: merge_literals(segments),
    })
}

fn merge_literals(segments: Vec<Segment>) -> Vec<Segment> {
    let mut result: Vec<Segment> = Vec::with_capacity(segments.len());
    for segment in segments {
        match segment {
            Segment::Literal(text) => {
                if let Some(Segment::Literal(prev)) = result.last_mut() {
                    prev.push_str(&text);
                } else {
                    result.push(Segment::Literal(text));
                }
            }
            Segment::Placeholder(_) => result.push(segment),
        }
    }
    result
}

/// Parse a single segment (escape, placeholder, or literal).
fn segment(input: &mut &str) -> ModalResult<Segment> {
    alt((escape_sequence, placeholder, literal_char)).parse_next(input)
}

/// Parse escape sequences: `{{` -> `{`, `}}` -> `}`.
fn escape_sequence(input: &mut &str) -> ModalResult<Segment> {
    alt((
        "{{".value(Segment::Literal("{".to_string())),
        "}}".value(Segment::Literal("}".to_string())),
    ))
    .parse_next(input)
}

/// Parse a single literal character (not `{` or `}`).
fn literal_char(input: &mut &str) -> ModalResult<Segment> {
    none_of(['{', '}'])
        .map(|c: char| Segment::Literal(c.to_string()))
        .parse_next(input)
}

/// Parse a placeholder: `{identifier}` with optional inner whitespace.
fn placeholder(input: &mut &str) -> ModalResult<Segment> {
    delimited('{', delimited(ws, identifier, ws), '}')
        .map(|name: &str| Segment::Placeholder(name.to_string()))
        .parse_next(input)
}

fn ws(input: &mut &str) -> ModalResult<()> {
    take_while(0.., |c: char| c.is_ascii_whitespace())
        .void()
        .parse_next(input)
}

fn identifier<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| c.is_ascii_alphanumeric() || c == '_').parse_next(input)
}

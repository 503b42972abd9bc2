//! Style value parsing.
//!
//! Grammar:
//!
//! ```text
//! transform := operation (SEP operation)*
//! operation := name '(' component (',' component)* ')' | '*'
//! component := number unit?
//! number    := '-'? digit+ ('.' digit+)?
//! unit      := [a-z%]+
//! SEP       := ' ' | ','
//! ```
//!
//! Scalar syntax is `number unit?` anchored over the whole input.
//!
//! Tokenization uses an explicit function-local cursor; there is no
//! shared scanner state, so concurrent parses can never interfere.

use crate::transform::{Component, Operation, TransformValue};
use crate::value::StyleValue;

struct Scanner<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    fn at_end(&self) -> bool {
        self.pos >= self.src.len()
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn bump(&mut self) {
        if let Some(c) = self.peek() {
            self.pos += c.len_utf8();
        }
    }

    fn skip_separators(&mut self) {
        while matches!(self.peek(), Some(' ' | ',')) {
            self.pos += 1;
        }
    }

    /// Skip the remainder of the current space/comma-delimited token.
    fn skip_token(&mut self) {
        while let Some(c) = self.peek() {
            if c == ' ' || c == ',' {
                break;
            }
            self.pos += c.len_utf8();
        }
    }

    /// A bare `*` occupying a whole token.
    fn eat_wildcard(&mut self) -> bool {
        if self.peek() == Some('*') {
            let after = self.src[self.pos + 1..].chars().next();
            if matches!(after, None | Some(' ' | ',')) {
                self.pos += 1;
                return true;
            }
        }
        false
    }

    fn eat_name(&mut self) -> &'a str {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_ascii_alphanumeric() || c == '_') {
            self.pos += 1;
        }
        &self.src[start..self.pos]
    }

    /// `name(args)`; restores the cursor and returns None when the input
    /// at the cursor is not a complete function-call token.
    fn eat_operation(&mut self) -> Option<(&'a str, &'a str)> {
        let start = self.pos;
        let name = self.eat_name();
        if name.is_empty() || self.peek() != Some('(') {
            self.pos = start;
            return None;
        }
        self.pos += 1;
        let rest = &self.src[self.pos..];
        let close = match rest.find(')') {
            Some(i) if i > 0 => i,
            _ => {
                self.pos = start;
                return None;
            }
        };
        let args = &rest[..close];
        self.pos += close + 1;
        Some((name, args))
    }

    fn eat_number(&mut self) -> Option<f64> {
        let start = self.pos;
        if self.peek() == Some('-') {
            self.pos += 1;
        }
        let int_start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
            self.pos += 1;
        }
        if self.pos == int_start {
            self.pos = start;
            return None;
        }
        if self.peek() == Some('.') {
            let dot = self.pos;
            self.pos += 1;
            let frac_start = self.pos;
            while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
                self.pos += 1;
            }
            if self.pos == frac_start {
                // "10." stops at the bare dot
                self.pos = dot;
            }
        }
        self.src[start..self.pos].parse().ok()
    }

    fn eat_unit(&mut self) -> &'a str {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_ascii_lowercase() || c == '%') {
            self.pos += 1;
        }
        &self.src[start..self.pos]
    }
}

/// Parse a single numeric-with-suffix value. Anything that doesn't match
/// the anchored grammar comes back as `Opaque` carrying the raw string.
pub fn parse_scalar(raw: &str) -> StyleValue {
    let mut s = Scanner::new(raw);
    if let Some(number) = s.eat_number() {
        let unit = s.eat_unit().to_string();
        if s.at_end() {
            return StyleValue::Scalar { number, unit };
        }
    }
    StyleValue::Opaque(raw.to_string())
}

/// Parse a transform list, comparing its shape against `compare` (the
/// previous step's structured value) as it goes.
///
/// The compatible flag starts true only when `compare` is present and
/// goes false at the first structural divergence: a differing operation
/// name, unit, or count, or a wildcard with nothing to copy. One
/// diagnostic is emitted at that point and comparison is abandoned for
/// the rest of the parse; the parse itself always completes. Wildcard
/// slots resolve from `compare` positionally regardless of whether the
/// comparison has been abandoned.
pub fn parse_transform(raw: &str, compare: Option<&TransformValue>) -> TransformValue {
    let mut ops: Vec<Operation> = Vec::new();
    let mut comparing = compare.is_some();
    let mut scanner = Scanner::new(raw);

    loop {
        scanner.skip_separators();
        if scanner.at_end() {
            break;
        }

        if scanner.eat_wildcard() {
            match compare.and_then(|c| c.ops.get(ops.len())) {
                Some(op) => ops.push(op.clone()),
                None => {
                    log::warn!(
                        "transform wildcard at position {} has no operation to copy",
                        ops.len()
                    );
                    comparing = false;
                }
            }
            continue;
        }

        let Some((name, args)) = scanner.eat_operation() else {
            // Not a recognizable token; skip one char and rescan.
            scanner.bump();
            continue;
        };

        let compare_op = if comparing {
            let found = compare.and_then(|c| c.ops.get(ops.len()));
            match found {
                Some(op) if op.name == name => found,
                other => {
                    log::warn!(
                        "transform operations don't match: {} vs {}",
                        name,
                        other.map_or("(none)", |op| op.name.as_str())
                    );
                    comparing = false;
                    None
                }
            }
        } else {
            None
        };

        let (components, matched) = parse_components(args, compare_op);
        if comparing && !matched {
            comparing = false;
        }

        ops.push(Operation {
            name: name.to_string(),
            components,
        });
    }

    if comparing {
        let expected = compare.map(|c| c.ops.len()).unwrap_or(0);
        if ops.len() != expected {
            log::warn!(
                "transform operation counts don't match: {} vs {}",
                ops.len(),
                expected
            );
            comparing = false;
        }
    }

    TransformValue {
        raw: raw.to_string(),
        compatible: comparing,
        ops,
    }
}

/// Scan an operation's argument string for number-with-unit components,
/// checking units positionally against `compare` when present. Returns
/// the components and whether units and count matched (vacuously true
/// without a comparison operation).
fn parse_components(args: &str, compare: Option<&Operation>) -> (Vec<Component>, bool) {
    let mut out: Vec<Component> = Vec::new();
    let mut matched = true;
    let mut scanner = Scanner::new(args);

    loop {
        scanner.skip_separators();
        if scanner.at_end() {
            break;
        }
        let Some(number) = scanner.eat_number() else {
            // Not numeric; skip the token, like the grammar skips garbage.
            scanner.skip_token();
            continue;
        };
        let unit = scanner.eat_unit().to_string();
        // Anything glued to the end of the token is dropped.
        scanner.skip_token();

        if matched {
            if let Some(op) = compare {
                match op.components.get(out.len()) {
                    Some(c) if c.unit == unit => {}
                    Some(c) => {
                        log::warn!(
                            "transform units don't match for {}: {:?} vs {:?}",
                            op.name,
                            c.unit,
                            unit
                        );
                        matched = false;
                    }
                    None => {
                        log::warn!("transform component counts don't match for {}", op.name);
                        matched = false;
                    }
                }
            }
        }

        out.push(Component { number, unit });
    }

    if matched {
        if let Some(op) = compare {
            if out.len() != op.components.len() {
                log::warn!("transform component counts don't match for {}", op.name);
                matched = false;
            }
        }
    }

    (out, matched)
}

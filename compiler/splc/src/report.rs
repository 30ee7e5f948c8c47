//! Plain-text error reports.
//!
//! A report names the error, the line it happened on, and the offending
//! source with the failing span bracketed `>>like this<<`. Runtime reports
//! also carry the stage as it was when the error was raised.

use spl_eval::{Error, EvalError};
use spl_ir::Span;
use spl_parse::ParseError;

/// Byte offsets of line starts, for line lookup by binary search.
#[derive(Clone, Debug, Default)]
pub struct LineIndex {
    starts: Vec<usize>,
}

impl LineIndex {
    pub fn build(source: &str) -> Self {
        let mut starts = vec![0];
        starts.extend(
            source
                .bytes()
                .enumerate()
                .filter(|&(_, byte)| byte == b'\n')
                .map(|(i, _)| i + 1),
        );
        LineIndex { starts }
    }

    /// 1-based line containing `offset`.
    pub fn line_of(&self, offset: usize) -> usize {
        match self.starts.binary_search(&offset) {
            Ok(exact) => exact + 1,
            Err(insert) => insert.max(1),
        }
    }

    fn line_start(&self, line: usize) -> usize {
        self.starts.get(line.saturating_sub(1)).copied().unwrap_or(0)
    }

    /// End of `line`, excluding its line break.
    fn line_end(&self, source: &str, line: usize) -> usize {
        let end = self
            .starts
            .get(line)
            .map_or(source.len(), |next| next.saturating_sub(1));
        if source[..end].ends_with('\r') {
            end - 1
        } else {
            end
        }
    }

    pub fn line_count(&self) -> usize {
        self.starts.len()
    }
}

/// The whole lines covered by `span`, with the span itself bracketed.
pub fn excerpt(source: &str, span: Span) -> String {
    let index = LineIndex::build(source);
    let start = (span.start as usize).min(source.len());
    let end = (span.end as usize).clamp(start, source.len());

    let first = index.line_of(start);
    let last = index.line_of(end.saturating_sub(1).max(start));
    let from = index.line_start(first);
    let to = index.line_end(source, last).max(end);

    match (
        source.get(from..start),
        source.get(start..end),
        source.get(end..to),
    ) {
        (Some(before), Some(inside), Some(after)) => format!("{before}>>{inside}<<{after}"),
        _ => String::from("<source unavailable>"),
    }
}

fn locate(out: &mut String, source: &str, span: Span) {
    let line = LineIndex::build(source).line_of(span.start as usize);
    out.push_str(&format!("  at line {line}\n"));
    out.push_str("----- context -----\n");
    out.push_str(&excerpt(source, span));
    out.push('\n');
}

pub fn render_parse_error(err: &ParseError, source: &str) -> String {
    let mut out = format!("SPL parse error: {err}\n");
    locate(&mut out, source, err.span);
    out
}

pub fn render_runtime_error(err: &EvalError, source: &str) -> String {
    let mut out = format!("SPL runtime error: {err}\n");
    if let Some(span) = err.span {
        locate(&mut out, source, span);
    }
    if let Some(stage) = &err.snapshot {
        out.push_str("\n----- state -----\n");
        out.push_str(&stage.to_string());
    }
    out
}

pub fn render_error(err: &Error, source: &str) -> String {
    match err {
        Error::Parse(err) => render_parse_error(err, source),
        Error::Runtime(err) => render_runtime_error(err, source),
    }
}

#[cfg(test)]
mod tests;

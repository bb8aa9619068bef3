//! Rendering orchestration: literals in, finished output lines out.
//!
//! Ablauf: alle Literale parsen, eine gemeinsame Breite aufloesen, dann pro
//! Wert auffuellen, gruppieren, optional hervorheben. Der Ruler laeuft
//! einmal vor den Wert-Zeilen und teilt sich Gruppierung und Breite mit
//! ihnen. Fehler brechen den gesamten Aufruf ab, es gibt keine Teilausgabe.

use crate::group::render_groups;
use crate::highlight::{highlight_runs, CLEAR_BITS, SET_BITS};
use crate::literal::{parse_literal, ParsedValue};
use crate::options::RenderOptions;
use crate::ruler::ruler_lines;
use crate::width::resolve_width;
use crate::Result;

/// Renders all literals into output lines, ruler first when requested.
/// Input order is preserved.
pub fn render(opts: &RenderOptions, literals: &[&str]) -> Result<Vec<String>> {
    opts.validate()?;

    let values = literals
        .iter()
        .map(|l| parse_literal(l))
        .collect::<Result<Vec<_>>>()?;
    let width = resolve_width(opts.width(), &values)?;

    // Label-Spalte nur bei mehreren Werten; der Ruler wird entsprechend
    // eingerueckt, damit die Spalten ausgerichtet bleiben.
    let label_width = if values.len() > 1 {
        values.iter().map(|v| v.text.chars().count()).max().unwrap_or(0)
    } else {
        0
    };

    let mut lines = Vec::new();
    if opts.number_bits() {
        let indent = " ".repeat(if label_width > 0 { label_width + 2 } else { 0 });
        for line in ruler_lines(
            width,
            opts.number_from() as u64,
            opts.reverse_numbering(),
            opts.group(),
            opts.color(),
        )? {
            lines.push(format!("{indent}{line}"));
        }
    }

    for value in &values {
        let padded = pad_to_width(value, width);
        let groups = opts.group().split(&padded)?;
        let mut line = render_groups(&groups, opts.color());
        if opts.highlight_on() {
            line = highlight_runs(&line, '1', SET_BITS);
        }
        if opts.highlight_off() {
            line = highlight_runs(&line, '0', CLEAR_BITS);
        }
        if label_width > 0 {
            line = format!("{:>label_width$}  {line}", value.text);
        }
        lines.push(line);
    }

    Ok(lines)
}

/// Pads the natural bit string on the most-significant side up to `width`
/// using the value's sign-extension digit, producing a new string.
fn pad_to_width(value: &ParsedValue, width: usize) -> String {
    debug_assert!(value.width() <= width, "width resolution must cover every value");
    let fill = if value.negative { '1' } else { '0' };
    let mut padded = String::with_capacity(width);
    for _ in value.width()..width {
        padded.push(fill);
    }
    padded.push_str(&value.bits);
    padded
}

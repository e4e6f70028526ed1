use serde_json::Value;

/// Indent prepended to every console entry so log text stands off the screen
/// edge. Continuation lines of pretty-printed entries receive it on top of the
/// printer's own structural indent.
pub const ENTRY_INDENT: &str = "  ";

/// One console entry. The closed set of variants replaces "format anything":
/// callers pick plain text, word-wrapped text, or a structured value.
#[derive(Debug, Clone, PartialEq)]
pub enum LogEntry {
    /// Shown verbatim; the caller controls line breaks.
    Text(String),
    /// Word-wrapped to the configured column budget.
    Wrapped(String),
    /// Structured value rendered with key/index structure. `nest` forces one
    /// value per line instead of packing subtrees that fit the width budget.
    Pretty { value: Value, nest: bool },
}

/// Greedy word wrap at `width` columns, counted in characters. Input at or
/// under the budget is returned untouched as a single line; a word longer
/// than the budget is broken into `width`-sized chunks so no output line
/// ever exceeds the budget.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    if text.chars().count() <= width {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_len = 0;
    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if word_len > width {
            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
                line_len = 0;
            }
            let chars: Vec<char> = word.chars().collect();
            for chunk in chars.chunks(width) {
                if chunk.len() == width {
                    lines.push(chunk.iter().collect());
                } else {
                    // partial tail chunk starts the next line
                    line = chunk.iter().collect();
                    line_len = chunk.len();
                }
            }
        } else if line.is_empty() {
            line.push_str(word);
            line_len = word_len;
        } else if line_len + 1 + word_len <= width {
            line.push(' ');
            line.push_str(word);
            line_len += 1 + word_len;
        } else {
            lines.push(std::mem::take(&mut line));
            line.push_str(word);
            line_len = word_len;
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Width-aware structure printer over [`serde_json::Value`]. A subtree whose
/// compact rendering fits the remaining column budget stays on one line;
/// anything wider is broken open with a two-space structural indent. A budget
/// of 1 therefore breaks every non-empty container, yielding one value per
/// line. Scalars and empty containers are never split.
pub fn pretty_value(value: &Value, width: usize) -> String {
    let mut out = String::new();
    write_value(&mut out, value, 0, width.max(1));
    out
}

fn write_value(out: &mut String, value: &Value, column: usize, width: usize) {
    let flat = value.to_string();
    if column + flat.chars().count() <= width {
        out.push_str(&flat);
        return;
    }
    match value {
        Value::Array(items) if !items.is_empty() => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push('\n');
                push_indent(out, column + 2);
                write_value(out, item, column + 2, width);
            }
            out.push('\n');
            push_indent(out, column);
            out.push(']');
        }
        Value::Object(map) if !map.is_empty() => {
            out.push('{');
            for (i, (key, item)) in map.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push('\n');
                push_indent(out, column + 2);
                let quoted = Value::String(key.clone()).to_string();
                out.push_str(&quoted);
                out.push_str(": ");
                write_value(out, item, column + 2, width);
            }
            out.push('\n');
            push_indent(out, column);
            out.push('}');
        }
        // scalar wider than the budget stays whole
        _ => out.push_str(&flat),
    }
}

fn push_indent(out: &mut String, n: usize) {
    for _ in 0..n {
        out.push(' ');
    }
}

/// Render one entry to the text appended to the pending buffer.
pub fn format_entry(entry: &LogEntry, wrap_width: usize) -> String {
    match entry {
        LogEntry::Text(text) => indent_lines(text),
        LogEntry::Wrapped(text) => indent_lines(&wrap_text(text, wrap_width).join("\n")),
        LogEntry::Pretty { value, nest } => {
            let width = if *nest { 1 } else { wrap_width };
            let text = pretty_value(value, width);
            // compound indent: structural indent plus two extra on
            // continuation lines, entry indent on the first
            format!("{ENTRY_INDENT}{}", text.replace('\n', "\n  "))
        }
    }
}

fn indent_lines(text: &str) -> String {
    if text.is_empty() {
        return ENTRY_INDENT.to_string();
    }
    text.lines()
        .map(|line| format!("{ENTRY_INDENT}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn wrap_keeps_short_input_verbatim() {
        assert_eq!(wrap_text("two  spaces kept", 108), vec!["two  spaces kept"]);
    }

    #[test]
    fn wrap_breaks_oversized_words_into_budget_chunks() {
        let word = "x".repeat(50);
        let lines = wrap_text(&format!("start {word} end"), 20);
        assert_eq!(
            lines,
            vec![
                "start".to_string(),
                "x".repeat(20),
                "x".repeat(20),
                // tail chunk shares its line with the following word
                format!("{} end", "x".repeat(10)),
            ]
        );
    }

    #[test]
    fn wrap_counts_characters_not_bytes() {
        let text = "あ".repeat(30);
        let lines = wrap_text(&text, 12);
        assert_eq!(lines.len(), 3);
        for line in &lines {
            assert!(line.chars().count() <= 12);
        }
    }

    #[test]
    fn pretty_packs_small_subtrees_inline() {
        let text = pretty_value(&json!({"a": [1, 2, 3]}), 108);
        assert_eq!(text, r#"{"a":[1,2,3]}"#);
    }

    #[test]
    fn pretty_width_one_breaks_every_container() {
        let text = pretty_value(&json!([1, [2, 3]]), 1);
        assert_eq!(text, "[\n  1,\n  [\n    2,\n    3\n  ]\n]");
    }
}

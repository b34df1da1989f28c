//! Dry-run preview: what `generate` would change in a compose file.

use std::path::Path;

use crossterm::style::{Color, Stylize};
use similar::{ChangeTag, TextDiff};

use crate::ui::context::UiContext;
use crate::ui::theme;

/// Unchanged lines kept around each change
const CONTEXT_LINES: usize = 2;

/// Changed hunks between the file on disk and the generated content
///
/// `existing` is `None` when the file does not exist yet; every line is then
/// shown as added. Line numbers refer to the generated file, or to the file
/// on disk for removed lines.
pub fn render_compose_diff(ui: &UiContext, path: &Path, existing: Option<&str>, generated: &str) -> String {
    let old = existing.unwrap_or_default();
    let diff = TextDiff::from_lines(old, generated);
    let width = old.lines().count().max(generated.lines().count()).max(1).to_string().len();

    let mut out = String::new();
    let arrow = if ui.unicode { "→" } else { "->" };
    let header = match existing {
        Some(_) => format!("{} (on disk {} generated)", path.display(), arrow),
        None => format!("{} (new file)", path.display()),
    };
    push_line(&mut out, ui, &header, theme::colors::INFO);

    for group in diff.grouped_ops(CONTEXT_LINES) {
        let (Some(first), Some(last)) = (group.first(), group.last()) else {
            continue;
        };
        let hunk = format!(
            "@@ lines {}-{} @@",
            first.new_range().start + 1,
            last.new_range().end.max(first.new_range().start + 1)
        );
        push_line(&mut out, ui, &hunk, theme::colors::DIM);

        for op in &group {
            for change in diff.iter_changes(op) {
                let (number, sign, color) = match change.tag() {
                    ChangeTag::Delete => (change.old_index(), '-', theme::colors::ERROR),
                    ChangeTag::Insert => (change.new_index(), '+', theme::colors::SUCCESS),
                    ChangeTag::Equal => (change.new_index(), ' ', theme::colors::DIM),
                };
                let number = number.map(|n| n + 1).unwrap_or_default();
                let value = change.value().trim_end_matches('\n');
                let line = format!("{number:>width$} {sign} {value}");
                push_line(&mut out, ui, &line, color);
            }
        }
    }

    out
}

fn push_line(out: &mut String, ui: &UiContext, line: &str, color: Color) {
    if ui.color {
        out.push_str(&line.with(color).to_string());
    } else {
        out.push_str(line);
    }
    out.push('\n');
}

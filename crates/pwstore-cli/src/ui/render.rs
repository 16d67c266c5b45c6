//! Rendering primitives for CLI output.

use comfy_table::presets::NOTHING;
use comfy_table::{Attribute, Cell, ContentArrangement, Table as ComfyTable};
use pwstore_core::{EntrySummary, Record, Strength};

use super::context::UiContext;
use super::format::{format_relative, mask, truncate};
use super::theme::{strength_style, styled, styles, Badge};

/// Render a header line for a screen.
///
/// Pretty mode: "pwstore · screen" with optional path
/// Plain mode: "pwstore screen"
pub fn header(ctx: &UiContext, screen: &str, path: Option<&str>) -> String {
    if !ctx.mode.is_pretty() {
        return format!("pwstore {}", screen);
    }
    let title = styled("pwstore", styles::bold(), ctx.color);
    let mut out = format!("{} \u{00B7} {}", title, screen);
    if let Some(p) = path {
        let display_path = if p.chars().count() > 50 {
            let tail: String = p.chars().rev().take(47).collect::<Vec<_>>().into_iter().rev().collect();
            format!("...{}", tail)
        } else {
            p.to_string()
        };
        out.push_str(&format!("\n{}", kv(ctx, "Store", &display_path)));
    }
    out
}

/// Render a divider line.
pub fn divider(ctx: &UiContext) -> String {
    if ctx.mode.is_pretty() {
        let bar = if ctx.unicode { "\u{2500}" } else { "-" };
        bar.repeat(ctx.width.min(60))
    } else {
        "---".to_string()
    }
}

/// Render a badge with optional message.
pub fn badge(ctx: &UiContext, kind: Badge, message: &str) -> String {
    let badge_text = kind.display(ctx.unicode);
    let colored_badge = styled(badge_text, kind.style(), ctx.color);

    if message.is_empty() {
        colored_badge
    } else {
        format!("{} {}", colored_badge, message)
    }
}

/// Render a key-value pair.
///
/// Pretty mode: "Key: value" with dim key
/// Plain mode: "key=value"
pub fn kv(ctx: &UiContext, key: &str, value: &str) -> String {
    if ctx.mode.is_pretty() {
        let styled_key = styled(&format!("{}:", key), styles::dim(), ctx.color);
        format!("{} {}", styled_key, value)
    } else {
        format!("{}={}", key.to_lowercase().replace(' ', "_"), value)
    }
}

/// Render a hint line.
pub fn hint(ctx: &UiContext, text: &str) -> String {
    if ctx.mode.is_pretty() {
        let label = styled("Hint:", styles::dim(), ctx.color);
        format!("{} {}", label, text)
    } else {
        format!("hint={}", text)
    }
}

/// Render a receipt (summary block after an action).
///
/// Pretty mode: Badge + indented key-value pairs
/// Plain mode: status=ok + key=value lines
pub fn receipt(ctx: &UiContext, title: &str, items: &[(&str, String)]) -> String {
    let mut lines = Vec::new();

    if ctx.mode.is_pretty() {
        lines.push(badge(ctx, Badge::Ok, title));
        for (key, value) in items {
            lines.push(format!("  {}", kv(ctx, key, value)));
        }
    } else {
        lines.push("status=ok".to_string());
        for (key, value) in items {
            lines.push(kv(ctx, key, value));
        }
    }

    lines.join("\n")
}

/// Render a strength label, colored by score.
pub fn strength(ctx: &UiContext, strength: &Strength) -> String {
    if ctx.mode.is_pretty() {
        let label = styled(strength.label, strength_style(strength.score), ctx.color);
        format!("{} ({}/4)", label, strength.score)
    } else {
        strength.label.to_string()
    }
}

/// Render a simple table without borders.
///
/// Pretty mode: dim headers, padded columns
/// Plain mode: tab-separated values, no header
pub fn simple_table(ctx: &UiContext, headers: &[&str], rows: &[Vec<String>]) -> String {
    if !ctx.mode.is_pretty() {
        return rows
            .iter()
            .map(|row| row.join("\t"))
            .collect::<Vec<_>>()
            .join("\n");
    }

    let mut table = ComfyTable::new();
    table.load_preset(NOTHING);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    let header_cells: Vec<Cell> = headers
        .iter()
        .map(|h| {
            let mut cell = Cell::new(h);
            if ctx.color {
                cell = cell.add_attribute(Attribute::Dim);
            }
            cell
        })
        .collect();
    table.set_header(header_cells);

    for i in 0..headers.len() {
        if let Some(column) = table.column_mut(i) {
            column.set_padding((0, 2));
        }
    }

    for row in rows {
        table.add_row(row);
    }

    table.to_string()
}

/// One-line label for an entry in a picker: name, account, relative date.
pub fn entry_row(entry: &EntrySummary) -> String {
    let account = entry
        .username
        .as_deref()
        .or(entry.email.as_deref())
        .unwrap_or("");
    format!(
        "{:<20}  {:<24}  {}",
        entry.label,
        truncate(account, 24),
        format_relative(&entry.created_at)
    )
}

/// Table of catalog entries.
pub fn entry_table(ctx: &UiContext, entries: &[EntrySummary]) -> String {
    let rows: Vec<Vec<String>> = entries
        .iter()
        .map(|e| {
            vec![
                e.label.clone(),
                e.username.clone().unwrap_or_default(),
                e.email.clone().unwrap_or_default(),
                format_relative(&e.created_at),
            ]
        })
        .collect();
    simple_table(ctx, &["Name", "Username", "Email", "Created"], &rows)
}

/// Detail view of one record. The secret is masked unless `revealed`.
pub fn entry_detail(ctx: &UiContext, label: &str, record: &Record, revealed: bool) -> String {
    let secret = if revealed {
        record.secret.clone()
    } else {
        mask(&record.secret, ctx.unicode)
    };
    let mut lines = vec![
        styled(label, styles::bold(), ctx.color),
        kv(ctx, "Password", &secret),
    ];
    for (key, value) in [
        ("Username", &record.username),
        ("Email", &record.email),
        ("URL", &record.url),
    ] {
        if let Some(value) = value {
            lines.push(kv(ctx, key, value));
        }
    }
    lines.push(kv(ctx, "Created", &format_relative(&record.created_at)));
    if record.was_updated() {
        lines.push(kv(ctx, "Updated", &format_relative(&record.updated_at)));
    }
    lines.join("\n")
}

/// Print an empty line (only in pretty mode).
pub fn blank_line(ctx: &UiContext) {
    if ctx.mode.is_pretty() {
        println!();
    }
}

/// Format an error message with optional hint.
///
/// Pretty mode: "[ERR] message" with optional "Hint: ..." on next line
/// Plain mode: "error=message" with optional "hint=suggestion"
pub fn error_message(ctx: &UiContext, message: &str, error_hint: Option<&str>) -> String {
    let mut lines = Vec::new();

    if ctx.mode.is_pretty() {
        lines.push(badge(ctx, Badge::Err, message));
        if let Some(h) = error_hint {
            lines.push(hint(ctx, h.trim_start_matches("Hint: ")));
        }
    } else {
        lines.push(format!("error={}", message));
        if let Some(h) = error_hint {
            lines.push(format!("hint={}", h.trim_start_matches("Hint: ")));
        }
    }

    lines.join("\n")
}

/// Print an error message to stderr with optional hint.
pub fn print_error(ctx: &UiContext, message: &str, error_hint: Option<&str>) {
    eprintln!("{}", error_message(ctx, message, error_hint));
}

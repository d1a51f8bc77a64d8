//! # Rendering
//!
//! Turns `CmdResult` pieces into terminal text. Every function returns a `String`; the
//! handlers decide where it goes. Layout (widths, truncation, padding) is computed here
//! with `unicode-width`, colors come from a [`Palette`].

use super::styles::Palette;
use cheatapp::api::{CmdMessage, MessageLevel};
use cheatapp::commands::{BookmarkGroupView, CatalogSummary, SectionView};
use cheatapp::config::CheatConfig;
use cheatapp::model::Bookmark;
use chrono::{DateTime, Utc};
use console::Term;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const LINE_WIDTH: usize = 100;
pub const TIME_WIDTH: usize = 16;
pub const BOOKMARK_MARKER: &str = "★";
const CODE_INDENT: &str = "      ";

/// Width of stdout, or [`LINE_WIDTH`] when it is not a terminal.
pub fn line_width() -> usize {
    Term::stdout()
        .size_checked()
        .map(|(_, cols)| cols as usize)
        .unwrap_or(LINE_WIDTH)
}

pub fn render_catalogs(catalogs: &[CatalogSummary], palette: &Palette) -> String {
    let id_width = catalogs.iter().map(|c| c.id.width()).max().unwrap_or(0);

    let mut out = String::new();
    for c in catalogs {
        let padding = " ".repeat(id_width - c.id.width());
        out.push_str(&format!(
            "  {}{}  {}  {}\n",
            palette.index.apply_to(&c.id),
            padding,
            palette.heading.apply_to(&c.title),
            palette.dim.apply_to(format!(
                "{} sections, {} examples",
                c.section_count, c.example_count
            )),
        ));
        if !c.description.is_empty() {
            out.push_str(&format!(
                "  {}  {}\n",
                " ".repeat(id_width),
                palette.dim.apply_to(&c.description)
            ));
        }
    }
    out
}

/// Renders filtered sections. Examples matching `query` on their own are highlighted,
/// bookmarked examples carry [`BOOKMARK_MARKER`].
pub fn render_sections(
    catalog: &CatalogSummary,
    sections: &[SectionView],
    query: Option<&str>,
    show_code: bool,
    palette: &Palette,
    width: usize,
) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", palette.heading.apply_to(&catalog.title)));

    if sections.is_empty() {
        match query {
            Some(q) => out.push_str(&format!("  No sections match \"{}\".\n", q)),
            None => out.push_str("  This catalog has no sections.\n"),
        }
        return out;
    }

    for section in sections {
        out.push('\n');
        out.push_str(&format!(
            "{} {}\n",
            palette.section.apply_to(&section.title),
            palette.dim.apply_to(format!("[{}]", section.id))
        ));
        if !section.description.is_empty() {
            out.push_str(&format!(
                "  {}\n",
                palette
                    .dim
                    .apply_to(truncate_to_width(&section.description, width.saturating_sub(2)))
            ));
        }

        for ex in &section.examples {
            let marker = if ex.bookmarked {
                palette.marker.apply_to(BOOKMARK_MARKER).to_string()
            } else {
                " ".to_string()
            };
            let title = if ex.matched {
                palette.matched.apply_to(&ex.title).to_string()
            } else {
                ex.title.clone()
            };
            out.push_str(&format!("  {} {}\n", marker, title));

            if !ex.description.is_empty() {
                let text = truncate_to_width(&ex.description, width.saturating_sub(4));
                out.push_str(&format!("    {}\n", palette.dim.apply_to(text)));
            }
            if show_code && !ex.code.is_empty() {
                for line in ex.code.lines() {
                    out.push_str(&format!(
                        "{}{}\n",
                        CODE_INDENT,
                        palette.code.apply_to(line)
                    ));
                }
            }
        }
    }
    out
}

/// Renders grouped bookmarks with their display index and age.
pub fn render_bookmark_groups(
    groups: &[BookmarkGroupView],
    palette: &Palette,
    width: usize,
    now: DateTime<Utc>,
) -> String {
    let mut out = String::new();
    for (i, group) in groups.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let heading = match &group.catalog_title {
            Some(title) => format!(
                "{} {}",
                palette.heading.apply_to(title),
                palette.dim.apply_to(format!("[{}]", group.catalog_id))
            ),
            None => format!(
                "{} {}",
                palette.heading.apply_to(&group.catalog_id),
                palette.missing.apply_to("(not loaded)")
            ),
        };
        out.push_str(&format!("{}\n", heading));

        for entry in &group.entries {
            let idx = format!("{:>4}. ", entry.index);
            let section = entry
                .section_title
                .as_deref()
                .unwrap_or(&entry.bookmark.section_id);
            let label = format!("{} / {}", section, entry.bookmark.example_title);
            let suffix = if entry.is_dangling() { " (missing)" } else { "" };

            let available = width.saturating_sub(idx.width() + suffix.width() + TIME_WIDTH);
            let label = truncate_to_width(&label, available);
            let padding = available.saturating_sub(label.width());

            out.push_str(&format!(
                "{}{}{}{}{}\n",
                palette.index.apply_to(idx),
                label,
                palette.missing.apply_to(suffix),
                " ".repeat(padding),
                palette
                    .dim
                    .apply_to(format_time_ago(entry.bookmark.timestamp, now))
            ));
        }
    }
    out
}

/// One line per bookmark identity, for previews and removal reports.
pub fn render_bookmark_keys(bookmarks: &[Bookmark], palette: &Palette) -> String {
    bookmarks
        .iter()
        .map(|b| format!("  {}\n", palette.dim.apply_to(b.key())))
        .collect()
}

pub fn render_config(config: &CheatConfig) -> String {
    let catalog_dir = config
        .catalog_dir
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(default)".to_string());
    format!(
        "catalog-dir = {}\nshow-code = {}\n",
        catalog_dir, config.show_code
    )
}

pub fn render_messages(messages: &[CmdMessage], palette: &Palette) -> String {
    messages
        .iter()
        .map(|msg| {
            let style = match msg.level {
                MessageLevel::Info => &palette.info,
                MessageLevel::Success => &palette.success,
                MessageLevel::Warning => &palette.warning,
                MessageLevel::Error => &palette.error,
            };
            format!("{}\n", style.apply_to(&msg.content))
        })
        .collect()
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

/// Age of a millisecond timestamp, right-aligned to [`TIME_WIDTH`].
fn format_time_ago(timestamp_ms: i64, now: DateTime<Utc>) -> String {
    let time_str = match DateTime::from_timestamp_millis(timestamp_ms) {
        Some(ts) => {
            let duration = now.signed_duration_since(ts);
            timeago::Formatter::new().convert(duration.to_std().unwrap_or_default())
        }
        None => String::from("?"),
    };
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}

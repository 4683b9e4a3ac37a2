//! Text output formatting
//!
//! Pure string builders; commands decide where the text goes.

use colored::{ColoredString, Colorize};
use supdash_core::markup::NBSP;
use supdash_core::nav::{MenuEntry, ModalContent};
use supdash_core::{Fragment, LoadedView, Menu, NotFound, Page, SheetTable, Span, render};
use unicode_width::UnicodeWidthStr;

const COLUMN_GAP: &str = "  ";

#[derive(Debug, Clone, Copy, Default)]
struct TextStyle {
    bold: bool,
    italic: bool,
    underline: bool,
}

/// Rendered markup with ANSI styles. Non-breaking spaces print as spaces.
pub fn markup(fragments: &[Fragment]) -> String {
    let mut out = String::new();
    write_fragments(&mut out, fragments, TextStyle::default());
    out
}

fn write_fragments(out: &mut String, fragments: &[Fragment], style: TextStyle) {
    for fragment in fragments {
        match fragment {
            Fragment::Text(text) => out.push_str(&styled(text, style).to_string()),
            Fragment::Break => out.push('\n'),
            Fragment::Bold(children) => {
                write_fragments(out, children, TextStyle { bold: true, ..style });
            },
            Fragment::Italic(children) => {
                write_fragments(out, children, TextStyle { italic: true, ..style });
            },
            Fragment::Underline(children) => {
                write_fragments(
                    out,
                    children,
                    TextStyle {
                        underline: true,
                        ..style
                    },
                );
            },
        }
    }
}

// Styles are applied per leaf; nesting ColoredStrings would let the inner
// reset code clear the outer style.
fn styled(text: &str, style: TextStyle) -> ColoredString {
    let mut out = text.replace(NBSP, " ").normal();
    if style.bold {
        out = out.bold();
    }
    if style.italic {
        out = out.italic();
    }
    if style.underline {
        out = out.underline();
    }
    out
}

/// Highlighted text: matches are shown in bold red.
pub fn spans(spans: &[Span]) -> String {
    spans
        .iter()
        .map(|span| match span {
            Span::Plain(text) => text.clone(),
            Span::Match(text) => text.red().bold().to_string(),
        })
        .collect()
}

/// Breadcrumb, heading, info, notes and child cards of a page.
pub fn page(page: &Page) -> String {
    let mut lines = Vec::new();

    let crumbs: Vec<String> = page
        .breadcrumb
        .iter()
        .map(|crumb| {
            if crumb.link.is_some() {
                crumb.label.dimmed().to_string()
            } else {
                crumb.label.clone()
            }
        })
        .collect();
    lines.push(crumbs.join(&" > ".dimmed().to_string()));
    lines.push(String::new());
    lines.push(page.heading.bold().to_string());

    if let Some(info) = &page.info {
        lines.push(markup(info));
    }
    if let Some(notes) = &page.notes {
        lines.push(format!("{} {}", "Notes:".cyan(), markup(notes)));
    }
    if let Some(article) = &page.article {
        lines.push(format!("{} {article}", "Article:".cyan()));
    }

    if !page.children.is_empty() {
        lines.push(String::new());
        for child in &page.children {
            lines.push(format!("  {}  {}", child.title.bold(), child.path.dimmed()));
            if let Some(info) = &child.info {
                for line in markup(info).lines() {
                    lines.push(format!("    {line}"));
                }
            }
        }
    }

    lines.join("\n")
}

/// The message shown in place of a page that does not exist.
pub fn not_found(miss: &NotFound) -> String {
    miss.to_string().yellow().to_string()
}

/// An override view, with its spreadsheet when one was loaded.
pub fn view(loaded: &LoadedView) -> String {
    let view = &loaded.view;
    let mut lines = vec![view.title.bold().to_string()];

    if let Some(summary) = &view.summary {
        lines.push(markup(&render(summary)));
    }

    let label_width = view
        .items
        .iter()
        .map(|item| item.label.width())
        .max()
        .unwrap_or(0);
    for item in &view.items {
        let mut line = format!("  {}", pad(&item.label, label_width).cyan());
        if let Some(value) = &item.value {
            line.push_str(COLUMN_GAP);
            line.push_str(value);
        }
        if let Some(link) = &item.link {
            line.push_str(COLUMN_GAP);
            line.push_str(&link.dimmed().to_string());
        }
        lines.push(line);
    }

    match (&view.sheet, &loaded.sheet) {
        (Some(_), Some(table)) => {
            lines.push(String::new());
            lines.push(self::table(table));
        },
        (Some(name), None) => {
            lines.push(format!("No data available for '{name}'").dimmed().to_string());
        },
        (None, _) => {},
    }

    lines.join("\n")
}

/// A spreadsheet as aligned columns with a bold header row.
pub fn table(table: &SheetTable) -> String {
    if table.is_empty() {
        return "No data".dimmed().to_string();
    }

    let columns = table
        .rows
        .iter()
        .map(Vec::len)
        .chain(std::iter::once(table.headers.len()))
        .max()
        .unwrap_or(0);
    let mut widths = vec![0; columns];
    for row in std::iter::once(&table.headers).chain(&table.rows) {
        for (idx, cell) in row.iter().enumerate() {
            widths[idx] = widths[idx].max(cell.width());
        }
    }

    let format_row = |row: &[String]| {
        widths
            .iter()
            .enumerate()
            .map(|(idx, width)| pad(row.get(idx).map_or("", String::as_str), *width))
            .collect::<Vec<_>>()
            .join(COLUMN_GAP)
            .trim_end()
            .to_string()
    };

    let mut lines = vec![format_row(&table.headers).bold().to_string()];
    lines.extend(table.rows.iter().map(|row| format_row(row)));
    lines.join("\n")
}

/// The navigation menu as an indented tree.
pub fn menu(menu: &Menu) -> String {
    let mut lines = Vec::new();
    for module in &menu.modules {
        lines.push(module.label.bold().to_string());
        for entry in &module.entries {
            match entry {
                MenuEntry::Link(link) => {
                    lines.push(format!("  {}  {}", link.label, link.path.dimmed()));
                },
                MenuEntry::Group { label, links } => {
                    lines.push(format!("  {label}"));
                    for link in links {
                        lines.push(format!("    {}  {}", link.label, link.path.dimmed()));
                    }
                },
            }
        }
    }
    lines.join("\n")
}

/// The interstitial modal, framed by its title.
pub fn modal(modal: &ModalContent) -> String {
    let mut lines = vec![format!("[ {} ]", markup(&modal.title)).bold().to_string()];
    if !modal.info.is_empty() {
        lines.push(markup(&modal.info));
    }
    if let Some(notes) = &modal.notes {
        lines.push(format!("{} {}", "Notes:".cyan(), markup(notes)));
    }
    lines.join("\n")
}

fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{text}{}", " ".repeat(fill))
}

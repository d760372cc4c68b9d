use closet::commands::{CmdMessage, MessageLevel};
use closet::model::{Category, Garment};
use closet::session::menu::Menu;
use closet::session::view::View;
use colored::Colorize;
use std::io::Write;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};
use uuid::Uuid;

const HEADERS: [&str; 5] = ["uuid", "type", "american size", "european size", "color"];
const COLOR_WIDTH: usize = 24;
const SEPARATOR: &str = " | ";

/// [`View`] for an interactive terminal session.
pub struct TerminalView;

impl View for TerminalView {
    fn show_menu(&mut self, menu: &Menu) {
        println!();
        println!("{}", menu.title.bold());
        for option in &menu.options {
            println!("  {:>2}. {}", option.code, option.label);
        }
        prompt_marker("> ");
    }

    fn prompt(&mut self, text: &str) {
        println!("{}", text);
        prompt_marker("> ");
    }

    fn show_garments(&mut self, title: &str, garments: &[Garment]) {
        println!("{}", title.bold());
        print_garments(garments);
    }

    fn show_garment(&mut self, garment: &Garment) {
        println!("{}", garment);
    }

    fn show_identifiers(&mut self, ids: &[(Uuid, Category)]) {
        for (id, category) in ids {
            println!("{}  {}", id.to_string().yellow(), category);
        }
    }

    fn message(&mut self, message: CmdMessage) {
        print_messages(std::slice::from_ref(&message));
    }
}

fn prompt_marker(marker: &str) {
    print!("{}", marker);
    let _ = std::io::stdout().flush();
}

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_garments(garments: &[Garment]) {
    if garments.is_empty() {
        println!("No clothes found.");
        return;
    }
    print!("{}", render_table(garments));
}

/// Lays out garments as an aligned table, one row per garment.
pub(super) fn render_table(garments: &[Garment]) -> String {
    let rows: Vec<[String; 5]> = garments
        .iter()
        .map(|g| {
            [
                g.id().to_string(),
                g.category().to_string(),
                g.american_size().to_string(),
                g.european_size().to_string(),
                truncate_to_width(g.color(), COLOR_WIDTH),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.width());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }

    let mut out = String::new();
    out.push_str(&format_row(&HEADERS.map(String::from), &widths));
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&rule.join("-+-"));
    out.push('\n');
    for row in &rows {
        out.push_str(&format_row(row, &widths));
    }
    out
}

fn format_row(cells: &[String; 5], widths: &[usize; 5]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let padding = width.saturating_sub(cell.width());
            format!("{}{}", cell, " ".repeat(padding))
        })
        .collect();
    format!("{}\n", padded.join(SEPARATOR).trim_end())
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

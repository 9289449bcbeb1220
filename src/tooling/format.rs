//! Format tree listings, statistics and search results as text.

use crate::tree::{EntryKind, TreeEntry, TreeStats, VisibleDirectory};
use crate::types::Role;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;

const RULE: &str = "======================================";

/// Format a section heading with bold/underline.
pub fn format_section_heading(title: &str) -> String {
    format!("{}", title.bold().underline())
}

fn indent(depth: usize) -> String {
    "  ".repeat(depth)
}

/// Main menu shown once per loop iteration.
pub fn format_menu(role: Role) -> String {
    let mut out = String::new();
    out.push_str(&format!("\n{}\n", RULE));
    out.push_str(&format!("     {}\n", format_section_heading("Tree Directory System (RBAC)")));
    out.push_str(&format!("{}\n", RULE));
    out.push_str(&format!("Current role: {}\n", role));
    for (number, label) in [
        (1, "Create File"),
        (2, "Create Subdirectory"),
        (3, "Display Directory Tree"),
        (4, "Delete File"),
        (5, "Search for File"),
        (6, "Display Statistics"),
        (7, "List All Directories (visible)"),
        (8, "Exit"),
    ] {
        out.push_str(&format!("{}. {}\n", number, label));
    }
    out.push_str(RULE);
    out
}

/// Indented "- name" listing of visible directories.
pub fn format_visible_directories(directories: &[VisibleDirectory]) -> String {
    directories
        .iter()
        .map(|d| format!("{}- {}", indent(d.depth), d.name))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Directory tree with files, one entry per line.
pub fn format_tree(entries: &[TreeEntry]) -> String {
    entries
        .iter()
        .map(|e| match e.kind {
            EntryKind::Directory => format!("{}Directory: {}", indent(e.depth), e.name),
            EntryKind::File => format!("{}File: {}", indent(e.depth), e.name),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Numbered file list shown before a deletion.
pub fn format_numbered_files(directory: &str, files: &[String]) -> String {
    let mut out = format!("Files in '{}':", directory);
    for (i, file) in files.iter().enumerate() {
        out.push_str(&format!("\n{}. {}", i + 1, file));
    }
    out
}

/// Search results, or the no-visible-match notice.
pub fn format_search_results(file_name: &str, directories: &[String]) -> String {
    let mut out = format!("Search results for '{}':\n", file_name);
    if directories.is_empty() {
        out.push_str("No visible match found for you.");
        return out;
    }
    let lines: Vec<String> = directories
        .iter()
        .map(|d| format!("Found in directory: {}", d))
        .collect();
    out.push_str(&lines.join("\n"));
    out
}

/// Directory statistics table.
pub fn format_stats(stats: &TreeStats) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Statistic", "Count"]);
    table.add_row(vec![
        "Total directories".to_string(),
        stats.directories.to_string(),
    ]);
    table.add_row(vec!["Total files".to_string(), stats.files.to_string()]);
    format!(
        "{}\n\n{}",
        format_section_heading("Directory Statistics"),
        table
    )
}

//! Markdown report generation
//!
//! This module generates human-readable markdown reports of a discovery run,
//! including run information, albums, media grouped by kind, and skipped
//! tasks.

use crate::output::{DiscoveryReport, OutputResult};
use crate::state::MediaRef;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Writes a markdown report of a run
///
/// # Arguments
///
/// * `report` - The finished run
/// * `output_path` - Path where the markdown file should be written
///
/// # Returns
///
/// * `Ok(())` - Successfully wrote the report
/// * `Err(OutputError)` - Failed to write the report
pub fn write_markdown_summary(report: &DiscoveryReport, output_path: &Path) -> OutputResult<()> {
    let markdown = format_markdown_summary(report);

    let mut file = File::create(output_path)?;
    file.write_all(markdown.as_bytes())?;

    Ok(())
}

/// Formats a run as markdown
pub fn format_markdown_summary(report: &DiscoveryReport) -> String {
    let discovery = &report.discovery;
    let mut md = String::new();

    // Title
    md.push_str("# Gallery-Trawl Discovery Report\n\n");

    // Run metadata
    md.push_str("## Run Information\n\n");
    md.push_str(&format!("- **Source**: {}\n", report.source));
    md.push_str(&format!("- **Seed**: {}\n", report.seed));
    md.push_str(&format!("- **Started**: {}\n", report.started_at.to_rfc3339()));
    md.push_str(&format!(
        "- **Finished**: {}\n",
        report.finished_at.to_rfc3339()
    ));
    md.push_str(&format!(
        "- **Duration**: {} seconds\n",
        report.duration_seconds()
    ));
    md.push_str(&format!(
        "- **Pages Fetched**: {}\n\n",
        discovery.pages_fetched
    ));

    // Totals
    md.push_str("## Totals\n\n");
    md.push_str("| Kind | Count |\n");
    md.push_str("|------|-------|\n");
    md.push_str(&format!("| Albums | {} |\n", discovery.albums.len()));
    if !report.albums_only {
        md.push_str(&format!("| Images | {} |\n", discovery.images().count()));
        md.push_str(&format!("| Videos | {} |\n", discovery.videos().count()));
    }
    md.push_str(&format!("| Skipped | {} |\n\n", discovery.skipped.len()));

    // Albums
    if !discovery.albums.is_empty() {
        md.push_str("## Albums\n\n");
        md.push_str("| Title | URL |\n");
        md.push_str("|-------|-----|\n");
        for album in &discovery.albums {
            md.push_str(&format!(
                "| {} | {} |\n",
                escape_cell(album.title.as_deref().unwrap_or("-")),
                album.url
            ));
        }
        md.push('\n');
    }

    if !report.albums_only {
        push_media_section(&mut md, "Images", discovery.images());
        push_media_section(&mut md, "Videos", discovery.videos());
    }

    // Skipped tasks
    if !discovery.skipped.is_empty() {
        md.push_str("## Skipped\n\n");
        md.push_str("| Target | Reason |\n");
        md.push_str("|--------|--------|\n");
        for skipped in &discovery.skipped {
            md.push_str(&format!(
                "| {} | {} |\n",
                escape_cell(&skipped.target),
                escape_cell(&skipped.reason.to_string())
            ));
        }
        md.push('\n');
    }

    md
}

fn push_media_section<'a>(md: &mut String, heading: &str, media: impl Iterator<Item = &'a MediaRef>) {
    let urls: Vec<&str> = media.map(|m| m.url.as_str()).collect();
    if urls.is_empty() {
        return;
    }

    md.push_str(&format!("## {}\n\n", heading));
    for url in urls {
        md.push_str(&format!("- {}\n", url));
    }
    md.push('\n');
}

/// Keeps table cells intact when a title contains a pipe
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

use crate::output::{DiscoveryReport, OutputError, OutputResult};

/// Formats a report as a plain listing
///
/// Albums first (with titles when known), then one media URL per line.
pub fn format_discovery(report: &DiscoveryReport) -> String {
    let discovery = &report.discovery;
    let mut out = String::new();

    out.push_str(&format!(
        "{} results for '{}'\n\n",
        report.source, report.seed
    ));

    out.push_str(&format!("Albums ({}):\n", discovery.albums.len()));
    for album in &discovery.albums {
        match &album.title {
            Some(title) => out.push_str(&format!("  {} - {}\n", title, album.url)),
            None => out.push_str(&format!("  {}\n", album.url)),
        }
    }

    if !report.albums_only {
        out.push_str(&format!("\nMedia ({}):\n", discovery.media.len()));
        for media in &discovery.media {
            out.push_str(&format!("  [{}] {}\n", media.kind, media.url));
        }
    }

    if !discovery.skipped.is_empty() {
        out.push_str(&format!("\nSkipped ({}):\n", discovery.skipped.len()));
        for skipped in &discovery.skipped {
            out.push_str(&format!("  {}\n", skipped));
        }
    }

    out
}

/// Prints a report to stdout
pub fn print_discovery(report: &DiscoveryReport) {
    print!("{}", format_discovery(report));
}

/// Serializes a report as pretty-printed JSON
pub fn to_json(report: &DiscoveryReport) -> OutputResult<String> {
    serde_json::to_string_pretty(report).map_err(|e| OutputError::Format(e.to_string()))
}

use protosync_core::SyncReport;

/// Format a key-value pair for display.
pub fn kv(key: &str, value: &str) -> String {
    format!("{key:>16}: {value}")
}

/// Format a header line.
pub fn header(title: &str) -> String {
    format!("=== {title} ===")
}

pub fn summary(report: &SyncReport) -> Vec<String> {
    let mut lines = vec![header("proto sync")];
    for dir in &report.removed {
        lines.push(kv("removed", &dir.display().to_string()));
    }
    lines.push(kv("files", &report.written.len().to_string()));
    lines.push(kv("replacements", &report.replacements.to_string()));
    lines
}

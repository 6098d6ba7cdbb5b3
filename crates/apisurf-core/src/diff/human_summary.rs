//! Human-readable rendering of an [`ApiDiff`].

use crate::diff::model::ApiDiff;

/// The `+`/`-` report, one entry per line with a trailing newline.
pub fn render_report(diff: &ApiDiff) -> String {
    let mut out = String::new();
    for entry in &diff.entries {
        out.push_str(&entry.to_string());
        out.push('\n');
    }
    out
}

/// One-paragraph summary of the counts behind a diff, for verbose output.
pub fn render_human_summary(diff: &ApiDiff) -> String {
    let added = diff.added().count();
    let removed = diff.removed().count();
    let mut out = if diff.ok {
        "API compatible".to_string()
    } else {
        format!("API differences: {added} added, {removed} removed")
    };

    let s = &diff.suppressed;
    if s.total() > 0 {
        out.push_str(&format!(
            "; {} removal(s) accepted (exceptions: {}, removed ports: {}, context: {})",
            s.total(),
            s.by_exception,
            s.by_port_removal,
            s.by_context
        ));
    }
    out.push('\n');
    out
}

//! Paginated plain-text rendering of the export projection.

use crate::projection::ExportRow;
use insights_core::config::SummaryDocConfig;

const PAGE_WIDTH: usize = 72;

/// A title line followed by one line per entry, capped at
/// `config.max_entries` (entries beyond the cap are silently omitted),
/// broken into fixed-height pages with `Page n of m` footers.
pub fn render_summary(rows: &[ExportRow], config: &SummaryDocConfig) -> Vec<u8> {
    let mut lines = Vec::with_capacity(rows.len().min(config.max_entries) + 2);
    lines.push(center(&config.title));
    lines.push(String::new());
    for row in rows.iter().take(config.max_entries) {
        lines.push(entry_line(row, &config.currency_label));
    }

    let page_height = config.lines_per_page.max(1);
    let page_count = lines.chunks(page_height).count().max(1);

    let mut out = String::new();
    for (page, chunk) in lines.chunks(page_height).enumerate() {
        if page > 0 {
            out.push('\x0c');
        }
        for line in chunk {
            out.push_str(line);
            out.push('\n');
        }
        out.push('\n');
        out.push_str(&center(&format!("Page {} of {}", page + 1, page_count)));
        out.push('\n');
    }
    out.into_bytes()
}

fn entry_line(row: &ExportRow, currency_label: &str) -> String {
    format!(
        "{}: Revenue {}{:.2}, ROAS {:.2}",
        row.name.as_deref().unwrap_or(""),
        currency_label,
        row.revenue,
        row.roas
    )
}

fn center(text: &str) -> String {
    let len = text.chars().count();
    if len >= PAGE_WIDTH {
        return text.to_string();
    }
    let pad = (PAGE_WIDTH - len) / 2;
    format!("{}{}", " ".repeat(pad), text)
}

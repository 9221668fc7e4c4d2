//! # Report Formatting
//!
//! Plain-text rendering of a [`FoundationResult`]: the per-attachment rows,
//! the TOTAL row, any rejected attachments, and the sign-convention notes
//! a reader needs to interpret the numbers.
//!
//! Numbers are printed with a fixed number of decimals and thousands
//! separators, e.g. `-1,234,567.89`.

use crate::calculations::foundation::{ErrorPolicy, FoundationResult, ResultRecord};

/// Column headings of the foundation table
pub const HEADERS: [&str; 8] = ["Tag No.", "Type", "Fx", "Fy", "Fz", "Mx", "My", "Mz"];

/// Notes printed under the table
pub const NOTES: [&str; 5] = [
    "All forces in Newtons (N) and moments in Newton-meters (Nm).",
    "0 degree orientation aligned with -Z global direction; angles increase clockwise seen from above.",
    "+ve P: outward on shell, upward on top head, downward on bottom head.",
    "+ve VL: vertically upward on shell; +ve V1: horizontally outward on top head, inward on bottom head.",
    "+ve Vc and V2: horizontal tangential in the direction of the right-hand thumb, rotating clockwise.",
];

/// Format a number with `decimals` places and comma thousands separators.
///
/// ```rust
/// use vessel_core::report::format_thousands;
///
/// assert_eq!(format_thousands(1234567.891, 2), "1,234,567.89");
/// assert_eq!(format_thousands(-500.0, 2), "-500.00");
/// assert_eq!(format_thousands(-0.001, 2), "0.00");
/// ```
pub fn format_thousands(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value);
    let (negative, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, formatted.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let is_zero = unsigned.chars().all(|c| c == '0' || c == '.');
    let mut out = String::new();
    if negative && !is_zero {
        out.push('-');
    }
    out.push_str(&grouped);
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

fn row_cells(record: &ResultRecord, decimals: usize) -> Vec<String> {
    let mut cells = vec![
        record.tag.clone(),
        record.kind.map(|k| k.display_name().to_string()).unwrap_or_default(),
    ];
    cells.extend(record.load.components().iter().map(|v| format_thousands(*v, decimals)));
    cells
}

/// Render the foundation table with the TOTAL row, failures and notes.
///
/// Under [`ErrorPolicy::BlockTotal`] a result with failures gets a
/// "TOTAL not shown" line in place of the TOTAL row.
pub fn render_table(result: &FoundationResult, decimals: usize, policy: ErrorPolicy) -> String {
    let header: Vec<String> = HEADERS.iter().map(|h| h.to_string()).collect();
    let total = result.checked_total(policy);
    let body: Vec<Vec<String>> = match total {
        Ok(_) => result.rows().map(|r| row_cells(r, decimals)).collect(),
        Err(_) => result.records.iter().map(|r| row_cells(r, decimals)).collect(),
    };

    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in &body {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let format_row = |cells: &[String]| -> String {
        cells
            .iter()
            .zip(&widths)
            .enumerate()
            .map(|(i, (cell, w))| {
                // text columns left-aligned, numbers right-aligned
                if i < 2 {
                    format!("{:<w$}", cell, w = *w)
                } else {
                    format!("{:>w$}", cell, w = *w)
                }
            })
            .collect::<Vec<_>>()
            .join(" | ")
    };
    let rule = widths.iter().map(|w| "-".repeat(*w)).collect::<Vec<_>>().join("-+-");

    let mut out = String::new();
    out.push_str("Loads Transformed to Foundation (Global Coordinates)\n");
    out.push_str(&format_row(&header));
    out.push('\n');
    out.push_str(&rule);
    out.push('\n');
    let total_row = if total.is_ok() { body.len().checked_sub(1) } else { None };
    for (i, row) in body.iter().enumerate() {
        if Some(i) == total_row {
            out.push_str(&rule);
            out.push('\n');
        }
        out.push_str(&format_row(row));
        out.push('\n');
    }
    if let Err(e) = &total {
        out.push_str(&rule);
        out.push('\n');
        out.push_str(&format!("TOTAL not shown - {}\n", e));
    }

    if !result.failures.is_empty() {
        out.push('\n');
        out.push_str("Rejected attachments (not included in TOTAL):\n");
        for failure in &result.failures {
            out.push_str(&format!(
                "  #{} {} ({}): [{}] {}\n",
                failure.index + 1,
                failure.tag,
                failure.kind,
                failure.error.error_code(),
                failure.error
            ));
        }
    }

    out.push('\n');
    for note in NOTES {
        out.push_str("* ");
        out.push_str(note);
        out.push('\n');
    }
    out
}

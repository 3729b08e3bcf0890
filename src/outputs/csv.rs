//! CSV export of the day's items.
//!
//! Seven fixed columns. Fields containing a comma, quote, CR or LF are
//! quoted with inner quotes doubled; rows end in CRLF.

use crate::models::DigestItem;
use crate::utils::prefix_chars;
use std::error::Error;
use std::path::Path;
use tokio::fs;
use tracing::{error, info, instrument};

/// Header row of the export.
pub const HEADER: [&str; 7] = [
    "source",
    "title",
    "tags",
    "idea_title",
    "idea_outline",
    "publish_time",
    "link",
];

/// Separator between tags inside the `tags` column.
pub const TAG_SEPARATOR: &str = "、";
/// Separator between steps inside the `idea_outline` column.
pub const OUTLINE_SEPARATOR: &str = " | ";

const SEP: char = ',';

fn needs_quotes(field: &str) -> bool {
    field.contains(SEP) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Append one row to `out`.
pub fn push_row<S: AsRef<str>>(out: &mut String, row: &[S]) {
    for (i, cell) in row.iter().enumerate() {
        if i > 0 {
            out.push(SEP);
        }
        let cell = cell.as_ref();
        if needs_quotes(cell) {
            out.push('"');
            out.push_str(&cell.replace('"', "\"\""));
            out.push('"');
        } else {
            out.push_str(cell);
        }
    }
    out.push_str("\r\n");
}

/// Cells for one item, in [`HEADER`] order.
pub fn item_row(item: &DigestItem) -> [String; 7] {
    [
        item.source.clone(),
        item.title.clone(),
        item.tags.join(TAG_SEPARATOR),
        item.idea_title.clone(),
        item.idea_outline.join(OUTLINE_SEPARATOR),
        prefix_chars(&item.publish_time, 19).to_string(),
        item.link.clone(),
    ]
}

/// Build the full CSV text: header plus one row per item.
pub fn to_csv(items: &[DigestItem]) -> String {
    let mut out = String::new();
    push_row(&mut out, &HEADER);
    for item in items {
        push_row(&mut out, &item_row(item));
    }
    out
}

/// Write `items` as CSV to `path`, replacing any previous file.
///
/// # Errors
///
/// Returns an error if the file write fails.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn write_items(items: &[DigestItem], path: &Path) -> Result<(), Box<dyn Error>> {
    if let Err(e) = fs::write(path, to_csv(items)).await {
        error!(error = %e, "Failed to write CSV export");
        return Err(e.into());
    }
    info!(rows = items.len(), "Wrote CSV export");
    Ok(())
}

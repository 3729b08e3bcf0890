//! HTML rendering for the digest page.
//!
//! The page template is an external file with three slots: `{date}`,
//! `{cards}` and `{schedule}`. Literal braces (CSS, inline scripts) must be
//! written doubled as `{{` and `}}`.
//!
//! Item fields are embedded verbatim. Feed content is trusted; nothing is
//! HTML-escaped.

use crate::models::DigestItem;
use crate::utils::prefix_chars;
use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use std::path::Path;
use tokio::fs;
use tracing::{debug, error, info, instrument};

/// A template that cannot be filled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// `{name}` where `name` is not one of the provided slots.
    UnknownSlot(String),
    /// A `{` with no closing `}` before the end of the template.
    UnclosedSlot { offset: usize },
    /// A single `}` outside any slot.
    StrayBrace { offset: usize },
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateError::UnknownSlot(name) => write!(f, "unknown template slot {{{name}}}"),
            TemplateError::UnclosedSlot { offset } => {
                write!(f, "unclosed '{{' at byte {offset} in template")
            }
            TemplateError::StrayBrace { offset } => {
                write!(f, "single '}}' at byte {offset} in template (use '}}}}')")
            }
        }
    }
}

impl Error for TemplateError {}

/// Read the page template.
///
/// # Errors
///
/// Returns an error if the file cannot be read. There is no built-in
/// fallback template.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn load_template(path: &Path) -> Result<String, Box<dyn Error>> {
    match fs::read_to_string(path).await {
        Ok(tpl) => {
            debug!(bytes = tpl.len(), "Loaded page template");
            Ok(tpl)
        }
        Err(e) => {
            error!(error = %e, "Could not read page template");
            Err(format!("reading template {}: {e}", path.display()).into())
        }
    }
}

/// Substitute named slots into `template`.
///
/// `{name}` becomes the slot's value, `{{` and `}}` become single braces.
/// Slot values are inserted as-is and never re-scanned.
pub fn fill_template(template: &str, slots: &HashMap<&str, &str>) -> Result<String, TemplateError> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template.char_indices().peekable();

    while let Some((offset, ch)) = rest.next() {
        match ch {
            '{' if matches!(rest.peek(), Some((_, '{'))) => {
                rest.next();
                out.push('{');
            }
            '{' => {
                let mut name = String::new();
                let mut closed = false;
                for (_, c) in rest.by_ref() {
                    if c == '}' {
                        closed = true;
                        break;
                    }
                    name.push(c);
                }
                if !closed {
                    return Err(TemplateError::UnclosedSlot { offset });
                }
                let value = slots
                    .get(name.as_str())
                    .ok_or_else(|| TemplateError::UnknownSlot(name.clone()))?;
                out.push_str(value);
            }
            '}' if matches!(rest.peek(), Some((_, '}'))) => {
                rest.next();
                out.push('}');
            }
            '}' => return Err(TemplateError::StrayBrace { offset }),
            c => out.push(c),
        }
    }
    Ok(out)
}

/// Render one item as a card fragment.
///
/// The heading shows the idea title, or the raw title when the idea title
/// is empty. The publish time is cut to 19 characters.
pub fn render_card(item: &DigestItem) -> String {
    let heading = if item.idea_title.is_empty() {
        &item.title
    } else {
        &item.idea_title
    };
    let tag_html: String = item
        .tags
        .iter()
        .map(|t| format!(r#"<span class="tag">{t}</span>"#))
        .collect();
    let outline_html: String = item
        .idea_outline
        .iter()
        .map(|o| format!("<li>{o}</li>"))
        .collect();

    format!(
        r#"
        <div class="card">
          <h2>{heading}</h2>
          <div class="meta">来源：{source} · 发布：{published}</div>
          <div class="kv">{tag_html}</div>
          <div class="meta">摘要：{summary}</div>
          <ol class="ol">{outline_html}</ol>
          <div class="meta">原文：<a href="{link}" target="_blank">{title}</a></div>
        </div>
        "#,
        source = item.source,
        published = prefix_chars(&item.publish_time, 19),
        summary = item.summary,
        link = item.link,
        title = item.title,
    )
}

/// Render the full page for `date`.
///
/// Cards are joined with newlines in item order and placed in the `cards`
/// slot; `schedule` is the human-readable run schedule.
#[instrument(level = "info", skip_all, fields(%date, items = items.len()))]
pub fn render_page(
    template: &str,
    date: &str,
    items: &[DigestItem],
    schedule: &str,
) -> Result<String, TemplateError> {
    let cards = items.iter().map(render_card).collect::<Vec<_>>().join("\n");
    let slots = HashMap::from([("date", date), ("cards", cards.as_str()), ("schedule", schedule)]);
    let page = fill_template(template, &slots)?;
    info!(bytes = page.len(), "Rendered digest page");
    Ok(page)
}

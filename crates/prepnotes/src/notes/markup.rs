/// Opening tag for every generated list; the inline style matches the site's existing notes.
pub const LIST_OPEN: &str =
    r#"<ul style="margin-top: 0.5rem; margin-bottom: 0.5rem; padding-left: 1.5rem;">"#;

pub const PARAGRAPH_BREAK: &str = "<br /><br />";

const RICH_MARKERS: &[&str] = &["<strong>", "<b>", "<ul>", "<ul ", "<ol>", "<ol ", "<li>"];

pub fn has_rich_formatting(note: &str) -> bool {
    RICH_MARKERS.iter().any(|marker| note.contains(marker))
}

/// `<li><strong>{label}:</strong> {body}</li>`
pub fn labeled_item(label: &str, body: &str) -> String {
    format!("<li><strong>{}:</strong> {}</li>", label, body)
}

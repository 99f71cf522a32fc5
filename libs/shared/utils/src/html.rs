use shared_models::ResourceKind;

/// Escapes text for use in HTML element content and quoted attribute values.
pub fn escape_html(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// One `<td>` with escaped content.
pub fn cell(text: &str) -> String {
    format!("<td>{}</td>", escape_html(text))
}

/// Trailing actions cell with the row's delete control.
///
/// Rows without an id cannot be addressed, so they get an empty cell.
pub fn delete_action(kind: ResourceKind, id: &str) -> String {
    if id.is_empty() {
        return r#"<td class="actionsCol"></td>"#.to_string();
    }
    format!(
        r#"<td class="actionsCol"><a class="smallBtn danger" data-type="{}" href="{}/delete">Delete</a></td>"#,
        kind.label(),
        escape_html(&kind.item_path(id))
    )
}

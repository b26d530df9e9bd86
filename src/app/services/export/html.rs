const BODY_STYLE: &str = "font-family: sans-serif; padding: 40px; background: #f4f4f4;";
const CARD_STYLE: &str =
    "background: white; padding: 30px; border-radius: 10px; box-shadow: 0 4px 10px rgba(0,0,0,0.1);";
const HEADING_STYLE: &str = "color: #2c3e50; border-bottom: 2px solid #eee; padding-bottom: 10px;";
const TEXT_STYLE: &str = "font-size: 16px; line-height: 1.6; color: #333; white-space: pre-wrap;";

/// Render a standalone page with `title` as heading and `content` in a
/// `pre-wrap` paragraph, so newlines survive without `<br>` substitution.
///
/// The title is always escaped. Content is embedded as-is unless
/// `escape_content` is set.
pub fn render(content: &str, title: &str, escape_content: bool) -> String {
    let title = escape(title);
    let body = if escape_content {
        escape(content)
    } else {
        content.to_string()
    };

    let mut out = String::with_capacity(512 + title.len() * 2 + body.len());
    out.push_str("<!DOCTYPE html><html><head><meta charset='UTF-8'>");
    out.push_str(&format!("<title>{}</title></head>", title));
    out.push_str(&format!("<body style='{}'>", BODY_STYLE));
    out.push_str(&format!("<div style='{}'>", CARD_STYLE));
    out.push_str(&format!("<h1 style='{}'>{}</h1>", HEADING_STYLE, title));
    out.push_str(&format!("<p style='{}'>{}</p>", TEXT_STYLE, body));
    out.push_str("</div></body></html>");
    out
}

/// Minimal HTML text escaping.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

// src/render.rs
//! Turning reply text into answer-box markup and back.

/// Escape the characters that would otherwise be interpreted as markup.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Markup for the answer box: escaped text with each line break as `<br>`.
pub fn reply_html(text: &str) -> String {
    escape_html(&text.replace("\r\n", "\n")).replace('\n', "<br>")
}

/// Inverse of [`reply_html`], used by views that print to a terminal.
pub fn html_to_text(html: &str) -> String {
    html.replace("<br>", "\n")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        // last, so "&amp;lt;" comes back as "&lt;"
        .replace("&amp;", "&")
}

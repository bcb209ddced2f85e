//! Context-appropriate escaping for text, attributes and URLs

/// Escape text for an HTML text node or a quoted attribute value
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

/// Build an `href` value for a `mailto:` link
///
/// The address is checked at load time; here it only needs attribute escaping.
pub fn mailto_href(email: &str) -> String {
    escape_html(&format!("mailto:{}", email))
}

/// Build an `href` value for an external absolute URL
pub fn url_href(url: &str) -> String {
    escape_html(url)
}

/// Build the GitHub profile URL for a username
///
/// The username is percent-encoded as a single path segment.
pub fn github_href(username: &str) -> String {
    format!("https://github.com/{}", urlencoding::encode(username.trim()))
}

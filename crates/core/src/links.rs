//! Link normalization and HTML escaping for exported pages.

/// Inert placeholder used when a link has no target.
pub const PLACEHOLDER_HREF: &str = "#";

/// Prefixes that are left untouched by [`normalize_link`].
const RECOGNIZED_SCHEMES: &[&str] = &["http://", "https://", "mailto:", "tel:"];

/// Normalize a user-entered link for use in an `href`.
///
/// Blank input becomes [`PLACEHOLDER_HREF`]. Links with a recognized scheme
/// pass through (trimmed). Anything else is prefixed with `https://`.
/// Normalizing twice gives the same result as normalizing once.
pub fn normalize_link(raw: Option<&str>) -> String {
    let url = raw.map(str::trim).unwrap_or_default();

    if url.is_empty() || url == PLACEHOLDER_HREF {
        return PLACEHOLDER_HREF.to_string();
    }

    if has_scheme(url) {
        url.to_string()
    } else {
        format!("https://{url}")
    }
}

fn has_scheme(url: &str) -> bool {
    RECOGNIZED_SCHEMES.iter().any(|scheme| {
        url.get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    })
}

/// Escape text for HTML element content and quoted attribute values.
pub fn escape_html(text: &str) -> String {
    let mut output = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            '\'' => output.push_str("&#39;"),
            '"' => output.push_str("&quot;"),
            _ => output.push(c),
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_links_become_placeholder() {
        assert_eq!(normalize_link(None), "#");
        assert_eq!(normalize_link(Some("")), "#");
        assert_eq!(normalize_link(Some("   ")), "#");
    }

    #[test]
    fn test_bare_domain_gets_https() {
        assert_eq!(normalize_link(Some("example.com")), "https://example.com");
        assert_eq!(
            normalize_link(Some(" linkedin.com/in/jane ")),
            "https://linkedin.com/in/jane"
        );
    }

    #[test]
    fn test_recognized_schemes_pass_through() {
        assert_eq!(normalize_link(Some("https://example.com")), "https://example.com");
        assert_eq!(normalize_link(Some("http://example.com")), "http://example.com");
        assert_eq!(normalize_link(Some("HTTPS://EXAMPLE.COM")), "HTTPS://EXAMPLE.COM");
        assert_eq!(normalize_link(Some("mailto:jane@example.com")), "mailto:jane@example.com");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let inputs = [
            "",
            "  ",
            "#",
            "example.com",
            " https://example.com/a b ",
            "javascript:alert(1)",
            "tel:+15551234567",
            "ftp://files.example.com",
            "ünïcödé.example",
            "h",
        ];

        for input in inputs {
            let once = normalize_link(Some(input));
            assert_eq!(normalize_link(Some(&once)), once, "input: {input:?}");
        }
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }
}

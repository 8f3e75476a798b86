/// Escape text for embedding into html content or a double quoted attribute
pub(super) fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
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

/// Remove the literal `dropdown-menu` token from a class string. It marks a
/// child list, not the node itself, so it must never leak into the rendered
/// element.
pub(super) fn strip_menu_token(class: &str) -> String {
    class.replace("dropdown-menu", "").trim().to_string()
}

/// Serialize `(key, value)` pairs into html attributes in the given order,
/// skipping missing and empty values
pub(super) fn html_attribs(attribs: &[(&str, Option<String>)]) -> String {
    let mut out = String::new();
    for (key, value) in attribs {
        if let Some(value) = value {
            if value.is_empty() {
                continue;
            }
            out.push_str(&format!(" {key}=\"{}\"", escape(value)));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"a & b < c > "d" 'e'"#),
            "a &amp; b &lt; c &gt; &quot;d&quot; &#39;e&#39;"
        );
    }

    #[test]
    fn test_strip_menu_token() {
        assert_eq!(strip_menu_token("dropdown-menu"), "");
        assert_eq!(strip_menu_token("dropdown-menu fancy"), "fancy");
        assert_eq!(strip_menu_token("dropdown"), "dropdown");
    }

    #[test]
    fn test_html_attribs() {
        let attribs = [
            ("id", Some("main".to_string())),
            ("title", None),
            ("class", Some(String::new())),
            ("href", Some("/a?x=1&y=2".to_string())),
        ];
        assert_eq!(
            html_attribs(&attribs),
            r#" id="main" href="/a?x=1&amp;y=2""#
        );
    }
}

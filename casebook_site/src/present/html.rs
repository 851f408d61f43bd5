//! Minimal HTML markup helpers for page fragments.

/// Escape text for use as element content or a quoted attribute value.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// `<tag id="id">inner</tag>`; `inner` is inserted as-is.
pub fn element(tag: &str, id: Option<&str>, inner: &str) -> String {
    match id {
        Some(id) => format!("<{tag} id=\"{}\">{inner}</{tag}>", escape_html(id)),
        None => format!("<{tag}>{inner}</{tag}>"),
    }
}

/// An element whose content is plain text.
pub fn text_element(tag: &str, id: Option<&str>, text: &str) -> String {
    element(tag, id, &escape_html(text))
}

/// A collapsible observation region, hidden unless it has text.
pub fn observation_region(region_id: &str, analysis_id: &str, analysis: Option<&str>) -> String {
    let style = if analysis.is_some() { "display: block" } else { "display: none" };
    format!(
        "<div id=\"{}\" class=\"observations\" style=\"{style}\"><div id=\"{}\">{}</div></div>",
        escape_html(region_id),
        escape_html(analysis_id),
        analysis.unwrap_or_default()
    )
}

/// Embed a value for page scripts as `const name = <json>;`.
///
/// `</` is escaped so the JSON cannot close the surrounding script element.
pub fn script_global(name: &str, value: &serde_json::Value) -> String {
    format!("const {name} = {};", value.to_string().replace("</", "<\\/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_elements() {
        assert_eq!(element("p", None, "<em>x</em>"), "<p><em>x</em></p>");
        assert_eq!(text_element("h1", Some("title"), "A & B"), "<h1 id=\"title\">A &amp; B</h1>");
    }

    #[test]
    fn test_observation_region_hidden_without_text() {
        let hidden = observation_region("obs", "analysis", None);
        assert!(hidden.contains("display: none"));
        assert!(hidden.contains("<div id=\"analysis\"></div>"));

        let shown = observation_region("obs", "analysis", Some("Ink smudged."));
        assert!(shown.contains("display: block"));
        assert!(shown.contains("Ink smudged."));
    }

    #[test]
    fn test_script_global_escapes_closing_tags() {
        let global = script_global("entries", &json!([{"content": "</script>"}]));
        assert_eq!(global, r#"const entries = [{"content":"<\/script>"}];"#);
        assert_eq!(script_global("nextChapter", &json!(null)), "const nextChapter = null;");
    }
}

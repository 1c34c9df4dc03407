use super::ComponentMap;
use crate::parsing::ParseError;

/// Builds a component map that renders to HTML strings.
///
/// Each `(name, html_tag)` pair wraps its children in
/// `<html_tag>…</html_tag>`; text leaves are HTML-escaped. Suitable for
/// server-side rendering of translated markup, and small enough to double
/// as a reference backend for the generic bridge.
pub fn html_components<'a>(
    tags: impl IntoIterator<Item = (&'a str, &'a str)>,
) -> ComponentMap<String> {
    let mut map = ComponentMap::new(|text| html_escape::encode_text(text).into_owned());
    for (name, html_tag) in tags {
        let tag = html_tag.to_string();
        map.insert(name, move |children: Vec<String>| {
            format!("<{tag}>{}</{tag}>", children.concat())
        });
    }
    map
}

/// Parses markup and renders it to a single HTML string.
pub fn render_to_html(text: &str, components: &ComponentMap<String>) -> Result<String, ParseError> {
    Ok(super::render_text(text, components)?.concat())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn wraps_tags_and_escapes_text() {
        let map = html_components([("Bold", "b"), ("Italic", "i")]);
        let html = render_to_html("1 < 2 is <Bold>very <Italic>true</Italic></Bold>", &map);

        // "1 < 2" is not valid markup: the stray bracket opens a tag.
        assert!(html.is_err());

        let html = render_to_html("x & y is <Bold>very <Italic>true</Italic></Bold>", &map).unwrap();
        assert_eq!(html, "x &amp; y is <b>very <i>true</i></b>");
    }

    #[test]
    fn escapes_angle_brackets_in_text() {
        let map = html_components([("Code", "code")]);
        let html = render_to_html("<Code>a -> b</Code>", &map).unwrap();
        assert_eq!(html, "<code>a -&gt; b</code>");
    }

    #[test]
    fn empty_input_renders_to_empty_string() {
        let map = html_components([]);
        assert_eq!(render_to_html("", &map).unwrap(), "");
    }
}

use dioxus::prelude::*;
use pulldown_cmark::{html, Options, Parser};

pub fn render_markdown(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(source, options);
    let mut output = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut output, parser);
    output
}

/// Static page authored in Markdown
#[component]
pub fn MarkdownPage(id: &'static str, source: &'static str) -> Element {
    let content = render_markdown(source);

    rsx! {
        div {
            id: "{id}",
            class: "markdown-page",
            style: "line-height: 1.6;",
            dangerous_inner_html: "{content}",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_headings_and_lists() {
        let html = render_markdown("# Titel\n\n- eins\n- zwei\n");
        assert!(html.contains("<h1>Titel</h1>"));
        assert!(html.contains("<li>eins</li>"));
    }

    #[test]
    fn test_escapes_inline_html_text() {
        let html = render_markdown("Werte 0 < x < 1");
        assert!(html.contains("0 &lt; x &lt; 1"));
    }
}

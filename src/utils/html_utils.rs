use scraper::{ElementRef, Html, Node, Selector};

/// Elements whose text content never renders.
const HIDDEN_CONTENT: [&str; 4] = ["script", "style", "noscript", "template"];

/// Compiles a literal CSS selector.
pub fn css(selector: &str) -> Selector {
    Selector::parse(selector).expect("valid selector")
}

pub fn parse_document(html: &str) -> Html {
    Html::parse_document(html)
}

/// Elements matching `selector` in document order.
pub fn select<'a>(document: &'a Html, selector: &str) -> Vec<ElementRef<'a>> {
    document.select(&css(selector)).collect()
}

pub fn count_elements(document: &Html, selector: &str) -> usize {
    document.select(&css(selector)).count()
}

/// `#id` when present, `tag:nth-of-type(n)` among siblings otherwise.
pub fn element_selector(element: ElementRef<'_>) -> String {
    if let Some(id) = element.value().id().filter(|id| !id.is_empty()) {
        return format!("#{}", id);
    }
    let name = element.value().name();
    let position = element
        .prev_siblings()
        .filter_map(ElementRef::wrap)
        .filter(|sibling| sibling.value().name() == name)
        .count()
        + 1;
    format!("{}:nth-of-type({})", name, position)
}

/// Whitespace-collapsed text content, `None` when blank.
pub fn element_text(element: ElementRef<'_>) -> Option<String> {
    let text = element.text().collect::<Vec<_>>().join(" ");
    let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
    (!text.is_empty()).then_some(text)
}

pub fn extract_title(document: &Html) -> Option<String> {
    document.select(&css("title")).next().and_then(element_text)
}

/// Rendered text of the document. Script, style and comment content is dropped.
pub fn visible_text(document: &Html) -> String {
    let mut text = String::new();
    for node in document.root_element().descendants() {
        let Node::Text(chunk) = node.value() else {
            continue;
        };
        let hidden = node.ancestors().any(|ancestor| {
            matches!(ancestor.value(), Node::Element(element) if HIDDEN_CONTENT.contains(&element.name()))
        });
        if !hidden {
            text.push_str(chunk);
            text.push(' ');
        }
    }
    text
}

pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

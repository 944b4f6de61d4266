use crate::config::PUBLIC_BASE;

pub fn render_page(text: &str) -> String {
    PAGE_HTML
        .replace("{{BASE}}", PUBLIC_BASE)
        .replace("{{CONTENT}}", &escape_html(text))
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

const PAGE_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <base href="{{BASE}}" />
  <title>Program</title>
  <script src="https://telegram.org/js/telegram-web-app.js"></script>
  <style>
    body {
      margin: 0;
      padding: 24px 18px;
      background: var(--tg-theme-bg-color, #ffffff);
      color: var(--tg-theme-text-color, #222222);
      font-family: -apple-system, "Segoe UI", Roboto, sans-serif;
    }

    #content {
      white-space: pre-wrap;
      line-height: 1.5;
    }
  </style>
</head>
<body>
  <div id="content">{{CONTENT}}</div>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_holds_escaped_text() {
        let html = render_page("<b>Day 1</b> & rest");
        assert!(html.contains(r#"<div id="content">&lt;b&gt;Day 1&lt;/b&gt; &amp; rest</div>"#));
        assert!(html.contains(r#"<base href="/webapp/" />"#));
    }

    #[test]
    fn empty_text_renders_empty_element() {
        assert!(render_page("").contains(r#"<div id="content"></div>"#));
    }
}

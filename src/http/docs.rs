use crate::codec::Registry;
use crate::types::Mode;

pub const SAMPLE_INPUT: &str = "A123456";

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
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

/// Index page listing every scheme with its live encoding of [`SAMPLE_INPUT`].
pub fn render(registry: &Registry) -> String {
    let mut rows = String::new();
    for &scheme in registry.schemes() {
        let codec = scheme.codec();
        let meta = codec.meta();
        let example = codec
            .encode(SAMPLE_INPUT)
            .unwrap_or_else(|e| format!("({})", e));
        rows.push_str(&format!(
            "<tr><td><code>{}</code></td><td>{}</td><td><code>{}</code></td></tr>\n",
            escape_html(meta.name),
            escape_html(meta.description),
            escape_html(&example)
        ));
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<title>textcodec</title>
</head>
<body>
<h1>textcodec</h1>
<p>Usage: <code>/?{enc}&amp;&lt;Scheme&gt;=&lt;text&gt;</code>, <code>/?{dec}&amp;&lt;Scheme&gt;=&lt;text&gt;</code>,
or <code>/?{jmp}&amp;&lt;Scheme&gt;=&lt;encoded URL&gt;</code> to decode and redirect.</p>
<p>Scheme metadata as JSON: <a href="/schemes">/schemes</a></p>
<table>
<tr><th>Scheme</th><th>Description</th><th>Example ({sample})</th></tr>
{rows}</table>
</body>
</html>
"#,
        enc = Mode::Encode,
        dec = Mode::Decode,
        jmp = Mode::Jump,
        sample = SAMPLE_INPUT,
        rows = rows,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("&#65;<b>"), "&amp;#65;&lt;b&gt;");
    }

    #[test]
    fn test_render_lists_every_scheme() {
        let page = render(Registry::global());
        for meta in Registry::global().list() {
            assert!(page.contains(&format!("<code>{}</code>", meta.name)), "missing {}", meta.name);
        }
        assert_eq!(page.matches("<tr><td>").count(), 16);
        assert!(page.contains("QTEyMzQ1Ng=="));
        assert!(page.contains("&amp;#65;&amp;#49;"));
    }
}

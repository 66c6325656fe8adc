//! Report Markdown to an HTML mail body

/// Header shown above the report in every mail
pub const HTML_HEADER: &str = "📋 Assignment Compliance Report";

/// Footer line shown below the report
pub const HTML_FOOTER: &str = "This report was generated automatically by CheckMate.";

/// Convert a report to the HTML mail body
///
/// This is plain substring replacement, not a Markdown renderer, and its
/// output is relied on as-is:
///
/// - Headings are replaced in the order `# `, `## `, `### `, each followed
///   by turning every newline into that level's closing tag plus a newline.
///   A `## ` line is therefore already consumed by the `# ` pass.
/// - Every `**` becomes `<strong>`. The following `</strong>` pass then
///   finds no marker left, so bold spans are never closed.
/// - Every remaining newline becomes `<br>` plus a newline.
///
/// The result is placed in a fixed page with a style block.
pub fn render_html(report: &str) -> String {
    let body = report
        .replace("# ", "<h1>")
        .replace('\n', "</h1>\n")
        .replace("## ", "<h2>")
        .replace('\n', "</h2>\n")
        .replace("### ", "<h3>")
        .replace('\n', "</h3>\n")
        .replace("**", "<strong>")
        .replace("**", "</strong>")
        .replace('\n', "<br>\n");

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <style>
        body {{
            font-family: Arial, sans-serif;
            line-height: 1.6;
            color: #333;
            max-width: 800px;
            margin: 0 auto;
            padding: 20px;
        }}
        h1, h2, h3 {{
            color: #2c3e50;
            border-bottom: 2px solid #3498db;
            padding-bottom: 10px;
        }}
        .score {{
            background-color: #ecf0f1;
            padding: 10px;
            border-radius: 5px;
            margin: 10px 0;
        }}
        .feedback {{
            background-color: #f8f9fa;
            padding: 15px;
            border-left: 4px solid #3498db;
            margin: 10px 0;
        }}
        .suggestion {{
            background-color: #fff3cd;
            padding: 10px;
            border-radius: 5px;
            margin: 5px 0;
        }}
    </style>
</head>
<body>
    <h1>{header}</h1>
    {body}
    <hr>
    <p style="color: #7f8c8d; font-size: 12px;">
        {footer}
    </p>
</body>
</html>
"#,
        header = HTML_HEADER,
        body = body,
        footer = HTML_FOOTER,
    )
}

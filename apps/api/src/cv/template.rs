//! CV print template. Produces a standalone HTML document; every piece of
//! user-supplied text is escaped.

use serde::Deserialize;

/// The CV builder's form contents. Every field may be omitted.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CvDocument {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub education: String,
    pub skills: Vec<String>,
    pub projects: Vec<String>,
    pub experience: String,
    pub summary: String,
}

const STYLE: &str = "\
body { font-family: Arial, sans-serif; max-width: 800px; margin: 0 auto; padding: 40px; }
h1 { color: #0ea5e9; margin-bottom: 5px; }
h2 { color: #334155; border-bottom: 2px solid #0ea5e9; padding-bottom: 5px; margin-top: 25px; }
.contact { color: #64748b; margin-bottom: 20px; }
.section { margin-bottom: 20px; }
.skill-tag { display: inline-block; background: #f0f9ff; padding: 4px 12px; margin: 2px; border-radius: 20px; font-size: 12px; }
.project { margin-bottom: 10px; padding-left: 15px; border-left: 3px solid #0ea5e9; }";

/// Escapes the five HTML-significant characters.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Renders the printable CV. Projects and Experience are omitted when empty.
pub fn render_cv_html(doc: &CvDocument) -> String {
    let name = escape_html(&doc.name);
    let mut html = String::new();

    html.push_str(&format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{name} - CV</title>\n<style>\n{STYLE}\n</style>\n</head>\n<body>\n"
    ));
    html.push_str(&format!(
        "<h1>{name}</h1>\n<div class=\"contact\">{} | {}</div>\n",
        escape_html(&doc.email),
        escape_html(&doc.phone)
    ));

    push_section(&mut html, "Professional Summary", &paragraph(&doc.summary));
    push_section(&mut html, "Education", &paragraph(&doc.education));

    let skills = doc
        .skills
        .iter()
        .map(|s| format!("<span class=\"skill-tag\">{}</span>", escape_html(s)))
        .collect::<Vec<_>>()
        .join(" ");
    push_section(&mut html, "Skills", &skills);

    if !doc.projects.is_empty() {
        let projects: String = doc
            .projects
            .iter()
            .map(|p| format!("<div class=\"project\">{}</div>", escape_html(p)))
            .collect();
        push_section(&mut html, "Projects", &projects);
    }

    if !doc.experience.trim().is_empty() {
        push_section(&mut html, "Experience", &paragraph(&doc.experience));
    }

    html.push_str("</body>\n</html>\n");
    html
}

fn paragraph(text: &str) -> String {
    format!("<p>{}</p>", escape_html(text))
}

fn push_section(html: &mut String, heading: &str, body: &str) {
    html.push_str(&format!(
        "<div class=\"section\">\n<h2>{heading}</h2>\n{body}\n</div>\n"
    ));
}

//! HTML generation from a profile record

use crate::date::format_date;
use crate::profile::{Contact, Entry, ProfileRecord};
use crate::stylesheet::Stylesheet;

use super::escape::{escape_html, github_href, mailto_href, url_href};
use super::HtmlConfig;

/// Navigation targets, in display order
const NAV_LINKS: [(&str, &str); 4] = [
    ("about", "About"),
    ("experience", "Experience"),
    ("achievements", "Achievements"),
    ("contact", "Contact"),
];

/// Build an HTML document line by line
pub struct HtmlBuilder {
    config: HtmlConfig,
    lines: Vec<String>,
    indent: usize,
}

impl HtmlBuilder {
    /// Create a new HTML builder
    pub fn new(config: HtmlConfig) -> Self {
        Self {
            config,
            lines: vec![],
            indent: 0,
        }
    }

    fn indent_str(&self) -> String {
        if self.config.pretty_print {
            "  ".repeat(self.indent)
        } else {
            String::new()
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    /// Add a line at the current indentation
    pub fn line(&mut self, content: impl AsRef<str>) {
        let line = format!("{}{}", self.indent_str(), content.as_ref());
        self.lines.push(line);
    }

    /// Add a line and indent everything after it
    pub fn open(&mut self, tag: impl AsRef<str>) {
        self.line(tag);
        self.indent += 1;
    }

    /// Dedent and add a closing line
    pub fn close(&mut self, tag: impl AsRef<str>) {
        self.indent = self.indent.saturating_sub(1);
        self.line(tag);
    }

    /// Add text verbatim, without indentation
    pub fn raw(&mut self, content: impl Into<String>) {
        self.lines.push(content.into());
    }

    /// Build the final document
    pub fn build(self) -> String {
        let newline = self.newline().to_string();
        let mut out = self.lines.join(&newline);
        out.push('\n');
        out
    }
}

/// Render a complete portfolio page
pub fn render_html(profile: &ProfileRecord, stylesheet: &Stylesheet, config: &HtmlConfig) -> String {
    let mut builder = HtmlBuilder::new(config.clone());
    let name = escape_html(&profile.name);

    builder.line("<!DOCTYPE html>");
    builder.line(format!(r#"<html lang="{}">"#, escape_html(&config.lang)));

    builder.open("<head>");
    builder.line(r#"<meta charset="UTF-8">"#);
    builder.line(r#"<meta name="viewport" content="width=device-width, initial-scale=1.0">"#);
    builder.line(format!(
        "<title>{}{}</title>",
        name,
        escape_html(&config.title_suffix)
    ));
    render_style(&mut builder, stylesheet);
    builder.close("</head>");

    builder.open("<body>");
    render_nav(&mut builder, &name, &profile.contact);

    builder.open("<main>");
    render_about(&mut builder, &profile.about);
    render_entry_section(
        &mut builder,
        "experience",
        "Work Experience",
        &profile.experiences,
        Some(&config.default_location),
    );
    render_entry_section(
        &mut builder,
        "achievements",
        "Achievements &amp; Activities",
        &profile.achievements,
        None,
    );
    render_contact(&mut builder, &profile.contact);
    builder.close("</main>");

    render_script(&mut builder, config.scroll_threshold);
    builder.close("</body>");
    builder.line("</html>");

    builder.build()
}

fn render_style(builder: &mut HtmlBuilder, stylesheet: &Stylesheet) {
    if stylesheet.is_empty() {
        builder.line("<style></style>");
        return;
    }
    builder.line("<style>");
    builder.raw(stylesheet.css.as_str());
    builder.line("</style>");
}

fn render_nav(builder: &mut HtmlBuilder, name: &str, contact: &Contact) {
    let home = contact
        .github_username
        .as_deref()
        .map(github_href)
        .unwrap_or_else(|| "#about".to_string());

    builder.open(r#"<nav id="navbar" open>"#);
    builder.line(format!(r#"<a class="name" href="{}">{}</a>"#, home, name));
    builder.open(r#"<ul class="links">"#);
    for (id, label) in NAV_LINKS {
        builder.line(format!(r##"<li><a href="#{}">{}</a></li>"##, id, label));
    }
    builder.close("</ul>");
    builder.close("</nav>");
}

fn render_about(builder: &mut HtmlBuilder, about: &str) {
    builder.open(r#"<section id="about" class="box">"#);
    builder.line(r#"<h2 class="title">About Me</h2>"#);
    builder.open(r#"<div class="sub-text">"#);
    builder.line(format!("<p>{}</p>", escape_html(about)));
    builder.close("</div>");
    builder.close("</section>");
}

/// Render a list of entries with dividers between consecutive items
///
/// `location` is the placeholder for entries without one; `None` hides the
/// location column entirely.
fn render_entry_section(
    builder: &mut HtmlBuilder,
    id: &str,
    heading: &str,
    entries: &[Entry],
    location: Option<&str>,
) {
    builder.open(format!(r#"<section id="{}" class="box">"#, id));
    builder.line(format!(r#"<h2 class="title">{}</h2>"#, heading));

    for (i, entry) in entries.iter().enumerate() {
        if i > 0 {
            builder.line("<hr>");
        }
        builder.open(r#"<div class="entry">"#);
        builder.open(r#"<div class="sub-title">"#);
        builder.line(info_span(&entry.title));
        if let Some(default) = location {
            builder.line(info_span(entry.location.as_deref().unwrap_or(default)));
        }
        builder.line(info_span(&format_date(entry)));
        builder.close("</div>");
        builder.line(format!(
            r#"<p class="description">{}</p>"#,
            escape_html(&entry.description)
        ));
        builder.close("</div>");
    }

    builder.close("</section>");
}

fn info_span(text: &str) -> String {
    format!(r#"<span class="info">{}</span>"#, escape_html(text))
}

fn render_contact(builder: &mut HtmlBuilder, contact: &Contact) {
    builder.open(r#"<section id="contact" class="box">"#);
    builder.line(r#"<h2 class="title">Contact</h2>"#);
    builder.open(r#"<div class="contact-list">"#);

    if let Some(email) = &contact.email {
        contact_row(
            builder,
            "Email",
            format!(
                r#"<a href="{}">{}</a>"#,
                mailto_href(email),
                escape_html(email)
            ),
        );
    }
    if let Some(phone) = &contact.phone {
        contact_row(builder, "Phone", format!("<span>{}</span>", escape_html(phone)));
    }
    if let Some(url) = &contact.linkedin_url {
        contact_row(
            builder,
            "LinkedIn",
            format!(
                r#"<a href="{}" target="_blank">Connect with me</a>"#,
                url_href(url)
            ),
        );
    }
    if let Some(user) = &contact.github_username {
        contact_row(
            builder,
            "Github",
            format!(
                r#"<a href="{}" target="_blank">Connect with me</a>"#,
                github_href(user)
            ),
        );
    }

    builder.close("</div>");
    builder.close("</section>");
}

fn contact_row(builder: &mut HtmlBuilder, label: &str, value: String) {
    builder.open(r#"<div class="contact">"#);
    builder.line(format!("<span>{}:</span>", label));
    builder.line(value);
    builder.close("</div>");
}

fn render_script(builder: &mut HtmlBuilder, threshold: u32) {
    builder.open("<script>");
    builder.line("const navbar = document.getElementById('navbar');");
    builder.open("window.addEventListener('scroll', () => {");
    builder.open(format!("if (window.scrollY > {}) {{", threshold));
    builder.line("navbar.removeAttribute('open');");
    builder.close("} else {");
    builder.indent += 1;
    builder.line("navbar.setAttribute('open', '');");
    builder.close("}");
    builder.close("});");
    builder.close("</script>");
}

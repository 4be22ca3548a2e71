//! Standalone HTML export.
//!
//! Renders a [`Portfolio`] into one self-contained page: markup and an inline
//! stylesheet, no scripts. Every text value is escaped and every link goes
//! through [`normalize_link`].

use crate::display::EntryRecord;
use crate::links::{escape_html, normalize_link};
use crate::portfolio::Portfolio;
use crate::types::{ContactField, Entry, Section, Theme};

const BASE_STYLE: &str = "\
html { scroll-behavior: smooth; }
body { margin: 0 auto; max-width: 960px; padding: 2rem; line-height: 1.6; }
.header { display: flex; justify-content: space-between; align-items: center; gap: 1.5rem; }
.profile-img { width: 160px; height: 160px; border-radius: 50%; object-fit: cover; }
.initials { display: flex; align-items: center; justify-content: center; font-size: 2.5rem; font-weight: bold; }
.nav a { margin-right: 1rem; text-decoration: none; }
.section { margin-top: 2.5rem; }
.card { padding: 1rem 1.25rem; margin-bottom: 1rem; border-radius: 8px; }
.skills { display: flex; flex-wrap: wrap; gap: 0.75rem; }
.skill { min-width: 8rem; }
.skill-level { height: 6px; border-radius: 3px; background: #e5e7eb; }
.skill-level-inner { height: 100%; border-radius: 3px; }
.project-image { max-width: 100%; border-radius: 6px; }
.contact a, .social-links a { margin-right: 1rem; }
";

fn theme_style(theme: Theme) -> &'static str {
    match theme {
        Theme::Clean => "\
body { font-family: 'Inter', system-ui, sans-serif; color: #1f2937; background: #f9fafb; }
.card { background: #fff; border: 1px solid #e5e7eb; }
.initials, .skill-level-inner { background: #4f46e5; color: #fff; }
a { color: #4f46e5; }
",
        Theme::Modern => "\
body { font-family: 'Inter', system-ui, sans-serif; color: #111827; background: linear-gradient(to right, #fff, #f3f4f6); }
.card { background: #fff; box-shadow: 0 4px 14px rgba(0, 0, 0, 0.08); }
.initials, .skill-level-inner { background: #0f172a; color: #fff; }
a { color: #0ea5e9; }
",
        Theme::Creative => "\
body { font-family: 'Poppins', system-ui, sans-serif; color: #3b0764; background: linear-gradient(to right, #faf5ff, #fdf2f8); }
.card { background: rgba(255, 255, 255, 0.85); border-left: 4px solid #db2777; }
.initials, .skill-level-inner { background: linear-gradient(135deg, #9333ea, #db2777); color: #fff; }
a { color: #db2777; }
",
        Theme::Professional => "\
body { font-family: Georgia, 'Times New Roman', serif; color: #1e293b; background: #fff; }
.card { border-bottom: 1px solid #cbd5e1; border-radius: 0; }
.initials, .skill-level-inner { background: #1e3a8a; color: #fff; }
a { color: #1e3a8a; }
",
    }
}

/// Renders portfolios as standalone HTML documents.
#[derive(Debug, Clone, Default)]
pub struct HtmlExporter {
    /// Overrides the portfolio's own theme when set.
    theme: Option<Theme>,
}

impl HtmlExporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render with a fixed theme instead of the portfolio's.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = Some(theme);
        self
    }

    /// Render the whole page.
    pub fn render(&self, portfolio: &Portfolio) -> String {
        let theme = self.theme.unwrap_or(portfolio.theme);
        let mut html = String::with_capacity(8 * 1024);

        html.push_str(&format!(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"UTF-8\">\n\
             <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
             <title>{} - Portfolio</title>\n<style>\n{}{}</style>\n</head>\n\
             <body class=\"theme-{}\">\n<div class=\"container\">\n",
            escape_html(&portfolio.name),
            BASE_STYLE,
            theme_style(theme),
            theme,
        ));

        render_header(&mut html, portfolio);
        render_nav(&mut html, portfolio);

        for section in portfolio.sections.visible() {
            html.push_str(&format!(
                "<section id=\"{}\" class=\"section\">\n",
                section.anchor()
            ));
            match section {
                Section::Summary => render_summary(&mut html, portfolio),
                Section::Skills => render_skills(&mut html, portfolio),
                Section::Projects => render_projects(&mut html, portfolio),
                Section::Experience => render_timeline(&mut html, "Experience", &portfolio.experience),
                Section::Education => render_timeline(&mut html, "Education", &portfolio.education),
                Section::Contact => render_contact(&mut html, portfolio),
            }
            html.push_str("</section>\n");
        }

        html.push_str("</div>\n</body>\n</html>\n");

        log::debug!(
            "Rendered {} byte portfolio page with theme {}",
            html.len(),
            theme
        );
        html
    }
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.trim().is_empty() {
        placeholder
    } else {
        value
    }
}

fn render_header(html: &mut String, portfolio: &Portfolio) {
    html.push_str(&format!(
        "<header class=\"header\">\n<div>\n<h1>{}</h1>\n<p>{}</p>\n</div>\n",
        escape_html(or_placeholder(&portfolio.name, "Your Name")),
        escape_html(or_placeholder(&portfolio.title, "Your Professional Title")),
    ));

    match &portfolio.profile_image {
        Some(image) => {
            html.push_str(&format!(
                "<img src=\"{}\" alt=\"{}\" class=\"profile-img\">\n",
                escape_html(image),
                escape_html(&portfolio.name)
            ));
        }
        None => {
            let initials: String = or_placeholder(&portfolio.name, "Y")
                .chars()
                .take(2)
                .collect::<String>()
                .to_uppercase();
            html.push_str(&format!(
                "<div class=\"profile-img initials\">{}</div>\n",
                escape_html(&initials)
            ));
        }
    }

    html.push_str("</header>\n");
}

fn render_nav(html: &mut String, portfolio: &Portfolio) {
    html.push_str("<nav class=\"nav\">\n");
    for section in portfolio.sections.visible() {
        html.push_str(&format!("<a href=\"#{}\">{}</a>\n", section.anchor(), section.label()));
    }
    html.push_str("</nav>\n");
}

fn render_summary(html: &mut String, portfolio: &Portfolio) {
    html.push_str(&format!(
        "<h2>About Me</h2>\n<div class=\"card\">\n<p>{}</p>\n</div>\n",
        escape_html(or_placeholder(
            &portfolio.summary,
            "A short summary about you and your professional background."
        ))
    ));
}

fn render_skills(html: &mut String, portfolio: &Portfolio) {
    html.push_str("<h2>Skills</h2>\n<div class=\"skills\">\n");
    for skill in &portfolio.skills {
        html.push_str(&format!("<div class=\"skill\">\n<span>{}</span>\n", escape_html(skill.name())));
        if let Some(level) = skill.level().filter(|l| *l > 0) {
            html.push_str(&format!(
                "<div class=\"skill-level\"><div class=\"skill-level-inner\" style=\"width: {}%;\"></div></div>\n",
                level.min(100)
            ));
        }
        html.push_str("</div>\n");
    }
    html.push_str("</div>\n");
}

fn render_projects(html: &mut String, portfolio: &Portfolio) {
    html.push_str("<h2>Projects</h2>\n");
    for project in &portfolio.projects {
        html.push_str("<div class=\"card\">\n");
        if let Some(image) = project.image() {
            html.push_str(&format!(
                "<img src=\"{}\" alt=\"{}\" class=\"project-image\">\n",
                escape_html(image),
                escape_html(project.title())
            ));
        }
        html.push_str(&format!(
            "<h3>{}</h3>\n<p>{}</p>\n",
            escape_html(project.title()),
            escape_html(project.description().unwrap_or("Project description"))
        ));
        if let Some(link) = project.link() {
            html.push_str(&format!(
                "<p><a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\" class=\"project-link\">View Project</a></p>\n",
                escape_html(&normalize_link(Some(link)))
            ));
        }
        html.push_str("</div>\n");
    }
}

/// Experience and education share the same card layout.
fn render_timeline<T: EntryRecord>(html: &mut String, heading: &str, entries: &[Entry<T>]) {
    html.push_str(&format!("<h2>{heading}</h2>\n"));
    let fallback = format!("{heading} details");

    for entry in entries {
        html.push_str(&format!(
            "<div class=\"card\">\n<h3>{}</h3>\n<p><strong>{}</strong>",
            escape_html(entry.title()),
            escape_html(entry.subtitle().unwrap_or_default())
        ));
        if let Some(period) = entry.period() {
            html.push_str(&format!(" | {}", escape_html(period)));
        }
        html.push_str(&format!(
            "</p>\n<p>{}</p>\n</div>\n",
            escape_html(entry.description().unwrap_or(&fallback))
        ));
    }
}

fn render_contact(html: &mut String, portfolio: &Portfolio) {
    html.push_str("<h2>Contact</h2>\n<div class=\"contact\">\n");

    for field in ContactField::ALL {
        let Some(value) = portfolio.contact.get(field) else {
            continue;
        };
        let (href, label) = match field {
            ContactField::Email => (format!("mailto:{value}"), value.to_string()),
            ContactField::Phone => (format!("tel:{value}"), value.to_string()),
            ContactField::Website => (normalize_link(Some(value)), "Website".to_string()),
            ContactField::Linkedin => (normalize_link(Some(value)), "LinkedIn".to_string()),
            ContactField::Github => (normalize_link(Some(value)), "GitHub".to_string()),
        };
        html.push_str(&format!(
            "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>\n",
            escape_html(&href),
            escape_html(&label)
        ));
    }

    html.push_str("</div>\n<div class=\"social-links\">\n");
    for (platform, url) in &portfolio.social_links {
        html.push_str(&format!(
            "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>\n",
            escape_html(&normalize_link(Some(url))),
            escape_html(&platform_label(platform))
        ));
    }
    html.push_str("</div>\n");
}

/// `twitter` -> `Twitter`.
fn platform_label(platform: &str) -> String {
    let mut chars = platform.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

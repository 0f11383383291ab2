//! HTML rendering of assembled view-models and the static marketing pages.
//!
//! Rendering is deliberately plain: every page is a string of markup built
//! from an already-assembled view-model. Composition policy (concurrency,
//! degradation, metadata) lives in the assembler, never here.

use shared::view::{PageMetadata, UserPageModel, UsersIndexModel};
use std::fmt::Write as _;

const SITE_NAME: &str = "execdev";

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
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

fn layout(metadata: &PageMetadata, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title} | {SITE_NAME}</title>\n\
         <meta name=\"description\" content=\"{description}\">\n</head>\n\
         <body>\n<nav><a href=\"/\">Home</a> <a href=\"/about\">About</a> \
         <a href=\"/dashboard/users\">Dashboard</a></nav>\n{body}\n</body>\n</html>\n",
        title = escape(&metadata.title),
        description = escape(&metadata.description),
    )
}

pub fn home_page() -> String {
    let body = "<section id=\"intro\">\n\
                <h1>Yasan Malik</h1>\n\
                <p>Full-Stack Developer &amp; UX Designer</p>\n\
                <p>I design and build clean, functional products that solve real problems. \
                From concept to launch - focused on usability, performance, and results.</p>\n\
                </section>\n\
                <section id=\"skills\">\n<h2>Skills</h2>\n<ul>\n\
                <li>Frontend: React, Next.js, Vue, TypeScript, HTML/CSS, JavaScript</li>\n\
                <li>Backend: Node.js, MongoDB, SQL, Firebase, Python, API Integration</li>\n\
                <li>No-Code Tools: Webflow, Framer, Wix, Wordpress, Shopify</li>\n\
                <li>Design: Figma, UI/UX, Design Systems, Responsive Design, Prototyping</li>\n\
                <li>Workflow: Git, Jira, Notion, ClickUp, Slack, AWS</li>\n\
                </ul>\n</section>\n\
                <section id=\"testimonials\">\n<h2>Testimonials</h2>\n\
                <blockquote>\"Rare combination of technical expertise and user empathy.\" \
                &mdash; Hashaam D Khan</blockquote>\n\
                <blockquote>\"As a designer, I appreciate developers who care about details.\" \
                &mdash; Jibran Khalil</blockquote>\n</section>";
    layout(
        &PageMetadata::new("Home", "Portfolio of Yasan Malik"),
        body,
    )
}

pub fn about_page() -> String {
    let body = "<section id=\"about\">\n<h1>About</h1>\n\
                <p>Full-stack developer and UX designer, available for projects.</p>\n\
                </section>";
    layout(&PageMetadata::new("About", "About Yasan Malik"), body)
}

pub fn users_index_page(model: &UsersIndexModel) -> String {
    let mut body = String::from("<section>\n<h2><a href=\"/\">Back to Home</a></h2>\n<ul>\n");
    for user in &model.users {
        let _ = writeln!(
            body,
            "<li><a href=\"/dashboard/users/{id}\">{name}</a></li>",
            id = user.id,
            name = escape(&user.name),
        );
    }
    body.push_str("</ul>\n</section>");
    layout(&model.metadata, &body)
}

pub fn user_page(model: &UserPageModel) -> String {
    let mut body = format!("<h2>{}</h2>\n", escape(&model.user.name));
    if model.degraded {
        body.push_str("<p class=\"fallback\">Posts are unavailable right now.</p>");
    } else if model.posts.is_empty() {
        body.push_str("<p>No posts yet.</p>");
    } else {
        for post in &model.posts {
            let _ = writeln!(
                body,
                "<article>\n<h3>{title}</h3>\n<p>{content}</p>\n</article>",
                title = escape(&post.title),
                content = escape(&post.body),
            );
        }
    }
    layout(&model.metadata, &body)
}

pub fn not_found_page(message: &str) -> String {
    let body = format!("<h1>404</h1>\n<p>{}</p>", escape(message));
    layout(
        &PageMetadata::new("Not Found", "Page not found"),
        &body,
    )
}

//! Page templates.
//!
//! Templates ship inside the binary; `PageRenderer` owns the registry and
//! turns view models into HTML strings.

use super::blocks::render_blocks;
use crate::content::AssembledDocument;
use crate::error::AppError;
use crate::model::PostSummary;
use handlebars::Handlebars;
use serde::Serialize;

const HEADER: &str = include_str!("../../templates/header.hbs");
const FOOTER: &str = include_str!("../../templates/footer.hbs");
const INDEX: &str = include_str!("../../templates/index.hbs");
const POST: &str = include_str!("../../templates/post.hbs");
const NOT_FOUND: &str = include_str!("../../templates/not_found.hbs");

/// Format used for "Last edited" dates.
const DATE_FORMAT: &str = "%B %-d, %Y";

#[derive(Serialize)]
struct IndexView<'a> {
    site_title: &'a str,
    posts: &'a [PostSummary],
    notice: Option<&'a str>,
}

#[derive(Serialize)]
struct PostView<'a> {
    site_title: &'a str,
    page_title: &'a str,
    page_description: &'a str,
    title: &'a str,
    description: &'a str,
    reading_time_minutes: u32,
    last_edited: Option<String>,
    body_html: String,
}

#[derive(Serialize)]
struct NotFoundView<'a> {
    site_title: &'a str,
    page_title: &'a str,
    message: &'a str,
}

pub struct PageRenderer {
    registry: Handlebars<'static>,
    site_title: String,
}

impl PageRenderer {
    pub fn new(site_title: impl Into<String>) -> Result<Self, AppError> {
        let mut registry = Handlebars::new();
        for (name, source) in [("header", HEADER), ("footer", FOOTER)] {
            registry
                .register_partial(name, source)
                .map_err(|e| AppError::TemplateRegistration(Box::new(e)))?;
        }
        for (name, source) in [("index", INDEX), ("post", POST), ("not_found", NOT_FOUND)] {
            registry
                .register_template_string(name, source)
                .map_err(|e| AppError::TemplateRegistration(Box::new(e)))?;
        }

        Ok(Self {
            registry,
            site_title: site_title.into(),
        })
    }

    /// The post index. `notice` is shown above the list, e.g. when the
    /// provider could not be reached.
    pub fn render_index(
        &self,
        posts: &[PostSummary],
        notice: Option<&str>,
    ) -> Result<String, AppError> {
        self.render(
            "index",
            &IndexView {
                site_title: &self.site_title,
                posts,
                notice,
            },
        )
    }

    pub fn render_post(&self, document: &AssembledDocument) -> Result<String, AppError> {
        let properties = &document.properties;
        self.render(
            "post",
            &PostView {
                site_title: &self.site_title,
                page_title: &properties.title,
                page_description: &properties.description,
                title: &properties.title,
                description: &properties.description,
                reading_time_minutes: properties.reading_time_minutes,
                last_edited: properties
                    .last_edited_at
                    .map(|at| at.format(DATE_FORMAT).to_string()),
                body_html: render_blocks(&document.record_map.child_blocks()),
            },
        )
    }

    pub fn render_not_found(&self, message: &str) -> Result<String, AppError> {
        self.render(
            "not_found",
            &NotFoundView {
                site_title: &self.site_title,
                page_title: "Not found",
                message,
            },
        )
    }

    fn render<T: Serialize>(&self, name: &str, view: &T) -> Result<String, AppError> {
        self.registry
            .render(name, view)
            .map_err(|e| AppError::TemplateRenderError {
                name: name.to_string(),
                message: e.to_string(),
            })
    }
}

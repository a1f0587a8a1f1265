//! Port for turning a named template and a data context into HTML.
//!
//! Handlers decide *what* to show by building a [`Page`]; the renderer owns
//! template files, layout and escaping.

use serde::Serialize;
use serde_json::{Value, json};

use super::define_port_error;

define_port_error! {
    /// Errors raised while rendering a page.
    pub enum PageRendererError {
        /// The template is missing or failed during evaluation.
        Template { name: String, message: String } =>
            "template {name} failed to render: {message}",
    }
}

/// Templates the site knows how to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageTemplate {
    /// Directory listing.
    CafeList,
    /// Single café page.
    CafeDetail,
    /// Static about page.
    About,
    /// Contact form.
    Contact,
    /// Café suggestion form.
    AddCafe,
}

impl PageTemplate {
    /// Every template, in navigation order.
    pub const ALL: [Self; 5] = [
        Self::CafeList,
        Self::CafeDetail,
        Self::About,
        Self::Contact,
        Self::AddCafe,
    ];

    /// Template file name understood by renderer adapters.
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::CafeList => "index.html",
            Self::CafeDetail => "cafe.html",
            Self::About => "about.html",
            Self::Contact => "contact.html",
            Self::AddCafe => "add-cafe.html",
        }
    }
}

/// A template paired with the data it renders.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    /// Which template to render.
    pub template: PageTemplate,
    /// JSON object exposed to the template as top-level variables.
    pub context: Value,
}

impl Page {
    /// Pair `template` with `context`.
    pub fn new(template: PageTemplate, context: Value) -> Self {
        Self { template, context }
    }

    /// A page with an empty context.
    pub fn bare(template: PageTemplate) -> Self {
        Self::new(template, json!({}))
    }

    /// Pair `template` with a serialisable view.
    ///
    /// # Errors
    /// Returns [`PageRendererError::Template`] when `view` does not serialise.
    pub fn from_view<T: Serialize>(template: PageTemplate, view: &T) -> Result<Self, PageRendererError> {
        serde_json::to_value(view)
            .map(|context| Self::new(template, context))
            .map_err(|err| PageRendererError::template(template.file_name(), err.to_string()))
    }
}

/// Port for rendering pages to HTML.
#[cfg_attr(test, mockall::automock)]
pub trait PageRenderer: Send + Sync {
    /// Render `page` to a complete HTML document.
    fn render(&self, page: &Page) -> Result<String, PageRendererError>;
}

/// Fixture renderer that echoes the page as JSON.
///
/// Lets tests assert on the exact template and context a handler produced
/// without parsing HTML.
///
/// # Examples
/// ```
/// use cafe_directory::domain::ports::{FixturePageRenderer, Page, PageRenderer, PageTemplate};
///
/// let body = FixturePageRenderer
///     .render(&Page::bare(PageTemplate::About))
///     .expect("fixture renders");
/// let echoed: serde_json::Value = serde_json::from_str(&body).expect("json body");
/// assert_eq!(echoed["template"], "about.html");
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct FixturePageRenderer;

impl PageRenderer for FixturePageRenderer {
    fn render(&self, page: &Page) -> Result<String, PageRendererError> {
        let echoed = json!({
            "template": page.template.file_name(),
            "context": page.context,
        });
        serde_json::to_string(&echoed).map_err(|err| {
            PageRendererError::template(page.template.file_name(), err.to_string())
        })
    }
}

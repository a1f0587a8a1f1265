//! `PageRenderer` backed by MiniJinja.
//!
//! Templates are compiled into the binary, so a deployed server cannot be
//! missing one. Every template name ends in `.html`, which turns on
//! MiniJinja's HTML auto-escaping for all of them. Lookups through missing
//! values (`form.name` before anything was submitted) render as empty.

use minijinja::{Environment, UndefinedBehavior};

use crate::domain::ports::{Page, PageRenderer, PageRendererError, PageTemplate};

const LAYOUT: (&str, &str) = ("base.html", include_str!("../../../templates/base.html"));

fn source(template: PageTemplate) -> &'static str {
    match template {
        PageTemplate::CafeList => include_str!("../../../templates/index.html"),
        PageTemplate::CafeDetail => include_str!("../../../templates/cafe.html"),
        PageTemplate::About => include_str!("../../../templates/about.html"),
        PageTemplate::Contact => include_str!("../../../templates/contact.html"),
        PageTemplate::AddCafe => include_str!("../../../templates/add-cafe.html"),
    }
}

/// Renderer over the embedded site templates.
pub struct MiniJinjaRenderer {
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Compile the layout and every page template.
    ///
    /// # Errors
    /// Returns [`PageRendererError::Template`] when a template fails to
    /// parse.
    pub fn new() -> Result<Self, PageRendererError> {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Chainable);
        let (layout_name, layout_source) = LAYOUT;
        env.add_template(layout_name, layout_source)
            .map_err(|err| PageRendererError::template(layout_name, err.to_string()))?;
        for template in PageTemplate::ALL {
            let name = template.file_name();
            env.add_template(name, source(template))
                .map_err(|err| PageRendererError::template(name, err.to_string()))?;
        }
        Ok(Self { env })
    }
}

impl PageRenderer for MiniJinjaRenderer {
    fn render(&self, page: &Page) -> Result<String, PageRendererError> {
        let name = page.template.file_name();
        self.env
            .get_template(name)
            .and_then(|template| template.render(&page.context))
            .map_err(|err| PageRendererError::template(name, err.to_string()))
    }
}

// Template rendering engine using Tera

use super::builtin;
use tera::{Context, Tera};

/// Template engine preloaded with the built-in templates
pub struct TemplateEngine {
    tera: Tera,
}

impl TemplateEngine {
    /// Create an engine containing every built-in template
    pub fn new() -> tera::Result<Self> {
        let mut tera = Tera::default();
        for name in builtin::list_builtin_templates() {
            if let Some(content) = builtin::get_builtin_template(name) {
                tera.add_raw_template(name, content)?;
            }
        }
        Ok(Self { tera })
    }

    /// Render a template with context
    pub fn render(&self, template_name: &str, context: &Context) -> tera::Result<String> {
        log::trace!("Rendering template '{}'", template_name);
        self.tera.render(template_name, context)
    }
}

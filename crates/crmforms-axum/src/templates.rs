//! Page templates.
//!
//! Templates are compiled into the binary and rendered with minijinja.
//! Auto-escaping is on for every `.html` template.

use minijinja::Environment;
use serde::Serialize;

const TEMPLATES: &[(&str, &str)] = &[
    ("layout.html", include_str!("../templates/layout.html")),
    ("list.html", include_str!("../templates/list.html")),
    ("edit.html", include_str!("../templates/edit.html")),
    ("error.html", include_str!("../templates/error.html")),
];

/// Compiled page templates.
pub struct Templates {
    env: Environment<'static>,
}

impl Templates {
    /// Compile all templates.
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        for &(name, source) in TEMPLATES {
            env.add_template(name, source)?;
        }
        Ok(Self { env })
    }

    /// Render template `name` with `ctx`.
    pub fn render<S: Serialize>(&self, name: &str, ctx: S) -> Result<String, minijinja::Error> {
        self.env.get_template(name)?.render(ctx)
    }
}

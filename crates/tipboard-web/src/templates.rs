//! Page templates, compiled into the binary and rendered with minijinja.
//! `.html` templates are auto-escaped.

use minijinja::Environment;
use serde::Serialize;
use tipboard_common::{Result, TipboardError};

pub const INDEX: &str = "index.html";
pub const DASHBOARD: &str = "dashboard.html";
pub const CHAT: &str = "chat.html";

pub struct Templates {
    env: Environment<'static>,
}

impl Templates {
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();
        for (name, source) in [
            (INDEX, include_str!("../templates/index.html")),
            (DASHBOARD, include_str!("../templates/dashboard.html")),
            (CHAT, include_str!("../templates/chat.html")),
        ] {
            env.add_template(name, source).map_err(template_error)?;
        }
        Ok(Self { env })
    }

    pub fn render<S: Serialize>(&self, name: &str, ctx: S) -> Result<String> {
        self.env
            .get_template(name)
            .and_then(|tmpl| tmpl.render(ctx))
            .map_err(template_error)
    }
}

fn template_error(err: minijinja::Error) -> TipboardError {
    TipboardError::Template(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use minijinja::context;

    #[test]
    fn test_all_templates_compile() {
        assert!(Templates::new().is_ok());
    }

    #[test]
    fn test_values_are_escaped() {
        let t = Templates::new().unwrap();
        let html = t
            .render(CHAT, context! { title => "<b>x</b>", base_path => "/studio", streaming => false })
            .unwrap();
        assert!(html.contains("&lt;b&gt;x"));
        assert!(!html.contains("<b>x"));
    }

    #[test]
    fn test_script_values_are_json_literals() {
        let t = Templates::new().unwrap();
        let html = t
            .render(CHAT, context! { title => "Echo", base_path => "/studio", streaming => true })
            .unwrap();
        assert!(html.contains(r#"const endpoint = "/studio" + "/api/message";"#));
    }

    #[test]
    fn test_unknown_template_is_error() {
        let t = Templates::new().unwrap();
        assert!(matches!(t.render("missing.html", ()), Err(TipboardError::Template(_))));
    }
}

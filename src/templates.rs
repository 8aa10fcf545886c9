use tera::Tera;

use crate::config::PageConfig;
use crate::error::AppError;

/// Template name for the greeting page
pub const INDEX_TEMPLATE: &str = "index.html";

const INDEX_HTML: &str = r#"
    <html>
      <body style="font-family: Arial; text-align: center; padding: 50px;">
        <h1>🚀 Hello from CI/CD Pipeline!</h1>
        <p>Version: {{ version }}</p>
        <p>Build: {{ build_label }}</p>
        <p>Deployed via Jenkins + Docker + Kubernetes</p>
      </body>
    </html>
  "#;

/// Initialize the Tera template engine with the embedded greeting page.
///
/// Autoescaping is off: the build label is operator-supplied and is rendered verbatim.
pub fn init_templates() -> Result<Tera, AppError> {
    let mut tera = Tera::default();
    tera.autoescape_on(vec![]);
    tera.add_raw_template(INDEX_TEMPLATE, INDEX_HTML)?;
    Ok(tera)
}

/// Render the greeting page for the given page settings.
pub fn render_index(tera: &Tera, page: &PageConfig) -> Result<String, AppError> {
    let mut context = tera::Context::new();
    context.insert("version", &page.version);
    context.insert("build_label", page.build_label());
    Ok(tera.render(INDEX_TEMPLATE, &context)?)
}

//! # Template Rendering
//!
//! Templates use [minijinja](https://docs.rs/minijinja) (Jinja2-compatible) syntax.
//! The argument mapping is the whole render context, so `{{ name }}` reads the
//! value passed as `-a name=...`.
//!
//! Rendering always goes into a `String` first. Output is only written once the
//! template has executed successfully, so a failing render never emits a partial
//! document.
//!
//! The template's own directory is the search root for `{% include %}`,
//! `{% import %}` and `{% extends %}`.

use crate::args::Arguments;
use crate::config::RenderConfig;
use crate::error::{ArgtmplError, Result};
use minijinja::{path_loader, Environment};
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::debug;

const FALLBACK_NAME: &str = "template";

/// A template file, compiled and ready to execute.
pub struct TemplateDocument {
    env: Environment<'static>,
    name: String,
}

impl TemplateDocument {
    /// Reads and compiles the template at `path`.
    ///
    /// A missing file and a syntax error are both reported as parse failures.
    pub fn load<P: AsRef<Path>>(path: P, config: &RenderConfig) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ArgtmplError::ReadTemplate {
            path: path.to_path_buf(),
            source,
        })?;

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| FALLBACK_NAME.to_string());
        let root = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        let mut env = Environment::new();
        config.apply(&mut env);
        env.set_loader(path_loader(root.to_path_buf()));
        env.add_template_owned(name.clone(), source)
            .map_err(ArgtmplError::ParseTemplate)?;

        debug!(path = %path.display(), name = %name, "loaded template");
        Ok(Self { env, name })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Executes the template with `arguments` as its context.
    pub fn render(&self, arguments: &Arguments) -> Result<String> {
        let template = self
            .env
            .get_template(&self.name)
            .map_err(ArgtmplError::ExecuteTemplate)?;
        let rendered = template
            .render(arguments)
            .map_err(ArgtmplError::ExecuteTemplate)?;

        debug!(bytes = rendered.len(), "rendered template");
        Ok(rendered)
    }
}

/// Loads the template at `path` and renders it once.
pub fn render_file<P: AsRef<Path>>(
    path: P,
    arguments: &Arguments,
    config: &RenderConfig,
) -> Result<String> {
    TemplateDocument::load(path, config)?.render(arguments)
}

/// Writes a fully rendered document and flushes the writer.
pub fn write_output<W: Write>(mut out: W, rendered: &str) -> Result<()> {
    out.write_all(rendered.as_bytes())
        .and_then(|_| out.flush())
        .map_err(ArgtmplError::WriteOutput)
}

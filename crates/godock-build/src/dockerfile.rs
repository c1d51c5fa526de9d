use godock_core::{BuildConfig, GoModule};
use handlebars::Handlebars;
use serde::Serialize;

/// The multi-stage Dockerfile template, embedded at compile time.
pub const DOCKERFILE_TEMPLATE: &str = include_str!("../templates/Dockerfile.hbs");

const TEMPLATE_NAME: &str = "Dockerfile";

/// Values substituted into the Dockerfile template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub module_name: String,
    pub go_version: String,
    /// Values of 0 or less omit the EXPOSE directive
    pub port: i64,
    pub base_image: String,
    pub runtime_image: String,
    pub vuln_scan: bool,
}

/// Renders a multi-stage Go Dockerfile from module metadata.
pub struct DockerfileGenerator<'a> {
    params: TemplateParams,
    template: &'a str,
}

impl<'a> DockerfileGenerator<'a> {
    pub fn new(config: &BuildConfig, module: &GoModule, port: i64) -> Self {
        Self::with_template(config, module, port, DOCKERFILE_TEMPLATE)
    }

    /// Like [`new`](Self::new), but renders `template` instead of the built-in one.
    pub fn with_template(
        config: &BuildConfig,
        module: &GoModule,
        port: i64,
        template: &'a str,
    ) -> Self {
        Self {
            params: TemplateParams {
                module_name: module.name.clone(),
                go_version: module.go_version.clone(),
                port,
                base_image: config.base_image.clone(),
                runtime_image: config.runtime_image.clone(),
                vuln_scan: config.vuln_scan,
            },
            template,
        }
    }

    pub fn params(&self) -> &TemplateParams {
        &self.params
    }

    pub fn render(&self) -> Result<String, RenderError> {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);
        registry.register_escape_fn(handlebars::no_escape);
        registry
            .register_template_string(TEMPLATE_NAME, self.template)
            .map_err(|e| RenderError::Parse(Box::new(e)))?;

        registry
            .render(TEMPLATE_NAME, &self.params)
            .map_err(|e| RenderError::Execute(Box::new(e)))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("failed to parse Dockerfile template")]
    Parse(#[source] Box<handlebars::TemplateError>),
    #[error("failed to render Dockerfile template")]
    Execute(#[source] Box<handlebars::RenderError>),
}

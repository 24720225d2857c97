//! Template -> `.mcp.json` generation pipeline.

use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use {
    serde::Serialize,
    serde_json::{Value, ser::PrettyFormatter},
    tracing::{debug, info},
};

use crate::{
    env::Environment,
    error::{GenerateError, Result},
    overlay::load_overlay,
    template::Template,
};

/// Optional local overlay, relative to the project root.
pub const ENV_FILE: &str = ".env";
/// Checked-in template, relative to the project root.
pub const TEMPLATE_FILE: &str = ".mcp.template.json";
/// Generated config, relative to the project root.
pub const OUTPUT_FILE: &str = ".mcp.json";

const INDENT: &[u8] = b"    ";

/// Template rendered against an environment and parsed as JSON.
#[derive(Debug, Clone, PartialEq)]
pub struct Rendered {
    pub config: Value,
    /// Distinct placeholder names, first-occurrence order.
    pub placeholders: Vec<String>,
    /// Placeholders that had no value or an empty one.
    pub missing: Vec<String>,
}

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateReport {
    pub output_path: PathBuf,
    pub placeholders: Vec<String>,
    pub missing: Vec<String>,
    /// Keys of the top-level `mcpServers` object, when there is one.
    pub servers: Vec<String>,
}

/// Substitute placeholders in `text` and parse the result.
pub fn render(text: &str, env: &Environment) -> Result<Rendered> {
    let template = Template::parse(text);
    let placeholders: Vec<String> = template
        .placeholders()
        .into_iter()
        .map(str::to_string)
        .collect();
    let missing = template.missing(env);
    let config = serde_json::from_str(&template.render(env))
        .map_err(|source| GenerateError::Parse { source })?;
    Ok(Rendered {
        config,
        placeholders,
        missing,
    })
}

/// Serialize `value` as JSON indented with four spaces, no trailing newline.
pub fn to_pretty_json(value: &Value) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut ser =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    value
        .serialize(&mut ser)
        .map_err(|source| GenerateError::Serialize { source })?;
    Ok(buf)
}

/// Names of the entries under `mcpServers`. The shape is not validated.
pub fn server_names(config: &Value) -> Vec<String> {
    config
        .get("mcpServers")
        .and_then(Value::as_object)
        .map(|servers| servers.keys().cloned().collect())
        .unwrap_or_default()
}

/// Renders the project's MCP template into its runtime config file.
#[derive(Debug, Clone)]
pub struct ConfigGenerator {
    env_file: PathBuf,
    template: PathBuf,
    output: PathBuf,
}

impl ConfigGenerator {
    /// Use the standard file names under `root`.
    pub fn new(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            env_file: root.join(ENV_FILE),
            template: root.join(TEMPLATE_FILE),
            output: root.join(OUTPUT_FILE),
        }
    }

    #[must_use]
    pub fn with_env_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.env_file = path.into();
        self
    }

    #[must_use]
    pub fn with_template(mut self, path: impl Into<PathBuf>) -> Self {
        self.template = path.into();
        self
    }

    #[must_use]
    pub fn with_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = path.into();
        self
    }

    pub fn env_file(&self) -> &Path {
        &self.env_file
    }

    pub fn template(&self) -> &Path {
        &self.template
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Process environment with the overlay file, if any, merged on top.
    pub fn load_environment(&self) -> Result<Environment> {
        let env = Environment::from_process();
        Ok(match load_overlay(&self.env_file)? {
            Some(overlay) => env.with_overlay(overlay),
            None => env,
        })
    }

    /// Run the full pipeline against the process environment and overlay.
    pub fn generate(&self) -> Result<GenerateReport> {
        let env = self.load_environment()?;
        self.generate_with_env(&env)
    }

    /// Run the pipeline against `env` only; the overlay file is not read.
    ///
    /// The output file is written only after the template has been read,
    /// substituted, and parsed successfully.
    pub fn generate_with_env(&self, env: &Environment) -> Result<GenerateReport> {
        let text = self.read_template()?;
        let Rendered {
            config,
            placeholders,
            missing,
        } = render(&text, env)?;
        debug!(
            placeholders = placeholders.len(),
            missing = missing.len(),
            "rendered template"
        );

        let bytes = to_pretty_json(&config)?;
        self.write_output(&bytes)?;

        let servers = server_names(&config);
        info!(path = %self.output.display(), servers = servers.len(), "wrote config");
        if !missing.is_empty() {
            debug!(missing = %missing.join(", "), "unresolved environment variables");
        }

        Ok(GenerateReport {
            output_path: self.output.clone(),
            placeholders,
            missing,
            servers,
        })
    }

    fn read_template(&self) -> Result<String> {
        debug!(path = %self.template.display(), "loading template");
        std::fs::read_to_string(&self.template).map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                GenerateError::TemplateNotFound {
                    path: self.template.clone(),
                }
            } else {
                GenerateError::Read {
                    path: self.template.clone(),
                    source,
                }
            }
        })
    }

    fn write_output(&self, bytes: &[u8]) -> Result<()> {
        let write_err = |source| GenerateError::Write {
            path: self.output.clone(),
            source,
        };
        if let Some(parent) = self.output.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }
        std::fs::write(&self.output, bytes).map_err(write_err)
    }
}

//! Render `.mcp.json` from `.mcp.template.json`, substituting `${NAME}`
//! placeholders from the process environment and an optional `.env` overlay.

pub mod env;
pub mod error;
pub mod generator;
pub mod overlay;
pub mod template;

pub use {
    env::Environment,
    error::{GenerateError, Result},
    generator::{
        ConfigGenerator, ENV_FILE, GenerateReport, OUTPUT_FILE, Rendered, TEMPLATE_FILE, render,
        server_names, to_pretty_json,
    },
    overlay::{load_overlay, parse_overlay},
    template::{Segment, Template},
};

use std::path::PathBuf;

/// Fatal failures of a generation run. Missing variables are not errors;
/// they are reported through [`crate::GenerateReport::missing`].
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("{} not found", file_label(.path))]
    TemplateNotFound { path: PathBuf },

    #[error("invalid JSON after substitution: {source}")]
    Parse {
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize config: {source}")]
    Serialize {
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, GenerateError>;

/// File name alone when there is one, so messages read `.mcp.template.json not found`.
pub(crate) fn file_label(path: &std::path::Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

//! Console report: one success line, an optional two-line warning, or an error.

use {
    colored::Colorize,
    mcpgen_config::{ConfigGenerator, GenerateReport},
    std::path::Path,
};

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

pub fn success_line(generator: &ConfigGenerator) -> String {
    format!(
        "✅ Generated {} with environment variables",
        file_name(generator.output())
    )
}

/// Warning and hint lines, or nothing when every variable resolved.
pub fn missing_lines(generator: &ConfigGenerator, missing: &[String]) -> Option<[String; 2]> {
    if missing.is_empty() {
        return None;
    }
    Some([
        format!("⚠️  Missing environment variables: {}", missing.join(", ")),
        format!(
            "   Create a {} file with the missing variables",
            file_name(generator.env_file())
        ),
    ])
}

pub fn failure_line(generator: &ConfigGenerator, error: &anyhow::Error) -> String {
    format!(
        "❌ Failed to generate {}: {error}",
        file_name(generator.output())
    )
}

pub fn success(generator: &ConfigGenerator, report: &GenerateReport) {
    println!("{}", success_line(generator).green());
    if let Some(lines) = missing_lines(generator, &report.missing) {
        for line in lines {
            eprintln!("{}", line.yellow());
        }
    }
}

pub fn failure(generator: &ConfigGenerator, error: &anyhow::Error) {
    eprintln!("{}", failure_line(generator, error).red());
}

#[cfg(test)]
mod tests {
    use {super::*, mcpgen_config::GenerateError, std::path::PathBuf};

    fn generator() -> ConfigGenerator {
        ConfigGenerator::new("/srv/project")
    }

    #[test]
    fn success_names_output_file() {
        assert_eq!(
            success_line(&generator()),
            "✅ Generated .mcp.json with environment variables"
        );
    }

    #[test]
    fn missing_lines_join_names_and_hint_overlay() {
        let missing = vec!["HOST".to_string(), "TOKEN".to_string()];
        let [warning, hint] = missing_lines(&generator(), &missing).unwrap();
        assert_eq!(warning, "⚠️  Missing environment variables: HOST, TOKEN");
        assert_eq!(hint, "   Create a .env file with the missing variables");
    }

    #[test]
    fn no_missing_lines_when_all_resolved() {
        assert!(missing_lines(&generator(), &[]).is_none());
    }

    #[test]
    fn failure_uses_error_message() {
        let err = anyhow::Error::new(GenerateError::TemplateNotFound {
            path: PathBuf::from("/srv/project/.mcp.template.json"),
        });
        assert_eq!(
            failure_line(&generator(), &err),
            "❌ Failed to generate .mcp.json: .mcp.template.json not found"
        );
    }

    #[test]
    fn custom_output_name_is_reported() {
        let g = generator().with_output("/srv/project/out/servers.json");
        assert_eq!(
            success_line(&g),
            "✅ Generated servers.json with environment variables"
        );
    }
}

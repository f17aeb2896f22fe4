//! Renders the dhcpd template.
//!
//! Placeholders use Go template syntax, `{{.Subnet}}` or `{{ .Subnet }}`, and
//! must name a field listed in [`crate::dhcp::FIELD_NAMES`]. Any other action
//! inside `{{ }}` is an error, as is an unterminated placeholder.

use std::path::{Path, PathBuf};

use dhcpmap_common::{Result, TopologyError};
use tracing::debug;

use crate::dhcp::{DhcpConfig, FIELD_NAMES};

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

pub struct TemplateRenderer {
    template_path: PathBuf,
}

impl TemplateRenderer {
    pub fn new(template_path: impl Into<PathBuf>) -> Self {
        Self {
            template_path: template_path.into(),
        }
    }

    /// Reads the template and substitutes every placeholder from `config`.
    pub async fn render(&self, config: &DhcpConfig) -> Result<String> {
        let template: String = tokio::fs::read_to_string(&self.template_path)
            .await
            .map_err(|e| self.error(e.to_string()))?;
        render_str(&template, config).map_err(|reason| self.error(reason))
    }

    /// Renders and writes to `output_path`, replacing any existing file.
    pub async fn render_to(&self, output_path: &Path, config: &DhcpConfig) -> Result<()> {
        let rendered: String = self.render(config).await?;
        tokio::fs::write(output_path, rendered)
            .await
            .map_err(|e| TopologyError::Template {
                path: output_path.to_path_buf(),
                reason: e.to_string(),
            })?;
        debug!("Wrote {}", output_path.display());
        Ok(())
    }

    fn error(&self, reason: String) -> TopologyError {
        TopologyError::Template {
            path: self.template_path.clone(),
            reason,
        }
    }
}

/// Substitutes placeholders in `template`. Errors carry a human-readable reason
/// with the line number of the offending placeholder.
pub fn render_str(template: &str, config: &DhcpConfig) -> std::result::Result<String, String> {
    let mut out = String::with_capacity(template.len());
    let mut rest: &str = template;

    while let Some(start) = rest.find(OPEN) {
        out.push_str(&rest[..start]);
        let after_open: &str = &rest[start + OPEN.len()..];
        let line: usize = line_of(template, rest, start);

        let Some(end) = after_open.find(CLOSE) else {
            return Err(format!("line {line}: unterminated placeholder"));
        };

        let action: &str = after_open[..end].trim();
        let Some(name) = action.strip_prefix('.') else {
            return Err(format!("line {line}: unsupported action '{action}'"));
        };
        let value: String = config
            .field(name)
            .ok_or_else(|| {
                format!(
                    "line {line}: unknown field '{name}', expected one of {}",
                    FIELD_NAMES.join(", ")
                )
            })?;
        out.push_str(&value);

        rest = &after_open[end + CLOSE.len()..];
    }

    out.push_str(rest);
    Ok(out)
}

/// 1-based line number of byte `offset` within `rest`, a suffix of `template`.
fn line_of(template: &str, rest: &str, offset: usize) -> usize {
    let consumed: usize = template.len() - rest.len() + offset;
    template[..consumed].matches('\n').count() + 1
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

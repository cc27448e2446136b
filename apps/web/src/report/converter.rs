use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, error};

use crate::report::{DocumentRasterizer, ReportError};

/// Runs an external HTML-to-PDF converter with a `<program> [args] <input.html> <output.pdf>`
/// command line (`wkhtmltopdf` by default).
///
/// Markup and output live in a scratch directory that is removed when the
/// call returns.
#[derive(Debug, Clone)]
pub struct HtmlToPdfConverter {
    program: String,
    args: Vec<String>,
}

impl HtmlToPdfConverter {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: vec!["--quiet".to_string(), "--encoding".to_string(), "utf-8".to_string()],
        }
    }

    /// Replaces the flags passed before the input and output paths.
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }
}

#[async_trait]
impl DocumentRasterizer for HtmlToPdfConverter {
    async fn rasterize(&self, markup: &str) -> Result<Vec<u8>, ReportError> {
        let scratch = tokio::task::spawn_blocking(tempfile::tempdir)
            .await
            .map_err(std::io::Error::other)??;
        let input = scratch.path().join("report.html");
        let output = scratch.path().join("report.pdf");

        tokio::fs::write(&input, markup).await?;

        let result = Command::new(&self.program)
            .args(&self.args)
            .arg(&input)
            .arg(&output)
            .output()
            .await
            .map_err(|source| ReportError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr).trim().to_string();
            error!("{} failed: {}", self.program, stderr);
            return Err(ReportError::Converter {
                status: result.status.to_string(),
                stderr,
            });
        }

        let pdf = tokio::fs::read(&output).await?;
        tokio::task::spawn_blocking(move || scratch.close())
            .await
            .map_err(std::io::Error::other)??;
        debug!("Rasterized {} bytes of markup into {} bytes of PDF", markup.len(), pdf.len());
        Ok(pdf)
    }
}

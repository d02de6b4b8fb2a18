use domain::ResolveError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Descriptor error: {0}")]
    Descriptor(String),

    #[error("Resolution error: {0}")]
    Resolution(#[from] ResolveError),

    #[error("Unsupported host platform")]
    UnsupportedHost,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Returns a themed, actionable suggestion for the error.
    pub fn suggestion(&self) -> Option<String> {
        match self {
            CliError::Descriptor(_) => {
                Some("Check your envseed.toml for syntax errors or missing fields.".to_string())
            }
            CliError::Resolution(ResolveError::UnsupportedPlatform { .. }) => Some(
                "Run `envseed show` to list the platforms this descriptor supports.".to_string(),
            ),
            CliError::Resolution(ResolveError::PackageResolution { .. }) => Some(
                "The pinned collection does not carry this package; check the name.".to_string(),
            ),
            CliError::UnsupportedHost => {
                Some("Pass an explicit platform with `--platform <arch>-<os>`.".to_string())
            }
            _ => None,
        }
    }

    pub fn render(&self) {
        eprintln!("\n{} {}", console::style("Error:").red().bold(), self);
        if let Some(s) = self.suggestion() {
            eprintln!("{} {}", console::style("  help:").dim(), s);
        }
    }
}

use std::fmt;

/// The central theme definition for the Envseed CLI.
/// Defines the official color palette and iconography.
pub struct Theme;

impl Theme {
    /// Primary "Environment" Color (Cyan) - Structure, Platforms.
    pub fn primary(text: impl fmt::Display) -> String {
        format!("{}", console::style(text).cyan().bold())
    }

    pub fn bold(text: impl fmt::Display) -> String {
        format!("{}", console::style(text).bold())
    }

    /// Success Color (Green)
    pub fn success(text: impl fmt::Display) -> String {
        format!("{}", console::style(text).green().bold())
    }

    /// Warning Color (Yellow)
    pub fn warning(text: impl fmt::Display) -> String {
        format!("{}", console::style(text).yellow().bold())
    }

    /// Error Color (Red)
    pub fn error(text: impl fmt::Display) -> String {
        format!("{}", console::style(text).red().bold())
    }

    /// Muted/Dimmed Color - Metadata, Versions.
    pub fn muted(text: impl fmt::Display) -> String {
        format!("{}", console::style(text).dim())
    }
}

/// Standardized icons.
/// Usage: `println!("{} Resolving...", Icon::Package)`
pub enum Icon {
    Seed,
    Package,
    Shell,
    Platform,
    Success,
    Cross,
    Info,
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let icon = match self {
            Icon::Seed => "🌱",
            Icon::Package => "📦",
            Icon::Shell => "🐚",
            Icon::Platform => "🖥️ ",
            Icon::Success => "✅",
            Icon::Cross => "✖",
            Icon::Info => "ℹ️ ",
        };
        write!(f, "{}", icon)
    }
}

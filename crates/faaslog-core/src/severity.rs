use std::fmt;
use std::str::FromStr;

/// Severity of a logger within a [`LoggerGroup`](crate::LoggerGroup).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Severity {
    pub const ALL: [Severity; 3] = [Severity::Info, Severity::Warning, Severity::Error];

    /// Lowercase name: `info`, `warning`, `error`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }

    /// The emoji-marked label written into every line prefix.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Info => "🔵INFO",
            Self::Warning => "🟡WARNING",
            Self::Error => "🔴ERROR",
        }
    }

    /// Line prefix for a logger of this severity: `"<label> --- <TAG> --- "`.
    pub fn prefix_for(self, label: &str) -> String {
        format!("{label} --- {} --- ", self.tag())
    }

    /// The first severity whose tag appears anywhere in `text`.
    ///
    /// Lets a sink tell lines that already went through a group logger apart
    /// from free text.
    pub fn detect(text: &str) -> Option<Severity> {
        Self::ALL.into_iter().find(|s| text.contains(s.tag()))
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseSeverityError(String);

impl fmt::Display for ParseSeverityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown severity {:?}", self.0)
    }
}

impl std::error::Error for ParseSeverityError {}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warning),
            "error" => Ok(Self::Error),
            _ => Err(ParseSeverityError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixes_carry_tag() {
        assert_eq!(Severity::Info.prefix_for("fn"), "fn --- 🔵INFO --- ");
        assert_eq!(Severity::Warning.prefix_for("fn"), "fn --- 🟡WARNING --- ");
        assert_eq!(Severity::Error.prefix_for("fn"), "fn --- 🔴ERROR --- ");
    }

    #[test]
    fn detect_finds_tag_anywhere() {
        assert_eq!(Severity::detect("x --- 🟡WARNING --- y"), Some(Severity::Warning));
        assert_eq!(Severity::detect("🔴ERROR"), Some(Severity::Error));
        assert_eq!(Severity::detect("plain INFO text"), None);
        assert_eq!(Severity::detect(""), None);
    }

    #[test]
    fn parses_names() {
        assert_eq!("info".parse::<Severity>(), Ok(Severity::Info));
        assert_eq!(" WARN ".parse::<Severity>(), Ok(Severity::Warning));
        assert_eq!("Error".parse::<Severity>(), Ok(Severity::Error));
        assert!("fatal".parse::<Severity>().is_err());
    }

    #[test]
    fn display_is_lowercase_name() {
        assert_eq!(Severity::Warning.to_string(), "warning");
    }
}

use std::path::{Path, PathBuf};

use crate::error::LogError;
use crate::flags::{FlagOptions, Flags};
use crate::group::{LoggerGroup, GROUP_FLAGS};

/// Overrides `function_name` when set to a non-blank value.
pub const FUNCTION_NAME_ENV: &str = "FAASLOG_FUNCTION_NAME";
/// Overrides `branch_name` when set to a non-blank value.
pub const BRANCH_ENV: &str = "FAASLOG_BRANCH";

/// How strictly to interpret config files.
///
/// - `Lenient` is forward-compatible: unknown fields are ignored.
/// - `Strict` is fail-fast: unknown fields become errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigMode {
    Lenient,
    Strict,
}

/// Typed view of a logger group config file.
///
/// ```json
/// { "function_name": "checkout", "branch_name": "staging",
///   "flags": { "date": true, "time": true, "short_file": true } }
/// ```
///
/// Versioning: `version` defaults to 1 when omitted. A missing `flags` object
/// means date + time + short file; a present one starts from all-off.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct GroupConfig {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default)]
    pub function_name: String,

    /// Deployment branch. Shown upper-cased in front of the function name.
    #[serde(default)]
    pub branch_name: Option<String>,

    #[serde(default = "default_flags")]
    pub flags: FlagOptions,
}

/// Strict version of `GroupConfig` that fails on unknown fields.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct GroupConfigStrict {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default)]
    pub function_name: String,

    #[serde(default)]
    pub branch_name: Option<String>,

    #[serde(default = "default_flags_strict")]
    pub flags: FlagOptionsStrict,
}

#[derive(Debug, Clone, Copy, Default, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FlagOptionsStrict {
    date: bool,
    time: bool,
    microseconds: bool,
    long_file: bool,
    short_file: bool,
    utc: bool,
    prefix_after_metadata: bool,
}

impl From<FlagOptionsStrict> for FlagOptions {
    fn from(s: FlagOptionsStrict) -> Self {
        FlagOptions {
            date: s.date,
            time: s.time,
            microseconds: s.microseconds,
            long_file: s.long_file,
            short_file: s.short_file,
            utc: s.utc,
            prefix_after_metadata: s.prefix_after_metadata,
        }
    }
}

impl From<GroupConfigStrict> for GroupConfig {
    fn from(s: GroupConfigStrict) -> Self {
        GroupConfig {
            version: s.version,
            function_name: s.function_name,
            branch_name: s.branch_name,
            flags: s.flags.into(),
        }
    }
}

fn default_version() -> u32 {
    1
}

fn default_flags() -> FlagOptions {
    GROUP_FLAGS.into()
}

fn default_flags_strict() -> FlagOptionsStrict {
    FlagOptionsStrict {
        date: true,
        time: true,
        short_file: true,
        ..FlagOptionsStrict::default()
    }
}

impl GroupConfig {
    pub fn new(function_name: impl Into<String>) -> Self {
        Self {
            version: default_version(),
            function_name: function_name.into(),
            branch_name: None,
            flags: default_flags(),
        }
    }

    /// Read, parse, apply environment overrides, validate.
    pub fn load(path: &Path, mode: ConfigMode) -> Result<Self, LogError> {
        let src = std::fs::read_to_string(path).map_err(|e| LogError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let cfg = Self::parse(&src, path, mode)?.with_env_overrides();
        cfg.validate(path)?;
        Ok(cfg)
    }

    /// Parse config text. `path` is only used for error context.
    pub fn parse(src: &str, path: &Path, mode: ConfigMode) -> Result<Self, LogError> {
        let json_err = |e: serde_json::Error| LogError::Json {
            path: path.to_path_buf(),
            source: e,
        };
        match mode {
            ConfigMode::Lenient => serde_json::from_str::<GroupConfig>(src).map_err(json_err),
            ConfigMode::Strict => serde_json::from_str::<GroupConfigStrict>(src)
                .map(GroupConfig::from)
                .map_err(json_err),
        }
    }

    pub fn with_env_overrides(self) -> Self {
        let function_name = non_blank_env(FUNCTION_NAME_ENV);
        let branch = non_blank_env(BRANCH_ENV);
        self.with_overrides(function_name, branch)
    }

    pub fn with_overrides(mut self, function_name: Option<String>, branch: Option<String>) -> Self {
        if let Some(name) = function_name {
            self.function_name = name;
        }
        if branch.is_some() {
            self.branch_name = branch;
        }
        self
    }

    pub fn validate(&self, path: &Path) -> Result<(), LogError> {
        let invalid = |msg: &str| LogError::InvalidConfig {
            path: PathBuf::from(path),
            msg: msg.to_string(),
        };
        if self.version != 1 {
            return Err(invalid(&format!("unsupported version {}", self.version)));
        }
        if self.function_name.trim().is_empty() {
            return Err(invalid("function_name must not be empty"));
        }
        Ok(())
    }

    /// Label shared by the group's prefixes: `"<BRANCH> >>> <name>"` or `"<name>"`.
    pub fn label(&self) -> String {
        match self.branch_name.as_deref().map(str::trim) {
            Some(branch) if !branch.is_empty() => {
                format!("{} >>> {}", branch.to_uppercase(), self.function_name)
            }
            _ => self.function_name.clone(),
        }
    }

    pub fn flags(&self) -> Flags {
        self.flags.into()
    }

    pub fn build(&self) -> LoggerGroup {
        LoggerGroup::with_flags(&self.label(), self.flags())
    }
}

fn non_blank_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

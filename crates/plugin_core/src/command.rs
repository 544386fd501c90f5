use std::fmt;

/// Menu command the host launched the plugin with. Read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvocationCommand {
    OpenPlugin,
    QuickAction,
    /// A command this controller has no startup branch for.
    Other(String),
}

impl InvocationCommand {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "openPlugin" => Self::OpenPlugin,
            "quickAction" => Self::QuickAction,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::OpenPlugin => "openPlugin",
            Self::QuickAction => "quickAction",
            Self::Other(raw) => raw,
        }
    }
}

impl fmt::Display for InvocationCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Supported protocol methods.
///
/// Unknown method names are a first-class case: `from_name` returns `None`
/// and the dispatcher answers with `-32601` rather than falling through a
/// string match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Initialize,
    /// The `notifications/initialized` notification — the one method that
    /// never produces a response line.
    Initialized,
    ToolsList,
    ToolsCall,
}

impl Method {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "initialize" => Some(Self::Initialize),
            "notifications/initialized" => Some(Self::Initialized),
            "tools/list" => Some(Self::ToolsList),
            "tools/call" => Some(Self::ToolsCall),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Initialize => "initialize",
            Self::Initialized => "notifications/initialized",
            Self::ToolsList => "tools/list",
            Self::ToolsCall => "tools/call",
        }
    }
}

pub type GuiResult<T> = Result<T, GuiError>;

/// Errors produced by controllers, the registry and the history engine.
///
/// `InvalidOption` and `DuplicateName` indicate programmer or setup mistakes.
/// `MalformedSnapshot` is produced at the boundary that accepted external data
/// (settings files, durable storage) and never leaves the history half-updated.
#[derive(thiserror::Error, Debug)]
pub enum GuiError {
    #[error("controller '{controller}' rejected value: {reason}")]
    InvalidOption { controller: String, reason: String },

    #[error("duplicate controller name '{0}'")]
    DuplicateName(String),

    #[error("malformed snapshot: {0}")]
    MalformedSnapshot(String),

    #[error("unknown controller '{0}'")]
    UnknownController(String),

    #[error("storage error: {0}")]
    Storage(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl GuiError {
    pub fn invalid_option(controller: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidOption {
            controller: controller.into(),
            reason: reason.into(),
        }
    }

    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedSnapshot(msg.into())
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }
}

impl From<serde_json::Error> for GuiError {
    fn from(e: serde_json::Error) -> Self {
        Self::MalformedSnapshot(e.to_string())
    }
}

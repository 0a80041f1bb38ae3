#[derive(thiserror::Error, Debug, PartialEq)]
pub enum Error {
    /// Message content is neither a string nor a sequence of recognized
    /// content blocks.
    #[error("Malformed message content{}: {reason}", at(.position))]
    ContentFormat {
        position: Option<usize>,
        reason: String,
    },

    #[error("Unrecognized message{}: {reason}", at(.position))]
    MessageFormat {
        position: Option<usize>,
        reason: String,
    },
}

impl Error {
    pub fn content_format(reason: impl ToString) -> Self {
        Self::ContentFormat { position: None, reason: reason.to_string() }
    }

    pub fn message_format(reason: impl ToString) -> Self {
        Self::MessageFormat { position: None, reason: reason.to_string() }
    }

    /// Attaches the index of the offending message within its input sequence.
    pub fn at_position(self, index: usize) -> Self {
        match self {
            Self::ContentFormat { reason, .. } => {
                Self::ContentFormat { position: Some(index), reason }
            }
            Self::MessageFormat { reason, .. } => {
                Self::MessageFormat { position: Some(index), reason }
            }
        }
    }
}

fn at(position: &Option<usize>) -> String {
    position
        .map(|index| format!(" at position {index}"))
        .unwrap_or_default()
}

pub type Result<A> = std::result::Result<A, Error>;

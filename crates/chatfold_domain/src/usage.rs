use derive_setters::Setters;
use serde::{Deserialize, Serialize};

/// Token accounting reported for a model reply.
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq, Setters)]
#[serde(rename_all = "snake_case")]
pub struct Usage {
    #[serde(default)]
    pub input_tokens: usize,
    #[serde(default)]
    pub output_tokens: usize,
    #[serde(default)]
    pub total_tokens: usize,
}

impl Usage {
    pub fn new(input_tokens: usize, output_tokens: usize) -> Self {
        Self {
            input_tokens,
            output_tokens,
            total_tokens: input_tokens.saturating_add(output_tokens),
        }
    }
}

/// Counters saturate at `usize::MAX` instead of overflowing.
impl std::ops::Add for Usage {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        Self {
            input_tokens: self.input_tokens.saturating_add(other.input_tokens),
            output_tokens: self.output_tokens.saturating_add(other.output_tokens),
            total_tokens: self.total_tokens.saturating_add(other.total_tokens),
        }
    }
}

//! Conversation session state

use serde::{Deserialize, Serialize};

use crate::flaggable::Flaggable;

/// A user's conversation session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Blueprint version the session runs against
    #[serde(default)]
    pub ver: String,

    #[serde(default)]
    pub stack: Stack,

    #[serde(flatten)]
    pub flags: Flaggable,
}

/// Position stack within the conversation graph
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stack {
    #[serde(default)]
    pub frames: Vec<Frame>,
}

/// A single graph position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    /// Module
    pub m: i64,
    /// Node
    pub n: i64,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Innermost frame, if any
    pub fn current_frame(&self) -> Option<&Frame> {
        self.stack.frames.last()
    }
}

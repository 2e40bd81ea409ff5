//! Execution Order Selector
//!
//! A grammar's `execution_order` setting decides whether the execution
//! sequence reads the input forward or reversed. Only the exact string
//! `"left_to_right"` selects forward order; any other value, a non-string
//! value, or a missing setting selects reversed order.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::glyph::Glyph;

/// Setting value that selects forward execution
pub const LEFT_TO_RIGHT: &str = "left_to_right";
/// Canonical name of the reversed order
pub const RIGHT_TO_LEFT: &str = "right_to_left";

/// Direction in which a glyph-set is executed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionOrder {
    LeftToRight,
    #[default]
    RightToLeft,
}

impl ExecutionOrder {
    /// Interpret a raw grammar setting
    pub fn from_setting(setting: Option<&str>) -> Self {
        match setting {
            Some(LEFT_TO_RIGHT) => ExecutionOrder::LeftToRight,
            _ => ExecutionOrder::RightToLeft,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ExecutionOrder::LeftToRight => LEFT_TO_RIGHT,
            ExecutionOrder::RightToLeft => RIGHT_TO_LEFT,
        }
    }

    pub fn is_reversed(&self) -> bool {
        *self == ExecutionOrder::RightToLeft
    }

    /// Produce the execution sequence for `sequence`
    pub fn apply(&self, sequence: &[Glyph]) -> Vec<Glyph> {
        match self {
            ExecutionOrder::LeftToRight => sequence.to_vec(),
            ExecutionOrder::RightToLeft => sequence.iter().rev().cloned().collect(),
        }
    }
}

impl fmt::Display for ExecutionOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ExecutionOrder {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Any shape is accepted; only the exact string selects forward order
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(ExecutionOrder::from_setting(value.as_str()))
    }
}

/// Forward sequence for `"left_to_right"`, reversed for anything else
pub fn select_execution_order(sequence: &[Glyph], setting: Option<&str>) -> Vec<Glyph> {
    ExecutionOrder::from_setting(setting).apply(sequence)
}

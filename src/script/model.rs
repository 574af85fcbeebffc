use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A versioned collection of demo scenarios keyed by scenario name
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub scenarios: BTreeMap<String, Scenario>,
}

impl Script {
    pub fn scenario(&self, key: &str) -> Option<&Scenario> {
        self.scenarios.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.scenarios.contains_key(key)
    }
}

/// One authored conversation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub meta: ScenarioMeta,
    #[serde(default)]
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScenarioMeta {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Approximate wall-clock length of the scenario, informational only
    #[serde(default)]
    pub duration_ms: u64,
}

/// A single scripted step plus its optional trailing delay
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    #[serde(flatten)]
    pub kind: StepKind,
    /// Extra wait after the step, on top of the kind's own pacing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay_ms: Option<u64>,
}

impl Step {
    pub fn new(kind: StepKind) -> Self {
        Self {
            kind,
            delay_ms: None,
        }
    }

    pub fn with_delay(mut self, delay_ms: u64) -> Self {
        self.delay_ms = Some(delay_ms);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StepKind {
    User {
        #[serde(default)]
        content: String,
    },
    Assistant {
        #[serde(default)]
        content: String,
    },
    ToolCall {
        #[serde(default)]
        tool: String,
        #[serde(default)]
        params: String,
    },
    ToolResult {
        /// When set, `content` is shown as one free-text blob instead of `items`
        #[serde(default)]
        single: bool,
        #[serde(default)]
        content: String,
        #[serde(default)]
        items: Vec<ResultItem>,
    },
    Clear,
}

impl StepKind {
    pub fn name(&self) -> &'static str {
        match self {
            StepKind::User { .. } => "user",
            StepKind::Assistant { .. } => "assistant",
            StepKind::ToolCall { .. } => "tool_call",
            StepKind::ToolResult { .. } => "tool_result",
            StepKind::Clear => "clear",
        }
    }
}

/// Structured tool result row (a video, a comment, a playlist entry...)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultItem {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub channel: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub views: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
}

//! Shared types for the simulator.

use clap::ValueEnum;

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// One compact JSON object per line
    Jsonl,
    /// Pretty-printed JSON objects
    Json,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum MetricsLevel {
    /// Per-round declarations and captures only
    Basic,
    /// Also every trick with the rule behind each play
    Detailed,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum AiType {
    Strategic,
    Random,
}

impl AiType {
    /// Name understood by `engine::ai::create_ai`.
    pub fn name(&self) -> &'static str {
        match self {
            AiType::Strategic => "strategic",
            AiType::Random => "random",
        }
    }
}

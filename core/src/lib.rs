//! Replay transcript analysis engine.

pub mod alias;
pub mod analyzer;
pub mod app_state;
pub mod batch;
pub mod damage;
pub mod error;
pub mod health;
pub mod presence;
pub mod reader;
pub mod registry;
pub mod roster;
pub mod tags;
pub mod tokenizer;

// Re-exports for convenience
pub use analyzer::{MatchReport, analyze_events, analyze_transcript, match_id_from_ref};
pub use app_state::{AppConfig, AppState};
pub use batch::{BatchOutcome, ReplayJob, analyze_batch, stage_batch};
pub use error::AnalysisError;
pub use roster::{Roster, Team};
pub use tags::EventKind;
pub use tokenizer::tokenize;

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort analysis of a single transcript.
///
/// Everything else in the engine fails soft: unresolvable targets are
/// no-ops and missing health readings fall back to the battle-start
/// baseline. One transcript's error never aborts the rest of a batch.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("missing player declaration for side {side}")]
    MissingPlayers { side: String },

    #[error("failed to read replay {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

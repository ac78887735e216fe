use thiserror::Error;

use extractor_client::ExtractorError;

/// Everything that can go wrong handling a tally request.
///
/// The first three are detected before any batch is dispatched and map to
/// specific 400 responses. An extractor failure aborts the whole request
/// and surfaces as a generic 500.
#[derive(Error, Debug)]
pub enum TallyError {
    #[error("invalid api key")]
    Auth,

    #[error("Format error: {0}")]
    Format(String),

    #[error("Content error: {0}")]
    Content(String),

    #[error(transparent)]
    Extractor(#[from] ExtractorError),
}

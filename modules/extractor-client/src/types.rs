use serde::{Deserialize, Serialize};

/// Input for one worker invocation: the urls of a single batch.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractionInput {
    pub urls: Vec<String>,
}

/// What the worker extracted from a single post.
///
/// The worker returns one of these per url, in the same order as the
/// batch it was given. Both lists may be empty (a post with no hashtags
/// and an unresolvable creator is still a valid result).
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct PostExtraction {
    #[serde(default)]
    pub hashtags: Vec<String>,
    #[serde(default)]
    pub creators: Vec<String>,
}

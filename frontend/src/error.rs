use thiserror::Error;

/// Everything that can end an insight request. The `Display` text is what
/// the output panel shows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InsightError {
    #[error("Please enter an industry to generate insights.")]
    EmptyIndustry,
    #[error("Could not generate insights. Please try again.")]
    UnexpectedShape,
    #[error("An error occurred: {0}. Please try again later.")]
    Request(String),
}

impl InsightError {
    /// Builds a request error from a thrown JS exception, showing only its
    /// `message` the way the page always has. A blank message falls back to
    /// the exception name.
    pub fn from_exception(name: &str, message: &str) -> Self {
        if message.is_empty() {
            InsightError::Request(name.to_string())
        } else {
            InsightError::Request(message.to_string())
        }
    }
}

impl From<gloo_net::Error> for InsightError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::JsError(js) => InsightError::from_exception(&js.name, &js.message),
            other => InsightError::Request(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for InsightError {
    fn from(err: serde_json::Error) -> Self {
        InsightError::Request(err.to_string())
    }
}

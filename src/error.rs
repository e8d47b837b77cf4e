// error.rs - Error types
//
// A missing canvas is not an error: mounts return Ok(None) for it.
// These cover the host misbehaving and bad embedding config.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BackdropError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("element #{0} is not a canvas")]
    NotACanvas(String),
    #[error("2d context unavailable for #{0}")]
    ContextUnavailable(String),
    #[error("host call failed: {0}")]
    Js(String),
    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),
}

#[derive(Debug, Error, PartialEq)]
#[error("unrecognised color `{0}`")]
pub struct ColorParseError(pub String);

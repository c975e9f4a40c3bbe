use thiserror::Error;

/// A birth date value that does not parse into a real calendar date.
///
/// Only the date-parsing contract returns this; rule evaluation never does.
/// A sweep over the form degrades a malformed birth date to "age unknown"
/// instead of failing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Malformed date: {raw:?} is not a valid YYYY-MM-DD calendar date")]
pub struct MalformedDateError {
    /// The raw input as received from the UI.
    pub raw: String,
}

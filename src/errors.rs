use std::path::PathBuf;

/// Failures which abort report generation.
///
/// Everything else is reported via [`GenericError`](crate::core::GenericError), so callers that
/// need to classify a failure should downcast to this type.
#[derive(thiserror::Error, Debug)]
pub enum ReportError {
    #[error("Unable to find {kind} file ({prefix}*{extension}) in {dir:?}")]
    MissingFile {
        kind: &'static str,
        prefix: String,
        extension: String,
        dir: PathBuf,
    },

    #[error("Malformed {report} report: {message}")]
    MalformedTable {
        report: &'static str,
        message: String,
    },

    #[error("Non-numeric {what}: {value:?}")]
    NumericCoercion {
        what: String,
        value: String,
    },

    #[error("Failed to write {path:?}: {message}")]
    OutputWrite {
        path: PathBuf,
        message: String,
    },
}

impl ReportError {
    pub fn malformed<M: Into<String>>(report: &'static str, message: M) -> ReportError {
        ReportError::MalformedTable {report, message: message.into()}
    }

    pub fn numeric<W: Into<String>, V: ToString>(what: W, value: V) -> ReportError {
        ReportError::NumericCoercion {what: what.into(), value: value.to_string()}
    }

    pub fn output_write<P: Into<PathBuf>, E: ToString>(path: P, error: E) -> ReportError {
        ReportError::OutputWrite {path: path.into(), message: error.to_string()}
    }
}

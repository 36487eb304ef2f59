//! Adapts [`SpandrelError`] values into miette diagnostics.

use miette::Diagnostic;
use thiserror::Error;

use spandrel::SpandrelError;

/// A renderable diagnostic carrying the error message and optional help.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
pub struct Reportable {
    message: String,
    #[help]
    help: Option<String>,
}

/// Builds the diagnostic for one error, attaching usage help where the
/// failure is a recoverable input mistake.
pub fn to_reportable(err: &SpandrelError) -> Reportable {
    let help = match err {
        SpandrelError::UnsupportedTypology(_) => Some(
            "valid typologies: beam, truss, arch, suspension, cable_stayed, t_beam, slab"
                .to_string(),
        ),
        SpandrelError::InvalidParameter(_) => {
            Some("span, width and height must all be positive".to_string())
        }
        SpandrelError::Config(_) => {
            Some("see the [drawing] and [proportions] tables in the documentation".to_string())
        }
        _ => None,
    };

    Reportable {
        message: err.to_string(),
        help,
    }
}

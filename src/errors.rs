//! Error types with diagnostics using miette
//!
//! The geometry itself never fails; these errors come from strict style
//! validation, from parsing collaborator configuration and from writing SVG.

use miette::Diagnostic;
use thiserror::Error;

use crate::types::NumericError;

// ============================================================================
// Style Errors
// ============================================================================

/// Errors raised while validating or parsing bubble style values
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum StyleError {
    #[error("invalid {field}: {source}")]
    #[diagnostic(
        code(bubblegeom::style::invalid_length),
        help("lengths must be finite, and sizes, radii and paddings must not be negative")
    )]
    InvalidLength {
        field: &'static str,
        #[source]
        source: NumericError,
    },

    #[error("unknown arrow direction: {value}")]
    #[diagnostic(
        code(bubblegeom::style::unknown_direction),
        help("expected one of: none, auto, left, up, right, down")
    )]
    UnknownDirection { value: String },

    #[error("unknown arrow position policy: {value}")]
    #[diagnostic(
        code(bubblegeom::style::unknown_policy),
        help("expected one of: target-center, self-center, self-begin, self-end")
    )]
    UnknownPolicy { value: String },
}

impl StyleError {
    pub(crate) fn invalid_length(field: &'static str, source: NumericError) -> Self {
        StyleError::InvalidLength { field, source }
    }
}

// ============================================================================
// Output Errors
// ============================================================================

/// Errors raised while serializing an SVG document
#[derive(Error, Diagnostic, Debug)]
pub enum SvgError {
    #[error("failed to write SVG: {0}")]
    #[diagnostic(code(bubblegeom::svg::write))]
    Write(#[from] std::io::Error),

    #[error("SVG output is not valid UTF-8")]
    #[diagnostic(code(bubblegeom::svg::encoding))]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// Errors from rendering a bubble preview
#[derive(Error, Diagnostic, Debug)]
pub enum RenderError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Style(#[from] StyleError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Svg(#[from] SvgError),
}

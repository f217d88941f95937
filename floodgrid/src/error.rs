use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

/// Construction-time failures. Queries on a successfully built grid are
/// infallible.
#[derive(Debug, Error, Diagnostic)]
pub enum GridError {
    #[error("grid input is empty")]
    #[diagnostic(
        code(floodgrid::empty),
        help("supply at least one non-empty line")
    )]
    Empty,

    #[error("grid is not rectangular: line {line} has {found} cells, expected {expected}")]
    #[diagnostic(
        code(floodgrid::not_rectangular),
        help("every input line must have the same length")
    )]
    NotRectangular {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("failed to parse grid")]
    #[diagnostic(
        code(floodgrid::parse_error),
        help("grid cells must be printable, non-whitespace characters")
    )]
    Parse {
        #[source_code]
        src: String,
        #[label("parse error occurred here")]
        span: SourceSpan,
    },
}

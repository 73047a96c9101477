use thiserror::Error;

#[doc = r#"
A positioned error produced while decoding an SMF byte stream
"#]
#[derive(Debug, Error)]
#[error("reading at position {position}, {kind}")]
pub struct ReaderError {
    position: usize,
    pub(crate) kind: ReaderErrorKind,
}

/// A kind of error that a reader can produce
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ReaderErrorKind {
    /// Structural errors in the decoded file
    #[error("parsing {0}")]
    Parse(#[from] ParseError),
    /// Buffer exhausted mid-read.
    #[error("truncated stream")]
    TruncatedStream,
}

/// A structural error found while decoding an SMF file.
///
/// Every variant is fatal: the decoder has no partial-success mode and
/// surfaces the first error encountered for the whole file.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The file does not begin with an `MThd` chunk
    #[error("can't find header chunk")]
    BadHeader,
    /// The header chunk length is not 6
    #[error("length of header chunk must be 6")]
    BadHeaderLength,
    /// A track does not begin with an `MTrk` chunk
    #[error("can't find track chunk")]
    BadTrackHeader,
    /// The division field declares SMPTE time code
    #[error("SMPTE time code is not supported")]
    UnsupportedTimeFormat,
}

impl ReaderError {
    /// Create a reader error from a position and kind
    pub const fn new(position: usize, kind: ReaderErrorKind) -> Self {
        Self { position, kind }
    }

    /// True if the buffer ran out mid-read
    pub const fn is_truncated(&self) -> bool {
        matches!(self.kind, ReaderErrorKind::TruncatedStream)
    }

    /// Returns the error kind of the reader.
    pub fn error_kind(&self) -> &ReaderErrorKind {
        &self.kind
    }

    /// Returns the position where the read error occurred.
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Create a new structural parse error
    pub const fn parse_error(position: usize, error: ParseError) -> Self {
        Self {
            position,
            kind: ReaderErrorKind::Parse(error),
        }
    }

    /// Create a new truncated-stream error
    pub const fn truncated(position: usize) -> Self {
        Self {
            position,
            kind: ReaderErrorKind::TruncatedStream,
        }
    }
}

/// The Read Result type (see [`ReaderError`])
pub type ReadResult<T> = Result<T, ReaderError>;

//! Error types shared across the coding engine.
//!
//! Each component of the core (byte stream, CDF construction, arithmetic coder)
//! defines its own narrow error enum rather than funnelling everything through a
//! single catch-all type; callers that only use one component never need to match
//! on variants that could not possibly occur for them.

/// Errors thrown by [`crate::byte_stream::ByteWriter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamError {
    /// The output buffer has no room left for another byte.
    ///
    /// The reference implementation never grows its buffer; sizing it large
    /// enough for the worst case is the caller's responsibility.
    CapacityExhausted,
}

impl std::fmt::Display for StreamError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StreamError::CapacityExhausted => write!(f, "output buffer is too small"),
        }
    }
}

impl std::error::Error for StreamError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

/// Errors thrown while building or validating a [`crate::cdf::Cdf`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CdfError {
    /// `M + 1` (regular symbols plus the implicit end symbol) exceeds
    /// [`crate::MAX_ALPHABET_SIZE`].
    AlphabetTooLarge,
    /// The input message had zero symbols; the distribution is undefined.
    EmptyInput,
}

impl std::fmt::Display for CdfError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CdfError::AlphabetTooLarge => write!(f, "alphabet is too large for the coder"),
            CdfError::EmptyInput => write!(f, "cannot build a distribution from an empty message"),
        }
    }
}

impl std::error::Error for CdfError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

/// Errors thrown by [`crate::arith::ArithEncoder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithEncodeError {
    /// The output [`crate::byte_stream::ByteWriter`] ran out of room.
    OutputCapacity,
    /// The coding interval collapsed to zero length.
    ///
    /// Indicates an unrepresentable CDF (a probability below the coder's
    /// `2^-24` resolution) or corrupt input.
    DegenerateInterval,
    /// A message byte is not covered by the `Cdf` the encoder was built
    /// with.
    ///
    /// The `Cdf` passed to [`crate::arith::ArithEncoder::new`] need not have
    /// been derived from `message` (it may have come from
    /// [`crate::cdf::Cdf::from_probabilities`] instead), so a byte at or
    /// above the `Cdf`'s alphabet size has no corresponding probability
    /// slice.
    SymbolOutOfRange,
}

impl std::fmt::Display for ArithEncodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArithEncodeError::OutputCapacity => write!(f, "output buffer is too small"),
            ArithEncodeError::DegenerateInterval => {
                write!(f, "coding interval collapsed to zero length")
            }
            ArithEncodeError::SymbolOutOfRange => {
                write!(f, "message contains a symbol not covered by the cdf's alphabet")
            }
        }
    }
}

impl std::error::Error for ArithEncodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

impl From<StreamError> for ArithEncodeError {
    fn from(_: StreamError) -> Self {
        ArithEncodeError::OutputCapacity
    }
}

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// ErrDataChannelClosed indicates an operation executed when the data
    /// channel is not (yet) open or closed.
    #[error("data channel closed")]
    ErrDataChannelClosed,

    /// ErrUnknownBinaryType indicates an attempt to set the binary type to a
    /// value other than "blob" or "arraybuffer".
    #[error("unknown binary type: {0}")]
    ErrUnknownBinaryType(String),

    /// ErrBufferViewOutOfRange indicates a buffer view whose byte range does
    /// not fit inside its backing buffer.
    #[error("buffer view out of range")]
    ErrBufferViewOutOfRange,

    /// ErrTransport carries any other failure reported by the underlying
    /// transport.
    #[error("transport: {0}")]
    ErrTransport(String),

    #[error("{0}")]
    Other(String),
}

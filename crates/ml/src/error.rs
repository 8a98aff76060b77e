use thiserror::Error;

/// Contract violations at the encoder boundary.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum EncodeError {
    #[error("expected a {expected_width}x{expected_height} frame, got {width}x{height}")]
    FrameSize {
        expected_width: usize,
        expected_height: usize,
        width: usize,
        height: usize,
    },
    #[error("pixel buffer holds {actual} bytes, layout needs {expected}")]
    BufferLength { expected: usize, actual: usize },
    #[error("frame stack is empty")]
    EmptyStack,
}

//! Abstract sink capability used by [`super::compress::StreamCompressor`].
//!
//! Mirrors the generic `R: Read` / `W: Write` parameters the file façade uses
//! for its streaming wrappers, generalized into a narrow trait so the
//! streaming compressor can append tokens to either an in-memory buffer or a
//! file descriptor without caring which.

use crate::error::ZpakError;

/// A destination tokens can be appended to.
pub trait TokenSink {
    /// Append `bytes` to the sink, in order.
    fn push_tokens(&mut self, bytes: &[u8]) -> Result<(), ZpakError>;
}

impl TokenSink for Vec<u8> {
    fn push_tokens(&mut self, bytes: &[u8]) -> Result<(), ZpakError> {
        self.extend_from_slice(bytes);
        Ok(())
    }
}

/// Adapts any [`std::io::Write`] into a [`TokenSink`].
pub struct WriteSink<W: std::io::Write>(pub W);

impl<W: std::io::Write> TokenSink for WriteSink<W> {
    fn push_tokens(&mut self, bytes: &[u8]) -> Result<(), ZpakError> {
        self.0.write_all(bytes).map_err(|_| ZpakError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec_sink_appends_in_order() {
        let mut sink: Vec<u8> = Vec::new();
        sink.push_tokens(&[1, 2, 3]).unwrap();
        sink.push_tokens(&[4, 5]).unwrap();
        assert_eq!(sink, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn write_sink_forwards_to_inner_writer() {
        let mut sink = WriteSink(Vec::new());
        sink.push_tokens(&[9, 9]).unwrap();
        assert_eq!(sink.0, vec![9, 9]);
    }
}

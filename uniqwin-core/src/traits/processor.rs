//! Incremental processing of input that arrives in chunks

/// Trait for consumers that see a finite input as a series of byte chunks
///
/// Chunk boundaries carry no meaning: feeding the same bytes split at
/// different points must produce the same output.
pub trait ChunkProcessor {
    type Output;
    type Error;

    /// Process the next chunk of input
    fn process_chunk(&mut self, chunk: &[u8]) -> Result<(), Self::Error>;

    /// Finalize processing and return results
    fn finalize(self) -> Result<Self::Output, Self::Error>;

    /// Feed every chunk in order, then finalize
    fn process_all<'a, I>(mut self, chunks: I) -> Result<Self::Output, Self::Error>
    where
        Self: Sized,
        I: IntoIterator<Item = &'a [u8]>,
    {
        for chunk in chunks {
            self.process_chunk(chunk)?;
        }
        self.finalize()
    }
}

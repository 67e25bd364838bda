use std::ops::Range;

use tracing::{debug, trace};

use crate::error::{Result, SplitError};

/// Rule for the upper index of each chunk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Boundary {
    /// Chunk `i` covers `[size * i, min(size * i + 1, len))`.
    ///
    /// Only the element at each multiple of the chunk size is kept; everything
    /// in between is skipped. This is the behavior existing callers rely on.
    #[default]
    Literal,
    /// Chunk `i` covers `[size * i, min(size * i + size, len))`.
    ///
    /// Chunks concatenate back to the input. When the length is a multiple of
    /// the chunk size the last chunk is empty.
    Bounded,
}

/// A validated chunk size together with the boundary rule to apply.
///
/// Sequences are taken as `Option` because an absent sequence is a valid
/// input and yields no chunks at all, while an empty one yields a single
/// empty chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Splitter {
    chunk_size: usize,
    boundary: Boundary,
}

impl Splitter {
    /// Fails with [`SplitError::InvalidChunkSize`] when `chunk_size <= 0`.
    pub fn new(chunk_size: i64) -> Result<Self> {
        if chunk_size <= 0 {
            debug!(chunk_size, "rejected chunk size");
            return Err(SplitError::InvalidChunkSize(chunk_size));
        }
        // Anything past usize::MAX is already longer than any slice.
        let chunk_size = usize::try_from(chunk_size).unwrap_or(usize::MAX);
        Ok(Self {
            chunk_size,
            boundary: Boundary::default(),
        })
    }

    pub fn with_boundary(mut self, boundary: Boundary) -> Self {
        self.boundary = boundary;
        self
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    pub fn boundary(&self) -> Boundary {
        self.boundary
    }

    /// Index ranges of the chunks produced for a sequence of length `len`.
    ///
    /// Always yields `len / chunk_size + 1` ranges, in ascending order and
    /// without overlap.
    pub fn ranges(&self, len: usize) -> Vec<Range<usize>> {
        let number_of_splits = len / self.chunk_size;
        let width = match self.boundary {
            Boundary::Literal => 1,
            Boundary::Bounded => self.chunk_size,
        };
        trace!(
            len,
            chunk_size = self.chunk_size,
            number_of_splits,
            boundary = ?self.boundary,
            "computing chunk ranges"
        );

        (0..=number_of_splits)
            .map(|i| {
                // i <= len / chunk_size, so this never exceeds len.
                let start = self.chunk_size * i;
                start..start.saturating_add(width).min(len)
            })
            .collect()
    }

    /// Split into shared views of `sequence`.
    pub fn split<'a, T>(&self, sequence: Option<&'a [T]>) -> Vec<&'a [T]> {
        let Some(sequence) = sequence else {
            return Vec::new();
        };
        self.ranges(sequence.len())
            .into_iter()
            .map(move |range| &sequence[range])
            .collect()
    }

    /// Split into disjoint mutable views; writes through a chunk land in
    /// `sequence`.
    pub fn split_mut<'a, T>(&self, sequence: Option<&'a mut [T]>) -> Vec<&'a mut [T]> {
        let Some(sequence) = sequence else {
            return Vec::new();
        };
        let ranges = self.ranges(sequence.len());
        let mut chunks = Vec::with_capacity(ranges.len());
        let mut rest: &'a mut [T] = sequence;
        let mut offset = 0;
        for range in ranges {
            let (_, tail) = std::mem::take(&mut rest).split_at_mut(range.start - offset);
            let (chunk, tail) = tail.split_at_mut(range.len());
            chunks.push(chunk);
            rest = tail;
            offset = range.end;
        }
        chunks
    }

    /// Split into owned copies, independent of `sequence` after return.
    pub fn split_to_vec<T: Clone>(&self, sequence: Option<&[T]>) -> Vec<Vec<T>> {
        self.split(sequence)
            .into_iter()
            .map(<[T]>::to_vec)
            .collect()
    }
}

/// Split `sequence` using the literal boundary.
///
/// The chunk size is checked before the sequence is looked at, so a
/// non-positive size fails even when `sequence` is `None`.
pub fn split<T>(sequence: Option<&[T]>, chunk_size: i64) -> Result<Vec<&[T]>> {
    Ok(Splitter::new(chunk_size)?.split(sequence))
}

pub fn split_mut<T>(sequence: Option<&mut [T]>, chunk_size: i64) -> Result<Vec<&mut [T]>> {
    Ok(Splitter::new(chunk_size)?.split_mut(sequence))
}

pub fn split_to_vec<T: Clone>(sequence: Option<&[T]>, chunk_size: i64) -> Result<Vec<Vec<T>>> {
    Ok(Splitter::new(chunk_size)?.split_to_vec(sequence))
}

/// Split `sequence` into chunks of at most `chunk_size` elements that cover
/// it completely.
pub fn split_bounded<T>(sequence: Option<&[T]>, chunk_size: i64) -> Result<Vec<&[T]>> {
    Ok(Splitter::new(chunk_size)?
        .with_boundary(Boundary::Bounded)
        .split(sequence))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_sizes() {
        for size in [0, -1, i64::MIN] {
            assert_eq!(Splitter::new(size), Err(SplitError::InvalidChunkSize(size)));
        }
    }

    #[test]
    fn defaults_to_literal_boundary() {
        let splitter = Splitter::new(4).unwrap();
        assert_eq!(splitter.boundary(), Boundary::Literal);
        assert_eq!(splitter.chunk_size(), 4);
    }

    #[test]
    fn literal_ranges() {
        let splitter = Splitter::new(2).unwrap();
        assert_eq!(splitter.ranges(5), vec![0..1, 2..3, 4..5]);
        assert_eq!(splitter.ranges(4), vec![0..1, 2..3, 4..4]);
        assert_eq!(splitter.ranges(0), vec![0..0]);
    }

    #[test]
    fn bounded_ranges() {
        let splitter = Splitter::new(2).unwrap().with_boundary(Boundary::Bounded);
        assert_eq!(splitter.ranges(5), vec![0..2, 2..4, 4..5]);
        assert_eq!(splitter.ranges(4), vec![0..2, 2..4, 4..4]);
    }

    #[test]
    fn oversized_chunk_size() {
        let splitter = Splitter::new(i64::MAX).unwrap();
        assert_eq!(splitter.ranges(3), vec![0..1]);
        let splitter = splitter.with_boundary(Boundary::Bounded);
        assert_eq!(splitter.ranges(3), vec![0..3]);
    }

    #[test]
    fn mutable_chunks_write_through() {
        let mut data = [1, 2, 3, 4, 5];
        let splitter = Splitter::new(2).unwrap();
        for chunk in splitter.split_mut(Some(&mut data[..])) {
            for value in chunk.iter_mut() {
                *value *= 10;
            }
        }
        assert_eq!(data, [10, 2, 30, 4, 50]);
    }

    #[test]
    fn bounded_mutable_chunks_cover_everything() {
        let mut data = vec![0u8; 7];
        let splitter = Splitter::new(3).unwrap().with_boundary(Boundary::Bounded);
        for (i, chunk) in splitter.split_mut(Some(&mut data[..])).into_iter().enumerate() {
            chunk.fill(i as u8);
        }
        assert_eq!(data, vec![0, 0, 0, 1, 1, 1, 2]);
    }

    #[test]
    fn absent_sequence_yields_nothing() {
        let splitter = Splitter::new(3).unwrap();
        assert!(splitter.split::<i32>(None).is_empty());
        assert!(splitter.split_mut::<i32>(None).is_empty());
        assert!(splitter.split_to_vec::<i32>(None).is_empty());
    }
}

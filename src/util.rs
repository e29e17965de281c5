use log::debug;

use crate::DecompressError;

#[cfg(feature = "alloc")]
extern crate alloc;

/// Internal abstraction for types of outputs (slice vs Vec)
///
/// Every sink is bounded by the decompressed length declared in the header.
/// Nothing is ever written past that limit.
pub trait OutputSink {
    /// Number of bytes produced so far
    fn pos(&self) -> usize;
    /// Whether the declared length has been reached
    fn is_full(&self) -> bool;
    /// Append a single literal byte
    ///
    /// If this would go past the limit, return Err(DecompressError::Overrun).
    fn put_lit(&mut self, lit: u8) -> Result<(), DecompressError>;
    /// Add a backreference to the output
    ///
    /// A `disp` of 0 means the current position minus 1.
    /// Increasing `disp` means further backwards
    ///
    /// Copy `len` bytes, which as usual for LZ77 may exceed `disp`.
    fn put_backref(&mut self, disp: usize, len: usize) -> Result<(), DecompressError>;
}

fn check_backref(pos: usize, limit: usize, disp: usize, len: usize) -> Result<(), DecompressError> {
    if disp + 1 > pos {
        debug!("backreference reaches {} bytes back but only {pos} were produced", disp + 1);
        return Err(DecompressError::Overrun);
    }
    if pos + len > limit {
        debug!("backreference of {len} bytes at {pos} runs past declared length {limit}");
        return Err(DecompressError::Overrun);
    }
    Ok(())
}

pub struct BufOutput<'a> {
    pub pos: usize,
    pub buf: &'a mut [u8],
}
impl<'a> From<&'a mut [u8]> for BufOutput<'a> {
    fn from(buf: &'a mut [u8]) -> Self {
        Self { pos: 0, buf }
    }
}
impl<'a> OutputSink for BufOutput<'a> {
    fn pos(&self) -> usize {
        self.pos
    }

    fn is_full(&self) -> bool {
        self.pos == self.buf.len()
    }

    fn put_lit(&mut self, lit: u8) -> Result<(), DecompressError> {
        if self.is_full() {
            debug!("literal past declared length {}", self.buf.len());
            return Err(DecompressError::Overrun);
        }
        self.buf[self.pos] = lit;
        self.pos += 1;
        Ok(())
    }

    fn put_backref(&mut self, disp: usize, len: usize) -> Result<(), DecompressError> {
        check_backref(self.pos, self.buf.len(), disp, len)?;

        // byte at a time, later bytes may source from earlier ones in this run
        for i in 0..len {
            self.buf[self.pos + i] = self.buf[self.pos - disp - 1 + i];
        }
        self.pos += len;
        Ok(())
    }
}

#[cfg(feature = "alloc")]
pub struct VecOutput {
    pub vec: alloc::vec::Vec<u8>,
    pub limit: usize,
}
#[cfg(feature = "alloc")]
impl VecOutput {
    pub fn with_limit(limit: usize) -> Self {
        Self {
            vec: alloc::vec::Vec::with_capacity(limit),
            limit,
        }
    }
}
#[cfg(feature = "alloc")]
impl OutputSink for VecOutput {
    fn pos(&self) -> usize {
        self.vec.len()
    }

    fn is_full(&self) -> bool {
        self.vec.len() == self.limit
    }

    fn put_lit(&mut self, lit: u8) -> Result<(), DecompressError> {
        if self.is_full() {
            debug!("literal past declared length {}", self.limit);
            return Err(DecompressError::Overrun);
        }
        self.vec.push(lit);
        Ok(())
    }

    fn put_backref(&mut self, disp: usize, len: usize) -> Result<(), DecompressError> {
        check_backref(self.vec.len(), self.limit, disp, len)?;

        for _ in 0..len {
            let b = self.vec[self.vec.len() - disp - 1];
            self.vec.push(b);
        }
        Ok(())
    }
}

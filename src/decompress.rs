use log::{debug, trace};
use thiserror::Error;

use crate::backref::Backref;
use crate::header::{Header, HEADER_LEN};
#[cfg(feature = "alloc")]
use crate::util::VecOutput;
use crate::util::{BufOutput, OutputSink};

#[cfg(feature = "alloc")]
extern crate alloc;

/// Decompression errors
///
/// All of these are fatal. No partial output is ever handed back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum DecompressError {
    /// The first byte was not the LZ11 tag
    #[error("not lz11 data (type byte {0:#04x})")]
    BadTag(u8),
    /// The input ended before a header, flag byte, literal, or backreference
    #[error("input was truncated")]
    InputTruncated,
    /// The output would exceed the declared length, or a backreference
    /// pointed before the start of the output
    #[error("decompressed data overran its declared length or start")]
    Overrun,
    /// The caller-provided buffer cannot hold the declared length
    #[error("output buffer was insufficient")]
    OutputTooSmall,
}

fn next_byte(inp: &mut &[u8]) -> Result<u8, DecompressError> {
    let (&b, rest) = inp
        .split_first()
        .ok_or(DecompressError::InputTruncated)?;
    *inp = rest;
    Ok(b)
}

/// Run the token stream (everything after the header) into `outp`
///
/// Stops as soon as the sink is full. Anything after the final token is
/// never looked at.
fn decompress_impl(mut inp: &[u8], outp: &mut impl OutputSink) -> Result<(), DecompressError> {
    let mut flags = 0u8;
    let mut flags_left = 0u8;

    while !outp.is_full() {
        if flags_left == 0 {
            flags = next_byte(&mut inp)?;
            flags_left = 8;
        } else {
            flags <<= 1;
        }
        flags_left -= 1;

        if flags & 0x80 != 0 {
            let (backref, used) = Backref::read(inp)?;
            inp = &inp[used..];
            trace!(
                "backref at {}: count {} offset {}",
                outp.pos(),
                backref.count,
                backref.offset
            );
            outp.put_backref(backref.offset, backref.count)?;
        } else {
            outp.put_lit(next_byte(&mut inp)?)?;
        }
    }

    debug!("decompressed {} bytes, {} input bytes unused", outp.pos(), inp.len());
    Ok(())
}

/// Decompress the input into a preallocated buffer
///
/// Returns the decompressed size on success, or an error otherwise.
/// Bytes of `outp` past the decompressed size are left untouched.
pub fn decompress_to_buf(inp: &[u8], outp: &mut [u8]) -> Result<usize, DecompressError> {
    let header = Header::parse(inp)?;
    let outp = outp
        .get_mut(..header.decompressed_len)
        .ok_or(DecompressError::OutputTooSmall)?;
    let mut outp: BufOutput = outp.into();
    decompress_impl(&inp[HEADER_LEN..], &mut outp)?;
    Ok(outp.pos)
}

/// Decompress the input into a [Vec](alloc::vec::Vec)
///
/// Returns the result on success, or an error otherwise
#[cfg(feature = "alloc")]
pub fn decompress_to_vec(inp: &[u8]) -> Result<alloc::vec::Vec<u8>, DecompressError> {
    let header = Header::parse(inp)?;
    let mut ret = VecOutput::with_limit(header.decompressed_len);
    decompress_impl(&inp[HEADER_LEN..], &mut ret)?;
    Ok(ret.vec)
}

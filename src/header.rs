use log::debug;

use crate::DecompressError;

/// Type byte identifying LZ11 data
pub const LZ11_TAG: u8 = 0x11;
/// Size of the fixed header preceding the token stream
pub const HEADER_LEN: usize = 4;

/// The fixed 4-byte header at the start of LZ11 data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    /// Exact number of bytes the token stream expands to
    pub decompressed_len: usize,
}

impl Header {
    /// Parse the header at the start of `inp`
    ///
    /// The tag byte is checked before anything else is read, so non-LZ11
    /// data is rejected with [DecompressError::BadTag] even if it is shorter
    /// than a full header.
    pub fn parse(inp: &[u8]) -> Result<Self, DecompressError> {
        let tag = *inp.first().ok_or(DecompressError::InputTruncated)?;
        if tag != LZ11_TAG {
            debug!("bad tag byte {tag:#04x}");
            return Err(DecompressError::BadTag(tag));
        }

        let len = inp
            .get(1..HEADER_LEN)
            .ok_or(DecompressError::InputTruncated)?;
        let decompressed_len = u32::from_le_bytes([len[0], len[1], len[2], 0]) as usize;
        debug!("lz11 header, {decompressed_len} bytes decompressed");

        Ok(Self { decompressed_len })
    }
}

/// Check whether `inp` starts with a complete LZ11 header
pub fn is_lz11(inp: &[u8]) -> bool {
    Header::parse(inp).is_ok()
}

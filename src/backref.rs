use crate::DecompressError;

/// A single backreference token
///
/// `offset` counts back from the byte about to be written: 0 is the
/// immediately preceding output byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Backref {
    pub count: usize,
    pub offset: usize,
}

fn take<const N: usize>(inp: &[u8]) -> Result<[u8; N], DecompressError> {
    inp.get(..N)
        .and_then(|b| b.try_into().ok())
        .ok_or(DecompressError::InputTruncated)
}

impl Backref {
    /// Decode one backreference token from the start of `inp`
    ///
    /// The top nibble of the first byte selects the encoding:
    ///
    /// * `0x0`: 3 bytes, 8-bit count biased by 0x11
    /// * `0x1`: 4 bytes, 16-bit count biased by 0x111
    /// * anything else: 2 bytes, the nibble itself is the count minus 1
    ///
    /// The low 12 bits are always the offset. Returns the token and the
    /// number of bytes it occupied.
    pub fn read(inp: &[u8]) -> Result<(Self, usize), DecompressError> {
        let lead = *inp.first().ok_or(DecompressError::InputTruncated)?;

        let (count, offset, used) = match lead >> 4 {
            0 => {
                let [b0, b1, b2] = take::<3>(inp)?;
                let x = u32::from_be_bytes([0, b0, b1, b2]);
                (((x >> 12) & 0xff) + 0x11, x & 0xfff, 3)
            }
            1 => {
                let x = u32::from_be_bytes(take::<4>(inp)?);
                (((x >> 12) & 0xffff) + 0x111, x & 0xfff, 4)
            }
            n => {
                let x = u16::from_be_bytes(take::<2>(inp)?);
                (n as u32 + 1, (x & 0xfff) as u32, 2)
            }
        };

        Ok((
            Self {
                count: count as usize,
                offset: offset as usize,
            },
            used,
        ))
    }
}

#![no_std]

mod backref;
mod decompress;
mod header;
mod util;

pub use backref::Backref;
#[cfg(feature = "alloc")]
pub use decompress::decompress_to_vec;
pub use decompress::{decompress_to_buf, DecompressError};
pub use header::{is_lz11, Header, HEADER_LEN, LZ11_TAG};

#[cfg(feature = "alloc")]
extern crate alloc;

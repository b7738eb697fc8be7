/*!
error.rs - Explicit error kinds for the emulator core.

Mirrors spec.md §7: every failure condition the core can hit is an explicit
return value, never a panic or exception. `IORegisterUnbound` and
`OutOfRangePageRequest` are not represented as `Error` types here because
spec.md treats them as expected, non-fatal conditions (a read returns 0, a
`get_page_ptr` call returns `None`); they are logged at the call site instead
of threaded through `Result`.
*/

use std::fmt;

/// Failure reading and parsing an iNES cartridge image (spec.md §4.1, §7).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartridgeError {
    Io(String),
    TooSmallForHeader,
    BadMagic,
    ZeroPrgBanks,
    TrainerUnsupported,
    PalUnsupported,
    Nes20Unsupported,
    ShortRead { wanted: usize, have: usize },
    UnsupportedMapper(u16),
}

impl fmt::Display for CartridgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CartridgeError::Io(msg) => write!(f, "failed to read ROM file: {msg}"),
            CartridgeError::TooSmallForHeader => {
                write!(f, "file is smaller than the 16-byte iNES header")
            }
            CartridgeError::BadMagic => write!(f, "missing \"NES\\x1A\" magic bytes"),
            CartridgeError::ZeroPrgBanks => write!(f, "header declares zero PRG-ROM banks"),
            CartridgeError::TrainerUnsupported => write!(f, "trainer-bearing images are rejected"),
            CartridgeError::PalUnsupported => write!(f, "PAL timing images are rejected"),
            CartridgeError::Nes20Unsupported => write!(f, "NES 2.0 headers are rejected"),
            CartridgeError::ShortRead { wanted, have } => write!(
                f,
                "expected {wanted} bytes of ROM data after the header, found {have}"
            ),
            CartridgeError::UnsupportedMapper(id) => write!(f, "unsupported mapper id {id}"),
        }
    }
}

impl std::error::Error for CartridgeError {}

/// Failure constructing a concrete [`crate::mapper::Mapper`] from a mapper id
/// (spec.md §4.2: "the factory yields an error for other ids").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnsupportedMapper(pub u16);

impl fmt::Display for UnsupportedMapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported mapper id {}", self.0)
    }
}

impl std::error::Error for UnsupportedMapper {}

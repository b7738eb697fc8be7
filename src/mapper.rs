/*!
Mapper subsystem: trait definition and the mapper-id factory.

Purpose (spec.md §4.2):
- Decouple CPU address mapping from `Cartridge` so other mapper ids can be
  added without touching the bus or cartridge loader.
- Provide the capability set `Bus` calls for cartridge-space reads/writes:
  `read_prg`/`write_prg` ($8000-$FFFF, and $6000-$7FFF is handled by the bus
  itself per spec.md §4.3 — extended RAM is not mapper-owned), `read_chr`/
  `write_chr` ($0000-$1FFF PPU pattern table space, exposed for a future PPU
  collaborator), `mirroring`, and `has_extended_ram`.

This core ships only mapper 0 (NROM); the factory rejects every other id
with [`UnsupportedMapper`], matching spec.md: "the core's decoding must
still compile and link against that surface" even though only one variant
is implemented.
*/

use crate::error::UnsupportedMapper;

pub trait Mapper {
    /// Read a byte from PRG-ROM space ($8000-$FFFF).
    fn read_prg(&self, addr: u16) -> u8;

    /// Write to PRG-ROM space. NROM ignores writes; future bank-switching
    /// mappers would decode bank-select writes here.
    fn write_prg(&mut self, addr: u16, value: u8);

    /// Read a byte from CHR space ($0000-$1FFF).
    fn read_chr(&self, addr: u16) -> u8;

    /// Write to CHR space (only meaningful when CHR-RAM is in use).
    fn write_chr(&mut self, addr: u16, value: u8);

    /// Nametable mirroring mode. `None` means "defer to the cartridge
    /// header's static mirroring" (spec.md §4.2's NROM never overrides it).
    fn mirroring(&self) -> Option<crate::cartridge::Mirroring> {
        None
    }

    fn has_extended_ram(&self) -> bool {
        false
    }
}

/// Construct the concrete mapper for `mapper_id`. The core implements only
/// id 0 (NROM); all others yield [`UnsupportedMapper`].
pub fn build_mapper(
    mapper_id: u16,
    prg_rom: Vec<u8>,
    chr_rom: Vec<u8>,
) -> Result<Box<dyn Mapper>, UnsupportedMapper> {
    match mapper_id {
        0 => Ok(Box::new(crate::mappers::Nrom::new(prg_rom, chr_rom))),
        other => Err(UnsupportedMapper(other)),
    }
}

#![doc = r#"
6502 CPU interpreter and address-space fabric for a partial NES emulator.

The hard core is `cpu` (registers, addressing modes, instruction semantics,
opcode decode) driving `bus::MainBus` (RAM mirroring, I/O-callback registry,
cartridge delegation) through a `Mapper` built from a parsed `Cartridge`.
PPU rendering, controller input polling, and audio synthesis are out of
scope; `apu` and `controller` exist only as minimal collaborator contracts
the bus can bind I/O-register callbacks to.

Modules:
- `error`: explicit error enums for cartridge loading and mapper construction
- `cartridge`: iNES v1 loader
- `mapper` / `mappers`: the `Mapper` trait and its NROM (mapper 0) implementation
- `bus`: `MainBus`, the CPU's 16-bit address space
- `cpu`: registers, addressing, instruction semantics, opcode decode, the `Cpu` facade
- `apu` / `controller`: minimal I/O-register stub collaborators

In tests, shared iNES builders are available under `crate::test_utils`.
"#]

pub mod apu;
pub mod bus;
pub mod cartridge;
pub mod controller;
pub mod cpu;
pub mod error;
pub mod mapper;
pub mod mappers;

pub use bus::MainBus;
pub use cartridge::Cartridge;
pub use cpu::Cpu;

#[cfg(test)]
pub mod test_utils;

/*!
Addressing-mode and operand-fetch helpers shared by the dispatch handlers.

Each helper consumes instruction-stream bytes by advancing `CpuState::pc`
and returns an effective address; they never tick cycles or apply
page-cross penalties themselves. The `_pc` variants additionally report
whether the computed address crossed a page boundary relative to its base,
so a handler can add the spec.md §5 page-cross penalty where the opcode
calls for one.
*/

#![allow(dead_code)]

use crate::bus::MainBus;
use crate::cpu::state::CpuState;

#[inline]
pub(crate) fn fetch_byte(cpu: &mut CpuState, bus: &mut MainBus) -> u8 {
    cpu.fetch_u8(bus)
}

#[inline]
pub(crate) fn fetch_word(cpu: &mut CpuState, bus: &mut MainBus) -> u16 {
    cpu.fetch_u16(bus)
}

#[inline]
pub(crate) fn addr_zp(cpu: &mut CpuState, bus: &mut MainBus) -> u16 {
    fetch_byte(cpu, bus) as u16
}

#[inline]
pub(crate) fn addr_zp_x(cpu: &mut CpuState, bus: &mut MainBus) -> u16 {
    fetch_byte(cpu, bus).wrapping_add(cpu.x()) as u16
}

#[inline]
pub(crate) fn addr_zp_y(cpu: &mut CpuState, bus: &mut MainBus) -> u16 {
    fetch_byte(cpu, bus).wrapping_add(cpu.y()) as u16
}

#[inline]
pub(crate) fn addr_abs(cpu: &mut CpuState, bus: &mut MainBus) -> u16 {
    fetch_word(cpu, bus)
}

#[inline]
pub(crate) fn addr_abs_x(cpu: &mut CpuState, bus: &mut MainBus) -> u16 {
    fetch_word(cpu, bus).wrapping_add(cpu.x() as u16)
}

#[inline]
pub(crate) fn addr_abs_y(cpu: &mut CpuState, bus: &mut MainBus) -> u16 {
    fetch_word(cpu, bus).wrapping_add(cpu.y() as u16)
}

#[inline]
pub(crate) fn addr_ind_x(cpu: &mut CpuState, bus: &mut MainBus) -> u16 {
    let zp = fetch_byte(cpu, bus).wrapping_add(cpu.x());
    read_word_zp(bus, zp)
}

#[inline]
pub(crate) fn addr_ind_y(cpu: &mut CpuState, bus: &mut MainBus) -> u16 {
    let zp = fetch_byte(cpu, bus);
    read_word_zp(bus, zp).wrapping_add(cpu.y() as u16)
}

#[inline]
pub(crate) fn addr_abs_x_pc(cpu: &mut CpuState, bus: &mut MainBus) -> (u16, bool) {
    let base = fetch_word(cpu, bus);
    let addr = base.wrapping_add(cpu.x() as u16);
    let crossed = (base & 0xFF00) != (addr & 0xFF00);
    (addr, crossed)
}

#[inline]
pub(crate) fn addr_abs_y_pc(cpu: &mut CpuState, bus: &mut MainBus) -> (u16, bool) {
    let base = fetch_word(cpu, bus);
    let addr = base.wrapping_add(cpu.y() as u16);
    let crossed = (base & 0xFF00) != (addr & 0xFF00);
    (addr, crossed)
}

#[inline]
pub(crate) fn addr_ind_y_pc(cpu: &mut CpuState, bus: &mut MainBus) -> (u16, bool) {
    let zp = fetch_byte(cpu, bus);
    let base = read_word_zp(bus, zp);
    let addr = base.wrapping_add(cpu.y() as u16);
    let crossed = (base & 0xFF00) != (addr & 0xFF00);
    (addr, crossed)
}

/// Read a 16-bit little-endian pointer from zero page, wrapping the high
/// byte back to offset 0 of the same page (standard zero-page-indirect
/// behavior, distinct from the JMP (indirect) bug below).
#[inline]
pub(crate) fn read_word_zp(bus: &mut MainBus, base: u8) -> u16 {
    let lo = bus.read(base as u16) as u16;
    let hi = bus.read(((base as u16 + 1) & 0x00FF) as u16) as u16;
    (hi << 8) | lo
}

/// Emulate the 6502 JMP (indirect) hardware bug: when the low byte of the
/// indirect pointer is 0xFF, the high byte fetch wraps within the same
/// page instead of crossing into the next one (spec.md §4.4).
#[inline]
pub(crate) fn read_word_indirect_bug(bus: &mut MainBus, addr: u16) -> u16 {
    let lo = bus.read(addr) as u16;
    let hi_addr = (addr & 0xFF00) | ((addr + 1) & 0x00FF);
    let hi = bus.read(hi_addr) as u16;
    (hi << 8) | lo
}

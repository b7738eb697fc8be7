/*!
Instruction semantic helpers: ALU operations, stack choreography, and the
read-modify-write sequence shared by the shift/rotate/INC/DEC memory forms.

These operate directly on `CpuState`; addressing and dispatch are handled
by sibling modules so each instruction body here stays a small, testable
unit (spec.md §4.4's per-instruction semantics).
*/

#![allow(dead_code)]

use crate::bus::MainBus;
use crate::cpu::state::{BREAK, CARRY, CpuState, NEGATIVE, OVERFLOW, UNUSED, ZERO};

// ---------------------------------------------------------------------------
// Flags
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn set_flag(cpu: &mut CpuState, mask: u8, on: bool) {
    cpu.assign_flag(mask, on);
}

#[inline]
pub(crate) fn get_flag(cpu: &CpuState, mask: u8) -> bool {
    cpu.is_flag_set(mask)
}

#[inline]
pub(crate) fn update_zn(cpu: &mut CpuState, v: u8) {
    cpu.update_zn(v);
}

// ---------------------------------------------------------------------------
// Stack
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn push(cpu: &mut CpuState, bus: &mut MainBus, v: u8) {
    cpu.push_u8(bus, v);
}

#[inline]
pub(crate) fn pop(cpu: &mut CpuState, bus: &mut MainBus) -> u8 {
    cpu.pop_u8(bus)
}

#[inline]
pub(crate) fn push_word(cpu: &mut CpuState, bus: &mut MainBus, v: u16) {
    cpu.push_u16_le(bus, v);
}

#[inline]
pub(crate) fn pop_word(cpu: &mut CpuState, bus: &mut MainBus) -> u16 {
    cpu.pop_u16_le(bus)
}

#[inline]
pub(crate) fn php(cpu: &mut CpuState, bus: &mut MainBus) {
    let v = cpu.compose_status_for_php();
    push(cpu, bus, v);
}

#[inline]
pub(crate) fn plp(cpu: &mut CpuState, bus: &mut MainBus) {
    let v = pop(cpu, bus);
    cpu.set_status((v | UNUSED) & !BREAK);
}

#[inline]
pub(crate) fn pha(cpu: &mut CpuState, bus: &mut MainBus) {
    let a = cpu.a();
    push(cpu, bus, a);
}

#[inline]
pub(crate) fn pla(cpu: &mut CpuState, bus: &mut MainBus) {
    let val = pop(cpu, bus);
    cpu.set_a(val);
    update_zn(cpu, val);
}

// ---------------------------------------------------------------------------
// Loads / transfers
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn lda(cpu: &mut CpuState, v: u8) {
    cpu.set_a(v);
    update_zn(cpu, cpu.a());
}

#[inline]
pub(crate) fn ldx(cpu: &mut CpuState, v: u8) {
    cpu.set_x(v);
    update_zn(cpu, cpu.x());
}

#[inline]
pub(crate) fn ldy(cpu: &mut CpuState, v: u8) {
    cpu.set_y(v);
    update_zn(cpu, cpu.y());
}

#[inline]
pub(crate) fn tax(cpu: &mut CpuState) {
    cpu.set_x(cpu.a());
    update_zn(cpu, cpu.x());
}

#[inline]
pub(crate) fn tay(cpu: &mut CpuState) {
    cpu.set_y(cpu.a());
    update_zn(cpu, cpu.y());
}

#[inline]
pub(crate) fn txa(cpu: &mut CpuState) {
    cpu.set_a(cpu.x());
    update_zn(cpu, cpu.a());
}

#[inline]
pub(crate) fn tya(cpu: &mut CpuState) {
    cpu.set_a(cpu.y());
    update_zn(cpu, cpu.a());
}

#[inline]
pub(crate) fn tsx(cpu: &mut CpuState) {
    cpu.set_x(cpu.sp());
    update_zn(cpu, cpu.x());
}

#[inline]
pub(crate) fn txs(cpu: &mut CpuState) {
    cpu.set_sp(cpu.x());
}

// ---------------------------------------------------------------------------
// Logical / bit
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn and(cpu: &mut CpuState, v: u8) {
    cpu.set_a(cpu.a() & v);
    update_zn(cpu, cpu.a());
}

#[inline]
pub(crate) fn ora(cpu: &mut CpuState, v: u8) {
    cpu.set_a(cpu.a() | v);
    update_zn(cpu, cpu.a());
}

#[inline]
pub(crate) fn eor(cpu: &mut CpuState, v: u8) {
    cpu.set_a(cpu.a() ^ v);
    update_zn(cpu, cpu.a());
}

/// BIT: Z from `A & M == 0`; N and V come straight from M's bits 7 and 6
/// (not from the AND result).
#[inline]
pub(crate) fn bit(cpu: &mut CpuState, v: u8) {
    set_flag(cpu, ZERO, (cpu.a() & v) == 0);
    set_flag(cpu, NEGATIVE, (v & 0x80) != 0);
    set_flag(cpu, OVERFLOW, (v & 0x40) != 0);
}

// ---------------------------------------------------------------------------
// Increment / decrement (register)
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn inx(cpu: &mut CpuState) {
    cpu.set_x(cpu.x().wrapping_add(1));
    update_zn(cpu, cpu.x());
}

#[inline]
pub(crate) fn iny(cpu: &mut CpuState) {
    cpu.set_y(cpu.y().wrapping_add(1));
    update_zn(cpu, cpu.y());
}

#[inline]
pub(crate) fn dex(cpu: &mut CpuState) {
    cpu.set_x(cpu.x().wrapping_sub(1));
    update_zn(cpu, cpu.x());
}

#[inline]
pub(crate) fn dey(cpu: &mut CpuState) {
    cpu.set_y(cpu.y().wrapping_sub(1));
    update_zn(cpu, cpu.y());
}

// ---------------------------------------------------------------------------
// Shifts / rotates: accumulator
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn asl_acc(cpu: &mut CpuState) {
    let v = cpu.a();
    set_flag(cpu, CARRY, (v & 0x80) != 0);
    cpu.set_a(v << 1);
    update_zn(cpu, cpu.a());
}

#[inline]
pub(crate) fn lsr_acc(cpu: &mut CpuState) {
    let v = cpu.a();
    set_flag(cpu, CARRY, (v & 0x01) != 0);
    cpu.set_a(v >> 1);
    update_zn(cpu, cpu.a());
}

#[inline]
pub(crate) fn rol_acc(cpu: &mut CpuState) {
    let v = cpu.a();
    let carry_in = if get_flag(cpu, CARRY) { 1 } else { 0 };
    set_flag(cpu, CARRY, (v & 0x80) != 0);
    cpu.set_a((v << 1) | carry_in);
    update_zn(cpu, cpu.a());
}

#[inline]
pub(crate) fn ror_acc(cpu: &mut CpuState) {
    let v = cpu.a();
    let carry_in = if get_flag(cpu, CARRY) { 0x80 } else { 0 };
    set_flag(cpu, CARRY, (v & 0x01) != 0);
    cpu.set_a((v >> 1) | carry_in);
    update_zn(cpu, cpu.a());
}

// ---------------------------------------------------------------------------
// ADC / SBC / CMP
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn adc(cpu: &mut CpuState, v: u8) {
    let a = cpu.a();
    let carry_in = if get_flag(cpu, CARRY) { 1 } else { 0 };
    let sum16 = a as u16 + v as u16 + carry_in as u16;
    let result = sum16 as u8;

    set_flag(cpu, CARRY, sum16 > 0xFF);
    set_flag(cpu, OVERFLOW, ((!(a ^ v)) & (a ^ result) & 0x80) != 0);

    cpu.set_a(result);
    update_zn(cpu, cpu.a());
}

/// SBC is ADC with the operand's bits inverted (binary mode only; decimal
/// mode is out of scope per spec.md's Non-goals).
#[inline]
pub(crate) fn sbc(cpu: &mut CpuState, v: u8) {
    adc(cpu, v ^ 0xFF);
}

#[inline]
pub(crate) fn cmp_generic(cpu: &mut CpuState, reg: u8, v: u8) {
    set_flag(cpu, CARRY, reg >= v);
    let r = reg.wrapping_sub(v);
    update_zn(cpu, r);
}

// ---------------------------------------------------------------------------
// Read-modify-write (memory)
// ---------------------------------------------------------------------------

/// Canonical 6502 RMW choreography: read the old value, write it back
/// unchanged, then write the transformed value. Returns the final value.
pub(crate) fn rmw_memory<F>(cpu: &mut CpuState, bus: &mut MainBus, addr: u16, transform: F) -> u8
where
    F: FnOnce(&mut CpuState, u8) -> u8,
{
    let old = bus.read(addr);
    bus.write(addr, old);
    let newv = transform(cpu, old);
    bus.write(addr, newv);
    newv
}

#[inline]
pub(crate) fn asl_mem(cpu: &mut CpuState, bus: &mut MainBus, addr: u16) {
    let r = rmw_memory(cpu, bus, addr, |c, old| {
        set_flag(c, CARRY, (old & 0x80) != 0);
        old << 1
    });
    update_zn(cpu, r);
}

#[inline]
pub(crate) fn lsr_mem(cpu: &mut CpuState, bus: &mut MainBus, addr: u16) {
    let r = rmw_memory(cpu, bus, addr, |c, old| {
        set_flag(c, CARRY, (old & 0x01) != 0);
        old >> 1
    });
    update_zn(cpu, r);
}

#[inline]
pub(crate) fn rol_mem(cpu: &mut CpuState, bus: &mut MainBus, addr: u16) {
    let r = rmw_memory(cpu, bus, addr, |c, old| {
        let carry_in = if get_flag(c, CARRY) { 1 } else { 0 };
        set_flag(c, CARRY, (old & 0x80) != 0);
        (old << 1) | carry_in
    });
    update_zn(cpu, r);
}

#[inline]
pub(crate) fn ror_mem(cpu: &mut CpuState, bus: &mut MainBus, addr: u16) {
    let r = rmw_memory(cpu, bus, addr, |c, old| {
        let carry_in = if get_flag(c, CARRY) { 0x80 } else { 0 };
        set_flag(c, CARRY, (old & 0x01) != 0);
        (old >> 1) | carry_in
    });
    update_zn(cpu, r);
}

#[inline]
pub(crate) fn inc_mem(cpu: &mut CpuState, bus: &mut MainBus, addr: u16) {
    let r = rmw_memory(cpu, bus, addr, |_, old| old.wrapping_add(1));
    update_zn(cpu, r);
}

#[inline]
pub(crate) fn dec_mem(cpu: &mut CpuState, bus: &mut MainBus, addr: u16) {
    let r = rmw_memory(cpu, bus, addr, |_, old| old.wrapping_sub(1));
    update_zn(cpu, r);
}

// ---------------------------------------------------------------------------
// Branches
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn branch_offset(cpu: &mut CpuState, offset: i8) {
    let new_pc = (cpu.pc() as i16).wrapping_add(offset as i16) as u16;
    cpu.set_pc(new_pc);
}

/// Fetch the displacement byte, optionally apply the branch, and return the
/// extra cycles beyond the instruction's base 2 (spec.md §5: +1 taken,
/// +2 if the branch also crosses a page).
pub(crate) fn branch_cond(cpu: &mut CpuState, bus: &mut MainBus, take: bool) -> u32 {
    let raw = cpu.fetch_u8(bus);
    let offset = raw as i8;

    if !take {
        return 0;
    }

    let old_pc = cpu.pc();
    branch_offset(cpu, offset);
    let mut extra = 1;
    if (old_pc & 0xFF00) != (cpu.pc() & 0xFF00) {
        extra += 1;
    }
    extra
}

/*!
Decode group 1: implied/single-byte opcodes and the control-flow
instructions with fixed-width operands (spec.md §4.4). Every opcode here
is matched by exact value rather than a bit pattern, since this group has
no shared addressing-mode structure.
*/

use crate::bus::MainBus;
use crate::cpu::addressing::{addr_abs, read_word_indirect_bug};
use crate::cpu::execute::*;
use crate::cpu::state::{CpuState, IRQ_DISABLE};

/// Attempt to execute `opcode` as a member of this group. Returns the extra
/// cycles beyond the opcode's table entry on a match, `None` otherwise so
/// the caller can try the next decode group.
pub(crate) fn execute(cpu: &mut CpuState, bus: &mut MainBus, opcode: u8) -> Option<u32> {
    match opcode {
        0xEA => {} // NOP

        0x20 => jsr(cpu, bus),
        0x60 => {
            let target = pop_word(cpu, bus).wrapping_add(1);
            cpu.set_pc(target);
        }
        0x40 => rti(cpu, bus),
        0x4C => {
            let target = addr_abs(cpu, bus);
            cpu.set_pc(target);
        }
        0x6C => {
            let ptr = addr_abs(cpu, bus);
            let target = read_word_indirect_bug(bus, ptr);
            cpu.set_pc(target);
        }

        0x48 => pha(cpu, bus),
        0x68 => pla(cpu, bus),
        0x08 => php(cpu, bus),
        0x28 => plp(cpu, bus),

        0xAA => tax(cpu),
        0xA8 => tay(cpu),
        0x8A => txa(cpu),
        0x98 => tya(cpu),
        0xBA => tsx(cpu),
        0x9A => txs(cpu),

        0xE8 => inx(cpu),
        0xC8 => iny(cpu),
        0xCA => dex(cpu),
        0x88 => dey(cpu),

        0x18 => set_flag(cpu, crate::cpu::state::CARRY, false), // CLC
        0x38 => set_flag(cpu, crate::cpu::state::CARRY, true),  // SEC
        0x58 => set_flag(cpu, IRQ_DISABLE, false),               // CLI
        0x78 => set_flag(cpu, IRQ_DISABLE, true),                // SEI
        0xB8 => set_flag(cpu, crate::cpu::state::OVERFLOW, false), // CLV
        0xD8 => set_flag(cpu, crate::cpu::state::DECIMAL, false), // CLD
        0xF8 => set_flag(cpu, crate::cpu::state::DECIMAL, true),  // SED

        _ => return None,
    }
    Some(0)
}

/// JSR: push the address of the instruction's last byte (not the next
/// instruction's address), then jump.
fn jsr(cpu: &mut CpuState, bus: &mut MainBus) {
    let target = addr_abs(cpu, bus);
    let return_addr = cpu.pc().wrapping_sub(1);
    push_word(cpu, bus, return_addr);
    cpu.set_pc(target);
}

fn rti(cpu: &mut CpuState, bus: &mut MainBus) {
    let status = pop(cpu, bus);
    cpu.set_status((status | crate::cpu::state::UNUSED) & !crate::cpu::state::BREAK);
    let pc = pop_word(cpu, bus);
    cpu.set_pc(pc);
}

/*!
Decode group 2: conditional branches, recognized by the `xxy10000` bit
pattern (spec.md §4.4) rather than by an exact-opcode table. `xx` selects
the status flag (N, V, C, Z) and `y` is the expected value of that flag
for the branch to be taken.
*/

use crate::bus::MainBus;
use crate::cpu::execute::{branch_cond, get_flag};
use crate::cpu::state::{CARRY, CpuState, NEGATIVE, OVERFLOW, ZERO};

/// True if `opcode`'s low 5 bits match `10000`, the branch family pattern.
pub(crate) fn is_branch(opcode: u8) -> bool {
    opcode & 0b0001_1111 == 0b0001_0000
}

pub(crate) fn execute(cpu: &mut CpuState, bus: &mut MainBus, opcode: u8) -> u32 {
    let flag_select = (opcode >> 6) & 0b11;
    let want_set = (opcode >> 5) & 1 != 0;
    let flag_mask = match flag_select {
        0b00 => NEGATIVE,
        0b01 => OVERFLOW,
        0b10 => CARRY,
        0b11 => ZERO,
        _ => unreachable!("two bits only yield four cases"),
    };
    let take = get_flag(cpu, flag_mask) == want_set;
    branch_cond(cpu, bus, take)
}

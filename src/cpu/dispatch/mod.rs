/*!
Opcode decoder: routes a fetched opcode byte to one of the five decode
groups spec.md §4.4 describes, in the order that keeps the bit-pattern
tests disjoint:

1. `implied`  - exact-opcode single-byte and control-flow instructions.
2. `branches` - the `xxy10000` conditional-branch family.
3. `cc00`/`cc01`/`cc10` - the three `aaa bbb cc` groups, selected by the
   opcode's low two bits.

Every opcode reaching here has already passed a non-zero check against
[`crate::cpu::cycles::base_cycles`], so the "no match" arms inside the
cc-group handlers are unreachable in practice; they return 0 rather than
panicking so a future opcode-table gap fails quietly instead of
crashing the interpreter.
*/

pub(crate) mod branches;
pub(crate) mod cc00;
pub(crate) mod cc01;
pub(crate) mod cc10;
pub(crate) mod implied;

use crate::bus::MainBus;
use crate::cpu::state::CpuState;

/// Decode and execute `opcode`, returning the extra cycles (page-cross,
/// taken-branch) beyond its table entry in [`crate::cpu::cycles`].
pub(crate) fn dispatch(cpu: &mut CpuState, bus: &mut MainBus, opcode: u8) -> u32 {
    if let Some(extra) = implied::execute(cpu, bus, opcode) {
        return extra;
    }
    if branches::is_branch(opcode) {
        return branches::execute(cpu, bus, opcode);
    }
    match opcode & 0b11 {
        0b00 => cc00::execute(cpu, bus, opcode),
        0b01 => cc01::execute(cpu, bus, opcode),
        0b10 => cc10::execute(cpu, bus, opcode),
        _ => 0,
    }
}

/*!
Decode group 3 (`cc = 00`): BIT, STY, LDY, CPY, CPX. Operation selects on
the `aaa` bits, addressing mode on `bbb` (spec.md §4.4); slots the real
instruction set leaves undefined (e.g. CPY with an indexed addressing
mode) are unreachable because the cycle table carries a zero entry for
them, so [`crate::cpu::cycles::base_cycles`] gates dispatch before this
function ever runs.
*/

use crate::bus::MainBus;
use crate::cpu::addressing::{addr_abs, addr_abs_x_pc, addr_zp, addr_zp_x, fetch_byte};
use crate::cpu::execute::{bit, cmp_generic, ldy};
use crate::cpu::state::CpuState;

pub(crate) fn execute(cpu: &mut CpuState, bus: &mut MainBus, opcode: u8) -> u32 {
    let aaa = (opcode >> 5) & 0b111;
    let bbb = (opcode >> 2) & 0b111;

    match aaa {
        0b001 => {
            // BIT
            let addr = match bbb {
                0b001 => addr_zp(cpu, bus),
                0b011 => addr_abs(cpu, bus),
                _ => return 0,
            };
            let v = bus.read(addr);
            bit(cpu, v);
            0
        }
        0b100 => {
            // STY
            let addr = match bbb {
                0b001 => addr_zp(cpu, bus),
                0b011 => addr_abs(cpu, bus),
                0b101 => addr_zp_x(cpu, bus),
                _ => return 0,
            };
            bus.write(addr, cpu.y());
            0
        }
        0b101 => {
            // LDY
            let (value, extra) = match bbb {
                0b000 => (fetch_byte(cpu, bus), 0),
                0b001 => {
                    let a = addr_zp(cpu, bus);
                    (bus.read(a), 0)
                }
                0b011 => {
                    let a = addr_abs(cpu, bus);
                    (bus.read(a), 0)
                }
                0b101 => {
                    let a = addr_zp_x(cpu, bus);
                    (bus.read(a), 0)
                }
                0b111 => {
                    let (a, crossed) = addr_abs_x_pc(cpu, bus);
                    (bus.read(a), if crossed { 1 } else { 0 })
                }
                _ => return 0,
            };
            ldy(cpu, value);
            extra
        }
        0b110 => {
            // CPY
            let value = match bbb {
                0b000 => fetch_byte(cpu, bus),
                0b001 => {
                    let a = addr_zp(cpu, bus);
                    bus.read(a)
                }
                0b011 => {
                    let a = addr_abs(cpu, bus);
                    bus.read(a)
                }
                _ => return 0,
            };
            let y = cpu.y();
            cmp_generic(cpu, y, value);
            0
        }
        0b111 => {
            // CPX
            let value = match bbb {
                0b000 => fetch_byte(cpu, bus),
                0b001 => {
                    let a = addr_zp(cpu, bus);
                    bus.read(a)
                }
                0b011 => {
                    let a = addr_abs(cpu, bus);
                    bus.read(a)
                }
                _ => return 0,
            };
            let x = cpu.x();
            cmp_generic(cpu, x, value);
            0
        }
        _ => 0,
    }
}

/*!
Decode group 4 (`cc = 01`): ORA, AND, EOR, ADC, STA, LDA, CMP, SBC. This is
the densest group, with all eight addressing modes available to most of
its members (spec.md §4.4). STA is the one exception: it never reads
immediate (there's no such thing as "store to an immediate") and never
earns the page-cross bonus cycle even on its indexed/indirect-Y forms,
since a store always writes at the final address regardless of whether
the effective-address computation crossed a page.
*/

use crate::bus::MainBus;
use crate::cpu::addressing::{
    addr_abs, addr_abs_x, addr_abs_x_pc, addr_abs_y, addr_abs_y_pc, addr_ind_x, addr_ind_y,
    addr_ind_y_pc, addr_zp, addr_zp_x, fetch_byte,
};
use crate::cpu::execute::{adc, and, cmp_generic, eor, lda, ora, sbc};
use crate::cpu::state::CpuState;

/// A fetched operand plus any page-cross penalty earned getting to it.
struct Operand {
    value: u8,
    extra: u32,
}

fn read_operand(cpu: &mut CpuState, bus: &mut MainBus, bbb: u8) -> Option<Operand> {
    let (value, extra) = match bbb {
        0b000 => {
            let addr = addr_ind_x(cpu, bus);
            (bus.read(addr), 0)
        }
        0b001 => {
            let addr = addr_zp(cpu, bus);
            (bus.read(addr), 0)
        }
        0b010 => (fetch_byte(cpu, bus), 0),
        0b011 => {
            let addr = addr_abs(cpu, bus);
            (bus.read(addr), 0)
        }
        0b100 => {
            let (addr, crossed) = addr_ind_y_pc(cpu, bus);
            (bus.read(addr), if crossed { 1 } else { 0 })
        }
        0b101 => {
            let addr = addr_zp_x(cpu, bus);
            (bus.read(addr), 0)
        }
        0b110 => {
            let (addr, crossed) = addr_abs_y_pc(cpu, bus);
            (bus.read(addr), if crossed { 1 } else { 0 })
        }
        0b111 => {
            let (addr, crossed) = addr_abs_x_pc(cpu, bus);
            (bus.read(addr), if crossed { 1 } else { 0 })
        }
        _ => return None,
    };
    Some(Operand { value, extra })
}

/// STA's effective address, computed without ever reporting (or costing) a
/// page-cross penalty. `bbb = 0b010` (immediate) has no STA encoding.
fn sta_addr(cpu: &mut CpuState, bus: &mut MainBus, bbb: u8) -> Option<u16> {
    let addr = match bbb {
        0b000 => addr_ind_x(cpu, bus),
        0b001 => addr_zp(cpu, bus),
        0b011 => addr_abs(cpu, bus),
        0b100 => addr_ind_y(cpu, bus),
        0b101 => addr_zp_x(cpu, bus),
        0b110 => addr_abs_y(cpu, bus),
        0b111 => addr_abs_x(cpu, bus),
        _ => return None,
    };
    Some(addr)
}

pub(crate) fn execute(cpu: &mut CpuState, bus: &mut MainBus, opcode: u8) -> u32 {
    let aaa = (opcode >> 5) & 0b111;
    let bbb = (opcode >> 2) & 0b111;

    if aaa == 0b100 {
        // STA
        return match sta_addr(cpu, bus, bbb) {
            Some(addr) => {
                let a = cpu.a();
                bus.write(addr, a);
                0
            }
            None => 0,
        };
    }

    let Some(operand) = read_operand(cpu, bus, bbb) else {
        return 0;
    };

    match aaa {
        0b000 => ora(cpu, operand.value),
        0b001 => and(cpu, operand.value),
        0b010 => eor(cpu, operand.value),
        0b011 => adc(cpu, operand.value),
        0b101 => lda(cpu, operand.value),
        0b110 => {
            let a = cpu.a();
            cmp_generic(cpu, a, operand.value);
        }
        0b111 => sbc(cpu, operand.value),
        _ => return 0,
    }
    operand.extra
}

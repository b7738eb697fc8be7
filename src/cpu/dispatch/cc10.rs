/*!
Decode group 5 (`cc = 10`): ASL, ROL, LSR, ROR, STX, LDX, DEC, INC
(spec.md §4.4). STX and LDX are the odd ones out here: their indexed
addressing forms use Y as the index register instead of X, since X is
the very register being stored or loaded. Accumulator addressing
(`bbb = 0b010`) applies only to the four shift/rotate operations.
*/

use crate::bus::MainBus;
use crate::cpu::addressing::{addr_abs, addr_abs_x, addr_abs_y_pc, addr_zp, addr_zp_y, fetch_byte};
use crate::cpu::execute::{
    asl_acc, asl_mem, dec_mem, inc_mem, ldx, lsr_acc, lsr_mem, rol_acc, rol_mem, ror_acc, ror_mem,
};
use crate::cpu::state::CpuState;

pub(crate) fn execute(cpu: &mut CpuState, bus: &mut MainBus, opcode: u8) -> u32 {
    let aaa = (opcode >> 5) & 0b111;
    let bbb = (opcode >> 2) & 0b111;

    match aaa {
        0b000 | 0b001 | 0b010 | 0b011 => shift_rotate(cpu, bus, aaa, bbb),
        0b100 => stx(cpu, bus, bbb),
        0b101 => ldx_op(cpu, bus, bbb),
        0b110 => rmw_dec_inc(cpu, bus, bbb, dec_mem),
        0b111 => rmw_dec_inc(cpu, bus, bbb, inc_mem),
        _ => 0,
    }
}

fn shift_rotate(cpu: &mut CpuState, bus: &mut MainBus, aaa: u8, bbb: u8) -> u32 {
    if bbb == 0b010 {
        match aaa {
            0b000 => asl_acc(cpu),
            0b001 => rol_acc(cpu),
            0b010 => lsr_acc(cpu),
            0b011 => ror_acc(cpu),
            _ => {}
        }
        return 0;
    }

    let addr = match bbb {
        0b001 => addr_zp(cpu, bus),
        0b011 => addr_abs(cpu, bus),
        0b101 => {
            let zp = fetch_byte(cpu, bus).wrapping_add(cpu.x());
            zp as u16
        }
        0b111 => addr_abs_x(cpu, bus),
        _ => return 0,
    };

    match aaa {
        0b000 => asl_mem(cpu, bus, addr),
        0b001 => rol_mem(cpu, bus, addr),
        0b010 => lsr_mem(cpu, bus, addr),
        0b011 => ror_mem(cpu, bus, addr),
        _ => {}
    }
    0
}

fn stx(cpu: &mut CpuState, bus: &mut MainBus, bbb: u8) -> u32 {
    let addr = match bbb {
        0b001 => addr_zp(cpu, bus),
        0b011 => addr_abs(cpu, bus),
        0b101 => addr_zp_y(cpu, bus),
        _ => return 0,
    };
    let x = cpu.x();
    bus.write(addr, x);
    0
}

fn ldx_op(cpu: &mut CpuState, bus: &mut MainBus, bbb: u8) -> u32 {
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
            let a = addr_zp_y(cpu, bus);
            (bus.read(a), 0)
        }
        0b111 => {
            let (a, crossed) = addr_abs_y_pc(cpu, bus);
            (bus.read(a), if crossed { 1 } else { 0 })
        }
        _ => return 0,
    };
    ldx(cpu, value);
    extra
}

fn rmw_dec_inc(
    cpu: &mut CpuState,
    bus: &mut MainBus,
    bbb: u8,
    op: fn(&mut CpuState, &mut MainBus, u16),
) -> u32 {
    let addr = match bbb {
        0b001 => addr_zp(cpu, bus),
        0b011 => addr_abs(cpu, bus),
        0b101 => {
            let zp = fetch_byte(cpu, bus).wrapping_add(cpu.x());
            zp as u16
        }
        0b111 => addr_abs_x(cpu, bus),
        _ => return 0,
    };
    op(cpu, bus, addr);
    0
}

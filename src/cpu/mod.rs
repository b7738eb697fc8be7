/*!
Public façade for the 6502 CPU core.

    state.rs     - Registers, flags, stack/fetch primitives.
    addressing.rs- Addressing-mode operand resolution.
    execute.rs   - Per-instruction semantic helpers (ALU, stack, RMW, branch).
    cycles.rs    - The 256-entry base-cycle table.
    dispatch/    - The five opcode decode groups.

[`Cpu`] wraps [`CpuState`] and implements the literal `Step()`
cycle-accounting model: every call either burns a cycle off an
in-flight instruction or, once `skip_cycles` reaches zero, fetches and
dispatches the next opcode before re-arming `skip_cycles` from the
base-cycle table plus whatever extra cycles the handler earned.

This core does not service BRK/NMI/IRQ: the source this core's
semantics were checked against never dispatches opcode `$00` and never
vectors through `$FFFA`/`$FFFE` outside of reset (see DESIGN.md's Open
Question decision), so there is no interrupt-request latch here for a
PPU/APU collaborator to drive.
*/

pub(crate) mod addressing;
mod cycles;
pub(crate) mod dispatch;
pub(crate) mod execute;
pub mod state;

use crate::bus::MainBus;
use state::CpuState;

/// The CPU core. Vectors are polled only on [`Cpu::reset`]; there is no
/// interrupt-request entry point.
pub struct Cpu {
    state: CpuState,
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu {
    pub fn new() -> Self {
        Self {
            state: CpuState::new(),
        }
    }

    /// Load PC from the reset vector and put the CPU in its documented
    /// post-reset register state (spec.md §4.4/state.rs's `reset_to`).
    pub fn reset(&mut self, bus: &mut MainBus) {
        self.state.reset(bus);
    }

    /// Advance the CPU by one cycle. Returns `true` on the cycle that
    /// performed a fetch+dispatch (i.e. the first cycle of an instruction),
    /// `false` while an instruction's remaining cycles are being counted
    /// down. This mirrors spec.md's literal `Step()` contract: call it once
    /// per cycle, not once per instruction.
    pub fn step(&mut self, bus: &mut MainBus) -> bool {
        self.state.cycles = self.state.cycles.wrapping_add(1);

        if self.state.skip_cycles > 1 {
            self.state.skip_cycles -= 1;
            return false;
        }
        self.state.skip_cycles = 0;

        let opcode = self.state.fetch_u8(bus);
        let base = cycles::base_cycles(opcode);
        if base == 0 {
            log::debug!("illegal/unimplemented opcode {opcode:#04x} at pc {:#06x}", self.state.pc().wrapping_sub(1));
            self.state.skip_cycles = 1;
            return true;
        }
        let extra = dispatch::dispatch(&mut self.state, bus, opcode);
        self.state.skip_cycles = base + extra;
        true
    }

    pub fn a(&self) -> u8 {
        self.state.a()
    }
    pub fn x(&self) -> u8 {
        self.state.x()
    }
    pub fn y(&self) -> u8 {
        self.state.y()
    }
    pub fn sp(&self) -> u8 {
        self.state.sp()
    }
    pub fn pc(&self) -> u16 {
        self.state.pc()
    }
    pub fn status(&self) -> u8 {
        self.state.status()
    }
    pub fn cycles(&self) -> u64 {
        self.state.cycles
    }
    pub fn state(&self) -> &CpuState {
        &self.state
    }
}

//! `program <rom-path>`: load a cartridge, reset the CPU and run it for a
//! bounded number of cycles. Exit 0 on clean shutdown, non-zero if the ROM
//! fails to load (spec.md §6's CLI contract). There is no rendering, input,
//! or audio output; this binary exists to exercise the core end to end.

use std::env;
use std::process::ExitCode;

use arness::Cartridge;
use arness::cpu::Cpu;

/// Upper bound on cycles run per invocation, roughly one NTSC frame's worth
/// times a generous multiple. This core has no PPU to synchronize against,
/// so there is no natural frame boundary to stop at.
const MAX_CYCLES: u64 = 10_000_000;

fn main() -> ExitCode {
    env_logger::init();

    let mut args = env::args();
    let _argv0 = args.next();
    let Some(rom_path) = args.next() else {
        eprintln!("usage: arness <rom-path>");
        return ExitCode::FAILURE;
    };

    let cart = match arness::Cartridge::load(&rom_path) {
        Ok(cart) => cart,
        Err(e) => {
            eprintln!("failed to load {rom_path}: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mapper = match cart.build_mapper() {
        Ok(mapper) => mapper,
        Err(e) => {
            eprintln!("failed to build mapper for {rom_path}: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut bus = arness::bus::MainBus::new(mapper, cart.has_extended_ram());
    let mut cpu = Cpu::new();
    cpu.reset(&mut bus);

    let mut cycles_run: u64 = 0;
    while cycles_run < MAX_CYCLES {
        cpu.step(&mut bus);
        cycles_run += 1;
    }

    log::info!(
        "ran {cycles_run} cycles; final pc={:#06x} a={:#04x} x={:#04x} y={:#04x}",
        cpu.pc(),
        cpu.a(),
        cpu.x(),
        cpu.y()
    );

    ExitCode::SUCCESS
}

#![deny(unsafe_code)]
#![doc = r#"
cpu6502 - a cycle-accurate MOS 6502 CPU core.

This crate exposes a single public type, `Cpu`: registers, a flat 64 KiB
address space, the 13 addressing modes, the 56 official instructions, and
the IRQ/NMI/BRK interrupt sequencer, all with documented per-opcode cycle
costs including page-cross and branch-taken penalties.

Modules:
- cpu: register/flag/memory state, addressing-mode resolvers, ALU/flag/stack
  primitives, the base cycle-cost table, and the per-opcode-family dispatch
  chain plus the Step()/Run() orchestrator and interrupt sequencer.
"#]

pub mod cpu;

pub use cpu::Cpu;

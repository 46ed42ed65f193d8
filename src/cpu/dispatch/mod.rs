/*!
dispatch::mod - Orchestrator for a single 6502 CPU step.

Overview
========
Implements one CPU step in the documented order:

1. If halted, return 0 (no fetch).
2. If NMI-pending: service NMI (push PC, push status with B=0, set I, load
   PC from $FFFA/B), clear NMI-pending, return 7. No opcode fetch this step.
3. Else if IRQ-pending: consume the pending flag unconditionally. If the I
   flag is clear, service IRQ (7 cycles, vector $FFFE/F) and return. If I is
   set, the interrupt is discarded — no service, no cycles charged for it —
   and execution falls through to a normal fetch/decode/execute in the same
   call.
4. Fetch the opcode, decode, execute via `fallback::step` (which also owns
   the `$02`/HLT and unknown-opcode-as-NOP rules), return its cycle count.

`run(target)` loops `step` until the cumulative cycle count for the call
reaches or exceeds `target`, or the CPU halts.

Module Layout
=============
    arithmetic.rs    - ADC/SBC
    branches.rs      - relative branch family
    compare.rs       - CMP/CPX/CPY
    control_flow.rs  - JMP/JSR/RTS/RTI/BRK
    fallback.rs       - opcode fetch + family-handler chain for one instruction
    load_store.rs    - LDA/LDX/LDY/STA/STX/STY
    logical.rs       - AND/ORA/EOR/BIT
    misc.rs          - transfers, stack, flag ops
    rmw.rs           - ASL/LSR/ROL/ROR/INC/DEC
*/

#![allow(dead_code)]

pub(crate) mod arithmetic;
pub(crate) mod branches;
pub(crate) mod compare;
pub(crate) mod control_flow;
mod fallback;
pub(crate) mod load_store;
pub(crate) mod logical;
pub(crate) mod misc;
pub(crate) mod rmw;

use crate::cpu::execute::{push_status_with_break, push_word, set_flag};
use crate::cpu::state::{CpuState, IRQ_DISABLE};

const NMI_VECTOR: u16 = 0xFFFA;
const IRQ_VECTOR: u16 = 0xFFFE;
const INTERRUPT_CYCLES: u32 = 7;

/// Execute exactly one CPU step (interrupt service or one instruction).
/// Returns the cycles consumed by this step. Also accumulates into the
/// CPU's monotonic (wrapping) cycle counter.
pub(crate) fn step(cpu: &mut CpuState) -> u32 {
    let consumed = step_inner(cpu);
    cpu.cycles = cpu.cycles.wrapping_add(consumed);
    consumed
}

fn step_inner(cpu: &mut CpuState) -> u32 {
    if cpu.halted {
        return 0;
    }

    if cpu.nmi_pending {
        service_interrupt(cpu, NMI_VECTOR, false);
        cpu.nmi_pending = false;
        return INTERRUPT_CYCLES;
    }

    if cpu.irq_pending {
        cpu.irq_pending = false;
        if !cpu.is_flag_set(IRQ_DISABLE) {
            service_interrupt(cpu, IRQ_VECTOR, false);
            return INTERRUPT_CYCLES;
        }
        // I set: the interrupt is discarded; fall through to a normal fetch.
    }

    fallback::step(cpu)
}

/// Run until cumulative cycles reach/exceed `target`, or the CPU halts.
/// Returns cycles actually consumed during the call.
pub(crate) fn run(cpu: &mut CpuState, target: u32) -> u32 {
    let mut total = 0u32;
    while total < target {
        if cpu.halted {
            break;
        }
        total = total.wrapping_add(step(cpu));
    }
    total
}

/// Shared NMI/IRQ service sequence: push PC, push status (B per `set_break`),
/// set I, load PC from `vector_addr`. BRK (which also pushes PC+1 and B=1)
/// is handled separately in `control_flow`, since it's a synchronous opcode
/// rather than an externally-sampled interrupt.
fn service_interrupt(cpu: &mut CpuState, vector_addr: u16, set_break: bool) {
    let pc = cpu.pc;
    push_word(cpu, pc);
    push_status_with_break(cpu, set_break);
    set_flag(cpu, IRQ_DISABLE, true);
    cpu.pc = cpu.read_word(vector_addr);
}

/*!
fallback.rs - Opcode fetch/decode/execute for a single (non-interrupt) step.

Overview
========
Performs the per-instruction half of a step (fetch through execute):
fetch the opcode, advance PC, look up its base cycle count, and try each
opcode-family handler in a fixed chain until one claims it. An opcode none
of the family handlers recognize is either the unofficial HLT (`$02`,
documented as halting with 0 reported cycles) or genuinely undocumented,
in which case it is treated as a 2-cycle NOP — see `cycles::base_cycles`'s
default arm, which already returns 2 for any opcode it doesn't enumerate.

Dispatch Order
==============
load_store -> logical -> arithmetic -> compare -> branches -> rmw ->
control_flow -> misc

Order doesn't affect correctness (opcodes are disjoint across families)
but keeps the hottest instruction classes (loads/stores) first.
*/

#![allow(dead_code)]

use crate::cpu::cycles::base_cycles;
use crate::cpu::state::CpuState;

const HLT: u8 = 0x02;

/// Execute exactly one non-interrupt instruction. Assumes the caller has
/// already ruled out halted/NMI/IRQ handling for this step. Returns the
/// total cycles consumed.
pub(crate) fn step(cpu: &mut CpuState) -> u32 {
    let opcode = cpu.fetch_u8();

    if opcode == HLT {
        cpu.halted = true;
        return 0;
    }

    let mut cycles = base_cycles(opcode);

    let _handled = super::load_store::handle(opcode, cpu, &mut cycles)
        || super::logical::handle(opcode, cpu, &mut cycles)
        || super::arithmetic::handle(opcode, cpu, &mut cycles)
        || super::compare::handle(opcode, cpu, &mut cycles)
        || super::branches::handle(opcode, cpu, &mut cycles)
        || super::rmw::handle(opcode, cpu, &mut cycles)
        || super::control_flow::handle(opcode, cpu, &mut cycles)
        || super::misc::handle(opcode, cpu, &mut cycles);

    // Unknown opcode: treated as a NOP (base_cycles already defaulted to 2).
    cycles
}

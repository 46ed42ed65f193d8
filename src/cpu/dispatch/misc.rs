/*!
misc.rs - Transfers / Stack / Flag opcode family handler

Overview
========
Handles small, fixed-cycle instructions that move register values, manipulate
the stack, or set/clear individual processor status flags:

Transfers:
  TAX (0xAA), TAY (0xA8), TXA (0x8A), TYA (0x98), TSX (0xBA), TXS (0x9A)

Stack:
  PHA (0x48), PLA (0x68), PHP (0x08), PLP (0x28)

Flag operations:
  CLC (0x18), SEC (0x38),
  CLI (0x58), SEI (0x78),
  CLD (0xD8), SED (0xF8),
  CLV (0xB8)

Notes
=====
TXS does not touch flags (see `execute::txs`). All other transfers apply
set_nz. None of these opcodes take a page-cross penalty or RMW adjustment.
*/

#![allow(dead_code)]

use crate::cpu::execute::{pha, php, pla, plp, set_flag, tax, tay, tsx, txa, txs, tya};
use crate::cpu::state::{CpuState, CARRY, DECIMAL, IRQ_DISABLE, OVERFLOW};

pub(super) fn handle(opcode: u8, cpu: &mut CpuState, _cycles: &mut u32) -> bool {
    match opcode {
        // -------- Transfers --------
        0xAA => tax(cpu),
        0xA8 => tay(cpu),
        0x8A => txa(cpu),
        0x98 => tya(cpu),
        0xBA => tsx(cpu),
        0x9A => txs(cpu),

        // -------- Stack --------
        0x48 => pha(cpu),
        0x68 => pla(cpu),
        0x08 => php(cpu),
        0x28 => plp(cpu),

        // -------- Flags --------
        0x18 => set_flag(cpu, CARRY, false),       // CLC
        0x38 => set_flag(cpu, CARRY, true),        // SEC
        0x58 => set_flag(cpu, IRQ_DISABLE, false), // CLI
        0x78 => set_flag(cpu, IRQ_DISABLE, true),  // SEI
        0xD8 => set_flag(cpu, DECIMAL, false),     // CLD
        0xF8 => set_flag(cpu, DECIMAL, true),      // SED
        0xB8 => set_flag(cpu, OVERFLOW, false),    // CLV

        _ => return false,
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu::cycles::base_cycles;

    fn setup() -> CpuState {
        CpuState::new()
    }

    #[test]
    fn transfers_apply_zn() {
        let mut cpu = setup();
        cpu.a = 0x00;
        let mut c = base_cycles(0xAA);
        assert!(handle(0xAA, &mut cpu, &mut c)); // TAX
        assert_eq!(cpu.x, 0x00);
        assert!(cpu.is_flag_set(crate::cpu::state::ZERO));
    }

    #[test]
    fn txs_does_not_touch_flags() {
        let mut cpu = setup();
        cpu.x = 0x00;
        let status_before = cpu.status;
        let mut c = base_cycles(0x9A);
        assert!(handle(0x9A, &mut cpu, &mut c)); // TXS
        assert_eq!(cpu.sp, 0x00);
        assert_eq!(cpu.status, status_before);
    }

    #[test]
    fn pha_pla_round_trip() {
        let mut cpu = setup();
        cpu.a = 0xAB;
        let mut c1 = base_cycles(0x48);
        assert!(handle(0x48, &mut cpu, &mut c1));
        cpu.a = 0x00;
        let mut c2 = base_cycles(0x68);
        assert!(handle(0x68, &mut cpu, &mut c2));
        assert_eq!(cpu.a, 0xAB);
    }

    #[test]
    fn flag_ops_set_and_clear() {
        let mut cpu = setup();
        let mut c = base_cycles(0x38);
        handle(0x38, &mut cpu, &mut c); // SEC
        assert!(cpu.is_flag_set(CARRY));
        let mut c2 = base_cycles(0x18);
        handle(0x18, &mut cpu, &mut c2); // CLC
        assert!(!cpu.is_flag_set(CARRY));
    }
}

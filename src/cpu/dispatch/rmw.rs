/*!
rmw.rs - RMW / shift / increment / decrement opcode family handler

Overview
========
Implements all 6502 Read-Modify-Write (RMW) instructions, shifts / rotates,
and memory INC / DEC opcodes. These always take their documented worst-case
cycle count; unlike loads, they never get a page-cross discount or penalty.

Covered Opcodes
---------------
Shifts / Rotates
  ASL: 0x0A (A), 0x06 (zp), 0x16 (zp,X), 0x0E (abs), 0x1E (abs,X)
  LSR: 0x4A (A), 0x46 (zp), 0x56 (zp,X), 0x4E (abs), 0x5E (abs,X)
  ROL: 0x2A (A), 0x26 (zp), 0x36 (zp,X), 0x2E (abs), 0x3E (abs,X)
  ROR: 0x6A (A), 0x66 (zp), 0x76 (zp,X), 0x6E (abs), 0x7E (abs,X)

Memory Increment / Decrement
  INC: 0xE6 (zp), 0xF6 (zp,X), 0xEE (abs), 0xFE (abs,X)
  DEC: 0xC6 (zp), 0xD6 (zp,X), 0xCE (abs), 0xDE (abs,X)
*/

#![allow(dead_code)]

use crate::cpu::addressing::{addr_abs, addr_abs_x, addr_zp, addr_zp_x};
use crate::cpu::execute::{
    asl_acc, asl_mem, dec_mem, inc_mem, lsr_acc, lsr_mem, rol_acc, rol_mem, ror_acc, ror_mem,
};
use crate::cpu::state::CpuState;

pub(super) fn handle(opcode: u8, cpu: &mut CpuState, _cycles: &mut u32) -> bool {
    match opcode {
        // -------- ASL --------
        0x0A => asl_acc(cpu),
        0x06 => {
            let a = addr_zp(cpu);
            asl_mem(cpu, a);
        }
        0x16 => {
            let a = addr_zp_x(cpu);
            asl_mem(cpu, a);
        }
        0x0E => {
            let a = addr_abs(cpu);
            asl_mem(cpu, a);
        }
        0x1E => {
            let a = addr_abs_x(cpu);
            asl_mem(cpu, a);
        }

        // -------- LSR --------
        0x4A => lsr_acc(cpu),
        0x46 => {
            let a = addr_zp(cpu);
            lsr_mem(cpu, a);
        }
        0x56 => {
            let a = addr_zp_x(cpu);
            lsr_mem(cpu, a);
        }
        0x4E => {
            let a = addr_abs(cpu);
            lsr_mem(cpu, a);
        }
        0x5E => {
            let a = addr_abs_x(cpu);
            lsr_mem(cpu, a);
        }

        // -------- ROL --------
        0x2A => rol_acc(cpu),
        0x26 => {
            let a = addr_zp(cpu);
            rol_mem(cpu, a);
        }
        0x36 => {
            let a = addr_zp_x(cpu);
            rol_mem(cpu, a);
        }
        0x2E => {
            let a = addr_abs(cpu);
            rol_mem(cpu, a);
        }
        0x3E => {
            let a = addr_abs_x(cpu);
            rol_mem(cpu, a);
        }

        // -------- ROR --------
        0x6A => ror_acc(cpu),
        0x66 => {
            let a = addr_zp(cpu);
            ror_mem(cpu, a);
        }
        0x76 => {
            let a = addr_zp_x(cpu);
            ror_mem(cpu, a);
        }
        0x6E => {
            let a = addr_abs(cpu);
            ror_mem(cpu, a);
        }
        0x7E => {
            let a = addr_abs_x(cpu);
            ror_mem(cpu, a);
        }

        // -------- INC (memory) --------
        0xE6 => {
            let a = addr_zp(cpu);
            inc_mem(cpu, a);
        }
        0xF6 => {
            let a = addr_zp_x(cpu);
            inc_mem(cpu, a);
        }
        0xEE => {
            let a = addr_abs(cpu);
            inc_mem(cpu, a);
        }
        0xFE => {
            let a = addr_abs_x(cpu);
            inc_mem(cpu, a);
        }

        // -------- DEC (memory) --------
        0xC6 => {
            let a = addr_zp(cpu);
            dec_mem(cpu, a);
        }
        0xD6 => {
            let a = addr_zp_x(cpu);
            dec_mem(cpu, a);
        }
        0xCE => {
            let a = addr_abs(cpu);
            dec_mem(cpu, a);
        }
        0xDE => {
            let a = addr_abs_x(cpu);
            dec_mem(cpu, a);
        }

        _ => return false,
    }
    true
}

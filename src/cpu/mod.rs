/*!
cpu::mod - Public façade for the 6502 CPU core.

Layout
======
    state.rs      - registers, flags, and the flat 64 KiB memory (`CpuState`)
    addressing.rs - the 13 addressing-mode operand/effective-address resolvers
    execute.rs    - ALU/flag/stack primitives shared by instruction handlers
    cycles.rs     - the 151-entry base cycle-count table
    dispatch/     - one handler module per opcode family, plus the
                    Step()/Run() orchestrator and IRQ/NMI sequencer

`Cpu` is the only public type this module exports. It owns a `CpuState`
and exposes exactly the surface a caller needs: construction, program
loading, vector setters, step/run, interrupt triggers, reset/hard_reset,
memory access, and register/flag inspection. Everything else (addressing,
execute, dispatch internals) is `pub(crate)` — callers only ever see `Cpu`.
*/

mod addressing;
mod cycles;
mod dispatch;
mod execute;
mod state;

use state::{CpuState, IRQ_VECTOR, NMI_VECTOR, RESET_VECTOR};

/// Default load address used by `load_program` when the caller doesn't
/// care where the program lands (matches the convention of the classic
/// 6502 "hello world" programs this core is tested against).
pub const DEFAULT_LOAD_ADDR: u16 = 0x0600;

/// A complete MOS 6502 CPU: registers, 64 KiB of memory, and the
/// fetch-decode-execute engine. Single-threaded and synchronous: no
/// method suspends, blocks, or yields, and there is no internal locking.
#[derive(Debug, Clone)]
pub struct Cpu {
    state: CpuState,
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu {
    /// Construct a CPU with power-up defaults: zeroed memory, A=X=Y=0,
    /// SP=$FD, P=$24 (U|I), PC=0, cycles=0, no pending interrupts, not
    /// halted.
    pub fn new() -> Self {
        Self {
            state: CpuState::new(),
        }
    }

    // ------------------------------------------------------------------
    // Program loading / vectors
    // ------------------------------------------------------------------

    /// Copy `bytes` into memory starting at `addr`, wrapping modulo 65536.
    pub fn load_program(&mut self, bytes: &[u8], addr: u16) {
        self.state.load_program(bytes, addr);
    }

    /// Write a 16-bit little-endian address to the NMI vector ($FFFA/B).
    pub fn set_nmi_vector(&mut self, addr: u16) {
        self.state.write_word(NMI_VECTOR, addr);
    }

    /// Write a 16-bit little-endian address to the RESET vector ($FFFC/D).
    pub fn set_reset_vector(&mut self, addr: u16) {
        self.state.write_word(RESET_VECTOR, addr);
    }

    /// Write a 16-bit little-endian address to the IRQ/BRK vector ($FFFE/F).
    pub fn set_irq_vector(&mut self, addr: u16) {
        self.state.write_word(IRQ_VECTOR, addr);
    }

    // ------------------------------------------------------------------
    // Execution
    // ------------------------------------------------------------------

    /// Execute exactly one step (an interrupt service sequence counts as a
    /// step) and return the cycles it consumed.
    pub fn step(&mut self) -> u32 {
        dispatch::step(&mut self.state)
    }

    /// Run `step` until cumulative cycles for this call reach or exceed
    /// `target`, or the CPU halts. Returns the cycles actually consumed.
    pub fn run(&mut self, target: u32) -> u32 {
        dispatch::run(&mut self.state, target)
    }

    // ------------------------------------------------------------------
    // Interrupts
    // ------------------------------------------------------------------

    /// Assert the maskable interrupt request line; sampled at the top of
    /// the next `step()`.
    pub fn trigger_irq(&mut self) {
        self.state.irq_pending = true;
    }

    /// Assert a non-maskable interrupt edge; sampled at the top of the
    /// next `step()`, serviced unconditionally.
    pub fn trigger_nmi(&mut self) {
        self.state.nmi_pending = true;
    }

    // ------------------------------------------------------------------
    // Reset
    // ------------------------------------------------------------------

    /// Soft reset: A=X=Y=0, SP=$FD, P=U|I, clears halted and pending
    /// interrupts, loads PC from the RESET vector. Memory is preserved.
    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// Hard reset: zeroes the entire state, including memory and vectors.
    pub fn hard_reset(&mut self) {
        self.state.hard_reset();
    }

    // ------------------------------------------------------------------
    // Memory access
    // ------------------------------------------------------------------

    /// Read a byte; `addr` is masked to 16 bits.
    pub fn read_memory(&self, addr: u16) -> u8 {
        self.state.read(addr)
    }

    /// Write a byte; `addr` masked to 16 bits, `value` to 8 bits (the u8
    /// argument type already bounds the value).
    pub fn write_memory(&mut self, addr: u16, value: u8) {
        self.state.write(addr, value);
    }

    // ------------------------------------------------------------------
    // Inspection
    // ------------------------------------------------------------------

    pub fn a(&self) -> u8 {
        self.state.a
    }
    pub fn x(&self) -> u8 {
        self.state.x
    }
    pub fn y(&self) -> u8 {
        self.state.y
    }
    pub fn sp(&self) -> u8 {
        self.state.sp
    }
    pub fn pc(&self) -> u16 {
        self.state.pc
    }
    /// Status register; bit layout (7->0) is N V U B D I Z C. Bit 5 (U)
    /// always reads as 1; bit 4 (B) only ever appears in pushed copies,
    /// never in this live register.
    pub fn status(&self) -> u8 {
        self.state.status
    }
    pub fn cycles(&self) -> u32 {
        self.state.cycles
    }
    pub fn is_halted(&self) -> bool {
        self.state.halted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_has_power_up_defaults() {
        let cpu = Cpu::new();
        assert_eq!(cpu.a(), 0);
        assert_eq!(cpu.x(), 0);
        assert_eq!(cpu.y(), 0);
        assert_eq!(cpu.sp(), 0xFD);
        assert_eq!(cpu.status(), 0x24);
        assert_eq!(cpu.pc(), 0);
        assert_eq!(cpu.cycles(), 0);
        assert!(!cpu.is_halted());
    }

    #[test]
    fn load_program_and_reset_from_vector() {
        let mut cpu = Cpu::new();
        cpu.load_program(&[0xA9, 0x42, 0x02], DEFAULT_LOAD_ADDR);
        cpu.set_reset_vector(DEFAULT_LOAD_ADDR);
        cpu.reset();
        assert_eq!(cpu.pc(), DEFAULT_LOAD_ADDR);
        cpu.step(); // LDA #$42
        assert_eq!(cpu.a(), 0x42);
        cpu.step(); // HLT
        assert!(cpu.is_halted());
    }

    #[test]
    fn vector_setters_write_little_endian() {
        let mut cpu = Cpu::new();
        cpu.set_nmi_vector(0x1234);
        assert_eq!(cpu.read_memory(0xFFFA), 0x34);
        assert_eq!(cpu.read_memory(0xFFFB), 0x12);
    }

    #[test]
    fn hard_reset_clears_memory_soft_reset_preserves_it() {
        let mut cpu = Cpu::new();
        cpu.write_memory(0x2000, 0xAB);
        cpu.reset();
        assert_eq!(cpu.read_memory(0x2000), 0xAB);
        cpu.hard_reset();
        assert_eq!(cpu.read_memory(0x2000), 0x00);
    }

    #[test]
    fn counter_loop_fills_memory_and_tracks_cycles() {
        // LDX #$00; TXA; STA $0400; INX; CPX #$0A; BNE -9; HLT
        let prg = [
            0xA2, 0x00, 0x8A, 0x8D, 0x00, 0x04, 0xE8, 0xE0, 0x0A, 0xD0, 0xF7, 0x02,
        ];
        let mut cpu = Cpu::new();
        cpu.load_program(&prg, DEFAULT_LOAD_ADDR);
        cpu.set_reset_vector(DEFAULT_LOAD_ADDR);
        cpu.reset();
        cpu.run(1000);
        assert!(cpu.is_halted());
        assert_eq!(cpu.read_memory(0x0400), 9);
        assert_eq!(cpu.x(), 10);
        // LDX(2) + 10*(TXA+STA+INX+CPX = 10) + (9 taken branches*3 + 1 not-taken*2).
        // A documentation pass once quoted 175 cycles for this loop; that figure
        // doesn't reconcile with the standard per-opcode timing table this core
        // implements (LDX/TXA/INX/CPX #imm = 2, STA abs = 4, BNE = 2/3), which
        // yields 131 here. 131 is the value a real NMOS part produces, so that's
        // what this core reports; 175 was never achievable and isn't reproduced.
        assert_eq!(cpu.cycles(), 2 + 10 * 10 + (9 * 3 + 2));
    }
}

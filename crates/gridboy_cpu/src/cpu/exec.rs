mod alu;
mod control;
mod incdec;
mod ld;
mod stack;
mod system;

use super::{table, Bus, Cpu, StepError};

impl Cpu {
    /// Execute a single already-fetched primary opcode and return the
    /// number of T-cycles consumed.
    ///
    /// The match is grouped by instruction family; each arm delegates to
    /// an `exec_*` handler in the family's submodule. PC has already
    /// advanced past the opcode byte; handlers fetch any immediate or
    /// displacement bytes they need directly from the bus.
    pub(super) fn exec_opcode<B: Bus>(
        &mut self,
        bus: &mut B,
        opcode: u8,
    ) -> Result<u32, StepError> {
        match opcode {
            // NOP
            0x00 => Ok(4),

            // 16-bit immediate loads.
            0x01 | 0x11 | 0x21 | 0x31 => self.exec_ld_rr_d16(bus, opcode),

            // Rotate A instructions (unprefixed; Z is always cleared).
            0x07 | 0x0F | 0x17 | 0x1F => self.exec_rotate_a(opcode),

            // 16-bit INC rr / DEC rr
            0x03 | 0x13 | 0x23 | 0x33 => self.exec_inc16_rr(opcode),
            0x0B | 0x1B | 0x2B | 0x3B => self.exec_dec16_rr(opcode),

            // LD r, d8 (and LD (HL), d8)
            0x06 | 0x0E | 0x16 | 0x1E | 0x26 | 0x2E | 0x36 | 0x3E => {
                self.exec_ld_r_d8(bus, opcode)
            }

            // 8-bit register/memory transfers LD r1, r2, including HALT
            // at the (HL),(HL) slot.
            0x40..=0x7F => self.exec_ld_rr_or_halt(bus, opcode),

            // LD (BC/DE/HL±), A and LD A, (BC/DE/HL±)
            0x02 | 0x12 | 0x22 | 0x32 => self.exec_ld_indirect_a(bus, opcode),
            0x0A | 0x1A | 0x2A | 0x3A => self.exec_ld_a_indirect(bus, opcode),

            // LD (a16), SP
            0x08 => self.exec_ld_a16_sp(bus),

            // STOP
            0x10 => self.exec_stop(bus),

            // High-page IO addressing.
            0xE0 | 0xF0 => self.exec_ldh_a8(bus, opcode),
            0xE2 | 0xF2 => self.exec_ldh_c(bus, opcode),

            // LD (a16),A / LD A,(a16)
            0xEA | 0xFA => self.exec_ld_a16_a(bus, opcode),

            // Signed-immediate SP arithmetic.
            0xE8 => self.exec_add_sp_r8(bus),
            0xF8 => self.exec_ld_hl_sp_r8(bus),
            0xF9 => self.exec_ld_sp_hl(),

            // Relative jumps.
            0x18 => Ok(self.jr(bus, true)?),
            0x20 | 0x28 | 0x30 | 0x38 => self.exec_jr_cc(bus, opcode),

            // Absolute jumps.
            0xC2 | 0xCA | 0xD2 | 0xDA => self.exec_jp_cc(bus, opcode),
            0xC3 => self.exec_jp_a16(bus),
            0xE9 => self.exec_jp_hl(),

            // ADD HL, rr
            0x09 | 0x19 | 0x29 | 0x39 => self.exec_add_hl_rr(opcode),

            // Accumulator/flag housekeeping.
            0x27 => self.exec_daa(),
            0x2F => self.exec_cpl(),
            0x37 => self.exec_scf(),
            0x3F => self.exec_ccf(),

            // 8-bit ALU on A: register/(HL) sources, then immediates.
            0x80..=0xBF => self.exec_alu_reg_group(bus, opcode),
            0xC6 | 0xCE | 0xD6 | 0xDE | 0xE6 | 0xEE | 0xF6 | 0xFE => {
                self.exec_alu_imm(bus, opcode)
            }

            // INC r / DEC r
            0x04 | 0x0C | 0x14 | 0x1C | 0x24 | 0x2C | 0x34 | 0x3C => {
                self.exec_inc8_reg(bus, opcode)
            }
            0x05 | 0x0D | 0x15 | 0x1D | 0x25 | 0x2D | 0x35 | 0x3D => {
                self.exec_dec8_reg(bus, opcode)
            }

            // Interrupt control.
            0xF3 => self.exec_di(),
            0xFB => self.exec_ei(),

            // Calls, returns, restarts, stack.
            0xCD => self.exec_call_a16(bus),
            0xC4 | 0xCC | 0xD4 | 0xDC => self.exec_call_cc(bus, opcode),
            0xC9 => self.exec_ret(bus),
            0xC0 | 0xC8 | 0xD0 | 0xD8 => self.exec_ret_cc(bus, opcode),
            0xD9 => self.exec_reti(bus),
            0xC5 | 0xD5 | 0xE5 | 0xF5 => self.exec_push_rr(bus, opcode),
            0xC1 | 0xD1 | 0xE1 | 0xF1 => self.exec_pop_rr(bus, opcode),
            0xC7 | 0xCF | 0xD7 | 0xDF | 0xE7 | 0xEF | 0xF7 | 0xFF => self.exec_rst(bus, opcode),

            // The CB prefix is expanded by `step`; reaching primary
            // dispatch means the decode protocol was violated.
            table::CB_PREFIX => {
                let pc = self.regs.pc.wrapping_sub(1);
                Err(StepError::IllegalOpcode { opcode, pc })
            }

            // Opcode holes and the coverage guard. The holes have no
            // defined behavior; anything else landing here is a
            // table-legal opcode missing its dispatch arm.
            other => {
                let pc = self.regs.pc.wrapping_sub(1);
                if table::decode(other, false).is_none() {
                    Err(StepError::IllegalOpcode { opcode: other, pc })
                } else {
                    Err(StepError::Unimplemented {
                        opcode: other,
                        prefixed: false,
                        pc,
                    })
                }
            }
        }
    }
}

//! Static dispatch tables for the primary and CB-prefixed opcode spaces.
//!
//! Each populated slot records the instruction's mnemonic (for tracing
//! and diagnostics) and its base cycle cost; conditional instructions
//! list the not-taken cost, with the taken cost charged at execution.
//! Empty slots in the primary table are the hardware's opcode holes.

/// Marker byte that escapes into the CB-prefixed table.
pub const CB_PREFIX: u8 = 0xCB;

/// One populated dispatch slot.
#[derive(Clone, Copy, Debug)]
pub struct OpcodeInfo {
    pub mnemonic: &'static str,
    pub cycles: u32,
}

/// Resolve an opcode against the primary or CB-prefixed table.
///
/// `None` means the slot is one of the primary table's holes; every
/// CB-prefixed slot is populated.
pub fn decode(opcode: u8, prefixed: bool) -> Option<OpcodeInfo> {
    if prefixed {
        Some(PREFIXED[opcode as usize])
    } else {
        PRIMARY[opcode as usize]
    }
}

const fn op(mnemonic: &'static str, cycles: u32) -> Option<OpcodeInfo> {
    Some(OpcodeInfo { mnemonic, cycles })
}

const fn cb(mnemonic: &'static str, cycles: u32) -> OpcodeInfo {
    OpcodeInfo { mnemonic, cycles }
}

/// Primary opcode table. The eleven `None` slots (0xD3, 0xDB, 0xDD,
/// 0xE3, 0xE4, 0xEB, 0xEC, 0xED, 0xF4, 0xFC, 0xFD) have no defined
/// hardware behavior.
#[rustfmt::skip]
pub(super) static PRIMARY: [Option<OpcodeInfo>; 256] = [
    // 0x00
    op("NOP", 4),            op("LD BC, d16", 12),    op("LD (BC), A", 8),     op("INC BC", 8),
    op("INC B", 4),          op("DEC B", 4),          op("LD B, d8", 8),       op("RLCA", 4),
    op("LD (a16), SP", 20),  op("ADD HL, BC", 8),     op("LD A, (BC)", 8),     op("DEC BC", 8),
    op("INC C", 4),          op("DEC C", 4),          op("LD C, d8", 8),       op("RRCA", 4),
    // 0x10
    op("STOP d8", 4),        op("LD DE, d16", 12),    op("LD (DE), A", 8),     op("INC DE", 8),
    op("INC D", 4),          op("DEC D", 4),          op("LD D, d8", 8),       op("RLA", 4),
    op("JR r8", 12),         op("ADD HL, DE", 8),     op("LD A, (DE)", 8),     op("DEC DE", 8),
    op("INC E", 4),          op("DEC E", 4),          op("LD E, d8", 8),       op("RRA", 4),
    // 0x20
    op("JR NZ, r8", 8),      op("LD HL, d16", 12),    op("LD (HL+), A", 8),    op("INC HL", 8),
    op("INC H", 4),          op("DEC H", 4),          op("LD H, d8", 8),       op("DAA", 4),
    op("JR Z, r8", 8),       op("ADD HL, HL", 8),     op("LD A, (HL+)", 8),    op("DEC HL", 8),
    op("INC L", 4),          op("DEC L", 4),          op("LD L, d8", 8),       op("CPL", 4),
    // 0x30
    op("JR NC, r8", 8),      op("LD SP, d16", 12),    op("LD (HL-), A", 8),    op("INC SP", 8),
    op("INC (HL)", 12),      op("DEC (HL)", 12),      op("LD (HL), d8", 12),   op("SCF", 4),
    op("JR C, r8", 8),       op("ADD HL, SP", 8),     op("LD A, (HL-)", 8),    op("DEC SP", 8),
    op("INC A", 4),          op("DEC A", 4),          op("LD A, d8", 8),       op("CCF", 4),
    // 0x40
    op("LD B, B", 4),        op("LD B, C", 4),        op("LD B, D", 4),        op("LD B, E", 4),
    op("LD B, H", 4),        op("LD B, L", 4),        op("LD B, (HL)", 8),     op("LD B, A", 4),
    op("LD C, B", 4),        op("LD C, C", 4),        op("LD C, D", 4),        op("LD C, E", 4),
    op("LD C, H", 4),        op("LD C, L", 4),        op("LD C, (HL)", 8),     op("LD C, A", 4),
    // 0x50
    op("LD D, B", 4),        op("LD D, C", 4),        op("LD D, D", 4),        op("LD D, E", 4),
    op("LD D, H", 4),        op("LD D, L", 4),        op("LD D, (HL)", 8),     op("LD D, A", 4),
    op("LD E, B", 4),        op("LD E, C", 4),        op("LD E, D", 4),        op("LD E, E", 4),
    op("LD E, H", 4),        op("LD E, L", 4),        op("LD E, (HL)", 8),     op("LD E, A", 4),
    // 0x60
    op("LD H, B", 4),        op("LD H, C", 4),        op("LD H, D", 4),        op("LD H, E", 4),
    op("LD H, H", 4),        op("LD H, L", 4),        op("LD H, (HL)", 8),     op("LD H, A", 4),
    op("LD L, B", 4),        op("LD L, C", 4),        op("LD L, D", 4),        op("LD L, E", 4),
    op("LD L, H", 4),        op("LD L, L", 4),        op("LD L, (HL)", 8),     op("LD L, A", 4),
    // 0x70
    op("LD (HL), B", 8),     op("LD (HL), C", 8),     op("LD (HL), D", 8),     op("LD (HL), E", 8),
    op("LD (HL), H", 8),     op("LD (HL), L", 8),     op("HALT", 4),           op("LD (HL), A", 8),
    op("LD A, B", 4),        op("LD A, C", 4),        op("LD A, D", 4),        op("LD A, E", 4),
    op("LD A, H", 4),        op("LD A, L", 4),        op("LD A, (HL)", 8),     op("LD A, A", 4),
    // 0x80
    op("ADD A, B", 4),       op("ADD A, C", 4),       op("ADD A, D", 4),       op("ADD A, E", 4),
    op("ADD A, H", 4),       op("ADD A, L", 4),       op("ADD A, (HL)", 8),    op("ADD A, A", 4),
    op("ADC A, B", 4),       op("ADC A, C", 4),       op("ADC A, D", 4),       op("ADC A, E", 4),
    op("ADC A, H", 4),       op("ADC A, L", 4),       op("ADC A, (HL)", 8),    op("ADC A, A", 4),
    // 0x90
    op("SUB B", 4),          op("SUB C", 4),          op("SUB D", 4),          op("SUB E", 4),
    op("SUB H", 4),          op("SUB L", 4),          op("SUB (HL)", 8),       op("SUB A", 4),
    op("SBC A, B", 4),       op("SBC A, C", 4),       op("SBC A, D", 4),       op("SBC A, E", 4),
    op("SBC A, H", 4),       op("SBC A, L", 4),       op("SBC A, (HL)", 8),    op("SBC A, A", 4),
    // 0xA0
    op("AND B", 4),          op("AND C", 4),          op("AND D", 4),          op("AND E", 4),
    op("AND H", 4),          op("AND L", 4),          op("AND (HL)", 8),       op("AND A", 4),
    op("XOR B", 4),          op("XOR C", 4),          op("XOR D", 4),          op("XOR E", 4),
    op("XOR H", 4),          op("XOR L", 4),          op("XOR (HL)", 8),       op("XOR A", 4),
    // 0xB0
    op("OR B", 4),           op("OR C", 4),           op("OR D", 4),           op("OR E", 4),
    op("OR H", 4),           op("OR L", 4),           op("OR (HL)", 8),        op("OR A", 4),
    op("CP B", 4),           op("CP C", 4),           op("CP D", 4),           op("CP E", 4),
    op("CP H", 4),           op("CP L", 4),           op("CP (HL)", 8),        op("CP A", 4),
    // 0xC0
    op("RET NZ", 8),         op("POP BC", 12),        op("JP NZ, a16", 12),    op("JP a16", 16),
    op("CALL NZ, a16", 12),  op("PUSH BC", 16),       op("ADD A, d8", 8),      op("RST 00H", 16),
    op("RET Z", 8),          op("RET", 16),           op("JP Z, a16", 12),     op("PREFIX CB", 4),
    op("CALL Z, a16", 12),   op("CALL a16", 24),      op("ADC A, d8", 8),      op("RST 08H", 16),
    // 0xD0
    op("RET NC", 8),         op("POP DE", 12),        op("JP NC, a16", 12),    None,
    op("CALL NC, a16", 12),  op("PUSH DE", 16),       op("SUB d8", 8),         op("RST 10H", 16),
    op("RET C", 8),          op("RETI", 16),          op("JP C, a16", 12),     None,
    op("CALL C, a16", 12),   None,                    op("SBC A, d8", 8),      op("RST 18H", 16),
    // 0xE0
    op("LDH (a8), A", 12),   op("POP HL", 12),        op("LD (C), A", 8),      None,
    None,                    op("PUSH HL", 16),       op("AND d8", 8),         op("RST 20H", 16),
    op("ADD SP, r8", 16),    op("JP (HL)", 4),        op("LD (a16), A", 16),   None,
    None,                    None,                    op("XOR d8", 8),         op("RST 28H", 16),
    // 0xF0
    op("LDH A, (a8)", 12),   op("POP AF", 12),        op("LD A, (C)", 8),      op("DI", 4),
    None,                    op("PUSH AF", 16),       op("OR d8", 8),          op("RST 30H", 16),
    op("LD HL, SP+r8", 12),  op("LD SP, HL", 8),      op("LD A, (a16)", 16),   op("EI", 4),
    None,                    None,                    op("CP d8", 8),          op("RST 38H", 16),
];

/// CB-prefixed opcode table. Fully populated; every slot is a legal
/// rotate/shift/bit operation.
#[rustfmt::skip]
pub(super) static PREFIXED: [OpcodeInfo; 256] = [
    // 0x00: RLC
    cb("RLC B", 8),      cb("RLC C", 8),      cb("RLC D", 8),      cb("RLC E", 8),
    cb("RLC H", 8),      cb("RLC L", 8),      cb("RLC (HL)", 16),  cb("RLC A", 8),
    cb("RRC B", 8),      cb("RRC C", 8),      cb("RRC D", 8),      cb("RRC E", 8),
    cb("RRC H", 8),      cb("RRC L", 8),      cb("RRC (HL)", 16),  cb("RRC A", 8),
    // 0x10: RL
    cb("RL B", 8),       cb("RL C", 8),       cb("RL D", 8),       cb("RL E", 8),
    cb("RL H", 8),       cb("RL L", 8),       cb("RL (HL)", 16),   cb("RL A", 8),
    cb("RR B", 8),       cb("RR C", 8),       cb("RR D", 8),       cb("RR E", 8),
    cb("RR H", 8),       cb("RR L", 8),       cb("RR (HL)", 16),   cb("RR A", 8),
    // 0x20: SLA
    cb("SLA B", 8),      cb("SLA C", 8),      cb("SLA D", 8),      cb("SLA E", 8),
    cb("SLA H", 8),      cb("SLA L", 8),      cb("SLA (HL)", 16),  cb("SLA A", 8),
    cb("SRA B", 8),      cb("SRA C", 8),      cb("SRA D", 8),      cb("SRA E", 8),
    cb("SRA H", 8),      cb("SRA L", 8),      cb("SRA (HL)", 16),  cb("SRA A", 8),
    // 0x30: SWAP
    cb("SWAP B", 8),     cb("SWAP C", 8),     cb("SWAP D", 8),     cb("SWAP E", 8),
    cb("SWAP H", 8),     cb("SWAP L", 8),     cb("SWAP (HL)", 16), cb("SWAP A", 8),
    cb("SRL B", 8),      cb("SRL C", 8),      cb("SRL D", 8),      cb("SRL E", 8),
    cb("SRL H", 8),      cb("SRL L", 8),      cb("SRL (HL)", 16),  cb("SRL A", 8),
    // 0x40: BIT 0/1
    cb("BIT 0, B", 8),   cb("BIT 0, C", 8),   cb("BIT 0, D", 8),   cb("BIT 0, E", 8),
    cb("BIT 0, H", 8),   cb("BIT 0, L", 8),   cb("BIT 0, (HL)", 12), cb("BIT 0, A", 8),
    cb("BIT 1, B", 8),   cb("BIT 1, C", 8),   cb("BIT 1, D", 8),   cb("BIT 1, E", 8),
    cb("BIT 1, H", 8),   cb("BIT 1, L", 8),   cb("BIT 1, (HL)", 12), cb("BIT 1, A", 8),
    // 0x50: BIT 2/3
    cb("BIT 2, B", 8),   cb("BIT 2, C", 8),   cb("BIT 2, D", 8),   cb("BIT 2, E", 8),
    cb("BIT 2, H", 8),   cb("BIT 2, L", 8),   cb("BIT 2, (HL)", 12), cb("BIT 2, A", 8),
    cb("BIT 3, B", 8),   cb("BIT 3, C", 8),   cb("BIT 3, D", 8),   cb("BIT 3, E", 8),
    cb("BIT 3, H", 8),   cb("BIT 3, L", 8),   cb("BIT 3, (HL)", 12), cb("BIT 3, A", 8),
    // 0x60: BIT 4/5
    cb("BIT 4, B", 8),   cb("BIT 4, C", 8),   cb("BIT 4, D", 8),   cb("BIT 4, E", 8),
    cb("BIT 4, H", 8),   cb("BIT 4, L", 8),   cb("BIT 4, (HL)", 12), cb("BIT 4, A", 8),
    cb("BIT 5, B", 8),   cb("BIT 5, C", 8),   cb("BIT 5, D", 8),   cb("BIT 5, E", 8),
    cb("BIT 5, H", 8),   cb("BIT 5, L", 8),   cb("BIT 5, (HL)", 12), cb("BIT 5, A", 8),
    // 0x70: BIT 6/7
    cb("BIT 6, B", 8),   cb("BIT 6, C", 8),   cb("BIT 6, D", 8),   cb("BIT 6, E", 8),
    cb("BIT 6, H", 8),   cb("BIT 6, L", 8),   cb("BIT 6, (HL)", 12), cb("BIT 6, A", 8),
    cb("BIT 7, B", 8),   cb("BIT 7, C", 8),   cb("BIT 7, D", 8),   cb("BIT 7, E", 8),
    cb("BIT 7, H", 8),   cb("BIT 7, L", 8),   cb("BIT 7, (HL)", 12), cb("BIT 7, A", 8),
    // 0x80: RES 0/1
    cb("RES 0, B", 8),   cb("RES 0, C", 8),   cb("RES 0, D", 8),   cb("RES 0, E", 8),
    cb("RES 0, H", 8),   cb("RES 0, L", 8),   cb("RES 0, (HL)", 16), cb("RES 0, A", 8),
    cb("RES 1, B", 8),   cb("RES 1, C", 8),   cb("RES 1, D", 8),   cb("RES 1, E", 8),
    cb("RES 1, H", 8),   cb("RES 1, L", 8),   cb("RES 1, (HL)", 16), cb("RES 1, A", 8),
    // 0x90: RES 2/3
    cb("RES 2, B", 8),   cb("RES 2, C", 8),   cb("RES 2, D", 8),   cb("RES 2, E", 8),
    cb("RES 2, H", 8),   cb("RES 2, L", 8),   cb("RES 2, (HL)", 16), cb("RES 2, A", 8),
    cb("RES 3, B", 8),   cb("RES 3, C", 8),   cb("RES 3, D", 8),   cb("RES 3, E", 8),
    cb("RES 3, H", 8),   cb("RES 3, L", 8),   cb("RES 3, (HL)", 16), cb("RES 3, A", 8),
    // 0xA0: RES 4/5
    cb("RES 4, B", 8),   cb("RES 4, C", 8),   cb("RES 4, D", 8),   cb("RES 4, E", 8),
    cb("RES 4, H", 8),   cb("RES 4, L", 8),   cb("RES 4, (HL)", 16), cb("RES 4, A", 8),
    cb("RES 5, B", 8),   cb("RES 5, C", 8),   cb("RES 5, D", 8),   cb("RES 5, E", 8),
    cb("RES 5, H", 8),   cb("RES 5, L", 8),   cb("RES 5, (HL)", 16), cb("RES 5, A", 8),
    // 0xB0: RES 6/7
    cb("RES 6, B", 8),   cb("RES 6, C", 8),   cb("RES 6, D", 8),   cb("RES 6, E", 8),
    cb("RES 6, H", 8),   cb("RES 6, L", 8),   cb("RES 6, (HL)", 16), cb("RES 6, A", 8),
    cb("RES 7, B", 8),   cb("RES 7, C", 8),   cb("RES 7, D", 8),   cb("RES 7, E", 8),
    cb("RES 7, H", 8),   cb("RES 7, L", 8),   cb("RES 7, (HL)", 16), cb("RES 7, A", 8),
    // 0xC0: SET 0/1
    cb("SET 0, B", 8),   cb("SET 0, C", 8),   cb("SET 0, D", 8),   cb("SET 0, E", 8),
    cb("SET 0, H", 8),   cb("SET 0, L", 8),   cb("SET 0, (HL)", 16), cb("SET 0, A", 8),
    cb("SET 1, B", 8),   cb("SET 1, C", 8),   cb("SET 1, D", 8),   cb("SET 1, E", 8),
    cb("SET 1, H", 8),   cb("SET 1, L", 8),   cb("SET 1, (HL)", 16), cb("SET 1, A", 8),
    // 0xD0: SET 2/3
    cb("SET 2, B", 8),   cb("SET 2, C", 8),   cb("SET 2, D", 8),   cb("SET 2, E", 8),
    cb("SET 2, H", 8),   cb("SET 2, L", 8),   cb("SET 2, (HL)", 16), cb("SET 2, A", 8),
    cb("SET 3, B", 8),   cb("SET 3, C", 8),   cb("SET 3, D", 8),   cb("SET 3, E", 8),
    cb("SET 3, H", 8),   cb("SET 3, L", 8),   cb("SET 3, (HL)", 16), cb("SET 3, A", 8),
    // 0xE0: SET 4/5
    cb("SET 4, B", 8),   cb("SET 4, C", 8),   cb("SET 4, D", 8),   cb("SET 4, E", 8),
    cb("SET 4, H", 8),   cb("SET 4, L", 8),   cb("SET 4, (HL)", 16), cb("SET 4, A", 8),
    cb("SET 5, B", 8),   cb("SET 5, C", 8),   cb("SET 5, D", 8),   cb("SET 5, E", 8),
    cb("SET 5, H", 8),   cb("SET 5, L", 8),   cb("SET 5, (HL)", 16), cb("SET 5, A", 8),
    // 0xF0: SET 6/7
    cb("SET 6, B", 8),   cb("SET 6, C", 8),   cb("SET 6, D", 8),   cb("SET 6, E", 8),
    cb("SET 6, H", 8),   cb("SET 6, L", 8),   cb("SET 6, (HL)", 16), cb("SET 6, A", 8),
    cb("SET 7, B", 8),   cb("SET 7, C", 8),   cb("SET 7, D", 8),   cb("SET 7, E", 8),
    cb("SET 7, H", 8),   cb("SET 7, L", 8),   cb("SET 7, (HL)", 16), cb("SET 7, A", 8),
];

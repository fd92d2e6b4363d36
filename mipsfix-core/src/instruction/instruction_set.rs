use crate::instruction::category::Category;
use crate::instruction::information::InstructionInfo;

/// The hazard-relevant subset of the MIPS I instruction set. Not every
/// mnemonic the old compiler could emit is listed here — an unrecognized
/// mnemonic is handled conservatively by the classifier (see `classify::line`),
/// never by adding a speculative row here.
pub static INSTRUCTION_SET: &[InstructionInfo] = &[
    // Loads: rt is the def, the memory operand carries the base register.
    InstructionInfo::new("lb", Category::Load).with_def(0).with_width(1),
    InstructionInfo::new("lbu", Category::Load).with_def(0).with_width(1),
    InstructionInfo::new("lh", Category::Load).with_def(0).with_width(2),
    InstructionInfo::new("lhu", Category::Load).with_def(0).with_width(2),
    InstructionInfo::new("lw", Category::Load).with_def(0).with_width(4),
    InstructionInfo::new("lwl", Category::Load).with_def(0).with_width(4),
    InstructionInfo::new("lwr", Category::Load).with_def(0).with_width(4),
    InstructionInfo::new("lwc1", Category::Load).with_def(0).with_width(4),
    InstructionInfo::new("ldc1", Category::Load).with_def(0).with_width(8),
    InstructionInfo::new("l.s", Category::Load).with_def(0).with_width(4),
    InstructionInfo::new("l.d", Category::Load).with_def(0).with_width(8),
    // Stores: no GPR def, rt is a plain use of the table's blanket "uses" set
    // but is excluded from hazard-rule consideration (see hazard::window).
    InstructionInfo::new("sb", Category::Store).with_width(1),
    InstructionInfo::new("sh", Category::Store).with_width(2),
    InstructionInfo::new("sw", Category::Store).with_width(4),
    InstructionInfo::new("swl", Category::Store).with_width(4),
    InstructionInfo::new("swr", Category::Store).with_width(4),
    InstructionInfo::new("swc1", Category::Store).with_width(4),
    InstructionInfo::new("sdc1", Category::Store).with_width(8),
    InstructionInfo::new("s.s", Category::Store).with_width(4),
    InstructionInfo::new("s.d", Category::Store).with_width(8),
    // Multiply/divide producers. div/divu's pseudo three-operand form is
    // intercepted by the rewriter before reaching this table (see
    // rewrite::expand); only the real two-operand (or $zero-rd) form is
    // classified here.
    InstructionInfo::new("mult", Category::MultDivProducer),
    InstructionInfo::new("multu", Category::MultDivProducer),
    InstructionInfo::new("div", Category::MultDivProducer),
    InstructionInfo::new("divu", Category::MultDivProducer),
    // hi/lo readers.
    InstructionInfo::new("mflo", Category::MfloMfhi).with_def(0),
    InstructionInfo::new("mfhi", Category::MfloMfhi).with_def(0),
    // Branches and jumps. R6 clears the hazard window after these regardless
    // of what they define, so def tracking is unnecessary here.
    InstructionInfo::new("b", Category::BranchJump),
    InstructionInfo::new("beq", Category::BranchJump),
    InstructionInfo::new("bne", Category::BranchJump),
    InstructionInfo::new("beqz", Category::BranchJump),
    InstructionInfo::new("bnez", Category::BranchJump),
    InstructionInfo::new("bgez", Category::BranchJump),
    InstructionInfo::new("bgezal", Category::BranchJump),
    InstructionInfo::new("bgtz", Category::BranchJump),
    InstructionInfo::new("blez", Category::BranchJump),
    InstructionInfo::new("bltz", Category::BranchJump),
    InstructionInfo::new("bltzal", Category::BranchJump),
    InstructionInfo::new("bc1t", Category::BranchJump),
    InstructionInfo::new("bc1f", Category::BranchJump),
    InstructionInfo::new("j", Category::BranchJump),
    InstructionInfo::new("jal", Category::BranchJump),
    InstructionInfo::new("jr", Category::BranchJump),
    InstructionInfo::new("jalr", Category::BranchJump),
    // Ordinary ALU/move instructions: operand 0 is the def, every operand
    // (including operand 0, harmlessly) contributes to the blanket uses set.
    InstructionInfo::new("add", Category::Other).with_def(0),
    InstructionInfo::new("addu", Category::Other).with_def(0),
    InstructionInfo::new("addi", Category::Other).with_def(0),
    InstructionInfo::new("addiu", Category::Other).with_def(0),
    InstructionInfo::new("sub", Category::Other).with_def(0),
    InstructionInfo::new("subu", Category::Other).with_def(0),
    InstructionInfo::new("and", Category::Other).with_def(0),
    InstructionInfo::new("andi", Category::Other).with_def(0),
    InstructionInfo::new("or", Category::Other).with_def(0),
    InstructionInfo::new("ori", Category::Other).with_def(0),
    InstructionInfo::new("xor", Category::Other).with_def(0),
    InstructionInfo::new("xori", Category::Other).with_def(0),
    InstructionInfo::new("nor", Category::Other).with_def(0),
    InstructionInfo::new("slt", Category::Other).with_def(0),
    InstructionInfo::new("slti", Category::Other).with_def(0),
    InstructionInfo::new("sltu", Category::Other).with_def(0),
    InstructionInfo::new("sltiu", Category::Other).with_def(0),
    InstructionInfo::new("sll", Category::Other).with_def(0),
    InstructionInfo::new("srl", Category::Other).with_def(0),
    InstructionInfo::new("sra", Category::Other).with_def(0),
    InstructionInfo::new("sllv", Category::Other).with_def(0),
    InstructionInfo::new("srlv", Category::Other).with_def(0),
    InstructionInfo::new("srav", Category::Other).with_def(0),
    InstructionInfo::new("lui", Category::Other).with_def(0),
    InstructionInfo::new("move", Category::Other).with_def(0),
    InstructionInfo::new("mfc0", Category::Other).with_def(0),
    InstructionInfo::new("mfc1", Category::Other).with_def(0),
    InstructionInfo::new("mtc0", Category::Other),
    InstructionInfo::new("mtc1", Category::Other),
    InstructionInfo::new("ctc2", Category::Other),
    InstructionInfo::new("cfc2", Category::Other).with_def(0),
    InstructionInfo::new("nop", Category::Other),
    InstructionInfo::new("syscall", Category::Other),
    InstructionInfo::new("break", Category::Other),
];

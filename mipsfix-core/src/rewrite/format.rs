use crate::classify::InstructionRecord;

/// Canonical emitted form: a single tab between mnemonic and operands,
/// operands joined by commas with no surrounding spaces (§3).
pub fn format_instruction(record: &InstructionRecord) -> String {
    if record.operands.is_empty() {
        format!("\t{}", record.mnemonic)
    } else {
        format!("\t{}\t{}", record.mnemonic, record.operands.join(","))
    }
}

pub const NOP_LINE: &str = "\tnop";

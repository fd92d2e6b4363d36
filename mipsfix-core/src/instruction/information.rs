use crate::instruction::category::Category;

/// Static per-mnemonic capability record. The assembler's own instruction
/// table (`name-core`'s `InstructionInformation`) carries the bit-level
/// encoding; ours only needs what the hazard analyzer cares about.
#[derive(Debug, Clone, Copy)]
pub struct InstructionInfo {
    pub mnemonic: &'static str,
    pub category: Category,
    /// Index of the operand holding the register this instruction writes,
    /// if any. `None` for instructions that never write a GPR (stores,
    /// branches, mult/div producers).
    pub def_operand: Option<usize>,
    /// Width in bytes, for load/store categories only.
    pub load_width: Option<u8>,
}

impl InstructionInfo {
    pub const fn new(mnemonic: &'static str, category: Category) -> Self {
        InstructionInfo {
            mnemonic,
            category,
            def_operand: None,
            load_width: None,
        }
    }

    pub const fn with_def(mut self, operand: usize) -> Self {
        self.def_operand = Some(operand);
        self
    }

    pub const fn with_width(mut self, width: u8) -> Self {
        self.load_width = Some(width);
        self
    }
}

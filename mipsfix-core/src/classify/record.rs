use std::borrow::Cow;
use std::collections::BTreeSet;

use crate::classify::operand::MemoryOperand;
use crate::constants::{canonical_register, ZERO_REGISTER};
use crate::instruction::{Category, InstructionInfo};

/// A single classified instruction, the unit the hazard window reasons
/// about. Synthesized instructions (the `mflo rd` tail of a `div` expansion,
/// a filler `nop`) are ordinary records like any other.
#[derive(Debug, Clone)]
pub struct InstructionRecord {
    pub mnemonic: String,
    pub operands: Vec<String>,
    pub defs: BTreeSet<String>,
    pub uses: BTreeSet<String>,
    pub category: Category,
    pub load_width: Option<u8>,
    /// The store's value/rt register, when `category == Store`. Excluded
    /// from `hazard_uses` (see R1/R2 in `hazard::window`) but still present
    /// in `uses` and thus still visible to R3/R4.
    pub store_value_register: Option<String>,
    /// The symbolic memory operand, when `category` is `Load`/`Store` and
    /// the last operand isn't a plain numeric offset. `rewrite::expand`
    /// consumes this to decide `$gp`-relative promotion or `$at` expansion;
    /// `classify::line` never resolves that decision itself.
    pub memory: Option<MemoryOperand>,
    /// Set only by `filler_nop`. A literal `nop` mnemonic from the input
    /// classifies to an ordinary record with this left `false` — `mnemonic`
    /// alone can't distinguish the two, since `nop` is itself a recognized
    /// instruction (see `instruction_set.rs`) and R4 clause 2 must still
    /// treat a real input `nop` as a genuine separating instruction.
    synthesized_filler: bool,
}

impl InstructionRecord {
    /// A synthesized `nop`: defines and uses nothing, never itself hazardous.
    pub fn filler_nop() -> Self {
        InstructionRecord {
            mnemonic: "nop".to_string(),
            operands: Vec::new(),
            defs: BTreeSet::new(),
            uses: BTreeSet::new(),
            category: Category::Other,
            load_width: None,
            store_value_register: None,
            memory: None,
            synthesized_filler: true,
        }
    }

    /// Whether this record was synthesized by the rewriter as hazard filler,
    /// as opposed to a real `nop` instruction present in the input.
    pub fn is_filler_nop(&self) -> bool {
        self.synthesized_filler
    }

    /// Builds a record from a looked-up static model plus the raw operand
    /// tokens, resolving def/use sets from register tokens found in each
    /// operand.
    pub fn from_model(info: &InstructionInfo, operands: Vec<String>) -> Self {
        let mut uses = BTreeSet::new();
        let mut defs = BTreeSet::new();
        let mut store_value_register = None;

        for (idx, operand) in operands.iter().enumerate() {
            for raw in super::operand::extract_registers(operand) {
                let Some(reg) = canonical_register(&raw) else {
                    continue;
                };
                // Every register mentioned is a "use" for the blanket set,
                // including a def operand's own register (harmless: R3/R4
                // never need to distinguish a self-referencing operand).
                uses.insert(reg.clone());
                if Some(idx) == info.def_operand && reg != ZERO_REGISTER {
                    defs.insert(reg);
                }
            }
        }

        if info.category == Category::Store {
            store_value_register = operands.first().and_then(|op| {
                super::operand::extract_registers(op)
                    .into_iter()
                    .next()
                    .and_then(|r| canonical_register(&r))
            });
        }

        InstructionRecord {
            mnemonic: info.mnemonic.to_string(),
            operands,
            defs,
            uses,
            category: info.category,
            load_width: info.load_width,
            store_value_register,
            memory: None,
            synthesized_filler: false,
        }
    }

    /// A record for a mnemonic the model table does not recognize: emitted
    /// verbatim, never hazardous in either direction.
    pub fn unrecognized(mnemonic: String, operands: Vec<String>) -> Self {
        InstructionRecord {
            mnemonic,
            operands,
            defs: BTreeSet::new(),
            uses: BTreeSet::new(),
            category: Category::Other,
            load_width: None,
            store_value_register: None,
            memory: None,
            synthesized_filler: false,
        }
    }

    /// Promotes a plain `Load`/`Store` record to `GpRelative`, used when a
    /// symbolic memory operand resolves through `$gp` (see §4.2).
    pub fn into_gp_relative(mut self) -> Self {
        self.category = Category::GpRelative;
        self
    }

    /// The register set R1/R2 check against `prev.defs`. Narrower than
    /// `uses` for a plain `Store`: the value being stored does not itself
    /// collide with the load that produced the *address* register, only the
    /// address computation does. `GpRelative` stores keep their full `uses`
    /// because R2 must see the value register too (scenario 5 of §8).
    pub fn hazard_uses(&self) -> Cow<'_, BTreeSet<String>> {
        if self.category == Category::Store {
            if let Some(value_reg) = &self.store_value_register {
                let mut narrowed = self.uses.clone();
                narrowed.remove(value_reg);
                return Cow::Owned(narrowed);
            }
        }
        Cow::Borrowed(&self.uses)
    }
}

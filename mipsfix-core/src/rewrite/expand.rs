use crate::classify::InstructionRecord;
use crate::constants::{canonical_register, ZERO_REGISTER};
use crate::instruction::{Category, INSTRUCTION_TABLE};
use crate::rewrite::format::format_instruction;

/// A rewritten instruction's real output: the text lines to emit (including
/// any `.set noat`/`.set at` bracketing) and the real (non-directive)
/// instruction records, in emission order, the hazard window should observe
/// afterward. Hazard checks for the *incoming* instruction are always run
/// against its pre-expansion classification before either expansion runs
/// (see `rewrite::rewriter`); nothing here re-checks hazards internally, by
/// construction an expansion never creates one (§4.2).
pub struct Expansion {
    pub lines: Vec<String>,
    pub records: Vec<InstructionRecord>,
}

impl Expansion {
    fn single(record: InstructionRecord) -> Self {
        let line = format_instruction(&record);
        Expansion {
            lines: vec![line],
            records: vec![record],
        }
    }
}

/// The three-operand `div`/`divu rd, rs, rt` pseudo-form, expanded to
/// `div $zero, rs, rt` + `mflo rd` (§4.2). Expanded unconditionally: the
/// source compiler only ever emits the pseudo-form when it wants the
/// original assembler's trap-free sequence, so there is no policy knob that
/// legitimately leaves it pseudo (see DESIGN.md).
pub fn expand_div(record: &InstructionRecord) -> Option<Expansion> {
    if !matches!(record.mnemonic.as_str(), "div" | "divu") || record.operands.len() != 3 {
        return None;
    }

    let rd = record.operands[0].clone();
    if canonical_register(&rd).as_deref() == Some(ZERO_REGISTER) {
        return None;
    }
    let rs = record.operands[1].clone();
    let rt = record.operands[2].clone();

    let div_info = INSTRUCTION_TABLE.get(record.mnemonic.as_str())?;
    let div_real = InstructionRecord::from_model(div_info, vec![ZERO_REGISTER.to_string(), rs, rt]);

    let mflo_info = INSTRUCTION_TABLE.get("mflo")?;
    let mflo_real = InstructionRecord::from_model(mflo_info, vec![rd]);

    let mut lines = Vec::with_capacity(2);
    lines.push(format_instruction(&div_real));
    lines.push(format_instruction(&mflo_real));

    Some(Expansion {
        lines,
        records: vec![div_real, mflo_real],
    })
}

/// Promotes a bare-symbol (no explicit base register) load/store to
/// `GpRelative` when `sdata_limit > 0` (§4.2). This is a category-only
/// change — operands and hence `uses`/`defs` are untouched — but it must
/// happen *before* the hazard window is consulted for this instruction:
/// `InstructionRecord::hazard_uses` narrows a plain `Store`'s use set by
/// excluding its value register, and a `GpRelative` store must NOT have
/// that narrowing applied (see DESIGN.md; this is what makes `sdata_limit`
/// observable in R1/R2 output, scenarios 4-6 of §8).
///
/// A symbol with an explicit base register is left exactly as classified:
/// it is always `$at`-expanded regardless of `sdata_limit`, and that
/// expansion rewrites the trailing operand in a way that would otherwise
/// hide the original base register from the hazard check.
pub fn resolve_memory_category(record: InstructionRecord, sdata_limit: u32) -> InstructionRecord {
    let should_promote = matches!(record.category, Category::Load | Category::Store)
        && sdata_limit > 0
        && record.memory.as_ref().is_some_and(|mem| mem.base.is_none());

    if should_promote {
        record.into_gp_relative()
    } else {
        record
    }
}

/// Resolves a load/store's symbolic memory operand, if any, into its final
/// output shape (§4.2). Category promotion (`$gp`-relative vs plain) must
/// already have happened via `resolve_memory_category` before this runs;
/// this function only decides whether an explicit base register requires
/// `$at` expansion.
pub fn expand_memory_operand(record: InstructionRecord) -> Expansion {
    let Some(mem) = record.memory.clone() else {
        return Expansion::single(record);
    };

    let Some(symbol) = mem.symbol.clone() else {
        return Expansion::single(record);
    };

    if let Some(base) = mem.base.clone() {
        let lui_info = INSTRUCTION_TABLE
            .get("lui")
            .expect("lui is always in the instruction table");
        let lui = InstructionRecord::from_model(
            lui_info,
            vec!["$at".to_string(), format!("%hi({symbol})")],
        );

        let addu_info = INSTRUCTION_TABLE
            .get("addu")
            .expect("addu is always in the instruction table");
        let addu = InstructionRecord::from_model(
            addu_info,
            vec!["$at".to_string(), "$at".to_string(), base],
        );

        let mut final_operands = record.operands.clone();
        if let Some(last) = final_operands.last_mut() {
            *last = format!("%lo({symbol})($at)");
        }
        let final_info = INSTRUCTION_TABLE
            .get(record.mnemonic.as_str())
            .expect("record.category is Load/Store, so its mnemonic is in the table");
        let final_record = InstructionRecord::from_model(final_info, final_operands);

        let mut lines = Vec::with_capacity(5);
        lines.push("\t.set\tnoat".to_string());
        lines.push(format_instruction(&lui));
        lines.push(format_instruction(&addu));
        lines.push(format_instruction(&final_record));
        lines.push("\t.set\tat".to_string());

        Expansion {
            lines,
            records: vec![lui, addu, final_record],
        }
    } else {
        Expansion::single(record)
    }
}

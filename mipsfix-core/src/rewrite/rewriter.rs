use std::collections::BTreeSet;

use crate::classify::operand::extract_registers;
use crate::classify::{classify_line, Classification, InstructionRecord};
use crate::config::ProcessorConfig;
use crate::constants::canonical_register;
use crate::error::ProcessorResult;
use crate::hazard::HazardWindow;
use crate::instruction::Category;
use crate::rewrite::expand::{expand_div, expand_memory_operand, resolve_memory_category};
use crate::rewrite::format::NOP_LINE;

/// Runs the full single-pass hazard analysis and pseudo-op expansion over an
/// owned sequence of already-split input lines (§5: synchronous, no shared
/// state across calls).
pub fn process_lines(lines: &[String], cfg: &ProcessorConfig) -> ProcessorResult<Vec<String>> {
    let mut output = Vec::with_capacity(lines.len());
    let mut window = HazardWindow::new();
    let mut in_app_block = false;
    let mut index = 0;

    while index < lines.len() {
        let line = &lines[index];

        if in_app_block {
            output.push(line.clone());
            if line.contains("#NO_APP") {
                in_app_block = false;
                window.clear();
            }
            index += 1;
            continue;
        }

        match classify_line(line) {
            Classification::BlankOrComment | Classification::Directive => {
                output.push(line.clone());
            }
            Classification::NopPlaceholder => {}
            Classification::Label { label_text, tail } => {
                output.push(label_text);
                window.clear();
                if let Some(tail) = tail {
                    emit_line(&tail, cfg, &mut window, &mut output);
                }
            }
            Classification::AppEnter => {
                let body = app_block_body(&lines[index + 1..]);
                let body_regs = scan_registers(body);
                if let Some(prev) = window.prev() {
                    if prev.category == Category::Load && intersects(&body_regs, &prev.defs) {
                        output.push(NOP_LINE.to_string());
                    }
                }
                output.push(line.clone());
                in_app_block = true;
            }
            Classification::AppExit => {
                // Reached only if `#NO_APP` appears with no matching
                // `#APP`; still a window boundary per R6's spirit.
                output.push(line.clone());
                window.clear();
            }
            Classification::Instruction(record) => {
                emit_instruction(record, cfg, &mut window, &mut output);
            }
        }

        index += 1;
    }

    Ok(output)
}

/// Classifies and emits a single already-isolated line of text (the tail of
/// a `label: instruction` pair). Only the instruction case does meaningful
/// work; directives/comments have no raw line left worth reproducing beyond
/// their own text, which callers pass in as `text`.
fn emit_line(text: &str, cfg: &ProcessorConfig, window: &mut HazardWindow, output: &mut Vec<String>) {
    match classify_line(text) {
        Classification::Instruction(record) => emit_instruction(record, cfg, window, output),
        _ => output.push(text.to_string()),
    }
}

fn emit_instruction(
    record: InstructionRecord,
    cfg: &ProcessorConfig,
    window: &mut HazardWindow,
    output: &mut Vec<String>,
) {
    // `$gp`-relative promotion must land before the hazard check: it only
    // changes `category`, but `hazard_uses` keys its value-register
    // narrowing off `category == Store` (see `resolve_memory_category`).
    let record = resolve_memory_category(record, cfg.sdata_limit);
    let category = record.category;

    // Beyond that promotion, hazard checks run against the pre-expansion
    // classification: a `div`/`$at` expansion changes how many lines and
    // real instructions an input line becomes, not its `uses`/`defs`/
    // touches-hi/lo shape.
    let nops = window.nops_before(&record);
    for _ in 0..nops {
        output.push(NOP_LINE.to_string());
    }

    let expansion = expand_div(&record).unwrap_or_else(|| {
        if matches!(category, Category::Load | Category::Store | Category::GpRelative) {
            expand_memory_operand(record)
        } else {
            crate::rewrite::expand::Expansion {
                lines: vec![crate::rewrite::format::format_instruction(&record)],
                records: vec![record],
            }
        }
    });

    output.extend(expansion.lines);

    if category == Category::BranchJump {
        // R6: branches/jumps invalidate the lookback rather than updating it.
        window.clear();
    } else {
        for real in expansion.records {
            window.push(real);
        }
    }
}

fn app_block_body(rest: &[String]) -> &[String] {
    let end = rest
        .iter()
        .position(|line| line.contains("#NO_APP"))
        .unwrap_or(rest.len());
    &rest[..end]
}

fn scan_registers(body: &[String]) -> BTreeSet<String> {
    let mut regs = BTreeSet::new();
    for line in body {
        for raw in extract_registers(line) {
            if let Some(reg) = canonical_register(&raw) {
                regs.insert(reg);
            }
        }
    }
    regs
}

fn intersects(a: &BTreeSet<String>, b: &BTreeSet<String>) -> bool {
    a.intersection(b).next().is_some()
}

use crate::classify::operand::parse_memory_operand;
use crate::classify::record::InstructionRecord;
use crate::instruction::{Category, INSTRUCTION_TABLE};

/// What a single input line turned out to be. Instructions carry the derived
/// record the hazard window and expander consume; everything else is
/// emitted untouched (modulo whitespace normalization at print time).
#[derive(Debug, Clone)]
pub enum Classification {
    /// Blank line, or a `#`-comment that isn't `#APP`/`#NO_APP`.
    BlankOrComment,
    /// A placeholder `#nop` the source compiler emits; discarded unconditionally.
    NopPlaceholder,
    /// `.directive ...`
    Directive,
    /// `label:` possibly followed by more content on the same line. The
    /// label's own text (up to and including the colon) is reproduced
    /// verbatim by the caller; `tail` is the unclassified remainder, for the
    /// caller to classify and emit as if it were its own line.
    Label { label_text: String, tail: Option<String> },
    AppEnter,
    AppExit,
    Instruction(InstructionRecord),
}

/// Classifies one already-trimmed line. The memory operand of a load/store
/// instruction (if symbolic) is preserved on `InstructionRecord::memory` for
/// `rewrite::expand` to act on; this function itself never consults
/// `sdata_limit`.
pub fn classify_line(line: &str) -> Classification {
    let trimmed = line.trim();

    if trimmed.is_empty() || (trimmed.starts_with('#') && !is_app_marker(trimmed)) {
        if trimmed == "#nop" {
            return Classification::NopPlaceholder;
        }
        return Classification::BlankOrComment;
    }

    if trimmed.contains("#APP") {
        return Classification::AppEnter;
    }
    if trimmed.contains("#NO_APP") {
        return Classification::AppExit;
    }

    if trimmed.starts_with('.') {
        return Classification::Directive;
    }

    if let Some(colon) = find_label_colon(trimmed) {
        let label_text = trimmed[..=colon].to_string();
        let tail = trimmed[colon + 1..].trim();
        let tail = if tail.is_empty() {
            None
        } else {
            Some(tail.to_string())
        };
        return Classification::Label { label_text, tail };
    }

    classify_instruction(trimmed)
}

/// A label is a leading identifier followed by `:`, with no preceding `$` or
/// whitespace indicating a register or directive operand. Memory operands
/// like `0($5)` never contain a bare leading colon, so the first `:` found
/// before any whitespace is the label delimiter.
fn find_label_colon(trimmed: &str) -> Option<usize> {
    let first_word_end = trimmed
        .find(|c: char| c.is_whitespace())
        .unwrap_or(trimmed.len());
    trimmed[..first_word_end].find(':')
}

fn is_app_marker(trimmed: &str) -> bool {
    trimmed.contains("#APP") || trimmed.contains("#NO_APP")
}

fn classify_instruction(trimmed: &str) -> Classification {
    let mut parts = trimmed.splitn(2, char::is_whitespace);
    let mnemonic_raw = parts.next().unwrap_or_default();
    let mnemonic = mnemonic_raw.to_ascii_lowercase();
    let rest = parts.next().unwrap_or("").trim();

    let operands: Vec<String> = if rest.is_empty() {
        Vec::new()
    } else {
        split_operands(rest)
    };

    let record = match INSTRUCTION_TABLE.get(mnemonic.as_str()) {
        Some(info) => InstructionRecord::from_model(info, operands),
        None => InstructionRecord::unrecognized(mnemonic, operands),
    };

    Classification::Instruction(attach_memory_operand(record))
}

/// Operands are comma-separated but a memory operand's parens can themselves
/// contain no commas in this dialect, so a naive split on `,` is safe.
fn split_operands(rest: &str) -> Vec<String> {
    rest.split(',').map(|s| s.trim().to_string()).collect()
}

fn attach_memory_operand(mut record: InstructionRecord) -> InstructionRecord {
    if matches!(record.category, Category::Load | Category::Store) {
        if let Some(last) = record.operands.last() {
            let mem = parse_memory_operand(last);
            if mem.is_symbolic() {
                record.memory = Some(mem);
            }
        }
    }
    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn instr(line: &str) -> InstructionRecord {
        match classify_line(line) {
            Classification::Instruction(r) => r,
            other => panic!("expected instruction, got {other:?}"),
        }
    }

    #[test]
    fn blank_and_comment_lines() {
        assert!(matches!(classify_line(""), Classification::BlankOrComment));
        assert!(matches!(
            classify_line("   # just a comment"),
            Classification::BlankOrComment
        ));
    }

    #[test]
    fn nop_placeholder_is_discarded() {
        assert!(matches!(
            classify_line("#nop"),
            Classification::NopPlaceholder
        ));
    }

    #[test]
    fn directive_line() {
        assert!(matches!(classify_line(".set noat"), Classification::Directive));
    }

    #[test]
    fn label_with_no_tail() {
        match classify_line("loop_start:") {
            Classification::Label { label_text, tail: None } => {
                assert_eq!(label_text, "loop_start:");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn label_with_instruction_tail() {
        match classify_line("loop_start: lw $3, 0($5)") {
            Classification::Label {
                tail: Some(tail), ..
            } => {
                assert!(matches!(classify_line(&tail), Classification::Instruction(_)));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn app_markers() {
        assert!(matches!(classify_line("#APP"), Classification::AppEnter));
        assert!(matches!(classify_line("#NO_APP"), Classification::AppExit));
    }

    #[test]
    fn instruction_with_symbolic_memory_operand_and_base() {
        let r = instr("lw $19,Cameras($2)");
        let mem = r.memory.expect("symbolic memory operand");
        assert_eq!(mem.base.as_deref(), Some("$2"));
        assert_eq!(mem.symbol.as_deref(), Some("Cameras"));
    }

    #[test]
    fn instruction_with_bare_symbol_has_no_base() {
        let r = instr("sw $2,UnkVar00");
        let mem = r.memory.expect("symbolic memory operand");
        assert!(mem.base.is_none());
    }

    #[test]
    fn plain_numeric_memory_operand_is_not_symbolic() {
        let r = instr("lw $3,0($5)");
        assert!(r.memory.is_none());
    }

    #[test]
    fn unrecognized_mnemonic_is_inert() {
        let r = instr("break.n $3");
        assert_eq!(r.category, Category::Other);
        assert!(r.defs.is_empty());
        assert!(r.uses.is_empty());
    }
}

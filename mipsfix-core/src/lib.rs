pub mod classify;
pub mod config;
pub mod constants;
pub mod error;
pub mod hazard;
pub mod instruction;
pub mod rewrite;

pub use config::ProcessorConfig;
pub use error::{ProcessorError, ProcessorResult};

/// Runs the hazard analyzer and pseudo-op expander over a full input
/// buffer, returning the rewritten text with a trailing newline (§6).
pub fn process(input: &str, cfg: &ProcessorConfig) -> ProcessorResult<String> {
    let lines: Vec<String> = input.lines().map(|s| s.to_string()).collect();
    let output = rewrite::process_lines(&lines, cfg)?;
    let mut text = output.join("\n");
    text.push('\n');
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn process_ends_with_trailing_newline() {
        let out = process("add $3,$4,$5", &ProcessorConfig::default()).unwrap();
        assert!(out.ends_with('\n'));
        assert_eq!(out, "\tadd\t$3,$4,$5\n");
    }
}

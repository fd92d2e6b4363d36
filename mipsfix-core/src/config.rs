/// Parameters that change the rewriter's output for otherwise identical
/// input. Mirrors the `-G<N>` / `--expand-div` surface the driver exposes.
#[derive(Debug, Clone, Copy)]
pub struct ProcessorConfig {
    /// Symbolic operands at or below this size are `$gp`-relative
    /// candidates. `0` disables small-data resolution entirely.
    pub sdata_limit: u32,
    /// Whether the three-operand `div rd, rs, rt` pseudo-form is expanded.
    /// The `$zero`-rd two-instruction sequence the source compiler actually
    /// emits is expanded unconditionally regardless of this flag (see
    /// DESIGN.md); this field exists for interface fidelity with the
    /// original driver's `--expand-div` flag and is read by callers that
    /// want to gate a broader `div` rewrite policy of their own.
    pub expand_div: bool,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        ProcessorConfig {
            sdata_limit: 0,
            expand_div: false,
        }
    }
}

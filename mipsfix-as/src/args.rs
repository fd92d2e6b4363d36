use clap::Parser;

use mipsfix_core::constants::DEFAULT_GNU_AS_PATH;

/// Command-line surface for the post-processor driver (§6). Flags this
/// crate understands are declared fields; everything else (`-G<N>`,
/// `-KPIC`, assembler-only flags, and the trailing input file path) lands
/// in `rest` for `sdata_limit`/`assembler_passthrough`/`input_file` to pick
/// apart.
#[derive(Debug, Parser)]
#[command(about = "Rewrites PSX-era MIPS assembly for a modern GNU assembler")]
pub struct Cli {
    #[arg(long, help = "Pipe the rewritten output into the real assembler")]
    pub run_assembler: bool,

    #[arg(long, default_value = DEFAULT_GNU_AS_PATH, help = "Path to the GNU MIPS assembler binary")]
    pub gnu_as_path: String,

    #[arg(long, help = "Suppress the leading .include \"macro.inc\" preamble")]
    pub no_macro_inc: bool,

    #[arg(long, help = "Expand three-operand div/divu pseudo-ops")]
    pub expand_div: bool,

    #[arg(long, help = "Do not insert -G0 into the assembler invocation")]
    pub dont_force_g0: bool,

    #[arg(long, help = "Fail rather than fall back to reading a file when stdin is empty")]
    pub force_stdin: bool,

    #[arg(long, help = "Emit diagnostic comments into the output stream")]
    pub verbose: bool,

    #[arg(allow_hyphen_values = true, trailing_var_arg = true)]
    pub rest: Vec<String>,
}

impl Cli {
    /// `-G<N>` sets the small-data threshold; a malformed or negative `-G`
    /// is treated as `0` (§8, driver-level properties).
    pub fn sdata_limit(&self) -> u32 {
        self.rest
            .iter()
            .find_map(|arg| arg.strip_prefix("-G"))
            .and_then(|digits| digits.parse().ok())
            .unwrap_or(0)
    }

    /// The last token in `rest` that isn't a flag, used as the stdin
    /// fallback file path.
    pub fn input_file(&self) -> Option<&str> {
        self.rest
            .iter()
            .rev()
            .map(String::as_str)
            .find(|arg| !arg.starts_with('-'))
    }

    /// Everything destined for the real assembler: `rest` minus `-KPIC`
    /// (silently stripped, §6), minus `-G<N>` (consumed by `sdata_limit`),
    /// and minus whichever token `input_file` claimed as the fallback path.
    pub fn assembler_passthrough(&self) -> Vec<String> {
        let file = self.input_file().map(str::to_string);
        self.rest
            .iter()
            .filter(|arg| arg.as_str() != "-KPIC")
            .filter(|arg| !arg.starts_with("-G"))
            .filter(|arg| Some(arg.as_str()) != file.as_deref())
            .cloned()
            .collect()
    }
}

const NUM_OF_REGISTERS: usize = 32; // Number of general purpose registers.

pub const REGISTERS: [&'static str; NUM_OF_REGISTERS] = [
    "$zero", "$at", "$v0", "$v1", "$a0", "$a1", "$a2", "$a3", "$t0", "$t1", "$t2", "$t3", "$t4",
    "$t5", "$t6", "$t7", "$s0", "$s1", "$s2", "$s3", "$s4", "$s5", "$s6", "$s7", "$t8", "$t9",
    "$k0", "$k1", "$gp", "$sp", "$fp", "$ra",
];

/// `$zero` never holds a live result; writes to it are never hazardous.
pub const ZERO_REGISTER: &str = "$zero";

/// Numeric aliases (`$0`..`$31`) resolve to the same register as their named form.
pub fn canonical_register(name: &str) -> Option<String> {
    if let Some(stripped) = name.strip_prefix('$') {
        if let Ok(n) = stripped.parse::<usize>() {
            return REGISTERS.get(n).map(|s| s.to_string());
        }
        if REGISTERS.contains(&name) || name == "$hi" || name == "$lo" {
            return Some(name.to_string());
        }
    }
    None
}

pub const DEFAULT_GNU_AS_PATH: &str = "mips-linux-gnu-as";
pub const MACRO_INC_PREAMBLE: &str = ".include \"macro.inc\"";

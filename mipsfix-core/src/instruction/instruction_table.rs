use std::collections::HashMap;
use std::sync::LazyLock;

use crate::instruction::information::InstructionInfo;
use crate::instruction::instruction_set::INSTRUCTION_SET;

/// Mnemonic lookup built once per process, mirroring how the reference
/// assembler builds its own `INSTRUCTION_TABLE`.
pub static INSTRUCTION_TABLE: LazyLock<HashMap<&'static str, &'static InstructionInfo>> =
    LazyLock::new(|| {
        let mut map = HashMap::new();

        for info in INSTRUCTION_SET.iter() {
            map.insert(info.mnemonic, info);
        }

        map
    });

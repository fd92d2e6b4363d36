use strum_macros::Display;

/// The hazard-relevant shape of an instruction. Mutually exclusive: a given
/// emitted record carries exactly one of these, chosen at classification time.
///
/// Whether a symbolic load/store needs `$at` expansion is a structural
/// decision made from `InstructionRecord::memory` (see `rewrite::expand`),
/// not a `Category` of its own — by the time a record reaches the hazard
/// window it has already settled into `Load`/`Store`/`GpRelative`.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Load,
    Store,
    GpRelative,
    MultDivProducer,
    MfloMfhi,
    BranchJump,
    Other,
}

impl Category {
    pub fn touches_hilo(self) -> bool {
        matches!(self, Category::MultDivProducer | Category::MfloMfhi)
    }
}

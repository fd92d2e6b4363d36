use crate::classify::InstructionRecord;
use crate::instruction::Category;

/// The two-slot lookback of real (non-filler) emitted instructions. Inserted
/// `nop`s never occupy a slot — they exist only in the output stream, never
/// in the hazard analysis that follows them.
#[derive(Debug, Default)]
pub struct HazardWindow {
    prev: Option<InstructionRecord>,
    prev2: Option<InstructionRecord>,
}

fn intersects(a: &std::collections::BTreeSet<String>, b: &std::collections::BTreeSet<String>) -> bool {
    a.intersection(b).next().is_some()
}

impl HazardWindow {
    pub fn new() -> Self {
        HazardWindow {
            prev: None,
            prev2: None,
        }
    }

    /// R6: labels, branches, and jumps invalidate the lookback entirely.
    pub fn clear(&mut self) {
        self.prev = None;
        self.prev2 = None;
    }

    pub fn prev(&self) -> Option<&InstructionRecord> {
        self.prev.as_ref()
    }

    /// R1-R4: how many `nop`s must precede `curr` given the current window.
    pub fn nops_before(&self, curr: &InstructionRecord) -> usize {
        let mut count = 0;

        if let Some(prev) = &self.prev {
            let curr_hazard_uses = curr.hazard_uses();

            // R1: load-use hazard.
            if prev.category == Category::Load && intersects(&curr_hazard_uses, &prev.defs) {
                count = count.max(1);
            }

            // R2: $gp-relative load-use hazard (same shape as R1, but
            // Category::GpRelative is disjoint from Category::Load).
            if prev.category == Category::GpRelative
                && !prev.defs.is_empty()
                && intersects(&curr_hazard_uses, &prev.defs)
            {
                count = count.max(1);
            }

            // R3: mflo/mfhi followed by its consumer. Uses curr's *full*
            // uses set, unlike R1/R2 — a store's value register counts here.
            if prev.category == Category::MfloMfhi && intersects(&curr.uses, &prev.defs) {
                count = count.max(1);
            }

            // R4 clause 1: producer directly followed by mflo/mfhi.
            if prev.category == Category::MultDivProducer && curr.category == Category::MfloMfhi {
                count = count.max(2);
            }
        }

        // R4 clause 2: a producer two slots back still needs separation,
        // additive on top of whatever R3 already contributed for this curr.
        if let (Some(prev2), Some(prev)) = (&self.prev2, &self.prev) {
            if prev2.category == Category::MultDivProducer
                && prev.category != Category::MultDivProducer
                && !prev.is_filler_nop()
                && curr.category.touches_hilo()
            {
                count += 1;
            }
        }

        count
    }

    /// After emitting `curr`, it becomes `prev` and the old `prev` becomes
    /// `prev2`. Never call this for a synthesized filler `nop`.
    pub fn push(&mut self, record: InstructionRecord) {
        debug_assert!(!record.is_filler_nop());
        self.prev2 = self.prev.take();
        self.prev = Some(record);
    }
}

use rayon::prelude::*;

use crate::{CleanResult, TicketCleaner};

impl TicketCleaner {
    /// Processes every input on the rayon pool; results keep input order.
    pub fn process_batch<S: AsRef<str> + Sync>(&self, raw_texts: &[S], with_score: bool) -> Vec<CleanResult> {
        tracing::debug!(inputs = raw_texts.len(), "parallel batch");
        raw_texts
            .par_iter()
            .map(|raw| self.process(raw.as_ref(), with_score))
            .collect()
    }
}

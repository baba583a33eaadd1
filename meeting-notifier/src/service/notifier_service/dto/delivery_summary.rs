use super::DeliveryOutcome;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryFailure {
    pub user_id: String,
    pub error: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeliverySummary {
    pub sent: usize,
    pub skipped: usize,
    pub failures: Vec<DeliveryFailure>,
}

impl DeliverySummary {
    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    pub fn total(&self) -> usize {
        self.sent + self.skipped + self.failed()
    }
}

impl FromIterator<DeliveryOutcome> for DeliverySummary {
    fn from_iter<I: IntoIterator<Item = DeliveryOutcome>>(outcomes: I) -> Self {
        let mut summary = Self::default();

        for outcome in outcomes {
            match outcome {
                DeliveryOutcome::Sent => summary.sent += 1,
                DeliveryOutcome::Skipped => summary.skipped += 1,
                DeliveryOutcome::Failed { user_id, error } => {
                    summary.failures.push(DeliveryFailure { user_id, error })
                }
            }
        }

        summary
    }
}

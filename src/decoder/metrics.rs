use crate::error::CnpError;
use crate::observability::labels::Labels;
use metrics::{counter, Counter};

const OUTCOME: &str = "outcome";
const REASON: &str = "reason";

pub struct DecoderMetrics {
    pub valid: Counter,
    pub invalid: Counter,
    labels: Labels,
}

impl DecoderMetrics {
    pub fn new(labels: &Labels) -> Self {
        DecoderMetrics {
            valid: counter!(
                "cnp.validations",
                labels.clone_with_labels(&[(OUTCOME, "valid")])
            ),
            invalid: counter!(
                "cnp.validations",
                labels.clone_with_labels(&[(OUTCOME, "invalid")])
            ),
            labels: labels.clone(),
        }
    }

    pub fn record<T>(&self, result: &Result<T, CnpError>) {
        match result {
            Ok(_) => self.valid.increment(1),
            Err(err) => {
                self.invalid.increment(1);
                // one series per CnpError variant
                counter!(
                    "cnp.rejections",
                    self.labels.clone_with_labels(&[(REASON, err.reason())])
                )
                .increment(1);
            }
        }
    }
}

impl Default for DecoderMetrics {
    fn default() -> Self {
        DecoderMetrics::new(&Labels::empty())
    }
}

pub mod metrics;

use crate::cnp::Cnp;
use crate::config::DecodeConfig;
use crate::decoder::metrics::DecoderMetrics;
use crate::observability::labels::Labels;
use crate::record::DecodedCnp;
use crate::validator::Validator;

/// Decodes candidates with a fixed configuration and reports the outcome of every
/// decode to the installed `metrics` recorder.
///
/// A `Decoder` holds no mutable state and can be shared freely between threads.
pub struct Decoder {
    config: DecodeConfig,
    metrics: DecoderMetrics,
}

impl Decoder {
    pub fn config(&self) -> &DecodeConfig {
        &self.config
    }

    pub fn decode(&self, candidate: impl AsRef<str>) -> Cnp {
        let record = DecodedCnp::decode(candidate.as_ref(), &self.config);
        self.metrics.record(&record);
        Cnp::from_parts(record, self.config.clone())
    }

    pub fn validate(&self, candidate: impl AsRef<str>) -> bool {
        self.decode(candidate).is_valid()
    }
}

impl Default for Decoder {
    fn default() -> Self {
        DecoderBuilder::new().build()
    }
}

impl Validator for Decoder {
    fn is_valid_match(&self, candidate: &str) -> bool {
        self.validate(candidate)
    }
}

pub struct DecoderBuilder {
    config: DecodeConfig,
    labels: Labels,
}

impl DecoderBuilder {
    pub fn new() -> Self {
        DecoderBuilder {
            config: DecodeConfig::default(),
            labels: Labels::empty(),
        }
    }

    pub fn config(mut self, config: DecodeConfig) -> Self {
        self.config = config;
        self
    }

    /// Labels attached to every metric emitted by the decoder.
    pub fn labels(mut self, labels: Labels) -> Self {
        self.labels = labels;
        self
    }

    pub fn build(self) -> Decoder {
        Decoder {
            metrics: DecoderMetrics::new(&self.labels),
            config: self.config,
        }
    }
}

impl Default for DecoderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

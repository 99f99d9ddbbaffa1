use serde::Deserialize;
use serde::Serialize;

use crate::constants;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TracerConfig {
    /// Depth used when a request carries none or an out-of-range value
    pub default_depth: usize,
    /// Bounds accepted for a caller-supplied depth
    pub min_depth: usize,
    pub max_depth: usize,
    /// Distinct-address budget per trace, root included
    pub max_addresses: usize,
}

impl Default for TracerConfig {
    fn default() -> Self {
        Self {
            default_depth: constants::DEFAULT_MAX_DEPTH,
            min_depth: constants::MIN_TRACE_DEPTH,
            max_depth: constants::MAX_TRACE_DEPTH,
            max_addresses: constants::DEFAULT_MAX_ADDRESSES,
        }
    }
}

impl TracerConfig {
    /// Clamp a caller-supplied depth into the accepted range, reverting to
    /// the default when the value is absent or out of range.
    pub fn clamp_depth(&self, requested: Option<i64>) -> usize {
        match requested {
            Some(depth) if depth >= self.min_depth as i64 && depth <= self.max_depth as i64 => {
                depth as usize
            },
            _ => self.default_depth,
        }
    }
}

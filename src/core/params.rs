use serde::{Deserialize, Serialize};

use crate::types::Mode;

/// Cipher parameters suitable for config files and presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CipherParams {
    pub mode: Mode,
    /// Additive byte offset; reduced modulo 256 before use
    pub shift: i32,
}

impl Default for CipherParams {
    fn default() -> Self {
        Self {
            mode: Mode::Encrypt,
            shift: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn params_round_trip_through_json() {
        let params = CipherParams {
            mode: Mode::Decrypt,
            shift: -13,
        };
        let json = serde_json::to_string(&params).unwrap();
        let back: CipherParams = serde_json::from_str(&json).unwrap();
        assert_eq!(back, params);
    }
}

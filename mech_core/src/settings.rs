//! # Calculation Settings
//!
//! Physical constants the calculation layer lets a request override. Every
//! field has a default, so `{}` (or an omitted `settings` key) is valid JSON.
//!
//! ```rust
//! use mech_core::settings::CalcSettings;
//!
//! let settings: CalcSettings = serde_json::from_str(r#"{ "gravity_m_s2": 1.62 }"#).unwrap();
//! assert_eq!(settings.gravity_m_s2, 1.62);
//! assert_eq!(settings.rotation_window_s, 5.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::{ROTATION_WINDOW_S, STANDARD_GRAVITY};

/// Settings applied to a single calculation request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalcSettings {
    /// Gravitational acceleration for projectile motion (m/s²)
    pub gravity_m_s2: f64,

    /// Time window for the swept angle of `angular_velocity_conversion` (s)
    pub rotation_window_s: f64,
}

impl Default for CalcSettings {
    fn default() -> Self {
        CalcSettings {
            gravity_m_s2: STANDARD_GRAVITY,
            rotation_window_s: ROTATION_WINDOW_S,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = CalcSettings::default();
        assert_eq!(settings.gravity_m_s2, 9.81);
        assert_eq!(settings.rotation_window_s, 5.0);
    }

    #[test]
    fn test_empty_object_uses_defaults() {
        let settings: CalcSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, CalcSettings::default());
    }
}

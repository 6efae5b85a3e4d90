//! User-configurable verification settings

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

pub const LIVENESS_MODE_PASSIVE: i64 = 0;
pub const LIVENESS_MODE_ACTIVE: i64 = 1;

pub const FACE_LIVENESS_THRESHOLD_RANGE: RangeInclusive<i64> = 0..=100;
pub const FACE_QUALITY_THRESHOLD_RANGE: RangeInclusive<i64> = 0..=100;
/// Seconds
pub const FACE_BLINK_TIMEOUT_RANGE: RangeInclusive<i64> = 0..=60;

/// Settings shown in the settings screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub kyc_enrolled: bool,

    // General
    pub facial_recognition: bool,

    // Risk management
    pub ignore_expiration_date: bool,

    // Identity document scan
    pub manual_scan: bool,
    pub automatic_type_detection: bool,
    /// `false` portrait, `true` landscape
    pub camera_orientation: bool,
    pub id_capture_detection_zone: bool,
    pub bw_photo_copy_qa: bool,

    // Face capture
    pub face_liveness_mode: i64,
    pub face_liveness_threshold: i64,
    pub face_quality_threshold: i64,
    pub face_blink_timeout: i64,

    /// Bearer token sent to the verification backend
    #[serde(skip_serializing)]
    pub json_web_token: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            kyc_enrolled: false,
            facial_recognition: true,
            ignore_expiration_date: false,
            manual_scan: false,
            automatic_type_detection: true,
            camera_orientation: false,
            id_capture_detection_zone: false,
            bw_photo_copy_qa: false,
            face_liveness_mode: LIVENESS_MODE_ACTIVE,
            face_liveness_threshold: 0,
            face_quality_threshold: 50,
            face_blink_timeout: 15,
            json_web_token: String::new(),
        }
    }
}

impl Settings {
    /// Clamp numeric settings into their valid ranges
    pub fn normalized(mut self) -> Self {
        self.face_liveness_mode = if self.face_liveness_mode == LIVENESS_MODE_PASSIVE {
            LIVENESS_MODE_PASSIVE
        } else {
            LIVENESS_MODE_ACTIVE
        };
        self.face_liveness_threshold = clamp(self.face_liveness_threshold, &FACE_LIVENESS_THRESHOLD_RANGE);
        self.face_quality_threshold = clamp(self.face_quality_threshold, &FACE_QUALITY_THRESHOLD_RANGE);
        self.face_blink_timeout = clamp(self.face_blink_timeout, &FACE_BLINK_TIMEOUT_RANGE);
        self
    }
}

fn clamp(value: i64, range: &RangeInclusive<i64>) -> i64 {
    value.clamp(*range.start(), *range.end())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert!(settings.facial_recognition);
        assert!(settings.automatic_type_detection);
        assert!(!settings.kyc_enrolled);
        assert_eq!(settings.face_liveness_mode, LIVENESS_MODE_ACTIVE);
        assert_eq!(settings.face_quality_threshold, 50);
        assert_eq!(settings.face_blink_timeout, 15);
    }

    #[test]
    fn test_normalized_clamps_ranges() {
        let settings = Settings {
            face_liveness_mode: 7,
            face_liveness_threshold: -4,
            face_quality_threshold: 250,
            face_blink_timeout: 90,
            ..Settings::default()
        }
        .normalized();

        assert_eq!(settings.face_liveness_mode, LIVENESS_MODE_ACTIVE);
        assert_eq!(settings.face_liveness_threshold, 0);
        assert_eq!(settings.face_quality_threshold, 100);
        assert_eq!(settings.face_blink_timeout, 60);
    }

    #[test]
    fn test_partial_deserialize_uses_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"manual_scan": true}"#).unwrap();
        assert!(settings.manual_scan);
        assert!(settings.facial_recognition);
    }
}

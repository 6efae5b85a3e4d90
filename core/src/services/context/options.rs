//! Settings screen descriptors.
//!
//! Each row is a [`SettingOption`] whose kind carries plain function pointers
//! into [`Settings`], so a generic settings screen can render and edit rows
//! without knowing the individual settings.

use std::fmt;

use crate::errors::{KycError, KycResult};

use super::settings::{
    Settings, FACE_BLINK_TIMEOUT_RANGE, FACE_LIVENESS_THRESHOLD_RANGE,
    FACE_QUALITY_THRESHOLD_RANGE, LIVENESS_MODE_ACTIVE, LIVENESS_MODE_PASSIVE,
};
use super::token::expiration_text;

pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionSection {
    General,
    RiskManagement,
    IdentityDocumentScan,
    FaceCapture,
    Version,
}

impl OptionSection {
    /// Sections in display order
    pub const ALL: [OptionSection; 5] = [
        OptionSection::General,
        OptionSection::RiskManagement,
        OptionSection::IdentityDocumentScan,
        OptionSection::FaceCapture,
        OptionSection::Version,
    ];

    pub fn caption(&self) -> &'static str {
        match self {
            OptionSection::General => "General",
            OptionSection::RiskManagement => "Risk Management",
            OptionSection::IdentityDocumentScan => "Identity Document Scan",
            OptionSection::FaceCapture => "Face Capture",
            OptionSection::Version => "Version",
        }
    }
}

/// UI action a button row triggers in the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    UpdateJsonWebToken,
    OpenPrivacyPolicy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionType {
    Checkbox,
    Number,
    Segment,
    Version,
    Text,
    Button,
}

/// Value read from or written to a row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    Bool(bool),
    Number(i64),
    Text(String),
}

#[derive(Clone, Copy)]
pub enum OptionKind {
    Checkbox {
        get: fn(&Settings) -> bool,
        set: fn(&mut Settings, bool),
    },
    Number {
        get: fn(&Settings) -> i64,
        set: fn(&mut Settings, i64),
        min: i64,
        max: i64,
    },
    Segment {
        options: &'static [(i64, &'static str)],
        get: fn(&Settings) -> i64,
        set: fn(&mut Settings, i64),
    },
    Version {
        value: &'static str,
    },
    Text {
        get: fn(&Settings) -> String,
    },
    Button {
        action: ButtonAction,
    },
}

impl OptionKind {
    pub fn option_type(&self) -> OptionType {
        match self {
            OptionKind::Checkbox { .. } => OptionType::Checkbox,
            OptionKind::Number { .. } => OptionType::Number,
            OptionKind::Segment { .. } => OptionType::Segment,
            OptionKind::Version { .. } => OptionType::Version,
            OptionKind::Text { .. } => OptionType::Text,
            OptionKind::Button { .. } => OptionType::Button,
        }
    }
}

impl fmt::Debug for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionKind::Number { min, max, .. } => f
                .debug_struct("Number")
                .field("min", min)
                .field("max", max)
                .finish_non_exhaustive(),
            OptionKind::Segment { options, .. } => f
                .debug_struct("Segment")
                .field("options", options)
                .finish_non_exhaustive(),
            OptionKind::Version { value } => {
                f.debug_struct("Version").field("value", value).finish()
            }
            OptionKind::Button { action } => {
                f.debug_struct("Button").field("action", action).finish()
            }
            other => write!(f, "{:?}", other.option_type()),
        }
    }
}

/// One row of the settings screen
#[derive(Debug, Clone, Copy)]
pub struct SettingOption {
    pub caption: &'static str,
    pub description: &'static str,
    pub section: OptionSection,
    pub kind: OptionKind,
}

impl SettingOption {
    pub fn option_type(&self) -> OptionType {
        self.kind.option_type()
    }

    /// Current value; `None` for buttons
    pub fn read(&self, settings: &Settings) -> Option<OptionValue> {
        match self.kind {
            OptionKind::Checkbox { get, .. } => Some(OptionValue::Bool(get(settings))),
            OptionKind::Number { get, .. } | OptionKind::Segment { get, .. } => {
                Some(OptionValue::Number(get(settings)))
            }
            OptionKind::Version { value } => Some(OptionValue::Text(value.to_string())),
            OptionKind::Text { get } => Some(OptionValue::Text(get(settings))),
            OptionKind::Button { .. } => None,
        }
    }

    /// Write `value` through the row's setter after validating it
    pub fn write(&self, settings: &mut Settings, value: OptionValue) -> KycResult<()> {
        match (self.kind, value) {
            (OptionKind::Checkbox { set, .. }, OptionValue::Bool(value)) => {
                set(settings, value);
                Ok(())
            }
            (OptionKind::Number { set, min, max, .. }, OptionValue::Number(value)) => {
                if !(min..=max).contains(&value) {
                    return Err(KycError::InvalidSetting {
                        message: format!(
                            "{} must be between {} and {}, got {}",
                            self.caption, min, max, value
                        ),
                    });
                }
                set(settings, value);
                Ok(())
            }
            (OptionKind::Segment { options, set, .. }, OptionValue::Number(value)) => {
                if !options.iter().any(|(key, _)| *key == value) {
                    return Err(KycError::InvalidSetting {
                        message: format!("{} has no segment {}", self.caption, value),
                    });
                }
                set(settings, value);
                Ok(())
            }
            (OptionKind::Version { .. } | OptionKind::Text { .. } | OptionKind::Button { .. }, _) => {
                Err(KycError::InvalidSetting {
                    message: format!("{} is read-only", self.caption),
                })
            }
            (_, value) => Err(KycError::InvalidSetting {
                message: format!("{} does not accept {:?}", self.caption, value),
            }),
        }
    }
}

const LIVENESS_MODES: [(i64, &str); 2] = [
    (LIVENESS_MODE_PASSIVE, "Passive"),
    (LIVENESS_MODE_ACTIVE, "Active"),
];

const CAMERA_ORIENTATIONS: [(i64, &str); 2] = [(0, "Portrait"), (1, "Landscape")];

const GENERAL: [SettingOption; 1] = [SettingOption {
    caption: "Facial recognition",
    description: "Capture a selfie and match it against the document portrait.",
    section: OptionSection::General,
    kind: OptionKind::Checkbox {
        get: |s| s.facial_recognition,
        set: |s, v| s.facial_recognition = v,
    },
}];

const RISK_MANAGEMENT: [SettingOption; 1] = [SettingOption {
    caption: "Ignore expiration date",
    description: "Accept documents past their expiration date.",
    section: OptionSection::RiskManagement,
    kind: OptionKind::Checkbox {
        get: |s| s.ignore_expiration_date,
        set: |s, v| s.ignore_expiration_date = v,
    },
}];

const IDENTITY_DOCUMENT_SCAN: [SettingOption; 5] = [
    SettingOption {
        caption: "Manual scan",
        description: "Take the document picture manually instead of automatically.",
        section: OptionSection::IdentityDocumentScan,
        kind: OptionKind::Checkbox {
            get: |s| s.manual_scan,
            set: |s, v| s.manual_scan = v,
        },
    },
    SettingOption {
        caption: "Automatic type detection",
        description: "Detect the document type from the captured image.",
        section: OptionSection::IdentityDocumentScan,
        kind: OptionKind::Checkbox {
            get: |s| s.automatic_type_detection,
            set: |s, v| s.automatic_type_detection = v,
        },
    },
    SettingOption {
        caption: "Camera orientation",
        description: "Orientation of the document camera.",
        section: OptionSection::IdentityDocumentScan,
        kind: OptionKind::Segment {
            options: &CAMERA_ORIENTATIONS,
            get: |s| i64::from(s.camera_orientation),
            set: |s, v| s.camera_orientation = v == 1,
        },
    },
    SettingOption {
        caption: "Detection zone",
        description: "Show the detection zone while capturing the document.",
        section: OptionSection::IdentityDocumentScan,
        kind: OptionKind::Checkbox {
            get: |s| s.id_capture_detection_zone,
            set: |s, v| s.id_capture_detection_zone = v,
        },
    },
    SettingOption {
        caption: "Black and white photocopy QA",
        description: "Reject black and white photocopies of documents.",
        section: OptionSection::IdentityDocumentScan,
        kind: OptionKind::Checkbox {
            get: |s| s.bw_photo_copy_qa,
            set: |s, v| s.bw_photo_copy_qa = v,
        },
    },
];

const FACE_CAPTURE: [SettingOption; 4] = [
    SettingOption {
        caption: "Liveness mode",
        description: "Passive or active (blink) liveness check.",
        section: OptionSection::FaceCapture,
        kind: OptionKind::Segment {
            options: &LIVENESS_MODES,
            get: |s| s.face_liveness_mode,
            set: |s, v| s.face_liveness_mode = v,
        },
    },
    SettingOption {
        caption: "Liveness threshold",
        description: "Minimum liveness score.",
        section: OptionSection::FaceCapture,
        kind: OptionKind::Number {
            get: |s| s.face_liveness_threshold,
            set: |s, v| s.face_liveness_threshold = v,
            min: *FACE_LIVENESS_THRESHOLD_RANGE.start(),
            max: *FACE_LIVENESS_THRESHOLD_RANGE.end(),
        },
    },
    SettingOption {
        caption: "Quality threshold",
        description: "Minimum face image quality.",
        section: OptionSection::FaceCapture,
        kind: OptionKind::Number {
            get: |s| s.face_quality_threshold,
            set: |s, v| s.face_quality_threshold = v,
            min: *FACE_QUALITY_THRESHOLD_RANGE.start(),
            max: *FACE_QUALITY_THRESHOLD_RANGE.end(),
        },
    },
    SettingOption {
        caption: "Blink timeout",
        description: "Seconds to wait for a blink in active mode.",
        section: OptionSection::FaceCapture,
        kind: OptionKind::Number {
            get: |s| s.face_blink_timeout,
            set: |s, v| s.face_blink_timeout = v,
            min: *FACE_BLINK_TIMEOUT_RANGE.start(),
            max: *FACE_BLINK_TIMEOUT_RANGE.end(),
        },
    },
];

const VERSION: [SettingOption; 4] = [
    SettingOption {
        caption: "Application",
        description: "",
        section: OptionSection::Version,
        kind: OptionKind::Version { value: APP_VERSION },
    },
    SettingOption {
        caption: "JSON web token",
        description: "Expiration of the stored token.",
        section: OptionSection::Version,
        kind: OptionKind::Text {
            get: |s| expiration_text(&s.json_web_token),
        },
    },
    SettingOption {
        caption: "Update JSON web token",
        description: "",
        section: OptionSection::Version,
        kind: OptionKind::Button {
            action: ButtonAction::UpdateJsonWebToken,
        },
    },
    SettingOption {
        caption: "Privacy policy",
        description: "",
        section: OptionSection::Version,
        kind: OptionKind::Button {
            action: ButtonAction::OpenPrivacyPolicy,
        },
    },
];

/// Ordered rows of one section
pub fn options_for(section: OptionSection) -> &'static [SettingOption] {
    match section {
        OptionSection::General => &GENERAL,
        OptionSection::RiskManagement => &RISK_MANAGEMENT,
        OptionSection::IdentityDocumentScan => &IDENTITY_DOCUMENT_SCAN,
        OptionSection::FaceCapture => &FACE_CAPTURE,
        OptionSection::Version => &VERSION,
    }
}

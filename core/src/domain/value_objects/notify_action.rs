//! Banner descriptor for alerts and capture hints shown during the flow.

use crate::errors::KycError;

/// Banner category; capture hints share the info styling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotifyType {
    Info,
    Warning,
    Error,
    KycLeft,
    KycRight,
    KycUp,
    KycDown,
    KycCenter,
    KycRotate,
    KycKeepStill,
    KycBlink,
}

/// RGBA colour with components in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
    pub alpha: f32,
}

const INFO_COLOR: Rgba = Rgba { red: 0.035, green: 0.33, blue: 0.94, alpha: 1.0 };
const WARNING_COLOR: Rgba = Rgba { red: 1.0, green: 0.8, blue: 0.0, alpha: 1.0 };
const ERROR_COLOR: Rgba = Rgba { red: 0.93, green: 0.09, blue: 0.11, alpha: 1.0 };

impl NotifyType {
    pub fn color(&self) -> Rgba {
        match self {
            NotifyType::Error => ERROR_COLOR,
            NotifyType::Warning => WARNING_COLOR,
            _ => INFO_COLOR,
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            NotifyType::Info => "IdCloudNotificationInfo",
            NotifyType::Warning => "IdCloudNotificationWarning",
            NotifyType::Error => "IdCloudNotificationError",
            NotifyType::KycLeft => "IdCloudNotificationLeft",
            NotifyType::KycRight => "IdCloudNotificationRight",
            NotifyType::KycUp => "IdCloudNotificationUp",
            NotifyType::KycDown => "IdCloudNotificationDown",
            NotifyType::KycCenter => "IdCloudNotificationCenter",
            NotifyType::KycRotate => "IdCloudNotificationRotate",
            NotifyType::KycKeepStill => "IdCloudNotificationStill",
            NotifyType::KycBlink => "IdCloudNotificationBlink",
        }
    }
}

/// Scheduled show/hide of the banner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifyAction {
    pub display: bool,
    pub notify_type: NotifyType,
    pub label: Option<String>,
}

impl NotifyAction {
    pub fn hide() -> Self {
        Self {
            display: false,
            notify_type: NotifyType::Info,
            label: None,
        }
    }

    pub fn show(label: impl Into<String>, notify_type: NotifyType) -> Self {
        Self {
            display: true,
            notify_type,
            label: Some(label.into()),
        }
    }

    /// Error banner carrying the error's user-facing message
    pub fn for_error(error: &KycError) -> Self {
        Self::show(error.to_string(), NotifyType::Error)
    }
}

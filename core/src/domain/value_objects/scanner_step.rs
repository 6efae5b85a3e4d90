//! Capture wizard step metadata.
//!
//! Steps are static per document type; the capture UI walks them in order and
//! renders the side bar and overlay from these values.

use serde::{Deserialize, Serialize};

/// Kind of identity document being captured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    IdCard,
    Passport,
    PassportBiometric,
}

impl DocumentType {
    /// Document type hint understood by the verification backend
    pub fn backend_type(&self) -> &'static str {
        match self {
            DocumentType::IdCard => "ID",
            DocumentType::Passport | DocumentType::PassportBiometric => "Passport",
        }
    }

    /// ID cards are captured on both sides
    pub fn requires_back_side(&self) -> bool {
        matches!(self, DocumentType::IdCard)
    }
}

impl std::fmt::Display for DocumentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentType::IdCard => write!(f, "id_card"),
            DocumentType::Passport => write!(f, "passport"),
            DocumentType::PassportBiometric => write!(f, "passport_biometric"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepType {
    Capture,
    TurnOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepAnimation {
    None,
    FlipHorizontally,
}

/// Display and animation configuration of one wizard step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScannerStep {
    pub step_type: StepType,
    pub side_bar_caption: &'static str,
    pub side_bar_icon: &'static str,
    pub overlay_icon: &'static str,
    pub overlay_caption_top: &'static str,
    pub overlay_caption_bottom: &'static str,
    pub overlay_animation_image: &'static str,
    pub overlay_animation: StepAnimation,
}

impl ScannerStep {
    const fn capture(
        side_bar_caption: &'static str,
        side_bar_icon: &'static str,
        overlay_icon: &'static str,
        overlay_caption_top: &'static str,
        overlay_caption_bottom: &'static str,
    ) -> Self {
        Self {
            step_type: StepType::Capture,
            side_bar_caption,
            side_bar_icon,
            overlay_icon,
            overlay_caption_top,
            overlay_caption_bottom,
            overlay_animation_image: "",
            overlay_animation: StepAnimation::None,
        }
    }

    const fn turn_over(
        side_bar_caption: &'static str,
        side_bar_icon: &'static str,
        overlay_animation_image: &'static str,
    ) -> Self {
        Self {
            step_type: StepType::TurnOver,
            side_bar_caption,
            side_bar_icon,
            overlay_icon: "",
            overlay_caption_top: "Turn the document over",
            overlay_caption_bottom: "",
            overlay_animation_image,
            overlay_animation: StepAnimation::FlipHorizontally,
        }
    }
}

const ID_CARD_STEPS: [ScannerStep; 3] = [
    ScannerStep::capture(
        "Front side",
        "KYC_SideBar_IdCard_Front",
        "KYC_Overlay_IdCard_Front",
        "Place the front side of your ID card in the frame",
        "Hold still until the capture finishes",
    ),
    ScannerStep::turn_over(
        "Turn over",
        "KYC_SideBar_IdCard_TurnOver",
        "KYC_Overlay_IdCard_Flip",
    ),
    ScannerStep::capture(
        "Back side",
        "KYC_SideBar_IdCard_Back",
        "KYC_Overlay_IdCard_Back",
        "Place the back side of your ID card in the frame",
        "Hold still until the capture finishes",
    ),
];

const PASSPORT_STEPS: [ScannerStep; 1] = [ScannerStep::capture(
    "Data page",
    "KYC_SideBar_Passport_DataPage",
    "KYC_Overlay_Passport_DataPage",
    "Place the passport data page in the frame",
    "Make sure the machine readable zone is visible",
)];

const PASSPORT_BIOMETRIC_STEPS: [ScannerStep; 2] = [
    ScannerStep::capture(
        "Data page",
        "KYC_SideBar_Passport_DataPage",
        "KYC_Overlay_Passport_DataPage",
        "Place the passport data page in the frame",
        "Make sure the machine readable zone is visible",
    ),
    ScannerStep::capture(
        "Chip page",
        "KYC_SideBar_Passport_Chip",
        "KYC_Overlay_Passport_Chip",
        "Place the page with the chip symbol in the frame",
        "Hold still until the capture finishes",
    ),
];

/// Ordered capture steps for a document type
pub fn scanning_steps(document_type: DocumentType) -> &'static [ScannerStep] {
    match document_type {
        DocumentType::IdCard => &ID_CARD_STEPS,
        DocumentType::Passport => &PASSPORT_STEPS,
        DocumentType::PassportBiometric => &PASSPORT_BIOMETRIC_STEPS,
    }
}

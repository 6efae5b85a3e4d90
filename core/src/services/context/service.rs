//! Application context implementation

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};
use tokio::task::JoinHandle;

use kyc_shared::config::{BackendConfig, KycConfig};

use crate::domain::value_objects::{scanning_steps, DocumentType, ScannerStep};
use crate::errors::{KycError, KycResult};
use crate::services::session::{
    CaptureSet, KycSession, MainThreadDispatcher, ResponseHandler, VerificationTransport,
};

use super::options::{options_for, OptionSection, OptionValue, SettingOption};
use super::settings::Settings;
use super::token::{expiration_text, json_web_token_expiration};

/// Images captured by the capture screens
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ScannedImages {
    pub document_front: Option<Vec<u8>>,
    pub document_back: Option<Vec<u8>>,
    pub portrait: Option<Vec<u8>>,
}

impl std::fmt::Debug for ScannedImages {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScannedImages")
            .field("document_front_len", &self.document_front.as_ref().map(Vec::len))
            .field("document_back_len", &self.document_back.as_ref().map(Vec::len))
            .field("portrait_len", &self.portrait.as_ref().map(Vec::len))
            .finish()
    }
}

/// Shared client state: settings, scanned images and backend configuration.
///
/// Create one at startup, share it by `Arc` and call [`KycContext::dispose`]
/// at shutdown. All accessors take `&self` and are safe to call from any
/// thread.
pub struct KycContext {
    backend: BackendConfig,
    settings: RwLock<Settings>,
    images: RwLock<ScannedImages>,
}

impl KycContext {
    pub fn new(config: &KycConfig) -> Self {
        let settings = Settings {
            json_web_token: config.backend.json_web_token.clone(),
            ..Settings::default()
        };

        tracing::info!(
            environment = %config.environment,
            base_url = %config.backend.base_url,
            event = "context_created",
            "KYC context created"
        );

        Self {
            backend: config.backend.clone(),
            settings: RwLock::new(settings),
            images: RwLock::new(ScannedImages::default()),
        }
    }

    pub fn backend(&self) -> &BackendConfig {
        &self.backend
    }

    /// Snapshot of the current settings
    pub fn settings(&self) -> Settings {
        self.read_settings().clone()
    }

    /// Mutate settings in place; numeric values are clamped afterwards
    pub fn update_settings<F>(&self, update: F)
    where
        F: FnOnce(&mut Settings),
    {
        let mut settings = self.write_settings();
        update(&mut settings);
        *settings = settings.clone().normalized();
    }

    pub fn json_web_token(&self) -> String {
        self.read_settings().json_web_token.clone()
    }

    /// Store `token` if it is a JWT carrying an expiration; invalid tokens
    /// leave the stored one untouched.
    pub fn set_json_web_token(&self, token: &str) -> KycResult<DateTime<Utc>> {
        let expires_at = json_web_token_expiration(token).map_err(|e| {
            tracing::warn!(error = %e, event = "jwt_rejected", "Rejected JSON web token");
            e
        })?;

        self.write_settings().json_web_token = token.trim().to_string();
        tracing::info!(
            expires_at = %expires_at,
            event = "jwt_updated",
            "JSON web token updated"
        );
        Ok(expires_at)
    }

    pub fn json_web_token_expiration(&self) -> KycResult<DateTime<Utc>> {
        json_web_token_expiration(&self.json_web_token())
    }

    pub fn json_web_token_expiration_text(&self) -> String {
        expiration_text(&self.json_web_token())
    }

    pub fn privacy_policy_url(&self) -> Option<&str> {
        self.backend.privacy_policy_url.as_deref()
    }

    // Scanned images

    pub fn scanned_images(&self) -> ScannedImages {
        self.read_images().clone()
    }

    pub fn set_scanned_document_front(&self, image: Option<Vec<u8>>) {
        self.write_images().document_front = image;
    }

    pub fn set_scanned_document_back(&self, image: Option<Vec<u8>>) {
        self.write_images().document_back = image;
    }

    pub fn set_scanned_portrait(&self, image: Option<Vec<u8>>) {
        self.write_images().portrait = image;
    }

    pub fn clear_scanned_images(&self) {
        *self.write_images() = ScannedImages::default();
    }

    /// Session input from the scanned images.
    ///
    /// The portrait is only included while facial recognition is enabled.
    /// `None` when no front image was scanned.
    pub fn capture_set(&self, document_type: DocumentType) -> Option<CaptureSet> {
        let facial_recognition = self.read_settings().facial_recognition;
        let images = self.read_images();

        let front = images.document_front.clone()?;
        Some(CaptureSet {
            document_type: Some(document_type),
            document_front: front,
            document_back: images.document_back.clone(),
            selfie: if facial_recognition {
                images.portrait.clone()
            } else {
                None
            },
        })
    }

    // Settings screen

    /// Section titles, in display order
    pub fn option_captions(&self) -> Vec<&'static str> {
        OptionSection::ALL.iter().map(OptionSection::caption).collect()
    }

    /// Rows per section, aligned with [`KycContext::option_captions`]
    pub fn options(&self) -> Vec<&'static [SettingOption]> {
        OptionSection::ALL.iter().map(|section| options_for(*section)).collect()
    }

    pub fn option_value(&self, option: &SettingOption) -> Option<OptionValue> {
        option.read(&self.read_settings())
    }

    pub fn set_option_value(&self, option: &SettingOption, value: OptionValue) -> KycResult<()> {
        let mut settings = self.write_settings();
        option.write(&mut settings, value)?;
        tracing::debug!(
            option = option.caption,
            event = "setting_changed",
            "Setting changed"
        );
        Ok(())
    }

    pub fn scanning_steps_with_type(&self, document_type: DocumentType) -> &'static [ScannerStep] {
        scanning_steps(document_type)
    }

    /// Start a verification session with the scanned images.
    ///
    /// The session uses the configured base URL and the stored JSON web
    /// token; `handler` is delivered through `dispatcher`.
    pub fn start_session<T>(
        &self,
        document_type: DocumentType,
        transport: Arc<T>,
        dispatcher: Arc<dyn MainThreadDispatcher>,
        handler: ResponseHandler,
    ) -> KycResult<JoinHandle<()>>
    where
        T: VerificationTransport + ?Sized + 'static,
    {
        let captures = self.capture_set(document_type).ok_or_else(|| KycError::InvalidCapture {
            message: "no document image was scanned".to_string(),
        })?;
        captures.validate()?;

        let mut session = KycSession::new(self.backend.base_url.clone(), captures, transport);
        let token = self.json_web_token();
        if !token.is_empty() {
            session = session.with_bearer_token(token);
        }

        tracing::info!(
            session = %session.id(),
            document_type = %document_type,
            selfie = session.portrait().is_some(),
            event = "session_started",
            "Starting verification session"
        );
        Ok(session.spawn(dispatcher, handler))
    }

    /// Release scanned images at shutdown
    pub fn dispose(&self) {
        self.clear_scanned_images();
        tracing::info!(event = "context_disposed", "KYC context disposed");
    }

    fn read_settings(&self) -> RwLockReadGuard<'_, Settings> {
        self.settings.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write_settings(&self) -> RwLockWriteGuard<'_, Settings> {
        self.settings.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn read_images(&self) -> RwLockReadGuard<'_, ScannedImages> {
        self.images.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write_images(&self) -> RwLockWriteGuard<'_, ScannedImages> {
        self.images.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

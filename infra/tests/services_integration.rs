//! Integration tests for infrastructure initialization

#[cfg(test)]
mod tests {
    use std::fs;
    use std::sync::Arc;

    use kyc_core::{CaptureSet, KycSession, OptionSection};
    use kyc_infra::{initialize, InfrastructureError, InfrastructureServices};
    use kyc_shared::KycConfig;

    #[test]
    fn test_initialize_from_file() -> anyhow::Result<()> {
        let path = std::env::temp_dir().join(format!("kyc-infra-{}.toml", uuid::Uuid::new_v4()));
        fs::write(
            &path,
            "[backend]\nbase_url = \"https://kyc.example.com/api/v1/scenarios\"\nprivacy_policy_url = \"https://kyc.example.com/privacy\"\n",
        )?;

        let services = initialize(Some(&path));
        fs::remove_file(&path).ok();
        let services = services?;

        assert_eq!(
            services.context.backend().base_url,
            "https://kyc.example.com/api/v1/scenarios"
        );
        assert_eq!(
            services.context.privacy_policy_url(),
            Some("https://kyc.example.com/privacy")
        );
        assert_eq!(services.context.options().len(), OptionSection::ALL.len());
        Ok(())
    }

    #[test]
    fn test_invalid_api_key_header_is_rejected() {
        let mut config = KycConfig::default();
        config.backend.api_key = "line\nbreak".to_string();

        let result = InfrastructureServices::new(config);

        assert!(matches!(result, Err(InfrastructureError::Configuration(_))));
    }

    #[tokio::test]
    async fn test_session_reports_unreachable_backend() -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let base_url = format!("http://{}/scenarios", listener.local_addr()?);
        drop(listener);

        let mut config = KycConfig::default();
        config.backend.base_url = base_url.clone();
        let services = InfrastructureServices::new(config)?;

        let err = KycSession::new(
            base_url,
            CaptureSet::new(vec![1, 2, 3]),
            Arc::clone(&services.transport),
        )
        .run()
        .await
        .unwrap_err();

        assert!(err.is_transport());
        Ok(())
    }
}

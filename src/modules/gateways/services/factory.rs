use std::sync::Arc;

use super::aim_client::{AimClient, MerchantCredentials, ResponseFormat};
use super::transport::{AimTransport, ReqwestTransport};
use crate::config::AimSettings;
use crate::core::Result;

/// Builds a fresh `AimClient` for every checkout attempt from the
/// merchant settings, sharing one transport between them
#[derive(Clone)]
pub struct AimClientFactory {
    settings: AimSettings,
    transport: Arc<dyn AimTransport>,
}

impl AimClientFactory {
    pub fn new(settings: AimSettings, transport: Arc<dyn AimTransport>) -> Self {
        Self {
            settings,
            transport,
        }
    }

    /// Factory posting over HTTPS with reqwest
    pub fn with_reqwest(settings: AimSettings) -> Result<Self> {
        Ok(Self::new(settings, Arc::new(ReqwestTransport::new()?)))
    }

    pub fn settings(&self) -> &AimSettings {
        &self.settings
    }

    pub fn retries(&self) -> u32 {
        self.settings.retries
    }

    pub fn create_client(&self) -> AimClient {
        tracing::debug!(
            gateway = "authorizenet-aim",
            endpoint = %self.settings.endpoint(),
            mode = %self.settings.mode,
            "Creating transaction client"
        );

        AimClient::new(
            self.settings.endpoint(),
            ResponseFormat {
                delim_data: self.settings.delim_data,
                delim_char: self.settings.delim_char.clone(),
                encap_char: self.settings.encap_char.clone(),
            },
            MerchantCredentials::new(&self.settings.api_user, &self.settings.api_key),
            self.settings.mode.is_sandbox(),
            self.transport.clone(),
        )
    }
}

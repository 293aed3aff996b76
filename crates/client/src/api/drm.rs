use shared_types::{AppError, DrmTerms};

use crate::{send_empty, send_json, Client};

fn drm_path(uuid: &str, version: u32) -> String {
    format!("item/{}/{version}/drm", urlencoding::encode(uuid))
}

impl Client {
    #[tracing::instrument(skip(self))]
    pub async fn list_drm_terms(&self, uuid: &str, version: u32) -> Result<DrmTerms, AppError> {
        send_json(self.get(&drm_path(uuid, version))).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn accept_drm_terms(&self, uuid: &str, version: u32) -> Result<(), AppError> {
        send_empty(self.post(&drm_path(uuid, version))).await?;
        tracing::info!(uuid, version, "DRM terms accepted");
        Ok(())
    }
}

//! Openprovider DestinationProvider trait 实现

use async_trait::async_trait;

use crate::error::Result;
use crate::traits::{DestinationProvider, ErrorContext, ProviderErrorMapper, RawApiError};
use crate::types::CreateZoneRequest;

use super::{CreateZoneBody, CreateZoneData, OpenproviderProvider, ZONE_TEMPLATE_NAME};

impl OpenproviderProvider {
    /// 构建 zone 创建请求体：master zone，启用 DNSSEC，使用固定模板
    pub(crate) fn zone_body<'a>(&self, req: &'a CreateZoneRequest) -> CreateZoneBody<'a> {
        CreateZoneBody {
            domain: &req.domain,
            is_spamexperts_enabled: self.disable_spamexperts.then_some("off"),
            provider: "openprovider",
            records: &req.records,
            secured: true,
            template_name: ZONE_TEMPLATE_NAME,
            zone_type: "master",
        }
    }
}

#[async_trait]
impl DestinationProvider for OpenproviderProvider {
    fn id(&self) -> &'static str {
        "openprovider"
    }

    async fn create_zone(&self, req: &CreateZoneRequest) -> Result<()> {
        let body = self.zone_body(req);
        let response = self
            .post::<CreateZoneData, _>(
                "/dns/zones",
                &body,
                ErrorContext::for_domain(&req.domain_name),
            )
            .await?;

        if response.data.as_ref().is_some_and(|d| d.success) {
            log::info!(
                "[{}] Zone created for {} ({} records)",
                self.provider_name(),
                req.domain_name,
                req.records.len()
            );
            return Ok(());
        }

        // HTTP 200 但业务失败
        let raw = RawApiError::with_status(
            200,
            response.code,
            response.desc.unwrap_or_default(),
        );
        Err(self.map_error(raw, ErrorContext::for_domain(&req.domain_name)))
    }
}

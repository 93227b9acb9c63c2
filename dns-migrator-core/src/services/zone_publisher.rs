//! 在目标注册商创建 zone

use std::sync::Arc;

use dns_migrator_provider::{CreateZoneRequest, DnsRecord, ZoneDomain};

use crate::error::CoreResult;
use crate::services::ServiceContext;

/// 把域名拆成目标 API 需要的 `name` + `extension`
///
/// 取第一段作为 name、最后一段作为 extension。对 `example.co.uk` 这类多段后缀
/// 会得到 `example` + `uk`，这是已知的限制。
pub fn split_domain_name(domain: &str) -> ZoneDomain {
    let mut labels = domain.split('.');
    let name = labels.next().unwrap_or_default().to_string();
    let extension = labels.next_back().unwrap_or_default().to_string();
    ZoneDomain { extension, name }
}

/// zone 发布服务
pub struct ZonePublisher {
    ctx: Arc<ServiceContext>,
}

impl ZonePublisher {
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// 构建 zone 创建请求
    pub fn build_request(domain: &str, records: &[DnsRecord]) -> CreateZoneRequest {
        CreateZoneRequest {
            domain_name: domain.to_string(),
            domain: split_domain_name(domain),
            records: records.to_vec(),
        }
    }

    /// 创建 zone
    ///
    /// 失败时记录目标注册商返回的错误码与描述并返回错误，由调用方记为发布失败。
    pub async fn publish(&self, domain: &str, records: &[DnsRecord]) -> CoreResult<()> {
        let request = Self::build_request(domain, records);

        match self.ctx.destination.create_zone(&request).await {
            Ok(()) => {
                log::info!(
                    "{domain}: zone created at {} with {} records",
                    self.ctx.destination.id(),
                    records.len()
                );
                Ok(())
            }
            Err(e) => {
                let code = e.raw_code().unwrap_or("-");
                if e.is_expected() {
                    log::warn!("{domain}: zone creation rejected (code {code}): {e}");
                } else {
                    log::error!("{domain}: zone creation failed (code {code}): {e}");
                }
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::test_utils::{create_test_context, record};
    use dns_migrator_provider::ProviderError;

    #[test]
    fn split_two_labels() {
        let d = split_domain_name("example.com");
        assert_eq!(d.name, "example");
        assert_eq!(d.extension, "com");
    }

    #[test]
    fn split_multi_label_takes_first_and_last() {
        let d = split_domain_name("example.co.uk");
        assert_eq!(d.name, "example");
        assert_eq!(d.extension, "uk");
    }

    #[test]
    fn split_single_label() {
        let d = split_domain_name("localhost");
        assert_eq!(d.name, "localhost");
        assert_eq!(d.extension, "");
    }

    #[tokio::test]
    async fn publish_sends_all_records() {
        let (ctx, _, destination, _) = create_test_context();
        let publisher = ZonePublisher::new(ctx);
        let records = vec![record("", "A", "1.2.3.4"), record("www", "CNAME", "a.com")];

        publisher.publish("a.com", &records).await.unwrap();

        let requests = destination.requests().await;
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].domain_name, "a.com");
        assert_eq!(requests[0].domain.name, "a");
        assert_eq!(requests[0].domain.extension, "com");
        assert_eq!(requests[0].records, records);
    }

    #[tokio::test]
    async fn rejection_is_returned() {
        let (ctx, _, destination, _) = create_test_context();
        destination
            .set_error(Some(ProviderError::ZoneRejected {
                provider: "mock".to_string(),
                domain: "a.com".to_string(),
                raw_code: Some("817".to_string()),
                raw_message: Some("Zone already exists".to_string()),
            }))
            .await;

        let publisher = ZonePublisher::new(ctx);
        let result = publisher
            .publish("a.com", &[record("", "A", "1.2.3.4")])
            .await;
        assert!(matches!(
            result,
            Err(CoreError::Provider(ProviderError::ZoneRejected { .. }))
        ));
    }
}

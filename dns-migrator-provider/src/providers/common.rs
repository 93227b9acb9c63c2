//! Provider 公共工具函数

use reqwest::Client;

use crate::error::Result;
use crate::http_client::create_http_client;
use crate::types::ClientOptions;

/// 根据选项创建 HTTP Client 并确定 API base URL
pub fn build_client(options: &ClientOptions, default_base: &str) -> Result<(Client, String)> {
    let client = create_http_client(options.request_timeout)?;
    let base_url = options
        .base_url
        .as_deref()
        .unwrap_or(default_base)
        .trim_end_matches('/')
        .to_string();
    Ok((client, base_url))
}

/// 拼接 base URL 与路径，保证两者之间只有一个斜杠
pub fn join_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Bearer 认证头的值
pub fn bearer(api_token: &str) -> String {
    format!("Bearer {api_token}")
}

/// 去掉域名末尾的点
pub fn normalize_domain_name(name: &str) -> String {
    name.trim().trim_end_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_url_handles_slashes() {
        assert_eq!(
            join_url("https://api.example.com/api/", "/dns/1"),
            "https://api.example.com/api/dns/1"
        );
        assert_eq!(
            join_url("https://api.example.com/api", "domains"),
            "https://api.example.com/api/domains"
        );
    }

    #[test]
    fn bearer_header() {
        assert_eq!(bearer("abc"), "Bearer abc");
    }

    #[test]
    fn normalize_strips_trailing_dot() {
        assert_eq!(normalize_domain_name("example.com."), "example.com");
        assert_eq!(normalize_domain_name(" example.com "), "example.com");
    }

    #[test]
    fn build_client_uses_override() {
        let options = ClientOptions {
            base_url: Some("http://127.0.0.1:8080/".to_string()),
            ..ClientOptions::default()
        };
        let (_, base) = build_client(&options, "https://default").unwrap();
        assert_eq!(base, "http://127.0.0.1:8080");

        let (_, base) = build_client(&ClientOptions::default(), "https://default/").unwrap();
        assert_eq!(base, "https://default");
    }
}

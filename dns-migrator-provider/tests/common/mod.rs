//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::env;
use std::sync::Arc;

use dns_migrator_provider::{
    ClientOptions, DestinationProvider, SourceProvider, create_destination_provider,
    create_source_provider,
};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

/// 跳过测试的宏（当环境变量缺失时）
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("跳过测试: 缺少环境变量 {}", $var);
                return;
            }
        )+
    };
}

/// 从环境变量读取可选的 base URL 覆盖
fn options_from_env(var: &str) -> ClientOptions {
    ClientOptions {
        base_url: env::var(var).ok(),
        ..ClientOptions::default()
    }
}

/// 源注册商测试上下文
pub struct SourceContext {
    pub provider: Arc<dyn SourceProvider>,
}

impl SourceContext {
    pub fn neostrada() -> Option<Self> {
        let token = env::var("NEOSTRADA_API_KEY").ok()?;
        let provider =
            create_source_provider(token, &options_from_env("NEOSTRADA_API_URL")).ok()?;
        Some(Self { provider })
    }

    /// 用无效 token 创建的上下文（用于验证错误映射）
    pub fn neostrada_with_bad_token() -> Option<Self> {
        let provider = create_source_provider(
            "invalid-token".to_string(),
            &options_from_env("NEOSTRADA_API_URL"),
        )
        .ok()?;
        Some(Self { provider })
    }
}

/// 目标注册商测试上下文
pub struct DestinationContext {
    pub provider: Arc<dyn DestinationProvider>,
}

impl DestinationContext {
    /// 用无效 token 创建的上下文（不会真正创建 zone）
    pub fn openprovider_with_bad_token() -> Option<Self> {
        let provider = create_destination_provider(
            "invalid-token".to_string(),
            &options_from_env("OPENPROVIDER_API_URL"),
            false,
        )
        .ok()?;
        Some(Self { provider })
    }
}

// ============ 本地 HTTP 服务 ============

/// 收到的 HTTP 请求
#[derive(Debug)]
pub struct CapturedRequest {
    /// 请求行，如 `POST /dns/zones HTTP/1.1`
    pub request_line: String,
    /// 头部（名称已转为小写）
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl CapturedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k == &name.to_ascii_lowercase())
            .map(|(_, v)| v.as_str())
    }

    pub fn json_body(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("请求体不是合法 JSON")
    }
}

/// 只应答一次的本地 HTTP 服务，返回固定的状态码和 JSON 响应体
pub struct OneShotServer {
    pub base_url: String,
    handle: JoinHandle<CapturedRequest>,
}

impl OneShotServer {
    pub async fn respond(status: u16, body: &str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("绑定本地端口失败");
        let addr = listener.local_addr().expect("获取本地地址失败");
        let body = body.to_string();

        let handle = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.expect("接受连接失败");
            let request = read_request(&mut stream).await;
            let response = format!(
                "HTTP/1.1 {status} Test\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream
                .write_all(response.as_bytes())
                .await
                .expect("写入响应失败");
            let _ = stream.shutdown().await;
            request
        });

        Self {
            base_url: format!("http://{addr}"),
            handle,
        }
    }

    pub fn options(&self) -> ClientOptions {
        ClientOptions {
            base_url: Some(self.base_url.clone()),
            ..ClientOptions::default()
        }
    }

    /// 等待服务结束并取回收到的请求
    pub async fn request(self) -> CapturedRequest {
        self.handle.await.expect("本地服务任务失败")
    }
}

async fn read_request(stream: &mut TcpStream) -> CapturedRequest {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    let header_end = loop {
        let n = stream.read(&mut chunk).await.expect("读取请求失败");
        assert!(n > 0, "请求头未读完连接就已关闭");
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos;
        }
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).into_owned();
    let mut lines = head.split("\r\n");
    let request_line = lines.next().unwrap_or_default().to_string();
    let headers: Vec<(String, String)> = lines
        .filter_map(|line| line.split_once(':'))
        .map(|(k, v)| (k.trim().to_ascii_lowercase(), v.trim().to_string()))
        .collect();

    let content_length = headers
        .iter()
        .find(|(k, _)| k == "content-length")
        .and_then(|(_, v)| v.parse::<usize>().ok())
        .unwrap_or(0);

    let body_start = header_end + 4;
    while buf.len() < body_start + content_length {
        let n = stream.read(&mut chunk).await.expect("读取请求体失败");
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    CapturedRequest {
        request_line,
        headers,
        body: String::from_utf8_lossy(&buf[body_start..]).into_owned(),
    }
}

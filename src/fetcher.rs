use crate::config::MonitorConfig;
use crate::error::{MonitorError, Result};
use log::{debug, warn};
use reqwest::blocking::Client;

/// 同步 HTTP 抓取器：固定 User-Agent、固定超时、不重试
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    pub fn new(config: &MonitorConfig) -> Result<Self> {
        if config.accept_invalid_certs {
            warn!("已关闭 TLS 证书校验 (ACCEPT_INVALID_CERTS)");
        }

        let client = Client::builder()
            .timeout(config.request_timeout)
            .user_agent(config.user_agent.as_str())
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()?;

        Ok(Self { client })
    }

    /// 获取页面 HTML，非 2xx 状态视为失败
    pub fn fetch_html(&self, url: &str) -> Result<String> {
        debug!("请求页面: {}", url);

        let response = self.client.get(url).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(MonitorError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text()?;
        debug!("获取到 {} 字节: {}", body.len(), url);
        Ok(body)
    }
}

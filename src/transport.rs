use async_trait::async_trait;
use reqwest::redirect::Policy;
use reqwest::Client;

use crate::config::CheckConfig;
use crate::error::{CheckError, Result};

/// HTTP 传输层，检测和查询都经过这里，测试时可以替换
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// 发送 HEAD 请求，返回最终响应的状态码
    async fn head_status(&self, url: &str) -> Result<u16>;

    /// 发送 GET 请求并读取响应体，非 2xx 视为错误
    async fn get_text(&self, url: &str) -> Result<String>;
}

/// 基于 reqwest 的实现
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    probe_client: Client,
    query_client: Client,
}

impl ReqwestTransport {
    pub fn new(config: &CheckConfig) -> Result<Self> {
        let probe_client = Self::build_client(config, config.check_timeout)?;
        let query_client = Self::build_client(config, config.subdomain_timeout)?;

        Ok(ReqwestTransport {
            probe_client,
            query_client,
        })
    }

    fn build_client(config: &CheckConfig, timeout: std::time::Duration) -> Result<Client> {
        let policy = if config.follow_redirects {
            Policy::limited(config.max_redirects)
        } else {
            Policy::none()
        };

        let client = Client::builder()
            .timeout(timeout)
            .redirect(policy)
            .user_agent(config.user_agent.as_str())
            .build()?;
        Ok(client)
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn head_status(&self, url: &str) -> Result<u16> {
        let response = self.probe_client.head(url).send().await?;
        Ok(response.status().as_u16())
    }

    async fn get_text(&self, url: &str) -> Result<String> {
        let response = self.query_client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CheckError::HttpStatus(status.as_u16()));
        }
        Ok(response.text().await?)
    }
}

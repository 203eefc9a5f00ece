use std::fmt;
use std::sync::Arc;

use log::debug;

use crate::input::StatusCodes;
use crate::transport::HttpTransport;
use crate::util::normalize_url;

/// 单次探测的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// 状态码在可接受列表中
    Alive { url: String, status: u16 },
    /// 能连上但状态码不在列表中
    UnexpectedStatus { url: String, status: u16 },
    /// DNS、连接、超时、TLS 等网络错误
    Unreachable { url: String, reason: String },
}

impl ProbeOutcome {
    pub fn is_alive(&self) -> bool {
        matches!(self, ProbeOutcome::Alive { .. })
    }

    /// 规范化之后的URL
    pub fn url(&self) -> &str {
        match self {
            ProbeOutcome::Alive { url, .. }
            | ProbeOutcome::UnexpectedStatus { url, .. }
            | ProbeOutcome::Unreachable { url, .. } => url,
        }
    }

    pub fn into_alive_url(self) -> Option<String> {
        match self {
            ProbeOutcome::Alive { url, .. } => Some(url),
            _ => None,
        }
    }
}

impl fmt::Display for ProbeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeOutcome::Alive { url, status } => write!(f, "{} alive ({})", url, status),
            ProbeOutcome::UnexpectedStatus { url, status } => write!(f, "{} returned {}", url, status),
            ProbeOutcome::Unreachable { url, reason } => write!(f, "{} unreachable: {}", url, reason),
        }
    }
}

/// URL 存活检测器
#[derive(Clone)]
pub struct UrlChecker {
    transport: Arc<dyn HttpTransport>,
}

impl UrlChecker {
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        UrlChecker { transport }
    }

    /// 检测URL，存活时返回规范化后的URL。
    ///
    /// 网络错误和状态码不匹配都返回 `None`，调用方无法区分两者，
    /// 需要原因时用 [`UrlChecker::probe`]。
    pub async fn check_url(&self, url: &str, status_codes: &StatusCodes) -> Option<String> {
        self.probe(url, status_codes).await.into_alive_url()
    }

    /// 发送 HEAD 请求并分类结果
    pub async fn probe(&self, url: &str, status_codes: &StatusCodes) -> ProbeOutcome {
        let url = normalize_url(url);
        let outcome = match self.transport.head_status(&url).await {
            Ok(status) if status_codes.contains(status) => ProbeOutcome::Alive { url, status },
            Ok(status) => ProbeOutcome::UnexpectedStatus { url, status },
            Err(e) => ProbeOutcome::Unreachable {
                url,
                reason: e.to_string(),
            },
        };
        debug!("probe: {}", outcome);
        outcome
    }
}

//! 通过 crt.sh 证书透明度日志查询子域名

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::{debug, info};
use serde::Deserialize;
use tokio_util::sync::CancellationToken;
use url::Url;

use crate::error::{CheckError, Result};
use crate::output::write_lines;
use crate::progress::{progress_percentage, ProgressReporter};
use crate::transport::HttpTransport;
use crate::util::strip_scheme;

/// crt.sh 返回的一条证书记录，只关心两个域名字段
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct CrtEntry {
    #[serde(default)]
    pub common_name: Option<String>,
    /// 可能包含多个域名，以换行分隔
    #[serde(default)]
    pub name_value: Option<String>,
}

/// 子域名查询结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubdomainReport {
    /// 去掉协议头之后实际查询的域名
    pub domain: String,
    /// 去重后的子域名，已排序
    pub subdomains: Vec<String>,
    pub output: Option<PathBuf>,
}

/// 拼接查询地址 `{endpoint}?q={domain}&output=json`
pub fn build_query_url(endpoint: &str, domain: &str) -> Result<String> {
    let url = Url::parse_with_params(endpoint, &[("q", domain), ("output", "json")])?;
    Ok(url.into())
}

/// 把响应体解析成记录列表
pub fn parse_entries(body: &str) -> Result<Vec<CrtEntry>> {
    Ok(serde_json::from_str(body)?)
}

/// 从记录中提取子域名：`common_name` 原样加入，`name_value` 按换行拆开后逐个加入
pub fn extract_subdomains(entries: &[CrtEntry], progress: &mut dyn ProgressReporter) -> HashSet<String> {
    let total = entries.len();
    let mut subdomains = HashSet::new();
    progress.start(total);

    for (index, entry) in entries.iter().enumerate() {
        if let Some(common_name) = &entry.common_name {
            subdomains.insert(common_name.clone());
        }
        if let Some(name_value) = &entry.name_value {
            subdomains.extend(name_value.split('\n').map(str::to_string));
        }
        if let Some(percent) = progress_percentage(index, total) {
            progress.update(percent);
        }
    }
    progress.finish();

    subdomains
}

/// 子域名查询器
pub struct SubdomainFinder {
    transport: Arc<dyn HttpTransport>,
    endpoint: String,
    cancel: CancellationToken,
}

impl SubdomainFinder {
    pub fn new(transport: Arc<dyn HttpTransport>, endpoint: impl Into<String>, cancel: CancellationToken) -> Self {
        SubdomainFinder {
            transport,
            endpoint: endpoint.into(),
            cancel,
        }
    }

    /// 查询域名的子域名，给了输出路径就写入文件（覆盖）
    pub async fn find_subdomains(
        &self,
        domain: &str,
        output_path: Option<&Path>,
        progress: &mut dyn ProgressReporter,
    ) -> Result<SubdomainReport> {
        let domain = strip_scheme(domain);
        let query_url = build_query_url(&self.endpoint, domain)?;
        info!("querying {}", query_url);

        let body = tokio::select! {
            biased;
            _ = self.cancel.cancelled() => return Err(CheckError::Cancelled),
            body = self.transport.get_text(&query_url) => body?,
        };

        let entries = parse_entries(&body)?;
        debug!("crt.sh returned {} entries for {}", entries.len(), domain);

        let mut subdomains: Vec<String> = extract_subdomains(&entries, progress).into_iter().collect();
        subdomains.sort();

        if self.cancel.is_cancelled() {
            return Err(CheckError::Cancelled);
        }
        if let Some(path) = output_path {
            write_lines(path, &subdomains)?;
        }

        Ok(SubdomainReport {
            domain: domain.to_string(),
            subdomains,
            output: output_path.map(Path::to_path_buf),
        })
    }
}

use std::time::Duration;

/// 存活检测的超时时间
pub const CHECK_TIMEOUT: Duration = Duration::from_secs(10);
/// crt.sh 响应很慢，给十倍的超时
pub const SUBDOMAIN_TIMEOUT: Duration = Duration::from_secs(100);
pub const CRT_ENDPOINT: &str = "https://crt.sh/";

/// 运行配置
#[derive(Debug, Clone)]
pub struct CheckConfig {
    /// HEAD 存活检测超时
    pub check_timeout: Duration,
    /// 子域名查询超时
    pub subdomain_timeout: Duration,
    /// 证书透明度查询接口
    pub crt_endpoint: String,
    /// 是否跟随重定向
    pub follow_redirects: bool,
    /// 最大重定向次数
    pub max_redirects: usize,
    pub user_agent: String,
}

impl Default for CheckConfig {
    fn default() -> Self {
        CheckConfig {
            check_timeout: CHECK_TIMEOUT,
            subdomain_timeout: SUBDOMAIN_TIMEOUT,
            crt_endpoint: CRT_ENDPOINT.to_string(),
            follow_redirects: true,
            max_redirects: 10,
            user_agent: format!("checkalive/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

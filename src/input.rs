use std::ffi::OsString;
use std::fmt;

use clap::Parser;

use crate::error::{CheckError, Result};

/// 默认可接受的状态码
pub const DEFAULT_STATUS_CODES: &str = "200,302";

#[derive(Parser, Debug)]
#[command(name = "checkalive")]
#[command(version)]
#[command(about = "Check if URLs are alive and find subdomains", long_about = None)]
pub struct Opts {
    /// Single URL to check or find subdomains for
    #[arg(short, long)]
    pub url: Option<String>,

    /// File containing URLs to check (also accepted as -us)
    #[arg(long)]
    pub urls: Option<String>,

    /// Comma-separated list of acceptable status codes
    #[arg(short, long = "status-code", default_value = DEFAULT_STATUS_CODES)]
    pub status_code: String,

    /// File to output alive URLs or subdomains when checking multiple URLs or finding subdomains
    #[arg(short, long)]
    pub output: Option<String>,

    /// Find subdomains for the provided URL (also accepted as -fs)
    #[arg(long = "find-subdomain")]
    pub find_subdomain: bool,

    /// Print debug logs to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Opts {
    /// 解析命令行，先把 -us / -fs 这类双字母短参数改写成长参数
    pub fn parse_from_env() -> Self {
        Opts::parse_from(rewrite_legacy_flags(std::env::args_os()))
    }
}

/// clap 的短参数只能是单个字符，这里把 `-us`、`-fs` 映射到对应的长参数
pub fn rewrite_legacy_flags<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| match arg.to_str() {
            Some("-us") => OsString::from("--urls"),
            Some("-fs") => OsString::from("--find-subdomain"),
            Some(s) if s.starts_with("-us=") => OsString::from(format!("--urls={}", &s["-us=".len()..])),
            _ => arg,
        })
        .collect()
}

/// 可接受的HTTP状态码，保持输入顺序。
///
/// 任何整数都可以写进列表，超出 HTTP 状态码范围的值永远匹配不上。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusCodes(Vec<i64>);

impl StatusCodes {
    pub fn new(codes: Vec<i64>) -> Self {
        StatusCodes(codes)
    }

    pub fn contains(&self, status: u16) -> bool {
        self.0.contains(&i64::from(status))
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.0
    }
}

impl Default for StatusCodes {
    fn default() -> Self {
        StatusCodes(vec![200, 302])
    }
}

impl fmt::Display for StatusCodes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

impl std::str::FromStr for StatusCodes {
    type Err = CheckError;

    fn from_str(s: &str) -> Result<Self> {
        parse_status_codes(s)
    }
}

/// 解析逗号分隔的状态码列表，任何一项不是整数都算失败
pub fn parse_status_codes(status_codes: &str) -> Result<StatusCodes> {
    status_codes
        .split(',')
        .map(|code| {
            let code = code.trim();
            code.parse::<i64>()
                .map_err(|_| CheckError::InvalidStatusCode(code.to_string()))
        })
        .collect::<Result<Vec<i64>>>()
        .map(StatusCodes)
}

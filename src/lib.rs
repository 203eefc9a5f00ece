//! # checkalive
//!
//! 检测URL是否存活，以及通过证书透明度日志（crt.sh）枚举子域名。
//!
//! ## 特性
//!
//! - 🔍 **存活检测**: HEAD 请求，跟随重定向，状态码在给定列表中即为存活
//! - 📄 **批量检测**: 从文件逐行读取URL，顺序检测并显示进度
//! - 🌐 **子域名枚举**: 查询 crt.sh，合并 `common_name` 和 `name_value` 并去重
//!
//! ## 快速开始
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use checkalive::{parse_status_codes, CheckConfig, ReqwestTransport, UrlChecker};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let transport = Arc::new(ReqwestTransport::new(&CheckConfig::default())?);
//!     let checker = UrlChecker::new(transport);
//!     let codes = parse_status_codes("200,302")?;
//!
//!     match checker.check_url("example.com", &codes).await {
//!         Some(url) => println!("{} is alive", url),
//!         None => println!("not alive"),
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## 子域名
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use checkalive::{CheckConfig, NoProgress, ReqwestTransport, SubdomainFinder};
//! use tokio_util::sync::CancellationToken;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = CheckConfig::default();
//!     let transport = Arc::new(ReqwestTransport::new(&config)?);
//!     let finder = SubdomainFinder::new(transport, config.crt_endpoint, CancellationToken::new());
//!
//!     let report = finder.find_subdomains("example.com", None, &mut NoProgress).await?;
//!     for subdomain in report.subdomains {
//!         println!("{}", subdomain);
//!     }
//!     Ok(())
//! }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod batch;
pub mod cancel;
pub mod config;
pub mod crtsh;
pub mod dispatch;
pub mod error;
pub mod input;
pub mod logger;
pub mod output;
pub mod progress;
pub mod transport;
pub mod util;
pub mod verify;

// 重新导出主要的公共API
pub use batch::{BatchChecker, BatchReport};
pub use config::CheckConfig;
pub use crtsh::{extract_subdomains, CrtEntry, SubdomainFinder, SubdomainReport};
pub use dispatch::{Command, Runner};
pub use error::{CheckError, Result};
pub use input::{parse_status_codes, Opts, StatusCodes};
pub use output::Console;
pub use progress::{progress_percentage, ConsoleProgress, NoProgress, ProgressReporter};
pub use transport::{HttpTransport, ReqwestTransport};
pub use util::{normalize_url, strip_scheme};
pub use verify::{ProbeOutcome, UrlChecker};

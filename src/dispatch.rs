use std::path::PathBuf;
use std::sync::Arc;

use indicatif::ProgressDrawTarget;
use log::debug;
use tokio_util::sync::CancellationToken;

use crate::batch::BatchChecker;
use crate::cancel::cancellation_message;
use crate::config::CheckConfig;
use crate::crtsh::SubdomainFinder;
use crate::error::{CheckError, Result};
use crate::input::{parse_status_codes, Opts, StatusCodes};
use crate::output::{alive_line, not_alive_line, Console};
use crate::progress::ConsoleProgress;
use crate::transport::HttpTransport;
use crate::util::strip_scheme;
use crate::verify::UrlChecker;

pub const USAGE_HINT: &str =
    "Please provide a URL, a file containing URLs, or use the --find-subdomain option.";
pub const INVALID_STATUS_CODES: &str =
    "Invalid status code format. Please provide a comma-separated list of integers.";

/// 进程退出码
pub const EXIT_OK: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;

/// 根据命令行参数选出的动作
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `-u` 加 `-fs`：查询子域名
    FindSubdomains { domain: String, output: Option<PathBuf> },
    /// 只有 `-u`：检测单个URL
    CheckUrl { url: String, status_codes: StatusCodes },
    /// `-us`：批量检测文件中的URL
    CheckFile {
        path: PathBuf,
        status_codes: StatusCodes,
        output: Option<PathBuf>,
    },
    /// 什么都没给
    Usage,
}

impl Command {
    /// 状态码在任何网络请求之前解析，格式错误直接返回错误
    pub fn from_opts(opts: &Opts) -> Result<Self> {
        let status_codes = parse_status_codes(&opts.status_code)?;
        let output = opts.output.as_ref().map(PathBuf::from);

        let command = match (&opts.url, &opts.urls) {
            (Some(url), _) if opts.find_subdomain => Command::FindSubdomains {
                domain: url.clone(),
                output,
            },
            (Some(url), _) => Command::CheckUrl {
                url: url.clone(),
                status_codes,
            },
            (None, Some(path)) => Command::CheckFile {
                path: PathBuf::from(path),
                status_codes,
                output,
            },
            (None, None) => Command::Usage,
        };
        Ok(command)
    }
}

/// 执行命令并把错误转换成用户可见的提示
pub struct Runner {
    transport: Arc<dyn HttpTransport>,
    config: CheckConfig,
    cancel: CancellationToken,
    console: Console,
    draw_progress: bool,
}

impl Runner {
    pub fn new(transport: Arc<dyn HttpTransport>, config: CheckConfig, cancel: CancellationToken) -> Self {
        Runner {
            transport,
            config,
            cancel,
            console: Console::stdout(),
            draw_progress: true,
        }
    }

    /// 把提示和结果写到指定的 console，进度条不再绘制
    pub fn with_console(mut self, console: Console) -> Self {
        self.console = console;
        self.draw_progress = false;
        self
    }

    fn progress(&self) -> ConsoleProgress {
        if self.draw_progress {
            ConsoleProgress::new(self.console.clone(), ProgressDrawTarget::stdout())
        } else {
            ConsoleProgress::hidden(self.console.clone())
        }
    }

    /// 解析参数并执行，返回进程退出码
    pub async fn run(&self, opts: &Opts) -> i32 {
        let command = match Command::from_opts(opts) {
            Ok(command) => command,
            Err(e) => {
                debug!("{}", e);
                self.console.line(INVALID_STATUS_CODES);
                return EXIT_FAILURE;
            }
        };
        self.execute(command).await
    }

    pub async fn execute(&self, command: Command) -> i32 {
        let result = match command {
            Command::FindSubdomains { domain, output } => self.find_subdomains(&domain, output).await,
            Command::CheckUrl { url, status_codes } => self.check_url(&url, &status_codes).await,
            Command::CheckFile {
                path,
                status_codes,
                output,
            } => self.check_file(path, &status_codes, output).await,
            Command::Usage => {
                self.console.line(USAGE_HINT);
                Ok(())
            }
        };

        match result {
            Ok(()) => EXIT_OK,
            Err(CheckError::Cancelled) => {
                self.console.line(cancellation_message());
                EXIT_FAILURE
            }
            Err(e) => {
                debug!("command failed: {:?}", e);
                EXIT_OK
            }
        }
    }

    async fn check_url(&self, url: &str, status_codes: &StatusCodes) -> Result<()> {
        let checker = UrlChecker::new(self.transport.clone());
        let outcome = tokio::select! {
            biased;
            _ = self.cancel.cancelled() => return Err(CheckError::Cancelled),
            outcome = checker.check_url(url, status_codes) => outcome,
        };

        match outcome {
            Some(alive) => self.console.line(alive_line(&alive, status_codes)),
            None => self.console.line(not_alive_line(url)),
        }
        Ok(())
    }

    async fn check_file(&self, path: PathBuf, status_codes: &StatusCodes, output: Option<PathBuf>) -> Result<()> {
        let batch = BatchChecker::new(UrlChecker::new(self.transport.clone()), self.cancel.clone());
        let mut progress = self.progress();

        match batch
            .check_urls_from_file(&path, status_codes, output.as_deref(), &mut progress)
            .await
        {
            Ok(report) => {
                if let Some(output) = report.output {
                    self.console
                        .line(format_args!("Alive URLs have been written to {}", output.display()));
                }
                Ok(())
            }
            Err(CheckError::Cancelled) => Err(CheckError::Cancelled),
            Err(e @ CheckError::InputNotFound(_)) => {
                self.console.line(&e);
                Err(e)
            }
            Err(e) => {
                self.console
                    .line(format_args!("An error occurred while checking URLs from file: {}", e));
                Err(e)
            }
        }
    }

    async fn find_subdomains(&self, domain: &str, output: Option<PathBuf>) -> Result<()> {
        let finder = SubdomainFinder::new(
            self.transport.clone(),
            self.config.crt_endpoint.clone(),
            self.cancel.clone(),
        );
        let mut progress = self.progress();

        match finder.find_subdomains(domain, output.as_deref(), &mut progress).await {
            Ok(report) => {
                match report.output {
                    Some(output) => self
                        .console
                        .line(format_args!("Subdomains have been written to {}", output.display())),
                    None => {
                        for subdomain in &report.subdomains {
                            self.console.line(subdomain);
                        }
                    }
                }
                Ok(())
            }
            Err(CheckError::Cancelled) => Err(CheckError::Cancelled),
            Err(e) if e.is_fetch_failure() => {
                self.console
                    .line(format_args!("Failed to fetch subdomains for {}: {}", strip_scheme(domain), e));
                Err(e)
            }
            Err(e @ CheckError::InvalidJson(_)) => {
                self.console.line("Invalid JSON response.");
                Err(e)
            }
            Err(e) => {
                self.console
                    .line(format_args!("An error occurred while finding subdomains: {}", e));
                Err(e)
            }
        }
    }
}

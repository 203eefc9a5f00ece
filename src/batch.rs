use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{debug, info};
use tokio_util::sync::CancellationToken;

use crate::error::{CheckError, Result};
use crate::input::StatusCodes;
use crate::output::{alive_line, write_lines};
use crate::progress::{progress_percentage, ProgressReporter};
use crate::verify::UrlChecker;

/// 批量检测结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchReport {
    /// 输入文件的行数
    pub total: usize,
    /// 存活的URL，保持输入文件中的原始写法和顺序
    pub alive: Vec<String>,
    /// 写入的结果文件
    pub output: Option<PathBuf>,
}

/// 从文件读取URL并逐个检测
pub struct BatchChecker {
    checker: UrlChecker,
    cancel: CancellationToken,
}

impl BatchChecker {
    pub fn new(checker: UrlChecker, cancel: CancellationToken) -> Self {
        BatchChecker { checker, cancel }
    }

    /// 逐行检测文件中的URL。
    ///
    /// 每行去掉首尾空白后检测，存活的立即通过 `progress` 输出一行确认。全部检测完成后，
    /// 给了输出路径就把存活列表写进去（覆盖）。空文件不上报百分比，
    /// 只结束进度行。被取消时直接返回 [`CheckError::Cancelled`]，不写输出文件。
    pub async fn check_urls_from_file(
        &self,
        file_path: &Path,
        status_codes: &StatusCodes,
        output_path: Option<&Path>,
        progress: &mut dyn ProgressReporter,
    ) -> Result<BatchReport> {
        let content = fs::read_to_string(file_path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => CheckError::InputNotFound(file_path.to_path_buf()),
            _ => CheckError::Io(e),
        })?;

        let urls: Vec<&str> = content.lines().collect();
        let total = urls.len();
        info!("checking {} urls from {}", total, file_path.display());
        progress.start(total);

        let mut alive = Vec::new();
        for (index, line) in urls.iter().enumerate() {
            if self.cancel.is_cancelled() {
                return Err(CheckError::Cancelled);
            }

            let url = line.trim();
            let outcome = tokio::select! {
                biased;
                _ = self.cancel.cancelled() => return Err(CheckError::Cancelled),
                outcome = self.checker.probe(url, status_codes) => outcome,
            };

            if outcome.is_alive() {
                progress.println(&alive_line(outcome.url(), status_codes));
                alive.push(url.to_string());
            }

            if let Some(percent) = progress_percentage(index, total) {
                progress.update(percent);
            }
        }
        progress.finish();

        if self.cancel.is_cancelled() {
            return Err(CheckError::Cancelled);
        }
        if let Some(path) = output_path {
            write_lines(path, &alive)?;
            debug!("wrote {} alive urls to {}", alive.len(), path.display());
        }

        Ok(BatchReport {
            total,
            alive,
            output: output_path.map(Path::to_path_buf),
        })
    }
}

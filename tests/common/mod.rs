#![allow(dead_code)]

use std::collections::HashMap;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use checkalive::output::Console;
use checkalive::{CheckError, HttpTransport, ProgressReporter, Result};
use tokio_util::sync::CancellationToken;

/// GET 请求的预设响应
#[derive(Debug, Clone)]
pub enum GetReply {
    Body(String),
    Status(u16),
    Refused,
}

/// 不走网络的传输层，按预设返回结果并记录请求
pub struct FakeTransport {
    statuses: HashMap<String, u16>,
    get_reply: GetReply,
    cancel_on_head: Option<(usize, CancellationToken)>,
    cancel_on_get: Option<CancellationToken>,
    pub heads: Mutex<Vec<String>>,
    pub gets: Mutex<Vec<String>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        FakeTransport {
            statuses: HashMap::new(),
            get_reply: GetReply::Refused,
            cancel_on_head: None,
            cancel_on_get: None,
            heads: Mutex::new(Vec::new()),
            gets: Mutex::new(Vec::new()),
        }
    }

    /// 没有登记的URL一律当作连接被拒绝
    pub fn with_status(mut self, url: &str, status: u16) -> Self {
        self.statuses.insert(url.to_string(), status);
        self
    }

    pub fn with_get_reply(mut self, reply: GetReply) -> Self {
        self.get_reply = reply;
        self
    }

    /// 第 n 次 HEAD 请求（从 1 开始）时取消 token
    pub fn cancel_on_head(mut self, nth: usize, token: CancellationToken) -> Self {
        self.cancel_on_head = Some((nth, token));
        self
    }

    /// GET 请求返回之前取消 token
    pub fn cancel_on_get(mut self, token: CancellationToken) -> Self {
        self.cancel_on_get = Some(token);
        self
    }

    pub fn head_count(&self) -> usize {
        self.heads.lock().unwrap().len()
    }

    pub fn get_count(&self) -> usize {
        self.gets.lock().unwrap().len()
    }
}

#[async_trait]
impl HttpTransport for FakeTransport {
    async fn head_status(&self, url: &str) -> Result<u16> {
        let count = {
            let mut heads = self.heads.lock().unwrap();
            heads.push(url.to_string());
            heads.len()
        };
        if let Some((nth, token)) = &self.cancel_on_head {
            if *nth == count {
                token.cancel();
            }
        }

        self.statuses
            .get(url)
            .copied()
            .ok_or_else(|| CheckError::Network("connection refused".to_string()))
    }

    async fn get_text(&self, url: &str) -> Result<String> {
        self.gets.lock().unwrap().push(url.to_string());
        if let Some(token) = &self.cancel_on_get {
            token.cancel();
        }
        match &self.get_reply {
            GetReply::Body(body) => Ok(body.clone()),
            GetReply::Status(status) => Err(CheckError::HttpStatus(*status)),
            GetReply::Refused => Err(CheckError::Network("connection refused".to_string())),
        }
    }
}

/// 记录所有进度事件
#[derive(Debug, Default)]
pub struct RecordingProgress {
    pub started: Option<usize>,
    pub updates: Vec<f64>,
    pub lines: Vec<String>,
    pub finished: usize,
}

impl ProgressReporter for RecordingProgress {
    fn start(&mut self, total: usize) {
        self.started = Some(total);
    }

    fn println(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }

    fn update(&mut self, percent: f64) {
        self.updates.push(percent);
    }

    fn finish(&mut self) {
        self.finished += 1;
    }
}

/// 临时目录下的唯一文件路径
pub fn temp_path(name: &str) -> PathBuf {
    static COUNTER: AtomicUsize = AtomicUsize::new(0);
    let n = COUNTER.fetch_add(1, Ordering::SeqCst);
    std::env::temp_dir().join(format!("checkalive-{}-{}-{}", std::process::id(), n, name))
}

/// 写入临时文件并返回路径
pub fn temp_file(name: &str, content: &str) -> PathBuf {
    let path = temp_path(name);
    std::fs::write(&path, content).unwrap();
    path
}

/// 收集 [`Console`] 输出的内存缓冲区
#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn console(&self) -> Console {
        Console::new(self.clone())
    }

    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(String::from).collect()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

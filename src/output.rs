use std::fmt::Display;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::sync::{Arc, Mutex};

use colored::Colorize;

use crate::error::Result;
use crate::input::StatusCodes;

/// 按行写入结果文件，已存在时覆盖
pub fn write_lines<P, I, S>(output_path: P, lines: I) -> Result<()>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let file = File::create(output_path.as_ref())?;
    let mut writer = BufWriter::new(file);
    for line in lines {
        writeln!(writer, "{}", line.as_ref())?;
    }
    writer.flush()?;
    Ok(())
}

/// 存活确认行
pub fn alive_line(url: &str, status_codes: &StatusCodes) -> String {
    format!("{} is alive with status code in {}", url.green(), status_codes)
}

pub fn not_alive_line(url: &str) -> String {
    format!("{} is not alive.", url.red())
}

/// 面向用户的输出，默认是 stdout，可以换成任意 writer
#[derive(Clone)]
pub struct Console {
    out: Arc<Mutex<Box<dyn Write + Send>>>,
}

impl Console {
    pub fn stdout() -> Self {
        Console::new(io::stdout())
    }

    pub fn new(out: impl Write + Send + 'static) -> Self {
        Console {
            out: Arc::new(Mutex::new(Box::new(out))),
        }
    }

    /// 输出一行，写失败时静默丢弃
    pub fn line(&self, line: impl Display) {
        if let Ok(mut out) = self.out.lock() {
            let _ = writeln!(out, "{}", line);
            let _ = out.flush();
        }
    }
}

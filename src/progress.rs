use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use crate::output::Console;

/// 计算进度百分比 `(index+1)/total*100`，total 为 0 时没有进度可言
pub fn progress_percentage(index: usize, total: usize) -> Option<f64> {
    if total == 0 {
        return None;
    }
    Some((index + 1) as f64 / total as f64 * 100.0)
}

/// 进度上报
pub trait ProgressReporter: Send {
    /// 开始处理之前调用一次
    fn start(&mut self, _total: usize) {}

    /// 每处理完一项调用一次，百分比单调递增
    fn update(&mut self, percent: f64);

    /// 输出一行结果，不打乱进度行
    fn println(&mut self, line: &str);

    /// 全部处理完成后调用一次
    fn finish(&mut self);
}

/// 单行刷新的 `Progress: xx.xx%` 进度条
pub struct ConsoleProgress {
    bar: ProgressBar,
    console: Console,
}

impl ConsoleProgress {
    pub fn stdout() -> Self {
        ConsoleProgress::new(Console::stdout(), ProgressDrawTarget::stdout())
    }

    pub fn new(console: Console, target: ProgressDrawTarget) -> Self {
        let bar = ProgressBar::with_draw_target(Some(0), target);
        if let Ok(style) = ProgressStyle::with_template("Progress: {msg}") {
            bar.set_style(style);
        }
        ConsoleProgress { bar, console }
    }

    /// 结果行写到 `console`，进度条不绘制
    pub fn hidden(console: Console) -> Self {
        ConsoleProgress::new(console, ProgressDrawTarget::hidden())
    }

    pub fn bar(&self) -> &ProgressBar {
        &self.bar
    }
}

impl ProgressReporter for ConsoleProgress {
    fn start(&mut self, total: usize) {
        self.bar.set_length(total as u64);
    }

    fn update(&mut self, percent: f64) {
        self.bar.inc(1);
        self.bar.set_message(format!("{:.2}%", percent));
    }

    fn println(&mut self, line: &str) {
        let console = &self.console;
        self.bar.suspend(|| console.line(line));
    }

    fn finish(&mut self) {
        self.bar.finish();
    }
}

/// 不显示进度，结果行直接打到 stdout
#[derive(Debug, Default)]
pub struct NoProgress;

impl ProgressReporter for NoProgress {
    fn update(&mut self, _percent: f64) {}

    fn println(&mut self, line: &str) {
        println!("{}", line);
    }

    fn finish(&mut self) {}
}

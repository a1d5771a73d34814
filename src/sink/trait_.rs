use crate::level::LogLevel;
use anyhow::Result;

/// 控制台 Sink trait
///
/// 接收渲染后的模板字符串和有序样式列表，按级别输出。
/// 约定：模板中的 `%c` 占位符与样式列表按顺序一一对应
pub trait Sink: Send + Sync {
    /// 输出一条渲染后的日志
    fn write(&self, level: LogLevel, template: &str, styles: &[String]) -> Result<()>;

    /// 刷新缓冲区（默认实现为空操作）
    fn flush(&self) -> Result<()> {
        Ok(())
    }
}

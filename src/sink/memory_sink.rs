use crate::level::LogLevel;
use crate::sink::Sink;
use anyhow::Result;
use std::sync::RwLock;

/// 一条被 Sink 捕获的输出
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkEntry {
    /// 日志级别
    pub level: LogLevel,
    /// 模板字符串（含 `%c` 占位符）
    pub template: String,
    /// 有序样式列表
    pub styles: Vec<String>,
}

/// 内存 Sink
///
/// 按顺序记录收到的每条输出，模板和样式列表原样保存。
/// 用于测试和嵌入场景中对 Sink 调用的断言
#[derive(Debug, Default)]
pub struct MemorySink {
    entries: RwLock<Vec<SinkEntry>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// 已捕获的输出快照
    pub fn entries(&self) -> Vec<SinkEntry> {
        self.entries.read().unwrap().clone()
    }

    /// 取走全部已捕获的输出并清空
    pub fn take(&self) -> Vec<SinkEntry> {
        std::mem::take(&mut *self.entries.write().unwrap())
    }

    /// 已捕获的输出条数
    pub fn len(&self) -> usize {
        self.entries.read().unwrap().len()
    }

    /// 是否尚未捕获任何输出
    pub fn is_empty(&self) -> bool {
        self.entries.read().unwrap().is_empty()
    }

    /// 清空已捕获的输出
    pub fn clear(&self) {
        self.entries.write().unwrap().clear();
    }
}

impl Sink for MemorySink {
    fn write(&self, level: LogLevel, template: &str, styles: &[String]) -> Result<()> {
        self.entries.write().unwrap().push(SinkEntry {
            level,
            template: template.to_string(),
            styles: styles.to_vec(),
        });
        Ok(())
    }
}

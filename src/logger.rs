use crate::level::LogLevel;
use crate::markdown;
use crate::rule::RuleEngine;
use crate::sink::Sink;
use anyhow::Result;
use serde::Deserialize;
use smart_default::SmartDefault;
use std::sync::{Arc, RwLock};

/// 前缀调色板
///
/// 注册表创建 Logger 时按轮转顺序分配，只影响前缀的显示效果
pub(crate) const PREFIX_COLORS: &[&str] = &[
    "#F2777A", "#F99157", "#FFCC66", "#99CC99", "#66CCCC", "#6699CC", "#CC99CC",
];

/// Logger 创建选项
#[derive(Debug, Clone, Deserialize, SmartDefault, PartialEq)]
#[serde(default)]
pub struct LoggerOptions {
    /// 前缀，作为实例的唯一键参与通配符匹配
    pub prefix: String,

    /// 是否解析消息中的行内标记
    #[default = true]
    pub markdown: bool,
}

/// 前缀日志器
///
/// 绑定一个前缀。每次分级调用先向规则引擎查询前缀是否启用，
/// 启用时渲染行内标记并转发给 Sink；未启用时不产生任何输出。
/// 实例自身不缓存启用状态，启用与否总是由规则引擎实时求值
pub struct Logger {
    prefix: String,
    markdown: bool,
    color: &'static str,
    rules: Arc<RwLock<RuleEngine>>,
    sink: Arc<dyn Sink>,
}

impl Logger {
    /// 创建 Logger
    ///
    /// 通常通过 [`crate::registry::LoggerRegistry::get_or_create`] 创建，
    /// 以保证同一前缀只存在一个实例
    pub fn new(
        options: LoggerOptions,
        color: &'static str,
        rules: Arc<RwLock<RuleEngine>>,
        sink: Arc<dyn Sink>,
    ) -> Self {
        Self {
            prefix: options.prefix,
            markdown: options.markdown,
            color,
            rules,
            sink,
        }
    }

    /// 前缀
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// 是否解析行内标记
    pub fn markdown(&self) -> bool {
        self.markdown
    }

    /// 前缀显示颜色
    pub fn color(&self) -> &'static str {
        self.color
    }

    /// 当前前缀是否启用
    pub fn is_active(&self) -> bool {
        self.rules.read().unwrap().is_active(&self.prefix)
    }

    /// 按指定级别记录日志
    pub fn write(&self, level: LogLevel, message: &str) -> Result<()> {
        if !self.is_active() {
            return Ok(());
        }

        let rendered = markdown::render(message, self.markdown);
        let (template, styles) = self.decorate(rendered);
        self.sink.write(level, &template, &styles)
    }

    /// 记录 LOG 级别日志
    pub fn log(&self, message: &str) -> Result<()> {
        self.write(LogLevel::Log, message)
    }

    /// 记录 INFO 级别日志
    pub fn info(&self, message: &str) -> Result<()> {
        self.write(LogLevel::Info, message)
    }

    /// 记录 WARN 级别日志
    pub fn warn(&self, message: &str) -> Result<()> {
        self.write(LogLevel::Warn, message)
    }

    /// 记录 ERROR 级别日志
    pub fn error(&self, message: &str) -> Result<()> {
        self.write(LogLevel::Error, message)
    }

    /// 在消息模板前拼接前缀显示块
    ///
    /// 前缀为空时不做任何修饰
    fn decorate(&self, rendered: markdown::RenderedMessage) -> (String, Vec<String>) {
        if self.prefix.is_empty() {
            return (rendered.template, rendered.styles);
        }

        let template = format!("%c{}%c {}", self.prefix, rendered.template);
        let mut styles = Vec::with_capacity(rendered.styles.len() + 2);
        styles.push(format!("color: {}; font-weight: bold;", self.color));
        styles.push(String::new());
        styles.extend(rendered.styles);
        (template, styles)
    }
}

use crate::level::LogLevel;
use crate::sink::Sink;
use anyhow::Result;
use serde::Deserialize;
use smart_default::SmartDefault;
use std::io::{self, Write};

/// 输出目标
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, SmartDefault)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    /// warn/error 输出到标准错误，其余输出到标准输出
    #[default]
    Auto,
    /// 全部输出到标准输出
    Stdout,
    /// 全部输出到标准错误
    Stderr,
}

/// ConsoleSink 配置
#[derive(Debug, Clone, Deserialize, SmartDefault)]
#[serde(default)]
pub struct ConsoleSinkConfig {
    /// 输出目标
    pub target: Target,

    /// 是否把样式串翻译为 ANSI 转义序列
    #[default = true]
    pub use_colors: bool,
}

/// 终端 Sink
///
/// 把渲染后的模板输出到终端。启用颜色时，模板中的 `%c` 占位符
/// 按顺序替换为对应样式串翻译出的 ANSI 转义序列；
/// 关闭颜色时占位符被去除，样式串丢弃
pub struct ConsoleSink {
    config: ConsoleSinkConfig,
}

impl ConsoleSink {
    pub fn new(config: ConsoleSinkConfig) -> Self {
        Self { config }
    }

    /// 把模板和样式列表合成为最终输出行
    fn compose(&self, template: &str, styles: &[String]) -> String {
        let mut result = String::with_capacity(template.len() + styles.len() * 8);
        let mut styles = styles.iter();

        let mut parts = template.split("%c");
        if let Some(first) = parts.next() {
            result.push_str(first);
        }
        for part in parts {
            if self.config.use_colors {
                match styles.next() {
                    Some(style) => result.push_str(&ansi_for_style(style)),
                    // 样式数量不足时保持重置状态
                    None => result.push_str("\x1b[0m"),
                }
            }
            result.push_str(part);
        }

        result
    }
}

impl Sink for ConsoleSink {
    fn write(&self, level: LogLevel, template: &str, styles: &[String]) -> Result<()> {
        let line = self.compose(template, styles);

        let to_stderr = match self.config.target {
            Target::Stdout => false,
            Target::Stderr => true,
            Target::Auto => level >= LogLevel::Warn,
        };

        if to_stderr {
            let mut stderr = io::stderr().lock();
            writeln!(stderr, "{}", line)?;
            stderr.flush()?;
        } else {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", line)?;
            stdout.flush()?;
        }

        Ok(())
    }
}

impl From<ConsoleSinkConfig> for ConsoleSink {
    fn from(config: ConsoleSinkConfig) -> Self {
        ConsoleSink::new(config)
    }
}

/// 把 CSS 风格的样式串翻译为 ANSI 转义序列
///
/// 空串表示重置。`color: #RRGGBB` 翻译为真彩色前景色，
/// 其余已知样式映射到对应的 SGR 属性，未知样式退化为粗体
fn ansi_for_style(style: &str) -> String {
    if style.is_empty() {
        return "\x1b[0m".to_string();
    }
    if style == crate::markdown::BOLD_STYLE {
        return "\x1b[1m".to_string();
    }
    if style == crate::markdown::ITALIC_STYLE {
        return "\x1b[3m".to_string();
    }
    if style == crate::markdown::CODE_STYLE {
        return "\x1b[7m".to_string(); // inverse
    }
    if let Some((r, g, b)) = parse_hex_color(style) {
        return format!("\x1b[1m\x1b[38;2;{};{};{}m", r, g, b);
    }
    "\x1b[1m".to_string()
}

/// 从样式串中提取 `#RRGGBB` 颜色
fn parse_hex_color(style: &str) -> Option<(u8, u8, u8)> {
    let start = style.find('#')?;
    let hex = style.get(start + 1..start + 7)?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

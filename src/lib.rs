//! Logdown - 面向开发者的控制台日志门面
//!
//! 以前缀为键创建日志器，通过通配符规则选择性启用输出，
//! 并把消息中的行内标记（粗体、斜体、代码）渲染为控制台样式指令。
//!
//! ## 模块
//!
//! - **pattern**: 单条通配符规则（裸 `*`、`text*`、`*text`、精确匹配）
//! - **rule**: 规则引擎（启用替换、禁用追加、禁用绝对优先）
//! - **markdown**: 行内标记渲染器（`%c` 模板 + 有序样式列表）
//! - **logger**: 前缀日志器（log/info/warn/error 四级输出）
//! - **registry**: 前缀 → 实例 去重注册表
//! - **sink**: 输出端抽象（终端 Sink、内存 Sink）
//! - **global**: 进程级共享入口
//!
//! ## 快速开始
//!
//! ```no_run
//! use logdown::{create_logger, enable, disable, LoggerOptions};
//!
//! fn main() -> anyhow::Result<()> {
//!     // 启用所有前缀，再单独禁用噪声较大的前缀
//!     enable("*");
//!     disable("noisy*");
//!
//!     let logger = create_logger(LoggerOptions {
//!         prefix: "api".to_string(),
//!         markdown: true,
//!     });
//!
//!     logger.info("server *started* on port `8080`")?;
//!     Ok(())
//! }
//! ```

pub mod global;
pub mod level;
pub mod logger;
pub mod macros;
pub mod markdown;
pub mod pattern;
pub mod registry;
pub mod rule;
pub mod sink;

// 重新导出主要的公共 API
pub use global::{create_logger, disable, enable, global_registry, is_active};
pub use level::{LogLevel, ParseLevelError};
pub use logger::{Logger, LoggerOptions};
pub use markdown::{render, RenderedMessage};
pub use pattern::{MatchKind, Pattern, Polarity};
pub use registry::LoggerRegistry;
pub use rule::RuleEngine;
pub use sink::{ConsoleSink, ConsoleSinkConfig, MemorySink, Sink, SinkEntry, Target};

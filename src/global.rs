use crate::logger::{Logger, LoggerOptions};
use crate::registry::LoggerRegistry;
use crate::sink::{ConsoleSink, ConsoleSinkConfig};
use std::sync::Arc;

/// 全局 LoggerRegistry 单例
///
/// 默认绑定一个输出到终端的 ConsoleSink
static GLOBAL_REGISTRY: once_cell::sync::Lazy<Arc<LoggerRegistry>> =
    once_cell::sync::Lazy::new(|| {
        let sink = Arc::new(ConsoleSink::new(ConsoleSinkConfig::default()));
        Arc::new(LoggerRegistry::new(sink))
    });

/// 获取全局 LoggerRegistry
pub fn global_registry() -> Arc<LoggerRegistry> {
    Arc::clone(&GLOBAL_REGISTRY)
}

/// 获取或创建指定选项的 Logger（全局）
///
/// 同一前缀重复调用返回同一个实例
///
/// # 示例
///
/// ```no_run
/// use logdown::{create_logger, enable, LoggerOptions};
///
/// fn example() -> anyhow::Result<()> {
///     enable("api*");
///
///     let logger = create_logger(LoggerOptions {
///         prefix: "api".to_string(),
///         markdown: true,
///     });
///     logger.info("request *accepted*")?;
///     Ok(())
/// }
/// ```
pub fn create_logger(options: LoggerOptions) -> Arc<Logger> {
    global_registry().get_or_create(options)
}

/// 设置启用规则，替换全部现有规则（全局，影响所有 Logger）
pub fn enable(spec: &str) {
    global_registry().enable(spec);
}

/// 追加禁用规则（全局，影响所有 Logger）
pub fn disable(spec: &str) {
    global_registry().disable(spec);
}

/// 判断前缀当前是否启用（全局）
pub fn is_active(prefix: &str) -> bool {
    global_registry().is_active(prefix)
}

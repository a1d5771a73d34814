/// 日志宏模块
///
/// 提供 format! 风格参数的分级日志宏
///
/// # 示例
///
/// ```ignore
/// use logdown::{create_logger, info, LoggerOptions};
///
/// fn main() -> anyhow::Result<()> {
///     let logger = create_logger(LoggerOptions::default());
///
///     info!(logger, "application started")?;
///     info!(logger, "user *{}* logged in", "alice")?;
///
///     Ok(())
/// }
/// ```

/// 记录 LOG 级别日志
///
/// # 示例
///
/// ```ignore
/// log!(logger, "lorem ipsum")?;
/// log!(logger, "loaded {} entries", count)?;
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $($arg:tt)*) => {
        $logger.log(&format!($($arg)*))
    };
}

/// 记录 INFO 级别日志
///
/// # 示例
///
/// ```ignore
/// info!(logger, "user logged in")?;
/// info!(logger, "user *{}* logged in", username)?;
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)*) => {
        $logger.info(&format!($($arg)*))
    };
}

/// 记录 WARN 级别日志
///
/// # 示例
///
/// ```ignore
/// warn!(logger, "high memory usage")?;
/// warn!(logger, "slow query: `{}`", query)?;
/// ```
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)*) => {
        $logger.warn(&format!($($arg)*))
    };
}

/// 记录 ERROR 级别日志
///
/// # 示例
///
/// ```ignore
/// error!(logger, "connection failed")?;
/// error!(logger, "request to _{}_ failed", endpoint)?;
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)*) => {
        $logger.error(&format!($($arg)*))
    };
}

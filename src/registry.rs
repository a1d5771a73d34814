use crate::logger::{Logger, LoggerOptions, PREFIX_COLORS};
use crate::rule::RuleEngine;
use crate::sink::Sink;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

/// Logger 注册表
///
/// 维护 前缀 → Logger 的去重映射和一份共享的规则引擎：
///
/// - 同一前缀只会创建一个实例，重复创建返回已有实例（幂等构造）
/// - enable/disable 作用于共享规则引擎，对所有实例立即生效
///
/// 每个注册表自带独立的规则状态，测试可以各自构造注册表，
/// 互不干扰；进程级共享入口见 [`crate::global`]
pub struct LoggerRegistry {
    loggers: RwLock<HashMap<String, Arc<Logger>>>,
    rules: Arc<RwLock<RuleEngine>>,
    sink: Arc<dyn Sink>,
    next_color: AtomicUsize,
}

impl LoggerRegistry {
    /// 创建注册表，所有 Logger 共用同一个 Sink
    pub fn new(sink: Arc<dyn Sink>) -> Self {
        Self {
            loggers: RwLock::new(HashMap::new()),
            rules: Arc::new(RwLock::new(RuleEngine::new())),
            sink,
            next_color: AtomicUsize::new(0),
        }
    }

    /// 获取或创建指定前缀的 Logger
    ///
    /// 前缀已存在时返回已有实例，新的选项被忽略；
    /// 不存在时创建实例、分配前缀颜色并注册
    pub fn get_or_create(&self, options: LoggerOptions) -> Arc<Logger> {
        let mut loggers = self.loggers.write().unwrap();

        if let Some(logger) = loggers.get(&options.prefix) {
            return Arc::clone(logger);
        }

        let color_index = self.next_color.fetch_add(1, Ordering::Relaxed);
        let color = PREFIX_COLORS[color_index % PREFIX_COLORS.len()];

        let prefix = options.prefix.clone();
        let logger = Arc::new(Logger::new(
            options,
            color,
            Arc::clone(&self.rules),
            Arc::clone(&self.sink),
        ));
        loggers.insert(prefix, Arc::clone(&logger));
        logger
    }

    /// 设置启用规则，替换全部现有规则（对所有实例生效）
    pub fn enable(&self, spec: &str) {
        self.rules.write().unwrap().set_enabled(spec);
    }

    /// 追加禁用规则（对所有实例生效）
    pub fn disable(&self, spec: &str) {
        self.rules.write().unwrap().add_disabled(spec);
    }

    /// 判断前缀当前是否启用
    pub fn is_active(&self, prefix: &str) -> bool {
        self.rules.read().unwrap().is_active(prefix)
    }

    /// 检查指定前缀的 Logger 是否已注册
    pub fn contains(&self, prefix: &str) -> bool {
        self.loggers.read().unwrap().contains_key(prefix)
    }

    /// 获取所有已注册前缀
    pub fn keys(&self) -> Vec<String> {
        self.loggers.read().unwrap().keys().cloned().collect()
    }
}

use crate::pattern::{Pattern, Polarity};

/// 前缀启用/禁用规则引擎
///
/// 维护一份有序的规则集合，回答"某个前缀当前是否启用"：
///
/// - `set_enabled` 用新的启用规则**整体替换**现有规则集
/// - `add_disabled` 把禁用规则**追加**到现有规则集
/// - 判定时禁用规则绝对优先，与调用顺序无关
///
/// 引擎本身不持有锁，调用方（如 [`crate::registry::LoggerRegistry`]）
/// 负责在共享场景下加锁
#[derive(Debug, Default)]
pub struct RuleEngine {
    rules: Vec<Pattern>,
}

impl RuleEngine {
    /// 创建空的规则引擎
    ///
    /// 没有任何规则时，所有前缀都处于禁用状态
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// 设置启用规则，替换全部现有规则
    ///
    /// spec 按 `,` 分割，每个非空片段生成一条启用规则；
    /// 之前通过 `add_disabled` 累积的禁用规则一并被丢弃
    ///
    /// # 示例
    ///
    /// ```
    /// use logdown::rule::RuleEngine;
    ///
    /// let mut engine = RuleEngine::new();
    /// engine.set_enabled("foo*, *bar");
    /// assert!(engine.is_active("foobar"));
    /// ```
    pub fn set_enabled(&mut self, spec: &str) {
        self.rules = Self::parse_spec(spec, Polarity::Enable);
    }

    /// 追加禁用规则，保留全部现有规则
    pub fn add_disabled(&mut self, spec: &str) {
        self.rules
            .extend(Self::parse_spec(spec, Polarity::Disable));
    }

    /// 判断前缀当前是否启用
    ///
    /// 任意禁用规则命中即返回 false；否则至少一条启用规则命中才返回 true。
    /// 规则集为空时返回 false（默认不启用任何前缀）
    pub fn is_active(&self, prefix: &str) -> bool {
        let mut enabled = false;
        for rule in &self.rules {
            if !rule.matches(prefix) {
                continue;
            }
            match rule.polarity() {
                Polarity::Disable => return false,
                Polarity::Enable => enabled = true,
            }
        }
        enabled
    }

    /// 当前规则数量
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// 规则集是否为空
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// 按 `,` 分割 spec 并解析规则，空片段静默丢弃
    fn parse_spec(spec: &str, polarity: Polarity) -> Vec<Pattern> {
        spec.split(',')
            .filter_map(|segment| Pattern::parse(segment, polarity))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_engine_is_inactive() {
        let engine = RuleEngine::new();
        assert!(!engine.is_active("foo"));
        assert!(!engine.is_active(""));
    }

    #[test]
    fn test_enable_all() {
        let mut engine = RuleEngine::new();
        engine.set_enabled("*");

        assert!(engine.is_active("foo"));
        assert!(engine.is_active("bar"));
        assert!(engine.is_active("quz"));
        assert!(engine.is_active("baz"));
    }

    #[test]
    fn test_enable_all_then_disable_all() {
        let mut engine = RuleEngine::new();
        engine.set_enabled("*");
        engine.add_disabled("*");

        assert!(!engine.is_active("foo"));
        assert!(!engine.is_active("bar"));
    }

    #[test]
    fn test_disable_exact() {
        let mut engine = RuleEngine::new();
        engine.set_enabled("*");
        engine.add_disabled("foo");

        assert!(!engine.is_active("foo"));
        assert!(engine.is_active("bar"));
        assert!(engine.is_active("quz"));
        assert!(engine.is_active("baz"));
    }

    #[test]
    fn test_disable_suffix() {
        let mut engine = RuleEngine::new();
        engine.set_enabled("*");
        engine.add_disabled("*foo");

        assert!(!engine.is_active("foo"));
        assert!(!engine.is_active("barfoo"));
        assert!(engine.is_active("bar"));
        assert!(engine.is_active("foobar"));
    }

    #[test]
    fn test_disable_prefix() {
        let mut engine = RuleEngine::new();
        engine.set_enabled("*");
        engine.add_disabled("foo*");

        assert!(!engine.is_active("foo"));
        assert!(!engine.is_active("foobar"));
        assert!(engine.is_active("bar"));
        assert!(engine.is_active("barfoo"));
    }

    #[test]
    fn test_enable_exact_only() {
        let mut engine = RuleEngine::new();
        engine.set_enabled("foo");

        assert!(engine.is_active("foo"));
        assert!(!engine.is_active("bar"));
        assert!(!engine.is_active("foobar"));
    }

    #[test]
    fn test_enable_suffix_only() {
        let mut engine = RuleEngine::new();
        engine.set_enabled("*foo");

        assert!(engine.is_active("foo"));
        assert!(engine.is_active("barfoo"));
        assert!(!engine.is_active("bar"));
        assert!(!engine.is_active("foobar"));
    }

    #[test]
    fn test_enable_prefix_only() {
        let mut engine = RuleEngine::new();
        engine.set_enabled("foo*");

        assert!(engine.is_active("foo"));
        assert!(engine.is_active("foobar"));
        assert!(!engine.is_active("bar"));
        assert!(!engine.is_active("barfoo"));
    }

    #[test]
    fn test_set_enabled_replaces_previous_rules() {
        let mut engine = RuleEngine::new();
        engine.set_enabled("*");
        engine.add_disabled("foo");

        // 第二次 set_enabled 丢弃之前的启用和禁用规则
        engine.set_enabled("foo");
        assert!(engine.is_active("foo"));
        assert!(!engine.is_active("bar"));
        assert_eq!(engine.len(), 1);
    }

    #[test]
    fn test_disable_accumulates() {
        let mut engine = RuleEngine::new();
        engine.set_enabled("*");
        engine.add_disabled("foo");
        engine.add_disabled("bar");

        assert!(!engine.is_active("foo"));
        assert!(!engine.is_active("bar"));
        assert!(engine.is_active("quz"));
    }

    #[test]
    fn test_disable_wins_regardless_of_order() {
        // 禁用规则在启用规则之前追加，仍然优先
        let mut engine = RuleEngine::new();
        engine.set_enabled("foo, *");
        engine.add_disabled("foo");

        assert!(!engine.is_active("foo"));
        assert!(engine.is_active("bar"));
    }

    #[test]
    fn test_comma_separated_segments() {
        let mut engine = RuleEngine::new();
        engine.set_enabled("foo, bar*, *baz");

        assert!(engine.is_active("foo"));
        assert!(engine.is_active("barbell"));
        assert!(engine.is_active("lambaz"));
        assert!(!engine.is_active("quz"));
    }

    #[test]
    fn test_malformed_segments_are_dropped() {
        let mut engine = RuleEngine::new();
        engine.set_enabled("foo, , ,bar");

        assert_eq!(engine.len(), 2);
        assert!(engine.is_active("foo"));
        assert!(engine.is_active("bar"));
    }

    #[test]
    fn test_is_active_on_unknown_prefix_is_total() {
        let mut engine = RuleEngine::new();
        engine.set_enabled("foo");

        // 未知前缀与其他字符串一样参与求值，不会 panic
        assert!(!engine.is_active("never-seen-before"));
        assert!(!engine.is_active(""));
    }
}

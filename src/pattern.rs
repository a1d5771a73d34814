/// 规则极性
///
/// Enable 规则启用匹配的前缀，Disable 规则禁用匹配的前缀
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    /// 启用规则
    Enable,
    /// 禁用规则
    Disable,
}

/// 通配符匹配方式
///
/// 由规则文本推导：只支持单个 `*`，且只能出现在开头或结尾
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// 裸 `*`，匹配所有前缀
    All,
    /// `text*`，匹配以 text 开头的前缀
    Prefix,
    /// `*text`，匹配以 text 结尾的前缀
    Suffix,
    /// 无通配符，精确匹配
    Exact,
}

/// 单条通配符规则
///
/// 不可变值对象，保存调用方提供的原始文本、极性和推导出的匹配方式
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    /// 调用方提供的原始规则文本（如 `"foo*"`、`"*foo"`、`"*"`、`"foo"`）
    text: String,
    /// 规则极性
    polarity: Polarity,
    /// 匹配方式
    kind: MatchKind,
}

impl Pattern {
    /// 从规则片段解析 Pattern
    ///
    /// 片段会先去除首尾空白，为空则返回 None（调用方静默丢弃）
    pub fn parse(segment: &str, polarity: Polarity) -> Option<Self> {
        let text = segment.trim();
        if text.is_empty() {
            return None;
        }

        let kind = if text == "*" {
            MatchKind::All
        } else if text.ends_with('*') {
            MatchKind::Prefix
        } else if text.starts_with('*') {
            MatchKind::Suffix
        } else {
            MatchKind::Exact
        };

        Some(Self {
            text: text.to_string(),
            polarity,
            kind,
        })
    }

    /// 规则文本
    pub fn text(&self) -> &str {
        &self.text
    }

    /// 规则极性
    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    /// 匹配方式
    pub fn kind(&self) -> MatchKind {
        self.kind
    }

    /// 判断规则是否匹配指定前缀
    ///
    /// 区分大小写，无转义语法
    pub fn matches(&self, prefix: &str) -> bool {
        match self.kind {
            MatchKind::All => true,
            MatchKind::Exact => prefix == self.text,
            MatchKind::Prefix => {
                let stem = &self.text[..self.text.len() - 1];
                prefix.starts_with(stem)
            }
            MatchKind::Suffix => {
                let stem = &self.text[1..];
                prefix.ends_with(stem)
            }
        }
    }
}

//! 行内标记渲染模块
//!
//! 把消息中的轻量级标记（粗体、斜体、代码）渲染为控制台样式形式：
//! 模板字符串中的 `%c` 占位符与有序样式列表一一对应，
//! 与浏览器/Node 控制台的样式约定兼容。
//!
//! 只识别三种扁平、不可嵌套的标记：
//!
//! - 粗体：`*…*`
//! - 斜体：`_…_`
//! - 代码：`` `…` ``

/// 粗体样式
pub const BOLD_STYLE: &str = "font-weight: bold;";

/// 斜体样式
pub const ITALIC_STYLE: &str = "font-style: italic;";

/// 代码样式
pub const CODE_STYLE: &str =
    "background: #FDF6E3;color: #586E75;padding: 1px 5px;border-radius: 4px;";

/// 渲染结果
///
/// `template` 中每个 `%c` 占位符按顺序对应 `styles` 中的一项
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedMessage {
    /// 带 `%c` 占位符的模板字符串
    pub template: String,
    /// 有序样式列表，每个标记区间贡献两项：样式串和空串（重置）
    pub styles: Vec<String>,
}

impl RenderedMessage {
    /// 原样透传消息，不做任何标记解析
    pub fn plain(message: &str) -> Self {
        Self {
            template: message.to_string(),
            styles: Vec::new(),
        }
    }
}

/// 根据分隔符返回对应的样式串
fn span_style(delimiter: char) -> Option<&'static str> {
    match delimiter {
        '*' => Some(BOLD_STYLE),
        '_' => Some(ITALIC_STYLE),
        '`' => Some(CODE_STYLE),
        _ => None,
    }
}

/// 渲染消息中的行内标记
///
/// markdown 为 false 时原样返回消息，样式列表为空。
///
/// 从左到右单次扫描：每个识别出的区间去掉分隔符、替换为 `%c内容%c`，
/// 并按出现顺序向样式列表追加样式串和空串。没有配对的分隔符、
/// 内容为空的分隔符对都按普通文本处理，不是错误。
/// 区间之间互不嵌套，已匹配区间的内容不会再被扫描。
///
/// # 示例
///
/// ```
/// use logdown::markdown;
///
/// let rendered = markdown::render("lorem *ipsum*", true);
/// assert_eq!(rendered.template, "lorem %cipsum%c");
/// assert_eq!(rendered.styles, vec!["font-weight: bold;", ""]);
/// ```
pub fn render(message: &str, markdown: bool) -> RenderedMessage {
    if !markdown {
        return RenderedMessage::plain(message);
    }

    // 预分配：每个区间把 2 字节分隔符换成 4 字节占位符
    let mut template = String::with_capacity(message.len() + 8);
    let mut styles = Vec::new();

    let mut i = 0;
    while let Some(ch) = message[i..].chars().next() {
        if let Some(style) = span_style(ch) {
            let content_start = i + ch.len_utf8();
            // 寻找同类闭合分隔符；offset 为 0 说明内容为空，按普通文本处理
            if let Some(offset) = message[content_start..].find(ch) {
                if offset > 0 {
                    let close = content_start + offset;
                    template.push_str("%c");
                    template.push_str(&message[content_start..close]);
                    template.push_str("%c");
                    styles.push(style.to_string());
                    styles.push(String::new());
                    i = close + ch.len_utf8();
                    continue;
                }
            }
        }
        template.push(ch);
        i += ch.len_utf8();
    }

    RenderedMessage { template, styles }
}

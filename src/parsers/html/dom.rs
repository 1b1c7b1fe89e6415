//! 基础DOM操作

use std::borrow::Cow;

use encoding_rs::Encoding;
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom};

/// 将 HTML 字节转换为 DOM
///
/// 按 `document_encoding` 解码；标签无法识别时按 UTF-8 有损解码。
/// html5ever 会尽力修复残缺的文档，因此该函数不会失败。
pub fn html_to_dom(data: &[u8], document_encoding: &str) -> RcDom {
    let s: Cow<str> = match Encoding::for_label(document_encoding.as_bytes()) {
        Some(encoding) => encoding.decode(data).0,
        None => String::from_utf8_lossy(data),
    };

    parse_document(RcDom::default(), Default::default()).one(&*s)
}

/// 获取节点属性值
pub fn get_node_attr(node: &Handle, attr_name: &str) -> Option<String> {
    match &node.data {
        NodeData::Element { attrs, .. } => attrs
            .borrow()
            .iter()
            .find(|attr| &*attr.name.local == attr_name)
            .map(|attr| attr.value.to_string()),
        _ => None,
    }
}

/// 获取节点名称
pub fn get_node_name(node: &Handle) -> Option<&'_ str> {
    match &node.data {
        NodeData::Element { name, .. } => Some(name.local.as_ref()),
        _ => None,
    }
}

/// 检查元素的 class 列表是否包含指定类名
pub fn has_class(node: &Handle, class_name: &str) -> bool {
    get_node_attr(node, "class")
        .map(|classes| classes.split_ascii_whitespace().any(|c| c == class_name))
        .unwrap_or(false)
}

/// 按文档顺序查找所有带有指定属性的元素（包括 `node` 自身）
pub fn find_nodes_with_attr(node: &Handle, attr_name: &str) -> Vec<Handle> {
    collect_nodes(vec![node.clone()], |n| get_node_attr(n, attr_name).is_some())
}

/// 按文档顺序查找 `node` 的所有指定名称的后代元素（不包括 `node` 自身）
pub fn find_descendants(node: &Handle, node_name: &str) -> Vec<Handle> {
    let children = node.children.borrow().iter().rev().cloned().collect();
    collect_nodes(children, |n| get_node_name(n) == Some(node_name))
}

/// 先序遍历，`stack` 栈顶为第一个访问的节点
///
/// 使用显式栈而不是递归，嵌套深度不受线程栈大小限制。
fn collect_nodes<F>(mut stack: Vec<Handle>, predicate: F) -> Vec<Handle>
where
    F: Fn(&Handle) -> bool,
{
    let mut found_nodes = Vec::new();

    while let Some(node) = stack.pop() {
        if predicate(&node) {
            found_nodes.push(node.clone());
        }
        stack.extend(node.children.borrow().iter().rev().cloned());
    }

    found_nodes
}

/// 拼接节点下所有文本节点的内容
pub fn text_content(node: &Handle) -> String {
    let mut text = String::new();
    let mut stack = vec![node.clone()];

    while let Some(node) = stack.pop() {
        if let NodeData::Text { contents } = &node.data {
            text.push_str(&contents.borrow());
        }
        stack.extend(node.children.borrow().iter().rev().cloned());
    }

    text
}

//! 标签解析: 把选中的显示名转换为英文标签并拼接到输入文本后

use std::{collections::HashMap, path::Path};

use log::debug;

use crate::table::{load_or_empty, TableSet};

/// 标签分隔符
pub const TAG_SEPARATOR: &str = ", ";

/// 解析选中项并拼接
///
/// 输入文本始终占第一个位置 (即使为空字符串);
/// 按表的顺序依次追加选中项对应的标签, 未知的显示名直接跳过.
pub fn resolve(base: &str, selections: &HashMap<String, String>, tables: &TableSet) -> String {
    let mut parts = vec![base];

    for table in tables.iter() {
        let Some(selected) = selections.get(table.name()) else {
            continue;
        };

        match table.get(selected) {
            Some(value) => parts.push(value),
            None => debug!("unknown selection {selected:?} in table {}", table.name()),
        }
    }

    parts.join(TAG_SEPARATOR)
}

/// 重新加载数据文件后解析, 保证使用磁盘上的最新内容
pub fn resolve_from_path(
    path: impl AsRef<Path>,
    base: &str,
    selections: &HashMap<String, String>,
) -> String {
    let tables = load_or_empty(path);
    resolve(base, selections, &tables)
}

//! 标签表
//!
//! 从 Excel/CSV 加载 中文显示名 -> 英文标签 的映射, 每个工作表一张表

mod loader;
pub use loader::{cell_to_text, load, load_or_empty, EMPTY_CELL};

mod resolver;
pub use resolver::{resolve, resolve_from_path, TAG_SEPARATOR};

use indexmap::IndexMap;

/// 单张标签表
///
/// `entries` 保持插入顺序, 第一项即默认选项;
/// 显示名重复时后出现的行覆盖前面的值, 位置保持首次插入的位置.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Table {
    name: String,
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
    entries: IndexMap<String, String>,
}

impl Table {
    /// 由表头与数据行构建
    ///
    /// 至少两列时, 先把两个列名作为一个可选项 (表头伪条目) 放在最前面
    pub fn from_rows(
        name: impl Into<String>,
        columns: Vec<String>,
        rows: Vec<Vec<String>>,
    ) -> Self {
        let mut entries = IndexMap::new();
        if columns.len() >= 2 {
            entries.insert(columns[0].clone(), columns[1].clone());
        }

        for row in &rows {
            let display = row.first().cloned().unwrap_or_else(|| EMPTY_CELL.to_string());
            let value = row.get(1).cloned().unwrap_or_else(|| EMPTY_CELL.to_string());
            entries.insert(display, value);
        }

        Self {
            name: name.into(),
            columns,
            rows,
            entries,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// 原始数据行 (不含表头)
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn entries(&self) -> &IndexMap<String, String> {
        &self.entries
    }

    /// 按显示名查找标签
    pub fn get(&self, display: &str) -> Option<&str> {
        self.entries.get(display).map(String::as_str)
    }

    /// 显示名列表, 按插入顺序
    pub fn display_keys(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    /// 表头伪条目
    pub fn header_entry(&self) -> Option<(&str, &str)> {
        match self.columns.as_slice() {
            [first, second, ..] => Some((first.as_str(), second.as_str())),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// 一个数据文件中的全部标签表, 按工作表顺序
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TableSet {
    tables: IndexMap<String, Table>,
}

impl TableSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加表, 同名表后者覆盖前者
    pub fn insert(&mut self, table: Table) {
        self.tables.insert(table.name.clone(), table);
    }

    pub fn get(&self, name: &str) -> Option<&Table> {
        self.tables.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Table> {
        self.tables.values()
    }

    pub fn names(&self) -> Vec<String> {
        self.tables.keys().cloned().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }
}

impl FromIterator<Table> for TableSet {
    fn from_iter<T: IntoIterator<Item = Table>>(iter: T) -> Self {
        let mut set = TableSet::new();
        for table in iter {
            set.insert(table);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_header_entry_comes_first() {
        let table = Table::from_rows(
            "发型",
            strings(&["发型", "hairstyle"]),
            vec![strings(&["长发", "long hair"]), strings(&["短发", "short hair"])],
        );

        assert_eq!(table.display_keys(), strings(&["发型", "长发", "短发"]));
        assert_eq!(table.get("发型"), Some("hairstyle"));
        assert_eq!(table.header_entry(), Some(("发型", "hairstyle")));
    }

    #[test]
    fn test_single_column_has_no_header_entry() {
        let table = Table::from_rows("颜色", strings(&["颜色"]), vec![strings(&["红"])]);

        assert_eq!(table.header_entry(), None);
        assert_eq!(table.display_keys(), strings(&["红"]));
        assert_eq!(table.get("红"), Some(EMPTY_CELL));
    }

    #[test]
    fn test_duplicate_display_key_last_row_wins() {
        let table = Table::from_rows(
            "发型",
            strings(&["发型", "hairstyle"]),
            vec![
                strings(&["长发", "long hair"]),
                strings(&["短发", "short hair"]),
                strings(&["长发", "very long hair"]),
            ],
        );

        assert_eq!(table.len(), 3);
        assert_eq!(table.get("长发"), Some("very long hair"));
        // 覆盖后位置不变
        assert_eq!(table.display_keys(), strings(&["发型", "长发", "短发"]));
    }

    #[test]
    fn test_data_row_overrides_header_entry() {
        let table = Table::from_rows(
            "发型",
            strings(&["发型", "hairstyle"]),
            vec![strings(&["发型", "hair"])],
        );

        assert_eq!(table.len(), 1);
        assert_eq!(table.get("发型"), Some("hair"));
    }

    #[test]
    fn test_empty_table() {
        let table = Table::from_rows("空", vec![], vec![]);
        assert!(table.is_empty());
        assert!(table.display_keys().is_empty());
    }
}

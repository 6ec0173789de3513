//! 标签表加载
//!
//! 支持 xlsx/xlsm/xlsb/xls/ods 多工作表文件, 以及单表 CSV 文件.

use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};
use log::{error, info};

use crate::{
    error::Error,
    table::{Table, TableSet},
    utils::text_file::read_to_string_auto,
};

/// 空单元格的文本
pub const EMPTY_CELL: &str = "nan";

/// 加载数据文件中的全部标签表
pub fn load(path: impl AsRef<Path>) -> Result<TableSet, Error> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::DataSourceMissing(path.display().to_string()));
    }

    let is_csv = path
        .extension()
        .and_then(|s| s.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);

    let tables = if is_csv {
        load_csv(path)?
    } else {
        load_workbook(path)?
    };

    info!(
        "loaded {} tables from {}: {:?}",
        tables.len(),
        path.display(),
        tables.names()
    );
    Ok(tables)
}

/// 加载标签表, 失败时记录日志并返回空结果
pub fn load_or_empty(path: impl AsRef<Path>) -> TableSet {
    let path = path.as_ref();
    match load(path) {
        Ok(tables) => tables,
        Err(e) => {
            error!("load tables failed, {}: {e}", path.display());
            TableSet::new()
        }
    }
}

/// 读取 Excel 工作簿, 每个工作表一张表
fn load_workbook(path: &Path) -> Result<TableSet, Error> {
    let mut workbook = open_workbook_auto(path)?;

    let mut tables = TableSet::new();
    for sheet_name in workbook.sheet_names() {
        let range = workbook.worksheet_range(&sheet_name)?;
        let mut rows = range.rows();

        let columns = match rows.next() {
            Some(header) => header_names(header.iter().map(cell_to_header)),
            None => Vec::new(),
        };
        let rows: Vec<Vec<String>> = rows
            .filter(|row| row.iter().any(|cell| !matches!(cell, Data::Empty)))
            .map(|row| row.iter().map(cell_to_text).collect())
            .collect();

        tables.insert(Table::from_rows(sheet_name, columns, rows));
    }
    Ok(tables)
}

/// 读取 CSV 文件, 文件名 (不含扩展名) 作为表名
fn load_csv(path: &Path) -> Result<TableSet, Error> {
    let text = read_to_string_auto(path)?;
    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut records = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| Error::DataSourceCorrupt(e.to_string()))?;
        records.push(record.iter().map(|s| s.to_string()).collect::<Vec<_>>());
    }

    let mut records = records.into_iter();
    let columns = match records.next() {
        Some(header) => header_names(header.into_iter().map(|s| (!s.is_empty()).then_some(s))),
        None => Vec::new(),
    };
    let rows: Vec<Vec<String>> = records
        .filter(|row| row.iter().any(|cell| !cell.is_empty()))
        .map(|row| {
            row.into_iter()
                .map(|cell| {
                    if cell.is_empty() {
                        EMPTY_CELL.to_string()
                    } else {
                        cell
                    }
                })
                .collect()
        })
        .collect();

    let mut tables = TableSet::new();
    tables.insert(Table::from_rows(name, columns, rows));
    Ok(tables)
}

/// 表头名称, 空列名使用 "Unnamed: <列号>"
fn header_names(cells: impl Iterator<Item = Option<String>>) -> Vec<String> {
    cells
        .enumerate()
        .map(|(index, cell)| cell.unwrap_or_else(|| format!("Unnamed: {index}")))
        .collect()
}

fn cell_to_header(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty => None,
        Data::String(s) if s.is_empty() => None,
        other => Some(cell_to_text(other)),
    }
}

/// 单元格转文本
///
/// 整数 (包括没有小数部分的浮点数) 不带小数点, 布尔值为 True/False, 空单元格为 "nan"
pub fn cell_to_text(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.clone(),
        Data::Int(v) => v.to_string(),
        Data::Float(v) if v.fract() == 0.0 && v.abs() < 1e15 => format!("{}", *v as i64),
        Data::Float(v) => v.to_string(),
        Data::Bool(true) => "True".to_string(),
        Data::Bool(false) => "False".to_string(),
        Data::Empty => EMPTY_CELL.to_string(),
        Data::Error(_) => "#ERR".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use rust_xlsxwriter::Workbook;

    use super::*;
    use crate::dataset::{parse_pairs, write_csv, OutputEncoding};

    fn write_character_xlsx(path: &Path) -> anyhow::Result<()> {
        let mut workbook = Workbook::new();

        let sheet = workbook.add_worksheet();
        sheet.set_name("发型")?;
        sheet.write_string(0, 0, "发型")?;
        sheet.write_string(0, 1, "hairstyle")?;
        sheet.write_string(1, 0, "长发")?;
        sheet.write_string(1, 1, "long hair")?;
        sheet.write_string(2, 0, "短发")?;
        sheet.write_string(2, 1, "short hair")?;

        let sheet = workbook.add_worksheet();
        sheet.set_name("数量")?;
        sheet.write_string(0, 0, "数量")?;
        sheet.write_string(0, 1, "count")?;
        sheet.write_number(1, 0, 1.0)?;
        sheet.write_string(1, 1, "solo")?;
        sheet.write_number(2, 0, 2.5)?;
        sheet.write_boolean(2, 1, true)?;

        workbook.save(path)?;
        Ok(())
    }

    #[test]
    fn test_load_workbook_sheets_in_order() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("character.xlsx");
        write_character_xlsx(&path)?;

        let tables = load(&path)?;
        assert_eq!(tables.names(), vec!["发型".to_string(), "数量".to_string()]);

        let hair = tables.get("发型").unwrap();
        assert_eq!(hair.display_keys(), vec!["发型", "长发", "短发"]);
        assert_eq!(hair.get("长发"), Some("long hair"));

        let count = tables.get("数量").unwrap();
        assert_eq!(count.get("1"), Some("solo"));
        assert_eq!(count.get("2.5"), Some("True"));
        Ok(())
    }

    #[test]
    fn test_load_csv_as_single_table() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("表情.csv");
        fs::write(&path, "表情,expression\n微笑,smile\n\n哭泣,\n")?;

        let tables = load(&path)?;
        assert_eq!(tables.len(), 1);

        let table = tables.get("表情").unwrap();
        assert_eq!(table.columns(), &["表情".to_string(), "expression".to_string()]);
        assert_eq!(table.rows().len(), 2);
        assert_eq!(table.get("表情"), Some("expression"));
        assert_eq!(table.get("微笑"), Some("smile"));
        assert_eq!(table.get("哭泣"), Some(EMPTY_CELL));
        Ok(())
    }

    #[test]
    fn test_load_gbk_csv_from_pair_converter() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("tags.csv");
        let pairs = parse_pairs("hello\n你好\nworld\n");
        write_csv(&pairs, &path, OutputEncoding::Gbk)?;

        let tables = load(&path)?;
        let table = tables.get("tags").unwrap();
        assert_eq!(table.display_keys(), vec!["你好", EMPTY_CELL]);
        assert_eq!(table.get("你好"), Some("hello"));
        assert_eq!(table.get(EMPTY_CELL), Some("world"));
        Ok(())
    }

    #[test]
    fn test_load_csv_unnamed_header() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("tags.csv");
        fs::write(&path, ",tag\n猫耳,cat ears\n")?;

        let tables = load(&path)?;
        let table = tables.get("tags").unwrap();
        assert_eq!(table.header_entry(), Some(("Unnamed: 0", "tag")));
        Ok(())
    }

    #[test]
    fn test_load_missing_file() {
        let result = load("no/such/character.xlsx");
        assert!(matches!(result, Err(Error::DataSourceMissing(_))));
        assert!(load_or_empty("no/such/character.xlsx").is_empty());
    }

    #[test]
    fn test_load_corrupt_workbook() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("character.xlsx");
        fs::write(&path, b"this is not a zip archive")?;

        assert!(matches!(load(&path), Err(Error::DataSourceCorrupt(_))));
        assert!(load_or_empty(&path).is_empty());
        Ok(())
    }

    #[test]
    fn test_reload_is_idempotent() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("character.xlsx");
        write_character_xlsx(&path)?;

        assert_eq!(load(&path)?, load(&path)?);
        Ok(())
    }

    #[test]
    fn test_cell_to_text() {
        assert_eq!(cell_to_text(&Data::Float(3.0)), "3");
        assert_eq!(cell_to_text(&Data::Float(0.5)), "0.5");
        assert_eq!(cell_to_text(&Data::Int(-2)), "-2");
        assert_eq!(cell_to_text(&Data::Bool(false)), "False");
        assert_eq!(cell_to_text(&Data::Empty), EMPTY_CELL);
    }
}

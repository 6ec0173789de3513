//! 标签 CSV 关键字查找

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use log::error;

use crate::{error::Error, utils::text_file::read_to_string_auto};

/// 查找选项
#[derive(Debug, Clone, Copy)]
pub struct SearchOptions {
    /// 第一行为表头, 不参与匹配
    pub has_headers: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self { has_headers: true }
    }
}

/// 查找第一列中包含关键字 (不区分大小写) 的所有值
///
/// 读取失败时记录日志并返回空列表
pub fn search(csv_path: impl AsRef<Path>, keyword: &str, options: SearchOptions) -> Vec<String> {
    let csv_path = csv_path.as_ref();
    match try_search(csv_path, keyword, options) {
        Ok(results) => results,
        Err(e) => {
            error!("search {} failed, {e}", csv_path.display());
            Vec::new()
        }
    }
}

/// 查找第一列中包含关键字的所有值, 保持文件中的顺序, 不去重
pub fn try_search(
    csv_path: impl AsRef<Path>,
    keyword: &str,
    options: SearchOptions,
) -> Result<Vec<String>, Error> {
    let csv_path = csv_path.as_ref();
    if !csv_path.exists() {
        return Err(Error::DataSourceMissing(csv_path.display().to_string()));
    }

    let text = read_to_string_auto(csv_path)?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(options.has_headers)
        .flexible(true)
        .from_reader(text.as_bytes());

    let keyword = keyword.to_lowercase();
    let mut results = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| Error::DataSourceCorrupt(e.to_string()))?;
        // 空单元格视为缺失值, 不参与匹配
        let Some(value) = record.get(0).filter(|v| !v.is_empty()) else {
            continue;
        };
        if value.to_lowercase().contains(&keyword) {
            results.push(value.to_string());
        }
    }
    Ok(results)
}

/// 结果文件所在目录, 即 CSV 所在目录
pub fn output_dir(csv_path: &Path) -> &Path {
    match csv_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

/// 结果文件路径 `<dir>/search_results_<keyword>.txt`
///
/// 关键字中的路径分隔符替换为 `_`, 结果文件始终位于 `dir` 下
pub fn results_path(dir: impl AsRef<Path>, keyword: &str) -> PathBuf {
    let keyword = keyword.replace(&['/', '\\'][..], "_");
    dir.as_ref().join(format!("search_results_{keyword}.txt"))
}

/// 保存查找结果, 每行一个
pub fn save_results(
    results: &[String],
    dir: impl AsRef<Path>,
    keyword: &str,
) -> Result<PathBuf, Error> {
    let path = results_path(dir, keyword);

    let mut writer = BufWriter::new(File::create(&path)?);
    for result in results {
        writeln!(writer, "{result}")?;
    }
    writer.flush()?;

    Ok(path)
}

//! 标签数据集处理
//!
//! - 在标签 CSV 中按关键字查找
//! - 英文/中文逐行对照文本转换为 CSV 词典

pub mod pairs;
pub mod search;

pub use pairs::{
    has_chinese, io_paths, parse_pairs, read_pairs, write_csv, OutputEncoding, TranslationPair,
};
pub use search::{output_dir, results_path, save_results, search, try_search, SearchOptions};

/// 预览前 `limit` 项, 同时返回剩余数量
pub fn preview<T>(items: &[T], limit: usize) -> (&[T], usize) {
    let shown = &items[..items.len().min(limit)];
    (shown, items.len() - shown.len())
}

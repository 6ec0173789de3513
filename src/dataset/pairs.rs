//! 英文/中文对照文本转换为 CSV
//!
//! 输入文本: 奇数行为英文, 其后若紧跟一行含中文的文本, 则为对应的中文翻译.
//! 输出 CSV: 每行 `中文,英文`, 没有中文时为 `,英文`.

use std::{
    fs,
    path::{Path, PathBuf},
};

use encoding::{all::GBK, EncoderTrap, Encoding};
use lazy_static::lazy_static;
use log::error;
use regex::Regex;
use strum_macros::{Display, EnumString};

use crate::{error::Error, utils::text_file::read_to_string_auto};

lazy_static! {
    // CJK 统一表意文字 U+4E00..=U+9FFF
    static ref CHINESE_RE: Regex = Regex::new("[\u{4e00}-\u{9fff}]").unwrap();
}

/// 是否包含中文字符
pub fn has_chinese(text: &str) -> bool {
    CHINESE_RE.is_match(text)
}

/// 翻译对
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TranslationPair {
    pub english: String,
    /// 可能为空
    pub chinese: String,
}

impl TranslationPair {
    pub fn new(english: impl Into<String>, chinese: impl Into<String>) -> Self {
        Self {
            english: english.into(),
            chinese: chinese.into(),
        }
    }

    /// CSV 行: (中文, 英文), 中文为空或不含中文字符时写空
    pub fn csv_row(&self) -> [&str; 2] {
        if self.chinese.trim().is_empty() || !has_chinese(&self.chinese) {
            ["", self.english.as_str()]
        } else {
            [self.chinese.as_str(), self.english.as_str()]
        }
    }
}

/// CSV 输出编码
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumString, Display)]
pub enum OutputEncoding {
    /// 兼容中文版 Excel 直接打开
    #[default]
    #[strum(to_string = "gbk", serialize = "GBK", serialize = "gb2312")]
    Gbk,
    #[strum(to_string = "utf-8", serialize = "utf8", serialize = "UTF-8")]
    Utf8,
}

impl OutputEncoding {
    /// 解析编码名称
    pub fn from_label(label: &str) -> Result<Self, Error> {
        label
            .parse::<Self>()
            .map_err(|e| Error::ParseEnumString(format!("{label}: {e}")))
    }

    fn encode(&self, text: &str) -> Result<Vec<u8>, Error> {
        match self {
            OutputEncoding::Gbk => GBK
                .encode(text, EncoderTrap::Strict)
                .map_err(|e| Error::Encode(format!("gbk, {e}"))),
            OutputEncoding::Utf8 => Ok(text.as_bytes().to_vec()),
        }
    }
}

/// 解析翻译对
///
/// `\n`, `\r\n` 与单独的 `\r` 都作为换行; 空行先被去除; 当前行视为英文, 下一行含中文字符时作为其翻译并一起跳过,
/// 否则中文为空只前进一行.
pub fn parse_pairs(text: &str) -> Vec<TranslationPair> {
    let lines = text
        .split(|c: char| c == '\n' || c == '\r')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>();

    let mut pairs = Vec::new();
    let mut i = 0;
    while i < lines.len() {
        let english = lines[i];

        let chinese = match lines.get(i + 1) {
            Some(next) if has_chinese(next) => {
                i += 2;
                *next
            }
            _ => {
                i += 1;
                ""
            }
        };

        if !english.is_empty() {
            pairs.push(TranslationPair::new(english, chinese));
        }
    }
    pairs
}

/// 读取文件中的翻译对, 读取失败时记录日志并返回空列表
pub fn read_pairs(path: impl AsRef<Path>) -> Vec<TranslationPair> {
    let path = path.as_ref();
    match read_to_string_auto(path) {
        Ok(text) => parse_pairs(&text),
        Err(e) => {
            error!("read {} failed, {e}", path.display());
            Vec::new()
        }
    }
}

/// 输入/输出文件路径
///
/// 缺少 `.txt` 后缀时自动添加, 输出为同目录下的 `<name>.csv`
pub fn io_paths(file: &str) -> (PathBuf, PathBuf) {
    let input = if file.ends_with(".txt") {
        PathBuf::from(file)
    } else {
        PathBuf::from(format!("{file}.txt"))
    };
    let output = input.with_extension("csv");
    (input, output)
}

/// 生成 CSV 内容
pub fn encode_csv(pairs: &[TranslationPair], encoding: OutputEncoding) -> Result<Vec<u8>, Error> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(Vec::new());
    for pair in pairs {
        writer.write_record(pair.csv_row())?;
    }
    let data = writer
        .into_inner()
        .map_err(|e| Error::Encode(e.to_string()))?;
    let text = String::from_utf8(data).map_err(|e| Error::Encode(e.to_string()))?;

    encoding.encode(&text)
}

/// 保存为 CSV 文件
pub fn write_csv(
    pairs: &[TranslationPair],
    path: impl AsRef<Path>,
    encoding: OutputEncoding,
) -> Result<(), Error> {
    let bytes = encode_csv(pairs, encoding)?;
    fs::write(path, bytes)?;
    Ok(())
}

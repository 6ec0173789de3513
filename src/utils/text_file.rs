//! 文本文件读取, 自动匹配文件编码

use std::{fs, path::Path};

use chardet::{charset2encoding, detect};
use encoding::{all::GBK, label::encoding_from_whatwg_label, DecoderTrap, Encoding};
use log::error;

use crate::error::Error;

/// 读取文件内容， 自动匹配文件编码
///
/// 依次尝试 UTF-8 (去除 BOM), 严格 GBK, 最后通过 chardet 检测编码
pub fn read_to_string_auto(path: &Path) -> Result<String, Error> {
    let bytes = fs::read(path)?;
    decode_auto(&bytes)
}

/// 字节内容解码
pub fn decode_auto(bytes: &[u8]) -> Result<String, Error> {
    // 优先尝试 UTF-8 解码
    if let Ok(s) = std::str::from_utf8(bytes) {
        return Ok(s.strip_prefix('\u{feff}').unwrap_or(s).to_string());
    }

    // 转换工具输出的 CSV 为 GBK, 短文本时 chardet 检测不可靠
    if let Ok(s) = GBK.decode(bytes, DecoderTrap::Strict) {
        return Ok(s);
    }

    // detect charset of the file
    let result = detect(bytes);

    if let Some(coder) = encoding_from_whatwg_label(charset2encoding(&result.0)) {
        let text = coder.decode(bytes, DecoderTrap::Replace).map_err(|e| {
            error!("decode error, {e}");
            Error::Decode(e.to_string())
        })?;

        return Ok(text);
    }

    error!("file auto decode failed, charset: {}", result.0);
    Err(Error::Decode(format!("unknown charset {}", result.0)))
}

#[cfg(test)]
mod tests {
    use encoding::EncoderTrap;

    use super::*;

    fn gbk(text: &str) -> anyhow::Result<Vec<u8>> {
        GBK.encode(text, EncoderTrap::Strict)
            .map_err(|e| anyhow::anyhow!("{e}"))
    }

    #[test]
    fn test_decode_short_gbk() -> anyhow::Result<()> {
        let text = decode_auto(&gbk("名字\nname\n猫耳\ncat ears\n")?)?;
        assert_eq!(text, "名字\nname\n猫耳\ncat ears\n");

        let text = decode_auto(&gbk("你好,hello\r\n,world\r\n")?)?;
        assert_eq!(text, "你好,hello\r\n,world\r\n");
        Ok(())
    }

    #[test]
    fn test_decode_utf8_with_bom() -> anyhow::Result<()> {
        let text = decode_auto("\u{feff}名字,name".as_bytes())?;
        assert_eq!(text, "名字,name");
        Ok(())
    }

    #[test]
    fn test_read_gbk_file() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("gbk.csv");
        let content = "中文名称,english\n长发少女在花园里散步,long hair girl\n".repeat(8);
        fs::write(&path, gbk(&content)?)?;

        let text = read_to_string_auto(&path)?;
        assert_eq!(text, content);
        Ok(())
    }

    #[test]
    fn test_read_missing_file() {
        let result = read_to_string_auto(Path::new("definitely/not/here.txt"));
        assert!(matches!(result, Err(Error::Io(_))));
    }
}

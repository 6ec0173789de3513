//! 英文/中文对照文本转换为 CSV 词典
//!
//! 输入 `<name>.txt`, 输出同目录下的 `<name>.csv`

use clap::{ArgAction, Parser};
use comfyui_darkbfly::{
    dataset::{io_paths, preview, read_pairs, write_csv, OutputEncoding},
    logging,
};
use dialoguer::Input;

#[derive(Debug, Parser)]
#[command(version, about = "将 txt 中的英文-中文对转换为 CSV (中文,英文)")]
struct Cli {
    /// txt 文件, 不提供时交互输入; 缺少 .txt 后缀时自动添加
    file: Option<String>,

    /// CSV 输出编码: gbk, utf-8
    #[arg(long, default_value_t = OutputEncoding::Gbk, value_parser = OutputEncoding::from_label)]
    encoding: OutputEncoding,

    /// 日志详细程度
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(logging::level_from_verbosity(cli.verbose));

    let file = match cli.file {
        Some(file) => file,
        None => Input::<String>::new()
            .with_prompt("请输入要转换的txt文件名")
            .interact_text()?,
    };

    let (input_path, output_file) = io_paths(&file);
    if !input_path.exists() {
        println!("错误：文件 {} 不存在", input_path.display());
        return Ok(());
    }

    println!("正在读取翻译对...");
    let pairs = read_pairs(&input_path);
    if pairs.is_empty() {
        println!("未读取到有效的翻译对");
        return Ok(());
    }

    println!("正在保存为CSV格式 ({})...", cli.encoding);
    if let Err(e) = write_csv(&pairs, &output_file, cli.encoding) {
        println!("保存CSV文件时发生错误: {e}");
        println!("转换失败");
        return Ok(());
    }

    println!("转换完成！共处理 {} 对翻译", pairs.len());
    println!("CSV文件已保存到: {}", output_file.display());
    println!("\n转换结果预览（前5对）:");
    let (shown, remaining) = preview(&pairs, 5);
    for (i, pair) in shown.iter().enumerate() {
        println!("{}. {} -> {}", i + 1, pair.chinese, pair.english);
    }
    if remaining > 0 {
        println!("... 还有 {remaining} 对翻译");
    }
    Ok(())
}

//! 在标签 CSV 中查找关键字, 结果保存到 `search_results_<keyword>.txt`

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use comfyui_darkbfly::{
    dataset::{output_dir, preview, save_results, search, SearchOptions},
    logging,
};
use dialoguer::Input;

#[derive(Debug, Parser)]
#[command(version, about = "在标签 CSV 的第一列中查找关键字 (不区分大小写)")]
struct Cli {
    /// 关键字, 不提供时交互输入
    keyword: Option<String>,

    /// 标签 CSV 文件
    #[arg(long, default_value = "danbooru_e621_merged.csv")]
    csv: PathBuf,

    /// CSV 没有表头行
    #[arg(long)]
    no_headers: bool,

    /// 日志详细程度
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(logging::level_from_verbosity(cli.verbose));

    let keyword = match cli.keyword {
        Some(keyword) => keyword,
        None => Input::<String>::new()
            .with_prompt("请输入要搜索的关键字")
            .allow_empty(true)
            .interact_text()?,
    };

    let options = SearchOptions {
        has_headers: !cli.no_headers,
    };
    let results = search(&cli.csv, &keyword, options);
    if results.is_empty() {
        println!("未找到匹配的行");
        return Ok(());
    }

    let output_file = match save_results(&results, output_dir(&cli.csv), &keyword) {
        Ok(path) => path,
        Err(e) => {
            println!("保存文件时发生错误: {e}");
            return Ok(());
        }
    };

    println!("找到 {} 个匹配项", results.len());
    println!("结果已保存到文件: {}", output_file.display());
    println!("\n前5个匹配项预览:");
    let (shown, remaining) = preview(&results, 5);
    for (i, result) in shown.iter().enumerate() {
        println!("{}. {result}", i + 1);
    }
    if remaining > 0 {
        println!("... 还有 {remaining} 个结果在文件中");
    }
    Ok(())
}

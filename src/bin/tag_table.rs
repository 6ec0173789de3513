//! 不经过 ComfyUI 直接查看/使用标签表
//!
//! - `tag_table schema`: 输出节点 INPUT_TYPES 对应的 JSON
//! - `tag_table resolve --text 1girl -s 发型=长发`: 输出拼接后的文本

use std::{collections::HashMap, path::PathBuf};

use anyhow::anyhow;
use clap::{ArgAction, Parser, Subcommand};
use comfyui_darkbfly::{
    config::NodeConfig,
    logging,
    table::{load_or_empty, resolve},
    wrapper::comfyui::node_input::character_input_spec,
};

#[derive(Debug, Parser)]
#[command(version, about = "标签表工具")]
struct Cli {
    /// 标签表文件 (xlsx/ods/csv), 默认读取 DARKBFLY_CHARACTER_TABLE 或节点目录下的 character.xlsx
    #[arg(long, global = true)]
    table: Option<PathBuf>,

    /// 日志详细程度
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// 输出节点输入规范 (JSON)
    Schema,
    /// 解析选中项并拼接到输入文本
    Resolve {
        /// 输入文本
        #[arg(long, default_value = "")]
        text: String,

        /// 选中项, 格式为 `表名=显示名`, 可重复
        #[arg(short, long = "select", value_parser = parse_selection)]
        selections: Vec<(String, String)>,
    },
}

fn parse_selection(s: &str) -> anyhow::Result<(String, String)> {
    let (table, display) = s
        .split_once('=')
        .ok_or_else(|| anyhow!("expected <table>=<label>, got {s:?}"))?;
    Ok((table.to_string(), display.to_string()))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(logging::level_from_verbosity(cli.verbose));

    let table_path = cli
        .table
        .unwrap_or_else(|| NodeConfig::from_env().table_path);
    let tables = load_or_empty(&table_path);

    match cli.command {
        Command::Schema => {
            let spec = character_input_spec(&tables);
            println!("{}", serde_json::to_string_pretty(&spec)?);
        }
        Command::Resolve { text, selections } => {
            let selections = selections.into_iter().collect::<HashMap<_, _>>();
            println!("{}", resolve(&text, &selections, &tables));
        }
    }
    Ok(())
}

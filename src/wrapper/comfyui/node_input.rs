//! ComfyUI 节点输入构建器
//!
//! 节点的 INPUT_TYPES 由一个强制连线的文本输入和每张标签表一个下拉选项组成.
//! 先构建与 Python 无关的 [`InputSpec`], 需要时再转换为 PyDict.

use indexmap::IndexMap;
use serde::Serialize;

use crate::table::{Table, TableSet};

#[cfg(feature = "python")]
use pyo3::{
    types::{PyDict, PyDictMethods},
    Py, PyResult, Python,
};

#[cfg(feature = "python")]
use crate::wrapper::comfyui::types::NODE_STRING;

/// 输入文本的参数名
pub const INPUT_TEXT: &str = "输入文本";

/// 单张表的下拉选项
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct ChoiceSchema {
    pub options: Vec<String>,
    /// 第一个选项, 空表时为空字符串
    pub default: String,
}

impl ChoiceSchema {
    pub fn from_table(table: &Table) -> Self {
        let options = table.display_keys();
        let default = options.first().cloned().unwrap_or_default();
        Self { options, default }
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

/// 输入类型
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InputType {
    /// 必须由其他节点连线输入的字符串, 没有默认值
    ForcedString,
    /// 下拉选项
    EnumChoice { options: Vec<String>, default: String },
}

impl From<ChoiceSchema> for InputType {
    fn from(schema: ChoiceSchema) -> Self {
        InputType::EnumChoice {
            options: schema.options,
            default: schema.default,
        }
    }
}

/// 输入规范
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct InputSpec {
    required: IndexMap<String, InputType>,
}

impl InputSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加必需输入
    pub fn with_required(mut self, name: impl Into<String>, input: InputType) -> Self {
        self.required.insert(name.into(), input);
        self
    }

    pub fn required(&self) -> &IndexMap<String, InputType> {
        &self.required
    }

    /// 构建 PyDict
    ///
    /// ```py
    /// {
    ///     "required": {
    ///         "输入文本": ("STRING", {"forceInput": True}),
    ///         "发型": (["发型", "长发"], {"default": "发型"}),
    ///     }
    /// }
    /// ```
    #[cfg(feature = "python")]
    pub fn build(&self, py: Python<'_>) -> PyResult<Py<PyDict>> {
        let dict = PyDict::new(py);

        let required = PyDict::new(py);
        for (name, input_type) in &self.required {
            let params = PyDict::new(py);
            match input_type {
                InputType::ForcedString => {
                    params.set_item("forceInput", true)?;
                    required.set_item(name, (NODE_STRING, params))?;
                }
                InputType::EnumChoice { options, default } => {
                    params.set_item("default", default)?;
                    required.set_item(name, (options.clone(), params))?;
                }
            }
        }
        dict.set_item("required", required)?;

        Ok(dict.into())
    }
}

/// 角色节点的输入规范
///
/// 空表不生成下拉选项
pub fn character_input_spec(tables: &TableSet) -> InputSpec {
    tables
        .iter()
        .map(|table| (table.name(), ChoiceSchema::from_table(table)))
        .filter(|(_, schema)| !schema.is_empty())
        .fold(
            InputSpec::new().with_required(INPUT_TEXT, InputType::ForcedString),
            |spec, (name, schema)| spec.with_required(name, schema.into()),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn tables() -> TableSet {
        [
            Table::from_rows(
                "发型",
                strings(&["发型", "hairstyle"]),
                vec![strings(&["长发", "long hair"])],
            ),
            Table::from_rows("空表", vec![], vec![]),
            Table::from_rows("颜色", strings(&["颜色"]), vec![strings(&["红", "red"])]),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_choice_schema_defaults_to_first_key() {
        let tables = tables();
        let schema = ChoiceSchema::from_table(tables.get("发型").unwrap());
        assert_eq!(schema.options, strings(&["发型", "长发"]));
        assert_eq!(schema.default, "发型");
    }

    #[test]
    fn test_choice_schema_empty_table() {
        let tables = tables();
        let schema = ChoiceSchema::from_table(tables.get("空表").unwrap());
        assert!(schema.is_empty());
        assert_eq!(schema.default, "");
    }

    #[test]
    fn test_character_input_spec() {
        let spec = character_input_spec(&tables());
        let names = spec.required().keys().cloned().collect::<Vec<_>>();
        assert_eq!(names, strings(&[INPUT_TEXT, "发型", "颜色"]));
        assert_eq!(spec.required()[INPUT_TEXT], InputType::ForcedString);
        assert_eq!(
            spec.required()["颜色"],
            InputType::EnumChoice {
                options: strings(&["红"]),
                default: "红".to_string(),
            }
        );
    }

    #[test]
    fn test_character_input_spec_without_tables() {
        let spec = character_input_spec(&TableSet::new());
        assert_eq!(spec.required().len(), 1);
    }

    #[test]
    fn test_input_spec_json() -> anyhow::Result<()> {
        let spec = character_input_spec(&tables());
        let value = serde_json::to_value(&spec)?;
        assert_eq!(value["required"][INPUT_TEXT]["kind"], "forced_string");
        assert_eq!(value["required"]["发型"]["kind"], "enum_choice");
        assert_eq!(value["required"]["发型"]["default"], "发型");
        assert_eq!(value["required"]["发型"]["options"][1], "长发");
        Ok(())
    }

    #[test]
    fn test_schema_is_rebuilt_identically() {
        let tables = tables();
        assert_eq!(character_input_spec(&tables), character_input_spec(&tables));
    }
}

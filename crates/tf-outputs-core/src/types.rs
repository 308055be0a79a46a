//! 输入数据模型（对外暴露）
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 输出集合：名称 → 描述，插入顺序即输出顺序
pub type OutputSet = IndexMap<String, OutputDescriptor>;

/// 单个输出的描述（对应 `terraform output -json` 中的一项）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputDescriptor {
    /// 是否敏感；为 true 时额外输出一行掩码命令
    pub sensitive: bool,
    /// 值类型（仅记录，不影响格式化）
    #[serde(rename = "type")]
    pub kind: OutputKind,
    /// 原始标量值
    pub value: Value,
}

impl OutputDescriptor {
    pub fn new(kind: OutputKind, value: impl Into<Value>, sensitive: bool) -> Self {
        Self { sensitive, kind, value: value.into() }
    }
}

/// 值类型
/// - String / Number / Bool：三种可识别的字面量
/// - Other：其余任意取值（如 `["list","string"]` 这类类型表达式），原样保留
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum OutputKind {
    String,
    Number,
    Bool,
    Other(Value),
}

impl From<Value> for OutputKind {
    fn from(v: Value) -> Self {
        match v.as_str() {
            Some("string") => OutputKind::String,
            Some("number") => OutputKind::Number,
            Some("bool") => OutputKind::Bool,
            _ => OutputKind::Other(v),
        }
    }
}

impl From<OutputKind> for Value {
    fn from(k: OutputKind) -> Self {
        match k {
            OutputKind::String => Value::from("string"),
            OutputKind::Number => Value::from("number"),
            OutputKind::Bool => Value::from("bool"),
            OutputKind::Other(v) => v,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn kind_from_known_literals() {
        assert_eq!(OutputKind::from(json!("string")), OutputKind::String);
        assert_eq!(OutputKind::from(json!("number")), OutputKind::Number);
        assert_eq!(OutputKind::from(json!("bool")), OutputKind::Bool);
    }

    #[test]
    fn kind_keeps_unknown_values() {
        let expr = json!(["list", "string"]);
        assert_eq!(OutputKind::from(expr.clone()), OutputKind::Other(expr));
        assert_eq!(OutputKind::from(json!("tuple")), OutputKind::Other(json!("tuple")));
    }

    #[test]
    fn descriptor_serializes_type_field() {
        let d = OutputDescriptor::new(OutputKind::Number, 7, true);
        let v = serde_json::to_value(&d).unwrap();
        assert_eq!(v, json!({ "sensitive": true, "type": "number", "value": 7 }));
    }
}

use serde::{Deserialize, Serialize};

/// 知识点树节点
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeNode {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub parent_id: Option<i64>,
    #[serde(default)]
    pub depth: Option<i32>,
    #[serde(default)]
    pub children: Vec<KnowledgeNode>,
}

impl KnowledgeNode {
    /// 深度优先查找节点
    pub fn find(&self, id: i64) -> Option<&KnowledgeNode> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KnowledgeCreate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct KnowledgeUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<i32>,
}

/// 标签分类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TagType {
    Subject,
    Level,
}

impl TagType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TagType::Subject => "SUBJECT",
            TagType::Level => "LEVEL",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: i64,
    #[serde(rename = "type")]
    pub tag_type: String,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn finds_nested_node() {
        let tree: KnowledgeNode = serde_json::from_value(json!({
            "id": 1,
            "name": "数学",
            "children": [
                {"id": 2, "name": "代数", "parent_id": 1, "children": [
                    {"id": 5, "name": "一元二次方程", "parent_id": 2}
                ]},
                {"id": 3, "name": "几何", "parent_id": 1}
            ]
        }))
        .unwrap();

        assert_eq!(tree.find(5).map(|n| n.name.as_str()), Some("一元二次方程"));
        assert!(tree.find(9).is_none());
    }
}

//! 标签与知识点

use super::{payload, ApiClient};
use crate::error::GatewayResult;
use crate::gateway::RequestOptions;
use crate::models::{KnowledgeCreate, KnowledgeNode, KnowledgeUpdate, Tag, TagType};
use serde_json::json;

impl ApiClient {
    /// 标签列表
    ///
    /// # 参数
    /// - `tag_type`: 只看某一类标签，`None` 时返回全部
    pub async fn tags(&self, tag_type: Option<TagType>) -> GatewayResult<Vec<Tag>> {
        let data = json!({"type": tag_type.map(|t| t.as_str())});
        self.gateway
            .send("/tags", RequestOptions::get().data(data))
            .await
    }

    /// 知识点树（普通用户只能看到自己创建的节点）
    pub async fn knowledge_tree(&self) -> GatewayResult<Vec<KnowledgeNode>> {
        self.gateway
            .send("/knowledge/tree", RequestOptions::get())
            .await
    }

    pub async fn create_knowledge(&self, node: &KnowledgeCreate) -> GatewayResult<KnowledgeNode> {
        let data = payload("/knowledge", node)?;
        self.gateway
            .send("/knowledge", RequestOptions::post(data))
            .await
    }

    pub async fn update_knowledge(&self, id: i64, update: &KnowledgeUpdate) -> GatewayResult<KnowledgeNode> {
        let path = format!("/knowledge/{}", id);
        let data = payload(&path, update)?;
        self.gateway.send(&path, RequestOptions::put(data)).await
    }

    pub async fn delete_knowledge(&self, id: i64) -> GatewayResult<()> {
        self.send_unit(&format!("/knowledge/{}", id), RequestOptions::delete())
            .await
    }
}

use super::ApiClient;
use crate::error::GatewayResult;
use crate::gateway::RequestOptions;
use crate::models::HealthStatus;

impl ApiClient {
    /// 服务健康检查
    pub async fn health(&self) -> GatewayResult<HealthStatus> {
        self.gateway.send("/health", RequestOptions::get()).await
    }
}

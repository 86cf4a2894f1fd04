use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::StatsDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct GetStatsCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl GetStatsCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct GetStatsCommandRequest {}

impl GetStatsCommandRequest {
    pub fn new() -> Self {
        Self {}
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct GetStatsCommandResponse {
    pub stats: StatsDto,
}

impl GetStatsCommandResponse {
    pub fn new(stats: StatsDto) -> Self {
        Self {
            stats,
        }
    }
}

#[async_trait]
impl Command<GetStatsCommandRequest, GetStatsCommandResponse> for GetStatsCommand {
    async fn execute(&self, _req: GetStatsCommandRequest) -> Result<GetStatsCommandResponse, CommandError> {
        self.catalog_service.get_stats().await
            .map_err(CommandError::from).map(GetStatsCommandResponse::new)
    }
}

use async_trait::async_trait;
use fractic_server_error::ServerError;
use ron::from_str;

use crate::{
    data::models::worksheet_model::WorksheetModel,
    entities::Worksheet,
    errors::{InvalidRon, ReadError},
};

#[async_trait]
pub(crate) trait WorksheetRonDatasource: Send + Sync {
    fn from_string(&self, s: &str) -> Result<Worksheet, ServerError>;

    async fn from_file<P>(&self, path: P) -> Result<Worksheet, ServerError>
    where
        P: AsRef<std::path::Path> + Send;
}

pub(crate) struct WorksheetRonDatasourceImpl;

impl WorksheetRonDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

#[async_trait]
impl WorksheetRonDatasource for WorksheetRonDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<Worksheet, ServerError> {
        let model: WorksheetModel =
            from_str(s).map_err(|e| InvalidRon::with_debug("Worksheet", &e))?;
        Worksheet::try_from(model)
    }

    async fn from_file<P>(&self, path: P) -> Result<Worksheet, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let s = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ReadError::with_debug(&e))?;
        self.from_string(&s)
    }
}

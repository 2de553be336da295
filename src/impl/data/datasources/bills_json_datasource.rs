use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    data::models::bill_model::BillModel,
    entities::Bill,
    errors::{InvalidJson, ReadError},
};

#[async_trait]
pub(crate) trait BillsJsonDatasource: Send + Sync {
    fn from_string(&self, s: &str) -> Result<Vec<Bill>, ServerError>;

    async fn from_file<P>(&self, path: P) -> Result<Vec<Bill>, ServerError>
    where
        P: AsRef<std::path::Path> + Send;
}

pub(crate) struct BillsJsonDatasourceImpl;

impl BillsJsonDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

#[async_trait]
impl BillsJsonDatasource for BillsJsonDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<Vec<Bill>, ServerError> {
        let models: Vec<BillModel> =
            serde_json::from_str(s).map_err(|e| InvalidJson::with_debug("Bill list", &e))?;
        models.into_iter().map(BillModel::into_bill).collect()
    }

    async fn from_file<P>(&self, path: P) -> Result<Vec<Bill>, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let s = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ReadError::with_debug(&e))?;
        self.from_string(&s)
    }
}

//! Solution API operations

use log::debug;
use serde_json::Value;

use crate::error::{PlatformError, Result};
use crate::platform::client::Layer;
use crate::platform::traits::PlatformResource;
use crate::platform::PlatformClient;

use super::filter::{build_list_path, solution_list_path, SubscriptionFilter};
use super::models::SolutionList;

impl PlatformClient {
    /// List solutions in a tenant as raw JSON items, in server order
    pub async fn list_solutions(&self, tenant: &str, filter: SubscriptionFilter) -> Result<Vec<Value>> {
        let path = build_list_path(filter);
        debug!("Solution list URL: {}", self.url_for(&path));

        let raw: Value = self
            .get_json(&path, Layer::tenant(tenant), "solutions")
            .await?;

        let items = collection_items(raw)?;
        debug!("Fetched {} solutions", items.len());
        Ok(items)
    }

    /// Ids of all solutions in the tenant starting with `prefix`.
    ///
    /// Backs shell completion: any failure yields an empty list.
    pub async fn get_solution_names(&self, tenant: &str, prefix: &str) -> Vec<String> {
        let list: SolutionList = match self
            .get_json(solution_list_path(), Layer::tenant(tenant), "solutions")
            .await
        {
            Ok(list) => list,
            Err(_) => return Vec::new(),
        };

        list.items
            .iter()
            .filter(|s| s.id_starts_with(prefix))
            .map(|s| s.id().to_string())
            .collect()
    }
}

/// Extract the `items` array of a collection response
fn collection_items(raw: Value) -> Result<Vec<Value>> {
    match raw {
        Value::Object(mut map) => match map.remove("items") {
            Some(Value::Array(items)) => Ok(items),
            Some(Value::Null) | None => Ok(Vec::new()),
            Some(other) => Err(PlatformError::Json(format!(
                "Expected 'items' to be an array, got: {}",
                other
            ))),
        },
        other => Err(PlatformError::Json(format!(
            "Expected a collection object, got: {}",
            other
        ))),
    }
}

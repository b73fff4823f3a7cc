/*
[INPUT]:  List/item identifiers, titles and full update records
[OUTPUT]: Item pages and result-code envelopes
[POS]:    HTTP layer - task endpoints nested under a list
[UPDATE]: When adding new item endpoints or changing query parameters
*/

use reqwest::Method;

use crate::http::{Result, TodoClient};
use crate::types::{
    ApiEnvelope, EmptyData, Item, ItemPayload, ItemsPage, TitleRequest, UpdateItemRequest,
};

impl TodoClient {
    /// Fetch items of one list
    ///
    /// GET todo-lists/{listId}/tasks
    pub async fn get_items(&self, list_id: &str) -> Result<ItemsPage> {
        let endpoint = format!("todo-lists/{list_id}/tasks");
        let builder = self.request(Method::GET, &endpoint)?;
        self.send_json(builder).await
    }

    /// Create an item in a list
    ///
    /// POST todo-lists/{listId}/tasks
    pub async fn create_item(
        &self,
        list_id: &str,
        title: &str,
    ) -> Result<ApiEnvelope<ItemPayload<Item>>> {
        let endpoint = format!("todo-lists/{list_id}/tasks");
        let body = TitleRequest {
            title: title.to_string(),
        };
        let builder = self.request(Method::POST, &endpoint)?.json(&body);
        self.send_json(builder).await
    }

    /// Delete an item
    ///
    /// DELETE todo-lists/{listId}/tasks/{itemId}
    pub async fn delete_item(&self, list_id: &str, item_id: &str) -> Result<ApiEnvelope<EmptyData>> {
        let endpoint = format!("todo-lists/{list_id}/tasks/{item_id}");
        let builder = self.request(Method::DELETE, &endpoint)?;
        self.send_json(builder).await
    }

    /// Replace an item with a full record
    ///
    /// PUT todo-lists/{listId}/tasks/{itemId}
    pub async fn update_item(
        &self,
        list_id: &str,
        item_id: &str,
        model: &UpdateItemRequest,
    ) -> Result<ApiEnvelope<ItemPayload<Item>>> {
        let endpoint = format!("todo-lists/{list_id}/tasks/{item_id}");
        let builder = self.request(Method::PUT, &endpoint)?.json(model);
        self.send_json(builder).await
    }
}

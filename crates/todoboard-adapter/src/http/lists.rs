/*
[INPUT]:  List identifiers and titles
[OUTPUT]: Lists and result-code envelopes
[POS]:    HTTP layer - todo-list endpoints
[UPDATE]: When adding new list endpoints or changing response format
*/

use reqwest::Method;

use crate::http::{Result, TodoClient};
use crate::types::{ApiEnvelope, EmptyData, ItemPayload, TitleRequest, TodoList};

impl TodoClient {
    /// Fetch every list of the current user
    ///
    /// GET todo-lists
    pub async fn get_lists(&self) -> Result<Vec<TodoList>> {
        let builder = self.request(Method::GET, "todo-lists")?;
        self.send_json(builder).await
    }

    /// Create a list
    ///
    /// POST todo-lists
    pub async fn create_list(&self, title: &str) -> Result<ApiEnvelope<ItemPayload<TodoList>>> {
        let body = TitleRequest {
            title: title.to_string(),
        };
        let builder = self.request(Method::POST, "todo-lists")?.json(&body);
        self.send_json(builder).await
    }

    /// Delete a list
    ///
    /// DELETE todo-lists/{id}
    pub async fn delete_list(&self, list_id: &str) -> Result<ApiEnvelope<EmptyData>> {
        let endpoint = format!("todo-lists/{list_id}");
        let builder = self.request(Method::DELETE, &endpoint)?;
        self.send_json(builder).await
    }

    /// Rename a list
    ///
    /// PUT todo-lists/{id}
    pub async fn update_list_title(
        &self,
        list_id: &str,
        title: &str,
    ) -> Result<ApiEnvelope<EmptyData>> {
        let endpoint = format!("todo-lists/{list_id}");
        let body = TitleRequest {
            title: title.to_string(),
        };
        let builder = self.request(Method::PUT, &endpoint)?.json(&body);
        self.send_json(builder).await
    }
}

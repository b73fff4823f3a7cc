/*
[INPUT]:  Remote service operations the sync engine depends on
[OUTPUT]: `TodoApi` trait and its HTTP implementation
[POS]:    Service seam - decouples state layer from the transport
[UPDATE]: When the engine needs a new remote operation
*/

use async_trait::async_trait;

use crate::http::{Result, TodoClient};
use crate::types::{
    ApiEnvelope, EmptyData, Item, ItemPayload, ItemsPage, LoginData, LoginRequest, MeData,
    TodoList, UpdateItemRequest,
};

/// Remote operations consumed by the state layer.
///
/// `Err` means the call itself did not complete. A completed call returns its
/// envelope untouched; interpreting the result code is the caller's job.
#[async_trait]
pub trait TodoApi: Send + Sync {
    async fn list_lists(&self) -> Result<Vec<TodoList>>;

    async fn create_list(&self, title: &str) -> Result<ApiEnvelope<ItemPayload<TodoList>>>;

    async fn remove_list(&self, list_id: &str) -> Result<ApiEnvelope<EmptyData>>;

    async fn rename_list(&self, list_id: &str, title: &str) -> Result<ApiEnvelope<EmptyData>>;

    async fn list_items(&self, list_id: &str) -> Result<ItemsPage>;

    async fn create_item(&self, list_id: &str, title: &str)
    -> Result<ApiEnvelope<ItemPayload<Item>>>;

    async fn remove_item(&self, list_id: &str, item_id: &str) -> Result<ApiEnvelope<EmptyData>>;

    /// `model` must be the complete record; the service does not merge.
    async fn update_item(
        &self,
        list_id: &str,
        item_id: &str,
        model: &UpdateItemRequest,
    ) -> Result<ApiEnvelope<ItemPayload<Item>>>;

    async fn who_am_i(&self) -> Result<ApiEnvelope<MeData>>;

    async fn login(&self, params: &LoginRequest) -> Result<ApiEnvelope<LoginData>>;

    async fn logout(&self) -> Result<ApiEnvelope<EmptyData>>;
}

#[async_trait]
impl TodoApi for TodoClient {
    async fn list_lists(&self) -> Result<Vec<TodoList>> {
        self.get_lists().await
    }

    async fn create_list(&self, title: &str) -> Result<ApiEnvelope<ItemPayload<TodoList>>> {
        TodoClient::create_list(self, title).await
    }

    async fn remove_list(&self, list_id: &str) -> Result<ApiEnvelope<EmptyData>> {
        self.delete_list(list_id).await
    }

    async fn rename_list(&self, list_id: &str, title: &str) -> Result<ApiEnvelope<EmptyData>> {
        self.update_list_title(list_id, title).await
    }

    async fn list_items(&self, list_id: &str) -> Result<ItemsPage> {
        self.get_items(list_id).await
    }

    async fn create_item(
        &self,
        list_id: &str,
        title: &str,
    ) -> Result<ApiEnvelope<ItemPayload<Item>>> {
        TodoClient::create_item(self, list_id, title).await
    }

    async fn remove_item(&self, list_id: &str, item_id: &str) -> Result<ApiEnvelope<EmptyData>> {
        self.delete_item(list_id, item_id).await
    }

    async fn update_item(
        &self,
        list_id: &str,
        item_id: &str,
        model: &UpdateItemRequest,
    ) -> Result<ApiEnvelope<ItemPayload<Item>>> {
        TodoClient::update_item(self, list_id, item_id, model).await
    }

    async fn who_am_i(&self) -> Result<ApiEnvelope<MeData>> {
        self.me().await
    }

    async fn login(&self, params: &LoginRequest) -> Result<ApiEnvelope<LoginData>> {
        TodoClient::login(self, params).await
    }

    async fn logout(&self) -> Result<ApiEnvelope<EmptyData>> {
        TodoClient::logout(self).await
    }
}

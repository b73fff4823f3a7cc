/*
[INPUT]:  Test scenarios that need a controllable todo service
[OUTPUT]: In-memory `TodoApi` with call log, failure injection and call gates
[POS]:    Test infrastructure - shared across engine test modules
[UPDATE]: When `TodoApi` gains an operation or tests need a new control
*/

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use tokio::sync::Notify;
use todoboard_adapter::{
    ApiEnvelope, AuthUser, EmptyData, FieldError, Item, ItemPayload, ItemPriority, ItemStatus,
    ItemsPage, LoginData, LoginRequest, MeData, Result, TodoApi, TodoApiError, TodoList,
    UpdateItemRequest,
};
use todoboard_sync::SyncEngine;

/// Canned failure for the next call of one operation.
#[derive(Debug, Clone)]
pub enum Failure {
    /// The call does not complete.
    Transport,
    /// The call completes with a non-zero result code.
    Domain {
        messages: Vec<String>,
        field_errors: Vec<FieldError>,
    },
}

impl Failure {
    pub fn domain(message: &str) -> Self {
        Failure::Domain {
            messages: vec![message.to_string()],
            field_errors: Vec::new(),
        }
    }

    pub fn silent_domain() -> Self {
        Failure::Domain {
            messages: Vec::new(),
            field_errors: Vec::new(),
        }
    }

    pub fn field(field: &str, error: &str) -> Self {
        Failure::Domain {
            messages: vec![error.to_string()],
            field_errors: vec![FieldError {
                field: field.to_string(),
                error: error.to_string(),
            }],
        }
    }
}

#[derive(Default)]
struct Remote {
    lists: Vec<TodoList>,
    items: HashMap<String, Vec<Item>>,
    logged_in: bool,
}

/// In-memory todo service.
#[derive(Default)]
pub struct FakeTodoApi {
    remote: Mutex<Remote>,
    calls: Mutex<Vec<&'static str>>,
    failures: Mutex<HashMap<&'static str, Failure>>,
    updates: Mutex<Vec<UpdateItemRequest>>,
    gates: Mutex<HashMap<&'static str, Arc<Notify>>>,
}

impl FakeTodoApi {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn with_lists(lists: Vec<TodoList>) -> Arc<Self> {
        let api = Self::default();
        {
            let mut remote = api.remote.lock().expect("remote lock");
            for list in &lists {
                remote.items.insert(list.id.clone(), Vec::new());
            }
            remote.lists = lists;
        }
        Arc::new(api)
    }

    pub fn seed_item(&self, item: Item) {
        let mut remote = self.remote.lock().expect("remote lock");
        remote
            .items
            .entry(item.list_id.clone())
            .or_default()
            .insert(0, item);
    }

    pub fn set_logged_in(&self, value: bool) {
        self.remote.lock().expect("remote lock").logged_in = value;
    }

    /// The next call of `operation` fails with `failure`.
    pub fn fail_next(&self, operation: &'static str, failure: Failure) {
        self.failures
            .lock()
            .expect("failures lock")
            .insert(operation, failure);
    }

    /// Holds every call of `operation` until the returned gate is notified.
    pub fn hold(&self, operation: &'static str) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        self.gates
            .lock()
            .expect("gate lock")
            .insert(operation, gate.clone());
        gate
    }

    async fn pass_gate(&self, operation: &'static str) {
        let gate = self.gates.lock().expect("gate lock").get(operation).cloned();
        if let Some(gate) = gate {
            gate.notified().await;
        }
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().expect("calls lock").clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().expect("calls lock").len()
    }

    pub fn updates(&self) -> Vec<UpdateItemRequest> {
        self.updates.lock().expect("updates lock").clone()
    }

    fn record(&self, operation: &'static str) -> Option<Failure> {
        self.calls.lock().expect("calls lock").push(operation);
        self.failures
            .lock()
            .expect("failures lock")
            .remove(operation)
    }

    /// Runs `operation` against the remote unless a failure is queued for it.
    fn envelope<T: Default>(
        &self,
        operation: &'static str,
        accept: impl FnOnce(&mut Remote) -> T,
    ) -> Result<ApiEnvelope<T>> {
        match self.record(operation) {
            Some(Failure::Transport) => Err(unavailable()),
            Some(Failure::Domain {
                messages,
                field_errors,
            }) => Ok(ApiEnvelope {
                result_code: 1,
                messages,
                field_errors,
                data: T::default(),
            }),
            None => {
                let mut remote = self.remote.lock().expect("remote lock");
                Ok(accepted(accept(&mut *remote)))
            }
        }
    }
}

fn unavailable() -> TodoApiError {
    TodoApiError::Api {
        status: 503,
        message: "Service Unavailable".to_string(),
    }
}

fn rejected<T: Default>(messages: Vec<String>) -> ApiEnvelope<T> {
    ApiEnvelope {
        result_code: 1,
        messages,
        field_errors: Vec::new(),
        data: T::default(),
    }
}

pub fn accepted<T>(data: T) -> ApiEnvelope<T> {
    ApiEnvelope {
        result_code: 0,
        messages: Vec::new(),
        field_errors: Vec::new(),
        data,
    }
}

#[async_trait]
impl TodoApi for FakeTodoApi {
    async fn list_lists(&self) -> Result<Vec<TodoList>> {
        match self.record("list_lists") {
            Some(_) => Err(unavailable()),
            None => Ok(self.remote.lock().expect("remote lock").lists.clone()),
        }
    }

    async fn create_list(&self, title: &str) -> Result<ApiEnvelope<ItemPayload<TodoList>>> {
        self.envelope("create_list", |remote| {
            let list = list(&uuid::Uuid::new_v4().to_string(), title);
            remote.items.insert(list.id.clone(), Vec::new());
            remote.lists.insert(0, list.clone());
            ItemPayload { item: Some(list) }
        })
    }

    async fn remove_list(&self, list_id: &str) -> Result<ApiEnvelope<EmptyData>> {
        self.pass_gate("remove_list").await;
        self.envelope("remove_list", |remote| {
            remote.lists.retain(|list| list.id != list_id);
            remote.items.remove(list_id);
            EmptyData {}
        })
    }

    async fn rename_list(&self, list_id: &str, title: &str) -> Result<ApiEnvelope<EmptyData>> {
        self.envelope("rename_list", |remote| {
            if let Some(list) = remote.lists.iter_mut().find(|list| list.id == list_id) {
                list.title = title.to_string();
            }
            EmptyData {}
        })
    }

    async fn list_items(&self, list_id: &str) -> Result<ItemsPage> {
        self.pass_gate("list_items").await;
        match self.record("list_items") {
            Some(Failure::Transport) => Err(unavailable()),
            Some(Failure::Domain { messages, .. }) => Ok(ItemsPage {
                items: Vec::new(),
                total_count: 0,
                error: Some(messages.into_iter().next().unwrap_or_default()),
            }),
            None => {
                let items = self
                    .remote
                    .lock()
                    .expect("remote lock")
                    .items
                    .get(list_id)
                    .cloned()
                    .unwrap_or_default();
                Ok(ItemsPage {
                    total_count: items.len() as u64,
                    items,
                    error: None,
                })
            }
        }
    }

    async fn create_item(
        &self,
        list_id: &str,
        title: &str,
    ) -> Result<ApiEnvelope<ItemPayload<Item>>> {
        self.pass_gate("create_item").await;
        self.envelope("create_item", |remote| {
            let item = item(list_id, &uuid::Uuid::new_v4().to_string(), title, ItemStatus::New);
            remote
                .items
                .entry(list_id.to_string())
                .or_default()
                .insert(0, item.clone());
            ItemPayload { item: Some(item) }
        })
    }

    async fn remove_item(&self, list_id: &str, item_id: &str) -> Result<ApiEnvelope<EmptyData>> {
        self.envelope("remove_item", |remote| {
            if let Some(items) = remote.items.get_mut(list_id) {
                items.retain(|item| item.id != item_id);
            }
            EmptyData {}
        })
    }

    async fn update_item(
        &self,
        list_id: &str,
        item_id: &str,
        model: &UpdateItemRequest,
    ) -> Result<ApiEnvelope<ItemPayload<Item>>> {
        self.updates
            .lock()
            .expect("updates lock")
            .push(model.clone());
        self.envelope("update_item", |remote| {
            let stored = remote
                .items
                .get_mut(list_id)
                .and_then(|items| items.iter_mut().find(|item| item.id == item_id));
            let updated = stored.map(|item| {
                item.title = model.title.clone();
                item.description = model.description.clone();
                item.status = model.status;
                item.priority = model.priority;
                item.start_date = model.start_date;
                item.deadline = model.deadline;
                item.clone()
            });
            ItemPayload { item: updated }
        })
    }

    async fn who_am_i(&self) -> Result<ApiEnvelope<MeData>> {
        match self.record("who_am_i") {
            Some(Failure::Transport) => Err(unavailable()),
            Some(Failure::Domain { messages, .. }) => Ok(rejected(messages)),
            None if self.remote.lock().expect("remote lock").logged_in => {
                Ok(accepted(MeData {
                    user: Some(AuthUser {
                        id: 1,
                        email: "free@samuraijs.com".to_string(),
                        login: "free".to_string(),
                    }),
                }))
            }
            None => Ok(rejected(vec!["You are not authorized".to_string()])),
        }
    }

    async fn login(&self, _params: &LoginRequest) -> Result<ApiEnvelope<LoginData>> {
        self.envelope("login", |remote| {
            remote.logged_in = true;
            LoginData { user_id: Some(1) }
        })
    }

    async fn logout(&self) -> Result<ApiEnvelope<EmptyData>> {
        self.envelope("logout", |remote| {
            remote.logged_in = false;
            EmptyData {}
        })
    }
}

pub fn timestamp() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 1)
        .and_then(|date| date.and_hms_opt(8, 0, 0))
        .expect("valid timestamp")
}

pub fn list(id: &str, title: &str) -> TodoList {
    TodoList {
        id: id.to_string(),
        title: title.to_string(),
        added_at: timestamp(),
        order: 0,
    }
}

pub fn item(list_id: &str, id: &str, title: &str, status: ItemStatus) -> Item {
    Item {
        id: id.to_string(),
        list_id: list_id.to_string(),
        title: title.to_string(),
        description: None,
        status,
        priority: ItemPriority::Low,
        start_date: None,
        deadline: None,
        order: 0,
        added_at: Some(timestamp()),
    }
}

pub fn engine_for(api: &Arc<FakeTodoApi>) -> SyncEngine {
    SyncEngine::new(api.clone())
}

pub fn login_request() -> LoginRequest {
    LoginRequest {
        email: "free@samuraijs.com".to_string(),
        password: "free".to_string(),
        remember_me: true,
        captcha: None,
    }
}

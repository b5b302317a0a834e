use serde_json::Value;

use crate::client::PayWhirl;
use crate::error::Result;
use crate::params::{ListQuery, Params};
use crate::transport::Transport;

impl<T: Transport> PayWhirl<T> {
    /// `GET /plans`
    pub fn get_plans(&self, query: impl Into<ListQuery>) -> Result<Value> {
        self.get("/plans", Some(query.into().into_params()))
    }

    /// `GET /plan/{id}`
    pub fn get_plan(&self, id: u64) -> Result<Value> {
        self.get(&format!("/plan/{id}"), None)
    }

    /// `POST /create/plan`
    pub fn create_plan(&self, data: Params) -> Result<Value> {
        self.post("/create/plan", data)
    }

    /// `POST /update/plan`; `data` must carry the plan `id`.
    pub fn update_plan(&self, data: Params) -> Result<Value> {
        self.post("/update/plan", data)
    }
}

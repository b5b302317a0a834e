//! Subscribing customers to plans.

use serde_json::Value;

use crate::client::PayWhirl;
use crate::error::Result;
use crate::params::Params;
use crate::transport::Transport;

/// Status filter applied by [`PayWhirl::get_subscriptions`] when none is given.
pub const DEFAULT_SUBSCRIPTION_STATUS: &str = "active";

impl<T: Transport> PayWhirl<T> {
    /// `GET /subscriptions/{customer_id}?status=...`, status defaulting to
    /// `active`.
    pub fn get_subscriptions(&self, customer_id: u64, status: Option<&str>) -> Result<Value> {
        let params = Params::new().with("status", status.unwrap_or(DEFAULT_SUBSCRIPTION_STATUS));
        self.get(&format!("/subscriptions/{customer_id}"), Some(params))
    }

    /// `GET /subscription/{id}`
    pub fn get_subscription(&self, id: u64) -> Result<Value> {
        self.get(&format!("/subscription/{id}"), None)
    }

    /// `POST /subscribe/customer`
    ///
    /// `trial_end` is a unix timestamp. Only supplied options are sent.
    pub fn subscribe_customer(
        &self,
        customer_id: u64,
        plan_id: u64,
        promo_id: Option<u64>,
        trial_end: Option<i64>,
        quantity: Option<u32>,
    ) -> Result<Value> {
        let mut params = Params::new();
        params
            .insert("customer_id", customer_id)
            .insert("plan_id", plan_id)
            .insert_opt("promo_id", promo_id)
            .insert_opt("trial_end", trial_end)
            .insert_opt("quantity", quantity);
        self.post("/subscribe/customer", params)
    }

    /// `POST /update/subscription`: move a subscription to another plan.
    pub fn update_subscription(&self, subscription_id: u64, plan_id: u64, quantity: Option<u32>) -> Result<Value> {
        let mut params = Params::new();
        params
            .insert("subscription_id", subscription_id)
            .insert("plan_id", plan_id)
            .insert_opt("quantity", quantity);
        self.post("/update/subscription", params)
    }

    /// `POST /unsubscribe/customer`
    pub fn unsubscribe_customer(&self, subscription_id: u64, at_period_end: Option<bool>) -> Result<Value> {
        let mut params = Params::new();
        params
            .insert("subscription_id", subscription_id)
            .insert_opt("at_period_end", at_period_end);
        self.post("/unsubscribe/customer", params)
    }
}

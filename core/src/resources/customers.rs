//! Customers, their addresses and profile questions.

use serde_json::Value;

use crate::client::PayWhirl;
use crate::error::Result;
use crate::params::{ListQuery, Params};
use crate::transport::Transport;

impl<T: Transport> PayWhirl<T> {
    /// `GET /customers`
    pub fn get_customers(&self, query: impl Into<ListQuery>) -> Result<Value> {
        self.get("/customers", Some(query.into().into_params()))
    }

    /// `GET /customer/{id}`
    pub fn get_customer(&self, id: u64) -> Result<Value> {
        self.get(&format!("/customer/{id}"), None)
    }

    /// `GET /customer/profile/{id}`: customer with addresses and answers.
    pub fn get_customer_profile(&self, id: u64) -> Result<Value> {
        self.get(&format!("/customer/profile/{id}"), None)
    }

    /// `GET /customer/addresses/{customer_id}`
    pub fn get_customer_addresses(&self, customer_id: u64) -> Result<Value> {
        self.get(&format!("/customer/addresses/{customer_id}"), None)
    }

    /// `GET /customer/address/{address_id}`
    pub fn get_customer_address(&self, address_id: u64) -> Result<Value> {
        self.get(&format!("/customer/address/{address_id}"), None)
    }

    /// `POST /customer/address`
    pub fn create_customer_address(&self, data: Params) -> Result<Value> {
        self.post("/customer/address", data)
    }

    /// `PATCH /customer/address/{address_id}`
    pub fn update_customer_address(&self, address_id: u64, data: Params) -> Result<Value> {
        self.patch(&format!("/customer/address/{address_id}"), data)
    }

    /// `DELETE /customer/address/{address_id}`
    pub fn delete_customer_address(&self, address_id: u64) -> Result<Value> {
        self.delete(&format!("/customer/address/{address_id}"))
    }

    /// `POST /create/customer`
    pub fn create_customer(&self, data: Params) -> Result<Value> {
        self.post("/create/customer", data)
    }

    /// `POST /update/customer`; `data` must carry the customer `id`.
    pub fn update_customer(&self, data: Params) -> Result<Value> {
        self.post("/update/customer", data)
    }

    /// `POST /delete/customer`. `forget` asks the service to erase personal
    /// data as well; it is only sent when given.
    pub fn delete_customer(&self, id: u64, forget: Option<bool>) -> Result<Value> {
        let mut params = Params::new();
        params.insert("id", id).insert_opt("forget", forget);
        self.post("/delete/customer", params)
    }

    /// `POST /auth/customer`: check a customer's login credentials.
    pub fn auth_customer(&self, email: &str, password: &str) -> Result<Value> {
        let params = Params::new().with("email", email).with("password", password);
        self.post("/auth/customer", params)
    }

    /// `GET /questions`: profile questions asked at signup.
    pub fn get_questions(&self, query: impl Into<ListQuery>) -> Result<Value> {
        self.get("/questions", Some(query.into().into_params()))
    }

    /// `POST /update/answer`
    pub fn update_answer(&self, data: Params) -> Result<Value> {
        self.post("/update/answer", data)
    }
}

//! Account-level endpoints: account info, stats, email, shipping and tax
//! rules, multi-auth tokens.

use serde_json::Value;

use crate::client::PayWhirl;
use crate::error::Result;
use crate::params::Params;
use crate::transport::Transport;

impl<T: Transport> PayWhirl<T> {
    /// `GET /email/{id}`
    pub fn get_email_template(&self, id: u64) -> Result<Value> {
        self.get(&format!("/email/{id}"), None)
    }

    /// `POST /send-email`: send a system email template to a customer.
    pub fn send_email(&self, data: Params) -> Result<Value> {
        self.post("/send-email", data)
    }

    /// `GET /account`
    pub fn get_account(&self) -> Result<Value> {
        self.get("/account", None)
    }

    /// `GET /stats`
    pub fn get_stats(&self) -> Result<Value> {
        self.get("/stats", None)
    }

    /// `GET /shipping`
    pub fn get_shipping_rules(&self) -> Result<Value> {
        self.get("/shipping", None)
    }

    /// `GET /shipping/{id}`
    pub fn get_shipping_rule(&self, id: u64) -> Result<Value> {
        self.get(&format!("/shipping/{id}"), None)
    }

    /// `GET /tax`
    pub fn get_tax_rules(&self) -> Result<Value> {
        self.get("/tax", None)
    }

    /// `GET /tax/{id}`
    pub fn get_tax_rule(&self, id: u64) -> Result<Value> {
        self.get(&format!("/tax/{id}"), None)
    }

    /// `POST /multi-auth`: one-time token logging a customer into the
    /// hosted widgets.
    pub fn get_multi_auth_token(&self, data: Params) -> Result<Value> {
        self.post("/multi-auth", data)
    }
}

#[cfg(test)]
mod tests {
    use crate::client::testing::*;
    use crate::http::HttpMethod;
    use crate::params::Params;

    #[test]
    fn email_endpoints() {
        let (client, recorder) = client();

        client.get_email_template(4).unwrap();
        assert_sent(&recorder, HttpMethod::Get, "/email/4", None);

        client
            .send_email(Params::new().with("template_id", 4).with("customer_id", 42))
            .unwrap();
        assert_sent(&recorder, HttpMethod::Post, "/send-email", Some("template_id=4&customer_id=42"));
    }

    #[test]
    fn account_endpoints() {
        let (client, recorder) = client();

        client.get_account().unwrap();
        assert_sent(&recorder, HttpMethod::Get, "/account", None);

        client.get_stats().unwrap();
        assert_sent(&recorder, HttpMethod::Get, "/stats", None);
    }

    #[test]
    fn shipping_and_tax_rules() {
        let (client, recorder) = client();

        client.get_shipping_rules().unwrap();
        assert_sent(&recorder, HttpMethod::Get, "/shipping", None);

        client.get_shipping_rule(6).unwrap();
        assert_sent(&recorder, HttpMethod::Get, "/shipping/6", None);

        client.get_tax_rules().unwrap();
        assert_sent(&recorder, HttpMethod::Get, "/tax", None);

        client.get_tax_rule(8).unwrap();
        assert_sent(&recorder, HttpMethod::Get, "/tax/8", None);
    }

    #[test]
    fn multi_auth_token() {
        let (client, recorder) = client();
        client
            .get_multi_auth_token(Params::new().with("customer_id", 42).with("next_url", "https://shop.example/account"))
            .unwrap();
        assert_sent(
            &recorder,
            HttpMethod::Post,
            "/multi-auth",
            Some("customer_id=42&next_url=https%3A%2F%2Fshop.example%2Faccount"),
        );
    }
}

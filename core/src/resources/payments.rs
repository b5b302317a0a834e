//! Gateways, one-off charges and stored cards.

use serde_json::Value;

use crate::client::PayWhirl;
use crate::error::Result;
use crate::params::Params;
use crate::transport::Transport;

impl<T: Transport> PayWhirl<T> {
    /// `GET /gateways`
    pub fn get_gateways(&self) -> Result<Value> {
        self.get("/gateways", None)
    }

    /// `GET /gateway/{id}`
    pub fn get_gateway(&self, id: u64) -> Result<Value> {
        self.get(&format!("/gateway/{id}"), None)
    }

    /// `POST /create/charge`
    pub fn create_charge(&self, data: Params) -> Result<Value> {
        self.post("/create/charge", data)
    }

    /// `GET /charge/{id}`
    pub fn get_charge(&self, id: u64) -> Result<Value> {
        self.get(&format!("/charge/{id}"), None)
    }

    /// `POST /refund/charge/{id}`. An empty `data` refunds the full amount.
    pub fn refund_charge(&self, id: u64, data: Params) -> Result<Value> {
        self.post(&format!("/refund/charge/{id}"), data)
    }

    /// `GET /cards/{customer_id}`
    pub fn get_cards(&self, customer_id: u64) -> Result<Value> {
        self.get(&format!("/cards/{customer_id}"), None)
    }

    /// `GET /card/{id}`
    pub fn get_card(&self, id: u64) -> Result<Value> {
        self.get(&format!("/card/{id}"), None)
    }

    /// `POST /create/card`
    pub fn create_card(&self, data: Params) -> Result<Value> {
        self.post("/create/card", data)
    }

    /// `POST /delete/card`
    pub fn delete_card(&self, id: u64) -> Result<Value> {
        self.post("/delete/card", Params::new().with("id", id))
    }
}

#[cfg(test)]
mod tests {
    use crate::client::testing::*;
    use crate::http::HttpMethod;
    use crate::params::Params;

    #[test]
    fn gateway_endpoints() {
        let (client, recorder) = client();

        client.get_gateways().unwrap();
        assert_sent(&recorder, HttpMethod::Get, "/gateways", None);

        client.get_gateway(2).unwrap();
        assert_sent(&recorder, HttpMethod::Get, "/gateway/2", None);
    }

    #[test]
    fn charge_endpoints() {
        let (client, recorder) = client();

        client
            .create_charge(
                Params::new()
                    .with("customer_id", 42)
                    .with("amount", 25)
                    .with("description", "Setup fee"),
            )
            .unwrap();
        assert_sent(
            &recorder,
            HttpMethod::Post,
            "/create/charge",
            Some("customer_id=42&amount=25&description=Setup+fee"),
        );

        client.get_charge(300).unwrap();
        assert_sent(&recorder, HttpMethod::Get, "/charge/300", None);

        client.refund_charge(300, Params::new()).unwrap();
        assert_sent(&recorder, HttpMethod::Post, "/refund/charge/300", Some(""));

        client
            .refund_charge(300, Params::new().with("amount", 5.5))
            .unwrap();
        assert_sent(&recorder, HttpMethod::Post, "/refund/charge/300", Some("amount=5.5"));
    }

    #[test]
    fn card_endpoints() {
        let (client, recorder) = client();

        client.get_cards(42).unwrap();
        assert_sent(&recorder, HttpMethod::Get, "/cards/42", None);

        client.get_card(11).unwrap();
        assert_sent(&recorder, HttpMethod::Get, "/card/11", None);

        client
            .create_card(Params::new().with("customer_id", 42).with("token", "tok_visa"))
            .unwrap();
        assert_sent(
            &recorder,
            HttpMethod::Post,
            "/create/card",
            Some("customer_id=42&token=tok_visa"),
        );

        client.delete_card(11).unwrap();
        assert_sent(&recorder, HttpMethod::Post, "/delete/card", Some("id=11"));
    }
}

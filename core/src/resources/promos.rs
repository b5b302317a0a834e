use serde_json::Value;

use crate::client::PayWhirl;
use crate::error::Result;
use crate::params::Params;
use crate::transport::Transport;

impl<T: Transport> PayWhirl<T> {
    /// `GET /promo`
    pub fn get_promos(&self) -> Result<Value> {
        self.get("/promo", None)
    }

    /// `GET /promo/{id}`
    pub fn get_promo(&self, id: u64) -> Result<Value> {
        self.get(&format!("/promo/{id}"), None)
    }

    /// `POST /create/promo`
    pub fn create_promo(&self, data: Params) -> Result<Value> {
        self.post("/create/promo", data)
    }

    /// `POST /delete/promo`
    pub fn delete_promo(&self, id: u64) -> Result<Value> {
        self.post("/delete/promo", Params::new().with("id", id))
    }
}

#[cfg(test)]
mod tests {
    use crate::client::testing::*;
    use crate::http::HttpMethod;
    use crate::params::Params;

    #[test]
    fn promo_endpoints() {
        let (client, recorder) = client();

        client.get_promos().unwrap();
        assert_sent(&recorder, HttpMethod::Get, "/promo", None);

        client.get_promo(5).unwrap();
        assert_sent(&recorder, HttpMethod::Get, "/promo/5", None);

        client
            .create_promo(
                Params::new()
                    .with("code", "WELCOME")
                    .with("discount_type", "percent")
                    .with("amount_off", 10),
            )
            .unwrap();
        assert_sent(
            &recorder,
            HttpMethod::Post,
            "/create/promo",
            Some("code=WELCOME&discount_type=percent&amount_off=10"),
        );

        client.delete_promo(5).unwrap();
        assert_sent(&recorder, HttpMethod::Post, "/delete/promo", Some("id=5"));
    }
}

//! Invoices and the actions that can be taken on an open invoice.

use serde_json::Value;

use crate::client::PayWhirl;
use crate::error::Result;
use crate::params::Params;
use crate::transport::Transport;

impl<T: Transport> PayWhirl<T> {
    /// `GET /invoice/{id}`
    pub fn get_invoice(&self, id: u64) -> Result<Value> {
        self.get(&format!("/invoice/{id}"), None)
    }

    /// `GET /invoices/{customer_id}`. Without `all` the service returns only
    /// upcoming invoices.
    pub fn get_invoices(&self, customer_id: u64, all: Option<bool>) -> Result<Value> {
        let mut params = Params::new();
        params.insert_opt("all", all);
        self.get(&format!("/invoices/{customer_id}"), Some(params))
    }

    /// `POST /create/invoice`
    pub fn create_invoice(&self, data: Params) -> Result<Value> {
        self.post("/create/invoice", data)
    }

    /// `DELETE /invoice/{id}`
    pub fn delete_invoice(&self, id: u64) -> Result<Value> {
        self.delete(&format!("/invoice/{id}"))
    }

    /// `POST /invoice/{id}/process`: charge the invoice now.
    pub fn process_invoice(&self, id: u64) -> Result<Value> {
        self.post(&format!("/invoice/{id}/process"), Params::new())
    }

    /// `POST /invoice/{id}/mark-as-paid`
    pub fn mark_invoice_as_paid(&self, id: u64) -> Result<Value> {
        self.post(&format!("/invoice/{id}/mark-as-paid"), Params::new())
    }

    /// `POST /invoice/{id}/add-promo`
    pub fn add_promo_code_to_invoice(&self, id: u64, promo_code: &str) -> Result<Value> {
        self.post(
            &format!("/invoice/{id}/add-promo"),
            Params::new().with("promo_code", promo_code),
        )
    }

    /// `POST /invoice/{id}/remove-promo`
    pub fn remove_promo_code_from_invoice(&self, id: u64) -> Result<Value> {
        self.post(&format!("/invoice/{id}/remove-promo"), Params::new())
    }

    /// `POST /invoice/{id}/card`: card to charge for this invoice.
    pub fn update_invoice_card(&self, id: u64, card_id: u64) -> Result<Value> {
        self.post(&format!("/invoice/{id}/card"), Params::new().with("card_id", card_id))
    }

    /// `POST /invoice/{id}/items`
    ///
    /// Each line item is an object such as `{"id": 5, "quantity": 2}`; they
    /// are sent as `line_items[0][id]=5&line_items[0][quantity]=2`.
    pub fn update_invoice_items(&self, id: u64, line_items: Vec<Value>) -> Result<Value> {
        self.post(
            &format!("/invoice/{id}/items"),
            Params::new().with("line_items", line_items),
        )
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::client::testing::*;
    use crate::http::HttpMethod;
    use crate::params::Params;

    #[test]
    fn invoice_reads() {
        let (client, recorder) = client();

        client.get_invoice(77).unwrap();
        assert_sent(&recorder, HttpMethod::Get, "/invoice/77", None);

        client.get_invoices(42, None).unwrap();
        assert_sent(&recorder, HttpMethod::Get, "/invoices/42", None);

        client.get_invoices(42, Some(true)).unwrap();
        assert_sent(&recorder, HttpMethod::Get, "/invoices/42?all=1", None);
    }

    #[test]
    fn invoice_create_and_delete() {
        let (client, recorder) = client();

        client
            .create_invoice(Params::new().with("customer_id", 42).with("due_date", "2026-11-01"))
            .unwrap();
        assert_sent(
            &recorder,
            HttpMethod::Post,
            "/create/invoice",
            Some("customer_id=42&due_date=2026-11-01"),
        );

        client.delete_invoice(77).unwrap();
        assert_sent(&recorder, HttpMethod::Delete, "/invoice/77", None);
    }

    #[test]
    fn invoice_actions() {
        let (client, recorder) = client();

        client.process_invoice(77).unwrap();
        assert_sent(&recorder, HttpMethod::Post, "/invoice/77/process", Some(""));

        client.mark_invoice_as_paid(77).unwrap();
        assert_sent(&recorder, HttpMethod::Post, "/invoice/77/mark-as-paid", Some(""));

        client.add_promo_code_to_invoice(77, "SPRING 10").unwrap();
        assert_sent(&recorder, HttpMethod::Post, "/invoice/77/add-promo", Some("promo_code=SPRING+10"));

        client.remove_promo_code_from_invoice(77).unwrap();
        assert_sent(&recorder, HttpMethod::Post, "/invoice/77/remove-promo", Some(""));

        client.update_invoice_card(77, 3).unwrap();
        assert_sent(&recorder, HttpMethod::Post, "/invoice/77/card", Some("card_id=3"));
    }

    #[test]
    fn invoice_items_use_bracket_notation() {
        let (client, recorder) = client();
        client
            .update_invoice_items(77, vec![json!({"id": 5, "quantity": 2}), json!({"id": 6, "quantity": 1})])
            .unwrap();
        assert_sent(
            &recorder,
            HttpMethod::Post,
            "/invoice/77/items",
            Some(
                "line_items%5B0%5D%5Bid%5D=5&line_items%5B0%5D%5Bquantity%5D=2\
                 &line_items%5B1%5D%5Bid%5D=6&line_items%5B1%5D%5Bquantity%5D=1",
            ),
        );
    }
}

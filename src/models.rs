//! Data model types shared across the application.
//!
//! This module defines the catalog and order types exchanged with the
//! Larek backend, plus the checkout field/form identifiers used to route
//! form edits and validation errors.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single catalog product.
///
/// Immutable once loaded from the catalog; identity is by `id`.
/// A `price` of `None` marks a "priceless" item that cannot be purchased.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    /// Image URL. Relative in API responses, resolved against the CDN
    /// origin by the API client before the item reaches the app.
    pub image: String,
    pub price: Option<u64>,
}

impl ProductItem {
    /// Whether the item can be added to the basket at all.
    pub fn purchasable(&self) -> bool {
        self.price.is_some()
    }
}

/// Payment method selected in the order form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    #[default]
    Card,
    Cash,
}

impl PaymentMethod {
    /// Parse the wire/input representation ("card" / "cash").
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "card" => Some(PaymentMethod::Card),
            "cash" => Some(PaymentMethod::Cash),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "card",
            PaymentMethod::Cash => "cash",
        }
    }
}

/// The order being assembled across the two checkout steps.
///
/// Mutated field-by-field as the user types. `items` is snapshotted from
/// the basket when the order form opens; `total` is recomputed on every
/// basket change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OrderDraft {
    pub payment: PaymentMethod,
    pub address: String,
    pub email: String,
    pub phone: String,
    pub items: Vec<String>,
    pub total: u64,
}

/// Confirmation returned by the backend for a submitted order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OrderResult {
    pub id: String,
    pub total: u64,
}

/// Paged list envelope used by the catalog endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiListResponse<T> {
    pub total: u64,
    pub items: Vec<T>,
}

/// Which checkout form an edit belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    /// Delivery step: payment method and address.
    Order,
    /// Contact step: email and phone.
    Contacts,
}

/// One editable field of the checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CheckoutField {
    Payment,
    Address,
    Email,
    Phone,
}

impl CheckoutField {
    /// The form this field is rendered on.
    pub fn form(&self) -> FormKind {
        match self {
            CheckoutField::Payment | CheckoutField::Address => FormKind::Order,
            CheckoutField::Email | CheckoutField::Phone => FormKind::Contacts,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CheckoutField::Payment => "Payment",
            CheckoutField::Address => "Address",
            CheckoutField::Email => "Email",
            CheckoutField::Phone => "Phone",
        }
    }
}

/// Validation errors keyed by field; absence of a key means the field is
/// valid. Replaced whole on every validation pass, never merged.
pub type FormErrors = BTreeMap<CheckoutField, String>;

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, price: Option<u64>) -> ProductItem {
        ProductItem {
            id: id.to_string(),
            title: format!("Item {}", id),
            description: String::new(),
            category: "other".to_string(),
            image: "/i.svg".to_string(),
            price,
        }
    }

    #[test]
    fn test_purchasable() {
        assert!(item("1", Some(100)).purchasable());
        assert!(!item("2", None).purchasable());
    }

    #[test]
    fn test_payment_method_parse() {
        assert_eq!(PaymentMethod::parse("card"), Some(PaymentMethod::Card));
        assert_eq!(PaymentMethod::parse("cash"), Some(PaymentMethod::Cash));
        assert_eq!(PaymentMethod::parse("online"), None);
    }

    #[test]
    fn test_payment_method_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&PaymentMethod::Card).unwrap(),
            "\"card\""
        );
        assert_eq!(
            serde_json::to_string(&PaymentMethod::Cash).unwrap(),
            "\"cash\""
        );
    }

    #[test]
    fn test_order_draft_wire_shape() {
        let draft = OrderDraft {
            payment: PaymentMethod::Cash,
            address: "Spb, Nevsky 1".to_string(),
            email: "a@b.c".to_string(),
            phone: "+7000".to_string(),
            items: vec!["id-1".to_string(), "id-2".to_string()],
            total: 300,
        };
        let json: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&draft).unwrap()).unwrap();
        assert_eq!(json["payment"], "cash");
        assert_eq!(json["address"], "Spb, Nevsky 1");
        assert_eq!(json["email"], "a@b.c");
        assert_eq!(json["phone"], "+7000");
        assert_eq!(json["items"].as_array().unwrap().len(), 2);
        assert_eq!(json["total"], 300);
    }

    #[test]
    fn test_list_response_deserialization() {
        let body = r#"{"total":2,"items":[
            {"id":"1","title":"A","description":"","category":"soft","image":"/a.svg","price":100},
            {"id":"2","title":"B","description":"","category":"hard","image":"/b.svg","price":null}
        ]}"#;
        let list: ApiListResponse<ProductItem> = serde_json::from_str(body).unwrap();
        assert_eq!(list.total, 2);
        assert_eq!(list.items[0].price, Some(100));
        assert_eq!(list.items[1].price, None);
    }

    #[test]
    fn test_checkout_field_form_routing() {
        assert_eq!(CheckoutField::Payment.form(), FormKind::Order);
        assert_eq!(CheckoutField::Address.form(), FormKind::Order);
        assert_eq!(CheckoutField::Email.form(), FormKind::Contacts);
        assert_eq!(CheckoutField::Phone.form(), FormKind::Contacts);
    }
}

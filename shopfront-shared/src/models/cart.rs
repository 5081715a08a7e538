use serde::{Deserialize, Serialize};

/// A product as the cart endpoint reports it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub name: String,
    pub price: f64,
}

/// One product/quantity pairing within a user's cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    /// Unit price times quantity for this line.
    #[must_use]
    pub fn line_total(&self) -> f64 {
        self.product.price * f64::from(self.quantity)
    }
}

/// Response schema for `GET /api/cart`.
///
/// A missing `cartItems` field reads as an empty cart rather than a parse
/// error; the backend omits the field when the cart has never been touched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CartResponse {
    #[serde(rename = "cartItems", default)]
    pub cart_items: Vec<CartLine>,
}

/// Two-decimal currency rendering used for unit prices and line totals.
#[must_use]
pub fn format_price(amount: f64) -> String {
    format!("{amount:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget(quantity: u32) -> CartLine {
        CartLine {
            product: Product {
                name: "Widget".to_string(),
                price: 9.99,
            },
            quantity,
        }
    }

    #[test]
    fn line_total_multiplies_price_by_quantity() {
        assert_eq!(format_price(widget(3).line_total()), "29.97");
    }

    #[test]
    fn line_total_is_zero_for_zero_quantity() {
        assert_eq!(format_price(widget(0).line_total()), "0.00");
    }

    #[test]
    fn format_price_pads_to_two_decimals() {
        assert_eq!(format_price(5.0), "5.00");
        assert_eq!(format_price(5.5), "5.50");
    }

    #[test]
    fn cart_response_parses_lines_in_order() {
        let body = r#"{
            "cartItems": [
                { "product": { "name": "Widget", "price": 9.99 }, "quantity": 3 },
                { "product": { "name": "Gadget", "price": 1.5 }, "quantity": 1 }
            ]
        }"#;
        let response: CartResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.cart_items.len(), 2);
        assert_eq!(response.cart_items[0].product.name, "Widget");
        assert_eq!(response.cart_items[1].product.name, "Gadget");
    }

    #[test]
    fn missing_cart_items_field_reads_as_empty_cart() {
        let response: CartResponse = serde_json::from_str("{}").unwrap();
        assert!(response.cart_items.is_empty());
    }
}

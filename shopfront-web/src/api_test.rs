//! Tests for the API client functionality
//!
//! Validates request URL construction and the mapping from cart responses
//! to cart lines or error messages.

#[cfg(test)]
mod tests {
    use crate::api::{ShopClient, interpret_cart_response};
    use reqwest::StatusCode;
    use shared::models::CartFetchError;

    #[test]
    fn test_api_client_creation() {
        let _client = ShopClient::new("http://localhost:8000/api");
    }

    #[test]
    fn test_cart_endpoint_url() {
        let url = format!("{}/{}", "http://127.0.0.1:8000/api", "cart");
        assert_eq!(url, "http://127.0.0.1:8000/api/cart");
    }

    #[test]
    fn empty_cart_response_yields_no_lines() {
        let lines = interpret_cart_response(StatusCode::OK, r#"{ "cartItems": [] }"#).unwrap();
        assert!(lines.is_empty());
    }

    #[test]
    fn missing_cart_items_field_yields_no_lines() {
        let lines = interpret_cart_response(StatusCode::OK, "{}").unwrap();
        assert!(lines.is_empty());
    }

    #[test]
    fn populated_cart_response_preserves_api_order() {
        let body = r#"{
            "cartItems": [
                { "product": { "name": "Widget", "price": 9.99 }, "quantity": 3 },
                { "product": { "name": "Gadget", "price": 1.5 }, "quantity": 1 }
            ]
        }"#;
        let lines = interpret_cart_response(StatusCode::OK, body).unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].product.name, "Widget");
        assert_eq!(lines[0].quantity, 3);
        assert_eq!(lines[1].product.name, "Gadget");
    }

    #[test]
    fn non_success_status_surfaces_body_in_error() {
        let err = interpret_cart_response(StatusCode::UNAUTHORIZED, "Unauthorized").unwrap_err();
        assert_eq!(err, CartFetchError::Backend("Unauthorized".to_string()));
        assert_eq!(err.to_string(), "Failed to fetch cart items: Unauthorized");
    }

    #[test]
    fn all_non_success_statuses_are_treated_alike() {
        for status in [
            StatusCode::BAD_REQUEST,
            StatusCode::FORBIDDEN,
            StatusCode::NOT_FOUND,
            StatusCode::INTERNAL_SERVER_ERROR,
        ] {
            let err = interpret_cart_response(status, "boom").unwrap_err();
            assert_eq!(err.to_string(), "Failed to fetch cart items: boom");
        }
    }

    #[test]
    fn malformed_body_is_a_transport_error_with_parser_text() {
        let err = interpret_cart_response(StatusCode::OK, "not json").unwrap_err();
        match err {
            CartFetchError::Transport(message) => assert!(!message.is_empty()),
            other => panic!("expected transport error, got {other:?}"),
        }
    }
}

pub(crate) mod cart_view;
pub(crate) mod loading;

// Re-export components for convenience
pub use cart_view::CartView;

/// Side-store key holding the cart lines.
pub const CART_KEY: &str = "cart";
/// Side-store key holding the wishlist products.
pub const WISHLIST_KEY: &str = "wishlist";

use crate::domain::catalog::model::Product;
use crate::domain::catalog::value_objects::ProductId;

/// A product line in the cart. `quantity` is at least 1 while the line is in a
/// [`CartState`]; the reducer drops lines that would fall to zero.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    pub product: Product,
    pub quantity: u32,
}

impl CartItem {
    pub fn new(product: Product, quantity: u32) -> Self {
        Self { product, quantity }
    }

    pub fn id(&self) -> ProductId {
        self.product.id
    }

    pub fn line_total(&self) -> f64 {
        self.product.price * f64::from(self.quantity)
    }

    pub fn line_savings(&self) -> f64 {
        self.product
            .discount()
            .map_or(0.0, |discount| discount * f64::from(self.quantity))
    }
}

/// Cart contents plus aggregates derived from them.
///
/// Aggregates are private and only ever computed by [`CartState::from_items`],
/// so they always equal the fold of `items`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CartState {
    items: Vec<CartItem>,
    total: f64,
    items_count: u64,
    savings: f64,
}

impl CartState {
    pub(crate) fn from_items(items: Vec<CartItem>) -> Self {
        let total = items.iter().map(CartItem::line_total).sum();
        let items_count = items.iter().map(|item| u64::from(item.quantity)).sum();
        let savings = items.iter().map(CartItem::line_savings).sum();

        Self {
            items,
            total,
            items_count,
            savings,
        }
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Sum of `price * quantity` over all lines.
    pub fn total(&self) -> f64 {
        self.total
    }

    /// Sum of quantities over all lines.
    pub fn items_count(&self) -> u64 {
        self.items_count
    }

    /// Amount saved against original prices.
    pub fn savings(&self) -> f64 {
        self.savings
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.get(id).is_some()
    }

    pub fn quantity_of(&self, id: ProductId) -> u32 {
        self.get(id).map_or(0, |item| item.quantity)
    }
}

use std::collections::BTreeMap;

use super::value_objects::ProductId;

/// A single customer review shown on the product page.
#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub author: String,
    pub rating: f64,
    pub comment: String,
    pub date: String,
}

/// Catalog views either carry the full review list or only its size.
#[derive(Debug, Clone, PartialEq)]
pub enum Reviews {
    Entries(Vec<Review>),
    Count(u32),
}

impl Reviews {
    pub fn count(&self) -> usize {
        match self {
            Reviews::Entries(entries) => entries.len(),
            Reviews::Count(count) => *count as usize,
        }
    }
}

impl Default for Reviews {
    fn default() -> Self {
        Reviews::Count(0)
    }
}

/// Read-only catalog entry as supplied by the storefront views.
///
/// Prices are plain numbers; minor-unit precision is not enforced.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub brand: String,
    pub category: String,
    pub price: f64,
    pub original_price: Option<f64>,
    pub image: String,
    /// 0 to 5.
    pub rating: f64,
    pub reviews: Reviews,
    pub in_stock: bool,
    pub features: Vec<String>,
    pub description: Option<String>,
    pub specifications: Option<BTreeMap<String, String>>,
}

impl Product {
    /// Builds a product with the given identity and price; the remaining
    /// fields start empty and in stock.
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            brand: String::new(),
            category: String::new(),
            price,
            original_price: None,
            image: String::new(),
            rating: 0.0,
            reviews: Reviews::default(),
            in_stock: true,
            features: Vec::new(),
            description: None,
            specifications: None,
        }
    }

    /// Per-unit markdown, when the product is sold below its original price.
    pub fn discount(&self) -> Option<f64> {
        self.original_price
            .filter(|original| *original > self.price)
            .map(|original| original - self.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_start_in_stock_without_optional_fields() {
        let product = Product::new(1, "Noise Cancelling Headphones", 249.0);

        assert!(product.in_stock);
        assert!(product.original_price.is_none());
        assert!(product.description.is_none());
        assert_eq!(product.reviews.count(), 0);
    }

    #[test]
    fn should_report_discount_when_sold_below_original_price() {
        let product = Product {
            original_price: Some(299.0),
            ..Product::new(1, "Smartwatch", 249.0)
        };

        assert_eq!(product.discount(), Some(50.0));
    }

    #[test]
    fn should_ignore_original_price_not_above_price() {
        let product = Product {
            original_price: Some(199.0),
            ..Product::new(1, "Smartwatch", 249.0)
        };

        assert_eq!(product.discount(), None);
    }

    #[test]
    fn should_count_review_entries() {
        let reviews = Reviews::Entries(vec![Review {
            author: "Ana".to_string(),
            rating: 5.0,
            comment: "Great sound".to_string(),
            date: "2024-03-01".to_string(),
        }]);

        assert_eq!(reviews.count(), 1);
        assert_eq!(Reviews::Count(12).count(), 12);
    }
}

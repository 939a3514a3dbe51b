use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use business::domain::catalog::model::{Product, Review, Reviews};
use business::domain::catalog::value_objects::ProductId;
use business::domain::errors::RepositoryError;

fn default_in_stock() -> bool {
    true
}

/// Persisted product record (camelCase JSON, as written by the storefront).
///
/// Only `id`, `name` and `price` are required; other fields fall back to
/// defaults so records written before a field existed still load.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductEntity {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub category: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<f64>,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub reviews: ReviewsEntity,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specifications: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReviewsEntity {
    Count(u32),
    Entries(Vec<ReviewEntity>),
}

impl Default for ReviewsEntity {
    fn default() -> Self {
        ReviewsEntity::Count(0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewEntity {
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub date: String,
}

impl ProductEntity {
    pub fn from_domain(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            brand: product.brand.clone(),
            category: product.category.clone(),
            price: product.price,
            original_price: product.original_price,
            image: product.image.clone(),
            rating: product.rating,
            reviews: match &product.reviews {
                Reviews::Count(count) => ReviewsEntity::Count(*count),
                Reviews::Entries(entries) => ReviewsEntity::Entries(
                    entries
                        .iter()
                        .map(|review| ReviewEntity {
                            author: review.author.clone(),
                            rating: review.rating,
                            comment: review.comment.clone(),
                            date: review.date.clone(),
                        })
                        .collect(),
                ),
            },
            in_stock: product.in_stock,
            features: product.features.clone(),
            description: product.description.clone(),
            specifications: product.specifications.clone(),
        }
    }

    /// JSON cannot encode NaN or infinity; serde_json would write `null`,
    /// which the next load rejects along with every other record under the key.
    pub fn ensure_finite(&self) -> Result<(), RepositoryError> {
        let review_ratings: Vec<f64> = match &self.reviews {
            ReviewsEntity::Entries(entries) => entries.iter().map(|review| review.rating).collect(),
            ReviewsEntity::Count(_) => Vec::new(),
        };
        let finite = [self.price, self.rating]
            .iter()
            .chain(self.original_price.iter())
            .chain(review_ratings.iter())
            .all(|number| number.is_finite());

        if finite {
            Ok(())
        } else {
            Err(RepositoryError::persistence(format!(
                "product {} has a non-finite number",
                self.id
            )))
        }
    }

    pub fn into_domain(self) -> Product {
        Product {
            id: self.id,
            name: self.name,
            brand: self.brand,
            category: self.category,
            price: self.price,
            original_price: self.original_price,
            image: self.image,
            rating: self.rating,
            reviews: match self.reviews {
                ReviewsEntity::Count(count) => Reviews::Count(count),
                ReviewsEntity::Entries(entries) => Reviews::Entries(
                    entries
                        .into_iter()
                        .map(|review| Review {
                            author: review.author,
                            rating: review.rating,
                            comment: review.comment,
                            date: review.date,
                        })
                        .collect(),
                ),
            },
            in_stock: self.in_stock,
            features: self.features,
            description: self.description,
            specifications: self.specifications,
        }
    }
}

// bookstore_app/src/services/catalog.rs

//! Fixed catalog standing in for the remote catalog service.

use bookstore_orders::BookId;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogBook {
  pub id: BookId,
  pub title: String,
  pub author: String,
  pub price: f64,
}

const CATALOG_JSON: &str = r#"[
  {"id": 11, "title": "Algebra I", "author": "M. Noether", "price": 42.00},
  {"id": 12, "title": "World History", "author": "H. Zinn", "price": 35.50},
  {"id": 13, "title": "Biology", "author": "C. Darwin", "price": 28.75},
  {"id": 14, "title": "Poetry Reader", "author": "E. Dickinson", "price": 12.99}
]"#;

pub fn load_catalog() -> anyhow::Result<Vec<CatalogBook>> {
  Ok(serde_json::from_str(CATALOG_JSON)?)
}

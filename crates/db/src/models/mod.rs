//! Row models and input DTOs, one module per table.
//!
//! Row structs derive [`sqlx::FromRow`] and serialize straight into API
//! responses. `*Input` structs carry every mutable column: updates replace
//! the whole row, they never merge.

pub mod about;
pub mod article;
pub mod category_article;
pub mod category_faq;
pub mod contact;
pub mod faq;
pub mod page;
pub mod portfolio;
pub mod product;
pub mod service;
pub mod user;

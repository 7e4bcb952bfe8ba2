//! One repository per table. Every method issues a single parameterized
//! statement against the pool it is handed.

mod about_repo;
mod article_repo;
mod category_article_repo;
mod category_faq_repo;
mod contact_repo;
mod faq_repo;
mod page_repo;
mod portfolio_repo;
mod product_repo;
mod service_repo;
mod user_repo;

pub use about_repo::AboutRepo;
pub use article_repo::ArticleRepo;
pub use category_article_repo::CategoryArticleRepo;
pub use category_faq_repo::CategoryFaqRepo;
pub use contact_repo::ContactRepo;
pub use faq_repo::FaqRepo;
pub use page_repo::PageRepo;
pub use portfolio_repo::PortfolioRepo;
pub use product_repo::ProductRepo;
pub use service_repo::ServiceRepo;
pub use user_repo::UserRepo;

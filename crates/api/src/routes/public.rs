//! Unauthenticated routes mounted at `/api`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{
    about, article, auth, category_article, category_faq, contact, faq, page, portfolio,
    product, service, user,
};
use crate::state::AppState;

/// ```text
/// POST   /login                      -> login
/// POST   /create-user                -> create_user
///
/// GET    /pages                      -> list_pages
/// GET    /abouts                     -> get_about
/// GET    /services                   -> list_services
/// GET    /portfolios                 -> list_portfolios
/// GET    /products                   -> list_products
/// GET    /contacts                   -> get_contact
/// GET    /users                      -> list_public_users
/// GET    /category-articles          -> list_category_articles
/// GET    /articles                   -> list_articles
/// GET    /category-faqs              -> list_category_faqs
/// GET    /faqs                       -> list_faqs
/// GET    /articles/{slug}/views      -> increment_views
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/create-user", post(user::create_user))
        .route("/pages", get(page::list_pages))
        .route("/abouts", get(about::get_about))
        .route("/services", get(service::list_services))
        .route("/portfolios", get(portfolio::list_portfolios))
        .route("/products", get(product::list_products))
        .route("/contacts", get(contact::get_contact))
        .route("/users", get(user::list_public_users))
        .route(
            "/category-articles",
            get(category_article::list_category_articles),
        )
        .route("/articles", get(article::list_articles))
        .route("/category-faqs", get(category_faq::list_category_faqs))
        .route("/faqs", get(faq::list_faqs))
        .route("/articles/{slug}/views", get(article::increment_views))
}

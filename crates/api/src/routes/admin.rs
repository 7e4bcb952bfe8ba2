//! Bearer-token protected routes mounted at `/api/admin`.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::{
    about, article, category_article, category_faq, contact, faq, page, portfolio, product,
    service, user,
};
use crate::state::AppState;

/// ```text
/// GET, POST     /pages                  PUT, DELETE /pages/{id}
/// GET, POST     /abouts                 PUT, DELETE /abouts/{id}
/// GET, POST     /services               PUT, DELETE /services/{id}
/// GET, POST     /portfolios             PUT, DELETE /portfolios/{id}
/// GET, POST     /products               PUT, DELETE /products/{id}
/// GET, POST     /contacts               PUT, DELETE /contacts/{id}
/// GET, POST     /users                  PUT, DELETE /users/{id}
/// GET           /users/me
/// GET, POST     /category-faqs          PUT, DELETE /category-faqs/{id}
/// GET, POST     /faqs                   PUT, DELETE /faqs/{id}
/// GET, POST     /category-articles      PUT, DELETE /category-articles/{id}
/// GET, POST     /articles               PUT, DELETE /articles/{id}
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/pages", get(page::list_pages).post(page::create_page))
        .route(
            "/pages/{id}",
            put(page::update_page).delete(page::delete_page),
        )
        .route("/abouts", get(about::get_about).post(about::create_about))
        .route(
            "/abouts/{id}",
            put(about::update_about).delete(about::delete_about),
        )
        .route(
            "/services",
            get(service::list_services).post(service::create_service),
        )
        .route(
            "/services/{id}",
            put(service::update_service).delete(service::delete_service),
        )
        .route(
            "/portfolios",
            get(portfolio::list_portfolios).post(portfolio::create_portfolio),
        )
        .route(
            "/portfolios/{id}",
            put(portfolio::update_portfolio).delete(portfolio::delete_portfolio),
        )
        .route(
            "/products",
            get(product::list_products).post(product::create_product),
        )
        .route(
            "/products/{id}",
            put(product::update_product).delete(product::delete_product),
        )
        .route(
            "/contacts",
            get(contact::get_contact).post(contact::create_contact),
        )
        .route(
            "/contacts/{id}",
            put(contact::update_contact).delete(contact::delete_contact),
        )
        .route("/users", get(user::list_users).post(user::create_user))
        .route("/users/me", get(user::get_me))
        .route(
            "/users/{id}",
            put(user::update_user).delete(user::delete_user),
        )
        .route(
            "/category-faqs",
            get(category_faq::list_category_faqs).post(category_faq::create_category_faq),
        )
        .route(
            "/category-faqs/{id}",
            put(category_faq::update_category_faq).delete(category_faq::delete_category_faq),
        )
        .route("/faqs", get(faq::list_faqs).post(faq::create_faq))
        .route("/faqs/{id}", put(faq::update_faq).delete(faq::delete_faq))
        .route(
            "/category-articles",
            get(category_article::list_category_articles)
                .post(category_article::create_category_article),
        )
        .route(
            "/category-articles/{id}",
            put(category_article::update_category_article)
                .delete(category_article::delete_category_article),
        )
        .route(
            "/articles",
            get(article::list_articles).post(article::create_article),
        )
        .route(
            "/articles/{id}",
            put(article::update_article).delete(article::delete_article),
        )
}

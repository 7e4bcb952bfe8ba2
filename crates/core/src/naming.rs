//! URL slug derivation for titled content (pages, articles, services).

/// Derive the URL slug stored alongside a title.
///
/// Slugs are regenerated from the title on every create and update, so a
/// renamed page also moves to a new URL.
///
/// ```
/// use codetech_core::naming::title_slug;
///
/// assert_eq!(title_slug("Company Profile"), "company-profile");
/// ```
pub fn title_slug(title: &str) -> String {
    slug::slugify(title)
}

//! System pages.

use askama::Template;

/// Console landing page.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub title: &'static str,
}

/// Placeholder page for the data constructor, which is still being built.
#[derive(Template)]
#[template(path = "data_constructor.html")]
pub struct DataConstructorTemplate {
    pub title: &'static str,
    pub notice: &'static str,
}

/// Render the landing page.
pub async fn index_page() -> IndexTemplate {
    IndexTemplate { title: "Console" }
}

/// Render the data constructor placeholder.
pub async fn data_constructor_page() -> DataConstructorTemplate {
    DataConstructorTemplate {
        title: "Data Constructor",
        notice: "In development...",
    }
}

use serde::Deserialize;

/// Catalog entry as served by the backend.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Product {
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Unit price in euro cents. Money never leaves integer space.
    pub price_cents: u32,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub sizes: Vec<String>,
    #[serde(default)]
    pub colors: Vec<String>,
}

impl Product {
    /// Primary image, if the backend provided any.
    pub fn first_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// First listed size, falling back to "M".
    pub fn default_size(&self) -> String {
        self.sizes.first().cloned().unwrap_or_else(|| String::from("M"))
    }

    /// First listed color, falling back to "Forest Green".
    pub fn default_color(&self) -> String {
        self.colors
            .first()
            .cloned()
            .unwrap_or_else(|| String::from("Forest Green"))
    }
}

/// Render a cent amount as `"12.34 €"`.
pub fn format_price(cents: u64) -> String {
    format!("{}.{:02} €", cents / 100, cents % 100)
}

use crate::widgets::calculator::CostRates;

/// Postal address published in the organization's structured data.
#[derive(Debug, Clone, PartialEq)]
pub struct PostalAddress {
    pub street: String,
    pub locality: String,
    pub region: String,
    pub postal_code: String,
    pub country: String,
}

/// Site-wide settings. Defaults describe the production site; the front-end
/// and tests override individual fields with the `with_*` methods.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub site_name: String,
    /// Scheme + host, no trailing slash.
    pub base_url: String,
    /// Appended to the site name when a page has no title of its own.
    pub tagline: String,
    pub default_description: String,
    pub default_image: String,
    pub logo_url: String,
    pub organization_description: String,
    pub telephone: String,
    pub address: PostalAddress,
    pub same_as: Vec<String>,
    pub rates: CostRates,
    /// Initial desktop window size for the front-end.
    pub window_size: [f32; 2],
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_name: "Verrazano Roofing".into(),
            base_url: "https://verrazanoroofing.com".into(),
            tagline: "Premium Commercial Roofing Solutions".into(),
            default_description: "Verrazano Roofing provides elite commercial roofing services, specializing in premium performance coatings and comprehensive structural repairs in Brooklyn, NY.".into(),
            default_image: "https://picsum.photos/seed/verrazano-og/1200/630".into(),
            logo_url: "https://verrazanoroofing.com/logo.png".into(),
            organization_description: "Elite commercial roofing services specializing in premium performance coatings and comprehensive structural repairs.".into(),
            telephone: "+1-718-555-0123".into(),
            address: PostalAddress {
                street: "1234 Bay Ridge Ave".into(),
                locality: "Brooklyn".into(),
                region: "NY".into(),
                postal_code: "11209".into(),
                country: "US".into(),
            },
            same_as: vec![
                "https://www.instagram.com/verrazanoroofing".into(),
                "https://www.linkedin.com/company/verrazanoroofing".into(),
                "https://twitter.com/verrazanoroofing".into(),
            ],
            rates: CostRates::default(),
            window_size: [1280.0, 860.0],
        }
    }
}

impl SiteConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let mut url = base_url.into();
        while url.ends_with('/') {
            url.pop();
        }
        self.base_url = url;
        self
    }

    pub fn with_site_name(mut self, name: impl Into<String>) -> Self {
        self.site_name = name.into();
        self
    }

    pub fn with_default_image(mut self, image: impl Into<String>) -> Self {
        self.default_image = image.into();
        self
    }

    /// Override the calculator's per-square-foot rates.
    pub fn with_rates(mut self, rates: CostRates) -> Self {
        self.rates = rates;
        self
    }

    pub fn with_window_size(mut self, width: f32, height: f32) -> Self {
        self.window_size = [width, height];
        self
    }

    /// `"Verrazano Roofing | Premium Commercial Roofing Solutions"`
    pub fn default_title(&self) -> String {
        format!("{} | {}", self.site_name, self.tagline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_overrides() {
        let cfg = SiteConfig::default()
            .with_base_url("https://staging.example.com/")
            .with_rates(CostRates { removal: 10.0, coating: 5.0 })
            .with_window_size(800.0, 600.0);
        assert_eq!(cfg.base_url, "https://staging.example.com");
        assert_eq!(cfg.rates.removal, 10.0);
        assert_eq!(cfg.window_size, [800.0, 600.0]);
        assert_eq!(cfg.site_name, "Verrazano Roofing");
    }

    #[test]
    fn default_title() {
        assert_eq!(
            SiteConfig::default().default_title(),
            "Verrazano Roofing | Premium Commercial Roofing Solutions"
        );
    }
}

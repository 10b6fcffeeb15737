/// Endpoints and asset locations for one deployment of the site.
///
/// Built once at mount time and passed down explicitly; nothing reads these
/// from ambient globals.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    /// Listings feed: GET returning a JSON array of listings.
    pub listings_url: String,
    /// Leads endpoint: POST of one inquiry as a JSON object.
    pub leads_url: String,
    /// Prefix joined to image paths that do not carry a URL scheme.
    pub image_base_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            listings_url: "https://script.google.com/macros/s/AKfycbyqtr-5Caf5O_ZyckSeqEbc5LuP9041SD7rfVzNkJK4R2vn8JeDASFQdiUTPmoCa67V/exec".into(),
            leads_url: "https://script.google.com/macros/s/AKfycbyMdbabyBxJg3Mm-Hbc-zPFio_hgw-Bu_ZV--iLaXO1VVlnTTnMSFzdlRFpicjzIKAe0Q/exec".into(),
            image_base_url: "https://albadri-demo.s3.us-east-1.amazonaws.com/".into(),
        }
    }
}

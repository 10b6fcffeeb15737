use crate::slug::slugify;
use serde::{Deserialize, Deserializer, Serialize};

/// Shown when neither the flat nor the nested agent field carries a name.
pub const DEFAULT_AGENT_NAME: &str = "Al Badri Agent";

/// How many featured listings the homepage highlights.
pub const FEATURED_LIMIT: usize = 4;

/// Nested agent shape used by some feed rows.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentInfo {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

/// One property record from the remote feed.
///
/// The feed is spreadsheet-backed and loose about shapes: ids arrive as
/// strings or numbers, the agent is flat or nested, and media may be an
/// `images` array or a legacy singular `image`/`thumbnail`. Deserialization
/// tolerates all of it; missing optional fields degrade at render time
/// instead of failing the parse.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    #[serde(default, deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub category: String,
    /// Transaction type, `"sale"` or `"rent"`.
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub currency: String,
    #[serde(default)]
    pub beds: u32,
    #[serde(default)]
    pub baths: u32,
    #[serde(default)]
    pub area_sqm: f64,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub long_desc: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub agent_name: Option<String>,
    #[serde(default)]
    pub agent_phone: Option<String>,
    #[serde(default)]
    pub agent: Option<AgentInfo>,
    #[serde(default)]
    pub featured: bool,
}

/// Resolved agent contact after the flat-vs-nested fallback chain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AgentContact {
    pub name: String,
    /// `None` disables the call action.
    pub phone: Option<String>,
}

impl Listing {
    /// Slug used in card links: the stored one when present, else derived
    /// from the title.
    pub fn link_slug(&self) -> String {
        match self.slug.as_deref() {
            Some(s) if !s.is_empty() => s.to_string(),
            _ => slugify(&self.title),
        }
    }

    pub fn status_label(&self) -> &'static str {
        if self.kind == "sale" {
            "For Sale"
        } else {
            "For Rent"
        }
    }

    /// Ordered image sequence for the carousel: the `images` array when
    /// non-empty, else the legacy singular fields.
    pub fn gallery(&self) -> Vec<String> {
        if !self.images.is_empty() {
            return self.images.clone();
        }
        if let Some(img) = non_empty(self.image.as_deref()) {
            return vec![img.to_string()];
        }
        if let Some(thumb) = non_empty(self.thumbnail.as_deref()) {
            return vec![thumb.to_string()];
        }
        Vec::new()
    }

    /// Card cover: legacy singular fields first, else the gallery head.
    pub fn cover_image(&self) -> Option<String> {
        non_empty(self.image.as_deref())
            .or_else(|| non_empty(self.thumbnail.as_deref()))
            .map(str::to_string)
            .or_else(|| self.images.first().cloned())
    }

    /// Long description with the `long_desc` → `description` fallback chain.
    pub fn description_text(&self) -> &str {
        non_empty(self.long_desc.as_deref())
            .or_else(|| non_empty(self.description.as_deref()))
            .unwrap_or("")
    }

    pub fn agent_contact(&self) -> AgentContact {
        let nested = self.agent.as_ref();
        let name = non_empty(self.agent_name.as_deref())
            .or_else(|| non_empty(nested.and_then(|a| a.name.as_deref())))
            .unwrap_or(DEFAULT_AGENT_NAME)
            .to_string();
        let phone = non_empty(self.agent_phone.as_deref())
            .or_else(|| non_empty(nested.and_then(|a| a.phone.as_deref())))
            .map(str::to_string);
        AgentContact { name, phone }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

/// Resolve the detail-page target: exact id match first, then the first
/// listing whose derived slug matches, in feed order.
pub fn find_listing<'a>(
    feed: &'a [Listing],
    id: Option<&str>,
    slug: Option<&str>,
) -> Option<&'a Listing> {
    if let Some(id) = id {
        if let Some(found) = feed.iter().find(|l| l.id == id) {
            return Some(found);
        }
    }
    if let Some(slug) = slug {
        return feed.iter().find(|l| slugify(&l.title) == slug);
    }
    None
}

/// Homepage highlight set: flagged listings, first four in feed order.
pub fn featured(feed: &[Listing]) -> Vec<&Listing> {
    feed.iter().filter(|l| l.featured).take(FEATURED_LIMIT).collect()
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Str(String),
        Num(f64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Str(s) => s,
        Raw::Num(n) if n.fract() == 0.0 => (n as i64).to_string(),
        Raw::Num(n) => n.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(title: &str) -> Listing {
        Listing {
            id: "1".into(),
            title: title.into(),
            ..Listing::default()
        }
    }

    #[test]
    fn parses_numeric_and_string_ids_alike() {
        let feed: Vec<Listing> = serde_json::from_str(
            r#"[{"id": 7, "title": "A"}, {"id": "B-2", "title": "B"}]"#,
        )
        .expect("parse feed");
        assert_eq!(feed[0].id, "7");
        assert_eq!(feed[1].id, "B-2");
    }

    #[test]
    fn tolerates_sparse_rows() {
        let l: Listing =
            serde_json::from_str(r#"{"id": "1", "title": "Bare"}"#).expect("parse row");
        assert_eq!(l.beds, 0);
        assert_eq!(l.price, 0.0);
        assert!(l.gallery().is_empty());
        assert!(!l.featured);
        assert_eq!(l.description_text(), "");
    }

    #[test]
    fn gallery_prefers_images_then_legacy_fields() {
        let mut l = listing("A");
        l.thumbnail = Some("thumb.jpg".into());
        assert_eq!(l.gallery(), vec!["thumb.jpg".to_string()]);

        l.image = Some("cover.jpg".into());
        assert_eq!(l.gallery(), vec!["cover.jpg".to_string()]);

        l.images = vec!["a.jpg".into(), "b.jpg".into()];
        assert_eq!(l.gallery(), vec!["a.jpg".to_string(), "b.jpg".to_string()]);
    }

    #[test]
    fn cover_image_falls_back_to_gallery_head() {
        let mut l = listing("A");
        assert_eq!(l.cover_image(), None);

        l.images = vec!["a.jpg".into()];
        assert_eq!(l.cover_image(), Some("a.jpg".to_string()));

        l.image = Some("cover.jpg".into());
        assert_eq!(l.cover_image(), Some("cover.jpg".to_string()));
    }

    #[test]
    fn description_prefers_long_desc() {
        let mut l = listing("A");
        l.description = Some("short".into());
        assert_eq!(l.description_text(), "short");
        l.long_desc = Some("long".into());
        assert_eq!(l.description_text(), "long");
    }

    #[test]
    fn agent_flat_fields_win_over_nested() {
        let mut l = listing("A");
        l.agent = Some(AgentInfo {
            name: Some("Nested".into()),
            phone: Some("+100".into()),
        });
        l.agent_name = Some("Flat".into());
        let contact = l.agent_contact();
        assert_eq!(contact.name, "Flat");
        assert_eq!(contact.phone, Some("+100".to_string()));
    }

    #[test]
    fn agent_defaults_when_everything_is_absent() {
        let contact = listing("A").agent_contact();
        assert_eq!(contact.name, DEFAULT_AGENT_NAME);
        assert_eq!(contact.phone, None);
    }

    #[test]
    fn empty_phone_disables_the_call_action() {
        let mut l = listing("A");
        l.agent_phone = Some(String::new());
        assert_eq!(l.agent_contact().phone, None);
    }

    #[test]
    fn status_label_is_exact_on_sale() {
        let mut l = listing("A");
        l.kind = "sale".into();
        assert_eq!(l.status_label(), "For Sale");
        l.kind = "rent".into();
        assert_eq!(l.status_label(), "For Rent");
        l.kind = "Sale".into();
        assert_eq!(l.status_label(), "For Rent");
    }

    #[test]
    fn link_slug_prefers_the_stored_slug() {
        let mut l = listing("Sea View Villa");
        assert_eq!(l.link_slug(), "sea-view-villa");
        l.slug = Some("custom-slug".into());
        assert_eq!(l.link_slug(), "custom-slug");
    }

    #[test]
    fn find_by_id_wins_over_slug() {
        let mut a = listing("Sea View Villa");
        a.id = "1".into();
        let mut b = listing("Sea View Villa");
        b.id = "2".into();
        let feed = vec![a, b];

        let found = find_listing(&feed, Some("2"), Some("sea-view-villa")).expect("found");
        assert_eq!(found.id, "2");
    }

    #[test]
    fn falls_back_to_derived_slug_in_feed_order() {
        let mut a = listing("Sea View Villa");
        a.id = "1".into();
        // Stored slug is ignored by the fallback lookup; only the derived
        // slug of the title counts.
        a.slug = Some("something-else".into());
        let feed = vec![a];

        let found = find_listing(&feed, None, Some("sea-view-villa")).expect("found");
        assert_eq!(found.id, "1");
        assert!(find_listing(&feed, None, Some("something-else")).is_none());
    }

    #[test]
    fn missing_id_and_slug_find_nothing() {
        let feed = vec![listing("A")];
        assert!(find_listing(&feed, None, None).is_none());
        assert!(find_listing(&feed, Some("nope"), None).is_none());
    }

    #[test]
    fn featured_caps_at_four_in_feed_order() {
        let mut feed = Vec::new();
        for i in 0..6 {
            let mut l = listing(&format!("L{i}"));
            l.id = i.to_string();
            l.featured = i != 1;
            feed.push(l);
        }
        let picks = featured(&feed);
        let ids: Vec<&str> = picks.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, ["0", "2", "3", "4"]);
    }
}

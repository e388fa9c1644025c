//! Site configuration content (site-config.json)
//!
//! Identity, contact details, navigation and the static copy of each page.
//! The source document is kept as loaded and is what a `SiteConfig`
//! serializes back to; the typed sections are a read view over it in which
//! missing or `null` fields take their default.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Accept either a string or a number, keeping the textual form
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    use std::fmt;

    struct StringOrNumber;

    impl<'de> Visitor<'de> for StringOrNumber {
        type Value = String;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or a number")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(value)
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(String::new())
        }
    }

    deserializer.deserialize_any(StringOrNumber)
}

/// The whole site configuration document
///
/// The public sections are derived from the source document, which is what
/// gets serialized; build a changed configuration with [`SiteConfig::from_value`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "Value")]
pub struct SiteConfig {
    pub site: SiteIdentity,
    pub contact: ContactInfo,
    pub navigation: Navigation,
    pub homepage: Homepage,
    pub footer: Footer,

    /// The document as loaded
    source: Value,
}

/// Typed sections read out of the source document
#[derive(Default, Deserialize)]
#[serde(default)]
struct Sections {
    site: SiteIdentity,
    contact: ContactInfo,
    navigation: Navigation,
    homepage: Homepage,
    footer: Footer,
}

impl SiteConfig {
    /// Build the typed view over a configuration document
    pub fn from_value(source: Value) -> Result<Self, serde_json::Error> {
        let mut view = source.clone();
        strip_nulls(&mut view);
        let sections: Sections = serde_json::from_value(view)?;

        Ok(Self {
            site: sections.site,
            contact: sections.contact,
            navigation: sections.navigation,
            homepage: sections.homepage,
            footer: sections.footer,
            source,
        })
    }

    /// The configuration document exactly as loaded
    pub fn as_value(&self) -> &Value {
        &self.source
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        let sections = Sections::default();
        Self {
            site: sections.site,
            contact: sections.contact,
            navigation: sections.navigation,
            homepage: sections.homepage,
            footer: sections.footer,
            source: Value::Object(Map::new()),
        }
    }
}

impl TryFrom<Value> for SiteConfig {
    type Error = serde_json::Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

impl From<SiteConfig> for Value {
    fn from(config: SiteConfig) -> Self {
        config.source
    }
}

/// Drop `null` members so the view falls back to field defaults
fn strip_nulls(value: &mut Value) {
    match value {
        Value::Object(map) => {
            map.retain(|_, v| !v.is_null());
            map.values_mut().for_each(strip_nulls);
        }
        Value::Array(items) => {
            items.retain(|v| !v.is_null());
            items.iter_mut().for_each(strip_nulls);
        }
        _ => {}
    }
}

/// Association identity
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteIdentity {
    pub name: String,
    pub tagline: String,
    pub description: String,
    pub logo: String,
    pub city: String,
    pub postal_code: String,
    pub department: String,
    #[serde(deserialize_with = "string_or_number")]
    pub founded_year: String,
}

/// Contact details and contact page copy
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    pub phone_formatted: String,
    pub address: String,
    pub google_maps_url: String,
    pub google_maps_embed: String,
    pub annual_fee: String,
    pub page_title: String,
    pub page_subtitle: String,
    pub form_title: String,
    pub contact_info_title: String,
    pub success_title: String,
    pub success_message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Navigation {
    pub links: Vec<NavLink>,
    pub join_button: NavLink,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavLink {
    pub text: String,
    pub href: String,
}

/// A call-to-action button (`text` + `link`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Button {
    pub text: String,
    pub link: String,
}

/// Homepage sections, top to bottom
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Homepage {
    pub hero: Hero,
    pub stats: Vec<Stat>,
    pub how_it_works: HowItWorks,
    pub news: NewsSection,
    pub events: SectionHeading,
    pub cta: CallToAction,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Hero {
    pub title: String,
    pub tagline: String,
    pub description: String,
    pub background_image: String,
    pub primary_button: Button,
    pub secondary_button: Button,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stat {
    #[serde(deserialize_with = "string_or_number")]
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HowItWorks {
    pub title: String,
    pub subtitle: String,
    pub steps: Vec<Step>,
}

/// A "how it works" card; `icon` names an entry of the icon registry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Step {
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NewsSection {
    pub title: String,
    pub subtitle: String,
    pub see_all_button: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionHeading {
    pub title: String,
    pub subtitle: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CallToAction {
    pub title: String,
    pub description: String,
    pub primary_button: Button,
    pub secondary_button: Button,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Footer {
    pub description: String,
    pub quick_links_title: String,
    pub contact_title: String,
    pub copyright: String,
    pub legal: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert!(config.site.name.is_empty());
        assert!(config.navigation.links.is_empty());
        assert!(config.homepage.how_it_works.steps.is_empty());
    }

    #[test]
    fn test_parse_config() {
        let json = r#"{
            "site": {"name": "Majosol", "city": "Meyzieu", "foundedYear": 2012},
            "contact": {"email": "contact@example.org", "phoneFormatted": "04 00 00 00 00"},
            "navigation": {
                "links": [{"text": "Accueil", "href": "/"}, {"text": "Actualités", "href": "/news"}],
                "joinButton": {"text": "Adhérer", "href": "/contact"}
            },
            "homepage": {
                "hero": {"title": "Bienvenue", "primaryButton": {"text": "Nous rejoindre", "link": "/contact"}},
                "stats": [{"value": 120, "label": "adhérents"}, {"value": "10 ans", "label": "d'entraide"}],
                "howItWorks": {"steps": [{"icon": "Users", "title": "Adhérez"}]}
            },
            "footer": {"copyright": "© Majosol"}
        }"#;
        let config: SiteConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.site.name, "Majosol");
        assert_eq!(config.site.founded_year, "2012");
        assert_eq!(config.contact.phone_formatted, "04 00 00 00 00");
        assert_eq!(config.navigation.links.len(), 2);
        assert_eq!(config.navigation.join_button.href, "/contact");
        assert_eq!(config.homepage.hero.primary_button.link, "/contact");
        assert_eq!(config.homepage.stats[0].value, "120");
        assert_eq!(config.homepage.stats[1].value, "10 ans");
        assert_eq!(config.homepage.how_it_works.steps[0].icon, "Users");
        assert_eq!(config.footer.copyright, "© Majosol");
    }

    #[test]
    fn test_source_document_round_trips() {
        let source = serde_json::json!({
            "site": {"name": "Majosol", "foundedYear": 2012, "motto": "Entraide"},
            "navigation": {"links": [{"text": "Accueil", "href": "/", "external": false}]},
            "homepage": {
                "hero": {"title": "T", "badge": "Nouveau"},
                "stats": [{"value": 120, "label": "adhérents", "suffix": "+"}],
                "howItWorks": {"steps": [{"icon": "Users", "color": "blue"}]}
            },
            "footer": {"social": {"fb": "x"}},
            "partners": ["Mairie"]
        });
        let config: SiteConfig = serde_json::from_value(source.clone()).unwrap();
        assert_eq!(config.site.founded_year, "2012");
        assert_eq!(config.homepage.stats[0].value, "120");
        assert_eq!(serde_json::to_value(&config).unwrap(), source);
        assert_eq!(config.as_value(), &source);

        let text = serde_json::to_string(&source).unwrap();
        let config: SiteConfig = serde_json::from_str(&text).unwrap();
        assert_eq!(serde_json::to_value(&config).unwrap(), source);
    }

    #[test]
    fn test_null_fields_load_as_defaults() {
        let source = serde_json::json!({
            "site": {"name": "Majosol", "logo": null},
            "navigation": {"links": [null, {"text": "Accueil", "href": null}]},
            "footer": null
        });
        let config = SiteConfig::from_value(source.clone()).unwrap();
        assert_eq!(config.site.logo, "");
        assert_eq!(config.navigation.links.len(), 1);
        assert_eq!(config.navigation.links[0].href, "");
        assert_eq!(config.footer, Footer::default());
        assert_eq!(serde_json::to_value(&config).unwrap(), source);
    }

    #[test]
    fn test_default_serializes_empty_object() {
        let value = serde_json::to_value(SiteConfig::default()).unwrap();
        assert_eq!(value, serde_json::json!({}));
    }
}

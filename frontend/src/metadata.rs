//! Document head: title, favicon, fonts, search and social preview tags.

use serde::Serialize;
use web_sys::{Document, Element, HtmlHeadElement};

use crate::config;
use crate::content::{PROFILE, SOCIAL_LINKS, WORK_HISTORY};
use crate::dom::{self, DomError};

const FONT_ORIGINS: &[(&str, bool)] = &[
    ("https://fonts.googleapis.com", false),
    ("https://fonts.gstatic.com", true),
];

const FONT_STYLESHEET: &str = "https://fonts.googleapis.com/css2?family=Bree+Serif&family=Lato:wght@300;400;700&family=Poppins:wght@400;500;600;700&family=Press+Start+2P&family=Raleway:wght@100..900&display=swap";

pub struct PreviewImage {
    pub path: &'static str,
    pub width: u32,
    pub height: u32,
    pub alt: &'static str,
}

pub struct PageMetadata {
    pub title: &'static str,
    pub description: &'static str,
    pub site_name: &'static str,
    pub author: &'static str,
    pub keywords: &'static [&'static str],
    pub robots: &'static str,
    pub locale: &'static str,
    pub favicon: &'static str,
    pub preview: PreviewImage,
}

pub const SITE: PageMetadata = PageMetadata {
    title: "Sunil Bogati",
    description: "Sunil Bogati, visual editor at Bagmati Television. Stories, photos and the journey from Chitwan to Kathmandu.",
    site_name: "Sunil Bogati",
    author: "Sunil Bogati",
    keywords: &["Sunil Bogati", "visual editor", "video editing", "Bagmati Television", "Nepal", "portfolio"],
    robots: "index, follow",
    locale: "en_US",
    favicon: "/gallery/img2.jpeg",
    preview: PreviewImage {
        path: "/gallery/img9.jpeg",
        width: 1200,
        height: 630,
        alt: "Sunil Bogati",
    },
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MetaKey {
    /// `<meta name=..>`
    Name(&'static str),
    /// `<meta property=..>`, used by Open Graph.
    Property(&'static str),
}

impl MetaKey {
    fn attribute(self) -> (&'static str, &'static str) {
        match self {
            MetaKey::Name(key) => ("name", key),
            MetaKey::Property(key) => ("property", key),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MetaTag {
    pub key: MetaKey,
    pub content: String,
}

fn tag(key: MetaKey, content: impl Into<String>) -> MetaTag {
    MetaTag { key, content: content.into() }
}

#[derive(Serialize)]
struct Organization {
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PersonSchema {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'static str,
    url: String,
    image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    job_title: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    works_for: Option<Organization>,
    same_as: Vec<&'static str>,
}

impl PageMetadata {
    pub fn meta_tags(&self) -> Vec<MetaTag> {
        let url = config::absolute_url("/");
        let image = config::absolute_url(self.preview.path);
        vec![
            tag(MetaKey::Name("description"), self.description),
            tag(MetaKey::Name("robots"), self.robots),
            tag(MetaKey::Name("author"), self.author),
            tag(MetaKey::Name("keywords"), self.keywords.join(", ")),
            tag(MetaKey::Property("og:title"), self.title),
            tag(MetaKey::Property("og:description"), self.description),
            tag(MetaKey::Property("og:url"), url),
            tag(MetaKey::Property("og:site_name"), self.site_name),
            tag(MetaKey::Property("og:image"), image.clone()),
            tag(MetaKey::Property("og:image:width"), self.preview.width.to_string()),
            tag(MetaKey::Property("og:image:height"), self.preview.height.to_string()),
            tag(MetaKey::Property("og:image:alt"), self.preview.alt),
            tag(MetaKey::Property("og:locale"), self.locale),
            tag(MetaKey::Property("og:type"), "website"),
            tag(MetaKey::Name("twitter:card"), "summary_large_image"),
            tag(MetaKey::Name("twitter:title"), self.title),
            tag(MetaKey::Name("twitter:description"), self.description),
            tag(MetaKey::Name("twitter:image"), image),
        ]
    }

    /// schema.org `Person` record for search engines.
    pub fn structured_data(&self) -> Result<String, DomError> {
        let current_job = WORK_HISTORY.first();
        let person = PersonSchema {
            context: "https://schema.org",
            kind: "Person",
            name: PROFILE.name,
            url: config::absolute_url("/"),
            image: config::absolute_url(PROFILE.portrait),
            job_title: current_job.map(|job| job.title),
            works_for: current_job.map(|job| Organization {
                kind: "Organization",
                name: job.organization,
            }),
            same_as: SOCIAL_LINKS.iter().map(|link| link.url).collect(),
        };
        Ok(serde_json::to_string(&person)?)
    }

    /// Writes everything into `<head>`, replacing tags with the same key.
    pub fn install(&self) -> Result<(), DomError> {
        let document = dom::document()?;
        let head = dom::head()?;

        document.set_title(self.title);

        for meta in self.meta_tags() {
            let (attribute, key) = meta.key.attribute();
            let element = upsert(&document, &head, "meta", &format!("meta[{}=\"{}\"]", attribute, key))?;
            element.set_attribute(attribute, key)?;
            element.set_attribute("content", &meta.content)?;
        }

        let icon = upsert(&document, &head, "link", "link[rel=\"icon\"]")?;
        icon.set_attribute("rel", "icon")?;
        icon.set_attribute("href", self.favicon)?;

        for (origin, anonymous) in FONT_ORIGINS {
            let link = upsert(&document, &head, "link", &format!("link[rel=\"preconnect\"][href=\"{}\"]", origin))?;
            link.set_attribute("rel", "preconnect")?;
            link.set_attribute("href", origin)?;
            if *anonymous {
                link.set_attribute("crossorigin", "anonymous")?;
            }
        }
        let fonts = upsert(&document, &head, "link", &format!("link[rel=\"stylesheet\"][href=\"{}\"]", FONT_STYLESHEET))?;
        fonts.set_attribute("rel", "stylesheet")?;
        fonts.set_attribute("href", FONT_STYLESHEET)?;
        fonts.set_attribute("crossorigin", "anonymous")?;

        let script = upsert(&document, &head, "script", "script[type=\"application/ld+json\"]")?;
        script.set_attribute("type", "application/ld+json")?;
        script.set_text_content(Some(&self.structured_data()?));

        Ok(())
    }
}

/// Finds the element matching `selector` or appends a fresh `tag` to head.
fn upsert(document: &Document, head: &HtmlHeadElement, tag: &str, selector: &str) -> Result<Element, DomError> {
    if let Some(existing) = head.query_selector(selector)? {
        return Ok(existing);
    }
    let element = document.create_element(tag)?;
    head.append_child(&element)?;
    Ok(element)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content_of(tags: &[MetaTag], key: MetaKey) -> Option<&str> {
        tags.iter().find(|tag| tag.key == key).map(|tag| tag.content.as_str())
    }

    #[test]
    fn crawler_directives() {
        let tags = SITE.meta_tags();
        assert_eq!(content_of(&tags, MetaKey::Name("robots")), Some("index, follow"));
        assert!(content_of(&tags, MetaKey::Name("keywords")).unwrap().contains("Nepal"));
    }

    #[test]
    fn social_preview_uses_absolute_image_url() {
        let tags = SITE.meta_tags();
        let image = content_of(&tags, MetaKey::Property("og:image")).unwrap();
        assert!(image.starts_with(config::site_url()));
        assert!(image.ends_with("/gallery/img9.jpeg"));
        assert_eq!(content_of(&tags, MetaKey::Name("twitter:image")), Some(image));
        assert_eq!(content_of(&tags, MetaKey::Name("twitter:card")), Some("summary_large_image"));
        assert_eq!(content_of(&tags, MetaKey::Property("og:image:width")), Some("1200"));
    }

    #[test]
    fn each_key_appears_once() {
        let tags = SITE.meta_tags();
        for (index, tag) in tags.iter().enumerate() {
            assert!(tags[index + 1..].iter().all(|other| other.key != tag.key), "{:?} repeated", tag.key);
        }
    }

    #[test]
    fn structured_data_describes_a_person() {
        let json: serde_json::Value = serde_json::from_str(&SITE.structured_data().unwrap()).unwrap();
        assert_eq!(json["@type"], "Person");
        assert_eq!(json["name"], "Sunil Bogati");
        assert_eq!(json["jobTitle"], "Junior Visual Editor");
        assert_eq!(json["worksFor"]["name"], "Bagmati Television HD");
        assert_eq!(json["sameAs"].as_array().map(Vec::len), Some(2));
    }
}

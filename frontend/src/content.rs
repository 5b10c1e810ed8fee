//! Fixed page content. Everything here is read-only for the lifetime of the page.

pub mod anchor {
    pub const HOME: &str = "home";
    pub const ABOUT: &str = "about";
    pub const GALLERY: &str = "gallery";
    pub const JOURNEY: &str = "journey";
    pub const CONTACT: &str = "contact";

    #[cfg(test)]
    pub const SECTIONS: &[&str] = &[HOME, ABOUT, GALLERY, JOURNEY, CONTACT];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub anchor: &'static str,
}

impl NavItem {
    pub fn href(&self) -> String {
        format!("#{}", self.anchor)
    }
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "Home", anchor: anchor::HOME },
    NavItem { label: "About", anchor: anchor::ABOUT },
    NavItem { label: "Gallery", anchor: anchor::GALLERY },
    NavItem { label: "Journey", anchor: anchor::JOURNEY },
    NavItem { label: "Contact", anchor: anchor::CONTACT },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PhotoEntry {
    pub path: &'static str,
}

pub const PERSONAL_PHOTOS: &[PhotoEntry] = &[
    PhotoEntry { path: "/gallery/img1.jpeg" },
    PhotoEntry { path: "/gallery/img2.jpeg" },
    PhotoEntry { path: "/gallery/img3.jpeg" },
    PhotoEntry { path: "/gallery/img4.jpeg" },
    PhotoEntry { path: "/gallery/img5.jpeg" },
    PhotoEntry { path: "/gallery/img6.jpeg" },
    PhotoEntry { path: "/gallery/img7.jpeg" },
    PhotoEntry { path: "/gallery/img8.jpeg" },
    PhotoEntry { path: "/gallery/img9.jpeg" },
    PhotoEntry { path: "/gallery/img10.jpeg" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimelineCategory {
    Work,
    Education,
}

impl TimelineCategory {
    pub fn heading(self) -> &'static str {
        match self {
            TimelineCategory::Work => "Work Experience",
            TimelineCategory::Education => "Education",
        }
    }

    /// Modifier class picking the red or sky accent.
    pub fn accent_class(self) -> &'static str {
        match self {
            TimelineCategory::Work => "accent-red",
            TimelineCategory::Education => "accent-sky",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimelineEntry {
    pub title: &'static str,
    pub organization: &'static str,
    pub period: &'static str,
    pub description: &'static str,
}

pub const WORK_HISTORY: &[TimelineEntry] = &[TimelineEntry {
    title: "Junior Visual Editor",
    organization: "Bagmati Television HD",
    period: "Dec 2024 - Present",
    description: "Editing daily news segments and television programs, ensuring high-quality visual content that engages our audience. Working with a talented team to deliver timely and impactful news coverage across Nepal.",
}];

pub const EDUCATION: &[TimelineEntry] = &[TimelineEntry {
    title: "High School (+2)",
    organization: "Kapiya Secondary School",
    period: "Chitwan, Nepal",
    description: "Completed my higher secondary education in my hometown of Chitwan, building the foundation that would later support my journey into visual media and storytelling.",
}];

pub fn timeline(category: TimelineCategory) -> &'static [TimelineEntry] {
    match category {
        TimelineCategory::Work => WORK_HISTORY,
        TimelineCategory::Education => EDUCATION,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Accent {
    Red,
    Sky,
    Neutral,
}

impl Accent {
    pub fn text_class(self) -> &'static str {
        match self {
            Accent::Red => "text-red",
            Accent::Sky => "text-sky",
            Accent::Neutral => "text-dark",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
    pub accent: Accent,
}

pub const HERO_STATS: &[Stat] = &[
    Stat { value: "1+", label: "Years in Media", accent: Accent::Red },
    Stat { value: "Daily", label: "News Editing", accent: Accent::Sky },
    Stat { value: "TV", label: "Broadcasting", accent: Accent::Neutral },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactKind {
    Email,
    Phone,
    Location,
}

impl ContactKind {
    pub fn label(self) -> &'static str {
        match self {
            ContactKind::Email => "Email",
            ContactKind::Phone => "Phone",
            ContactKind::Location => "Location",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactDetail {
    pub kind: ContactKind,
    pub value: &'static str,
}

pub const CONTACT_DETAILS: &[ContactDetail] = &[
    ContactDetail { kind: ContactKind::Email, value: "sunilbogati2080@email.com" },
    ContactDetail { kind: ContactKind::Phone, value: "+977 98XXXXXXXX" },
    ContactDetail { kind: ContactKind::Location, value: "Kathmandu, Nepal" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SocialNetwork {
    Facebook,
    Instagram,
}

impl SocialNetwork {
    pub fn name(self) -> &'static str {
        match self {
            SocialNetwork::Facebook => "Facebook",
            SocialNetwork::Instagram => "Instagram",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub network: SocialNetwork,
    pub url: &'static str,
    pub tagline: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        network: SocialNetwork::Facebook,
        url: "https://www.facebook.com/sunil.bogati.336",
        tagline: "Connect with me",
    },
    SocialLink {
        network: SocialNetwork::Instagram,
        url: "https://www.instagram.com/sunil_bogati_/",
        tagline: "See my photos",
    },
];

pub struct Profile {
    pub name: &'static str,
    pub first_name: &'static str,
    pub intro: &'static str,
    pub story: &'static [&'static str],
    pub origin: &'static str,
    pub portrait: &'static str,
    pub logo: &'static str,
    pub credit_name: &'static str,
    pub credit_url: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Sunil Bogati",
    first_name: "Sunil",
    intro: "Hi, I'm Sunil! With a passion for visual storytelling, I craft engaging content that connects with audiences. Currently bringing news and stories to life at Bagmati Television.",
    story: &[
        "Born and raised in the beautiful city of Chitwan, Nepal, I've always been drawn to the art of storytelling. My journey led me to Kathmandu, where I now work as a Visual Editor at Bagmati Television, bringing daily news and programs to life for viewers across Nepal.",
        "Every day, I have the privilege of shaping how stories are told, ensuring that each piece of content resonates with our audience. When I'm not editing, you'll find me exploring new places, capturing moments, and always learning something new.",
    ],
    origin: "From Chitwan, Working in Kathmandu",
    portrait: "/gallery/img9.jpeg",
    logo: "/logo.png",
    credit_name: "sudeepbogati",
    credit_url: "https://sudipbogati.com.np",
};

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn nav_lists_the_five_sections_in_page_order() {
        let labels: Vec<_> = NAV_ITEMS.iter().map(|item| item.label).collect();
        assert_eq!(labels, ["Home", "About", "Gallery", "Journey", "Contact"]);
    }

    #[test]
    fn every_nav_anchor_names_a_section() {
        for item in NAV_ITEMS {
            assert!(anchor::SECTIONS.contains(&item.anchor), "{} has no section", item.label);
        }
        let unique: HashSet<_> = NAV_ITEMS.iter().map(|item| item.anchor).collect();
        assert_eq!(unique.len(), NAV_ITEMS.len());
    }

    #[test]
    fn href_is_an_in_page_fragment() {
        assert_eq!(NAV_ITEMS[2].href(), "#gallery");
    }

    #[test]
    fn photos_keep_declaration_order() {
        assert_eq!(PERSONAL_PHOTOS.len(), 10);
        assert_eq!(PERSONAL_PHOTOS[0].path, "/gallery/img1.jpeg");
        assert_eq!(PERSONAL_PHOTOS[9].path, "/gallery/img10.jpeg");
    }

    #[test]
    fn each_timeline_category_has_entries() {
        for category in [TimelineCategory::Work, TimelineCategory::Education] {
            assert!(!timeline(category).is_empty());
        }
    }
}

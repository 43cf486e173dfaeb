use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use strum_macros::EnumString;

/// Unique identifier of a [`Club`].
pub type ClubId = u32;

/// A campus club from the static store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Club {
    pub id: ClubId,
    pub name: String,
    pub description: String,
    pub category: String,
    pub members: u32,
    /// Year the club was founded, kept as written (e.g. `"2015"`).
    pub established: String,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_links: Option<SocialLinks>,
}

impl Club {
    /// Social platforms this club links to, in the order the store lists them.
    pub fn social_platforms(&self) -> impl Iterator<Item = &str> {
        self.social_links.iter().flat_map(SocialLinks::platforms)
    }
}

/// Platform name to handle or URL, in store order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct SocialLinks(Vec<(String, String)>);

impl SocialLinks {
    pub fn platforms(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(platform, _)| platform.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .map(|(platform, link)| (platform.as_str(), link.as_str()))
    }

    pub fn get(&self, platform: &str) -> Option<&str> {
        self.iter()
            .find(|(name, _)| *name == platform)
            .map(|(_, link)| link)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<P: Into<String>, L: Into<String>> FromIterator<(P, L)> for SocialLinks {
    fn from_iter<T: IntoIterator<Item = (P, L)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(platform, link)| (platform.into(), link.into()))
                .collect(),
        )
    }
}

impl TryFrom<Map<String, Value>> for SocialLinks {
    type Error = String;

    fn try_from(map: Map<String, Value>) -> Result<Self, Self::Error> {
        map.into_iter()
            .map(|(platform, link)| match link {
                Value::String(link) => Ok((platform, link)),
                other => Err(format!("social link for {platform} is not a string: {other}")),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

impl From<SocialLinks> for Map<String, Value> {
    fn from(links: SocialLinks) -> Self {
        links
            .0
            .into_iter()
            .map(|(platform, link)| (platform, Value::String(link)))
            .collect()
    }
}

/// Social platforms with a dedicated icon on club cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, strum_macros::Display)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SocialPlatform {
    Instagram,
    Facebook,
    Twitter,
    Linkedin,
    Website,
    Youtube,
}

impl SocialPlatform {
    pub fn icon(self) -> &'static str {
        match self {
            SocialPlatform::Instagram => "📷",
            SocialPlatform::Facebook => "📘",
            SocialPlatform::Twitter => "🐦",
            SocialPlatform::Linkedin => "💼",
            SocialPlatform::Website => "🌐",
            SocialPlatform::Youtube => "📺",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn club_json(links: &str) -> String {
        format!(
            r#"{{"id": 3, "name": "Film Society", "description": "Screenings.",
                "category": "Arts", "members": 40, "established": "2005",
                "image": "/img/3.jpg", "socialLinks": {links}}}"#
        )
    }

    #[test]
    fn test_social_links_keep_store_order() {
        let json = club_json(
            r#"{"website": "https://film.example", "youtube": "@film",
                "instagram": "@film_soc", "facebook": "filmsoc"}"#,
        );
        let club: Club = serde_json::from_str(&json).unwrap();
        let platforms: Vec<&str> = club.social_platforms().collect();
        assert_eq!(platforms, vec!["website", "youtube", "instagram", "facebook"]);
        let links = club.social_links.as_ref().unwrap();
        assert_eq!(links.get("instagram"), Some("@film_soc"));
        assert_eq!(links.get("twitter"), None);

        let round_trip = serde_json::to_string(&club).unwrap();
        let website = round_trip.find("website").unwrap();
        let facebook = round_trip.find("facebook").unwrap();
        assert!(website < facebook);
    }

    #[test]
    fn test_social_links_reject_non_string() {
        let json = club_json(r#"{"website": 42}"#);
        assert!(serde_json::from_str::<Club>(&json).is_err());
    }

    #[test]
    fn test_club_without_social_links() {
        let json = r#"{"id": 1, "name": "Chess Club", "description": "Games.",
            "category": "Academic", "members": 12, "established": "2019",
            "image": "/img/1.jpg"}"#;
        let club: Club = serde_json::from_str(json).unwrap();
        assert!(club.social_links.is_none());
        assert_eq!(club.social_platforms().count(), 0);
    }

    #[test]
    fn test_platform_icons() {
        assert_eq!("YouTube".parse::<SocialPlatform>().unwrap().icon(), "📺");
        assert!("discord".parse::<SocialPlatform>().is_err());
    }
}

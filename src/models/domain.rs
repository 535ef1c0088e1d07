use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Profile of a person whose face matched the query image
///
/// Every field is required. Profiles missing a field, or carrying a field of
/// the wrong type, are rejected instead of being filled with defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchedPerson {
    /// Link to the social network profile
    pub profile: String,
    /// Link to the matched photo
    pub photo: String,
    /// Database the match came from
    pub source: String,
    pub age: u32,
    pub first_name: String,
    pub last_name: String,
    pub city: String,
    pub country: String,
}

/// Database partition a search is scoped to
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Source {
    /// Photos from VK public walls
    #[default]
    VkWall,
    /// VK and OK profile avatars
    VkOkAvatar,
    /// Recently indexed VK and OK avatars
    VkOkNewAvatar,
    /// TikTok avatars
    TikTokAvatar,
    /// Clubhouse avatars
    ClubhouseAvatar,
    /// Any other partition identifier, sent as-is
    Custom(String),
}

impl Source {
    pub fn as_str(&self) -> &str {
        match self {
            Source::VkWall => "vk_wall",
            Source::VkOkAvatar => "vkok_avatar",
            Source::VkOkNewAvatar => "vkokn_avatar",
            Source::TikTokAvatar => "tt_avatar",
            Source::ClubhouseAvatar => "ch_avatar",
            Source::Custom(id) => id,
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Source {
    fn from(s: &str) -> Self {
        match s {
            "vk_wall" => Source::VkWall,
            "vkok_avatar" => Source::VkOkAvatar,
            "vkokn_avatar" => Source::VkOkNewAvatar,
            "tt_avatar" => Source::TikTokAvatar,
            "ch_avatar" => Source::ClubhouseAvatar,
            other => Source::Custom(other.to_string()),
        }
    }
}

impl FromStr for Source {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Source::from(s))
    }
}

impl From<String> for Source {
    fn from(s: String) -> Self {
        Source::from(s.as_str())
    }
}

impl Serialize for Source {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Source {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Source::from(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_matched_person_requires_every_field() {
        let missing_city = json!({
            "profile": "p1", "photo": "ph1", "source": "vk_wall", "age": 30,
            "first_name": "A", "last_name": "B", "country": "D"
        });
        assert!(serde_json::from_value::<MatchedPerson>(missing_city).is_err());
    }

    #[test]
    fn test_matched_person_rejects_mistyped_age() {
        let bad_age = json!({
            "profile": "p1", "photo": "ph1", "source": "vk_wall", "age": "thirty",
            "first_name": "A", "last_name": "B", "city": "C", "country": "D"
        });
        assert!(serde_json::from_value::<MatchedPerson>(bad_age).is_err());
    }

    #[test]
    fn test_source_wire_names() {
        assert_eq!(Source::default().as_str(), "vk_wall");
        assert_eq!(serde_json::to_value(Source::TikTokAvatar).unwrap(), json!("tt_avatar"));
        assert_eq!(Source::from("ch_avatar"), Source::ClubhouseAvatar);
    }

    #[test]
    fn test_unknown_source_kept_verbatim() {
        let source = Source::from("sb_photo");
        assert_eq!(source, Source::Custom("sb_photo".to_string()));
        assert_eq!(source.to_string(), "sb_photo");
    }
}

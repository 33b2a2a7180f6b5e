use crate::records::{field, optional, parse_timestamp, reader};
use crate::CoreError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Embedded CSV of seed social media posts.
pub static CSV_OBJECT: &str = include_str!("../../fixtures/social_posts.csv");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    Twitter,
    Facebook,
    Instagram,
    YouTube,
}

impl Platform {
    pub const ALL: [Platform; 4] = [
        Platform::Twitter,
        Platform::Facebook,
        Platform::Instagram,
        Platform::YouTube,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Twitter => "Twitter",
            Platform::Facebook => "Facebook",
            Platform::Instagram => "Instagram",
            Platform::YouTube => "YouTube",
        }
    }

    /// Brand colour used for the avatar chip in the feed.
    pub fn color(self) -> &'static str {
        match self {
            Platform::Twitter => "#1DA1F2",
            Platform::Facebook => "#1877F2",
            Platform::Instagram => "#E1306C",
            Platform::YouTube => "#FF0000",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Platform::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::unknown("platform", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    pub fn as_str(self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
        }
    }
}

impl FromStr for Sentiment {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "positive" => Ok(Sentiment::Positive),
            "neutral" => Ok(Sentiment::Neutral),
            "negative" => Ok(Sentiment::Negative),
            other => Err(CoreError::unknown("sentiment", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Engagement {
    pub likes: u32,
    pub comments: u32,
    pub shares: u32,
    pub views: Option<u32>,
}

/// A post picked up from a social platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialPost {
    pub id: String,
    pub platform: Platform,
    pub username: String,
    pub display_name: String,
    pub text: String,
    pub sentiment: Sentiment,
    pub timestamp: DateTime<Utc>,
    pub geo: Option<GeoPoint>,
    pub location: Option<String>,
    pub engagement: Engagement,
    pub keywords: Vec<String>,
    pub verified: bool,
}

impl SocialPost {
    /// Case-insensitive search over text, author and keywords.
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        self.text.to_lowercase().contains(&query)
            || self.username.to_lowercase().contains(&query)
            || self.display_name.to_lowercase().contains(&query)
            || self.keywords.iter().any(|k| k.to_lowercase().contains(&query))
    }

    /// Parse a CSV string of posts.
    ///
    /// Expected columns (with headers): `id,platform,username,display_name,text,
    /// sentiment,timestamp,latitude,longitude,location,likes,comments,shares,
    /// views,keywords,verified`. Keywords are `;`-separated.
    pub fn parse_social_csv(csv_data: &str) -> anyhow::Result<Vec<SocialPost>> {
        let mut rdr = reader(csv_data);
        let mut posts = Vec::new();
        for row in rdr.records() {
            let r = row?;
            let latitude: Option<f64> = field(&r, 7).parse().ok();
            let longitude: Option<f64> = field(&r, 8).parse().ok();
            let geo = match (latitude, longitude) {
                (Some(latitude), Some(longitude)) => Some(GeoPoint {
                    latitude,
                    longitude,
                }),
                _ => None,
            };
            posts.push(SocialPost {
                id: field(&r, 0).to_string(),
                platform: field(&r, 1).parse()?,
                username: field(&r, 2).to_string(),
                display_name: field(&r, 3).to_string(),
                text: field(&r, 4).to_string(),
                sentiment: field(&r, 5).parse()?,
                timestamp: parse_timestamp(field(&r, 6))?,
                geo,
                location: optional(&r, 9),
                engagement: Engagement {
                    likes: field(&r, 10).parse().unwrap_or(0),
                    comments: field(&r, 11).parse().unwrap_or(0),
                    shares: field(&r, 12).parse().unwrap_or(0),
                    views: field(&r, 13).parse().ok(),
                },
                keywords: split_keywords(field(&r, 14)),
                verified: field(&r, 15).eq_ignore_ascii_case("true"),
            });
        }
        Ok(posts)
    }
}

pub fn split_keywords(raw: &str) -> Vec<String> {
    raw.split(';')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_embedded_fixture() {
        let posts = SocialPost::parse_social_csv(CSV_OBJECT).unwrap();
        assert_eq!(posts.len(), 5);

        let youtube = posts.iter().find(|p| p.id == "s_004").unwrap();
        assert_eq!(youtube.platform, Platform::YouTube);
        assert!(youtube.geo.is_none(), "s_004 has no coordinates");
        assert_eq!(youtube.engagement.views, Some(2340));
        assert!(youtube.verified);

        let first = &posts[0];
        assert_eq!(first.sentiment, Sentiment::Negative);
        assert_eq!(first.keywords, vec!["high tide", "marina beach", "safety"]);
        assert!(first.geo.is_some());
    }

    #[test]
    fn platform_parse_is_case_insensitive() {
        assert_eq!("youtube".parse::<Platform>(), Ok(Platform::YouTube));
        assert!("myspace".parse::<Platform>().is_err());
    }

    #[test]
    fn search_covers_keywords_and_author() {
        let posts = SocialPost::parse_social_csv(CSV_OBJECT).unwrap();
        let rescue: Vec<_> = posts
            .iter()
            .filter(|p| p.matches_query("rescue"))
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(rescue, vec!["s_005"]);

        let by_author = posts.iter().filter(|p| p.matches_query("fishermen association")).count();
        assert_eq!(by_author, 1);
    }

    #[test]
    fn split_keywords_skips_blanks() {
        assert_eq!(split_keywords("a; b;;c ;"), vec!["a", "b", "c"]);
        assert!(split_keywords("").is_empty());
    }
}

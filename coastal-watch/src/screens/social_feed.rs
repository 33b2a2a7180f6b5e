use super::{CARD_STYLE, INPUT_STYLE};
use cw_core::navigation::Screen;
use cw_core::social::{Platform, Sentiment, SocialPost};
use cw_db::HazardRepository;
use cw_ui::components::{Badge, SelectField, TopBar};
use cw_ui::js_bridge;
use cw_ui::state::AppState;
use cw_utils::dates::format_time_ago;
use dioxus::prelude::*;
use std::collections::BTreeSet;

/// (value, label, window in hours). Fixture posts are dated, so the
/// default shows everything.
const TIME_WINDOWS: [(&str, &str, Option<i64>); 4] = [
    ("all", "All time", None),
    ("1h", "Last 1h", Some(1)),
    ("6h", "Last 6h", Some(6)),
    ("24h", "Last 24h", Some(24)),
];

fn sentiment_badge(sentiment: Sentiment) -> (&'static str, &'static str) {
    match sentiment {
        Sentiment::Negative => ("red", "Alert"),
        Sentiment::Positive => ("green", "Positive"),
        Sentiment::Neutral => ("grey", "Neutral"),
    }
}

struct PostCard {
    id: String,
    platform: &'static str,
    platform_color: &'static str,
    initial: String,
    display_name: String,
    username: String,
    verified: bool,
    text: String,
    time_ago: String,
    location: Option<String>,
    keywords: Vec<String>,
    sentiment: (&'static str, &'static str),
    stats: String,
}

impl PostCard {
    fn new(post: &SocialPost, now: &chrono::DateTime<chrono::Utc>) -> Self {
        let e = &post.engagement;
        let mut stats = format!("{} likes · {} comments · {} shares", e.likes, e.comments, e.shares);
        if let Some(views) = e.views {
            stats.push_str(&format!(" · {} views", views));
        }
        PostCard {
            id: post.id.clone(),
            platform: post.platform.as_str(),
            platform_color: post.platform.color(),
            initial: post.display_name.chars().next().unwrap_or('?').to_string(),
            display_name: post.display_name.clone(),
            username: post.username.clone(),
            verified: post.verified,
            text: post.text.clone(),
            time_ago: format_time_ago(&post.timestamp, now),
            location: post.location.clone(),
            keywords: post.keywords.clone(),
            sentiment: sentiment_badge(post.sentiment),
            stats,
        }
    }
}

#[component]
pub fn SocialFeed() -> Element {
    let state = use_context::<AppState>();
    let mut query = use_signal(String::new);
    let mut platforms = use_signal(|| Platform::ALL.into_iter().map(Platform::as_str).collect::<BTreeSet<_>>());
    let mut window = use_signal(|| "all".to_string());

    let posts = state.query("Failed to load social posts", |db| db.social_posts());
    let now = js_bridge::wall_clock();
    let hours = TIME_WINDOWS
        .iter()
        .find(|(v, _, _)| *v == window())
        .and_then(|(_, _, h)| *h);
    let chosen = platforms();
    let search = query();

    let cards: Vec<PostCard> = posts
        .iter()
        .filter(|p| chosen.contains(p.platform.as_str()))
        .filter(|p| p.matches_query(&search))
        .filter(|p| hours.is_none_or(|h| (now - p.timestamp).num_minutes() <= h * 60))
        .map(|p| PostCard::new(p, &now))
        .collect();
    let shown = cards.len();
    let platform_boxes: Vec<_> = Platform::ALL
        .into_iter()
        .map(|p| (p.as_str(), p.color(), chosen.contains(p.as_str())))
        .collect();
    let window_options: Vec<(String, String)> = TIME_WINDOWS
        .iter()
        .map(|(v, t, _)| (v.to_string(), t.to_string()))
        .collect();

    rsx! {
        TopBar { title: "Social Media Feed", subtitle: "Real-time coastal hazard mentions", back: Some(Screen::Dashboard) }
        div {
            style: "max-width: 1100px; margin: 0 auto; padding: 24px; display: flex; gap: 24px; align-items: flex-start;",
            div {
                style: "{CARD_STYLE} width: 240px; flex-shrink: 0;",
                input {
                    style: INPUT_STYLE,
                    placeholder: "Search posts or keywords...",
                    value: "{query}",
                    oninput: move |evt: Event<FormData>| query.set(evt.value()),
                }
                p { style: "margin: 12px 0 4px 0; font-size: 13px; font-weight: bold;", "Platforms" }
                for (name, color, checked) in platform_boxes {
                    label {
                        key: "{name}",
                        style: "display: flex; gap: 6px; align-items: center; font-size: 13px; margin: 2px 0;",
                        input {
                            r#type: "checkbox",
                            checked,
                            onchange: move |_| {
                                let mut set = platforms.write();
                                if !set.remove(name) {
                                    set.insert(name);
                                }
                            },
                        }
                        span { style: "width: 8px; height: 8px; border-radius: 50%; background: {color};" }
                        "{name}"
                    }
                }
                SelectField {
                    label: "Time",
                    options: window_options,
                    value: window(),
                    on_change: move |v: String| window.set(v),
                }
                p { style: "margin: 12px 0 0 0; font-size: 12px; color: #16A34A;", "● Live Monitoring" }
            }
            div {
                style: "flex: 1; display: flex; flex-direction: column; gap: 12px;",
                p { style: "margin: 0; font-size: 13px; color: #6B7280;", "{shown} posts" }
                if cards.is_empty() {
                    div {
                        style: "{CARD_STYLE} text-align: center; color: #6B7280;",
                        p { style: "margin: 0; font-weight: 600;", "No posts found" }
                        p { style: "margin: 4px 0 0 0; font-size: 13px;", "Try adjusting your filters or search terms" }
                    }
                }
                for card in cards {
                    div {
                        key: "{card.id}",
                        style: CARD_STYLE,
                        div {
                            style: "display: flex; gap: 10px; align-items: center;",
                            div {
                                style: "width: 36px; height: 36px; border-radius: 50%; background: {card.platform_color}; color: white; display: flex; align-items: center; justify-content: center; font-weight: 700;",
                                "{card.initial}"
                            }
                            div {
                                style: "flex: 1;",
                                p {
                                    style: "margin: 0; font-weight: 600; font-size: 14px;",
                                    "{card.display_name}"
                                    if card.verified {
                                        span { style: "color: #2563EB; margin-left: 4px;", "✓" }
                                    }
                                }
                                p { style: "margin: 0; font-size: 12px; color: #6B7280;", "@{card.username} · {card.platform} · {card.time_ago}" }
                            }
                            Badge { color: card.sentiment.0.to_string(), text: card.sentiment.1.to_string() }
                        }
                        p { style: "margin: 10px 0; font-size: 14px; color: #111827;", "{card.text}" }
                        if let Some(location) = card.location {
                            p { style: "margin: 0 0 6px 0; font-size: 12px; color: #4B5563;", "📍 {location}" }
                        }
                        div {
                            style: "display: flex; gap: 6px; flex-wrap: wrap; margin-bottom: 6px;",
                            for keyword in card.keywords {
                                span {
                                    key: "{keyword}",
                                    style: "padding: 1px 8px; border-radius: 9999px; background: #EFF6FF; color: #1D4ED8; font-size: 11px;",
                                    "#{keyword}"
                                }
                            }
                        }
                        p { style: "margin: 0; font-size: 12px; color: #6B7280;", "{card.stats}" }
                    }
                }
            }
        }
    }
}

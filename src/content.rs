//! Static page content: who the page belongs to and where it links.
//!
//! None of this feeds the state machines; it is carried through the
//! options so the front end can render it from one place.

use serde::{Deserialize, Serialize};

/// An outbound social profile link.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SocialLink {
    /// Visible caption.
    pub label: String,
    /// Absolute target URL.
    pub url: String,
    /// Icon asset path.
    pub icon: String,
}

/// A recommended-content card.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Recommendation {
    /// Small card heading.
    pub heading: String,
    /// Recommended title.
    pub title: String,
    /// Absolute target URL.
    pub url: String,
}

/// Everything the page displays that is not driven by state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Profile {
    /// Display name under the avatar.
    pub name: String,
    /// Looping, always-muted avatar video.
    pub avatar_video: String,
    /// Icon shown next to the view counter.
    pub view_icon: String,
    /// Call to action on the blocking overlay.
    pub overlay_prompt: String,
    /// Heading above the social links.
    pub socials_title: String,
    /// Social links, in display order.
    pub socials: Vec<SocialLink>,
    /// Heading above the recommendation cards.
    pub recommendations_title: String,
    /// Recommendation cards, in display order.
    pub recommendations: Vec<Recommendation>,
}

fn social(label: &str, url: &str, icon: &str) -> SocialLink {
    SocialLink {
        label: label.to_owned(),
        url: url.to_owned(),
        icon: icon.to_owned(),
    }
}

fn recommendation(heading: &str, title: &str, url: &str) -> Recommendation {
    Recommendation {
        heading: heading.to_owned(),
        title: title.to_owned(),
        url: url.to_owned(),
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Jumarf".to_owned(),
            avatar_video: "images/pfp1-original.mp4".to_owned(),
            view_icon: "images/viewW.svg".to_owned(),
            overlay_prompt: "Нажмите, чтобы продолжить".to_owned(),
            socials_title: "Социальные сети".to_owned(),
            socials: vec![
                social(
                    "Telegram",
                    "https://t.me/Jumarfik",
                    "images/telegram.png",
                ),
                social("VK", "https://vk.com/ijumarf", "images/vk.png"),
                social(
                    "AniMedia",
                    "https://amedia.online",
                    "images/animedia.png",
                ),
                social(
                    "Yandex Music",
                    "https://music.yandex.ru/playlists/lk.59b2c22d-e2a8-45c8-a743-549ed9329896?utm_source=web&utm_medium=copy_link",
                    "images/yandex.png",
                ),
                social(
                    "Discord",
                    "https://discord.com/users/1394584725926187069",
                    "images/discord.png",
                ),
            ],
            recommendations_title: "Рекомендации".to_owned(),
            recommendations: vec![
                recommendation(
                    "Best Anime",
                    "Повелитель тайн: Клоун",
                    "https://amedia.online/2007-povelitel-tajn-kloun.html",
                ),
                recommendation(
                    "Best Donghua",
                    "Противостояние святого",
                    "https://amedia.online/1489-protivostojanie-svjatogo.html",
                ),
            ],
        }
    }
}

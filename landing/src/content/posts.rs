use std::borrow::Cow;

use chrono::{Datelike, NaiveDate};

use super::ById;
use crate::error::{Result, SiteError};

/// Blog post metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlogPost {
    pub id: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    /// ISO `YYYY-MM-DD`.
    pub date: &'static str,
    pub link: &'static str,
    pub category: &'static str,
    /// Where the post lives ("노션", "블로그"), shown in place of a reading time.
    pub read_time: &'static str,
}

impl BlogPost {
    /// Publication date in Korean long form, or the raw string if it does
    /// not parse.
    pub fn display_date(&self) -> Cow<'static, str> {
        match format_korean_date(self.date) {
            Ok(formatted) => Cow::Owned(formatted),
            Err(err) => {
                tracing::debug!(post = self.id, %err, "showing raw post date");
                Cow::Borrowed(self.date)
            }
        }
    }
}

impl ById for BlogPost {
    fn id(&self) -> &'static str {
        self.id
    }

    fn all() -> &'static [Self] {
        POSTS
    }
}

/// `2025-07-16` → `2025년 7월 16일`
pub fn format_korean_date(iso: &str) -> Result<String> {
    let date = NaiveDate::parse_from_str(iso.trim(), "%Y-%m-%d")
        .map_err(|_| SiteError::Date(iso.to_string()))?;
    Ok(format!("{}년 {}월 {}일", date.year(), date.month(), date.day()))
}

pub const POSTS: &[BlogPost] = &[
    BlogPost {
        id: "kiro-getting-started",
        title: "Kiro 한국 사용자를 위한 가이드",
        summary: "Kiro 한국 사용자를 위한 가이드는 AWS의 공식 입장이 아니며, 개인이 번역/의역한 가이드입니다.의미가 모호할 때는 각 블로그 내의 영어 원문을 참조합니다. 제9장은 AWS 계정 기반의 실습이므로, 비용이 발생할 수 있습니다.",
        date: "2054-07-17",
        link: "https://whchoi98.notion.site/Kiro-23104ef7e60e80d3b838e13d2d65498e",
        category: "가이드",
        read_time: "노션",
    },
    BlogPost {
        id: "kiro-getting-intro",
        title: "Kiro: 프로토타입에서 프로덕션 레벨까지 지원하는 스펙 기반 Agentic IDE 출시",
        summary: "혹시 이런 경험을 해 본 적이 있으신가요? 많은 프롬프트가 표시되면 작동하는 애플리케이션이 있습니다. 재미있고 마법 같은 느낌이 듭니다. 그러나, 현업의 프로덕션 레벨까지 활용하기에 충분하지 않습니다. ",
        date: "2025-07-16",
        link: "https://aws.amazon.com/ko/blogs/korea/introducing-kiro/",
        category: "소개",
        read_time: "블로그",
    },
    BlogPost {
        id: "kiro-price",
        title: "Kiro Pricing Plans Are Now Live",
        summary: "Over the past few weeks, we have shared several important Kiro pricing updates. We made these updates to our pricing model in response to your feedback. Many in our community have asked for a way to use Kiro above and beyond the",
        date: "2024-08-15",
        link: "https://kiro.dev/blog/pricing-plans-are-live/",
        category: "가격 정책",
        read_time: "블로그",
    },
];

use super::ById;
use crate::config::Links;

/// Named entry in the configured link table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkKey {
    Home,
    Waitlist,
    Pricing,
    Docs,
}

impl LinkKey {
    pub fn resolve(self, links: &Links) -> &str {
        match self {
            LinkKey::Home => &links.home,
            LinkKey::Waitlist => &links.waitlist,
            LinkKey::Pricing => &links.pricing,
            LinkKey::Docs => &links.docs,
        }
    }
}

/// A button that leaves the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallToAction {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: Option<&'static str>,
    pub destination: LinkKey,
    pub aria_label: Option<&'static str>,
}

impl CallToAction {
    pub fn url<'a>(&self, links: &'a Links) -> &'a str {
        self.destination.resolve(links)
    }
}

impl ById for CallToAction {
    fn id(&self) -> &'static str {
        self.id
    }

    fn all() -> &'static [Self] {
        CTAS
    }
}

pub const HERO_START: CallToAction = CallToAction {
    id: "hero-start",
    label: "키로 바로 보러가기",
    icon: Some("🚀"),
    destination: LinkKey::Home,
    aria_label: Some("KIRO 바로가기 등록"),
};

pub const HERO_PRICING: CallToAction = CallToAction {
    id: "hero-pricing",
    label: "가격 정책",
    icon: Some("💰"),
    destination: LinkKey::Pricing,
    aria_label: Some("가격 정책 확인"),
};

pub const PRICING_WAITLIST: CallToAction = CallToAction {
    id: "pricing-waitlist",
    label: "대기 등록하러 가기",
    icon: None,
    destination: LinkKey::Waitlist,
    aria_label: None,
};

pub const DIFFERENTIATION_START: CallToAction = CallToAction {
    id: "differentiation-start",
    label: "무료로 시작하기 →",
    icon: None,
    destination: LinkKey::Home,
    aria_label: None,
};

pub const BLOG_DOCS: CallToAction = CallToAction {
    id: "blog-docs",
    label: "KIRO DOCS 보러가기",
    icon: Some("🚀"),
    destination: LinkKey::Docs,
    aria_label: None,
};

/// All outbound buttons in page order.
pub const CTAS: &[CallToAction] = &[
    HERO_START,
    HERO_PRICING,
    PRICING_WAITLIST,
    DIFFERENTIATION_START,
    BLOG_DOCS,
];

//! Static page content.
//!
//! Every list is a `&'static` slice in display order. Sections render them
//! as-is; nothing writes to them at runtime.

mod cta;
mod differentiation;
mod features;
mod posts;
mod testimonials;

pub use cta::{
    CallToAction, LinkKey, BLOG_DOCS, CTAS, DIFFERENTIATION_START, HERO_PRICING, HERO_START,
    PRICING_WAITLIST,
};
pub use differentiation::{DifferentiationPoint, DIFFERENTIATION};
pub use features::{Feature, FEATURES};
pub use posts::{format_korean_date, BlogPost, POSTS};
pub use testimonials::{Testimonial, TESTIMONIALS};

/// Looks up a record by id in one of the content lists.
pub trait ById: Sized + 'static {
    fn id(&self) -> &'static str;

    fn all() -> &'static [Self];

    fn find(id: &str) -> Option<&'static Self> {
        Self::all().iter().find(|item| item.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn assert_unique<T: ById>() {
        let ids: HashSet<_> = T::all().iter().map(ById::id).collect();
        assert_eq!(ids.len(), T::all().len());
    }

    #[test]
    fn ids_are_unique_per_list() {
        assert_unique::<Feature>();
        assert_unique::<DifferentiationPoint>();
        assert_unique::<BlogPost>();
        assert_unique::<CallToAction>();
    }

    #[test]
    fn find_by_id() {
        assert_eq!(Feature::find("visual-hooks").map(|f| f.icon), Some("🔗"));
        assert!(BlogPost::find("missing").is_none());
    }
}

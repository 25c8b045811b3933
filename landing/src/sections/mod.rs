//! Page sections, in reading order, plus the shared building blocks they
//! are made of.

mod blog;
mod cta;
mod differentiation;
mod features;
mod footer;
mod hero;
mod image;
mod layout;
mod pricing;
mod testimonials;
mod typing;

pub use blog::Blog;
pub use cta::{follow, press_then, CtaButton};
pub use differentiation::Differentiation;
pub use features::{close_sheet, close_sheet_with, Features};
pub use footer::{rainbow_gradient, Footer, COLOPHON, RAINBOW};
pub use hero::{Hero, LOGO_SRC};
pub use image::OptimizedImage;
pub use layout::{Background, Layout, Section, SectionHeader, HEADER_TRIGGER};
pub use pricing::Pricing;
pub use testimonials::Testimonials;
pub use typing::{hero_typewriter, TypingHeadline, HEADLINE, HEADLINE_ACCENT, TAGLINE};

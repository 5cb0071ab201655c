//! UI Components for Vitrine
//!
//! Sidebar navigation, section cards with reveal and tilt behavior,
//! gallery thumbnails and the fullscreen image viewer.

mod gallery_thumb;
mod lightbox;
mod mobile_menu;
mod section_card;
mod sidebar;

pub use gallery_thumb::{FullImage, GalleryThumb};
pub use lightbox::LightboxOverlay;
pub use mobile_menu::MobileMenuButton;
pub use section_card::SectionCard;
pub use sidebar::Sidebar;

//! Accessible names and announcements. All positions are logical (`0..N`), never extended-track
//! indexes.
use alloc::format;
use alloc::string::String;

pub const ROLE_DESCRIPTION: &str = "carousel";
pub const DEFAULT_LABEL: &str = "Testimonials";
pub const PREVIOUS_LABEL: &str = "Previous testimonial";
pub const NEXT_LABEL: &str = "Next testimonial";

/// Live-region text for the active slide.
pub fn announcement(logical: usize, count: usize) -> String {
    format!("Showing testimonial {} of {}.", logical + 1, count)
}

/// `aria-label` of a slide group.
pub fn slide_label(identity: usize, count: usize) -> String {
    format!("Testimonial {} of {}", identity + 1, count)
}

/// `aria-label` of a pagination dot.
pub fn dot_label(name: &str) -> String {
    format!("Go to testimonial from {name}")
}

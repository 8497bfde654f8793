use alloc::string::String;
use alloc::vec::Vec;

/// A display record for one slide.
///
/// The engine never looks inside it except for accessibility labels; it is supplied once at
/// construction and never mutated.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Testimonial {
    pub name: String,
    pub role: String,
    pub company: Option<String>,
    pub quote: String,
    /// Explicit avatar glyph. When absent, initials are derived from `name`.
    pub avatar: Option<String>,
}

impl Testimonial {
    pub fn new(name: impl Into<String>, role: impl Into<String>, quote: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
            company: None,
            quote: quote.into(),
            avatar: None,
        }
    }

    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }

    /// The avatar glyph, or the initials of the first two words of `name`.
    pub fn avatar_glyph(&self) -> String {
        if let Some(avatar) = &self.avatar {
            return avatar.clone();
        }
        self.name
            .split(' ')
            .filter_map(|part| part.chars().next())
            .take(2)
            .collect()
    }

    /// `"role, company"`, or just the role when there is no company.
    pub fn byline(&self) -> String {
        match &self.company {
            Some(company) if !company.is_empty() => {
                let mut out = self.role.clone();
                out.push_str(", ");
                out.push_str(company);
                out
            }
            _ => self.role.clone(),
        }
    }
}

/// The built-in list used when a carousel is constructed without items.
pub fn default_testimonials() -> Vec<Testimonial> {
    [
        (
            "Ava Smith",
            "Founder",
            "Seedly",
            "They shipped in days, not months. Clean, scalable, and on brand.",
        ),
        (
            "Liam Jones",
            "COO",
            "MarketOne",
            "Our conversion lifted 32%. Clear communication and fast delivery.",
        ),
        (
            "Noah Lee",
            "CTO",
            "Nimbus",
            "Reliable, thoughtful engineering and solid code quality.",
        ),
        (
            "Emma Davis",
            "PM",
            "Flowbit",
            "Smooth process, from scope to launch. Great collaboration.",
        ),
        (
            "Olivia Chen",
            "CEO",
            "BrightCart",
            "The best dev partner we\u{2019}ve worked with\u{2014}period.",
        ),
    ]
    .into_iter()
    .map(|(name, role, company, quote)| Testimonial::new(name, role, quote).with_company(company))
    .collect()
}

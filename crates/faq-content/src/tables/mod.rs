//! Hand-authored FAQ source tables.
//!
//! Every audience reads the [`SHARED`](shared::SHARED) rows first, then its
//! own exclusive rows. Journey lists and standard lists use different
//! exclusive tables; some rows appear in both verbatim.
//!
//! ```text
//! journey(A)  = SHARED ++ A's journey rows     (general has none)
//! standard(A) = SHARED ++ A's standard rows
//! ```

mod client;
mod general;
mod provider;
mod shared;

use faq_core::Audience;

pub use shared::SHARED;

/// Display names of the authored categories.
pub mod category {
    pub const SIGN_UP: &str = "Inscription";
    pub const ACCOUNT: &str = "Profil et compte";
    pub const SERVICES: &str = "Services et tarifs";
    pub const BOOKINGS: &str = "Réservations";
    pub const PAYMENTS: &str = "Paiements";
    pub const REVIEWS: &str = "Avis et évaluations";
    pub const TRUST: &str = "Sécurité et confiance";
    pub const SUPPORT: &str = "Assistance";
    pub const ABOUT: &str = "À propos";
    pub const FIRST_JOB: &str = "Première mission";
}

/// One authored question/answer row.
///
/// `answer` is the default, client-facing text. Rows shared across audiences
/// may carry provider- or general-specific wording; an audience without its
/// own variant reads the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceRow<'a> {
    pub category: &'a str,
    pub question: &'a str,
    pub answer: &'a str,
    pub provider_answer: Option<&'a str>,
    pub general_answer: Option<&'a str>,
}

impl<'a> SourceRow<'a> {
    #[must_use]
    pub const fn new(category: &'a str, question: &'a str, answer: &'a str) -> Self {
        Self {
            category,
            question,
            answer,
            provider_answer: None,
            general_answer: None,
        }
    }

    #[must_use]
    pub const fn with_provider_answer(mut self, answer: &'a str) -> Self {
        self.provider_answer = Some(answer);
        self
    }

    #[must_use]
    pub const fn with_general_answer(mut self, answer: &'a str) -> Self {
        self.general_answer = Some(answer);
        self
    }

    /// Answer text for `audience`, falling back to the default answer.
    #[must_use]
    pub fn answer_for(&self, audience: Audience) -> &'a str {
        let variant = match audience {
            Audience::General => self.general_answer,
            Audience::Provider => self.provider_answer,
            Audience::Client => None,
        };
        variant.unwrap_or(self.answer)
    }
}

/// Exclusive journey rows for `audience`.
#[must_use]
pub const fn journey_rows(audience: Audience) -> &'static [SourceRow<'static>] {
    match audience {
        Audience::General => &[],
        Audience::Provider => provider::JOURNEY,
        Audience::Client => client::JOURNEY,
    }
}

/// Exclusive standard rows for `audience`.
#[must_use]
pub const fn standard_rows(audience: Audience) -> &'static [SourceRow<'static>] {
    match audience {
        Audience::General => general::STANDARD,
        Audience::Provider => provider::STANDARD,
        Audience::Client => client::STANDARD,
    }
}

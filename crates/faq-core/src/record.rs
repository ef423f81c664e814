//! Accessor traits shared by every entry shape.
//!
//! Query services are generic over these traits instead of over a concrete
//! struct, so the same filtering code serves standard, journey, and unified
//! entries.

use crate::entities::{FaqEntry, JourneyEntry, UnifiedEntry};

/// Anything with a question, an answer, and a category.
pub trait FaqRecord {
    fn question(&self) -> &str;
    fn answer(&self) -> &str;
    fn category(&self) -> &str;
}

/// A record that also carries a stable id and a walkthrough position.
pub trait JourneyRecord: FaqRecord {
    fn id(&self) -> &str;
    fn order(&self) -> u32;
}

macro_rules! impl_faq_record {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl FaqRecord for $ty {
                fn question(&self) -> &str {
                    &self.question
                }

                fn answer(&self) -> &str {
                    &self.answer
                }

                fn category(&self) -> &str {
                    &self.category
                }
            }
        )+
    };
}

impl_faq_record!(FaqEntry, JourneyEntry, UnifiedEntry);

impl JourneyRecord for JourneyEntry {
    fn id(&self) -> &str {
        &self.id
    }

    fn order(&self) -> u32 {
        self.order
    }
}

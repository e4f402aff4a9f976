//! Search scopes and their static profiles.
//!
//! A scope names a publication (Radar, Australian Prescriber, NPS) or the
//! whole site. Each scope has exactly one [`ScopeProfile`]: the content types
//! it may return, the fields its terms are matched against, and the boost
//! each of those fields contributes to relevance.
//!
//! Scope names coming from requests are resolved leniently: they are
//! upper-cased, stripped to `A-Z` and `_`, and anything unrecognised falls
//! back to [`Scope::All`].
//!
//! ```
//! use article_search::scope::Scope;
//!
//! assert_eq!(Scope::resolve(Some("nps")), Scope::Nps);
//! assert_eq!(Scope::resolve(Some("Australian-Prescriber")), Scope::All);
//! assert_eq!(Scope::resolve(Some("australian_prescriber")), Scope::AustralianPrescriber);
//! assert_eq!(Scope::resolve(None), Scope::All);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::query::predicate::Field;

/// Content type (object class) names used by the CMS.
pub mod content_type {
    pub const RADAR_ARTICLE_PAGE: &str = "Cms::RadarArticlePage";

    pub const AP_ARTICLE_PAGE: &str = "Cms::ApArticlePage";
    pub const AP_GENERIC_PAGE: &str = "Cms::ApGenericPage";
    pub const FEEDBACK_PAGE: &str = "Cms::FeedbackPage";

    pub const CLINICAL_NEWS_PAGE: &str = "Cms::ClinicalNewsPage";
    pub const CONSUMER_INFO_CARD_PAGE: &str = "Cms::ConsumerInfoCardPage";
    pub const CPD_ACTIVITY_PAGE: &str = "Cms::CpdActivityPage";
    pub const GENERIC_CONTENT_PAGE: &str = "Cms::GenericContentPage";
    pub const PROGRAM_PAGE: &str = "Cms::ProgramPage";
    pub const MEDICINE_PAGE: &str = "Cms::MedicinePage";
    pub const MEDIA_RELEASE_PAGE: &str = "Cms::MediaReleasePage";
    pub const CAMPAIGN_PAGE: &str = "Cms::CampaignPage";

    pub const AUTHOR: &str = "Cms::Author";
    pub const AUTHOR_ROLE: &str = "Cms::AuthorRole";
}

use content_type::*;

const RADAR_PAGES: &[&str] = &[RADAR_ARTICLE_PAGE];

const AUSTRALIAN_PRESCRIBER_PAGES: &[&str] = &[AP_ARTICLE_PAGE, AP_GENERIC_PAGE, FEEDBACK_PAGE];

const NPS_PAGES: &[&str] = &[
    CLINICAL_NEWS_PAGE,
    CONSUMER_INFO_CARD_PAGE,
    CPD_ACTIVITY_PAGE,
    GENERIC_CONTENT_PAGE,
    PROGRAM_PAGE,
    MEDICINE_PAGE,
    FEEDBACK_PAGE,
    MEDIA_RELEASE_PAGE,
    CAMPAIGN_PAGE,
];

// Union of the three lists above, first occurrence order.
const ALL_PAGES: &[&str] = &[
    RADAR_ARTICLE_PAGE,
    AP_ARTICLE_PAGE,
    AP_GENERIC_PAGE,
    FEEDBACK_PAGE,
    CLINICAL_NEWS_PAGE,
    CONSUMER_INFO_CARD_PAGE,
    CPD_ACTIVITY_PAGE,
    GENERIC_CONTENT_PAGE,
    PROGRAM_PAGE,
    MEDICINE_PAGE,
    MEDIA_RELEASE_PAGE,
    CAMPAIGN_PAGE,
];

const TITLE: Field = Field::attribute("title");
const INTERNAL_DESCRIPTION: Field = Field::attribute("internal_description");
const DESCRIPTION: Field = Field::attribute("description");
const BRAND_NAME: Field = Field::attribute("brand_name");
const KEYWORDS: Field = Field::attribute("keywords");
const SUBJECT: Field = Field::attribute("subject");
const BODY: Field = Field::attribute("body");

const JOURNAL_FIELDS: &[Field] = &[TITLE, INTERNAL_DESCRIPTION, KEYWORDS, BODY, Field::Permalink];
const JOURNAL_BOOSTS: &[(Field, f32)] = &[(TITLE, 10.0), (INTERNAL_DESCRIPTION, 5.0), (KEYWORDS, 3.0)];

const NPS_FIELDS: &[Field] = &[TITLE, BRAND_NAME, DESCRIPTION, KEYWORDS, SUBJECT, Field::Permalink];
const NPS_BOOSTS: &[(Field, f32)] = &[
    (TITLE, 10.0),
    (BRAND_NAME, 10.0),
    (DESCRIPTION, 5.0),
    (SUBJECT, 3.0),
    (KEYWORDS, 2.0),
];

const ALL_FIELDS: &[Field] = &[
    TITLE,
    BRAND_NAME,
    INTERNAL_DESCRIPTION,
    DESCRIPTION,
    KEYWORDS,
    SUBJECT,
    Field::Permalink,
];
const ALL_BOOSTS: &[(Field, f32)] = &[
    (TITLE, 10.0),
    (BRAND_NAME, 10.0),
    (INTERNAL_DESCRIPTION, 5.0),
    (DESCRIPTION, 5.0),
    (SUBJECT, 3.0),
    (KEYWORDS, 2.0),
];

/// A named grouping of content searched together.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    Radar,
    AustralianPrescriber,
    Nps,
    #[default]
    All,
}

impl Scope {
    /// Every scope, in display order.
    pub const ALL: [Scope; 4] = [
        Scope::Radar,
        Scope::AustralianPrescriber,
        Scope::Nps,
        Scope::All,
    ];

    /// Resolve a request's scope name, defaulting to [`Scope::All`].
    pub fn resolve(name: Option<&str>) -> Scope {
        let Some(name) = name else {
            return Scope::All;
        };
        let key: String = name
            .to_uppercase()
            .chars()
            .filter(|c| c.is_ascii_uppercase() || *c == '_')
            .collect();
        match key.as_str() {
            "RADAR" => Scope::Radar,
            "AUSTRALIAN_PRESCRIBER" => Scope::AustralianPrescriber,
            "NPS" => Scope::Nps,
            _ => Scope::All,
        }
    }

    /// Canonical lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            Scope::Radar => "radar",
            Scope::AustralianPrescriber => "australian_prescriber",
            Scope::Nps => "nps",
            Scope::All => "all",
        }
    }

    /// The static profile for this scope.
    pub fn profile(&self) -> &'static ScopeProfile {
        match self {
            Scope::Radar => &RADAR_PROFILE,
            Scope::AustralianPrescriber => &AUSTRALIAN_PRESCRIBER_PROFILE,
            Scope::Nps => &NPS_PROFILE,
            Scope::All => &ALL_PROFILE,
        }
    }

    /// Journal scopes whose results are articles rather than site pages.
    pub fn is_article_scope(&self) -> bool {
        matches!(self, Scope::Radar | Scope::AustralianPrescriber)
    }

    /// Whether matching authors contribute the articles they wrote.
    pub fn supports_author_lookup(&self) -> bool {
        matches!(self, Scope::AustralianPrescriber)
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Immutable per-scope search configuration.
#[derive(Debug, PartialEq)]
pub struct ScopeProfile {
    pub scope: Scope,
    /// Content types the scope may return.
    pub content_types: &'static [&'static str],
    /// Fields that search terms are matched against.
    pub fields: &'static [Field],
    /// Relevance weight per field; fields not listed weigh 1.
    pub boosts: &'static [(Field, f32)],
}

impl ScopeProfile {
    /// Whether a content type belongs to this scope.
    pub fn allows(&self, content_type: &str) -> bool {
        self.content_types.contains(&content_type)
    }

    /// Boost for a field, if one is configured.
    pub fn boost(&self, field: &Field) -> Option<f32> {
        self.boosts
            .iter()
            .find(|(boosted, _)| boosted == field)
            .map(|(_, boost)| *boost)
    }
}

static RADAR_PROFILE: ScopeProfile = ScopeProfile {
    scope: Scope::Radar,
    content_types: RADAR_PAGES,
    fields: JOURNAL_FIELDS,
    boosts: JOURNAL_BOOSTS,
};

static AUSTRALIAN_PRESCRIBER_PROFILE: ScopeProfile = ScopeProfile {
    scope: Scope::AustralianPrescriber,
    content_types: AUSTRALIAN_PRESCRIBER_PAGES,
    fields: JOURNAL_FIELDS,
    boosts: JOURNAL_BOOSTS,
};

static NPS_PROFILE: ScopeProfile = ScopeProfile {
    scope: Scope::Nps,
    content_types: NPS_PAGES,
    fields: NPS_FIELDS,
    boosts: NPS_BOOSTS,
};

static ALL_PROFILE: ScopeProfile = ScopeProfile {
    scope: Scope::All,
    content_types: ALL_PAGES,
    fields: ALL_FIELDS,
    boosts: ALL_BOOSTS,
};

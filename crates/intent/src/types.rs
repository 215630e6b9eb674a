use serde::{Deserialize, Serialize};
use std::fmt;

/// The five query-intent categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    Informational,
    Navigational,
    Commercial,
    Transactional,
    Local,
}

impl Intent {
    pub const ALL: [Intent; 5] = [
        Intent::Informational,
        Intent::Navigational,
        Intent::Commercial,
        Intent::Transactional,
        Intent::Local,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Intent::Informational => "informational",
            Intent::Navigational => "navigational",
            Intent::Commercial => "commercial",
            Intent::Transactional => "transactional",
            Intent::Local => "local",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Weight per intent. After [`normalized`](Self::normalized) the weights sum to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntentDistribution {
    pub informational: f64,
    pub navigational: f64,
    pub commercial: f64,
    pub transactional: f64,
    pub local: f64,
}

impl IntentDistribution {
    /// Every category at `1/5`.
    pub const UNIFORM: IntentDistribution = IntentDistribution {
        informational: 0.2,
        navigational: 0.2,
        commercial: 0.2,
        transactional: 0.2,
        local: 0.2,
    };

    pub fn get(&self, intent: Intent) -> f64 {
        match intent {
            Intent::Informational => self.informational,
            Intent::Navigational => self.navigational,
            Intent::Commercial => self.commercial,
            Intent::Transactional => self.transactional,
            Intent::Local => self.local,
        }
    }

    pub fn get_mut(&mut self, intent: Intent) -> &mut f64 {
        match intent {
            Intent::Informational => &mut self.informational,
            Intent::Navigational => &mut self.navigational,
            Intent::Commercial => &mut self.commercial,
            Intent::Transactional => &mut self.transactional,
            Intent::Local => &mut self.local,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Intent, f64)> + '_ {
        Intent::ALL.into_iter().map(move |intent| (intent, self.get(intent)))
    }

    pub fn total(&self) -> f64 {
        self.iter().map(|(_, w)| w).sum()
    }

    /// Divides every weight by the total; falls back to [`UNIFORM`](Self::UNIFORM)
    /// when the total is not positive.
    pub fn normalized(&self) -> IntentDistribution {
        let total = self.total();
        if total <= 0.0 {
            return Self::UNIFORM;
        }
        let mut out = *self;
        for intent in Intent::ALL {
            *out.get_mut(intent) /= total;
        }
        out
    }

    /// Highest-weighted intent; earlier categories win ties.
    pub fn dominant(&self) -> Intent {
        self.iter()
            .fold((Intent::Informational, f64::NEG_INFINITY), |best, (intent, w)| {
                if w > best.1 {
                    (intent, w)
                } else {
                    best
                }
            })
            .0
    }
}

/// Entity category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EntityKind {
    Person,
    Place,
    Concept,
}

/// A recognized name, place, or domain concept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: EntityKind,
    pub confidence: f64,
}

impl Entity {
    pub fn new(name: impl Into<String>, kind: EntityKind, confidence: f64) -> Self {
        Self {
            name: name.into(),
            kind,
            confidence,
        }
    }
}

/// Coarse content-strategy bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClusterLabel {
    LocalSeo,
    Conversion,
    Comparison,
    Education,
    General,
}

impl ClusterLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            ClusterLabel::LocalSeo => "local-seo",
            ClusterLabel::Conversion => "conversion",
            ClusterLabel::Comparison => "comparison",
            ClusterLabel::Education => "education",
            ClusterLabel::General => "general",
        }
    }
}

impl fmt::Display for ClusterLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

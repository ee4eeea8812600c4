use regex::RegexBuilder;

use crate::domain::Player;

/// How the text search string is matched against a field value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    #[default]
    Partial,
    Exact,
    Pattern,
}

/// Fields eligible for text search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Name,
    AffiliationName,
    Notes,
    PositionDetail,
}

impl SearchField {
    pub fn value_of<'a>(&self, player: &'a Player) -> Option<&'a str> {
        match self {
            SearchField::Name => Some(player.name.as_str()),
            SearchField::AffiliationName => player.affiliation_name.as_deref(),
            SearchField::Notes => player.notes.as_deref(),
            SearchField::PositionDetail => player.position_detail.as_deref(),
        }
    }
}

/// Inclusive draft-year bounds; both ends optional
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct YearRange {
    pub min: Option<i32>,
    pub max: Option<i32>,
}

impl YearRange {
    pub fn is_active(&self) -> bool {
        self.min.is_some() || self.max.is_some()
    }

    pub fn contains(&self, year: i32) -> bool {
        self.min.map(|min| year >= min).unwrap_or(true)
            && self.max.map(|max| year <= max).unwrap_or(true)
    }
}

/// Inclusive bounds for values extracted from free-form height/weight strings
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NumericRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl NumericRange {
    pub fn is_active(&self) -> bool {
        self.min.is_some() || self.max.is_some()
    }

    pub fn contains(&self, value: f64) -> bool {
        self.min.map(|min| value >= min).unwrap_or(true)
            && self.max.map(|max| value <= max).unwrap_or(true)
    }
}

/// Pull the numeric portion out of a free-form measurement string.
/// "182cm" parses to 182.0; strings without any digits yield None.
pub fn extract_numeric(raw: &str) -> Option<f64> {
    let digits: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    digits.parse().ok()
}

/// The active filter configuration for the player listing
#[derive(Debug, Clone, PartialEq)]
pub struct SearchFilters {
    pub text_search: String,
    pub search_mode: SearchMode,
    pub search_fields: Vec<SearchField>,
    pub positions: Vec<String>,
    pub affiliation_types: Vec<String>,
    pub draft_year_range: YearRange,
    pub height_range: NumericRange,
    pub weight_range: NumericRange,
    pub has_notes: Option<bool>,
    pub has_physical_data: Option<bool>,
}

impl Default for SearchFilters {
    fn default() -> Self {
        Self {
            text_search: String::new(),
            search_mode: SearchMode::Partial,
            search_fields: vec![SearchField::Name, SearchField::AffiliationName],
            positions: Vec::new(),
            affiliation_types: Vec::new(),
            draft_year_range: YearRange::default(),
            height_range: NumericRange::default(),
            weight_range: NumericRange::default(),
            has_notes: None,
            has_physical_data: None,
        }
    }
}

impl SearchFilters {
    /// Decide whether a single record satisfies every active constraint
    pub fn matches(&self, player: &Player) -> bool {
        if !self.text_search.is_empty() {
            let needle = self.text_search.to_lowercase();
            let hit = self.search_fields.iter().any(|field| {
                field
                    .value_of(player)
                    .map(|value| self.text_matches(&value.to_lowercase(), &needle))
                    .unwrap_or(false)
            });
            if !hit {
                return false;
            }
        }

        if !self.positions.is_empty() {
            match player.position.as_deref() {
                Some(position) if self.positions.iter().any(|p| p == position) => {}
                _ => return false,
            }
        }

        if !self.affiliation_types.is_empty() {
            match player.affiliation_type.as_deref() {
                Some(kind) if self.affiliation_types.iter().any(|t| t == kind) => {}
                _ => return false,
            }
        }

        if self.draft_year_range.is_active() {
            match player.draft_year {
                Some(year) if self.draft_year_range.contains(year) => {}
                _ => return false,
            }
        }

        if self.height_range.is_active() && !range_matches(&player.height, &self.height_range) {
            return false;
        }

        if self.weight_range.is_active() && !range_matches(&player.weight, &self.weight_range) {
            return false;
        }

        if let Some(wanted) = self.has_notes {
            if player.has_notes() != wanted {
                return false;
            }
        }

        if let Some(wanted) = self.has_physical_data {
            if player.has_physical_data() != wanted {
                return false;
            }
        }

        true
    }

    fn text_matches(&self, value: &str, needle: &str) -> bool {
        match self.search_mode {
            SearchMode::Partial => value.contains(needle),
            SearchMode::Exact => value == needle,
            SearchMode::Pattern => {
                match RegexBuilder::new(needle).case_insensitive(true).build() {
                    Ok(pattern) => pattern.is_match(value),
                    // Invalid pattern falls back to partial matching
                    Err(_) => value.contains(needle),
                }
            }
        }
    }

    /// Whether any filter category differs from its unconstrained default
    pub fn is_active(&self) -> bool {
        self.active_count() > 0
    }

    /// Number of independently-active filter categories
    pub fn active_count(&self) -> usize {
        let mut count = 0;
        if !self.text_search.is_empty() {
            count += 1;
        }
        if !self.positions.is_empty() {
            count += 1;
        }
        if !self.affiliation_types.is_empty() {
            count += 1;
        }
        if self.draft_year_range.is_active() {
            count += 1;
        }
        if self.height_range.is_active() {
            count += 1;
        }
        if self.weight_range.is_active() {
            count += 1;
        }
        if self.has_notes.is_some() {
            count += 1;
        }
        if self.has_physical_data.is_some() {
            count += 1;
        }
        count
    }
}

fn range_matches(raw: &Option<String>, range: &NumericRange) -> bool {
    raw.as_deref()
        .and_then(extract_numeric)
        .map(|value| range.contains(value))
        .unwrap_or(false)
}

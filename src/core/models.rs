use std::collections::HashMap;
use std::fmt::{Display, Formatter};

use serde::Serialize;

/* ----- IDS (shared by lookup/, filter/, integrity/) ----- */

/// Identifier of a [`Scope`]; unique within an [`Inventory`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ScopeId(pub u32);

/// Identifier of an [`Activity`]; unique within an [`Inventory`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ActivityId(pub u32);

/// Parses a caller-supplied id. Surrounding whitespace and a leading `+` are
/// accepted; anything else that is not a `u32` in decimal yields `None`.
fn parse_id(input: &str) -> Option<u32> {
    let s = input.trim();
    let digits = s.strip_prefix('+').unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse::<u32>().ok()
}

impl ScopeId {
    /// Parses a scope id from untrusted text (e.g. a route segment).
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        parse_id(input).map(Self)
    }

    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl ActivityId {
    /// Parses an activity id from untrusted text (e.g. a route segment).
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        parse_id(input).map(Self)
    }

    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for ScopeId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

impl From<u32> for ActivityId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

impl Display for ScopeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Display for ActivityId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/* ----- VALUES ----- */

fn ungroup(text: &str) -> Option<String> {
    if !text.contains(',') {
        return Some(text.to_owned());
    }
    let (int_part, rest) = text.split_at(text.find('.').unwrap_or(text.len()));
    let digits = int_part.trim_start_matches(['+', '-']);
    let sign = &int_part[..int_part.len() - digits.len()];

    let mut groups = digits.split(',');
    let leading = groups.next().unwrap_or_default();
    let grouped = (1..=3).contains(&leading.len())
        && groups.all(|g| g.len() == 3)
        && digits.bytes().all(|b| b.is_ascii_digit() || b == b',');
    if !grouped || rest.contains(',') {
        return None;
    }
    Some(format!("{sign}{}{rest}", digits.replace(',', "")))
}

/// A value the dataset may carry either as a number or as free text.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DataValue {
    Numeric(f64),
    Text(String),
}

/// Activity data is the main place mixed representations show up.
pub type ActivityDataValue = DataValue;

impl DataValue {
    /// Best-effort numeric view. Text is parsed after removing well-formed
    /// thousands separators (`12,000.5`); a comma anywhere else (`1,5`) makes
    /// the text ambiguous and yields `None`, as does anything unparseable.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Numeric(v) => Some(*v),
            Self::Text(s) => ungroup(s.trim())?
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite()),
        }
    }

    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Numeric(_))
    }
}

/// Greenhouse gas species tracked per activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Gas {
    Co2,
    Ch4,
    N2o,
    FGas,
}

impl Gas {
    /// All species in display order.
    pub const ALL: [Self; 4] = [Self::Co2, Self::Ch4, Self::N2o, Self::FGas];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Co2 => "CO2",
            Self::Ch4 => "CH4",
            Self::N2o => "N2O",
            Self::FGas => "F-gases",
        }
    }
}

impl Display for Gas {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-gas emissions in tCO2e with absent components counted as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct GasBreakdown {
    pub co2: f64,
    pub ch4: f64,
    pub n2o: f64,
    pub fgas: f64,
}

impl GasBreakdown {
    #[must_use]
    pub const fn get(&self, gas: Gas) -> f64 {
        match gas {
            Gas::Co2 => self.co2,
            Gas::Ch4 => self.ch4,
            Gas::N2o => self.n2o,
            Gas::FGas => self.fgas,
        }
    }

    #[must_use]
    pub fn total(&self) -> f64 {
        self.co2 + self.ch4 + self.n2o + self.fgas
    }

    /// Adds another breakdown component-wise.
    pub fn accumulate(&mut self, other: &Self) {
        self.co2 += other.co2;
        self.ch4 += other.ch4;
        self.n2o += other.n2o;
        self.fgas += other.fgas;
    }
}

/* ----- INVENTORY GRAPH ----- */

/// A named subgrouping of activities within one scope.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Category {
    /// Matched against [`Activity::category`] by exact, case-sensitive equality.
    pub name: String,
    pub total_emissions: f64,
    pub percent_of_scope: f64,
    pub percent_of_total: f64,
    pub activity_count: u32,
}

/// One of the GHG accounting scopes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scope {
    pub id: ScopeId,
    pub name: String,
    pub total_emissions: f64,
    pub percent_of_total: f64,
    pub categories: Vec<Category>,
}

/// A single emission-generating process.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Activity {
    pub id: ActivityId,
    pub scope: ScopeId,
    pub category: String,
    /// `None` where the dataset marks the field as not applicable.
    pub activity: Option<String>,
    pub description: Option<String>,
    pub activity_data_value: Option<ActivityDataValue>,
    pub activity_data_unit: Option<String>,
    pub emission_factor: Option<DataValue>,
    pub ef_unit: Option<String>,
    pub co2_ef: Option<f64>,
    pub ch4_ef: Option<f64>,
    pub n2o_ef: Option<f64>,
    pub fgas_ef: Option<f64>,
    pub co2_emissions: Option<f64>,
    pub ch4_emissions: Option<f64>,
    pub n2o_emissions: Option<f64>,
    pub fgas_emissions: Option<f64>,
    pub total_emissions: f64,
    pub percent_of_category: f64,
    pub percent_of_scope: f64,
    pub percent_of_total: f64,
    pub ad_source: Option<String>,
    pub ef_source: Option<String>,
    pub comments: Option<String>,
}

impl Activity {
    /// Display label: the activity name, falling back to the description.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.activity.as_deref().or(self.description.as_deref())
    }

    /// Emissions recorded for one gas, if the dataset carries that component.
    #[must_use]
    pub const fn emissions(&self, gas: Gas) -> Option<f64> {
        match gas {
            Gas::Co2 => self.co2_emissions,
            Gas::Ch4 => self.ch4_emissions,
            Gas::N2o => self.n2o_emissions,
            Gas::FGas => self.fgas_emissions,
        }
    }

    /// Emission factor component for one gas.
    #[must_use]
    pub const fn emission_factor_for(&self, gas: Gas) -> Option<f64> {
        match gas {
            Gas::Co2 => self.co2_ef,
            Gas::Ch4 => self.ch4_ef,
            Gas::N2o => self.n2o_ef,
            Gas::FGas => self.fgas_ef,
        }
    }

    #[must_use]
    pub fn gas_breakdown(&self) -> GasBreakdown {
        GasBreakdown {
            co2: self.co2_emissions.unwrap_or(0.0),
            ch4: self.ch4_emissions.unwrap_or(0.0),
            n2o: self.n2o_emissions.unwrap_or(0.0),
            fgas: self.fgas_emissions.unwrap_or(0.0),
        }
    }

    /// Sum of the present per-gas components; should equal `total_emissions`.
    #[must_use]
    pub fn component_sum(&self) -> f64 {
        self.gas_breakdown().total()
    }

    /// Gases with strictly positive emissions, in display order.
    #[must_use]
    pub fn emitting_gases(&self) -> Vec<(Gas, f64)> {
        Gas::ALL
            .iter()
            .filter_map(|&g| self.emissions(g).filter(|v| *v > 0.0).map(|v| (g, v)))
            .collect()
    }
}

/// The immutable inventory snapshot every query runs against.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Inventory {
    total_emissions: f64,
    scopes: Vec<Scope>,
    activities: Vec<Activity>,
    #[serde(skip)]
    activity_index: HashMap<ActivityId, usize>,
}

impl Inventory {
    /// Assembles a snapshot and builds the activity id index. On duplicate
    /// ids the first occurrence is the one lookups resolve to.
    #[must_use]
    pub fn new(total_emissions: f64, scopes: Vec<Scope>, activities: Vec<Activity>) -> Self {
        let mut activity_index = HashMap::with_capacity(activities.len());
        for (pos, a) in activities.iter().enumerate() {
            activity_index.entry(a.id).or_insert(pos);
        }
        Self {
            total_emissions,
            scopes,
            activities,
            activity_index,
        }
    }

    #[must_use]
    pub const fn total_emissions(&self) -> f64 {
        self.total_emissions
    }

    #[must_use]
    pub fn scopes(&self) -> &[Scope] {
        &self.scopes
    }

    #[must_use]
    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    pub(crate) fn activity_position(&self, id: ActivityId) -> Option<usize> {
        self.activity_index.get(&id).copied()
    }
}

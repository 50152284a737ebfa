use serde::Deserialize;

/* ------------- serde mapping of the static activities.json ------------- */

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct InventoryNode {
    #[serde(default)]
    pub(crate) total_emissions: Option<f64>,
    #[serde(default)]
    pub(crate) scopes: Vec<ScopeNode>,
    #[serde(default)]
    pub(crate) activities: Vec<ActivityNode>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ScopeNode {
    pub(crate) id: u32,
    #[serde(default)]
    pub(crate) name: Option<String>,
    #[serde(default)]
    pub(crate) total_emissions: Option<f64>,
    #[serde(default)]
    pub(crate) percent_of_total: Option<f64>,
    #[serde(default)]
    pub(crate) categories: Vec<CategoryNode>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CategoryNode {
    pub(crate) name: String,
    #[serde(default)]
    pub(crate) total_emissions: Option<f64>,
    #[serde(default)]
    pub(crate) percent_of_scope: Option<f64>,
    #[serde(default)]
    pub(crate) percent_of_total: Option<f64>,
    #[serde(default)]
    pub(crate) activity_count: Option<u32>,
}

/// Number-or-text cell, as exported from the source spreadsheet.
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum NumOrText {
    Num(f64),
    Text(String),
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ActivityNode {
    pub(crate) id: u32,
    pub(crate) scope: u32,
    pub(crate) category: String,
    #[serde(default)]
    pub(crate) activity: Option<String>,
    #[serde(default)]
    pub(crate) description: Option<String>,
    #[serde(default)]
    pub(crate) activity_data_value: Option<NumOrText>,
    #[serde(default)]
    pub(crate) activity_data_unit: Option<String>,
    #[serde(default)]
    pub(crate) emission_factor: Option<NumOrText>,
    #[serde(default)]
    pub(crate) ef_unit: Option<String>,

    // Key casing in the export is `co2EF`, not camelCase `co2Ef`
    #[serde(rename = "co2EF", default)]
    pub(crate) co2_ef: Option<f64>,
    #[serde(rename = "ch4EF", default)]
    pub(crate) ch4_ef: Option<f64>,
    #[serde(rename = "n2oEF", default)]
    pub(crate) n2o_ef: Option<f64>,
    #[serde(rename = "fgasEF", default)]
    pub(crate) fgas_ef: Option<f64>,

    #[serde(default)]
    pub(crate) co2_emissions: Option<f64>,
    #[serde(default)]
    pub(crate) ch4_emissions: Option<f64>,
    #[serde(default)]
    pub(crate) n2o_emissions: Option<f64>,
    #[serde(default)]
    pub(crate) fgas_emissions: Option<f64>,
    #[serde(default)]
    pub(crate) total_emissions: Option<f64>,

    #[serde(default)]
    pub(crate) percent_of_category: Option<f64>,
    #[serde(default)]
    pub(crate) percent_of_scope: Option<f64>,
    #[serde(default)]
    pub(crate) percent_of_total: Option<f64>,

    #[serde(default)]
    pub(crate) ad_source: Option<String>,
    #[serde(default)]
    pub(crate) ef_source: Option<String>,
    #[serde(default)]
    pub(crate) comments: Option<String>,
}

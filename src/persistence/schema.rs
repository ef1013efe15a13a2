// * On-disk record shapes. data.json carries one UnitRecord per directory
// * with the stat keys flattened to the top level; index.json is a flat
// * array of IndexEntry projections rebuilt from whatever is on disk.

use serde::{Deserialize, Serialize};

// * Known stat keys. Keys are present only when the page carried the label;
// * unit_type is the single textual stat and keeps its raw value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UnitStats {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub squad_points: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stamina: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub durability: Option<u32>,
}

// * One ability block extracted from a unit page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Ability {
    pub title: String,
    pub text: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SourceInfo {
    // * Unix seconds at extraction time.
    pub scraped_at: u64,
}

// * One harvested unit, exactly the data.json shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UnitRecord {
    pub id: String,
    pub url: String,
    pub name: String,
    pub portrait: Option<String>,
    #[serde(flatten)]
    pub stats: UnitStats,
    pub factions: Option<Vec<String>>,
    pub abilities: Vec<Ability>,
    pub source: SourceInfo,
}

impl UnitRecord {
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

// * Gallery projection of one stored unit. id comes from the directory
// * name, which is the slug the store keyed the unit by.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IndexEntry {
    pub id: String,
    pub name: String,
    pub unit_type: Option<String>,
    pub squad_points: Option<u32>,
    pub factions: Vec<String>,
    pub portrait: String,
}

impl IndexEntry {
    pub fn from_record(dir_name: &str, record: &UnitRecord, asset_path: String) -> Self {
        let name = if record.name.is_empty() {
            dir_name.to_string()
        } else {
            record.name.clone()
        };

        Self {
            id: dir_name.to_string(),
            name,
            unit_type: record.stats.unit_type.clone(),
            squad_points: record.stats.squad_points,
            factions: record.factions.clone().unwrap_or_default(),
            portrait: asset_path,
        }
    }
}

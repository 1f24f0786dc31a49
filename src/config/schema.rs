use serde::{Deserialize, Serialize};

use crate::records::ColumnMap;
use crate::scoring::ScoringSettings;

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub scoring: Option<ScoringSettings>,
    pub columns: Option<ColumnMap>,
}

//! Account domain models.

use serde::{Deserialize, Serialize};

use crate::money::{Money, Percentage};

/// A named party entitled to a share of every contribution made to an
/// account, together with the running total saved on their behalf.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Beneficiary {
    pub name: String,
    pub allocation_percentage: Percentage,
    pub savings: Money,
}

impl Beneficiary {
    /// Creates a beneficiary with no savings yet.
    pub fn new(name: impl Into<String>, allocation_percentage: Percentage) -> Self {
        Self {
            name: name.into(),
            allocation_percentage,
            savings: Money::zero(),
        }
    }

    /// Returns a copy of this beneficiary with the amount added to savings.
    pub fn credit(&self, amount: Money) -> Beneficiary {
        Beneficiary {
            savings: self.savings + amount,
            ..self.clone()
        }
    }
}

/// Domain model representing a rewards account in the system.
///
/// Beneficiaries are kept in the order the repository returns them
/// (ascending name order for the SQLite implementation).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub number: String,
    pub name: String,
    pub beneficiaries: Vec<Beneficiary>,
}

impl Account {
    /// Looks up a beneficiary by name.
    pub fn beneficiary(&self, name: &str) -> Option<&Beneficiary> {
        self.beneficiaries.iter().find(|b| b.name == name)
    }

    /// Returns true if any beneficiaries are registered.
    pub fn has_beneficiaries(&self) -> bool {
        !self.beneficiaries.is_empty()
    }
}

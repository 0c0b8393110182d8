//! Database models for accounts, their credit cards, and beneficiaries.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use rewards_core::accounts::{Account, Beneficiary};
use rewards_core::errors::Result;

use crate::utils::{parse_money_column, parse_percentage_column};

/// Database model for accounts
#[derive(
    Queryable,
    Identifiable,
    Insertable,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::accounts)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct AccountDB {
    pub id: String,
    pub number: String,
    pub name: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Database model for the credit cards linked to an account
#[derive(
    Queryable,
    Identifiable,
    Insertable,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::account_credit_cards)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct AccountCreditCardDB {
    pub id: String,
    pub account_id: String,
    pub number: String,
}

/// Database model for account beneficiaries
#[derive(
    Queryable,
    Identifiable,
    Insertable,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::account_beneficiaries)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct AccountBeneficiaryDB {
    pub id: String,
    pub account_id: String,
    pub name: String,
    pub allocation_percentage: String,
    pub savings: String,
}

impl AccountBeneficiaryDB {
    /// Parses the stored row back into its domain form.
    pub fn to_domain(&self) -> Result<Beneficiary> {
        Ok(Beneficiary {
            name: self.name.clone(),
            allocation_percentage: parse_percentage_column(
                "allocation_percentage",
                &self.allocation_percentage,
            )?,
            savings: parse_money_column("savings", &self.savings)?,
        })
    }
}

/// Assembles a domain account from its header row and beneficiary rows.
pub fn assemble_account(
    header: AccountDB,
    beneficiaries: &[AccountBeneficiaryDB],
) -> Result<Account> {
    let beneficiaries = beneficiaries
        .iter()
        .map(AccountBeneficiaryDB::to_domain)
        .collect::<Result<Vec<_>>>()?;
    Ok(Account {
        id: header.id,
        number: header.number,
        name: header.name,
        beneficiaries,
    })
}

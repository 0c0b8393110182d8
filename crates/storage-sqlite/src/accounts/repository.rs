use std::sync::Arc;

use chrono::Utc;
use diesel::prelude::*;
use uuid::Uuid;

use rewards_core::accounts::{Account, AccountRepositoryTrait};
use rewards_core::errors::{Error, Result};

use super::model::{assemble_account, AccountBeneficiaryDB, AccountCreditCardDB, AccountDB};
use crate::db::{get_connection, DbPool};
use crate::errors::StorageError;
use crate::schema::{account_beneficiaries, account_credit_cards, accounts};
use crate::utils::format_timestamp;

/// Repository for managing account data in the database
pub struct AccountRepository {
    pool: Arc<DbPool>,
}

impl AccountRepository {
    /// Creates a new AccountRepository instance
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }

    /// Inserts an account together with its credit cards and beneficiaries.
    ///
    /// Fresh row ids are generated on the way in, so the returned account is
    /// the stored one rather than the input.
    pub fn create(&self, account: &Account, credit_card_numbers: &[&str]) -> Result<Account> {
        let mut conn = get_connection(&self.pool)?;

        let account_id = Uuid::new_v4().to_string();
        let now = format_timestamp(Utc::now());

        let header = AccountDB {
            id: account_id.clone(),
            number: account.number.clone(),
            name: account.name.clone(),
            created_at: now.clone(),
            updated_at: now,
        };
        let cards: Vec<AccountCreditCardDB> = credit_card_numbers
            .iter()
            .map(|number| AccountCreditCardDB {
                id: Uuid::new_v4().to_string(),
                account_id: account_id.clone(),
                number: (*number).to_string(),
            })
            .collect();
        let beneficiaries: Vec<AccountBeneficiaryDB> = account
            .beneficiaries
            .iter()
            .map(|b| AccountBeneficiaryDB {
                id: Uuid::new_v4().to_string(),
                account_id: account_id.clone(),
                name: b.name.clone(),
                allocation_percentage: b.allocation_percentage.as_decimal().to_string(),
                savings: b.savings.amount().to_string(),
            })
            .collect();

        conn.immediate_transaction::<_, StorageError, _>(|c| {
            diesel::insert_into(accounts::table)
                .values(&header)
                .execute(c)?;
            if !cards.is_empty() {
                diesel::insert_into(account_credit_cards::table)
                    .values(&cards)
                    .execute(c)?;
            }
            if !beneficiaries.is_empty() {
                diesel::insert_into(account_beneficiaries::table)
                    .values(&beneficiaries)
                    .execute(c)?;
            }
            Ok(())
        })
        .map_err(Error::from)?;

        Ok(Account {
            id: account_id,
            ..account.clone()
        })
    }
}

impl AccountRepositoryTrait for AccountRepository {
    fn find_by_credit_card(&self, credit_card_number: &str) -> Result<Option<Account>> {
        let mut conn = get_connection(&self.pool)?;

        let header = accounts::table
            .inner_join(account_credit_cards::table)
            .filter(account_credit_cards::number.eq(credit_card_number))
            .select(AccountDB::as_select())
            .first::<AccountDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;

        let header = match header {
            Some(header) => header,
            None => return Ok(None),
        };

        let beneficiaries = account_beneficiaries::table
            .filter(account_beneficiaries::account_id.eq(&header.id))
            .order(account_beneficiaries::name.asc())
            .select(AccountBeneficiaryDB::as_select())
            .load::<AccountBeneficiaryDB>(&mut conn)
            .map_err(StorageError::from)?;

        assemble_account(header, &beneficiaries).map(Some)
    }

    fn update_beneficiaries(&self, account: &Account) -> Result<()> {
        let mut conn = get_connection(&self.pool)?;

        conn.immediate_transaction::<_, StorageError, _>(|c| {
            for beneficiary in &account.beneficiaries {
                diesel::update(
                    account_beneficiaries::table
                        .filter(account_beneficiaries::account_id.eq(&account.id))
                        .filter(account_beneficiaries::name.eq(&beneficiary.name)),
                )
                .set((
                    account_beneficiaries::allocation_percentage
                        .eq(beneficiary.allocation_percentage.as_decimal().to_string()),
                    account_beneficiaries::savings.eq(beneficiary.savings.amount().to_string()),
                ))
                .execute(c)?;
            }
            Ok(())
        })
        .map_err(Error::from)
    }
}

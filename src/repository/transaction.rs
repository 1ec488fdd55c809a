use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::domain::transaction::{NewTransaction, Transaction};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DocumentRepository, TransactionReader, TransactionWriter};
use crate::storage::StoreKey;

impl TransactionReader for DocumentRepository {
    fn list_transactions(&self) -> RepositoryResult<Vec<Transaction>> {
        self.load_vec(StoreKey::Transactions)
    }

    fn get_transaction_by_id(&self, id: Uuid) -> RepositoryResult<Option<Transaction>> {
        Ok(self.list_transactions()?.into_iter().find(|t| t.id == id))
    }

    fn list_transactions_by_date(&self, date: NaiveDate) -> RepositoryResult<Vec<Transaction>> {
        Ok(self
            .list_transactions()?
            .into_iter()
            .filter(|t| t.date == date)
            .collect())
    }

    fn list_transactions_in_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> RepositoryResult<Vec<Transaction>> {
        Ok(self
            .list_transactions()?
            .into_iter()
            .filter(|t| t.date >= start && t.date <= end)
            .collect())
    }
}

impl TransactionWriter for DocumentRepository {
    fn create_transaction(
        &self,
        new_transaction: &NewTransaction,
    ) -> RepositoryResult<Transaction> {
        let mut transactions = self.list_transactions()?;
        let transaction = Transaction {
            id: Uuid::new_v4(),
            client_id: new_transaction.client_id,
            client_name: new_transaction.client_name.clone(),
            client_phone: new_transaction.client_phone.clone(),
            worker: new_transaction.worker.clone(),
            items: new_transaction.items.clone(),
            total: new_transaction.total,
            payment_method: new_transaction.payment_method,
            date: new_transaction.date,
            time: new_transaction.time,
            created_at: Utc::now(),
        };
        transactions.push(transaction.clone());
        self.save_vec(StoreKey::Transactions, &transactions)?;
        Ok(transaction)
    }

    fn delete_transaction(&self, id: Uuid) -> RepositoryResult<()> {
        let mut transactions = self.list_transactions()?;
        transactions.retain(|t| t.id != id);
        self.save_vec(StoreKey::Transactions, &transactions)
    }
}

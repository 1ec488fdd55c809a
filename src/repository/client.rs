use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::domain::client::{Client, NewClient, UpdateClient};
use crate::domain::types::normalize_phone;
use crate::repository::errors::RepositoryResult;
use crate::repository::{ClientReader, ClientWriter, DocumentRepository};
use crate::storage::StoreKey;

impl ClientReader for DocumentRepository {
    fn list_clients(&self) -> RepositoryResult<Vec<Client>> {
        self.load_vec(StoreKey::Clients)
    }

    fn get_client_by_id(&self, id: Uuid) -> RepositoryResult<Option<Client>> {
        Ok(self.list_clients()?.into_iter().find(|c| c.id == id))
    }

    fn find_client_by_phone(&self, phone: &str) -> RepositoryResult<Option<Client>> {
        let Some(needle) = normalize_phone(phone) else {
            return Ok(None);
        };
        Ok(self
            .list_clients()?
            .into_iter()
            .find(|c| c.phone == needle))
    }
}

impl ClientWriter for DocumentRepository {
    fn create_client(&self, new_client: &NewClient) -> RepositoryResult<Client> {
        let mut clients = self.list_clients()?;
        let client = Client {
            id: Uuid::new_v4(),
            name: new_client.name.as_str().to_string(),
            phone: new_client.phone.clone(),
            email: new_client.email.clone().unwrap_or_default(),
            notes: new_client.notes.clone().unwrap_or_default(),
            visits: 0,
            total_spent: Decimal::ZERO,
            last_visit: None,
            created_at: Utc::now(),
        };
        clients.push(client.clone());
        self.save_vec(StoreKey::Clients, &clients)?;
        Ok(client)
    }

    fn update_client(&self, id: Uuid, updates: &UpdateClient) -> RepositoryResult<Option<Client>> {
        let mut clients = self.list_clients()?;
        let Some(client) = clients.iter_mut().find(|c| c.id == id) else {
            return Ok(None);
        };
        if let Some(name) = &updates.name {
            client.name = name.as_str().to_string();
        }
        if let Some(phone) = &updates.phone {
            client.phone = normalize_phone(phone).unwrap_or_default();
        }
        if let Some(email) = &updates.email {
            client.email = email.clone();
        }
        if let Some(notes) = &updates.notes {
            client.notes = notes.clone();
        }
        let updated = client.clone();
        self.save_vec(StoreKey::Clients, &clients)?;
        Ok(Some(updated))
    }

    fn record_client_visit(
        &self,
        id: Uuid,
        amount: Decimal,
    ) -> RepositoryResult<Option<Client>> {
        let mut clients = self.list_clients()?;
        let Some(client) = clients.iter_mut().find(|c| c.id == id) else {
            return Ok(None);
        };
        client.visits += 1;
        client.total_spent += amount;
        client.last_visit = Some(Utc::now());
        let updated = client.clone();
        self.save_vec(StoreKey::Clients, &clients)?;
        Ok(Some(updated))
    }

    fn delete_client(&self, id: Uuid) -> RepositoryResult<()> {
        let mut clients = self.list_clients()?;
        clients.retain(|c| c.id != id);
        self.save_vec(StoreKey::Clients, &clients)
    }
}

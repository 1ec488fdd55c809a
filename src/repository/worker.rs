use chrono::Utc;
use uuid::Uuid;

use crate::domain::worker::{NewWorker, UpdateWorker, Worker};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DocumentRepository, WorkerReader, WorkerWriter};
use crate::storage::StoreKey;

impl WorkerReader for DocumentRepository {
    fn list_workers(&self) -> RepositoryResult<Vec<Worker>> {
        self.load_vec(StoreKey::Workers)
    }

    fn list_active_workers(&self) -> RepositoryResult<Vec<Worker>> {
        Ok(self
            .list_workers()?
            .into_iter()
            .filter(|w| w.active)
            .collect())
    }

    fn get_worker_by_id(&self, id: Uuid) -> RepositoryResult<Option<Worker>> {
        Ok(self.list_workers()?.into_iter().find(|w| w.id == id))
    }
}

impl WorkerWriter for DocumentRepository {
    fn create_worker(&self, new_worker: &NewWorker) -> RepositoryResult<Worker> {
        let mut workers = self.list_workers()?;
        let worker = Worker {
            id: Uuid::new_v4(),
            name: new_worker.name.as_str().to_string(),
            phone: new_worker.phone.clone().unwrap_or_default(),
            email: new_worker.email.clone().unwrap_or_default(),
            color: new_worker.color.clone().unwrap_or_default(),
            specialties: new_worker.specialties.clone(),
            schedule: new_worker.schedule.clone(),
            active: true,
            created_at: Utc::now(),
        };
        workers.push(worker.clone());
        self.save_vec(StoreKey::Workers, &workers)?;
        Ok(worker)
    }

    fn update_worker(&self, id: Uuid, updates: &UpdateWorker) -> RepositoryResult<Option<Worker>> {
        let mut workers = self.list_workers()?;
        let Some(worker) = workers.iter_mut().find(|w| w.id == id) else {
            return Ok(None);
        };
        if let Some(name) = &updates.name {
            worker.name = name.as_str().to_string();
        }
        if let Some(phone) = &updates.phone {
            worker.phone = phone.clone();
        }
        if let Some(email) = &updates.email {
            worker.email = email.clone();
        }
        if let Some(color) = &updates.color {
            worker.color = color.clone();
        }
        if let Some(specialties) = &updates.specialties {
            worker.specialties = specialties.clone();
        }
        if let Some(schedule) = &updates.schedule {
            worker.schedule = schedule.clone();
        }
        if let Some(active) = updates.active {
            worker.active = active;
        }
        let updated = worker.clone();
        self.save_vec(StoreKey::Workers, &workers)?;
        Ok(Some(updated))
    }

    fn delete_worker(&self, id: Uuid) -> RepositoryResult<()> {
        let mut workers = self.list_workers()?;
        workers.retain(|w| w.id != id);
        self.save_vec(StoreKey::Workers, &workers)
    }
}

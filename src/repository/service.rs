use uuid::Uuid;

use crate::domain::service::{NewService, Service, UpdateService};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DocumentRepository, ServiceReader, ServiceWriter};
use crate::storage::StoreKey;

impl ServiceReader for DocumentRepository {
    fn list_services(&self) -> RepositoryResult<Vec<Service>> {
        self.load_vec(StoreKey::Services)
    }

    fn list_active_services(&self) -> RepositoryResult<Vec<Service>> {
        let mut services: Vec<Service> = self
            .list_services()?
            .into_iter()
            .filter(|s| s.active)
            .collect();
        services.sort_by_key(|s| s.order);
        Ok(services)
    }

    fn get_service_by_id(&self, id: Uuid) -> RepositoryResult<Option<Service>> {
        Ok(self.list_services()?.into_iter().find(|s| s.id == id))
    }
}

impl ServiceWriter for DocumentRepository {
    fn create_service(&self, new_service: &NewService) -> RepositoryResult<Service> {
        let mut services = self.list_services()?;
        let service = Service {
            id: Uuid::new_v4(),
            name: new_service.name.as_str().to_string(),
            duration: new_service.duration,
            price: new_service.price,
            icon: new_service.icon.clone().unwrap_or_default(),
            description: new_service.description.clone().unwrap_or_default(),
            active: true,
            order: services.len() as i32 + 1,
        };
        services.push(service.clone());
        self.save_vec(StoreKey::Services, &services)?;
        Ok(service)
    }

    fn update_service(
        &self,
        id: Uuid,
        updates: &UpdateService,
    ) -> RepositoryResult<Option<Service>> {
        let mut services = self.list_services()?;
        let Some(service) = services.iter_mut().find(|s| s.id == id) else {
            return Ok(None);
        };
        if let Some(name) = &updates.name {
            service.name = name.as_str().to_string();
        }
        if let Some(duration) = updates.duration {
            service.duration = duration;
        }
        if let Some(price) = updates.price {
            service.price = price;
        }
        if let Some(icon) = &updates.icon {
            service.icon = icon.clone();
        }
        if let Some(description) = &updates.description {
            service.description = description.clone();
        }
        if let Some(active) = updates.active {
            service.active = active;
        }
        if let Some(order) = updates.order {
            service.order = order;
        }
        let updated = service.clone();
        self.save_vec(StoreKey::Services, &services)?;
        Ok(Some(updated))
    }

    fn delete_service(&self, id: Uuid) -> RepositoryResult<()> {
        let mut services = self.list_services()?;
        services.retain(|s| s.id != id);
        self.save_vec(StoreKey::Services, &services)
    }
}

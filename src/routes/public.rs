//! Public booking endpoints consumed by the landing page widget.

use actix_web::{get, post, web, HttpResponse};

use crate::domain::booking::BookingStatus;
use crate::forms::booking::{BookingForm, SlotsQuery};
use crate::repository::{DocumentRepository, ServiceReader, WorkerReader};
use crate::routes::validated;
use crate::services::booking::create_booking;
use crate::services::slots::{available_slots, available_slots_any_worker};
use crate::services::ServiceError;

#[get("/services")]
pub async fn list_services(
    repo: web::Data<DocumentRepository>,
) -> Result<HttpResponse, ServiceError> {
    let services = repo.list_active_services()?;
    Ok(HttpResponse::Ok().json(services))
}

#[get("/workers")]
pub async fn list_workers(
    repo: web::Data<DocumentRepository>,
) -> Result<HttpResponse, ServiceError> {
    let workers = repo.list_active_workers()?;
    Ok(HttpResponse::Ok().json(workers))
}

#[get("/slots")]
pub async fn list_slots(
    repo: web::Data<DocumentRepository>,
    query: web::Query<SlotsQuery>,
) -> Result<HttpResponse, ServiceError> {
    let query = query.into_inner();
    let service = repo
        .get_service_by_id(query.service_id)?
        .ok_or(ServiceError::NotFound)?;

    let slots = match query.worker_id {
        Some(worker_id) => {
            available_slots(repo.get_ref(), query.date, worker_id, service.duration)?
        }
        None => available_slots_any_worker(repo.get_ref(), query.date, service.duration)?,
    };

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "date": query.date,
        "slots": slots,
    })))
}

#[post("/bookings")]
pub async fn create_public_booking(
    repo: web::Data<DocumentRepository>,
    form: web::Json<BookingForm>,
) -> Result<HttpResponse, ServiceError> {
    let form = validated(form.into_inner())?;
    let request = form.into_request(BookingStatus::Pending)?;
    let booking = create_booking(repo.get_ref(), request)?;
    Ok(HttpResponse::Created().json(booking))
}

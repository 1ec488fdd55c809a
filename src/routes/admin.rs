//! Admin panel endpoints, guarded by the cookie session flag.

use actix_session::Session;
use actix_web::{delete, get, patch, post, web, HttpResponse};
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use uuid::Uuid;

use crate::domain::booking::{Booking, BookingStatus};
use crate::domain::client::UpdateClient;
use crate::domain::service::{NewService, UpdateService};
use crate::domain::types::NonEmptyString;
use crate::domain::worker::{NewWorker, UpdateWorker};
use crate::forms::auth::{ChangePasswordForm, LoginForm};
use crate::forms::booking::BookingForm;
use crate::forms::catalog::{
    AddServiceForm, AddWorkerForm, EditServiceForm, EditWorkerForm, SettingsForm,
};
use crate::forms::pos::SaleForm;
use crate::repository::{
    BookingReader, BookingWriter, ClientReader, ClientWriter, DocumentRepository,
    NotificationReader, NotificationWriter, ServiceReader, ServiceWriter, SettingsReader,
    SettingsWriter, TransactionReader, WorkerReader, WorkerWriter,
};
use crate::routes::validated;
use crate::services::auth::{change_password, login, logout, require_admin};
use crate::services::backup::{export_data, reset_data};
use crate::services::booking::{
    cancel_booking, complete_booking, confirm_booking, create_booking,
};
use crate::services::clients::client_stats;
use crate::services::pos::record_sale;
use crate::services::reports::{daily_report, monthly_report, weekly_report};
use crate::services::{ServiceError, ServiceResult};

// ---- session ----

#[post("/login")]
pub async fn admin_login(
    repo: web::Data<DocumentRepository>,
    session: Session,
    form: web::Json<LoginForm>,
) -> Result<HttpResponse, ServiceError> {
    let form = validated(form.into_inner())?;
    login(repo.get_ref(), &session, &form.username, &form.password)?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "ok": true })))
}

#[post("/logout")]
pub async fn admin_logout(session: Session) -> HttpResponse {
    logout(&session);
    HttpResponse::Ok().json(serde_json::json!({ "ok": true }))
}

#[post("/password")]
pub async fn admin_change_password(
    repo: web::Data<DocumentRepository>,
    session: Session,
    form: web::Json<ChangePasswordForm>,
) -> Result<HttpResponse, ServiceError> {
    require_admin(&session)?;
    let form = validated(form.into_inner())?;
    change_password(repo.get_ref(), &form.old_password, &form.new_password)?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "ok": true })))
}

// ---- bookings ----

#[derive(Deserialize)]
pub struct BookingListQuery {
    pub date: Option<NaiveDate>,
    pub status: Option<BookingStatus>,
}

#[get("/bookings")]
pub async fn list_bookings(
    repo: web::Data<DocumentRepository>,
    session: Session,
    query: web::Query<BookingListQuery>,
) -> Result<HttpResponse, ServiceError> {
    require_admin(&session)?;
    let query = query.into_inner();
    let mut bookings = match query.date {
        Some(date) => repo.list_bookings_by_date(date)?,
        None => repo.list_upcoming_bookings(Local::now().date_naive())?,
    };
    if let Some(status) = query.status {
        bookings.retain(|b| b.status == status);
    }
    Ok(HttpResponse::Ok().json(bookings))
}

#[post("/bookings")]
pub async fn create_admin_booking(
    repo: web::Data<DocumentRepository>,
    session: Session,
    form: web::Json<BookingForm>,
) -> Result<HttpResponse, ServiceError> {
    require_admin(&session)?;
    let form = validated(form.into_inner())?;
    let request = form.into_request(BookingStatus::Confirmed)?;
    let booking = create_booking(repo.get_ref(), request)?;
    Ok(HttpResponse::Created().json(booking))
}

/// Lifecycle responses carry the updated booking, or `null` when the id was
/// unknown (soft no-op).
fn lifecycle_response(booking: ServiceResult<Option<Booking>>) -> Result<HttpResponse, ServiceError> {
    Ok(HttpResponse::Ok().json(booking?))
}

#[post("/bookings/{id}/confirm")]
pub async fn confirm_booking_route(
    repo: web::Data<DocumentRepository>,
    session: Session,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, ServiceError> {
    require_admin(&session)?;
    lifecycle_response(confirm_booking(repo.get_ref(), id.into_inner()))
}

#[post("/bookings/{id}/complete")]
pub async fn complete_booking_route(
    repo: web::Data<DocumentRepository>,
    session: Session,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, ServiceError> {
    require_admin(&session)?;
    lifecycle_response(complete_booking(repo.get_ref(), id.into_inner()))
}

#[post("/bookings/{id}/cancel")]
pub async fn cancel_booking_route(
    repo: web::Data<DocumentRepository>,
    session: Session,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, ServiceError> {
    require_admin(&session)?;
    lifecycle_response(cancel_booking(repo.get_ref(), id.into_inner()))
}

#[delete("/bookings/{id}")]
pub async fn delete_booking(
    repo: web::Data<DocumentRepository>,
    session: Session,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, ServiceError> {
    require_admin(&session)?;
    BookingWriter::delete_booking(repo.get_ref(), id.into_inner())?;
    Ok(HttpResponse::NoContent().finish())
}

// ---- catalog ----

#[get("/services")]
pub async fn list_all_services(
    repo: web::Data<DocumentRepository>,
    session: Session,
) -> Result<HttpResponse, ServiceError> {
    require_admin(&session)?;
    Ok(HttpResponse::Ok().json(repo.list_services()?))
}

#[post("/services")]
pub async fn add_service(
    repo: web::Data<DocumentRepository>,
    session: Session,
    form: web::Json<AddServiceForm>,
) -> Result<HttpResponse, ServiceError> {
    require_admin(&session)?;
    let new_service: NewService = validated(form.into_inner())?.try_into()?;
    let service = repo.create_service(&new_service)?;
    Ok(HttpResponse::Created().json(service))
}

#[patch("/services/{id}")]
pub async fn edit_service(
    repo: web::Data<DocumentRepository>,
    session: Session,
    id: web::Path<Uuid>,
    form: web::Json<EditServiceForm>,
) -> Result<HttpResponse, ServiceError> {
    require_admin(&session)?;
    let updates: UpdateService = form.into_inner().try_into()?;
    Ok(HttpResponse::Ok().json(repo.update_service(id.into_inner(), &updates)?))
}

#[delete("/services/{id}")]
pub async fn remove_service(
    repo: web::Data<DocumentRepository>,
    session: Session,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, ServiceError> {
    require_admin(&session)?;
    repo.delete_service(id.into_inner())?;
    Ok(HttpResponse::NoContent().finish())
}

// ---- workers ----

#[get("/workers")]
pub async fn list_all_workers(
    repo: web::Data<DocumentRepository>,
    session: Session,
) -> Result<HttpResponse, ServiceError> {
    require_admin(&session)?;
    Ok(HttpResponse::Ok().json(repo.list_workers()?))
}

#[post("/workers")]
pub async fn add_worker(
    repo: web::Data<DocumentRepository>,
    session: Session,
    form: web::Json<AddWorkerForm>,
) -> Result<HttpResponse, ServiceError> {
    require_admin(&session)?;
    let new_worker: NewWorker = validated(form.into_inner())?.try_into()?;
    let worker = repo.create_worker(&new_worker)?;
    Ok(HttpResponse::Created().json(worker))
}

#[patch("/workers/{id}")]
pub async fn edit_worker(
    repo: web::Data<DocumentRepository>,
    session: Session,
    id: web::Path<Uuid>,
    form: web::Json<EditWorkerForm>,
) -> Result<HttpResponse, ServiceError> {
    require_admin(&session)?;
    let updates: UpdateWorker = form.into_inner().try_into()?;
    Ok(HttpResponse::Ok().json(repo.update_worker(id.into_inner(), &updates)?))
}

#[delete("/workers/{id}")]
pub async fn remove_worker(
    repo: web::Data<DocumentRepository>,
    session: Session,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, ServiceError> {
    require_admin(&session)?;
    repo.delete_worker(id.into_inner())?;
    Ok(HttpResponse::NoContent().finish())
}

// ---- clients ----

#[get("/clients")]
pub async fn list_clients(
    repo: web::Data<DocumentRepository>,
    session: Session,
) -> Result<HttpResponse, ServiceError> {
    require_admin(&session)?;
    Ok(HttpResponse::Ok().json(repo.list_clients()?))
}

#[get("/clients/stats")]
pub async fn clients_stats(
    repo: web::Data<DocumentRepository>,
    session: Session,
) -> Result<HttpResponse, ServiceError> {
    require_admin(&session)?;
    Ok(HttpResponse::Ok().json(client_stats(repo.get_ref())?))
}

#[get("/clients/{id}")]
pub async fn get_client(
    repo: web::Data<DocumentRepository>,
    session: Session,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, ServiceError> {
    require_admin(&session)?;
    Ok(HttpResponse::Ok().json(repo.get_client_by_id(id.into_inner())?))
}

#[derive(Deserialize, Default)]
pub struct EditClientForm {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub notes: Option<String>,
}

#[patch("/clients/{id}")]
pub async fn edit_client(
    repo: web::Data<DocumentRepository>,
    session: Session,
    id: web::Path<Uuid>,
    form: web::Json<EditClientForm>,
) -> Result<HttpResponse, ServiceError> {
    require_admin(&session)?;
    let form = form.into_inner();
    let updates = UpdateClient {
        name: form.name.map(NonEmptyString::new).transpose()?,
        phone: form.phone,
        email: form.email,
        notes: form.notes,
    };
    Ok(HttpResponse::Ok().json(repo.update_client(id.into_inner(), &updates)?))
}

#[delete("/clients/{id}")]
pub async fn remove_client(
    repo: web::Data<DocumentRepository>,
    session: Session,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, ServiceError> {
    require_admin(&session)?;
    repo.delete_client(id.into_inner())?;
    Ok(HttpResponse::NoContent().finish())
}

// ---- point of sale ----

#[post("/sales")]
pub async fn create_sale(
    repo: web::Data<DocumentRepository>,
    session: Session,
    form: web::Json<SaleForm>,
) -> Result<HttpResponse, ServiceError> {
    require_admin(&session)?;
    let request = validated(form.into_inner())?.into_request()?;
    let transaction = record_sale(repo.get_ref(), request)?;
    Ok(HttpResponse::Created().json(transaction))
}

#[derive(Deserialize)]
pub struct SalesQuery {
    pub date: Option<NaiveDate>,
}

#[get("/sales")]
pub async fn list_sales(
    repo: web::Data<DocumentRepository>,
    session: Session,
    query: web::Query<SalesQuery>,
) -> Result<HttpResponse, ServiceError> {
    require_admin(&session)?;
    let transactions = match query.into_inner().date {
        Some(date) => repo.list_transactions_by_date(date)?,
        None => repo.list_transactions()?,
    };
    Ok(HttpResponse::Ok().json(transactions))
}

// ---- reports ----

#[derive(Deserialize)]
pub struct DailyReportQuery {
    pub date: Option<NaiveDate>,
}

#[get("/reports/daily")]
pub async fn report_daily(
    repo: web::Data<DocumentRepository>,
    session: Session,
    query: web::Query<DailyReportQuery>,
) -> Result<HttpResponse, ServiceError> {
    require_admin(&session)?;
    let date = query.into_inner().date.unwrap_or_else(|| Local::now().date_naive());
    Ok(HttpResponse::Ok().json(daily_report(repo.get_ref(), date)?))
}

#[derive(Deserialize)]
pub struct WeeklyReportQuery {
    pub start: NaiveDate,
}

#[get("/reports/weekly")]
pub async fn report_weekly(
    repo: web::Data<DocumentRepository>,
    session: Session,
    query: web::Query<WeeklyReportQuery>,
) -> Result<HttpResponse, ServiceError> {
    require_admin(&session)?;
    Ok(HttpResponse::Ok().json(weekly_report(repo.get_ref(), query.into_inner().start)?))
}

#[derive(Deserialize)]
pub struct MonthlyReportQuery {
    pub year: i32,
    pub month: u32,
}

#[get("/reports/monthly")]
pub async fn report_monthly(
    repo: web::Data<DocumentRepository>,
    session: Session,
    query: web::Query<MonthlyReportQuery>,
) -> Result<HttpResponse, ServiceError> {
    require_admin(&session)?;
    let query = query.into_inner();
    Ok(HttpResponse::Ok().json(monthly_report(repo.get_ref(), query.year, query.month)?))
}

// ---- notifications ----

#[get("/notifications")]
pub async fn list_notifications(
    repo: web::Data<DocumentRepository>,
    session: Session,
) -> Result<HttpResponse, ServiceError> {
    require_admin(&session)?;
    Ok(HttpResponse::Ok().json(repo.list_notifications()?))
}

/// Polled by the admin badge; only reads.
#[get("/notifications/unread_count")]
pub async fn unread_notifications(
    repo: web::Data<DocumentRepository>,
    session: Session,
) -> Result<HttpResponse, ServiceError> {
    require_admin(&session)?;
    let count = repo.unread_notification_count()?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "unread": count })))
}

#[post("/notifications/{id}/read")]
pub async fn mark_notification_read(
    repo: web::Data<DocumentRepository>,
    session: Session,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, ServiceError> {
    require_admin(&session)?;
    NotificationWriter::mark_notification_read(repo.get_ref(), id.into_inner())?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "ok": true })))
}

#[post("/notifications/read_all")]
pub async fn mark_all_notifications_read(
    repo: web::Data<DocumentRepository>,
    session: Session,
) -> Result<HttpResponse, ServiceError> {
    require_admin(&session)?;
    repo.mark_all_notifications_read()?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "ok": true })))
}

#[delete("/notifications")]
pub async fn clear_notifications(
    repo: web::Data<DocumentRepository>,
    session: Session,
) -> Result<HttpResponse, ServiceError> {
    require_admin(&session)?;
    NotificationWriter::clear_notifications(repo.get_ref())?;
    Ok(HttpResponse::NoContent().finish())
}

// ---- settings, backup ----

#[get("/settings")]
pub async fn get_settings(
    repo: web::Data<DocumentRepository>,
    session: Session,
) -> Result<HttpResponse, ServiceError> {
    require_admin(&session)?;
    Ok(HttpResponse::Ok().json(SettingsReader::get_settings(repo.get_ref())?))
}

#[patch("/settings")]
pub async fn edit_settings(
    repo: web::Data<DocumentRepository>,
    session: Session,
    form: web::Json<SettingsForm>,
) -> Result<HttpResponse, ServiceError> {
    require_admin(&session)?;
    let updates = form.into_inner().into_updates()?;
    Ok(HttpResponse::Ok().json(repo.update_settings(&updates)?))
}

#[get("/export")]
pub async fn export_backup(
    repo: web::Data<DocumentRepository>,
    session: Session,
) -> Result<HttpResponse, ServiceError> {
    require_admin(&session)?;
    Ok(HttpResponse::Ok().json(export_data(repo.get_ref())?))
}

#[derive(Deserialize)]
pub struct ResetForm {
    #[serde(default)]
    pub confirm: bool,
}

#[post("/reset")]
pub async fn reset_all_data(
    repo: web::Data<DocumentRepository>,
    session: Session,
    form: web::Json<ResetForm>,
) -> Result<HttpResponse, ServiceError> {
    require_admin(&session)?;
    if !form.confirm {
        return Err(ServiceError::Validation(
            "reset requires explicit confirmation".to_string(),
        ));
    }
    reset_data(repo.get_ref())?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "ok": true })))
}

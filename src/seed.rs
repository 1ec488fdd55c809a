//! First-boot seeding: missing documents are filled with the shop's default
//! catalog, staff, settings and admin account so a fresh data directory is
//! immediately usable.

use chrono::Utc;
use rust_decimal_macros::dec;

use crate::domain::service::NewService;
use crate::domain::settings::{ShopSettings, SocialMedia, DEFAULT_SLOT_INTERVAL};
use crate::domain::time::ClockTime;
use crate::domain::worker::{NewWorker, WeeklySchedule};
use crate::repository::{
    AdminReader, AdminWriter, ServiceReader, ServiceWriter, SettingsReader, SettingsWriter,
    WorkerReader, WorkerWriter,
};
use crate::services::auth::new_admin_account;
use crate::services::ServiceResult;

pub const DEFAULT_ADMIN_USERNAME: &str = "admin";

pub fn seed_defaults<R>(repo: &R, admin_password: &str) -> ServiceResult<()>
where
    R: ServiceReader
        + ServiceWriter
        + WorkerReader
        + WorkerWriter
        + SettingsReader
        + SettingsWriter
        + AdminReader
        + AdminWriter
        + ?Sized,
{
    seed_settings(repo)?;
    seed_catalog(repo)?;
    seed_workers(repo)?;
    seed_admin(repo, admin_password)?;
    Ok(())
}

fn seed_settings<R>(repo: &R) -> ServiceResult<()>
where
    R: SettingsReader + SettingsWriter + ?Sized,
{
    if repo.get_settings()?.is_some() {
        return Ok(());
    }
    let open_time: ClockTime = "10:00".parse()?;
    let close_time: ClockTime = "20:00".parse()?;
    repo.save_settings(&ShopSettings {
        business_name: "Habana BarberShop".to_string(),
        address: "Carrer d'Arcadi Balaguer, 69, 08860 Castelldefels, Barcelona".to_string(),
        phone: "631 04 09 25".to_string(),
        email: String::new(),
        open_time,
        close_time,
        slot_interval: DEFAULT_SLOT_INTERVAL,
        social_media: SocialMedia {
            instagram: "https://instagram.com/habana_barberia".to_string(),
            whatsapp: "+34631040925".to_string(),
            ..SocialMedia::default()
        },
        booking_message: "¡Gracias por reservar en Habana BarberShop!".to_string(),
        cancellation_policy: "Muy pocas cancelaciones — respetamos tu tiempo.".to_string(),
        updated_at: Utc::now(),
    })?;
    log::info!("seeded default shop settings");
    Ok(())
}

fn seed_catalog<R>(repo: &R) -> ServiceResult<()>
where
    R: ServiceReader + ServiceWriter + ?Sized,
{
    if !repo.list_services()?.is_empty() {
        return Ok(());
    }
    let catalog = [
        ("Corte de Pelo", 40, dec!(15), "scissors"),
        ("Corte con Diseño", 50, dec!(20), "sparkles"),
        ("Corte + Barba", 70, dec!(22), "user"),
        ("Rapado", 15, dec!(10), "zap"),
        ("Cejas", 10, dec!(5), "eye"),
        ("Arreglo de Barba", 30, dec!(10), "user"),
    ];
    for (name, duration, price, icon) in catalog {
        let mut service = NewService::new(name, duration, price)?;
        service.icon = Some(icon.to_string());
        repo.create_service(&service)?;
    }
    log::info!("seeded default service catalog");
    Ok(())
}

fn seed_workers<R>(repo: &R) -> ServiceResult<()>
where
    R: WorkerReader + WorkerWriter + ?Sized,
{
    if !repo.list_workers()?.is_empty() {
        return Ok(());
    }
    let open: ClockTime = "10:00".parse()?;
    let close: ClockTime = "20:00".parse()?;
    let schedule = WeeklySchedule::six_days(open, close);

    let mut andy = NewWorker::new("Andy", schedule.clone())?;
    andy.phone = Some("631040925".to_string());
    andy.color = Some("#C19A6B".to_string());
    andy.specialties = vec![
        "Corte".to_string(),
        "Barba".to_string(),
        "Diseño".to_string(),
    ];
    repo.create_worker(&andy)?;

    let mut rodrigo = NewWorker::new("Rodrigo", schedule)?;
    rodrigo.color = Some("#D4A745".to_string());
    rodrigo.specialties = vec![
        "Corte".to_string(),
        "Barba".to_string(),
        "Cejas".to_string(),
    ];
    repo.create_worker(&rodrigo)?;

    log::info!("seeded default workers");
    Ok(())
}

fn seed_admin<R>(repo: &R, admin_password: &str) -> ServiceResult<()>
where
    R: AdminReader + AdminWriter + ?Sized,
{
    if repo.get_admin_account()?.is_some() {
        return Ok(());
    }
    let account = new_admin_account(DEFAULT_ADMIN_USERNAME, admin_password, "Administrador")?;
    repo.save_admin_account(&account)?;
    log::warn!(
        "seeded default admin account '{}'; change the password after first login",
        DEFAULT_ADMIN_USERNAME
    );
    Ok(())
}

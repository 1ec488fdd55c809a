use std::sync::Arc;

use actix_cors::Cors;
use actix_files::Files;
use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::Key;
use actix_web::{App, HttpServer, middleware, web};

use crate::models::config::ServerConfig;
use crate::repository::DocumentRepository;
use crate::routes::admin::{
    add_service, add_worker, admin_change_password, admin_login, admin_logout,
    cancel_booking_route, clear_notifications, clients_stats, complete_booking_route,
    confirm_booking_route, create_admin_booking, create_sale, delete_booking, edit_client,
    edit_service, edit_settings, edit_worker, export_backup, get_client, get_settings,
    list_all_services, list_all_workers, list_bookings, list_clients, list_notifications,
    list_sales, mark_all_notifications_read, mark_notification_read, remove_client,
    remove_service, remove_worker, report_daily, report_monthly, report_weekly, reset_all_data,
    unread_notifications,
};
use crate::routes::public::{create_public_booking, list_services, list_slots, list_workers};
use crate::storage::file::FileStorage;

pub mod domain;
pub mod forms;
pub mod models;
pub mod repository;
pub mod routes;
pub mod seed;
pub mod services;
pub mod storage;

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    let engine = FileStorage::new(&server_config.data_dir)
        .map_err(|e| std::io::Error::other(format!("Failed to open data directory: {e}")))?;

    let repo = DocumentRepository::new(Arc::new(engine));

    // Catalog, schedules, settings and the admin account on first start.
    seed::seed_defaults(&repo, &server_config.admin_password)
        .map_err(|e| std::io::Error::other(format!("Failed to seed defaults: {e}")))?;

    let secret_key = Key::from(server_config.secret.as_bytes());

    let bind_address = (server_config.address.clone(), server_config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                    .cookie_secure(false) // set to true in prod
                    .build(),
            )
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(Files::new("/assets", server_config.assets_dir.clone()))
            .service(
                web::scope("/api/v1")
                    .service(list_services)
                    .service(list_workers)
                    .service(list_slots)
                    .service(create_public_booking),
            )
            .service(
                web::scope("/admin")
                    .service(admin_login)
                    .service(admin_logout)
                    .service(admin_change_password)
                    .service(list_bookings)
                    .service(create_admin_booking)
                    .service(confirm_booking_route)
                    .service(complete_booking_route)
                    .service(cancel_booking_route)
                    .service(delete_booking)
                    .service(list_all_services)
                    .service(add_service)
                    .service(edit_service)
                    .service(remove_service)
                    .service(list_all_workers)
                    .service(add_worker)
                    .service(edit_worker)
                    .service(remove_worker)
                    .service(list_clients)
                    .service(clients_stats)
                    .service(get_client)
                    .service(edit_client)
                    .service(remove_client)
                    .service(create_sale)
                    .service(list_sales)
                    .service(report_daily)
                    .service(report_weekly)
                    .service(report_monthly)
                    .service(list_notifications)
                    .service(unread_notifications)
                    .service(mark_notification_read)
                    .service(mark_all_notifications_read)
                    .service(clear_notifications)
                    .service(get_settings)
                    .service(edit_settings)
                    .service(export_backup)
                    .service(reset_all_data),
            )
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(server_config.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}

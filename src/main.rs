use habana_booking::models::config::ServerConfig;
use habana_booking::run;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let server_config = config::Config::builder()
        .set_default("address", "0.0.0.0")
        .map_err(|e| std::io::Error::other(e.to_string()))?
        .set_default("port", 8080)
        .map_err(|e| std::io::Error::other(e.to_string()))?
        .set_default("data_dir", "./data")
        .map_err(|e| std::io::Error::other(e.to_string()))?
        .set_default("assets_dir", "./assets")
        .map_err(|e| std::io::Error::other(e.to_string()))?
        .add_source(config::File::with_name("config").required(false))
        .add_source(config::Environment::with_prefix("HABANA"))
        .build()
        .map_err(|e| std::io::Error::other(format!("Failed to load configuration: {e}")))?;

    let server_config: ServerConfig = server_config
        .try_deserialize()
        .map_err(|e| std::io::Error::other(format!("Invalid configuration: {e}")))?;

    run(server_config).await
}

use sekolah_beta::backend::database::Database;
use sekolah_beta::backend::seed;
use sekolah_beta::backend::server::ServerConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = ServerConfig::load()?;

    println!("🌱 SEEDING DATABASE");
    println!("===================");
    println!("DATABASE_URL: {}", config.database_url);

    let db = Database::connect(&config.database_url).await?;
    db.migrate().await?;

    let report = seed::run(db.pool(), config.bcrypt_cost).await?;

    println!("✅ Users created: {}", report.users_created);
    println!("⏭️  Users already present: {}", report.users_skipped);
    println!("⚙️  Settings written: {}", report.settings_written);

    db.close().await;
    Ok(())
}

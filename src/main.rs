use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info, warn};

use fleet_admin::config::{DatabaseConfig, EnvironmentConfig};
use fleet_admin::database::DatabaseConnection;
use fleet_admin::repositories::{PgRecordStore, Repository};
use fleet_admin::{create_app, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();
    let config = EnvironmentConfig::from_env()?;

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(config.tracing_level())
        .init();

    info!("🚚 Fleet Admin - Documentos, pólizas y consistencia de flota");
    info!("================================================");
    info!("🌍 Entorno: {}", config.environment);

    // Inicializar almacenamiento
    let repository = match DatabaseConfig::from_env()? {
        Some(db_config) => {
            let connection = DatabaseConnection::new(&db_config).await?;
            connection.ensure_schema().await?;
            Repository::new(Arc::new(PgRecordStore::new(connection.pool().clone())))
        }
        None => {
            warn!("⚠️ DATABASE_URL no definida: usando almacenamiento en memoria (los datos no persisten)");
            Repository::in_memory()
        }
    };

    let addr: SocketAddr = config.server_url().parse()?;
    let state = AppState::new(repository, config);
    let app = create_app(state);

    info!("🚀 Servidor escuchando en http://{}", addr);
    info!("📋 Endpoints disponibles:");
    info!("   GET  /health");
    info!("   CRUD /api/vehicles, /api/drivers, /api/documents, /api/insurance");
    info!("   CRUD /api/trips, /api/maintenance, /api/fuel");
    info!("   POST /api/vehicles/:id/assign | /api/vehicles/:id/release");
    info!("   POST /api/trips/:id/complete | /api/maintenance/:id/complete");
    info!("   POST /api/admin/refresh/:entity");
    info!("   GET  /api/dashboard/expirations | /api/dashboard/costs");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("❌ Error del servidor: {}", e);
        return Err(e.into());
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo instalar el manejador de Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!("❌ No se pudo instalar el manejador de SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}

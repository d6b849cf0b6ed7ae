use std::net::TcpListener;

use actix_web::cookie::Key;
use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};
use actix_web_flash_messages::storage::CookieMessageStore;
use actix_web_flash_messages::FlashMessagesFramework;
use anyhow::Context;
use secrecy::{ExposeSecret, Secret};
use tracing_actix_web::TracingLogger;

use crate::configuration::Settings;
use crate::integrations::Integrations;
use crate::notification_client::NotificationClient;
use crate::routes::{contact_form, health_check, home, not_found, submit_lead};

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(configuration: Settings) -> Result<Self, anyhow::Error> {
        let notification_client = NotificationClient::new(
            &configuration.notification.base_url,
            configuration.notification.authorization_token.clone(),
            configuration.notification.timeout(),
        )?;

        let address = format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        );
        let listener = TcpListener::bind(&address)
            .with_context(|| format!("Failed to bind {}", address))?;
        // port 0 in tests asks the OS for a free one; report the real port back
        let port = listener.local_addr()?.port();
        let server = run(
            listener,
            notification_client,
            configuration.integrations.into(),
            configuration.application.hmac_secret,
        )?;

        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub fn run(
    listener: TcpListener,
    notification_client: NotificationClient,
    integrations: Integrations,
    hmac_secret: Secret<String>,
) -> Result<Server, anyhow::Error> {
    let secret = hmac_secret.expose_secret().as_bytes();
    anyhow::ensure!(
        secret.len() >= 64,
        "The hmac secret must be at least 64 bytes long"
    );
    let secret_key = Key::from(secret);
    let message_store = CookieMessageStore::builder(secret_key).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let notification_client = web::Data::new(notification_client);
    let integrations = web::Data::new(integrations);
    let server = HttpServer::new(move || {
        App::new()
            .wrap(message_framework.clone())
            .wrap(TracingLogger::default())
            .route("/health_check", web::get().to(health_check))
            .route("/", web::get().to(home))
            .route("/contact", web::get().to(contact_form))
            .route("/contact", web::post().to(submit_lead))
            .default_service(web::route().to(not_found))
            .app_data(notification_client.clone())
            .app_data(integrations.clone())
    })
    .listen(listener)?
    .run();
    Ok(server)
}

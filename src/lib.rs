pub mod configuration;
pub mod document;
pub mod domain;
mod error_handling;
pub mod integrations;
pub mod notification_client;
pub mod pages;
pub mod routes;
mod routing_helpers;
pub mod seo;
pub mod startup;
pub mod submission;
pub mod telemetry;

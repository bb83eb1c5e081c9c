//! Application state

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::config::Config;
use crate::db::DbService;
use crate::stripe::{PaymentGateway, StripeGateway};

/// Shared application state
///
/// Cloned into every handler; holds the only shared mutable resource (the
/// pool) plus the payment gateway.
#[derive(Clone)]
pub struct AppState {
    pub db: DbService,
    pub gateway: Arc<dyn PaymentGateway>,
}

impl AppState {
    /// Production state: Stripe gateway from config
    pub fn new(config: &Config, db: DbService) -> Self {
        let gateway = StripeGateway::new(
            &config.stripe_secret_key,
            &config.stripe_api_base,
            &config.payment_currency,
        );
        Self::with_gateway(db, Arc::new(gateway))
    }

    pub fn with_gateway(db: DbService, gateway: Arc<dyn PaymentGateway>) -> Self {
        Self { db, gateway }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.db.pool
    }
}

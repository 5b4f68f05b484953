//! Order processing orchestration
//!
//! Validates the order, resolves every requested channel through the
//! factory, sends, and records each send in the history. Failed sends are
//! recorded as failures, never retried.

use shared::DeliveryResult;
use tracing::{info, warn};

use crate::error::{NotifierError, NotifierResult};
use crate::factory::NotificationFactory;
use crate::history::HistoryManager;
use crate::traits::NotificationStrategy;
use crate::types::OrderInfo;

pub struct OrderProcessor {
    factory: NotificationFactory,
    history: HistoryManager,
}

impl OrderProcessor {
    pub fn new() -> Self {
        Self::with_factory(NotificationFactory::new())
    }

    /// Build a processor around a pre-configured factory
    pub fn with_factory(factory: NotificationFactory) -> Self {
        Self {
            factory,
            history: HistoryManager::new(),
        }
    }

    /// Process one order end to end
    ///
    /// Strategies for every requested channel are resolved before anything
    /// is sent, so an unknown tag aborts the order with no partial side
    /// effects and no history entries.
    pub fn process(&mut self, order: &OrderInfo) -> NotifierResult<Vec<DeliveryResult>> {
        Self::validate(order)?;

        let mut strategies: Vec<Box<dyn NotificationStrategy>> =
            Vec::with_capacity(order.channels.len());
        for tag in &order.channels {
            strategies.push(self.factory.create(tag)?);
        }

        info!(
            order_id = %order.order_id,
            customer = %order.customer.name,
            total = order.total,
            channels = order.channels.len(),
            "processing order"
        );

        let mut results = Vec::with_capacity(strategies.len());
        for strategy in strategies {
            let result = strategy.send(order);
            if !result.succeeded() {
                warn!(
                    order_id = %order.order_id,
                    channel = strategy.channel(),
                    outcome = %result.outcome,
                    "send failed, recording without retry"
                );
            }
            self.history
                .record(&order.order_id, strategy.channel(), result.outcome.clone());
            results.push(result);
        }

        Ok(results)
    }

    fn validate(order: &OrderInfo) -> NotifierResult<()> {
        if order.order_id.is_empty() {
            return Err(NotifierError::InvalidOrder {
                field: "order_id".to_string(),
            });
        }
        if !order.has_contact() {
            return Err(NotifierError::InvalidOrder {
                field: "contact".to_string(),
            });
        }
        if order.channels.is_empty() {
            return Err(NotifierError::InvalidOrder {
                field: "channels".to_string(),
            });
        }
        Ok(())
    }

    pub fn history(&self) -> &HistoryManager {
        &self.history
    }
}

impl Default for OrderProcessor {
    fn default() -> Self {
        Self::new()
    }
}

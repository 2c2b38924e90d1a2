use crate::domain::catalog::PriceCatalog;
use crate::domain::delivery::DateCalculator;
use crate::domain::order::{OrderRecord, RawSubmission, Receipt};
use crate::domain::ports::OrderStoreBox;
use crate::domain::pricing::PricingEngine;
use crate::domain::validation::OrderValidator;
use crate::error::{OrderError, Result};
use chrono::{Local, NaiveDateTime};
use tracing::{debug, error, info};

/// The entry point for placing a cake order.
///
/// `OrderPipeline` validates a submission, prices it, dates it, appends it to
/// the order log and hands back a receipt. Nothing is written unless the
/// submission is fully valid.
pub struct OrderPipeline {
    validator: OrderValidator,
    store: OrderStoreBox,
}

impl OrderPipeline {
    /// Creates a pipeline with the standard catalog and delivery offset.
    ///
    /// # Arguments
    ///
    /// * `store` - Where accepted orders are appended.
    pub fn new(store: OrderStoreBox) -> Self {
        let pricing = PricingEngine::new(PriceCatalog::new());
        Self::with_validator(OrderValidator::new(pricing, DateCalculator::new()), store)
    }

    pub fn with_validator(validator: OrderValidator, store: OrderStoreBox) -> Self {
        Self { validator, store }
    }

    /// Processes a submission, stamping the record with the current local time.
    pub async fn process(&self, raw: &RawSubmission) -> Result<Receipt> {
        self.process_at(raw, Local::now().naive_local()).await
    }

    /// Processes a submission with an explicit record timestamp.
    ///
    /// Returns `OrderError::Validation` with every message when the submission
    /// is rejected, and `OrderError::PersistenceFailure` when the order was
    /// valid but could not be written. A receipt is only returned once the
    /// record is in the log.
    pub async fn process_at(
        &self,
        raw: &RawSubmission,
        timestamp: NaiveDateTime,
    ) -> Result<Receipt> {
        let order = self.validator.validate(raw).map_err(|errors| {
            debug!(errors = %errors, "rejected order submission");
            OrderError::Validation(errors)
        })?;

        let record = OrderRecord::new(order, timestamp);
        if let Err(e) = self.store.append(&record).await {
            error!(error = %e, customer = %record.order.name, "failed to persist order");
            return Err(OrderError::PersistenceFailure(Box::new(e)));
        }

        let receipt = Receipt::from(&record.order);
        info!(
            customer = %receipt.customer,
            cake = %receipt.cake_type,
            total = %receipt.total_price,
            delivery = %receipt.delivery_date,
            "accepted order"
        );
        Ok(receipt)
    }
}

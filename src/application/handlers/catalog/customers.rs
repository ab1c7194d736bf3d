//! Customer commands.

use crate::domain::billing::BillingError;
use crate::domain::catalog::{Customer, CustomerChanges, NewCustomer};
use crate::domain::foundation::CustomerId;
use crate::ports::{next_id, Store};

pub struct CreateCustomerHandler {
    store: Store,
}

impl CreateCustomerHandler {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub async fn handle(&self, new: NewCustomer) -> Result<Customer, BillingError> {
        let customer = Customer::register(
            next_id::<CustomerId>(self.store.ids.as_ref()),
            new,
            self.store.clock.now(),
        )?;
        self.store.customers.set(customer.clone()).await?;
        tracing::info!(customer_id = %customer.id, "Customer created");
        Ok(customer)
    }
}

#[derive(Debug, Clone)]
pub struct UpdateCustomerCommand {
    pub customer_id: String,
    pub changes: CustomerChanges,
}

pub struct UpdateCustomerHandler {
    store: Store,
}

impl UpdateCustomerHandler {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: UpdateCustomerCommand) -> Result<Customer, BillingError> {
        let mut customer = self
            .store
            .customers
            .get(&cmd.customer_id)
            .await?
            .ok_or_else(|| BillingError::not_found("Customer", &cmd.customer_id))?;

        customer.apply(cmd.changes, self.store.clock.now());
        self.store.customers.set(customer.clone()).await?;
        Ok(customer)
    }
}

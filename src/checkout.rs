//! Checkout Flow
//!
//! Turns the current cart snapshot plus the customer-supplied fields into a
//! validated, persisted order. The flow moves `Editing → Submitting →
//! Confirmed`; a failed submission returns to `Editing` with the cart
//! untouched so the user can retry, and `Confirmed` is terminal until an
//! explicit new-order reset.

use std::fmt::{Debug, Formatter, Result as FmtResult};

use jiff::Timestamp;
use thiserror::Error;
use tracing::{info, warn};

use crate::{
    cart::CartStore,
    location::LocationProvider,
    orders::{
        errors::OrderStoreError,
        models::{CustomerDetails, DraftOrder, OrderLine, OrderType, PersistedOrder},
        store::OrderStore,
    },
    pricing::order_totals,
};

/// Validation failures surfaced before any submission is attempted.
///
/// No state mutation occurs on any of these; the flow stays in `Editing`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The cart has no lines.
    #[error("the cart is empty; add items before placing an order")]
    EmptyCart,

    /// The customer name field is blank.
    #[error("customer name is required")]
    MissingCustomerName,

    /// The phone field is blank.
    #[error("phone number is required")]
    MissingPhone,

    /// A delivery order was submitted without an address.
    #[error("delivery address is required for delivery orders")]
    MissingDeliveryAddress,
}

/// Errors surfaced by [`CheckoutFlow::submit`].
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// The submission was rejected before reaching the store.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The order store rejected the write. The cart is preserved; the user
    /// may resubmit.
    #[error("order could not be placed")]
    Store(#[source] OrderStoreError),

    /// An order was already confirmed; reset with
    /// [`CheckoutFlow::new_order`] before submitting again.
    #[error("an order was already confirmed; start a new order first")]
    AlreadyConfirmed,
}

impl CheckoutError {
    /// Whether the failure is the distinguished permission-denied class,
    /// where retrying will not help and the restaurant administrator has to
    /// be contacted.
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, Self::Store(OrderStoreError::PermissionDenied))
    }
}

/// Where the flow currently is.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckoutState {
    /// Cart and customer fields are editable.
    Editing,
    /// A submission is in flight; totals are frozen from the snapshot taken
    /// at submission start.
    Submitting,
    /// The order was persisted; the retained snapshot is displayed until an
    /// explicit reset.
    Confirmed(PersistedOrder),
}

/// The checkout flow over an order store and a location provider.
pub struct CheckoutFlow<S, L> {
    store: S,
    location: L,
    state: CheckoutState,
}

impl<S: OrderStore, L: LocationProvider> CheckoutFlow<S, L> {
    /// Create a flow in the `Editing` state.
    #[must_use]
    pub fn new(store: S, location: L) -> Self {
        Self {
            store,
            location,
            state: CheckoutState::Editing,
        }
    }

    /// The current flow state.
    #[must_use]
    pub fn state(&self) -> &CheckoutState {
        &self.state
    }

    /// The retained order snapshot, when the flow is `Confirmed`.
    #[must_use]
    pub fn confirmation(&self) -> Option<&PersistedOrder> {
        match &self.state {
            CheckoutState::Confirmed(order) => Some(order),
            CheckoutState::Editing | CheckoutState::Submitting => None,
        }
    }

    /// Reset a confirmed flow for a new order, discarding the retained
    /// snapshot. Returns fresh default customer fields.
    pub fn new_order(&mut self) -> CustomerDetails {
        self.state = CheckoutState::Editing;

        CustomerDetails::default()
    }

    /// Validate and submit the current cart as an order.
    ///
    /// The cart snapshot and the derived totals are frozen at the moment
    /// this is called; no later cart mutation can affect the in-flight
    /// submission. On success the cart is cleared and the flow moves to
    /// `Confirmed`; on store failure the cart is left untouched and the
    /// flow returns to `Editing`.
    ///
    /// For delivery orders a best-effort device location lookup runs first;
    /// its failure only produces a notice and never blocks the submission.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::Validation`] when the guard rejects the
    /// form, and [`CheckoutError::Store`] when the persistence write fails.
    pub async fn submit(
        &mut self,
        cart: &mut CartStore,
        details: &CustomerDetails,
    ) -> Result<PersistedOrder, CheckoutError> {
        if self.state != CheckoutState::Editing {
            return Err(CheckoutError::AlreadyConfirmed);
        }

        validate(cart, details)?;

        self.state = CheckoutState::Submitting;

        let snapshot = cart.current_order();
        let totals = order_totals(&snapshot);
        let lines: Vec<OrderLine> = snapshot.iter().map(OrderLine::from).collect();

        let location = match details.order_type {
            OrderType::Delivery => match self.location.locate().await {
                Ok(location) => Some(location),
                Err(error) => {
                    warn!(%error, "device location unavailable; submitting without coordinates");
                    None
                }
            },
            OrderType::Takeaway => None,
        };

        let draft = DraftOrder::compose(details, location, lines, totals);
        let record = draft.into_record(Timestamp::now());

        match self.store.create(record.clone()).await {
            Ok(id) => {
                info!(order_id = %id, total = %record.total, "order placed");

                cart.clear();

                let confirmed = PersistedOrder { id, record };
                self.state = CheckoutState::Confirmed(confirmed.clone());

                Ok(confirmed)
            }
            Err(error) => {
                warn!(%error, "order submission failed; cart preserved for retry");

                self.state = CheckoutState::Editing;

                Err(CheckoutError::Store(error))
            }
        }
    }
}

fn validate(cart: &CartStore, details: &CustomerDetails) -> Result<(), ValidationError> {
    if cart.is_empty() {
        return Err(ValidationError::EmptyCart);
    }

    if details.name.trim().is_empty() {
        return Err(ValidationError::MissingCustomerName);
    }

    if details.phone.trim().is_empty() {
        return Err(ValidationError::MissingPhone);
    }

    if details.order_type == OrderType::Delivery && details.address.trim().is_empty() {
        return Err(ValidationError::MissingDeliveryAddress);
    }

    Ok(())
}

impl<S, L> Debug for CheckoutFlow<S, L> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("CheckoutFlow")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

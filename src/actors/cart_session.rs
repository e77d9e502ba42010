use actix::prelude::*;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::cart::{Cart, CartAggregate, CartCommand, Item};
use crate::domain::checkout::assemble;
use crate::ordering::OrderSink;

// ============================================================================
// Actor Messages
// ============================================================================

#[derive(Message)]
#[rtype(result = "Cart")]
pub struct AddItem {
    pub item: Item,
}

#[derive(Message)]
#[rtype(result = "Cart")]
pub struct IncrementLine {
    pub item_id: Uuid,
}

#[derive(Message)]
#[rtype(result = "Cart")]
pub struct DecrementLine {
    pub item_id: Uuid,
}

#[derive(Message)]
#[rtype(result = "Cart")]
pub struct ClearCart;

#[derive(Message)]
#[rtype(result = "Cart")]
pub struct GetCart;

#[derive(Message)]
#[rtype(result = "anyhow::Result<CheckoutReceipt>")]
pub struct Checkout;

#[derive(Message)]
#[rtype(result = "CheckoutPhase")]
pub struct GetCheckoutPhase;

/// What the session is doing with respect to checkout, for display.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckoutPhase {
    Idle,
    Submitting,
}

#[derive(Debug, Clone)]
pub struct CheckoutReceipt {
    pub units_submitted: usize,
}

// ============================================================================
// Cart Session Actor - One logical shopping session
// ============================================================================
//
// The mailbox serializes cart operations: each user event runs to
// completion before the next, so observers always see a consistent
// snapshot. Checkout is the one suspending operation - the sink call runs
// without blocking the mailbox, so the cart stays visible and mutable
// while the request is in flight. On sink success the cart is cleared; on
// failure it is left untouched for a user-driven retry.
//
// ============================================================================

pub struct CartSessionActor {
    aggregate: CartAggregate,
    sink: Arc<dyn OrderSink>,
    phase: CheckoutPhase,
}

impl CartSessionActor {
    pub fn new(sink: Arc<dyn OrderSink>) -> Self {
        Self {
            aggregate: CartAggregate::new(),
            sink,
            phase: CheckoutPhase::Idle,
        }
    }
}

impl Actor for CartSessionActor {
    type Context = Context<Self>;

    fn started(&mut self, _ctx: &mut Self::Context) {
        tracing::info!("CartSessionActor started");
    }
}

// ============================================================================
// Message Handlers
// ============================================================================

impl Handler<AddItem> for CartSessionActor {
    type Result = MessageResult<AddItem>;

    fn handle(&mut self, msg: AddItem, _: &mut Self::Context) -> Self::Result {
        tracing::debug!(item_id = %msg.item.id, name = %msg.item.name, "Adding item to cart");
        MessageResult(self.aggregate.apply(CartCommand::Add(msg.item)))
    }
}

impl Handler<IncrementLine> for CartSessionActor {
    type Result = MessageResult<IncrementLine>;

    fn handle(&mut self, msg: IncrementLine, _: &mut Self::Context) -> Self::Result {
        tracing::debug!(item_id = %msg.item_id, "Incrementing cart line");
        MessageResult(self.aggregate.apply(CartCommand::Increment(msg.item_id)))
    }
}

impl Handler<DecrementLine> for CartSessionActor {
    type Result = MessageResult<DecrementLine>;

    fn handle(&mut self, msg: DecrementLine, _: &mut Self::Context) -> Self::Result {
        tracing::debug!(item_id = %msg.item_id, "Decrementing cart line");
        MessageResult(self.aggregate.apply(CartCommand::Decrement(msg.item_id)))
    }
}

impl Handler<ClearCart> for CartSessionActor {
    type Result = MessageResult<ClearCart>;

    fn handle(&mut self, _: ClearCart, _: &mut Self::Context) -> Self::Result {
        tracing::debug!("Clearing cart");
        MessageResult(self.aggregate.apply(CartCommand::Clear))
    }
}

impl Handler<GetCart> for CartSessionActor {
    type Result = MessageResult<GetCart>;

    fn handle(&mut self, _: GetCart, _: &mut Self::Context) -> Self::Result {
        MessageResult(self.aggregate.snapshot())
    }
}

impl Handler<GetCheckoutPhase> for CartSessionActor {
    type Result = MessageResult<GetCheckoutPhase>;

    fn handle(&mut self, _: GetCheckoutPhase, _: &mut Self::Context) -> Self::Result {
        MessageResult(self.phase.clone())
    }
}

impl Handler<Checkout> for CartSessionActor {
    type Result = ResponseActFuture<Self, anyhow::Result<CheckoutReceipt>>;

    fn handle(&mut self, _: Checkout, _: &mut Self::Context) -> Self::Result {
        let request = assemble(&self.aggregate.snapshot());
        let units = request.len();
        let sink = self.sink.clone();

        tracing::info!(units, "Submitting order");
        self.phase = CheckoutPhase::Submitting;

        Box::pin(
            async move { sink.submit(&request).await }
                .into_actor(self)
                .map(move |result, act, _ctx| {
                    act.phase = CheckoutPhase::Idle;

                    match result {
                        Ok(()) => {
                            act.aggregate.apply(CartCommand::Clear);
                            tracing::info!(units, "✅ Checkout complete, cart cleared");
                            Ok(CheckoutReceipt {
                                units_submitted: units,
                            })
                        }
                        Err(e) => {
                            tracing::error!(error = %e, "Checkout failed, cart preserved");
                            Err(e.into())
                        }
                    }
                }),
        )
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::checkout::OrderRequest;
    use crate::ordering::OrderSinkError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Sink double: records every submitted request, optionally failing.
    struct StubSink {
        requests: Mutex<Vec<OrderRequest>>,
        fail: bool,
    }

    impl StubSink {
        fn accepting() -> Arc<Self> {
            Arc::new(Self {
                requests: Mutex::new(Vec::new()),
                fail: false,
            })
        }

        fn rejecting() -> Arc<Self> {
            Arc::new(Self {
                requests: Mutex::new(Vec::new()),
                fail: true,
            })
        }
    }

    #[async_trait]
    impl OrderSink for StubSink {
        async fn submit(&self, request: &OrderRequest) -> Result<(), OrderSinkError> {
            self.requests.lock().unwrap().push(request.clone());
            if self.fail {
                Err(OrderSinkError::Rejected(
                    reqwest::StatusCode::INTERNAL_SERVER_ERROR,
                ))
            } else {
                Ok(())
            }
        }
    }

    fn item(name: &str, price: &str) -> Item {
        Item {
            id: Uuid::new_v4(),
            name: name.to_string(),
            price: price.parse().unwrap(),
        }
    }

    #[actix::test]
    async fn test_cart_operations_round_trip_through_mailbox() {
        let session = CartSessionActor::new(StubSink::accepting()).start();
        let milk = item("Milk", "2.50");

        session.send(AddItem { item: milk.clone() }).await.unwrap();
        session.send(AddItem { item: milk.clone() }).await.unwrap();
        let cart = session
            .send(DecrementLine { item_id: milk.id })
            .await
            .unwrap();

        assert_eq!(cart.line(milk.id).unwrap().count, 1);
        assert_eq!(session.send(GetCart).await.unwrap(), cart);
    }

    #[actix::test]
    async fn test_checkout_success_clears_cart() {
        let sink = StubSink::accepting();
        let session = CartSessionActor::new(sink.clone()).start();
        let milk = item("Milk", "2.50");
        let bread = item("Bread", "1.99");

        session.send(AddItem { item: milk.clone() }).await.unwrap();
        session.send(AddItem { item: milk }).await.unwrap();
        session.send(AddItem { item: bread }).await.unwrap();

        let receipt = session.send(Checkout).await.unwrap().unwrap();

        assert_eq!(receipt.units_submitted, 3);
        assert!(session.send(GetCart).await.unwrap().is_empty());
    }

    #[actix::test]
    async fn test_checkout_submits_one_record_per_unit() {
        let sink = StubSink::accepting();
        let session = CartSessionActor::new(sink.clone()).start();
        let milk = item("Milk", "2.50");

        session.send(AddItem { item: milk.clone() }).await.unwrap();
        session.send(IncrementLine { item_id: milk.id }).await.unwrap();

        session.send(Checkout).await.unwrap().unwrap();

        let requests = sink.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].len(), 2);
        assert!(requests[0].iter().all(|r| r.item_id == milk.id));
    }

    #[actix::test]
    async fn test_checkout_failure_preserves_cart() {
        let session = CartSessionActor::new(StubSink::rejecting()).start();
        let milk = item("Milk", "2.50");

        session.send(AddItem { item: milk.clone() }).await.unwrap();
        session.send(AddItem { item: milk }).await.unwrap();
        let before = session.send(GetCart).await.unwrap();

        let result = session.send(Checkout).await.unwrap();

        assert!(result.is_err());
        assert_eq!(session.send(GetCart).await.unwrap(), before);
    }

    #[actix::test]
    async fn test_phase_returns_to_idle_after_checkout() {
        let session = CartSessionActor::new(StubSink::rejecting()).start();
        session
            .send(AddItem {
                item: item("Milk", "2.50"),
            })
            .await
            .unwrap();

        let _ = session.send(Checkout).await.unwrap();

        assert_eq!(
            session.send(GetCheckoutPhase).await.unwrap(),
            CheckoutPhase::Idle
        );
    }

    #[actix::test]
    async fn test_clear_cart_message_empties_cart() {
        let session = CartSessionActor::new(StubSink::accepting()).start();
        session
            .send(AddItem {
                item: item("Milk", "2.50"),
            })
            .await
            .unwrap();

        let cart = session.send(ClearCart).await.unwrap();

        assert!(cart.is_empty());
    }
}

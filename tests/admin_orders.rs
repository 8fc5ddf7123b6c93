//! Integration tests for the back-office order pipeline.
//!
//! Places orders through the checkout flow against a shared in-memory
//! store, then exercises the administration service: filtered listings and
//! lifecycle status updates.

use dhaba::{
    cart::CartStore,
    catalog::ItemId,
    checkout::CheckoutFlow,
    location::NoLocation,
    orders::{
        admin::{OrderFilter, OrdersAdmin},
        models::{CustomerDetails, OrderId, OrderStatus, OrderType, PaymentMethod},
        store::InMemoryOrderStore,
    },
};
use testresult::TestResult;

fn details(name: &str, order_type: OrderType) -> CustomerDetails {
    CustomerDetails {
        name: name.to_string(),
        phone: "9840012345".to_string(),
        address: "12 Beach Road, Chennai".to_string(),
        order_type,
        payment_method: PaymentMethod::Cash,
    }
}

async fn place_order(
    store: &InMemoryOrderStore,
    name: &str,
    order_type: OrderType,
) -> TestResult<OrderId> {
    let mut flow = CheckoutFlow::new(store.clone(), NoLocation);
    let mut cart = CartStore::new();
    cart.add(ItemId::from_name("Dosa"), 1, "Dosa", 100);

    let confirmed = flow.submit(&mut cart, &details(name, order_type)).await?;

    Ok(confirmed.id)
}

#[tokio::test]
async fn submitted_orders_appear_in_the_admin_listing() -> TestResult {
    let store = InMemoryOrderStore::new();
    let id = place_order(&store, "Anitha", OrderType::Takeaway).await?;

    let admin = OrdersAdmin::new(store);
    let orders = admin.list_orders(&OrderFilter::default()).await?;

    assert_eq!(orders.len(), 1);
    assert_eq!(orders.first().map(|order| order.id.clone()), Some(id));
    assert_eq!(
        orders.first().map(|order| order.record.status),
        Some(OrderStatus::Pending),
        "fresh orders start pending"
    );

    Ok(())
}

#[tokio::test]
async fn listings_filter_by_status_and_type() -> TestResult {
    let store = InMemoryOrderStore::new();
    let takeaway = place_order(&store, "Anitha", OrderType::Takeaway).await?;
    place_order(&store, "Bharath", OrderType::Delivery).await?;

    let admin = OrdersAdmin::new(store);
    admin.update_status(takeaway.clone(), OrderStatus::Preparing).await?;

    let preparing = admin
        .list_orders(&OrderFilter {
            status: Some(OrderStatus::Preparing),
            ..OrderFilter::default()
        })
        .await?;
    assert_eq!(preparing.len(), 1);
    assert_eq!(preparing.first().map(|order| order.id.clone()), Some(takeaway));

    let deliveries = admin
        .list_orders(&OrderFilter {
            order_type: Some(OrderType::Delivery),
            ..OrderFilter::default()
        })
        .await?;
    assert_eq!(deliveries.len(), 1);
    assert_eq!(
        deliveries.first().map(|order| order.record.customer.clone()),
        Some("Bharath".to_string())
    );

    Ok(())
}

#[tokio::test]
async fn status_updates_walk_the_lifecycle() -> TestResult {
    let store = InMemoryOrderStore::new();
    let id = place_order(&store, "Anitha", OrderType::Takeaway).await?;

    let admin = OrdersAdmin::new(store);

    for status in [
        OrderStatus::Preparing,
        OrderStatus::Ready,
        OrderStatus::Completed,
    ] {
        admin.update_status(id.clone(), status).await?;

        let orders = admin.list_orders(&OrderFilter::default()).await?;
        assert_eq!(
            orders.iter().find(|order| order.id == id).map(|order| order.record.status),
            Some(status)
        );
    }

    Ok(())
}

//! End-to-end demo: browse the sample menu, fill a cart, place a takeaway
//! order against the in-memory store, print the receipt and walk the order
//! through the kitchen lifecycle.
//!
//! ```sh
//! cargo run --example takeaway
//! ```

use dhaba::{
    cart::CartStore,
    catalog::ItemId,
    checkout::CheckoutFlow,
    fixtures::sample_menu,
    location::NoLocation,
    orders::{
        admin::{OrderFilter, OrdersAdmin},
        models::{CustomerDetails, OrderStatus, OrderType, PaymentMethod},
        store::InMemoryOrderStore,
    },
    receipt::OrderReceipt,
};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let catalog = sample_menu()?;
    let store = InMemoryOrderStore::new();

    let mut cart = CartStore::new();
    cart.subscribe(|lines| {
        let count: u64 = lines.iter().map(|line| line.quantity).sum();
        tracing::info!(lines = lines.len(), items = count, "cart changed");
    });

    for name in ["Chicken Biryani", "Parotta", "Parotta", "Sweet Corn Soup"] {
        if let Some(item) = catalog.get(&ItemId::from_name(name)) {
            cart.add_item(item, 1);
        }
    }

    let details = CustomerDetails {
        name: "Anitha".to_string(),
        phone: "9840012345".to_string(),
        address: String::new(),
        order_type: OrderType::Takeaway,
        payment_method: PaymentMethod::Cash,
    };

    let mut flow = CheckoutFlow::new(store.clone(), NoLocation);
    let confirmed = flow.submit(&mut cart, &details).await?;

    let mut stdout = std::io::stdout();
    OrderReceipt::new(&confirmed).write_to(&mut stdout)?;

    let admin = OrdersAdmin::new(store);
    admin.update_status(confirmed.id.clone(), OrderStatus::Preparing).await?;
    admin.update_status(confirmed.id.clone(), OrderStatus::Ready).await?;

    for order in admin.list_orders(&OrderFilter::default()).await? {
        println!("{} {} ₹{}", order.id.short(), order.record.status, order.record.total);
    }

    Ok(())
}

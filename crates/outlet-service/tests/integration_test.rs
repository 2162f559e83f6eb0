use actor_framework::ActorClient;
use outlet_service::config::ServiceConfig;
use outlet_service::ledger_actor::OrderError;
use outlet_service::lifecycle::OutletSystem;
use outlet_service::model::{
    Category, MenuItemId, MenuItemUpsert, OrderCreate, OrderId, OrderStatus, StatusChange,
};

fn menu_item(name: &str, price: f64, category: Category) -> MenuItemUpsert {
    MenuItemUpsert {
        name: name.to_string(),
        price,
        category,
    }
}

fn order_of(ids: &[i64]) -> OrderCreate {
    OrderCreate {
        items: ids.iter().copied().map(MenuItemId).collect(),
    }
}

/// Full end-to-end flow with all real actors.
#[tokio::test]
async fn test_full_outlet_flow() {
    let system = OutletSystem::new(&ServiceConfig::default());

    // Add, then re-price, the same dish
    let added = system
        .catalog_client
        .upsert(menu_item("Pizza", 10.99, Category::MainCourse))
        .await
        .expect("Failed to add pizza");
    assert!(added.created);
    assert_eq!(added.entity.id, MenuItemId(1));

    let updated = system
        .catalog_client
        .upsert(menu_item("Pizza", 12.99, Category::MainCourse))
        .await
        .expect("Failed to update pizza");
    assert!(!updated.created);
    assert_eq!(updated.entity.id, MenuItemId(1));
    assert_eq!(updated.entity.price, 12.99);

    let menu = system.catalog_client.list_all().await.unwrap();
    assert_eq!(menu.len(), 1);
    assert_eq!(menu[0].name, "Pizza");

    // Place an order for it
    let order = system
        .order_client
        .create_order(order_of(&[1]))
        .await
        .expect("Failed to create order");
    assert_eq!(order.id, OrderId(1));
    assert_eq!(order.items, vec![MenuItemId(1)]);
    assert_eq!(order.status, OrderStatus::Preparing);

    // One sweep moves it out for delivery
    let changes = system.order_client.advance_all().await.unwrap();
    assert_eq!(
        changes,
        vec![StatusChange {
            order_id: OrderId(1),
            from: OrderStatus::Preparing,
            to: OrderStatus::OutForDelivery,
        }]
    );
    let order = system.order_client.find(OrderId(1)).await.unwrap();
    assert_eq!(order.status, OrderStatus::OutForDelivery);

    // Second sweep delivers, further sweeps are no-ops
    system.order_client.advance_all().await.unwrap();
    for _ in 0..3 {
        assert!(system.order_client.advance_all().await.unwrap().is_empty());
    }
    let order = system.order_client.find(OrderId(1)).await.unwrap();
    assert_eq!(order.status, OrderStatus::Delivered);

    // Unknown order is a normal absent result
    assert!(system.order_client.get(OrderId(42)).await.unwrap().is_none());

    system.shutdown().await.expect("Failed to shutdown system");
}

#[tokio::test]
async fn test_menu_ids_are_sequential_and_stable() {
    let system = OutletSystem::new(&ServiceConfig::default());
    let catalog = &system.catalog_client;

    for (name, category) in [
        ("Pizza", Category::MainCourse),
        ("Cola", Category::Beverage),
        ("Tiramisu", Category::Dessert),
    ] {
        catalog.upsert(menu_item(name, 4.0, category)).await.unwrap();
    }
    // Re-pricing the middle item keeps its id and position
    let cola = catalog
        .upsert(menu_item("Cola", 2.5, Category::Beverage))
        .await
        .unwrap();
    assert_eq!(cola.entity.id, MenuItemId(2));

    let menu = catalog.list_all().await.unwrap();
    let listed: Vec<(i64, &str, f64)> = menu
        .iter()
        .map(|item| (item.id.0, item.name.as_str(), item.price))
        .collect();
    assert_eq!(
        listed,
        vec![(1, "Pizza", 4.0), (2, "Cola", 2.5), (3, "Tiramisu", 4.0)]
    );

    assert!(catalog.exists(MenuItemId(3)).await.unwrap());
    assert!(!catalog.exists(MenuItemId(4)).await.unwrap());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_invalid_orders_are_rejected_without_consuming_ids() {
    let system = OutletSystem::new(&ServiceConfig::default());
    system
        .catalog_client
        .upsert(menu_item("Soup", 5.0, Category::MainCourse))
        .await
        .unwrap();

    let empty = system.order_client.create_order(order_of(&[])).await;
    assert_eq!(empty, Err(OrderError::EmptyItems));

    let unknown = system.order_client.create_order(order_of(&[999])).await;
    assert_eq!(unknown, Err(OrderError::UnknownItems(vec![MenuItemId(999)])));

    // Every bad id is reported, in request order
    let mixed = system
        .order_client
        .create_order(order_of(&[7, 1, 3]))
        .await
        .unwrap_err();
    assert_eq!(mixed.to_string(), "Invalid item IDs: 7, 3");

    // The first successful order still gets id 1
    let order = system.order_client.create_order(order_of(&[1, 1])).await.unwrap();
    assert_eq!(order.id, OrderId(1));
    assert_eq!(order.items, vec![MenuItemId(1), MenuItemId(1)]);

    assert_eq!(
        system.order_client.find(OrderId(2)).await,
        Err(OrderError::NotFound(OrderId(2)))
    );

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_advance_on_empty_ledger_is_a_no_op() {
    let system = OutletSystem::new(&ServiceConfig::default());
    assert!(system.order_client.advance_all().await.unwrap().is_empty());
    system.shutdown().await.unwrap();
}

/// Orders created concurrently with sweeps get distinct ids and only ever move forward.
#[tokio::test]
async fn test_concurrent_orders_and_sweeps() {
    let system = OutletSystem::new(&ServiceConfig::default());
    system
        .catalog_client
        .upsert(menu_item("Fries", 3.0, Category::MainCourse))
        .await
        .unwrap();

    let mut creators = Vec::new();
    for _ in 0..20 {
        let client = system.order_client.clone();
        creators.push(tokio::spawn(async move {
            client.create_order(order_of(&[1])).await
        }));
    }
    let mut sweepers = Vec::new();
    for _ in 0..5 {
        let client = system.order_client.clone();
        sweepers.push(tokio::spawn(async move { client.advance_all().await }));
    }

    let mut ids = Vec::new();
    for handle in creators {
        ids.push(handle.await.unwrap().unwrap().id.0);
    }
    ids.sort_unstable();
    assert_eq!(ids, (1..=20).collect::<Vec<_>>());

    for handle in sweepers {
        for change in handle.await.unwrap().unwrap() {
            assert_eq!(change.from.next(), change.to);
            assert_ne!(change.from, change.to);
        }
    }

    let orders = system.order_client.list().await.unwrap();
    assert_eq!(orders.len(), 20);
    assert!(orders.windows(2).all(|pair| pair[0].id < pair[1].id));

    system.shutdown().await.unwrap();
}

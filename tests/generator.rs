//! End-to-end generation over the public API.
//!
//! Uses a pinned minimal profile with `minRatio` 1.0, which collapses every
//! uniform draw to its bound and makes most volumes exactly predictable:
//! one country, five books, one shop per city, one employee per shop, two
//! purchases per employee in the current year, one line item each. Volumes
//! that pass through name deduplication (cities) are asserted as ranges.

use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

use chrono::{Datelike, Local, Timelike};
use bookstore_data::{
    AmountProfile, Books, Customers, DatasetGenerator, DatasetMetrics, DiscardPersister,
    Purchases, Shops,
};

const MINIMAL_PROFILE: &str = r#"{
    "maxCountries": 1,
    "maxCitiesPerCountry": 1,
    "maxCustomersPerCity": 2,
    "maxGenres": 1,
    "maxPublishersPerCountry": 0,
    "maxAuthorsPerCountry": 0,
    "maxBooksPerCountry": 4,
    "maxShopsPerCity": 0,
    "maxBooksPerShop": 4,
    "maxEmployeesPerShop": 0,
    "maxAgeOfShopsInYears": 0,
    "maxPurchasesPerEmployeePerYear": 1,
    "maxItemsPerPurchase": 0,
    "minRatio": 1.0
}"#;

struct Dataset {
    books: Arc<Books>,
    shops: Arc<Shops>,
    customers: Arc<Customers>,
    purchases: Arc<Purchases>,
    metrics: DatasetMetrics,
}

fn generate(seed: u64) -> Dataset {
    let books = Arc::new(Books::new());
    let shops = Arc::new(Shops::new());
    let customers = Arc::new(Customers::new());
    let purchases = Arc::new(Purchases::new());

    let generator = DatasetGenerator::new(
        Arc::clone(&books),
        Arc::clone(&shops),
        Arc::clone(&customers),
        Arc::clone(&purchases),
        AmountProfile::from_json(MINIMAL_PROFILE).expect("valid profile"),
        Arc::new(DiscardPersister),
    )
    .with_seed(seed);

    let metrics = generator.generate().expect("generation succeeds");
    Dataset {
        books,
        shops,
        customers,
        purchases,
        metrics,
    }
}

#[test]
fn minimal_profile_produces_the_expected_volumes() {
    let dataset = generate(42);

    assert_eq!(dataset.metrics.country_count(), 1);
    // Five book slots per country; ISBN collisions retry, so the count is
    // exact.
    assert_eq!(dataset.metrics.book_count(), 5);
    assert_eq!(dataset.books.count(), 5);

    // Two city-name draws deduplicate to one or two cities, each with
    // exactly one shop.
    let shops = dataset.shops.all();
    assert!((1..=2).contains(&shops.len()));
    assert_eq!(dataset.metrics.shop_count(), shops.len());

    let city_names: HashSet<&str> = shops
        .iter()
        .map(|shop| shop.address().city().name())
        .collect();
    assert_eq!(city_names.len(), shops.len(), "one shop per distinct city");

    for shop in &shops {
        assert_eq!(shop.employees().len(), 1);
        assert_eq!(shop.address().city().state().country().code(), "US");
    }
}

#[test]
fn isbns_are_globally_unique_and_well_formed() {
    let dataset = generate(7);

    let books = dataset.books.all();
    let isbns: HashSet<&str> = books.iter().map(|book| book.isbn()).collect();
    assert_eq!(isbns.len(), books.len());

    for book in &books {
        assert!(book.isbn().starts_with("978-"));
        assert_eq!(book.isbn().len(), 17);
        assert!(book.retail_price() > book.purchase_price());
    }
}

#[test]
fn inventories_stock_catalogue_books_in_valid_quantities() {
    let dataset = generate(11);

    let catalogue: HashSet<String> = dataset
        .books
        .all()
        .iter()
        .map(|book| book.isbn().to_owned())
        .collect();

    for shop in dataset.shops.all() {
        let inventory = shop.inventory().expect("inventory still loaded");
        assert!((1..=5).contains(&inventory.slot_count()));

        let mut seen = HashSet::new();
        for (book, amount) in inventory.entries() {
            assert!((1..=50).contains(amount));
            assert!(catalogue.contains(book.isbn()));
            assert!(seen.insert(book.isbn().to_owned()), "duplicate stock entry");
        }
    }
}

#[test]
fn purchase_history_covers_exactly_the_current_year() {
    let dataset = generate(23);
    let now = Local::now().naive_local();

    assert_eq!(dataset.purchases.years(), vec![now.year()]);
    // Two purchases per employee, one employee per shop, one year.
    assert_eq!(dataset.purchases.count(), 2 * dataset.metrics.shop_count());

    for purchase in dataset.purchases.all() {
        let timestamp = purchase.timestamp();
        assert_eq!(timestamp.year(), now.year());
        assert!(timestamp < now);
        assert!((8..=18).contains(&timestamp.hour()));

        let items = purchase.items().expect("items still loaded");
        assert_eq!(items.len(), 1);
        let item = &items[0];
        assert!((1..=3).contains(&item.amount()));
        assert_eq!(purchase.total(), item.price());
    }
}

#[test]
fn customers_are_the_distinct_purchasers_with_unique_ids() {
    let dataset = generate(31);

    let customers = dataset.customers.all();
    assert!(!customers.is_empty());
    assert!(customers.len() <= dataset.purchases.count());

    let ids: Vec<u64> = customers.iter().map(|customer| customer.id()).collect();
    let unique: HashSet<u64> = ids.iter().copied().collect();
    assert_eq!(unique.len(), ids.len());
    assert!(ids.windows(2).all(|pair| pair[0] < pair[1]), "sorted by id");

    let purchasers: HashSet<u64> = dataset
        .purchases
        .all()
        .iter()
        .map(|purchase| purchase.customer().id())
        .collect();
    assert_eq!(unique, purchasers);
}

#[test]
fn clear_evicts_caches_but_preserves_counts() {
    let dataset = generate(47);
    let shop_count = dataset.shops.count();
    let purchase_count = dataset.purchases.count();

    dataset.shops.clear();
    dataset.purchases.clear();

    assert_eq!(dataset.shops.count(), shop_count);
    assert_eq!(dataset.purchases.count(), purchase_count);
    for shop in dataset.shops.all() {
        assert!(shop.inventory().is_none());
    }
    for purchase in dataset.purchases.all() {
        assert!(purchase.items().is_none());
        assert!(purchase.total() > rust_decimal::Decimal::ZERO);
    }
}

#[test]
fn generation_volumes_are_reproducible_for_a_seed() {
    let first = generate(99);
    let second = generate(99);

    assert_eq!(first.metrics, second.metrics);

    let first_isbns: HashSet<String> = first
        .books
        .all()
        .iter()
        .map(|book| book.isbn().to_owned())
        .collect();
    let second_isbns: HashSet<String> = second
        .books
        .all()
        .iter()
        .map(|book| book.isbn().to_owned())
        .collect();
    assert_eq!(first_isbns, second_isbns);
}

#[test]
fn readers_can_query_repositories_during_generation() {
    let books = Arc::new(Books::new());
    let shops = Arc::new(Shops::new());
    let customers = Arc::new(Customers::new());
    let purchases = Arc::new(Purchases::new());

    let generator = DatasetGenerator::new(
        Arc::clone(&books),
        Arc::clone(&shops),
        Arc::clone(&customers),
        Arc::clone(&purchases),
        AmountProfile::from_json(MINIMAL_PROFILE).expect("valid profile"),
        Arc::new(DiscardPersister),
    )
    .with_seed(3);

    let done = Arc::new(AtomicBool::new(false));
    thread::scope(|scope| {
        let reader_done = Arc::clone(&done);
        let reader_books = Arc::clone(&books);
        let reader_purchases = Arc::clone(&purchases);
        scope.spawn(move || {
            let mut last = 0;
            while !reader_done.load(Ordering::Relaxed) {
                let count = reader_books.count();
                assert!(count >= last, "book count must only grow");
                last = count;
                let _ = reader_purchases.years();
            }
        });

        generator.generate().expect("generation succeeds");
        done.store(true, Ordering::Relaxed);
    });

    assert_eq!(books.count(), 5);
}

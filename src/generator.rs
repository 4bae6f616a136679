//! Parallel dataset generation.
//!
//! [`DatasetGenerator`] builds the whole dataset in four phases: countries,
//! books, shops, purchases. Each phase fans out over an independent unit
//! (locale, country, or shop) with `rayon` and joins before the next phase
//! starts, so cross-phase ordering is the only cross-repository consistency
//! guarantee. Parallel tasks draw from per-task `ChaCha8Rng` instances
//! derived from the base seed and a stable task index, which keeps volumes
//! reproducible for a fixed seed without sharing a generator across
//! threads.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;

use chrono::{Datelike, Duration, Local, NaiveDate, NaiveDateTime};
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use rust_decimal::Decimal;
use tracing::info;

use crate::country_model::CountryModel;
use crate::entities::{
    Address, Author, Book, City, Country, Customer, Employee, Genre, Language, Publisher, State,
};
use crate::error::GenerationError;
use crate::persist::Persister;
use crate::profile::AmountProfile;
use crate::provider::{FakeData, Locale};
use crate::purchase::{Purchase, PurchaseItem};
use crate::registry::DedupRegistry;
use crate::repository::{Books, Customers, Purchases, Shops};
use crate::shop::{Inventory, Shop};

/// Retry cap for ISBN reservation before the run fails.
///
/// The candidate space is effectively inexhaustible for realistic volumes;
/// the cap turns a pathological provider into an explicit error instead of
/// a hang.
const MAX_ISBN_ATTEMPTS: usize = 1_000;

/// Lower bound of the purchase price range, in cents.
const MIN_PRICE_CENTS: i64 = 500;

/// Upper bound of the purchase price range, in cents (exclusive).
const MAX_PRICE_CENTS: i64 = 2_500;

// Stable salts so every parallel task derives a distinct RNG stream.
const PHASE_COUNTRIES: u64 = 1;
const PHASE_CUSTOMERS: u64 = 2;
const PHASE_GENRES: u64 = 3;
const PHASE_BOOKS: u64 = 4;
const PHASE_SHOPS: u64 = 5;
const PHASE_YEARS: u64 = 6;
const PHASE_PURCHASES: u64 = 7;

/// Headline counts of one generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetMetrics {
    book_count: usize,
    country_count: usize,
    shop_count: usize,
}

impl DatasetMetrics {
    /// Total generated books.
    #[must_use]
    pub const fn book_count(&self) -> usize {
        self.book_count
    }

    /// Total generated countries.
    #[must_use]
    pub const fn country_count(&self) -> usize {
        self.country_count
    }

    /// Total generated shops.
    #[must_use]
    pub const fn shop_count(&self) -> usize {
        self.shop_count
    }
}

impl fmt::Display for DatasetMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} books in {} countries with {} shops",
            self.book_count, self.country_count, self.shop_count
        )
    }
}

/// Orchestrates the generation phases and aggregates metrics.
///
/// `generate` is synchronous from the caller's perspective: it returns
/// only once every phase's parallel tasks have joined. The first
/// unrecovered failure in a phase aborts the remaining work of that phase
/// and propagates; entities already handed to a repository remain.
pub struct DatasetGenerator {
    books: Arc<Books>,
    shops: Arc<Shops>,
    customers: Arc<Customers>,
    purchases: Arc<Purchases>,
    profile: AmountProfile,
    persister: Arc<dyn Persister>,
    seed: u64,
    today: NaiveDate,
    now: NaiveDateTime,
}

impl DatasetGenerator {
    /// Creates a generator over the given repositories with a random seed.
    #[must_use]
    pub fn new(
        books: Arc<Books>,
        shops: Arc<Shops>,
        customers: Arc<Customers>,
        purchases: Arc<Purchases>,
        profile: AmountProfile,
        persister: Arc<dyn Persister>,
    ) -> Self {
        let now = Local::now().naive_local();
        Self {
            books,
            shops,
            customers,
            purchases,
            profile,
            persister,
            seed: rand::rng().random(),
            today: now.date(),
            now,
        }
    }

    /// Pins the base seed, making generated volumes reproducible.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Generates the full dataset and hands every phase's output to its
    /// repository.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] on the first unrecovered failure in any
    /// phase, including persistence failures surfaced by a repository.
    pub fn generate(&self) -> Result<DatasetMetrics, GenerationError> {
        let registry = DedupRegistry::new();
        let locales = self.supported_locales();
        info!(locales = locales.len(), "starting dataset generation");

        let mut countries: Vec<CountryModel> = locales
            .par_iter()
            .enumerate()
            .map(|(index, locale)| self.create_country(&registry, index, *locale))
            .collect();

        self.create_books(&registry, &countries)?;
        self.create_shops(&registry, &mut countries)?;
        self.create_purchases(&countries)?;

        let metrics = DatasetMetrics {
            book_count: self.books.count(),
            country_count: countries.len(),
            shop_count: self.shops.count(),
        };

        // Release the run's transient working sets. Repository contents
        // are untouched; cache eviction stays a caller decision.
        registry.dispose();
        for country in &mut countries {
            country.dispose();
        }
        drop(countries);

        info!(%metrics, "finished dataset generation");
        Ok(metrics)
    }

    fn supported_locales(&self) -> Vec<Locale> {
        let all = Locale::ALL;
        // A negative bound is the validated -1 "unlimited" sentinel.
        let Ok(max) = usize::try_from(self.profile.max_countries()) else {
            return all.to_vec();
        };
        all[..max.min(all.len())].to_vec()
    }

    fn create_country(
        &self,
        registry: &DedupRegistry,
        index: usize,
        locale: Locale,
    ) -> CountryModel {
        let provider = FakeData::new(locale);
        let mut rng = self.task_rng(&[PHASE_COUNTRIES, index as u64]);
        let country = Arc::new(Country::new(locale.country_name(), locale.country_code()));

        let mut states: HashMap<String, Arc<State>> = HashMap::new();
        let mut seen_cities: HashSet<String> = HashSet::new();
        let mut cities: Vec<Arc<City>> = Vec::new();
        for _ in 0..self.random_count(&mut rng, self.profile.max_cities_per_country()) {
            let city_name = provider.city_name(&mut rng);
            if seen_cities.insert(city_name.clone()) {
                let state_name = provider.state_name(&mut rng);
                let state = Arc::clone(states.entry(state_name.clone()).or_insert_with(|| {
                    Arc::new(State::new(state_name, Arc::clone(&country)))
                }));
                cities.push(Arc::new(City::new(city_name, state)));
            }
        }

        let customers_by_city: Vec<Vec<Arc<Customer>>> = cities
            .par_iter()
            .enumerate()
            .map(|(city_index, city)| {
                let mut rng =
                    self.task_rng(&[PHASE_CUSTOMERS, index as u64, city_index as u64]);
                (0..self.random_count(&mut rng, self.profile.max_customers_per_city()))
                    .map(|_| {
                        let name = provider.full_name(&mut rng);
                        let address = self.fake_address(&provider, &mut rng, city);
                        Arc::new(Customer::new(registry.next_id(), name, address))
                    })
                    .collect()
            })
            .collect();

        let model = CountryModel::new(locale, country, cities, customers_by_city);
        info!(
            country = locale.country_name(),
            cities = model.cities().len(),
            customers = model.customer_count(),
            "generated country"
        );
        model
    }

    fn create_books(
        &self,
        registry: &DedupRegistry,
        countries: &[CountryModel],
    ) -> Result<(), GenerationError> {
        let genres = self.create_genres();

        countries
            .par_iter()
            .enumerate()
            .try_for_each(|(index, country)| -> Result<(), GenerationError> {
                let mut rng = self.task_rng(&[PHASE_BOOKS, index as u64]);
                let provider = FakeData::new(country.locale());

                let publishers = self.create_publishers(&provider, &mut rng, country)?;
                let authors = self.create_authors(&provider, &mut rng, country)?;
                let language = Arc::new(Language::new(country.locale().tag()));

                let count = self.random_count(&mut rng, self.profile.max_books_per_country());
                let mut books = Vec::with_capacity(count as usize);
                for _ in 0..count {
                    let book = self.create_book(
                        registry, &provider, &mut rng, &genres, &publishers, &authors, &language,
                    )?;
                    books.push(Arc::new(book));
                }

                info!(
                    country = country.country().display_name(),
                    books = books.len(),
                    "generated books"
                );
                registry.add_books(books);
                Ok(())
            })?;

        self.books.add_all(registry.book_pool(), &*self.persister)?;
        Ok(())
    }

    fn create_genres(&self) -> Vec<Arc<Genre>> {
        let mut rng = self.task_rng(&[PHASE_GENRES]);
        let provider = FakeData::new(Locale::EnUs);
        let mut seen: HashSet<String> = HashSet::new();
        let mut genres = Vec::new();
        for _ in 0..self.random_count(&mut rng, self.profile.max_genres()) {
            let name = provider.genre(&mut rng);
            if seen.insert(name.clone()) {
                genres.push(Arc::new(Genre::new(name)));
            }
        }
        genres
    }

    fn create_publishers<R: Rng>(
        &self,
        provider: &FakeData,
        rng: &mut R,
        country: &CountryModel,
    ) -> Result<Vec<Arc<Publisher>>, GenerationError> {
        let mut seen: HashSet<String> = HashSet::new();
        let mut publishers = Vec::new();
        for _ in 0..self.random_count(rng, self.profile.max_publishers_per_country()) {
            let name = provider.publisher(rng);
            if seen.insert(name.clone()) {
                let city = self.random_city(rng, country)?;
                let address = self.fake_address(provider, rng, &city);
                publishers.push(Arc::new(Publisher::new(name, address)));
            }
        }
        Ok(publishers)
    }

    fn create_authors<R: Rng>(
        &self,
        provider: &FakeData,
        rng: &mut R,
        country: &CountryModel,
    ) -> Result<Vec<Arc<Author>>, GenerationError> {
        let mut seen: HashSet<String> = HashSet::new();
        let mut authors = Vec::new();
        for _ in 0..self.random_count(rng, self.profile.max_authors_per_country()) {
            let name = provider.author(rng);
            if seen.insert(name.clone()) {
                let city = self.random_city(rng, country)?;
                let address = self.fake_address(provider, rng, &city);
                authors.push(Arc::new(Author::new(name, address)));
            }
        }
        Ok(authors)
    }

    #[expect(clippy::too_many_arguments, reason = "internal phase plumbing")]
    fn create_book<R: Rng>(
        &self,
        registry: &DedupRegistry,
        provider: &FakeData,
        rng: &mut R,
        genres: &[Arc<Genre>],
        publishers: &[Arc<Publisher>],
        authors: &[Arc<Author>],
        language: &Arc<Language>,
    ) -> Result<Book, GenerationError> {
        let title = provider.book_title(rng);
        let isbn = self.reserve_isbn(registry, provider, rng)?;
        let genre = pick(rng, genres, "genres")?;
        let publisher = pick(rng, publishers, "publishers")?;
        let author = pick(rng, authors, "authors")?;
        let purchase_price = Decimal::new(rng.random_range(MIN_PRICE_CENTS..MAX_PRICE_CENTS), 2);
        let retail_price = (purchase_price * Decimal::new(111, 2)).round_dp(2);
        Ok(Book::new(
            isbn,
            title,
            author,
            genre,
            publisher,
            Arc::clone(language),
            purchase_price,
            retail_price,
        ))
    }

    /// Requests ISBN candidates until the registry accepts one.
    ///
    /// The test-and-insert is atomic inside the registry, so no two tasks
    /// can both observe the same candidate as available.
    fn reserve_isbn<R: Rng>(
        &self,
        registry: &DedupRegistry,
        provider: &FakeData,
        rng: &mut R,
    ) -> Result<String, GenerationError> {
        for _ in 0..MAX_ISBN_ATTEMPTS {
            let candidate = provider.isbn13(rng, true);
            if registry.try_reserve(&candidate) {
                return Ok(candidate);
            }
        }
        Err(GenerationError::IsbnSpaceExhausted {
            attempts: MAX_ISBN_ATTEMPTS,
        })
    }

    fn create_shops(
        &self,
        registry: &DedupRegistry,
        countries: &mut [CountryModel],
    ) -> Result<(), GenerationError> {
        let pool = registry.book_pool();

        countries
            .par_iter_mut()
            .enumerate()
            .for_each(|(index, country)| {
                let mut rng = self.task_rng(&[PHASE_SHOPS, index as u64]);
                let provider = FakeData::new(country.locale());
                let cities: Vec<Arc<City>> = country.cities().to_vec();

                let mut shops: Vec<Arc<Shop>> = Vec::new();
                for city in &cities {
                    for number in 0..self.random_count(&mut rng, self.profile.max_shops_per_city())
                    {
                        shops.push(Arc::new(
                            self.create_shop(&provider, &mut rng, &pool, city, number),
                        ));
                    }
                }

                info!(
                    country = country.country().display_name(),
                    shops = shops.len(),
                    "generated shops"
                );
                country.set_shops(shops);
            });

        for country in countries.iter() {
            self.shops
                .add_all(country.shops().to_vec(), &*self.persister)?;
        }
        Ok(())
    }

    fn create_shop<R: Rng>(
        &self,
        provider: &FakeData,
        rng: &mut R,
        pool: &[Arc<Book>],
        city: &Arc<City>,
        number: u32,
    ) -> Shop {
        let name = format!("{} Shop {number}", city.name());
        let address = self.fake_address(provider, rng, city);

        let employees: Vec<Arc<Employee>> = (0..self
            .random_count(rng, self.profile.max_employees_per_shop()))
            .map(|_| {
                let name = provider.full_name(rng);
                let address = self.fake_address(provider, rng, city);
                Arc::new(Employee::new(name, address))
            })
            .collect();

        let mut stocked: HashSet<String> = HashSet::new();
        let mut entries: Vec<(Arc<Book>, u32)> = Vec::new();
        for _ in 0..self.random_count(rng, self.profile.max_books_per_shop()) {
            if let Some(book) = pool.choose(rng) {
                if stocked.insert(book.isbn().to_owned()) {
                    entries.push((Arc::clone(book), rng.random_range(1..=50)));
                }
            }
        }

        Shop::new(name, address, employees, Inventory::new(entries))
    }

    fn create_purchases(&self, countries: &[CountryModel]) -> Result<(), GenerationError> {
        let mut rng = self.task_rng(&[PHASE_YEARS]);
        let current_year = self.today.year();
        let age = self.random_max(&mut rng, self.profile.max_age_of_shops_in_years());
        let start_year = first_purchase_year(current_year, age);

        let mut all_customers: HashSet<Arc<Customer>> = HashSet::new();
        for year in start_year..=current_year {
            let per_country: Vec<Vec<Arc<Purchase>>> = countries
                .par_iter()
                .enumerate()
                .map(|(index, country)| self.create_country_purchases(index, country, year))
                .collect::<Result<_, _>>()?;
            let batch: Vec<Arc<Purchase>> = per_country.into_iter().flatten().collect();

            info!(year, purchases = batch.len(), "generated purchases");
            let referenced = self.purchases.init(year, batch, &*self.persister)?;
            all_customers.extend(referenced);
        }

        let mut customers: Vec<Arc<Customer>> = all_customers.into_iter().collect();
        customers.sort_by_key(|customer| customer.id());
        self.customers.add_all(customers, &*self.persister)?;
        Ok(())
    }

    fn create_country_purchases(
        &self,
        country_index: usize,
        country: &CountryModel,
        year: i32,
    ) -> Result<Vec<Arc<Purchase>>, GenerationError> {
        let mut purchases = Vec::new();
        for (shop_index, shop) in country.shops().iter().enumerate() {
            let Some(inventory) = shop.inventory() else {
                continue;
            };
            if inventory.entries().is_empty() {
                continue;
            }
            let city_index = country.city_index(shop.address().city().name());

            for (employee_index, employee) in shop.employees().iter().enumerate() {
                let mut rng = self.task_rng(&[
                    PHASE_PURCHASES,
                    u64::from(year.unsigned_abs()),
                    country_index as u64,
                    shop_index as u64,
                    employee_index as u64,
                ]);

                let count = self
                    .random_count(&mut rng, self.profile.max_purchases_per_employee_per_year());
                for _ in 0..count {
                    // One in ten purchases is a traveler from anywhere in
                    // the country; the rest are local to the shop's city.
                    let customer = if rng.random_ratio(1, 10) {
                        country.random_customer(&mut rng)
                    } else {
                        city_index
                            .and_then(|ci| country.random_customer_of_city(&mut rng, ci))
                    }
                    .ok_or_else(|| GenerationError::NoCustomers {
                        country: country.country().display_name().to_owned(),
                    })?;

                    let timestamp = self.random_timestamp(&mut rng, year);

                    let mut items = Vec::new();
                    for _ in 0..self.random_count(&mut rng, self.profile.max_items_per_purchase())
                    {
                        if let Some((book, _)) = inventory.entries().choose(&mut rng) {
                            items.push(PurchaseItem::new(
                                Arc::clone(book),
                                rng.random_range(1..=3),
                            ));
                        }
                    }

                    purchases.push(Arc::new(Purchase::new(
                        Arc::clone(shop),
                        Arc::clone(employee),
                        customer,
                        timestamp,
                        items,
                    )));
                }
            }
        }
        Ok(purchases)
    }

    fn random_timestamp<R: Rng>(&self, rng: &mut R, year: i32) -> NaiveDateTime {
        let current = year == self.today.year();
        let month = if current {
            rng.random_range(1..=self.today.month())
        } else {
            rng.random_range(1..=12)
        };
        let mut day = rng.random_range(1..=days_in_month(year, month));
        if current && month == self.today.month() && day >= self.today.day() {
            day = (self.today.day() - 1).max(1);
        }
        let hour = rng.random_range(8..=18);
        let minute = rng.random_range(0..60);
        let second = rng.random_range(0..60);

        // Day is clamped to the month length, so the date is always valid.
        let timestamp = NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_opt(hour, minute, second))
            .unwrap_or_default();
        if current && timestamp >= self.now {
            return self.now - Duration::seconds(1);
        }
        timestamp
    }

    fn random_city<R: Rng>(
        &self,
        rng: &mut R,
        country: &CountryModel,
    ) -> Result<Arc<City>, GenerationError> {
        country
            .random_city(rng)
            .map(Arc::clone)
            .ok_or_else(|| GenerationError::NoCities {
                country: country.country().display_name().to_owned(),
            })
    }

    fn fake_address<R: Rng>(&self, provider: &FakeData, rng: &mut R, city: &Arc<City>) -> Address {
        Address::new(
            provider.street_address(rng),
            provider.secondary_address(rng),
            provider.zip_code(rng),
            Arc::clone(city),
        )
    }

    /// Draws in `[0, bound)`, raised to at least `floor(bound * min_ratio)`.
    fn random_max<R: Rng>(&self, rng: &mut R, bound: u32) -> u32 {
        let mut max = if bound == 0 {
            0
        } else {
            rng.random_range(0..bound)
        };
        let min_ratio = self.profile.min_ratio();
        if min_ratio > 0.0 {
            #[expect(clippy::cast_possible_truncation, reason = "floor of a bounded ratio")]
            #[expect(clippy::cast_sign_loss, reason = "min_ratio is validated non-negative")]
            let floor = (f64::from(bound) * min_ratio) as u32;
            max = max.max(floor);
        }
        max
    }

    /// Number of units for one variable-length piece of work, always at
    /// least one (the inclusive `0..=random_max` range of the original
    /// design).
    fn random_count<R: Rng>(&self, rng: &mut R, bound: u32) -> u32 {
        self.random_max(rng, bound) + 1
    }

    fn task_rng(&self, parts: &[u64]) -> ChaCha8Rng {
        let mut state = self.seed;
        for part in parts {
            state = state
                .rotate_left(17)
                .wrapping_add(part.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        }
        ChaCha8Rng::seed_from_u64(state)
    }
}

/// First year of a purchase window spanning `age` years up to and
/// including `current_year`. An age of zero still yields one year.
fn first_purchase_year(current_year: i32, age: u32) -> i32 {
    let span = i32::try_from(age).unwrap_or(i32::MAX).max(1);
    current_year.saturating_sub(span) + 1
}

const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
    }
}

/// Uniform pick from a pool that must not be empty.
fn pick<T, R: Rng>(
    rng: &mut R,
    items: &[Arc<T>],
    pool: &'static str,
) -> Result<Arc<T>, GenerationError> {
    items
        .choose(rng)
        .map(Arc::clone)
        .ok_or(GenerationError::EmptyPool { pool })
}

#[cfg(test)]
mod tests {
    use chrono::Timelike;
    use rstest::rstest;

    use crate::persist::DiscardPersister;
    use crate::profile::AmountProfile;

    use super::*;

    fn profile_with_ratio(min_ratio: f64) -> AmountProfile {
        let json = format!(
            r#"{{
                "maxCountries": 1,
                "maxCitiesPerCountry": 3,
                "maxCustomersPerCity": 3,
                "maxGenres": 3,
                "maxPublishersPerCountry": 2,
                "maxAuthorsPerCountry": 2,
                "maxBooksPerCountry": 5,
                "maxShopsPerCity": 1,
                "maxBooksPerShop": 3,
                "maxEmployeesPerShop": 1,
                "maxAgeOfShopsInYears": 1,
                "maxPurchasesPerEmployeePerYear": 2,
                "maxItemsPerPurchase": 1,
                "minRatio": {min_ratio}
            }}"#
        );
        AmountProfile::from_json(&json).expect("valid profile")
    }

    fn generator(min_ratio: f64) -> DatasetGenerator {
        DatasetGenerator::new(
            Arc::new(Books::new()),
            Arc::new(Shops::new()),
            Arc::new(Customers::new()),
            Arc::new(Purchases::new()),
            profile_with_ratio(min_ratio),
            Arc::new(DiscardPersister),
        )
        .with_seed(42)
    }

    #[test]
    fn random_max_with_full_ratio_collapses_to_the_bound() {
        let generator = generator(1.0);
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        for _ in 0..100 {
            assert_eq!(generator.random_max(&mut rng, 7), 7);
        }
    }

    #[test]
    fn random_max_with_zero_ratio_spans_the_half_open_range() {
        let generator = generator(0.0);
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let draws: Vec<u32> = (0..500).map(|_| generator.random_max(&mut rng, 5)).collect();

        assert!(draws.iter().all(|draw| *draw < 5));
        assert!(draws.contains(&0));
        assert!(draws.contains(&4));
    }

    #[test]
    fn random_count_is_always_at_least_one() {
        let generator = generator(0.0);
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        assert_eq!(generator.random_count(&mut rng, 0), 1);
        for _ in 0..100 {
            assert!(generator.random_count(&mut rng, 4) >= 1);
        }
    }

    #[test]
    fn past_year_timestamps_stay_within_their_year() {
        let generator = generator(0.0);
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        for _ in 0..200 {
            let timestamp = generator.random_timestamp(&mut rng, 2019);
            assert_eq!(timestamp.year(), 2019);
            assert!((8..=18).contains(&timestamp.hour()));
        }
    }

    #[test]
    fn current_year_timestamps_are_strictly_before_now() {
        let generator = generator(0.0);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let current_year = Local::now().date_naive().year();

        for _ in 0..200 {
            let timestamp = generator.random_timestamp(&mut rng, current_year);
            assert!(timestamp < Local::now().naive_local());
        }
    }

    #[rstest]
    #[case(2020, 2, 29)]
    #[case(2019, 2, 28)]
    #[case(2000, 2, 29)]
    #[case(1900, 2, 28)]
    #[case(2021, 4, 30)]
    #[case(2021, 12, 31)]
    fn month_lengths_respect_leap_years(#[case] year: i32, #[case] month: u32, #[case] days: u32) {
        assert_eq!(days_in_month(year, month), days);
    }

    #[rstest]
    #[case::three_year_window(2026, 3, 2024)]
    #[case::single_year(2026, 1, 2026)]
    #[case::zero_age_still_covers_one_year(2026, 0, 2026)]
    fn purchase_window_spans_age_years(
        #[case] current_year: i32,
        #[case] age: u32,
        #[case] expected_start: i32,
    ) {
        assert_eq!(first_purchase_year(current_year, age), expected_start);
    }

    #[test]
    fn task_rng_is_stable_per_task_index() {
        let generator = generator(0.0);

        let a: u64 = generator.task_rng(&[PHASE_BOOKS, 3]).random();
        let b: u64 = generator.task_rng(&[PHASE_BOOKS, 3]).random();
        let c: u64 = generator.task_rng(&[PHASE_BOOKS, 4]).random();

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn metrics_display_reads_naturally() {
        let metrics = DatasetMetrics {
            book_count: 10,
            country_count: 2,
            shop_count: 5,
        };
        assert_eq!(metrics.to_string(), "10 books in 2 countries with 5 shops");
    }
}

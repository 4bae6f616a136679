//! Transient per-locale working set.
//!
//! A [`CountryModel`] is built once during the country phase, read by the
//! book, shop, and purchase phases, and explicitly disposed when the run
//! finishes. Cities keep their generation order so uniform random
//! selection can pick by index.

use std::collections::HashMap;
use std::sync::Arc;

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::entities::{City, Country, Customer};
use crate::provider::Locale;
use crate::shop::Shop;

/// Per-locale working set of cities, their customers, and shops.
#[derive(Debug)]
pub struct CountryModel {
    locale: Locale,
    country: Arc<Country>,
    cities: Vec<Arc<City>>,
    customers_by_city: Vec<Vec<Arc<Customer>>>,
    city_indices: HashMap<String, usize>,
    shops: Vec<Arc<Shop>>,
}

impl CountryModel {
    /// Creates a working set from index-aligned city and customer lists.
    #[must_use]
    pub fn new(
        locale: Locale,
        country: Arc<Country>,
        cities: Vec<Arc<City>>,
        customers_by_city: Vec<Vec<Arc<Customer>>>,
    ) -> Self {
        let city_indices = cities
            .iter()
            .enumerate()
            .map(|(index, city)| (city.name().to_owned(), index))
            .collect();
        Self {
            locale,
            country,
            cities,
            customers_by_city,
            city_indices,
            shops: Vec::new(),
        }
    }

    /// The locale this working set was generated for.
    #[must_use]
    pub const fn locale(&self) -> Locale {
        self.locale
    }

    /// The country entity.
    #[must_use]
    pub const fn country(&self) -> &Arc<Country> {
        &self.country
    }

    /// Cities in generation order.
    #[must_use]
    pub fn cities(&self) -> &[Arc<City>] {
        &self.cities
    }

    /// Total customers across all cities.
    #[must_use]
    pub fn customer_count(&self) -> usize {
        self.customers_by_city.iter().map(Vec::len).sum()
    }

    /// Index of the city with the given name, if present.
    #[must_use]
    pub fn city_index(&self, name: &str) -> Option<usize> {
        self.city_indices.get(name).copied()
    }

    /// Uniform random city pick by index.
    pub fn random_city<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Arc<City>> {
        self.cities.choose(rng)
    }

    /// Picks a random city, then a random customer within it.
    pub fn random_customer<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Arc<Customer>> {
        let customers = self.customers_by_city.choose(rng)?;
        customers.choose(rng).map(Arc::clone)
    }

    /// Picks a random customer of the city at the given index.
    pub fn random_customer_of_city<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        city_index: usize,
    ) -> Option<Arc<Customer>> {
        self.customers_by_city
            .get(city_index)?
            .choose(rng)
            .map(Arc::clone)
    }

    /// Hands the country's generated shops to the working set.
    pub fn set_shops(&mut self, shops: Vec<Arc<Shop>>) {
        self.shops = shops;
    }

    /// Shops generated for this country.
    #[must_use]
    pub fn shops(&self) -> &[Arc<Shop>] {
        &self.shops
    }

    /// Clears all held collections to release memory promptly.
    pub fn dispose(&mut self) {
        self.cities.clear();
        for customers in &mut self.customers_by_city {
            customers.clear();
        }
        self.customers_by_city.clear();
        self.city_indices.clear();
        self.shops.clear();
    }
}

//! Data amount configuration.
//!
//! This module defines [`AmountProfile`], the configuration that bounds how
//! much synthetic data of each kind is generated. Every bound is an upper
//! cap on a uniform draw; `min_ratio` raises draws to a configurable floor
//! so large runs still produce a guaranteed minimum volume.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::ProfileError;

/// Sentinel for "generate every supported locale".
pub const UNLIMITED_COUNTRIES: i32 = -1;

/// Configuration bounding the generated data volumes.
///
/// All bounds are inclusive upper caps fed into the generator's
/// `random_max`/`random_count` helpers; a bound of `b` yields between 1 and
/// `b + 1` units of work, and `min_ratio` pins the draw to at least
/// `floor(b * min_ratio)`.
///
/// # Example
///
/// ```
/// use bookstore_data::AmountProfile;
///
/// let json = r#"{
///     "maxCountries": 2,
///     "maxCitiesPerCountry": 10,
///     "maxCustomersPerCity": 50,
///     "maxGenres": 10,
///     "maxPublishersPerCountry": 10,
///     "maxAuthorsPerCountry": 20,
///     "maxBooksPerCountry": 50,
///     "maxShopsPerCity": 2,
///     "maxBooksPerShop": 30,
///     "maxEmployeesPerShop": 5,
///     "maxAgeOfShopsInYears": 3,
///     "maxPurchasesPerEmployeePerYear": 30,
///     "maxItemsPerPurchase": 3,
///     "minRatio": 0.5
/// }"#;
///
/// let profile = AmountProfile::from_json(json).expect("valid profile");
/// assert_eq!(profile.max_countries(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AmountProfile {
    max_countries: i32,
    max_cities_per_country: u32,
    max_customers_per_city: u32,
    max_genres: u32,
    max_publishers_per_country: u32,
    max_authors_per_country: u32,
    max_books_per_country: u32,
    max_shops_per_city: u32,
    max_books_per_shop: u32,
    max_employees_per_shop: u32,
    max_age_of_shops_in_years: u32,
    max_purchases_per_employee_per_year: u32,
    max_items_per_purchase: u32,
    min_ratio: f64,
}

impl AmountProfile {
    /// Parses a profile from a JSON string and validates it.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError`] if the JSON is malformed, `minRatio` is
    /// outside `[0, 1]`, or `maxCountries` is an invalid negative value.
    pub fn from_json(json: &str) -> Result<Self, ProfileError> {
        let profile: Self =
            serde_json::from_str(json).map_err(|e| ProfileError::ParseError {
                message: e.to_string(),
            })?;
        profile.validate()?;
        Ok(profile)
    }

    /// Loads a profile from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError`] if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, ProfileError> {
        let contents = fs::read_to_string(path).map_err(|e| ProfileError::IoError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_json(&contents)
    }

    fn validate(&self) -> Result<(), ProfileError> {
        if !(0.0..=1.0).contains(&self.min_ratio) {
            return Err(ProfileError::InvalidMinRatio {
                value: self.min_ratio,
            });
        }
        if self.max_countries < UNLIMITED_COUNTRIES {
            return Err(ProfileError::InvalidMaxCountries {
                value: self.max_countries,
            });
        }
        Ok(())
    }

    /// A small dataset, suitable for tests and quick demos.
    #[must_use]
    pub const fn small() -> Self {
        Self {
            max_countries: 2,
            max_cities_per_country: 10,
            max_customers_per_city: 50,
            max_genres: 10,
            max_publishers_per_country: 10,
            max_authors_per_country: 20,
            max_books_per_country: 50,
            max_shops_per_city: 2,
            max_books_per_shop: 30,
            max_employees_per_shop: 5,
            max_age_of_shops_in_years: 3,
            max_purchases_per_employee_per_year: 30,
            max_items_per_purchase: 3,
            min_ratio: 0.1,
        }
    }

    /// A medium dataset, the default profile.
    #[must_use]
    pub const fn medium() -> Self {
        Self {
            max_countries: 4,
            max_cities_per_country: 20,
            max_customers_per_city: 100,
            max_genres: 20,
            max_publishers_per_country: 20,
            max_authors_per_country: 50,
            max_books_per_country: 100,
            max_shops_per_city: 3,
            max_books_per_shop: 50,
            max_employees_per_shop: 10,
            max_age_of_shops_in_years: 6,
            max_purchases_per_employee_per_year: 60,
            max_items_per_purchase: 5,
            min_ratio: 0.5,
        }
    }

    /// A large dataset covering every supported locale.
    #[must_use]
    pub const fn large() -> Self {
        Self {
            max_countries: UNLIMITED_COUNTRIES,
            max_cities_per_country: 50,
            max_customers_per_city: 500,
            max_genres: 25,
            max_publishers_per_country: 50,
            max_authors_per_country: 100,
            max_books_per_country: 500,
            max_shops_per_city: 5,
            max_books_per_shop: 100,
            max_employees_per_shop: 20,
            max_age_of_shops_in_years: 10,
            max_purchases_per_employee_per_year: 120,
            max_items_per_purchase: 7,
            min_ratio: 0.75,
        }
    }

    /// Upper bound on generated countries, or [`UNLIMITED_COUNTRIES`].
    #[must_use]
    pub const fn max_countries(&self) -> i32 {
        self.max_countries
    }

    /// Upper bound on city name draws per country.
    #[must_use]
    pub const fn max_cities_per_country(&self) -> u32 {
        self.max_cities_per_country
    }

    /// Upper bound on customers per city.
    #[must_use]
    pub const fn max_customers_per_city(&self) -> u32 {
        self.max_customers_per_city
    }

    /// Upper bound on genre name draws.
    #[must_use]
    pub const fn max_genres(&self) -> u32 {
        self.max_genres
    }

    /// Upper bound on publisher name draws per country.
    #[must_use]
    pub const fn max_publishers_per_country(&self) -> u32 {
        self.max_publishers_per_country
    }

    /// Upper bound on author name draws per country.
    #[must_use]
    pub const fn max_authors_per_country(&self) -> u32 {
        self.max_authors_per_country
    }

    /// Upper bound on books per country.
    #[must_use]
    pub const fn max_books_per_country(&self) -> u32 {
        self.max_books_per_country
    }

    /// Upper bound on shops per city.
    #[must_use]
    pub const fn max_shops_per_city(&self) -> u32 {
        self.max_shops_per_city
    }

    /// Upper bound on inventory sample draws per shop.
    #[must_use]
    pub const fn max_books_per_shop(&self) -> u32 {
        self.max_books_per_shop
    }

    /// Upper bound on employees per shop.
    #[must_use]
    pub const fn max_employees_per_shop(&self) -> u32 {
        self.max_employees_per_shop
    }

    /// Upper bound on the purchase history window in years.
    #[must_use]
    pub const fn max_age_of_shops_in_years(&self) -> u32 {
        self.max_age_of_shops_in_years
    }

    /// Upper bound on purchases per employee per year.
    #[must_use]
    pub const fn max_purchases_per_employee_per_year(&self) -> u32 {
        self.max_purchases_per_employee_per_year
    }

    /// Upper bound on line items per purchase.
    #[must_use]
    pub const fn max_items_per_purchase(&self) -> u32 {
        self.max_items_per_purchase
    }

    /// Floor on generated volume as a fraction of each bound, in `[0, 1]`.
    #[must_use]
    pub const fn min_ratio(&self) -> f64 {
        self.min_ratio
    }
}

impl Default for AmountProfile {
    fn default() -> Self {
        Self::medium()
    }
}

//! Core value objects of the generated dataset.
//!
//! Forward composition owns its children (a country conceptually owns its
//! states and cities, a shop owns its address and employees); backward
//! links are non-owning [`Arc`] references so the deep referential graph
//! stays cycle-free. Entities referenced from many places (cities, books,
//! customers) are always handed around as `Arc`.

use std::hash::{Hash, Hasher};
use std::sync::Arc;

use rust_decimal::Decimal;

/// A country, identified by its English display name and ISO code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Country {
    display_name: String,
    code: String,
}

impl Country {
    /// Creates a country.
    #[must_use]
    pub fn new(display_name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            code: code.into(),
        }
    }

    /// English display name, e.g. "France".
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// ISO 3166-1 alpha-2 code, e.g. "FR".
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }
}

/// A state or region within a country.
#[derive(Debug, Clone)]
pub struct State {
    name: String,
    country: Arc<Country>,
}

impl State {
    /// Creates a state belonging to the given country.
    #[must_use]
    pub fn new(name: impl Into<String>, country: Arc<Country>) -> Self {
        Self {
            name: name.into(),
            country,
        }
    }

    /// State name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Country this state belongs to.
    #[must_use]
    pub fn country(&self) -> &Arc<Country> {
        &self.country
    }
}

/// A city within a state.
///
/// City names are unique within their country during generation.
#[derive(Debug, Clone)]
pub struct City {
    name: String,
    state: Arc<State>,
}

impl City {
    /// Creates a city belonging to the given state.
    #[must_use]
    pub fn new(name: impl Into<String>, state: Arc<State>) -> Self {
        Self {
            name: name.into(),
            state,
        }
    }

    /// City name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// State this city belongs to.
    #[must_use]
    pub fn state(&self) -> &Arc<State> {
        &self.state
    }
}

/// A postal address referencing, but not owning, its city.
#[derive(Debug, Clone)]
pub struct Address {
    street: String,
    secondary: String,
    zip_code: String,
    city: Arc<City>,
}

impl Address {
    /// Creates an address in the given city.
    #[must_use]
    pub fn new(
        street: impl Into<String>,
        secondary: impl Into<String>,
        zip_code: impl Into<String>,
        city: Arc<City>,
    ) -> Self {
        Self {
            street: street.into(),
            secondary: secondary.into(),
            zip_code: zip_code.into(),
            city,
        }
    }

    /// Street line.
    #[must_use]
    pub fn street(&self) -> &str {
        &self.street
    }

    /// Secondary line (apartment, suite).
    #[must_use]
    pub fn secondary(&self) -> &str {
        &self.secondary
    }

    /// Postal code.
    #[must_use]
    pub fn zip_code(&self) -> &str {
        &self.zip_code
    }

    /// The referenced city.
    #[must_use]
    pub fn city(&self) -> &Arc<City> {
        &self.city
    }
}

/// A customer with a globally unique, monotonically assigned id.
///
/// Equality and hashing use the id only, which is what allows cross-year
/// purchase aggregation to deduplicate customers.
#[derive(Debug, Clone)]
pub struct Customer {
    id: u64,
    name: String,
    address: Address,
}

impl Customer {
    /// Creates a customer with the given unique id.
    #[must_use]
    pub fn new(id: u64, name: impl Into<String>, address: Address) -> Self {
        Self {
            id,
            name: name.into(),
            address,
        }
    }

    /// Globally unique customer id.
    #[must_use]
    pub const fn id(&self) -> u64 {
        self.id
    }

    /// Full name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Home address.
    #[must_use]
    pub const fn address(&self) -> &Address {
        &self.address
    }
}

impl PartialEq for Customer {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Customer {}

impl Hash for Customer {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// A shop employee.
#[derive(Debug, Clone)]
pub struct Employee {
    name: String,
    address: Address,
}

impl Employee {
    /// Creates an employee.
    #[must_use]
    pub fn new(name: impl Into<String>, address: Address) -> Self {
        Self {
            name: name.into(),
            address,
        }
    }

    /// Full name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Home address.
    #[must_use]
    pub const fn address(&self) -> &Address {
        &self.address
    }
}

/// A book author.
#[derive(Debug, Clone)]
pub struct Author {
    name: String,
    address: Address,
}

impl Author {
    /// Creates an author.
    #[must_use]
    pub fn new(name: impl Into<String>, address: Address) -> Self {
        Self {
            name: name.into(),
            address,
        }
    }

    /// Full name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Home address.
    #[must_use]
    pub const fn address(&self) -> &Address {
        &self.address
    }
}

/// A book genre, deduplicated by name during generation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Genre {
    name: String,
}

impl Genre {
    /// Creates a genre.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Genre name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A publisher, deduplicated by name during generation.
#[derive(Debug, Clone)]
pub struct Publisher {
    name: String,
    address: Address,
}

impl Publisher {
    /// Creates a publisher.
    #[must_use]
    pub fn new(name: impl Into<String>, address: Address) -> Self {
        Self {
            name: name.into(),
            address,
        }
    }

    /// Publisher name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Business address.
    #[must_use]
    pub const fn address(&self) -> &Address {
        &self.address
    }
}

/// A publication language, identified by its BCP 47 tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Language {
    tag: String,
}

impl Language {
    /// Creates a language from a BCP 47 tag such as "en-US".
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into() }
    }

    /// The language tag.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }
}

/// A book; the ISBN is its identity key and globally unique per run.
#[derive(Debug, Clone)]
pub struct Book {
    isbn: String,
    title: String,
    author: Arc<Author>,
    genre: Arc<Genre>,
    publisher: Arc<Publisher>,
    language: Arc<Language>,
    purchase_price: Decimal,
    retail_price: Decimal,
}

impl Book {
    /// Creates a book.
    #[expect(clippy::too_many_arguments, reason = "plain value constructor")]
    #[must_use]
    pub fn new(
        isbn: impl Into<String>,
        title: impl Into<String>,
        author: Arc<Author>,
        genre: Arc<Genre>,
        publisher: Arc<Publisher>,
        language: Arc<Language>,
        purchase_price: Decimal,
        retail_price: Decimal,
    ) -> Self {
        Self {
            isbn: isbn.into(),
            title: title.into(),
            author,
            genre,
            publisher,
            language,
            purchase_price,
            retail_price,
        }
    }

    /// ISBN-13, globally unique across the generation run.
    #[must_use]
    pub fn isbn(&self) -> &str {
        &self.isbn
    }

    /// Book title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The book's author.
    #[must_use]
    pub fn author(&self) -> &Arc<Author> {
        &self.author
    }

    /// The book's genre.
    #[must_use]
    pub fn genre(&self) -> &Arc<Genre> {
        &self.genre
    }

    /// The book's publisher.
    #[must_use]
    pub fn publisher(&self) -> &Arc<Publisher> {
        &self.publisher
    }

    /// The book's publication language.
    #[must_use]
    pub fn language(&self) -> &Arc<Language> {
        &self.language
    }

    /// Price the shop pays per copy.
    #[must_use]
    pub const fn purchase_price(&self) -> Decimal {
        self.purchase_price
    }

    /// Price a customer pays per copy.
    #[must_use]
    pub const fn retail_price(&self) -> Decimal {
        self.retail_price
    }
}

impl PartialEq for Book {
    fn eq(&self, other: &Self) -> bool {
        self.isbn == other.isbn
    }
}

impl Eq for Book {}

impl Hash for Book {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.isbn.hash(state);
    }
}

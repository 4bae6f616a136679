//! Locale-bound fake-data provider.
//!
//! This module wraps the `fake` crate's raw, locale-aware fakers behind a
//! small provider type so the generator can request realistic names,
//! addresses, and book metadata per country. ISBN-13 codes are synthesized
//! locally with a valid check digit because they must be testable for
//! global uniqueness, not merely plausible.

use fake::Fake;
use fake::faker::address::raw::{
    BuildingNumber, CityName, SecondaryAddress, StateName, StreetName, ZipCode,
};
use fake::faker::company::raw::CompanyName;
use fake::faker::lorem::raw::{Word, Words};
use fake::faker::name::raw::Name;
use fake::locales::{AR_SA, EN, FR_FR, JA_JP, PT_BR, ZH_CN};
use rand::Rng;

/// Dispatches a raw faker over the provider's locale.
macro_rules! localized {
    ($locale:expr, $rng:expr, $faker:ident $(, $extra:expr)?) => {
        match $locale {
            Locale::EnUs => $faker(EN $(, $extra)?).fake_with_rng($rng),
            Locale::FrFr => $faker(FR_FR $(, $extra)?).fake_with_rng($rng),
            Locale::PtBr => $faker(PT_BR $(, $extra)?).fake_with_rng($rng),
            Locale::JaJp => $faker(JA_JP $(, $extra)?).fake_with_rng($rng),
            Locale::ZhCn => $faker(ZH_CN $(, $extra)?).fake_with_rng($rng),
            Locale::ArSa => $faker(AR_SA $(, $extra)?).fake_with_rng($rng),
        }
    };
}

/// A supported generation locale.
///
/// Each locale maps to one generated country and selects the `fake` locale
/// data used for names and addresses in that country.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Locale {
    /// English, United States.
    EnUs,
    /// French, France.
    FrFr,
    /// Portuguese, Brazil.
    PtBr,
    /// Japanese, Japan.
    JaJp,
    /// Chinese, China.
    ZhCn,
    /// Arabic, Saudi Arabia.
    ArSa,
}

impl Locale {
    /// Every supported locale, in generation order.
    pub const ALL: [Self; 6] = [
        Self::EnUs,
        Self::FrFr,
        Self::PtBr,
        Self::JaJp,
        Self::ZhCn,
        Self::ArSa,
    ];

    /// English display name of the locale's country.
    #[must_use]
    pub const fn country_name(self) -> &'static str {
        match self {
            Self::EnUs => "United States",
            Self::FrFr => "France",
            Self::PtBr => "Brazil",
            Self::JaJp => "Japan",
            Self::ZhCn => "China",
            Self::ArSa => "Saudi Arabia",
        }
    }

    /// ISO 3166-1 alpha-2 country code.
    #[must_use]
    pub const fn country_code(self) -> &'static str {
        match self {
            Self::EnUs => "US",
            Self::FrFr => "FR",
            Self::PtBr => "BR",
            Self::JaJp => "JP",
            Self::ZhCn => "CN",
            Self::ArSa => "SA",
        }
    }

    /// BCP 47 language tag.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::EnUs => "en-US",
            Self::FrFr => "fr-FR",
            Self::PtBr => "pt-BR",
            Self::JaJp => "ja-JP",
            Self::ZhCn => "zh-CN",
            Self::ArSa => "ar-SA",
        }
    }
}

/// Locale-scoped provider of realistic strings and codes.
///
/// All methods draw from the caller-supplied RNG, so output is
/// deterministic for a given generator state.
#[derive(Debug, Clone, Copy)]
pub struct FakeData {
    locale: Locale,
}

impl FakeData {
    /// Creates a provider bound to the given locale.
    #[must_use]
    pub const fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// The locale this provider is bound to.
    #[must_use]
    pub const fn locale(&self) -> Locale {
        self.locale
    }

    /// A person's full name.
    pub fn full_name<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        localized!(self.locale, rng, Name)
    }

    /// A street address line (building number and street name).
    pub fn street_address<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let number: String = localized!(self.locale, rng, BuildingNumber);
        let street: String = localized!(self.locale, rng, StreetName);
        format!("{number} {street}")
    }

    /// A secondary address line (apartment or suite).
    pub fn secondary_address<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        localized!(self.locale, rng, SecondaryAddress)
    }

    /// A postal code.
    pub fn zip_code<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        localized!(self.locale, rng, ZipCode)
    }

    /// A city name.
    pub fn city_name<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        localized!(self.locale, rng, CityName)
    }

    /// A state or region name.
    pub fn state_name<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        localized!(self.locale, rng, StateName)
    }

    /// A book title of two to four capitalized words.
    pub fn book_title<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let words: Vec<String> = localized!(self.locale, rng, Words, 2..5);
        title_case(&words)
    }

    /// A genre name.
    pub fn genre<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let word: String = localized!(self.locale, rng, Word);
        capitalize(&word)
    }

    /// An author's name.
    pub fn author<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        localized!(self.locale, rng, Name)
    }

    /// A publisher's name.
    pub fn publisher<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        localized!(self.locale, rng, CompanyName)
    }

    /// A random ISBN-13 candidate with a valid check digit.
    ///
    /// With `with_dashes` the code is grouped `978-g-pppp-tttt-c`;
    /// otherwise the thirteen digits are concatenated.
    pub fn isbn13<R: Rng + ?Sized>(&self, rng: &mut R, with_dashes: bool) -> String {
        let mut digits = [9u32, 7, 8, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0];
        for digit in &mut digits[3..12] {
            *digit = rng.random_range(0..10);
        }
        digits[12] = isbn13_check_digit(&digits[..12]);

        let mut out = String::with_capacity(17);
        for (index, digit) in digits.iter().enumerate() {
            if with_dashes && matches!(index, 3 | 4 | 8 | 12) {
                out.push('-');
            }
            out.push(char::from_digit(*digit, 10).unwrap_or('0'));
        }
        out
    }
}

/// Computes the ISBN-13 check digit over the first twelve digits.
fn isbn13_check_digit(digits: &[u32]) -> u32 {
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(index, digit)| if index % 2 == 0 { *digit } else { digit * 3 })
        .sum();
    (10 - sum % 10) % 10
}

/// Capitalizes the first character of each word and joins with spaces.
fn title_case(words: &[String]) -> String {
    words
        .iter()
        .map(|word| capitalize(word))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Capitalizes the first character of a word.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().collect::<String>() + chars.as_str()
    })
}

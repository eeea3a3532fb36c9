use chrono::{Days, Months, NaiveDate};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

use super::locale::{EN_GB, Locale, POSTCODE_INWARD_LETTERS};
use super::{Gender, GenerationError};

/// Widest digit string that still fits a `u64` draw.
pub const MAX_DIGIT_WIDTH: usize = 18;

/// Locale-aware fake value source.
///
/// The random source is owned by the faker and passed in by the caller,
/// so a seeded `StdRng` gives reproducible output.
pub struct Faker<R> {
    rng: R,
    locale: &'static Locale,
}

impl Faker<StdRng> {
    /// Faker over an OS-seeded generator and the en-GB locale.
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng(), &EN_GB)
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed), &EN_GB)
    }
}

impl<R: Rng> Faker<R> {
    pub fn new(rng: R, locale: &'static Locale) -> Self {
        Self { rng, locale }
    }

    pub fn locale(&self) -> &'static Locale {
        self.locale
    }

    /// Random version 4 UUID drawn from this faker's generator.
    pub fn uuid(&mut self) -> String {
        let bytes: [u8; 16] = self.rng.random();
        uuid::Builder::from_random_bytes(bytes)
            .into_uuid()
            .to_string()
    }

    /// Uniform choice from `list`. `what` names the list in the error.
    pub fn pick<'a>(
        &mut self,
        list: &'a [&'a str],
        what: &'static str,
    ) -> Result<&'a str, GenerationError> {
        list.choose(&mut self.rng)
            .copied()
            .ok_or(GenerationError::EmptyLocaleData(what))
    }

    /// Inclusive integer draw.
    pub fn int_in(&mut self, lo: u32, hi: u32) -> u32 {
        self.rng.random_range(lo..=hi)
    }

    /// Zero-padded numeric string of exactly `width` digits.
    pub fn random_digits(&mut self, width: usize) -> Result<String, GenerationError> {
        if width == 0 || width > MAX_DIGIT_WIDTH {
            return Err(GenerationError::InvalidDigitWidth(width));
        }
        let upper = 10u64.pow(width as u32);
        let n = self.rng.random_range(0..upper);
        Ok(format!("{n:0width$}"))
    }

    pub fn title(&mut self, gender: Option<Gender>) -> Result<String, GenerationError> {
        let gender = self.resolve_gender(gender);
        let list = match gender {
            Gender::Male => self.locale.male_titles,
            Gender::Female => self.locale.female_titles,
        };
        self.pick(list, "titles").map(str::to_string)
    }

    pub fn first_name(&mut self, gender: Option<Gender>) -> Result<String, GenerationError> {
        let gender = self.resolve_gender(gender);
        let list = match gender {
            Gender::Male => self.locale.male_first_names,
            Gender::Female => self.locale.female_first_names,
        };
        self.pick(list, "first names").map(str::to_string)
    }

    pub fn last_name(&mut self) -> Result<String, GenerationError> {
        self.pick(self.locale.last_names, "last names")
            .map(str::to_string)
    }

    pub fn street_address(&mut self) -> Result<String, GenerationError> {
        let name = self.pick(self.locale.street_names, "street names")?;
        let suffix = self.pick(self.locale.street_suffixes, "street suffixes")?;
        let number = self.int_in(1, 250);

        if self.rng.random_bool(0.2) {
            let flat = self.int_in(1, 40);
            Ok(format!("Flat {flat}, {number} {name} {suffix}"))
        } else {
            Ok(format!("{number} {name} {suffix}"))
        }
    }

    pub fn city(&mut self) -> Result<String, GenerationError> {
        self.pick(self.locale.cities, "cities").map(str::to_string)
    }

    /// Outward code (area + district) and inward code (sector + unit),
    /// e.g. `LS12 4QT`.
    pub fn postcode(&mut self) -> Result<String, GenerationError> {
        let area = self.pick(self.locale.postcode_areas, "postcode areas")?;
        let district = self.int_in(1, 29);
        let sector = self.int_in(0, 9);
        let unit: String = (0..2)
            .map(|_| {
                let idx = self.rng.random_range(0..POSTCODE_INWARD_LETTERS.len());
                POSTCODE_INWARD_LETTERS[idx] as char
            })
            .collect();
        Ok(format!("{area}{district} {sector}{unit}"))
    }

    /// Mailbox derived from a person's name.
    pub fn email(&mut self, first: &str, last: &str) -> Result<String, GenerationError> {
        let domain = self.pick(self.locale.email_domains, "email domains")?;
        let first = mailbox_part(first);
        let last = mailbox_part(last);

        let local = match self.int_in(0, 3) {
            0 => format!("{first}.{last}"),
            1 => format!("{first}{last}{}", self.int_in(1, 99)),
            2 => match first.chars().next() {
                Some(initial) => format!("{initial}{last}"),
                None => last,
            },
            _ => format!("{last}.{first}{}", self.int_in(1, 9)),
        };
        Ok(format!("{local}@{domain}"))
    }

    pub fn phone_number(&mut self) -> Result<String, GenerationError> {
        let format = self.pick(self.locale.landline_formats, "landline formats")?;
        Ok(self.numerify(format))
    }

    pub fn mobile_number(&mut self) -> Result<String, GenerationError> {
        let format = self.pick(self.locale.mobile_formats, "mobile formats")?;
        Ok(self.numerify(format))
    }

    pub fn company(&mut self) -> Result<String, GenerationError> {
        let a = self.last_name()?;
        match self.int_in(0, 2) {
            0 => {
                let suffix = self.pick(self.locale.company_suffixes, "company suffixes")?;
                Ok(format!("{a} {suffix}"))
            }
            1 => {
                let b = self.last_name()?;
                Ok(format!("{a} and {b}"))
            }
            _ => {
                let b = self.last_name()?;
                let c = self.last_name()?;
                Ok(format!("{a}, {b} and {c}"))
            }
        }
    }

    /// Birth date such that the age on `today` lies in `[min_age, max_age]`.
    pub fn date_of_birth(
        &mut self,
        today: NaiveDate,
        min_age: u32,
        max_age: u32,
    ) -> Result<NaiveDate, GenerationError> {
        if min_age > max_age {
            return Err(GenerationError::InvalidAgeRange {
                min: min_age,
                max: max_age,
            });
        }

        let latest = today
            .checked_sub_months(Months::new(min_age * 12))
            .ok_or(GenerationError::DateOutOfRange)?;
        // The day after the (max_age + 1)th birthday cutoff.
        let earliest = today
            .checked_sub_months(Months::new((max_age + 1) * 12))
            .and_then(|d| d.succ_opt())
            .ok_or(GenerationError::DateOutOfRange)?;

        let span = (latest - earliest).num_days().max(0) as u64;
        let offset = self.rng.random_range(0..=span);
        earliest
            .checked_add_days(Days::new(offset))
            .ok_or(GenerationError::DateOutOfRange)
    }

    /// Replace each `#` in `format` with a random digit.
    fn numerify(&mut self, format: &str) -> String {
        format
            .chars()
            .map(|c| match c {
                '#' => char::from(b'0' + self.rng.random_range(0..10u8)),
                other => other,
            })
            .collect()
    }

    fn resolve_gender(&mut self, gender: Option<Gender>) -> Gender {
        gender.unwrap_or_else(|| {
            if self.rng.random_bool(0.5) {
                Gender::Male
            } else {
                Gender::Female
            }
        })
    }
}

fn mailbox_part(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

pub mod faker;
pub mod locale;

use chrono::{NaiveDate, Utc};
use rand::Rng;
use serde::Deserialize;

use crate::models::{
    Address, Applicant, ApplicantPayload, Asset, BankDetails, Contact, Dealer, Employment,
    FinancialCalculation,
};

pub use faker::Faker;

pub const DEFAULT_ROLE: &str = "MAIN";
pub const GENDERS: &[&str] = &["MALE", "FEMALE"];
pub const MARITAL_STATUSES: &[&str] = &["SINGLE", "MARRIED", "DIVORCED", "WIDOWED"];

pub const MIN_AGE: u32 = 18;
pub const MAX_AGE: u32 = 70;
pub const MIN_INCOME: u32 = 20_000;
pub const MAX_INCOME: u32 = 60_000;
pub const ACCOUNT_NUMBER_DIGITS: usize = 8;

#[derive(Debug, Clone, PartialEq)]
pub enum GenerationError {
    EmptyLocaleData(&'static str),
    InvalidDigitWidth(usize),
    InvalidAgeRange { min: u32, max: u32 },
    DateOutOfRange,
    InvalidConfig(String),
}

impl std::fmt::Display for GenerationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerationError::EmptyLocaleData(what) => {
                write!(f, "Locale data unavailable: no {what}")
            }
            GenerationError::InvalidDigitWidth(width) => write!(
                f,
                "Invalid digit width {width}: expected 1..={}",
                faker::MAX_DIGIT_WIDTH
            ),
            GenerationError::InvalidAgeRange { min, max } => {
                write!(f, "Invalid age range: minimum {min} exceeds maximum {max}")
            }
            GenerationError::DateOutOfRange => write!(f, "Date of birth out of range"),
            GenerationError::InvalidConfig(msg) => write!(f, "Invalid config: {msg}"),
        }
    }
}

impl std::error::Error for GenerationError {}

/// Applicant gender as used for title and first-name selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn parse(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("MALE") {
            Some(Gender::Male)
        } else if s.eq_ignore_ascii_case("FEMALE") {
            Some(Gender::Female)
        } else {
            None
        }
    }
}

/// Client overrides for a generated applicant.
///
/// Unknown keys are ignored and supplied values are taken verbatim:
/// `gender` and `maritalStatus` are not checked against their usual values.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GenerateConfig {
    pub role: Option<String>,
    pub gender: Option<String>,
    pub marital_status: Option<String>,
}

/// Build a payload with ages measured against today's UTC date.
pub fn generate<R: Rng>(
    config: &GenerateConfig,
    faker: &mut Faker<R>,
) -> Result<ApplicantPayload, GenerationError> {
    generate_on(config, faker, Utc::now().date_naive())
}

pub fn generate_on<R: Rng>(
    config: &GenerateConfig,
    faker: &mut Faker<R>,
    today: NaiveDate,
) -> Result<ApplicantPayload, GenerationError> {
    let applicant = generate_applicant(config, faker, today)?;

    Ok(ApplicantPayload {
        applicants: vec![applicant],
        company_applicants: Vec::new(),
        asset: Asset::default(),
        dealer: Dealer::default(),
        financial_calculation: FinancialCalculation::default(),
        status: "PENDING".to_string(),
    })
}

fn generate_applicant<R: Rng>(
    config: &GenerateConfig,
    faker: &mut Faker<R>,
    today: NaiveDate,
) -> Result<Applicant, GenerationError> {
    let id = faker.uuid();
    let role = config.role.as_deref().unwrap_or(DEFAULT_ROLE).to_string();

    let gender = match &config.gender {
        Some(g) => g.clone(),
        None => faker.pick(GENDERS, "genders")?.to_string(),
    };
    let marital_status = match &config.marital_status {
        Some(m) => m.clone(),
        None => faker.pick(MARITAL_STATUSES, "marital statuses")?.to_string(),
    };

    let hint = Gender::parse(&gender);
    let title = faker.title(hint)?;
    let first_name = faker.first_name(hint)?;
    let last_name = faker.last_name()?;
    let date_of_birth = faker.date_of_birth(today, MIN_AGE, MAX_AGE)?;

    let address = Address {
        line1: faker.street_address()?,
        city: faker.city()?,
        postcode: faker.postcode()?,
        country: faker.locale().country.to_string(),
    };

    let contact = Contact {
        email: faker.email(&first_name, &last_name)?,
        phone: faker.phone_number()?,
        mobile: faker.mobile_number()?,
    };

    let employment = Employment {
        status: "EMPLOYED".to_string(),
        income: faker.int_in(MIN_INCOME, MAX_INCOME),
        employer: faker.company()?,
    };

    let bank_details = BankDetails {
        account_number: faker.random_digits(ACCOUNT_NUMBER_DIGITS)?,
        sort_code: format!(
            "{}-{}-{}",
            faker.random_digits(2)?,
            faker.random_digits(2)?,
            faker.random_digits(2)?
        ),
    };

    tracing::debug!(%id, %role, %gender, "Generated applicant");

    Ok(Applicant {
        id,
        role,
        title,
        first_name,
        last_name,
        gender,
        marital_status,
        date_of_birth: date_of_birth.format("%Y-%m-%d").to_string(),
        address,
        contact,
        employment,
        bank_details,
    })
}

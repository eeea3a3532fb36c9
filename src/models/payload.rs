use serde::{Deserialize, Serialize};

/// Submission document in the shape the Digital Sales API accepts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicantPayload {
    pub applicants: Vec<Applicant>,
    pub company_applicants: Vec<serde_json::Value>,
    pub asset: Asset,
    pub dealer: Dealer,
    pub financial_calculation: FinancialCalculation,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Applicant {
    pub id: String,
    pub role: String,
    pub title: String,
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub marital_status: String,
    pub date_of_birth: String,
    pub address: Address,
    pub contact: Contact,
    pub employment: Employment,
    pub bank_details: BankDetails,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub line1: String,
    pub city: String,
    pub postcode: String,
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub email: String,
    pub phone: String,
    pub mobile: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employment {
    pub status: String,
    pub income: u32,
    pub employer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankDetails {
    pub account_number: String,
    pub sort_code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    #[serde(rename = "type")]
    pub asset_type: String,
    pub make: String,
    pub model: String,
    pub year: u16,
    pub price: u32,
}

impl Default for Asset {
    fn default() -> Self {
        Asset {
            asset_type: "VEHICLE".to_string(),
            make: "Toyota".to_string(),
            model: "Corolla".to_string(),
            year: 2020,
            price: 15_000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dealer {
    pub name: String,
    pub code: String,
}

impl Default for Dealer {
    fn default() -> Self {
        Dealer {
            name: "Test Dealer".to_string(),
            code: "TD001".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialCalculation {
    pub deposit: u32,
    pub loan_amount: u32,
    pub term: u32,
    pub rate: f64,
}

impl Default for FinancialCalculation {
    fn default() -> Self {
        FinancialCalculation {
            deposit: 3_000,
            loan_amount: 12_000,
            term: 36,
            rate: 5.9,
        }
    }
}

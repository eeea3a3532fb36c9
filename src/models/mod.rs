pub mod payload;

pub use payload::{
    Address, Applicant, ApplicantPayload, Asset, BankDetails, Contact, Dealer, Employment,
    FinancialCalculation,
};

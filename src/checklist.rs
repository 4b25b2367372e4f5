//! Purchase document checklist for a buyer
//!
//! The list depends only on who is buying and how: employment type,
//! nationality and residence, whether a mortgage is needed and whether the
//! property is off-plan or ready.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CalcError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuyerType {
    Salaried,
    SelfEmployed,
    Investor,
    Other,
}

impl BuyerType {
    pub fn label(&self) -> &'static str {
        match self {
            BuyerType::Salaried => "salaried",
            BuyerType::SelfEmployed => "self_employed",
            BuyerType::Investor => "investor",
            BuyerType::Other => "other",
        }
    }
}

impl fmt::Display for BuyerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for BuyerType {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "SALARIED" => Ok(BuyerType::Salaried),
            "SELF_EMPLOYED" => Ok(BuyerType::SelfEmployed),
            "INVESTOR" => Ok(BuyerType::Investor),
            "OTHER" => Ok(BuyerType::Other),
            _ => Err(CalcError::validation(
                "buyer_type",
                format!("expected salaried, self_employed, investor or other, got {:?}", s),
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResidenceStatus {
    UaeResident,
    NonResident,
    Other,
}

impl FromStr for ResidenceStatus {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "UAE_RESIDENT" | "RESIDENT" => Ok(ResidenceStatus::UaeResident),
            "NON_RESIDENT" => Ok(ResidenceStatus::NonResident),
            "OTHER" => Ok(ResidenceStatus::Other),
            _ => Err(CalcError::validation(
                "residence_status",
                format!("expected uae-resident, non-resident or other, got {:?}", s),
            )),
        }
    }
}

/// Who is buying and how the purchase is structured
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuyerProfile {
    pub buyer_type: BuyerType,
    pub nationality: String,
    pub residence_status: ResidenceStatus,
    pub selected_bank: Option<String>,
    pub mortgage_required: bool,
    pub off_plan: bool,
    pub ready: bool,
}

impl BuyerProfile {
    pub fn is_uae_national(&self) -> bool {
        normalize(&self.nationality) == "UAE"
    }

    fn is_resident(&self) -> bool {
        self.residence_status == ResidenceStatus::UaeResident
    }
}

/// Lenders with their own application forms
#[derive(Debug, Clone, Copy, PartialEq)]
enum Lender {
    EmiratesNbd,
    Adcb,
    Dib,
    Mashreq,
}

impl Lender {
    fn parse(bank: &str) -> Option<Self> {
        match normalize(bank).as_str() {
            "EMIRATES_NBD" => Some(Lender::EmiratesNbd),
            "ADCB" => Some(Lender::Adcb),
            "DIB" => Some(Lender::Dib),
            "MASHREQ" => Some(Lender::Mashreq),
            _ => None,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Lender::EmiratesNbd => "Emirates NBD",
            Lender::Adcb => "ADCB",
            Lender::Dib => "DIB",
            Lender::Mashreq => "Mashreq",
        }
    }
}

/// Documents to gather, grouped by purpose
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentChecklist {
    pub identity_documents: Vec<String>,
    pub income_proof_documents: Vec<String>,
    pub property_documents: Vec<String>,
    pub bank_documents: Vec<String>,
    pub visa_documents: Vec<String>,
    pub additional_documents: Vec<String>,
    pub notes: String,
}

impl DocumentChecklist {
    pub fn generate(buyer: &BuyerProfile) -> Self {
        Self {
            identity_documents: identity_documents(buyer),
            income_proof_documents: income_proof_documents(buyer.buyer_type),
            property_documents: property_documents(buyer),
            bank_documents: bank_documents(buyer),
            visa_documents: visa_documents(buyer),
            additional_documents: additional_documents(buyer),
            notes: notes(buyer),
        }
    }

    /// Every document across all groups, in group order
    pub fn all_documents(&self) -> impl Iterator<Item = &str> {
        self.identity_documents
            .iter()
            .chain(&self.income_proof_documents)
            .chain(&self.property_documents)
            .chain(&self.bank_documents)
            .chain(&self.visa_documents)
            .chain(&self.additional_documents)
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.all_documents().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub fn generate(buyer: &BuyerProfile) -> DocumentChecklist {
    DocumentChecklist::generate(buyer)
}

fn normalize(raw: &str) -> String {
    raw.trim().to_uppercase().replace([' ', '-'], "_")
}

fn owned(docs: &[&str]) -> Vec<String> {
    docs.iter().map(|d| d.to_string()).collect()
}

fn identity_documents(buyer: &BuyerProfile) -> Vec<String> {
    let mut docs = vec!["Passport copy"];
    if buyer.is_resident() {
        docs.extend(["UAE Residence Visa copy", "Emirates ID copy"]);
    }
    if buyer.is_uae_national() {
        docs.extend(["UAE National ID copy", "Family Book copy"]);
    } else {
        docs.push("Home country ID copy");
    }
    owned(&docs)
}

fn income_proof_documents(buyer_type: BuyerType) -> Vec<String> {
    let docs: &[&str] = match buyer_type {
        BuyerType::Salaried => &[
            "Salary certificate (less than 1 month old)",
            "Last 6 months bank statements showing salary credits",
            "Employment contract",
            "Labor contract from Ministry of Labor (if applicable)",
        ],
        BuyerType::SelfEmployed => &[
            "Trade license copy",
            "Memorandum of Association",
            "Last 2 years audited financial statements",
            "Last 6 months personal and company bank statements",
            "Proof of business ownership",
        ],
        BuyerType::Investor => &[
            "Proof of investments (shares, bonds, etc.)",
            "Last 6 months investment account statements",
            "Last 6 months personal bank statements",
        ],
        BuyerType::Other => &["Proof of income", "Last 6 months bank statements"],
    };
    owned(docs)
}

fn property_documents(buyer: &BuyerProfile) -> Vec<String> {
    let mut docs = Vec::new();
    if buyer.off_plan {
        docs.extend([
            "Sale and Purchase Agreement (SPA)",
            "Reservation form",
            "Developer payment plan",
            "Proof of payments made to developer",
            "OQOOD pre-registration receipt",
        ]);
    }
    if buyer.ready {
        docs.extend([
            "Title deed copy (if available)",
            "DEWA connection proof",
            "Service charge payment receipts",
            "NOC from developer for resale",
            "Property layout/floor plan",
        ]);
    }
    docs.push("Property valuation report (for mortgage)");
    owned(&docs)
}

fn bank_documents(buyer: &BuyerProfile) -> Vec<String> {
    if !buyer.mortgage_required {
        return Vec::new();
    }

    let mut docs = owned(&[
        "Mortgage application form",
        "Mortgage pre-approval letter",
        "Life insurance application",
        "Property insurance application",
    ]);

    match buyer.selected_bank.as_deref().and_then(Lender::parse) {
        Some(lender) => {
            docs.push(format!("{} account statement (if existing customer)", lender.name()));
            docs.push(format!("{} specific forms", lender.name()));
        }
        None => {
            docs.push("Bank account statement (if existing customer)".to_string());
            docs.push("Bank specific forms".to_string());
        }
    }
    docs
}

fn visa_documents(buyer: &BuyerProfile) -> Vec<String> {
    if buyer.is_uae_national() {
        Vec::new()
    } else if buyer.is_resident() {
        owned(&["UAE Residence Visa copy", "Entry stamp page copy"])
    } else {
        owned(&["Visit visa copy (if in UAE)", "Entry stamp page copy (if in UAE)"])
    }
}

fn additional_documents(buyer: &BuyerProfile) -> Vec<String> {
    let mut docs = vec!["Signed DLD transfer forms", "Manager's cheque for DLD fees"];
    if buyer.mortgage_required {
        docs.extend([
            "Manager's cheque for down payment",
            "Credit card statement (if applicable)",
            "Liability letter from existing banks",
        ]);
    }
    if buyer.buyer_type == BuyerType::SelfEmployed {
        docs.extend([
            "Power of Attorney (if applicable)",
            "Board resolution for property purchase (if company purchase)",
        ]);
    }
    if buyer.off_plan {
        docs.push("Escrow account details");
    }
    owned(&docs)
}

fn notes(buyer: &BuyerProfile) -> String {
    let mut notes = format!(
        "This document checklist is personalized based on your profile as a {} buyer",
        buyer.buyer_type
    );
    if !buyer.is_uae_national() {
        notes.push_str(&format!(" with {} nationality", buyer.nationality.trim()));
    }
    notes.push_str(".\n\n");

    if buyer.mortgage_required {
        let bank = match buyer.selected_bank.as_deref() {
            Some(bank) => Lender::parse(bank).map_or(bank.trim(), |l| l.name()),
            None => "your bank",
        };
        notes.push_str(&format!(
            "For mortgage applications with {}, please ensure all documents are less than 1 month old unless specified otherwise.\n",
            bank
        ));
        notes.push_str(
            "Pre-approval typically takes 3-5 working days, and final approval takes 7-10 working days.\n\n",
        );
    }

    if buyer.residence_status == ResidenceStatus::NonResident {
        notes.push_str(
            "As a non-resident buyer, you may need to provide additional documentation and attestations from your home country.\n",
        );
        notes.push_str(
            "All foreign documents must be attested by the UAE embassy in your country and the Ministry of Foreign Affairs in the UAE.\n\n",
        );
    }

    notes.push_str(
        "Please note that this checklist is a guide and additional documents may be requested by the authorities, developer, or bank during the process.",
    );
    notes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resident_salaried() -> BuyerProfile {
        BuyerProfile {
            buyer_type: BuyerType::Salaried,
            nationality: "India".to_string(),
            residence_status: ResidenceStatus::UaeResident,
            selected_bank: Some("Emirates NBD".to_string()),
            mortgage_required: true,
            off_plan: false,
            ready: true,
        }
    }

    #[test]
    fn test_resident_expat_with_mortgage() {
        let checklist = generate(&resident_salaried());

        assert_eq!(
            checklist.identity_documents,
            vec!["Passport copy", "UAE Residence Visa copy", "Emirates ID copy", "Home country ID copy"]
        );
        assert_eq!(checklist.income_proof_documents.len(), 4);
        assert_eq!(checklist.property_documents.len(), 6);
        assert!(checklist
            .bank_documents
            .contains(&"Emirates NBD specific forms".to_string()));
        assert_eq!(checklist.visa_documents, vec!["UAE Residence Visa copy", "Entry stamp page copy"]);
        assert_eq!(checklist.additional_documents.len(), 5);
        assert!(checklist.notes.contains("as a salaried buyer with India nationality."));
        assert!(checklist.notes.contains("with Emirates NBD, please ensure"));
    }

    #[test]
    fn test_uae_national_cash_buyer() {
        let buyer = BuyerProfile {
            nationality: "uae".to_string(),
            mortgage_required: false,
            selected_bank: None,
            ..resident_salaried()
        };
        let checklist = generate(&buyer);

        assert!(checklist.identity_documents.contains(&"Family Book copy".to_string()));
        assert!(!checklist.identity_documents.contains(&"Home country ID copy".to_string()));
        assert!(checklist.visa_documents.is_empty());
        assert!(checklist.bank_documents.is_empty());
        assert_eq!(
            checklist.additional_documents,
            vec!["Signed DLD transfer forms", "Manager's cheque for DLD fees"]
        );
        assert!(!checklist.notes.contains("nationality"));
        assert!(!checklist.notes.contains("mortgage applications"));
    }

    #[test]
    fn test_non_resident_self_employed_off_plan() {
        let buyer = BuyerProfile {
            buyer_type: BuyerType::SelfEmployed,
            nationality: "United Kingdom".to_string(),
            residence_status: ResidenceStatus::NonResident,
            selected_bank: Some("Some Other Bank".to_string()),
            mortgage_required: true,
            off_plan: true,
            ready: false,
        };
        let checklist = generate(&buyer);

        assert_eq!(checklist.identity_documents, vec!["Passport copy", "Home country ID copy"]);
        assert_eq!(checklist.income_proof_documents[0], "Trade license copy");
        assert_eq!(checklist.property_documents.len(), 6);
        assert!(checklist.property_documents.contains(&"OQOOD pre-registration receipt".to_string()));
        assert!(checklist.bank_documents.contains(&"Bank specific forms".to_string()));
        assert_eq!(checklist.visa_documents[0], "Visit visa copy (if in UAE)");
        assert!(checklist.additional_documents.contains(&"Escrow account details".to_string()));
        assert_eq!(checklist.additional_documents.len(), 8);
        assert!(checklist
            .notes
            .starts_with("This document checklist is personalized based on your profile as a self_employed buyer with United Kingdom nationality."));
        assert!(checklist.notes.contains("As a non-resident buyer"));
        assert!(checklist.notes.contains("with Some Other Bank, please ensure"));
    }

    #[test]
    fn test_valuation_report_always_listed() {
        let buyer = BuyerProfile {
            off_plan: false,
            ready: false,
            ..resident_salaried()
        };
        assert_eq!(
            generate(&buyer).property_documents,
            vec!["Property valuation report (for mortgage)"]
        );
    }

    #[test]
    fn test_all_documents_counts_every_group() {
        let checklist = generate(&resident_salaried());
        let total = checklist.identity_documents.len()
            + checklist.income_proof_documents.len()
            + checklist.property_documents.len()
            + checklist.bank_documents.len()
            + checklist.visa_documents.len()
            + checklist.additional_documents.len();
        assert_eq!(checklist.len(), total);
        assert_eq!(checklist.all_documents().next(), Some("Passport copy"));
    }

    #[test]
    fn test_parse_enums() {
        assert_eq!("self-employed".parse::<BuyerType>().unwrap(), BuyerType::SelfEmployed);
        assert_eq!(" Investor ".parse::<BuyerType>().unwrap(), BuyerType::Investor);
        assert_eq!("non resident".parse::<ResidenceStatus>().unwrap(), ResidenceStatus::NonResident);
        assert_eq!("uae-resident".parse::<ResidenceStatus>().unwrap(), ResidenceStatus::UaeResident);

        let err = "retired".parse::<BuyerType>().unwrap_err();
        assert_eq!(err.field(), Some("buyer_type"));
    }
}

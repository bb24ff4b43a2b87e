use std::fmt::Debug;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{
    consultation::{ConsultationStatus, ConsultationType},
    contract::{ContractStatus, ContractType},
    property::PropertyType,
    UnknownVariant,
};

pub const DEFAULT_PAGE_SIZE: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("unknown filter field '{name}' (expected one of: {expected})")]
    UnknownField { name: String, expected: String },
    #[error(transparent)]
    InvalidValue(#[from] UnknownVariant),
    #[error("'{value}' is not a valid value for {field}")]
    Malformed { field: &'static str, value: String },
}

/// Query state of one paginated list.
///
/// Every filter has a mandatory `page` (1-indexed) and `size`, plus optional
/// constraints addressed by their wire names. An absent constraint means
/// "unconstrained" and is never sent to the API.
pub trait ListFilter: Clone + Debug {
    /// Wire names of the optional constraints, in query order
    const FIELDS: &'static [&'static str];

    /// Defaults for the given page size, starting at page 1
    fn with_size(size: u32) -> Self;

    fn page(&self) -> u32;

    fn set_page(&mut self, page: u32);

    fn size(&self) -> u32;

    /// Sets one constraint. `None` or a blank value clears it.
    fn set_field(&mut self, name: &str, value: Option<&str>) -> Result<(), FilterError>;

    /// Present, non-empty constraints as `(wire name, value)`
    fn constraints(&self) -> Vec<(&'static str, String)>;

    /// Full query string parameters: `page`, `size`, then the constraints
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("page", self.page().to_string()), ("size", self.size().to_string())];
        pairs.extend(self.constraints());
        pairs
    }

    fn is_constrained(&self) -> bool {
        !self.constraints().is_empty()
    }
}

/// Resolves a user supplied field name, ignoring case, `-` and `_`
fn resolve(name: &str, fields: &'static [&'static str]) -> Result<&'static str, FilterError> {
    let wanted = normalize(name);

    fields
        .iter()
        .find(|field| normalize(field) == wanted)
        .copied()
        .ok_or_else(|| FilterError::UnknownField {
            name: name.to_string(),
            expected: fields.join(", "),
        })
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '-' && *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

fn text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn parsed<T>(value: Option<&str>) -> Result<Option<T>, FilterError>
where
    T: FromStr<Err = UnknownVariant>,
{
    text(value).map(|v| v.parse::<T>()).transpose().map_err(FilterError::from)
}

fn flag(field: &'static str, value: Option<&str>) -> Result<Option<bool>, FilterError> {
    match text(value) {
        None => Ok(None),
        Some(v) => match v.to_ascii_lowercase().as_str() {
            "true" | "yes" | "1" => Ok(Some(true)),
            "false" | "no" | "0" => Ok(Some(false)),
            _ => Err(FilterError::Malformed { field, value: v }),
        },
    }
}

fn number(field: &'static str, value: Option<&str>) -> Result<Option<u32>, FilterError> {
    text(value)
        .map(|v| {
            v.parse::<u32>()
                .map_err(|_| FilterError::Malformed { field, value: v.clone() })
        })
        .transpose()
}

fn push<T: ToString>(pairs: &mut Vec<(&'static str, String)>, name: &'static str, value: &Option<T>) {
    if let Some(value) = value {
        let value = value.to_string();
        if !value.trim().is_empty() {
            pairs.push((name, value));
        }
    }
}

fn unknown(field: &str, fields: &'static [&'static str]) -> FilterError {
    FilterError::UnknownField {
        name: field.to_string(),
        expected: fields.join(", "),
    }
}

/// Contract list search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractSearchFilter {
    pub agent_name: Option<String>,
    pub customer_name: Option<String>,
    pub contract_type: Option<ContractType>,
    pub status: Option<ContractStatus>,
    pub page: u32,
    pub size: u32,
}

impl Default for ContractSearchFilter {
    fn default() -> Self {
        Self::with_size(DEFAULT_PAGE_SIZE)
    }
}

impl ListFilter for ContractSearchFilter {
    const FIELDS: &'static [&'static str] = &["agentName", "customerName", "contractType", "status"];

    fn with_size(size: u32) -> Self {
        ContractSearchFilter {
            agent_name: None,
            customer_name: None,
            contract_type: None,
            status: None,
            page: 1,
            size,
        }
    }

    fn page(&self) -> u32 {
        self.page
    }

    fn set_page(&mut self, page: u32) {
        self.page = page;
    }

    fn size(&self) -> u32 {
        self.size
    }

    fn set_field(&mut self, name: &str, value: Option<&str>) -> Result<(), FilterError> {
        match resolve(name, Self::FIELDS)? {
            "agentName" => self.agent_name = text(value),
            "customerName" => self.customer_name = text(value),
            "contractType" => self.contract_type = parsed(value)?,
            "status" => self.status = parsed(value)?,
            field => return Err(unknown(field, Self::FIELDS)),
        }
        Ok(())
    }

    fn constraints(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push(&mut pairs, "agentName", &self.agent_name);
        push(&mut pairs, "customerName", &self.customer_name);
        push(&mut pairs, "contractType", &self.contract_type);
        push(&mut pairs, "status", &self.status);
        pairs
    }
}

/// Sent SMS list search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmsListFilter {
    pub keyword: Option<String>,
    pub page: u32,
    pub size: u32,
}

impl Default for SmsListFilter {
    fn default() -> Self {
        Self::with_size(DEFAULT_PAGE_SIZE)
    }
}

impl ListFilter for SmsListFilter {
    const FIELDS: &'static [&'static str] = &["keyword"];

    fn with_size(size: u32) -> Self {
        SmsListFilter {
            keyword: None,
            page: 1,
            size,
        }
    }

    fn page(&self) -> u32 {
        self.page
    }

    fn set_page(&mut self, page: u32) {
        self.page = page;
    }

    fn size(&self) -> u32 {
        self.size
    }

    fn set_field(&mut self, name: &str, value: Option<&str>) -> Result<(), FilterError> {
        match resolve(name, Self::FIELDS)? {
            "keyword" => self.keyword = text(value),
            field => return Err(unknown(field, Self::FIELDS)),
        }
        Ok(())
    }

    fn constraints(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push(&mut pairs, "keyword", &self.keyword);
        pairs
    }
}

/// Query of the SMS provider's sending history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmsHistoryQuery {
    /// `YYYYMMDD`
    pub start_date: Option<String>,
    /// Number of days to look back from `start_date`
    pub limit_day: Option<u32>,
    pub page: u32,
    pub size: u32,
}

impl ListFilter for SmsHistoryQuery {
    const FIELDS: &'static [&'static str] = &["startDate", "limitDay"];

    fn with_size(size: u32) -> Self {
        SmsHistoryQuery {
            start_date: None,
            limit_day: None,
            page: 1,
            size,
        }
    }

    fn page(&self) -> u32 {
        self.page
    }

    fn set_page(&mut self, page: u32) {
        self.page = page;
    }

    fn size(&self) -> u32 {
        self.size
    }

    fn set_field(&mut self, name: &str, value: Option<&str>) -> Result<(), FilterError> {
        match resolve(name, Self::FIELDS)? {
            "startDate" => self.start_date = text(value),
            "limitDay" => self.limit_day = number("limitDay", value)?,
            field => return Err(unknown(field, Self::FIELDS)),
        }
        Ok(())
    }

    fn constraints(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push(&mut pairs, "startDate", &self.start_date);
        push(&mut pairs, "limitDay", &self.limit_day);
        pairs
    }
}

/// Customer list search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerSearchFilter {
    pub name: Option<String>,
    pub contact: Option<String>,
    pub page: u32,
    pub size: u32,
}

impl Default for CustomerSearchFilter {
    fn default() -> Self {
        Self::with_size(DEFAULT_PAGE_SIZE)
    }
}

impl ListFilter for CustomerSearchFilter {
    const FIELDS: &'static [&'static str] = &["name", "contact"];

    fn with_size(size: u32) -> Self {
        CustomerSearchFilter {
            name: None,
            contact: None,
            page: 1,
            size,
        }
    }

    fn page(&self) -> u32 {
        self.page
    }

    fn set_page(&mut self, page: u32) {
        self.page = page;
    }

    fn size(&self) -> u32 {
        self.size
    }

    fn set_field(&mut self, name: &str, value: Option<&str>) -> Result<(), FilterError> {
        match resolve(name, Self::FIELDS)? {
            "name" => self.name = text(value),
            "contact" => self.contact = text(value),
            field => return Err(unknown(field, Self::FIELDS)),
        }
        Ok(())
    }

    fn constraints(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push(&mut pairs, "name", &self.name);
        push(&mut pairs, "contact", &self.contact);
        pairs
    }
}

/// Property list search, matching the backend's property search parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertySearchFilter {
    /// Province or metropolitan city
    pub province: Option<String>,
    pub city: Option<String>,
    pub dong: Option<String>,
    pub property_type: Option<PropertyType>,
    pub agent_name: Option<String>,
    pub customer_name: Option<String>,
    /// Open for contracts
    pub active: Option<bool>,
    pub page: u32,
    pub size: u32,
}

impl Default for PropertySearchFilter {
    fn default() -> Self {
        Self::with_size(DEFAULT_PAGE_SIZE)
    }
}

impl ListFilter for PropertySearchFilter {
    const FIELDS: &'static [&'static str] = &[
        "province",
        "city",
        "dong",
        "propertyType",
        "agentName",
        "customerName",
        "active",
    ];

    fn with_size(size: u32) -> Self {
        PropertySearchFilter {
            province: None,
            city: None,
            dong: None,
            property_type: None,
            agent_name: None,
            customer_name: None,
            active: None,
            page: 1,
            size,
        }
    }

    fn page(&self) -> u32 {
        self.page
    }

    fn set_page(&mut self, page: u32) {
        self.page = page;
    }

    fn size(&self) -> u32 {
        self.size
    }

    fn set_field(&mut self, name: &str, value: Option<&str>) -> Result<(), FilterError> {
        match resolve(name, Self::FIELDS)? {
            "province" => self.province = text(value),
            "city" => self.city = text(value),
            "dong" => self.dong = text(value),
            "propertyType" => self.property_type = parsed(value)?,
            "agentName" => self.agent_name = text(value),
            "customerName" => self.customer_name = text(value),
            "active" => self.active = flag("active", value)?,
            field => return Err(unknown(field, Self::FIELDS)),
        }
        Ok(())
    }

    fn constraints(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push(&mut pairs, "province", &self.province);
        push(&mut pairs, "city", &self.city);
        push(&mut pairs, "dong", &self.dong);
        push(&mut pairs, "propertyType", &self.property_type);
        push(&mut pairs, "agentName", &self.agent_name);
        push(&mut pairs, "customerName", &self.customer_name);
        push(&mut pairs, "active", &self.active);
        pairs
    }
}

/// Consultation list search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsultationSearchFilter {
    pub keyword: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    #[serde(rename = "type")]
    pub consultation_type: Option<ConsultationType>,
    pub status: Option<ConsultationStatus>,
    pub page: u32,
    pub size: u32,
}

impl Default for ConsultationSearchFilter {
    fn default() -> Self {
        Self::with_size(DEFAULT_PAGE_SIZE)
    }
}

impl ListFilter for ConsultationSearchFilter {
    const FIELDS: &'static [&'static str] = &["keyword", "startDate", "endDate", "type", "status"];

    fn with_size(size: u32) -> Self {
        ConsultationSearchFilter {
            keyword: None,
            start_date: None,
            end_date: None,
            consultation_type: None,
            status: None,
            page: 1,
            size,
        }
    }

    fn page(&self) -> u32 {
        self.page
    }

    fn set_page(&mut self, page: u32) {
        self.page = page;
    }

    fn size(&self) -> u32 {
        self.size
    }

    fn set_field(&mut self, name: &str, value: Option<&str>) -> Result<(), FilterError> {
        match resolve(name, Self::FIELDS)? {
            "keyword" => self.keyword = text(value),
            "startDate" => self.start_date = text(value),
            "endDate" => self.end_date = text(value),
            "type" => self.consultation_type = parsed(value)?,
            "status" => self.status = parsed(value)?,
            field => return Err(unknown(field, Self::FIELDS)),
        }
        Ok(())
    }

    fn constraints(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push(&mut pairs, "keyword", &self.keyword);
        push(&mut pairs, "startDate", &self.start_date);
        push(&mut pairs, "endDate", &self.end_date);
        push(&mut pairs, "type", &self.consultation_type);
        push(&mut pairs, "status", &self.status);
        pairs
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_absent_fields_are_not_in_query() {
        let mut filter = ContractSearchFilter::default();
        filter.set_field("customerName", Some("")).unwrap();

        assert_eq!(
            filter.query_pairs(),
            vec![("page", "1".to_string()), ("size", "10".to_string())]
        );
        assert!(!filter.is_constrained());
    }

    #[test]
    fn test_field_names_are_forgiving() {
        let mut filter = ContractSearchFilter::default();
        filter.set_field("customer-name", Some("  홍길동 ")).unwrap();
        filter.set_field("CONTRACT_TYPE", Some("jeonse")).unwrap();

        assert_eq!(filter.customer_name.as_deref(), Some("홍길동"));
        assert_eq!(filter.contract_type, Some(ContractType::Jeonse));
        assert_eq!(
            filter.constraints(),
            vec![
                ("customerName", "홍길동".to_string()),
                ("contractType", "JEONSE".to_string())
            ]
        );
    }

    #[test]
    fn test_clearing_a_field() {
        let mut filter = ContractSearchFilter::default();
        filter.set_field("status", Some("COMPLETED")).unwrap();
        filter.set_field("status", None).unwrap();

        assert_eq!(filter.status, None);
    }

    #[test]
    fn test_unknown_field_and_bad_value() {
        let mut filter = ContractSearchFilter::default();

        assert!(matches!(
            filter.set_field("price", Some("1")),
            Err(FilterError::UnknownField { .. })
        ));
        assert!(matches!(
            filter.set_field("status", Some("CANCELLED")),
            Err(FilterError::InvalidValue(_))
        ));
        assert_eq!(filter, ContractSearchFilter::default());
    }

    #[test]
    fn test_property_active_flag() {
        let mut filter = PropertySearchFilter::with_size(20);
        filter.set_field("active", Some("false")).unwrap();
        filter.set_field("propertyType", Some("one_room")).unwrap();

        assert_eq!(
            filter.query_pairs(),
            vec![
                ("page", "1".to_string()),
                ("size", "20".to_string()),
                ("propertyType", "ONE_ROOM".to_string()),
                ("active", "false".to_string())
            ]
        );
        assert!(filter.set_field("active", Some("maybe")).is_err());
    }

    #[test]
    fn test_consultation_type_uses_wire_name() {
        let mut filter = ConsultationSearchFilter::default();
        filter.set_field("type", Some("phone")).unwrap();

        assert_eq!(filter.constraints(), vec![("type", "PHONE".to_string())]);
    }

    #[test]
    fn test_history_limit_day_must_be_numeric() {
        let mut query = SmsHistoryQuery::with_size(30);
        query.set_field("limitDay", Some("7")).unwrap();
        assert_eq!(query.limit_day, Some(7));

        assert!(matches!(
            query.set_field("limit_day", Some("week")),
            Err(FilterError::Malformed { .. })
        ));
    }
}

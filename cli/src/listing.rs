//! Resource descriptors shared by the list, browse and CRUD commands.

use broker_core::{
    models::{
        consultation::{Consultation, ConsultationRequest},
        contract::{Contract, ContractDetail, ContractRequest},
        customer::{Customer, CustomerRequest},
        property::{Property, PropertyDetail, PropertyRequest},
        sms::SmsRecord,
    },
    ApiResponse, ConsultationSearchFilter, ContractSearchFilter, CreatedId, CustomerSearchFilter,
    Keyed, ListFilter, PageData, PropertySearchFilter, SmsListFilter,
};
use serde::{de::DeserializeOwned, Serialize};

use crate::{api::ApiClient, formatters::ListRow, messages};

/// A paginated, filterable list of the API
pub trait Resource {
    type Filter: ListFilter;
    type Item: ListRow + Keyed;
    type Detail: Serialize;

    /// Toast text when a list fetch fails without a server message
    const LIST_FAILED: &'static str;
    const DETAIL_FAILED: &'static str;
    const EMPTY: &'static str;
    const EMPTY_FILTERED: &'static str;

    fn fetch_page(api: &ApiClient, filter: &Self::Filter) -> ApiResponse<PageData<Self::Item>>;

    fn fetch_detail(api: &ApiClient, id: i64) -> ApiResponse<Self::Detail>;

    fn empty_text(filter: &Self::Filter) -> &'static str {
        if filter.is_constrained() {
            Self::EMPTY_FILTERED
        } else {
            Self::EMPTY
        }
    }
}

/// A resource with register/update/delete endpoints
pub trait Editable: Resource {
    type Request: DeserializeOwned;
    type Created: Serialize;

    const CREATE_FAILED: &'static str;
    const UPDATE_FAILED: &'static str;
    const DELETE_FAILED: &'static str;

    const CREATED: &'static str;
    const UPDATED: &'static str;
    const DELETED: &'static str;

    fn create(api: &ApiClient, request: &Self::Request) -> ApiResponse<Self::Created>;

    fn update(api: &ApiClient, id: i64, request: &Self::Request) -> ApiResponse<()>;

    fn delete(api: &ApiClient, id: i64) -> ApiResponse<()>;
}

pub struct Contracts;

impl Resource for Contracts {
    type Filter = ContractSearchFilter;
    type Item = Contract;
    type Detail = ContractDetail;

    const LIST_FAILED: &'static str = messages::CONTRACT_LIST_FAILED;
    const DETAIL_FAILED: &'static str = messages::CONTRACT_DETAIL;
    const EMPTY: &'static str = "등록된 계약이 없습니다.";
    const EMPTY_FILTERED: &'static str = "검색 조건에 맞는 계약이 없습니다.";

    fn fetch_page(api: &ApiClient, filter: &Self::Filter) -> ApiResponse<PageData<Contract>> {
        api.get_contracts(filter)
    }

    fn fetch_detail(api: &ApiClient, id: i64) -> ApiResponse<ContractDetail> {
        api.get_contract(id)
    }
}

impl Editable for Contracts {
    type Request = ContractRequest;
    type Created = CreatedId;

    const CREATE_FAILED: &'static str = messages::CONTRACT_REGISTER;
    const UPDATE_FAILED: &'static str = messages::CONTRACT_UPDATE;
    const DELETE_FAILED: &'static str = messages::CONTRACT_DELETE;

    const CREATED: &'static str = "계약이 등록되었습니다.";
    const UPDATED: &'static str = "계약이 수정되었습니다.";
    const DELETED: &'static str = "계약이 삭제되었습니다.";

    fn create(api: &ApiClient, request: &ContractRequest) -> ApiResponse<CreatedId> {
        api.register_contract(request)
    }

    fn update(api: &ApiClient, id: i64, request: &ContractRequest) -> ApiResponse<()> {
        api.update_contract(id, request)
    }

    fn delete(api: &ApiClient, id: i64) -> ApiResponse<()> {
        api.delete_contract(id)
    }
}

pub struct Customers;

impl Resource for Customers {
    type Filter = CustomerSearchFilter;
    type Item = Customer;
    type Detail = Customer;

    const LIST_FAILED: &'static str = messages::CUSTOMER_LIST_FAILED;
    const DETAIL_FAILED: &'static str = messages::CUSTOMER_DETAIL;
    const EMPTY: &'static str = "등록된 고객이 없습니다.";
    const EMPTY_FILTERED: &'static str = "검색 조건에 맞는 고객이 없습니다.";

    fn fetch_page(api: &ApiClient, filter: &Self::Filter) -> ApiResponse<PageData<Customer>> {
        api.get_customers(filter)
    }

    fn fetch_detail(api: &ApiClient, id: i64) -> ApiResponse<Customer> {
        api.get_customer(id)
    }
}

impl Editable for Customers {
    type Request = CustomerRequest;
    type Created = Customer;

    const CREATE_FAILED: &'static str = messages::CUSTOMER_REGISTER;
    const UPDATE_FAILED: &'static str = messages::CUSTOMER_UPDATE;
    const DELETE_FAILED: &'static str = messages::CUSTOMER_DELETE;

    const CREATED: &'static str = "고객이 등록되었습니다.";
    const UPDATED: &'static str = "고객 정보가 수정되었습니다.";
    const DELETED: &'static str = "고객이 삭제되었습니다.";

    fn create(api: &ApiClient, request: &CustomerRequest) -> ApiResponse<Customer> {
        api.register_customer(request)
    }

    fn update(api: &ApiClient, id: i64, request: &CustomerRequest) -> ApiResponse<()> {
        api.update_customer(id, request)
    }

    fn delete(api: &ApiClient, id: i64) -> ApiResponse<()> {
        api.delete_customer(id)
    }
}

pub struct Properties;

impl Resource for Properties {
    type Filter = PropertySearchFilter;
    type Item = Property;
    type Detail = PropertyDetail;

    const LIST_FAILED: &'static str = messages::PROPERTY_LIST_FAILED;
    const DETAIL_FAILED: &'static str = messages::PROPERTY_DETAIL;
    const EMPTY: &'static str = "등록된 매물이 없습니다.";
    const EMPTY_FILTERED: &'static str = "검색 조건에 맞는 매물이 없습니다.";

    fn fetch_page(api: &ApiClient, filter: &Self::Filter) -> ApiResponse<PageData<Property>> {
        api.get_properties(filter)
    }

    fn fetch_detail(api: &ApiClient, id: i64) -> ApiResponse<PropertyDetail> {
        api.get_property(id)
    }
}

impl Editable for Properties {
    type Request = PropertyRequest;
    type Created = CreatedId;

    const CREATE_FAILED: &'static str = messages::PROPERTY_REGISTER;
    const UPDATE_FAILED: &'static str = messages::PROPERTY_UPDATE;
    const DELETE_FAILED: &'static str = messages::PROPERTY_DELETE;

    const CREATED: &'static str = "매물이 등록되었습니다.";
    const UPDATED: &'static str = "매물이 수정되었습니다.";
    const DELETED: &'static str = "매물이 삭제되었습니다.";

    fn create(api: &ApiClient, request: &PropertyRequest) -> ApiResponse<CreatedId> {
        api.register_property(request)
    }

    fn update(api: &ApiClient, id: i64, request: &PropertyRequest) -> ApiResponse<()> {
        api.update_property(id, request)
    }

    fn delete(api: &ApiClient, id: i64) -> ApiResponse<()> {
        api.delete_property(id)
    }
}

pub struct Consultations;

impl Resource for Consultations {
    type Filter = ConsultationSearchFilter;
    type Item = Consultation;
    type Detail = Consultation;

    const LIST_FAILED: &'static str = messages::CONSULTATION_LIST_FAILED;
    const DETAIL_FAILED: &'static str = messages::CONSULTATION_DETAIL;
    const EMPTY: &'static str = "등록된 상담이 없습니다.";
    const EMPTY_FILTERED: &'static str = "검색 조건에 맞는 상담이 없습니다.";

    fn fetch_page(api: &ApiClient, filter: &Self::Filter) -> ApiResponse<PageData<Consultation>> {
        api.get_consultations(filter)
    }

    fn fetch_detail(api: &ApiClient, id: i64) -> ApiResponse<Consultation> {
        api.get_consultation(id)
    }
}

impl Editable for Consultations {
    type Request = ConsultationRequest;
    type Created = CreatedId;

    const CREATE_FAILED: &'static str = messages::CONSULTATION_REGISTER;
    const UPDATE_FAILED: &'static str = messages::CONSULTATION_UPDATE;
    const DELETE_FAILED: &'static str = messages::CONSULTATION_DELETE;

    const CREATED: &'static str = "상담이 등록되었습니다.";
    const UPDATED: &'static str = "상담이 수정되었습니다.";
    const DELETED: &'static str = "상담이 삭제되었습니다.";

    fn create(api: &ApiClient, request: &ConsultationRequest) -> ApiResponse<CreatedId> {
        api.register_consultation(request)
    }

    fn update(api: &ApiClient, id: i64, request: &ConsultationRequest) -> ApiResponse<()> {
        api.update_consultation(id, request)
    }

    fn delete(api: &ApiClient, id: i64) -> ApiResponse<()> {
        api.delete_consultation(id)
    }
}

pub struct SmsMessages;

impl Resource for SmsMessages {
    type Filter = SmsListFilter;
    type Item = SmsRecord;
    type Detail = SmsRecord;

    const LIST_FAILED: &'static str = messages::SMS_LIST_FAILED;
    const DETAIL_FAILED: &'static str = messages::SMS_DETAIL;
    const EMPTY: &'static str = "문자 발송 내역이 없습니다.";
    const EMPTY_FILTERED: &'static str = "검색 조건에 맞는 문자가 없습니다.";

    fn fetch_page(api: &ApiClient, filter: &Self::Filter) -> ApiResponse<PageData<SmsRecord>> {
        api.get_all_sms(filter)
    }

    fn fetch_detail(api: &ApiClient, id: i64) -> ApiResponse<SmsRecord> {
        api.get_sms(id)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_empty_text_depends_on_constraints() {
        let mut filter = ContractSearchFilter::with_size(10);
        assert_eq!(Contracts::empty_text(&filter), "등록된 계약이 없습니다.");

        filter.set_field("customerName", Some("홍길동")).unwrap();
        assert_eq!(Contracts::empty_text(&filter), "검색 조건에 맞는 계약이 없습니다.");

        filter.set_field("customerName", Some("  ")).unwrap();
        assert_eq!(Contracts::empty_text(&filter), "등록된 계약이 없습니다.");
    }
}

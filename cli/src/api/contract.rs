use broker_core::{
    models::contract::{Contract, ContractDetail, ContractRequest},
    ApiResponse, ContractSearchFilter, CreatedId, ListFilter, PageData,
};

use super::ApiClient;
use crate::messages;

impl ApiClient {
    pub fn register_contract(&self, contract: &ContractRequest) -> ApiResponse<CreatedId> {
        self.post("/contracts", contract, messages::CONTRACT_REGISTER)
    }

    pub fn get_contracts(&self, filter: &ContractSearchFilter) -> ApiResponse<PageData<Contract>> {
        self.get("/contracts", &filter.query_pairs(), messages::CONTRACT_LIST)
    }

    pub fn get_contract(&self, id: i64) -> ApiResponse<ContractDetail> {
        self.get(&format!("/contracts/{}", id), &[], messages::CONTRACT_DETAIL)
    }

    pub fn update_contract(&self, id: i64, contract: &ContractRequest) -> ApiResponse<()> {
        self.put_unit(&format!("/contracts/{}", id), contract, messages::CONTRACT_UPDATE)
    }

    pub fn delete_contract(&self, id: i64) -> ApiResponse<()> {
        self.delete(&format!("/contracts/{}", id), messages::CONTRACT_DELETE)
    }
}

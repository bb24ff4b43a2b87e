use broker_core::{
    models::customer::{Customer, CustomerRequest},
    ApiResponse, CustomerSearchFilter, ListFilter, PageData,
};

use super::ApiClient;
use crate::messages;

impl ApiClient {
    pub fn register_customer(&self, customer: &CustomerRequest) -> ApiResponse<Customer> {
        self.post("/customers", customer, messages::CUSTOMER_REGISTER)
    }

    pub fn get_customers(&self, filter: &CustomerSearchFilter) -> ApiResponse<PageData<Customer>> {
        self.get("/customers", &filter.query_pairs(), messages::CUSTOMER_LIST)
    }

    pub fn get_customer(&self, id: i64) -> ApiResponse<Customer> {
        self.get(&format!("/customers/{}", id), &[], messages::CUSTOMER_DETAIL)
    }

    pub fn update_customer(&self, id: i64, customer: &CustomerRequest) -> ApiResponse<()> {
        self.put_unit(&format!("/customers/{}", id), customer, messages::CUSTOMER_UPDATE)
    }

    pub fn delete_customer(&self, id: i64) -> ApiResponse<()> {
        self.delete(&format!("/customers/{}", id), messages::CUSTOMER_DELETE)
    }
}

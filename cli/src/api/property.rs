use broker_core::{
    models::property::{Property, PropertyDetail, PropertyRequest},
    ApiResponse, CreatedId, ListFilter, PageData, PropertySearchFilter,
};

use super::ApiClient;
use crate::messages;

impl ApiClient {
    pub fn register_property(&self, property: &PropertyRequest) -> ApiResponse<CreatedId> {
        self.post("/properties", property, messages::PROPERTY_REGISTER)
    }

    pub fn get_properties(&self, filter: &PropertySearchFilter) -> ApiResponse<PageData<Property>> {
        self.get("/properties", &filter.query_pairs(), messages::PROPERTY_LIST)
    }

    pub fn get_property(&self, id: i64) -> ApiResponse<PropertyDetail> {
        self.get(&format!("/properties/{}", id), &[], messages::PROPERTY_DETAIL)
    }

    pub fn update_property(&self, id: i64, property: &PropertyRequest) -> ApiResponse<()> {
        self.put_unit(&format!("/properties/{}", id), property, messages::PROPERTY_UPDATE)
    }

    pub fn delete_property(&self, id: i64) -> ApiResponse<()> {
        self.delete(&format!("/properties/{}", id), messages::PROPERTY_DELETE)
    }
}

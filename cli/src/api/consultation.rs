use broker_core::{
    models::consultation::{Consultation, ConsultationRequest},
    ApiResponse, ConsultationSearchFilter, CreatedId, ListFilter, PageData,
};

use super::ApiClient;
use crate::messages;

impl ApiClient {
    pub fn register_consultation(&self, consultation: &ConsultationRequest) -> ApiResponse<CreatedId> {
        self.post("/consultations", consultation, messages::CONSULTATION_REGISTER)
    }

    pub fn get_consultations(
        &self,
        filter: &ConsultationSearchFilter,
    ) -> ApiResponse<PageData<Consultation>> {
        self.get("/consultations", &filter.query_pairs(), messages::CONSULTATION_LIST)
    }

    pub fn get_consultation(&self, id: i64) -> ApiResponse<Consultation> {
        self.get(&format!("/consultations/{}", id), &[], messages::CONSULTATION_DETAIL)
    }

    pub fn update_consultation(&self, id: i64, consultation: &ConsultationRequest) -> ApiResponse<()> {
        self.put_unit(
            &format!("/consultations/{}", id),
            consultation,
            messages::CONSULTATION_UPDATE,
        )
    }

    pub fn delete_consultation(&self, id: i64) -> ApiResponse<()> {
        self.delete(&format!("/consultations/{}", id), messages::CONSULTATION_DELETE)
    }
}

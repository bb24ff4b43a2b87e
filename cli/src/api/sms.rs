use broker_core::{
    models::sms::{SendSmsRequest, SmsHistoryEntry, SmsRecord, Template, TemplateRequest},
    ApiResponse, ListFilter, PageData, SmsHistoryQuery, SmsListFilter,
};

use super::ApiClient;
use crate::messages;

impl ApiClient {
    pub fn send_sms(&self, sms: &SendSmsRequest) -> ApiResponse<SmsRecord> {
        self.post("/sms/send", sms, messages::SMS_SEND)
    }

    pub fn get_sms_histories(&self, query: &SmsHistoryQuery) -> ApiResponse<Vec<SmsHistoryEntry>> {
        self.get("/sms/history", &query.query_pairs(), messages::SMS_HISTORY)
    }

    pub fn get_sms(&self, id: i64) -> ApiResponse<SmsRecord> {
        self.get(&format!("/sms/{}", id), &[], messages::SMS_DETAIL)
    }

    /// Sent messages, newest first
    pub fn get_all_sms(&self, filter: &SmsListFilter) -> ApiResponse<PageData<SmsRecord>> {
        self.get("/sms/", &filter.query_pairs(), messages::SMS_LIST)
    }

    pub fn create_template(&self, template: &TemplateRequest) -> ApiResponse<Template> {
        self.post("/sms/templates", template, messages::TEMPLATE_CREATE)
    }

    pub fn update_template(&self, id: i64, template: &TemplateRequest) -> ApiResponse<Template> {
        self.put(&format!("/sms/templates/{}", id), template, messages::TEMPLATE_UPDATE)
    }

    pub fn delete_template(&self, id: i64) -> ApiResponse<()> {
        self.delete(&format!("/sms/templates/{}", id), messages::TEMPLATE_DELETE)
    }

    pub fn get_template(&self, id: i64) -> ApiResponse<Template> {
        self.get(&format!("/sms/templates/{}", id), &[], messages::TEMPLATE_DETAIL)
    }

    pub fn get_all_templates(&self) -> ApiResponse<Vec<Template>> {
        self.get("/sms/templates", &[], messages::TEMPLATE_LIST)
    }
}

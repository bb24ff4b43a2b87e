//! Localized fallback texts shown when a call fails without a server message.

pub const CONTRACT_REGISTER: &str = "계약 등록 중 오류가 발생했습니다.";
pub const CONTRACT_LIST: &str = "계약 목록을 불러오는 중 오류가 발생했습니다.";
pub const CONTRACT_DETAIL: &str = "계약 정보를 불러오는 중 오류가 발생했습니다.";
pub const CONTRACT_UPDATE: &str = "계약 수정 중 오류가 발생했습니다.";
pub const CONTRACT_DELETE: &str = "계약 삭제 중 오류가 발생했습니다.";
pub const CONTRACT_LIST_FAILED: &str = "계약 목록을 불러오는데 실패했습니다.";

pub const CUSTOMER_REGISTER: &str = "고객 등록 중 오류가 발생했습니다.";
pub const CUSTOMER_LIST: &str = "고객 목록을 불러오는 중 오류가 발생했습니다.";
pub const CUSTOMER_DETAIL: &str = "고객 정보를 불러오는 중 오류가 발생했습니다.";
pub const CUSTOMER_UPDATE: &str = "고객 정보 수정 중 오류가 발생했습니다.";
pub const CUSTOMER_DELETE: &str = "고객 삭제 중 오류가 발생했습니다.";
pub const CUSTOMER_LIST_FAILED: &str = "고객 목록을 불러오는데 실패했습니다.";

pub const PROPERTY_REGISTER: &str = "매물 등록 중 오류가 발생했습니다.";
pub const PROPERTY_LIST: &str = "매물 목록을 불러오는 중 오류가 발생했습니다.";
pub const PROPERTY_DETAIL: &str = "매물 정보를 불러오는 중 오류가 발생했습니다.";
pub const PROPERTY_UPDATE: &str = "매물 수정 중 오류가 발생했습니다.";
pub const PROPERTY_DELETE: &str = "매물 삭제 중 오류가 발생했습니다.";
pub const PROPERTY_LIST_FAILED: &str = "매물 목록을 불러오는데 실패했습니다.";

pub const CONSULTATION_REGISTER: &str = "상담 등록 중 오류가 발생했습니다.";
pub const CONSULTATION_LIST: &str = "상담 목록을 불러오는 중 오류가 발생했습니다.";
pub const CONSULTATION_DETAIL: &str = "상담 정보를 불러오는 중 오류가 발생했습니다.";
pub const CONSULTATION_UPDATE: &str = "상담 수정 중 오류가 발생했습니다.";
pub const CONSULTATION_DELETE: &str = "상담 삭제 중 오류가 발생했습니다.";
pub const CONSULTATION_LIST_FAILED: &str = "상담 목록을 불러오는데 실패했습니다.";

pub const SMS_SEND: &str = "문자 발송 중 오류가 발생했습니다.";
pub const SMS_LIST: &str = "문자 목록을 불러오는 중 오류가 발생했습니다.";
pub const SMS_DETAIL: &str = "문자 상세 정보를 불러오는 중 오류가 발생했습니다.";
pub const SMS_HISTORY: &str = "문자 발송 이력을 불러오는 중 오류가 발생했습니다.";
pub const SMS_LIST_FAILED: &str = "문자 목록을 불러오는데 실패했습니다.";

pub const TEMPLATE_CREATE: &str = "템플릿 생성 중 오류가 발생했습니다.";
pub const TEMPLATE_UPDATE: &str = "템플릿 수정 중 오류가 발생했습니다.";
pub const TEMPLATE_DELETE: &str = "템플릿 삭제 중 오류가 발생했습니다.";
pub const TEMPLATE_DETAIL: &str = "템플릿 정보를 불러오는 중 오류가 발생했습니다.";
pub const TEMPLATE_LIST: &str = "템플릿 목록을 불러오는 중 오류가 발생했습니다.";

pub const AUTH_SEND_EMAIL: &str = "인증 메일 발송 중 오류가 발생했습니다.";
pub const AUTH_VERIFY_CODE: &str = "인증 코드 확인 중 오류가 발생했습니다.";
pub const AUTH_SIGN_UP: &str = "회원가입 중 오류가 발생했습니다.";

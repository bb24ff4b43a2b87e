//! Filtered, paginated list controller.
//!
//! The controller owns the filter, the fetch trigger, the current page of
//! items and its pagination. Filter edits never fetch by themselves; only the
//! explicit operations (search, quick filter, page change, reset, refresh)
//! raise the trigger. Each fetch is issued as a [`FetchTicket`] carrying a
//! monotonically increasing sequence number, and only the completion of the
//! latest issued ticket is applied.

use tracing::debug;

use crate::envelope::ApiResponse;
use crate::filter::{FilterError, ListFilter};
use crate::models::Keyed;
use crate::notify::{Notifier, Severity};
use crate::pagination::{PageData, PageMetadata};

pub const DEFAULT_FAILURE_MESSAGE: &str = "목록을 불러오는데 실패했습니다.";

/// Behavior switches where the list pages historically disagreed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerPolicy {
    /// Move back to page 1 when a quick filter is selected
    pub quick_filter_resets_page: bool,
    /// Fetch again after the filter is reset to its defaults
    pub refetch_on_reset: bool,
}

impl Default for ControllerPolicy {
    fn default() -> Self {
        ControllerPolicy {
            quick_filter_resets_page: false,
            refetch_on_reset: true,
        }
    }
}

/// One issued fetch: the sequence number and the filter it was issued for
#[derive(Debug, Clone, PartialEq)]
pub struct FetchTicket<F> {
    seq: u64,
    filter: F,
}

impl<F> FetchTicket<F> {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn filter(&self) -> &F {
        &self.filter
    }
}

/// What happened to a completed fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Loaded { count: usize },
    Failed { message: String },
    /// A newer fetch was issued meanwhile; the response was dropped
    Stale,
}

/// What the view should render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListView {
    Loading,
    Empty,
    Populated,
}

#[derive(Debug)]
pub struct ListController<F, T> {
    defaults: F,
    filter: F,
    policy: ControllerPolicy,
    failure_message: String,
    trigger: bool,
    items: Vec<T>,
    pagination: PageMetadata,
    is_loading: bool,
    issued: u64,
    settled: u64,
}

impl<F: ListFilter, T> ListController<F, T> {
    /// Mounts a controller; the initial fetch is already due.
    pub fn new(defaults: F) -> Self {
        let pagination = PageMetadata::fallback(defaults.size());

        ListController {
            filter: defaults.clone(),
            defaults,
            policy: ControllerPolicy::default(),
            failure_message: DEFAULT_FAILURE_MESSAGE.to_string(),
            trigger: true,
            items: Vec::new(),
            pagination,
            is_loading: false,
            issued: 0,
            settled: 0,
        }
    }

    pub fn with_policy(mut self, policy: ControllerPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Toast text used when a failed response carries no message of its own
    pub fn with_failure_message(mut self, message: impl Into<String>) -> Self {
        self.failure_message = message.into();
        self
    }

    pub fn filter(&self) -> &F {
        &self.filter
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn pagination(&self) -> &PageMetadata {
        &self.pagination
    }

    pub fn policy(&self) -> &ControllerPolicy {
        &self.policy
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn is_fetch_due(&self) -> bool {
        self.trigger
    }

    pub fn view(&self) -> ListView {
        if self.is_loading {
            ListView::Loading
        } else if self.items.is_empty() {
            ListView::Empty
        } else {
            ListView::Populated
        }
    }

    /// Edits one filter field without fetching
    pub fn set_filter_field(&mut self, name: &str, value: Option<&str>) -> Result<(), FilterError> {
        self.filter.set_field(name, value)
    }

    /// Edits the filter through its typed fields without fetching
    pub fn edit_filter(&mut self, edit: impl FnOnce(&mut F)) {
        edit(&mut self.filter);
    }

    /// Runs the search for the edited filter from its first page
    pub fn submit_search(&mut self) {
        self.filter.set_page(1);
        self.trigger = true;
    }

    /// Applies a single-click filter and fetches right away
    pub fn select_quick_filter(&mut self, name: &str, value: Option<&str>) -> Result<(), FilterError> {
        self.filter.set_field(name, value)?;
        if self.policy.quick_filter_resets_page {
            self.filter.set_page(1);
        }
        self.trigger = true;
        Ok(())
    }

    pub fn change_page(&mut self, page: u32) {
        self.filter.set_page(page.max(1));
        self.trigger = true;
    }

    pub fn next_page(&mut self) -> bool {
        if !self.pagination.has_next() {
            return false;
        }
        self.change_page(self.pagination.current_page + 1);
        true
    }

    pub fn previous_page(&mut self) -> bool {
        if !self.pagination.has_previous() {
            return false;
        }
        self.change_page(self.pagination.current_page - 1);
        true
    }

    pub fn reset_filters(&mut self) {
        self.filter = self.defaults.clone();
        self.trigger = self.policy.refetch_on_reset;
    }

    /// Fetches the current filter again
    pub fn refresh(&mut self) {
        self.trigger = true;
    }

    /// Issues a fetch if one is due.
    ///
    /// The trigger is consumed here; anything that raises it again while the
    /// ticket is in flight leads to another ticket.
    pub fn begin_fetch(&mut self) -> Option<FetchTicket<F>> {
        if !self.trigger {
            return None;
        }

        self.issued += 1;
        self.trigger = false;
        self.is_loading = true;
        debug!(seq = self.issued, filter = ?self.filter, "issuing list fetch");

        Some(FetchTicket {
            seq: self.issued,
            filter: self.filter.clone(),
        })
    }

    /// Applies the response for `ticket` unless a newer fetch has been issued.
    pub fn complete(
        &mut self,
        ticket: FetchTicket<F>,
        response: ApiResponse<PageData<T>>,
        notifier: &dyn Notifier,
    ) -> FetchOutcome {
        if ticket.seq != self.issued || ticket.seq <= self.settled {
            debug!(seq = ticket.seq, latest = self.issued, "discarding stale list response");
            return FetchOutcome::Stale;
        }

        self.settled = ticket.seq;
        self.is_loading = false;

        let size = ticket.filter.size();
        let message = response.error_message().map(str::to_string);

        match response.data.filter(|_| response.success) {
            Some(page) => {
                self.pagination = page.metadata(ticket.filter.page(), size);
                self.items = page.content;
                debug!(seq = ticket.seq, count = self.items.len(), "list fetch applied");

                FetchOutcome::Loaded {
                    count: self.items.len(),
                }
            }
            None => {
                let message = message.unwrap_or_else(|| self.failure_message.clone());
                self.items.clear();
                self.pagination = PageMetadata::fallback(size);
                notifier.show_toast(&message, Severity::Error);

                FetchOutcome::Failed { message }
            }
        }
    }

    /// Issues, performs and completes a due fetch in one step.
    pub fn fetch_with<G>(&mut self, fetch: G, notifier: &dyn Notifier) -> Option<FetchOutcome>
    where
        G: FnOnce(&F) -> ApiResponse<PageData<T>>,
    {
        let ticket = self.begin_fetch()?;
        let response = fetch(ticket.filter());
        Some(self.complete(ticket, response, notifier))
    }
}

impl<F: ListFilter, T: Keyed> ListController<F, T> {
    /// Item of the current page with the given key
    pub fn item(&self, key: i64) -> Option<&T> {
        self.items.iter().find(|item| item.key() == key)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use std::cell::{Cell, RefCell};

    use serde_json::json;

    use super::*;
    use crate::filter::ContractSearchFilter;
    use crate::models::contract::{Contract, ContractType};

    #[derive(Default)]
    struct RecordingNotifier {
        toasts: RefCell<Vec<(String, Severity)>>,
    }

    impl Notifier for RecordingNotifier {
        fn show_toast(&self, message: &str, severity: Severity) {
            self.toasts.borrow_mut().push((message.to_string(), severity));
        }
    }

    fn contract(id: i64) -> Contract {
        serde_json::from_value(json!({
            "id": id,
            "propertyId": 100 + id,
            "propertyAddress": "서울시 강남구",
            "customerId": 200 + id,
            "customerName": "홍길동",
            "contractType": "SALE",
            "contractStatus": "AVAILABLE",
            "createdAt": "2025-03-01T10:00:00",
            "updatedAt": "2025-03-01T10:00:00"
        }))
        .unwrap()
    }

    fn page(ids: &[i64], current_page: u32, total_pages: u32, total: u64) -> ApiResponse<PageData<Contract>> {
        ApiResponse::ok(PageData::new(
            ids.iter().copied().map(contract).collect(),
            PageMetadata {
                current_page,
                total_pages,
                total_elements: total,
                size: 10,
            },
        ))
    }

    fn controller() -> ListController<ContractSearchFilter, Contract> {
        ListController::new(ContractSearchFilter::default())
    }

    #[test]
    fn test_mount_fetch_populates_items() {
        let notifier = RecordingNotifier::default();
        let mut list = controller();

        let outcome = list.fetch_with(|_| page(&[1, 2], 1, 3, 25), &notifier);

        assert_eq!(outcome, Some(FetchOutcome::Loaded { count: 2 }));
        assert_eq!(list.items().iter().map(|c| c.id).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(list.pagination().total_pages, 3);
        assert_eq!(list.view(), ListView::Populated);
        assert!(notifier.toasts.borrow().is_empty());
    }

    #[test]
    fn test_field_edits_never_fetch() {
        let notifier = RecordingNotifier::default();
        let calls = Cell::new(0);
        let mut list = controller();
        list.fetch_with(|_| page(&[1], 1, 1, 1), &notifier);

        list.set_filter_field("customerName", Some("김")).unwrap();
        list.set_filter_field("status", Some("COMPLETED")).unwrap();
        list.edit_filter(|f| f.agent_name = Some("박".to_string()));

        assert!(!list.is_fetch_due());
        let outcome = list.fetch_with(
            |_| {
                calls.set(calls.get() + 1);
                page(&[], 1, 1, 0)
            },
            &notifier,
        );
        assert_eq!(outcome, None);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_submit_search_resets_page() {
        let mut list = controller();
        list.begin_fetch();
        list.change_page(4);
        list.set_filter_field("customerName", Some("이")).unwrap();

        list.submit_search();

        let ticket = list.begin_fetch().unwrap();
        assert_eq!(ticket.filter().page, 1);
        assert_eq!(ticket.filter().customer_name.as_deref(), Some("이"));
    }

    #[test]
    fn test_change_page_keeps_other_fields() {
        let notifier = RecordingNotifier::default();
        let mut list = controller();
        list.set_filter_field("contractType", Some("SALE")).unwrap();
        list.fetch_with(|_| page(&[1], 1, 3, 25), &notifier);

        list.change_page(2);

        let mut seen = None;
        list.fetch_with(
            |filter| {
                seen = Some(filter.clone());
                page(&[11], 2, 3, 25)
            },
            &notifier,
        );
        let seen = seen.unwrap();
        assert_eq!(seen.page, 2);
        assert_eq!(seen.contract_type, Some(ContractType::Sale));
        assert_eq!(list.pagination().current_page, 2);
    }

    #[test]
    fn test_failure_clears_items_and_pagination() {
        let notifier = RecordingNotifier::default();
        let mut list = controller();
        list.fetch_with(|_| page(&[1, 2], 1, 3, 25), &notifier);
        list.refresh();

        let outcome = list.fetch_with(|_| ApiResponse::failure("서버 오류"), &notifier);

        assert_eq!(
            outcome,
            Some(FetchOutcome::Failed {
                message: "서버 오류".to_string()
            })
        );
        assert!(list.items().is_empty());
        assert_eq!(*list.pagination(), PageMetadata::fallback(10));
        assert_eq!(list.view(), ListView::Empty);
        assert_eq!(
            *notifier.toasts.borrow(),
            vec![("서버 오류".to_string(), Severity::Error)]
        );
    }

    #[test]
    fn test_failure_without_message_uses_fallback() {
        let notifier = RecordingNotifier::default();
        let mut list = controller().with_failure_message("계약 목록을 불러오는데 실패했습니다.");

        let response = ApiResponse {
            success: true,
            data: None,
            message: None,
            error: None,
        };
        list.fetch_with(|_| response, &notifier);

        assert_eq!(
            notifier.toasts.borrow()[0].0,
            "계약 목록을 불러오는데 실패했습니다."
        );
    }

    #[test]
    fn test_loading_and_trigger_cleared_after_any_fetch() {
        let notifier = RecordingNotifier::default();
        let mut list = controller();

        let ticket = list.begin_fetch().unwrap();
        assert!(list.is_loading());
        assert_eq!(list.view(), ListView::Loading);
        list.complete(ticket, page(&[1], 1, 1, 1), &notifier);
        assert!(!list.is_loading());
        assert!(!list.is_fetch_due());

        list.refresh();
        let ticket = list.begin_fetch().unwrap();
        list.complete(ticket, ApiResponse::failure("x"), &notifier);
        assert!(!list.is_loading());
        assert!(!list.is_fetch_due());
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let notifier = RecordingNotifier::default();
        let mut list = controller();
        list.fetch_with(|_| page(&[1], 1, 3, 25), &notifier);

        list.change_page(2);
        let first = list.begin_fetch().unwrap();
        list.set_filter_field("customerName", Some("최")).unwrap();
        list.submit_search();
        let second = list.begin_fetch().unwrap();
        assert!(second.seq() > first.seq());

        let outcome = list.complete(second, page(&[7], 1, 1, 1), &notifier);
        assert_eq!(outcome, FetchOutcome::Loaded { count: 1 });

        let outcome = list.complete(first, page(&[21, 22], 2, 3, 25), &notifier);
        assert_eq!(outcome, FetchOutcome::Stale);
        assert_eq!(list.items().iter().map(|c| c.id).collect::<Vec<_>>(), vec![7]);
        assert_eq!(list.pagination().current_page, 1);
        assert!(!list.is_loading());
    }

    #[test]
    fn test_stale_failure_does_not_toast_or_stop_loading() {
        let notifier = RecordingNotifier::default();
        let mut list = controller();

        let first = list.begin_fetch().unwrap();
        list.change_page(2);
        let second = list.begin_fetch().unwrap();

        assert_eq!(
            list.complete(first, ApiResponse::failure("timeout"), &notifier),
            FetchOutcome::Stale
        );
        assert!(list.is_loading());
        assert!(notifier.toasts.borrow().is_empty());

        list.complete(second, page(&[3], 2, 2, 11), &notifier);
        assert!(!list.is_loading());
    }

    #[test]
    fn test_quick_filter_keeps_page_by_default() {
        let mut list = controller();
        list.begin_fetch();
        list.change_page(3);
        list.begin_fetch();

        list.select_quick_filter("contractType", Some("JEONSE")).unwrap();

        assert!(list.is_fetch_due());
        let ticket = list.begin_fetch().unwrap();
        assert_eq!(ticket.filter().page, 3);
        assert_eq!(ticket.filter().contract_type, Some(ContractType::Jeonse));
    }

    #[test]
    fn test_quick_filter_page_reset_policy() {
        let mut list = controller().with_policy(ControllerPolicy {
            quick_filter_resets_page: true,
            ..ControllerPolicy::default()
        });
        list.change_page(3);
        list.begin_fetch();

        list.select_quick_filter("status", Some("IN_PROGRESS")).unwrap();

        assert_eq!(list.begin_fetch().unwrap().filter().page, 1);
    }

    #[test]
    fn test_invalid_quick_filter_does_not_trigger() {
        let mut list = controller();
        list.begin_fetch();

        assert!(list.select_quick_filter("status", Some("LOST")).is_err());
        assert!(!list.is_fetch_due());
    }

    #[test]
    fn test_reset_restores_defaults_and_refetches() {
        let mut list = controller();
        list.begin_fetch();
        list.set_filter_field("customerName", Some("정")).unwrap();
        list.change_page(5);

        list.reset_filters();

        assert_eq!(*list.filter(), ContractSearchFilter::default());
        assert!(list.is_fetch_due());
    }

    #[test]
    fn test_reset_without_refetch_policy() {
        let mut list = controller().with_policy(ControllerPolicy {
            refetch_on_reset: false,
            ..ControllerPolicy::default()
        });
        list.begin_fetch();
        list.set_filter_field("customerName", Some("정")).unwrap();

        list.reset_filters();

        assert_eq!(*list.filter(), ContractSearchFilter::default());
        assert!(!list.is_fetch_due());
    }

    #[test]
    fn test_next_and_previous_follow_pagination() {
        let notifier = RecordingNotifier::default();
        let mut list = controller();
        list.fetch_with(|_| page(&[1], 1, 2, 12), &notifier);

        assert!(!list.previous_page());
        assert!(list.next_page());
        assert_eq!(list.filter().page, 2);
        list.fetch_with(|_| page(&[11], 2, 2, 12), &notifier);
        assert!(!list.next_page());
        assert!(list.previous_page());
        assert_eq!(list.filter().page, 1);
    }

    #[test]
    fn test_item_lookup_by_key() {
        let notifier = RecordingNotifier::default();
        let mut list = controller();
        list.fetch_with(|_| page(&[4, 5], 1, 1, 2), &notifier);

        assert_eq!(list.item(5).map(|c| c.customer_id), Some(205));
        assert!(list.item(6).is_none());
    }
}

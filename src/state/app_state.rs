// ============================================================================
// APP STATE - application-wide state owned by the App controller
// ============================================================================
// One explicit state object instead of ambient globals. Views receive a
// reference; mutations go through the setters so subscribers can
// re-render.
// ============================================================================

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use gloo_timers::callback::Interval;

use crate::models::{DashboardSummary, Menu, Role};
use crate::state::{AuthState, MealState};

/// Top-level pages; exactly one is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Login,
    StudentDashboard,
    ManagerDashboard,
}

impl Page {
    pub fn for_role(role: Role) -> Page {
        match role {
            Role::Student => Page::StudentDashboard,
            Role::Manager => Page::ManagerDashboard,
        }
    }
}

/// Views within the student dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudentView {
    Home,
    WeeklyMenu,
    MonthlyPlan,
    Feedback,
    Profile,
}

/// Views within the manager dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManagerView {
    Dashboard,
    Inventory,
    Analytics,
}

impl ManagerView {
    pub fn nav_label(&self) -> &'static str {
        match self {
            ManagerView::Dashboard => "Dashboard",
            ManagerView::Inventory => "Inventory",
            ManagerView::Analytics => "Analytics",
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub auth: AuthState,
    pub meals: MealState,

    // Router
    page: Rc<RefCell<Page>>,
    student_view: Rc<RefCell<StudentView>>,
    manager_view: Rc<RefCell<ManagerView>>,

    // Confirm modal: a single pending callback; a new confirmation
    // silently replaces an unconfirmed one.
    pending_action: Rc<RefCell<Option<Box<dyn FnOnce()>>>>,

    // Manager dashboard data + simulated headcount timer.
    pub summary: Rc<RefCell<Option<DashboardSummary>>>,
    pub headcount_timer: Rc<RefCell<Option<Interval>>>,

    // Weekly menu cache, keyed by ISO date.
    pub weekly_menus: Rc<RefCell<HashMap<String, Vec<Menu>>>>,

    // Feedback / rewards demo state.
    pub feedback_points: Rc<RefCell<u32>>,
    pub selected_rating: Rc<RefCell<u8>>,
    pub selected_tags: Rc<RefCell<Vec<String>>>,

    // Re-render subscribers (the App controller).
    change_subscribers: Rc<RefCell<Vec<Rc<dyn Fn()>>>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            auth: AuthState::new(),
            meals: MealState::new(),
            page: Rc::new(RefCell::new(Page::Login)),
            student_view: Rc::new(RefCell::new(StudentView::Home)),
            manager_view: Rc::new(RefCell::new(ManagerView::Dashboard)),
            pending_action: Rc::new(RefCell::new(None)),
            summary: Rc::new(RefCell::new(None)),
            headcount_timer: Rc::new(RefCell::new(None)),
            weekly_menus: Rc::new(RefCell::new(HashMap::new())),
            feedback_points: Rc::new(RefCell::new(0)),
            selected_rating: Rc::new(RefCell::new(0)),
            selected_tags: Rc::new(RefCell::new(Vec::new())),
            change_subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn page(&self) -> Page {
        *self.page.borrow()
    }

    pub fn student_view(&self) -> StudentView {
        *self.student_view.borrow()
    }

    pub fn manager_view(&self) -> ManagerView {
        *self.manager_view.borrow()
    }

    /// Navigate to a page; stops the headcount timer when leaving the
    /// manager dashboard.
    pub fn show_page(&self, page: Page) {
        if page != Page::ManagerDashboard {
            self.headcount_timer.borrow_mut().take();
        }
        *self.page.borrow_mut() = page;
        self.notify_subscribers();
    }

    pub fn show_student_view(&self, view: StudentView) {
        *self.student_view.borrow_mut() = view;
        self.notify_subscribers();
    }

    pub fn show_manager_view(&self, view: ManagerView) {
        *self.manager_view.borrow_mut() = view;
        self.notify_subscribers();
    }

    pub fn set_pending_action(&self, action: Box<dyn FnOnce()>) {
        *self.pending_action.borrow_mut() = Some(action);
    }

    pub fn take_pending_action(&self) -> Option<Box<dyn FnOnce()>> {
        self.pending_action.borrow_mut().take()
    }

    pub fn clear_pending_action(&self) {
        *self.pending_action.borrow_mut() = None;
    }

    pub fn subscribe_to_changes<F: Fn() + 'static>(&self, callback: F) {
        self.change_subscribers.borrow_mut().push(Rc::new(callback));
    }

    pub fn notify_subscribers(&self) {
        let subscribers = self.change_subscribers.borrow().clone();
        for callback in subscribers {
            callback();
        }
    }

    /// Full teardown on logout / expired session.
    pub fn reset_user_state(&self) {
        self.meals.reset();
        self.summary.borrow_mut().take();
        self.headcount_timer.borrow_mut().take();
        self.weekly_menus.borrow_mut().clear();
        *self.feedback_points.borrow_mut() = 0;
        *self.selected_rating.borrow_mut() = 0;
        self.selected_tags.borrow_mut().clear();
        self.clear_pending_action();
        *self.student_view.borrow_mut() = StudentView::Home;
        *self.manager_view.borrow_mut() = ManagerView::Dashboard;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn second_pending_action_replaces_the_first() {
        let state = AppState::new();
        let fired = Rc::new(Cell::new(0u32));

        let first = fired.clone();
        state.set_pending_action(Box::new(move || first.set(first.get() + 1)));
        let second = fired.clone();
        state.set_pending_action(Box::new(move || second.set(second.get() + 10)));

        if let Some(action) = state.take_pending_action() {
            action();
        }
        assert_eq!(fired.get(), 10);
        assert!(state.take_pending_action().is_none());
    }

    #[test]
    fn navigation_updates_current_page() {
        let state = AppState::new();
        assert_eq!(state.page(), Page::Login);
        state.show_page(Page::StudentDashboard);
        assert_eq!(state.page(), Page::StudentDashboard);
    }
}

//! View controller: owns all application state and drives the API client in
//! response to user actions, re-fetching affected collections after each
//! mutation.

use chrono::Local;
use strum_macros::{Display, EnumString};
use tracing::{error, info, warn};

use crate::api::HrApi;
use crate::model::{AttendanceRecord, AttendanceStatus, Employee, NewAttendance, NewEmployee};

/// One of the four user-entered employee attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum FormField {
    EmployeeId,
    FullName,
    Email,
    Department,
}

/// Transient add-employee form. Reset to empty after a successful submission;
/// left untouched when the submission fails.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeForm {
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub department: String,
}

impl EmployeeForm {
    pub fn set(&mut self, field: FormField, value: &str) {
        let slot = match field {
            FormField::EmployeeId => &mut self.employee_id,
            FormField::FullName => &mut self.full_name,
            FormField::Email => &mut self.email,
            FormField::Department => &mut self.department,
        };
        *slot = value.to_string();
    }

    /// All four fields carry something other than whitespace.
    pub fn is_complete(&self) -> bool {
        [&self.employee_id, &self.full_name, &self.email, &self.department]
            .iter()
            .all(|v| !v.trim().is_empty())
    }

    pub fn reset(&mut self) {
        *self = EmployeeForm::default();
    }

    fn to_new_employee(&self) -> NewEmployee {
        NewEmployee {
            employee_id: self.employee_id.trim().to_string(),
            full_name: self.full_name.trim().to_string(),
            email: self.email.trim().to_string(),
            department: self.department.trim().to_string(),
        }
    }
}

/// The complete in-memory state driving what is rendered at any moment.
///
/// `error` is fatal-to-render: while set, the UI shows the message and
/// nothing else. `notice` is the blocking-notification channel for mutation
/// failures and input problems; it is cleared at the start of every action.
/// `attendance` is only meaningful while `selected` is set and always
/// reflects the most recent fetch for that employee.
#[derive(Debug, Default)]
pub struct ViewState {
    pub employees: Vec<Employee>,
    pub loading: bool,
    pub error: Option<String>,
    pub notice: Option<String>,
    pub form: EmployeeForm,
    pub selected: Option<Employee>,
    pub attendance: Vec<AttendanceRecord>,
}

/// State machine over [`ViewState`], one method per user trigger. Generic
/// over the client contract so tests can substitute a recording fake.
pub struct App<C> {
    api: C,
    pub state: ViewState,
}

impl<C: HrApi> App<C> {
    pub fn new(api: C) -> Self {
        Self {
            api,
            state: ViewState::default(),
        }
    }

    /// Initial-load path, also used as the refresh after every mutation. A
    /// failure here replaces the whole view with the error message; a later
    /// success clears it again.
    pub async fn load_employees(&mut self) {
        self.state.notice = None;
        self.state.loading = true;
        match self.api.list_employees().await {
            Ok(employees) => {
                self.state.employees = employees;
                self.state.error = None;
            }
            Err(e) => {
                error!(error = %e, "loading employee list failed");
                self.state.error = Some(e.to_string());
            }
        }
        self.state.loading = false;
    }

    pub fn set_form_field(&mut self, field: FormField, value: &str) {
        self.state.notice = None;
        self.state.form.set(field, value);
    }

    /// Submit the add-employee form. On success the form is reset and the
    /// list re-fetched; on failure the server's message lands in `notice`
    /// and both the form and the list stay as they were.
    pub async fn submit_new_employee(&mut self) {
        self.state.notice = None;
        if !self.state.form.is_complete() {
            self.state.notice = Some("All four fields are required".to_string());
            return;
        }
        let input = self.state.form.to_new_employee();
        match self.api.create_employee(&input).await {
            Ok(created) => {
                info!(id = created.id, "employee created");
                self.state.form.reset();
                self.load_employees().await;
            }
            Err(e) => {
                warn!(error = %e, "creating employee failed");
                self.state.notice = Some(e.to_string());
            }
        }
    }

    /// Delete, then unconditionally re-fetch the list. A failure is surfaced
    /// through `notice` after the refresh; the refreshed list is
    /// authoritative either way. A selection that no longer exists is
    /// dropped together with its records.
    pub async fn delete_employee(&mut self, id: u64) {
        let result = self.api.delete_employee(id).await;
        self.load_employees().await;
        let selection_gone = match &self.state.selected {
            Some(sel) => !self.state.employees.iter().any(|e| e.id == sel.id),
            None => false,
        };
        if selection_gone {
            self.state.selected = None;
            self.state.attendance.clear();
        }
        if let Err(e) = result {
            warn!(error = %e, id, "deleting employee failed");
            self.state.notice = Some(e.to_string());
        }
    }

    /// Select an employee and fetch their attendance. Stale records are
    /// cleared before the fetch so a failure never leaves another
    /// employee's rows on screen.
    pub async fn select_employee(&mut self, id: u64) {
        self.state.notice = None;
        let Some(employee) = self.state.employees.iter().find(|e| e.id == id).cloned() else {
            self.state.notice = Some(format!("No employee with id {id}"));
            return;
        };
        self.state.attendance.clear();
        self.state.selected = Some(employee.clone());
        match self.api.list_attendance(employee.id).await {
            Ok(records) => self.state.attendance = records,
            Err(e) => {
                warn!(error = %e, employee_id = employee.id, "loading attendance failed");
                self.state.notice = Some(e.to_string());
            }
        }
    }

    /// Mark today's attendance for the selected employee, then re-run the
    /// selection path to refresh the records. "Today" is the local calendar
    /// date at call time.
    pub async fn mark_attendance(&mut self, status: AttendanceStatus) {
        self.state.notice = None;
        let Some(employee) = self.state.selected.clone() else {
            self.state.notice = Some("Select an employee first".to_string());
            return;
        };
        let entry = NewAttendance {
            date: Local::now().date_naive(),
            status,
        };
        let result = self.api.mark_attendance(employee.id, &entry).await;
        self.select_employee(employee.id).await;
        if let Err(e) = result {
            warn!(error = %e, employee_id = employee.id, "marking attendance failed");
            self.state.notice = Some(e.to_string());
        }
    }
}

pub mod client;
pub mod error;

use async_trait::async_trait;

use crate::model::{AttendanceRecord, Employee, NewAttendance, NewEmployee};

pub use client::ApiClient;
pub use error::ApiError;

/// Contract between the view controller and the backend. One method per
/// remote operation; the controller depends on this trait only, so tests can
/// substitute an in-memory fake.
#[async_trait]
pub trait HrApi {
    async fn list_employees(&self) -> Result<Vec<Employee>, ApiError>;
    async fn create_employee(&self, input: &NewEmployee) -> Result<Employee, ApiError>;
    async fn delete_employee(&self, id: u64) -> Result<(), ApiError>;
    async fn list_attendance(&self, employee_id: u64) -> Result<Vec<AttendanceRecord>, ApiError>;
    async fn mark_attendance(
        &self,
        employee_id: u64,
        input: &NewAttendance,
    ) -> Result<AttendanceRecord, ApiError>;
}

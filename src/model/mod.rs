pub mod attendance;
pub mod employee;

pub use attendance::{AttendanceRecord, AttendanceStatus, NewAttendance};
pub use employee::{Employee, NewEmployee};

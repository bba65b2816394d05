use serde::{Deserialize, Serialize};

/// An employee as returned by the backend. `id` is server-assigned;
/// `employee_id` is the user-supplied external code.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Employee {
    pub id: u64,
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub department: String,
}

/// Create payload for `POST /employees`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewEmployee {
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub department: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn employee_uses_wire_field_names() {
        let emp = Employee {
            id: 1,
            employee_id: "EMP-001".to_string(),
            full_name: "John Doe".to_string(),
            email: "john.doe@company.com".to_string(),
            department: "Engineering".to_string(),
        };
        let value = serde_json::to_value(&emp).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": 1,
                "employee_id": "EMP-001",
                "full_name": "John Doe",
                "email": "john.doe@company.com",
                "department": "Engineering"
            })
        );
    }

    #[test]
    fn new_employee_has_no_id_field() {
        let input = NewEmployee {
            employee_id: "EMP-002".to_string(),
            full_name: "Jane Roe".to_string(),
            email: "jane@company.com".to_string(),
            department: "HR".to_string(),
        };
        let value = serde_json::to_value(&input).unwrap();
        assert!(value.get("id").is_none());
        assert_eq!(value["employee_id"], "EMP-002");
    }
}

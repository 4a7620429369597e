use crate::api::CurrentUser;

pub const ADMIN_ROLES: [&str; 4] = ["SUPER_ADMIN", "ADMIN", "HR_MANAGER", "MANAGER"];
pub const MISSING_VALUE: &str = "Chưa có thông tin";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProfileRole {
    Admin,
    Employee,
}

impl ProfileRole {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Admin => "Quản trị",
            Self::Employee => "Nhân viên",
        }
    }
}

/// Coarse projection of the backend role; unknown or missing roles are employees.
pub fn project_role(role: Option<&str>) -> ProfileRole {
    match role {
        Some(role) if ADMIN_ROLES.contains(&role) => ProfileRole::Admin,
        _ => ProfileRole::Employee,
    }
}

/// Last six characters of the user id, upper-cased.
pub fn employee_code(user: &CurrentUser) -> Option<String> {
    let id = user.identifier()?;
    let chars: Vec<char> = id.chars().collect();
    let start = chars.len().saturating_sub(6);
    Some(chars[start..].iter().collect::<String>().to_uppercase())
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProfileField {
    pub label: &'static str,
    pub value: String,
}

pub fn profile_fields(user: &CurrentUser) -> Vec<ProfileField> {
    let or_missing = |value: Option<&str>| {
        value
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(MISSING_VALUE)
            .to_string()
    };
    vec![
        ProfileField {
            label: "Họ và tên",
            value: or_missing(Some(&user.name)),
        },
        ProfileField {
            label: "Email",
            value: or_missing(Some(&user.email)),
        },
        ProfileField {
            label: "Số điện thoại",
            value: or_missing(user.phone.as_deref()),
        },
        ProfileField {
            label: "Phòng ban",
            value: or_missing(user.department.as_deref()),
        },
        ProfileField {
            label: "Chức vụ",
            value: or_missing(user.position.as_deref()),
        },
        ProfileField {
            label: "Mã nhân viên",
            value: or_missing(employee_code(user).as_deref()),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;
    use crate::test_support::helpers::sample_user;

    #[wasm_bindgen_test]
    fn admin_roles_project_to_admin() {
        for role in ["SUPER_ADMIN", "ADMIN", "HR_MANAGER", "MANAGER"] {
            assert_eq!(project_role(Some(role)), ProfileRole::Admin, "{role}");
        }
    }

    #[wasm_bindgen_test]
    fn everything_else_projects_to_employee() {
        for role in [Some("EMPLOYEE"), Some("admin"), Some(""), None] {
            assert_eq!(project_role(role), ProfileRole::Employee, "{role:?}");
        }
    }

    #[wasm_bindgen_test]
    fn employee_code_uses_id_tail() {
        assert_eq!(employee_code(&sample_user(None)).as_deref(), Some("00A001"));
    }

    #[wasm_bindgen_test]
    fn missing_fields_use_placeholder() {
        let mut user = sample_user(None);
        user.phone = None;
        user.position = Some("  ".into());
        let fields = profile_fields(&user);
        assert_eq!(fields[0].value, "Nguyễn Thị Lan");
        assert_eq!(fields[2].value, MISSING_VALUE);
        assert_eq!(fields[4].value, MISSING_VALUE);
    }
}

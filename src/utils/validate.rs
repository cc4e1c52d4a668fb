use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}$").expect("Invalid email regex")
});

pub fn validate_name(name: &str) -> Result<(), &'static str> {
    // 姓名长度校验：1 <= x <= 64
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err("Name is required");
    }
    if trimmed.len() > 64 {
        return Err("Name must be at most 64 characters");
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    // 邮箱格式校验：必须包含 @ 和 .
    if !EMAIL_RE.is_match(email) {
        return Err("Email format is invalid");
    }
    Ok(())
}

/// 验证密码是否符合安全策略
///
/// 策略要求：
/// - 最小长度：6 字符
pub fn validate_password(password: &str) -> Result<(), &'static str> {
    if password.len() < 6 {
        return Err("Password must be at least 6 characters long");
    }
    Ok(())
}

/// 分数范围校验，闭区间 [0, max_marks]
pub fn validate_marks(marks: i32, max_marks: i32) -> Result<(), String> {
    if marks < 0 || marks > max_marks {
        return Err(format!("Marks must be between 0 and {max_marks}"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_email() {
        assert!(validate_email("student@example.com").is_ok());
        assert!(validate_email("first.last+tag@school.edu.cn").is_ok());
    }

    #[test]
    fn test_invalid_email() {
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("missing@tld").is_err());
        assert!(validate_email("@example.com").is_err());
    }

    #[test]
    fn test_name_required() {
        assert!(validate_name("Ada Lovelace").is_ok());
        assert!(validate_name("").is_err());
        assert!(validate_name("   ").is_err());
    }

    #[test]
    fn test_short_password() {
        assert!(validate_password("abc12").is_err());
        assert!(validate_password("abc123").is_ok());
    }

    #[test]
    fn test_marks_bounds_inclusive() {
        assert!(validate_marks(0, 100).is_ok());
        assert!(validate_marks(100, 100).is_ok());
        assert!(validate_marks(-1, 100).is_err());
        assert!(validate_marks(101, 100).is_err());
    }
}

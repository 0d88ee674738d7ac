//! Login / PIN State Machine
//!
//! Pure transition logic for the three-phase student login flow:
//! identity first, then PIN setup (new student) or PIN entry (returning
//! student). Kept free of DOM and network concerns so it can be unit tested;
//! `LoginForm` wires it to signals.

use crate::models::{LoginResponse, Student};

/// Phase of the login form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginStep {
    /// Collecting grade / class / number / name
    #[default]
    Info,
    /// First visit: choosing a new 4-digit PIN
    PinSetup,
    /// Returning student: entering the registered PIN
    PinEnter,
}

impl LoginStep {
    /// The PIN field is visible and required outside `Info`
    pub fn pin_required(self) -> bool {
        !matches!(self, LoginStep::Info)
    }

    /// Identity fields lock as soon as the PIN phase starts
    pub fn identity_locked(self) -> bool {
        self.pin_required()
    }

    pub fn pin_label(self) -> &'static str {
        match self {
            LoginStep::PinSetup => "새 비밀번호 설정 (숫자 4자리)",
            _ => "비밀번호 (숫자 4자리)",
        }
    }

    pub fn pin_hint(self) -> &'static str {
        match self {
            LoginStep::Info => "",
            LoginStep::PinSetup => "처음 오셨네요! 앞으로 사용할 비밀번호를 설정해주세요.",
            LoginStep::PinEnter => "등록된 비밀번호를 입력해주세요.",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            LoginStep::Info => "다음",
            LoginStep::PinSetup => "시작하기",
            LoginStep::PinEnter => "로그인",
        }
    }

    /// A failed submission in `PinEnter` wipes the PIN for a fresh retry,
    /// keeping the identity fields untouched
    pub fn clears_pin_on_failure(self) -> bool {
        matches!(self, LoginStep::PinEnter)
    }
}

/// Identity fields as typed into the form, unparsed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IdentityFields {
    pub grade: String,
    pub class_num: String,
    pub student_num: String,
    pub name: String,
}

impl IdentityFields {
    fn complete(&self) -> bool {
        !self.grade.is_empty()
            && !self.class_num.is_empty()
            && !self.student_num.is_empty()
            && !self.name.trim().is_empty()
    }
}

/// Exactly four ASCII digits
pub fn is_valid_pin(pin: &str) -> bool {
    pin.len() == 4 && pin.chars().all(|c| c.is_ascii_digit())
}

/// Client-side validation before any request is sent.
/// Returns the toast message on failure.
pub fn validate(step: LoginStep, identity: &IdentityFields, pin: &str) -> Result<(), String> {
    if !identity.complete() {
        return Err("모든 항목을 입력해주세요".into());
    }
    if step.pin_required() {
        if pin.is_empty() {
            return Err("비밀번호를 입력해주세요".into());
        }
        if !is_valid_pin(pin) {
            return Err("비밀번호는 숫자 4자리로 입력해주세요".into());
        }
    }
    Ok(())
}

/// Result of feeding a server reply into the state machine
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    /// Unlock the PIN field, lock identity, focus the PIN input
    EnterPin(LoginStep),
    /// Login complete; advance to the main screen
    Authenticated(Student),
    /// Reply carried neither a flag nor a student record
    Stay,
}

/// Pure transition from a 2xx login response. Server-declared flags win over
/// whichever step the client thought it was in.
pub fn advance(response: &LoginResponse) -> Transition {
    if response.need_pin_setup {
        return Transition::EnterPin(LoginStep::PinSetup);
    }
    if response.need_pin {
        return Transition::EnterPin(LoginStep::PinEnter);
    }
    if response.success {
        if let Some(student) = &response.student {
            return Transition::Authenticated(student.clone());
        }
    }
    Transition::Stay
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity() -> IdentityFields {
        IdentityFields {
            grade: "2".into(),
            class_num: "3".into(),
            student_num: "15".into(),
            name: "민수".into(),
        }
    }

    fn student() -> Student {
        Student {
            id: 7,
            grade: 2,
            class_num: 3,
            student_num: 15,
            name: "민수".into(),
        }
    }

    #[test]
    fn missing_identity_field_fails_validation() {
        let mut id = identity();
        id.name = "   ".into();
        let err = validate(LoginStep::Info, &id, "").unwrap_err();
        assert_eq!(err, "모든 항목을 입력해주세요");
    }

    #[test]
    fn info_step_needs_no_pin() {
        assert!(validate(LoginStep::Info, &identity(), "").is_ok());
    }

    #[test]
    fn pin_steps_require_exactly_four_digits() {
        for step in [LoginStep::PinSetup, LoginStep::PinEnter] {
            assert!(validate(step, &identity(), "").is_err());
            assert!(validate(step, &identity(), "123").is_err());
            assert!(validate(step, &identity(), "12345").is_err());
            assert!(validate(step, &identity(), "12a4").is_err());
            assert!(validate(step, &identity(), "4821").is_ok());
        }
    }

    #[test]
    fn pin_with_non_digits_reports_format_message() {
        let err = validate(LoginStep::PinEnter, &identity(), "abcd").unwrap_err();
        assert_eq!(err, "비밀번호는 숫자 4자리로 입력해주세요");
    }

    #[test]
    fn need_pin_setup_enters_setup_and_locks_identity() {
        let resp = LoginResponse {
            need_pin_setup: true,
            ..Default::default()
        };
        let t = advance(&resp);
        assert_eq!(t, Transition::EnterPin(LoginStep::PinSetup));
        assert!(LoginStep::PinSetup.identity_locked());
        assert_eq!(LoginStep::PinSetup.pin_label(), "새 비밀번호 설정 (숫자 4자리)");
        assert_eq!(LoginStep::PinSetup.submit_label(), "시작하기");
    }

    #[test]
    fn need_pin_enters_challenge() {
        let resp = LoginResponse {
            need_pin: true,
            ..Default::default()
        };
        assert_eq!(advance(&resp), Transition::EnterPin(LoginStep::PinEnter));
        assert_eq!(LoginStep::PinEnter.submit_label(), "로그인");
    }

    #[test]
    fn success_with_student_authenticates() {
        let resp = LoginResponse {
            success: true,
            student: Some(student()),
            ..Default::default()
        };
        assert_eq!(advance(&resp), Transition::Authenticated(student()));
    }

    #[test]
    fn success_without_student_stays() {
        let resp = LoginResponse {
            success: true,
            ..Default::default()
        };
        assert_eq!(advance(&resp), Transition::Stay);
    }

    #[test]
    fn only_pin_enter_clears_pin_on_failure() {
        assert!(!LoginStep::Info.clears_pin_on_failure());
        assert!(!LoginStep::PinSetup.clears_pin_on_failure());
        assert!(LoginStep::PinEnter.clears_pin_on_failure());
    }

    #[test]
    fn reset_returns_to_info_with_unlocked_identity() {
        let step = LoginStep::default();
        assert_eq!(step, LoginStep::Info);
        assert!(!step.identity_locked());
        assert!(!step.pin_required());
        assert_eq!(step.submit_label(), "다음");
    }
}

//! # Login / create-account form state
//!
//! The page-level contract behind the login view, kept free of rendering so it
//! can be tested directly.
//!
//! - [`FormMode`] picks between signing in and creating an account.
//! - [`LoginSchema::for_mode`] derives the rule set for a mode. The rules differ
//!   only for `name` (required on create) and `password` (six characters
//!   minimum on create).
//! - [`LoginForm::submit`] validates against the current mode and produces a
//!   [`SubmitIntent`]. The intent is derived from the mode at submit time, so
//!   the operation dispatched always matches the tab the user is looking at.
//! - [`RemoteStatus`] tracks each remote operation separately; the form is
//!   [`busy`](LoginForm::busy) while either is pending.

use std::borrow::Cow;
use std::collections::BTreeMap;

use api::{AvatarConfig, CreateUserRequest, SignInRequest, UserInfo};
use validator::{ValidateEmail, ValidationError};

/// Which flow the form is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Login,
    Create,
}

impl FormMode {
    pub const ALL: [FormMode; 2] = [FormMode::Login, FormMode::Create];

    /// Tab label.
    pub fn label(self) -> &'static str {
        match self {
            FormMode::Login => "Login",
            FormMode::Create => "Create",
        }
    }

    /// Label of the submit element shown in this mode.
    pub fn submit_label(self) -> &'static str {
        match self {
            FormMode::Login => "Login",
            FormMode::Create => "Criar",
        }
    }
}

/// Form fields, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Password,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Password => "password",
        }
    }
}

/// User-entered credentials.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CredentialInput {
    pub email: String,
    pub password: String,
    pub name: String,
}

impl CredentialInput {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Password => &self.password,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Password => self.password = value,
        }
    }
}

/// A single check applied to a field value.
#[derive(Debug, Clone, PartialEq)]
pub enum Rule {
    /// Non-empty. Whitespace counts as a value.
    Required { message: &'static str },
    Email { message: &'static str },
    /// Minimum length in characters.
    MinChars { min: usize, message: &'static str },
}

impl Rule {
    fn check(&self, value: &str) -> Option<ValidationError> {
        match *self {
            Rule::Required { message } => value.is_empty().then(|| error("required", message)),
            Rule::Email { message } => (!value.validate_email()).then(|| error("email", message)),
            Rule::MinChars { min, message } => (value.chars().count() < min).then(|| {
                let mut err = error("length", message);
                err.add_param(Cow::Borrowed("min"), &min);
                err
            }),
        }
    }
}

fn error(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(message));
    err
}

/// Validation rules for one mode.
#[derive(Debug, Clone, PartialEq)]
pub struct LoginSchema {
    mode: FormMode,
    fields: Vec<(Field, Vec<Rule>)>,
}

impl LoginSchema {
    pub fn for_mode(mode: FormMode) -> Self {
        let name = match mode {
            FormMode::Login => Vec::new(),
            FormMode::Create => vec![Rule::Required {
                message: "Name is required",
            }],
        };
        let min_password = match mode {
            FormMode::Login => 0,
            FormMode::Create => 6,
        };

        Self {
            mode,
            fields: vec![
                (Field::Name, name),
                (
                    Field::Email,
                    vec![
                        Rule::Email {
                            message: "Invalid email format",
                        },
                        Rule::Required {
                            message: "Email is required",
                        },
                    ],
                ),
                (
                    Field::Password,
                    vec![
                        Rule::Required {
                            message: "Password is required",
                        },
                        Rule::MinChars {
                            min: min_password,
                            message: "Password required 6 characters minimum",
                        },
                    ],
                ),
            ],
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn rules(&self, field: Field) -> &[Rule] {
        self.fields
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, rules)| rules.as_slice())
            .unwrap_or(&[])
    }

    /// Check every rule of every field, collecting all failures.
    pub fn validate(&self, input: &CredentialInput) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();
        for (field, rules) in &self.fields {
            let value = input.value(*field);
            for rule in rules {
                if let Some(err) = rule.check(value) {
                    errors.push(*field, err);
                }
            }
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Failed rules keyed by field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors {
    errors: BTreeMap<Field, Vec<ValidationError>>,
}

impl FieldErrors {
    fn push(&mut self, field: Field, err: ValidationError) {
        self.errors.entry(field).or_default().push(err);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Message of the first failing rule, the one shown inline.
    pub fn first(&self, field: Field) -> Option<&str> {
        self.errors
            .get(&field)
            .and_then(|errs| errs.first())
            .and_then(|err| err.message.as_deref())
    }

    pub fn messages(&self, field: Field) -> Vec<&str> {
        self.errors
            .get(&field)
            .map(|errs| errs.iter().filter_map(|e| e.message.as_deref()).collect())
            .unwrap_or_default()
    }

    /// `(field, first message)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.errors.keys().filter_map(|f| self.first(*f).map(|m| (*f, m)))
    }
}

/// The remote operation a validated submit resolves to.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitIntent {
    Create(CreateUserRequest),
    SignIn(SignInRequest),
}

impl SubmitIntent {
    pub fn kind(&self) -> Operation {
        match self {
            SubmitIntent::Create(_) => Operation::CreateAccount,
            SubmitIntent::SignIn(_) => Operation::SignIn,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    CreateAccount,
    SignIn,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum RemoteStatus {
    #[default]
    Idle,
    Pending,
    Failed(String),
    Succeeded,
}

impl RemoteStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, RemoteStatus::Pending)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            RemoteStatus::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Why [`LoginForm::submit`] did not produce an intent.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitBlocked {
    /// An operation is already in flight.
    Busy,
    Invalid(FieldErrors),
}

/// State of the login page form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    mode: FormMode,
    input: CredentialInput,
    avatar: AvatarConfig,
    errors: FieldErrors,
    create: RemoteStatus,
    sign_in: RemoteStatus,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn schema(&self) -> LoginSchema {
        LoginSchema::for_mode(self.mode)
    }

    /// Switch tabs. Entered values are kept; errors already on screen are
    /// re-checked against the new mode's rules.
    pub fn set_mode(&mut self, mode: FormMode) {
        if self.mode == mode {
            return;
        }
        self.mode = mode;
        if !self.errors.is_empty() {
            self.errors = self.schema().validate(&self.input).err().unwrap_or_default();
        }
    }

    pub fn input(&self) -> &CredentialInput {
        &self.input
    }

    pub fn set_field(&mut self, field: Field, value: String) {
        self.input.set(field, value);
    }

    pub fn avatar(&self) -> &AvatarConfig {
        &self.avatar
    }

    pub fn set_avatar(&mut self, avatar: AvatarConfig) {
        self.avatar = avatar;
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn status(&self, op: Operation) -> &RemoteStatus {
        match op {
            Operation::CreateAccount => &self.create,
            Operation::SignIn => &self.sign_in,
        }
    }

    /// True while either remote operation is pending.
    pub fn busy(&self) -> bool {
        self.create.is_pending() || self.sign_in.is_pending()
    }

    /// Validate and build the intent for the current mode.
    pub fn submit(&mut self) -> Result<SubmitIntent, SubmitBlocked> {
        if self.busy() {
            return Err(SubmitBlocked::Busy);
        }
        if let Err(errors) = self.schema().validate(&self.input) {
            self.errors = errors.clone();
            return Err(SubmitBlocked::Invalid(errors));
        }
        self.errors = FieldErrors::default();

        let CredentialInput {
            email,
            password,
            name,
        } = self.input.clone();
        Ok(match self.mode {
            FormMode::Create => SubmitIntent::Create(CreateUserRequest {
                name,
                email,
                password,
                avatar: self.avatar.clone(),
            }),
            FormMode::Login => SubmitIntent::SignIn(SignInRequest { email, password }),
        })
    }

    /// Mark an operation as started. Clears its previous error.
    pub fn begin(&mut self, op: Operation) {
        *self.status_mut(op) = RemoteStatus::Pending;
    }

    /// Record the outcome of an operation.
    pub fn finish(&mut self, op: Operation, outcome: Result<(), String>) {
        *self.status_mut(op) = match outcome {
            Ok(()) => RemoteStatus::Succeeded,
            Err(message) => RemoteStatus::Failed(message),
        };
    }

    fn status_mut(&mut self, op: Operation) -> &mut RemoteStatus {
        match op {
            Operation::CreateAccount => &mut self.create,
            Operation::SignIn => &mut self.sign_in,
        }
    }
}

/// Whether the page should leave immediately instead of rendering the form.
/// Checked once, against the session as it is at first render.
pub fn redirect_at_mount(user: Option<&UserInfo>) -> bool {
    user.is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(name: &str, email: &str, password: &str) -> LoginForm {
        let mut form = LoginForm::new();
        form.set_field(Field::Name, name.to_string());
        form.set_field(Field::Email, email.to_string());
        form.set_field(Field::Password, password.to_string());
        form
    }

    #[test]
    fn test_default_mode_is_login() {
        assert_eq!(LoginForm::new().mode(), FormMode::Login);
        assert_eq!(FormMode::Create.submit_label(), "Criar");
        assert_eq!(FormMode::Login.submit_label(), "Login");
    }

    #[test]
    fn test_login_accepts_short_password_and_no_name() {
        let schema = LoginSchema::for_mode(FormMode::Login);
        let input = CredentialInput {
            email: "a@b.com".to_string(),
            password: "x".to_string(),
            name: String::new(),
        };
        assert!(schema.validate(&input).is_ok());
        assert!(schema.rules(Field::Name).is_empty());
    }

    #[test]
    fn test_login_password_still_required() {
        let schema = LoginSchema::for_mode(FormMode::Login);
        let input = CredentialInput {
            email: "a@b.com".to_string(),
            ..Default::default()
        };
        let errors = schema.validate(&input).unwrap_err();
        assert_eq!(errors.first(Field::Password), Some("Password is required"));
        assert_eq!(errors.messages(Field::Password).len(), 1);
    }

    #[test]
    fn test_create_short_password_and_empty_name() {
        let schema = LoginSchema::for_mode(FormMode::Create);
        let input = CredentialInput {
            email: "a@b.com".to_string(),
            password: "12345".to_string(),
            name: String::new(),
        };
        let errors = schema.validate(&input).unwrap_err();
        assert_eq!(errors.first(Field::Name), Some("Name is required"));
        assert_eq!(
            errors.first(Field::Password),
            Some("Password required 6 characters minimum")
        );
        assert_eq!(errors.first(Field::Email), None);
    }

    #[test]
    fn test_whitespace_name_is_sent_as_typed() {
        let schema = LoginSchema::for_mode(FormMode::Create);
        let input = CredentialInput {
            email: "a@b.com".to_string(),
            password: "secret1".to_string(),
            name: "   ".to_string(),
        };
        assert!(schema.validate(&input).is_ok());

        let mut form = filled(" Ash ", "a@b.com", "secret1");
        form.set_mode(FormMode::Create);
        match form.submit().unwrap() {
            SubmitIntent::Create(request) => assert_eq!(request.name, " Ash "),
            SubmitIntent::SignIn(_) => panic!("expected create"),
        }
    }

    #[test]
    fn test_password_length_counts_chars() {
        let schema = LoginSchema::for_mode(FormMode::Create);
        let input = CredentialInput {
            email: "a@b.com".to_string(),
            password: "ééééé".to_string(),
            name: "Ash".to_string(),
        };
        // 5 chars, 10 bytes
        assert!(schema.validate(&input).is_err());
    }

    #[test]
    fn test_email_rules_same_in_both_modes() {
        for mode in FormMode::ALL {
            let schema = LoginSchema::for_mode(mode);
            assert_eq!(schema.mode(), mode);

            let input = CredentialInput {
                email: "not-an-email".to_string(),
                password: "secret1".to_string(),
                name: "Ash".to_string(),
            };
            let errors = schema.validate(&input).unwrap_err();
            assert_eq!(errors.first(Field::Email), Some("Invalid email format"));

            let empty = CredentialInput {
                email: String::new(),
                ..input
            };
            let errors = schema.validate(&empty).unwrap_err();
            assert_eq!(
                errors.messages(Field::Email),
                vec!["Invalid email format", "Email is required"]
            );
            assert_eq!(errors.first(Field::Email), Some("Invalid email format"));
        }
    }

    #[test]
    fn test_errors_iterate_in_display_order() {
        let errors = LoginSchema::for_mode(FormMode::Create)
            .validate(&CredentialInput::default())
            .unwrap_err();
        let fields: Vec<Field> = errors.iter().map(|(f, _)| f).collect();
        assert_eq!(fields, vec![Field::Name, Field::Email, Field::Password]);
    }

    #[test]
    fn test_switching_mode_keeps_values() {
        let mut form = filled("Ash", "a@b.com", "pikachu");
        form.set_mode(FormMode::Create);
        form.set_mode(FormMode::Login);
        assert_eq!(form.input().email, "a@b.com");
        assert_eq!(form.input().password, "pikachu");
        assert_eq!(form.input().name, "Ash");
    }

    #[test]
    fn test_switching_mode_rechecks_shown_errors() {
        let mut form = filled("", "a@b.com", "123");
        form.set_mode(FormMode::Create);
        assert!(form.submit().is_err());
        assert_eq!(form.errors().first(Field::Name), Some("Name is required"));

        form.set_mode(FormMode::Login);
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_create_submit_dispatches_create_with_avatar() {
        let mut form = filled("Ash", "a@b.com", "secret1");
        form.set_mode(FormMode::Create);
        let avatar = AvatarConfig::default().with_seed("pallet");
        form.set_avatar(avatar.clone());

        let intent = form.submit().unwrap();
        assert_eq!(intent.kind(), Operation::CreateAccount);
        match intent {
            SubmitIntent::Create(request) => {
                assert_eq!(request.name, "Ash");
                assert_eq!(request.email, "a@b.com");
                assert_eq!(request.password, "secret1");
                assert_eq!(request.avatar, avatar);
            }
            SubmitIntent::SignIn(_) => panic!("expected create"),
        }
    }

    #[test]
    fn test_login_submit_dispatches_sign_in_only() {
        let mut form = filled("", "a@b.com", "x");
        let intent = form.submit().unwrap();
        assert_eq!(
            intent,
            SubmitIntent::SignIn(SignInRequest {
                email: "a@b.com".to_string(),
                password: "x".to_string(),
            })
        );
    }

    #[test]
    fn test_mode_switch_after_create_submits_sign_in() {
        let mut form = filled("Ash", "a@b.com", "secret1");
        form.set_mode(FormMode::Create);
        assert_eq!(form.submit().unwrap().kind(), Operation::CreateAccount);

        form.set_mode(FormMode::Login);
        assert_eq!(form.submit().unwrap().kind(), Operation::SignIn);
    }

    #[test]
    fn test_name_required_then_submit_proceeds() {
        let mut form = filled("", "a@b.com", "secret1");
        form.set_mode(FormMode::Create);

        match form.submit() {
            Err(SubmitBlocked::Invalid(errors)) => {
                assert_eq!(errors.first(Field::Name), Some("Name is required"));
            }
            other => panic!("unexpected {other:?}"),
        }

        form.set_field(Field::Name, "Ash".to_string());
        let intent = form.submit().unwrap();
        assert_eq!(
            intent,
            SubmitIntent::Create(CreateUserRequest {
                name: "Ash".to_string(),
                email: "a@b.com".to_string(),
                password: "secret1".to_string(),
                avatar: AvatarConfig::default(),
            })
        );
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_busy_while_either_operation_pending() {
        let mut form = filled("", "a@b.com", "x");
        assert!(!form.busy());

        form.begin(Operation::SignIn);
        assert!(form.busy());
        assert_eq!(form.submit(), Err(SubmitBlocked::Busy));

        form.finish(Operation::SignIn, Err("Invalid credentials".to_string()));
        assert!(!form.busy());
        assert_eq!(
            form.status(Operation::SignIn).error(),
            Some("Invalid credentials")
        );

        form.begin(Operation::CreateAccount);
        assert!(form.busy());
        form.finish(Operation::CreateAccount, Ok(()));
        assert_eq!(form.status(Operation::CreateAccount), &RemoteStatus::Succeeded);
    }

    #[test]
    fn test_begin_clears_previous_error() {
        let mut form = LoginForm::new();
        form.finish(Operation::CreateAccount, Err("User already exists".to_string()));
        form.begin(Operation::CreateAccount);
        assert_eq!(form.status(Operation::CreateAccount).error(), None);
        assert_eq!(form.status(Operation::SignIn), &RemoteStatus::Idle);
    }

    #[test]
    fn test_redirect_at_mount() {
        let user = UserInfo {
            id: "1".to_string(),
            email: "a@b.com".to_string(),
            name: None,
            avatar: None,
            token: None,
        };
        assert!(redirect_at_mount(Some(&user)));
        assert!(!redirect_at_mount(None));
    }
}

//! Form records and rule-set composers
//!
//! Each form has a typed input record (deserializable, blank fields default
//! to `""`) and a typed error record holding one `Option<String>` per field.
//! [`FormValidator`] runs every field validator of a form, never stopping at
//! the first failure, so the error record is always complete.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::config::ValidationConfig;
use crate::dates::{Clock, SystemClock};
use crate::errors::{FieldErrors, FieldResult};
use crate::identity::{
    validate_confirm_password, validate_email, validate_first_name, validate_last_name,
    validate_password_with,
};
use crate::internship::{
    validate_benefits, validate_deadline, validate_description, validate_duration,
    validate_internship_type, validate_interview_datetime, validate_requirements,
    validate_responsibilities, validate_title, validate_venue, InterviewMode,
};
use crate::links::{validate_github, validate_linkedin, validate_website};
use crate::profile::{
    validate_about, validate_address, validate_company_name, validate_course,
    validate_industry, validate_level, validate_specialty, validate_university,
};

// ============================================================================
// Error Records
// ============================================================================

/// Declare an error record with one optional message per field
macro_rules! error_record {
    (
        $(#[$meta:meta])*
        $name:ident { $($field:ident => $key:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
        pub struct $name {
            $(
                #[serde(rename = $key)]
                pub $field: FieldResult,
            )+
        }

        impl FieldErrors for $name {
            fn entries(&self) -> Vec<(&'static str, Option<&str>)> {
                vec![$(($key, self.$field.as_deref())),+]
            }
        }
    };
}

error_record! {
    /// Sign-in form errors
    SignInErrors {
        email => "email",
        password => "password",
    }
}

error_record! {
    /// Student sign-up form errors
    StudentSignUpErrors {
        firstname => "firstname",
        lastname => "lastname",
        email => "email",
        password => "password",
        confirmpassword => "confirmpassword",
    }
}

error_record! {
    /// Company sign-up form errors
    CompanySignUpErrors {
        companyname => "companyname",
        industry => "industry",
        email => "email",
        password => "password",
        confirmpassword => "confirmpassword",
    }
}

error_record! {
    /// Student "complete profile" form errors
    StudentCompleteProfileErrors {
        firstname => "firstname",
        lastname => "lastname",
        address => "address",
        password => "password",
        confirmpassword => "confirmpassword",
    }
}

error_record! {
    /// Company "complete profile" form errors
    CompanyCompleteProfileErrors {
        companyname => "companyname",
        industry => "industry",
        address => "address",
        password => "password",
        confirmpassword => "confirmpassword",
    }
}

error_record! {
    /// Student "edit profile" form errors
    StudentEditProfileErrors {
        firstname => "firstname",
        lastname => "lastname",
        address => "address",
        about => "about",
        university => "university",
        course => "course",
        level => "level",
        specialty => "specialty",
    }
}

error_record! {
    /// Company "edit profile" form errors
    CompanyEditProfileErrors {
        companyname => "companyname",
        industry => "industry",
        address => "address",
        about => "about",
    }
}

error_record! {
    /// Social link errors, shared by both profile flows
    SocialLinksErrors {
        website => "website",
        github => "github",
        linkedin => "linkedin",
    }
}

error_record! {
    /// Post/edit internship form errors
    InternshipErrors {
        title => "title",
        description => "description",
        responsibilities => "responsibilities",
        requirements => "requirements",
        benefits => "benefits",
        kind => "type",
        duration => "duration",
        deadline => "deadline",
    }
}

error_record! {
    /// Reset password form errors
    ResetPasswordErrors {
        password => "password",
        confirmpassword => "confirmpassword",
    }
}

error_record! {
    /// Shortlist (interview scheduling) form errors
    ShortlistErrors {
        datetime => "datetime",
        location => "location",
    }
}

// ============================================================================
// Input Records
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignInForm {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudentSignUpForm {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub password: String,
    pub confirmpassword: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanySignUpForm {
    pub companyname: String,
    pub industry: String,
    pub email: String,
    pub password: String,
    pub confirmpassword: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudentCompleteProfileForm {
    pub firstname: String,
    pub lastname: String,
    pub address: String,
    pub password: String,
    pub confirmpassword: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanyCompleteProfileForm {
    pub companyname: String,
    pub industry: String,
    pub address: String,
    pub password: String,
    pub confirmpassword: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudentEditProfileForm {
    pub firstname: String,
    pub lastname: String,
    pub address: String,
    pub about: String,
    pub university: String,
    pub course: String,
    pub level: String,
    pub specialty: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanyEditProfileForm {
    pub companyname: String,
    pub industry: String,
    pub address: String,
    pub about: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLinksForm {
    pub website: String,
    pub github: String,
    pub linkedin: String,
}

/// Used by both the post and the edit internship pages
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InternshipForm {
    pub title: String,
    pub description: String,
    pub responsibilities: String,
    pub requirements: String,
    pub benefits: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub duration: String,
    pub deadline: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForgotPasswordForm {
    pub email: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResetPasswordForm {
    pub password: String,
    pub confirmpassword: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShortlistForm {
    pub datetime: String,
    pub location: String,
    #[serde(rename = "type")]
    pub mode: InterviewMode,
}

// ============================================================================
// Form Validator
// ============================================================================

/// Runs the rule set of each form
///
/// # Example
/// ```
/// use internly_validation::{FieldErrors, FormValidator, SignInForm};
///
/// let validator = FormValidator::new();
/// let errors = validator.sign_in(&SignInForm {
///     email: "ab".into(),
///     password: "Abcdef1!".into(),
/// });
/// assert!(errors.email.is_some());
/// assert_eq!(errors.password, None);
/// assert_eq!(errors.error_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FormValidator<C = SystemClock> {
    config: ValidationConfig,
    clock: C,
}

impl FormValidator<SystemClock> {
    /// Validator with default config and the system clock
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: Clock> FormValidator<C> {
    /// Validator with default config reading time from `clock`
    pub fn with_clock(clock: C) -> Self {
        Self {
            config: ValidationConfig::default(),
            clock,
        }
    }

    /// Replace the config
    pub fn with_config(mut self, config: ValidationConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn sign_in(&self, form: &SignInForm) -> SignInErrors {
        let errors = SignInErrors {
            email: validate_email(&form.email),
            password: self.password(&form.password),
        };
        report("sign_in", errors)
    }

    pub fn student_sign_up(&self, form: &StudentSignUpForm) -> StudentSignUpErrors {
        let errors = StudentSignUpErrors {
            firstname: validate_first_name(&form.firstname),
            lastname: validate_last_name(&form.lastname),
            email: validate_email(&form.email),
            password: self.password(&form.password),
            confirmpassword: validate_confirm_password(&form.password, &form.confirmpassword),
        };
        report("student_sign_up", errors)
    }

    pub fn company_sign_up(&self, form: &CompanySignUpForm) -> CompanySignUpErrors {
        let errors = CompanySignUpErrors {
            companyname: validate_company_name(&form.companyname),
            industry: validate_industry(&form.industry),
            email: validate_email(&form.email),
            password: self.password(&form.password),
            confirmpassword: validate_confirm_password(&form.password, &form.confirmpassword),
        };
        report("company_sign_up", errors)
    }

    pub fn student_complete_profile(
        &self,
        form: &StudentCompleteProfileForm,
    ) -> StudentCompleteProfileErrors {
        let errors = StudentCompleteProfileErrors {
            firstname: validate_first_name(&form.firstname),
            lastname: validate_last_name(&form.lastname),
            address: validate_address(&form.address),
            password: self.password(&form.password),
            confirmpassword: validate_confirm_password(&form.password, &form.confirmpassword),
        };
        report("student_complete_profile", errors)
    }

    pub fn company_complete_profile(
        &self,
        form: &CompanyCompleteProfileForm,
    ) -> CompanyCompleteProfileErrors {
        let errors = CompanyCompleteProfileErrors {
            companyname: validate_company_name(&form.companyname),
            industry: validate_industry(&form.industry),
            address: validate_address(&form.address),
            password: self.password(&form.password),
            confirmpassword: validate_confirm_password(&form.password, &form.confirmpassword),
        };
        report("company_complete_profile", errors)
    }

    pub fn student_edit_profile(&self, form: &StudentEditProfileForm) -> StudentEditProfileErrors {
        let errors = StudentEditProfileErrors {
            firstname: validate_first_name(&form.firstname),
            lastname: validate_last_name(&form.lastname),
            address: validate_address(&form.address),
            about: validate_about(&form.about),
            university: validate_university(&form.university),
            course: validate_course(&form.course),
            level: validate_level(&form.level),
            specialty: validate_specialty(&form.specialty),
        };
        report("student_edit_profile", errors)
    }

    pub fn company_edit_profile(&self, form: &CompanyEditProfileForm) -> CompanyEditProfileErrors {
        let errors = CompanyEditProfileErrors {
            companyname: validate_company_name(&form.companyname),
            industry: validate_industry(&form.industry),
            address: validate_address(&form.address),
            about: validate_about(&form.about),
        };
        report("company_edit_profile", errors)
    }

    pub fn social_links(&self, form: &SocialLinksForm) -> SocialLinksErrors {
        let errors = SocialLinksErrors {
            website: validate_website(&form.website),
            github: validate_github(&form.github),
            linkedin: validate_linkedin(&form.linkedin),
        };
        report("social_links", errors)
    }

    /// Rule set for both posting and editing an internship
    pub fn internship(&self, form: &InternshipForm) -> InternshipErrors {
        let errors = InternshipErrors {
            title: validate_title(&form.title),
            description: validate_description(&form.description),
            responsibilities: validate_responsibilities(&form.responsibilities),
            requirements: validate_requirements(&form.requirements),
            benefits: validate_benefits(&form.benefits),
            kind: validate_internship_type(&form.kind),
            duration: validate_duration(&form.duration),
            deadline: validate_deadline(&form.deadline, &self.clock),
        };
        report("internship", errors)
    }

    /// Single email check, returned bare rather than as a record
    pub fn forgot_password(&self, email: &str) -> FieldResult {
        let result = validate_email(email);
        debug!(form = "forgot_password", failed = usize::from(result.is_some()), "validated form");
        result
    }

    pub fn reset_password(&self, form: &ResetPasswordForm) -> ResetPasswordErrors {
        let errors = ResetPasswordErrors {
            password: self.password(&form.password),
            confirmpassword: validate_confirm_password(&form.password, &form.confirmpassword),
        };
        report("reset_password", errors)
    }

    pub fn shortlist(&self, form: &ShortlistForm) -> ShortlistErrors {
        let errors = ShortlistErrors {
            datetime: validate_interview_datetime(&form.datetime, &self.clock),
            location: validate_venue(&form.location, form.mode),
        };
        report("shortlist", errors)
    }

    fn password(&self, password: &str) -> FieldResult {
        validate_password_with(password, &self.config.password)
    }
}

/// Log the outcome of one rule set and hand the record back
fn report<E: FieldErrors>(form: &'static str, errors: E) -> E {
    for (field, message) in errors.entries() {
        if let Some(message) = message {
            trace!(form, field, reason = message, "field rejected");
        }
    }
    debug!(form, failed = errors.error_count(), "validated form");
    errors
}

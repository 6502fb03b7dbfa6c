//! Tagged submissions and reports
//!
//! A submission is one JSON document naming its form:
//!
//! ```json
//! {"form": "sign_in", "email": "jane@example.com", "password": "Abcdef1!"}
//! ```
//!
//! The matching report carries the form name and its error record:
//!
//! ```json
//! {"form": "sign_in", "errors": {"email": null, "password": null}}
//! ```

use serde::{Deserialize, Serialize};

use crate::dates::Clock;
use crate::errors::{FieldErrors, Result};
use crate::forms::*;

/// Any form the portal submits, tagged by `"form"`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "form", rename_all = "snake_case")]
pub enum FormSubmission {
    SignIn(SignInForm),
    StudentSignUp(StudentSignUpForm),
    CompanySignUp(CompanySignUpForm),
    StudentCompleteProfile(StudentCompleteProfileForm),
    CompanyCompleteProfile(CompanyCompleteProfileForm),
    StudentEditProfile(StudentEditProfileForm),
    CompanyEditProfile(CompanyEditProfileForm),
    SocialLinks(SocialLinksForm),
    PostInternship(InternshipForm),
    EditInternship(InternshipForm),
    ForgotPassword(ForgotPasswordForm),
    ResetPassword(ResetPasswordForm),
    Shortlist(ShortlistForm),
}

impl FormSubmission {
    /// Decode a submission from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Wire name of the form
    pub fn name(&self) -> &'static str {
        match self {
            Self::SignIn(_) => "sign_in",
            Self::StudentSignUp(_) => "student_sign_up",
            Self::CompanySignUp(_) => "company_sign_up",
            Self::StudentCompleteProfile(_) => "student_complete_profile",
            Self::CompanyCompleteProfile(_) => "company_complete_profile",
            Self::StudentEditProfile(_) => "student_edit_profile",
            Self::CompanyEditProfile(_) => "company_edit_profile",
            Self::SocialLinks(_) => "social_links",
            Self::PostInternship(_) => "post_internship",
            Self::EditInternship(_) => "edit_internship",
            Self::ForgotPassword(_) => "forgot_password",
            Self::ResetPassword(_) => "reset_password",
            Self::Shortlist(_) => "shortlist",
        }
    }
}

/// Result of validating a [`FormSubmission`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "form", content = "errors", rename_all = "snake_case")]
pub enum FormReport {
    SignIn(SignInErrors),
    StudentSignUp(StudentSignUpErrors),
    CompanySignUp(CompanySignUpErrors),
    StudentCompleteProfile(StudentCompleteProfileErrors),
    CompanyCompleteProfile(CompanyCompleteProfileErrors),
    StudentEditProfile(StudentEditProfileErrors),
    CompanyEditProfile(CompanyEditProfileErrors),
    SocialLinks(SocialLinksErrors),
    PostInternship(InternshipErrors),
    EditInternship(InternshipErrors),
    ForgotPassword(Option<String>),
    ResetPassword(ResetPasswordErrors),
    Shortlist(ShortlistErrors),
}

impl FieldErrors for FormReport {
    fn entries(&self) -> Vec<(&'static str, Option<&str>)> {
        match self {
            Self::SignIn(errors) => errors.entries(),
            Self::StudentSignUp(errors) => errors.entries(),
            Self::CompanySignUp(errors) => errors.entries(),
            Self::StudentCompleteProfile(errors) => errors.entries(),
            Self::CompanyCompleteProfile(errors) => errors.entries(),
            Self::StudentEditProfile(errors) => errors.entries(),
            Self::CompanyEditProfile(errors) => errors.entries(),
            Self::SocialLinks(errors) => errors.entries(),
            Self::PostInternship(errors) | Self::EditInternship(errors) => errors.entries(),
            Self::ForgotPassword(email) => vec![("email", email.as_deref())],
            Self::ResetPassword(errors) => errors.entries(),
            Self::Shortlist(errors) => errors.entries(),
        }
    }
}

impl<C: Clock> FormValidator<C> {
    /// Run the rule set named by the submission
    pub fn validate_submission(&self, submission: &FormSubmission) -> FormReport {
        use FormSubmission as S;

        match submission {
            S::SignIn(form) => FormReport::SignIn(self.sign_in(form)),
            S::StudentSignUp(form) => FormReport::StudentSignUp(self.student_sign_up(form)),
            S::CompanySignUp(form) => FormReport::CompanySignUp(self.company_sign_up(form)),
            S::StudentCompleteProfile(form) => {
                FormReport::StudentCompleteProfile(self.student_complete_profile(form))
            }
            S::CompanyCompleteProfile(form) => {
                FormReport::CompanyCompleteProfile(self.company_complete_profile(form))
            }
            S::StudentEditProfile(form) => {
                FormReport::StudentEditProfile(self.student_edit_profile(form))
            }
            S::CompanyEditProfile(form) => {
                FormReport::CompanyEditProfile(self.company_edit_profile(form))
            }
            S::SocialLinks(form) => FormReport::SocialLinks(self.social_links(form)),
            S::PostInternship(form) => FormReport::PostInternship(self.internship(form)),
            S::EditInternship(form) => FormReport::EditInternship(self.internship(form)),
            S::ForgotPassword(form) => FormReport::ForgotPassword(self.forgot_password(&form.email)),
            S::ResetPassword(form) => FormReport::ResetPassword(self.reset_password(form)),
            S::Shortlist(form) => FormReport::Shortlist(self.shortlist(form)),
        }
    }
}

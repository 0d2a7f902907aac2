//! URL construction for the activities service endpoints.
//!
//! Activity names are free text (spaces, punctuation) and emails carry `@`
//! and sometimes `+`, so both are percent-encoded into the path and query.

pub(crate) fn activities_url(base: &str) -> String {
    format!("{base}/activities")
}

pub(crate) fn signup_url(base: &str, activity: &str, email: &str) -> String {
    format!(
        "{base}/activities/{}/signup?email={}",
        urlencoding::encode(activity),
        urlencoding::encode(email)
    )
}

pub(crate) fn unregister_url(base: &str, activity: &str, email: &str) -> String {
    format!(
        "{base}/activities/{}/unregister?email={}",
        urlencoding::encode(activity),
        urlencoding::encode(email)
    )
}

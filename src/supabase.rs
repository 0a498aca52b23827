/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Minimal Supabase REST client for the sign-up form.
//!
//! The site performs exactly one write: inserting a [`SignupRecord`] into the
//! `signups` table via PostgREST. Works on WASM (browser) and native targets
//! via [`reqwest`].

use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Serialize;
use thiserror::Error;

/// The PostgREST table that interest sign-ups land in.
const SIGNUPS_TABLE: &str = "signups";

/// Errors raised while submitting a sign-up.
///
/// The UI collapses all of these into a single "could not submit" message;
/// the distinctions only matter for diagnostics.
#[derive(Debug, Error)]
pub enum SignupError {
    /// A required form field was empty. No request is made.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// The site was built without Supabase credentials. No request is made.
    #[error("configuration error: {0}")]
    Config(String),

    /// Supabase rejected the insert (e.g. a constraint violation).
    #[error("sign-up rejected ({status}): {body}")]
    Rejected { status: u16, body: String },

    /// A network or transport error.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// Connection parameters for the hosted Supabase project.
#[derive(Debug, Clone, PartialEq)]
pub struct SupabaseConfig {
    url: String,
    anon_key: String,
}

impl SupabaseConfig {
    /// # Arguments
    ///
    /// * `url` - the project base URL, e.g. `"https://xyz.supabase.co"`
    /// * `anon_key` - the public anon key used for both `apikey` and bearer auth
    pub fn new(url: &str, anon_key: &str) -> Self {
        Self {
            url: url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
        }
    }
}

/// Raw text snapshot of the sign-up form controls at submit time.
///
/// Everything is optional here; required-field enforcement happens in
/// [`SignupRecord::from_form`] (and, before that, in the browser's native
/// `required` validation).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignupForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub university: String,
}

/// One row of the `signups` table. Immutable once constructed; there is no
/// update or delete path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignupRecord {
    pub first_name: String,
    pub last_name: Option<String>,
    pub email: String,
    pub phone: Option<String>,
    pub university: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl SignupRecord {
    /// Build a record from the form, stamping it with `created_at`.
    ///
    /// `first_name` and `email` must be non-empty after trimming; empty
    /// optional fields become `None` so they serialize as SQL `NULL`.
    pub fn from_form(form: &SignupForm, created_at: DateTime<Utc>) -> Result<Self, SignupError> {
        let first_name = required(&form.first_name, "first_name")?;
        let email = required(&form.email, "email")?;
        Ok(Self {
            first_name,
            last_name: optional(&form.last_name),
            email,
            phone: optional(&form.phone),
            university: optional(&form.university),
            created_at,
        })
    }
}

fn required(value: &str, field: &'static str) -> Result<String, SignupError> {
    let value = value.trim();
    if value.is_empty() {
        Err(SignupError::MissingField(field))
    } else {
        Ok(value.to_string())
    }
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// The narrow persistence seam: one insert, success or failure.
///
/// Futures here are not `Send` on WASM, so the trait deliberately carries no
/// auto-trait bounds.
#[allow(async_fn_in_trait)]
pub trait SignupStore {
    async fn insert(&self, record: &SignupRecord) -> Result<(), SignupError>;
}

/// A typed client for the Supabase PostgREST endpoint.
#[derive(Debug, Clone)]
pub struct SupabaseClient {
    config: SupabaseConfig,
    http: Client,
}

impl SupabaseClient {
    pub fn new(config: SupabaseConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    /// Build a client from the compile-time configuration, or fail with a
    /// [`SignupError::Config`] if the site was built without credentials.
    pub fn from_env() -> Result<Self, SignupError> {
        crate::config::supabase().map(Self::new).ok_or_else(|| {
            SignupError::Config("SUPABASE_URL or SUPABASE_ANON_KEY is not set".to_string())
        })
    }
}

impl SignupStore for SupabaseClient {
    /// Insert one record as a single-element batch.
    ///
    /// Calls `POST {url}/rest/v1/signups`. `Prefer: return=minimal` skips the
    /// row echo; we only care whether the insert was accepted.
    async fn insert(&self, record: &SignupRecord) -> Result<(), SignupError> {
        let url = format!("{}/rest/v1/{}", self.config.url, SIGNUPS_TABLE);
        let response = self
            .http
            .post(&url)
            .header("apikey", &self.config.anon_key)
            .header(
                reqwest::header::AUTHORIZATION,
                format!("Bearer {}", self.config.anon_key),
            )
            .header("Prefer", "return=minimal")
            .json(&[record])
            .send()
            .await?;

        let status = response.status().as_u16();
        match status {
            200..=299 => Ok(()),
            _ => {
                let body = response.text().await.unwrap_or_default();
                Err(SignupError::Rejected { status, body })
            }
        }
    }
}

/// The whole submission flow: validate, stamp, insert.
///
/// Exactly one insert is issued for a valid form; an invalid form never
/// reaches the store. Returns the record that was accepted so the caller can
/// surface the submitted name. No retry is attempted on failure; the user
/// re-submits manually.
pub async fn submit_signup<S: SignupStore>(
    store: &S,
    form: &SignupForm,
) -> Result<SignupRecord, SignupError> {
    let record = SignupRecord::from_form(form, Utc::now())?;
    store.insert(&record).await?;
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn filled_form() -> SignupForm {
        SignupForm {
            first_name: "Alex".to_string(),
            last_name: "Kim".to_string(),
            email: "alex@school.edu".to_string(),
            phone: "555-0100".to_string(),
            university: "Georgetown".to_string(),
        }
    }

    fn minimal_form() -> SignupForm {
        SignupForm {
            first_name: "Alex".to_string(),
            email: "alex@school.edu".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn builds_record_with_all_fields() {
        let now = Utc::now();
        let record = SignupRecord::from_form(&filled_form(), now).unwrap();
        assert_eq!(record.first_name, "Alex");
        assert_eq!(record.last_name.as_deref(), Some("Kim"));
        assert_eq!(record.email, "alex@school.edu");
        assert_eq!(record.phone.as_deref(), Some("555-0100"));
        assert_eq!(record.university.as_deref(), Some("Georgetown"));
        assert_eq!(record.created_at, now);
    }

    #[test]
    fn empty_optional_fields_become_null() {
        let record = SignupRecord::from_form(&minimal_form(), Utc::now()).unwrap();
        assert_eq!(record.last_name, None);
        assert_eq!(record.phone, None);
        assert_eq!(record.university, None);
    }

    #[test]
    fn missing_first_name_is_rejected() {
        let form = SignupForm {
            first_name: String::new(),
            ..filled_form()
        };
        match SignupRecord::from_form(&form, Utc::now()) {
            Err(SignupError::MissingField(field)) => assert_eq!(field, "first_name"),
            other => panic!("expected MissingField, got {other:?}"),
        }
    }

    #[test]
    fn whitespace_only_email_is_rejected() {
        let form = SignupForm {
            email: "   ".to_string(),
            ..filled_form()
        };
        match SignupRecord::from_form(&form, Utc::now()) {
            Err(SignupError::MissingField(field)) => assert_eq!(field, "email"),
            other => panic!("expected MissingField, got {other:?}"),
        }
    }

    #[test]
    fn required_fields_are_trimmed() {
        let form = SignupForm {
            first_name: "  Alex  ".to_string(),
            ..filled_form()
        };
        let record = SignupRecord::from_form(&form, Utc::now()).unwrap();
        assert_eq!(record.first_name, "Alex");
    }

    #[test]
    fn wire_body_is_a_single_element_batch() {
        let record = SignupRecord::from_form(&minimal_form(), Utc::now()).unwrap();
        let body = serde_json::to_value([&record]).unwrap();
        let rows = body.as_array().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["first_name"], "Alex");
        assert_eq!(rows[0]["email"], "alex@school.edu");
        // absent optionals are explicit nulls, not missing keys
        assert!(rows[0]["last_name"].is_null());
        assert!(rows[0]["phone"].is_null());
        assert!(rows[0]["university"].is_null());
        // chrono's serde serializes timestamps as RFC 3339 strings
        assert!(rows[0]["created_at"].as_str().unwrap().contains('T'));
    }

    /// In-memory store so the flow can be tested without a network.
    #[derive(Default)]
    struct FakeStore {
        inserted: RefCell<Vec<SignupRecord>>,
        reject: Option<(u16, &'static str)>,
    }

    impl SignupStore for FakeStore {
        async fn insert(&self, record: &SignupRecord) -> Result<(), SignupError> {
            self.inserted.borrow_mut().push(record.clone());
            match self.reject {
                Some((status, body)) => Err(SignupError::Rejected {
                    status,
                    body: body.to_string(),
                }),
                None => Ok(()),
            }
        }
    }

    #[tokio::test]
    async fn valid_form_issues_exactly_one_insert() {
        let store = FakeStore::default();
        let before = Utc::now();
        let record = submit_signup(&store, &filled_form()).await.unwrap();
        let after = Utc::now();

        let inserted = store.inserted.borrow();
        assert_eq!(inserted.len(), 1);
        assert_eq!(inserted[0], record);
        assert!(record.created_at >= before && record.created_at <= after);
    }

    #[tokio::test]
    async fn invalid_form_never_reaches_the_store() {
        let store = FakeStore::default();
        let form = SignupForm {
            email: String::new(),
            ..filled_form()
        };
        let result = submit_signup(&store, &form).await;
        assert!(matches!(result, Err(SignupError::MissingField("email"))));
        assert!(store.inserted.borrow().is_empty());
    }

    #[tokio::test]
    async fn store_rejection_propagates() {
        let store = FakeStore {
            reject: Some((409, "duplicate key value violates unique constraint")),
            ..Default::default()
        };
        let result = submit_signup(&store, &minimal_form()).await;
        match result {
            Err(SignupError::Rejected { status, .. }) => assert_eq!(status, 409),
            other => panic!("expected Rejected, got {other:?}"),
        }
        // the attempt was made; nothing is retried automatically
        assert_eq!(store.inserted.borrow().len(), 1);
    }
}

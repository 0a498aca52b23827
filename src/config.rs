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
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

//! Supabase connection parameters.
//!
//! These are read at compile time, please rebuild if you change a value.

use crate::supabase::SupabaseConfig;

pub const SUPABASE_URL: Option<&str> = std::option_env!("SUPABASE_URL");
pub const SUPABASE_ANON_KEY: Option<&str> = std::option_env!("SUPABASE_ANON_KEY");

/// Treat unset and blank values the same way, so `SUPABASE_URL=""` does not
/// count as configured.
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    match value {
        Some(v) if !v.trim().is_empty() => Some(v.trim()),
        _ => None,
    }
}

/// The Supabase connection parameters, if both were provided at build time.
pub fn supabase() -> Option<SupabaseConfig> {
    let url = non_blank(SUPABASE_URL)?;
    let anon_key = non_blank(SUPABASE_ANON_KEY)?;
    Some(SupabaseConfig::new(url, anon_key))
}

/// Log a single startup warning when the site was built without Supabase
/// credentials. The page still renders and the form still opens; only the
/// insert itself will fail.
pub fn warn_if_unconfigured() {
    if supabase().is_none() {
        leptos::logging::warn!(
            "SUPABASE_URL or SUPABASE_ANON_KEY is not set; sign-up submissions will fail"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_values_are_not_configuration() {
        assert_eq!(non_blank(None), None);
        assert_eq!(non_blank(Some("")), None);
        assert_eq!(non_blank(Some("   ")), None);
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        assert_eq!(
            non_blank(Some(" https://example.supabase.co ")),
            Some("https://example.supabase.co")
        );
    }
}

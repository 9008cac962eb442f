//! `${VAR}` references in configuration strings.
//!
//! Only braced references are expanded:
//! - `${VAR}` - value of VAR, an error if unset
//! - `${VAR:-default}` - value of VAR, or `default` if unset
//!
//! Any other `$` (`$version`, `$$`, an unclosed `${`) is kept as written.

use std::borrow::Cow;
use std::env::VarError;

use crate::SettingsError;

/// Expand the braced references in `value`; `field` names it in errors.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, SettingsError> {
    let mut expanded = String::with_capacity(value.len());
    let mut rest = value;
    while let Some(start) = rest.find("${") {
        let Some(close) = rest[start..].find('}') else {
            break;
        };
        let end = start + close + 1;
        expanded.push_str(&rest[..start]);
        expanded.push_str(&expand_reference(&rest[start..end], field)?);
        rest = &rest[end..];
    }
    expanded.push_str(rest);
    Ok(expanded)
}

/// Expand a single `${...}` reference.
fn expand_reference(reference: &str, field: &str) -> Result<String, SettingsError> {
    shellexpand::env_with_context(reference, |name| std::env::var(name).map(Some))
        .map(Cow::into_owned)
        .map_err(|err| SettingsError::EnvVar {
            field: field.to_owned(),
            message: match err.cause {
                VarError::NotPresent => format!("${{{}}} not set", err.var_name),
                VarError::NotUnicode(_) => format!("${{{}}} is not valid Unicode", err.var_name),
            },
        })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_base_from_env() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("POLYDOC_TEST_BASE", "/yalantinglibs/");
        }
        let base = expand_env("${POLYDOC_TEST_BASE}", "site.base").unwrap();
        assert_eq!(base, "/yalantinglibs/");
        unsafe {
            std::env::remove_var("POLYDOC_TEST_BASE");
        }
    }

    #[test]
    fn test_out_dir_falls_back_to_default() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("POLYDOC_TEST_UNSET_OUT");
        }
        let out_dir = expand_env("${POLYDOC_TEST_UNSET_OUT:-../docs}", "site.out_dir").unwrap();
        assert_eq!(out_dir, "../docs");
    }

    #[test]
    fn test_unset_var_names_field_and_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("POLYDOC_TEST_MISSING");
        }
        let err = expand_env("${POLYDOC_TEST_MISSING}", "theme.issues_url").unwrap_err();
        assert!(matches!(err, SettingsError::EnvVar { .. }));
        assert_eq!(
            err.to_string(),
            "Environment variable error in theme.issues_url: ${POLYDOC_TEST_MISSING} not set"
        );
    }

    #[test]
    fn test_reference_inside_issues_url() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("POLYDOC_TEST_ORG", "alibaba");
        }
        let url = expand_env(
            "https://github.com/${POLYDOC_TEST_ORG}/yalantinglibs/issues",
            "theme.issues_url",
        )
        .unwrap();
        assert_eq!(url, "https://github.com/alibaba/yalantinglibs/issues");
        unsafe {
            std::env::remove_var("POLYDOC_TEST_ORG");
        }
    }

    #[test]
    fn test_plain_string_unchanged() {
        assert_eq!(expand_env("/docs/", "site.base").unwrap(), "/docs/");
    }

    #[test]
    fn test_unbraced_dollar_kept() {
        assert_eq!(
            expand_env("/docs/$version/", "site.base").unwrap(),
            "/docs/$version/"
        );
    }

    #[test]
    fn test_unbraced_dollar_kept_next_to_reference() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("POLYDOC_TEST_MIXED_ORG", "alibaba");
        }
        let base = expand_env("/${POLYDOC_TEST_MIXED_ORG}/$version/", "site.base").unwrap();
        assert_eq!(base, "/alibaba/$version/");
        unsafe {
            std::env::remove_var("POLYDOC_TEST_MIXED_ORG");
        }
    }

    #[test]
    fn test_unclosed_reference_kept() {
        assert_eq!(
            expand_env("/docs/${version", "site.base").unwrap(),
            "/docs/${version"
        );
    }
}

// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Decide whether color output should be on by default, based on environment
//! variables. CI systems usually capture output into log viewers that show escape
//! sequences as garbage, and <https://no-color.org/> asks for a global opt-out.

use std::env;

/// When this variable is present (with any value) the probe is skipped and color
/// output is enabled. The key is compared ignoring ASCII case.
pub const DISABLE_ENVIRONMENT_DETECTION_ENV_VAR: &str = "PASTEL_DISABLE_ENVIRONMENT_DETECTION";

/// Is color output allowed by the current process environment? See
/// [`colors_enabled_by_env_vars`] for the rules.
#[must_use]
pub fn colors_enabled_by_environment() -> bool {
    colors_enabled_by_env_vars(env::vars_os().map(|(key, value)| {
        (
            key.to_string_lossy().into_owned(),
            value.to_string_lossy().into_owned(),
        )
    }))
}

/// Apply the detection rules to the given `(key, value)` pairs. Keys are compared
/// ignoring ASCII case.
///
/// Colors are disabled if any variable matches one of these:
///
/// | Rule                                  | Set by              |
/// |:--------------------------------------|:--------------------|
/// | key starts with `BITBUCKET_`          | Bitbucket Pipelines |
/// | key starts with `TEAMCITY_`           | `TeamCity`          |
/// | key is `NO_COLOR`                     | the user            |
/// | key starts with `GITHUB_ACTION`       | GitHub Actions      |
/// | key is `CI`, value is `true` or `1`   | most CI systems     |
/// | key starts with `JENKINS_URL`         | Jenkins             |
///
/// [`DISABLE_ENVIRONMENT_DETECTION_ENV_VAR`] trumps all of the above.
#[must_use]
pub fn colors_enabled_by_env_vars<K, V>(vars: impl IntoIterator<Item = (K, V)>) -> bool
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut disabling_var = None;

    for (key, value) in vars {
        let key = key.as_ref();
        if key.eq_ignore_ascii_case(DISABLE_ENVIRONMENT_DETECTION_ENV_VAR) {
            tracing::debug!("environment detection disabled");
            return true;
        }
        if disabling_var.is_none() && disables_colors(key, value.as_ref()) {
            disabling_var = Some(key.to_string());
        }
    }

    match disabling_var {
        Some(key) => {
            tracing::debug!(%key, "color output disabled by environment variable");
            false
        }
        None => true,
    }
}

#[rustfmt::skip]
fn disables_colors(key: &str, value: &str) -> bool {
    starts_with_ignore_ascii_case(key, "BITBUCKET_")
        || starts_with_ignore_ascii_case(key, "TEAMCITY_")
        || key.eq_ignore_ascii_case("NO_COLOR")
        || starts_with_ignore_ascii_case(key, "GITHUB_ACTION")
        || (key.eq_ignore_ascii_case("CI")
            && (value.eq_ignore_ascii_case("true") || value == "1"))
        || starts_with_ignore_ascii_case(key, "JENKINS_URL")
}

fn starts_with_ignore_ascii_case(it: &str, prefix: &str) -> bool {
    it.len() >= prefix.len()
        && it.as_bytes()[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes())
}

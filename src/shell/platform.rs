//! Environment signals that change how the doctor renders.

/// Environment variable that forces non-interactive rendering.
pub const NON_INTERACTIVE_ENV: &str = "DEVDOCTOR_NON_INTERACTIVE";

/// Check if running in a CI environment.
///
/// Checks common CI environment variables: `CI`, `GITHUB_ACTIONS`,
/// `GITLAB_CI`, `CIRCLECI`, `TRAVIS`, `JENKINS_URL`.
pub fn is_ci() -> bool {
    std::env::var("CI").is_ok()
        || std::env::var("GITHUB_ACTIONS").is_ok()
        || std::env::var("GITLAB_CI").is_ok()
        || std::env::var("CIRCLECI").is_ok()
        || std::env::var("TRAVIS").is_ok()
        || std::env::var("JENKINS_URL").is_ok()
}

/// Whether the environment asks for non-interactive behavior.
///
/// Presence of [`NON_INTERACTIVE_ENV`] is enough, whatever its value.
pub fn is_non_interactive_env() -> bool {
    std::env::var_os(NON_INTERACTIVE_ENV).is_some() || is_ci()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_ci_does_not_panic() {
        let _ = is_ci();
    }

    #[test]
    fn ci_implies_non_interactive() {
        if is_ci() {
            assert!(is_non_interactive_env());
        }
    }
}

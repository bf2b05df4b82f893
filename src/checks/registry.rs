//! The ordered table of monitored tools.
//!
//! Registry order is report order. Each tool contributes an existence row
//! when it applies on the host platform, followed by its supplementary
//! checks.

use super::check::Check;
use super::platform::{applies_on, Platform};
use super::probes::CustomProbe;
use super::version::VersionedTool;

/// One monitored tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCheckSpec {
    pub tool_name: String,
    /// Platform the tool is required on; `None` means everywhere.
    pub required_platform: Option<Platform>,
    /// Whether the existence check runs on this host. Fixed when the
    /// registry is built.
    pub applies_on_platform: bool,
    /// Checks run after the existence check, in order.
    pub supplementary_checks: Vec<Check>,
}

impl ToolCheckSpec {
    pub fn new(tool_name: &str) -> Self {
        Self {
            tool_name: tool_name.to_string(),
            required_platform: None,
            applies_on_platform: true,
            supplementary_checks: Vec::new(),
        }
    }

    /// Restrict the existence check to one platform.
    pub fn required_on(mut self, platform: Platform) -> Self {
        self.required_platform = Some(platform);
        self
    }

    pub fn with_check(mut self, check: Check) -> Self {
        self.supplementary_checks.push(check);
        self
    }

    /// Existence check for this tool.
    pub fn existence_check(&self) -> Check {
        Check::existence(&self.tool_name)
    }
}

/// Ordered tool registry.
#[derive(Debug, Clone)]
pub struct CheckRegistry {
    specs: Vec<ToolCheckSpec>,
}

impl CheckRegistry {
    /// The built-in registry, evaluated for `host`.
    pub fn new(host: Option<Platform>) -> Self {
        Self::from_specs(builtin_specs(), host)
    }

    /// Registry over custom specs, evaluated for `host`.
    pub fn from_specs(specs: Vec<ToolCheckSpec>, host: Option<Platform>) -> Self {
        let specs = specs
            .into_iter()
            .map(|mut spec| {
                spec.applies_on_platform = applies_on(spec.required_platform, host);
                spec
            })
            .collect();
        Self { specs }
    }

    pub fn iter(&self) -> impl Iterator<Item = &ToolCheckSpec> {
        self.specs.iter()
    }

    /// Look up a tool by name.
    pub fn get(&self, tool_name: &str) -> Option<&ToolCheckSpec> {
        self.specs.iter().find(|s| s.tool_name == tool_name)
    }

    pub fn tool_names(&self) -> Vec<&str> {
        self.specs.iter().map(|s| s.tool_name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

fn builtin_specs() -> Vec<ToolCheckSpec> {
    vec![
        ToolCheckSpec::new("xcode-select").required_on(Platform::MacOS),
        ToolCheckSpec::new("brew").required_on(Platform::MacOS),
        ToolCheckSpec::new("make"),
        ToolCheckSpec::new("ssh").with_check(Check::Custom(CustomProbe::GithubSsh)),
        ToolCheckSpec::new("jq"),
        ToolCheckSpec::new("pgrep"),
        ToolCheckSpec::new("peco"),
        ToolCheckSpec::new("pipx"),
        ToolCheckSpec::new("gh")
            .with_check(Check::version_floor(VersionedTool::Gh, "2.0.0"))
            .with_check(Check::Custom(CustomProbe::GhAuthLogin)),
        ToolCheckSpec::new("docker")
            .with_check(Check::version_floor(VersionedTool::Docker, "20.10.7"))
            .with_check(Check::version_floor(VersionedTool::DockerCompose, "1.29.2"))
            .with_check(Check::Custom(CustomProbe::DockerDaemon)),
        ToolCheckSpec::new("mutagen")
            .with_check(Check::version_floor(VersionedTool::Mutagen, "0.13.0")),
        ToolCheckSpec::new("gcloud")
            .with_check(Check::version_floor(VersionedTool::Gcloud, "379.0.0"))
            .with_check(Check::Custom(CustomProbe::DockerCredHelpers))
            .with_check(Check::Custom(CustomProbe::GcloudApplicationCredentials))
            .with_check(Check::Custom(CustomProbe::ResourceManagerApi)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_order_is_fixed() {
        let registry = CheckRegistry::new(Some(Platform::MacOS));
        assert_eq!(
            registry.tool_names(),
            vec![
                "xcode-select",
                "brew",
                "make",
                "ssh",
                "jq",
                "pgrep",
                "peco",
                "pipx",
                "gh",
                "docker",
                "mutagen",
                "gcloud"
            ]
        );
    }

    #[test]
    fn macos_tools_skipped_on_linux() {
        let registry = CheckRegistry::new(Some(Platform::Linux));
        assert!(!registry.get("xcode-select").unwrap().applies_on_platform);
        assert!(!registry.get("brew").unwrap().applies_on_platform);
        assert!(registry.get("make").unwrap().applies_on_platform);
    }

    #[test]
    fn macos_tools_apply_on_macos() {
        let registry = CheckRegistry::new(Some(Platform::MacOS));
        assert!(registry.iter().all(|s| s.applies_on_platform));
    }

    #[test]
    fn unknown_host_applies_everything() {
        let registry = CheckRegistry::new(None);
        assert!(registry.iter().all(|s| s.applies_on_platform));
    }

    #[test]
    fn supplementary_checks_keep_declared_order() {
        let registry = CheckRegistry::new(Some(Platform::Linux));
        let gcloud = registry.get("gcloud").unwrap();
        let conditions: Vec<&str> = gcloud
            .supplementary_checks
            .iter()
            .map(|c| c.condition())
            .collect();
        assert_eq!(
            conditions,
            vec![
                "meets version requirement",
                "Artifact Registry configured",
                "default credentials set",
                "Resource Manager API enabled"
            ]
        );

        let docker = registry.get("docker").unwrap();
        assert_eq!(
            docker.supplementary_checks[1],
            Check::version_floor(VersionedTool::DockerCompose, "1.29.2")
        );
    }

    #[test]
    fn from_specs_evaluates_platform() {
        let specs = vec![
            ToolCheckSpec::new("only-linux").required_on(Platform::Linux),
            ToolCheckSpec::new("anywhere"),
        ];
        let registry = CheckRegistry::from_specs(specs, Some(Platform::Windows));

        assert_eq!(registry.len(), 2);
        assert!(!registry.get("only-linux").unwrap().applies_on_platform);
        assert!(registry.get("anywhere").unwrap().applies_on_platform);
        assert!(registry.get("missing").is_none());
    }

    #[test]
    fn existence_check_names_tool() {
        let spec = ToolCheckSpec::new("jq");
        assert_eq!(spec.existence_check(), Check::existence("jq"));
    }
}

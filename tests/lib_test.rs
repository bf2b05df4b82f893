//! Library integration tests.

use devdoctor::checks::{
    Check, CheckContext, CheckRegistry, CustomProbe, MockHost, Platform, ToolCheckSpec, Verdict,
    VersionedTool,
};
use devdoctor::config::{CloudSettings, ConfigPaths};
use devdoctor::report::{Pacing, ReportRunner};
use devdoctor::ui::MockSurface;
use devdoctor::DoctorError;
use std::path::Path;

fn paths() -> ConfigPaths {
    ConfigPaths::from_roots(
        Path::new("/home/dev"),
        Path::new("/home/dev/.config"),
        Path::new("/home/dev/.config/devdoctor"),
    )
}

#[test]
fn error_types_are_public() {
    let err = DoctorError::VersionParse {
        tool: "gh".into(),
        output: "".into(),
    };
    assert!(err.to_string().contains("gh"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> devdoctor::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use devdoctor::cli::{Cli, Commands};

    let cli = Cli::parse_from(["devdoctor", "doctor", "--stage", "prod"]);
    assert!(matches!(cli.command, Some(Commands::Doctor(_))));
}

#[test]
fn custom_registry_runs_through_runner() {
    let specs = vec![
        ToolCheckSpec::new("terraform").required_on(Platform::MacOS),
        ToolCheckSpec::new("gh")
            .with_check(Check::version_floor(VersionedTool::Gh, "2.0.0"))
            .with_check(Check::Custom(CustomProbe::GhAuthLogin)),
    ];
    let registry = CheckRegistry::from_specs(specs, Some(Platform::Linux));

    let host = MockHost::new()
        .with_executable("gh", "/usr/bin/gh")
        .with_command(VersionedTool::Gh.version_command(), 0, "2.10.0\n", "")
        .with_command(
            "gh auth status",
            1,
            "",
            "You are not logged into any GitHub hosts. Run gh auth login to authenticate.",
        );
    let paths = paths();
    let cloud = CloudSettings::default();
    let ctx = CheckContext {
        host: &host,
        platform: Some(Platform::Linux),
        paths: &paths,
        cloud: &cloud,
    };

    let mut surface = MockSurface::new();
    let summary = ReportRunner::new(registry)
        .with_pacing(Pacing::none())
        .run(&ctx, &mut surface);

    assert!(!surface.has_row("terraform", "is installed"));
    assert_eq!(surface.rows().len(), 3);
    assert_eq!(summary.passed, 2);
    assert_eq!(summary.failed, 1);

    let version = surface.row("gh", "meets version requirement").unwrap();
    assert_eq!(version.detail, "2.10.0 >=2.0.0");

    let login = surface.row("gh", "is logged in").unwrap();
    assert_eq!(login.verdict, Verdict::Fail);
    assert!(login.detail.contains("gh auth login"));
}

#[test]
fn config_missing_falls_back_to_placeholders() {
    let temp = tempfile::TempDir::new().unwrap();
    let root = temp.path().join(".config");
    let paths = ConfigPaths::from_roots(temp.path(), &root, &root.join("devdoctor"));

    let cloud = CloudSettings::resolve(&paths, Default::default());
    assert_eq!(cloud, CloudSettings::default());
}
